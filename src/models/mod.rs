//! Data Models
//!
//! Core data structures for the catalog:
//!
//! - `Genre` - A genre record, looked up by its `name` natural key
//! - `Movie` - A movie record, looked up by its `title` natural key, carrying
//!   a denormalized list of genre names
//!
//! Request payload types (`GenreInput`, `MovieInput`) live next to the records
//! they create. Payload fields use serde defaults so that a missing required
//! field becomes a structured validation failure instead of a deserialization
//! rejection.

mod genre;
mod movie;

pub use genre::{Genre, GenreInput};
pub use movie::{Movie, MovieInput, MovieUpdate, NewMovie};
