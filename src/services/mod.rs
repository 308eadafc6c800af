//! Business Services
//!
//! This module contains the catalog's business logic:
//!
//! - `validation` - Field-presence checks and the genre reference validator
//! - `GenreService` - Orchestration for the five genre operations
//! - `MovieService` - Orchestration for the six movie operations, running the
//!   validated write path (field checks + referential check) before persisting
//!
//! Services sit between the HTTP layer and the store traits. They receive
//! already percent-decoded input, accumulate validation issues into a single
//! [`CatalogError::Validation`], and delegate persistence to the stores.

pub mod error;
pub mod genre_service;
pub mod movie_service;
pub mod validation;

pub use error::{CatalogError, ValidationIssue};
pub use genre_service::GenreService;
pub use movie_service::MovieService;
pub use validation::GenreReferenceValidator;
