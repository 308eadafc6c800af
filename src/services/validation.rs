//! Request Validation
//!
//! Validation is an ordered sequence of independent checks whose failures
//! accumulate into one combined issue list; a request with an empty title
//! *and* an unknown genre reports both problems in a single 400 response.
//!
//! The one non-trivial check lives here: the **genre reference validator**,
//! which confirms that every genre name on a movie write exists in the genre
//! collection. The store enforces no foreign keys, so this is the only
//! referential-integrity guard in the system.

use crate::db::{DatabaseError, GenreStore};
use crate::models::{GenreInput, MovieInput};
use crate::services::error::ValidationIssue;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

pub const GENRE_NAME_REQUIRED: &str = "Genre name required";
pub const MOVIE_TITLE_REQUIRED: &str = "Movie title required";
pub const MOVIE_DESCRIPTION_REQUIRED: &str = "Movie description required";
pub const MOVIE_GENRE_REQUIRED: &str = "Movie genre required";
pub const GENRE_LIST_SHAPE: &str = "Genre must be an array of strings";

/// Check the genre create/replace payload: name must be non-empty
pub fn validate_genre_input(input: &GenreInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if input.name.trim().is_empty() {
        issues.push(ValidationIssue::new("name", GENRE_NAME_REQUIRED));
    }
    issues
}

/// Check the scalar movie fields: title and description must be non-empty
///
/// The genre list is checked separately via [`parse_genre_list`] and
/// [`GenreReferenceValidator`] so its issues land in the same combined list.
pub fn validate_movie_fields(input: &MovieInput) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if input.title.trim().is_empty() {
        issues.push(ValidationIssue::new("title", MOVIE_TITLE_REQUIRED));
    }
    if input.description.trim().is_empty() {
        issues.push(ValidationIssue::new("description", MOVIE_DESCRIPTION_REQUIRED));
    }
    issues
}

/// Shape classification for the raw `genre` payload value
#[derive(Debug, Clone, PartialEq)]
pub enum GenreListShape {
    /// Field absent, null, or an empty array
    Missing,
    /// Present but not an array of strings (fixed-message failure, distinct
    /// from the missing-names case)
    Malformed,
    /// A non-empty ordered list of candidate genre names
    Names(Vec<String>),
}

/// Classify the raw `genre` value from a movie payload
///
/// The payload keeps this field as raw JSON precisely so that a wrong shape
/// is a validation failure here, not a deserialization error upstream.
pub fn parse_genre_list(value: &Value) -> GenreListShape {
    match value {
        Value::Null => GenreListShape::Missing,
        Value::Array(items) => {
            if items.is_empty() {
                return GenreListShape::Missing;
            }
            let mut names = Vec::with_capacity(items.len());
            for item in items {
                match item.as_str() {
                    Some(name) => names.push(name.to_string()),
                    None => return GenreListShape::Malformed,
                }
            }
            GenreListShape::Names(names)
        }
        _ => GenreListShape::Malformed,
    }
}

/// Referential validator for movie genre lists
///
/// Given an ordered list of candidate genre names, queries the genre store
/// once for all candidates and computes the set difference: candidates with
/// no matching genre record.
///
/// # Known Race
///
/// The check is advisory, not transactional: a genre can be deleted between
/// this query and the subsequent movie write, leaving a dangling name in the
/// movie's genre list. That window is an accepted design limitation of the
/// denormalized name-list model, inherent to checking referential integrity
/// at the application layer without cross-collection transactions.
#[derive(Clone)]
pub struct GenreReferenceValidator {
    genres: Arc<dyn GenreStore>,
}

impl GenreReferenceValidator {
    pub fn new(genres: Arc<dyn GenreStore>) -> Self {
        Self { genres }
    }

    /// Confirm every candidate name exists in the genre collection
    ///
    /// Returns `Ok(None)` when all names resolve, or `Ok(Some(issue))`
    /// listing the missing names in candidate order. A store failure is a
    /// hard error, not a validation issue.
    pub async fn check(
        &self,
        names: &[String],
    ) -> Result<Option<ValidationIssue>, DatabaseError> {
        let existing: HashSet<String> = self
            .genres
            .find_genres_by_names(names)
            .await?
            .into_iter()
            .map(|genre| genre.name)
            .collect();

        let missing: Vec<&str> = names
            .iter()
            .filter(|name| !existing.contains(*name))
            .map(|name| name.as_str())
            .collect();

        if missing.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ValidationIssue::new(
                "genre",
                format!("The following genres do not exist: {}", missing.join(", ")),
            )))
        }
    }
}
