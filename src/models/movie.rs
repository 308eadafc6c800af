//! Movie Data Structures
//!
//! The `genre` field on a movie is a denormalized, ordered list of genre
//! *names* (not ids). It records an association for lookup purposes only,
//! never ownership: deleting a genre does not cascade to movies that
//! reference it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A movie record
///
/// # Fields
///
/// - `id`: Store-assigned identifier (UUID), immutable after creation
/// - `title`: Movie title, the natural lookup key
/// - `description`: Free-text description, required
/// - `release_date`: Defaulted to creation time when the caller omits it
/// - `genre`: Ordered list of genre names; every element referenced an
///   existing genre at write time (weak reference, see module docs)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub description: String,
    pub release_date: DateTime<Utc>,
    pub genre: Vec<String>,
}

/// Request payload for creating or replacing a movie
///
/// Required fields use serde defaults so their absence surfaces as a
/// validation issue. `genre` is kept as raw JSON: the validator distinguishes
/// a missing list from a value of the wrong shape, which a typed `Vec<String>`
/// field would collapse into a single deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub release_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub genre: Value,
}

/// A fully validated movie ready for persistence
///
/// Produced by the service layer after validation has passed and the
/// release-date default has been applied. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub release_date: DateTime<Utc>,
    pub genre: Vec<String>,
}

/// A fully validated replacement for an existing movie
///
/// Used by update-by-title. `release_date` is `None` when the caller omitted
/// it, in which case the stored value is preserved: the creation-time default
/// is applied once, at creation, never re-applied on update.
#[derive(Debug, Clone)]
pub struct MovieUpdate {
    pub title: String,
    pub description: String,
    pub release_date: Option<DateTime<Utc>>,
    pub genre: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_defaults_for_missing_fields() {
        let input: MovieInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.title, "");
        assert_eq!(input.description, "");
        assert!(input.release_date.is_none());
        assert!(input.genre.is_null());
    }

    #[test]
    fn test_input_accepts_arbitrary_genre_shape() {
        let input: MovieInput =
            serde_json::from_value(json!({ "title": "Dune", "genre": "SciFi" })).unwrap();
        assert_eq!(input.genre, json!("SciFi"));
    }

    #[test]
    fn test_movie_uses_camel_case_release_date() {
        let movie = Movie {
            id: "id-1".to_string(),
            title: "Dune".to_string(),
            description: "Spice".to_string(),
            release_date: Utc::now(),
            genre: vec!["SciFi".to_string()],
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert!(json.get("releaseDate").is_some());
        assert!(json.get("release_date").is_none());
    }
}
