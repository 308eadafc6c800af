//! Genre Data Structures

use serde::{Deserialize, Serialize};

/// A genre record
///
/// # Fields
///
/// - `id`: Store-assigned identifier (UUID), immutable after creation
/// - `name`: Genre name, the natural lookup key
///
/// Name uniqueness is assumed but not enforced by the store; duplicate names
/// make lookups-by-name non-deterministic, which callers accept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

/// Request payload for creating or replacing a genre
///
/// `name` defaults to an empty string when absent so that a missing field is
/// reported as a validation issue, not a malformed-body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct GenreInput {
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults_missing_name_to_empty() {
        let input: GenreInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.name, "");
    }

    #[test]
    fn test_genre_serializes_flat() {
        let genre = Genre {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Thriller".to_string(),
        };
        let json = serde_json::to_value(&genre).unwrap();
        assert_eq!(json["name"], "Thriller");
        assert_eq!(json["id"], "550e8400-e29b-41d4-a716-446655440000");
    }
}
