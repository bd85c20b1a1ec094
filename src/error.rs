//! Error types for table generation.

use thiserror::Error;

/// Everything that can stop a table from being produced.
///
/// Generation either succeeds completely or fails with one of these;
/// there is no partial output.
#[derive(Debug, Error)]
pub enum TableError {
    /// The input does not describe a valid season.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// One identifier was used for two differently named teams.
    #[error("team identifier `{identifier}` is used for both `{first}` and `{other}`")]
    AmbiguousIdentifier {
        identifier: String,
        first: String,
        other: String,
    },

    /// The points rules make no sense.
    #[error("invalid points rules: {0}")]
    InvalidRules(String),

    /// The finished table could not be serialized.
    #[error("failed to serialize table: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::MalformedInput(err.to_string())
    }
}

/// Result alias for table generation.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_maps_to_malformed_input() {
        let err: TableError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, TableError::MalformedInput(_)));
    }

    #[test]
    fn test_ambiguous_identifier_message() {
        let err = TableError::AmbiguousIdentifier {
            identifier: "manutd".to_string(),
            first: "Manchester United FC".to_string(),
            other: "Man Utd".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("manutd"));
        assert!(msg.contains("Man Utd"));
    }
}
