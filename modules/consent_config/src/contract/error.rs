//! Errors raised while binding and checking consent settings

use crate::domain::selection::ConsentBackend;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConsentConfigError {
    /// A source could not be read or a value did not match its field type
    #[error("Failed to bind consent settings: {0}")]
    Binding(#[from] figment::Error),

    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// One or more validation rules failed
    #[error("Invalid consent settings: {}", .errors.join("; "))]
    Invalid { errors: Vec<String> },

    #[error("More than one consent storage backend is configured: {}", format_backends(.0))]
    AmbiguousBackend(Vec<ConsentBackend>),

    #[error("Consent settings are already initialized")]
    AlreadyInitialized,

    #[error("Consent settings are not initialized")]
    NotInitialized,
}

fn format_backends(backends: &[ConsentBackend]) -> String {
    backends
        .iter()
        .map(|b| b.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConsentConfigError::AmbiguousBackend(vec![
            ConsentBackend::Rest,
            ConsentBackend::MongoDb,
        ]);
        assert_eq!(
            err.to_string(),
            "More than one consent storage backend is configured: rest, mongo"
        );

        let err = ConsentConfigError::Invalid {
            errors: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.to_string(), "Invalid consent settings: a; b");
    }
}
