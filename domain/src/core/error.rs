//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is a configuration error: it is raised while building the
/// dispatch plan, before any backend is queried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No models configured")]
    NoBackends,

    #[error("models[{index}]: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Backend `{0}` is configured more than once")]
    DuplicateBackend(String),

    #[error("Invalid execution mode: {0}")]
    InvalidExecutionMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = DomainError::MissingField {
            index: 2,
            field: "api_key",
        };
        assert_eq!(
            error.to_string(),
            "models[2]: missing required field `api_key`"
        );
    }
}
