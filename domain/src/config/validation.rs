//! Structured configuration issues.
//!
//! Config loaders report problems as [`ConfigIssue`]s instead of failing on
//! the first one, so the user sees everything wrong with a file at once.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the run cannot start.
    Error,
    /// Non-fatal: the run works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `models` is missing or empty.
    NoModels,
    /// A required field of a model entry is missing or blank.
    MissingField { index: usize, field: String },
    /// `execution_mode` holds an unknown value.
    InvalidExecutionMode { index: usize, value: String },
    /// `async` and `execution_mode` disagree.
    ConflictingMode { index: usize },
    /// Two entries share a model name.
    DuplicateModel { name: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = ConfigIssue::error(ConfigIssueCode::NoModels, "no models configured");
        assert_eq!(issue.to_string(), "error: no models configured");
        assert!(issue.is_error());
    }

    #[test]
    fn test_warning_is_not_error() {
        let issue = ConfigIssue::warning(
            ConfigIssueCode::DuplicateModel {
                name: "gpt-4o".to_string(),
            },
            "duplicate",
        );
        assert!(!issue.is_error());
        assert_eq!(issue.severity, Severity::Warning);
    }
}
