//! Configuration issues detected at load time.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but some feature will be unavailable.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A numeric setting that must be positive is zero.
    ZeroValue { field: String },
    /// A required name is empty.
    EmptyValue { field: String },
    /// No API key is available for the generative-text backend.
    MissingApiKey { env_var: String },
}

/// A detected issue in the loaded configuration.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let e = ConfigIssue::error(
            ConfigIssueCode::ZeroValue {
                field: "generator.timeout_secs".to_string(),
            },
            "timeout must be positive",
        );
        assert!(e.is_error());

        let w = ConfigIssue::warning(
            ConfigIssueCode::MissingApiKey {
                env_var: "GEMINI_API_KEY".to_string(),
            },
            "no key",
        );
        assert!(!w.is_error());
        assert_eq!(w.severity, Severity::Warning);
    }
}
