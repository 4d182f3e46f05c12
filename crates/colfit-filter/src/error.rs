//! Error types for the filter crate.

use thiserror::Error;

/// Errors that can occur when parsing exclusion rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The rule string does not follow the rule grammar.
    #[error("invalid rule {rule:?}: {reason}")]
    InvalidRule { rule: String, reason: String },
}

impl RuleError {
    pub(crate) fn invalid(rule: &str, reason: impl Into<String>) -> Self {
        RuleError::InvalidRule {
            rule: rule.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, RuleError>;
