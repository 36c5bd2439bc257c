//! Validation error type

use thiserror::Error;

/// Rejected caller input
///
/// Produced before any network attempt; `field` names the offending
/// parameter so the CLI can point at the right flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Which parameter was rejected ("date" or "region")
    pub field: &'static str,
    /// Why it was rejected
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for a field
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}
