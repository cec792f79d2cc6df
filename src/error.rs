//! Engine error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    /// The config failed validation. Carries every reason so the caller
    /// can render the full list of corrective messages at once.
    #[error("invalid comparison config: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),
}

impl ComparisonError {
    pub fn reasons(&self) -> &[String] {
        match self {
            ComparisonError::InvalidConfig(reasons) => reasons,
        }
    }
}
