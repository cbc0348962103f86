//! Error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecursionError {
    #[error("Invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },
}

impl RecursionError {
    pub fn invalid_argument(name: &'static str, value: impl Into<i64>, reason: &'static str) -> Self {
        RecursionError::InvalidArgument {
            name,
            value: value.into(),
            reason,
        }
    }
}

/// Result alias used by every fallible operation in the crate
pub type Result<T> = std::result::Result<T, RecursionError>;
