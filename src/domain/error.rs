//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent generation invariant violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("name pool holds {available} usable names, sampling needs {required}")]
    InsufficientPool { available: usize, required: usize },
}

pub type DomainResult<T> = Result<T, DomainError>;
