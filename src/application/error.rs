//! Application-level errors (wraps domain errors)

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("word list not found: {0}")]
    WordsNotFound(PathBuf),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// The `io::ErrorKind` behind an `OperationFailed`, when the source
    /// is an I/O error. Used to map failures onto exit codes.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::OperationFailed { source, .. } => {
                source.downcast_ref::<io::Error>().map(io::Error::kind)
            }
            _ => None,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
