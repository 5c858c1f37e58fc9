//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::EditError;

/// Application errors wrap domain errors and add session-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Edit(#[from] EditError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("store operation failed: {context}")]
    Store {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
