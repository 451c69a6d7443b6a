use crate::transport::TransportError;
use std::num::ParseIntError;
use thiserror::Error;

/// Failure of an object operation.
///
/// Validation errors are raised before any request goes out. Format errors
/// come from a response that was received but could not be read. Transport
/// errors are passed through from the collaborator unchanged.
#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("{0}")]
    Validation(String),
    #[error("header `{header}` has non-numeric value `{value}`")]
    Format {
        header: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ObjectError {
    /// Shortcut for a validation failure.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type ObjectResult<T> = Result<T, ObjectError>;
