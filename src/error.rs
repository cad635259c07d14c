use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The generic comparison entry point was handed a value of another type.
    #[error("object is not a {expected}")]
    TypeMismatch { expected: &'static str },

    #[error("'{token}' is not a valid protocol")]
    InvalidProtocol {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
