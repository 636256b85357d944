//! # Errors
//! Errors emitted by exosky_core

use std::{error, fmt, io};

/// exosky specific result.
pub type ExoskyResult<T> = Result<T, Error>;

/// Possible Errors which may be raised by this crate.
#[derive(Debug, Clone)]
pub enum Error {
    /// Input or variable exceeded expected or allowed bounds.
    ValueError(String),

    /// Error related to IO.
    IOError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ValueError(s) => {
                write!(f, "{}", s)
            }
            Error::IOError(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::IOError(error.to_string())
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(value: std::num::ParseFloatError) -> Self {
        Error::IOError(value.to_string())
    }
}
