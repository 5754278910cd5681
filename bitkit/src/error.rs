//! Error type for operations that touch the operating system

use bitkit_core::BitkitError;
use std::fmt;
use std::io;

/// Errors from the std layer
#[derive(Debug)]
pub enum Error {
    /// A core operation failed
    Core(BitkitError),
    /// Reading a source or mapping a file failed
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Core(err) => write!(f, "{err}"),
            Error::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Core(_) => None,
            Error::Io(err) => Some(err),
        }
    }
}

impl From<BitkitError> for Error {
    fn from(err: BitkitError) -> Self {
        Error::Core(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type for the std layer
pub type Result<T> = std::result::Result<T, Error>;
