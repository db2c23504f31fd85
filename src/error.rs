//! Implements the custom `RemdError` class for the library.

use units::Dimension;

use std::{error, fmt, result};

#[derive(Debug)]
/// Errors raised by the quantity helpers.
pub enum RemdError {
    /// An operand has the wrong physical dimension for the computation.
    DimensionMismatch { expected: Dimension, found: Dimension },
    /// An argument is outside of the range where the computation is defined.
    InvalidArgument(String),
    /// A simulation system rejected the values which were given to it.
    ExternalFailure(Box<dyn error::Error + Send + Sync>),
    /// Text could not be read as a unit, coordinate or quantity.
    Parse(String),
}

/// Shorthand for our `Result` class.
pub type Result<T> = result::Result<T, RemdError>;

impl RemdError {
    /// Construct an `InvalidArgument` error from a message.
    pub fn invalid<T: Into<String>>(msg: T) -> RemdError {
        RemdError::InvalidArgument(msg.into())
    }
}

impl fmt::Display for RemdError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RemdError::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected a {}, found a {}", expected, found)
            },
            RemdError::InvalidArgument(ref msg) => write!(f, "invalid argument: {}", msg),
            RemdError::ExternalFailure(ref err) => write!(f, "simulation system error: {}", err),
            RemdError::Parse(ref msg) => write!(f, "could not parse input: {}", msg),
        }
    }
}

impl error::Error for RemdError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            RemdError::ExternalFailure(ref err) => Some(&**err),
            _ => None,
        }
    }
}
