//! Errors when executing the binary.

use remdkit::RemdError;

use colored::*;
use serde_json;

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;
use std::result;

/// Shorthand for our `Result` class.
pub type Result<T> = result::Result<T, CliError>;

#[derive(Debug)]
/// A class for runtime errors of the binary.
pub enum CliError {
    /// Something went wrong when writing the output.
    IoError(io::Error),
    /// The output could not be formatted as JSON.
    JsonError(serde_json::Error),
    /// Something went wrong when computing the values.
    RunError(RemdError),
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            CliError::IoError(ref err) => Some(err),
            CliError::JsonError(ref err) => Some(err),
            CliError::RunError(ref err) => Some(err),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let red_error = "error:".color("red");

        match *self {
            CliError::IoError(ref err) => write!(f, "{} {}", red_error, err),
            CliError::JsonError(ref err) => write!(f, "{} {}", red_error, err),
            CliError::RunError(ref err) => write!(f, "{} {}", red_error, err),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> CliError {
        CliError::IoError(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> CliError {
        CliError::JsonError(err)
    }
}

impl From<RemdError> for CliError {
    fn from(err: RemdError) -> CliError {
        CliError::RunError(err)
    }
}
