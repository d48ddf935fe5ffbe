//! The module containing the crate main [`Error`] type

use std::fmt::Display;
use std::path::PathBuf;

/// The main benchmark suite error type
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The error when serializing the run summary fails
    ///
    /// `SerializationError(message)`
    SerializationError(String),
    /// The error when creating or writing the summary file fails
    ///
    /// `SummaryError(file_path, message)`
    SummaryError(PathBuf, String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SerializationError(message) => {
                write!(f, "Error serializing the summary: {message}")
            }
            Self::SummaryError(path, message) => {
                write!(f, "Error writing summary file '{}': {message}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}
