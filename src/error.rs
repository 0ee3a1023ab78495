use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, parsing, formatting or writing sequences.
#[derive(Debug, Error)]
pub enum Error {
    /// The source file does not exist.
    #[error("source file '{}' not found", path.display())]
    InputNotFound {
        /// Path given on the command line
        path: PathBuf,
    },

    /// The source file exists but could not be read.
    #[error("failed to read source file '{}': {source}", path.display())]
    InputRead {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The source file contains nothing but whitespace.
    #[error("source file '{}' is empty", path.display())]
    EmptyInput {
        /// Path given on the command line
        path: PathBuf,
    },

    /// The input text cannot be treated as a PDB file at all.
    #[error("failed to parse PDB text: {details}")]
    Parse {
        /// What made the input unusable
        details: String,
    },

    /// The target file could not be created or written.
    #[error("failed to write target file '{}': {source}", path.display())]
    Output {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An unknown spelling for a code format or output style.
    #[error("invalid {kind} '{value}', expected one of: {expected}")]
    InvalidFormat {
        /// Which option was being parsed
        kind: &'static str,
        /// The rejected value
        value: String,
        /// Comma-separated list of accepted spellings
        expected: &'static str,
    },
}

impl Error {
    pub(crate) fn parse(details: impl Into<String>) -> Self {
        Self::Parse {
            details: details.into(),
        }
    }

    pub(crate) fn invalid_format(
        kind: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidFormat {
            kind,
            value: value.into(),
            expected,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
