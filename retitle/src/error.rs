// src/error.rs
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a rename run can fail. The first error aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Zero or several files matched the article pattern.
    #[error("Cannot find a unique match for {pattern} (found {found})")]
    NoUniqueMatch { pattern: String, found: usize },

    /// The article ended without a long divider line.
    #[error("Unable to detect title in {}", path.display())]
    NoTitle { path: PathBuf },

    /// A file name expected to end in `_<digits>.<ext>` did not.
    #[error("Unable to extract number from {name}")]
    NumberExtraction { name: String },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every sequence number after the highest existing one is taken.
    #[error("Ran out of sequence numbers for {title}")]
    NumbersExhausted { title: String },

    #[error("Invalid pattern {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
