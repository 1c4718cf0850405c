//! Error types for hosts document operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, parsing, or editing the hosts document.
#[derive(Debug, Error)]
pub enum HostyError {
    /// Backing store could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Backing store could not be written
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Label has no marker line in the document
    #[error("unknown entry: {0}")]
    UnknownEntry(String),

    /// Marker line is the last line of the document
    #[error("malformed document: marker for entry '{label}' on line {line} has no directive line")]
    MalformedDocument { label: String, line: usize },
}

pub type Result<T> = std::result::Result<T, HostyError>;
