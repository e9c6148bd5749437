//! Error types for loading, merging and saving config documents

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which input a document came from; used in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    Existing,
    Incoming,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Existing => f.write_str("existing config"),
            DocumentRole::Incoming => f.write_str("new models config"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Failed reading {role}: {}", path.display())]
    Read {
        role: DocumentRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed parsing {role}: {}", path.display())]
    Parse {
        role: DocumentRole,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed serializing merged config")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed writing config: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MergeError>;
