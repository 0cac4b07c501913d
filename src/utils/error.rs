use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinifyError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {} for {}: {source}", output.display(), path.display())]
    Write {
        /// The input being minified.
        path: PathBuf,
        output: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was missing, unreadable or not valid JSON.
    ReadOrParse,
    /// The minified output could not be written.
    Write,
    /// The tokens directory exists but could not be listed.
    Scan,
}

impl MinifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MinifyError::Read { .. } | MinifyError::Parse { .. } => ErrorKind::ReadOrParse,
            MinifyError::Write { .. } => ErrorKind::Write,
            MinifyError::Scan { .. } => ErrorKind::Scan,
        }
    }

    /// The input file (or tokens directory) the failure is about.
    pub fn path(&self) -> &Path {
        match self {
            MinifyError::Read { path, .. }
            | MinifyError::Parse { path, .. }
            | MinifyError::Write { path, .. }
            | MinifyError::Scan { path, .. } => path,
        }
    }

    /// The underlying cause without the input path prefix. Write failures
    /// name the destination.
    pub fn detail(&self) -> String {
        match self {
            MinifyError::Read { source, .. } | MinifyError::Scan { source, .. } => {
                source.to_string()
            }
            MinifyError::Parse { source, .. } => source.to_string(),
            MinifyError::Write { output, source, .. } => {
                format!("cannot write {}: {source}", output.display())
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MinifyError::Read { .. } => "Check that the file exists and is readable",
            MinifyError::Parse { .. } => "Fix the JSON syntax at the reported line and column",
            MinifyError::Write { .. } => {
                "Check write permissions for the directory next to the input file"
            }
            MinifyError::Scan { .. } => "Check permissions on the tokens directory",
        }
    }
}

pub type Result<T> = std::result::Result<T, MinifyError>;
