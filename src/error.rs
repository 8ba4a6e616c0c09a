use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TotxtError {
    #[error("Error reading ignore file {path}: {source}")]
    IgnoreFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error creating output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error reading preamble file {path}: {source}")]
    Preamble {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error processing directory: {0}")]
    Walk(#[from] ignore::Error),
    #[error("Error processing directory: cannot read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error writing output: {0}")]
    Write(std::io::Error),
}
impl TotxtError {
    pub(crate) fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TotxtError::ReadFile {
            path: path.into(),
            source,
        }
    }
}
