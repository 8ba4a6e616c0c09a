//! Loading of the `.totxtignore` pattern file.

use crate::error::TotxtError;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Glob patterns read from an ignore file, one per line, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    patterns: Vec<String>,
}
impl IgnoreList {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }
    /// Splits `text` into lines and trims each one. Blank lines are kept.
    pub fn parse(text: &str) -> Self {
        Self::new(text.lines().map(|line| line.trim().to_string()).collect())
    }
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
    pub fn len(&self) -> usize {
        self.patterns.len()
    }
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
impl<S: Into<String>> FromIterator<S> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Reads the ignore file at `path`.
///
/// Returns `Ok(None)` when the file does not exist. Any other failure to open
/// or read it is an error. Invalid UTF-8 is replaced rather than rejected.
pub fn load_ignore_list(path: &Path) -> Result<Option<IgnoreList>, TotxtError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            #[cfg(feature = "logging")]
            tracing::debug!("No ignore file at {}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(TotxtError::IgnoreFile {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| TotxtError::IgnoreFile {
            path: path.to_path_buf(),
            source,
        })?;
    let list = IgnoreList::parse(&String::from_utf8_lossy(&bytes));
    #[cfg(feature = "logging")]
    tracing::debug!("Loaded {} ignore patterns from {}", list.len(), path.display());
    Ok(Some(list))
}
