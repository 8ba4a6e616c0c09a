use crate::error::TotxtError;
use crate::matcher::IgnoreMatcher;
use crate::types::{Record, Summary};
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Relative path used for matching and for the record's path line. The root
/// itself is `"."`.
fn relative_path(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

fn walk_builder(root: &Path, matcher: &IgnoreMatcher, prune_ignored_dirs: bool) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    if prune_ignored_dirs {
        let matcher = matcher.clone();
        let root = root.to_path_buf();
        builder.filter_entry(move |entry: &DirEntry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !(is_dir && matcher.is_match(&relative_path(&root, entry.path())))
        });
    }
    builder
}

/// Walks `root` depth-first in file-name order and appends one record per
/// non-ignored file to `sink`.
///
/// Every entry, directories included, is checked against `matcher`. Unless
/// `prune_ignored_dirs` is set, the contents of an ignored directory are still
/// visited and checked one by one. The first traversal, read or write error
/// aborts the walk; records already written stay in `sink`.
pub fn walk_directory<W: Write + ?Sized>(
    root: &Path,
    matcher: &IgnoreMatcher,
    prune_ignored_dirs: bool,
    sink: &mut W,
) -> Result<Summary, TotxtError> {
    let mut summary = Summary::default();
    for result in walk_builder(root, matcher, prune_ignored_dirs).build() {
        let entry = result?;
        let path = entry.path();
        let rel = relative_path(root, path);
        if matcher.is_match(&rel) {
            #[cfg(feature = "logging")]
            tracing::debug!("Ignoring {}", rel.display());
            summary.ignored += 1;
            continue;
        }
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        let content = fs::read(path).map_err(|e| TotxtError::read_file(path, e))?;
        summary.files += 1;
        summary.content_bytes += content.len() as u64;
        let record = Record { path: rel, content };
        record.write_to(&mut *sink).map_err(TotxtError::Write)?;
        #[cfg(feature = "logging")]
        tracing::debug!("Wrote {} ({} bytes)", record.path.display(), record.content.len());
    }
    Ok(summary)
}
