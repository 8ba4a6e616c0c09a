use crate::error::TotxtError;
use crate::ignore_list::load_ignore_list;
use crate::matcher::IgnoreMatcher;
use crate::options::{Preamble, TotxtOptions};
use crate::types::{DEFAULT_PREAMBLE, END_MARKER, Summary};
use crate::walker::walk_directory;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Writes the complete artifact into `sink`: preamble plus one newline, the
/// records of the walk, then the end marker with no trailing newline.
pub fn assemble<W: Write + ?Sized>(
    sink: &mut W,
    preamble: &[u8],
    root: &Path,
    matcher: &IgnoreMatcher,
    prune_ignored_dirs: bool,
) -> Result<Summary, TotxtError> {
    sink.write_all(preamble).map_err(TotxtError::Write)?;
    sink.write_all(b"\n").map_err(TotxtError::Write)?;
    let summary = walk_directory(root, matcher, prune_ignored_dirs, &mut *sink)?;
    sink.write_all(END_MARKER.as_bytes())
        .map_err(TotxtError::Write)?;
    Ok(summary)
}

/// Preamble bytes without the separating newline.
fn preamble_bytes(preamble: &Preamble) -> Result<Vec<u8>, TotxtError> {
    match preamble {
        Preamble::Builtin => Ok(DEFAULT_PREAMBLE.as_bytes().to_vec()),
        Preamble::File(path) => fs::read(path).map_err(|source| TotxtError::Preamble {
            path: path.clone(),
            source,
        }),
    }
}

/// Produces the artifact described by `options`.
///
/// Steps run in a fixed order: load the ignore list, create (truncate) the
/// output file, resolve the preamble, walk. A failure after the output was
/// created leaves whatever was already written in place.
pub fn totxt(options: &TotxtOptions) -> Result<Summary, TotxtError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting totxt with root: {}", options.root.display());
    let ignore_list = load_ignore_list(&options.ignore_file_path())?.unwrap_or_default();
    let matcher = IgnoreMatcher::new(&ignore_list);
    let file = File::create(&options.output).map_err(|source| TotxtError::CreateOutput {
        path: options.output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let result = preamble_bytes(&options.preamble).and_then(|preamble| {
        assemble(
            &mut writer,
            &preamble,
            &options.root,
            &matcher,
            options.prune_ignored_dirs,
        )
    });
    let flushed = writer.flush().map_err(TotxtError::Write);
    let summary = result?;
    flushed?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Wrote {} files ({} bytes of content, {} entries ignored) to {}",
        summary.files,
        summary.content_bytes,
        summary.ignored,
        options.output.display()
    );
    Ok(summary)
}
