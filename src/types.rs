use std::io::{self, Write};
use std::path::PathBuf;

/// Line that opens every record.
pub const RECORD_HEADER: &str = "----";

/// Terminal marker, written with no trailing newline.
pub const END_MARKER: &str = "--END--";

/// Preamble used when no preamble file is configured. Byte-for-byte stable,
/// spelling included.
pub const DEFAULT_PREAMBLE: &str = "The following text is a diretory structure with code. \
The structure of the text are sections that begin with ----, followed by a single line \
containing the file path and file name, followed by a variable amount of lines containing \
the file contents. The text representing the directory ends when the symbols --END-- are \
encounted. Any further text beyond --END-- are meant to be interpreted as instructions \
using the aforementioned directory as context.";

/// One included file, serialized as soon as it is read.
#[derive(Debug)]
pub struct Record {
    /// Path relative to the walked root, written as its raw OS bytes.
    pub path: PathBuf,
    /// Raw file bytes, written without escaping.
    pub content: Vec<u8>,
}
impl Record {
    /// Writes `----\n<path>\n<content>\n`.
    ///
    /// Content containing a `----` line is not escaped and makes the framing
    /// ambiguous for a naive reader.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(RECORD_HEADER.as_bytes())?;
        sink.write_all(b"\n")?;
        sink.write_all(self.path.as_os_str().as_encoded_bytes())?;
        sink.write_all(b"\n")?;
        sink.write_all(&self.content)?;
        sink.write_all(b"\n")
    }
}

/// Counts gathered while producing an artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Records written.
    pub files: usize,
    /// Entries (files or directories) matched by the ignore list.
    pub ignored: usize,
    /// Sum of file content sizes, framing excluded.
    pub content_bytes: u64,
}
