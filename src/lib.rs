//! # Totxt
//!
//! `totxt` flattens a directory tree into one text document. Every file that is
//! not excluded by the root's `.totxtignore` becomes a record, and the records
//! are framed by a preamble and a fixed end marker:
//!
//! ```text
//! <preamble>
//! ----
//! relative/path/to/file
//! <raw file bytes>
//! ----
//! ...
//! --END--
//! ```
//!
//! Traversal is depth-first in file-name order, so the same tree always
//! produces the same bytes. File contents are copied verbatim with no
//! escaping of the `----` header.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use totxt::{TotxtBuilder, totxt};
//!
//! let options = TotxtBuilder::new("path/to/project")
//!     .output("context.txt")
//!     .preamble_file("preamble.txt")
//!     .build();
//!
//! let summary = totxt(&options).expect("Failed to flatten directory");
//! println!("{} files written", summary.files);
//! ```

mod engine;
mod error;
mod ignore_list;
mod matcher;
mod options;
mod types;
mod walker;

pub use engine::{assemble, totxt};
pub use error::TotxtError;
pub use ignore_list::{IgnoreList, load_ignore_list};
pub use matcher::{IgnoreMatcher, matches};
pub use options::{IGNORE_FILE_NAME, Preamble, TotxtBuilder, TotxtOptions};
pub use types::{DEFAULT_PREAMBLE, END_MARKER, RECORD_HEADER, Record, Summary};
pub use walker::walk_directory;
