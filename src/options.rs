use std::path::PathBuf;

/// File name of the ignore list looked up at the root of the walked tree.
pub const IGNORE_FILE_NAME: &str = ".totxtignore";

/// Where the preamble text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preamble {
    /// The built-in explanatory text, see [`crate::DEFAULT_PREAMBLE`].
    #[default]
    Builtin,
    /// Contents of a user-supplied file, written verbatim.
    File(PathBuf),
}
impl Preamble {
    /// An empty path selects the built-in preamble.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str().is_empty() {
            Preamble::Builtin
        } else {
            Preamble::File(path)
        }
    }
}
#[derive(Debug, Clone)]
pub struct TotxtOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub preamble: Preamble,
    pub ignore_file: Option<PathBuf>,
    pub prune_ignored_dirs: bool,
}
impl Default for TotxtOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("output.txt"),
            preamble: Preamble::Builtin,
            ignore_file: None,
            prune_ignored_dirs: false,
        }
    }
}
impl TotxtOptions {
    /// The configured ignore file, or `<root>/.totxtignore`.
    pub fn ignore_file_path(&self) -> PathBuf {
        match &self.ignore_file {
            Some(path) => path.clone(),
            None => self.root.join(IGNORE_FILE_NAME),
        }
    }
}
#[derive(Debug, Default)]
pub struct TotxtBuilder {
    options: TotxtOptions,
}
impl TotxtBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: TotxtOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn preamble(mut self, preamble: Preamble) -> Self {
        self.options.preamble = preamble;
        self
    }
    pub fn preamble_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.preamble = Preamble::from_path(path);
        self
    }
    pub fn ignore_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.ignore_file = Some(path.into());
        self
    }
    pub fn prune_ignored_dirs(mut self, yes: bool) -> Self {
        self.options.prune_ignored_dirs = yes;
        self
    }
    pub fn build(self) -> TotxtOptions {
        self.options
    }
}
