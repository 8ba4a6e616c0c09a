//! Command-line interface for totxt.
//!
//! Flattens a directory into a single text file made of `----` delimited
//! records, excluding paths matched by `<root>/.totxtignore`.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::exit;
use totxt::{Preamble, TotxtBuilder, TotxtOptions, totxt};

/// totxt — flatten a directory tree into one text document
#[derive(Parser)]
#[command(name = "totxt", version, about, long_about = None)]
struct Cli {
    /// Root directory to process
    root: Option<PathBuf>,

    /// Preamble file (empty for the built-in preamble)
    #[arg(short = 'p', default_value = "preamble.txt")]
    preamble: String,

    /// Output file
    #[arg(short = 'o', default_value = "output.txt")]
    output: PathBuf,

    /// Ignore file (defaults to <root>/.totxtignore)
    #[arg(long)]
    ignore_file: Option<PathBuf>,

    /// Do not descend into directories matched by the ignore file
    #[arg(long)]
    prune: bool,
}

impl Cli {
    fn into_options(self, root: PathBuf) -> TotxtOptions {
        let mut builder = TotxtBuilder::new(root)
            .output(self.output)
            .preamble(Preamble::from_path(self.preamble))
            .prune_ignored_dirs(self.prune);
        if let Some(path) = self.ignore_file {
            builder = builder.ignore_file(path);
        }
        builder.build()
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let mut cli = Cli::parse();
    let Some(root) = cli.root.take() else {
        println!("{}", Cli::command().render_usage());
        exit(1);
    };
    let options = cli.into_options(root);

    match totxt(&options) {
        Ok(_summary) => {
            println!("Directory contents written to {}.", options.output.display());
        }
        Err(e) => {
            println!("{}", e);
            exit(1);
        }
    }
}
