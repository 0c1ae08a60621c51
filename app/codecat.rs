//! Command-line interface for codecat.
//!
//! Run without arguments it concatenates every `.java` file under the current
//! directory into `codice_unificato.txt`.

use clap::{Parser, ValueEnum};
use codecat::{
    ConcatBuilder, ConcatOptions, ConcatReport, DEFAULT_EXTENSION, DEFAULT_OUTPUT,
    TraversalOrder, concatenate,
};
use std::path::PathBuf;
use std::process::exit;

/// codecat — concatenate source files into one annotated file
#[derive(Parser)]
#[command(name = "codecat", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// File name suffix to select (case-sensitive)
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Output file, truncated if it exists
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Traversal order
    #[arg(long, value_enum, default_value_t = Order::Name)]
    order: Order,

    /// Ignore glob, matched against each entry's name and its full walked path
    /// (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Skip hidden files and directories
    #[arg(long)]
    skip_hidden: bool,

    /// Honor .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Copy line endings verbatim instead of normalizing them to \n
    #[arg(long)]
    keep_line_endings: bool,

    /// Print a JSON report of the run to stdout
    #[arg(long)]
    json: bool,

    /// Verbose logging; only takes effect when built with the `logging` feature
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Order {
    Name,
    Os,
}

impl From<Order> for TraversalOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Name => TraversalOrder::ByName,
            Order::Os => TraversalOrder::Filesystem,
        }
    }
}

impl Cli {
    fn into_options(self) -> (ConcatOptions, bool, bool) {
        let options = ConcatBuilder::new(self.root)
            .extension(self.extension)
            .output(self.output)
            .order(self.order.into())
            .ignore_patterns(self.ignore_patterns)
            .include_hidden(!self.skip_hidden)
            .respect_gitignore(self.gitignore)
            .follow_links(self.follow_links)
            .normalize_newlines(!self.keep_line_endings)
            .build();

        (options, self.json, self.verbose)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let (options, json, _verbose) = cli.into_options();

    #[cfg(feature = "logging")]
    init_logging(_verbose);
    #[cfg(not(feature = "logging"))]
    if _verbose {
        eprintln!("warning: --verbose has no effect; rebuild with the `logging` feature");
    }

    match concatenate(options) {
        Ok(report) => {
            if json {
                print_report(&report);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_report(report: &ConcatReport) {
    let json = serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        eprintln!("JSON serialization error: {}", e);
        exit(1);
    });
    println!("{}", json);
}
