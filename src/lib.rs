//! # Codecat
//!
//! `codecat` walks a directory tree, picks every file whose name ends with a
//! given suffix, and concatenates their contents into a single output file.
//! Each file is wrapped in a header and footer line naming its path:
//!
//! ```text
//!
//!
//! // ---- Inizio: ./src/Main.java ----
//! <file contents>
//! // ---- Fine: ./src/Main.java ----
//! ```
//!
//! The defaults select `.java` files under the current directory and write
//! `codice_unificato.txt`. Traversal is depth-first; inside each directory the
//! files come before its subdirectories, sorted by name unless
//! [`TraversalOrder::Filesystem`] is requested.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use codecat::{ConcatBuilder, concatenate};
//!
//! let options = ConcatBuilder::new(".")
//!     .extension(".rs")
//!     .output("all_sources.txt")
//!     .build();
//!
//! let report = concatenate(options).expect("Failed to concatenate sources");
//! for path in &report.files {
//!     println!("Appended {}", path.display());
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{SourceFiles, concatenate, concatenate_into};
pub use error::ConcatError;
pub use options::{ConcatBuilder, ConcatOptions, DEFAULT_EXTENSION, DEFAULT_OUTPUT, TraversalOrder};
pub use types::{ConcatReport, SourceFile};
