use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A matched input file with its decoded text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// The traversal directory joined with the file name, e.g. `./src/Main.java`.
    pub path: PathBuf,
    /// The file's text, with line endings normalized when requested.
    pub content: String,
}

/// Summary of a completed concatenation run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConcatReport {
    /// Where the output was written.
    pub output: PathBuf,
    /// Every input path, in the order its block was written.
    pub files: Vec<PathBuf>,
    /// Total bytes written to the output, markers included.
    pub bytes_written: u64,
}
