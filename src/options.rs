use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Suffix selected when none is configured.
pub const DEFAULT_EXTENSION: &str = ".java";
/// Output file written when none is configured.
pub const DEFAULT_OUTPUT: &str = "codice_unificato.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalOrder {
    /// Files before subdirectories, each group sorted by file name.
    ByName,
    /// Whatever order the filesystem returns directory entries in.
    Filesystem,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcatOptions {
    pub root: PathBuf,
    pub extension: String,
    pub output: PathBuf,
    pub order: TraversalOrder,
    pub follow_links: bool,
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    pub ignore_patterns: Vec<String>,
    pub normalize_newlines: bool,
    pub skip_output_file: bool,
}
impl Default for ConcatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            order: TraversalOrder::ByName,
            follow_links: false,
            include_hidden: true,
            respect_gitignore: false,
            ignore_patterns: Vec::new(),
            normalize_newlines: true,
            skip_output_file: true,
        }
    }
}
#[derive(Debug, Default)]
pub struct ConcatBuilder {
    options: ConcatOptions,
}
impl ConcatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ConcatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn extension(mut self, suffix: impl Into<String>) -> Self {
        self.options.extension = suffix.into();
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn order(mut self, order: TraversalOrder) -> Self {
        self.options.order = order;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn normalize_newlines(mut self, yes: bool) -> Self {
        self.options.normalize_newlines = yes;
        self
    }
    pub fn skip_output_file(mut self, yes: bool) -> Self {
        self.options.skip_output_file = yes;
        self
    }
    pub fn build(self) -> ConcatOptions {
        self.options
    }
}
