use crate::error::ConcatError;
use crate::options::{ConcatOptions, TraversalOrder};
use crate::output::write_block;
use crate::types::{ConcatReport, SourceFile};
use ignore::WalkBuilder;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &ConcatOptions) -> Result<Self, ConcatError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .hidden(!options.include_hidden)
            .git_ignore(options.respect_gitignore)
            .require_git(false)
            .follow_links(options.follow_links);
        if options.order == TraversalOrder::ByName {
            builder.sort_by_file_path(files_first_by_name);
        }
        if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern)
                    .map_err(|e| ConcatError::InvalidPattern(format!("'{}': {}", pattern, e)))?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| ConcatError::InvalidPattern(e.to_string()))?;
            builder.filter_entry(move |entry| {
                !matcher.is_match(entry.path()) && !matcher.is_match(entry.file_name())
            });
        }
        Ok(Self {
            inner: builder.build(),
        })
    }
}
fn files_first_by_name(a: &Path, b: &Path) -> Ordering {
    a.is_dir()
        .cmp(&b.is_dir())
        .then_with(|| a.file_name().cmp(&b.file_name()))
}
/// Directories and links to directories. Dangling links count as files so that
/// opening them fails the run.
fn is_directory(entry: &ignore::DirEntry) -> bool {
    entry
        .file_type()
        .is_some_and(|t| t.is_dir() || (t.is_symlink() && entry.path().is_dir()))
}
fn matches_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}
/// Converts `\r\n` and lone `\r` to `\n`, borrowing when there is nothing to convert.
pub(crate) fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            chars.next_if_eq(&'\n');
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
fn read_source(path: &Path, normalize: bool) -> Result<String, ConcatError> {
    let file = File::open(path).map_err(|e| ConcatError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| ConcatError::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| ConcatError::decode(path, e))?;
    if normalize {
        if let Cow::Owned(normalized) = normalize_newlines(&text) {
            return Ok(normalized);
        }
    }
    Ok(text)
}
/// Lazily walks the root and yields every file whose name ends with the
/// configured suffix, already read and decoded.
///
/// Directories that cannot be listed are skipped. Any failure to open, read or
/// decode a matched file is yielded as an error.
pub struct SourceFiles {
    walk: ignore::Walk,
    extension: String,
    normalize_newlines: bool,
    exclude: Option<PathBuf>,
}
impl SourceFiles {
    pub fn new(options: &ConcatOptions) -> Result<Self, ConcatError> {
        let walker = Walker::new(options)?;
        Ok(Self {
            walk: walker.inner,
            extension: options.extension.clone(),
            normalize_newlines: options.normalize_newlines,
            exclude: None,
        })
    }
    /// Never yield the file at `path`, compared by canonical location.
    pub fn excluding(mut self, path: PathBuf) -> Self {
        self.exclude = Some(path);
        self
    }
    fn is_excluded(&self, path: &Path) -> Result<bool, ConcatError> {
        match &self.exclude {
            Some(excluded) => {
                let canonical = fs::canonicalize(path).map_err(|e| ConcatError::io(path, e))?;
                Ok(&canonical == excluded)
            }
            None => Ok(false),
        }
    }
}
impl Iterator for SourceFiles {
    type Item = Result<SourceFile, ConcatError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable entry: {}", _e);
                    continue;
                }
            };
            let path = entry.path();
            if entry.depth() == 0 || is_directory(&entry) || !matches_suffix(path, &self.extension)
            {
                continue;
            }
            if path.to_str().is_none() {
                return Some(Err(ConcatError::NonUtf8Path(path.to_path_buf())));
            }
            match self.is_excluded(path) {
                Ok(true) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping output file: {}", path.display());
                    continue;
                }
                Ok(false) => {}
                Err(e) => return Some(Err(e)),
            }
            let result = read_source(path, self.normalize_newlines).map(|content| SourceFile {
                path: path.to_path_buf(),
                content,
            });
            return Some(result);
        }
    }
}
fn write_blocks<W: Write>(
    files: SourceFiles,
    writer: &mut W,
    output: &Path,
) -> Result<ConcatReport, ConcatError> {
    let mut report = ConcatReport {
        output: output.to_path_buf(),
        ..Default::default()
    };
    for file in files {
        let file = file?;
        #[cfg(feature = "logging")]
        tracing::debug!("Appending {} ({} bytes)", file.path.display(), file.content.len());
        report.bytes_written +=
            write_block(writer, &file).map_err(|e| ConcatError::io(output, e))?;
        report.files.push(file.path);
    }
    Ok(report)
}
/// Concatenates every matching file under `options.root` into `options.output`.
///
/// The output is truncated first and closed on every exit path. On error the
/// output keeps whatever blocks were written before the failure.
pub fn concatenate(options: ConcatOptions) -> Result<ConcatReport, ConcatError> {
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Concatenating '{}' files under {} into {}",
        options.extension,
        options.root.display(),
        options.output.display()
    );
    let mut files = SourceFiles::new(&options)?;
    let output = &options.output;
    let file = File::create(output).map_err(|e| ConcatError::io(output, e))?;
    if options.skip_output_file {
        let canonical = fs::canonicalize(output).map_err(|e| ConcatError::io(output, e))?;
        files = files.excluding(canonical);
    }
    let mut writer = BufWriter::new(file);
    let report = write_blocks(files, &mut writer, output)?;
    writer.flush().map_err(|e| ConcatError::io(output, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Wrote {} files ({} bytes) to {}",
        report.files.len(),
        report.bytes_written,
        output.display()
    );
    Ok(report)
}
/// Like [`concatenate`], but writes the blocks to `writer` instead of a file.
///
/// `options.output` is neither created nor excluded from the walk; it only
/// labels write errors and the returned report.
pub fn concatenate_into<W: Write>(
    options: ConcatOptions,
    writer: &mut W,
) -> Result<ConcatReport, ConcatError> {
    let files = SourceFiles::new(&options)?;
    write_blocks(files, writer, &options.output)
}
