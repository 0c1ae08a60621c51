//! Marker formatting for the concatenated output.
//!
//! Every input is written as one block: a header line preceded by a blank line,
//! the file's text exactly as read, and a footer line. Consecutive blocks are
//! separated only by the header's leading newlines.

use crate::types::SourceFile;
use std::io::{self, Write};
use std::path::Path;

/// Returns the header written before a file's content.
pub fn header(path: &Path) -> String {
    format!("\n\n// ---- Inizio: {} ----\n", path.display())
}

/// Returns the footer written after a file's content.
pub fn footer(path: &Path) -> String {
    format!("\n// ---- Fine: {} ----\n", path.display())
}

/// Writes one annotated block and returns the number of bytes written.
pub fn write_block<W: Write>(writer: &mut W, file: &SourceFile) -> io::Result<u64> {
    let header = header(&file.path);
    let footer = footer(&file.path);
    writer.write_all(header.as_bytes())?;
    writer.write_all(file.content.as_bytes())?;
    writer.write_all(footer.as_bytes())?;
    Ok((header.len() + file.content.len() + footer.len()) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn markers_carry_the_path() {
        let path = Path::new("./A.java");
        assert_eq!(header(path), "\n\n// ---- Inizio: ./A.java ----\n");
        assert_eq!(footer(path), "\n// ---- Fine: ./A.java ----\n");
    }

    #[test]
    fn block_wraps_content_verbatim() {
        let file = SourceFile {
            path: PathBuf::from("./A.java"),
            content: "x".to_string(),
        };
        let mut out = Vec::new();
        let written = write_block(&mut out, &file).unwrap();
        let expected = "\n\n// ---- Inizio: ./A.java ----\nx\n// ---- Fine: ./A.java ----\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(written, expected.len() as u64);
    }
}
