use std::fs;
use std::io;
use std::path::Path;

/// Split file content into lines that keep their terminators, so untouched
/// lines round-trip byte-for-byte (CRLF included). A final line without a
/// newline comes through as-is.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Read the whole file into memory before any processing starts.
pub fn read_document(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(split_lines(&content))
}

/// Overwrite the file with the full line sequence in one write.
pub fn write_document(path: impl AsRef<Path>, lines: &[String]) -> io::Result<()> {
    fs::write(path, lines.concat())
}
