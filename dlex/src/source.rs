//! Source loading.
//!
//! Files are read whole and re-assembled line by line, each line followed
//! by a single `\n`, so any non-empty input ends in a newline. Only `\n`
//! terminates a line: the `\r` of a CRLF pair stays in the text and scans
//! as part of the whitespace run. Bytes that are not valid UTF-8 become
//! U+FFFD and scan as `UNKNOWN`.

use std::io::Read;
use std::path::Path;

use crate::error::{DlexError, Result};

/// Path argument that reads from standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Reads `path` (or stdin for `-`) and normalises its line endings.
pub fn load_source(path: &Path) -> Result<String> {
    let raw = if path.as_os_str() == STDIN_PATH {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .map_err(|e| DlexError::FileOperation(format!("<stdin>: {}", e)))?;
        buffer
    } else {
        std::fs::read(path)
            .map_err(|e| DlexError::FileOperation(format!("{}: {}", path.display(), e)))?
    };

    let text = normalize_lines(&String::from_utf8_lossy(&raw));
    tracing::debug!(
        path = %path.display(),
        bytes = text.len(),
        lines = text.lines().count(),
        "loaded source"
    );
    Ok(text)
}

/// Re-joins `raw` with `\n` after every line.
///
/// A missing final newline is added and an empty input stays empty.
/// Carriage returns are kept.
pub fn normalize_lines(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len() + 1);
    for line in raw.split_terminator('\n') {
        text.push_str(line);
        text.push('\n');
    }
    text
}
