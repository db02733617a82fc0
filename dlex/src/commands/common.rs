//! Common types and utilities for dlex commands.
//!
//! Token printers shared by the commands, plus the output format switch.

use std::io::Write;

use dragon_lex::{Token, TokenKind};
use serde::Serialize;

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Token(KIND, lexeme)` line per token
    Text,
    /// A JSON array of token records
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when the output format is not recognised.
    pub const UNKNOWN_FORMAT: &str = "Unknown output format (expected text or json):";

    /// Error when a configuration file would be overwritten.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force):";

    /// Error when the target path is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";
}

// ============================================================================
// Token Printing
// ============================================================================

/// Which tokens to print and how much detail to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintOptions {
    /// Print whitespace tokens as well.
    pub include_whitespace: bool,
    /// Append ` @start..end` to each text line.
    pub show_spans: bool,
}

impl PrintOptions {
    /// End-of-input is never printed; whitespace only on request.
    pub fn should_print(&self, token: &Token<'_>) -> bool {
        match token.kind() {
            TokenKind::EndOfInput => false,
            TokenKind::Whitespace => self.include_whitespace,
            _ => true,
        }
    }
}

/// A token as it appears in JSON output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenRecord<'a> {
    /// Printed kind name, e.g. `INT`.
    pub kind: &'static str,
    /// Matched text, `null` for whitespace.
    pub lexeme: Option<&'a str>,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        let span = token.span();
        Self {
            kind: token.kind().name(),
            lexeme: token.lexeme(),
            start: span.start,
            end: span.end,
            line: span.line,
            column: span.column,
        }
    }
}

/// Writes the printable tokens one per line and returns how many were
/// written.
pub fn render_text<W: Write>(
    tokens: &[Token<'_>],
    options: PrintOptions,
    out: &mut W,
) -> Result<usize> {
    let mut printed = 0;
    for token in tokens.iter().filter(|t| options.should_print(t)) {
        if options.show_spans {
            let span = token.span();
            writeln!(out, "{} @{}..{}", token, span.start, span.end)?;
        } else {
            writeln!(out, "{}", token)?;
        }
        printed += 1;
    }
    Ok(printed)
}

/// Writes the printable tokens as a pretty-printed JSON array and returns
/// how many were written.
pub fn render_json<W: Write>(
    tokens: &[Token<'_>],
    options: PrintOptions,
    out: &mut W,
) -> Result<usize> {
    let records: Vec<TokenRecord<'_>> = tokens
        .iter()
        .filter(|t| options.should_print(t))
        .map(TokenRecord::from)
        .collect();

    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(records.len())
}
