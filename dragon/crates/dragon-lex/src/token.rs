//! Token definitions for the dragon scanner.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact slice of input it was
//! scanned from. Tokens borrow from the source buffer and are never
//! mutated once the scanner hands them out.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// The kind of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// End of input. Carries no lexeme.
    EndOfInput,
    /// A character that starts no recognised token.
    Unknown,
    /// `.`
    Dot,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// A letter followed by letters and digits.
    Identifier,
    /// One or more digits.
    Integer,
    /// A run of spaces, tabs, newlines and carriage returns. Carries no lexeme.
    Whitespace,
    /// `=`
    Equal,
    /// `!=`
    ///
    /// Part of the token taxonomy, but no scanning rule produces it: `!`
    /// lexes as [`TokenKind::Unknown`].
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,
    /// Digits, `.`, digits.
    Real,
    /// An integer or real mantissa, `e`/`E`, an optional sign, digits.
    Scientific,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenKind; 16] = [
        TokenKind::EndOfInput,
        TokenKind::Unknown,
        TokenKind::Dot,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Whitespace,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::LessThan,
        TokenKind::LessOrEqual,
        TokenKind::GreaterThan,
        TokenKind::GreaterOrEqual,
        TokenKind::Real,
        TokenKind::Scientific,
    ];

    /// Returns the short upper-case name used when printing tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Plus.name(), "POS");
    /// assert_eq!(TokenKind::Scientific.name(), "SCI");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EOF",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Dot => "DOT",
            TokenKind::Plus => "POS",
            TokenKind::Minus => "NEG",
            TokenKind::Identifier => "ID",
            TokenKind::Integer => "INT",
            TokenKind::Whitespace => "WS",
            TokenKind::Equal => "EQ",
            TokenKind::NotEqual => "NE",
            TokenKind::LessThan => "LT",
            TokenKind::LessOrEqual => "LE",
            TokenKind::GreaterThan => "GT",
            TokenKind::GreaterOrEqual => "GE",
            TokenKind::Real => "REAL",
            TokenKind::Scientific => "SCI",
        }
    }

    /// Returns true for the three numeric literal kinds.
    pub const fn is_number(self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Real | TokenKind::Scientific
        )
    }

    /// Returns true for the relational operators.
    pub const fn is_relational(self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::LessThan
                | TokenKind::LessOrEqual
                | TokenKind::GreaterThan
                | TokenKind::GreaterOrEqual
        )
    }

    /// Returns true if an identifier may be remapped to this kind.
    ///
    /// End-of-input and whitespace are positional and carry no lexeme, so
    /// no spelling may scan as either.
    pub const fn can_be_keyword(self) -> bool {
        !matches!(self, TokenKind::EndOfInput | TokenKind::Whitespace)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no token kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token kind `{0}`")]
pub struct ParseTokenKindError(pub String);

impl FromStr for TokenKind {
    type Err = ParseTokenKindError;

    /// Parses a printed kind name (`"INT"`, `"ge"`, ...), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTokenKindError(s.to_string()))
    }
}

/// The region of source a token was scanned from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Line of the first character (1-based).
    pub line: u32,
    /// Column of the first character (1-based).
    pub column: u32,
}

impl Span {
    /// Creates a span covering `start..end` that begins at `line:column`.
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true for a zero-width span.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The byte range, suitable for slicing the source.
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// A scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    kind: TokenKind,
    lexeme: Option<&'a str>,
    span: Span,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind, lexeme: Option<&'a str>, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// The token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact text matched, or `None` for end-of-input and whitespace.
    pub fn lexeme(&self) -> Option<&'a str> {
        self.lexeme
    }

    /// Where in the source the token was scanned from.
    ///
    /// Whitespace tokens report the span of the run they consumed even
    /// though they keep no lexeme; end-of-input reports an empty span at
    /// the end of the buffer.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token<'_> {
    /// Formats as `Token(<KIND>, <lexeme>)`, with an empty lexeme when
    /// there is none.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {})", self.kind, self.lexeme.unwrap_or(""))
    }
}

/// Error returned when a keyword would map to a kind identifiers cannot
/// take.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("keyword `{spelling}` cannot map to {kind}")]
pub struct KeywordError {
    /// The rejected spelling.
    pub spelling: String,
    /// The kind it was mapped to.
    pub kind: TokenKind,
}

/// Maps identifier spellings to the token kinds they should lex as.
///
/// The table is a plain value handed to the scanner at construction, so
/// independent scanners may use different tables. The default table is
/// empty: every identifier lexes as [`TokenKind::Identifier`].
///
/// # Example
///
/// ```
/// use dragon_lex::{Keywords, TokenKind};
///
/// let keywords = Keywords::new().with("pos", TokenKind::Plus)?;
/// assert_eq!(keywords.get("pos"), Some(TokenKind::Plus));
/// assert_eq!(keywords.get("Pos"), None);
///
/// assert!(Keywords::new().with("stop", TokenKind::EndOfInput).is_err());
/// # Ok::<(), dragon_lex::KeywordError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keywords {
    table: FxHashMap<String, TokenKind>,
}

impl Keywords {
    /// Creates an empty keyword table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a keyword, returning the updated table.
    pub fn with(
        mut self,
        spelling: impl Into<String>,
        kind: TokenKind,
    ) -> Result<Self, KeywordError> {
        self.insert(spelling, kind)?;
        Ok(self)
    }

    /// Adds a keyword, returning the kind it previously mapped to.
    ///
    /// Fails without touching the table if `kind` is end-of-input or
    /// whitespace.
    pub fn insert(
        &mut self,
        spelling: impl Into<String>,
        kind: TokenKind,
    ) -> Result<Option<TokenKind>, KeywordError> {
        let spelling = spelling.into();
        if !kind.can_be_keyword() {
            return Err(KeywordError { spelling, kind });
        }
        Ok(self.table.insert(spelling, kind))
    }

    /// Builds a table from `(spelling, kind)` pairs, stopping at the first
    /// rejected kind.
    pub fn try_from_pairs<S: Into<String>>(
        pairs: impl IntoIterator<Item = (S, TokenKind)>,
    ) -> Result<Self, KeywordError> {
        let mut keywords = Keywords::new();
        for (spelling, kind) in pairs {
            keywords.insert(spelling, kind)?;
        }
        Ok(keywords)
    }

    /// Looks up the kind for an exact spelling.
    pub fn get(&self, spelling: &str) -> Option<TokenKind> {
        self.table.get(spelling).copied()
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no keywords are defined.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterates over `(spelling, kind)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenKind)> + '_ {
        self.table.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
