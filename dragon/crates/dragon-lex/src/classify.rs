//! Character classification for the dragon scanner.
//!
//! Every predicate here is a pure, total function over a single `char`:
//! there is no state, and the end-of-input sentinel `'\0'` is a valid
//! argument like any other character. The scanner's alphabet is ASCII;
//! non-ASCII characters fall outside every class except "other".

/// The sentinel the cursor reports once it has moved past the last character.
pub const END_MARKER: char = '\0';

/// Checks if a character is whitespace: space, tab, newline or carriage return.
///
/// # Example
///
/// ```
/// use dragon_lex::classify::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\r'));
/// assert!(!is_whitespace('\0'));
/// assert!(!is_whitespace('\u{a0}')); // no Unicode whitespace
/// ```
pub fn is_whitespace(c: char) -> bool {
    is_space(c) || is_tab(c) || is_newline(c) || is_carriage_return(c)
}

/// Checks if a character is an ASCII decimal digit `0-9`.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is an ASCII letter `A-Za-z`.
///
/// # Example
///
/// ```
/// use dragon_lex::classify::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('Z'));
/// assert!(!is_alpha('_'));
/// assert!(!is_alpha('α'));
/// ```
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character is an ASCII letter or digit.
pub fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// `.`
pub fn is_dot(c: char) -> bool {
    c == '.'
}

/// `+`
pub fn is_plus(c: char) -> bool {
    c == '+'
}

/// `-`
pub fn is_minus(c: char) -> bool {
    c == '-'
}

/// Checks if a character is a sign that may follow an exponent marker.
pub fn is_sign(c: char) -> bool {
    is_plus(c) || is_minus(c)
}

/// Checks if a character introduces the exponent of a scientific literal.
pub fn is_exponent(c: char) -> bool {
    c == 'e' || c == 'E'
}

/// `=`
pub fn is_equal(c: char) -> bool {
    c == '='
}

/// `<`
pub fn is_less_than(c: char) -> bool {
    c == '<'
}

/// `>`
pub fn is_greater_than(c: char) -> bool {
    c == '>'
}

/// Checks for `!`.
///
/// No scanning rule consumes `!` yet, so it always lexes as an unknown
/// character.
pub fn is_bang(c: char) -> bool {
    c == '!'
}

/// Checks if a character is the end-of-input sentinel.
pub fn is_end_marker(c: char) -> bool {
    c == END_MARKER
}

/// `\n`
pub fn is_newline(c: char) -> bool {
    c == '\n'
}

/// `\r`
pub fn is_carriage_return(c: char) -> bool {
    c == '\r'
}

/// `\t`
pub fn is_tab(c: char) -> bool {
    c == '\t'
}

/// ` `
pub fn is_space(c: char) -> bool {
    c == ' '
}

/// `,`
pub fn is_comma(c: char) -> bool {
    c == ','
}

/// `;`
pub fn is_semicolon(c: char) -> bool {
    c == ';'
}

/// `:`
pub fn is_colon(c: char) -> bool {
    c == ':'
}

/// `(`
pub fn is_left_paren(c: char) -> bool {
    c == '('
}

/// `)`
pub fn is_right_paren(c: char) -> bool {
    c == ')'
}

/// The coarse character classes the numeric literal automaton transitions on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `0-9`
    Digit,
    /// `.`
    Dot,
    /// `e` or `E`
    Exponent,
    /// `+` or `-`
    Sign,
    /// Anything else, including the end marker.
    Other,
}

impl CharClass {
    /// Folds a character into its numeric class.
    ///
    /// # Example
    ///
    /// ```
    /// use dragon_lex::classify::CharClass;
    ///
    /// assert_eq!(CharClass::of('7'), CharClass::Digit);
    /// assert_eq!(CharClass::of('E'), CharClass::Exponent);
    /// assert_eq!(CharClass::of('-'), CharClass::Sign);
    /// assert_eq!(CharClass::of('\0'), CharClass::Other);
    /// ```
    pub fn of(c: char) -> Self {
        if is_digit(c) {
            CharClass::Digit
        } else if is_dot(c) {
            CharClass::Dot
        } else if is_exponent(c) {
            CharClass::Exponent
        } else if is_sign(c) {
            CharClass::Sign
        } else {
            CharClass::Other
        }
    }
}
