//! Error handling types shared by every stage of the jfmt pipeline.
//!
//! The formatter can fail in exactly two ways: the input does not conform to
//! the class grammar ([`ErrorKind::Syntax`]), or reading the input / writing
//! the output failed ([`ErrorKind::Io`]). Both are carried by the same
//! [`Error`] value so that every stage can propagate with `?` and the binary
//! reports failures in a single place.
//!
//! # Examples
//!
//! ```rust
//! use jfmt_syntax::error::{Error, ErrorKind, Result, error_at};
//!
//! fn expect_semicolon(found: &str, line: usize, col: usize) -> Result<()> {
//!     if found == ";" {
//!         Ok(())
//!     } else {
//!         error_at(line, col, format!("Expected ';', found '{}'", found))
//!     }
//! }
//!
//! let err = expect_semicolon("}", 3, 14).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Syntax);
//! assert_eq!(err.to_string(), "Expected ';', found '}' at 3:14");
//! ```

use std::fmt;
use std::io;

/// Category of a formatting failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source text could not be turned into a class declaration.
    Syntax,
    /// Reading the input or writing the output failed.
    Io,
}

impl ErrorKind {
    /// Human-readable label used when reporting the error.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "Syntax error",
            ErrorKind::Io => "I/O error",
        }
    }
}

/// An error produced while lexing, parsing or writing formatted output.
///
/// Syntax errors usually carry the 1-based position of the offending token.
/// I/O errors never do.
///
/// ```rust
/// use jfmt_syntax::Error;
///
/// let located = Error::with_span("Expected '}'", 12, 1);
/// assert_eq!(located.to_string(), "Expected '}' at 12:1");
///
/// let bare = Error::new("Unexpected end of input");
/// assert_eq!(bare.to_string(), "Unexpected end of input");
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    /// What went wrong
    pub kind: ErrorKind,

    /// Human-readable error message
    pub msg: String,

    /// Optional line number in source file (1-based)
    pub line: Option<usize>,

    /// Optional column number in source file (1-based)
    pub col: Option<usize>,
}

impl Error {
    /// Creates a syntax error without location information.
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            msg: msg.into(),
            line: None,
            col: None,
        }
    }

    /// Creates a syntax error located at `line`:`col` (both 1-based).
    pub fn with_span(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            msg: msg.into(),
            line: Some(line),
            col: Some(col),
        }
    }

    /// Creates an I/O error, prefixing the underlying cause with `context`.
    ///
    /// ```rust
    /// use std::io;
    /// use jfmt_syntax::{Error, ErrorKind};
    ///
    /// let cause = io::Error::new(io::ErrorKind::NotFound, "no such file");
    /// let err = Error::io("Failed to read Box.java", &cause);
    /// assert_eq!(err.kind, ErrorKind::Io);
    /// assert_eq!(err.msg, "Failed to read Box.java: no such file");
    /// ```
    pub fn io(context: impl fmt::Display, cause: &io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            msg: format!("{}: {}", context, cause),
            line: None,
            col: None,
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(l), Some(c)) = (self.line, self.col) {
            write!(f, "{} at {}:{}", self.msg, l, c)
        } else {
            write!(f, "{}", self.msg)
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            msg: e.to_string(),
            line: None,
            col: None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::new(s)
    }
}
impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::new(s)
    }
}

/// A specialized `Result` type for jfmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for `Err(Error::new(msg))`.
pub fn error<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::new(msg))
}

/// Shorthand for `Err(Error::with_span(msg, line, col))`.
pub fn error_at<T>(line: usize, col: usize, msg: impl Into<String>) -> Result<T> {
    Err(Error::with_span(msg, line, col))
}
