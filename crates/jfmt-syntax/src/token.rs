//! Token definitions produced by the jfmt lexer.
//!
//! Tokens are the smallest meaningful units of a class source file:
//! identifiers, literals, keywords, modifiers, operators and punctuation.
//! Literal tokens keep their exact source spelling so the renderer can echo
//! them unchanged.
//!
//! # Examples
//!
//! ```rust
//! use jfmt_syntax::{Token, TokenKind};
//!
//! let keyword = Token { kind: TokenKind::Class, line: 1, col: 1 };
//! let name = Token { kind: TokenKind::Ident("Box".to_string()), line: 1, col: 7 };
//! assert_eq!(name.kind.describe(), "identifier 'Box'");
//! assert_eq!(keyword.kind.describe(), "'class'");
//! ```

use crate::ast::{Access, BinaryOp, Primitive};

/// Token types that can be produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // === Names and literals ===
    /// An identifier (`Box`, `this`, `count_1`)
    Ident(String),

    /// A numeric literal, spelled as in the source (`42`, `3.5`, `10L`)
    Number(String),

    /// A string literal body without the surrounding quotes, escapes untouched
    Str(String),

    /// A character literal body without the surrounding quotes
    Char(String),

    /// `true`
    True,

    /// `false`
    False,

    /// `null`
    Null,

    // === Modifiers and types ===
    /// `public`, `private` or `protected`
    Access(Access),

    /// A primitive type keyword such as `int` or `void`
    Primitive(Primitive),

    /// `final`
    Final,

    // === Keywords ===
    Class,
    Extends,
    Implements,
    Super,
    New,
    If,
    Else,
    While,
    Return,
    Break,
    Continue,

    // === Punctuation ===
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,

    /// Assignment `=`
    Equal,

    /// Logical negation `!`
    Bang,

    /// Any binary operator
    BinOp(BinaryOp),

    /// End-of-file marker
    Eof,
}

impl TokenKind {
    /// Short description used in parse error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => format!("identifier '{}'", name),
            TokenKind::Number(n) => format!("number '{}'", n),
            TokenKind::Str(s) => format!("string \"{}\"", s),
            TokenKind::Char(c) => format!("char '{}'", c),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("'{}'", other.text()),
        }
    }

    /// Source spelling of fixed-text tokens.
    fn text(&self) -> &'static str {
        match self {
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Access(a) => a.as_str(),
            TokenKind::Primitive(p) => p.as_str(),
            TokenKind::Final => "final",
            TokenKind::Class => "class",
            TokenKind::Extends => "extends",
            TokenKind::Implements => "implements",
            TokenKind::Super => "super",
            TokenKind::New => "new",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Equal => "=",
            TokenKind::Bang => "!",
            TokenKind::BinOp(op) => op.as_str(),
            TokenKind::Ident(_)
            | TokenKind::Number(_)
            | TokenKind::Str(_)
            | TokenKind::Char(_)
            | TokenKind::Eof => "",
        }
    }
}

/// A token with its 1-based source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The type and semantic content of this token
    pub kind: TokenKind,

    /// Line number in the source file (1-based)
    pub line: usize,

    /// Column number in the source file (1-based)
    pub col: usize,
}
