//! jfmt lexer: converts class source text into tokens.
use jfmt_syntax::ast::{Access, BinaryOp, Primitive};
use jfmt_syntax::error::{error_at, Error, Result};
use jfmt_syntax::token::{Token, TokenKind};

/// Streaming character scanner that produces tokens with positions.
pub struct Lexer {
    src: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    /// Create a new lexer over the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            src: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }
    fn peek_next(&self) -> Option<char> {
        self.src.get(self.pos + 1).copied()
    }
    fn advance(&mut self) -> Option<char> {
        let ch = self.src.get(self.pos).copied();
        if let Some(c) = ch {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        ch
    }

    /// Skips whitespace, `// line` and `/* block */` comments.
    fn skip_trivia(&mut self) -> Result<()> {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else if c == '/' && self.peek_next() == Some('/') {
                while let Some(c2) = self.advance() {
                    if c2 == '\n' {
                        break;
                    }
                }
            } else if c == '/' && self.peek_next() == Some('*') {
                let (line, col) = (self.line, self.col);
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => return error_at(line, col, "Unterminated block comment"),
                    }
                }
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Reads a decimal, exponent or hex number literal, keeping its spelling.
    fn read_number(&mut self, line: usize, col: usize) -> Result<TokenKind> {
        let mut s = String::new();
        if self.peek() == Some('0') && matches!(self.peek_next(), Some('x' | 'X')) {
            s.extend(self.advance());
            s.extend(self.advance());
            let prefix = s.len();
            while let Some(c) = self.peek() {
                if c.is_ascii_hexdigit() {
                    s.push(c);
                    self.advance();
                } else {
                    break;
                }
            }
            if s.len() == prefix {
                return error_at(line, col, format!("Hex literal '{}' has no digits", s));
            }
            if let Some(c @ ('l' | 'L')) = self.peek() {
                s.push(c);
                self.advance();
            }
            return Ok(TokenKind::Number(s));
        }

        self.take_digits(&mut s);
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            s.push('.');
            self.advance();
            self.take_digits(&mut s);
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let signed = matches!(self.peek_next(), Some('+' | '-'));
            let first_digit = self.pos + 1 + usize::from(signed);
            if self.src.get(first_digit).is_some_and(|c| c.is_ascii_digit()) {
                s.extend(self.advance());
                if signed {
                    s.extend(self.advance());
                }
                self.take_digits(&mut s);
            }
        }
        if let Some(c) = self.peek() {
            if matches!(c, 'l' | 'L' | 'f' | 'F' | 'd' | 'D') {
                s.push(c);
                self.advance();
            }
        }
        Ok(TokenKind::Number(s))
    }

    fn take_digits(&mut self, s: &mut String) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_ident_or_keyword(&mut self) -> TokenKind {
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                s.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if let Some(p) = Primitive::from_keyword(&s) {
            return TokenKind::Primitive(p);
        }
        match s.as_str() {
            "class" => TokenKind::Class,
            "extends" => TokenKind::Extends,
            "implements" => TokenKind::Implements,
            "public" => TokenKind::Access(Access::Public),
            "private" => TokenKind::Access(Access::Private),
            "protected" => TokenKind::Access(Access::Protected),
            "final" => TokenKind::Final,
            "super" => TokenKind::Super,
            "new" => TokenKind::New,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "return" => TokenKind::Return,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => TokenKind::Ident(s),
        }
    }

    /// Reads a quoted literal body after the opening `quote`, keeping escape
    /// sequences exactly as written.
    fn read_quoted(&mut self, quote: char, line: usize, col: usize) -> Result<String> {
        let what = if quote == '"' { "string" } else { "char literal" };
        let mut s = String::new();
        loop {
            match self.advance() {
                Some(c) if c == quote => return Ok(s),
                Some('\\') => {
                    s.push('\\');
                    match self.advance() {
                        Some('\n') | None => break,
                        Some(n) => s.push(n),
                    }
                }
                Some('\n') | None => break,
                Some(other) => s.push(other),
            }
        }
        Err(Error::with_span(format!("Unterminated {}", what), line, col))
    }

    /// Consumes `second` if it is the next character, yielding `then`;
    /// otherwise yields `otherwise`.
    fn either(&mut self, second: char, then: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.peek() == Some(second) {
            self.advance();
            then
        } else {
            otherwise
        }
    }

    /// Tokenize the entire input into a vector of tokens ending with Eof.
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia()?;
            let line = self.line;
            let col = self.col;
            let Some(c) = self.peek() else {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    line,
                    col,
                });
                break;
            };
            if c.is_ascii_digit() {
                let kind = self.read_number(line, col)?;
                tokens.push(Token { kind, line, col });
                continue;
            }
            if c.is_ascii_alphabetic() || c == '_' || c == '$' {
                let kind = self.read_ident_or_keyword();
                tokens.push(Token { kind, line, col });
                continue;
            }
            self.advance();
            let kind = match c {
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '[' => TokenKind::LBracket,
                ']' => TokenKind::RBracket,
                ';' => TokenKind::Semicolon,
                ',' => TokenKind::Comma,
                '.' => TokenKind::Dot,
                '+' => TokenKind::BinOp(BinaryOp::Add),
                '-' => TokenKind::BinOp(BinaryOp::Sub),
                '*' => TokenKind::BinOp(BinaryOp::Mul),
                '/' => TokenKind::BinOp(BinaryOp::Div),
                '%' => TokenKind::BinOp(BinaryOp::Rem),
                '=' => self.either('=', TokenKind::BinOp(BinaryOp::Eq), TokenKind::Equal),
                '!' => self.either('=', TokenKind::BinOp(BinaryOp::Ne), TokenKind::Bang),
                '<' => self.either(
                    '=',
                    TokenKind::BinOp(BinaryOp::Le),
                    TokenKind::BinOp(BinaryOp::Lt),
                ),
                '>' => self.either(
                    '=',
                    TokenKind::BinOp(BinaryOp::Ge),
                    TokenKind::BinOp(BinaryOp::Gt),
                ),
                '&' if self.peek() == Some('&') => {
                    self.advance();
                    TokenKind::BinOp(BinaryOp::And)
                }
                '|' if self.peek() == Some('|') => {
                    self.advance();
                    TokenKind::BinOp(BinaryOp::Or)
                }
                '&' => return error_at(line, col, "Unexpected '&' (did you mean '&&'?)"),
                '|' => return error_at(line, col, "Unexpected '|' (did you mean '||'?)"),
                '"' => TokenKind::Str(self.read_quoted('"', line, col)?),
                '\'' => TokenKind::Char(self.read_quoted('\'', line, col)?),
                other => {
                    return error_at(line, col, format!("Unexpected character '{}'", other));
                }
            };
            tokens.push(Token { kind, line, col });
        }
        Ok(tokens)
    }
}
