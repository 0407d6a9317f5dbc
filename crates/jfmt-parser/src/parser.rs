//! Recursive-descent parser producing a [`ClassDecl`] from tokens.

use jfmt_syntax::ast::*;
use jfmt_syntax::error::{error_at, Result};
use jfmt_syntax::token::{Token, TokenKind};

/// Modifiers read in front of a class member before its kind is known.
struct Modifiers {
    access: Option<Access>,
    is_final: bool,
    line: usize,
    col: usize,
}

impl Modifiers {
    fn is_empty(&self) -> bool {
        self.access.is_none() && !self.is_final
    }
}

/// What a (possibly dotted) name turned out to be once its suffix was read.
enum NameExpr {
    Name(String),
    Call(CallExpr),
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a parser over `tokens`; an `Eof` token is appended if missing.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let needs_eof = !matches!(tokens.last(), Some(Token { kind: TokenKind::Eof, .. }));
        if needs_eof {
            let (line, col) = tokens.last().map(|t| (t.line, t.col)).unwrap_or((1, 1));
            tokens.push(Token {
                kind: TokenKind::Eof,
                line,
                col,
            });
        }
        Self { tokens, pos: 0 }
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek(&self) -> &TokenKind {
        &self.current().kind
    }

    fn peek_at(&self, n: usize) -> &TokenKind {
        let last = &self.tokens[self.tokens.len() - 1];
        &self.tokens.get(self.pos + n).unwrap_or(last).kind
    }

    fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek() == kind
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn unexpected<T>(&self, expected: &str) -> Result<T> {
        let tok = self.current();
        error_at(
            tok.line,
            tok.col,
            format!("Expected {}, found {}", expected, tok.kind.describe()),
        )
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.check(&kind) {
            Ok(self.advance())
        } else {
            self.unexpected(&kind.describe())
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<String> {
        match self.peek() {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => self.unexpected(what),
        }
    }

    /// Parse a whole compilation unit: exactly one class and nothing after it.
    pub fn parse_class(&mut self) -> Result<ClassDecl> {
        let access = self.parse_access();
        let is_final = self.eat(&TokenKind::Final);
        self.expect(TokenKind::Class)?;
        let name = self.expect_ident("class name")?;

        let extends = if self.eat(&TokenKind::Extends) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let mut implements = Vec::new();
        if self.eat(&TokenKind::Implements) {
            implements.push(self.parse_type()?);
            while self.eat(&TokenKind::Comma) {
                implements.push(self.parse_type()?);
            }
        }

        let mut class = ClassDecl {
            access,
            is_final,
            name,
            extends,
            implements,
            fields: Vec::new(),
            constructors: Vec::new(),
            functions: Vec::new(),
        };

        self.expect(TokenKind::LBrace)?;
        while !self.check(&TokenKind::RBrace) {
            if self.check(&TokenKind::Eof) {
                return self.unexpected("'}' to close the class body");
            }
            self.parse_member(&mut class)?;
        }
        self.advance();

        if !self.check(&TokenKind::Eof) {
            return self.unexpected("end of input after the class body");
        }
        Ok(class)
    }

    fn parse_access(&mut self) -> Option<Access> {
        if let TokenKind::Access(a) = *self.peek() {
            self.advance();
            Some(a)
        } else {
            None
        }
    }

    fn parse_member(&mut self, class: &mut ClassDecl) -> Result<()> {
        let start = self.current();
        let (line, col) = (start.line, start.col);
        let access = self.parse_access();
        let is_final = self.eat(&TokenKind::Final);
        let mods = Modifiers {
            access,
            is_final,
            line,
            col,
        };

        let is_ctor = matches!(self.peek(), TokenKind::Ident(_))
            && matches!(self.peek_at(1), TokenKind::LParen);
        if is_ctor {
            let ctor = self.parse_constructor(&class.name, mods)?;
            class.constructors.push(ctor);
            return Ok(());
        }

        let ty = self.parse_type()?;
        let dims = self.parse_dims()?;
        let name_tok = self.current().clone();
        let name = self.expect_ident("member name")?;
        match self.peek() {
            TokenKind::Semicolon => {
                self.advance();
                class.fields.push(Field {
                    access: mods.access,
                    is_final: mods.is_final,
                    ty,
                    dims,
                    name,
                });
                Ok(())
            }
            TokenKind::LParen if dims > 0 => error_at(
                name_tok.line,
                name_tok.col,
                format!("Function '{}' cannot return an array type", name),
            ),
            TokenKind::LParen => {
                let args = self.parse_args()?;
                let body = self.parse_block()?;
                class.functions.push(Function {
                    access: mods.access,
                    is_final: mods.is_final,
                    return_type: ty,
                    name,
                    args,
                    body,
                });
                Ok(())
            }
            _ => self.unexpected("';' or '('"),
        }
    }

    fn parse_constructor(&mut self, class_name: &str, mods: Modifiers) -> Result<Constructor> {
        if !mods.is_empty() {
            return error_at(mods.line, mods.col, "Constructors cannot have modifiers");
        }
        let name_tok = self.current().clone();
        let name = self.expect_ident("constructor name")?;
        if name != class_name {
            return error_at(
                name_tok.line,
                name_tok.col,
                format!(
                    "Constructor name '{}' does not match class '{}'",
                    name, class_name
                ),
            );
        }
        let args = self.parse_args()?;

        self.expect(TokenKind::LBrace)?;
        let super_call = if self.eat(&TokenKind::Super) {
            let params = self.parse_params()?;
            self.expect(TokenKind::Semicolon)?;
            Some(params)
        } else {
            None
        };
        let body = self.parse_stmts_until_brace()?;
        Ok(Constructor {
            name,
            args,
            super_call,
            body,
        })
    }

    fn parse_type(&mut self) -> Result<Type> {
        match self.peek() {
            TokenKind::Primitive(p) => {
                let p = *p;
                self.advance();
                Ok(Type::Primitive(p))
            }
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(Type::Named(name))
            }
            _ => self.unexpected("type"),
        }
    }

    /// Counts `[]` pairs following a type.
    fn parse_dims(&mut self) -> Result<usize> {
        let mut dims = 0;
        while self.eat(&TokenKind::LBracket) {
            self.expect(TokenKind::RBracket)?;
            dims += 1;
        }
        Ok(dims)
    }

    fn parse_args(&mut self) -> Result<Vec<Argument>> {
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if self.eat(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            let is_final = self.eat(&TokenKind::Final);
            let ty = self.parse_type()?;
            let dims = self.parse_dims()?;
            let name = self.expect_ident("argument name")?;
            args.push(Argument {
                is_final,
                ty,
                dims,
                name,
            });
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(args)
    }

    fn parse_block(&mut self) -> Result<Vec<Stmt>> {
        self.expect(TokenKind::LBrace)?;
        self.parse_stmts_until_brace()
    }

    /// Statements up to and including the closing `}` of the current block.
    fn parse_stmts_until_brace(&mut self) -> Result<Vec<Stmt>> {
        let mut body = Vec::new();
        loop {
            match self.peek() {
                TokenKind::RBrace => {
                    self.advance();
                    return Ok(body);
                }
                TokenKind::Eof => return self.unexpected("'}'"),
                _ => body.push(self.parse_stmt()?),
            }
        }
    }

    pub fn parse_stmt(&mut self) -> Result<Stmt> {
        match self.peek() {
            TokenKind::Final | TokenKind::Primitive(_) => Ok(Stmt::Local(self.parse_local()?)),
            TokenKind::Ident(_) => {
                let is_decl = matches!(self.peek_at(1), TokenKind::Ident(_))
                    || matches!(
                        (self.peek_at(1), self.peek_at(2)),
                        (TokenKind::LBracket, TokenKind::RBracket)
                    );
                if is_decl {
                    Ok(Stmt::Local(self.parse_local()?))
                } else {
                    self.parse_assign_or_call()
                }
            }
            TokenKind::Break => {
                self.advance();
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Break)
            }
            TokenKind::Continue => {
                self.advance();
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Continue)
            }
            TokenKind::Return => {
                self.advance();
                let value = if self.check(&TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Return(value))
            }
            TokenKind::If => {
                self.advance();
                let cond = self.parse_condition()?;
                let then_body = self.parse_block()?;
                let else_body = if self.eat(&TokenKind::Else) {
                    Some(self.parse_block()?)
                } else {
                    None
                };
                Ok(Stmt::If {
                    cond,
                    then_body,
                    else_body,
                })
            }
            TokenKind::While => {
                self.advance();
                let cond = self.parse_condition()?;
                let body = self.parse_block()?;
                Ok(Stmt::While { cond, body })
            }
            TokenKind::Super => {
                let tok = self.current();
                error_at(
                    tok.line,
                    tok.col,
                    "'super(...)' is only allowed as the first statement of a constructor",
                )
            }
            _ => self.unexpected("statement"),
        }
    }

    fn parse_condition(&mut self) -> Result<Expr> {
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen)?;
        Ok(cond)
    }

    fn parse_local(&mut self) -> Result<LocalVar> {
        let is_final = self.eat(&TokenKind::Final);
        let ty = self.parse_type()?;
        let dims = self.parse_dims()?;
        let name = self.expect_ident("variable name")?;
        let init = if self.eat(&TokenKind::Equal) {
            Some(self.parse_init()?)
        } else {
            None
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(LocalVar {
            is_final,
            ty,
            dims,
            name,
            init,
        })
    }

    fn parse_assign_or_call(&mut self) -> Result<Stmt> {
        let stmt = match self.parse_name_expr()? {
            NameExpr::Name(name) => {
                self.expect(TokenKind::Equal)?;
                Stmt::Assign {
                    target: Target::Name(name),
                    value: self.parse_init()?,
                }
            }
            NameExpr::Call(CallExpr::Index { name, indices }) if self.check(&TokenKind::Equal) => {
                self.advance();
                Stmt::Assign {
                    target: Target::Index { name, indices },
                    value: self.parse_init()?,
                }
            }
            NameExpr::Call(call) => Stmt::Call(call),
        };
        self.expect(TokenKind::Semicolon)?;
        Ok(stmt)
    }

    fn parse_init(&mut self) -> Result<Init> {
        if self.check(&TokenKind::New) {
            Ok(Init::New(self.parse_new()?))
        } else {
            Ok(Init::Expr(self.parse_expr()?))
        }
    }

    fn parse_new(&mut self) -> Result<NewExpr> {
        self.expect(TokenKind::New)?;
        let ty = self.parse_type()?;
        match self.peek() {
            TokenKind::LParen => {
                let params = self.parse_params()?;
                Ok(NewExpr::Object { ty, params })
            }
            TokenKind::LBracket => {
                let dims = self.parse_indices()?;
                Ok(NewExpr::Array { ty, dims })
            }
            _ => self.unexpected("'(' or '[' after the constructed type"),
        }
    }

    /// One or more `[expr]` groups.
    fn parse_indices(&mut self) -> Result<Vec<Expr>> {
        let mut indices = Vec::new();
        while self.eat(&TokenKind::LBracket) {
            indices.push(self.parse_expr()?);
            self.expect(TokenKind::RBracket)?;
        }
        if indices.is_empty() {
            return self.unexpected("'['");
        }
        Ok(indices)
    }

    /// Reads a dotted name and whatever call or index suffix follows it.
    ///
    /// A `.name(` sequence ends the name and starts a chained call, so the
    /// receiver of a chain never contains the first method name.
    fn parse_name_expr(&mut self) -> Result<NameExpr> {
        let mut name = self.expect_ident("identifier")?;
        while matches!(self.peek(), TokenKind::Dot)
            && matches!(self.peek_at(1), TokenKind::Ident(_))
            && !matches!(self.peek_at(2), TokenKind::LParen)
        {
            self.advance();
            let part = self.expect_ident("identifier")?;
            name.push('.');
            name.push_str(&part);
        }

        match self.peek() {
            TokenKind::LParen => {
                let params = self.parse_params()?;
                Ok(NameExpr::Call(CallExpr::Plain { name, params }))
            }
            TokenKind::Dot => {
                let mut calls = Vec::new();
                while self.eat(&TokenKind::Dot) {
                    let method = self.expect_ident("method name")?;
                    if !self.check(&TokenKind::LParen) {
                        return self.unexpected("'(' after method name");
                    }
                    let params = self.parse_params()?;
                    calls.push(MethodCall {
                        name: method,
                        params,
                    });
                }
                Ok(NameExpr::Call(CallExpr::Chain {
                    receiver: name,
                    calls,
                }))
            }
            TokenKind::LBracket => {
                let indices = self.parse_indices()?;
                Ok(NameExpr::Call(CallExpr::Index { name, indices }))
            }
            _ => Ok(NameExpr::Name(name)),
        }
    }

    fn parse_params(&mut self) -> Result<Vec<Param>> {
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if self.eat(&TokenKind::RParen) {
            return Ok(params);
        }
        loop {
            params.push(self.parse_param()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        if !self.eat(&TokenKind::RParen) {
            return self.unexpected("',' or ')'");
        }
        Ok(params)
    }

    fn parse_param(&mut self) -> Result<Param> {
        if let Some(lit) = literal_of(self.peek()) {
            self.advance();
            return Ok(Param::Literal(lit));
        }
        if !matches!(self.peek(), TokenKind::Ident(_)) {
            return self.unexpected("identifier, literal or call");
        }
        match self.parse_name_expr()? {
            NameExpr::Name(name) => Ok(Param::Ident(name)),
            NameExpr::Call(call) => Ok(Param::Call(call)),
        }
    }

    /// Parse a full expression.
    pub fn parse_expr(&mut self) -> Result<Expr> {
        self.parse_binary(1)
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                TokenKind::BinOp(op) if op.precedence() >= min_prec => *op,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_binary(op.precedence() + 1)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        if self.eat(&TokenKind::Bang) {
            let operand = self.parse_unary()?;
            return Ok(Expr::Not(Box::new(operand)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        if let Some(lit) = literal_of(self.peek()) {
            self.advance();
            return Ok(Expr::Literal(lit));
        }
        match self.peek() {
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(Expr::Paren(Box::new(inner)))
            }
            TokenKind::Ident(_) => match self.parse_name_expr()? {
                NameExpr::Name(name) => Ok(Expr::Ident(name)),
                NameExpr::Call(call) => Ok(Expr::Call(call)),
            },
            _ => self.unexpected("expression"),
        }
    }
}

fn literal_of(kind: &TokenKind) -> Option<Literal> {
    let lit = match kind {
        TokenKind::Number(n) => Literal::Number(n.clone()),
        TokenKind::Str(s) => Literal::Str(s.clone()),
        TokenKind::Char(c) => Literal::Char(c.clone()),
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        TokenKind::Null => Literal::Null,
        _ => return None,
    };
    Some(lit)
}
