//! Canonical renderer: walks a [`ClassDecl`] and writes its canonical text.
//!
//! Layout rules:
//!
//! - class members sit at depth 0; every constructor, function, `if`, `else`
//!   and `while` body is one level deeper than its header
//! - each member and statement starts on a fresh line; the closing `}` of a
//!   block sits on its own line at the header's depth
//! - fields come first, then constructors, then functions; every member
//!   except a field following a field is preceded by a blank line
//! - parentheses are echoed from the source, never inserted
//! - the class's closing `}` is followed by exactly one newline

use std::io::{self, Write};

use jfmt_syntax::ast::*;

use crate::sink::Sink;
use crate::FormatOptions;

/// Renders `class` into `out` and returns the writer once everything has
/// been flushed, or the first I/O error encountered.
pub fn render<W: Write>(class: &ClassDecl, opts: &FormatOptions, out: W) -> io::Result<W> {
    let mut r = Renderer::new(out, opts);
    r.class(class);
    r.finish()
}

/// Depth-tracking writer for one class declaration.
///
/// A renderer owns its sink and indentation state; format several files by
/// creating one renderer per file.
pub struct Renderer<W: Write> {
    sink: Sink<W>,
    unit: String,
    depth: usize,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, opts: &FormatOptions) -> Self {
        Self {
            sink: Sink::new(out),
            unit: opts.indent.unit(),
            depth: 0,
        }
    }

    pub fn finish(self) -> io::Result<W> {
        self.sink.finish()
    }

    fn w(&mut self, text: &str) {
        self.sink.write(text);
    }

    /// Starts a new line indented to the current depth.
    fn newline(&mut self) {
        self.sink.write("\n");
        for _ in 0..self.depth {
            self.sink.write(&self.unit);
        }
    }

    pub fn class(&mut self, c: &ClassDecl) {
        self.modifiers(c.access, c.is_final);
        self.w("class ");
        self.w(&c.name);
        if let Some(base) = &c.extends {
            self.w(" extends ");
            self.w(base.name());
        }
        if !c.implements.is_empty() {
            self.w(" implements ");
            for (i, t) in c.implements.iter().enumerate() {
                if i > 0 {
                    self.w(", ");
                }
                self.w(t.name());
            }
        }
        self.w(" {");

        for f in &c.fields {
            self.newline();
            self.field(f);
        }
        let mut has_prev = !c.fields.is_empty();
        for ctor in &c.constructors {
            if has_prev {
                self.w("\n");
            }
            self.newline();
            self.constructor(ctor);
            has_prev = true;
        }
        for func in &c.functions {
            if has_prev {
                self.w("\n");
            }
            self.newline();
            self.function(func);
            has_prev = true;
        }

        self.w("\n}\n");
    }

    fn modifiers(&mut self, access: Option<Access>, is_final: bool) {
        if let Some(a) = access {
            self.w(a.as_str());
            self.w(" ");
        }
        if is_final {
            self.w("final ");
        }
    }

    fn ty(&mut self, ty: &Type, dims: usize) {
        self.w(ty.name());
        for _ in 0..dims {
            self.w("[]");
        }
    }

    fn field(&mut self, f: &Field) {
        self.modifiers(f.access, f.is_final);
        self.ty(&f.ty, f.dims);
        self.w(" ");
        self.w(&f.name);
        self.w(";");
    }

    fn args(&mut self, args: &[Argument]) {
        self.w("(");
        for (i, a) in args.iter().enumerate() {
            if i > 0 {
                self.w(", ");
            }
            self.modifiers(None, a.is_final);
            self.ty(&a.ty, a.dims);
            self.w(" ");
            self.w(&a.name);
        }
        self.w(")");
    }

    fn constructor(&mut self, c: &Constructor) {
        self.w(&c.name);
        self.args(&c.args);
        self.w(" {");
        self.depth += 1;
        if let Some(params) = &c.super_call {
            self.newline();
            self.w("super");
            self.params(params);
            self.w(";");
        }
        self.stmts(&c.body);
        self.depth -= 1;
        self.newline();
        self.w("}");
    }

    fn function(&mut self, f: &Function) {
        self.modifiers(f.access, f.is_final);
        self.ty(&f.return_type, 0);
        self.w(" ");
        self.w(&f.name);
        self.args(&f.args);
        self.block(&f.body);
    }

    /// ` {`, the indented statements, then `}` on its own line.
    fn block(&mut self, body: &[Stmt]) {
        self.w(" {");
        self.depth += 1;
        self.stmts(body);
        self.depth -= 1;
        self.newline();
        self.w("}");
    }

    fn stmts(&mut self, body: &[Stmt]) {
        for s in body {
            self.newline();
            self.stmt(s);
        }
    }

    fn stmt(&mut self, s: &Stmt) {
        match s {
            Stmt::Local(var) => {
                self.modifiers(None, var.is_final);
                self.ty(&var.ty, var.dims);
                self.w(" ");
                self.w(&var.name);
                if let Some(init) = &var.init {
                    self.w(" = ");
                    self.init(init);
                }
                self.w(";");
            }
            Stmt::Assign { target, value } => {
                match target {
                    Target::Name(name) => self.w(name),
                    Target::Index { name, indices } => self.indexed(name, indices),
                }
                self.w(" = ");
                self.init(value);
                self.w(";");
            }
            Stmt::Break => self.w("break;"),
            Stmt::Continue => self.w("continue;"),
            Stmt::Call(call) => {
                self.call(call);
                self.w(";");
            }
            Stmt::Return(value) => {
                self.w("return");
                if let Some(e) = value {
                    self.w(" ");
                    self.expr(e);
                }
                self.w(";");
            }
            Stmt::If {
                cond,
                then_body,
                else_body,
            } => {
                self.w("if (");
                self.expr(cond);
                self.w(")");
                self.block(then_body);
                if let Some(else_body) = else_body {
                    self.w(" else");
                    self.block(else_body);
                }
            }
            Stmt::While { cond, body } => {
                self.w("while (");
                self.expr(cond);
                self.w(")");
                self.block(body);
            }
        }
    }

    fn init(&mut self, init: &Init) {
        match init {
            Init::Expr(e) => self.expr(e),
            Init::New(NewExpr::Object { ty, params }) => {
                self.w("new ");
                self.w(ty.name());
                self.params(params);
            }
            Init::New(NewExpr::Array { ty, dims }) => {
                self.w("new ");
                self.w(ty.name());
                self.brackets(dims);
            }
        }
    }

    fn expr(&mut self, e: &Expr) {
        match e {
            Expr::Ident(name) => self.w(name),
            Expr::Literal(lit) => self.literal(lit),
            Expr::Not(operand) => {
                self.w("!");
                self.expr(operand);
            }
            Expr::Binary { op, lhs, rhs } => {
                self.expr(lhs);
                self.w(" ");
                self.w(op.as_str());
                self.w(" ");
                self.expr(rhs);
            }
            Expr::Paren(inner) => {
                self.w("(");
                self.expr(inner);
                self.w(")");
            }
            Expr::Call(call) => self.call(call),
        }
    }

    fn literal(&mut self, lit: &Literal) {
        match lit {
            Literal::Number(n) => self.w(n),
            Literal::Str(s) => {
                self.w("\"");
                self.w(s);
                self.w("\"");
            }
            Literal::Char(c) => {
                self.w("'");
                self.w(c);
                self.w("'");
            }
            Literal::Bool(true) => self.w("true"),
            Literal::Bool(false) => self.w("false"),
            Literal::Null => self.w("null"),
        }
    }

    fn call(&mut self, call: &CallExpr) {
        match call {
            CallExpr::Plain { name, params } => {
                self.w(name);
                self.params(params);
            }
            CallExpr::Index { name, indices } => self.indexed(name, indices),
            CallExpr::Chain { receiver, calls } => {
                self.w(receiver);
                for c in calls {
                    self.w(".");
                    self.w(&c.name);
                    self.params(&c.params);
                }
            }
        }
    }

    fn indexed(&mut self, name: &str, indices: &[Expr]) {
        self.w(name);
        self.brackets(indices);
    }

    fn brackets(&mut self, exprs: &[Expr]) {
        for e in exprs {
            self.w("[");
            self.expr(e);
            self.w("]");
        }
    }

    /// `(a, 1, f(x))`
    fn params(&mut self, params: &[Param]) {
        self.w("(");
        for (i, p) in params.iter().enumerate() {
            if i > 0 {
                self.w(", ");
            }
            match p {
                Param::Ident(name) => self.w(name),
                Param::Literal(lit) => self.literal(lit),
                Param::Call(call) => self.call(call),
            }
        }
        self.w(")");
    }
}
