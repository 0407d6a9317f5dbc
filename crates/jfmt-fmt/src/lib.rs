//! Canonical formatting for single-class source files.
//!
//! The pipeline is lex, parse, render: [`format_source`] runs it in memory,
//! [`format_file`] reads one file and writes the result to another.
//!
//! ```rust
//! use jfmt_fmt::{format_source, FormatOptions};
//!
//! let out = format_source("class Box{int x;int get(){return x;}}", &FormatOptions::default()).unwrap();
//! assert_eq!(out, "class Box {\nint x;\n\nint get() {\n\treturn x;\n}\n}\n");
//! ```

pub mod render;
pub mod sink;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use jfmt_lexer::Lexer;
use jfmt_parser::Parser;
use jfmt_syntax::ast::ClassDecl;
use jfmt_syntax::error::{Error, Result};

pub use render::{render, Renderer};
pub use sink::Sink;

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// A single `\t` per level
    #[default]
    Tab,
    /// The given number of spaces per level
    Spaces(usize),
}

impl Indent {
    /// The text written once per depth level.
    pub fn unit(self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(n),
        }
    }
}

/// Formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub indent: Indent,
}

/// Lexes and parses `src` into a class declaration.
pub fn parse_source(src: &str) -> Result<ClassDecl> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_class()
}

/// Renders an already parsed class into a string.
pub fn format_class(class: &ClassDecl, opts: &FormatOptions) -> Result<String> {
    let bytes = render(class, opts, Vec::new())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Formats source text in memory.
pub fn format_source(src: &str, opts: &FormatOptions) -> Result<String> {
    let class = parse_source(src)?;
    format_class(&class, opts)
}

/// Formats `input` into `output`, replacing any existing output file.
///
/// The output file is only created once the input has parsed successfully,
/// so a syntax error leaves it untouched.
pub fn format_file(input: &Path, output: &Path, opts: &FormatOptions) -> Result<()> {
    let src = fs::read_to_string(input)
        .map_err(|e| Error::io(format!("Failed to read {}", input.display()), &e))?;
    let class = parse_source(&src)?;

    let file = File::create(output)
        .map_err(|e| Error::io(format!("Failed to create {}", output.display()), &e))?;
    render(&class, opts, BufWriter::new(file))
        .map_err(|e| Error::io(format!("Failed to write {}", output.display()), &e))?;
    Ok(())
}
