mod diagnostics;

use std::fs;
use std::path::PathBuf;
use std::process;

use jfmt_fmt::{format_file, FormatOptions};
use owo_colors::OwoColorize;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        eprintln!("{} jfmt <input> <output>", "Usage:".bold());
        process::exit(2);
    }
    let input = PathBuf::from(&args[0]);
    let output = PathBuf::from(&args[1]);

    if let Err(e) = format_file(&input, &output, &FormatOptions::default()) {
        let source = if e.is_syntax() {
            fs::read_to_string(&input).ok()
        } else {
            None
        };
        diagnostics::render_error(&e, source.as_deref(), &input);
        process::exit(1);
    }
}
