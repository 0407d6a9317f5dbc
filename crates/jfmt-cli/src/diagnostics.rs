//! Colored error reporting for the `jfmt` binary.

use std::path::Path;

use jfmt_syntax::error::Error;
use owo_colors::OwoColorize;

/// Prints `err` to stderr, with a source excerpt and caret when the error
/// carries a position and the source text is available.
pub fn render_error(err: &Error, source: Option<&str>, path: &Path) {
    eprintln!("{}: {}", err.kind.label().red().bold(), err.msg.red());
    if let (Some(line), Some(col)) = (err.line, err.col) {
        eprintln!("  --> {}:{}:{}", path.display(), line, col);
        let src_line = source.and_then(|s| s.lines().nth(line.saturating_sub(1)));
        if let Some(src_line) = src_line {
            let gutter = format!("{:3} | ", line);
            eprintln!("     |");
            eprintln!("{}{}", gutter.bright_black(), src_line);

            let mut marker = " ".repeat(gutter.len() + col.saturating_sub(1));
            marker.push('^');
            eprintln!("{}{}", marker.red(), " error here".red());
            eprintln!("     |");
        }
    }
    if let Some(help) = suggestion(&err.msg) {
        eprintln!("{} {}", "Help:".yellow().bold(), help.yellow());
    }
}

/// Hint for the most common mistakes, keyed on the error message.
fn suggestion(msg: &str) -> Option<&'static str> {
    if msg.starts_with("Expected ';'") {
        Some("Every declaration, assignment, call, return, break and continue ends with ';'.")
    } else if msg.contains("'}'") {
        Some("Check that every '{' has a matching '}'.")
    } else if msg.contains("does not match class") {
        Some("Constructors must be named exactly like the class they belong to.")
    } else if msg.contains("Constructors cannot have modifiers") {
        Some("Write constructors as 'Name(args) { ... }' without access or final modifiers.")
    } else if msg.contains("Expected ',' or ')'") {
        Some("Call parameters may only be names, literals or calls; assign expressions to a local first.")
    } else if msg.starts_with("Failed to read") {
        Some("Check that the input file exists and is readable.")
    } else if msg.starts_with("Failed to create") || msg.starts_with("Failed to write") {
        Some("Check that the output location exists and is writable.")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_for_common_mistakes() {
        assert!(suggestion("Expected ';', found '}'").unwrap().contains("';'"));
        assert!(suggestion("Expected '}' to close the class body, found end of input")
            .unwrap()
            .contains("matching '}'"));
        assert!(suggestion("Constructor name 'B' does not match class 'A'").is_some());
        assert!(suggestion("Unexpected character '#'").is_none());
    }
}
