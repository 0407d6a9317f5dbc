use jfmt_fmt::{format_file, format_source, FormatOptions};
use std::fs;
use std::path::{Path, PathBuf};

fn fmt(src: &str) -> String {
    format_source(src, &FormatOptions::default()).unwrap()
}

/// Leading indentation units of every line that contains `needle`.
fn indent_units(out: &str, needle: &str) -> Vec<usize> {
    out.lines()
        .filter(|l| l.contains(needle))
        .map(|l| {
            let body = l.trim_start_matches('\t');
            assert!(!body.starts_with(' '), "indent mixes in spaces: {:?}", l);
            l.len() - body.len()
        })
        .collect()
}

#[test]
fn box_sample_renders_canonically() {
    let input =
        "class Box { private int x; Box(int x) { super(); this.x = x; } int get() { return x; } }";
    let expected = "class Box {\nprivate int x;\n\nBox(int x) {\n\tsuper();\n\tthis.x = x;\n}\n\nint get() {\n\treturn x;\n}\n}\n";
    assert_eq!(fmt(input), expected);
}

#[test]
fn canonical_output_is_idempotent() {
    let inputs = [
        "class Box { private int x; Box(int x) { super(); this.x = x; } int get() { return x; } }",
        "public class A extends B { A(){} void f(){ if(a){ if(b){ g(); } } else { } } }",
        "class P { void f() { x = ((a)); y = !(!b); } }",
    ];
    for input in inputs {
        let once = fmt(input);
        let twice = fmt(&once);
        assert_eq!(once, twice, "formatting is not idempotent for {:?}", input);
    }
}

#[test]
fn statements_are_indented_by_nesting_depth() {
    let out = fmt("class D { void f() { a(); while (x) { b(); if (y) { c(); } else { e(); } } } }");
    assert_eq!(indent_units(&out, "a();"), [1]);
    assert_eq!(indent_units(&out, "while"), [1]);
    assert_eq!(indent_units(&out, "b();"), [2]);
    assert_eq!(indent_units(&out, "if (y)"), [2]);
    assert_eq!(indent_units(&out, "c();"), [3]);
    assert_eq!(indent_units(&out, "e();"), [3]);
    assert_eq!(indent_units(&out, "} else {"), [2]);
}

#[test]
fn one_blank_line_between_fields_and_first_constructor() {
    let out = fmt("class A { int a; int b; A() { } }");
    assert_eq!(out, "class A {\nint a;\nint b;\n\nA() {\n}\n}\n");

    let out = fmt("class A { A() { } }");
    assert!(out.starts_with("class A {\nA() {"), "{}", out);
}

#[test]
fn omitted_modifiers_leave_no_extra_space() {
    let out = fmt("class A { int x; int f(int a, final int b) { return a; } }");
    assert!(out.contains("\nint x;\n"), "{}", out);
    assert!(out.contains("\nint f(int a, final int b) {\n"), "{}", out);
    assert!(!out.contains("  int"), "{}", out);
}

#[test]
fn array_field_brackets_are_echoed() {
    let out = fmt("class A { private int [ ] [ ] grid; }");
    assert!(out.contains("\nprivate int[][] grid;\n"), "{}", out);
}

#[test]
fn source_parentheses_are_kept_as_written() {
    let out = fmt("class A { int f() { return ((a + b)) * c - (d); } }");
    assert!(out.contains("return ((a + b)) * c - (d);"), "{}", out);
}

#[test]
fn exponent_and_hex_literals_are_echoed() {
    let out = fmt("class A { void f() { x = 1e5 + 0x1F; y = 2.5E-3f; } }");
    assert!(out.contains("\n\tx = 1e5 + 0x1F;\n"), "{}", out);
    assert!(out.contains("\n\ty = 2.5E-3f;\n"), "{}", out);
}

#[test]
fn syntax_error_is_reported_without_touching_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Bad.java");
    let output = dir.path().join("out.java");
    fs::write(&input, "class A { void f() { return 1; }").unwrap();
    fs::write(&output, "previous contents").unwrap();

    let err = format_file(&input, &output, &FormatOptions::default()).unwrap_err();
    assert!(err.is_syntax(), "{}", err);
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous contents");
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = format_file(
        &dir.path().join("nope.java"),
        &dir.path().join("out.java"),
        &FormatOptions::default(),
    )
    .unwrap_err();
    assert!(!err.is_syntax());
    assert!(err.msg.starts_with("Failed to read"), "{}", err.msg);
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("A.java");
    fs::write(&input, "class A{int x;}").unwrap();

    // The output path names an existing directory, so it cannot be created as a file.
    let err = format_file(&input, dir.path(), &FormatOptions::default()).unwrap_err();
    assert!(!err.is_syntax(), "{}", err);
    assert!(err.msg.starts_with("Failed to create"), "{}", err.msg);
}

#[test]
fn format_file_overwrites_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("A.java");
    let output = dir.path().join("A.out.java");
    fs::write(&input, "class A{int x;}").unwrap();
    fs::write(&output, "stale text that is longer than the result").unwrap();

    format_file(&input, &output, &FormatOptions::default()).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "class A {\nint x;\n}\n");
}

/// `<name>.input` / `<name>.java` pairs under tests/fixtures.
fn fixture_pairs() -> Vec<(PathBuf, PathBuf)> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let mut pairs: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("input"))
        .map(|p| {
            let expected = p.with_extension("java");
            (p, expected)
        })
        .collect();
    pairs.sort();
    pairs
}

#[test]
fn fixture_files_format_as_expected() {
    let pairs = fixture_pairs();
    assert!(!pairs.is_empty(), "No fixtures found in tests/fixtures");

    let mut failures = Vec::new();
    for (input, expected) in &pairs {
        let src = fs::read_to_string(input).unwrap();
        let want = fs::read_to_string(expected).unwrap();
        let got = fmt(&src);
        if got != want {
            failures.push(format!(
                "{}\n--- Expected ---\n{}\n--- Got ---\n{}",
                input.display(),
                want,
                got
            ));
        } else if fmt(&got) != got {
            failures.push(format!("{}: output is not idempotent", input.display()));
        }
    }
    if !failures.is_empty() {
        panic!("Fixture failures:\n\n{}", failures.join("\n\n"));
    }
}
