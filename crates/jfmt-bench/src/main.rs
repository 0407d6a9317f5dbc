use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{ArgAction, Parser};
use serde::Serialize;

use jfmt_fmt::{render, FormatOptions};
use jfmt_lexer::Lexer;
use jfmt_parser::Parser as ClassParser;
use jfmt_syntax::error::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "jfmt-bench", about = "Time the jfmt lexer, parser and renderer")]
struct Cli {
    /// Specific source(s) to run (by file stem, e.g. counter). If omitted, runs all discovered sources.
    #[arg(short = 't', long = "test", action = ArgAction::Append)]
    tests: Vec<String>,

    /// Iterations per source (measured)
    #[arg(short = 'n', long = "iterations", default_value_t = 10)]
    iterations: u32,

    /// Warmup iterations (not measured)
    #[arg(short = 'w', long = "warmup", default_value_t = 2)]
    warmup: u32,

    /// Output JSON file path; default: benchmark/results/<timestamp>.json
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// List discovered sources and exit
    #[arg(long = "list", default_value_t = false)]
    list: bool,
}

#[derive(Debug, Serialize)]
struct BenchResult {
    name: String,
    iterations: u32,
    avg_total_ms: f64,
    min_total_ms: f64,
    max_total_ms: f64,
    avg_lex_ms: f64,
    avg_parse_ms: f64,
    avg_render_ms: f64,
    output_bytes: usize,
}

#[derive(Debug, Serialize)]
struct OutputDoc {
    timestamp: String,
    jfmt_version: String,
    benchmarks: Vec<BenchResult>,
}

#[derive(Debug, Clone)]
struct SourceCase {
    name: String,
    path: PathBuf,
}

/// Per-iteration stage timings in milliseconds.
#[derive(Default)]
struct Samples {
    totals: Vec<f64>,
    lexes: Vec<f64>,
    parses: Vec<f64>,
    renders: Vec<f64>,
    output_bytes: usize,
}

fn workspace_root() -> PathBuf {
    // crates/jfmt-bench -> crates -> root
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or(manifest)
}

fn discover_sources() -> Vec<SourceCase> {
    let dir = workspace_root().join("benchmark/scripts");
    let mut out = Vec::new();
    if let Ok(entries) = fs::read_dir(&dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.extension().and_then(|s| s.to_str()) == Some("java") {
                let name = p.file_stem().and_then(|s| s.to_str()).unwrap_or("").to_string();
                out.push(SourceCase { name, path: p });
            }
        }
    }
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

fn format_once(src: &str, opts: &FormatOptions, samples: Option<&mut Samples>) -> Result<()> {
    let t0 = Instant::now();
    let mut t = Instant::now();

    let tokens = Lexer::new(src).tokenize()?;
    let t_lex = t.elapsed();

    t = Instant::now();
    let class = ClassParser::new(tokens).parse_class()?;
    let t_parse = t.elapsed();

    t = Instant::now();
    let bytes = render(&class, opts, Vec::new())?;
    let t_render = t.elapsed();

    if let Some(s) = samples {
        s.lexes.push(dur_ms(t_lex));
        s.parses.push(dur_ms(t_parse));
        s.renders.push(dur_ms(t_render));
        s.totals.push(dur_ms(t0.elapsed()));
        s.output_bytes = bytes.len();
    }
    Ok(())
}

fn measure_source(src: &str, iterations: u32, warmup: u32) -> Result<Samples> {
    let opts = FormatOptions::default();
    for _ in 0..warmup {
        format_once(src, &opts, None)?;
    }
    let mut samples = Samples::default();
    for _ in 0..iterations {
        format_once(src, &opts, Some(&mut samples))?;
    }
    Ok(samples)
}

fn dur_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn stats(vals: &[f64]) -> (f64, f64, f64) {
    if vals.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let min = vals.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = vals.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let avg = vals.iter().sum::<f64>() / (vals.len() as f64);
    (avg, min, max)
}

fn ensure_dir(p: &Path) -> Result<()> {
    fs::create_dir_all(p).map_err(|e| Error::io(format!("Failed to create {}", p.display()), &e))
}

fn run(cli: Cli) -> Result<()> {
    let mut sources = discover_sources();

    if cli.list {
        println!("Discovered sources:");
        for s in &sources {
            println!("- {} ({})", s.name, s.path.display());
        }
        return Ok(());
    }

    if !cli.tests.is_empty() {
        let wanted: std::collections::HashSet<_> =
            cli.tests.iter().map(|s| s.to_lowercase()).collect();
        sources.retain(|s| wanted.contains(&s.name.to_lowercase()));
        if sources.is_empty() {
            eprintln!("No matching sources. Use --list to see available.");
            std::process::exit(2);
        }
    }

    if sources.is_empty() {
        eprintln!("No .java sources found in benchmark/scripts.");
        std::process::exit(2);
    }

    let mut results = Vec::new();
    for case in &sources {
        let src = fs::read_to_string(&case.path)
            .map_err(|e| Error::io(format!("Failed to read {}", case.path.display()), &e))?;
        let samples = measure_source(&src, cli.iterations, cli.warmup)
            .map_err(|e| Error::new(format!("{}: {}", case.name, e)))?;
        let (avg_t, min_t, max_t) = stats(&samples.totals);
        let (avg_l, _, _) = stats(&samples.lexes);
        let (avg_p, _, _) = stats(&samples.parses);
        let (avg_r, _, _) = stats(&samples.renders);

        println!(
            "{:>12}: total avg={:.3}ms min={:.3}ms max={:.3}ms | lex={:.3}ms parse={:.3}ms render={:.3}ms | out={}B",
            case.name, avg_t, min_t, max_t, avg_l, avg_p, avg_r, samples.output_bytes
        );

        results.push(BenchResult {
            name: case.name.clone(),
            iterations: cli.iterations,
            avg_total_ms: avg_t,
            min_total_ms: min_t,
            max_total_ms: max_t,
            avg_lex_ms: avg_l,
            avg_parse_ms: avg_p,
            avg_render_ms: avg_r,
            output_bytes: samples.output_bytes,
        });
    }

    let out_path = match cli.output {
        Some(p) => p,
        None => {
            let results_dir = workspace_root().join("benchmark/results");
            // Windows-safe filename timestamp
            let ts_file = chrono::Utc::now().format("%Y-%m-%d_%H-%M-%SZ").to_string();
            results_dir.join(format!("{}.json", ts_file))
        }
    };

    let doc = OutputDoc {
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        jfmt_version: env!("CARGO_PKG_VERSION").to_string(),
        benchmarks: results,
    };

    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| Error::io("Failed to serialize results", &io::Error::from(e)))?;
    if let Some(parent) = out_path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(&out_path, json)
        .map_err(|e| Error::io(format!("Failed to write {}", out_path.display()), &e))?;

    println!("\nSaved results to {}", out_path.display());
    Ok(())
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}: {}", e.kind.label(), e);
        std::process::exit(1);
    }
}
