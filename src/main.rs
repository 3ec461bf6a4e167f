use std::io::BufRead;
use std::path::PathBuf;

use calc_eval::context::{AngleMode, NonFinitePolicy, Options};
use calc_eval::{format_value, Calculator};
use clap::Parser;
use itertools::Itertools;
use serde::Serialize;
use tracing::Level;

/// Evaluate arithmetic expressions: numbers, + - * / % ^ and parentheses.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Expression words, joined with single spaces. Reads one expression
    /// per stdin line when omitted.
    #[arg(allow_hyphen_values = true)]
    expr: Vec<String>,
    /// JSON options file (optional)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print infinities and NaN instead of failing
    #[arg(long)]
    allow_non_finite: bool,
    /// Trigonometric functions take radians
    #[arg(long)]
    radians: bool,
    /// Do not substitute π and e
    #[arg(long)]
    no_constants: bool,
    /// Apply a unary function (sqrt, sin, factorial, ...) to the result
    #[arg(long, value_name = "FN")]
    apply: Option<String>,
    /// Emit one JSON object per expression
    #[arg(long)]
    json: bool,
    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    expression: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Build options: file first, flags on top.
    let mut opts = match args.config.as_ref() {
        Some(path) => match Options::from_json_file(path) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
        },
        None => Options::default(),
    };
    if args.allow_non_finite { opts.non_finite = NonFinitePolicy::Allow; }
    if args.radians { opts.angle = AngleMode::Radians; }
    if args.no_constants { opts.substitute_constants = false; }

    let calc = Calculator::default().with_options(opts);
    if let Some(name) = args.apply.as_deref() {
        if calc.registry().get(name).is_none() {
            eprintln!("unknown function: {name} (known: {})", calc.registry().names().iter().join(", "));
            std::process::exit(2);
        }
    }

    let mut failed = false;
    if args.expr.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("stdin: {e}");
                    std::process::exit(2);
                }
            };
            if line.trim().is_empty() { continue; }
            failed |= !run(&calc, &line, &args);
        }
    } else {
        let expr = args.expr.iter().join(" ");
        failed = !run(&calc, &expr, &args);
    }

    if failed {
        std::process::exit(1);
    }
}

/// Evaluate and print one expression; false when it failed.
fn run(calc: &Calculator, expr: &str, args: &Args) -> bool {
    let outcome = calc.calculate(expr).and_then(|v| match args.apply.as_deref() {
        Some(name) => calc.apply(name, v),
        None => Ok(v),
    });

    let ok = outcome.is_ok();
    if args.json {
        let report = match outcome {
            Ok(v) => Report { expression: expr, value: Some(v), display: Some(format_value(v)), error: None },
            Err(e) => Report { expression: expr, value: None, display: None, error: Some(e.to_string()) },
        };
        match serde_json::to_string(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("{e}"),
        }
    } else {
        match outcome {
            Ok(v) => println!("{}", format_value(v)),
            Err(e) => eprintln!("{expr}: {e}"),
        }
    }
    ok
}
