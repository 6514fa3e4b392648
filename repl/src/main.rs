use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use analyzer::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_HEIGHT, ParseOptions, TrailingInput, format_error};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Enter an arithmetic expression: ";

/// Evaluates arithmetic expressions over `+ - * /`, parentheses and non-negative integers.
///
/// With no EXPR, reads one expression per line from stdin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate.
    expr: Option<String>,

    /// Reject input left over after a complete expression.
    #[arg(long)]
    strict: bool,

    /// Print the parsed expression before its value.
    #[arg(long)]
    ast: bool,

    /// Maximum parenthesis nesting depth.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum height of the parsed expression, one level per operator in a chain.
    #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT)]
    max_height: usize,
}

impl Args {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            trailing: if self.strict {
                TrailingInput::Reject
            } else {
                TrailingInput::Ignore
            },
            max_depth: self.max_depth,
            max_height: self.max_height,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let options = args.parse_options();

    if let Some(expr) = &args.expr {
        let (output, ok) = run_line(expr, &options, args.ast);
        println!("{output}");
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut out = io::stdout().lock();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (output, _) = run_line(&line, &options, args.ast);
        writeln!(out, "{output}")?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Evaluates one line, returning the text to print and whether it succeeded.
fn run_line(line: &str, options: &ParseOptions, show_ast: bool) -> (String, bool) {
    match analyzer::parse_with(line, options) {
        Ok(expr) => {
            let value = evaluator::eval(&expr);
            let output = if show_ast {
                format!("{}\n= {value}", expr.pretty())
            } else {
                value.to_string()
            };
            (output, true)
        }
        Err(err) => {
            tracing::debug!(%err, "rejected input");
            (format_error(line, &err).trim_end().to_string(), false)
        }
    }
}
