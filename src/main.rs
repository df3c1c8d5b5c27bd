
use shunt::config::DEFAULT_MAX_LENGTH;
use shunt::eval::evaluate_str;
use shunt::parsing::check_length;
use shunt::{calculate, BracketMatching, Options};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

/// Convert an infix arithmetic expression to postfix and evaluate it
#[derive(Parser, Debug)]
#[command(name = "shunt")]
#[command(about = "Convert infix arithmetic to postfix and evaluate it", long_about = None)]
struct Args {
  /// Print the postfix form with every operand and operator separated by one space
  #[arg(long, conflicts_with = "postfix")]
  spaced: bool,

  /// Print a single JSON object instead of text
  #[arg(long)]
  json: bool,

  /// Treat the input as postfix (e.g. "3 4 2*+") and only evaluate it
  #[arg(long)]
  postfix: bool,

  /// Require each closing bracket to match the kind of the bracket it closes
  #[arg(long, conflicts_with = "postfix")]
  strict_brackets: bool,

  /// Longest accepted expression (infix or postfix), in characters
  #[arg(long, env = "SHUNT_MAX_LENGTH", default_value_t = DEFAULT_MAX_LENGTH)]
  max_length: usize,

  /// Expression to evaluate (if not provided, reads one line from stdin)
  expression: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
  #[serde(skip_serializing_if = "Option::is_none")]
  infix: Option<&'a str>,
  postfix: String,
  result: i64,
}

impl Args {
  fn options(&self) -> Options {
    let brackets = if self.strict_brackets { BracketMatching::Strict } else { BracketMatching::Positional };
    Options::new().with_max_length(self.max_length).with_brackets(brackets)
  }
}

fn main() -> ExitCode {
  let args = Args::parse();

  // RUST_LOG controls the log level; default to WARN if not set.
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));
  fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .init();

  exit_code(run(&args, &mut io::stdout().lock()))
}

/// Reports a failed run on stderr and maps the outcome to the exit
/// status.
fn exit_code(outcome: Result<()>) -> ExitCode {
  match outcome {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("Error: {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
  let expression = match &args.expression {
    Some(expression) => expression.clone(),
    None => read_expression(args.postfix)?,
  };

  let report = if args.postfix {
    check_length(&expression, &args.options())
      .with_context(|| format!("could not evaluate postfix '{expression}'"))?;
    let result = evaluate_str(&expression)
      .with_context(|| format!("could not evaluate postfix '{expression}'"))?;
    Report { infix: None, postfix: expression.clone(), result }
  } else {
    let calculation = calculate(&expression, &args.options())
      .with_context(|| format!("could not evaluate '{expression}'"))?;
    let postfix = if args.spaced { calculation.postfix.spaced() } else { calculation.postfix.to_string() };
    Report { infix: Some(&expression), postfix, result: calculation.result }
  };

  if args.json {
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)?;
  } else {
    if report.infix.is_some() {
      writeln!(out, "The corresponding postfix expression is: {}", report.postfix)?;
    }
    writeln!(out, "Final result is: {}", report.result)?;
  }
  Ok(())
}

/// Reads one line from stdin, prompting first if stdin is a terminal.
fn read_expression(postfix: bool) -> Result<String> {
  let stdin = io::stdin();
  if stdin.is_terminal() {
    let kind = if postfix { "postfix" } else { "infix" };
    print!("Enter your {kind} expression: ");
    io::stdout().flush()?;
  }
  let mut line = String::new();
  stdin.lock().read_line(&mut line).context("failed to read expression from stdin")?;
  Ok(strip_line_terminator(&line).to_owned())
}

fn strip_line_terminator(line: &str) -> &str {
  let line = line.strip_suffix('\n').unwrap_or(line);
  line.strip_suffix('\r').unwrap_or(line)
}
