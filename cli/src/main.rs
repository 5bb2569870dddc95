mod error_formatter;
mod formatter;
mod interactive;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formatter::Formatter;
use std::io;
use tracing::debug;
use webcalc::{Call, Engine};

#[derive(Parser)]
#[command(name = "webcalc")]
#[command(about = "Integer add and factorial, from the terminal.")]
#[command(
    long_about = "webcalc exposes add() and factorial() over 32-bit integers, the same functions the browser build exports.\nRun without a command to print the greeting, call a function directly, or evaluate call expressions."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two integers (wraps on overflow)
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
        /// Output the value only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
    },
    /// Factorial of an integer (0 for negative input, wraps on overflow)
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i32,
        /// Output the value only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
    },
    /// Evaluate call expressions (try: "add(2, 3); factorial(5)")
    ///
    /// Each expression holds one or more calls separated by ';' or newlines.
    /// Results are printed in order as a table.
    Eval {
        /// Call expressions
        ///
        /// Examples:
        ///   "add(2, 3)"
        ///   "factorial(10)"
        ///   "add(-7, 7); factorial(5)"
        #[arg(value_name = "EXPR", required = true)]
        exprs: Vec<String>,
        /// Output raw values only, one per line
        #[arg(short = 'r', long)]
        raw: bool,
    },
    /// Pick a function and enter its arguments interactively
    Interactive,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match &cli.command {
        None => greeting_command(),
        Some(Commands::Add { a, b, raw }) => call_command(Call::Add { a: *a, b: *b }, *raw),
        Some(Commands::Factorial { n, raw }) => call_command(Call::Factorial { n: *n }, *raw),
        Some(Commands::Eval { exprs, raw }) => eval_command(exprs, *raw),
        Some(Commands::Interactive) => interactive_command(),
    };

    if let Err(e) = result {
        // Render parse errors against their source, everything else as-is
        if let Some(webcalc_err) = e.downcast_ref::<webcalc::WebcalcError>() {
            eprintln!("{}", error_formatter::format_error(webcalc_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout only ever carries results
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webcalc=warn".into()),
        )
        .init();
}

fn greeting_command() -> Result<()> {
    webcalc::write_greeting(&mut io::stdout().lock())?;
    Ok(())
}

fn call_command(call: Call, raw: bool) -> Result<()> {
    let engine = Engine::new();
    let evaluation = engine.evaluate(&call);
    debug!("Evaluated {}", evaluation);

    let formatter = Formatter::default();
    print!("{}", formatter.format_evaluation(&evaluation, raw));

    Ok(())
}

fn eval_command(exprs: &[String], raw: bool) -> Result<()> {
    let engine = Engine::new();
    let results = engine.evaluate_all(exprs)?;
    debug!(
        "Evaluated {} call(s) from {} expression(s)",
        results.len(),
        exprs.len()
    );

    let formatter = Formatter::default();
    print!("{}", formatter.format_evaluations(&results, raw));

    Ok(())
}

fn interactive_command() -> Result<()> {
    let call = interactive::run_interactive()?;
    call_command(call, false)
}
