//! calculator: command-line front end
//!
//! ## Usage
//! ```text
//! calculator eval <operation> <lhs> <rhs>    evaluate one operation
//! calculator check [suite.yaml]              run a case suite (built-in reference suite by default)
//! ```
//!
//! ## Configuration
//! - CALCULATOR_CONFIG: Path to YAML config (default: calculator.yaml)
//! - CALCULATOR_LOG: Log filter directive (default: from config, "info")
//! - CALCULATOR_TOLERANCE: Tolerance for expected values (default: 1e-9)
//!
//! Exit code is 0 on success, 1 when an operation fails or any case fails,
//! and 2 on usage or configuration errors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use calculator::config::CalculatorConfig;
use calculator::utils::bootstrap::init_tracing;
use calculator::{Operation, Suite};

const EXIT_FAILED: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// Arithmetic operations and case suites
#[derive(Parser, Debug)]
#[command(name = "calculator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one operation and print the result
    Eval {
        /// Operation name or symbol (add, sub, *, /, ...)
        op: Operation,

        /// Left operand
        #[arg(allow_negative_numbers = true)]
        lhs: f64,

        /// Right operand
        #[arg(allow_negative_numbers = true)]
        rhs: f64,
    },

    /// Run a case suite and report each outcome
    Check {
        /// YAML suite file (defaults to the built-in reference suite)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match CalculatorConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    init_tracing(&config.logging.filter);
    config.log_rejected_overrides();

    match cli.command {
        Command::Eval { op, lhs, rhs } => evaluate(op, lhs, rhs),
        Command::Check { path } => check(path, &config),
    }
}

fn evaluate(op: Operation, lhs: f64, rhs: f64) -> ExitCode {
    match op.apply(lhs, rhs) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_FAILED)
        }
    }
}

fn check(path: Option<PathBuf>, config: &CalculatorConfig) -> ExitCode {
    let suite = match path {
        Some(path) => match Suite::from_file(&path) {
            Ok(suite) => suite,
            Err(e) => {
                error!(error = %e, "failed to load suite");
                eprintln!("{e}");
                return ExitCode::from(EXIT_USAGE);
            }
        },
        None => Suite::reference(),
    };

    info!(suite = %suite.name, cases = suite.len(), "running suite");
    let report = suite.run(config.check.tolerance);

    for result in &report.results {
        println!("{result}");
    }
    println!("{}", report.summary());

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FAILED)
    }
}
