//! jsonobj CLI.
//!
//! Parses JSON files into the in-memory tree and prints them back in the
//! indented layout, or just checks that they parse.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jsonobj::json::{parse_file_with_limits, write_pretty, Limits};
use jsonobj::JsonError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsonobj")]
#[command(about = "Parse and pretty-print JSON documents", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file with parse limits, e.g. {"max_nesting_depth": 32}
    #[arg(long, global = true, value_name = "FILE")]
    limits: Option<PathBuf>,

    /// Use strict limits (1 MiB input, depth 64)
    #[arg(long, global = true, conflicts_with = "limits")]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse files and print them in indented form
    Fmt {
        /// Files to format
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Parse files and report whether each one is valid
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show version information
    Version,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn load_limits(cli: &Cli) -> Result<Limits, String> {
    if cli.strict {
        return Ok(Limits::strict());
    }
    match &cli.limits {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("{}: {}", path.display(), e))?;
            Limits::from_json(&text).map_err(|e| format!("{}: {}", path.display(), e))
        }
        None => Ok(Limits::default()),
    }
}

fn fmt_file(path: &Path, limits: Limits, out: &mut impl Write) -> Result<(), JsonError> {
    let value = parse_file_with_limits(path, limits)?;
    write_pretty(&value, out)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let limits = match load_limits(&cli) {
        Ok(limits) => limits,
        Err(msg) => {
            eprintln!("error: invalid limits: {}", msg);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?limits, "using parse limits");

    match &cli.command {
        Commands::Fmt { files } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for path in files {
                if let Err(e) = fmt_file(path, limits, &mut out) {
                    eprintln!("error: {}: {}", path.display(), e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Commands::Check { files } => {
            let mut failed = false;
            for path in files {
                match parse_file_with_limits(path, limits) {
                    Ok(_) => println!("ok: {}", path.display()),
                    Err(e) => {
                        println!("error: {}: {}", path.display(), e);
                        failed = true;
                    }
                }
            }
            if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Commands::Version => {
            println!("jsonobj v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}
