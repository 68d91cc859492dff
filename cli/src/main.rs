#![deny(missing_docs)]

//! # swagger2http CLI
//!
//! Convert Swagger/OpenAPI YAML specs to kulala.nvim HTTP files.
//!
//! Generated HTTP text goes to stdout (or files); diagnostics go to stderr via
//! `tracing`, filtered by `RUST_LOG`.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod convert;

const EXAMPLES: &str = "\
Examples:
  swagger2http -i api.yaml                 # Output to stdout
  swagger2http -i api.yaml -o api.http     # Output to file
  swagger2http -i api.yaml --split         # Create multiple files by tag";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert Swagger/OpenAPI YAML specs to kulala.nvim HTTP files",
    after_help = EXAMPLES
)]
struct Cli {
    #[command(flatten)]
    convert: convert::ConvertArgs,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

/// Accepts the single-dash `-split` spelling alongside `-s`/`--split`.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-split" {
                OsString::from("--split")
            } else {
                arg
            }
        })
        .collect()
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();
    match convert::execute(&cli.convert, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
