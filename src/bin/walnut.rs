// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line interface for walnut
//!
//! Usage:
//!   walnut check `<file>`                 - Validate a file and report the key count
//!   walnut keys `<file>` [--prefix `<p>`] - List defined keys with their kinds
//!   walnut get `<file>` `<key>`           - Print a single value
//!
//! A file argument of `-` reads the document from standard input. Log output is
//! controlled by the `WALNUT_LOG` environment variable (e.g. `WALNUT_LOG=debug`).

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use walnut::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "walnut", version, about = "Inspect and validate walnut configuration files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a file and report whether it is valid
    Check {
        /// Path to the walnut file, or `-` for stdin
        file: PathBuf,
    },
    /// List the keys a file defines
    Keys {
        /// Path to the walnut file, or `-` for stdin
        file: PathBuf,
        /// Only list keys below this prefix
        #[arg(long, short)]
        prefix: Option<String>,
    },
    /// Print the value of one key
    Get {
        /// Path to the walnut file, or `-` for stdin
        file: PathBuf,
        /// Dotted key to look up
        key: String,
    },
}

fn load(file: &Path) -> Result<Config> {
    if file.as_os_str() == "-" {
        let source = StreamSource::with_name(std::io::stdin(), "stdin");
        return Config::load(source);
    }
    Config::from_file(file)
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Check { file } => {
            let config = load(&file)?;
            println!("ok ({} keys)", config.map().len());
        }
        Command::Keys { file, prefix } => {
            let config = load(&file)?;
            let scope = config.select(prefix.as_deref().unwrap_or(""));
            for key in scope.keys() {
                if let Some(value) = scope.lookup(key) {
                    println!("{key}\t{}", value.kind());
                }
            }
        }
        Command::Get { file, key } => {
            let config = load(&file)?;
            match config.literal(&key)? {
                Literal::String(s) => println!("{s}"),
                other => println!("{other}"),
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("WALNUT_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
