//! GBC CLI - Command line interface
//!
//! Tokenizes a source file and prints one token per line

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

mod config;
mod error;
mod logging;
mod platform;

use crate::config::{apply_overrides, load_config, parse_format, parse_log_level};
use crate::error::CliError;
use crate::logging::{LogFormat, CLI_TARGET};
use crate::platform::{print_error_with_source, render_tokens};
use gbc_config::{LogLevel, OutputFormat};
use gbc_core::lex;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "gbc",
    about = "GBC lexer - tokenize a source file",
    version = "0.1.0"
)]
struct Cli {
    /// Source file path
    #[arg(value_name = "SOURCE", default_value = "source.txt")]
    source: PathBuf,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Token output format: text or json (overrides the config file)
    #[arg(long, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Global log level: silent, error, warn, info, debug or trace
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {}
        // Already reported with source context
        Err(e @ CliError::Lex(_)) => process::exit(e.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, cli.format, cli.log_level);
    logging::init(&config.log, cli.log_format);

    let source = fs::read_to_string(&cli.source).map_err(|source| CliError::Io {
        path: cli.source.clone(),
        source,
    })?;
    info!(
        target: CLI_TARGET,
        path = %cli.source.display(),
        bytes = source.len(),
        "Lexing source"
    );

    let output = lex(&source);
    print!("{}", render_tokens(&output.tokens, config.output.format)?);

    match output.error {
        Some(e) => {
            print_error_with_source(&e, &source);
            Err(e.into())
        }
        None => {
            info!(target: CLI_TARGET, tokens = output.tokens.len(), "Done");
            Ok(())
        }
    }
}
