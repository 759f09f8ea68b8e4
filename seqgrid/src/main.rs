//! # seqgrid
//!
//! A CLI tool that prints the multiplication table of a prime or Fibonacci
//! sequence.
//!
//! ## Overview
//!
//! seqgrid is built on top of seqgridlib and only parses flags, sets up
//! logging and maps errors to an exit status. All table logic lives in the
//! library.
//!
//! ## Usage
//!
//! ```bash
//! # Table of the first 10 primes
//! seqgrid
//!
//! # Table of the first 5 primes
//! seqgrid --limit 5
//!
//! # Table of the Fibonacci run (limit is ignored)
//! seqgrid --type fibonacci
//!
//! # Debug logging on stderr
//! SEQGRID_LOG=debug seqgrid --limit 3
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use seqgridlib::{GridConfig, DEFAULT_LIMIT, DEFAULT_SEQUENCE_TYPE};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
const LOG_ENV: &str = "SEQGRID_LOG";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("seqgrid")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Print the multiplication table of a prime or Fibonacci sequence")
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .default_value(DEFAULT_SEQUENCE_TYPE)
                .help("Type of sequence (primes or fibonacci)"),
        )
        .arg(
            Arg::new("limit")
                .short('l')
                .long("limit")
                .value_parser(value_parser!(usize))
                .help(format!(
                    "Length of sequence, ignored for fibonacci [default: {DEFAULT_LIMIT}]"
                )),
        )
}

/// Build the pipeline config from matches
fn extract_config(matches: &ArgMatches) -> GridConfig {
    let mut config = GridConfig::new();
    if let Some(sequence_type) = matches.get_one::<String>("type") {
        config = config.sequence_type(sequence_type.as_str());
    }
    if let Some(limit) = matches.get_one::<usize>("limit") {
        config = config.limit(*limit);
    }
    config
}

/// Log to stderr so stdout carries only the table
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(config: &GridConfig) -> anyhow::Result<()> {
    let grid = seqgridlib::build_grid(config).with_context(|| {
        format!(
            "cannot build {} table (limit {})",
            config.sequence_type, config.limit
        )
    })?;

    seqgridlib::print_grid(&grid).context("cannot write table")?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let matches = build_command().get_matches();
    let config = extract_config(&matches);
    tracing::debug!(?config, "parsed arguments");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> GridConfig {
        let mut argv = vec!["seqgrid"];
        argv.extend(args);
        extract_config(&build_command().get_matches_from(argv))
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse(&[]), GridConfig::default());
    }

    #[test]
    fn test_type_and_limit() {
        let config = parse(&["--type", "fibonacci", "--limit", "4"]);
        assert_eq!(config, GridConfig::new().sequence_type("fibonacci").limit(4));
    }

    #[test]
    fn test_unknown_type_reaches_library() {
        let config = parse(&["-t", "squares"]);
        assert_eq!(config.sequence_type, "squares");
        let err = run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported sequence type 'squares'"));
    }

    #[test]
    fn test_negative_limit_rejected() {
        let result = build_command().try_get_matches_from(["seqgrid", "--limit", "-1"]);
        assert!(result.is_err());
    }
}
