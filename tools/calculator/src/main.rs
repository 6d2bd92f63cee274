//! calculator - interactive two-operand arithmetic calculator
//!
//! Prompts for a number, an operator and a second number, prints the result,
//! and repeats until `q` is entered.

mod config;
mod logging;

use anyhow::{Context, Result};
use calc::{Locale, Session, TokenReader};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::CalculatorConfig;

#[derive(Parser)]
#[command(name = "calculator")]
#[command(about = "Interactive two-operand arithmetic calculator")]
#[command(long_about = "Interactive two-operand arithmetic calculator

Enter a number, an operator (+, -, *, /) and a second number; the result is
printed with two decimals. Enter 'q' at any prompt to exit.

Configuration is read from ./calculator.toml (or --config) and CALC_*
environment variables; flags given here take precedence.")]
#[command(version)]
struct Cli {
    /// Display language: en or ru
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Enable verbose logging (written to stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path (default: ./calculator.toml if present)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Do not print the menu banner before each calculation
    #[arg(long)]
    no_banner: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CalculatorConfig::load(cli.config.as_deref())?.with_overrides(
        cli.locale,
        cli.verbose,
        cli.no_banner,
    );

    logging::init(&config.log_level)?;
    info!(locale = %config.locale, banner = config.banner, "calculator starting");

    let source = TokenReader::new(io::stdin().lock());
    let mut session =
        Session::new(source, io::stdout().lock(), config.locale).with_banner(config.banner);

    let exit = session.run().context("Calculator session failed")?;
    debug!(?exit, "calculator stopped");

    Ok(())
}
