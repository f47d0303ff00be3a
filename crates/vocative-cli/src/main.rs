//! Vocative CLI entry point.
//!
//! Provides offline tools around the name dictionary:
//! - `vocative greet` - compose a greeting for a first name
//! - `vocative check` - validate the built-in dictionary
//! - `vocative list` - print dictionary entries for review

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_greet, run_list, CheckArgs, GreetArgs, ListArgs};
use tracing_subscriber::EnvFilter;

/// Vocative name dictionary tools.
#[derive(Debug, Parser)]
#[command(name = "vocative")]
#[command(about = "Polish vocative and greeting tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compose a greeting for a first name
    Greet(GreetArgs),
    /// Validate the built-in name dictionary
    Check(CheckArgs),
    /// List dictionary entries
    List(ListArgs),
}

fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("vocative=debug"))
            .with_writer(stderr)
            .init();
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Greet(args) => run_greet(args),
        Commands::Check(args) => run_check(args),
        Commands::List(args) => run_list(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
