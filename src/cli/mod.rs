//! Command-line parsing for the advisory fee calculator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fee engine.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "feecalc", version, about = "Advisory engagement fee calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute fees for an enterprise value and print the breakdown.
    Quote(QuoteArgs),
    /// Compute fees and write a fee-estimate document.
    Export(ExportArgs),
    /// Print fees at the reference enterprise values.
    Reference(ScheduleArgs),
    /// Print the active rate schedule.
    Schedule(ShowScheduleArgs),
}

/// Schedule selection shared by every command.
#[derive(Debug, Args, Clone)]
pub struct ScheduleArgs {
    /// Fee schedule JSON (defaults to the built-in engagement-letter schedule).
    #[arg(long, value_name = "JSON", env = "FEECALC_SCHEDULE")]
    pub schedule: Option<PathBuf>,
}

/// Options for computing one quote.
#[derive(Debug, Args, Clone)]
pub struct QuoteArgs {
    /// Enterprise value, e.g. `15000000` or `"$15,000,000"`.
    #[arg(value_name = "EV")]
    pub enterprise_value: String,

    /// Retainer months already paid.
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    pub months: Option<i64>,

    /// Access token issued with the calculator link.
    #[arg(long, env = "FEECALC_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Skip access validation (development only).
    #[arg(long)]
    pub dev: bool,

    /// Also write the fee result as JSON.
    #[arg(long, value_name = "JSON")]
    pub json: Option<PathBuf>,

    #[command(flatten)]
    pub schedule: ScheduleArgs,
}

/// Options for writing a fee-estimate document.
#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub quote: QuoteArgs,

    /// Output path (defaults to `fee-estimate-<EV>M.md`).
    #[arg(short = 'o', long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Options for showing the schedule.
#[derive(Debug, Args, Clone)]
pub struct ShowScheduleArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Write the active schedule as JSON (a starting point for a custom schedule).
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
