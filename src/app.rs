//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the fee schedule
//! - checks access for quote/export commands
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, ExportArgs, QuoteArgs, ScheduleArgs, ShowScheduleArgs};
use crate::domain::QuoteConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `feecalc` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` must be loaded before parsing so clap's `env` fallbacks see it.
    dotenvy::dotenv().ok();
    crate::logging::init();

    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Quote(args) => handle_quote(args),
        Command::Export(args) => handle_export(args),
        Command::Reference(args) => handle_reference(args),
        Command::Schedule(args) => handle_schedule(args),
    }
}

fn handle_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = quote_config_from_args(&args);
    let run = pipeline::run_quote(&config)?;

    println!(
        "{}",
        crate::report::format_fee_summary(&run.quote, run.schedule.retainer().rebate_rate)
    );
    println!("{}", crate::report::format_tier_table(&run.quote.result.tier_breakdown));

    if let Some(path) = &config.export_json {
        crate::io::write_result_json(path, &run.quote.result)?;
    }

    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    let config = quote_config_from_args(&args.quote);
    let run = pipeline::run_quote(&config)?;

    let path = args
        .out
        .clone()
        .unwrap_or_else(|| crate::io::default_estimate_file_name(run.quote.result.enterprise_value));
    let today = chrono::Local::now().date_naive();

    crate::io::write_estimate_markdown(
        &path,
        &run.quote,
        run.schedule.retainer().rebate_rate,
        run.recipient.as_ref(),
        today,
    )?;
    if let Some(json) = &config.export_json {
        crate::io::write_result_json(json, &run.quote.result)?;
    }

    println!("Wrote {}", path.display());
    Ok(())
}

fn handle_reference(args: ScheduleArgs) -> Result<(), AppError> {
    let schedule = pipeline::load_schedule(args.schedule.as_deref())?;
    let rows = crate::report::reference_rows(&schedule);
    println!("{}", crate::report::format_reference_table(&rows));
    Ok(())
}

fn handle_schedule(args: ShowScheduleArgs) -> Result<(), AppError> {
    let schedule = pipeline::load_schedule(args.schedule.schedule.as_deref())?;
    println!("{}", crate::report::format_schedule(&schedule));

    if let Some(path) = &args.export {
        crate::io::write_schedule_json(path, &schedule)?;
    }
    Ok(())
}

pub fn quote_config_from_args(args: &QuoteArgs) -> QuoteConfig {
    QuoteConfig {
        enterprise_value: crate::io::parse_currency_input(&args.enterprise_value),
        retainer_months: args.months,
        schedule_path: args.schedule.schedule.clone(),
        token: args.token.clone(),
        dev: args.dev,
        export_json: args.json.clone(),
    }
}
