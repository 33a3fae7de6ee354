//! Shared "quote pipeline" logic used by the `quote` and `export` commands.
//!
//! Keeping this in one place avoids duplicating the workflow:
//! schedule load -> access check -> fee calculation
//!
//! The commands can then focus on presentation (printing vs writing files).

use std::path::Path;

use crate::access::{AccessClient, AccessOutcome, Recipient, check_access};
use crate::domain::QuoteConfig;
use crate::engine::{Quote, calculate_quote};
use crate::error::AppError;
use crate::schedule::{FeeSchedule, MINIMUM_ENTERPRISE_VALUE};

/// All computed outputs of a single quote run.
#[derive(Debug, Clone)]
pub struct QuoteRun {
    pub schedule: FeeSchedule,
    pub recipient: Option<Recipient>,
    pub quote: Quote,
}

/// Load the schedule from a JSON file, or use the built-in one.
pub fn load_schedule(path: Option<&Path>) -> Result<FeeSchedule, AppError> {
    match path {
        Some(path) => crate::io::read_schedule_json(path),
        None => {
            tracing::debug!("using built-in fee schedule");
            Ok(FeeSchedule::builtin()?)
        }
    }
}

/// Execute the full quote pipeline, validating access against the backend.
pub fn run_quote(config: &QuoteConfig) -> Result<QuoteRun, AppError> {
    // Load the schedule first so a bad table fails before any token is spent.
    let schedule = load_schedule(config.schedule_path.as_deref())?;

    let client = AccessClient::from_env();
    let access = check_access(config.token.as_deref(), config.dev, &client);

    run_quote_with_access(config, schedule, access)
}

/// Execute the quote pipeline with an access outcome already decided.
pub fn run_quote_with_access(
    config: &QuoteConfig,
    schedule: FeeSchedule,
    access: AccessOutcome,
) -> Result<QuoteRun, AppError> {
    let recipient = access.into_result()?;

    let quote = calculate_quote(config.enterprise_value, config.retainer_months, &schedule);
    if quote.result.enterprise_value < MINIMUM_ENTERPRISE_VALUE {
        tracing::info!(ev = %quote.result.enterprise_value, "quote below minimum enterprise value");
    }
    tracing::debug!(
        ev = %quote.result.enterprise_value,
        total = %quote.result.total_fees,
        "computed quote"
    );

    Ok(QuoteRun {
        schedule,
        recipient,
        quote,
    })
}
