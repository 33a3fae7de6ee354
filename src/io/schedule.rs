//! Read/write fee schedule JSON files.
//!
//! The schema is the serde form of `schedule::FeeSchedule`:
//! - `tiers`: `{ upper_bound, rate, label }` in ascending order
//! - `tsf_bands`: `{ lower_exclusive, upper_inclusive, fee, label }`
//! - `retainer`: the retainer and rebate policy
//!
//! Bounds are `{"capped": <amount>}` or `"unbounded"`. Amounts may be JSON
//! numbers or strings. Files are validated on read.

use std::fs::File;
use std::path::Path;

use crate::error::AppError;
use crate::schedule::FeeSchedule;

/// Write a schedule JSON file.
pub fn write_schedule_json(path: &Path, schedule: &FeeSchedule) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create schedule JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, schedule)
        .map_err(|e| AppError::new(2, format!("Failed to write schedule JSON: {e}")))?;

    tracing::info!(path = %path.display(), "wrote fee schedule");
    Ok(())
}

/// Read and validate a schedule JSON file.
///
/// A file that parses but breaks the ordering/partition rules is a schedule
/// error (exit code 3), not an I/O error.
pub fn read_schedule_json(path: &Path) -> Result<FeeSchedule, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open schedule JSON '{}': {e}", path.display())))?;

    let schedule: FeeSchedule = serde_json::from_reader(file).map_err(|e| {
        let code = if e.is_data() { 3 } else { 2 };
        AppError::new(code, format!("Invalid schedule JSON '{}': {e}", path.display()))
    })?;

    tracing::info!(
        path = %path.display(),
        tiers = schedule.tiers().len(),
        bands = schedule.tsf_bands().len(),
        "loaded fee schedule"
    );
    Ok(schedule)
}
