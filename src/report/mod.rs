//! Reporting utilities: reference quotes and formatted terminal output.

use crate::domain::FeeResult;
use crate::engine::calculate_fees;
use crate::schedule::{FeeSchedule, REFERENCE_EVS};

pub mod format;

pub use format::*;

/// Quotes at the reference EVs, without retainer history.
pub fn reference_rows(schedule: &FeeSchedule) -> Vec<FeeResult> {
    REFERENCE_EVS
        .iter()
        .map(|&ev| calculate_fees(ev, None, schedule))
        .collect()
}
