//! Fee computation engine.
//!
//! Pure functions only: no I/O, no shared state. Data flows one way:
//!
//! - `tiers`: cumulative success fee breakdown
//! - `tsf`: flat structuring fee lookup
//! - `retainer`: retainer totals and capped rebate
//! - `aggregate`: composition and the single rounding point

use rust_decimal::Decimal;

use crate::domain::{FeeResult, Money, RetainerOutcome};
use crate::schedule::FeeSchedule;

pub mod aggregate;
pub mod retainer;
pub mod tiers;
pub mod tsf;

pub use aggregate::{aggregate, round_money};
pub use retainer::compute_retainer;
pub use tiers::compute_tier_breakdown;
pub use tsf::resolve_tsf;

/// A fee result together with the retainer detail it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub result: FeeResult,
    pub retainer: RetainerOutcome,
}

/// Compute the full fee result for one enterprise value.
///
/// Never fails: negative EV is treated as zero and missing or negative
/// retainer months as none.
pub fn calculate_fees(
    enterprise_value: Money,
    retainer_months_paid: Option<i64>,
    schedule: &FeeSchedule,
) -> FeeResult {
    calculate_quote(enterprise_value, retainer_months_paid, schedule).result
}

/// Same as [`calculate_fees`], keeping the retainer months and monthly rate for display.
pub fn calculate_quote(
    enterprise_value: Money,
    retainer_months_paid: Option<i64>,
    schedule: &FeeSchedule,
) -> Quote {
    let ev = enterprise_value.max(Decimal::ZERO);

    let (breakdown, gross) = compute_tier_breakdown(ev, schedule.tiers());
    let tsf = resolve_tsf(ev, schedule.tsf_bands());
    let retainer = compute_retainer(retainer_months_paid, ev, schedule.retainer());

    Quote {
        result: aggregate(ev, breakdown, gross, tsf, &retainer),
        retainer,
    }
}
