//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - built from the canonical tables or a schedule JSON file
//! - passed by value through the fee engine
//! - exported to JSON or rendered into reports

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amount in whole currency units (fractions allowed, never floats).
pub type Money = Decimal;

/// Upper end of a tier or band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    Capped(Money),
    Unbounded,
}

impl Bound {
    /// `true` if `value` is at or below this bound.
    pub fn admits(self, value: Money) -> bool {
        match self {
            Bound::Capped(cap) => value <= cap,
            Bound::Unbounded => true,
        }
    }
}

/// One slice of the cumulative success-fee schedule.
///
/// Each slice of EV up to `upper_bound` is charged at `rate`, like an income tax
/// bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    pub upper_bound: Bound,
    /// Fraction, e.g. `0.05` for 5%.
    pub rate: Decimal,
    pub label: String,
}

/// One band of the Transaction Structuring Fee schedule.
///
/// EV matches when `lower_exclusive < EV <= upper_inclusive`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsfBand {
    pub lower_exclusive: Money,
    pub upper_inclusive: Bound,
    pub fee: Money,
    pub label: String,
}

impl TsfBand {
    pub fn contains(&self, ev: Money) -> bool {
        ev > self.lower_exclusive && self.upper_inclusive.admits(ev)
    }
}

/// Retainer and rebate policy constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetainerConfig {
    /// Monthly retainer at or above `reduced_rate_below_ev`.
    pub standard_monthly_rate: Money,
    /// Monthly retainer for engagements with EV below `reduced_rate_below_ev`.
    pub reduced_monthly_rate: Money,
    pub reduced_rate_below_ev: Money,
    /// Months beyond this are not counted.
    pub max_months: i64,
    /// Share of retainers paid that is credited back, e.g. `0.5`.
    pub rebate_rate: Decimal,
    pub max_rebate: Money,
    /// Rebate applies only when `EV >= rebate_ev_threshold`.
    pub rebate_ev_threshold: Money,
}

impl RetainerConfig {
    pub fn monthly_rate(&self, ev: Money) -> Money {
        if ev < self.reduced_rate_below_ev {
            self.reduced_monthly_rate
        } else {
            self.standard_monthly_rate
        }
    }
}

/// Per-tier line of the success fee calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBreakdown {
    pub label: String,
    /// Portion of EV falling in this tier (unrounded).
    pub amount: Money,
    pub rate: Decimal,
    /// `amount * rate` (unrounded).
    pub fee: Money,
}

/// Retainer accounting for one quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetainerOutcome {
    pub months_counted: i64,
    pub monthly_rate: Money,
    pub retainer_paid: Money,
    pub rebate_applies: bool,
    pub retainer_rebate: Money,
}

/// The engine's public result.
///
/// Aggregate money fields are rounded to whole units; `effective_rate` is a
/// percentage rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeResult {
    pub enterprise_value: Money,
    pub tier_breakdown: Vec<TierBreakdown>,
    pub gross_success_fee: Money,
    pub retainer_paid: Money,
    pub retainer_rebate: Money,
    pub rebate_applies: bool,
    pub net_success_fee: Money,
    pub transaction_structuring_fee: Money,
    pub total_fees: Money,
    pub effective_rate: Decimal,
}

/// Resolved options for one quote or export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteConfig {
    pub enterprise_value: Money,
    pub retainer_months: Option<i64>,
    /// `None` means the built-in schedule.
    pub schedule_path: Option<PathBuf>,
    pub token: Option<String>,
    pub dev: bool,
    pub export_json: Option<PathBuf>,
}
