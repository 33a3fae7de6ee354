//! Canonical fee tables from the engagement letter.
//!
//! TSF bands use exact-dollar upper bounds (`$5M to $9,999,999`), so
//! $10,000,000 exactly falls into the $10M - $15M band.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{Bound, Money, RateTier, RetainerConfig, TsfBand};

/// Quotes below this EV are still computed but flagged to the user.
pub const MINIMUM_ENTERPRISE_VALUE: Money = dec!(5000000);

/// Sample EVs shown in the reference table.
pub const REFERENCE_EVS: [Money; 6] = [
    dec!(5000000),
    dec!(10000000),
    dec!(15000000),
    dec!(20000000),
    dec!(30000000),
    dec!(50000000),
];

const TIERS: [(Option<Money>, Decimal, &str); 5] = [
    (Some(dec!(5000000)), dec!(0.05), "First $5M"),
    (Some(dec!(10000000)), dec!(0.04), "$5M - $10M"),
    (Some(dec!(15000000)), dec!(0.03), "$10M - $15M"),
    (Some(dec!(20000000)), dec!(0.025), "$15M - $20M"),
    (None, dec!(0.02), "Above $20M"),
];

const BANDS: [(Money, Option<Money>, Money, &str); 5] = [
    (dec!(0), Some(dec!(5000000)), dec!(20000), "Up to $5M"),
    (dec!(5000000), Some(dec!(9999999)), dec!(25000), "$5M - $10M"),
    (dec!(9999999), Some(dec!(14999999)), dec!(30000), "$10M - $15M"),
    (dec!(14999999), Some(dec!(29999999)), dec!(35000), "$15M - $30M"),
    (dec!(29999999), None, dec!(50000), "$30M+"),
];

fn bound(cap: Option<Money>) -> Bound {
    cap.map(Bound::Capped).unwrap_or(Bound::Unbounded)
}

pub fn standard_tiers() -> Vec<RateTier> {
    TIERS
        .iter()
        .map(|&(cap, rate, label)| RateTier {
            upper_bound: bound(cap),
            rate,
            label: label.to_string(),
        })
        .collect()
}

pub fn standard_bands() -> Vec<TsfBand> {
    BANDS
        .iter()
        .map(|&(lower, upper, fee, label)| TsfBand {
            lower_exclusive: lower,
            upper_inclusive: bound(upper),
            fee,
            label: label.to_string(),
        })
        .collect()
}

pub fn standard_retainer() -> RetainerConfig {
    RetainerConfig {
        standard_monthly_rate: dec!(15000),
        reduced_monthly_rate: dec!(15000),
        reduced_rate_below_ev: dec!(10000000),
        max_months: 5,
        rebate_rate: dec!(0.5),
        max_rebate: dec!(37500),
        rebate_ev_threshold: dec!(10000000),
    }
}
