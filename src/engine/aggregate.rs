//! Combine the engine parts into a `FeeResult`.
//!
//! This is the only place money is rounded. Totals are derived from unrounded
//! intermediates and rounded once, so the rounded gross fee never drifts from
//! the exact sum of the tier fees.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{FeeResult, Money, RetainerOutcome, TierBreakdown};

/// Round a money amount to whole currency units.
pub fn round_money(value: Money) -> Money {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn aggregate(
    ev: Money,
    tier_breakdown: Vec<TierBreakdown>,
    gross_fee: Money,
    tsf: Money,
    retainer: &RetainerOutcome,
) -> FeeResult {
    let net = (gross_fee - retainer.retainer_rebate).max(Decimal::ZERO);
    let total = net + tsf;

    let effective_rate = if ev > Decimal::ZERO {
        total / ev * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    FeeResult {
        enterprise_value: ev,
        tier_breakdown,
        gross_success_fee: round_money(gross_fee),
        retainer_paid: round_money(retainer.retainer_paid),
        retainer_rebate: round_money(retainer.retainer_rebate),
        rebate_applies: retainer.rebate_applies,
        net_success_fee: round_money(net),
        transaction_structuring_fee: round_money(tsf),
        total_fees: round_money(total),
        effective_rate: round_rate(effective_rate),
    }
}
