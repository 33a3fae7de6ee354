//! Cumulative (bracket-style) success fee.

use rust_decimal::Decimal;

use crate::domain::{Bound, Money, RateTier, TierBreakdown};

/// Charge each slice of `ev` at its tier's rate.
///
/// Returns the per-tier lines and the unrounded gross fee. An EV exactly on a
/// tier cap is fully absorbed by that tier; `ev <= 0` yields no lines.
pub fn compute_tier_breakdown(ev: Money, tiers: &[RateTier]) -> (Vec<TierBreakdown>, Money) {
    let mut breakdown = Vec::new();
    let mut remaining = ev;
    let mut prev_cap = Decimal::ZERO;
    let mut gross = Decimal::ZERO;

    for tier in tiers {
        if remaining <= Decimal::ZERO {
            break;
        }

        let tier_size = match tier.upper_bound {
            Bound::Capped(cap) => cap - prev_cap,
            Bound::Unbounded => remaining,
        };
        let taxable = remaining.min(tier_size);

        if taxable > Decimal::ZERO {
            let fee = taxable * tier.rate;
            breakdown.push(TierBreakdown {
                label: tier.label.clone(),
                amount: taxable,
                rate: tier.rate,
                fee,
            });
            gross += fee;
        }

        remaining -= taxable;
        if let Bound::Capped(cap) = tier.upper_bound {
            prev_cap = cap;
        }
    }

    (breakdown, gross)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::tables::standard_tiers;
    use rust_decimal_macros::dec;

    #[test]
    fn single_tier_at_first_cap() {
        let (lines, gross) = compute_tier_breakdown(dec!(5000000), &standard_tiers());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "First $5M");
        assert_eq!(lines[0].amount, dec!(5000000));
        assert_eq!(gross, dec!(250000));
    }

    #[test]
    fn one_unit_above_cap_spills_only_the_excess() {
        let (lines, gross) = compute_tier_breakdown(dec!(5000001), &standard_tiers());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].amount, dec!(1));
        assert_eq!(lines[1].fee, dec!(0.04));
        assert_eq!(gross, dec!(250000.04));
    }

    #[test]
    fn every_cap_is_exact_and_one_unit_above_spills() {
        let tiers = standard_tiers();
        let mut prev_cap = Decimal::ZERO;
        for (index, tier) in tiers.iter().enumerate() {
            let Bound::Capped(cap) = tier.upper_bound else {
                continue;
            };

            let (lines, _) = compute_tier_breakdown(cap, &tiers);
            assert_eq!(lines.len(), index + 1, "at cap {cap}");
            assert_eq!(lines[index].amount, cap - prev_cap, "at cap {cap}");
            assert_eq!(lines[index].label, tier.label);

            let (above, _) = compute_tier_breakdown(cap + Decimal::ONE, &tiers);
            assert_eq!(above.len(), index + 2, "above cap {cap}");
            assert_eq!(above[index].amount, cap - prev_cap);
            assert_eq!(above[index + 1].amount, Decimal::ONE);
            assert_eq!(above[index + 1].rate, tiers[index + 1].rate);

            prev_cap = cap;
        }
    }

    #[test]
    fn twelve_million_spans_three_tiers() {
        let (lines, gross) = compute_tier_breakdown(dec!(12000000), &standard_tiers());
        let fees: Vec<Money> = lines.iter().map(|l| l.fee).collect();
        assert_eq!(fees, vec![dec!(250000), dec!(200000), dec!(60000)]);
        assert_eq!(gross, dec!(510000));
    }

    #[test]
    fn large_ev_lands_in_unbounded_tier() {
        let (lines, gross) = compute_tier_breakdown(dec!(50000000), &standard_tiers());
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4].label, "Above $20M");
        assert_eq!(lines[4].amount, dec!(30000000));
        // 250k + 200k + 150k + 125k + 600k
        assert_eq!(gross, dec!(1325000));
    }

    #[test]
    fn non_positive_ev_is_empty() {
        for ev in [dec!(0), dec!(-1000)] {
            let (lines, gross) = compute_tier_breakdown(ev, &standard_tiers());
            assert!(lines.is_empty());
            assert_eq!(gross, Decimal::ZERO);
        }
    }
}
