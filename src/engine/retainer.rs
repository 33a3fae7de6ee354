//! Retainer totals and the rebate credited against the success fee.

use rust_decimal::Decimal;

use crate::domain::{Money, RetainerConfig, RetainerOutcome};

/// Count retainer months and work out the rebate.
///
/// Missing or negative months count as zero and months beyond the policy
/// maximum are ignored. The rebate applies only at or above the EV threshold
/// and never exceeds the cap.
pub fn compute_retainer(months_paid: Option<i64>, ev: Money, cfg: &RetainerConfig) -> RetainerOutcome {
    let months_counted = months_paid.unwrap_or(0).clamp(0, cfg.max_months.max(0));
    let monthly_rate = cfg.monthly_rate(ev);
    let retainer_paid = Decimal::from(months_counted) * monthly_rate;

    let rebate_applies = ev >= cfg.rebate_ev_threshold;
    let retainer_rebate = if rebate_applies {
        (retainer_paid * cfg.rebate_rate).min(cfg.max_rebate)
    } else {
        Decimal::ZERO
    };

    RetainerOutcome {
        months_counted,
        monthly_rate,
        retainer_paid,
        rebate_applies,
        retainer_rebate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::tables::standard_retainer;
    use rust_decimal_macros::dec;

    #[test]
    fn cap_binds_at_five_months() {
        let out = compute_retainer(Some(5), dec!(15000000), &standard_retainer());
        assert_eq!(out.months_counted, 5);
        assert_eq!(out.retainer_paid, dec!(75000));
        assert!(out.rebate_applies);
        assert_eq!(out.retainer_rebate, dec!(37500));
    }

    #[test]
    fn rebate_below_cap_is_half_of_paid() {
        let out = compute_retainer(Some(2), dec!(12000000), &standard_retainer());
        assert_eq!(out.retainer_paid, dec!(30000));
        assert_eq!(out.retainer_rebate, dec!(15000));
    }

    #[test]
    fn months_beyond_maximum_are_ignored() {
        let out = compute_retainer(Some(12), dec!(20000000), &standard_retainer());
        assert_eq!(out.months_counted, 5);
        assert_eq!(out.retainer_paid, dec!(75000));
    }

    #[test]
    fn missing_or_negative_months_count_as_zero() {
        for months in [None, Some(-3)] {
            let out = compute_retainer(months, dec!(15000000), &standard_retainer());
            assert_eq!(out.months_counted, 0);
            assert_eq!(out.retainer_paid, Decimal::ZERO);
            assert_eq!(out.retainer_rebate, Decimal::ZERO);
        }
    }

    #[test]
    fn no_rebate_below_threshold() {
        let out = compute_retainer(Some(5), dec!(9999999), &standard_retainer());
        assert!(!out.rebate_applies);
        assert_eq!(out.monthly_rate, dec!(15000));
        assert_eq!(out.retainer_paid, dec!(75000));
        assert_eq!(out.retainer_rebate, Decimal::ZERO);
    }

    #[test]
    fn threshold_itself_is_eligible() {
        let out = compute_retainer(Some(1), dec!(10000000), &standard_retainer());
        assert!(out.rebate_applies);
        assert_eq!(out.retainer_rebate, dec!(7500));
    }
}
