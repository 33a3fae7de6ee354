//! Shape checks for fee schedules.
//!
//! A schedule that fails these checks would silently mis-price a transaction,
//! so it is rejected when loaded rather than tolerated at quote time.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{Bound, Money, RateTier, RetainerConfig, TsfBand};

/// Ways a fee schedule can violate the partition/ordering rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("success fee schedule has no tiers")]
    NoTiers,

    #[error("tier {index} cap {cap} must be positive")]
    TierCapNotPositive { index: usize, cap: Money },

    #[error("tier {index} cap {cap} does not exceed previous cap {previous}")]
    TierNotIncreasing {
        index: usize,
        cap: Money,
        previous: Money,
    },

    #[error("tier {index} is unbounded but is not the last tier")]
    UnboundedTierNotLast { index: usize },

    #[error("last tier must be unbounded")]
    MissingUnboundedTier,

    #[error("tier {index} rate {rate} must be within [0, 1]")]
    RateOutOfRange { index: usize, rate: Decimal },

    #[error("structuring fee schedule has no bands")]
    NoBands,

    #[error("first band must start at 0 (exclusive), found {0}")]
    FirstBandNotAtZero(Money),

    #[error("band {index} starts at {found}, expected previous upper bound {expected}")]
    BandNotContiguous {
        index: usize,
        expected: Money,
        found: Money,
    },

    #[error("band {index} upper bound {upper} does not exceed its lower bound {lower}")]
    BandEmpty {
        index: usize,
        lower: Money,
        upper: Money,
    },

    #[error("band {index} is unbounded but is not the last band")]
    UnboundedBandNotLast { index: usize },

    #[error("last band must be unbounded")]
    MissingUnboundedBand,

    #[error("band {index} fee {fee} is negative")]
    NegativeFee { index: usize, fee: Money },

    #[error("retainer policy: {0}")]
    InvalidRetainer(&'static str),
}

/// Tiers must have strictly increasing positive caps and end with one unbounded tier.
pub fn validate_tiers(tiers: &[RateTier]) -> Result<(), ScheduleError> {
    if tiers.is_empty() {
        return Err(ScheduleError::NoTiers);
    }

    let last = tiers.len() - 1;
    let mut previous = Decimal::ZERO;
    for (index, tier) in tiers.iter().enumerate() {
        if tier.rate < Decimal::ZERO || tier.rate > Decimal::ONE {
            return Err(ScheduleError::RateOutOfRange {
                index,
                rate: tier.rate,
            });
        }

        match tier.upper_bound {
            Bound::Unbounded if index != last => {
                return Err(ScheduleError::UnboundedTierNotLast { index });
            }
            Bound::Unbounded => {}
            Bound::Capped(_) if index == last => {
                return Err(ScheduleError::MissingUnboundedTier);
            }
            Bound::Capped(cap) => {
                if cap <= Decimal::ZERO {
                    return Err(ScheduleError::TierCapNotPositive { index, cap });
                }
                if cap <= previous {
                    return Err(ScheduleError::TierNotIncreasing {
                        index,
                        cap,
                        previous,
                    });
                }
                previous = cap;
            }
        }
    }

    Ok(())
}

/// Bands must start at zero, be contiguous and non-empty, and end with one unbounded band.
pub fn validate_bands(bands: &[TsfBand]) -> Result<(), ScheduleError> {
    let Some(first) = bands.first() else {
        return Err(ScheduleError::NoBands);
    };
    if first.lower_exclusive != Decimal::ZERO {
        return Err(ScheduleError::FirstBandNotAtZero(first.lower_exclusive));
    }

    let last = bands.len() - 1;
    let mut expected_lower = Decimal::ZERO;
    for (index, band) in bands.iter().enumerate() {
        if band.fee < Decimal::ZERO {
            return Err(ScheduleError::NegativeFee {
                index,
                fee: band.fee,
            });
        }
        if band.lower_exclusive != expected_lower {
            return Err(ScheduleError::BandNotContiguous {
                index,
                expected: expected_lower,
                found: band.lower_exclusive,
            });
        }

        match band.upper_inclusive {
            Bound::Unbounded if index != last => {
                return Err(ScheduleError::UnboundedBandNotLast { index });
            }
            Bound::Unbounded => {}
            Bound::Capped(_) if index == last => {
                return Err(ScheduleError::MissingUnboundedBand);
            }
            Bound::Capped(upper) => {
                if upper <= band.lower_exclusive {
                    return Err(ScheduleError::BandEmpty {
                        index,
                        lower: band.lower_exclusive,
                        upper,
                    });
                }
                expected_lower = upper;
            }
        }
    }

    Ok(())
}

pub fn validate_retainer(cfg: &RetainerConfig) -> Result<(), ScheduleError> {
    if cfg.max_months < 0 {
        return Err(ScheduleError::InvalidRetainer("max_months must not be negative"));
    }
    if cfg.standard_monthly_rate < Decimal::ZERO || cfg.reduced_monthly_rate < Decimal::ZERO {
        return Err(ScheduleError::InvalidRetainer("monthly rates must not be negative"));
    }
    if cfg.rebate_rate < Decimal::ZERO || cfg.rebate_rate > Decimal::ONE {
        return Err(ScheduleError::InvalidRetainer("rebate_rate must be within [0, 1]"));
    }
    if cfg.max_rebate < Decimal::ZERO {
        return Err(ScheduleError::InvalidRetainer("max_rebate must not be negative"));
    }
    if cfg.rebate_ev_threshold < Decimal::ZERO {
        return Err(ScheduleError::InvalidRetainer("rebate_ev_threshold must not be negative"));
    }
    if cfg.reduced_rate_below_ev < Decimal::ZERO {
        return Err(ScheduleError::InvalidRetainer("reduced_rate_below_ev must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::tables::{standard_bands, standard_retainer, standard_tiers};
    use rust_decimal_macros::dec;

    fn tier(cap: Option<Decimal>, rate: Decimal) -> RateTier {
        RateTier {
            upper_bound: cap.map(Bound::Capped).unwrap_or(Bound::Unbounded),
            rate,
            label: String::new(),
        }
    }

    fn band(lower: Decimal, upper: Option<Decimal>, fee: Decimal) -> TsfBand {
        TsfBand {
            lower_exclusive: lower,
            upper_inclusive: upper.map(Bound::Capped).unwrap_or(Bound::Unbounded),
            fee,
            label: String::new(),
        }
    }

    #[test]
    fn standard_tables_are_valid() {
        validate_tiers(&standard_tiers()).unwrap();
        validate_bands(&standard_bands()).unwrap();
        validate_retainer(&standard_retainer()).unwrap();
    }

    #[test]
    fn rejects_non_increasing_tiers() {
        let tiers = vec![
            tier(Some(dec!(10)), dec!(0.05)),
            tier(Some(dec!(10)), dec!(0.04)),
            tier(None, dec!(0.03)),
        ];
        assert_eq!(
            validate_tiers(&tiers),
            Err(ScheduleError::TierNotIncreasing {
                index: 1,
                cap: dec!(10),
                previous: dec!(10),
            })
        );
    }

    #[test]
    fn rejects_unbounded_tier_in_the_middle() {
        let tiers = vec![tier(None, dec!(0.05)), tier(Some(dec!(10)), dec!(0.04))];
        assert_eq!(
            validate_tiers(&tiers),
            Err(ScheduleError::UnboundedTierNotLast { index: 0 })
        );
    }

    #[test]
    fn rejects_capped_last_tier() {
        let tiers = vec![tier(Some(dec!(10)), dec!(0.05))];
        assert_eq!(validate_tiers(&tiers), Err(ScheduleError::MissingUnboundedTier));
        assert_eq!(validate_tiers(&[]), Err(ScheduleError::NoTiers));
    }

    #[test]
    fn rejects_rate_above_one() {
        let tiers = vec![tier(None, dec!(1.5))];
        assert!(matches!(
            validate_tiers(&tiers),
            Err(ScheduleError::RateOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_band_gap() {
        let bands = vec![
            band(dec!(0), Some(dec!(100)), dec!(1)),
            band(dec!(101), None, dec!(2)),
        ];
        assert_eq!(
            validate_bands(&bands),
            Err(ScheduleError::BandNotContiguous {
                index: 1,
                expected: dec!(100),
                found: dec!(101),
            })
        );
    }

    #[test]
    fn rejects_band_not_starting_at_zero() {
        let bands = vec![band(dec!(1), None, dec!(1))];
        assert_eq!(
            validate_bands(&bands),
            Err(ScheduleError::FirstBandNotAtZero(dec!(1)))
        );
    }

    #[test]
    fn rejects_empty_and_unterminated_bands() {
        let empty = vec![band(dec!(0), Some(dec!(0)), dec!(1)), band(dec!(0), None, dec!(1))];
        assert!(matches!(
            validate_bands(&empty),
            Err(ScheduleError::BandEmpty { index: 0, .. })
        ));

        let open = vec![band(dec!(0), Some(dec!(100)), dec!(1))];
        assert_eq!(validate_bands(&open), Err(ScheduleError::MissingUnboundedBand));
    }

    #[test]
    fn rejects_rebate_rate_above_one() {
        let mut cfg = standard_retainer();
        cfg.rebate_rate = dec!(1.01);
        assert!(matches!(
            validate_retainer(&cfg),
            Err(ScheduleError::InvalidRetainer(_))
        ));
    }

    #[test]
    fn rejects_negative_ev_thresholds() {
        let mut cfg = standard_retainer();
        cfg.rebate_ev_threshold = dec!(-1);
        assert_eq!(
            validate_retainer(&cfg),
            Err(ScheduleError::InvalidRetainer("rebate_ev_threshold must not be negative"))
        );

        let mut cfg = standard_retainer();
        cfg.reduced_rate_below_ev = dec!(-1);
        assert_eq!(
            validate_retainer(&cfg),
            Err(ScheduleError::InvalidRetainer("reduced_rate_below_ev must not be negative"))
        );
    }
}
