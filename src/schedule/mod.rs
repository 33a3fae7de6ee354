//! Fee schedule configuration.
//!
//! A `FeeSchedule` bundles the success fee tiers, the TSF bands and the retainer
//! policy. It can only be constructed through validation, so the engine may rely
//! on the partition invariants without re-checking them per quote.

use serde::{Deserialize, Serialize};

use crate::domain::{RateTier, RetainerConfig, TsfBand};

pub mod tables;
pub mod validate;

pub use tables::{MINIMUM_ENTERPRISE_VALUE, REFERENCE_EVS};
pub use validate::ScheduleError;

/// Validated rate schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleFile")]
pub struct FeeSchedule {
    tiers: Vec<RateTier>,
    tsf_bands: Vec<TsfBand>,
    retainer: RetainerConfig,
}

/// Unvalidated on-disk shape of a schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleFile {
    pub tiers: Vec<RateTier>,
    pub tsf_bands: Vec<TsfBand>,
    pub retainer: RetainerConfig,
}

impl TryFrom<ScheduleFile> for FeeSchedule {
    type Error = ScheduleError;

    fn try_from(file: ScheduleFile) -> Result<Self, Self::Error> {
        FeeSchedule::new(file.tiers, file.tsf_bands, file.retainer)
    }
}

impl FeeSchedule {
    pub fn new(
        tiers: Vec<RateTier>,
        tsf_bands: Vec<TsfBand>,
        retainer: RetainerConfig,
    ) -> Result<Self, ScheduleError> {
        validate::validate_tiers(&tiers)?;
        validate::validate_bands(&tsf_bands)?;
        validate::validate_retainer(&retainer)?;
        Ok(Self {
            tiers,
            tsf_bands,
            retainer,
        })
    }

    /// The canonical schedule, run through the same checks as a loaded file.
    pub fn builtin() -> Result<Self, ScheduleError> {
        Self::new(
            tables::standard_tiers(),
            tables::standard_bands(),
            tables::standard_retainer(),
        )
    }

    /// The canonical engagement-letter schedule.
    pub fn standard() -> Self {
        Self {
            tiers: tables::standard_tiers(),
            tsf_bands: tables::standard_bands(),
            retainer: tables::standard_retainer(),
        }
    }

    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    pub fn tsf_bands(&self) -> &[TsfBand] {
        &self.tsf_bands
    }

    pub fn retainer(&self) -> &RetainerConfig {
        &self.retainer
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Bound;

    #[test]
    fn standard_schedule_passes_validation() {
        let std = FeeSchedule::standard();
        let rebuilt = FeeSchedule::new(
            std.tiers().to_vec(),
            std.tsf_bands().to_vec(),
            std.retainer().clone(),
        )
        .unwrap();
        assert_eq!(rebuilt, std);
    }

    #[test]
    fn deserializing_runs_validation() {
        let json = serde_json::to_string(&FeeSchedule::standard()).unwrap();
        let back: FeeSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FeeSchedule::standard());

        let mut bad = FeeSchedule::standard();
        bad.tiers[4].upper_bound = Bound::Capped(rust_decimal::Decimal::ONE);
        let json = serde_json::to_string(&bad).unwrap();
        let err = serde_json::from_str::<FeeSchedule>(&json).unwrap_err();
        assert!(err.to_string().contains("last tier must be unbounded"));
    }
}
