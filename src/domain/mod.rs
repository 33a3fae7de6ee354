//! Domain types used throughout the fee engine.
//!
//! This module defines:
//!
//! - schedule entries (`RateTier`, `TsfBand`, `RetainerConfig`, `Bound`)
//! - engine outputs (`TierBreakdown`, `RetainerOutcome`, `FeeResult`)

pub mod types;

pub use types::*;
