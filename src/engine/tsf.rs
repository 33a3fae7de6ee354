//! Transaction Structuring Fee lookup.

use rust_decimal::Decimal;

use crate::domain::{Money, TsfBand};

/// Flat fee of the band `ev` falls into.
///
/// Non-positive EV matches no band and costs nothing. A positive EV that
/// matches no band can only come from an unvalidated table; it is charged the
/// last band's fee.
pub fn resolve_tsf(ev: Money, bands: &[TsfBand]) -> Money {
    if ev <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    if let Some(band) = bands.iter().find(|b| b.contains(ev)) {
        return band.fee;
    }

    let fallback = bands.last().map(|b| b.fee).unwrap_or(Decimal::ZERO);
    tracing::warn!(%ev, %fallback, "no structuring fee band matched, using last band");
    fallback
}
