//! Birth balance from the Moon's position within its nakshatra.

use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::normalize_360;

/// Compute the nakshatra birth balance.
///
/// Returns `(nakshatra_index, balance_years, elapsed_fraction)`:
/// - `nakshatra_index`: 0-based index (0=Ashwini..26=Revati) of the Moon's nakshatra
/// - `balance_years`: unexpired part of the starting lord's period
/// - `elapsed_fraction`: fraction of the nakshatra already traversed [0, 1)
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_years: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let position_in_nak = lon - (nak_idx as f64) * NAKSHATRA_SPAN_27;
    let elapsed_fraction = (position_in_nak / NAKSHATRA_SPAN_27).clamp(0.0, 1.0);
    let balance_years = entry_period_years * (1.0 - elapsed_fraction);
    (nak_idx, balance_years, elapsed_fraction)
}
