//! Core types for dasha period calculations.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Year length for dasha period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

const MILLIS_PER_YEAR: f64 = DAYS_PER_YEAR * 86_400_000.0;

/// Advance a datetime by a fractional number of dasha years.
///
/// `None` when the result falls outside chrono's representable range.
pub fn add_years(start: NaiveDateTime, years: f64) -> Option<NaiveDateTime> {
    let millis = (years * MILLIS_PER_YEAR).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_milliseconds(millis as i64).and_then(|d| start.checked_add_signed(d))
}

/// A bhukti (antardasha) inside a mahadasha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BhuktiPeriod {
    pub lord: Graha,
    /// Inclusive.
    pub start: NaiveDateTime,
    /// Exclusive.
    pub end: NaiveDateTime,
    /// Length in dasha years.
    pub years: f64,
}

impl BhuktiPeriod {
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }
}

/// A mahadasha with its nine bhuktis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DasaPeriod {
    pub lord: Graha,
    /// Inclusive.
    pub start: NaiveDateTime,
    /// Exclusive.
    pub end: NaiveDateTime,
    /// Actual length in years (the birth balance for the first period).
    pub years: f64,
    /// The lord's full cycle length in years.
    pub full_years: f64,
    pub bhuktis: Vec<BhuktiPeriod>,
}

impl DasaPeriod {
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }

    /// Whether this period was cut short by the birth balance.
    pub fn is_partial(&self) -> bool {
        self.years < self.full_years
    }
}
