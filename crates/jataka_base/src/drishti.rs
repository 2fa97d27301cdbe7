//! Graha drishti (planetary aspect) strength in virupas.
//!
//! The classical piecewise virupa curve measures how strongly a graha
//! aspects a point; Mars (4th/8th), Jupiter (5th/9th) and Saturn (3rd/10th)
//! receive bonuses on their special aspects. Whole-sign aspects used by the
//! yoga rules live in `graha_relationships::aspects_sign`.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::normalize_360;

/// Aspect strength for a single graha→target pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DrishtiEntry {
    /// Angular distance from source to target in [0, 360).
    pub angular_distance: f64,
    /// Base virupa from the piecewise formula.
    pub base_virupa: f64,
    /// Planet-specific bonus (Mars/Jupiter/Saturn only).
    pub special_virupa: f64,
    /// Total virupa = base + special.
    pub total_virupa: f64,
}

/// Piecewise base virupa for a given angular distance.
///
/// - `[0, 30)`:   0
/// - `[30, 90)`:  `(A - 30) * 0.75`       → 0..45
/// - `[90, 150)`: `45 - (A - 90) * 0.75`   → 45..0
/// - `[150, 180)`: `(A - 150) * 2`          → 0..60
/// - `[180, 300)`: `60 - (A - 180) * 0.5`   → 60..0
/// - `[300, 360)`: 0
pub fn base_virupa(angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    if a < 30.0 {
        0.0
    } else if a < 90.0 {
        (a - 30.0) * 0.75
    } else if a < 150.0 {
        45.0 - (a - 90.0) * 0.75
    } else if a < 180.0 {
        (a - 150.0) * 2.0
    } else if a < 300.0 {
        60.0 - (a - 180.0) * 0.5
    } else {
        0.0
    }
}

/// Planet-specific bonus virupa for special aspects.
///
/// - Mars: +15 in `[90, 120)` or `[210, 240)`
/// - Jupiter: +30 in `[120, 150)` or `[240, 270)`
/// - Saturn: +45 in `[60, 90)` or `[270, 300)`
pub fn special_virupa(graha: Graha, angular_distance: f64) -> f64 {
    let a = normalize_360(angular_distance);
    let in_either = |lo: f64, hi: f64, lo2: f64, hi2: f64| {
        (lo..hi).contains(&a) || (lo2..hi2).contains(&a)
    };
    match graha {
        Graha::Mangal if in_either(90.0, 120.0, 210.0, 240.0) => 15.0,
        Graha::Guru if in_either(120.0, 150.0, 240.0, 270.0) => 30.0,
        Graha::Shani if in_either(60.0, 90.0, 270.0, 300.0) => 45.0,
        _ => 0.0,
    }
}

/// Drishti from a graha at `source_lon` onto the point `target_lon`.
pub fn graha_drishti(graha: Graha, source_lon: f64, target_lon: f64) -> DrishtiEntry {
    let angular_distance = normalize_360(target_lon - source_lon);
    let base = base_virupa(angular_distance);
    let special = special_virupa(graha, angular_distance);
    DrishtiEntry {
        angular_distance,
        base_virupa: base,
        special_virupa: special,
        total_virupa: base + special,
    }
}
