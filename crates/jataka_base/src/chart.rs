//! D-1 chart construction: houses from cusps, bodies into houses, lagna.
//!
//! Cusps arrive from the ephemeris provider (any house system) or from
//! `equal_house_cusps`. A body belongs to house `i` when its longitude lies
//! in `[cusp[i], cusp[i+1])`, with house 12 wrapping back to house 1.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, RashiInfo, rashi_from_longitude, rashi_index_of};
use crate::util::normalize_360;

/// One body's sidereal position with its derived classifications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub graha: Graha,
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Daily motion in longitude (deg/day); negative means retrograde.
    pub speed: f64,
    /// Sign number 1..12.
    pub sign: u8,
    /// Nakshatra number 1..27.
    pub nakshatra: u8,
    /// Pada 1..4.
    pub pada: u8,
    /// House 1..12, filled in by `build_chart`.
    pub house: Option<u8>,
}

impl BodyPosition {
    /// Classify a raw sidereal position. The house is left unset.
    pub fn new(graha: Graha, longitude: f64, latitude: f64, speed: f64) -> Self {
        let longitude = normalize_360(longitude);
        let nak = nakshatra_from_longitude(longitude);
        Self {
            graha,
            longitude,
            latitude,
            speed,
            sign: rashi_index_of(longitude) + 1,
            nakshatra: nak.number(),
            pada: nak.pada,
            house: None,
        }
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }

    /// 0-based rashi index; out-of-range signs are clamped into 1..=12.
    pub fn rashi_index(&self) -> u8 {
        self.sign.clamp(1, 12) - 1
    }

    pub fn rashi(&self) -> Rashi {
        Rashi::from_index(self.rashi_index())
    }

    pub fn nakshatra_name(&self) -> Nakshatra {
        Nakshatra::from_number(self.nakshatra)
    }

    /// Degrees already covered within the sign.
    pub fn degrees_in_sign(&self) -> f64 {
        self.longitude - (self.rashi_index() as f64) * 30.0
    }
}

/// One of the 12 houses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseEntry {
    /// House number 1..12.
    pub number: u8,
    /// Cusp (start) longitude, sidereal.
    pub cusp: f64,
    /// Sign number 1..12 of the cusp.
    pub sign: u8,
    /// Lord of the cusp's sign.
    pub lord: Graha,
    /// Grahas occupying the house.
    pub occupants: Vec<Graha>,
}

/// Ascendant summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagnaInfo {
    pub longitude: f64,
    pub rashi: RashiInfo,
    /// Sign number 1..12.
    pub sign: u8,
    pub lord: Graha,
    /// Nakshatra number 1..27.
    pub nakshatra: u8,
    pub pada: u8,
    /// Always 1.
    pub house: u8,
}

impl LagnaInfo {
    pub fn from_longitude(ascendant: f64) -> Self {
        let longitude = normalize_360(ascendant);
        let rashi = rashi_from_longitude(longitude);
        let nak = nakshatra_from_longitude(longitude);
        Self {
            longitude,
            rashi,
            sign: rashi.rashi_index + 1,
            lord: rashi_lord(rashi.rashi),
            nakshatra: nak.number(),
            pada: nak.pada,
            house: 1,
        }
    }

    /// 0-based rashi index of the lagna.
    pub fn rashi_index(&self) -> u8 {
        self.rashi.rashi_index
    }
}

/// A fully classified D-1 chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub lagna: LagnaInfo,
    /// Exactly 12 entries, house 1 first.
    pub houses: Vec<HouseEntry>,
    /// Input positions with `house` set.
    pub positions: Vec<BodyPosition>,
}

impl Chart {
    pub fn position(&self, graha: Graha) -> Option<&BodyPosition> {
        self.positions.iter().find(|p| p.graha == graha)
    }
}

/// Equal-house cusps: house `i` starts at `ascendant + 30*(i-1)`.
pub fn equal_house_cusps(ascendant: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = normalize_360(ascendant + 30.0 * i as f64);
    }
    cusps
}

/// Find which house (1..12) a longitude falls in.
///
/// Falls back to house 1 with a warning when no interval matches, which
/// only happens with degenerate cusps (all equal, non-finite).
pub fn find_house_number(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_360(longitude);
    for i in 0..12 {
        let start = normalize_360(cusps[i]);
        let end = normalize_360(cusps[(i + 1) % 12]);
        let inside = if start < end {
            lon >= start && lon < end
        } else if start > end {
            // Wraps around 360/0 boundary
            lon >= start || lon < end
        } else {
            false
        };
        if inside {
            return i as u8 + 1;
        }
    }
    tracing::warn!(longitude = lon, "no house interval matched, assigning house 1");
    1
}

/// Build houses and assign every body to exactly one house.
pub fn build_chart(cusps: &[f64; 12], ascendant: f64, positions: &[BodyPosition]) -> Chart {
    let mut placed: Vec<BodyPosition> = positions.to_vec();
    for p in &mut placed {
        p.house = Some(find_house_number(p.longitude, cusps));
    }

    let houses = (0..12u8)
        .map(|i| {
            let cusp = normalize_360(cusps[i as usize]);
            let idx = rashi_index_of(cusp);
            HouseEntry {
                number: i + 1,
                cusp,
                sign: idx + 1,
                lord: rashi_lord(Rashi::from_index(idx)),
                occupants: placed
                    .iter()
                    .filter(|p| p.house == Some(i + 1))
                    .map(|p| p.graha)
                    .collect(),
            }
        })
        .collect();

    Chart {
        lagna: LagnaInfo::from_longitude(ascendant),
        houses,
        positions: placed,
    }
}
