//! Amsha (divisional chart) calculations.
//!
//! Each amsha divides the 30-degree rashi span into N equal parts and maps
//! each part to a target rashi. The navamsa (D9) is the chart published in
//! the horoscope; the full saptavarga set (D1, D2, D3, D7, D9, D12, D30)
//! feeds the saptavargaja sub-score of shadbala.
//!
//! Only longitudes are transformed; houses are never recomputed for
//! divisional charts.

use serde::{Deserialize, Serialize};

use crate::chart::BodyPosition;
use crate::graha::Graha;
use crate::rashi::{RASHI_SPAN, Rashi, RashiElement, rashi_index_of};
use crate::util::normalize_360;

/// Divisional charts of the saptavarga set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Amsha {
    D1,
    D2,
    D3,
    D7,
    D9,
    D12,
    D30,
}

/// The seven vargas used by saptavargaja bala, in traditional order.
pub const SAPTAVARGA: [Amsha; 7] = [
    Amsha::D1,
    Amsha::D2,
    Amsha::D3,
    Amsha::D7,
    Amsha::D9,
    Amsha::D12,
    Amsha::D30,
];

impl Amsha {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D12 => 12,
            Self::D30 => 30,
        }
    }

    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D7 => "Saptamsha",
            Self::D9 => "Navamsha",
            Self::D12 => "Dwadashamsha",
            Self::D30 => "Trimshamsha",
        }
    }
}

/// Navamsa starting rashi by element: fire Mesha, earth Makara, air Tula, water Karka.
pub const fn navamsa_start(element: RashiElement) -> u16 {
    match element {
        RashiElement::Fire => 0,
        RashiElement::Earth => 9,
        RashiElement::Air => 6,
        RashiElement::Water => 3,
    }
}

/// Target rashi index for a division of a natal rashi.
fn amsha_target_rashi(amsha: Amsha, natal_rashi_idx: u8, div_idx: u16) -> u8 {
    let natal = Rashi::from_index(natal_rashi_idx);
    match amsha {
        Amsha::D1 => natal_rashi_idx,

        // Hora: odd rashi -> Simha then Karka, even rashi -> Karka then Simha
        Amsha::D2 => {
            let first_is_leo = natal.is_odd();
            match (first_is_leo, div_idx) {
                (true, 0) | (false, 1) => 4,
                _ => 3,
            }
        }

        // Drekkana: trine progression (+4 step)
        Amsha::D3 => ((natal_rashi_idx as u16 + div_idx * 4) % 12) as u8,

        // Saptamsha: odd rashi from itself, even rashi from its 7th
        Amsha::D7 => {
            let start = if natal.is_odd() {
                natal_rashi_idx as u16
            } else {
                (natal_rashi_idx as u16 + 6) % 12
            };
            ((start + div_idx) % 12) as u8
        }

        Amsha::D9 => ((navamsa_start(natal.element()) + div_idx) % 12) as u8,

        Amsha::D12 => ((natal_rashi_idx as u16 + div_idx) % 12) as u8,

        // Trimshamsha: odd rashi counts from Mesha, even rashi from Meena
        Amsha::D30 => {
            let start: u16 = if natal.is_odd() { 0 } else { 11 };
            ((start + div_idx) % 12) as u8
        }
    }
}

/// Transform a sidereal longitude through an amsha division.
///
/// Returns the amsha longitude in [0, 360). The position inside the
/// division is rescaled to the full 30 degrees of the target rashi.
pub fn amsha_longitude(sidereal_lon: f64, amsha: Amsha) -> f64 {
    let lon = normalize_360(sidereal_lon);
    if amsha == Amsha::D1 {
        return lon;
    }

    let rashi_idx = rashi_index_of(lon);
    let pos_in_rashi = lon - rashi_idx as f64 * RASHI_SPAN;
    let total_divisions = amsha.divisions();
    let deg_per_div = RASHI_SPAN / total_divisions as f64;

    let div_idx = ((pos_in_rashi / deg_per_div).floor() as u16).min(total_divisions - 1);
    let target_rashi_idx = amsha_target_rashi(amsha, rashi_idx, div_idx);

    let pos_in_div = pos_in_rashi - div_idx as f64 * deg_per_div;
    let scaled_pos = pos_in_div / deg_per_div * RASHI_SPAN;

    normalize_360(target_rashi_idx as f64 * RASHI_SPAN + scaled_pos)
}

/// 0-based rashi index of a longitude in the given amsha.
pub fn amsha_rashi_index(sidereal_lon: f64, amsha: Amsha) -> u8 {
    rashi_index_of(amsha_longitude(sidereal_lon, amsha))
}

/// D9 longitude.
pub fn navamsa_longitude(sidereal_lon: f64) -> f64 {
    amsha_longitude(sidereal_lon, Amsha::D9)
}

/// Rashi index of each sapta graha in each saptavarga.
///
/// `result[varga][graha]`, varga order as in `SAPTAVARGA`.
pub fn saptavarga_rashis(sapta_lons: &[f64; 7]) -> [[u8; 7]; 7] {
    let mut out = [[0u8; 7]; 7];
    for (v, amsha) in SAPTAVARGA.iter().enumerate() {
        for (g, lon) in sapta_lons.iter().enumerate() {
            out[v][g] = amsha_rashi_index(*lon, *amsha);
        }
    }
    out
}

/// A body's position in the navamsa chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavamsaPosition {
    pub graha: Graha,
    /// D1 sidereal longitude the position was derived from.
    pub d1_longitude: f64,
    /// D9 longitude in [0, 360).
    pub longitude: f64,
    /// D9 sign number 1..12.
    pub sign: u8,
    pub rashi: Rashi,
    /// Degrees within the D9 sign.
    pub degrees_in_sign: f64,
    pub is_retrograde: bool,
}

/// Navamsa placement for every body. Houses are not recomputed.
pub fn navamsa_positions(positions: &[BodyPosition]) -> Vec<NavamsaPosition> {
    positions
        .iter()
        .map(|p| {
            let longitude = navamsa_longitude(p.longitude);
            let idx = rashi_index_of(longitude);
            NavamsaPosition {
                graha: p.graha,
                d1_longitude: p.longitude,
                longitude,
                sign: idx + 1,
                rashi: Rashi::from_index(idx),
                degrees_in_sign: longitude - idx as f64 * RASHI_SPAN,
                is_retrograde: p.is_retrograde(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d1_identity() {
        for i in 0..12 {
            let lon = i as f64 * 30.0 + 15.0;
            assert!((amsha_longitude(lon, Amsha::D1) - lon).abs() < 1e-10);
        }
    }

    #[test]
    fn d9_fire_rashi() {
        // Mesha 5 deg: part 1 from Mesha -> Vrishabha, scaled 15
        let result = navamsa_longitude(5.0);
        assert!((result - 45.0).abs() < 1e-9, "got {result}");
    }

    #[test]
    fn d9_earth_rashi() {
        // Vrishabha 15.5 deg: part 4 from Makara -> Vrishabha, scaled 19.5
        let result = navamsa_longitude(45.5);
        assert!((result - 49.5).abs() < 1e-9, "got {result}");
    }

    #[test]
    fn d9_air_and_water_starts() {
        assert!((navamsa_longitude(60.0) - 180.0).abs() < 1e-9);
        assert!((navamsa_longitude(90.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn d9_last_part_of_meena() {
        // Meena (water) last part: 3 + 8 = 11 -> Meena
        let result = navamsa_longitude(359.9);
        assert_eq!(rashi_index_of(result), 11);
    }

    #[test]
    fn d2_cancer_leo_hora() {
        assert_eq!(amsha_rashi_index(10.0, Amsha::D2), 4);
        assert_eq!(amsha_rashi_index(20.0, Amsha::D2), 3);
        assert_eq!(amsha_rashi_index(40.0, Amsha::D2), 3);
        assert_eq!(amsha_rashi_index(50.0, Amsha::D2), 4);
    }

    #[test]
    fn d3_trines() {
        assert_eq!(amsha_rashi_index(5.0, Amsha::D3), 0);
        assert_eq!(amsha_rashi_index(15.0, Amsha::D3), 4);
        assert_eq!(amsha_rashi_index(25.0, Amsha::D3), 8);
    }

    #[test]
    fn d7_even_sign_starts_from_seventh() {
        // Vrishabha (even) first part -> Vrishchika
        assert_eq!(amsha_rashi_index(31.0, Amsha::D7), 7);
        assert_eq!(amsha_rashi_index(1.0, Amsha::D7), 0);
    }

    #[test]
    fn d30_even_counts_from_meena() {
        assert_eq!(amsha_rashi_index(0.5, Amsha::D30), 0);
        assert_eq!(amsha_rashi_index(30.5, Amsha::D30), 11);
        assert_eq!(amsha_rashi_index(31.5, Amsha::D30), 0);
    }

    #[test]
    fn saptavarga_first_row_is_d1() {
        let lons = [10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0];
        let table = saptavarga_rashis(&lons);
        assert_eq!(table[0], [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn navamsa_positions_keep_graha_and_retro() {
        let positions = [
            BodyPosition::new(Graha::Surya, 5.0, 0.0, 1.0),
            BodyPosition::new(Graha::Shani, 45.5, 0.0, -0.02),
        ];
        let nav = navamsa_positions(&positions);
        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].graha, Graha::Surya);
        assert_eq!(nav[0].sign, 2);
        assert!((nav[0].degrees_in_sign - 15.0).abs() < 1e-9);
        assert!(nav[1].is_retrograde);
        assert_eq!(nav[1].rashi, Rashi::Vrishabha);
    }
}
