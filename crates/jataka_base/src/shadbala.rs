//! Shadbala (six-fold planetary strength) computation.
//!
//! Pure math. **Sapta grahas only** (Sun through Saturn); single-graha
//! functions return 0.0 for Rahu/Ketu. Every component is in virupas
//! (shashtiamsas, 60 per rupa).
//!
//! The six components:
//! 1. Sthana Bala (positional): uchcha + saptavargaja + ojhayugma + kendradi + drekkana
//! 2. Dig Bala (directional)
//! 3. Kala Bala (temporal): nathonnatha + paksha + tribhaga + abda + masa + vara + hora + ayana + yuddha
//! 4. Cheshta Bala (motional)
//! 5. Naisargika Bala (natural)
//! 6. Drik Bala (aspectual)
//!
//! Time-of-day parts use a civil approximation: day runs 06:00-18:00 local
//! and the Vedic weekday turns over at 06:00.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::amsha::{navamsa_longitude, saptavarga_rashis};
use crate::chart::Chart;
use crate::drishti::graha_drishti;
use crate::graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
use crate::graha_relationships::{
    BeneficNature, Dignity, GrahaGender, dignity_in_rashi_with_positions, exaltation_degree,
    graha_gender, hora_lord, moon_benefic_nature, natural_benefic_malefic, vaar_lord,
};
use crate::panchang::Vaar;
use crate::rashi::{RASHI_SPAN, house_from, rashi_index_of};
use crate::util::{angular_separation, normalize_360};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Natural strength in virupas.
pub const NAISARGIKA_BALA: [f64; 7] = [60.0, 51.43, 17.14, 25.71, 34.29, 42.86, 8.57];

/// House of maximum directional strength.
/// Sun=10, Moon=4, Mars=10, Mercury=1, Jupiter=1, Venus=4, Saturn=7.
pub const DIG_BALA_BHAVA: [u8; 7] = [10, 4, 10, 1, 1, 4, 7];

/// Mean daily motion (deg/day) for cheshta bala. Sun/Moon are not speed-scored.
pub const MEAN_SPEED: [f64; 7] = [0.9856, 13.1764, 0.524, 0.9856, 0.0831, 0.9856, 0.0335];

/// Apparent disc diameter ranking used to decide planetary war.
/// Sun/Moon never fight.
pub const BIMBA_DIAMETER: [f64; 7] = [0.0, 0.0, 30.0, 40.0, 45.0, 60.0, 30.0];

/// Minimum total (virupas) for a graha to be considered strong.
pub const REQUIRED_STRENGTH: [f64; 7] = [390.0, 360.0, 300.0, 420.0, 390.0, 330.0, 300.0];

/// Sum of the component maxima: sthana 375, dig 60, kala 510, cheshta 60,
/// naisargika 60, drik 60.
pub const MAX_TOTAL_VIRUPAS: f64 = 1125.0;

/// Obliquity of the ecliptic used for ayana bala declinations.
pub const OBLIQUITY_DEG: f64 = 23.44;

/// Saptavargaja dignity-to-points mapping.
const SAPTAVARGAJA_POINTS: [f64; 9] = [
    30.0, // Exalted
    22.5, // Moolatrikone
    20.0, // OwnSign
    15.0, // AdhiMitra
    10.0, // Mitra
    7.5,  // Sama
    5.0,  // Shatru
    2.5,  // AdhiShatru
    1.25, // Debilitated
];

fn saptavargaja_dignity_points(dignity: Dignity) -> f64 {
    match dignity {
        Dignity::Exalted => SAPTAVARGAJA_POINTS[0],
        Dignity::Moolatrikone => SAPTAVARGAJA_POINTS[1],
        Dignity::OwnSign => SAPTAVARGAJA_POINTS[2],
        Dignity::AdhiMitra => SAPTAVARGAJA_POINTS[3],
        Dignity::Mitra => SAPTAVARGAJA_POINTS[4],
        Dignity::Sama => SAPTAVARGAJA_POINTS[5],
        Dignity::Shatru => SAPTAVARGAJA_POINTS[6],
        Dignity::AdhiShatru => SAPTAVARGAJA_POINTS[7],
        Dignity::Debilitated => SAPTAVARGAJA_POINTS[8],
    }
}

/// Benefic/malefic for temporal and aspectual strength: the Moon by phase,
/// everything else by nature.
fn strength_nature(graha: Graha, moon_sun_elong: f64) -> BeneficNature {
    if graha == Graha::Chandra {
        moon_benefic_nature(moon_sun_elong)
    } else {
        natural_benefic_malefic(graha)
    }
}

// ---------------------------------------------------------------------------
// Sthana Bala
// ---------------------------------------------------------------------------

/// Uchcha Bala: 60 at the exaltation point, falling linearly to 0 at debilitation.
pub fn uchcha_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    match exaltation_degree(graha) {
        Some(exalt) => 60.0 * (1.0 - angular_separation(sidereal_lon, exalt) / 180.0),
        None => 0.0,
    }
}

/// Saptavargaja Bala: dignity points summed over D1, D2, D3, D7, D9, D12, D30.
///
/// `varga_rashi[varga][graha]` = rashi index in that varga. Compound
/// friendship is judged from the positions within each varga.
pub fn saptavargaja_bala(graha: Graha, sid_lon: f64, varga_rashi: &[[u8; 7]; 7]) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let gi = graha.index() as usize;
    varga_rashi
        .iter()
        .map(|varga| {
            let dignity = dignity_in_rashi_with_positions(graha, sid_lon, varga[gi], varga);
            saptavargaja_dignity_points(dignity)
        })
        .sum()
}

/// Ojhayugma Bala: 15 for the rashi and 15 for the navamsa when the sign
/// parity suits the graha. Female grahas want even signs, the rest odd.
pub fn ojhayugma_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    // 0-based even index = odd sign
    let rashi_odd = rashi_index_of(sidereal_lon) % 2 == 0;
    let navamsa_odd = rashi_index_of(navamsa_longitude(sidereal_lon)) % 2 == 0;
    let wants_odd = graha_gender(graha) != GrahaGender::Female;

    let mut score = 0.0;
    if rashi_odd == wants_odd {
        score += 15.0;
    }
    if navamsa_odd == wants_odd {
        score += 15.0;
    }
    score
}

/// Kendradi Bala: kendra(1,4,7,10)=60, panaphara(2,5,8,11)=30, apoklima(3,6,9,12)=15.
pub fn kendradi_bala(bhava_number: u8) -> f64 {
    match bhava_number {
        1 | 4 | 7 | 10 => 60.0,
        2 | 5 | 8 | 11 => 30.0,
        3 | 6 | 9 | 12 => 15.0,
        _ => 0.0,
    }
}

/// Drekkana Bala: male in 1st decanate, female in 2nd, neuter in 3rd earn 15.
pub fn drekkana_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let lon = normalize_360(sidereal_lon);
    let deg_in_rashi = lon - rashi_index_of(lon) as f64 * RASHI_SPAN;
    let decanate = ((deg_in_rashi / 10.0).floor() as u8).min(2) + 1;

    match (graha_gender(graha), decanate) {
        (GrahaGender::Male, 1) | (GrahaGender::Female, 2) | (GrahaGender::Neuter, 3) => 15.0,
        _ => 0.0,
    }
}

/// Sthana Bala breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SthanaBalaBreakdown {
    pub uchcha: f64,
    pub saptavargaja: f64,
    pub ojhayugma: f64,
    pub kendradi: f64,
    pub drekkana: f64,
    pub total: f64,
}

/// Sthana bala for a single graha.
pub fn sthana_bala(
    graha: Graha,
    sid_lon: f64,
    bhava: u8,
    varga_rashi: &[[u8; 7]; 7],
) -> SthanaBalaBreakdown {
    if graha.is_node() {
        return SthanaBalaBreakdown::default();
    }
    let u = uchcha_bala(graha, sid_lon);
    let s = saptavargaja_bala(graha, sid_lon, varga_rashi);
    let o = ojhayugma_bala(graha, sid_lon);
    let k = kendradi_bala(bhava);
    let d = drekkana_bala(graha, sid_lon);
    SthanaBalaBreakdown {
        uchcha: u,
        saptavargaja: s,
        ojhayugma: o,
        kendradi: k,
        drekkana: d,
        total: u + s + o + k + d,
    }
}

// ---------------------------------------------------------------------------
// Dig Bala
// ---------------------------------------------------------------------------

/// Dig Bala: `60 * (1 - dist/6)`, dist = shorter arc (in houses) to the ideal house.
pub fn dig_bala(graha: Graha, bhava_number: u8) -> f64 {
    if graha.is_node() || bhava_number == 0 || bhava_number > 12 {
        return 0.0;
    }
    let max_bhava = DIG_BALA_BHAVA[graha.index() as usize];
    let diff = (bhava_number as i16 - max_bhava as i16).unsigned_abs();
    let dist = diff.min(12 - diff).min(6);
    60.0 * (1.0 - dist as f64 / 6.0)
}

// ---------------------------------------------------------------------------
// Kala Bala
// ---------------------------------------------------------------------------

/// Local day/night split: daytime is 06:00-18:00.
///
/// Returns `(is_daytime, fraction_elapsed)` for a local clock hour in [0, 24).
pub fn day_night_phase(local_hours: f64) -> (bool, f64) {
    let h = local_hours.rem_euclid(24.0);
    if (6.0..18.0).contains(&h) {
        (true, (h - 6.0) / 12.0)
    } else {
        (false, (h - 18.0).rem_euclid(24.0) / 12.0)
    }
}

/// Nathonnatha Bala by distance from local midnight.
///
/// Diurnal grahas (Sun, Jupiter, Venus) score `60 * unnata / 12`, nocturnal
/// ones (Moon, Mars, Saturn) the complement. Mercury is always 60.
pub fn nathonnatha_bala(graha: Graha, local_hours: f64) -> f64 {
    let h = local_hours.rem_euclid(24.0);
    let unnata = if h <= 12.0 { h } else { 24.0 - h };
    match graha {
        Graha::Buddh => 60.0,
        Graha::Surya | Graha::Guru | Graha::Shukra => 60.0 * unnata / 12.0,
        Graha::Chandra | Graha::Mangal | Graha::Shani => 60.0 * (12.0 - unnata) / 12.0,
        Graha::Rahu | Graha::Ketu => 0.0,
    }
}

/// Paksha Bala: benefics `phase/3` (60 at full moon), malefics `60 - phase/3`.
/// The Moon always takes the benefic formula.
pub fn paksha_bala(graha: Graha, moon_sun_elong: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let elong = normalize_360(moon_sun_elong);
    let phase_angle = if elong <= 180.0 { elong } else { 360.0 - elong };
    let benefic_score = phase_angle / 3.0;

    match natural_benefic_malefic(graha) {
        BeneficNature::Benefic => benefic_score,
        BeneficNature::Malefic => 60.0 - benefic_score,
    }
}

/// Tribhaga Bala: Sun always 60; Jupiter, Mercury, Saturn rule the day
/// thirds and Moon, Venus, Mars the night thirds.
pub fn tribhaga_bala(graha: Graha, is_daytime: bool, fraction: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    if graha == Graha::Surya {
        return 60.0;
    }

    let third = ((fraction * 3.0).floor() as u8).min(2);
    let strong_graha = match (is_daytime, third) {
        (true, 0) => Graha::Guru,
        (true, 1) => Graha::Buddh,
        (true, _) => Graha::Shani,
        (false, 0) => Graha::Chandra,
        (false, 1) => Graha::Shukra,
        (false, _) => Graha::Mangal,
    };

    if graha == strong_graha { 60.0 } else { 0.0 }
}

fn lord_bala(graha: Graha, lord: Graha, points: f64) -> f64 {
    if !graha.is_node() && graha == lord {
        points
    } else {
        0.0
    }
}

/// Abda (year lord) Bala: 15.
pub fn abda_bala(graha: Graha, year_lord: Graha) -> f64 {
    lord_bala(graha, year_lord, 15.0)
}

/// Masa (month lord) Bala: 30.
pub fn masa_bala(graha: Graha, month_lord: Graha) -> f64 {
    lord_bala(graha, month_lord, 30.0)
}

/// Vara (weekday lord) Bala: 45.
pub fn vara_bala(graha: Graha, weekday_lord: Graha) -> f64 {
    lord_bala(graha, weekday_lord, 45.0)
}

/// Hora (planetary hour lord) Bala: 60.
pub fn hora_bala(graha: Graha, hora_lord: Graha) -> f64 {
    lord_bala(graha, hora_lord, 60.0)
}

/// Declination from tropical ecliptic longitude and latitude.
pub fn ecliptic_to_declination(tropical_lon_deg: f64, latitude_deg: f64) -> f64 {
    let eps = OBLIQUITY_DEG.to_radians();
    let lambda = tropical_lon_deg.to_radians();
    let beta = latitude_deg.to_radians();
    let sin_dec = beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin();
    sin_dec.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Ayana Bala from declination.
///
/// Benefic: `(24 + decl) / 48 * 60`, malefic: `(24 - decl) / 48 * 60`.
/// The Sun's score is doubled.
pub fn ayana_bala(graha: Graha, declination_deg: f64, moon_sun_elong: f64) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let kranti = declination_deg.clamp(-24.0, 24.0);
    let score = match strength_nature(graha, moon_sun_elong) {
        BeneficNature::Benefic => (24.0 + kranti) / 48.0 * 60.0,
        BeneficNature::Malefic => (24.0 - kranti) / 48.0 * 60.0,
    };
    if graha == Graha::Surya {
        score * 2.0
    } else {
        score
    }
}

/// Yuddha (planetary war) Bala.
///
/// Mars through Saturn within 1 degree of each other are at war. The graha
/// with the larger disc wins +60, the other loses 60; equal discs leave both
/// unchanged. The total is clamped to ±60.
pub fn yuddha_bala(graha: Graha, sidereal_lons: &[f64; 7]) -> f64 {
    let gi = graha.index() as usize;
    if graha.is_node() || gi < 2 {
        return 0.0;
    }

    let mut total: f64 = 0.0;
    for oi in 2..7 {
        if oi == gi || angular_separation(sidereal_lons[gi], sidereal_lons[oi]) >= 1.0 {
            continue;
        }
        let mine = BIMBA_DIAMETER[gi];
        let theirs = BIMBA_DIAMETER[oi];
        if mine > theirs {
            total += 60.0;
        } else if mine < theirs {
            total -= 60.0;
        }
    }
    total.clamp(-60.0, 60.0)
}

/// Kala Bala inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KalaBalaInputs {
    /// Local civil clock time in hours since midnight, [0, 24).
    pub local_hours: f64,
    pub moon_sun_elongation: f64,
    pub year_lord: Graha,
    pub month_lord: Graha,
    pub weekday_lord: Graha,
    pub hora_lord: Graha,
    pub graha_declinations: [f64; 7],
    pub sidereal_lons: [f64; 7],
}

impl KalaBalaInputs {
    /// Derive the time lords from the local civil birth time.
    ///
    /// Year and month lords are the weekday lords of the civil year's and
    /// month's first day. The weekday and hora count from 06:00, so births
    /// before 06:00 belong to the previous weekday.
    pub fn from_civil(
        local: NaiveDateTime,
        moon_sun_elongation: f64,
        graha_declinations: [f64; 7],
        sidereal_lons: [f64; 7],
    ) -> Self {
        let date = local.date();
        let local_hours =
            local.hour() as f64 + local.minute() as f64 / 60.0 + local.second() as f64 / 3600.0;

        let year_start = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
        let month_start = date.with_day(1).unwrap_or(date);

        let since_sunrise = local - TimeDelta::hours(6);
        let vedic_vaar = Vaar::of_date(since_sunrise.date());
        let hora_index = since_sunrise.hour() as u8;

        Self {
            local_hours,
            moon_sun_elongation,
            year_lord: vaar_lord(Vaar::of_date(year_start)),
            month_lord: vaar_lord(Vaar::of_date(month_start)),
            weekday_lord: vaar_lord(vedic_vaar),
            hora_lord: hora_lord(vedic_vaar, hora_index),
            graha_declinations,
            sidereal_lons,
        }
    }
}

/// Kala Bala breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KalaBalaBreakdown {
    pub nathonnatha: f64,
    pub paksha: f64,
    pub tribhaga: f64,
    pub abda: f64,
    pub masa: f64,
    pub vara: f64,
    pub hora: f64,
    pub ayana: f64,
    pub yuddha: f64,
    pub total: f64,
}

/// Kala bala for a single graha.
pub fn kala_bala(graha: Graha, inputs: &KalaBalaInputs) -> KalaBalaBreakdown {
    if graha.is_node() {
        return KalaBalaBreakdown::default();
    }
    let (is_daytime, fraction) = day_night_phase(inputs.local_hours);
    let n = nathonnatha_bala(graha, inputs.local_hours);
    let p = paksha_bala(graha, inputs.moon_sun_elongation);
    let t = tribhaga_bala(graha, is_daytime, fraction);
    let ab = abda_bala(graha, inputs.year_lord);
    let ma = masa_bala(graha, inputs.month_lord);
    let va = vara_bala(graha, inputs.weekday_lord);
    let ho = hora_bala(graha, inputs.hora_lord);
    let ay = ayana_bala(
        graha,
        inputs.graha_declinations[graha.index() as usize],
        inputs.moon_sun_elongation,
    );
    let yu = yuddha_bala(graha, &inputs.sidereal_lons);
    KalaBalaBreakdown {
        nathonnatha: n,
        paksha: p,
        tribhaga: t,
        abda: ab,
        masa: ma,
        vara: va,
        hora: ho,
        ayana: ay,
        yuddha: yu,
        total: n + p + t + ab + ma + va + ho + ay + yu,
    }
}

// ---------------------------------------------------------------------------
// Cheshta, Naisargika, Drik
// ---------------------------------------------------------------------------

/// Cheshta Bala: Sun/Moon fixed 30; retrograde 60; direct
/// `min(60, 30 * speed / mean_speed)`.
pub fn cheshta_bala(graha: Graha, speed_deg_per_day: f64) -> f64 {
    match graha {
        Graha::Rahu | Graha::Ketu => 0.0,
        Graha::Surya | Graha::Chandra => 30.0,
        _ if speed_deg_per_day < 0.0 => 60.0,
        _ => {
            let ratio = speed_deg_per_day / MEAN_SPEED[graha.index() as usize];
            (30.0 * ratio).clamp(0.0, 60.0)
        }
    }
}

/// Naisargika (natural) bala for a graha.
pub fn naisargika_bala(graha: Graha) -> f64 {
    if graha.is_node() {
        0.0
    } else {
        NAISARGIKA_BALA[graha.index() as usize]
    }
}

/// Drik Bala: `(benefic_virupas - malefic_virupas) / 4`, clamped to ±60.
///
/// `aspecting` lists every body's longitude; the target itself is skipped.
/// Rahu/Ketu count as malefics.
pub fn drik_bala(
    graha: Graha,
    target_lon: f64,
    aspecting: &[(Graha, f64)],
    moon_sun_elong: f64,
) -> f64 {
    if graha.is_node() {
        return 0.0;
    }
    let mut benefic_sum = 0.0;
    let mut malefic_sum = 0.0;

    for &(src, src_lon) in aspecting {
        if src == graha {
            continue;
        }
        let total = graha_drishti(src, src_lon, target_lon).total_virupa;
        match strength_nature(src, moon_sun_elong) {
            BeneficNature::Benefic => benefic_sum += total,
            BeneficNature::Malefic => malefic_sum += total,
        }
    }

    ((benefic_sum - malefic_sum) / 4.0).clamp(-60.0, 60.0)
}

// ---------------------------------------------------------------------------
// Complete Shadbala
// ---------------------------------------------------------------------------

/// Qualitative band of the strength percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthGrade {
    Excellent,
    Strong,
    Moderate,
    Weak,
    VeryWeak,
}

impl StrengthGrade {
    /// ≥80 Excellent, ≥60 Strong, ≥40 Moderate, ≥20 Weak, else VeryWeak.
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 80.0 {
            Self::Excellent
        } else if pct >= 60.0 {
            Self::Strong
        } else if pct >= 40.0 {
            Self::Moderate
        } else if pct >= 20.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
            Self::VeryWeak => "Very Weak",
        }
    }
}

/// Total strength as a percentage of `MAX_TOTAL_VIRUPAS`, clamped to [0, 100].
pub fn strength_percentage(total_virupas: f64) -> f64 {
    (total_virupas / MAX_TOTAL_VIRUPAS * 100.0).clamp(0.0, 100.0)
}

/// Complete Shadbala for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadbalaEntry {
    pub graha: Graha,
    pub sthana: SthanaBalaBreakdown,
    pub dig: f64,
    pub kala: KalaBalaBreakdown,
    pub cheshta: f64,
    pub naisargika: f64,
    pub drik: f64,
    /// Sum of the six components, virupas.
    pub total: f64,
    pub total_rupas: f64,
    pub required: f64,
    pub is_strong: bool,
    pub percentage: f64,
    pub grade: StrengthGrade,
}

/// All inputs needed for complete Shadbala computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadbalaInputs {
    /// Sapta graha sidereal longitudes.
    pub sidereal_lons: [f64; 7],
    /// House numbers (1-12) for sapta grahas.
    pub bhava_numbers: [u8; 7],
    /// Speed (deg/day) for sapta grahas.
    pub speeds: [f64; 7],
    /// Every body that casts an aspect for drik bala, nodes included.
    pub aspecting: Vec<(Graha, f64)>,
    pub kala: KalaBalaInputs,
    /// 7 vargas x 7 grahas rashi indices.
    pub varga_rashi_indices: [[u8; 7]; 7],
}

impl ShadbalaInputs {
    /// Assemble inputs from a built chart and the local civil birth time.
    ///
    /// `ayanamsha_deg` converts sidereal longitudes back to tropical for
    /// declinations. Returns None when any sapta graha is missing.
    pub fn from_chart(chart: &Chart, local_birth: NaiveDateTime, ayanamsha_deg: f64) -> Option<Self> {
        let mut lons = [0.0; 7];
        let mut bhavas = [1u8; 7];
        let mut speeds = [0.0; 7];
        let mut declinations = [0.0; 7];
        let lagna_idx = chart.lagna.rashi_index();

        for g in SAPTA_GRAHAS {
            let p = chart.position(g)?;
            let i = g.index() as usize;
            lons[i] = p.longitude;
            bhavas[i] = p
                .house
                .unwrap_or_else(|| house_from(p.rashi_index(), lagna_idx));
            speeds[i] = p.speed;
            declinations[i] = ecliptic_to_declination(p.longitude + ayanamsha_deg, p.latitude);
        }

        let aspecting = ALL_GRAHAS
            .iter()
            .filter_map(|g| chart.position(*g).map(|p| (*g, p.longitude)))
            .collect();

        let elong = normalize_360(lons[1] - lons[0]);
        Some(Self {
            sidereal_lons: lons,
            bhava_numbers: bhavas,
            speeds,
            aspecting,
            kala: KalaBalaInputs::from_civil(local_birth, elong, declinations, lons),
            varga_rashi_indices: saptavarga_rashis(&lons),
        })
    }
}

/// Compute complete Shadbala for one sapta graha.
pub fn shadbala_from_inputs(graha: Graha, inputs: &ShadbalaInputs) -> Option<ShadbalaEntry> {
    if graha.is_node() {
        return None;
    }
    let gi = graha.index() as usize;
    let lon = inputs.sidereal_lons[gi];

    let sthana = sthana_bala(graha, lon, inputs.bhava_numbers[gi], &inputs.varga_rashi_indices);
    let dig = dig_bala(graha, inputs.bhava_numbers[gi]);
    let kala = kala_bala(graha, &inputs.kala);
    let cheshta = cheshta_bala(graha, inputs.speeds[gi]);
    let naisargika = naisargika_bala(graha);
    let drik = drik_bala(graha, lon, &inputs.aspecting, inputs.kala.moon_sun_elongation);

    let total = sthana.total + dig + kala.total + cheshta + naisargika + drik;
    let required = REQUIRED_STRENGTH[gi];
    let percentage = strength_percentage(total);

    Some(ShadbalaEntry {
        graha,
        sthana,
        dig,
        kala,
        cheshta,
        naisargika,
        drik,
        total,
        total_rupas: total / 60.0,
        required,
        is_strong: total >= required,
        percentage,
        grade: StrengthGrade::from_percentage(percentage),
    })
}

/// Shadbala for all seven sapta grahas, Sun first.
pub fn shadbala_all(inputs: &ShadbalaInputs) -> Vec<ShadbalaEntry> {
    SAPTA_GRAHAS
        .iter()
        .filter_map(|g| shadbala_from_inputs(*g, inputs))
        .collect()
}
