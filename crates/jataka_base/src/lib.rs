//! Pure-math Vedic horoscope derivations over sidereal positions.
//!
//! This crate provides:
//! - Rashi, nakshatra and pada classification of sidereal longitudes
//! - Panchangam elements (tithi, paksha, yoga, karana, vaar, solar month)
//! - D-1 chart construction from house cusps
//! - Divisional charts (navamsa and the saptavarga set)
//! - Vimshottari dasha/bhukti timelines
//! - Shadbala (six-fold strength)
//! - Yoga and dosa detection
//!
//! Every function is deterministic and free of I/O. Ephemeris access and
//! input validation belong to the caller.

pub mod amsha;
pub mod chart;
pub mod dasha;
pub mod dosha;
pub mod drishti;
pub mod graha;
pub mod graha_relationships;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod shadbala;
pub mod util;
pub mod yoga;

pub use amsha::{
    Amsha, NavamsaPosition, SAPTAVARGA, amsha_longitude, amsha_rashi_index, navamsa_longitude,
    navamsa_positions, saptavarga_rashis,
};
pub use chart::{
    BodyPosition, Chart, HouseEntry, LagnaInfo, build_chart, equal_house_cusps, find_house_number,
};
pub use dasha::{
    BhuktiPeriod, DasaPeriod, active_period, nakshatra_birth_balance, vimshottari_dasas,
};
pub use dosha::{DosaKind, DosaResult, detect_dosas};
pub use drishti::{DrishtiEntry, graha_drishti};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use graha_relationships::{BeneficNature, Dignity, GrahaGender, dignity_in_rashi_with_positions};
pub use nakshatra::{ALL_NAKSHATRAS_27, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use panchang::{Karana, Paksha, PanchangamResult, Tithi, Vaar, Yoga, panchangam};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiElement, RashiInfo, deg_to_dms, dms_to_deg, house_from,
    rashi_from_longitude,
};
pub use shadbala::{
    KalaBalaBreakdown, KalaBalaInputs, ShadbalaEntry, ShadbalaInputs, SthanaBalaBreakdown,
    StrengthGrade, shadbala_all, shadbala_from_inputs,
};
pub use util::{angular_separation, normalize_360};
pub use yoga::{ChartView, YogaKind, YogaResult, detect_yogas};
