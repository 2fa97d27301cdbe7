//! The assembled horoscope.

use serde::{Deserialize, Serialize};

use jataka_base::{
    BodyPosition, DasaPeriod, DosaResult, HouseEntry, LagnaInfo, NavamsaPosition,
    PanchangamResult, ShadbalaEntry, YogaResult,
};

use crate::birth::BirthInput;

/// Complete horoscope for one birth.
///
/// Chart, panchangam and positions are always present; the remaining
/// sections are `None` when switched off in `KundaliConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoroscopeAggregate {
    pub birth: BirthInput,
    pub lagna: LagnaInfo,
    pub panchangam: PanchangamResult,
    /// Exactly 12, house 1 first.
    pub houses: Vec<HouseEntry>,
    /// All nine bodies in graha order, houses assigned.
    pub positions: Vec<BodyPosition>,
    pub navamsa: Option<Vec<NavamsaPosition>>,
    pub dasa: Option<Vec<DasaPeriod>>,
    pub shadbala: Option<Vec<ShadbalaEntry>>,
    pub yogas: Option<Vec<YogaResult>>,
    pub dosas: Option<Vec<DosaResult>>,
}
