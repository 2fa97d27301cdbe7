//! Panchangam classification from Sun/Moon sidereal longitudes.
//!
//! Tithi, karana and yoga are segments of Moon-Sun elongation or of the
//! Sun+Moon sum; vaar is the civil weekday and the solar month is the
//! Sun's sign. Every element is computed at a single instant, with clamps
//! instead of errors at segment edges.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_index_of};
use crate::util::normalize_360;

/// Span of one tithi in degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Span of one karana (half-tithi) in degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Span of one luni-solar yoga in degrees of the Sun+Moon sum.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing half, tithis 1-15.
    Shukla,
    /// Waning half, tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Day names within a paksha, 1-based position minus one.
const TITHI_DAY_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

impl Tithi {
    /// 0-based index (0..29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based tithi number (1..30).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// Position within the paksha, 1..15.
    pub const fn in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    /// Day name without the paksha prefix ("Ekadashi", "Purnima", ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            _ => TITHI_DAY_NAMES[(self.index() % 15) as usize],
        }
    }
}

/// The 27 luni-solar yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbha => "Vishkumbha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }
}

/// The 11 karana names: seven movable (chara) then four fixed (sthira).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

impl Karana {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (1..11).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// One of the four fixed karanas.
    pub const fn is_fixed(self) -> bool {
        self.index() >= 7
    }
}

/// Weekday, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// 0 = Sunday .. 6 = Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Vaar {
        ALL_VAARS[weekday.num_days_from_sunday() as usize]
    }

    pub fn of_date(date: NaiveDate) -> Vaar {
        Self::from_weekday(date.weekday())
    }
}

/// Tithi from Moon-Sun elongation: `floor(elong/12)`, clamped to 29.
pub fn tithi_from_elongation(elongation_deg: f64) -> Tithi {
    let idx = ((normalize_360(elongation_deg) / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    ALL_TITHIS[idx as usize]
}

/// Karana sequence number (1..60) from Moon-Sun elongation.
///
/// Values past 60 fold back with 0 mapped to 60.
pub fn karana_sequence(elongation_deg: f64) -> u8 {
    let n = (normalize_360(elongation_deg) / KARANA_SEGMENT_DEG).floor() as u16 + 1;
    if n > 60 {
        match (n % 60) as u8 {
            0 => 60,
            m => m,
        }
    } else {
        n as u8
    }
}

/// Karana from Moon-Sun elongation.
///
/// The 60 half-tithis cycle through the seven movable karanas only:
/// `((n - 1) mod 7) + 1`. The four fixed karanas are never produced.
pub fn karana_from_elongation(elongation_deg: f64) -> Karana {
    let n = karana_sequence(elongation_deg);
    ALL_KARANAS[((n - 1) % 7) as usize]
}

/// Yoga from the sidereal Sun+Moon sum: `floor(sum/(360/27))`, clamped to 26.
pub fn yoga_from_sum(sidereal_sum_deg: f64) -> Yoga {
    let idx = ((normalize_360(sidereal_sum_deg) / YOGA_SEGMENT_DEG).floor() as u8).min(26);
    ALL_YOGAS[idx as usize]
}

/// All panchangam elements for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanchangamResult {
    /// Tithi number 1..30.
    pub tithi: u8,
    pub tithi_name: Tithi,
    pub paksha: Paksha,
    /// Tithi within the paksha, 1..15.
    pub tithi_in_paksha: u8,
    /// Moon nakshatra number 1..27.
    pub nakshatra: u8,
    pub nakshatra_name: Nakshatra,
    /// Moon nakshatra pada 1..4.
    pub nakshatra_pada: u8,
    /// Yoga number 1..27.
    pub yoga: u8,
    pub yoga_name: Yoga,
    /// Karana number 1..11 (only 1..7 are produced).
    pub karana: u8,
    pub karana_name: Karana,
    /// Weekday 0..6, 0 = Sunday.
    pub vara: u8,
    pub vaar: Vaar,
    /// Solar month 1..12 (Sun's sidereal sign).
    pub solar_month: u8,
    pub solar_rashi: Rashi,
}

/// Derive the panchangam from sidereal Sun/Moon longitudes and the civil date.
pub fn panchangam(sun_lon: f64, moon_lon: f64, civil_date: NaiveDate) -> PanchangamResult {
    let elongation = normalize_360(moon_lon - sun_lon);
    let tithi = tithi_from_elongation(elongation);
    let nak = nakshatra_from_longitude(moon_lon);
    let yoga = yoga_from_sum(sun_lon + moon_lon);
    let karana = karana_from_elongation(elongation);
    let vaar = Vaar::of_date(civil_date);
    let solar_idx = rashi_index_of(sun_lon);

    PanchangamResult {
        tithi: tithi.number(),
        tithi_name: tithi,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.in_paksha(),
        nakshatra: nak.number(),
        nakshatra_name: nak.nakshatra,
        nakshatra_pada: nak.pada,
        yoga: yoga.number(),
        yoga_name: yoga,
        karana: karana.number(),
        karana_name: karana,
        vara: vaar.index(),
        vaar,
        solar_month: solar_idx + 1,
        solar_rashi: Rashi::from_index(solar_idx),
    }
}
