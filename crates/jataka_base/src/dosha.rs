//! Dosa (affliction) detection.
//!
//! Same shape as the yoga catalogue: independent predicates over a
//! [`ChartView`], each pushing a [`DosaResult`] with severity, remedies
//! and a cancellation flag.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::graha_relationships::{aspects_sign, is_own_or_exalted};
use crate::rashi::house_from;
use crate::yoga::{ChartView, is_kendra};

/// Catalogued dosas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DosaKind {
    Mangal,
    KaalSarp,
    KaalAmrit,
    Kemadruma,
    SuryaGrahan,
    ChandraGrahan,
    GuruChandal,
    Shrapit,
    Angarak,
}

impl DosaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mangal => "Mangal Dosha",
            Self::KaalSarp => "Kaal Sarp Dosha",
            Self::KaalAmrit => "Kaal Amrit Dosha",
            Self::Kemadruma => "Kemadruma Dosha",
            Self::SuryaGrahan => "Surya Grahan Dosha",
            Self::ChandraGrahan => "Chandra Grahan Dosha",
            Self::GuruChandal => "Guru Chandal Dosha",
            Self::Shrapit => "Shrapit Dosha",
            Self::Angarak => "Angarak Dosha",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Mangal => "Mars Affliction",
            Self::KaalSarp => "Serpent of Time",
            Self::KaalAmrit => "Reversed Serpent of Time",
            Self::Kemadruma => "Isolated Moon",
            Self::SuryaGrahan => "Eclipsed Sun",
            Self::ChandraGrahan => "Eclipsed Moon",
            Self::GuruChandal => "Jupiter-Node Affliction",
            Self::Shrapit => "Saturn-Rahu Curse",
            Self::Angarak => "Mars-Rahu Affliction",
        }
    }

    pub const fn remedies(self) -> &'static [&'static str] {
        match self {
            Self::Mangal => &[
                "Recite the Hanuman Chalisa on Tuesdays",
                "Perform Mangal Shanti puja",
                "Donate red lentils on Tuesdays",
            ],
            Self::KaalSarp | Self::KaalAmrit => &[
                "Perform Kaal Sarp puja at Trimbakeshwar",
                "Chant the Maha Mrityunjaya mantra",
            ],
            Self::Kemadruma => &[
                "Worship Shiva on Mondays",
                "Chant the Chandra mantra",
                "Wear a pearl after consultation",
            ],
            Self::SuryaGrahan => &["Offer water to the Sun at sunrise", "Recite the Aditya Hridayam"],
            Self::ChandraGrahan => &["Chant the Chandra mantra on Mondays", "Donate white rice and milk"],
            Self::GuruChandal => &["Worship Vishnu on Thursdays", "Donate yellow items to teachers"],
            Self::Shrapit => &["Perform Shrapit Dosha Nivaran puja", "Light a sesame oil lamp on Saturdays"],
            Self::Angarak => &["Chant the Mangal mantra", "Donate copper on Tuesdays"],
        }
    }
}

/// A detected dosa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DosaResult {
    pub kind: DosaKind,
    pub name: String,
    pub english_name: String,
    pub grahas: Vec<Graha>,
    pub houses: Vec<u8>,
    /// 1..=10, after any cancellation.
    pub severity: u8,
    pub rationale: String,
    pub remedies: Vec<String>,
    pub cancelled: bool,
}

impl DosaResult {
    fn new(
        kind: DosaKind,
        grahas: Vec<Graha>,
        houses: Vec<u8>,
        severity: u8,
        rationale: String,
        cancelled: bool,
    ) -> Self {
        let severity = severity.clamp(1, 10);
        tracing::trace!(dosa = kind.name(), severity, cancelled, "dosa detected");
        Self {
            kind,
            name: kind.name().to_string(),
            english_name: kind.english_name().to_string(),
            grahas,
            houses,
            severity,
            rationale,
            remedies: kind.remedies().iter().map(|r| r.to_string()).collect(),
            cancelled,
        }
    }
}

type DosaRule = fn(&ChartView, &mut Vec<DosaResult>);

const DOSA_RULES: [DosaRule; 7] = [
    mangal,
    kaal_sarp,
    kemadruma,
    grahan,
    guru_chandal,
    shrapit,
    angarak,
];

/// Run every dosa rule over the chart.
pub fn detect_dosas(view: &ChartView) -> Vec<DosaResult> {
    let mut out = Vec::new();
    for rule in DOSA_RULES {
        rule(view, &mut out);
    }
    out
}

/// Mangal dosha severity by Mars' house from the lagna.
pub const fn mangal_severity(house: u8) -> Option<u8> {
    match house {
        1 => Some(8),
        2 => Some(6),
        4 => Some(7),
        7 => Some(10),
        8 => Some(9),
        12 => Some(7),
        _ => None,
    }
}

fn reduce(severity: u8, by: u8) -> u8 {
    severity.saturating_sub(by).max(1)
}

fn mangal(view: &ChartView, out: &mut Vec<DosaResult>) {
    let (Some(sign), Some(house)) = (view.sign(Graha::Mangal), view.house(Graha::Mangal)) else {
        return;
    };
    let Some(base) = mangal_severity(house) else {
        return;
    };

    let dignified = is_own_or_exalted(Graha::Mangal, sign);
    let jupiter_aspect = view
        .sign(Graha::Guru)
        .is_some_and(|j| aspects_sign(Graha::Guru, j, sign));
    let cancelled = dignified || jupiter_aspect;

    let mut rationale = format!("Mars in house {house} from the lagna");
    if dignified {
        rationale.push_str("; Mars in own or exaltation sign");
    }
    if jupiter_aspect {
        rationale.push_str("; Jupiter aspects Mars");
    }
    let severity = if cancelled { reduce(base, 4) } else { base };
    out.push(DosaResult::new(
        DosaKind::Mangal,
        vec![Graha::Mangal],
        vec![house],
        severity,
        rationale,
        cancelled,
    ));
}

/// Whether house `x` lies strictly inside the forward arc `from -> to`.
fn strictly_between(x: u8, from: u8, to: u8) -> bool {
    let offset = house_from(x, from) - 1;
    let span = house_from(to, from) - 1;
    offset > 0 && offset < span
}

fn kaal_sarp(view: &ChartView, out: &mut Vec<DosaResult>) {
    let (Some(rahu), Some(ketu)) = (view.house(Graha::Rahu), view.house(Graha::Ketu)) else {
        return;
    };
    let mut houses = Vec::with_capacity(7);
    for g in SAPTA_GRAHAS {
        match view.house(g) {
            Some(h) => houses.push(h),
            None => return,
        }
    }

    let kind = if houses.iter().all(|h| strictly_between(*h, rahu, ketu)) {
        DosaKind::KaalSarp
    } else if houses.iter().all(|h| strictly_between(*h, ketu, rahu)) {
        DosaKind::KaalAmrit
    } else {
        return;
    };
    let (severity, arc) = match kind {
        DosaKind::KaalSarp => (8, "Rahu to Ketu"),
        _ => (7, "Ketu to Rahu"),
    };

    out.push(DosaResult::new(
        kind,
        vec![Graha::Rahu, Graha::Ketu],
        vec![rahu, ketu],
        severity,
        format!("All seven planets hemmed in the {arc} arc"),
        false,
    ));
}

const KEMADRUMA_SUPPORT: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

fn kemadruma(view: &ChartView, out: &mut Vec<DosaResult>) {
    let Some(moon_house) = view.house(Graha::Chandra) else {
        return;
    };
    let supported = KEMADRUMA_SUPPORT.iter().any(|g| {
        matches!(
            view.house_from_graha(*g, Graha::Chandra),
            Some(1) | Some(2) | Some(12)
        )
    });
    if supported {
        return;
    }

    let moon_in_kendra = is_kendra(moon_house);
    let jupiter_kendra = view
        .house_from_graha(Graha::Guru, Graha::Chandra)
        .is_some_and(is_kendra);
    let cancelled = moon_in_kendra || jupiter_kendra;
    let severity = if cancelled { reduce(6, 3) } else { 6 };

    let mut rationale = "No planet with or beside the Moon".to_string();
    if moon_in_kendra {
        rationale.push_str("; Moon in a kendra from the lagna");
    }
    if jupiter_kendra {
        rationale.push_str("; Jupiter in a kendra from the Moon");
    }
    out.push(DosaResult::new(
        DosaKind::Kemadruma,
        vec![Graha::Chandra],
        vec![moon_house],
        severity,
        rationale,
        cancelled,
    ));
}

fn node_with(view: &ChartView, graha: Graha) -> Option<Graha> {
    [Graha::Rahu, Graha::Ketu]
        .into_iter()
        .find(|node| view.same_sign(graha, *node))
}

fn grahan(view: &ChartView, out: &mut Vec<DosaResult>) {
    for (luminary, kind, severity) in [
        (Graha::Surya, DosaKind::SuryaGrahan, 6),
        (Graha::Chandra, DosaKind::ChandraGrahan, 7),
    ] {
        let Some(node) = node_with(view, luminary) else {
            continue;
        };
        out.push(DosaResult::new(
            kind,
            vec![luminary, node],
            view.house(luminary).into_iter().collect(),
            severity,
            format!("{} conjunct {}", luminary.english_name(), node.english_name()),
            false,
        ));
    }
}

fn guru_chandal(view: &ChartView, out: &mut Vec<DosaResult>) {
    let Some(node) = node_with(view, Graha::Guru) else {
        return;
    };
    let cancelled = view
        .sign(Graha::Guru)
        .is_some_and(|s| is_own_or_exalted(Graha::Guru, s));
    let severity = if cancelled { reduce(6, 3) } else { 6 };
    let mut rationale = format!("Jupiter conjunct {}", node.english_name());
    if cancelled {
        rationale.push_str("; Jupiter in own or exaltation sign");
    }
    out.push(DosaResult::new(
        DosaKind::GuruChandal,
        vec![Graha::Guru, node],
        view.house(Graha::Guru).into_iter().collect(),
        severity,
        rationale,
        cancelled,
    ));
}

fn shrapit(view: &ChartView, out: &mut Vec<DosaResult>) {
    if view.same_sign(Graha::Shani, Graha::Rahu) {
        out.push(DosaResult::new(
            DosaKind::Shrapit,
            vec![Graha::Shani, Graha::Rahu],
            view.house(Graha::Shani).into_iter().collect(),
            7,
            "Saturn conjunct Rahu".to_string(),
            false,
        ));
    }
}

fn angarak(view: &ChartView, out: &mut Vec<DosaResult>) {
    if view.same_sign(Graha::Mangal, Graha::Rahu) {
        out.push(DosaResult::new(
            DosaKind::Angarak,
            vec![Graha::Mangal, Graha::Rahu],
            view.house(Graha::Mangal).into_iter().collect(),
            6,
            "Mars conjunct Rahu".to_string(),
            false,
        ));
    }
}
