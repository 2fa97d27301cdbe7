//! Yoga (auspicious combination) detection.
//!
//! Each rule is an independent predicate over a [`ChartView`]; every rule
//! that holds pushes one [`YogaResult`]. Houses from the lagna are the chart
//! houses; counts from the Moon or another body are in signs. Rules whose
//! bodies are missing are skipped.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::chart::{BodyPosition, Chart};
use crate::graha::{Graha, SAPTA_GRAHAS, house_lord, rashi_lord_by_index};
use crate::graha_relationships::{
    BeneficNature, is_debilitation_sign, is_own_or_exalted, natural_benefic_malefic,
};
use crate::rashi::house_from;

pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];
pub const TRIKONA_HOUSES: [u8; 3] = [1, 5, 9];
pub const DUSTHANA_HOUSES: [u8; 3] = [6, 8, 12];

pub fn is_kendra(house: u8) -> bool {
    KENDRA_HOUSES.contains(&house)
}

pub fn is_dusthana(house: u8) -> bool {
    DUSTHANA_HOUSES.contains(&house)
}

/// Sign and house placements of the nine bodies plus the lagna rashi.
///
/// Houses are the ones `build_chart` assigned; a position without one
/// falls back to its whole-sign house from the lagna.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartView {
    lagna_rashi: u8,
    signs: [Option<u8>; 9],
    houses: [Option<u8>; 9],
}

impl ChartView {
    /// `lagna_rashi_index` is 0-based; bodies not listed stay missing.
    pub fn new(lagna_rashi_index: u8, positions: &[BodyPosition]) -> Self {
        let lagna_rashi = lagna_rashi_index % 12;
        let mut signs = [None; 9];
        let mut houses = [None; 9];
        for p in positions {
            let sign = p.rashi_index();
            let idx = p.graha.index() as usize;
            signs[idx] = Some(sign);
            houses[idx] = Some(
                p.house
                    .filter(|h| (1..=12).contains(h))
                    .unwrap_or_else(|| house_from(sign, lagna_rashi)),
            );
        }
        Self {
            lagna_rashi,
            signs,
            houses,
        }
    }

    pub fn from_chart(chart: &Chart) -> Self {
        Self::new(chart.lagna.rashi_index(), &chart.positions)
    }

    pub fn lagna_rashi(&self) -> u8 {
        self.lagna_rashi
    }

    /// 0-based rashi index of a body.
    pub fn sign(&self, graha: Graha) -> Option<u8> {
        self.signs[graha.index() as usize]
    }

    /// House (1..12) of a body from the lagna.
    pub fn house(&self, graha: Graha) -> Option<u8> {
        self.houses[graha.index() as usize]
    }

    /// House of `graha` counted from the sign of `reference`.
    pub fn house_from_graha(&self, graha: Graha, reference: Graha) -> Option<u8> {
        Some(house_from(self.sign(graha)?, self.sign(reference)?))
    }

    /// Both bodies present and in the same sign.
    pub fn same_sign(&self, a: Graha, b: Graha) -> bool {
        matches!((self.sign(a), self.sign(b)), (Some(x), Some(y)) if x == y)
    }

    /// Lord of a house counted from the lagna.
    pub fn lord_of(&self, house: u8) -> Graha {
        house_lord(self.lagna_rashi, house)
    }

    /// Houses (from the lagna) whose sign is ruled by `graha`.
    pub fn houses_ruled_by(&self, graha: Graha) -> Vec<u8> {
        (1..=12).filter(|h| self.lord_of(*h) == graha).collect()
    }
}

/// Catalogued yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YogaKind {
    BudhaAditya,
    GajaKesari,
    ChandraMangala,
    Ruchaka,
    Bhadra,
    Hamsa,
    Malavya,
    Sasa,
    RajaYoga,
    Sunapha,
    Anapha,
    Durudhara,
    Adhi,
    Amala,
    Parivartana,
    NeechaBhangaRaja,
    ViparitaRaja,
    Dhana,
}

impl YogaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::BudhaAditya => "Budha-Aditya Yoga",
            Self::GajaKesari => "Gaja-Kesari Yoga",
            Self::ChandraMangala => "Chandra-Mangala Yoga",
            Self::Ruchaka => "Ruchaka Yoga",
            Self::Bhadra => "Bhadra Yoga",
            Self::Hamsa => "Hamsa Yoga",
            Self::Malavya => "Malavya Yoga",
            Self::Sasa => "Sasa Yoga",
            Self::RajaYoga => "Raja Yoga",
            Self::Sunapha => "Sunapha Yoga",
            Self::Anapha => "Anapha Yoga",
            Self::Durudhara => "Durudhara Yoga",
            Self::Adhi => "Adhi Yoga",
            Self::Amala => "Amala Yoga",
            Self::Parivartana => "Parivartana Yoga",
            Self::NeechaBhangaRaja => "Neecha Bhanga Raja Yoga",
            Self::ViparitaRaja => "Viparita Raja Yoga",
            Self::Dhana => "Dhana Yoga",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::BudhaAditya => "Sun-Mercury Intelligence Combination",
            Self::GajaKesari => "Elephant-Lion Combination",
            Self::ChandraMangala => "Moon-Mars Wealth Combination",
            Self::Ruchaka => "Mars Great Person Combination",
            Self::Bhadra => "Mercury Great Person Combination",
            Self::Hamsa => "Jupiter Great Person Combination",
            Self::Malavya => "Venus Great Person Combination",
            Self::Sasa => "Saturn Great Person Combination",
            Self::RajaYoga => "Royal Combination",
            Self::Sunapha => "Planets Second from Moon",
            Self::Anapha => "Planets Twelfth from Moon",
            Self::Durudhara => "Planets Flanking the Moon",
            Self::Adhi => "Benefics Sixth to Eighth from Moon",
            Self::Amala => "Spotless Tenth House",
            Self::Parivartana => "Sign Exchange",
            Self::NeechaBhangaRaja => "Cancelled Debilitation",
            Self::ViparitaRaja => "Reverse Royal Combination",
            Self::Dhana => "Wealth Combination",
        }
    }
}

/// A detected yoga.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YogaResult {
    pub kind: YogaKind,
    pub name: String,
    pub english_name: String,
    pub grahas: Vec<Graha>,
    /// Houses from the lagna involved in the combination.
    pub houses: Vec<u8>,
    /// 1..=10.
    pub strength: u8,
    pub rationale: String,
}

impl YogaResult {
    fn new(
        kind: YogaKind,
        grahas: Vec<Graha>,
        houses: Vec<u8>,
        strength: u8,
        rationale: String,
    ) -> Self {
        tracing::trace!(yoga = kind.name(), strength, "yoga detected");
        Self {
            kind,
            name: kind.name().to_string(),
            english_name: kind.english_name().to_string(),
            grahas,
            houses,
            strength: strength.clamp(1, 10),
            rationale,
        }
    }
}

type YogaRule = fn(&ChartView, &mut Vec<YogaResult>);

const YOGA_RULES: [YogaRule; 12] = [
    budha_aditya,
    gaja_kesari,
    chandra_mangala,
    pancha_mahapurusha,
    raja_yoga,
    moon_flanking,
    adhi,
    amala,
    parivartana,
    neecha_bhanga_raja,
    viparita_raja,
    dhana,
];

/// Run every yoga rule over the chart.
pub fn detect_yogas(view: &ChartView) -> Vec<YogaResult> {
    let mut out = Vec::new();
    for rule in YOGA_RULES {
        rule(view, &mut out);
    }
    out
}

fn houses_of(view: &ChartView, grahas: &[Graha]) -> Vec<u8> {
    let set: BTreeSet<u8> = grahas.iter().filter_map(|g| view.house(*g)).collect();
    set.into_iter().collect()
}

fn budha_aditya(view: &ChartView, out: &mut Vec<YogaResult>) {
    if view.same_sign(Graha::Surya, Graha::Buddh) {
        out.push(YogaResult::new(
            YogaKind::BudhaAditya,
            vec![Graha::Surya, Graha::Buddh],
            houses_of(view, &[Graha::Surya]),
            6,
            "Sun and Mercury occupy the same sign".to_string(),
        ));
    }
}

fn gaja_kesari(view: &ChartView, out: &mut Vec<YogaResult>) {
    let Some(h) = view.house_from_graha(Graha::Guru, Graha::Chandra) else {
        return;
    };
    if is_kendra(h) {
        out.push(YogaResult::new(
            YogaKind::GajaKesari,
            vec![Graha::Guru, Graha::Chandra],
            houses_of(view, &[Graha::Guru, Graha::Chandra]),
            8,
            format!("Jupiter in house {h} from the Moon"),
        ));
    }
}

fn chandra_mangala(view: &ChartView, out: &mut Vec<YogaResult>) {
    if view.same_sign(Graha::Chandra, Graha::Mangal) {
        out.push(YogaResult::new(
            YogaKind::ChandraMangala,
            vec![Graha::Chandra, Graha::Mangal],
            houses_of(view, &[Graha::Chandra]),
            5,
            "Moon and Mars occupy the same sign".to_string(),
        ));
    }
}

const MAHAPURUSHA: [(Graha, YogaKind); 5] = [
    (Graha::Mangal, YogaKind::Ruchaka),
    (Graha::Buddh, YogaKind::Bhadra),
    (Graha::Guru, YogaKind::Hamsa),
    (Graha::Shukra, YogaKind::Malavya),
    (Graha::Shani, YogaKind::Sasa),
];

fn pancha_mahapurusha(view: &ChartView, out: &mut Vec<YogaResult>) {
    for (graha, kind) in MAHAPURUSHA {
        let (Some(sign), Some(house)) = (view.sign(graha), view.house(graha)) else {
            continue;
        };
        if is_kendra(house) && is_own_or_exalted(graha, sign) {
            out.push(YogaResult::new(
                kind,
                vec![graha],
                vec![house],
                9,
                format!(
                    "{} in kendra house {house} in its own or exaltation sign",
                    graha.english_name()
                ),
            ));
        }
    }
}

const RAJA_KENDRAS: [u8; 3] = [4, 7, 10];
const RAJA_TRIKONAS: [u8; 2] = [5, 9];

fn raja_yoga(view: &ChartView, out: &mut Vec<YogaResult>) {
    // Yogakaraka: a single graha ruling both a kendra and a trikona
    for graha in SAPTA_GRAHAS {
        if view.sign(graha).is_none() {
            continue;
        }
        let ruled = view.houses_ruled_by(graha);
        let kendra = ruled.iter().find(|h| RAJA_KENDRAS.contains(h));
        let trikona = ruled.iter().find(|h| RAJA_TRIKONAS.contains(h));
        if let (Some(&k), Some(&t)) = (kendra, trikona) {
            out.push(YogaResult::new(
                YogaKind::RajaYoga,
                vec![graha],
                vec![k, t],
                8,
                format!(
                    "{} is yogakaraka, lord of houses {k} and {t}",
                    graha.english_name()
                ),
            ));
        }
    }

    // Association: distinct kendra and trikona lords in one sign
    let mut seen: BTreeSet<(Graha, Graha)> = BTreeSet::new();
    for k in RAJA_KENDRAS {
        for t in RAJA_TRIKONAS {
            let kl = view.lord_of(k);
            let tl = view.lord_of(t);
            if kl == tl || !view.same_sign(kl, tl) {
                continue;
            }
            let pair = if kl < tl { (kl, tl) } else { (tl, kl) };
            if !seen.insert(pair) {
                continue;
            }
            out.push(YogaResult::new(
                YogaKind::RajaYoga,
                vec![kl, tl],
                vec![k, t],
                7,
                format!(
                    "Lord of house {k} ({}) conjoins lord of house {t} ({})",
                    kl.english_name(),
                    tl.english_name()
                ),
            ));
        }
    }
}

const NON_LUMINARIES: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

fn moon_flanking(view: &ChartView, out: &mut Vec<YogaResult>) {
    if view.sign(Graha::Chandra).is_none() {
        return;
    }
    let in_house = |target: u8| -> Vec<Graha> {
        NON_LUMINARIES
            .iter()
            .copied()
            .filter(|g| view.house_from_graha(*g, Graha::Chandra) == Some(target))
            .collect()
    };
    let second = in_house(2);
    let twelfth = in_house(12);

    let (kind, strength, grahas, rationale) = match (second.is_empty(), twelfth.is_empty()) {
        (false, false) => (
            YogaKind::Durudhara,
            6,
            [second, twelfth].concat(),
            "Planets on both sides of the Moon",
        ),
        (false, true) => (YogaKind::Sunapha, 5, second, "Planets in the 2nd from the Moon"),
        (true, false) => (YogaKind::Anapha, 5, twelfth, "Planets in the 12th from the Moon"),
        (true, true) => return,
    };
    let houses = houses_of(view, &grahas);
    out.push(YogaResult::new(kind, grahas, houses, strength, rationale.to_string()));
}

const ADHI_BENEFICS: [Graha; 3] = [Graha::Buddh, Graha::Guru, Graha::Shukra];

fn adhi(view: &ChartView, out: &mut Vec<YogaResult>) {
    let grahas: Vec<Graha> = ADHI_BENEFICS
        .iter()
        .copied()
        .filter(|g| {
            matches!(
                view.house_from_graha(*g, Graha::Chandra),
                Some(6) | Some(7) | Some(8)
            )
        })
        .collect();
    if grahas.len() >= 2 {
        let houses = houses_of(view, &grahas);
        out.push(YogaResult::new(
            YogaKind::Adhi,
            grahas,
            houses,
            7,
            "Benefics in the 6th, 7th or 8th from the Moon".to_string(),
        ));
    }
}

fn amala(view: &ChartView, out: &mut Vec<YogaResult>) {
    let grahas: Vec<Graha> = SAPTA_GRAHAS
        .iter()
        .copied()
        .filter(|g| natural_benefic_malefic(*g) == BeneficNature::Benefic)
        .filter(|g| view.house(*g) == Some(10))
        .collect();
    if !grahas.is_empty() {
        out.push(YogaResult::new(
            YogaKind::Amala,
            grahas,
            vec![10],
            6,
            "Natural benefic in the 10th house".to_string(),
        ));
    }
}

fn parivartana(view: &ChartView, out: &mut Vec<YogaResult>) {
    for (i, a) in SAPTA_GRAHAS.iter().enumerate() {
        for b in &SAPTA_GRAHAS[i + 1..] {
            let (Some(sa), Some(sb)) = (view.sign(*a), view.sign(*b)) else {
                continue;
            };
            if rashi_lord_by_index(sa) == Some(*b) && rashi_lord_by_index(sb) == Some(*a) {
                out.push(YogaResult::new(
                    YogaKind::Parivartana,
                    vec![*a, *b],
                    houses_of(view, &[*a, *b]),
                    7,
                    format!(
                        "{} and {} occupy each other's signs",
                        a.english_name(),
                        b.english_name()
                    ),
                ));
            }
        }
    }
}

fn neecha_bhanga_raja(view: &ChartView, out: &mut Vec<YogaResult>) {
    for graha in SAPTA_GRAHAS {
        let Some(sign) = view.sign(graha) else {
            continue;
        };
        if !is_debilitation_sign(graha, sign) {
            continue;
        }
        let Some(lord) = rashi_lord_by_index(sign) else {
            continue;
        };
        let from_lagna = view.house(lord).is_some_and(is_kendra);
        let from_moon = view
            .house_from_graha(lord, Graha::Chandra)
            .is_some_and(is_kendra);
        if from_lagna || from_moon {
            let anchor = if from_lagna { "the lagna" } else { "the Moon" };
            out.push(YogaResult::new(
                YogaKind::NeechaBhangaRaja,
                vec![graha, lord],
                houses_of(view, &[graha, lord]),
                7,
                format!(
                    "Debilitated {} with sign lord {} in a kendra from {anchor}",
                    graha.english_name(),
                    lord.english_name()
                ),
            ));
        }
    }
}

fn viparita_raja(view: &ChartView, out: &mut Vec<YogaResult>) {
    let mut reported: Vec<Graha> = Vec::new();
    for ruled in DUSTHANA_HOUSES {
        let lord = view.lord_of(ruled);
        if reported.contains(&lord) {
            continue;
        }
        let Some(placed) = view.house(lord) else {
            continue;
        };
        if is_dusthana(placed) {
            reported.push(lord);
            out.push(YogaResult::new(
                YogaKind::ViparitaRaja,
                vec![lord],
                vec![ruled, placed],
                6,
                format!(
                    "Lord of house {ruled} ({}) placed in house {placed}",
                    lord.english_name()
                ),
            ));
        }
    }
}

fn dhana(view: &ChartView, out: &mut Vec<YogaResult>) {
    let second = view.lord_of(2);
    let eleventh = view.lord_of(11);
    if second != eleventh && view.same_sign(second, eleventh) {
        out.push(YogaResult::new(
            YogaKind::Dhana,
            vec![second, eleventh],
            vec![2, 11],
            6,
            format!(
                "Lords of the 2nd ({}) and 11th ({}) share a sign",
                second.english_name(),
                eleventh.english_name()
            ),
        ));
    }
}
