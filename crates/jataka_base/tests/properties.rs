//! Property tests for the position normalizer, navamsa, shadbala and dasha.

use chrono::NaiveDate;
use jataka_base::{
    ALL_GRAHAS, BodyPosition, ShadbalaInputs, build_chart, equal_house_cusps,
    nakshatra_from_longitude, navamsa_longitude, normalize_360, rashi_from_longitude,
    shadbala_all, vimshottari_dasas,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_in_range(lon in -1.0e6f64..1.0e6) {
        let n = normalize_360(lon);
        prop_assert!((0.0..360.0).contains(&n), "{lon} -> {n}");
    }

    #[test]
    fn sign_and_nakshatra_in_range(lon in -720.0f64..720.0) {
        let r = rashi_from_longitude(lon);
        prop_assert!((1..=12).contains(&(r.rashi_index + 1)));
        let nak = nakshatra_from_longitude(lon);
        prop_assert!((1..=27).contains(&nak.number()));
        prop_assert!((1..=4).contains(&nak.pada));
    }

    #[test]
    fn navamsa_in_range(lon in 0.0f64..360.0) {
        let d9 = navamsa_longitude(lon);
        prop_assert!((0.0..360.0).contains(&d9));
    }

    #[test]
    fn dasa_span_covers_horizon(moon in 0.0f64..360.0, horizon in 1.0f64..150.0) {
        let birth = NaiveDate::from_ymd_opt(2001, 9, 9).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let dasas = vimshottari_dasas(birth, moon, horizon);
        let total: f64 = dasas.iter().map(|d| d.years).sum();
        prop_assert!(total >= horizon - 1e-9);
        for d in &dasas {
            prop_assert_eq!(d.bhuktis.len(), 9);
        }
    }

    #[test]
    fn shadbala_total_is_sum_of_components(
        lons in proptest::collection::vec(0.0f64..360.0, 9),
        speeds in proptest::collection::vec(-1.0f64..2.0, 7),
        asc in 0.0f64..360.0,
        hour in 0u32..24,
    ) {
        let positions: Vec<BodyPosition> = ALL_GRAHAS
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let speed = if i < 7 { speeds[i] } else { -0.05 };
                BodyPosition::new(*g, lons[i], 0.0, speed)
            })
            .collect();
        let chart = build_chart(&equal_house_cusps(asc), asc, &positions);
        let birth = NaiveDate::from_ymd_opt(1999, 3, 21).unwrap().and_hms_opt(hour, 30, 0).unwrap();
        let inputs = ShadbalaInputs::from_chart(&chart, birth, 24.0).unwrap();

        for e in shadbala_all(&inputs) {
            let sum = e.sthana.total + e.dig + e.kala.total + e.cheshta + e.naisargika + e.drik;
            prop_assert!((e.total - sum).abs() < 1e-9);
            prop_assert!((e.total_rupas - e.total / 60.0).abs() < 1e-12);
            prop_assert!((0.0..=100.0).contains(&e.percentage));
            prop_assert!((-60.0..=60.0).contains(&e.drik));
            prop_assert!((-60.0..=60.0).contains(&e.kala.yuddha));
        }
    }
}

/// A longitude on a navamsa part boundary lands on a sign boundary.
#[test]
fn navamsa_part_boundary_hits_sign_boundary() {
    let part = 30.0 / 9.0;
    for k in 0..108 {
        let lon = k as f64 * part;
        let d9 = navamsa_longitude(lon);
        let off = d9 % 30.0;
        assert!(off < 1e-6 || 30.0 - off < 1e-6, "part {k}: {d9}");
    }
}
