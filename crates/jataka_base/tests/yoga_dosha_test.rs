//! Integration tests for yoga and dosa detection over built charts.

use jataka_base::{
    BodyPosition, Chart, ChartView, DosaKind, Graha, YogaKind, build_chart, detect_dosas,
    detect_yogas, equal_house_cusps,
};

fn chart(asc: f64, placements: &[(Graha, f64)]) -> Chart {
    let positions: Vec<BodyPosition> = placements
        .iter()
        .map(|(g, lon)| {
            let speed = if matches!(g, Graha::Rahu | Graha::Ketu) { -0.053 } else { 1.0 };
            BodyPosition::new(*g, *lon, 0.0, speed)
        })
        .collect();
    build_chart(&equal_house_cusps(asc), asc, &positions)
}

fn chart_view(asc: f64, placements: &[(Graha, f64)]) -> ChartView {
    ChartView::from_chart(&chart(asc, placements))
}

#[test]
fn budha_aditya_regardless_of_house() {
    for asc in (0..12).map(|i| i as f64 * 30.0 + 7.0) {
        let view = chart_view(asc, &[(Graha::Surya, 123.0), (Graha::Buddh, 141.0)]);
        let yogas = detect_yogas(&view);
        let ba = yogas
            .iter()
            .find(|y| y.kind == YogaKind::BudhaAditya)
            .expect("Budha-Aditya for every lagna");
        assert_eq!(ba.strength, 6);
    }
}

#[test]
fn mangal_severity_by_house() {
    // Mesha lagna: Mars in Tula is house 7, Vrishabha house 2
    let seventh = detect_dosas(&chart_view(5.0, &[(Graha::Mangal, 200.0)]));
    let m = seventh.iter().find(|d| d.kind == DosaKind::Mangal).unwrap();
    assert_eq!(m.severity, 10);

    let second = detect_dosas(&chart_view(5.0, &[(Graha::Mangal, 50.0)]));
    let m = second.iter().find(|d| d.kind == DosaKind::Mangal).unwrap();
    assert_eq!(m.severity, 6);
}

/// Ascendant at 25° Mesha: equal cusps straddle the sign boundaries, so the
/// chart house differs from the whole-sign count.
#[test]
fn mangal_uses_chart_house() {
    // Mars at 50° (Vrishabha) sits in house 1 [25, 55)
    let c = chart(25.0, &[(Graha::Mangal, 50.0)]);
    assert_eq!(c.position(Graha::Mangal).unwrap().house, Some(1));
    assert!(c.houses[0].occupants.contains(&Graha::Mangal));
    let dosas = detect_dosas(&ChartView::from_chart(&c));
    let m = dosas.iter().find(|d| d.kind == DosaKind::Mangal).unwrap();
    assert_eq!(m.houses, vec![1]);
    assert_eq!(m.severity, 8);
    assert!(!m.cancelled);

    // Mars at 232° (Vrischika, own sign) sits in house 7 [205, 235): 10 - 4
    let c = chart(25.0, &[(Graha::Mangal, 232.0)]);
    assert_eq!(c.position(Graha::Mangal).unwrap().house, Some(7));
    let dosas = detect_dosas(&ChartView::from_chart(&c));
    let m = dosas.iter().find(|d| d.kind == DosaKind::Mangal).unwrap();
    assert_eq!(m.houses, vec![7]);
    assert!(m.cancelled);
    assert_eq!(m.severity, 6);
}

#[test]
fn mangal_cancellation_floor() {
    // Mesha lagna, Mars in Vrishabha (6) aspected by Jupiter from Vrischika: 6 - 4 = 2
    let dosas = detect_dosas(&chart_view(
        5.0,
        &[(Graha::Mangal, 50.0), (Graha::Guru, 230.0)],
    ));
    let m = dosas.iter().find(|d| d.kind == DosaKind::Mangal).unwrap();
    assert!(m.cancelled);
    assert_eq!(m.severity, 2);
    assert!(m.severity >= 1);
}

fn hemmed_layout() -> Vec<(Graha, f64)> {
    vec![
        (Graha::Rahu, 95.0),
        (Graha::Ketu, 275.0),
        (Graha::Surya, 130.0),
        (Graha::Chandra, 160.0),
        (Graha::Mangal, 190.0),
        (Graha::Buddh, 140.0),
        (Graha::Guru, 220.0),
        (Graha::Shukra, 250.0),
        (Graha::Shani, 200.0),
    ]
}

#[test]
fn kaal_sarp_detected_and_removed() {
    let dosas = detect_dosas(&chart_view(12.0, &hemmed_layout()));
    assert!(dosas.iter().any(|d| d.kind == DosaKind::KaalSarp));

    let mut broken = hemmed_layout();
    broken[7] = (Graha::Shukra, 10.0);
    let dosas = detect_dosas(&chart_view(12.0, &broken));
    assert!(!dosas.iter().any(|d| matches!(d.kind, DosaKind::KaalSarp | DosaKind::KaalAmrit)));
}

#[test]
fn results_serialize_to_json() {
    let view = chart_view(12.0, &hemmed_layout());
    let yogas = detect_yogas(&view);
    let dosas = detect_dosas(&view);
    let json = serde_json::to_string(&(yogas.clone(), dosas.clone())).unwrap();
    let back: (Vec<jataka_base::YogaResult>, Vec<jataka_base::DosaResult>) =
        serde_json::from_str(&json).unwrap();
    assert_eq!(back.0, yogas);
    assert_eq!(back.1, dosas);
}

#[test]
fn every_result_in_range() {
    let view = chart_view(12.0, &hemmed_layout());
    for y in detect_yogas(&view) {
        assert!((1..=10).contains(&y.strength), "{}", y.name);
        assert!(!y.grahas.is_empty());
    }
    for d in detect_dosas(&view) {
        assert!((1..=10).contains(&d.severity), "{}", d.name);
        assert!(!d.remedies.is_empty());
    }
}
