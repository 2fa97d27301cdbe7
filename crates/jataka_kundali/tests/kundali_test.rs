//! End-to-end horoscope assembly over a precomputed ephemeris.

use chrono::{NaiveDate, NaiveDateTime};
use jataka_base::Graha;
use jataka_kundali::{
    BirthInput, BodyEphemeris, EphemerisProvider, EphemerisSnapshot, HoroscopeAggregate,
    KundaliConfig, KundaliError, PrecomputedEphemeris, compute_horoscope,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn civil() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1985, 11, 2)
        .unwrap()
        .and_hms_opt(14, 15, 0)
        .unwrap()
}

fn birth() -> BirthInput {
    BirthInput::new(civil(), 19.07, 72.88, 5.5).unwrap()
}

fn body(longitude: f64, latitude: f64, speed: f64) -> BodyEphemeris {
    BodyEphemeris {
        longitude,
        latitude,
        distance_au: 1.0,
        speed_longitude: speed,
        ..Default::default()
    }
}

fn snapshot() -> EphemerisSnapshot {
    let asc = 312.4;
    let mut house_cusps = [0.0; 13];
    house_cusps[0] = asc;
    for (i, c) in house_cusps.iter_mut().enumerate().skip(1) {
        *c = (asc + 30.0 * (i - 1) as f64 + if i % 2 == 0 { 2.5 } else { 0.0 }) % 360.0;
    }
    EphemerisSnapshot {
        julian_day: 2_446_372.1,
        bodies: [
            body(196.3, 0.0, 0.99),
            body(126.0, -4.1, 12.8),
            body(164.7, 1.0, 0.63),
            body(216.9, 1.9, 1.45),
            body(283.5, -0.6, 0.12),
            body(184.2, 1.4, 1.24),
            body(208.8, 2.1, 0.11),
            body(25.6, 0.0, 0.0),
        ],
        house_cusps,
        ayanamsha_deg: 23.65,
    }
}

fn provider() -> PrecomputedEphemeris {
    PrecomputedEphemeris::new(snapshot())
}

#[test]
fn full_aggregate_has_every_section() {
    init_tracing();
    let h = compute_horoscope(&birth(), &provider(), &KundaliConfig::default()).unwrap();

    assert_eq!(h.houses.len(), 12);
    assert_eq!(h.positions.len(), 9);
    assert!(h.positions.iter().all(|p| p.house.is_some()));
    let occupants: usize = h.houses.iter().map(|house| house.occupants.len()).sum();
    assert_eq!(occupants, 9);

    assert_eq!(h.navamsa.as_ref().unwrap().len(), 9);
    assert_eq!(h.shadbala.as_ref().unwrap().len(), 7);
    assert!(h.yogas.is_some());
    assert!(h.dosas.is_some());

    let dasa = h.dasa.as_ref().unwrap();
    assert_eq!(dasa[0].lord, Graha::Ketu);
    assert_eq!(dasa[0].start, civil());
}

#[test]
fn nodes_opposite_and_retrograde() {
    let h = compute_horoscope(&birth(), &provider(), &KundaliConfig::default()).unwrap();
    let rahu = h.positions.iter().find(|p| p.graha == Graha::Rahu).unwrap();
    let ketu = h.positions.iter().find(|p| p.graha == Graha::Ketu).unwrap();
    let sep = (rahu.longitude - ketu.longitude).abs();
    assert!((sep - 180.0).abs() < 0.01);
    assert!(rahu.is_retrograde());
    assert!(ketu.is_retrograde());
}

#[test]
fn minimal_config_omits_optional_sections() {
    let h = compute_horoscope(&birth(), &provider(), &KundaliConfig::minimal()).unwrap();
    assert!(h.navamsa.is_none());
    assert!(h.dasa.is_none());
    assert!(h.shadbala.is_none());
    assert!(h.yogas.is_none());
    assert!(h.dosas.is_none());
    assert_eq!(h.houses.len(), 12);
}

#[test]
fn equal_houses_override_provider_cusps() {
    let config = KundaliConfig {
        use_equal_houses: true,
        ..KundaliConfig::minimal()
    };
    let h = compute_horoscope(&birth(), &provider(), &config).unwrap();
    for (i, house) in h.houses.iter().enumerate() {
        let expected = (312.4 + 30.0 * i as f64) % 360.0;
        assert!((house.cusp - expected).abs() < 1e-9);
    }
}

#[test]
fn panchangam_from_sun_and_moon() {
    let h = compute_horoscope(&birth(), &provider(), &KundaliConfig::minimal()).unwrap();
    // Moon 126 - Sun 196.3 = 289.7 elongation: tithi 25, Krishna paksha
    assert_eq!(h.panchangam.tithi, 25);
    assert_eq!(h.panchangam.tithi_in_paksha, 10);
    assert_eq!(h.panchangam.nakshatra, 10);
    // 1985-11-02 was a Saturday
    assert_eq!(h.panchangam.vara, 6);
    assert_eq!(h.panchangam.solar_month, 7);
}

#[test]
fn aggregate_round_trips_through_json() {
    let h = compute_horoscope(&birth(), &provider(), &KundaliConfig::default()).unwrap();
    let json = serde_json::to_string(&h).unwrap();
    let back: HoroscopeAggregate = serde_json::from_str(&json).unwrap();
    assert_eq!(back.birth, h.birth);
    assert_eq!(back.houses, h.houses);
    assert_eq!(back.dasa, h.dasa);
    assert_eq!(back.yogas, h.yogas);
}

struct FailingProvider;

impl EphemerisProvider for FailingProvider {
    fn snapshot(&self, _birth: &BirthInput) -> jataka_kundali::Result<EphemerisSnapshot> {
        Err(KundaliError::Ephemeris("kernel not loaded".to_string()))
    }
}

#[test]
fn provider_errors_propagate() {
    let err = compute_horoscope(&birth(), &FailingProvider, &KundaliConfig::default()).unwrap_err();
    assert!(matches!(err, KundaliError::Ephemeris(_)));
}

#[test]
fn non_finite_snapshot_rejected() {
    let mut s = snapshot();
    s.bodies[1].longitude = f64::NAN;
    let err = compute_horoscope(
        &birth(),
        &PrecomputedEphemeris::new(s),
        &KundaliConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, KundaliError::InvalidSnapshot(_)));
}

#[test]
fn trait_object_provider() {
    let boxed: Box<dyn EphemerisProvider> = Box::new(provider());
    let h = compute_horoscope(&birth(), boxed.as_ref(), &KundaliConfig::minimal()).unwrap();
    assert_eq!(h.houses[0].number, 1);
}

#[test]
fn config_loaded_from_json_drives_sections() {
    let config = KundaliConfig::from_json_str(r#"{"include_yogas": false, "dasa_horizon_years": 30}"#)
        .unwrap();
    let h = compute_horoscope(&birth(), &provider(), &config).unwrap();
    assert!(h.yogas.is_none());
    let total: f64 = h.dasa.unwrap().iter().map(|d| d.years).sum();
    assert!(total >= 30.0);
}

#[test]
fn oversized_horizon_stops_at_date_range() {
    let config = KundaliConfig::from_json_str(r#"{"dasa_horizon_years": 1e6}"#).unwrap();
    let h = compute_horoscope(&birth(), &provider(), &config).unwrap();
    let dasa = h.dasa.unwrap();
    assert_eq!(dasa[0].start, civil());
    assert!(dasa.windows(2).all(|w| w[0].end == w[1].start));
    let total: f64 = dasa.iter().map(|d| d.years).sum();
    assert!(total > 200_000.0 && total < 1.0e6);
}
