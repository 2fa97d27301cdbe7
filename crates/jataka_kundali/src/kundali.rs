//! One-shot horoscope assembly.

use jataka_base::{
    ChartView, Graha, ShadbalaInputs, build_chart, detect_dosas, detect_yogas, equal_house_cusps,
    navamsa_positions, panchangam, shadbala_all, vimshottari_dasas,
};

use crate::birth::BirthInput;
use crate::config::KundaliConfig;
use crate::ephemeris::EphemerisProvider;
use crate::error::{KundaliError, Result};
use crate::types::HoroscopeAggregate;

/// Compute a full horoscope, sharing the chart across every section.
///
/// The dasa timeline and the time-dependent shadbala parts run on the
/// local civil birth time.
#[tracing::instrument(skip_all, fields(civil = %birth.civil()))]
pub fn compute_horoscope<P>(
    birth: &BirthInput,
    provider: &P,
    config: &KundaliConfig,
) -> Result<HoroscopeAggregate>
where
    P: EphemerisProvider + ?Sized,
{
    let snapshot = provider.snapshot(birth)?;
    snapshot.validate()?;

    let positions = snapshot.body_positions();
    let ascendant = snapshot.ascendant();
    let cusps = if config.use_equal_houses {
        equal_house_cusps(ascendant)
    } else {
        snapshot.cusps()
    };
    let chart = build_chart(&cusps, ascendant, &positions);

    let longitude_of = |graha: Graha| {
        chart
            .position(graha)
            .map(|p| p.longitude)
            .ok_or_else(|| KundaliError::InvalidSnapshot(format!("missing {}", graha.english_name())))
    };
    let sun = longitude_of(Graha::Surya)?;
    let moon = longitude_of(Graha::Chandra)?;

    let panchangam = panchangam(sun, moon, birth.civil().date());
    tracing::debug!(
        lagna = chart.lagna.sign,
        tithi = panchangam.tithi,
        nakshatra = panchangam.nakshatra,
        "chart built"
    );

    let navamsa = if config.include_navamsa {
        Some(navamsa_positions(&chart.positions))
    } else {
        None
    };

    let dasa = if config.include_dasa {
        Some(vimshottari_dasas(
            birth.civil(),
            moon,
            config.effective_horizon_years(),
        ))
    } else {
        None
    };

    let shadbala = if config.include_shadbala {
        ShadbalaInputs::from_chart(&chart, birth.civil(), snapshot.ayanamsha_deg)
            .map(|inputs| shadbala_all(&inputs))
    } else {
        None
    };

    let view = ChartView::from_chart(&chart);
    let yogas = if config.include_yogas {
        Some(detect_yogas(&view))
    } else {
        None
    };
    let dosas = if config.include_dosas {
        Some(detect_dosas(&view))
    } else {
        None
    };

    tracing::debug!(
        dasas = dasa.as_ref().map_or(0, Vec::len),
        yogas = yogas.as_ref().map_or(0, Vec::len),
        dosas = dosas.as_ref().map_or(0, Vec::len),
        "horoscope assembled"
    );

    Ok(HoroscopeAggregate {
        birth: *birth,
        lagna: chart.lagna,
        panchangam,
        houses: chart.houses,
        positions: chart.positions,
        navamsa,
        dasa,
        shadbala,
        yogas,
        dosas,
    })
}
