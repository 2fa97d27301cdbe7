//! Vimshottari mahadasha sequence from birth.

use chrono::NaiveDateTime;

use super::balance::nakshatra_birth_balance;
use super::subperiod::proportional_bhuktis;
use super::types::{DasaPeriod, add_years};
use crate::graha::Graha;
use crate::nakshatra::ALL_NAKSHATRAS_27;

/// Graha order and full periods in years.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Default span of the generated timeline.
pub const DEFAULT_HORIZON_YEARS: f64 = 120.0;

/// A birth balance at or below this many years is skipped.
pub const MIN_BALANCE_YEARS: f64 = 0.001;

/// Position of a graha in the Vimshottari order.
pub fn vimshottari_index(graha: Graha) -> Option<usize> {
    VIMSHOTTARI_SEQUENCE.iter().position(|(g, _)| *g == graha)
}

/// Full Vimshottari period of a graha in years.
pub fn vimshottari_years(graha: Graha) -> f64 {
    vimshottari_index(graha).map_or(0.0, |i| VIMSHOTTARI_SEQUENCE[i].1)
}

/// Generate mahadashas from birth until the cumulative span reaches `horizon_years`.
///
/// The first period is the unexpired balance of the birth nakshatra lord and
/// is dropped when that balance is negligible. Later periods run at full
/// length; the last one is never truncated, so the total may exceed the horizon.
/// Generation stops early at the last period that ends within chrono's date
/// range.
pub fn vimshottari_dasas(
    birth: NaiveDateTime,
    moon_sidereal_lon: f64,
    horizon_years: f64,
) -> Vec<DasaPeriod> {
    let (nak_idx, _, _) = nakshatra_birth_balance(moon_sidereal_lon, 0.0);
    let start_lord = ALL_NAKSHATRAS_27[nak_idx as usize].vimshottari_lord();
    let start_idx = vimshottari_index(start_lord).unwrap_or(0);
    let (_, balance_years, elapsed) =
        nakshatra_birth_balance(moon_sidereal_lon, VIMSHOTTARI_SEQUENCE[start_idx].1);

    tracing::trace!(
        lord = start_lord.name(),
        elapsed,
        balance_years,
        "vimshottari birth balance"
    );

    let mut dasas = Vec::new();
    let mut cursor = birth;
    let mut cumulative = 0.0;
    let mut step = 0usize;

    while cumulative < horizon_years {
        let (lord, full_years) = VIMSHOTTARI_SEQUENCE[(start_idx + step) % 9];
        let years = if step == 0 { balance_years } else { full_years };
        step += 1;

        if step == 1 && years <= MIN_BALANCE_YEARS {
            continue;
        }

        let Some(end) = add_years(cursor, years) else {
            tracing::warn!(
                lord = lord.name(),
                cumulative,
                horizon_years,
                "dasa end outside the representable date range, stopping"
            );
            break;
        };
        dasas.push(DasaPeriod {
            lord,
            start: cursor,
            end,
            years,
            full_years,
            bhuktis: proportional_bhuktis(lord, cursor, end, years),
        });
        cursor = end;
        cumulative += years;
    }

    dasas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN_27;
    use chrono::NaiveDate;

    fn birth() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1985, 11, 2)
            .unwrap()
            .and_hms_opt(14, 15, 0)
            .unwrap()
    }

    #[test]
    fn sequence_totals_120() {
        let sum: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, y)| y).sum();
        assert!((sum - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn magha_starts_with_ketu() {
        let dasas = vimshottari_dasas(birth(), 126.0, 120.0);
        assert_eq!(dasas[0].lord, Graha::Ketu);
        assert!((dasas[0].years - 3.85).abs() < 1e-9);
        assert!(dasas[0].is_partial());
        assert_eq!(dasas[1].lord, Graha::Shukra);
        assert_eq!(dasas[1].years, 20.0);
    }

    #[test]
    fn covers_horizon_without_truncation() {
        let dasas = vimshottari_dasas(birth(), 126.0, 120.0);
        let total: f64 = dasas.iter().map(|d| d.years).sum();
        assert!(total >= 120.0);
        // 3.85 + 113 falls short of 120, so Ketu runs again
        assert_eq!(dasas.len(), 10);
        assert_eq!(dasas[9].lord, Graha::Ketu);
        assert_eq!(dasas[9].years, 7.0);
    }

    #[test]
    fn negligible_balance_skipped() {
        let lon = NAKSHATRA_SPAN_27 * 10.0 - 1e-7;
        let dasas = vimshottari_dasas(birth(), lon, 120.0);
        // Magha's balance is ~0, so the timeline opens with Shukra at birth
        assert_eq!(dasas[0].lord, Graha::Shukra);
        assert_eq!(dasas[0].start, birth());
    }

    #[test]
    fn mahadashas_contiguous() {
        let dasas = vimshottari_dasas(birth(), 200.0, 150.0);
        assert_eq!(dasas[0].start, birth());
        for w in dasas.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
        for d in &dasas {
            assert_eq!(d.bhuktis.len(), 9);
            assert_eq!(d.bhuktis[0].lord, d.lord);
            assert_eq!(d.bhuktis[0].start, d.start);
            assert_eq!(d.bhuktis[8].end, d.end);
        }
    }

    #[test]
    fn huge_horizon_stops_at_date_range() {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let dasas = vimshottari_dasas(start, 10.0, 1.0e6);
        assert!(!dasas.is_empty());
        let total: f64 = dasas.iter().map(|d| d.years).sum();
        assert!(total < 1.0e6);
        for w in dasas.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
        let last = dasas.last().unwrap();
        assert_eq!(last.bhuktis[8].end, last.end);
    }

    #[test]
    fn zero_horizon_yields_nothing() {
        assert!(vimshottari_dasas(birth(), 10.0, 0.0).is_empty());
    }
}
