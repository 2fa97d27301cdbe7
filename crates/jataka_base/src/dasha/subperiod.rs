//! Bhukti generation: proportional children of a mahadasha.

use chrono::NaiveDateTime;

use super::types::{BhuktiPeriod, add_years};
use super::vimshottari::{VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, vimshottari_index};
use crate::graha::Graha;

/// Snap the last bhukti's end to the mahadasha end to absorb rounding drift.
pub fn snap_last_bhukti_end(bhuktis: &mut [BhuktiPeriod], parent_end: NaiveDateTime) {
    if let Some(last) = bhuktis.last_mut() {
        last.end = parent_end;
    }
}

/// Nine bhuktis of a mahadasha, starting with its own lord.
///
/// Bhukti length = `dasa_years * bhukti_lord_years / 120`.
pub fn proportional_bhuktis(
    dasa_lord: Graha,
    start: NaiveDateTime,
    end: NaiveDateTime,
    dasa_years: f64,
) -> Vec<BhuktiPeriod> {
    let first = vimshottari_index(dasa_lord).unwrap_or(0);
    let mut bhuktis = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    let mut cursor = start;

    for i in 0..VIMSHOTTARI_SEQUENCE.len() {
        let (lord, lord_years) = VIMSHOTTARI_SEQUENCE[(first + i) % VIMSHOTTARI_SEQUENCE.len()];
        let years = dasa_years * lord_years / VIMSHOTTARI_TOTAL_YEARS;
        let bhukti_end = add_years(cursor, years).map_or(end, |e| e.min(end));
        bhuktis.push(BhuktiPeriod {
            lord,
            start: cursor,
            end: bhukti_end,
            years,
        });
        cursor = bhukti_end;
    }

    snap_last_bhukti_end(&mut bhuktis, end);
    bhuktis
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1990, 5, 17)
            .unwrap()
            .and_hms_opt(4, 30, 0)
            .unwrap()
    }

    #[test]
    fn venus_dasa_bhuktis() {
        let start = t0();
        let end = add_years(start, 20.0).unwrap();
        let b = proportional_bhuktis(Graha::Shukra, start, end, 20.0);
        assert_eq!(b.len(), 9);
        assert_eq!(b[0].lord, Graha::Shukra);
        assert_eq!(b[1].lord, Graha::Surya);
        assert_eq!(b[8].lord, Graha::Ketu);
        // Venus/Venus = 20*20/120 = 3.333 years
        assert!((b[0].years - 20.0 * 20.0 / 120.0).abs() < 1e-12);
        let sum: f64 = b.iter().map(|x| x.years).sum();
        assert!((sum - 20.0).abs() < 1e-9);
    }

    #[test]
    fn bhuktis_contiguous_and_snapped() {
        let start = t0();
        let end = add_years(start, 3.85).unwrap();
        let b = proportional_bhuktis(Graha::Ketu, start, end, 3.85);
        assert_eq!(b[0].start, start);
        for w in b.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
        assert_eq!(b[8].end, end);
    }
}
