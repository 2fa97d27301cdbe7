//! Lookup of the running mahadasha and bhukti at a moment.

use chrono::NaiveDateTime;

use super::types::{BhuktiPeriod, DasaPeriod};

/// Mahadasha and bhukti running at `at`, if the timeline covers it.
pub fn active_period(
    dasas: &[DasaPeriod],
    at: NaiveDateTime,
) -> Option<(&DasaPeriod, &BhuktiPeriod)> {
    let dasa = dasas.iter().find(|d| d.contains(at))?;
    let bhukti = dasa.bhuktis.iter().find(|b| b.contains(at))?;
    Some((dasa, bhukti))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::add_years;
    use crate::dasha::vimshottari::vimshottari_dasas;
    use crate::graha::Graha;
    use chrono::NaiveDate;

    #[test]
    fn finds_running_periods() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let dasas = vimshottari_dasas(birth, 126.0, 120.0);

        let (d, b) = active_period(&dasas, birth).unwrap();
        assert_eq!(d.lord, Graha::Ketu);
        assert_eq!(b.lord, Graha::Ketu);

        // 10 years in: inside Shukra mahadasha (starts at 3.85y)
        let (d, _) = active_period(&dasas, add_years(birth, 10.0).unwrap()).unwrap();
        assert_eq!(d.lord, Graha::Shukra);
    }

    #[test]
    fn outside_timeline_is_none() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let dasas = vimshottari_dasas(birth, 126.0, 10.0);
        assert!(active_period(&dasas, add_years(birth, -1.0).unwrap()).is_none());
        assert!(active_period(&dasas, add_years(birth, 500.0).unwrap()).is_none());
    }
}
