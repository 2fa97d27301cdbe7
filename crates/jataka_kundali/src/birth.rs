//! Validated birth moment and place.

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{InvalidBirthInput, Result};

/// Birth date/time (civil, local) and geographic location.
///
/// Immutable once built; every constructor path validates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BirthInputFields", into = "BirthInputFields")]
pub struct BirthInput {
    civil: NaiveDateTime,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
    utc: NaiveDateTime,
}

/// Wire form of [`BirthInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthInputFields {
    pub civil: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_hours: f64,
}

impl BirthInput {
    /// Validate and build.
    ///
    /// Latitude in [-90, 90], longitude in [-180, 180] (degrees, east
    /// positive), UTC offset in [-14, 14] hours.
    pub fn new(
        civil: NaiveDateTime,
        latitude: f64,
        longitude: f64,
        utc_offset_hours: f64,
    ) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidBirthInput::Latitude(latitude).into());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidBirthInput::Longitude(longitude).into());
        }
        if !(-14.0..=14.0).contains(&utc_offset_hours) {
            return Err(InvalidBirthInput::UtcOffset(utc_offset_hours).into());
        }
        let offset_ms = (utc_offset_hours * 3_600_000.0).round() as i64;
        let utc = TimeDelta::try_milliseconds(offset_ms)
            .and_then(|d| civil.checked_sub_signed(d))
            .ok_or(InvalidBirthInput::DateTime)?;

        Ok(Self {
            civil,
            latitude,
            longitude,
            utc_offset_hours,
            utc,
        })
    }

    /// Local civil date/time as entered.
    pub fn civil(&self) -> NaiveDateTime {
        self.civil
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// Civil time shifted by the UTC offset.
    pub fn utc_datetime(&self) -> NaiveDateTime {
        self.utc
    }

    /// Julian Day (UTC scale) of the birth moment, Meeus calendar algorithm.
    pub fn julian_day_utc(&self) -> f64 {
        let t = self.utc;
        let y = t.year() as f64;
        let m = t.month() as f64;
        let d = t.day() as f64
            + t.hour() as f64 / 24.0
            + t.minute() as f64 / 1440.0
            + (t.second() as f64 + t.nanosecond() as f64 * 1e-9) / 86400.0;

        let (y2, m2) = if m <= 2.0 { (y - 1.0, m + 12.0) } else { (y, m) };
        let a = (y2 / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + d + b - 1524.5
    }
}

impl TryFrom<BirthInputFields> for BirthInput {
    type Error = crate::error::KundaliError;

    fn try_from(f: BirthInputFields) -> Result<Self> {
        Self::new(f.civil, f.latitude, f.longitude, f.utc_offset_hours)
    }
}

impl From<BirthInput> for BirthInputFields {
    fn from(b: BirthInput) -> Self {
        Self {
            civil: b.civil,
            latitude: b.latitude,
            longitude: b.longitude,
            utc_offset_hours: b.utc_offset_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KundaliError;
    use chrono::NaiveDate;

    fn civil() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1990, 7, 4)
            .unwrap()
            .and_hms_opt(3, 30, 0)
            .unwrap()
    }

    #[test]
    fn utc_shifts_by_offset() {
        let b = BirthInput::new(civil(), 28.6, 77.2, 5.5).unwrap();
        let expected = NaiveDate::from_ymd_opt(1990, 7, 3)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        assert_eq!(b.utc_datetime(), expected);
        assert_eq!(b.civil(), civil());
    }

    #[test]
    fn negative_offset() {
        let b = BirthInput::new(civil(), 40.7, -74.0, -4.0).unwrap();
        assert_eq!(b.utc_datetime().hour(), 7);
        assert_eq!(b.utc_datetime().minute(), 30);
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(matches!(
            BirthInput::new(civil(), 90.5, 0.0, 0.0),
            Err(KundaliError::InvalidBirthInput(InvalidBirthInput::Latitude(_)))
        ));
        assert!(matches!(
            BirthInput::new(civil(), 0.0, -180.1, 0.0),
            Err(KundaliError::InvalidBirthInput(InvalidBirthInput::Longitude(_)))
        ));
        assert!(matches!(
            BirthInput::new(civil(), 0.0, 0.0, 14.5),
            Err(KundaliError::InvalidBirthInput(InvalidBirthInput::UtcOffset(_)))
        ));
        assert!(BirthInput::new(civil(), f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(BirthInput::new(civil(), -90.0, 180.0, -14.0).is_ok());
        assert!(BirthInput::new(civil(), 90.0, -180.0, 14.0).is_ok());
    }

    #[test]
    fn julian_day_of_j2000() {
        let noon = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let b = BirthInput::new(noon, 0.0, 0.0, 0.0).unwrap();
        assert!((b.julian_day_utc() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn deserialization_validates() {
        let good = r#"{"civil":"1990-07-04T03:30:00","latitude":28.6,"longitude":77.2,"utc_offset_hours":5.5}"#;
        let b: BirthInput = serde_json::from_str(good).unwrap();
        assert_eq!(b.latitude(), 28.6);

        let bad = r#"{"civil":"1990-07-04T03:30:00","latitude":128.6,"longitude":77.2,"utc_offset_hours":5.5}"#;
        assert!(serde_json::from_str::<BirthInput>(bad).is_err());
    }
}
