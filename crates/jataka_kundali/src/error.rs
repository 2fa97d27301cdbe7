//! Error types for horoscope assembly.

use thiserror::Error;

/// Rejected birth input field.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidBirthInput {
    #[error("latitude {0} outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} outside [-180, 180]")]
    Longitude(f64),
    #[error("UTC offset {0} h outside [-14, 14]")]
    UtcOffset(f64),
    #[error("civil date/time cannot be converted to UTC")]
    DateTime,
}

/// Errors from the horoscope boundary.
#[derive(Debug, Error)]
pub enum KundaliError {
    #[error("invalid birth input: {0}")]
    InvalidBirthInput(#[from] InvalidBirthInput),
    #[error("ephemeris error: {0}")]
    Ephemeris(String),
    #[error("invalid ephemeris snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KundaliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = KundaliError::from(InvalidBirthInput::Latitude(91.0));
        assert_eq!(e.to_string(), "invalid birth input: latitude 91 outside [-90, 90]");
        let e = KundaliError::Ephemeris("kernel missing".into());
        assert_eq!(e.to_string(), "ephemeris error: kernel missing");
    }

    #[test]
    fn json_errors_convert() {
        let err = serde_json::from_str::<u8>("nope").unwrap_err();
        let e: KundaliError = err.into();
        assert!(matches!(e, KundaliError::Config(_)));
    }
}
