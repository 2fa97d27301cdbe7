//! Horoscope assembly configuration.

use serde::{Deserialize, Serialize};

use jataka_base::dasha::DEFAULT_HORIZON_YEARS;

use crate::error::Result;

/// Which optional sections to compute, and how.
///
/// Missing JSON fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KundaliConfig {
    /// Include the D-9 navamsa positions.
    pub include_navamsa: bool,
    /// Include the Vimshottari dasa timeline.
    pub include_dasa: bool,
    /// Include shadbala for the sapta grahas.
    pub include_shadbala: bool,
    pub include_yogas: bool,
    pub include_dosas: bool,
    /// Span of the dasa timeline in years.
    pub dasa_horizon_years: f64,
    /// Ignore the provider's cusps and use equal houses from the ascendant.
    pub use_equal_houses: bool,
}

impl Default for KundaliConfig {
    fn default() -> Self {
        Self {
            include_navamsa: true,
            include_dasa: true,
            include_shadbala: true,
            include_yogas: true,
            include_dosas: true,
            dasa_horizon_years: DEFAULT_HORIZON_YEARS,
            use_equal_houses: false,
        }
    }
}

impl KundaliConfig {
    /// Only the always-present sections (chart, panchangam).
    pub fn minimal() -> Self {
        Self {
            include_navamsa: false,
            include_dasa: false,
            include_shadbala: false,
            include_yogas: false,
            include_dosas: false,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Dasa horizon with negative or non-finite values treated as zero.
    pub fn effective_horizon_years(&self) -> f64 {
        if self.dasa_horizon_years.is_finite() && self.dasa_horizon_years > 0.0 {
            self.dasa_horizon_years
        } else {
            tracing::warn!(
                horizon = self.dasa_horizon_years,
                "unusable dasa horizon, generating no periods"
            );
            0.0
        }
    }
}
