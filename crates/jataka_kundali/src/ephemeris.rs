//! Ephemeris boundary: the snapshot contract and its providers.
//!
//! Raw ephemeris computation and sidereal correction live outside this
//! workspace. A provider hands over one [`EphemerisSnapshot`] per birth
//! moment: sidereal positions for Sun..Saturn plus mean Rahu, and the house
//! cusps. Ketu is always derived here.

use serde::{Deserialize, Serialize};

use jataka_base::{ALL_GRAHAS, BodyPosition, Graha, normalize_360};

use crate::birth::BirthInput;
use crate::error::{KundaliError, Result};

/// Mean lunar node regression, deg/day (about -19.34 deg/yr).
pub const MEAN_NODE_SPEED_DEG_PER_DAY: f64 = -0.052_953_9;

/// Number of bodies a provider supplies: seven sapta grahas and Rahu.
pub const SNAPSHOT_BODIES: usize = 8;

/// One body's sidereal state as delivered by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyEphemeris {
    /// Sidereal ecliptic longitude, degrees.
    pub longitude: f64,
    /// Ecliptic latitude, degrees.
    pub latitude: f64,
    pub distance_au: f64,
    /// deg/day; negative = retrograde.
    pub speed_longitude: f64,
    pub speed_latitude: f64,
    pub speed_distance: f64,
}

/// Everything the core needs from an ephemeris for one moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSnapshot {
    pub julian_day: f64,
    /// Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, mean Rahu.
    pub bodies: [BodyEphemeris; SNAPSHOT_BODIES],
    /// Index 0 = ascendant, 1..=12 = house cusps (sidereal).
    pub house_cusps: [f64; 13],
    /// Ayanamsha used for the sidereal correction; needed for tropical declinations.
    #[serde(default)]
    pub ayanamsha_deg: f64,
}

impl EphemerisSnapshot {
    /// Reject non-finite longitudes and cusps.
    pub fn validate(&self) -> Result<()> {
        for (i, b) in self.bodies.iter().enumerate() {
            if !b.longitude.is_finite() || !b.latitude.is_finite() || !b.speed_longitude.is_finite()
            {
                return Err(KundaliError::InvalidSnapshot(format!(
                    "non-finite state for {}",
                    ALL_GRAHAS[i].english_name()
                )));
            }
        }
        if let Some(i) = self.house_cusps.iter().position(|c| !c.is_finite()) {
            return Err(KundaliError::InvalidSnapshot(format!(
                "non-finite house cusp at index {i}"
            )));
        }
        if !self.ayanamsha_deg.is_finite() {
            return Err(KundaliError::InvalidSnapshot(
                "non-finite ayanamsha".to_string(),
            ));
        }
        Ok(())
    }

    pub fn ascendant(&self) -> f64 {
        normalize_360(self.house_cusps[0])
    }

    /// The twelve house cusps, house 1 first.
    pub fn cusps(&self) -> [f64; 12] {
        let mut out = [0.0; 12];
        out.copy_from_slice(&self.house_cusps[1..]);
        out
    }

    /// Classified positions for all nine bodies, Ketu derived from Rahu.
    pub fn body_positions(&self) -> Vec<BodyPosition> {
        let mut positions: Vec<BodyPosition> = self.bodies[..7]
            .iter()
            .zip(ALL_GRAHAS)
            .map(|(b, g)| position_from(g, b))
            .collect();
        let (rahu, ketu) = derive_nodes(&self.bodies[7]);
        positions.push(rahu);
        positions.push(ketu);
        positions
    }
}

fn position_from(graha: Graha, b: &BodyEphemeris) -> BodyPosition {
    if !(0.0..360.0).contains(&b.longitude) {
        tracing::warn!(
            graha = graha.name(),
            longitude = b.longitude,
            "provider longitude outside [0, 360), normalizing"
        );
    }
    BodyPosition::new(graha, b.longitude, b.latitude, b.speed_longitude)
}

/// Rahu as delivered and Ketu opposite it.
///
/// Ketu's latitude is negated. Both nodes are retrograde: the speed becomes
/// `-|speed|`, or the mean node rate when the provider sends zero.
pub fn derive_nodes(rahu: &BodyEphemeris) -> (BodyPosition, BodyPosition) {
    let speed = if rahu.speed_longitude == 0.0 {
        MEAN_NODE_SPEED_DEG_PER_DAY
    } else {
        -rahu.speed_longitude.abs()
    };
    let rahu_pos = BodyPosition {
        speed,
        ..position_from(Graha::Rahu, rahu)
    };
    let ketu_pos = BodyPosition::new(
        Graha::Ketu,
        normalize_360(rahu_pos.longitude + 180.0),
        -rahu.latitude,
        speed,
    );
    (rahu_pos, ketu_pos)
}

/// Source of ephemeris snapshots.
pub trait EphemerisProvider {
    fn snapshot(&self, birth: &BirthInput) -> Result<EphemerisSnapshot>;
}

/// Provider that replays one stored snapshot for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecomputedEphemeris {
    snapshot: EphemerisSnapshot,
}

impl PrecomputedEphemeris {
    pub fn new(snapshot: EphemerisSnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl EphemerisProvider for PrecomputedEphemeris {
    fn snapshot(&self, _birth: &BirthInput) -> Result<EphemerisSnapshot> {
        Ok(self.snapshot.clone())
    }
}
