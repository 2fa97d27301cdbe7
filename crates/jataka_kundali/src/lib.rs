//! Horoscope assembly over an external ephemeris.
//!
//! Validates the birth input, obtains one ephemeris snapshot through an
//! [`EphemerisProvider`], and runs the `jataka_base` derivations into a
//! [`HoroscopeAggregate`] whose optional sections follow [`KundaliConfig`].

pub mod birth;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod kundali;
pub mod types;

pub use birth::{BirthInput, BirthInputFields};
pub use config::KundaliConfig;
pub use ephemeris::{
    BodyEphemeris, EphemerisProvider, EphemerisSnapshot, MEAN_NODE_SPEED_DEG_PER_DAY,
    PrecomputedEphemeris, derive_nodes,
};
pub use error::{InvalidBirthInput, KundaliError, Result};
pub use kundali::compute_horoscope;
pub use types::HoroscopeAggregate;
