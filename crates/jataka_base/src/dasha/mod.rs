//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year Vimshottari cycle starts from the lord of the Moon's birth
//! nakshatra with the unexpired balance of that lord's period, then runs
//! through the fixed graha order at full length. Each mahadasha carries nine
//! proportional bhuktis (antardashas), starting with the mahadasha lord.

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use query::active_period;
pub use subperiod::{proportional_bhuktis, snap_last_bhukti_end};
pub use types::{BhuktiPeriod, DAYS_PER_YEAR, DasaPeriod, add_years};
pub use vimshottari::{
    DEFAULT_HORIZON_YEARS, MIN_BALANCE_YEARS, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS,
    vimshottari_dasas, vimshottari_index, vimshottari_years,
};
