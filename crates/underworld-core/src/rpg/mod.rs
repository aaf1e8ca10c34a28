//! Geopolitical RPG variant.
//!
//! The player runs a crew that commits crimes, shops on the black market,
//! recruits, promotes, and takes over neighborhoods one presence level at a
//! time. Dominated neighborhoods pay income on every tick and day.
//!
//! # Modules
//!
//! - [`state`] -- [`RpgState`] and its factory
//! - [`reducer`] -- The action reducer
//! - [`takeover`] -- Presence state machine and combat report

pub mod reducer;
pub mod state;
pub mod takeover;

pub use reducer::reduce;
pub use state::RpgState;
pub use takeover::{TakeoverOutcome, next_presence};
