//! Crew and underworld rules for the Underworld empire simulator.
//!
//! Everything here is a pure function over catalog data and crew state,
//! except where a [`dice::RollSource`] is passed in explicitly.
//!
//! # Modules
//!
//! - [`dice`] -- Injectable randomness
//! - [`rank`] -- Rank table, promotion gating, roster power
//! - [`member`] -- Player, absorbed elites, experience
//! - [`troop`] -- Raid troop catalog
//! - [`villain`] -- Lieutenant generation
//! - [`inventory`] -- Item counts
//! - [`market`] -- Black-market catalog and purchases
//! - [`crime`] -- Crime catalog, eligibility, resolution
//! - [`recruit`] -- Recruitment pool and entry fees
//! - [`combat`] -- Raid and takeover odds

pub mod combat;
pub mod crime;
pub mod dice;
pub mod inventory;
pub mod market;
pub mod member;
pub mod rank;
pub mod recruit;
pub mod troop;
pub mod villain;

pub use dice::{RngRolls, RollSource, ScriptedRolls};
pub use inventory::Inventory;
