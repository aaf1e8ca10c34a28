//! Geography for the Underworld empire simulator.
//!
//! # Modules
//!
//! - [`error`] -- Error types for world map construction and queries.
//! - [`territory`] -- Raid-variant businesses and territories, and the
//!   passive income they produce.
//! - [`world_map`] -- The RPG world map: a neighborhood arena with a
//!   Country → State → City index.
//! - [`starting_world`] -- Seeded starting map and territory income.

pub mod error;
pub mod starting_world;
pub mod territory;
pub mod world_map;

pub use error::WorldError;
pub use starting_world::{calculate_territory_income, create_starting_world, neighborhood_income};
pub use territory::{businesses, calculate_passive_income, passive_income_with, territories};
pub use world_map::{CityNode, CountryNode, StateNode, WorldMap};
