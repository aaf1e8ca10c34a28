//! Shared type definitions for the Underworld empire simulator.
//!
//! This crate is the single source of truth for the data model used by the
//! reducers and by the browser presentation layer. Types flow to
//! `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Runtime UUID identifiers and static catalog keys
//! - [`enums`] -- Ranks, presence, rarities, buffs, rejection reasons
//! - [`structs`] -- Resources, catalog records, crew, world map nodes
//! - [`actions`] -- The tagged action vocabulary shared by both variants

pub mod actions;
pub mod enums;
pub mod ids;
pub mod structs;

pub use actions::Action;
pub use enums::{BuffType, EntryKind, InfoPanel, Presence, Rank, Rarity, RejectionReason, TroopType};
pub use ids::{
    BusinessId, CityId, CountryId, CrimeId, ItemId, MemberId, NeighborhoodId, StateId,
    TerritoryId, TroopId, VillainId,
};
pub use structs::{
    ActiveRaid, BlackMarketItem, Buff, Business, Crime, CrimeRequirements, CrimeRewards,
    DominantOrg, EntryCost, LocationPath, Member, Neighborhood, PromoteCost, RaidOutcome,
    RankSpec, RecruitCandidate, Region, ResourceDelta, Resources, Territory, Troop, Villain,
};
