//! RPG game state and its factory.

use serde::{Serialize, Serializer};
use underworld_crew::Inventory;
use underworld_crew::member::create_player;
use underworld_crew::recruit::starting_recruit_pool;
use underworld_types::{InfoPanel, LocationPath, Member, MemberId, RecruitCandidate, Resources};
use underworld_world::{WorldError, WorldMap, create_starting_world};

use crate::log::ActivityLog;

const OPENING_LINE: &str = "A organização começa pequena no Brás. O resto do mapa espera.";

/// Complete RPG-variant game state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpgState {
    /// Player resources.
    pub resources: Resources,
    /// In-game day, starting at 1.
    pub day: u32,
    /// Crew roster. Index 0 is the player.
    pub members: Vec<Member>,
    /// Black-market items held.
    pub inventory: Inventory,
    /// Candidates still available to recruit.
    pub recruit_pool: Vec<RecruitCandidate>,
    /// Neighborhood arena and hierarchy.
    #[serde(serialize_with = "serialize_world_map")]
    pub world_map: WorldMap,
    /// Neighborhood targeted by takeovers.
    pub selected_location: Option<LocationPath>,
    /// Info panel currently expanded.
    pub info_panel: Option<InfoPanel>,
    /// Activity log, newest first.
    pub activity_log: ActivityLog,
}

impl RpgState {
    /// Build a fresh RPG game.
    ///
    /// # Errors
    ///
    /// Returns a [`WorldError`] if the starting world cannot be built.
    pub fn new(resources: Resources, log_cap: usize) -> Result<Self, WorldError> {
        let world_map = create_starting_world()?;
        let selected_location = world_map.first_path();
        Ok(Self {
            resources,
            day: 1,
            members: vec![create_player()],
            inventory: Inventory::new(),
            recruit_pool: starting_recruit_pool(),
            world_map,
            selected_location,
            info_panel: None,
            activity_log: ActivityLog::with_entries(log_cap, [OPENING_LINE]),
        })
    }

    /// The player character.
    pub fn player(&self) -> Option<&Member> {
        self.members.first()
    }

    /// Look up a roster member.
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }
}

fn serialize_world_map<S: Serializer>(map: &WorldMap, serializer: S) -> Result<S::Ok, S::Error> {
    map.to_tree().serialize(serializer)
}
