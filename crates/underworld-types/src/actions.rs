//! The action vocabulary the presentation layer dispatches.
//!
//! Both game variants share one tagged action type. Each reducer handles the
//! subset that applies to it and rejects the rest with
//! [`RejectionReason::NotApplicable`](crate::RejectionReason::NotApplicable).
//!
//! On the wire the tag is the `type` field, spelled the way the browser
//! front end dispatches it (`"TICK"`, `"ACTION_TAKEOVER"`, ...).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::InfoPanel;
use crate::ids::{CrimeId, ItemId, MemberId, TerritoryId, TroopId, VillainId};
use crate::structs::LocationPath;

/// A user- or timer-initiated action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(tag = "type")]
pub enum Action {
    /// Periodic timer tick: collect passive income.
    #[serde(rename = "TICK")]
    Tick,

    /// Send a troop, optionally led by a villain, against a territory.
    #[serde(rename = "RAID")]
    Raid {
        /// Troop to send.
        troop_id: TroopId,
        /// Lieutenant whose buff applies, if any.
        villain_id: Option<VillainId>,
        /// Territory to attack.
        territory_id: TerritoryId,
    },

    /// Change the raid selection shown in the raid planner.
    #[serde(rename = "SELECT_RAID")]
    SelectRaid {
        /// Troop to select.
        troop_id: TroopId,
        /// Lieutenant to select, if any.
        villain_id: Option<VillainId>,
        /// Territory to target.
        territory_id: TerritoryId,
    },

    /// End the current day.
    #[serde(rename = "ADVANCE_DAY")]
    AdvanceDay,

    /// Focus a neighborhood for takeover attempts.
    #[serde(rename = "SET_LOCATION")]
    SetLocation {
        /// Full path of the neighborhood.
        location: LocationPath,
    },

    /// Attempt a crime from the catalog.
    #[serde(rename = "ACTION_COMMIT_CRIME")]
    CommitCrime {
        /// Crime to commit.
        crime_id: CrimeId,
    },

    /// Buy one unit of a black-market item.
    #[serde(rename = "ACTION_BUY_ITEM")]
    BuyItem {
        /// Item to buy.
        item_id: ItemId,
    },

    /// Recruit a candidate from the pool.
    #[serde(rename = "ACTION_RECRUIT")]
    Recruit {
        /// Candidate to recruit.
        member_id: MemberId,
    },

    /// Promote a member to the next rank.
    #[serde(rename = "ACTION_PROMOTE")]
    Promote {
        /// Member to promote.
        member_id: MemberId,
    },

    /// Contest the selected neighborhood.
    #[serde(rename = "ACTION_TAKEOVER")]
    Takeover,

    /// Show an info panel, or hide it if it is already showing.
    #[serde(rename = "TOGGLE_INFO")]
    ToggleInfo {
        /// Panel to toggle.
        panel: InfoPanel,
    },
}

impl Action {
    /// Wire name of the action, used in log fields.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Tick => "TICK",
            Self::Raid { .. } => "RAID",
            Self::SelectRaid { .. } => "SELECT_RAID",
            Self::AdvanceDay => "ADVANCE_DAY",
            Self::SetLocation { .. } => "SET_LOCATION",
            Self::CommitCrime { .. } => "ACTION_COMMIT_CRIME",
            Self::BuyItem { .. } => "ACTION_BUY_ITEM",
            Self::Recruit { .. } => "ACTION_RECRUIT",
            Self::Promote { .. } => "ACTION_PROMOTE",
            Self::Takeover => "ACTION_TAKEOVER",
            Self::ToggleInfo { .. } => "TOGGLE_INFO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_actions_serialize_as_tag_only() {
        let json = serde_json::to_value(&Action::Tick).unwrap_or_default();
        assert_eq!(json, serde_json::json!({"type": "TICK"}));
    }

    #[test]
    fn payload_actions_parse_from_front_end_shape() {
        let json = serde_json::json!({"type": "ACTION_BUY_ITEM", "item_id": "arma-fogo"});
        let action: Option<Action> = serde_json::from_value(json).ok();
        assert_eq!(
            action,
            Some(Action::BuyItem {
                item_id: ItemId::from("arma-fogo"),
            })
        );
    }

    #[test]
    fn name_matches_wire_tag() {
        let action = Action::ToggleInfo {
            panel: InfoPanel::Crimes,
        };
        let json = serde_json::to_value(&action).unwrap_or_default();
        assert_eq!(json.get("type").and_then(|t| t.as_str()), Some(action.name()));
    }
}
