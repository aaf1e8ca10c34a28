//! Raid variant: passive business income and troop raids on territories.
//!
//! Handles `TICK`, `RAID`, and `SELECT_RAID`. Every other action is rejected
//! with [`RejectionReason::NotApplicable`].

use serde::Serialize;
use tracing::debug;
use underworld_crew::combat::{calculate_raid_outcome, raid_win_chance, win_chance_percent};
use underworld_crew::troop::{find_troop, troops};
use underworld_crew::villain::{STARTING_VILLAINS, create_villains};
use underworld_crew::RollSource;
use underworld_types::{
    Action, ActiveRaid, Business, RejectionReason, Resources, Territory, TerritoryId, Troop,
    TroopId, Villain, VillainId,
};
use underworld_world::territory::find_territory;
use underworld_world::{businesses, passive_income_with, territories};

use crate::log::ActivityLog;
use crate::transition::{ReduceResult, Transition};

/// Respect gained by a successful raid.
pub const RAID_VICTORY_RESPECT: i64 = 4;

/// Respect lost by a failed raid.
pub const RAID_DEFEAT_RESPECT: i64 = -2;

/// Troop selected in a new game.
pub const DEFAULT_RAID_TROOP: &str = "capangas";

/// Territory targeted in a new game.
pub const DEFAULT_RAID_TERRITORY: &str = "central";

const OPENING_LINES: [&str; 2] = [
    "O império nasceu na madrugada chuvosa da Cidade Neon.",
    "Capangas patrulham o Distrito Ártico em busca de rivais.",
];

/// Complete raid-variant game state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaidState {
    /// Player resources.
    pub resources: Resources,
    /// Raidable territories and the businesses they hold.
    pub territories: Vec<Territory>,
    /// Business catalog used for income.
    pub businesses: Vec<Business>,
    /// Troop roster.
    pub troops: Vec<Troop>,
    /// Lieutenants generated at game start.
    pub villains: Vec<Villain>,
    /// Activity log, newest first.
    pub activity_log: ActivityLog,
    /// Current raid planner selection.
    pub active_raid: ActiveRaid,
}

/// Projected odds for the current raid selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaidSummary {
    /// Selected troop.
    pub troop: Troop,
    /// Selected lieutenant, if it still resolves.
    pub villain: Option<Villain>,
    /// Target territory.
    pub territory: Territory,
    /// Win chance as a rounded percentage.
    pub win_chance: u32,
}

impl RaidState {
    /// Build a fresh raid game. Draws four villains from `rolls`.
    pub fn new(resources: Resources, log_cap: usize, rolls: &mut impl RollSource) -> Self {
        let villains = create_villains(STARTING_VILLAINS, rolls);
        let active_raid = ActiveRaid {
            troop_id: TroopId::from(DEFAULT_RAID_TROOP),
            villain_id: villains.first().map(|v| v.id),
            target_territory_id: TerritoryId::from(DEFAULT_RAID_TERRITORY),
        };
        Self {
            resources,
            territories: territories().to_vec(),
            businesses: businesses().to_vec(),
            troops: troops().to_vec(),
            villains,
            activity_log: ActivityLog::with_entries(log_cap, OPENING_LINES),
            active_raid,
        }
    }

    /// Projected odds for [`Self::active_raid`].
    ///
    /// Returns `None` when the troop or territory no longer resolves. A
    /// missing villain just means no buff.
    pub fn active_raid_summary(&self) -> Option<RaidSummary> {
        let troop = find_troop(&self.troops, &self.active_raid.troop_id)?;
        let territory = find_territory(&self.territories, &self.active_raid.target_territory_id)?;
        let villain = self
            .active_raid
            .villain_id
            .and_then(|id| self.villains.iter().find(|v| v.id == id));
        Some(RaidSummary {
            troop: troop.clone(),
            villain: villain.cloned(),
            territory: territory.clone(),
            win_chance: win_chance_percent(raid_win_chance(troop, villain, territory)),
        })
    }

    fn resolve_villain(&self, id: Option<VillainId>) -> Result<Option<&Villain>, RejectionReason> {
        match id {
            None => Ok(None),
            Some(id) => self
                .villains
                .iter()
                .find(|v| v.id == id)
                .map(Some)
                .ok_or(RejectionReason::UnknownId),
        }
    }

    fn resolve_raid(
        &self,
        troop_id: &TroopId,
        villain_id: Option<VillainId>,
        territory_id: &TerritoryId,
    ) -> Result<(&Troop, Option<&Villain>, &Territory), RejectionReason> {
        let troop = find_troop(&self.troops, troop_id).ok_or(RejectionReason::UnknownId)?;
        let territory =
            find_territory(&self.territories, territory_id).ok_or(RejectionReason::UnknownId)?;
        let villain = self.resolve_villain(villain_id)?;
        Ok((troop, villain, territory))
    }
}

/// Apply `action` to `state`.
///
/// # Errors
///
/// Returns [`RejectionReason::UnknownId`] when a raid names a troop, villain,
/// or territory that does not exist, and [`RejectionReason::NotApplicable`]
/// for RPG-only actions.
pub fn reduce(
    state: &RaidState,
    action: &Action,
    rolls: &mut impl RollSource,
) -> ReduceResult<RaidState> {
    match action {
        Action::Tick => Ok(collect_income(state)),
        Action::Raid {
            troop_id,
            villain_id,
            territory_id,
        } => {
            let (troop, villain, territory) = state.resolve_raid(troop_id, *villain_id, territory_id)?;
            let outcome = calculate_raid_outcome(troop, villain, territory, rolls);
            debug!(
                troop = %troop.id,
                territory = %territory.id,
                win_chance = %outcome.win_chance,
                roll = %outcome.roll,
                victory = outcome.victory,
                "Raid resolved"
            );
            let (respect, report) = if outcome.victory {
                (
                    RAID_VICTORY_RESPECT,
                    format!("Raid bem-sucedido em {}. O respeito aumenta.", territory.name),
                )
            } else {
                (
                    RAID_DEFEAT_RESPECT,
                    format!("Raid falhou em {}. Reorganize suas tropas.", territory.name),
                )
            };
            let mut next = state.clone();
            next.resources = next.resources.plus(Resources::new(0, 0, respect));
            next.activity_log.push(report.clone());
            Ok(Transition::logged(next, report))
        }
        Action::SelectRaid {
            troop_id,
            villain_id,
            territory_id,
        } => {
            state.resolve_raid(troop_id, *villain_id, territory_id)?;
            let mut next = state.clone();
            next.active_raid = ActiveRaid {
                troop_id: troop_id.clone(),
                villain_id: *villain_id,
                target_territory_id: territory_id.clone(),
            };
            Ok(Transition::silent(next))
        }
        Action::AdvanceDay
        | Action::SetLocation { .. }
        | Action::CommitCrime { .. }
        | Action::BuyItem { .. }
        | Action::Recruit { .. }
        | Action::Promote { .. }
        | Action::Takeover
        | Action::ToggleInfo { .. } => Err(RejectionReason::NotApplicable),
    }
}

fn collect_income(state: &RaidState) -> Transition<RaidState> {
    let income = passive_income_with(&state.territories, &state.businesses);
    let report = format!(
        "Negócios renderam ${} e +{} influência.",
        income.cash, income.influence
    );
    let mut next = state.clone();
    next.resources = next.resources.plus(income);
    next.activity_log.push(report.clone());
    Transition::logged(next, report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;
    use underworld_crew::ScriptedRolls;
    use underworld_types::BuffType;

    use super::*;

    fn new_state() -> RaidState {
        RaidState::new(Resources::new(2500, 35, 20), 8, &mut ScriptedRolls::default())
    }

    fn raid(troop: &str, villain: Option<VillainId>, territory: &str) -> Action {
        Action::Raid {
            troop_id: TroopId::from(troop),
            villain_id: villain,
            territory_id: TerritoryId::from(territory),
        }
    }

    #[test]
    fn new_game_matches_defaults() {
        let state = new_state();
        assert_eq!(state.villains.len(), 4);
        assert_eq!(state.activity_log.len(), 2);
        assert_eq!(state.active_raid.troop_id.as_str(), "capangas");
        assert_eq!(state.active_raid.target_territory_id.as_str(), "central");
        assert_eq!(state.active_raid.villain_id, state.villains.first().map(|v| v.id));
    }

    #[test]
    fn tick_adds_passive_income() {
        let state = new_state();
        let step = reduce(&state, &Action::Tick, &mut ScriptedRolls::default()).unwrap();
        assert_eq!(step.state.resources, Resources::new(3020, 45, 28));
        assert_eq!(
            step.entry.as_deref(),
            Some("Negócios renderam $520 e +10 influência.")
        );
        assert_eq!(step.state.activity_log.latest(), step.entry.as_deref());
    }

    #[test]
    fn winning_raid_gains_respect() {
        let state = new_state();
        let mut rolls = ScriptedRolls::new([dec!(0)]);
        let step = reduce(&state, &raid("batedores", None, "central"), &mut rolls).unwrap();
        assert_eq!(step.state.resources.respect, 24);
        assert_eq!(
            step.entry.as_deref(),
            Some("Raid bem-sucedido em Cinturão Central. O respeito aumenta.")
        );
    }

    #[test]
    fn losing_raid_costs_respect() {
        let state = new_state();
        let mut rolls = ScriptedRolls::new([dec!(0.95)]);
        let step = reduce(&state, &raid("capangas", None, "uptown"), &mut rolls).unwrap();
        assert_eq!(step.state.resources.respect, 18);
        assert_eq!(step.state.resources.cash, 2500);
    }

    #[test]
    fn raid_with_unknown_ids_is_rejected() {
        let state = new_state();
        let mut rolls = ScriptedRolls::default();
        assert_eq!(
            reduce(&state, &raid("tanques", None, "central"), &mut rolls),
            Err(RejectionReason::UnknownId)
        );
        assert_eq!(
            reduce(&state, &raid("capangas", None, "lua"), &mut rolls),
            Err(RejectionReason::UnknownId)
        );
        assert_eq!(
            reduce(&state, &raid("capangas", Some(VillainId::new()), "central"), &mut rolls),
            Err(RejectionReason::UnknownId)
        );
    }

    #[test]
    fn rpg_actions_are_not_applicable() {
        let state = new_state();
        let result = reduce(&state, &Action::Takeover, &mut ScriptedRolls::default());
        assert_eq!(result, Err(RejectionReason::NotApplicable));
    }

    #[test]
    fn select_raid_updates_summary() {
        let state = new_state();
        // Scripted picks of zero make every villain a Contador.
        let accountant = state.villains.first().map(|v| v.id);
        let action = Action::SelectRaid {
            troop_id: TroopId::from("batedores"),
            villain_id: accountant,
            territory_id: TerritoryId::from("north"),
        };
        let step = reduce(&state, &action, &mut ScriptedRolls::default()).unwrap();
        assert!(step.entry.is_none());
        let summary = step.state.active_raid_summary().unwrap();
        assert_eq!(summary.troop.id.as_str(), "batedores");
        assert_eq!(summary.territory.id.as_str(), "north");
        assert_eq!(summary.villain.map(|v| v.buff.buff_type), Some(BuffType::Profit));
        // 9 / (22 + 1)
        assert_eq!(summary.win_chance, 39);
    }

    #[test]
    fn summary_needs_troop_and_territory() {
        let mut state = new_state();
        state.active_raid.target_territory_id = TerritoryId::from("lua");
        assert!(state.active_raid_summary().is_none());
    }
}
