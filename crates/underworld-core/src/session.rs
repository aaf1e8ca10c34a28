//! Game sessions: explicit ownership of one running game.
//!
//! A [`GameSession`] owns the current state of one variant together with the
//! roll source its reducer draws from. Each dispatched action either replaces
//! the state wholesale or leaves it untouched.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use underworld_crew::RollSource;
use underworld_types::{Action, Resources};
use underworld_world::WorldError;

use crate::config::GameConfig;
use crate::error::SessionError;
use crate::log::ActivityLog;
use crate::raid::{self, RaidState};
use crate::rpg::{self, RpgState};
use crate::transition::{Applied, ReduceResult, TransitionResult};

/// A game variant: a state type with a reducer.
pub trait GameVariant: Clone + Serialize {
    /// Variant name for logs.
    const NAME: &'static str;

    /// The action the periodic timer dispatches.
    fn tick_action() -> Action {
        Action::Tick
    }

    /// Apply `action`, producing the next state or a rejection.
    fn reduce<R: RollSource>(&self, action: &Action, rolls: &mut R) -> ReduceResult<Self>;

    /// Current activity log.
    fn activity_log(&self) -> &ActivityLog;

    /// Current player resources.
    fn resources(&self) -> Resources;
}

impl GameVariant for RaidState {
    const NAME: &'static str = "raid";

    fn reduce<R: RollSource>(&self, action: &Action, rolls: &mut R) -> ReduceResult<Self> {
        raid::reduce(self, action, rolls)
    }

    fn activity_log(&self) -> &ActivityLog {
        &self.activity_log
    }

    fn resources(&self) -> Resources {
        self.resources
    }
}

impl GameVariant for RpgState {
    const NAME: &'static str = "rpg";

    fn reduce<R: RollSource>(&self, action: &Action, rolls: &mut R) -> ReduceResult<Self> {
        rpg::reduce(self, action, rolls)
    }

    fn activity_log(&self) -> &ActivityLog {
        &self.activity_log
    }

    fn resources(&self) -> Resources {
        self.resources
    }
}

/// Counters over a session's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Actions applied, ticks included.
    pub applied: u64,
    /// Actions rejected, ticks included.
    pub rejected: u64,
    /// Ticks dispatched.
    pub ticks: u64,
}

/// One running game.
#[derive(Debug)]
pub struct GameSession<V, R> {
    state: V,
    rolls: R,
    stats: SessionStats,
    started_at: DateTime<Utc>,
}

impl<V: GameVariant, R: RollSource> GameSession<V, R> {
    /// Start a session from an initial state.
    pub fn new(state: V, rolls: R) -> Self {
        info!(variant = V::NAME, "Game session started");
        Self {
            state,
            rolls,
            stats: SessionStats::default(),
            started_at: Utc::now(),
        }
    }

    /// Current state.
    pub const fn state(&self) -> &V {
        &self.state
    }

    /// Lifetime counters.
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Wall-clock time the session started.
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Dispatch a user action.
    ///
    /// # Errors
    ///
    /// Returns the reducer's [`RejectionReason`](underworld_types::RejectionReason);
    /// the state is left unchanged.
    pub fn apply_action(&mut self, action: &Action) -> TransitionResult {
        match self.state.reduce(action, &mut self.rolls) {
            Ok(transition) => {
                self.state = transition.state;
                self.stats.applied = self.stats.applied.saturating_add(1);
                debug!(
                    variant = V::NAME,
                    action = action.name(),
                    entry = transition.entry.as_deref(),
                    "Action applied"
                );
                Ok(Applied {
                    action: action.name(),
                    entry: transition.entry,
                })
            }
            Err(reason) => {
                self.stats.rejected = self.stats.rejected.saturating_add(1);
                debug!(
                    variant = V::NAME,
                    action = action.name(),
                    %reason,
                    "Action rejected"
                );
                Err(reason)
            }
        }
    }

    /// Dispatch the periodic tick.
    ///
    /// # Errors
    ///
    /// Returns the reducer's rejection, which no shipped variant produces for
    /// its own tick action.
    pub fn advance_tick(&mut self) -> TransitionResult {
        self.stats.ticks = self.stats.ticks.saturating_add(1);
        self.apply_action(&V::tick_action())
    }

    /// Serialize the current state as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Snapshot`] if serialization fails.
    pub fn snapshot_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }
}

/// Build a raid session from configuration.
pub fn raid_session<R: RollSource>(config: &GameConfig, mut rolls: R) -> GameSession<RaidState, R> {
    let state = RaidState::new(
        config.economy.starting_resources(),
        config.activity_log.raid_cap,
        &mut rolls,
    );
    GameSession::new(state, rolls)
}

/// Build an RPG session from configuration.
///
/// # Errors
///
/// Returns [`SessionError::World`] if the starting world cannot be built or
/// the configured starting neighborhood is not on the map.
pub fn rpg_session<R: RollSource>(
    config: &GameConfig,
    rolls: R,
) -> Result<GameSession<RpgState, R>, SessionError> {
    let mut state = RpgState::new(
        config.economy.starting_resources(),
        config.activity_log.rpg_cap,
    )?;
    if let Some(key) = &config.session.starting_neighborhood {
        let path = state
            .world_map
            .find_path(key)
            .ok_or_else(|| WorldError::UnknownNeighborhood(key.clone()))?;
        state.selected_location = Some(path);
    }
    Ok(GameSession::new(state, rolls))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use underworld_crew::ScriptedRolls;
    use underworld_types::{ItemId, RejectionReason};

    use super::*;

    #[test]
    fn rejected_action_leaves_state_alone() {
        let mut session = rpg_session(&GameConfig::default(), ScriptedRolls::default()).unwrap();
        let before = session.state().clone();
        let result = session.apply_action(&Action::BuyItem {
            item_id: ItemId::from("granada"),
        });
        assert_eq!(result, Err(RejectionReason::UnknownId));
        assert_eq!(session.state(), &before);
        assert_eq!(session.stats().rejected, 1);
        assert_eq!(session.stats().applied, 0);
    }

    #[test]
    fn applied_action_reports_its_log_entry() {
        let mut session = rpg_session(&GameConfig::default(), ScriptedRolls::default()).unwrap();
        let applied = session
            .apply_action(&Action::BuyItem {
                item_id: ItemId::from("arma-fogo"),
            })
            .unwrap();
        assert_eq!(applied.action, "ACTION_BUY_ITEM");
        assert_eq!(applied.entry.as_deref(), session.state().activity_log().latest());
        assert_eq!(session.state().resources().cash, 2380);
    }

    #[test]
    fn ticks_are_counted() {
        let mut session = raid_session(&GameConfig::default(), ScriptedRolls::default());
        for _ in 0..3 {
            session.advance_tick().unwrap();
        }
        assert_eq!(session.stats().ticks, 3);
        assert_eq!(session.stats().applied, 3);
        assert_eq!(session.state().resources().cash, 2500 + 3 * 520);
    }

    #[test]
    fn starting_neighborhood_selects_the_takeover_target() {
        let mut config = GameConfig::default();
        config.session.starting_neighborhood = Some("lapa".to_string());
        let session = rpg_session(&config, ScriptedRolls::default()).unwrap();
        let selected = session.state().selected_location.clone().unwrap();
        assert_eq!(selected.neighborhood.as_str(), "lapa");
        assert_eq!(selected.city.as_str(), "rio");

        config.session.starting_neighborhood = Some("atlantida".to_string());
        let err = rpg_session(&config, ScriptedRolls::default()).unwrap_err();
        assert!(matches!(
            err,
            SessionError::World {
                source: WorldError::UnknownNeighborhood(_)
            }
        ));
    }

    #[test]
    fn snapshot_is_json() {
        let session = raid_session(&GameConfig::default(), ScriptedRolls::default());
        let json = session.snapshot_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["resources"]["cash"], 2500);
        assert_eq!(value["villains"].as_array().map(Vec::len), Some(4));
    }
}
