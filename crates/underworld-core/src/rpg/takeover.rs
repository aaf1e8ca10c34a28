//! Territorial takeover.
//!
//! Presence moves `Inexistente -> Infiltrado -> Disputado -> Dominado`. The
//! first step happens on any attempt, won or lost. Every later step needs a
//! victory. `Dominado` is terminal.
//!
//! Winning the step into `Dominado` rolls once more for absorption: with a
//! 20% chance, one or two of the defeated organization's elites join the
//! crew.

use tracing::debug;
use underworld_crew::RollSource;
use underworld_crew::combat::{resolve_takeover, roll_absorption, win_chance_percent};
use underworld_crew::member::absorbed_elite;
use underworld_crew::rank::{count_at_or_above, roster_power};
use underworld_types::{LocationPath, Presence, RaidOutcome, Rank, RejectionReason};

use super::state::RpgState;

/// Presence after an attempt from `current`.
pub const fn next_presence(current: Presence, victory: bool) -> Presence {
    match current {
        Presence::Inexistente => Presence::Infiltrado,
        _ if victory => current.advanced(),
        _ => current,
    }
}

/// Everything one takeover attempt decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeoverOutcome {
    /// Contested neighborhood.
    pub path: LocationPath,
    /// Odds, roll, and result.
    pub contest: RaidOutcome,
    /// Presence before the attempt.
    pub before: Presence,
    /// Presence after the attempt.
    pub after: Presence,
    /// Enemy elites absorbed into the crew.
    pub absorbed: u32,
    /// Combat report written to the activity log.
    pub report: String,
}

/// Contest the neighborhood at `path`, mutating `state` in place.
///
/// `state` must be a private copy; the caller discards it on rejection.
pub(crate) fn contest(
    state: &mut RpgState,
    path: &LocationPath,
    rolls: &mut impl RollSource,
) -> Result<TakeoverOutcome, RejectionReason> {
    let neighborhood = state.world_map.get(path).ok_or(RejectionReason::UnknownId)?;
    let org = neighborhood.dominant_org.clone();
    let hood_name = neighborhood.name.clone();
    let before = neighborhood.presence;

    let our_power = roster_power(&state.members);
    let soldiers = count_at_or_above(&state.members, Rank::Soldado);
    let crew = count_at_or_above(&state.members, Rank::Recruta);

    let contest = resolve_takeover(our_power, org.power_level, rolls);
    let Ok(after) = state
        .world_map
        .advance_presence(path, next_presence(before, contest.victory))
    else {
        return Err(RejectionReason::UnknownId);
    };

    let absorbed = if before == Presence::Disputado && after == Presence::Dominado {
        roll_absorption(&org, rolls)
    } else {
        0
    };
    for ordinal in 1..=absorbed {
        state.members.push(absorbed_elite(&org.name, ordinal));
    }

    let verdict = if contest.victory { "vitória" } else { "derrota" };
    let mut report = format!(
        "Ataque em {hood_name}: {soldiers} soldados e {crew} membros (poder {our_power}) contra {} (poder {}). Chance {}%, {verdict}. Presença: {}.",
        org.name,
        org.power_level,
        win_chance_percent(contest.win_chance),
        after.label(),
    );
    if absorbed > 0 {
        report.push_str(&format!(" {absorbed} elite(s) de {} se juntaram a nós.", org.name));
    }

    debug!(
        location = %path,
        our_power,
        enemy_power = org.power_level,
        win_chance = %contest.win_chance,
        roll = %contest.roll,
        victory = contest.victory,
        before = before.label(),
        after = after.label(),
        absorbed,
        "Takeover resolved"
    );

    Ok(TakeoverOutcome {
        path: path.clone(),
        contest,
        before,
        after,
        absorbed,
        report,
    })
}
