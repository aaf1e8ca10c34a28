//! Raid and takeover odds.
//!
//! Both contests share one shape: `attack / (defense + 1)` clamped to
//! `[0.1, 0.9]`, then a single roll wins when `roll <= win_chance`.

use rust_decimal::{Decimal, RoundingStrategy};
use underworld_types::{BuffType, DominantOrg, RaidOutcome, Territory, Troop, Villain};

use crate::dice::RollSource;

/// Floor on any win chance.
pub const MIN_WIN_CHANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Ceiling on any win chance.
pub const MAX_WIN_CHANCE: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// Chance that a freshly dominated neighborhood surrenders elites.
pub const ABSORPTION_CHANCE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Most elites a single takeover can absorb.
pub const MAX_ABSORBED_ELITES: u32 = 2;

/// `attack / (defense + 1)`, clamped to the win-chance band.
pub fn contest_win_chance(attack: Decimal, defense: Decimal) -> Decimal {
    attack
        .checked_div(defense.saturating_add(Decimal::ONE))
        .unwrap_or(MAX_WIN_CHANCE)
        .clamp(MIN_WIN_CHANCE, MAX_WIN_CHANCE)
}

fn buff_value(villain: Option<&Villain>, buff_type: BuffType) -> Decimal {
    villain
        .filter(|v| v.buff.buff_type == buff_type)
        .map_or(Decimal::ZERO, |v| v.buff.value)
}

/// Projected raid odds. An attack villain scales troop attack up, a defense
/// villain scales territory defense down. Other buffs do nothing here.
pub fn raid_win_chance(troop: &Troop, villain: Option<&Villain>, territory: &Territory) -> Decimal {
    let attack_buff = buff_value(villain, BuffType::Attack);
    let defense_debuff = buff_value(villain, BuffType::Defense);
    let attack = Decimal::from(troop.attack).saturating_mul(Decimal::ONE.saturating_add(attack_buff));
    let defense =
        Decimal::from(territory.defense).saturating_mul(Decimal::ONE.saturating_sub(defense_debuff));
    contest_win_chance(attack, defense)
}

/// Roll a raid.
pub fn calculate_raid_outcome(
    troop: &Troop,
    villain: Option<&Villain>,
    territory: &Territory,
    rolls: &mut impl RollSource,
) -> RaidOutcome {
    let win_chance = raid_win_chance(troop, villain, territory);
    decide(win_chance, rolls)
}

/// Projected takeover odds of roster power against an organization.
pub fn takeover_win_chance(our_power: u32, enemy_power: u32) -> Decimal {
    contest_win_chance(Decimal::from(our_power), Decimal::from(enemy_power))
}

/// Roll a takeover.
pub fn resolve_takeover(
    our_power: u32,
    enemy_power: u32,
    rolls: &mut impl RollSource,
) -> RaidOutcome {
    decide(takeover_win_chance(our_power, enemy_power), rolls)
}

fn decide(win_chance: Decimal, rolls: &mut impl RollSource) -> RaidOutcome {
    let roll = rolls.roll();
    RaidOutcome {
        win_chance,
        victory: roll <= win_chance,
        roll,
    }
}

/// Roll the post-domination absorption. Returns how many elites join.
pub fn roll_absorption(org: &DominantOrg, rolls: &mut impl RollSource) -> u32 {
    if rolls.roll() < ABSORPTION_CHANCE {
        org.elite_count.clamp(1, MAX_ABSORBED_ELITES)
    } else {
        0
    }
}

/// Win chance as a percentage, halves rounded up.
pub fn win_chance_percent(win_chance: Decimal) -> u32 {
    win_chance
        .saturating_mul(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .try_into()
        .unwrap_or(0)
}
