//! Crime catalog, eligibility, and resolution.
//!
//! Eligibility needs every required item in stock and enough members at or
//! above each required rank. Items are checked, never consumed.
//! A crime succeeds when the roll lands strictly above its risk.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use underworld_types::{
    Crime, CrimeId, CrimeRequirements, CrimeRewards, ItemId, Member, Rank, Resources,
};

use crate::dice::RollSource;
use crate::inventory::Inventory;
use crate::rank::count_at_or_above;

/// Respect lost on a failed crime.
pub const FAILURE_RESPECT_PENALTY: i64 = 1;

static CRIMES: LazyLock<Vec<Crime>> = LazyLock::new(|| {
    vec![
        crime(
            ("furto", "Furto de Carga", 1),
            (&[], &[]),
            (150, 1, 15),
            Decimal::new(15, 2),
        ),
        crime(
            ("assalto", "Assalto à Mão Armada", 2),
            (&["arma-fogo"], &[]),
            (400, 3, 35),
            Decimal::new(30, 2),
        ),
        crime(
            ("sequestro", "Sequestro Relâmpago", 3),
            (&["arma-fogo", "carro-fuga"], &[(Rank::Soldado, 2)]),
            (1200, 8, 70),
            Decimal::new(45, 2),
        ),
        crime(
            ("invasao-bancaria", "Invasão Bancária", 3),
            (&["kit-hacker"], &[(Rank::General, 1)]),
            (1800, 6, 80),
            Decimal::new(40, 2),
        ),
        crime(
            ("cofre-federal", "Cofre Federal", 4),
            (
                &["explosivos", "carro-fuga"],
                &[(Rank::Elite, 1), (Rank::Soldado, 3)],
            ),
            (5000, 20, 150),
            Decimal::new(60, 2),
        ),
    ]
});

type Requirements<'a> = (&'a [&'a str], &'a [(Rank, u32)]);

fn crime(
    (id, name, tier): (&str, &str, u32),
    (items, ranks): Requirements<'_>,
    (cash, respect, xp): (i64, i64, u32),
    risk: Decimal,
) -> Crime {
    Crime {
        id: CrimeId::from(id),
        name: name.to_string(),
        tier,
        requirements: CrimeRequirements {
            item_ids: items.iter().map(|&i| ItemId::from(i)).collect(),
            min_rank_counts: ranks.iter().copied().collect::<BTreeMap<_, _>>(),
        },
        rewards: CrimeRewards { cash, respect, xp },
        risk,
    }
}

/// The static crime catalog, ordered by tier.
pub fn crimes() -> &'static [Crime] {
    &CRIMES
}

/// Look up a catalog crime.
pub fn find_crime(id: &CrimeId) -> Option<&'static Crime> {
    crimes().iter().find(|c| &c.id == id)
}

/// Whether the crew holds every item and rank quota `crime` requires.
pub fn can_commit_crime(inventory: &Inventory, members: &[Member], crime: &Crime) -> bool {
    let has_items = crime
        .requirements
        .item_ids
        .iter()
        .all(|item| inventory.has(item));
    let has_ranks = crime
        .requirements
        .min_rank_counts
        .iter()
        .all(|(&rank, &count)| {
            u32::try_from(count_at_or_above(members, rank)).unwrap_or(u32::MAX) >= count
        });
    has_items && has_ranks
}

/// The result of one crime attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrimeOutcome {
    /// Whether the job paid off.
    pub success: bool,
    /// The roll that decided it.
    pub roll: Decimal,
    /// Resource change to apply.
    pub delta: Resources,
    /// Experience granted to the crew leader.
    pub xp: u32,
}

/// Roll one attempt at `crime`.
pub fn resolve_crime(crime: &Crime, rolls: &mut impl RollSource) -> CrimeOutcome {
    let roll = rolls.roll();
    let success = roll > crime.risk;
    if success {
        CrimeOutcome {
            success,
            roll,
            delta: Resources::new(crime.rewards.cash, 0, crime.rewards.respect),
            xp: crime.rewards.xp,
        }
    } else {
        CrimeOutcome {
            success,
            roll,
            delta: Resources::new(0, 0, FAILURE_RESPECT_PENALTY.saturating_neg()),
            xp: failure_xp(crime.rewards.xp),
        }
    }
}

/// A third of the reward xp, rounded half up.
pub const fn failure_xp(reward_xp: u32) -> u32 {
    match reward_xp.saturating_add(1).checked_div(3) {
        Some(xp) => xp,
        None => 0,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;
    use underworld_types::MemberId;

    use super::*;
    use crate::dice::ScriptedRolls;

    fn member(rank: Rank) -> Member {
        Member {
            id: MemberId::new(),
            name: "Teste".to_string(),
            rank,
            xp: 0,
            level: 1,
        }
    }

    fn lookup(id: &str) -> &'static Crime {
        find_crime(&CrimeId::from(id)).unwrap()
    }

    #[test]
    fn catalog_tiers_never_decrease() {
        let tiers: Vec<u32> = crimes().iter().map(|c| c.tier).collect();
        assert_eq!(tiers, vec![1, 2, 3, 3, 4]);
        assert!(crimes().iter().all(|c| c.risk > Decimal::ZERO && c.risk < Decimal::ONE));
    }

    #[test]
    fn armed_robbery_needs_a_gun() {
        let robbery = lookup("assalto");
        let crew = vec![member(Rank::Recruta)];
        let mut inventory = Inventory::new();
        assert!(!can_commit_crime(&inventory, &crew, robbery));

        inventory.add(&ItemId::from("arma-fogo"));
        assert!(can_commit_crime(&inventory, &crew, robbery));
    }

    #[test]
    fn higher_ranks_fill_lower_quotas() {
        let kidnapping = lookup("sequestro");
        let mut inventory = Inventory::new();
        inventory.add(&ItemId::from("arma-fogo"));
        inventory.add(&ItemId::from("carro-fuga"));

        let one_soldier = vec![member(Rank::Recruta), member(Rank::Soldado)];
        assert!(!can_commit_crime(&inventory, &one_soldier, kidnapping));

        let soldier_and_general = vec![member(Rank::Soldado), member(Rank::General)];
        assert!(can_commit_crime(&inventory, &soldier_and_general, kidnapping));
    }

    #[test]
    fn vault_job_checks_every_quota() {
        let vault = lookup("cofre-federal");
        let mut inventory = Inventory::new();
        inventory.add(&ItemId::from("explosivos"));
        inventory.add(&ItemId::from("carro-fuga"));

        let no_elite = vec![member(Rank::General); 4];
        assert!(!can_commit_crime(&inventory, &no_elite, vault));

        let elite_and_two = vec![member(Rank::Elite), member(Rank::Soldado), member(Rank::Soldado)];
        assert!(can_commit_crime(&inventory, &elite_and_two, vault));
    }

    #[test]
    fn roll_above_risk_succeeds() {
        let theft = lookup("furto");
        let mut rolls = ScriptedRolls::new([dec!(0.5)]);
        let outcome = resolve_crime(theft, &mut rolls);
        assert!(outcome.success);
        assert_eq!(outcome.delta, Resources::new(150, 0, 1));
        assert_eq!(outcome.xp, 15);
    }

    #[test]
    fn roll_at_risk_fails() {
        let theft = lookup("furto");
        let mut rolls = ScriptedRolls::new([dec!(0.15)]);
        let outcome = resolve_crime(theft, &mut rolls);
        assert!(!outcome.success);
        assert_eq!(outcome.delta, Resources::new(0, 0, -1));
        assert_eq!(outcome.xp, 5);
    }

    #[test]
    fn failure_xp_rounds() {
        assert_eq!(failure_xp(0), 0);
        assert_eq!(failure_xp(1), 0);
        assert_eq!(failure_xp(2), 1);
        assert_eq!(failure_xp(35), 12);
        assert_eq!(failure_xp(70), 23);
    }
}
