//! Recruitment pool and entry fees.

use underworld_types::{EntryCost, EntryKind, MemberId, Rank, RecruitCandidate, RejectionReason, Resources};

use crate::rank::level_for_xp;

fn candidate(name: &str, rank: Rank, xp: u32, kind: EntryKind, value: i64) -> RecruitCandidate {
    RecruitCandidate {
        id: MemberId::new(),
        name: name.to_string(),
        rank,
        xp,
        level: level_for_xp(xp),
        entry: EntryCost { kind, value },
    }
}

/// A fresh recruitment pool. Each call mints new candidate ids.
pub fn starting_recruit_pool() -> Vec<RecruitCandidate> {
    vec![
        candidate("Tonho Navalha", Rank::Recruta, 0, EntryKind::Cash, 200),
        candidate("Marcela Faca", Rank::Recruta, 20, EntryKind::Cash, 250),
        candidate("Dinho Pólvora", Rank::Soldado, 120, EntryKind::Cash, 700),
        candidate("Rita Sombra", Rank::Soldado, 150, EntryKind::Respect, 10),
        candidate("Coronel Brás", Rank::General, 280, EntryKind::Respect, 25),
    ]
}

/// Validate that `resources` cover the entry fee.
pub const fn check_entry(entry: EntryCost, resources: &Resources) -> Result<(), RejectionReason> {
    let available = match entry.kind {
        EntryKind::Cash => resources.cash,
        EntryKind::Respect => resources.respect,
    };
    if available < entry.value {
        return Err(RejectionReason::InsufficientFunds);
    }
    Ok(())
}

/// Resource delta paying an entry fee.
pub const fn entry_delta(entry: EntryCost) -> Resources {
    let paid = entry.value.saturating_neg();
    match entry.kind {
        EntryKind::Cash => Resources::new(paid, 0, 0),
        EntryKind::Respect => Resources::new(0, 0, paid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_levels_follow_xp() {
        let pool = starting_recruit_pool();
        assert_eq!(pool.len(), 5);
        for candidate in &pool {
            assert_eq!(candidate.level, level_for_xp(candidate.xp));
        }
        let general = pool.iter().find(|c| c.rank == Rank::General).map(|c| c.level);
        assert_eq!(general, Some(6));
    }

    #[test]
    fn pools_do_not_share_ids() {
        let a = starting_recruit_pool();
        let b = starting_recruit_pool();
        assert!(a.iter().all(|x| b.iter().all(|y| x.id != y.id)));
    }

    #[test]
    fn entry_fee_checks_the_right_resource() {
        let respect_fee = EntryCost {
            kind: EntryKind::Respect,
            value: 10,
        };
        let rich_but_unknown = Resources::new(10_000, 0, 5);
        assert_eq!(
            check_entry(respect_fee, &rich_but_unknown),
            Err(RejectionReason::InsufficientFunds)
        );
        assert_eq!(check_entry(respect_fee, &Resources::new(0, 0, 10)), Ok(()));
        assert_eq!(entry_delta(respect_fee), Resources::new(0, 0, -10));
    }
}
