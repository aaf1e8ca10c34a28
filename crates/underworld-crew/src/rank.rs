//! Rank progression table and experience levels.
//!
//! | Rank    | Min XP | Promote cost (cash / respect) | Power |
//! |---------|--------|-------------------------------|-------|
//! | Recruta | 0      | --                            | 1     |
//! | Soldado | 100    | 400 / 5                       | 3     |
//! | General | 250    | 1200 / 15                     | 6     |
//! | Elite   | 400    | 2500 / 30                     | 10    |
//!
//! Level is derived from xp as `1 + xp / 50`.

use underworld_types::{Member, PromoteCost, Rank, RankSpec, RejectionReason, Resources};

/// XP needed per experience level.
pub const XP_PER_LEVEL: u32 = 50;

const RECRUTA: RankSpec = RankSpec {
    rank: Rank::Recruta,
    min_xp: 0,
    promote_cost: PromoteCost { cash: 0, respect: 0 },
    power: 1,
};

const SOLDADO: RankSpec = RankSpec {
    rank: Rank::Soldado,
    min_xp: 100,
    promote_cost: PromoteCost {
        cash: 400,
        respect: 5,
    },
    power: 3,
};

const GENERAL: RankSpec = RankSpec {
    rank: Rank::General,
    min_xp: 250,
    promote_cost: PromoteCost {
        cash: 1200,
        respect: 15,
    },
    power: 6,
};

const ELITE: RankSpec = RankSpec {
    rank: Rank::Elite,
    min_xp: 400,
    promote_cost: PromoteCost {
        cash: 2500,
        respect: 30,
    },
    power: 10,
};

/// The full progression table, lowest rank first.
pub const RANK_TABLE: [RankSpec; 4] = [RECRUTA, SOLDADO, GENERAL, ELITE];

/// Table row for a rank.
pub const fn rank_spec(rank: Rank) -> RankSpec {
    match rank {
        Rank::Recruta => RECRUTA,
        Rank::Soldado => SOLDADO,
        Rank::General => GENERAL,
        Rank::Elite => ELITE,
    }
}

/// Combat weight of a rank.
pub const fn rank_power(rank: Rank) -> u32 {
    rank_spec(rank).power
}

/// The rank above `rank`, or `None` at the top.
pub const fn next_rank(rank: Rank) -> Option<Rank> {
    rank.next()
}

/// Experience level for a given amount of xp.
pub const fn level_for_xp(xp: u32) -> u32 {
    match xp.checked_div(XP_PER_LEVEL) {
        Some(levels) => levels.saturating_add(1),
        None => 1,
    }
}

/// Number of members whose rank power is at least that of `rank`.
pub fn count_at_or_above(members: &[Member], rank: Rank) -> usize {
    let threshold = rank_power(rank);
    members
        .iter()
        .filter(|m| rank_power(m.rank) >= threshold)
        .count()
}

/// Sum of rank power over the roster.
pub fn roster_power(members: &[Member]) -> u32 {
    members
        .iter()
        .fold(0_u32, |total, m| total.saturating_add(rank_power(m.rank)))
}

/// Check whether `member` can be promoted given the player's resources.
///
/// Returns the target rank's table row on success.
pub const fn check_promotion(
    member: &Member,
    resources: &Resources,
) -> Result<RankSpec, RejectionReason> {
    let Some(next) = member.rank.next() else {
        return Err(RejectionReason::RankAtMaximum);
    };
    let spec = rank_spec(next);
    if member.xp < spec.min_xp {
        return Err(RejectionReason::RequirementsNotMet);
    }
    if resources.cash < spec.promote_cost.cash || resources.respect < spec.promote_cost.respect {
        return Err(RejectionReason::InsufficientFunds);
    }
    Ok(spec)
}

/// Resource delta paying a promotion cost.
pub const fn promotion_delta(cost: PromoteCost) -> Resources {
    Resources::new(cost.cash.saturating_neg(), 0, cost.respect.saturating_neg())
}
