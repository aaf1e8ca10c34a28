//! Member construction and experience.

use underworld_types::{Member, MemberId, Rank};

use crate::rank::level_for_xp;

/// Display name of the player character.
pub const PLAYER_NAME: &str = "O Chefe";

/// Experience fixed on absorbed elites.
pub const ABSORBED_ELITE_XP: u32 = 400;

/// Level fixed on absorbed elites. Set directly, not derived from xp.
pub const ABSORBED_ELITE_LEVEL: u32 = 8;

/// The player character every RPG roster starts with.
pub fn create_player() -> Member {
    Member {
        id: MemberId::new(),
        name: PLAYER_NAME.to_string(),
        rank: Rank::Recruta,
        xp: 0,
        level: level_for_xp(0),
    }
}

/// An enemy elite absorbed into the crew after a takeover.
pub fn absorbed_elite(org_name: &str, ordinal: u32) -> Member {
    Member {
        id: MemberId::new(),
        name: format!("Elite de {org_name} #{ordinal}"),
        rank: Rank::Elite,
        xp: ABSORBED_ELITE_XP,
        level: ABSORBED_ELITE_LEVEL,
    }
}

/// Add experience and recompute the level. Rank is untouched.
pub fn grant_xp(member: &mut Member, xp: u32) {
    member.xp = member.xp.saturating_add(xp);
    member.level = level_for_xp(member.xp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_starts_at_the_bottom() {
        let player = create_player();
        assert_eq!(player.name, PLAYER_NAME);
        assert_eq!(player.rank, Rank::Recruta);
        assert_eq!(player.level, 1);
    }

    #[test]
    fn absorbed_elites_are_level_eight() {
        let elite = absorbed_elite("Comando Vermelho", 2);
        assert_eq!(elite.rank, Rank::Elite);
        assert_eq!(elite.xp, ABSORBED_ELITE_XP);
        assert_eq!(elite.level, 8);
    }

    #[test]
    fn xp_crosses_level_boundaries() {
        let mut player = create_player();
        grant_xp(&mut player, 49);
        assert_eq!(player.level, 1);
        grant_xp(&mut player, 1);
        assert_eq!(player.level, 2);
        assert_eq!(player.rank, Rank::Recruta);
    }
}
