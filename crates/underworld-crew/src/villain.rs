//! Villain lieutenant generation.
//!
//! A villain is drawn uniformly from fixed role, first-name, last-name, and
//! rarity tables. The role decides the buff.

use rust_decimal::Decimal;
use tracing::debug;
use underworld_types::{Buff, BuffType, Rarity, Villain, VillainId};

use crate::dice::RollSource;

/// Number of lieutenants generated for a new raid game.
pub const STARTING_VILLAINS: usize = 4;

/// A role title and the buff it grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VillainRole {
    /// Role title.
    pub title: &'static str,
    /// Buff kind.
    pub buff_type: BuffType,
    /// Buff magnitude in hundredths (20 = 0.20).
    pub value_pct: i64,
    /// Player-facing description.
    pub description: &'static str,
}

impl VillainRole {
    /// The buff this role grants.
    pub fn buff(&self) -> Buff {
        Buff {
            buff_type: self.buff_type,
            value: Decimal::new(self.value_pct, 2),
            description: self.description.to_string(),
        }
    }
}

/// Role table.
pub const VILLAIN_ROLES: [VillainRole; 4] = [
    VillainRole {
        title: "Contador",
        buff_type: BuffType::Profit,
        value_pct: 20,
        description: "Aumenta o lucro dos negócios em 20%.",
    },
    VillainRole {
        title: "Psicopata",
        buff_type: BuffType::Attack,
        value_pct: 25,
        description: "Aumenta a força de ataque em 25%.",
    },
    VillainRole {
        title: "Diplomata",
        buff_type: BuffType::Influence,
        value_pct: 15,
        description: "Melhora ganhos de influência política em 15%.",
    },
    VillainRole {
        title: "Sabotador",
        buff_type: BuffType::Defense,
        value_pct: 20,
        description: "Reduz o poder defensivo rival em 20%.",
    },
];

/// First names.
pub const FIRST_NAMES: [&str; 6] = ["Luca", "Valentina", "Sergio", "Isabella", "Rafael", "Bianca"];

/// Last names.
pub const LAST_NAMES: [&str; 6] = ["Moretti", "Santoro", "Rossi", "Costa", "Bianchi", "Ferraz"];

fn pick_from<'a, T>(table: &'a [T], rolls: &mut impl RollSource) -> Option<&'a T> {
    table.get(rolls.pick(table.len()))
}

/// Generate one villain.
///
/// Draw order: role, first name, last name, rarity.
pub fn create_villain(rolls: &mut impl RollSource) -> Villain {
    let role = pick_from(&VILLAIN_ROLES, rolls).copied().unwrap_or(VILLAIN_ROLES[0]);
    let first = pick_from(&FIRST_NAMES, rolls).copied().unwrap_or_default();
    let last = pick_from(&LAST_NAMES, rolls).copied().unwrap_or_default();
    let rarity = pick_from(&Rarity::ALL, rolls)
        .copied()
        .unwrap_or(Rarity::Comum);

    let villain = Villain {
        id: VillainId::new(),
        name: format!("{first} {last}"),
        rarity,
        role: role.title.to_string(),
        buff: role.buff(),
    };
    debug!(
        villain = %villain.name,
        role = %villain.role,
        rarity = villain.rarity.label(),
        "Villain generated"
    );
    villain
}

/// Generate `count` villains.
pub fn create_villains(count: usize, rolls: &mut impl RollSource) -> Vec<Villain> {
    (0..count).map(|_| create_villain(rolls)).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::dice::{RngRolls, ScriptedRolls};

    #[test]
    fn scripted_picks_select_table_rows() {
        let mut rolls = ScriptedRolls::default().with_picks([1, 4, 0, 3]);
        let villain = create_villain(&mut rolls);
        assert_eq!(villain.role, "Psicopata");
        assert_eq!(villain.name, "Rafael Moretti");
        assert_eq!(villain.rarity, Rarity::Lendario);
        assert_eq!(villain.buff.buff_type, BuffType::Attack);
        assert_eq!(villain.buff.value, dec!(0.25));
    }

    #[test]
    fn random_villains_come_from_the_tables() {
        let mut rolls = RngRolls::new(SmallRng::seed_from_u64(42));
        let villains = create_villains(STARTING_VILLAINS, &mut rolls);
        assert_eq!(villains.len(), STARTING_VILLAINS);
        for villain in &villains {
            assert!(VILLAIN_ROLES.iter().any(|r| r.title == villain.role));
            assert!(FIRST_NAMES.iter().any(|n| villain.name.starts_with(n)));
            assert!(LAST_NAMES.iter().any(|n| villain.name.ends_with(n)));
        }
    }

    #[test]
    fn villains_get_distinct_ids() {
        let mut rolls = ScriptedRolls::default();
        let villains = create_villains(2, &mut rolls);
        assert_ne!(
            villains.first().map(|v| v.id),
            villains.get(1).map(|v| v.id)
        );
    }
}
