//! Troop catalog for raids.

use std::sync::LazyLock;

use underworld_types::{Troop, TroopId, TroopType};

static TROOPS: LazyLock<Vec<Troop>> = LazyLock::new(|| {
    vec![
        troop(
            "capangas",
            "Capangas",
            TroopType::Basico,
            "Carne para canhão e ocupação de território.",
            (8, 5, 5),
        ),
        troop(
            "segurancas",
            "Seguranças",
            TroopType::Especialista,
            "Protegem negócios e resistem a raids.",
            (6, 10, 8),
        ),
        troop(
            "hackers",
            "Hackers",
            TroopType::Especialista,
            "Infiltram sistemas e aumentam influência.",
            (7, 6, 9),
        ),
        troop(
            "batedores",
            "Batedores",
            TroopType::Especialista,
            "Reconhecimento e bônus de ataque em raids.",
            (9, 4, 6),
        ),
    ]
});

/// Helper to build a [`Troop`] from `(attack, defense, upkeep)`.
fn troop(
    id: &str,
    name: &str,
    troop_type: TroopType,
    description: &str,
    (attack, defense, upkeep): (u32, u32, u32),
) -> Troop {
    Troop {
        id: TroopId::from(id),
        name: name.to_string(),
        troop_type,
        description: description.to_string(),
        attack,
        defense,
        upkeep,
    }
}

/// The static troop catalog.
pub fn troops() -> &'static [Troop] {
    &TROOPS
}

/// Look up a troop in a list.
pub fn find_troop<'a>(list: &'a [Troop], id: &TroopId) -> Option<&'a Troop> {
    list.iter().find(|t| &t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_one_basic_unit() {
        assert_eq!(troops().len(), 4);
        assert_eq!(
            troops()
                .iter()
                .filter(|t| t.troop_type == TroopType::Basico)
                .count(),
            1
        );
    }

    #[test]
    fn batedores_hit_hardest() {
        let best = troops().iter().max_by_key(|t| t.attack).map(|t| t.id.as_str());
        assert_eq!(best, Some("batedores"));
        assert!(find_troop(troops(), &TroopId::from("tanques")).is_none());
    }
}
