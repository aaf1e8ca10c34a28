//! Enumeration types for the Underworld simulator.
//!
//! The ordinal enums ([`Rank`], [`Presence`]) derive `Ord` in declaration
//! order; game rules compare them directly, so variant order is part of the
//! rules and must not be rearranged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Villains
// ---------------------------------------------------------------------------

/// What a villain lieutenant's buff modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum BuffType {
    /// Business profit.
    Profit,
    /// Troop attack strength during raids.
    Attack,
    /// Political influence gains.
    Influence,
    /// Reduces the defending territory's strength during raids.
    Defense,
}

/// Rarity tier of a generated villain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Rarity {
    /// Common.
    Comum,
    /// Rare.
    Raro,
    /// Epic.
    #[serde(rename = "Épico")]
    Epico,
    /// Legendary.
    #[serde(rename = "Lendário")]
    Lendario,
}

impl Rarity {
    /// Every rarity, in ascending order.
    pub const ALL: [Self; 4] = [Self::Comum, Self::Raro, Self::Epico, Self::Lendario];

    /// Display label as shown to the player.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Comum => "Comum",
            Self::Raro => "Raro",
            Self::Epico => "Épico",
            Self::Lendario => "Lendário",
        }
    }
}

/// Broad class of a troop unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum TroopType {
    /// Basic muscle.
    #[serde(rename = "Básico")]
    Basico,
    /// Specialist unit.
    Especialista,
}

// ---------------------------------------------------------------------------
// Crew
// ---------------------------------------------------------------------------

/// Crew hierarchy rank, totally ordered from lowest to highest.
///
/// `Recruta < Soldado < General < Elite`. `Elite` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Rank {
    /// Fresh recruit.
    Recruta,
    /// Proven soldier.
    Soldado,
    /// Commands soldiers.
    General,
    /// Top tier, cannot be promoted further.
    Elite,
}

impl Rank {
    /// Every rank, in ascending order.
    pub const ALL: [Self; 4] = [Self::Recruta, Self::Soldado, Self::General, Self::Elite];

    /// The rank directly above this one, or `None` for [`Rank::Elite`].
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Recruta => Some(Self::Soldado),
            Self::Soldado => Some(Self::General),
            Self::General => Some(Self::Elite),
            Self::Elite => None,
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recruta => "Recruta",
            Self::Soldado => "Soldado",
            Self::General => "General",
            Self::Elite => "Elite",
        }
    }
}

/// Which resource a recruit candidate's entry fee is paid in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Paid in cash.
    Cash,
    /// Paid in respect.
    Respect,
}

// ---------------------------------------------------------------------------
// Territory
// ---------------------------------------------------------------------------

/// Territorial-control state of a neighborhood.
///
/// Only ever advances: `Inexistente < Infiltrado < Disputado < Dominado`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub enum Presence {
    /// No presence at all.
    #[default]
    Inexistente,
    /// A foothold has been established.
    Infiltrado,
    /// Openly contesting the dominant organization.
    Disputado,
    /// Fully controlled; produces territory income.
    Dominado,
}

impl Presence {
    /// The presence a successful takeover would move to.
    ///
    /// `Dominado` maps to itself.
    pub const fn advanced(self) -> Self {
        match self {
            Self::Inexistente => Self::Infiltrado,
            Self::Infiltrado => Self::Disputado,
            Self::Disputado | Self::Dominado => Self::Dominado,
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inexistente => "Inexistente",
            Self::Infiltrado => "Infiltrado",
            Self::Disputado => "Disputado",
            Self::Dominado => "Dominado",
        }
    }
}

// ---------------------------------------------------------------------------
// Presentation focus
// ---------------------------------------------------------------------------

/// Info panel currently expanded in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "snake_case")]
pub enum InfoPanel {
    /// Crime catalog.
    Crimes,
    /// Black market.
    BlackMarket,
    /// Recruitment pool.
    Recruitment,
    /// Rank progression table.
    Ranks,
    /// World map.
    WorldMap,
    /// Current roster.
    Roster,
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

/// Why a reducer refused to apply an action.
///
/// A rejected action leaves the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RejectionReason {
    /// Not enough cash or respect to pay the cost.
    InsufficientFunds,
    /// The referenced catalog entry, member, or location does not exist.
    UnknownId,
    /// Item, rank, or xp requirements are not satisfied.
    RequirementsNotMet,
    /// The member is already at the highest rank.
    RankAtMaximum,
    /// The recruit candidate is not in the pool.
    CandidateNotFound,
    /// The action has no meaning for this game variant or current state.
    NotApplicable,
}

impl core::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            Self::InsufficientFunds => "insufficient funds",
            Self::UnknownId => "unknown id",
            Self::RequirementsNotMet => "requirements not met",
            Self::RankAtMaximum => "rank at maximum",
            Self::CandidateNotFound => "candidate not found",
            Self::NotApplicable => "not applicable",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_order_is_total() {
        assert!(Rank::Recruta < Rank::Soldado);
        assert!(Rank::Soldado < Rank::General);
        assert!(Rank::General < Rank::Elite);
    }

    #[test]
    fn rank_next_stops_at_elite() {
        assert_eq!(Rank::Recruta.next(), Some(Rank::Soldado));
        assert_eq!(Rank::General.next(), Some(Rank::Elite));
        assert_eq!(Rank::Elite.next(), None);
    }

    #[test]
    fn presence_advances_and_saturates() {
        let mut presence = Presence::default();
        let mut trail = vec![presence];
        for _ in 0..5 {
            presence = presence.advanced();
            trail.push(presence);
        }
        assert!(trail.windows(2).all(|w| w.first() <= w.get(1)));
        assert_eq!(presence, Presence::Dominado);
    }

    #[test]
    fn rarity_serializes_with_accents() {
        let json = serde_json::to_string(&Rarity::Epico).unwrap_or_default();
        assert_eq!(json, "\"Épico\"");
        assert_eq!(Rarity::Lendario.label(), "Lendário");
    }

    #[test]
    fn buff_type_is_lowercase_on_the_wire() {
        let json = serde_json::to_string(&BuffType::Attack).unwrap_or_default();
        assert_eq!(json, "\"attack\"");
    }
}
