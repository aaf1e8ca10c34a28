//! Core entity structs for both game variants.
//!
//! Every struct here is a plain snapshot value. Reducers clone and replace
//! them wholesale; nothing is shared or mutated outside a transition.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{BuffType, EntryKind, Presence, Rank, Rarity, TroopType};
use crate::ids::{
    BusinessId, CityId, CountryId, CrimeId, ItemId, MemberId, NeighborhoodId, StateId,
    TerritoryId, TroopId, VillainId,
};

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The three player resources.
///
/// No floor is enforced: values may go negative. All accumulation is
/// additive and saturates at the `i64` bounds instead of overflowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Resources {
    /// Money on hand.
    pub cash: i64,
    /// Political influence.
    pub influence: i64,
    /// Street respect.
    pub respect: i64,
}

/// A change to apply to [`Resources`]; same shape, signed components.
pub type ResourceDelta = Resources;

impl Resources {
    /// All components zero.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Build a resource triple.
    pub const fn new(cash: i64, influence: i64, respect: i64) -> Self {
        Self {
            cash,
            influence,
            respect,
        }
    }

    /// Component-wise sum, saturating at the integer bounds.
    #[must_use]
    pub const fn plus(self, delta: ResourceDelta) -> Self {
        Self {
            cash: self.cash.saturating_add(delta.cash),
            influence: self.influence.saturating_add(delta.influence),
            respect: self.respect.saturating_add(delta.respect),
        }
    }

    /// Whether every component is zero.
    pub const fn is_zero(self) -> bool {
        self.cash == 0 && self.influence == 0 && self.respect == 0
    }
}

// ---------------------------------------------------------------------------
// Raid variant catalog
// ---------------------------------------------------------------------------

/// A business that produces passive income in the territories it is linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Business {
    /// Catalog key.
    pub id: BusinessId,
    /// Display name.
    pub name: String,
    /// Income produced per tick for each territory that hosts it.
    pub income: Resources,
    /// How much police attention the business draws.
    pub heat: u32,
}

/// A troop type available for raids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Troop {
    /// Catalog key.
    pub id: TroopId,
    /// Display name.
    pub name: String,
    /// Unit class.
    pub troop_type: TroopType,
    /// Flavor text.
    pub description: String,
    /// Attack strength.
    pub attack: u32,
    /// Defense strength.
    pub defense: u32,
    /// Cash upkeep per unit.
    pub upkeep: u32,
}

/// A raidable territory with its resident businesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Territory {
    /// Catalog key.
    pub id: TerritoryId,
    /// Display name.
    pub name: String,
    /// Defensive strength a raid has to overcome.
    pub defense: u32,
    /// Businesses operating here. Unknown keys contribute no income.
    pub business_ids: Vec<BusinessId>,
}

/// A villain lieutenant's passive modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Buff {
    /// What the buff modifies.
    pub buff_type: BuffType,
    /// Fractional magnitude, e.g. `0.25` for +25%.
    #[ts(as = "String")]
    pub value: Decimal,
    /// Player-facing description.
    pub description: String,
}

/// A villain lieutenant generated at game start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Villain {
    /// Unique identifier.
    pub id: VillainId,
    /// Full name.
    pub name: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Role title (e.g. "Psicopata").
    pub role: String,
    /// The buff granted by the role.
    pub buff: Buff,
}

/// Currently selected raid (troop, lieutenant, and target).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActiveRaid {
    /// Troop sent in.
    pub troop_id: TroopId,
    /// Lieutenant leading the raid, if any.
    pub villain_id: Option<VillainId>,
    /// Territory under attack.
    pub target_territory_id: TerritoryId,
}

/// Result of a single raid roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RaidOutcome {
    /// Probability of winning, clamped to `[0.1, 0.9]`.
    #[ts(as = "String")]
    pub win_chance: Decimal,
    /// Whether the raid succeeded (`roll <= win_chance`).
    pub victory: bool,
    /// The uniform draw in `[0, 1)` that decided the raid.
    #[ts(as = "String")]
    pub roll: Decimal,
}

// ---------------------------------------------------------------------------
// RPG variant: crew
// ---------------------------------------------------------------------------

/// A member of the player's crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Member {
    /// Unique identifier.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Current rank; changes only through promotion.
    pub rank: Rank,
    /// Accumulated experience.
    pub xp: u32,
    /// Experience level, normally `1 + xp / 50`.
    pub level: u32,
}

/// Cost to promote a member into a rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PromoteCost {
    /// Cash required.
    pub cash: i64,
    /// Respect required.
    pub respect: i64,
}

/// One row of the rank progression table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RankSpec {
    /// The rank described.
    pub rank: Rank,
    /// Minimum xp to be promoted into this rank.
    pub min_xp: u32,
    /// Cost of being promoted into this rank.
    pub promote_cost: PromoteCost,
    /// Combat weight of a member holding this rank.
    pub power: u32,
}

/// Preconditions a crime imposes on inventory and roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CrimeRequirements {
    /// Items that must be held (quantity > 0). They are not consumed.
    pub item_ids: Vec<ItemId>,
    /// For each rank, how many members at or above it are needed.
    pub min_rank_counts: BTreeMap<Rank, u32>,
}

/// What a successful crime pays out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CrimeRewards {
    /// Cash gained.
    pub cash: i64,
    /// Respect gained.
    pub respect: i64,
    /// Experience granted to the crew leader.
    pub xp: u32,
}

/// A crime the crew can commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Crime {
    /// Catalog key.
    pub id: CrimeId,
    /// Display name.
    pub name: String,
    /// Difficulty tier, 1 being the easiest.
    pub tier: u32,
    /// Eligibility requirements.
    pub requirements: CrimeRequirements,
    /// Payout on success.
    pub rewards: CrimeRewards,
    /// Probability of failure in `[0, 1]`.
    #[ts(as = "String")]
    pub risk: Decimal,
}

/// An item sold on the black market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BlackMarketItem {
    /// Catalog key.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Cash price.
    pub price: i64,
    /// Extra resource deltas applied on purchase.
    pub effects: ResourceDelta,
}

/// Entry fee of a recruit candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EntryCost {
    /// Resource the fee is paid in.
    pub kind: EntryKind,
    /// Amount.
    pub value: i64,
}

/// A candidate in the recruitment pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RecruitCandidate {
    /// Identifier the member keeps after joining.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// Rank on arrival.
    pub rank: Rank,
    /// Experience on arrival.
    pub xp: u32,
    /// Level on arrival.
    pub level: u32,
    /// Entry fee.
    pub entry: EntryCost,
}

impl RecruitCandidate {
    /// The member record this candidate becomes once recruited.
    pub fn to_member(&self) -> Member {
        Member {
            id: self.id,
            name: self.name.clone(),
            rank: self.rank,
            xp: self.xp,
            level: self.level,
        }
    }
}

// ---------------------------------------------------------------------------
// RPG variant: world map
// ---------------------------------------------------------------------------

/// The organization currently running a neighborhood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DominantOrg {
    /// Organization name.
    pub name: String,
    /// Total fighting strength.
    pub power_level: u32,
    /// Number of elite enforcers.
    pub elite_count: u32,
}

/// A neighborhood, the leaf of the world map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Neighborhood {
    /// Key, unique within its city.
    pub id: NeighborhoodId,
    /// Display name.
    pub name: String,
    /// Who runs the neighborhood.
    pub dominant_org: DominantOrg,
    /// The player's control; the only field that changes during play.
    pub presence: Presence,
}

/// Full path to a neighborhood: country, state, city, neighborhood.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LocationPath {
    /// Country key.
    pub country: CountryId,
    /// State key.
    pub state: StateId,
    /// City key.
    pub city: CityId,
    /// Neighborhood key.
    pub neighborhood: NeighborhoodId,
}

impl LocationPath {
    /// Build a path from plain string keys.
    pub fn new(country: &str, state: &str, city: &str, neighborhood: &str) -> Self {
        Self {
            country: CountryId::from(country),
            state: StateId::from(state),
            city: CityId::from(city),
            neighborhood: NeighborhoodId::from(neighborhood),
        }
    }
}

impl core::fmt::Display for LocationPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.country, self.state, self.city, self.neighborhood
        )
    }
}

/// A named node above the neighborhood level (country, state, or city).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region<K> {
    /// Key, unique among siblings.
    pub id: K,
    /// Display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn resources_add_component_wise() {
        let base = Resources::new(100, 5, -3);
        let next = base.plus(Resources::new(-150, 1, 4));
        assert_eq!(next, Resources::new(-50, 6, 1));
    }

    #[test]
    fn resources_saturate_instead_of_overflowing() {
        let base = Resources::new(i64::MAX, 0, 0);
        assert_eq!(base.plus(Resources::new(1, 0, 0)).cash, i64::MAX);
    }

    #[test]
    fn zero_is_zero() {
        assert!(Resources::ZERO.is_zero());
        assert!(!Resources::new(0, 0, 1).is_zero());
    }

    #[test]
    fn candidate_becomes_member_with_same_id() {
        let candidate = RecruitCandidate {
            id: MemberId::new(),
            name: String::from("Rita Sombra"),
            rank: Rank::Soldado,
            xp: 150,
            level: 4,
            entry: EntryCost {
                kind: EntryKind::Respect,
                value: 10,
            },
        };
        let member = candidate.to_member();
        assert_eq!(member.id, candidate.id);
        assert_eq!(member.rank, Rank::Soldado);
        assert_eq!(member.level, 4);
    }

    #[test]
    fn location_path_displays_as_slash_path() {
        let path = LocationPath::new("br", "rj", "rio", "lapa");
        assert_eq!(path.to_string(), "br/rj/rio/lapa");
    }

    #[test]
    fn crime_round_trips_through_json() {
        let crime = Crime {
            id: CrimeId::from("furto"),
            name: String::from("Furto de Loja"),
            tier: 1,
            requirements: CrimeRequirements::default(),
            rewards: CrimeRewards {
                cash: 80,
                respect: 1,
                xp: 15,
            },
            risk: dec!(0.15),
        };
        let json = serde_json::to_string(&crime).unwrap_or_default();
        let back: Option<Crime> = serde_json::from_str(&json).ok();
        assert_eq!(back, Some(crime));
    }
}
