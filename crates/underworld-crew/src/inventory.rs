//! Item counts held by the crew.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use underworld_types::ItemId;

/// Mapping from item id to quantity. Absent keys hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory(BTreeMap<ItemId, u32>);

impl Inventory {
    /// An empty inventory.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add one unit of `item`.
    pub fn add(&mut self, item: &ItemId) {
        let count = self.0.entry(item.clone()).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Units of `item` held.
    pub fn quantity(&self, item: &ItemId) -> u32 {
        self.0.get(item).copied().unwrap_or(0)
    }

    /// Whether at least one unit of `item` is held.
    pub fn has(&self, item: &ItemId) -> bool {
        self.quantity(item) > 0
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|&count| count == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate() {
        let mut inventory = Inventory::new();
        let gun = ItemId::from("arma-fogo");
        assert!(!inventory.has(&gun));
        assert!(inventory.is_empty());

        inventory.add(&gun);
        inventory.add(&gun);
        assert_eq!(inventory.quantity(&gun), 2);
        assert!(inventory.has(&gun));
        assert_eq!(inventory.quantity(&ItemId::from("colete")), 0);
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut inventory = Inventory::new();
        inventory.add(&ItemId::from("arma-fogo"));
        let json = serde_json::to_string(&inventory).ok();
        assert_eq!(json.as_deref(), Some(r#"{"arma-fogo":1}"#));
    }
}
