//! Black-market catalog and purchase checks.

use std::sync::LazyLock;

use underworld_types::{BlackMarketItem, ItemId, RejectionReason, Resources};

static BLACK_MARKET: LazyLock<Vec<BlackMarketItem>> = LazyLock::new(|| {
    vec![
        item("arma-fogo", "Arma de Fogo", 120, Resources::ZERO),
        item("colete", "Colete à Prova de Balas", 250, Resources::new(0, 0, 2)),
        item("kit-hacker", "Kit Hacker", 450, Resources::new(0, 3, 0)),
        item("carro-fuga", "Carro de Fuga", 600, Resources::new(0, 1, 0)),
        item("explosivos", "Explosivos", 900, Resources::new(0, 0, 5)),
    ]
});

fn item(id: &str, name: &str, price: i64, effects: Resources) -> BlackMarketItem {
    BlackMarketItem {
        id: ItemId::from(id),
        name: name.to_string(),
        price,
        effects,
    }
}

/// The static black-market catalog.
pub fn black_market() -> &'static [BlackMarketItem] {
    &BLACK_MARKET
}

/// Look up a catalog item.
pub fn find_item(id: &ItemId) -> Option<&'static BlackMarketItem> {
    black_market().iter().find(|i| &i.id == id)
}

/// Validate that `resources` can pay for `item`.
pub const fn check_purchase(
    item: &BlackMarketItem,
    resources: &Resources,
) -> Result<(), RejectionReason> {
    if resources.cash < item.price {
        return Err(RejectionReason::InsufficientFunds);
    }
    Ok(())
}

/// Net resource change of buying `item`: the price plus its side effects.
pub const fn purchase_delta(item: &BlackMarketItem) -> Resources {
    Resources::new(item.price.saturating_neg(), 0, 0).plus(item.effects)
}
