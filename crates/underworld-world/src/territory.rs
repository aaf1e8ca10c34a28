//! Raid-variant geography: the business catalog, the four raidable
//! territories, and passive income aggregation.
//!
//! Income per tick is the sum, over every territory, of the income of each
//! business linked to it. A business linked to two territories pays twice.
//! Keys that do not resolve to a business contribute nothing.

use std::sync::LazyLock;

use underworld_types::{Business, BusinessId, ResourceDelta, Resources, Territory, TerritoryId};

static BUSINESSES: LazyLock<Vec<Business>> = LazyLock::new(|| {
    vec![
        Business {
            id: BusinessId::from("casino"),
            name: String::from("Cassino Eclipse"),
            income: Resources::new(120, 0, 3),
            heat: 4,
        },
        Business {
            id: BusinessId::from("laundering"),
            name: String::from("Lavagem de Dinheiro"),
            income: Resources::new(80, 2, 0),
            heat: 2,
        },
        Business {
            id: BusinessId::from("intel"),
            name: String::from("Tráfico de Informação"),
            income: Resources::new(60, 3, 1),
            heat: 3,
        },
    ]
});

static TERRITORIES: LazyLock<Vec<Territory>> = LazyLock::new(|| {
    vec![
        territory("north", "Distrito Ártico", 22, &["casino", "intel"]),
        territory("central", "Cinturão Central", 18, &["laundering"]),
        territory("docks", "Docas Prismáticas", 26, &["intel", "laundering"]),
        territory("uptown", "Zona Alta", 30, &["casino"]),
    ]
});

fn territory(id: &str, name: &str, defense: u32, businesses: &[&str]) -> Territory {
    Territory {
        id: TerritoryId::from(id),
        name: String::from(name),
        defense,
        business_ids: businesses.iter().map(|b| BusinessId::from(*b)).collect(),
    }
}

/// The static business catalog.
pub fn businesses() -> &'static [Business] {
    &BUSINESSES
}

/// The static territory catalog.
pub fn territories() -> &'static [Territory] {
    &TERRITORIES
}

/// Look up a business in a catalog.
pub fn find_business<'a>(catalog: &'a [Business], id: &BusinessId) -> Option<&'a Business> {
    catalog.iter().find(|b| &b.id == id)
}

/// Look up a territory in a list.
pub fn find_territory<'a>(list: &'a [Territory], id: &TerritoryId) -> Option<&'a Territory> {
    list.iter().find(|t| &t.id == id)
}

/// Sum the income of every business linked to every territory, resolving
/// businesses against the static catalog.
pub fn calculate_passive_income(territories: &[Territory]) -> ResourceDelta {
    passive_income_with(territories, businesses())
}

/// Sum the income of every business linked to every territory, resolving
/// businesses against `catalog`.
pub fn passive_income_with(territories: &[Territory], catalog: &[Business]) -> ResourceDelta {
    territories
        .iter()
        .flat_map(|t| t.business_ids.iter())
        .filter_map(|id| find_business(catalog, id))
        .fold(Resources::ZERO, |total, business| total.plus(business.income))
}
