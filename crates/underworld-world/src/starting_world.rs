//! Default starting world map for the RPG variant.
//!
//! Two countries, four states, six cities and fourteen neighborhoods, each
//! run by a rival organization. Every neighborhood starts at
//! [`Presence::Inexistente`].

use underworld_types::{
    CityId, CountryId, DominantOrg, Neighborhood, NeighborhoodId, Presence,
    ResourceDelta, Resources, StateId,
};

use crate::error::WorldError;
use crate::world_map::WorldMap;

/// Base cash a dominated neighborhood yields per collection.
pub const DOMINATED_BASE_CASH: i64 = 15;

/// Extra cash per point of the former dominant organization's power.
pub const DOMINATED_CASH_PER_POWER: i64 = 2;

/// Helper to build a [`Neighborhood`] with no player presence.
fn hood(id: &str, name: &str, org: &str, power_level: u32, elite_count: u32) -> Neighborhood {
    Neighborhood {
        id: NeighborhoodId::from(id),
        name: name.to_string(),
        dominant_org: DominantOrg {
            name: org.to_string(),
            power_level,
            elite_count,
        },
        presence: Presence::Inexistente,
    }
}

/// Add a city and all of its neighborhoods.
fn city(
    map: &mut WorldMap,
    country: &CountryId,
    state: &StateId,
    (id, name): (&str, &str),
    hoods: Vec<Neighborhood>,
) -> Result<CityId, WorldError> {
    let city_id = map.add_city(country, state, id, name)?;
    for neighborhood in hoods {
        map.add_neighborhood(country, state, &city_id, neighborhood)?;
    }
    Ok(city_id)
}

/// Build the starting world map.
///
/// # Errors
///
/// Returns a [`WorldError`] if the seed data contains duplicate keys.
pub fn create_starting_world() -> Result<WorldMap, WorldError> {
    let mut map = WorldMap::new();

    // --- Brasil ---
    let br = map.add_country("brasil", "Brasil")?;

    let sp = map.add_state(&br, "sao-paulo", "São Paulo")?;
    city(
        &mut map,
        &br,
        &sp,
        ("sao-paulo", "São Paulo"),
        vec![
            hood("bras", "Brás", "Irmandade do Brás", 6, 1),
            hood("capao-redondo", "Capão Redondo", "Quebrada Sul", 12, 2),
            hood("paraisopolis", "Paraisópolis", "Comando Paraíso", 18, 3),
        ],
    )?;
    city(
        &mut map,
        &br,
        &sp,
        ("santos", "Santos"),
        vec![
            hood("porto", "Porto de Santos", "Sindicato do Cais", 20, 3),
            hood("gonzaga", "Gonzaga", "Família Gonzaga", 8, 1),
        ],
    )?;

    let rj = map.add_state(&br, "rio-de-janeiro", "Rio de Janeiro")?;
    city(
        &mut map,
        &br,
        &rj,
        ("rio", "Rio de Janeiro"),
        vec![
            hood("lapa", "Lapa", "Malandros da Lapa", 5, 0),
            hood("rocinha", "Rocinha", "Terceiro Morro", 25, 4),
            hood("complexo-alemao", "Complexo do Alemão", "Frente Norte", 30, 5),
        ],
    )?;
    city(
        &mut map,
        &br,
        &rj,
        ("niteroi", "Niterói"),
        vec![hood("icarai", "Icaraí", "Clube da Orla", 7, 1)],
    )?;

    let mg = map.add_state(&br, "minas-gerais", "Minas Gerais")?;
    city(
        &mut map,
        &br,
        &mg,
        ("belo-horizonte", "Belo Horizonte"),
        vec![
            hood("savassi", "Savassi", "Liga Mineira", 10, 1),
            hood("pampulha", "Pampulha", "Bando da Lagoa", 9, 1),
        ],
    )?;

    // --- Colômbia ---
    let co = map.add_country("colombia", "Colômbia")?;
    let an = map.add_state(&co, "antioquia", "Antioquia")?;
    city(
        &mut map,
        &co,
        &an,
        ("medellin", "Medellín"),
        vec![
            hood("comuna-13", "Comuna 13", "Oficina del Valle", 28, 4),
            hood("el-poblado", "El Poblado", "Cartel de las Palmas", 35, 6),
            hood("laureles", "Laureles", "Los Paisas", 14, 2),
        ],
    )?;

    Ok(map)
}

/// Income produced by one neighborhood given the player's presence there.
///
/// Only [`Presence::Dominado`] produces anything.
pub fn neighborhood_income(neighborhood: &Neighborhood) -> ResourceDelta {
    if neighborhood.presence != Presence::Dominado {
        return Resources::ZERO;
    }
    let power = i64::from(neighborhood.dominant_org.power_level);
    let cash = DOMINATED_BASE_CASH.saturating_add(DOMINATED_CASH_PER_POWER.saturating_mul(power));
    Resources::new(cash, 1, 1)
}

/// Sum of [`neighborhood_income`] over the whole map.
pub fn calculate_territory_income(map: &WorldMap) -> ResourceDelta {
    map.neighborhoods()
        .map(|(_, neighborhood)| neighborhood_income(neighborhood))
        .fold(Resources::ZERO, Resources::plus)
}
