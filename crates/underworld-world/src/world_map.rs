//! World map for the RPG variant: Country → State → City → Neighborhood.
//!
//! Neighborhoods live in an arena keyed by their full [`LocationPath`], so
//! the single mutable field (`presence`) is addressable without walking or
//! rebuilding the tree. The hierarchy itself is a separate index: for every
//! parent, the ordered list of child keys. Iteration always follows
//! insertion order within each parent.

use std::collections::BTreeMap;

use serde::Serialize;
use underworld_types::{
    CityId, CountryId, LocationPath, Neighborhood, NeighborhoodId, Presence, Region, StateId,
};

use crate::error::WorldError;

type StateKey = (CountryId, StateId);
type CityKey = (CountryId, StateId, CityId);

/// The four-level world map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldMap {
    /// Countries in display order.
    countries: Vec<Region<CountryId>>,
    /// States per country, in display order.
    states: BTreeMap<CountryId, Vec<Region<StateId>>>,
    /// Cities per state, in display order.
    cities: BTreeMap<StateKey, Vec<Region<CityId>>>,
    /// Neighborhood keys per city, in display order.
    districts: BTreeMap<CityKey, Vec<NeighborhoodId>>,
    /// Neighborhood arena.
    neighborhoods: BTreeMap<LocationPath, Neighborhood>,
}

impl WorldMap {
    /// Create an empty world map.
    pub const fn new() -> Self {
        Self {
            countries: Vec::new(),
            states: BTreeMap::new(),
            cities: BTreeMap::new(),
            districts: BTreeMap::new(),
            neighborhoods: BTreeMap::new(),
        }
    }

    // -------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------

    /// Add a country.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateCountry`] if the key is taken.
    pub fn add_country(&mut self, id: &str, name: &str) -> Result<CountryId, WorldError> {
        let id = CountryId::from(id);
        if self.states.contains_key(&id) {
            return Err(WorldError::DuplicateCountry(id));
        }
        self.countries.push(Region {
            id: id.clone(),
            name: String::from(name),
        });
        self.states.insert(id.clone(), Vec::new());
        Ok(id)
    }

    /// Add a state under an existing country.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidState`] if the country is missing or the
    /// state key is already used in it.
    pub fn add_state(
        &mut self,
        country: &CountryId,
        id: &str,
        name: &str,
    ) -> Result<StateId, WorldError> {
        let id = StateId::from(id);
        let key = (country.clone(), id.clone());
        let Some(siblings) = self.states.get_mut(country) else {
            return Err(WorldError::InvalidState {
                country: country.clone(),
                state: id,
            });
        };
        if self.cities.contains_key(&key) {
            return Err(WorldError::InvalidState {
                country: country.clone(),
                state: id,
            });
        }
        siblings.push(Region {
            id: id.clone(),
            name: String::from(name),
        });
        self.cities.insert(key, Vec::new());
        Ok(id)
    }

    /// Add a city under an existing state.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidCity`] if the state is missing or the city
    /// key is already used in it.
    pub fn add_city(
        &mut self,
        country: &CountryId,
        state: &StateId,
        id: &str,
        name: &str,
    ) -> Result<CityId, WorldError> {
        let id = CityId::from(id);
        let parent = (country.clone(), state.clone());
        let key = (country.clone(), state.clone(), id.clone());
        let invalid = || WorldError::InvalidCity {
            country: country.clone(),
            state: state.clone(),
            city: id.clone(),
        };
        if self.districts.contains_key(&key) {
            return Err(invalid());
        }
        let Some(siblings) = self.cities.get_mut(&parent) else {
            return Err(invalid());
        };
        siblings.push(Region {
            id: id.clone(),
            name: String::from(name),
        });
        self.districts.insert(key, Vec::new());
        Ok(id)
    }

    /// Add a neighborhood under an existing city and return its full path.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidNeighborhood`] if the city is missing or
    /// the neighborhood key is already used in it.
    pub fn add_neighborhood(
        &mut self,
        country: &CountryId,
        state: &StateId,
        city: &CityId,
        neighborhood: Neighborhood,
    ) -> Result<LocationPath, WorldError> {
        let path = LocationPath {
            country: country.clone(),
            state: state.clone(),
            city: city.clone(),
            neighborhood: neighborhood.id.clone(),
        };
        if self.neighborhoods.contains_key(&path) {
            return Err(WorldError::InvalidNeighborhood(path));
        }
        let key = (country.clone(), state.clone(), city.clone());
        let Some(siblings) = self.districts.get_mut(&key) else {
            return Err(WorldError::InvalidNeighborhood(path));
        };
        siblings.push(neighborhood.id.clone());
        self.neighborhoods.insert(path.clone(), neighborhood);
        Ok(path)
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Resolve a neighborhood by its full path.
    pub fn get(&self, path: &LocationPath) -> Option<&Neighborhood> {
        self.neighborhoods.get(path)
    }

    /// Whether the path resolves to a neighborhood.
    pub fn contains(&self, path: &LocationPath) -> bool {
        self.neighborhoods.contains_key(path)
    }

    /// Number of neighborhoods across the whole map.
    pub fn neighborhood_count(&self) -> usize {
        self.neighborhoods.len()
    }

    /// Countries in display order.
    pub fn countries(&self) -> &[Region<CountryId>] {
        &self.countries
    }

    /// States of a country in display order (empty if unknown).
    pub fn states(&self, country: &CountryId) -> &[Region<StateId>] {
        self.states.get(country).map_or(&[], Vec::as_slice)
    }

    /// Cities of a state in display order (empty if unknown).
    pub fn cities(&self, country: &CountryId, state: &StateId) -> &[Region<CityId>] {
        self.cities
            .get(&(country.clone(), state.clone()))
            .map_or(&[], Vec::as_slice)
    }

    /// Every neighborhood path, walking the hierarchy in display order.
    pub fn paths(&self) -> Vec<LocationPath> {
        let mut paths = Vec::with_capacity(self.neighborhoods.len());
        for country in &self.countries {
            for state in self.states(&country.id) {
                for city in self.cities(&country.id, &state.id) {
                    let key = (country.id.clone(), state.id.clone(), city.id.clone());
                    for neighborhood in self.districts.get(&key).into_iter().flatten() {
                        paths.push(LocationPath {
                            country: country.id.clone(),
                            state: state.id.clone(),
                            city: city.id.clone(),
                            neighborhood: neighborhood.clone(),
                        });
                    }
                }
            }
        }
        paths
    }

    /// The first neighborhood in display order.
    pub fn first_path(&self) -> Option<LocationPath> {
        self.paths().into_iter().next()
    }

    /// Path of the first neighborhood, in display order, keyed `neighborhood`.
    pub fn find_path(&self, neighborhood: &str) -> Option<LocationPath> {
        self.paths()
            .into_iter()
            .find(|path| path.neighborhood.as_str() == neighborhood)
    }

    /// Iterate over every neighborhood (arena order, not display order).
    pub fn neighborhoods(&self) -> impl Iterator<Item = (&LocationPath, &Neighborhood)> {
        self.neighborhoods.iter()
    }

    // -------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------

    /// Move a neighborhood's presence forward to `presence`.
    ///
    /// Presence never regresses: a target at or below the current value is
    /// ignored. Returns the presence after the call.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::NeighborhoodNotFound`] if the path does not resolve.
    pub fn advance_presence(
        &mut self,
        path: &LocationPath,
        presence: Presence,
    ) -> Result<Presence, WorldError> {
        let neighborhood = self
            .neighborhoods
            .get_mut(path)
            .ok_or_else(|| WorldError::NeighborhoodNotFound(path.clone()))?;
        if presence > neighborhood.presence {
            neighborhood.presence = presence;
        }
        Ok(neighborhood.presence)
    }

    // -------------------------------------------------------------------
    // Views
    // -------------------------------------------------------------------

    /// Nested view of the map, for serialization and display.
    pub fn to_tree(&self) -> Vec<CountryNode> {
        self.countries
            .iter()
            .map(|country| CountryNode {
                id: country.id.clone(),
                name: country.name.clone(),
                states: self
                    .states(&country.id)
                    .iter()
                    .map(|state| StateNode {
                        id: state.id.clone(),
                        name: state.name.clone(),
                        cities: self
                            .cities(&country.id, &state.id)
                            .iter()
                            .map(|city| CityNode {
                                id: city.id.clone(),
                                name: city.name.clone(),
                                neighborhoods: self.city_neighborhoods(
                                    &country.id,
                                    &state.id,
                                    &city.id,
                                ),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn city_neighborhoods(
        &self,
        country: &CountryId,
        state: &StateId,
        city: &CityId,
    ) -> Vec<Neighborhood> {
        let key = (country.clone(), state.clone(), city.clone());
        self.districts
            .get(&key)
            .into_iter()
            .flatten()
            .filter_map(|id| {
                self.neighborhoods.get(&LocationPath {
                    country: country.clone(),
                    state: state.clone(),
                    city: city.clone(),
                    neighborhood: id.clone(),
                })
            })
            .cloned()
            .collect()
    }
}

/// A country in the nested view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryNode {
    /// Country key.
    pub id: CountryId,
    /// Display name.
    pub name: String,
    /// States in display order.
    pub states: Vec<StateNode>,
}

/// A state in the nested view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateNode {
    /// State key.
    pub id: StateId,
    /// Display name.
    pub name: String,
    /// Cities in display order.
    pub cities: Vec<CityNode>,
}

/// A city in the nested view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityNode {
    /// City key.
    pub id: CityId,
    /// Display name.
    pub name: String,
    /// Neighborhoods in display order.
    pub neighborhoods: Vec<Neighborhood>,
}
