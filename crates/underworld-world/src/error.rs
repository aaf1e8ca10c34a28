//! Error types for the `underworld-world` crate.

use underworld_types::{CityId, CountryId, LocationPath, StateId};

/// Errors that can occur while building or querying the world map.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A neighborhood path does not resolve.
    #[error("neighborhood not found: {0}")]
    NeighborhoodNotFound(LocationPath),

    /// No neighborhood carries the given key.
    #[error("no neighborhood keyed {0}")]
    UnknownNeighborhood(String),

    /// A country was inserted twice.
    #[error("duplicate country id: {0}")]
    DuplicateCountry(CountryId),

    /// A state was inserted twice under the same country, or its country is missing.
    #[error("cannot add state {state} to country {country}")]
    InvalidState {
        /// Parent country.
        country: CountryId,
        /// Offending state.
        state: StateId,
    },

    /// A city was inserted twice under the same state, or its state is missing.
    #[error("cannot add city {city} to {country}/{state}")]
    InvalidCity {
        /// Parent country.
        country: CountryId,
        /// Parent state.
        state: StateId,
        /// Offending city.
        city: CityId,
    },

    /// A neighborhood was inserted twice, or its city is missing.
    #[error("cannot add neighborhood {0}")]
    InvalidNeighborhood(LocationPath),
}
