//! Identifier types.
//!
//! Two families of identifiers exist:
//!
//! - Runtime entities created while a game runs (villains, crew members)
//!   get a [`Uuid`]-backed newtype via `define_id!`.
//! - Static catalog entries (businesses, crimes, neighborhoods, ...) are
//!   addressed by a short human-readable key such as `"arma-fogo"` via
//!   `define_key!`. Keys are what the presentation layer sends back in
//!   actions, so they stay stable across runs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

/// Generates a newtype wrapper around a catalog key string.
macro_rules! define_key {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Create a key from anything string-like.
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Borrow the key as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(String::from(key))
            }
        }
    };
}

define_id! {
    /// Unique identifier for a generated villain lieutenant.
    VillainId
}

define_id! {
    /// Unique identifier for a crew member or recruit candidate.
    ///
    /// A candidate keeps its identifier when it joins the roster.
    MemberId
}

define_key! {
    /// Catalog key of a business (e.g. `"casino"`).
    BusinessId
}

define_key! {
    /// Catalog key of a troop type (e.g. `"capangas"`).
    TroopId
}

define_key! {
    /// Catalog key of a raid territory (e.g. `"central"`).
    TerritoryId
}

define_key! {
    /// Catalog key of a crime (e.g. `"assalto"`).
    CrimeId
}

define_key! {
    /// Catalog key of a black-market item (e.g. `"arma-fogo"`).
    ItemId
}

define_key! {
    /// Key of a country in the world map.
    CountryId
}

define_key! {
    /// Key of a state within a country.
    StateId
}

define_key! {
    /// Key of a city within a state.
    CityId
}

define_key! {
    /// Key of a neighborhood within a city.
    NeighborhoodId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let villain = VillainId::new();
        let member = MemberId::new();
        assert_ne!(villain.into_inner(), Uuid::nil());
        assert_ne!(member.into_inner(), Uuid::nil());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(MemberId::new(), MemberId::new());
    }

    #[test]
    fn keys_serialize_as_plain_strings() {
        let key = ItemId::from("arma-fogo");
        let json = serde_json::to_string(&key).unwrap_or_default();
        assert_eq!(json, "\"arma-fogo\"");
        assert_eq!(key.as_str(), "arma-fogo");
        assert_eq!(key.to_string(), "arma-fogo");
    }

    #[test]
    fn keys_order_lexicographically() {
        assert!(CrimeId::from("assalto") < CrimeId::from("furto"));
    }
}
