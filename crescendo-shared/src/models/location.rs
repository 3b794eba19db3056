/// Country/state reference data shapes
///
/// Consumed read-only from the location reference API and cached by the
/// client's location store for the life of the process.

use serde::{Deserialize, Serialize};

/// A country entry from the reference API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Server-assigned opaque id
    pub id: String,

    /// Display name
    pub name: String,
}

/// A state/province entry for a selected country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateProvince {
    /// Server-assigned opaque id
    pub id: String,

    /// Display name
    pub name: String,
}
