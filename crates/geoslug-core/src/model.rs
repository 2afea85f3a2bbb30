// crates/geoslug-core/src/model.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// A city entry in the registry.
///
/// The canonical Ukrainian name is the stable identity key; everything else
/// (Russian display name, Russian slug) is derived from it through the
/// cross-reference tables. Entries are defined once at load time and never
/// mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Canonical Ukrainian name, unique across the registry.
    #[serde(rename = "name")]
    pub name_ua: String,
    /// Precomputed Ukrainian URL slug, unique across the registry.
    #[serde(rename = "slug")]
    pub slug_ua: String,
    /// Canonical Ukrainian region name; must exist in the region registry.
    #[serde(rename = "region")]
    pub region_ua: String,
}

/// Registry entity kinds.
///
/// Cities and regions slug into separate URL namespaces, so collision
/// reports and CLI lookups carry the kind alongside the slug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    City,
    Region,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::City => "city",
            EntityKind::Region => "region",
        })
    }
}
