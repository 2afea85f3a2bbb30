// crates/geoslug-core/src/error.rs

use thiserror::Error;

/// Errors produced while loading or validating a registry dataset.
///
/// Slug resolution itself never fails: a slug that matches nothing is an
/// `Option::None` at the call site, not an error. The variants here surface
/// only from the loader and from [`crate::GeoRegistry::validate`].
#[derive(Debug, Error)]
pub enum GeoSlugError {
    /// The dataset file could not be opened.
    #[error("dataset not found at {0}")]
    NotFound(String),

    /// The dataset was readable but not valid JSON of the expected shape.
    #[error("invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A city names a region that is missing from the region registry.
    #[error("city {city:?} references unknown region {region:?}")]
    UnknownRegion { city: String, region: String },

    /// Two cities carry the same precomputed Ukrainian slug.
    #[error("cities {first:?} and {second:?} share the slug {slug:?}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    /// The same canonical city name appears twice.
    #[error("duplicate city entry {0:?}")]
    DuplicateCity(String),

    /// The same region name appears twice.
    #[error("duplicate region entry {0:?}")]
    DuplicateRegion(String),

    /// A locale string other than "ua" or "ru".
    #[error("unsupported locale {0:?} (expected \"ua\" or \"ru\")")]
    UnsupportedLang(String),
}

pub type Result<T> = std::result::Result<T, GeoSlugError>;
