// crates/geoslug-core/src/api.rs

//! JSON-serializable presentation views over registry entities.
//!
//! A view resolves everything a consumer needs for one locale in one shot:
//! the localized display name, the locale's slug, and (for cities) the
//! localized region label. Used by the WASM bindings and anything else that
//! hands entities across a serialization boundary.

use serde::Serialize;

use crate::model::City;
use crate::registry::GeoRegistry;
use crate::slug::Lang;

/// A city resolved for one locale.
#[derive(Clone, Debug, Serialize)]
pub struct CityView {
    pub name: String,
    pub slug: String,
    pub region: String,
    pub lang: Lang,
}

impl CityView {
    pub fn new(registry: &GeoRegistry, city: &City, lang: Lang) -> Self {
        CityView {
            name: registry
                .display_city_name(&city.name_ua, lang)
                .as_str()
                .to_string(),
            slug: registry.city_slug(&city.name_ua, lang),
            region: registry
                .display_region_name(&city.region_ua, lang)
                .as_str()
                .to_string(),
            lang,
        }
    }
}

/// A region resolved for one locale.
#[derive(Clone, Debug, Serialize)]
pub struct RegionView {
    pub name: String,
    pub slug: String,
    pub lang: Lang,
}

impl RegionView {
    pub fn new(registry: &GeoRegistry, region_ua: &str, lang: Lang) -> Self {
        RegionView {
            name: registry
                .display_region_name(region_ua, lang)
                .as_str()
                .to_string(),
            slug: registry.region_slug(region_ua, lang),
            lang,
        }
    }
}
