//! geoslug prelude: bring common types and helpers into scope for demos.

#![allow(unused_imports)]

pub use crate::api::{CityView, RegionView};
pub use crate::display::LocalizedName;
pub use crate::error::{GeoSlugError, Result};
pub use crate::intents::{
    hire_intent_by_key, resolve_hire_intent_by_slug, HireIntent, HIRE_INTENTS,
};
pub use crate::model::{City, EntityKind};
pub use crate::registry::{GeoRegistry, RegistryStats, SlugCollision};
pub use crate::routes::{
    city_page_path, hire_city_page_path, hire_region_page_path, home_path, region_page_path,
    ChangeFrequency, LocalizedUrls, SitemapEntry,
};
pub use crate::slug::Lang;
pub use crate::text::{equals_folded, fold_key, slugify};
pub use crate::traits::NameMatch;
