// crates/geoslug-core/src/registry.rs

//! # Registry Loader & Integrity
//!
//! Owns the immutable dataset: the city and region registries plus the two
//! Ukrainian→Russian cross-reference tables. Loaded once, validated on load,
//! and read-only afterwards, so every lookup is safe to call from concurrent
//! readers without coordination.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[cfg(feature = "embedded")]
use once_cell::sync::OnceCell;

use crate::error::{GeoSlugError, Result};
use crate::model::{City, EntityKind};
use crate::slug::Lang;
use crate::text::fold_key;
use crate::traits::NameMatch;

#[cfg(feature = "embedded")]
static REGISTRY_CACHE: OnceCell<GeoRegistry> = OnceCell::new();

/// The bundled dataset: ten regional-center cities, the 24 oblasts, and the
/// UA→RU cross-reference tables for both.
#[cfg(feature = "embedded")]
static EMBEDDED_DATA: &str = include_str!("../data/geo.json");

/// The top-level registry structure.
///
/// Holds the fixed city list, the flat region list, and the two
/// cross-reference tables. Constructed by the loader from a JSON dataset and
/// validated before use; treat it as frozen for the lifetime of the process.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeoRegistry {
    pub cities: Vec<City>,
    pub regions: Vec<String>,
    /// Canonical Ukrainian city name -> Russian display name. Not total;
    /// absent cities fall back to their Ukrainian name.
    pub city_ru_by_ua: HashMap<String, String>,
    /// Same shape, keyed by region canonical name.
    pub region_ru_by_ua: HashMap<String, String>,
}

/// Simple aggregate statistics for the registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegistryStats {
    pub cities: usize,
    pub regions: usize,
    pub city_translations: usize,
    pub region_translations: usize,
}

/// Distinct canonical names that share one slug in one locale's namespace.
///
/// Collisions are an acknowledged weakness of table-driven slugification:
/// resolution picks the first registry entry that matches, so colliding
/// names shadow each other. They are reported for audit rather than
/// rejected at load time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlugCollision {
    pub kind: EntityKind,
    pub lang: Lang,
    pub slug: String,
    pub names: Vec<String>,
}

impl GeoRegistry {
    /// Loads the bundled dataset, caching the parsed registry process-wide.
    #[cfg(feature = "embedded")]
    pub fn load() -> Result<Self> {
        REGISTRY_CACHE
            .get_or_try_init(|| Self::from_json_str(EMBEDDED_DATA))
            .cloned()
    }

    /// Parses and validates a registry from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let registry: GeoRegistry = serde_json::from_str(json)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Reads, parses, and validates a registry dataset from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| GeoSlugError::NotFound(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Checks the registry's hard invariants.
    ///
    /// Referential integrity (every city's region is registered), unique
    /// canonical names, and unique precomputed Ukrainian slugs. Locale-level
    /// slug collisions are *not* rejected here; see [`Self::slug_collisions`].
    pub fn validate(&self) -> Result<()> {
        let mut regions: HashSet<&str> = HashSet::new();
        for region in &self.regions {
            if !regions.insert(region.as_str()) {
                return Err(GeoSlugError::DuplicateRegion(region.clone()));
            }
        }

        let mut names: HashSet<&str> = HashSet::new();
        let mut slugs: HashMap<&str, &str> = HashMap::new();
        for city in &self.cities {
            if !names.insert(city.name_ua.as_str()) {
                return Err(GeoSlugError::DuplicateCity(city.name_ua.clone()));
            }
            if !regions.contains(city.region_ua.as_str()) {
                return Err(GeoSlugError::UnknownRegion {
                    city: city.name_ua.clone(),
                    region: city.region_ua.clone(),
                });
            }
            if let Some(first) = slugs.insert(city.slug_ua.as_str(), city.name_ua.as_str()) {
                return Err(GeoSlugError::DuplicateSlug {
                    slug: city.slug_ua.clone(),
                    first: first.to_string(),
                    second: city.name_ua.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            cities: self.cities.len(),
            regions: self.regions.len(),
            city_translations: self.city_ru_by_ua.len(),
            region_translations: self.region_ru_by_ua.len(),
        }
    }

    /// Looks up a city by its canonical Ukrainian name.
    ///
    /// Linear scan; the registry holds tens of entries.
    pub fn city_by_name(&self, name_ua: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.name_ua == name_ua)
    }

    /// All cities belonging to the given region, in registry order.
    pub fn cities_in_region(&self, region_ua: &str) -> Vec<&City> {
        self.cities
            .iter()
            .filter(|c| c.region_ua == region_ua)
            .collect()
    }

    /// Accent- and case-insensitive substring search over city names,
    /// matching both the canonical Ukrainian and the Russian spelling.
    pub fn find_cities_by_substring(&self, substr: &str) -> Vec<&City> {
        let q = fold_key(substr);
        let mut out = Vec::new();
        if q.is_empty() {
            return out;
        }

        for city in &self.cities {
            let mut matched = city.name_contains(substr);
            if !matched {
                if let Some(ru) = self.city_ru_by_ua.get(&city.name_ua) {
                    matched = fold_key(ru).contains(&q);
                }
            }
            if matched {
                out.push(city);
            }
        }
        out
    }

    /// Reports every slug shared by more than one canonical name in the
    /// given locale, across both entity namespaces.
    ///
    /// The bundled dataset has none; a growing dataset should run this as a
    /// release check before new entries go live.
    pub fn slug_collisions(&self, lang: Lang) -> Vec<SlugCollision> {
        let mut out = collisions_of(
            EntityKind::City,
            lang,
            self.cities
                .iter()
                .map(|c| (c.name_ua.as_str(), self.city_slug(&c.name_ua, lang))),
        );
        out.extend(collisions_of(
            EntityKind::Region,
            lang,
            self.regions
                .iter()
                .map(|r| (r.as_str(), self.region_slug(r, lang))),
        ));
        out
    }
}

fn collisions_of<'a>(
    kind: EntityKind,
    lang: Lang,
    entries: impl Iterator<Item = (&'a str, String)>,
) -> Vec<SlugCollision> {
    let mut by_slug: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, slug) in entries {
        by_slug.entry(slug).or_default().push(name.to_string());
    }
    by_slug
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(slug, names)| SlugCollision {
            kind,
            lang,
            slug,
            names,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_registry(json: &str) -> Result<GeoRegistry> {
        GeoRegistry::from_json_str(json)
    }

    #[test]
    fn bundled_dataset_is_valid() {
        let registry = GeoRegistry::load().unwrap();
        let stats = registry.stats();
        assert_eq!(stats.cities, 10);
        assert_eq!(stats.regions, 24);
        assert_eq!(stats.city_translations, 10);
        assert_eq!(stats.region_translations, 24);
    }

    #[test]
    fn load_is_cached() {
        let a = GeoRegistry::load().unwrap();
        let b = GeoRegistry::load().unwrap();
        assert_eq!(a.cities, b.cities);
    }

    #[test]
    fn unknown_region_is_rejected() {
        let err = small_registry(
            r#"{
                "cities": [{ "name": "Київ", "slug": "kyiv", "region": "Атлантида" }],
                "regions": ["Київська область"],
                "city_ru_by_ua": {},
                "region_ru_by_ua": {}
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, GeoSlugError::UnknownRegion { .. }));
    }

    #[test]
    fn duplicate_ua_slug_is_rejected() {
        let err = small_registry(
            r#"{
                "cities": [
                    { "name": "Київ", "slug": "kyiv", "region": "Київська область" },
                    { "name": "Київець", "slug": "kyiv", "region": "Київська область" }
                ],
                "regions": ["Київська область"],
                "city_ru_by_ua": {},
                "region_ru_by_ua": {}
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, GeoSlugError::DuplicateSlug { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = small_registry("{ not json").unwrap_err();
        assert!(matches!(err, GeoSlugError::Parse(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = GeoRegistry::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GeoSlugError::NotFound(_)));
    }

    #[test]
    fn substring_search_matches_both_spellings() {
        let registry = GeoRegistry::load().unwrap();
        // Canonical Ukrainian spelling.
        let hits = registry.find_cities_by_substring("полтав");
        assert!(hits.iter().any(|c| c.name_ua == "Полтава"));
        // Russian spelling folds to "odessa"; the canonical "Одеса" does not.
        let hits = registry.find_cities_by_substring("одесс");
        assert!(hits.iter().any(|c| c.name_ua == "Одеса"));
        assert!(registry.find_cities_by_substring("").is_empty());
    }

    #[test]
    fn bundled_dataset_has_no_collisions() {
        let registry = GeoRegistry::load().unwrap();
        for lang in Lang::ALL {
            assert_eq!(registry.slug_collisions(lang), Vec::new());
        }
    }

    #[test]
    fn ru_collisions_are_reported_not_rejected() {
        // Two distinct cities that the RU table maps onto the same name.
        let registry = small_registry(
            r#"{
                "cities": [
                    { "name": "Південне", "slug": "pivdenne", "region": "Харківська область" },
                    { "name": "Южне", "slug": "iuzhne", "region": "Одеська область" }
                ],
                "regions": ["Харківська область", "Одеська область"],
                "city_ru_by_ua": { "Південне": "Южное", "Южне": "Южное" },
                "region_ru_by_ua": {}
            }"#,
        )
        .unwrap();

        let collisions = registry.slug_collisions(Lang::Ru);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].kind, EntityKind::City);
        assert_eq!(collisions[0].slug, "iuzhnoe");
        assert_eq!(collisions[0].names, vec!["Південне", "Южне"]);
        // Ukrainian namespace stays collision-free.
        assert!(registry.slug_collisions(Lang::Ua).is_empty());
    }
}
