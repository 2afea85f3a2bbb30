// crates/geoslug-core/src/slug.rs

//! # Slug Codec
//!
//! Locale-aware conversion between canonical Ukrainian names and URL slugs,
//! and the inverse lookup. Ukrainian slugs for cities are precomputed and
//! stored on the entry; Russian slugs are always derived on the fly from the
//! cross-reference tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoSlugError;
use crate::model::City;
use crate::registry::GeoRegistry;
use crate::text::slugify;

/// A site locale. Each locale owns its own URL slug namespace.
///
/// Ukrainian is the identity locale: canonical names and precomputed slugs
/// are Ukrainian, and the Russian side is reached through the cross-reference
/// tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ua,
    Ru,
}

impl Lang {
    /// Both locales, in sitemap/cross-product order.
    pub const ALL: [Lang; 2] = [Lang::Ua, Lang::Ru];

    /// Selects the matching arm of a per-locale value pair.
    #[inline]
    pub fn pick<'a>(self, ua: &'a str, ru: &'a str) -> &'a str {
        match self {
            Lang::Ua => ua,
            Lang::Ru => ru,
        }
    }

    /// The URL path segment for this locale.
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Ua => "ua",
            Lang::Ru => "ru",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = GeoSlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ua" => Ok(Lang::Ua),
            "ru" => Ok(Lang::Ru),
            other => Err(GeoSlugError::UnsupportedLang(other.to_string())),
        }
    }
}

impl GeoRegistry {
    /// Locale-aware URL slug for a canonical city name.
    ///
    /// For `ua` the precomputed slug of the registered city is returned;
    /// unregistered names still slug deterministically through [`slugify`].
    /// For `ru` the cross-referenced Russian name (or the Ukrainian name, if
    /// the table has no entry) is slugified.
    ///
    /// Pure function of the name, the locale, and the fixed registries.
    pub fn city_slug(&self, name_ua: &str, lang: Lang) -> String {
        match lang {
            Lang::Ua => match self.city_by_name(name_ua) {
                Some(city) => city.slug_ua.clone(),
                None => slugify(name_ua),
            },
            Lang::Ru => {
                let ru = self
                    .city_ru_by_ua
                    .get(name_ua)
                    .map(String::as_str)
                    .unwrap_or(name_ua);
                slugify(ru)
            }
        }
    }

    /// Resolves a slug back to its city, in the given locale's namespace.
    ///
    /// Returns `None` on a miss; callers render that as a missing resource,
    /// never as a fault. If two names collide under slugification the first
    /// registry entry wins and shadows the rest (see
    /// [`GeoRegistry::slug_collisions`]).
    pub fn resolve_city_by_slug(&self, slug: &str, lang: Lang) -> Option<&City> {
        match lang {
            Lang::Ua => self.cities.iter().find(|c| c.slug_ua == slug),
            // RU slugs are not stored anywhere; recompute each one and
            // compare. Linear rescan is fine at tens of entries — grow a
            // reverse map before the registry does.
            Lang::Ru => self
                .cities
                .iter()
                .find(|c| self.city_slug(&c.name_ua, Lang::Ru) == slug),
        }
    }

    /// Locale-aware URL slug for a canonical region name.
    ///
    /// Regions carry no precomputed slug; both locales derive one on the fly.
    pub fn region_slug(&self, region_ua: &str, lang: Lang) -> String {
        match lang {
            Lang::Ua => slugify(region_ua),
            Lang::Ru => {
                let ru = self
                    .region_ru_by_ua
                    .get(region_ua)
                    .map(String::as_str)
                    .unwrap_or(region_ua);
                slugify(ru)
            }
        }
    }

    /// Resolves a region slug back to the canonical Ukrainian region name.
    ///
    /// Only the name string round-trips; there is no richer region object.
    pub fn resolve_region_by_slug(&self, slug: &str, lang: Lang) -> Option<&str> {
        self.regions
            .iter()
            .map(String::as_str)
            .find(|r| self.region_slug(r, lang) == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> GeoRegistry {
        GeoRegistry::load().unwrap()
    }

    #[test]
    fn lang_parses_and_prints() {
        assert_eq!("ua".parse::<Lang>().unwrap(), Lang::Ua);
        assert_eq!("ru".parse::<Lang>().unwrap(), Lang::Ru);
        assert_eq!(Lang::Ua.to_string(), "ua");
        assert!("uk".parse::<Lang>().is_err());
        assert!("UA".parse::<Lang>().is_err());
    }

    #[test]
    fn ua_city_slug_is_the_precomputed_one() {
        let registry = registry();
        assert_eq!(registry.city_slug("Запоріжжя", Lang::Ua), "zaporizhzhia");
        assert_eq!(registry.city_slug("Київ", Lang::Ua), "kyiv");
    }

    #[test]
    fn ua_city_slug_falls_back_to_slugify_for_unregistered_names() {
        let registry = registry();
        assert_eq!(registry.city_slug("Кривий Ріг", Lang::Ua), "kryvyi-rih");
    }

    #[test]
    fn ru_city_slug_derives_from_the_russian_name() {
        let registry = registry();
        // Same table as everywhere else, applied to the RU spelling.
        assert_eq!(registry.city_slug("Київ", Lang::Ru), slugify("Киев"));
        assert_eq!(registry.city_slug("Київ", Lang::Ru), "kyev");
        assert_eq!(registry.city_slug("Харків", Lang::Ru), "kharkov");
        assert_eq!(registry.city_slug("Одеса", Lang::Ru), "odessa");
    }

    #[test]
    fn ru_city_slug_falls_back_to_the_ukrainian_name() {
        let registry = registry();
        // Not in the cross-reference table at all.
        assert_eq!(registry.city_slug("Ужгород", Lang::Ru), "uzhhorod");
    }

    #[test]
    fn city_round_trip_holds_for_every_registered_city() {
        let registry = registry();
        for lang in Lang::ALL {
            for city in &registry.cities {
                let slug = registry.city_slug(&city.name_ua, lang);
                let resolved = registry
                    .resolve_city_by_slug(&slug, lang)
                    .unwrap_or_else(|| panic!("{slug:?} did not resolve in {lang}"));
                assert_eq!(resolved.name_ua, city.name_ua);
                assert_eq!(registry.city_slug(&resolved.name_ua, lang), slug);
            }
        }
    }

    #[test]
    fn region_round_trip_recovers_the_canonical_name() {
        let registry = registry();
        assert_eq!(
            registry.region_slug("Харківська область", Lang::Ua),
            "kharkivska-oblast"
        );
        for lang in Lang::ALL {
            for region in &registry.regions {
                let slug = registry.region_slug(region, lang);
                assert_eq!(
                    registry.resolve_region_by_slug(&slug, lang),
                    Some(region.as_str())
                );
            }
        }
    }

    #[test]
    fn unknown_slugs_resolve_to_none() {
        let registry = registry();
        assert!(registry
            .resolve_city_by_slug("nonexistent-slug", Lang::Ua)
            .is_none());
        assert!(registry
            .resolve_city_by_slug("nonexistent-slug", Lang::Ru)
            .is_none());
        assert!(registry
            .resolve_region_by_slug("nonexistent-slug", Lang::Ua)
            .is_none());
        // A UA slug is not automatically an RU slug.
        assert!(registry.resolve_city_by_slug("kharkiv", Lang::Ru).is_none());
    }
}
