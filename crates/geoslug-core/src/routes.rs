// crates/geoslug-core/src/routes.rs

//! Localized URL paths and sitemap enumeration.
//!
//! The page layer builds its hrefs and hreflang alternates from these
//! helpers; the sitemap enumeration walks the full locale × entity cross
//! product the static site pre-renders.

use std::fmt;

use serde::Serialize;

use crate::intents::HIRE_INTENTS;
use crate::model::City;
use crate::registry::GeoRegistry;
use crate::slug::Lang;

/// Pages that exist in every locale without any registry data behind them.
const STATIC_PAGES: &[&str] = &[
    "about",
    "services",
    "portfolio",
    "blog",
    "contact",
    "privacy",
    "terms",
];

pub fn home_path(lang: Lang) -> String {
    format!("/{lang}")
}

pub fn city_page_path(lang: Lang, city_slug: &str) -> String {
    format!("/{lang}/service/geo/{city_slug}")
}

pub fn region_page_path(lang: Lang, region_slug: &str) -> String {
    format!("/{lang}/service/geo/region/{region_slug}")
}

pub fn hire_city_page_path(lang: Lang, intent_slug: &str, city_slug: &str) -> String {
    format!("/{lang}/hire/{intent_slug}/city/{city_slug}")
}

pub fn hire_region_page_path(lang: Lang, intent_slug: &str, region_slug: &str) -> String {
    format!("/{lang}/hire/{intent_slug}/region/{region_slug}")
}

/// Canonical + alternate-locale path pair for one page (hreflang material).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocalizedUrls {
    pub ua: String,
    pub ru: String,
}

/// How often a page is expected to change, in sitemap terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        })
    }
}

/// One sitemap URL with its crawl hints.
#[derive(Clone, Debug, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

impl GeoRegistry {
    /// Both-locale paths for a city page, slugged per locale.
    pub fn city_alternate_paths(&self, city: &City) -> LocalizedUrls {
        LocalizedUrls {
            ua: city_page_path(Lang::Ua, &self.city_slug(&city.name_ua, Lang::Ua)),
            ru: city_page_path(Lang::Ru, &self.city_slug(&city.name_ua, Lang::Ru)),
        }
    }

    /// Both-locale paths for a region page.
    pub fn region_alternate_paths(&self, region_ua: &str) -> LocalizedUrls {
        LocalizedUrls {
            ua: region_page_path(Lang::Ua, &self.region_slug(region_ua, Lang::Ua)),
            ru: region_page_path(Lang::Ru, &self.region_slug(region_ua, Lang::Ru)),
        }
    }

    /// Enumerates every pre-renderable page across both locales.
    ///
    /// Home pages, the static page set, city and region geo pages, and the
    /// hire-intent × city pages, with the crawl hints the site advertises
    /// for each tier. `base_url` is prefixed verbatim (a trailing slash is
    /// tolerated).
    pub fn sitemap_entries(&self, base_url: &str) -> Vec<SitemapEntry> {
        let base = base_url.trim_end_matches('/');
        let mut out = Vec::new();

        for lang in Lang::ALL {
            out.push(SitemapEntry {
                loc: format!("{base}{}", home_path(lang)),
                change_frequency: ChangeFrequency::Daily,
                priority: 1.0,
            });
        }

        for lang in Lang::ALL {
            for page in STATIC_PAGES {
                out.push(SitemapEntry {
                    loc: format!("{base}/{lang}/{page}"),
                    change_frequency: ChangeFrequency::Weekly,
                    priority: 0.8,
                });
            }
        }

        for lang in Lang::ALL {
            for city in &self.cities {
                let slug = self.city_slug(&city.name_ua, lang);
                out.push(SitemapEntry {
                    loc: format!("{base}{}", city_page_path(lang, &slug)),
                    change_frequency: ChangeFrequency::Monthly,
                    priority: 0.7,
                });
            }
        }

        for lang in Lang::ALL {
            for region in &self.regions {
                let slug = self.region_slug(region, lang);
                out.push(SitemapEntry {
                    loc: format!("{base}{}", region_page_path(lang, &slug)),
                    change_frequency: ChangeFrequency::Monthly,
                    priority: 0.6,
                });
            }
        }

        for lang in Lang::ALL {
            for intent in HIRE_INTENTS {
                for city in &self.cities {
                    let slug = self.city_slug(&city.name_ua, lang);
                    out.push(SitemapEntry {
                        loc: format!("{base}{}", hire_city_page_path(lang, intent.slug(lang), &slug)),
                        change_frequency: ChangeFrequency::Monthly,
                        priority: 0.5,
                    });
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_shapes() {
        assert_eq!(city_page_path(Lang::Ua, "kyiv"), "/ua/service/geo/kyiv");
        assert_eq!(
            region_page_path(Lang::Ru, "kharkovskaia-oblast"),
            "/ru/service/geo/region/kharkovskaia-oblast"
        );
        assert_eq!(
            hire_city_page_path(Lang::Ua, "programist-na-godynu", "lviv"),
            "/ua/hire/programist-na-godynu/city/lviv"
        );
        assert_eq!(
            hire_region_page_path(Lang::Ru, "naniat-programmista", "kyevskaia-oblast"),
            "/ru/hire/naniat-programmista/region/kyevskaia-oblast"
        );
    }

    #[test]
    fn alternate_paths_use_per_locale_slugs() {
        let registry = GeoRegistry::load().unwrap();
        let city = registry.city_by_name("Харків").unwrap();
        let urls = registry.city_alternate_paths(city);
        assert_eq!(urls.ua, "/ua/service/geo/kharkiv");
        assert_eq!(urls.ru, "/ru/service/geo/kharkov");
    }

    #[test]
    fn sitemap_covers_the_full_cross_product() {
        let registry = GeoRegistry::load().unwrap();
        let entries = registry.sitemap_entries("https://example.com/");

        let langs = Lang::ALL.len();
        let expected = langs // home
            + langs * STATIC_PAGES.len()
            + langs * registry.cities.len()
            + langs * registry.regions.len()
            + langs * HIRE_INTENTS.len() * registry.cities.len();
        assert_eq!(entries.len(), expected);

        // Trailing slash on the base URL must not double up.
        assert!(entries.iter().all(|e| e.loc.starts_with("https://example.com/")));
        assert!(entries.iter().all(|e| !e.loc.contains("//ua") && !e.loc.contains("//ru")));

        // Every loc is unique.
        let mut locs: Vec<&str> = entries.iter().map(|e| e.loc.as_str()).collect();
        locs.sort_unstable();
        locs.dedup();
        assert_eq!(locs.len(), entries.len());
    }

    #[test]
    fn sitemap_priorities_tier_down() {
        let registry = GeoRegistry::load().unwrap();
        let entries = registry.sitemap_entries("https://example.com");
        let home = entries.iter().find(|e| e.loc.ends_with("/ua")).unwrap();
        assert_eq!(home.priority, 1.0);
        assert_eq!(home.change_frequency, ChangeFrequency::Daily);
        let geo = entries
            .iter()
            .find(|e| e.loc.ends_with("/ua/service/geo/kyiv"))
            .unwrap();
        assert_eq!(geo.priority, 0.7);
        assert_eq!(geo.change_frequency, ChangeFrequency::Monthly);
    }
}
