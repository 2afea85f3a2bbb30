// crates/geoslug-core/src/display.rs

//! # Display Name Resolver
//!
//! Localized human-readable labels for canonical city and region names,
//! independent of the slug those names produce. Total functions: a missing
//! cross-reference entry serves the Ukrainian name instead of failing.

use std::fmt;

use crate::registry::GeoRegistry;
use crate::slug::Lang;

/// A resolved display name.
///
/// The two arms keep the fallback observable instead of silently absorbed:
/// `Translated` is authoritative for the requested locale (the identity
/// value for `ua`, a cross-reference hit for `ru`), `Fallback` means the
/// Russian table had no entry and the Ukrainian name is served in its place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalizedName<'a> {
    Translated(&'a str),
    Fallback(&'a str),
}

impl<'a> LocalizedName<'a> {
    /// The label to present, whichever arm it came from.
    pub fn as_str(&self) -> &'a str {
        match self {
            LocalizedName::Translated(s) | LocalizedName::Fallback(s) => s,
        }
    }

    /// True if the cross-reference table had no entry for this name.
    pub fn is_fallback(&self) -> bool {
        matches!(self, LocalizedName::Fallback(_))
    }
}

impl fmt::Display for LocalizedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GeoRegistry {
    /// Human-readable city label for a locale.
    ///
    /// Ukrainian is the identity locale; Russian labels come from the
    /// cross-reference table with the Ukrainian name as fallback.
    pub fn display_city_name<'a>(&'a self, name_ua: &'a str, lang: Lang) -> LocalizedName<'a> {
        match lang {
            Lang::Ua => LocalizedName::Translated(name_ua),
            Lang::Ru => match self.city_ru_by_ua.get(name_ua) {
                Some(ru) => LocalizedName::Translated(ru),
                None => LocalizedName::Fallback(name_ua),
            },
        }
    }

    /// Human-readable region label for a locale; same shape, region-keyed.
    pub fn display_region_name<'a>(&'a self, region_ua: &'a str, lang: Lang) -> LocalizedName<'a> {
        match lang {
            Lang::Ua => LocalizedName::Translated(region_ua),
            Lang::Ru => match self.region_ru_by_ua.get(region_ua) {
                Some(ru) => LocalizedName::Translated(ru),
                None => LocalizedName::Fallback(region_ua),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ukrainian_is_the_identity_locale() {
        let registry = GeoRegistry::load().unwrap();
        for city in &registry.cities {
            let name = registry.display_city_name(&city.name_ua, Lang::Ua);
            assert_eq!(name.as_str(), city.name_ua);
            assert!(!name.is_fallback());
        }
    }

    #[test]
    fn russian_labels_come_from_the_table() {
        let registry = GeoRegistry::load().unwrap();
        let name = registry.display_city_name("Київ", Lang::Ru);
        assert_eq!(name, LocalizedName::Translated("Киев"));
        let region = registry.display_region_name("Харківська область", Lang::Ru);
        assert_eq!(region.as_str(), "Харьковская область");
    }

    #[test]
    fn missing_entries_fall_back_to_ukrainian() {
        let registry = GeoRegistry::load().unwrap();
        let name = registry.display_city_name("Ужгород", Lang::Ru);
        assert_eq!(name, LocalizedName::Fallback("Ужгород"));
        assert!(name.is_fallback());
        assert_eq!(name.to_string(), "Ужгород");
    }
}
