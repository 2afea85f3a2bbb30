// crates/geoslug-core/src/intents.rs

//! Hire-intent landing pages.
//!
//! A fixed registry of commercial search intents, each with a stable key and
//! hand-curated per-locale labels, slugs, and descriptions. Unlike city and
//! region slugs these are not derived from the transliteration table; they
//! were chosen for search traffic and are part of the public URL surface, so
//! they never change.

use crate::slug::Lang;

/// One hire-intent entry. Each locale owns its own slug namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HireIntent {
    pub key: &'static str,
    pub label_ua: &'static str,
    pub label_ru: &'static str,
    pub slug_ua: &'static str,
    pub slug_ru: &'static str,
    pub description_ua: &'static str,
    pub description_ru: &'static str,
}

impl HireIntent {
    pub fn label(&self, lang: Lang) -> &'static str {
        lang.pick(self.label_ua, self.label_ru)
    }

    pub fn slug(&self, lang: Lang) -> &'static str {
        lang.pick(self.slug_ua, self.slug_ru)
    }

    pub fn description(&self, lang: Lang) -> &'static str {
        lang.pick(self.description_ua, self.description_ru)
    }
}

pub const HIRE_INTENTS: &[HireIntent] = &[
    HireIntent {
        key: "programmer-hour",
        label_ua: "Програміст на годину",
        label_ru: "Программист на час",
        slug_ua: "programist-na-godynu",
        slug_ru: "programmist-na-chas",
        description_ua: "Оперативна допомога розробника погодинно: правки, консультації, інтеграції.",
        description_ru: "Оперативная помощь разработчика почасово: правки, консультации, интеграции.",
    },
    HireIntent {
        key: "hire-programmer",
        label_ua: "Найняти програміста",
        label_ru: "Нанять программиста",
        slug_ua: "nainiaty-programista",
        slug_ru: "naniat-programmista",
        description_ua: "Візьміть розробника під проект або на довгострокову співпрацю.",
        description_ru: "Возьмите разработчика под проект или на долгосрочное сотрудничество.",
    },
];

/// Looks up an intent by its stable key.
pub fn hire_intent_by_key(key: &str) -> Option<&'static HireIntent> {
    HIRE_INTENTS.iter().find(|i| i.key == key)
}

/// Resolves an intent slug in the given locale's namespace only.
pub fn resolve_hire_intent_by_slug(slug: &str, lang: Lang) -> Option<&'static HireIntent> {
    HIRE_INTENTS.iter().find(|i| i.slug(lang) == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_and_slugs_are_unique_per_locale() {
        for lang in Lang::ALL {
            for (i, a) in HIRE_INTENTS.iter().enumerate() {
                for b in &HIRE_INTENTS[i + 1..] {
                    assert_ne!(a.key, b.key);
                    assert_ne!(a.slug(lang), b.slug(lang));
                }
            }
        }
    }

    #[test]
    fn resolves_in_its_own_locale_namespace_only() {
        let intent = resolve_hire_intent_by_slug("programist-na-godynu", Lang::Ua).unwrap();
        assert_eq!(intent.key, "programmer-hour");
        assert_eq!(intent.label(Lang::Ru), "Программист на час");

        // The UA slug does not exist in the RU namespace and vice versa.
        assert!(resolve_hire_intent_by_slug("programist-na-godynu", Lang::Ru).is_none());
        assert!(resolve_hire_intent_by_slug("programmist-na-chas", Lang::Ua).is_none());
        assert!(
            resolve_hire_intent_by_slug("programmist-na-chas", Lang::Ru).is_some()
        );
    }

    #[test]
    fn lookup_by_key() {
        assert!(hire_intent_by_key("hire-programmer").is_some());
        assert!(hire_intent_by_key("fire-programmer").is_none());
    }
}
