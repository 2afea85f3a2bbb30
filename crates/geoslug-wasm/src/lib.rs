//! geoslug-wasm — WebAssembly bindings for geoslug-core
//!
//! This crate exposes a small, ergonomic JS/WASM API on top of
//! `geoslug-core`. It embeds the bundled registry in the WASM binary and
//! provides slug and resolution helpers callable from JavaScript.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Pure helpers: `slugify("Запоріжжя")`
//! - Codec helpers per locale ("ua" | "ru"):
//!   - `city_slug("Київ", "ru")` / `region_slug("Львівська область", "ua")`
//!   - `resolve_city("kharkov", "ru")` / `resolve_region("kyivska-oblast", "ua")`
//!   - `display_city_name("Київ", "ru")`
//! - Listing helpers returning JSON-serializable objects:
//!   - `list_cities("ua")`, `sitemap("https://example.com")`, `get_stats()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { city_slug, resolve_city } from 'geoslug-wasm';
//!
//! async function main() {
//!   await init(); // initializes the embedded registry
//!   console.log(city_slug('Київ', 'ru')); // "kyev"
//!
//!   const city = resolve_city('kharkov', 'ru');
//!   // { name: "Харьков", slug: "kharkov", region: "Харьковская область", lang: "ru" }
//!   console.log(city);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The locale argument must be the string `"ua"` or `"ru"`; anything else
//!   throws a JS error rather than guessing.
//! - All exported functions are `wasm_bindgen` bindings and return plain
//!   types or `JsValue` containing JSON-serializable objects (`null` on a
//!   resolution miss).

use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

// Core Imports
use geoslug_core::api::{CityView, RegionView};
use geoslug_core::{GeoRegistry, Lang};
use serde_json::json;
use serde_wasm_bindgen::to_value;

// Static Instance (the registry is read-only after the first access).
static REGISTRY: OnceLock<GeoRegistry> = OnceLock::new();

fn registry() -> &'static GeoRegistry {
    REGISTRY.get_or_init(|| GeoRegistry::load().expect("bundled registry is valid"))
}

fn parse_lang(lang: &str) -> Lang {
    lang.parse::<Lang>().unwrap_throw()
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let stats = registry().stats();
    web_sys::console::log_1(
        &format!(
            "✓ Loaded {} cities, {} regions",
            stats.cities, stats.regions
        )
        .into(),
    );
}

/* --------------------------------------------------------------------------
   Pure slugification
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn slugify(input: &str) -> String {
    geoslug_core::slugify(input)
}

/* --------------------------------------------------------------------------
   City Codec
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn city_slug(name_ua: &str, lang: &str) -> String {
    registry().city_slug(name_ua, parse_lang(lang))
}

#[wasm_bindgen]
pub fn resolve_city(slug: &str, lang: &str) -> JsValue {
    let lang = parse_lang(lang);
    let registry = registry();
    match registry.resolve_city_by_slug(slug, lang) {
        Some(city) => to_value(&CityView::new(registry, city, lang)).unwrap_throw(),
        None => JsValue::NULL,
    }
}

#[wasm_bindgen]
pub fn display_city_name(name_ua: &str, lang: &str) -> String {
    registry()
        .display_city_name(name_ua, parse_lang(lang))
        .as_str()
        .to_string()
}

/* --------------------------------------------------------------------------
   Region Codec
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn region_slug(region_ua: &str, lang: &str) -> String {
    registry().region_slug(region_ua, parse_lang(lang))
}

#[wasm_bindgen]
pub fn resolve_region(slug: &str, lang: &str) -> JsValue {
    let lang = parse_lang(lang);
    let registry = registry();
    match registry.resolve_region_by_slug(slug, lang) {
        Some(region) => to_value(&RegionView::new(registry, region, lang)).unwrap_throw(),
        None => JsValue::NULL,
    }
}

/* --------------------------------------------------------------------------
   Listings
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn list_cities(lang: &str) -> JsValue {
    let lang = parse_lang(lang);
    let registry = registry();
    let views: Vec<CityView> = registry
        .cities
        .iter()
        .map(|city| CityView::new(registry, city, lang))
        .collect();
    to_value(&views).unwrap_throw()
}

#[wasm_bindgen]
pub fn sitemap(base_url: &str) -> js_sys::Array {
    let array = js_sys::Array::new();
    for entry in registry().sitemap_entries(base_url) {
        array.push(&to_value(&entry).unwrap_throw());
    }
    array
}

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    let stats = registry().stats();
    let stats = json!({
        "cities": stats.cities,
        "regions": stats.regions,
        "cityTranslations": stats.city_translations,
        "regionTranslations": stats.region_translations
    });

    to_value(&stats).unwrap_throw()
}
