use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use geoslug_wasm::{city_slug, region_slug, resolve_city, slugify};

#[wasm_bindgen_test]
fn slugify_maps_cyrillic() {
    // Ensure module is initialized (defensive; start() should run automatically)
    #[cfg(target_arch = "wasm32")]
    geoslug_wasm::start();

    assert_eq!(slugify("Запоріжжя"), "zaporizhzhia");
    assert_eq!(slugify("Кривий Ріг"), "kryvyi-rih");
}

#[wasm_bindgen_test]
fn city_round_trips_in_both_locales() {
    #[cfg(target_arch = "wasm32")]
    geoslug_wasm::start();

    assert_eq!(city_slug("Київ", "ua"), "kyiv");
    assert_eq!(city_slug("Київ", "ru"), "kyev");

    let city = resolve_city("kyiv", "ua");
    assert!(!city.is_null());

    let missing = resolve_city("nonexistent-slug", "ua");
    assert!(missing.is_null());
}

#[wasm_bindgen_test]
fn region_slugs_differ_per_locale() {
    #[cfg(target_arch = "wasm32")]
    geoslug_wasm::start();

    assert_eq!(region_slug("Харківська область", "ua"), "kharkivska-oblast");
    assert_eq!(
        region_slug("Харківська область", "ru"),
        "kharkovskaia-oblast"
    );
}
