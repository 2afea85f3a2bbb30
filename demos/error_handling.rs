//! Error handling example for geoslug-rs
//!
//! This example demonstrates the two failure surfaces: dataset loading
//! (typed errors) and slug resolution (plain `Option` misses).

use geoslug_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== GeoSlug-RS Error Handling Example ===\n");

    // Example 1: Handling registry load errors
    println!("--- Example 1: Loading with error handling ---");
    match GeoRegistry::from_path("/no/such/dataset.json") {
        Ok(_) => println!("✓ Loaded custom dataset"),
        Err(e) => println!("✗ Expected failure: {e}"),
    }
    let registry = GeoRegistry::load()?;
    println!("✓ Bundled registry loaded\n");

    // Example 2: Validation errors are descriptive
    println!("--- Example 2: Rejecting a broken dataset ---");
    let broken = r#"{
        "cities": [{ "name": "Київ", "slug": "kyiv", "region": "Атлантида" }],
        "regions": [],
        "city_ru_by_ua": {},
        "region_ru_by_ua": {}
    }"#;
    match GeoRegistry::from_json_str(broken) {
        Ok(_) => println!("unexpectedly valid"),
        Err(e) => println!("✗ Rejected: {e}"),
    }
    println!();

    // Example 3: Resolution misses are values, not errors
    println!("--- Example 3: Resolution misses ---");
    let slugs = ["kyiv", "nonexistent-slug", "kharkov"];
    for slug in slugs {
        match registry.resolve_city_by_slug(slug, Lang::Ua) {
            Some(city) => println!("  Found: {} ({slug})", city.name_ua),
            None => println!("  Not found: {slug}"),
        }
    }
    println!();

    // Example 4: Degenerate slugify input is still total
    println!("--- Example 4: Degenerate input ---");
    for input in ["", "   ", "'''", "???"] {
        println!("  slugify({input:?}) = {:?}", slugify(input));
    }

    Ok(())
}
