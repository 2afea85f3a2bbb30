//! Basic usage example for geoslug-rs
//!
//! This example demonstrates how to:
//! - Load the bundled registry
//! - Compute city and region slugs per locale
//! - Resolve slugs back to canonical entities
//! - Use the display-name resolver

use geoslug_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== GeoSlug-RS Basic Usage Example ===\n");

    // Load the registry
    println!("Loading geographic registry...");
    let registry = GeoRegistry::load()?;
    println!("✓ Registry loaded successfully\n");

    // Example 1: Registry contents
    println!("--- Example 1: List all cities ---");
    let stats = registry.stats();
    println!("Total cities: {}", stats.cities);
    for (i, city) in registry.cities.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, city.name_ua, city.slug_ua);
    }
    println!("... and {} more\n", stats.cities - 5);

    // Example 2: Slugs per locale
    println!("--- Example 2: Per-locale slugs ---");
    for name in ["Київ", "Запоріжжя", "Чернігів"] {
        println!(
            "{name}: ua={} ru={}",
            registry.city_slug(name, Lang::Ua),
            registry.city_slug(name, Lang::Ru)
        );
    }
    println!();

    // Example 3: Resolving slugs back
    println!("--- Example 3: Resolve a slug ---");
    if let Some(city) = registry.resolve_city_by_slug("kharkov", Lang::Ru) {
        println!("Resolved \"kharkov\" (ru) to: {}", city.name_ua);
        println!("Region: {}", city.region_ua);
    }
    println!();

    // Example 4: Display names
    println!("--- Example 4: Localized display names ---");
    for lang in Lang::ALL {
        let name = registry.display_city_name("Одеса", lang);
        println!("Одеса in {lang}: {name}");
    }
    // A city without a Russian entry falls back to its Ukrainian name.
    let fallback = registry.display_city_name("Ужгород", Lang::Ru);
    println!(
        "Ужгород in ru: {fallback} (fallback: {})",
        fallback.is_fallback()
    );
    println!();

    // Example 5: Regions
    println!("--- Example 5: Region round trip ---");
    let slug = registry.region_slug("Харківська область", Lang::Ua);
    println!("Slug: {slug}");
    let back = registry.resolve_region_by_slug(&slug, Lang::Ua);
    println!("Resolved back: {back:?}");
    println!();

    // Example 6: Hire intents
    println!("--- Example 6: Hire intents ---");
    for intent in HIRE_INTENTS {
        for lang in Lang::ALL {
            println!(
                "{} [{}]: /{}/hire/{}",
                intent.key,
                lang,
                lang,
                intent.slug(lang)
            );
        }
    }
    println!();

    // Example 7: Accent-insensitive search
    println!("--- Example 7: Search ---");
    for city in registry.find_cities_by_substring("cherk") {
        println!("- {}", city.name_ua);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
