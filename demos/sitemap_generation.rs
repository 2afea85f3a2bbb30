//! Sitemap generation example for geoslug-rs
//!
//! Enumerates the full locale × entity cross product a static site would
//! pre-render, grouped by priority tier.

use geoslug_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== GeoSlug-RS Sitemap Example ===\n");

    let registry = GeoRegistry::load()?;
    let entries = registry.sitemap_entries("https://example.com");
    println!("Total URLs: {}\n", entries.len());

    for tier in [1.0_f32, 0.8, 0.7, 0.6, 0.5] {
        let in_tier: Vec<_> = entries.iter().filter(|e| e.priority == tier).collect();
        println!("--- priority {tier} ({} URLs) ---", in_tier.len());
        for entry in in_tier.iter().take(4) {
            println!("{:<8} {}", entry.change_frequency, entry.loc);
        }
        if in_tier.len() > 4 {
            println!("... and {} more", in_tier.len() - 4);
        }
        println!();
    }

    // Alternate-locale pairs for hreflang links.
    println!("--- hreflang pairs for city pages ---");
    for city in registry.cities.iter().take(3) {
        let urls = registry.city_alternate_paths(city);
        println!("{}: ua={} ru={}", city.name_ua, urls.ua, urls.ru);
    }

    Ok(())
}
