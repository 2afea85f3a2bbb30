//! geoslug-cli — Command-line interface for geoslug-core
//!
//! This binary provides a simple way to work with the bilingual slug codec
//! from your terminal. It supports printing registry statistics, listing
//! cities and regions per locale, computing and resolving slugs, searching
//! cities, auditing slug collisions, and dumping the sitemap URL set.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ geoslug-cli stats
//!
//! - List cities in a locale
//!   $ geoslug-cli cities
//!   $ geoslug-cli --lang=ru cities
//!
//! - Compute a slug for a canonical name
//!   $ geoslug-cli slug city "Київ"
//!   $ geoslug-cli --lang=ru slug region "Харківська область"
//!
//! - Resolve a slug back to its entity
//!   $ geoslug-cli resolve city kyiv
//!   $ geoslug-cli --lang=ru resolve city kharkov
//!
//! - Audit for colliding slugs
//!   $ geoslug-cli collisions
//!
//! Data source
//! -----------
//!
//! By default, the CLI uses the dataset bundled with the `geoslug-core`
//! crate. Use `--input <path>` to point at a custom JSON dataset; it is
//! validated on load and rejected with a descriptive error if a city
//! references an unregistered region or two cities share a slug.
mod args;

use crate::args::{CliArgs, Commands, KindArg};
use clap::Parser;
use geoslug_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let lang = args.lang;

    // Load the registry (custom dataset if provided).
    let registry = match &args.input {
        Some(path) => GeoRegistry::from_path(path)?,
        None => default_registry()?,
    };

    match args.command {
        Commands::Stats => {
            let stats = registry.stats();
            println!("Registry statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Regions: {}", stats.regions);
            println!("  City translations (ua→ru): {}", stats.city_translations);
            println!(
                "  Region translations (ua→ru): {}",
                stats.region_translations
            );
        }

        Commands::Cities => {
            for city in &registry.cities {
                let view = CityView::new(&registry, city, lang);
                println!("{} [{}] — {}", view.name, view.slug, view.region);
            }
        }

        Commands::Regions => {
            for region in &registry.regions {
                let view = RegionView::new(&registry, region, lang);
                println!("{} [{}]", view.name, view.slug);
            }
        }

        Commands::Slug { kind, name } => {
            let slug = match kind {
                KindArg::City => registry.city_slug(&name, lang),
                KindArg::Region => registry.region_slug(&name, lang),
            };
            println!("{slug}");
        }

        Commands::Resolve { kind, slug } => match kind {
            KindArg::City => match registry.resolve_city_by_slug(&slug, lang) {
                Some(city) => {
                    let display = registry.display_city_name(&city.name_ua, lang);
                    println!("City: {}", city.name_ua);
                    println!("Display ({lang}): {display}");
                    println!("Region: {}", city.region_ua);
                    let urls = registry.city_alternate_paths(city);
                    println!("URL (ua): {}", urls.ua);
                    println!("URL (ru): {}", urls.ru);
                }
                None => {
                    eprintln!("No city found for slug: {slug}");
                }
            },
            KindArg::Region => match registry.resolve_region_by_slug(&slug, lang) {
                Some(region) => {
                    let display = registry.display_region_name(region, lang);
                    println!("Region: {region}");
                    println!("Display ({lang}): {display}");
                    let cities = registry.cities_in_region(region);
                    if cities.is_empty() {
                        println!("Cities: none registered");
                    } else {
                        println!("Cities:");
                        for city in cities {
                            println!("- {}", city.name_ua);
                        }
                    }
                }
                None => {
                    eprintln!("No region found for slug: {slug}");
                }
            },
        },

        Commands::Search { query } => {
            let matches = registry.find_cities_by_substring(&query);
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for city in matches {
                    let display = registry.display_city_name(&city.name_ua, lang);
                    println!(
                        "{} — {} [{}]",
                        display,
                        city.region_ua,
                        registry.city_slug(&city.name_ua, lang)
                    );
                }
            }
        }

        Commands::Intents => {
            for intent in HIRE_INTENTS {
                println!(
                    "{} — {} [{}]",
                    intent.key,
                    intent.label(lang),
                    intent.slug(lang)
                );
            }
        }

        Commands::Collisions => {
            let mut total = 0;
            for lang in Lang::ALL {
                for collision in registry.slug_collisions(lang) {
                    total += 1;
                    println!(
                        "{} {} slug {:?} is shared by: {}",
                        collision.lang,
                        collision.kind,
                        collision.slug,
                        collision.names.join(", ")
                    );
                }
            }
            if total == 0 {
                println!("No slug collisions in either locale.");
            }
        }

        Commands::Sitemap { base_url } => {
            for entry in registry.sitemap_entries(&base_url) {
                println!(
                    "{:.1}  {:<8} {}",
                    entry.priority, entry.change_frequency, entry.loc
                );
            }
        }
    }

    Ok(())
}

#[cfg(feature = "embedded")]
fn default_registry() -> geoslug_core::Result<GeoRegistry> {
    GeoRegistry::load()
}

#[cfg(not(feature = "embedded"))]
fn default_registry() -> geoslug_core::Result<GeoRegistry> {
    Err(GeoSlugError::NotFound(
        "no dataset bundled in this build; pass --input <path>".to_string(),
    ))
}
