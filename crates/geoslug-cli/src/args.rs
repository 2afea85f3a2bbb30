use clap::{Parser, Subcommand, ValueEnum};
use geoslug_core::Lang;

/// CLI arguments for geoslug-cli
#[derive(Debug, Parser)]
#[command(
    name = "geoslug",
    version,
    about = "CLI for the geoslug-core locale-aware slug codec and geographic registries"
)]
pub struct CliArgs {
    /// Path to a custom registry dataset (JSON); default: the bundled one
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Locale whose slug namespace to operate in (ua or ru)
    #[arg(short = 'l', long = "lang", global = true, default_value = "ua")]
    pub lang: Lang,

    #[command(subcommand)]
    pub command: Commands,
}

/// Entity kind selector for slug/resolve commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    City,
    Region,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the registry contents
    Stats,

    /// List all cities with their localized names and slugs
    Cities,

    /// List all regions with their localized names and slugs
    Regions,

    /// Compute the slug for a canonical Ukrainian name
    Slug {
        /// Whether the name is a city or a region
        #[arg(value_enum)]
        kind: KindArg,

        /// Canonical Ukrainian name (e.g. "Київ", "Харківська область")
        name: String,
    },

    /// Resolve a slug back to its canonical entity
    Resolve {
        /// Whether the slug names a city or a region
        #[arg(value_enum)]
        kind: KindArg,

        /// URL slug in the selected locale's namespace
        slug: String,
    },

    /// Search cities by substring (accent- and case-insensitive)
    Search {
        /// Substring to search for
        query: String,
    },

    /// List hire intents with their localized labels and slugs
    Intents,

    /// Report slug collisions across both locales
    Collisions,

    /// Print the full sitemap URL set
    Sitemap {
        /// Base URL prefixed to every path
        #[arg(long = "base-url", default_value = "https://example.com")]
        base_url: String,
    },
}
