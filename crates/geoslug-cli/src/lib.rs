//! geoslug-cli
//! ===========
//!
//! Command-line interface for the `geoslug-core` slug codec.
//!
//! This crate primarily provides a binary (`geoslug-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install geoslug-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! geoslug-cli --help
//! geoslug-cli stats
//! geoslug-cli slug city "Київ"
//! geoslug-cli --lang=ru resolve city kharkov
//! ```
//!
//! For programmatic access to the codec and registries, use the
//! [`geoslug-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/geoslug/geoslug-rs>
//! - Core crate: <https://docs.rs/geoslug-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
