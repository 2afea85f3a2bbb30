// src/lib.rs
//
// Umbrella crate for the workspace: re-exports geoslug-core so the demos in
// demos/ can use a single import path (`geoslug_rs::prelude::*`).

pub use geoslug_core::*;
