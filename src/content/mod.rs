//! Help content module
//!
//! This module defines the help content tree, the fixed enumerations that
//! address it (sections, subsections, content kinds, languages), and the
//! loader that ingests content from JSON, YAML or TOML files.

mod catalog;
mod loader;
mod model;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::*;
pub use loader::*;
pub use model::*;
