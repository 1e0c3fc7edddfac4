//! Help Studio
//!
//! Editing core for multilingual in-app help content: opening texts, tips,
//! function descriptions and news attached to sections and subsections of a
//! sports-analytics product.
//!
//! - [`content`]: the help tree, its catalogs and file ingestion
//! - [`richtext`]: stored HTML subset to rich-text document conversion
//! - [`help`]: resolver, mutation engine, list projection and edit session
//! - [`config`]: persisted user settings
//! - [`cli`]: a line-oriented driver for a session

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod help;
pub mod richtext;

pub use error::{Error, Result};
