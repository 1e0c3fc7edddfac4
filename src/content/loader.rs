//! Help content ingestion.
//!
//! Content arrives from an external source as a JSON, YAML or TOML document.
//! Both the bare tree (`{ main, tips, functions, news }`) and the wrapped help
//! state (`{ help: {...}, isLoading, showHelpSidebar }`) are accepted.

use crate::content::HelpTree;
use crate::error::{Error, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// Format Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Supported serialization formats for help content files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Yaml,
    Toml,
}

impl ContentFormat {
    /// Detect format from extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Detect format from a file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get display name for the format.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Key holding the tree inside a wrapped help state document.
const WRAPPED_TREE_KEY: &str = "help";

/// Parse help content from text in the given format.
///
/// A document with a top-level `help` key is a wrapped help state and only
/// that value is read as the tree. Anything else is read as a bare tree.
pub fn parse_help_tree(text: &str, format: ContentFormat) -> Result<HelpTree> {
    if text.trim().is_empty() {
        debug!("Empty {} help content, using an empty tree", format.display_name());
        return Ok(HelpTree::default());
    }

    let tree: HelpTree = match format {
        ContentFormat::Json => {
            let mut value: serde_json::Value = serde_json::from_str(text)?;
            let wrapped = value
                .as_object_mut()
                .and_then(|map| map.remove(WRAPPED_TREE_KEY));
            serde_json::from_value(unwrap_tree(value, wrapped, format))?
        }
        ContentFormat::Yaml => {
            let mut value: serde_yaml::Value = serde_yaml::from_str(text)?;
            let wrapped = value
                .as_mapping_mut()
                .and_then(|map| map.remove(WRAPPED_TREE_KEY));
            serde_yaml::from_value(unwrap_tree(value, wrapped, format))?
        }
        ContentFormat::Toml => {
            let mut value: toml::Value = toml::from_str(text)?;
            let wrapped = value
                .as_table_mut()
                .and_then(|table| table.remove(WRAPPED_TREE_KEY));
            unwrap_tree(value, wrapped, format).try_into()?
        }
    };

    Ok(tree)
}

fn unwrap_tree<V>(document: V, wrapped: Option<V>, format: ContentFormat) -> V {
    match wrapped {
        Some(tree) => {
            debug!("Reading {} help content from wrapped help state", format.display_name());
            tree
        }
        None => document,
    }
}

/// Load help content from a file, detecting the format from its extension.
pub fn load_help_tree(path: &Path) -> Result<HelpTree> {
    let format = ContentFormat::from_path(path)
        .ok_or_else(|| Error::UnsupportedContentFormat(path.to_path_buf()))?;

    debug!("Loading {} help content from {}", format.display_name(), path.display());

    let text = fs::read_to_string(path).map_err(|e| Error::ContentLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tree = parse_help_tree(&text, format)?;

    info!(
        "Loaded help content from {}: {} opening texts, {} tips, {} functions, {} news",
        path.display(),
        tree.main.len(),
        tree.tips.len(),
        tree.functions.len(),
        tree.news.len()
    );
    Ok(tree)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
