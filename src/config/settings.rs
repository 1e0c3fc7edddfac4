//! User settings for the help editor
//!
//! This module defines the `Settings` struct that holds the user-configurable
//! options, with serde support for JSON persistence.

use crate::content::{ContentKind, Language, Section};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default delay before freshly loaded content is applied to the editor.
pub const DEFAULT_APPLY_DELAY_MS: u64 = 30;

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences and application settings.
///
/// This struct is serialized to JSON and persisted to the user's config directory.
/// All fields have sensible defaults via the `Default` trait and `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Session Start
    // ─────────────────────────────────────────────────────────────────────────
    /// Editing language selected when a session starts
    pub language: Language,

    /// Section selected when a session starts
    pub default_section: Section,

    /// Content kind selected when a session starts
    pub default_content_kind: ContentKind,

    // ─────────────────────────────────────────────────────────────────────────
    // Content Source
    // ─────────────────────────────────────────────────────────────────────────
    /// Help content file opened when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,

    /// Recently opened content files (most recent first)
    pub recent_content_files: Vec<PathBuf>,

    /// Maximum number of recent content files to remember
    pub max_recent_files: usize,

    // ─────────────────────────────────────────────────────────────────────────
    // Editor
    // ─────────────────────────────────────────────────────────────────────────
    /// Delay in milliseconds before loaded content is pushed into the editor
    pub apply_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            default_section: Section::default(),
            default_content_kind: ContentKind::default(),
            content_path: None,
            recent_content_files: Vec::new(),
            max_recent_files: 10,
            apply_delay_ms: DEFAULT_APPLY_DELAY_MS,
        }
    }
}

impl Settings {
    /// Add a content file to the recent files list.
    ///
    /// If the file already exists in the list, it's moved to the front.
    /// The list is trimmed to `max_recent_files`.
    pub fn add_recent_content_file(&mut self, path: PathBuf) {
        self.recent_content_files.retain(|p| p != &path);
        self.recent_content_files.insert(0, path);
        self.recent_content_files.truncate(self.max_recent_files);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation Constants and Sanitization
    // ─────────────────────────────────────────────────────────────────────────

    /// Maximum editor apply delay.
    pub const MAX_APPLY_DELAY_MS: u64 = 1000;
    /// Minimum number of remembered content files.
    pub const MIN_RECENT_FILES: usize = 1;
    /// Maximum number of remembered content files.
    pub const MAX_RECENT_FILES: usize = 100;

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// This is useful after loading settings from a file that might have
    /// been manually edited with invalid values.
    pub fn sanitize(&mut self) {
        self.apply_delay_ms = self.apply_delay_ms.min(Self::MAX_APPLY_DELAY_MS);

        self.max_recent_files = self
            .max_recent_files
            .clamp(Self::MIN_RECENT_FILES, Self::MAX_RECENT_FILES);
        self.recent_content_files.truncate(self.max_recent_files);

        // A blank path is the same as no path
        if self
            .content_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            self.content_path = None;
        }
    }

    /// Load settings and sanitize them to ensure validity.
    ///
    /// This is a convenience method that deserializes and then sanitizes.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
