//! Fixed enumerations that address help content.
//!
//! Sections and subsections mirror the product's pages. Their `value()` strings
//! are the stored keys used to build coordinates (`"<section>_<subsection>"`),
//! while `label()` is the translation key shown in pickers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Language
// ─────────────────────────────────────────────────────────────────────────────

/// Content languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Czech (primary authoring language)
    #[default]
    Cz,
    /// English
    En,
}

impl Language {
    /// Get the stored key for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Cz => "cz",
            Language::En => "en",
        }
    }

    /// Get all languages.
    pub fn all() -> &'static [Language] {
        &[Language::Cz, Language::En]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cz" => Ok(Language::Cz),
            "en" => Ok(Language::En),
            other => Err(format!("unknown language '{}'", other)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Content Kind
// ─────────────────────────────────────────────────────────────────────────────

/// The four independently shaped help-content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Function descriptions (multi-paragraph, shared ordering)
    #[default]
    Functions,
    /// News entries
    News,
    /// Tips
    Tips,
    /// Opening text (one per coordinate and language)
    Main,
}

impl ContentKind {
    /// Get all content kinds in picker order.
    pub fn all() -> &'static [ContentKind] {
        &[
            ContentKind::Functions,
            ContentKind::News,
            ContentKind::Tips,
            ContentKind::Main,
        ]
    }

    /// Get the stored key for this kind.
    pub fn value(&self) -> &'static str {
        match self {
            ContentKind::Functions => "functions",
            ContentKind::News => "news",
            ContentKind::Tips => "tips",
            ContentKind::Main => "main",
        }
    }

    /// Get the translation key of the picker button.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Functions => "editFunctions",
            ContentKind::News => "editNews",
            ContentKind::Tips => "editTips",
            ContentKind::Main => "editOpeningText",
        }
    }

    /// Whether entries of this kind can be appended, reordered and removed.
    ///
    /// Opening text is a singleton per coordinate and language.
    pub fn is_list(&self) -> bool {
        !matches!(self, ContentKind::Main)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ContentKind::all()
            .iter()
            .copied()
            .find(|kind| kind.value() == wanted)
            .ok_or_else(|| format!("unknown content kind '{}'", s.trim()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Section
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level product sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Players,
    Formations,
    Videomaps,
    Goalkeepers,
    Games,
    Teams,
}

impl Section {
    /// Get all sections in picker order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Players,
            Section::Formations,
            Section::Videomaps,
            Section::Goalkeepers,
            Section::Games,
            Section::Teams,
        ]
    }

    /// Get the stored key used in coordinates.
    pub fn value(&self) -> &'static str {
        match self {
            Section::Players => "players",
            Section::Formations => "formations",
            Section::Videomaps => "videomaps",
            Section::Goalkeepers => "goalkeepers",
            Section::Games => "games",
            Section::Teams => "teams",
        }
    }

    /// Get the translation key for display.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Goalkeepers => "goalkeeper",
            other => other.value(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::all()
            .iter()
            .copied()
            .find(|section| section.value() == wanted)
            .ok_or_else(|| format!("unknown section '{}'", s.trim()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Subsection
// ─────────────────────────────────────────────────────────────────────────────

/// Subsections (pages) within a section.
///
/// The same subsection may appear under several sections, e.g. `tabs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsection {
    Tabs,
    Gamelog,
    Trend,
    PlayerCard,
    ComparePlayers,
    SimilarityPlayers,
    DataTemplates,
    Pairs,
    Formations,
    PlayerCombinations,
    Shots,
    Heatmap,
    Passes,
    Faceoffs,
    ZoneEntries,
    ZoneExits,
    Shootouts,
    NetZones,
    ShotMap,
    GoalkeeperCard,
    CompareGoalkeepers,
    GraphicOverview,
    Report,
    Players,
    Goalkeepers,
    HeadToHead,
}

impl Subsection {
    /// Get all subsections in global picker order.
    pub fn all() -> &'static [Subsection] {
        use Subsection::*;
        &[
            Tabs,
            Gamelog,
            Trend,
            PlayerCard,
            ComparePlayers,
            SimilarityPlayers,
            DataTemplates,
            Pairs,
            Formations,
            PlayerCombinations,
            Shots,
            Heatmap,
            Passes,
            Faceoffs,
            ZoneEntries,
            ZoneExits,
            Shootouts,
            NetZones,
            ShotMap,
            GoalkeeperCard,
            CompareGoalkeepers,
            GraphicOverview,
            Report,
            Players,
            Goalkeepers,
            HeadToHead,
        ]
    }

    /// Get the stored key used in coordinates.
    ///
    /// `compare-coalkeepers` is spelled as it is stored in existing content.
    pub fn value(&self) -> &'static str {
        use Subsection::*;
        match self {
            Tabs => "tabs",
            Gamelog => "gamelog",
            Trend => "trend",
            PlayerCard => "player-card",
            ComparePlayers => "compare-players",
            SimilarityPlayers => "similarity-players",
            DataTemplates => "data-settings",
            Pairs => "pairs",
            Formations => "formations",
            PlayerCombinations => "player-combinations",
            Shots => "shots",
            Heatmap => "heatmap",
            Passes => "passes",
            Faceoffs => "faceoffs",
            ZoneEntries => "entries",
            ZoneExits => "exits",
            Shootouts => "shootouts",
            NetZones => "net-zones",
            ShotMap => "shotmap",
            GoalkeeperCard => "goalkeeper-card",
            CompareGoalkeepers => "compare-coalkeepers",
            GraphicOverview => "graphic-overview",
            Report => "report",
            Players => "players",
            Goalkeepers => "goalkeepers",
            HeadToHead => "h2h",
        }
    }

    /// Get the translation key for display.
    pub fn label(&self) -> &'static str {
        use Subsection::*;
        match self {
            Tabs => "tabs",
            Gamelog => "gamelog",
            Trend => "trend",
            PlayerCard => "playerCard",
            ComparePlayers => "comparePlayers",
            SimilarityPlayers => "similarityPlayers",
            DataTemplates => "dataTemplates",
            Pairs => "pairs",
            Formations => "formations",
            PlayerCombinations => "playerCombinations",
            Shots => "shots",
            Heatmap => "heatmap",
            Passes => "passes",
            Faceoffs => "faceoffs",
            ZoneEntries => "zoneEntries",
            ZoneExits => "zoneExits",
            Shootouts => "shootouts",
            NetZones => "netZones",
            ShotMap => "shotMap",
            GoalkeeperCard => "goalkeeperCard",
            CompareGoalkeepers => "compareGoalkeepers",
            GraphicOverview => "graphicOverview",
            Report => "report",
            Players => "players",
            Goalkeepers => "goalkeepers",
            HeadToHead => "headToHead",
        }
    }

    /// Look up a subsection by its stored key.
    pub fn from_value(value: &str) -> Option<Self> {
        Subsection::all()
            .iter()
            .copied()
            .find(|subsection| subsection.value() == value)
    }
}

impl fmt::Display for Subsection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Subsection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subsection::from_value(s.trim()).ok_or_else(|| format!("unknown subsection '{}'", s.trim()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Coordinate
// ─────────────────────────────────────────────────────────────────────────────

/// A content location: the (section, subsection) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub section: Section,
    pub subsection: Subsection,
}

impl Coordinate {
    /// Create a coordinate.
    pub fn new(section: Section, subsection: Subsection) -> Self {
        Self {
            section,
            subsection,
        }
    }

    /// The composite key used by every collection, `"<section>_<subsection>"`.
    pub fn key(&self) -> String {
        format!("{}_{}", self.section.value(), self.subsection.value())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.section.value(), self.subsection.value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
