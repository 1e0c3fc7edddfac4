//! Help content data model.
//!
//! The tree holds four collections keyed by coordinate string. Each collection
//! is an `Arc`-shared map of `Arc` entries: cloning a `HelpTree` copies only
//! four pointers, and mutations go through `Arc::make_mut` so only the
//! collection map and the entry on the edited path are copied. Untouched
//! entries stay pointer-equal between snapshots.

use crate::content::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A collection of entries keyed by `"<section>_<subsection>"`.
pub type Collection<T> = Arc<BTreeMap<String, Arc<T>>>;

// ─────────────────────────────────────────────────────────────────────────────
// Shared Building Blocks
// ─────────────────────────────────────────────────────────────────────────────

/// A value stored once per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Bilingual<T> {
    #[serde(default)]
    pub cz: T,
    #[serde(default)]
    pub en: T,
}

impl<T> Bilingual<T> {
    pub fn new(cz: T, en: T) -> Self {
        Self { cz, en }
    }

    /// Get the value for a language.
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::Cz => &self.cz,
            Language::En => &self.en,
        }
    }

    /// Get the value for a language mutably.
    pub fn get_mut(&mut self, language: Language) -> &mut T {
        match language {
            Language::Cz => &mut self.cz,
            Language::En => &mut self.en,
        }
    }
}

/// A titled block of stored rich text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl TextItem {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// One stored paragraph (HTML subset: plain text plus `<b>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Identity fields carried by every coordinate entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryIds {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub page_id: String,
    #[serde(default)]
    pub sub_page_id: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Collection Entries
// ─────────────────────────────────────────────────────────────────────────────

/// Opening text for a coordinate. A language may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainEntry {
    #[serde(flatten)]
    pub ids: EntryIds,
    #[serde(flatten)]
    pub texts: Bilingual<Option<TextItem>>,
}

/// Tips for a coordinate, one independently ordered list per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipsEntry {
    #[serde(flatten)]
    pub ids: EntryIds,
    #[serde(flatten)]
    pub items: Bilingual<Vec<TextItem>>,
}

/// A single function description.
///
/// The two language bodies are not required to have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Bilingual<String>,
    #[serde(flatten)]
    pub body: Bilingual<Vec<Paragraph>>,
}

/// Function descriptions for a coordinate, in one ordering shared by both languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionsEntry {
    #[serde(flatten)]
    pub ids: EntryIds,
    #[serde(default)]
    pub items: Vec<FunctionItem>,
}

/// News for a coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsEntry {
    #[serde(flatten)]
    pub ids: EntryIds,
    #[serde(default)]
    pub show: bool,
    #[serde(default)]
    pub title: Bilingual<String>,
    #[serde(flatten)]
    pub items: Bilingual<Vec<TextItem>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Help Tree
// ─────────────────────────────────────────────────────────────────────────────

/// Root aggregate of all help content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpTree {
    pub main: Collection<MainEntry>,
    pub tips: Collection<TipsEntry>,
    pub functions: Collection<FunctionsEntry>,
    pub news: Collection<NewsEntry>,
}

impl HelpTree {
    /// Total number of coordinate entries across all collections.
    pub fn entry_count(&self) -> usize {
        self.main.len() + self.tips.len() + self.functions.len() + self.news.len()
    }

    /// Whether the tree has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Produce a tree that shares no allocations with `self`.
    pub fn deep_clone(&self) -> Self {
        fn detach<T: Clone>(collection: &Collection<T>) -> Collection<T> {
            Arc::new(
                collection
                    .iter()
                    .map(|(key, entry)| (key.clone(), Arc::new((**entry).clone())))
                    .collect(),
            )
        }

        Self {
            main: detach(&self.main),
            tips: detach(&self.tips),
            functions: detach(&self.functions),
            news: detach(&self.news),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Editable Item
// ─────────────────────────────────────────────────────────────────────────────

/// Uniform projection of one entry for editing.
///
/// For opening text, tips and news `content` holds exactly one paragraph. For
/// functions it holds the native multi-paragraph body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableItem {
    pub index: usize,
    pub title: String,
    pub content: Vec<Paragraph>,
}

impl EditableItem {
    pub fn new(index: usize, title: impl Into<String>, content: Vec<Paragraph>) -> Self {
        Self {
            index,
            title: title.into(),
            content,
        }
    }

    /// Wrap a single stored body into a one-paragraph item.
    pub fn single(index: usize, item: &TextItem) -> Self {
        Self::new(index, item.title.clone(), vec![Paragraph::new(item.text.clone())])
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bilingual_access() {
        let mut title = Bilingual::new("Nová funkce".to_string(), "New function".to_string());
        assert_eq!(title.get(Language::En), "New function");
        title.get_mut(Language::Cz).push('!');
        assert_eq!(title.cz, "Nová funkce!");
    }

    #[test]
    fn test_function_item_deserialize_camel_case_and_flatten() {
        let json = r#"{
            "id": "0",
            "title": { "cz": "Lupa", "en": "" },
            "cz": [{ "text": "<b>Lupa</b>" }, { "text": "Druhý" }],
            "en": []
        }"#;
        let item: FunctionItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "0");
        assert_eq!(item.title.cz, "Lupa");
        assert_eq!(item.body.cz.len(), 2);
        assert!(item.body.en.is_empty());
    }

    #[test]
    fn test_missing_language_defaults_to_empty() {
        let json = r#"{ "id": "players_tabs", "pageId": "players", "subPageId": "tabs",
                        "cz": [{ "title": "Tip", "text": "" }] }"#;
        let tips: TipsEntry = serde_json::from_str(json).unwrap();
        assert_eq!(tips.ids.page_id, "players");
        assert_eq!(tips.items.cz.len(), 1);
        assert!(tips.items.en.is_empty());
    }

    #[test]
    fn test_main_entry_unset_language() {
        let json = r#"{ "id": "players_tabs", "cz": { "title": "Hráči", "text": "x" } }"#;
        let main: MainEntry = serde_json::from_str(json).unwrap();
        assert!(main.texts.cz.is_some());
        assert!(main.texts.en.is_none());
    }

    #[test]
    fn test_news_entry_fields() {
        let json = r#"{ "id": "players_tabs", "show": true,
                        "title": { "cz": "Novinky", "en": "" },
                        "cz": [{ "title": "A", "text": "a" }], "en": [] }"#;
        let news: NewsEntry = serde_json::from_str(json).unwrap();
        assert!(news.show);
        assert_eq!(news.title.cz, "Novinky");
        assert_eq!(news.items.cz[0].title, "A");
    }

    #[test]
    fn test_clone_shares_entries_deep_clone_does_not() {
        let mut tree = HelpTree::default();
        Arc::make_mut(&mut tree.tips).insert("players_tabs".to_string(), Arc::default());

        let shallow = tree.clone();
        assert!(Arc::ptr_eq(&tree.tips, &shallow.tips));

        let deep = tree.deep_clone();
        assert_eq!(deep, tree);
        assert!(!Arc::ptr_eq(&tree.tips, &deep.tips));
        assert!(!Arc::ptr_eq(&tree.tips["players_tabs"], &deep.tips["players_tabs"]));
    }

    #[test]
    fn test_editable_item_single() {
        let item = EditableItem::single(3, &TextItem::new("Tip", "<b>x</b>"));
        assert_eq!(item.index, 3);
        assert_eq!(item.content, vec![Paragraph::new("<b>x</b>")]);
    }

    #[test]
    fn test_entry_count() {
        let tree = HelpTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.entry_count(), 0);
    }
}
