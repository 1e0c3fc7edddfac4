//! Coordinate resolution: from (coordinate, kind, language) to list entries
//! and editable items.
//!
//! Every lookup degrades to "nothing": an absent coordinate, index or
//! language yields an empty list or `None`, never an error.

use crate::content::{
    ContentKind, Coordinate, EditableItem, HelpTree, Language, Section, Subsection, TextItem,
};
use crate::help::ListEntry;
use std::collections::HashSet;

/// Subsections of `section` that have function content, in global order.
///
/// Discovered from the keys of the `functions` collection. Returns an empty
/// list when the section has no coordinates.
pub fn subsection_options(tree: &HelpTree, section: Section) -> Vec<Subsection> {
    let prefix = format!("{}_", section.value());
    let present: HashSet<&str> = tree
        .functions
        .keys()
        .filter_map(|key| key.strip_prefix(prefix.as_str()))
        .collect();

    Subsection::all()
        .iter()
        .copied()
        .filter(|subsection| present.contains(subsection.value()))
        .collect()
}

/// List entries shown in the reorderable picker for one kind and language.
pub fn list_projection(
    tree: &HelpTree,
    coordinate: &Coordinate,
    kind: ContentKind,
    language: Language,
) -> Vec<ListEntry> {
    let key = coordinate.key();

    match kind {
        ContentKind::Main => tree
            .main
            .get(&key)
            .and_then(|entry| entry.texts.get(language).as_ref())
            .map(|item| vec![ListEntry::new(0, item.title.clone())])
            .unwrap_or_default(),
        ContentKind::Functions => tree
            .functions
            .get(&key)
            .map(|entry| {
                entry
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| ListEntry::new(index, item.title.get(language).clone()))
                    .collect()
            })
            .unwrap_or_default(),
        ContentKind::News => tree
            .news
            .get(&key)
            .map(|entry| titled_entries(entry.items.get(language)))
            .unwrap_or_default(),
        ContentKind::Tips => tree
            .tips
            .get(&key)
            .map(|entry| titled_entries(entry.items.get(language)))
            .unwrap_or_default(),
    }
}

fn titled_entries(items: &[TextItem]) -> Vec<ListEntry> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| ListEntry::new(index, item.title.clone()))
        .collect()
}

/// Fetch one item as an `EditableItem`.
///
/// Opening text only exists at index 0. Tips and news bodies are wrapped into
/// a one-paragraph `content`; function bodies keep all their paragraphs.
pub fn resolve_item(
    tree: &HelpTree,
    coordinate: &Coordinate,
    kind: ContentKind,
    language: Language,
    index: usize,
) -> Option<EditableItem> {
    let key = coordinate.key();

    match kind {
        ContentKind::Main => {
            if index != 0 {
                return None;
            }
            let item = tree.main.get(&key)?.texts.get(language).as_ref()?;
            Some(EditableItem::single(index, item))
        }
        ContentKind::Functions => {
            let item = tree.functions.get(&key)?.items.get(index)?;
            Some(EditableItem::new(
                index,
                item.title.get(language).clone(),
                item.body.get(language).clone(),
            ))
        }
        ContentKind::News => {
            let item = tree.news.get(&key)?.items.get(language).get(index)?;
            Some(EditableItem::single(index, item))
        }
        ContentKind::Tips => {
            let item = tree.tips.get(&key)?.items.get(language).get(index)?;
            Some(EditableItem::single(index, item))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
