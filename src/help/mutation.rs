//! Mutation engine: add, reorder, update and remove entries.
//!
//! Every operation takes the current tree and returns the next snapshot. The
//! input tree is never modified. Only the collection map and the entry on the
//! edited path are copied; every other entry stays pointer-equal to the input.
//! Absent coordinates, indices and languages turn an operation into a no-op.

use crate::content::{
    Bilingual, Collection, ContentKind, Coordinate, EditableItem, FunctionItem, HelpTree, Language,
    Paragraph, TextItem,
};
use log::debug;
use std::sync::Arc;

// ─────────────────────────────────────────────────────────────────────────────
// Default Titles
// ─────────────────────────────────────────────────────────────────────────────

const NEW_FUNCTION_TITLE_CZ: &str = "Nová funkce";
const NEW_FUNCTION_TITLE_EN: &str = "New function";
const NEW_TIP_TITLE_CZ: &str = "Nový tip";
const NEW_TIP_TITLE_EN: &str = "New tip";
const NEW_NEWS_TITLE_CZ: &str = "Nová novinka";
const NEW_NEWS_TITLE_EN: &str = "New news";

/// Replace the entry at `key` with an edited copy.
///
/// `edit` returns `false` to abandon the change, in which case the collection
/// is left untouched (not even re-allocated).
fn edit_entry<T: Clone>(
    collection: &mut Collection<T>,
    key: &str,
    edit: impl FnOnce(&mut T) -> bool,
) -> bool {
    let Some(current) = collection.get(key) else {
        return false;
    };
    let mut entry = (**current).clone();
    if !edit(&mut entry) {
        return false;
    }
    Arc::make_mut(collection).insert(key.to_string(), Arc::new(entry));
    true
}

/// Move `from` to `to` within `items`. Out-of-range or equal indices do nothing.
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

fn log_noop(operation: &str, coordinate: &Coordinate, kind: ContentKind) {
    debug!("{} on {} {} had no effect", operation, coordinate, kind);
}

// ─────────────────────────────────────────────────────────────────────────────
// Append
// ─────────────────────────────────────────────────────────────────────────────

/// Append a default-titled, empty entry.
///
/// Functions get one new item whose id is the coordinate key. Tips and news
/// get one new pair pushed to both languages. Opening text cannot be appended.
pub fn append(tree: &HelpTree, coordinate: &Coordinate, kind: ContentKind) -> HelpTree {
    let key = coordinate.key();
    let mut next = tree.clone();

    let applied = match kind {
        ContentKind::Main => false,
        ContentKind::Functions => edit_entry(&mut next.functions, &key, |entry| {
            entry.items.push(FunctionItem {
                id: key.clone(),
                title: Bilingual::new(
                    NEW_FUNCTION_TITLE_CZ.to_string(),
                    NEW_FUNCTION_TITLE_EN.to_string(),
                ),
                body: Bilingual::new(
                    vec![Paragraph::default()],
                    vec![Paragraph::default()],
                ),
            });
            true
        }),
        ContentKind::Tips => edit_entry(&mut next.tips, &key, |entry| {
            entry.items.cz.push(TextItem::new(NEW_TIP_TITLE_CZ, ""));
            entry.items.en.push(TextItem::new(NEW_TIP_TITLE_EN, ""));
            true
        }),
        ContentKind::News => edit_entry(&mut next.news, &key, |entry| {
            entry.items.cz.push(TextItem::new(NEW_NEWS_TITLE_CZ, ""));
            entry.items.en.push(TextItem::new(NEW_NEWS_TITLE_EN, ""));
            true
        }),
    };

    if applied {
        debug!("Appended {} entry at {}", kind, coordinate);
    } else {
        log_noop("Append", coordinate, kind);
    }
    next
}

// ─────────────────────────────────────────────────────────────────────────────
// Reorder
// ─────────────────────────────────────────────────────────────────────────────

/// Move one element from `from` to `to`.
///
/// Functions share one ordering across languages. After the move the item now
/// at `to` takes the id that position held before, and the displaced item
/// takes the moved item's old id, so the set of ids is unchanged. Tips and
/// news only reorder the `language` list.
pub fn reorder(
    tree: &HelpTree,
    coordinate: &Coordinate,
    kind: ContentKind,
    language: Language,
    from: usize,
    to: usize,
) -> HelpTree {
    let key = coordinate.key();
    let mut next = tree.clone();

    let applied = match kind {
        ContentKind::Main => false,
        ContentKind::Functions => edit_entry(&mut next.functions, &key, |entry| {
            let items = &mut entry.items;
            if from == to || from >= items.len() || to >= items.len() {
                return false;
            }
            let moved_id = items[from].id.clone();
            let target_id = items[to].id.clone();
            move_item(items, from, to);
            let displaced = if from < to { to - 1 } else { to + 1 };
            items[to].id = target_id;
            items[displaced].id = moved_id;
            true
        }),
        ContentKind::Tips => edit_entry(&mut next.tips, &key, |entry| {
            move_item(entry.items.get_mut(language), from, to)
        }),
        ContentKind::News => edit_entry(&mut next.news, &key, |entry| {
            move_item(entry.items.get_mut(language), from, to)
        }),
    };

    if applied {
        debug!(
            "Moved {} entry {} -> {} at {} ({})",
            kind, from, to, coordinate, language
        );
    } else {
        log_noop("Reorder", coordinate, kind);
    }
    next
}

// ─────────────────────────────────────────────────────────────────────────────
// Update
// ─────────────────────────────────────────────────────────────────────────────

/// Overwrite the title and body of the entry at `item.index`.
///
/// Tips, news and opening text store a single body, so only the first
/// paragraph of `item.content` is kept (empty when there is none).
pub fn update(
    tree: &HelpTree,
    coordinate: &Coordinate,
    kind: ContentKind,
    language: Language,
    item: &EditableItem,
) -> HelpTree {
    let key = coordinate.key();
    let mut next = tree.clone();
    let first_text = item
        .content
        .first()
        .map(|paragraph| paragraph.text.clone())
        .unwrap_or_default();

    let write_text = |target: &mut TextItem| {
        target.title = item.title.clone();
        target.text = first_text.clone();
    };

    let applied = match kind {
        ContentKind::Main => edit_entry(&mut next.main, &key, |entry| {
            match entry.texts.get_mut(language) {
                Some(text) => {
                    write_text(text);
                    true
                }
                None => false,
            }
        }),
        ContentKind::Functions => edit_entry(&mut next.functions, &key, |entry| {
            match entry.items.get_mut(item.index) {
                Some(function) => {
                    *function.title.get_mut(language) = item.title.clone();
                    *function.body.get_mut(language) = item.content.clone();
                    true
                }
                None => false,
            }
        }),
        ContentKind::Tips => edit_entry(&mut next.tips, &key, |entry| {
            match entry.items.get_mut(language).get_mut(item.index) {
                Some(text) => {
                    write_text(text);
                    true
                }
                None => false,
            }
        }),
        ContentKind::News => edit_entry(&mut next.news, &key, |entry| {
            match entry.items.get_mut(language).get_mut(item.index) {
                Some(text) => {
                    write_text(text);
                    true
                }
                None => false,
            }
        }),
    };

    if applied {
        debug!(
            "Updated {} entry {} at {} ({})",
            kind, item.index, coordinate, language
        );
    } else {
        log_noop("Update", coordinate, kind);
    }
    next
}

// ─────────────────────────────────────────────────────────────────────────────
// Remove
// ─────────────────────────────────────────────────────────────────────────────

/// Result of a removal: the next tree and the re-targeted active item.
#[derive(Debug, Clone)]
pub struct Removal {
    pub tree: HelpTree,
    pub active: Option<EditableItem>,
    /// Whether an element was actually removed.
    pub removed: bool,
}

/// Remove the element at `index` and re-target the active item.
///
/// Functions are renumbered so every surviving id equals its position. Tips
/// and news only lose the element from the `language` list. When something
/// was removed, an active item at `index` is cleared and one past it moves
/// down by one.
pub fn remove(
    tree: &HelpTree,
    coordinate: &Coordinate,
    kind: ContentKind,
    language: Language,
    index: usize,
    active: Option<&EditableItem>,
) -> Removal {
    let key = coordinate.key();
    let mut next = tree.clone();

    let removed = match kind {
        ContentKind::Main => false,
        ContentKind::Functions => edit_entry(&mut next.functions, &key, |entry| {
            if index >= entry.items.len() {
                return false;
            }
            entry.items.remove(index);
            for (position, item) in entry.items.iter_mut().enumerate() {
                item.id = position.to_string();
            }
            true
        }),
        ContentKind::Tips => edit_entry(&mut next.tips, &key, |entry| {
            remove_text_item(entry.items.get_mut(language), index)
        }),
        ContentKind::News => edit_entry(&mut next.news, &key, |entry| {
            remove_text_item(entry.items.get_mut(language), index)
        }),
    };

    let active = if removed {
        debug!(
            "Removed {} entry {} at {} ({})",
            kind, index, coordinate, language
        );
        retarget_active(active, index)
    } else {
        log_noop("Remove", coordinate, kind);
        active.cloned()
    };

    Removal {
        tree: next,
        active,
        removed,
    }
}

fn remove_text_item(items: &mut Vec<TextItem>, index: usize) -> bool {
    if index >= items.len() {
        return false;
    }
    items.remove(index);
    true
}

/// Re-target an active item after the element at `removed_index` was removed.
pub fn retarget_active(active: Option<&EditableItem>, removed_index: usize) -> Option<EditableItem> {
    let item = active?;
    if item.index == removed_index {
        return None;
    }
    let mut item = item.clone();
    if item.index > removed_index {
        item.index -= 1;
    }
    Some(item)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
