//! Picker list view model.

use crate::content::{ContentKind, Coordinate, HelpTree, Language};
use crate::help::list_projection;
use log::debug;

/// One row of the reorderable picker list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEntry {
    pub index: usize,
    pub label: String,
    pub disabled: bool,
}

impl ListEntry {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
            disabled: false,
        }
    }
}

/// Whether two lists render differently.
///
/// Compares length, then `(label, disabled)` pairwise by position.
pub fn changed(new_list: &[ListEntry], old_list: &[ListEntry]) -> bool {
    new_list.len() != old_list.len()
        || new_list
            .iter()
            .zip(old_list)
            .any(|(new, old)| new.label != old.label || new.disabled != old.disabled)
}

/// Cached picker list that is only replaced when its rendering would change.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    entries: Vec<ListEntry>,
    revision: u64,
}

impl ListView {
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Incremented each time the cached entries are replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Re-derive the list and store it if it changed. Returns whether it did.
    pub fn refresh(
        &mut self,
        tree: &HelpTree,
        coordinate: &Coordinate,
        kind: ContentKind,
        language: Language,
    ) -> bool {
        let fresh = list_projection(tree, coordinate, kind, language);
        if !changed(&fresh, &self.entries) {
            return false;
        }
        debug!(
            "List for {} {} ({}) changed: {} -> {} entries",
            coordinate,
            kind,
            language,
            self.entries.len(),
            fresh.len()
        );
        self.entries = fresh;
        self.revision += 1;
        true
    }

    /// Empty the list, e.g. when no subsection is selected.
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        self.revision += 1;
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fixtures::sample_tree;
    use crate::content::{Section, Subsection};

    fn entries(labels: &[&str]) -> Vec<ListEntry> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| ListEntry::new(i, *label))
            .collect()
    }

    #[test]
    fn test_changed_length_and_labels() {
        let a = entries(&["A", "B"]);
        assert!(!changed(&a, &a.clone()));
        assert!(changed(&entries(&["A"]), &a));
        assert!(changed(&entries(&["A", "C"]), &a));
    }

    #[test]
    fn test_changed_disabled_flag() {
        let a = entries(&["A"]);
        let mut b = a.clone();
        b[0].disabled = true;
        assert!(changed(&b, &a));
    }

    #[test]
    fn test_changed_ignores_index_field() {
        let a = vec![ListEntry::new(0, "A")];
        let b = vec![ListEntry::new(7, "A")];
        assert!(!changed(&a, &b));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let tree = sample_tree();
        let coord = Coordinate::new(Section::Players, Subsection::Tabs);
        let first = list_projection(&tree, &coord, ContentKind::Functions, Language::Cz);
        let second = list_projection(&tree, &coord, ContentKind::Functions, Language::Cz);
        assert!(!changed(&second, &first));
    }

    #[test]
    fn test_list_view_refresh() {
        let tree = sample_tree();
        let coord = Coordinate::new(Section::Players, Subsection::Tabs);
        let mut view = ListView::default();

        assert!(view.refresh(&tree, &coord, ContentKind::Tips, Language::Cz));
        assert_eq!(view.entries().len(), 3);
        assert_eq!(view.revision(), 1);

        assert!(!view.refresh(&tree, &coord, ContentKind::Tips, Language::Cz));
        assert_eq!(view.revision(), 1);

        assert!(view.refresh(&tree, &coord, ContentKind::Tips, Language::En));
        assert_eq!(view.entries()[0].label, "Compare players");
        assert_eq!(view.revision(), 2);
    }
}
