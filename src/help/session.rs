//! Edit session controller.
//!
//! A `HelpSession` owns the working copy of the help tree and everything the
//! editor screen needs: the selected section, subsection, content kind and
//! language, the cached picker list, and the single active item with its
//! in-editor draft. All mutations of the tree go through the session.

use crate::config::Settings;
use crate::content::{
    ContentKind, Coordinate, EditableItem, HelpTree, Language, Paragraph, Section, Subsection,
};
use crate::help::{
    append, remove, reorder, resolve_item, retarget_active, subsection_options, update,
    DeferredApply, ListEntry, ListView,
};
use crate::richtext::{content_changed, content_to_document, document_to_content, RichTextDocument};
use log::{debug, info, warn};
use std::time::{Duration, Instant};

// ─────────────────────────────────────────────────────────────────────────────
// Draft
// ─────────────────────────────────────────────────────────────────────────────

/// The active item together with its in-editor draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Item as last loaded or saved.
    pub item: EditableItem,
    /// Title as currently typed.
    pub title: String,
    /// Body as currently shown in the editor.
    pub document: RichTextDocument,
}

impl Draft {
    pub fn from_item(item: EditableItem) -> Self {
        let document = content_to_document(&item.content);
        Self {
            title: item.title.clone(),
            item,
            document,
        }
    }

    /// Draft body as stored paragraphs.
    pub fn content(&self) -> Vec<Paragraph> {
        document_to_content(&self.document)
    }

    /// Draft as an `EditableItem` at the active index.
    pub fn to_item(&self) -> EditableItem {
        EditableItem::new(self.item.index, self.title.clone(), self.content())
    }

    /// Whether the draft differs from `stored`.
    pub fn differs_from(&self, stored: &EditableItem) -> bool {
        self.title != stored.title || content_changed(&stored.content, &self.content())
    }

    /// Whether the draft differs from the item it was opened from.
    pub fn is_modified(&self) -> bool {
        self.differs_from(&self.item)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// State & Outcomes
// ─────────────────────────────────────────────────────────────────────────────

/// Active-item state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    /// Nothing open in the editor.
    #[default]
    NoSelection,
    /// One item open.
    Editing(Draft),
    /// A switch to `requested` is blocked by unsaved changes in `draft`.
    PendingConflict {
        draft: Draft,
        requested: EditableItem,
    },
}

impl EditState {
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditState::NoSelection => None,
            EditState::Editing(draft) | EditState::PendingConflict { draft, .. } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            EditState::NoSelection => None,
            EditState::Editing(draft) | EditState::PendingConflict { draft, .. } => Some(draft),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, EditState::PendingConflict { .. })
    }
}

/// Result of `open_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The requested item is now active.
    Opened,
    /// Unsaved changes block the switch; resolve with `discard_and_switch`
    /// or `keep_editing`.
    Conflict,
    /// Nothing exists at the requested index.
    NotFound,
}

/// Why a save was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveRejection {
    EmptyTitle,
    EmptyContent,
}

/// Result of `save_active_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Rejected(SaveRejection),
    NoActiveItem,
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// Editing session over one working copy of the help tree.
#[derive(Debug)]
pub struct HelpSession {
    tree: HelpTree,
    section: Section,
    subsection: Option<Subsection>,
    subsection_options: Vec<Subsection>,
    kind: ContentKind,
    language: Language,
    list: ListView,
    state: EditState,
    editor_apply: DeferredApply<RichTextDocument>,
}

impl HelpSession {
    /// Start a session on a private copy of `source`.
    ///
    /// The initial section, content kind, language and editor apply delay
    /// come from `settings`. The first subsection of the section is selected
    /// and its item at index 0 opened.
    pub fn new(source: &HelpTree, settings: &Settings) -> Self {
        let mut session = Self {
            tree: source.deep_clone(),
            section: settings.default_section,
            subsection: None,
            subsection_options: Vec::new(),
            kind: settings.default_content_kind,
            language: settings.language,
            list: ListView::default(),
            state: EditState::NoSelection,
            editor_apply: DeferredApply::new(Duration::from_millis(settings.apply_delay_ms)),
        };
        session.resolve_subsections();
        session.load_first_item();
        info!(
            "Help session started: {} entries, section {}, {} subsection(s)",
            session.tree.entry_count(),
            session.section,
            session.subsection_options.len()
        );
        session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn tree(&self) -> &HelpTree {
        &self.tree
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn subsection(&self) -> Option<Subsection> {
        self.subsection
    }

    pub fn content_kind(&self) -> ContentKind {
        self.kind
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Current coordinate, if a subsection is selected.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.subsection
            .map(|subsection| Coordinate::new(self.section, subsection))
    }

    pub fn subsection_options(&self) -> &[Subsection] {
        &self.subsection_options
    }

    pub fn list_projection(&self) -> &[ListEntry] {
        self.list.entries()
    }

    /// Revision of the cached list; changes only when the list renders differently.
    pub fn list_revision(&self) -> u64 {
        self.list.revision()
    }

    /// The item open in the editor, as last loaded or saved.
    pub fn active_item(&self) -> Option<&EditableItem> {
        self.state.draft().map(|draft| &draft.item)
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.state.draft()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Whether the draft has edits that are not saved.
    pub fn is_modified(&self) -> bool {
        self.state.draft().is_some_and(Draft::is_modified)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Select a section and its first available subsection.
    ///
    /// Unsaved edits are discarded.
    pub fn select_section(&mut self, section: Section) {
        debug!("Selecting section {}", section);
        self.section = section;
        self.resolve_subsections();
        self.load_first_item();
    }

    /// Select a subsection of the current section. Unsaved edits are discarded.
    ///
    /// Returns `false` if the subsection has no content in this section.
    pub fn select_subsection(&mut self, subsection: Subsection) -> bool {
        if !self.subsection_options.contains(&subsection) {
            warn!(
                "Subsection {} is not available in section {}",
                subsection, self.section
            );
            return false;
        }
        debug!("Selecting subsection {}", subsection);
        self.subsection = Some(subsection);
        self.load_first_item();
        true
    }

    /// Select a content kind. Unsaved edits are discarded.
    pub fn select_content_kind(&mut self, kind: ContentKind) {
        debug!("Selecting content kind {}", kind);
        self.kind = kind;
        self.load_first_item();
    }

    /// Select an editing language. Unsaved edits are discarded.
    pub fn select_language(&mut self, language: Language) {
        debug!("Selecting language {}", language);
        self.language = language;
        self.load_first_item();
    }

    fn resolve_subsections(&mut self) {
        self.subsection_options = subsection_options(&self.tree, self.section);
        self.subsection = self.subsection_options.first().copied();
        if self.subsection.is_none() {
            debug!("Section {} has no subsections with content", self.section);
        }
    }

    /// Open index 0 at the current coordinate, dropping any draft.
    fn load_first_item(&mut self) {
        if self.is_modified() {
            debug!("Discarding unsaved edits on coordinate change");
        }
        let item = self.resolve(0);
        self.set_active(item);
        self.refresh_list();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Opening Items
    // ─────────────────────────────────────────────────────────────────────────

    /// Request to open the item at `index`.
    ///
    /// If the open draft differs from the stored version of the active item
    /// the switch is blocked and the session enters `PendingConflict`.
    pub fn open_item(&mut self, index: usize) -> OpenOutcome {
        let Some(requested) = self.resolve(index) else {
            debug!("No {} item at index {}", self.kind, index);
            return OpenOutcome::NotFound;
        };

        let blocked = match self.state.draft() {
            Some(draft) => self.has_unsaved_changes(draft),
            None => false,
        };

        if blocked {
            if let EditState::Editing(draft) | EditState::PendingConflict { draft, .. } =
                std::mem::take(&mut self.state)
            {
                debug!(
                    "Unsaved changes in item {} block switching to {}",
                    draft.item.index, index
                );
                self.state = EditState::PendingConflict { draft, requested };
            }
            return OpenOutcome::Conflict;
        }

        self.set_active(Some(requested));
        OpenOutcome::Opened
    }

    /// Compare the draft against the stored version of the active item.
    ///
    /// An active item that no longer resolves counts as unchanged.
    fn has_unsaved_changes(&self, draft: &Draft) -> bool {
        self.resolve(draft.item.index)
            .is_some_and(|stored| draft.differs_from(&stored))
    }

    /// Resolve a pending conflict by dropping the draft and opening the
    /// requested item.
    pub fn discard_and_switch(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            EditState::PendingConflict { requested, .. } => {
                debug!("Discarding draft, opening item {}", requested.index);
                self.set_active(Some(requested));
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Resolve a pending conflict by cancelling the switch.
    pub fn keep_editing(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            EditState::PendingConflict { draft, .. } => {
                self.state = EditState::Editing(draft);
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    fn resolve(&self, index: usize) -> Option<EditableItem> {
        let coordinate = self.coordinate()?;
        resolve_item(&self.tree, &coordinate, self.kind, self.language, index)
    }

    fn set_active(&mut self, item: Option<EditableItem>) {
        match item {
            Some(item) => {
                let draft = Draft::from_item(item);
                self.editor_apply
                    .schedule(draft.document.clone(), Instant::now());
                self.state = EditState::Editing(draft);
            }
            None => {
                self.editor_apply.cancel();
                self.state = EditState::NoSelection;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Draft Editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the draft title. Returns `false` with nothing open.
    pub fn edit_title(&mut self, title: impl Into<String>) -> bool {
        match self.state.draft_mut() {
            Some(draft) => {
                draft.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Replace the draft body. Returns `false` with nothing open.
    pub fn edit_content(&mut self, document: RichTextDocument) -> bool {
        match self.state.draft_mut() {
            Some(draft) => {
                draft.document = document;
                true
            }
            None => false,
        }
    }

    /// Toggle bold on a character range of one draft paragraph.
    pub fn toggle_bold(&mut self, block: usize, start: usize, end: usize) -> bool {
        match self.state.draft_mut() {
            Some(draft) if block < draft.document.blocks.len() => {
                draft.document.toggle_bold(block, start, end);
                true
            }
            _ => false,
        }
    }

    /// Take the editor document if its deferred apply is due.
    pub fn poll_editor_apply(&mut self, now: Instant) -> Option<RichTextDocument> {
        self.editor_apply.poll(now)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Saving
    // ─────────────────────────────────────────────────────────────────────────

    /// Save `title` and `content` into the active item.
    ///
    /// An empty title (after trimming) or no paragraphs is refused without
    /// touching the tree. A pending conflict is closed in favour of the saved
    /// item; the requested switch is dropped.
    pub fn save_active_item(&mut self, title: &str, content: Vec<Paragraph>) -> SaveOutcome {
        let (Some(coordinate), Some(draft)) = (self.coordinate(), self.state.draft()) else {
            return SaveOutcome::NoActiveItem;
        };
        if title.trim().is_empty() {
            debug!("Save refused: empty title");
            return SaveOutcome::Rejected(SaveRejection::EmptyTitle);
        }
        if content.is_empty() {
            debug!("Save refused: empty content");
            return SaveOutcome::Rejected(SaveRejection::EmptyContent);
        }

        let saved = EditableItem::new(draft.item.index, title, content);
        self.tree = update(&self.tree, &coordinate, self.kind, self.language, &saved);
        info!(
            "Saved {} item {} at {} ({})",
            self.kind, saved.index, coordinate, self.language
        );
        self.state = EditState::Editing(Draft::from_item(saved));
        self.refresh_list();
        SaveOutcome::Saved
    }

    /// Save the current draft.
    pub fn save_draft(&mut self) -> SaveOutcome {
        match self.state.draft() {
            Some(draft) => {
                let title = draft.title.clone();
                let content = draft.content();
                self.save_active_item(&title, content)
            }
            None => SaveOutcome::NoActiveItem,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // List Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a new entry. The new entry is not opened.
    pub fn add_item(&mut self) {
        let Some(coordinate) = self.coordinate() else {
            return;
        };
        self.tree = append(&self.tree, &coordinate, self.kind);
        self.refresh_list();
    }

    /// Move an entry. The active item keeps its index.
    pub fn reorder_items(&mut self, from: usize, to: usize) {
        let Some(coordinate) = self.coordinate() else {
            return;
        };
        self.tree = reorder(&self.tree, &coordinate, self.kind, self.language, from, to);
        self.refresh_list();
    }

    /// Remove an entry and re-target the active item.
    pub fn remove_item(&mut self, index: usize) {
        let Some(coordinate) = self.coordinate() else {
            return;
        };
        let removal = remove(
            &self.tree,
            &coordinate,
            self.kind,
            self.language,
            index,
            self.active_item(),
        );
        self.tree = removal.tree;

        if removal.removed {
            self.state = match std::mem::take(&mut self.state) {
                EditState::NoSelection => EditState::NoSelection,
                EditState::Editing(draft) => match retarget_draft(draft, removal.active) {
                    Some(draft) => EditState::Editing(draft),
                    None => EditState::NoSelection,
                },
                EditState::PendingConflict { draft, requested } => {
                    match retarget_draft(draft, removal.active) {
                        Some(draft) => match retarget_active(Some(&requested), index) {
                            Some(requested) => EditState::PendingConflict { draft, requested },
                            None => EditState::Editing(draft),
                        },
                        None => EditState::NoSelection,
                    }
                }
            };
            if matches!(self.state, EditState::NoSelection) {
                self.editor_apply.cancel();
            }
        }
        self.refresh_list();
    }

    fn refresh_list(&mut self) {
        match self.coordinate() {
            Some(coordinate) => {
                self.list
                    .refresh(&self.tree, &coordinate, self.kind, self.language);
            }
            None => {
                self.list.clear();
            }
        }
    }
}

/// Carry a draft over to its re-targeted item, keeping the typed edits.
fn retarget_draft(mut draft: Draft, active: Option<EditableItem>) -> Option<Draft> {
    draft.item = active?;
    Some(draft)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
