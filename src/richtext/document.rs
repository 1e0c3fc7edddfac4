//! Rich-text document model.
//!
//! A document is an ordered list of paragraph blocks, each an ordered list of
//! styled text spans. Only bold is interpreted; italic is carried as a
//! reserved flag so documents coming from an editor widget survive intact.

use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Span
// ─────────────────────────────────────────────────────────────────────────────

/// A run of text sharing one style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
}

impl TextSpan {
    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    fn same_style(&self, other: &TextSpan) -> bool {
        self.bold == other.bold && self.italic == other.italic
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Block
// ─────────────────────────────────────────────────────────────────────────────

/// A paragraph block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub spans: Vec<TextSpan>,
}

impl Default for Block {
    /// An empty paragraph holds one empty span, never zero spans.
    fn default() -> Self {
        Self {
            spans: vec![TextSpan::default()],
        }
    }
}

impl Block {
    pub fn new(spans: Vec<TextSpan>) -> Self {
        let mut block = Self { spans };
        if block.spans.is_empty() {
            block.spans.push(TextSpan::default());
        }
        block
    }

    /// Length of the block in characters.
    pub fn char_len(&self) -> usize {
        self.spans.iter().map(TextSpan::char_len).sum()
    }

    /// Merge adjacent spans of the same style and drop empty spans.
    ///
    /// A block that ends up with no text keeps a single empty unstyled span.
    pub fn normalize(&mut self) {
        let mut merged: Vec<TextSpan> = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            if span.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.same_style(&span) => last.text.push_str(&span.text),
                _ => merged.push(span),
            }
        }
        if merged.is_empty() {
            merged.push(TextSpan::default());
        }
        self.spans = merged;
    }

    /// Split spans so that `offset` (in characters) falls on a span boundary.
    fn split_at(&mut self, offset: usize) {
        let mut start = 0;
        for i in 0..self.spans.len() {
            let len = self.spans[i].char_len();
            if offset > start && offset < start + len {
                let byte = self.spans[i]
                    .text
                    .char_indices()
                    .nth(offset - start)
                    .map(|(b, _)| b)
                    .unwrap_or(self.spans[i].text.len());
                let tail = self.spans[i].text.split_off(byte);
                let mut rest = self.spans[i].clone();
                rest.text = tail;
                self.spans.insert(i + 1, rest);
                return;
            }
            start += len;
        }
    }

    /// Whether every character in `start..end` is bold.
    ///
    /// An empty range reports the style of the span the cursor sits in.
    pub fn is_bold_active(&self, start: usize, end: usize) -> bool {
        let (start, end) = (start.min(end), start.max(end));
        let mut pos = 0;
        let mut touched = false;
        for span in &self.spans {
            let len = span.char_len();
            let span_end = pos + len;
            let overlaps = if start == end {
                start >= pos && start <= span_end && len > 0
            } else {
                pos < end && span_end > start
            };
            if overlaps {
                if !span.bold {
                    return false;
                }
                touched = true;
            }
            pos = span_end;
        }
        touched
    }

    /// Toggle bold on the character range `start..end`.
    ///
    /// If the whole range is already bold the mark is removed, otherwise the
    /// whole range becomes bold. Out-of-range offsets are clamped.
    pub fn toggle_bold(&mut self, start: usize, end: usize) {
        let len = self.char_len();
        let (start, end) = (start.min(end).min(len), start.max(end).min(len));
        if start == end {
            return;
        }

        let make_bold = !self.is_bold_active(start, end);
        self.split_at(start);
        self.split_at(end);

        let mut pos = 0;
        for span in &mut self.spans {
            let span_len = span.char_len();
            if pos >= start && pos + span_len <= end {
                span.bold = make_bold;
            }
            pos += span_len;
        }
        self.normalize();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Document
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered paragraph blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextDocument {
    pub blocks: Vec<Block>,
}

impl Default for RichTextDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl RichTextDocument {
    /// A document with one empty paragraph.
    pub fn empty() -> Self {
        Self {
            blocks: vec![Block::default()],
        }
    }

    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Copy of the document with every block normalized.
    pub fn normalized(&self) -> Self {
        let mut doc = self.clone();
        for block in &mut doc.blocks {
            block.normalize();
        }
        doc
    }

    /// Toggle bold on a range of one block. Unknown blocks are ignored.
    pub fn toggle_bold(&mut self, block: usize, start: usize, end: usize) {
        if let Some(block) = self.blocks.get_mut(block) {
            block.toggle_bold(start, end);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_merges_and_drops_empty() {
        let mut block = Block::new(vec![
            TextSpan::plain("a"),
            TextSpan::plain("b"),
            TextSpan::bold(""),
            TextSpan::bold("c"),
            TextSpan::bold("d"),
        ]);
        block.normalize();
        assert_eq!(block.spans, vec![TextSpan::plain("ab"), TextSpan::bold("cd")]);
    }

    #[test]
    fn test_normalize_keeps_one_empty_span() {
        let mut block = Block::new(vec![TextSpan::bold(""), TextSpan::plain("")]);
        block.normalize();
        assert_eq!(block.spans, vec![TextSpan::default()]);
    }

    #[test]
    fn test_toggle_bold_middle_of_span() {
        let mut block = Block::new(vec![TextSpan::plain("Hello world")]);
        block.toggle_bold(6, 11);
        assert_eq!(
            block.spans,
            vec![TextSpan::plain("Hello "), TextSpan::bold("world")]
        );
    }

    #[test]
    fn test_toggle_bold_off_when_fully_bold() {
        let mut block = Block::new(vec![TextSpan::plain("Hello "), TextSpan::bold("world")]);
        block.toggle_bold(6, 11);
        assert_eq!(block.spans, vec![TextSpan::plain("Hello world")]);
    }

    #[test]
    fn test_toggle_bold_partially_bold_becomes_bold() {
        let mut block = Block::new(vec![TextSpan::plain("ab"), TextSpan::bold("cd")]);
        block.toggle_bold(1, 3);
        assert_eq!(
            block.spans,
            vec![TextSpan::plain("a"), TextSpan::bold("bcd")]
        );
    }

    #[test]
    fn test_toggle_bold_czech_chars() {
        let mut block = Block::new(vec![TextSpan::plain("Příklad čísla")]);
        block.toggle_bold(0, 7);
        assert_eq!(
            block.spans,
            vec![TextSpan::bold("Příklad"), TextSpan::plain(" čísla")]
        );
    }

    #[test]
    fn test_toggle_bold_clamps_and_ignores_empty_range() {
        let mut block = Block::new(vec![TextSpan::plain("abc")]);
        block.toggle_bold(2, 2);
        assert_eq!(block.spans, vec![TextSpan::plain("abc")]);
        block.toggle_bold(1, 100);
        assert_eq!(block.spans, vec![TextSpan::plain("a"), TextSpan::bold("bc")]);
    }

    #[test]
    fn test_is_bold_active() {
        let block = Block::new(vec![TextSpan::plain("ab"), TextSpan::bold("cd")]);
        assert!(block.is_bold_active(2, 4));
        assert!(!block.is_bold_active(1, 4));
        assert!(block.is_bold_active(3, 3));
        assert!(!block.is_bold_active(1, 1));
    }

    #[test]
    fn test_document_helpers() {
        let doc = RichTextDocument::empty();
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.blocks[0].char_len(), 0);

        let mut doc = RichTextDocument::new(vec![Block::new(vec![TextSpan::plain("xy")])]);
        doc.toggle_bold(0, 0, 1);
        doc.toggle_bold(5, 0, 1);
        assert_eq!(doc.blocks[0].spans[0], TextSpan::bold("x"));
        assert_eq!(doc.blocks[0].spans[1], TextSpan::plain("y"));
    }
}
