//! Conversion between stored text and the rich-text document model.
//!
//! Stored text is a flat HTML subset: plain text interspersed with `<b>`
//! markers. Any other tag is dropped while its text is kept. Text is not
//! entity-decoded, so whatever is stored between tags comes back verbatim.

use crate::content::Paragraph;
use crate::richtext::{Block, RichTextDocument, TextSpan};
use regex::Regex;
use std::sync::OnceLock;

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| {
        Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9]*)\b[^>]*>").expect("tag pattern is valid")
    })
}

fn push_text(spans: &mut Vec<TextSpan>, text: &str, bold: bool) {
    if !text.is_empty() {
        spans.push(TextSpan {
            text: text.to_string(),
            bold,
            italic: false,
        });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode / Encode
// ─────────────────────────────────────────────────────────────────────────────

/// Parse stored text into a single-paragraph document.
///
/// Nested `<b>` is tracked by depth; an unmatched `</b>` is ignored and an
/// unclosed `<b>` runs to the end of the text. Empty input yields one
/// paragraph with one empty span.
pub fn decode(stored: &str) -> RichTextDocument {
    let mut spans = Vec::new();
    let mut bold_depth: usize = 0;
    let mut cursor = 0;

    for caps in tag_regex().captures_iter(stored) {
        let Some(whole) = caps.get(0) else { continue };
        push_text(&mut spans, &stored[cursor..whole.start()], bold_depth > 0);
        cursor = whole.end();

        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let is_bold_tag = caps
            .get(2)
            .is_some_and(|m| m.as_str().eq_ignore_ascii_case("b"));
        if is_bold_tag {
            if closing {
                bold_depth = bold_depth.saturating_sub(1);
            } else {
                bold_depth += 1;
            }
        }
    }
    push_text(&mut spans, &stored[cursor..], bold_depth > 0);

    let mut block = Block::new(spans);
    block.normalize();
    RichTextDocument::new(vec![block])
}

/// Serialize one block to stored text.
pub fn encode_block(block: &Block) -> String {
    let mut out = String::new();
    for span in &block.spans {
        if span.text.is_empty() {
            continue;
        }
        if span.bold {
            out.push_str("<b>");
            out.push_str(&span.text);
            out.push_str("</b>");
        } else {
            out.push_str(&span.text);
        }
    }
    out
}

/// Serialize a document to stored text by concatenating its paragraphs.
pub fn encode(doc: &RichTextDocument) -> String {
    doc.blocks.iter().map(encode_block).collect()
}

/// Canonical stored form of a text: `encode(decode(text))` after merging.
///
/// Two texts with the same canonical form render identically.
pub fn canonicalize(stored: &str) -> String {
    encode(&decode(stored))
}

// ─────────────────────────────────────────────────────────────────────────────
// Paragraph Content
// ─────────────────────────────────────────────────────────────────────────────

/// Decode stored paragraphs into a document with one block per paragraph.
///
/// No paragraphs yields the empty document.
pub fn content_to_document(content: &[Paragraph]) -> RichTextDocument {
    let blocks: Vec<Block> = content
        .iter()
        .flat_map(|paragraph| decode(&paragraph.text).blocks)
        .collect();
    if blocks.is_empty() {
        RichTextDocument::empty()
    } else {
        RichTextDocument::new(blocks)
    }
}

/// Encode a document into stored paragraphs, one per block.
pub fn document_to_content(doc: &RichTextDocument) -> Vec<Paragraph> {
    doc.blocks
        .iter()
        .map(|block| {
            let mut block = block.clone();
            block.normalize();
            Paragraph::new(encode_block(&block))
        })
        .collect()
}

/// Stands in for a body with no paragraphs, which the editor shows as one
/// empty paragraph.
static BLANK_CONTENT: [Paragraph; 1] = [Paragraph {
    text: String::new(),
}];

fn as_shown(content: &[Paragraph]) -> &[Paragraph] {
    if content.is_empty() {
        &BLANK_CONTENT
    } else {
        content
    }
}

/// Whether two paragraph lists differ after canonicalization.
///
/// No paragraphs and a single empty paragraph are the same body. Otherwise
/// lists of different length always differ, and paragraphs are compared
/// pairwise in order.
pub fn content_changed(content: &[Paragraph], new_content: &[Paragraph]) -> bool {
    let (content, new_content) = (as_shown(content), as_shown(new_content));
    content.len() != new_content.len()
        || content
            .iter()
            .zip(new_content)
            .any(|(a, b)| canonicalize(&a.text) != canonicalize(&b.text))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(doc: &RichTextDocument) -> &[TextSpan] {
        &doc.blocks[0].spans
    }

    #[test]
    fn test_decode_plain_text() {
        let doc = decode("Jen text");
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(spans(&doc), &[TextSpan::plain("Jen text")]);
    }

    #[test]
    fn test_decode_bold_runs() {
        let doc = decode("Klikněte na <b>Nahrát data</b> a pak <b>Uložit</b>.");
        assert_eq!(
            spans(&doc),
            &[
                TextSpan::plain("Klikněte na "),
                TextSpan::bold("Nahrát data"),
                TextSpan::plain(" a pak "),
                TextSpan::bold("Uložit"),
                TextSpan::plain("."),
            ]
        );
    }

    #[test]
    fn test_decode_empty_input() {
        let doc = decode("");
        assert_eq!(doc, RichTextDocument::empty());
    }

    #[test]
    fn test_decode_drops_other_tags_keeps_text() {
        let doc = decode("<i>a</i><br/><span class=\"x\">b</span><B>c</B>");
        assert_eq!(spans(&doc), &[TextSpan::plain("ab"), TextSpan::bold("c")]);
    }

    #[test]
    fn test_decode_br_is_not_bold() {
        let doc = decode("a<br>b");
        assert_eq!(spans(&doc), &[TextSpan::plain("ab")]);
    }

    #[test]
    fn test_decode_unbalanced_markup() {
        assert_eq!(spans(&decode("a</b>b")), &[TextSpan::plain("ab")]);
        assert_eq!(
            spans(&decode("a<b>b")),
            &[TextSpan::plain("a"), TextSpan::bold("b")]
        );
        assert_eq!(
            spans(&decode("<b>a<b>b</b>c</b>d")),
            &[TextSpan::bold("abc"), TextSpan::plain("d")]
        );
    }

    #[test]
    fn test_decode_keeps_lone_angle_bracket() {
        assert_eq!(spans(&decode("a < b")), &[TextSpan::plain("a < b")]);
    }

    #[test]
    fn test_encode_spans() {
        let doc = RichTextDocument::new(vec![Block::new(vec![
            TextSpan::plain("a "),
            TextSpan::bold("b"),
            TextSpan::bold(""),
        ])]);
        assert_eq!(encode(&doc), "a <b>b</b>");
    }

    #[test]
    fn test_encode_concatenates_paragraphs() {
        let doc = RichTextDocument::new(vec![
            Block::new(vec![TextSpan::plain("one")]),
            Block::new(vec![TextSpan::bold("two")]),
        ]);
        assert_eq!(encode(&doc), "one<b>two</b>");
    }

    #[test]
    fn test_round_trip_plain_and_bold() {
        let shapes: Vec<(&str, Vec<TextSpan>)> = vec![
            ("plain only", vec![TextSpan::plain("Jen text")]),
            ("bold only", vec![TextSpan::bold("Vše tučně")]),
            (
                "leading bold",
                vec![TextSpan::bold("Nahrát data"), TextSpan::plain(" načte tabulku")],
            ),
            (
                "trailing bold",
                vec![TextSpan::plain("Klikněte na "), TextSpan::bold("Uložit")],
            ),
            (
                "alternating runs",
                vec![
                    TextSpan::bold("a"),
                    TextSpan::plain("b"),
                    TextSpan::bold("c"),
                    TextSpan::plain("d"),
                    TextSpan::bold("e"),
                ],
            ),
            (
                "adjacent same style",
                vec![
                    TextSpan::plain("Stisknutím "),
                    TextSpan::bold("Ligový"),
                    TextSpan::bold(" percentil"),
                    TextSpan::plain(" se zobrazí."),
                ],
            ),
            (
                "empty spans",
                vec![
                    TextSpan::plain(""),
                    TextSpan::bold("x"),
                    TextSpan::plain(""),
                    TextSpan::bold(""),
                    TextSpan::plain("y"),
                ],
            ),
            ("all empty", vec![TextSpan::plain(""), TextSpan::bold("")]),
            (
                "non-ascii",
                vec![
                    TextSpan::plain("Příliš žluťoučký "),
                    TextSpan::bold("kůň"),
                    TextSpan::plain(" úpěl ďábelské ódy – 83 %"),
                ],
            ),
        ];

        for (name, spans) in shapes {
            let doc = RichTextDocument::new(vec![Block::new(spans)]);
            assert_eq!(decode(&encode(&doc)), doc.normalized(), "shape: {}", name);
        }
    }

    #[test]
    fn test_canonicalize_merges_adjacent_bold() {
        assert_eq!(canonicalize("<b>a</b><b>b</b>"), "<b>ab</b>");
        assert_eq!(canonicalize("<i>x</i>"), "x");
    }

    #[test]
    fn test_content_document_conversion() {
        let content = vec![Paragraph::new("<b>Příklad</b>: 83"), Paragraph::new("druhý")];
        let doc = content_to_document(&content);
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(document_to_content(&doc), content);

        assert_eq!(content_to_document(&[]), RichTextDocument::empty());
    }

    #[test]
    fn test_content_changed() {
        let a = vec![Paragraph::new("<b>a</b><b>b</b>")];
        let b = vec![Paragraph::new("<b>ab</b>")];
        assert!(!content_changed(&a, &b));

        let c = vec![Paragraph::new("ab")];
        assert!(content_changed(&a, &c));

        let d = vec![Paragraph::new("<b>ab</b>"), Paragraph::new("")];
        assert!(content_changed(&b, &d));
    }

    #[test]
    fn test_content_changed_empty_body_matches_blank_paragraph() {
        let blank = vec![Paragraph::new("")];
        assert!(!content_changed(&[], &blank));
        assert!(!content_changed(&blank, &[]));
        assert!(!content_changed(&[], &document_to_content(&content_to_document(&[]))));
        assert!(content_changed(&[], &[Paragraph::new("x")]));
        assert!(content_changed(&[], &[Paragraph::new(""), Paragraph::new("")]));
    }
}
