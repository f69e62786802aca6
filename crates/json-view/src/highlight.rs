//! Highlight range computation for the JSON panel.
//!
//! Two ways to find the selected layer's lines:
//!
//! - [`highlight_range`] reads the span recorded while the document was
//!   rendered. This is the one the editor uses.
//! - [`find_block_range`] is the textual fallback: scan the document's
//!   lines for the first window that equals the serialized block. It only
//!   succeeds when the block appears verbatim -- a layer block re-serialized
//!   on its own lacks the document's indentation, so the scan misses it.
//!   Kept for hosts that receive document text from elsewhere and cannot
//!   use recorded spans.

use tracing::debug;

use crate::render::{JsonDocument, LineSpan};

/// The lines to highlight for the current selection, if any.
///
/// No selection, or a selected id that is not in the document, yields
/// `None`; the panel simply shows no highlight.
pub fn highlight_range(document: &JsonDocument, selected_id: Option<&str>) -> Option<LineSpan> {
    let id = selected_id?;
    let span = document.span_for(id);
    if span.is_none() {
        debug!(layer_id = %id, "No highlight: layer not in document");
    }
    span
}

/// Find the first contiguous run of document lines equal to `block`.
///
/// Both texts are split on `\n` and compared line-for-line, indentation
/// included. Returns the 1-based inclusive range of the first match.
pub fn find_block_range(document: &str, block: &str) -> Option<LineSpan> {
    if block.is_empty() {
        return None;
    }
    let doc_lines: Vec<&str> = document.split('\n').collect();
    let block_lines: Vec<&str> = block.split('\n').collect();
    if block_lines.len() > doc_lines.len() {
        return None;
    }

    for start in 0..=(doc_lines.len() - block_lines.len()) {
        if doc_lines[start..start + block_lines.len()] == block_lines[..] {
            return Some(LineSpan {
                start_line: (start + 1) as u32,
                end_line: (start + block_lines.len()) as u32,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tpl_common::{Layer, LayerKind, Template};

    fn make_template() -> Template {
        Template {
            duration_in_frames: 60,
            fps: 30,
            width: 1280,
            height: 720,
            layers: vec![
                Layer {
                    id: "bg".into(),
                    name: "Background".into(),
                    kind: LayerKind::Image,
                    src: Some("bg.jpg".into()),
                    start: 0,
                    end: 60,
                    track: 0,
                    x: Some(0),
                    y: Some(0),
                    width: Some(1280),
                    height: Some(720),
                },
                Layer {
                    id: "music".into(),
                    name: "Music".into(),
                    kind: LayerKind::Audio,
                    src: Some("music.mp3".into()),
                    start: 0,
                    end: 60,
                    track: 1,
                    x: None,
                    y: None,
                    width: None,
                    height: None,
                },
            ],
        }
    }

    #[test]
    fn structural_highlight_finds_the_selected_layer() {
        let doc = JsonDocument::render(&make_template()).unwrap();
        let span = highlight_range(&doc, Some("music")).unwrap();
        let lines: Vec<&str> = doc.text().split('\n').collect();
        assert!(lines[(span.start_line - 1) as usize].contains('{'));
        // The block's first field line names the selected layer.
        assert!(lines[span.start_line as usize].contains("music"));
    }

    #[test]
    fn no_selection_means_no_highlight() {
        let doc = JsonDocument::render(&make_template()).unwrap();
        assert_eq!(highlight_range(&doc, None), None);
        assert_eq!(highlight_range(&doc, Some("ghost")), None);
    }

    #[test]
    fn verbatim_block_is_found_with_one_based_lines() {
        let document = "alpha\nbeta\ngamma\ndelta";
        let span = find_block_range(document, "beta\ngamma").unwrap();
        assert_eq!((span.start_line, span.end_line), (2, 3));
    }

    #[test]
    fn first_of_repeated_blocks_wins() {
        let document = "x\nab\nx\nab\nx";
        let span = find_block_range(document, "ab").unwrap();
        assert_eq!((span.start_line, span.end_line), (2, 2));
    }

    #[test]
    fn document_slice_matches_itself() {
        // A block cut straight from the document (indentation intact) is
        // exactly what the scan can find.
        let doc = JsonDocument::render(&make_template()).unwrap();
        let recorded = doc.span_for("bg").unwrap();
        let lines: Vec<&str> = doc.text().split('\n').collect();
        let block =
            lines[(recorded.start_line - 1) as usize..recorded.end_line as usize].join("\n");

        let found = find_block_range(doc.text(), &block).unwrap();
        assert_eq!(found, recorded);
    }

    #[test]
    fn reserialized_layer_misses_due_to_indentation() {
        // The textual algorithm's documented failure: a layer serialized on
        // its own starts at column 0, but the document nests it under
        // "layers", so no line window ever compares equal.
        let template = make_template();
        let doc = JsonDocument::render(&template).unwrap();
        let block = serde_json::to_string_pretty(&template.layers[0]).unwrap();
        assert_eq!(find_block_range(doc.text(), &block), None);
    }

    #[test]
    fn empty_block_never_matches() {
        assert_eq!(find_block_range("a\nb", ""), None);
    }

    #[test]
    fn oversized_block_never_matches() {
        assert_eq!(find_block_range("a", "a\nb\nc"), None);
    }
}
