//! Pretty document rendering with structural line spans.
//!
//! The JSON panel shows the whole template as pretty-printed JSON and
//! highlights the selected layer's lines. Instead of serializing and then
//! searching the text for the layer (which breaks on indentation), the
//! renderer here emits the document line by line and records each layer's
//! span as it goes. The emitted text stays byte-identical to
//! `serde_json::to_string_pretty` for the whole template, so any consumer
//! comparing against a plain serialization sees no difference.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tpl_common::Template;

use crate::error::JsonViewResult;

/// A 1-based, inclusive range of document lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSpan {
    pub start_line: u32,
    pub end_line: u32,
}

impl LineSpan {
    pub fn line_count(&self) -> u32 {
        self.end_line - self.start_line + 1
    }
}

/// The lines of one layer within the rendered document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerSpan {
    pub layer_id: String,
    pub span: LineSpan,
}

/// The rendered document text plus the span of every layer in it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JsonDocument {
    text: String,
    spans: Vec<LayerSpan>,
}

impl JsonDocument {
    /// Render `template` as the panel's document.
    pub fn render(template: &Template) -> JsonViewResult<Self> {
        let mut lines: Vec<String> = Vec::new();
        let mut spans: Vec<LayerSpan> = Vec::new();

        lines.push("{".to_string());
        lines.push(format!(
            "  \"durationInFrames\": {},",
            template.duration_in_frames
        ));
        lines.push(format!("  \"fps\": {},", template.fps));
        lines.push(format!("  \"width\": {},", template.width));
        lines.push(format!("  \"height\": {},", template.height));

        if template.layers.is_empty() {
            lines.push("  \"layers\": []".to_string());
        } else {
            lines.push("  \"layers\": [".to_string());
            let last = template.layers.len() - 1;
            for (index, layer) in template.layers.iter().enumerate() {
                let block = serde_json::to_string_pretty(layer)?;
                let start_line = (lines.len() + 1) as u32;
                for line in block.lines() {
                    lines.push(format!("    {line}"));
                }
                if index != last {
                    if let Some(closing) = lines.last_mut() {
                        closing.push(',');
                    }
                }
                spans.push(LayerSpan {
                    layer_id: layer.id.clone(),
                    span: LineSpan {
                        start_line,
                        end_line: lines.len() as u32,
                    },
                });
            }
            lines.push("  ]".to_string());
        }
        lines.push("}".to_string());

        debug!(
            lines = lines.len(),
            layers = spans.len(),
            "JSON document rendered"
        );
        Ok(Self {
            text: lines.join("\n"),
            spans,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[LayerSpan] {
        &self.spans
    }

    /// The lines of the given layer, if it exists in the document.
    pub fn span_for(&self, layer_id: &str) -> Option<LineSpan> {
        self.spans
            .iter()
            .find(|s| s.layer_id == layer_id)
            .map(|s| s.span)
    }
}
