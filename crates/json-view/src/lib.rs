//! `tpl-json-view` -- Read-only JSON panel binding for the Templine core.
//!
//! This crate provides:
//!
//! - **`JsonDocument`**: the template pretty-printed for the panel, with a recorded line span per layer. The text is byte-identical to `serde_json::to_string_pretty` of the whole template.
//! - **`highlight_range`**: the selected layer's 1-based line range, from recorded spans.
//! - **`find_block_range`**: the textual line-window scan, for hosts without access to recorded spans.
//!
//! The panel widget itself (code editor, scrolling, styling) is host
//! territory; this crate only computes what it should show.

pub mod error;
pub mod highlight;
pub mod render;

pub use error::{JsonViewError, JsonViewResult};
pub use highlight::{find_block_range, highlight_range};
pub use render::{JsonDocument, LayerSpan, LineSpan};
