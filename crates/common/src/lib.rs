//! `tpl-common` -- Shared data model and configuration for the Templine editor core.
//!
//! This crate is the foundation the other editor crates depend on.
//! It defines:
//!
//! - **Types**: `Template`, `Layer`, `LayerKind` (the composition document model)
//! - **Config**: `EditorConfig`, `TimelineMetrics`, `PanelConfig` (pixel geometry and panel bounds)
//! - **Display**: `format_playhead_seconds` (transport readout)

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{format_playhead_seconds, EditorConfig, PanelConfig, TimelineMetrics};
pub use types::{Layer, LayerKind, Template};
