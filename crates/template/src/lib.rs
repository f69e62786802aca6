//! `tpl-template` -- Template document loading for the Templine editor core.
//!
//! This crate provides:
//!
//! - **`from_json_str` / `load_template`**: Parse and validate a template JSON document.
//! - **`TemplateError`**: Load failures (thiserror-based). A load failure is terminal
//!   for the session; the editor stays in its "no template" state.
//! - **`FormatPreset`**: The fixed catalog of canvas formats the user can apply.

pub mod error;
pub mod load;
pub mod presets;

// Re-export primary items at crate root for convenience.
pub use error::{TemplateError, TemplateResult};
pub use load::{from_json_str, load_template};
pub use presets::FormatPreset;
