//! `tpl-preview` -- Preview adapter for the Templine core.
//!
//! This crate provides:
//!
//! - **`RenderInput` / `RenderInstruction`**: the data handed to the external preview renderer for one frame.
//! - **`build_render_input`**: projection from template + playhead + selection to that input.
//! - **`PreviewRenderer`**: the collaborator seam a host implements.
//! - **`PreviewBoundary`**: hard isolation around the renderer; its failures become an inline `PreviewFault`, never a crash.

pub mod adapter;
pub mod boundary;
pub mod error;
pub mod types;

pub use adapter::build_render_input;
pub use boundary::{PreviewBoundary, PreviewFault, PreviewRenderer};
pub use error::{PreviewError, PreviewResult};
pub use types::{Bounds, RenderInput, RenderInstruction};
