//! Renderer input types: what the core hands to the preview collaborator.
//!
//! These are plain data. A host renderer (player widget, software rasterizer,
//! test double) consumes a [`RenderInput`] per presented frame and produces
//! pixels; the core never reads anything back except raised failures.

use serde::{Deserialize, Serialize};

use tpl_common::LayerKind;

/// Complete input for presenting one frame of the composition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderInput {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    pub fps: u32,
    pub duration_in_frames: u32,
    /// The playhead position being presented.
    pub current_frame: u32,
    /// One instruction per renderable layer, in stacking order
    /// (index 0 = bottom).
    pub layers: Vec<RenderInstruction>,
}

/// Placement of one layer on the canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// How to draw a single layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderInstruction {
    pub layer_id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub src: String,
    /// Canvas placement. `None` for audio, or when the template leaves the
    /// visual placement unspecified (the renderer picks its own default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    /// Draw the selection outline around this layer.
    pub selected: bool,
}
