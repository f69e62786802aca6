//! Core data model: the composition template and its layers.
//!
//! These structs serialize to the template JSON schema used by the editor
//! (camelCase keys, lowercase layer kinds, optional fields omitted when
//! absent), so a loaded document round-trips byte-for-byte.

use serde::{Deserialize, Serialize};

/// The kind of media a layer renders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Image,
    Video,
    Audio,
}

impl LayerKind {
    /// All kinds, in the order they are presented to the user.
    pub const ALL: [LayerKind; 3] = [LayerKind::Image, LayerKind::Video, LayerKind::Audio];

    /// Whether a layer of this kind needs a `src` to produce any output.
    pub fn requires_source(&self) -> bool {
        matches!(self, LayerKind::Image | LayerKind::Video | LayerKind::Audio)
    }

    /// Whether the kind occupies canvas space (has a bounding box).
    pub fn is_visual(&self) -> bool {
        matches!(self, LayerKind::Image | LayerKind::Video)
    }

    /// Human-readable label for UI lists.
    pub fn label(&self) -> &'static str {
        match self {
            LayerKind::Image => "Image",
            LayerKind::Video => "Video",
            LayerKind::Audio => "Audio",
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Image => write!(f, "image"),
            LayerKind::Video => write!(f, "video"),
            LayerKind::Audio => write!(f, "audio"),
        }
    }
}

/// One timed, positioned media element in the template.
///
/// `start`/`end` are frame indices with `end > start` (half-open interval);
/// `track` is the timeline lane. Position and size are present for visual
/// layers and omitted for audio. Field order matches the document schema so
/// serialized output lines up with what the user sees in the JSON panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    pub start: u32,
    pub end: u32,
    pub track: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
}

impl Layer {
    /// Length of the layer in frames.
    pub fn duration_in_frames(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// True if `frame` falls inside the layer's `[start, end)` window.
    pub fn contains_frame(&self, frame: u32) -> bool {
        frame >= self.start && frame < self.end
    }

    /// True if the layer has a media source to draw from.
    pub fn has_source(&self) -> bool {
        self.src.is_some()
    }
}

/// A complete composition template: canvas format plus an ordered layer
/// sequence. Order is z-order (later layers stack above earlier ones).
///
/// The template is always replaced wholesale on edit; observers holding a
/// snapshot never see a partially updated document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub duration_in_frames: u32,
    pub fps: u32,
    pub width: u32,
    pub height: u32,
    pub layers: Vec<Layer>,
}

impl Template {
    /// Look up a layer by id.
    pub fn find_layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Mutable lookup, used when building the next snapshot.
    pub fn find_layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    /// First layer of the given kind in sequence order.
    pub fn first_layer_of_kind(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    /// Highest track index in use (0 when there are no layers).
    pub fn max_track(&self) -> u32 {
        self.layers.iter().map(|l| l.track).max().unwrap_or(0)
    }
}
