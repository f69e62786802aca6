//! Pointer gesture classification and the per-drag session record.
//!
//! A gesture is one pointer-down / move* / up sequence. The session captures
//! the pointer origin and the target's original values at pointer-down;
//! every subsequent move recomputes its result from those originals, so the
//! outcome is a pure function of the current pointer position and cannot
//! drift with event delivery rate.

/// What a drag is doing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Shift the layer in time and across tracks.
    Move,
    /// Drag the layer's left edge.
    ResizeStart,
    /// Drag the layer's right edge.
    ResizeEnd,
    /// Drag the layer vertically between tracks only.
    MoveTrack,
    /// Drag the playhead needle.
    PlayheadScrub,
    /// Drag the JSON panel divider.
    PanelResize,
}

impl GestureKind {
    /// Kinds that operate on a specific layer and need its originals.
    pub fn targets_layer(&self) -> bool {
        matches!(
            self,
            GestureKind::Move
                | GestureKind::ResizeStart
                | GestureKind::ResizeEnd
                | GestureKind::MoveTrack
        )
    }
}

/// The target layer's values at the moment the gesture began.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerOrigin {
    pub id: String,
    pub start: u32,
    pub end: u32,
    pub track: u32,
}

/// One in-flight drag. At most one session exists at a time; beginning a
/// new gesture discards any prior session.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureSession {
    pub kind: GestureKind,
    /// Pointer position at pointer-down, in surface pixels.
    pub origin_x: f32,
    pub origin_y: f32,
    /// Present for layer-targeted kinds.
    pub layer: Option<LayerOrigin>,
    /// Panel width at pointer-down, for `PanelResize`.
    pub panel_origin_width: f32,
}

impl GestureSession {
    pub fn for_layer(kind: GestureKind, x: f32, y: f32, layer: LayerOrigin) -> Self {
        Self {
            kind,
            origin_x: x,
            origin_y: y,
            layer: Some(layer),
            panel_origin_width: 0.0,
        }
    }

    pub fn playhead_scrub(x: f32, y: f32) -> Self {
        Self {
            kind: GestureKind::PlayheadScrub,
            origin_x: x,
            origin_y: y,
            layer: None,
            panel_origin_width: 0.0,
        }
    }

    pub fn panel_resize(x: f32, y: f32, panel_width: f32) -> Self {
        Self {
            kind: GestureKind::PanelResize,
            origin_x: x,
            origin_y: y,
            layer: None,
            panel_origin_width: panel_width,
        }
    }

    /// Horizontal pointer travel since pointer-down.
    pub fn dx(&self, x: f32) -> f32 {
        x - self.origin_x
    }

    /// Vertical pointer travel since pointer-down.
    pub fn dy(&self, y: f32) -> f32 {
        y - self.origin_y
    }
}
