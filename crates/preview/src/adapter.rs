//! Template-to-renderer projection: `build_render_input()` takes the current
//! template, playhead frame, and selection and produces a [`RenderInput`].
//!
//! Layers project in sequence order (index = stacking order). A layer whose
//! kind needs a source but has none emits no instruction; the composition
//! simply renders without it. No time windowing happens here -- the renderer
//! owns in/out fades and sequencing, the core only describes the layers.

use tracing::debug;

use tpl_common::{Layer, Template};

use crate::types::{Bounds, RenderInput, RenderInstruction};

/// Project the template at `frame` into the renderer's input.
///
/// `selected_id` marks the matching instruction for the selection outline;
/// kind-only selection draws no outline.
pub fn build_render_input(
    template: &Template,
    frame: u32,
    selected_id: Option<&str>,
) -> RenderInput {
    let mut layers = Vec::with_capacity(template.layers.len());
    let mut skipped = 0usize;

    for layer in &template.layers {
        let Some(src) = layer.src.as_deref() else {
            skipped += 1;
            continue;
        };
        layers.push(RenderInstruction {
            layer_id: layer.id.clone(),
            kind: layer.kind,
            src: src.to_string(),
            bounds: layer_bounds(layer),
            selected: selected_id == Some(layer.id.as_str()),
        });
    }

    if skipped > 0 {
        debug!(skipped, "Layers without a source were left out of the render input");
    }

    RenderInput {
        width: template.width,
        height: template.height,
        fps: template.fps,
        duration_in_frames: template.duration_in_frames,
        current_frame: frame,
        layers,
    }
}

/// Canvas placement for a visual layer; audio never has one, and a visual
/// layer with any placement field missing leaves positioning to the renderer.
fn layer_bounds(layer: &Layer) -> Option<Bounds> {
    if !layer.kind.is_visual() {
        return None;
    }
    Some(Bounds {
        x: layer.x?,
        y: layer.y?,
        width: layer.width?,
        height: layer.height?,
    })
}
