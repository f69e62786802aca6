//! The template document store -- single source of truth for the composition.
//!
//! Every mutation builds a complete new `Template` and swaps it in as one
//! assignment, so observers holding the previous snapshot always see a
//! consistent whole document. Mutations against a missing document or an
//! unknown layer id are silent no-ops by contract: the editor treats "no
//! template" as a valid state, never an error.

use std::sync::Arc;

use tracing::debug;

use tpl_common::{Layer, Template};

/// Owns the current template snapshot and applies layer edits to it.
#[derive(Clone, Debug, Default)]
pub struct DocumentStore {
    template: Option<Arc<Template>>,
    revision: u64,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, if a template has been loaded.
    pub fn template(&self) -> Option<&Arc<Template>> {
        self.template.as_ref()
    }

    /// A shared handle to the current snapshot (cheap to clone and hold
    /// across an edit).
    pub fn snapshot(&self) -> Option<Arc<Template>> {
        self.template.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.template.is_some()
    }

    /// Counter that increments once per applied mutation. Views compare it
    /// to decide whether to re-derive anything expensive.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Install a loaded template as the document. Counts as a mutation.
    pub fn set_template(&mut self, template: Template) {
        debug!(
            duration_in_frames = template.duration_in_frames,
            fps = template.fps,
            layers = template.layers.len(),
            "Template installed"
        );
        self.template = Some(Arc::new(template));
        self.revision += 1;
    }

    /// Set a layer's `start`/`end`. `end` is clamped to `start + 1` if the
    /// requested values would invert the interval.
    pub fn update_layer_timing(&mut self, id: &str, start: u32, end: u32) {
        let end = clamp_end(start, end);
        if self.mutate_layer(id, |layer| {
            layer.start = start;
            layer.end = end;
        }) {
            debug!(layer_id = %id, start, end, "Layer timing updated");
        }
    }

    /// Move a layer to another track.
    pub fn update_layer_track(&mut self, id: &str, track: u32) {
        if self.mutate_layer(id, |layer| layer.track = track) {
            debug!(layer_id = %id, track, "Layer track updated");
        }
    }

    /// Set timing and track together in one snapshot, so a move gesture
    /// commits atomically and no observer sees the layer shifted in time
    /// but not yet retracked.
    pub fn update_layer_placement(&mut self, id: &str, start: u32, end: u32, track: u32) {
        let end = clamp_end(start, end);
        if self.mutate_layer(id, |layer| {
            layer.start = start;
            layer.end = end;
            layer.track = track;
        }) {
            debug!(layer_id = %id, start, end, track, "Layer placement updated");
        }
    }

    /// Change the canvas format (from a preset or host-supplied size).
    pub fn update_format(&mut self, width: u32, height: u32) {
        let Some(current) = self.template.as_ref() else {
            debug!("Format change ignored: no template loaded");
            return;
        };

        let mut next = Template::clone(current);
        next.width = width;
        next.height = height;
        self.template = Some(Arc::new(next));
        self.revision += 1;
        debug!(width, height, "Canvas format updated");
    }

    /// Apply `apply` to the named layer in a fresh snapshot. Returns false
    /// (and leaves the document untouched) when there is no template or no
    /// such layer.
    fn mutate_layer(&mut self, id: &str, apply: impl FnOnce(&mut Layer)) -> bool {
        let Some(current) = self.template.as_ref() else {
            debug!(layer_id = %id, "Layer edit ignored: no template loaded");
            return false;
        };

        let mut next = Template::clone(current);
        match next.find_layer_mut(id) {
            Some(layer) => apply(layer),
            None => {
                debug!(layer_id = %id, "Layer edit ignored: unknown layer id");
                return false;
            }
        }

        self.template = Some(Arc::new(next));
        self.revision += 1;
        true
    }
}

/// The document invariant is `end > start`; a request that would invert the
/// interval keeps one frame of duration instead.
fn clamp_end(start: u32, end: u32) -> u32 {
    if end <= start {
        debug!(start, requested_end = end, "Clamped end to start + 1");
        start + 1
    } else {
        end
    }
}
