//! Layer and kind selection state shared by every view.
//!
//! Besides the current selection this holds the deferred highlight request:
//! when the user picks a kind while the JSON panel is closed, the kind is
//! parked in `pending_highlight_kind` until the panel reports it is open,
//! and resolving it consumes the value so it fires exactly once.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tpl_common::LayerKind;

/// Which layer (and which kind filter) is currently selected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    selected_id: Option<String>,
    selected_kind: Option<LayerKind>,
    pending_highlight_kind: Option<LayerKind>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_kind(&self) -> Option<LayerKind> {
        self.selected_kind
    }

    pub fn pending_highlight_kind(&self) -> Option<LayerKind> {
        self.pending_highlight_kind
    }

    /// Whether the given layer is the selected one.
    pub fn is_selected(&self, layer_id: &str) -> bool {
        self.selected_id.as_deref() == Some(layer_id)
    }

    /// Select a specific layer (and adopt its kind).
    pub fn select(&mut self, layer_id: &str, kind: LayerKind) {
        debug!(layer_id = %layer_id, kind = %kind, "Layer selected");
        self.selected_id = Some(layer_id.to_string());
        self.selected_kind = Some(kind);
    }

    /// Set the kind filter without touching the layer selection.
    pub fn set_kind(&mut self, kind: LayerKind) {
        self.selected_kind = Some(kind);
    }

    /// Park a kind to highlight once the JSON panel opens. A second call
    /// before resolution overwrites the first: last request wins.
    pub fn set_pending_highlight(&mut self, kind: LayerKind) {
        if let Some(previous) = self.pending_highlight_kind {
            debug!(previous = %previous, kind = %kind, "Pending highlight replaced");
        }
        self.pending_highlight_kind = Some(kind);
    }

    /// Consume the parked highlight request, if any. Calling again returns
    /// `None`, which is what makes the deferred resolution one-shot.
    pub fn take_pending_highlight(&mut self) -> Option<LayerKind> {
        self.pending_highlight_kind.take()
    }

    /// Drop the layer and kind selection (explicit user action).
    pub fn clear(&mut self) {
        self.selected_id = None;
        self.selected_kind = None;
    }
}
