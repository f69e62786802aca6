//! Central editor state container.
//!
//! `EditorState` is the single source of truth for an editing session:
//! the loaded document, playback clock, selection, panel layout, and the
//! drag gesture currently in flight. The host UI reads from this state
//! and routes every pointer event through the handlers here.

use tracing::debug;

use tpl_common::{EditorConfig, LayerKind, Template};

use crate::document::DocumentStore;
use crate::gesture::{GestureKind, GestureSession, LayerOrigin};
use crate::panel::PanelLayout;
use crate::playback::PlayheadClock;
use crate::selection::SelectionState;

/// An action the core cannot perform itself and asks the host shell to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UiRequest {
    /// Open the JSON panel so a parked highlight can resolve.
    OpenJsonPanel,
}

/// Central editor state container.
///
/// Sub-states are public for reading; mutations that span more than one
/// sub-state (loading a template, resolving a deferred highlight,
/// dispatching a gesture) go through the methods here so the pieces
/// stay consistent.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    /// The loaded template and its revision counter.
    pub document: DocumentStore,
    /// Playback transport state.
    pub clock: PlayheadClock,
    /// Current selection and any parked highlight.
    pub selection: SelectionState,
    /// JSON panel visibility and width.
    pub panel: PanelLayout,
    config: EditorConfig,
    active_gesture: Option<GestureSession>,
    ui_requests: Vec<UiRequest>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state container with non-default timeline and panel metrics.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            panel: PanelLayout::new(&config.panel),
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Installs a template and re-times the clock to its duration and rate.
    pub fn set_template(&mut self, template: Template) {
        self.clock
            .set_timing(template.duration_in_frames, template.fps);
        self.document.set_template(template);
    }

    // --- Selection ---

    /// Selects a layer by id, adopting its kind. Unknown ids are ignored.
    pub fn select_layer(&mut self, layer_id: &str) {
        let Some(kind) = self
            .document
            .template()
            .and_then(|t| t.find_layer(layer_id))
            .map(|l| l.kind)
        else {
            debug!(layer_id = %layer_id, "Select ignored: unknown layer");
            return;
        };
        self.selection.select(layer_id, kind);
    }

    /// Selects a layer kind, e.g. from a click on rendered preview media.
    ///
    /// When the JSON panel is open this resolves immediately to the first
    /// layer of that kind in sequence order. When it is closed the kind
    /// is parked and the host is asked to open the panel; the highlight
    /// resolves once [`EditorState::json_panel_opened`] is called.
    pub fn select_kind(&mut self, kind: LayerKind) {
        self.selection.set_kind(kind);
        if self.panel.is_json_open() {
            self.select_first_of_kind(kind);
        } else {
            self.selection.set_pending_highlight(kind);
            self.ui_requests.push(UiRequest::OpenJsonPanel);
            debug!(kind = %kind, "JSON panel open requested for highlight");
        }
    }

    /// Notifies the core that the JSON panel finished opening.
    ///
    /// Resolves at most one parked highlight; calling this again without
    /// a new [`EditorState::select_kind`] leaves the selection untouched.
    pub fn json_panel_opened(&mut self) {
        self.panel.set_json_open(true);
        if let Some(kind) = self.selection.take_pending_highlight() {
            debug!(kind = %kind, "Resolving deferred highlight");
            self.select_first_of_kind(kind);
        }
    }

    /// Opens or closes the JSON panel, resolving parked highlights on open.
    pub fn set_json_panel_open(&mut self, open: bool) {
        if open {
            self.json_panel_opened();
        } else {
            self.panel.set_json_open(false);
        }
    }

    pub fn toggle_json_panel(&mut self) {
        let open = !self.panel.is_json_open();
        self.set_json_panel_open(open);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn select_first_of_kind(&mut self, kind: LayerKind) {
        let layer = self
            .document
            .template()
            .and_then(|t| t.first_layer_of_kind(kind));
        match layer {
            Some(layer) => self.selection.select(&layer.id, layer.kind),
            None => debug!(kind = %kind, "No layer of that kind to highlight"),
        }
    }

    // --- UI requests ---

    /// Hands any queued host-side actions to the caller.
    pub fn drain_ui_requests(&mut self) -> Vec<UiRequest> {
        std::mem::take(&mut self.ui_requests)
    }

    // --- Gestures ---

    pub fn active_gesture(&self) -> Option<&GestureSession> {
        self.active_gesture.as_ref()
    }

    /// Arms a drag gesture at pointer position `(x, y)`.
    ///
    /// Layer-targeted kinds need a `layer_id` that resolves in the loaded
    /// template; otherwise nothing is armed and later pointer moves are
    /// no-ops. Starting a gesture while another is active drops the old
    /// one without applying anything further from it.
    pub fn begin_gesture(&mut self, layer_id: Option<&str>, kind: GestureKind, x: f32, y: f32) {
        if let Some(prev) = self.active_gesture.take() {
            debug!(kind = ?prev.kind, "Active gesture replaced");
        }
        let session = if kind.targets_layer() {
            let Some(id) = layer_id else {
                debug!(kind = ?kind, "Gesture ignored: no layer target");
                return;
            };
            let Some(layer) = self.document.template().and_then(|t| t.find_layer(id)) else {
                debug!(layer_id = %id, "Gesture ignored: unknown layer");
                return;
            };
            let origin = LayerOrigin {
                id: layer.id.clone(),
                start: layer.start,
                end: layer.end,
                track: layer.track,
            };
            GestureSession::for_layer(kind, x, y, origin)
        } else if kind == GestureKind::PanelResize {
            GestureSession::panel_resize(x, y, self.panel.width())
        } else {
            GestureSession::playhead_scrub(x, y)
        };
        debug!(kind = ?kind, x, y, "Gesture started");
        self.active_gesture = Some(session);
    }

    /// Applies the active gesture at the new pointer position.
    ///
    /// Every move recomputes from the values captured when the gesture
    /// began, so repeated or out-of-order events converge on the same
    /// result instead of accumulating drift.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let Some(session) = self.active_gesture.as_ref() else {
            return;
        };
        let metrics = self.config.timeline;
        match session.kind {
            GestureKind::Move => {
                let Some(origin) = session.layer.as_ref() else {
                    return;
                };
                let d_frames = metrics.x_to_frame_delta(session.dx(x));
                let d_tracks = metrics.y_to_track_delta(session.dy(y));
                let start = shift(origin.start, d_frames);
                let end = shift(origin.end, d_frames);
                let track = shift(origin.track, d_tracks);
                self.document
                    .update_layer_placement(&origin.id, start, end, track);
            }
            GestureKind::ResizeStart => {
                let Some(origin) = session.layer.as_ref() else {
                    return;
                };
                let d_frames = metrics.x_to_frame_delta(session.dx(x));
                let start = shift(origin.start, d_frames);
                self.document
                    .update_layer_timing(&origin.id, start, origin.end);
            }
            GestureKind::ResizeEnd => {
                let Some(origin) = session.layer.as_ref() else {
                    return;
                };
                let d_frames = metrics.x_to_frame_delta(session.dx(x));
                // The trailing edge can never cross the leading edge.
                let end = (origin.end as i64 + d_frames).max(origin.start as i64 + 1) as u32;
                self.document
                    .update_layer_timing(&origin.id, origin.start, end);
            }
            GestureKind::MoveTrack => {
                let Some(origin) = session.layer.as_ref() else {
                    return;
                };
                let d_tracks = metrics.y_to_track_delta(session.dy(y));
                self.document
                    .update_layer_track(&origin.id, shift(origin.track, d_tracks));
            }
            GestureKind::PlayheadScrub => {
                self.clock.scrub_to(metrics.x_to_frame(x));
            }
            GestureKind::PanelResize => {
                self.panel
                    .set_width(session.panel_origin_width + session.dx(x));
            }
        }
    }

    /// Ends the active gesture, if any. Safe to call repeatedly.
    pub fn end_gesture(&mut self) {
        if let Some(session) = self.active_gesture.take() {
            debug!(kind = ?session.kind, "Gesture ended");
        }
    }
}

/// Offsets an unsigned value by a signed delta, clamping at zero.
fn shift(value: u32, delta: i64) -> u32 {
    (value as i64 + delta).max(0) as u32
}
