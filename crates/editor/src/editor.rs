//! The headless editor: one value owning the whole session.
//!
//! `Editor` wires the state container to the template loader, the preview
//! boundary, and the JSON document renderer, and exposes the operation
//! surface a host UI drives: load, gestures, transport, selection, panel,
//! presets, and the two projections (render input and JSON document).
//!
//! Everything is synchronous and single-threaded; the host pumps pointer
//! events, timer ticks, and collaborator signals into it from its own event
//! loop.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use tpl_app_state::{EditorState, GestureKind, GestureSession, UiRequest};
use tpl_common::{format_playhead_seconds, EditorConfig, Layer, LayerKind, Template};
use tpl_json_view::{highlight_range, JsonDocument, JsonViewResult, LineSpan};
use tpl_preview::{
    build_render_input, PreviewBoundary, PreviewFault, PreviewRenderer, RenderInput,
};
use tpl_template::{from_json_str, load_template, FormatPreset, TemplateResult};

/// Rendered JSON document tied to the revision it was rendered from.
#[derive(Clone, Debug)]
struct JsonCache {
    revision: u64,
    document: JsonDocument,
}

/// The complete headless editor.
#[derive(Debug, Default)]
pub struct Editor {
    state: EditorState,
    boundary: PreviewBoundary,
    json_cache: Option<JsonCache>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            state: EditorState::with_config(config),
            ..Self::default()
        }
    }

    /// Read access to the underlying state, for hosts that render from it
    /// directly. All mutation goes through the methods below.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    // --- Template loading ---

    /// Loads and installs a template from a JSON file.
    ///
    /// On failure the editor stays in (or returns to a consistent)
    /// "no template" state; the caller decides what to show.
    pub fn load_template_file(&mut self, path: &Path) -> TemplateResult<()> {
        let template = load_template(path)?;
        self.set_template(template);
        Ok(())
    }

    /// Parses, validates, and installs a template from JSON text.
    pub fn load_template_json(&mut self, json: &str) -> TemplateResult<()> {
        let template = from_json_str(json)?;
        self.set_template(template);
        Ok(())
    }

    /// Installs an already-parsed template.
    pub fn set_template(&mut self, template: Template) {
        self.json_cache = None;
        self.state.set_template(template);
    }

    pub fn is_loaded(&self) -> bool {
        self.state.document.is_loaded()
    }

    pub fn template(&self) -> Option<&Arc<Template>> {
        self.state.document.template()
    }

    // --- Gestures ---

    pub fn begin_gesture(&mut self, layer_id: Option<&str>, kind: GestureKind, x: f32, y: f32) {
        self.state.begin_gesture(layer_id, kind, x, y);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.state.pointer_moved(x, y);
    }

    pub fn end_gesture(&mut self) {
        self.state.end_gesture();
    }

    pub fn active_gesture(&self) -> Option<&GestureSession> {
        self.state.active_gesture()
    }

    // --- Transport ---

    pub fn play(&mut self) {
        self.state.clock.play();
    }

    pub fn pause(&mut self) {
        self.state.clock.pause();
    }

    pub fn toggle_play(&mut self) {
        self.state.clock.toggle_play();
    }

    pub fn rewind(&mut self) {
        self.state.clock.rewind();
    }

    pub fn scrub_to(&mut self, frame: i64) {
        self.state.clock.scrub_to(frame);
    }

    /// One playback tick: advance a single frame (or stop at the end).
    pub fn tick(&mut self) {
        self.state.clock.tick();
    }

    /// Feeds elapsed wall time into the clock; whole tick intervals apply.
    pub fn advance(&mut self, elapsed: Duration) {
        self.state.clock.advance(elapsed);
    }

    pub fn frame(&self) -> u32 {
        self.state.clock.frame()
    }

    pub fn is_playing(&self) -> bool {
        self.state.clock.is_running()
    }

    /// The transport readout, e.g. `"1.27s"`.
    pub fn playhead_label(&self) -> String {
        format_playhead_seconds(self.state.clock.frame(), self.state.clock.fps())
    }

    // --- Selection ---

    pub fn select_layer(&mut self, layer_id: &str) {
        self.state.select_layer(layer_id);
    }

    pub fn select_kind(&mut self, kind: LayerKind) {
        self.state.select_kind(kind);
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    pub fn selected_layer(&self) -> Option<&Layer> {
        let id = self.state.selection.selected_id()?;
        self.state.document.template()?.find_layer(id)
    }

    // --- JSON panel ---

    pub fn is_json_panel_open(&self) -> bool {
        self.state.panel.is_json_open()
    }

    pub fn json_panel_width(&self) -> f32 {
        self.state.panel.width()
    }

    /// Opens or closes the panel. Opening doubles as the "now open" signal
    /// that resolves a parked kind-highlight.
    pub fn set_json_panel_open(&mut self, open: bool) {
        self.state.set_json_panel_open(open);
    }

    pub fn toggle_json_panel(&mut self) {
        self.state.toggle_json_panel();
    }

    /// Actions the host shell must perform (e.g. open its panel widget).
    pub fn drain_ui_requests(&mut self) -> Vec<UiRequest> {
        self.state.drain_ui_requests()
    }

    // --- Format ---

    pub fn apply_format_preset(&mut self, preset: &FormatPreset) {
        debug!(preset = %preset, "Applying format preset");
        self.state
            .document
            .update_format(preset.width, preset.height);
    }

    // --- Preview projection ---

    /// The renderer input for the current frame, or `None` with no template.
    pub fn render_input(&self) -> Option<RenderInput> {
        let template = self.state.document.template()?;
        Some(build_render_input(
            template,
            self.state.clock.frame(),
            self.state.selection.selected_id(),
        ))
    }

    /// Presents the current frame through `renderer` behind the failure
    /// boundary. Returns whether anything was drawn; with no template this
    /// is `false` without touching the renderer or the fault.
    pub fn present(&mut self, renderer: &mut dyn PreviewRenderer) -> bool {
        let Some(input) = self.render_input() else {
            return false;
        };
        self.boundary.present(renderer, &input)
    }

    /// The inline error from the most recent failed present, if any.
    pub fn preview_fault(&self) -> Option<&PreviewFault> {
        self.boundary.fault()
    }

    // --- JSON projection ---

    /// The pretty JSON document for the panel, re-rendered only when the
    /// document revision has moved. `None` with no template.
    pub fn json_document(&mut self) -> JsonViewResult<Option<&JsonDocument>> {
        let Some(template) = self.state.document.snapshot() else {
            self.json_cache = None;
            return Ok(None);
        };
        let revision = self.state.document.revision();
        let stale = self
            .json_cache
            .as_ref()
            .map_or(true, |cache| cache.revision != revision);
        if stale {
            debug!(revision, "Re-rendering JSON document");
            let document = JsonDocument::render(&template)?;
            self.json_cache = Some(JsonCache { revision, document });
        }
        Ok(self.json_cache.as_ref().map(|cache| &cache.document))
    }

    /// Line range to highlight in the JSON panel for the current selection.
    pub fn highlight_range(&mut self) -> JsonViewResult<Option<LineSpan>> {
        let selected = self.state.selection.selected_id().map(str::to_string);
        let Some(document) = self.json_document()? else {
            return Ok(None);
        };
        Ok(highlight_range(document, selected.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tpl_preview::{PreviewError, PreviewResult};

    fn template_json() -> String {
        json!({
            "durationInFrames": 150,
            "fps": 30,
            "width": 1280,
            "height": 720,
            "layers": [
                {
                    "id": "bg",
                    "name": "Background",
                    "type": "image",
                    "src": "bg.jpg",
                    "start": 0,
                    "end": 150,
                    "track": 0,
                    "x": 0,
                    "y": 0,
                    "width": 1280,
                    "height": 720
                },
                {
                    "id": "clip",
                    "name": "Clip",
                    "type": "video",
                    "src": "clip.mp4",
                    "start": 10,
                    "end": 70,
                    "track": 1,
                    "x": 100,
                    "y": 100,
                    "width": 640,
                    "height": 360
                },
                {
                    "id": "music",
                    "name": "Music",
                    "type": "audio",
                    "src": "music.mp3",
                    "start": 0,
                    "end": 150,
                    "track": 2
                }
            ]
        })
        .to_string()
    }

    fn make_editor() -> Editor {
        let mut editor = Editor::new();
        editor.load_template_json(&template_json()).unwrap();
        editor
    }

    /// Always fails, for exercising the boundary.
    struct FailingRenderer;

    impl PreviewRenderer for FailingRenderer {
        fn render(&mut self, _input: &RenderInput) -> PreviewResult<()> {
            Err(PreviewError::UnsupportedMedia {
                src: "clip.mp4".into(),
            })
        }
    }

    /// Records the inputs it was asked to draw.
    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<u32>,
    }

    impl PreviewRenderer for RecordingRenderer {
        fn render(&mut self, input: &RenderInput) -> PreviewResult<()> {
            self.frames.push(input.current_frame);
            Ok(())
        }
    }

    #[test]
    fn load_failure_leaves_editor_empty_but_usable() {
        let mut editor = Editor::new();
        assert!(editor.load_template_json("{ not json").is_err());
        assert!(!editor.is_loaded());

        // Every operation is a safe no-op without a template.
        editor.play();
        assert!(!editor.is_playing());
        editor.scrub_to(50);
        assert_eq!(editor.frame(), 0);
        editor.begin_gesture(Some("bg"), GestureKind::Move, 0.0, 0.0);
        editor.pointer_moved(80.0, 0.0);
        editor.end_gesture();
        assert!(editor.render_input().is_none());
        assert_eq!(editor.json_document().unwrap(), None);
    }

    #[test]
    fn drag_flow_updates_template_and_projections() {
        let mut editor = make_editor();
        editor.begin_gesture(Some("clip"), GestureKind::Move, 0.0, 0.0);
        editor.pointer_moved(80.0, 30.0);
        editor.end_gesture();

        let template = editor.template().unwrap();
        let layer = template.find_layer("clip").unwrap();
        assert_eq!((layer.start, layer.end, layer.track), (20, 80, 2));

        let doc = editor.json_document().unwrap().unwrap();
        assert!(doc.text().contains("\"start\": 20"));
    }

    #[test]
    fn json_document_rerenders_only_on_revision_change() {
        let mut editor = make_editor();
        let first = editor.json_document().unwrap().unwrap().text().to_string();
        let again = editor.json_document().unwrap().unwrap().text().to_string();
        assert_eq!(first, again);

        editor.begin_gesture(Some("clip"), GestureKind::ResizeEnd, 0.0, 0.0);
        editor.pointer_moved(80.0, 0.0);
        let after = editor.json_document().unwrap().unwrap().text().to_string();
        assert_ne!(first, after);
        assert!(after.contains("\"end\": 80"));
    }

    #[test]
    fn deferred_highlight_handshake_through_the_facade() {
        let mut editor = make_editor();
        assert!(!editor.is_json_panel_open());

        editor.select_kind(LayerKind::Audio);
        assert_eq!(editor.drain_ui_requests(), vec![UiRequest::OpenJsonPanel]);
        assert_eq!(editor.state().selection.selected_id(), None);

        // Host opened its panel widget and reports back.
        editor.set_json_panel_open(true);
        assert_eq!(editor.state().selection.selected_id(), Some("music"));

        let span = editor.highlight_range().unwrap().unwrap();
        assert!(span.start_line > 1);
    }

    #[test]
    fn highlight_follows_selection() {
        let mut editor = make_editor();
        editor.select_layer("clip");
        let span = editor.highlight_range().unwrap().unwrap();
        let doc = editor.json_document().unwrap().unwrap();
        assert_eq!(doc.span_for("clip"), Some(span));

        editor.clear_selection();
        assert_eq!(editor.highlight_range().unwrap(), None);
    }

    #[test]
    fn renderer_failure_is_contained_and_recoverable() {
        let mut editor = make_editor();
        assert!(!editor.present(&mut FailingRenderer));
        let fault = editor.preview_fault().unwrap();
        assert!(fault.message.contains("clip.mp4"));

        // The editor stays fully interactive.
        editor.scrub_to(25);
        assert_eq!(editor.frame(), 25);
        editor.select_layer("bg");
        assert_eq!(editor.selected_layer().unwrap().id, "bg");

        // A later successful present clears the fault.
        let mut ok = RecordingRenderer::default();
        assert!(editor.present(&mut ok));
        assert!(editor.preview_fault().is_none());
        assert_eq!(ok.frames, vec![25]);
    }

    #[test]
    fn present_without_template_draws_nothing() {
        let mut editor = Editor::new();
        let mut renderer = RecordingRenderer::default();
        assert!(!editor.present(&mut renderer));
        assert!(renderer.frames.is_empty());
        assert!(editor.preview_fault().is_none());
    }

    #[test]
    fn render_input_marks_selected_layer() {
        let mut editor = make_editor();
        editor.select_layer("clip");
        let input = editor.render_input().unwrap();
        let selected: Vec<&str> = input
            .layers
            .iter()
            .filter(|l| l.selected)
            .map(|l| l.layer_id.as_str())
            .collect();
        assert_eq!(selected, ["clip"]);
    }

    #[test]
    fn format_preset_changes_the_canvas() {
        let mut editor = make_editor();
        editor.apply_format_preset(&FormatPreset::SQUARE);
        let input = editor.render_input().unwrap();
        assert_eq!((input.width, input.height), (1080, 1080));
        // Layers and timing are untouched.
        assert_eq!(input.duration_in_frames, 150);
        assert_eq!(input.layers.len(), 3);
    }

    #[test]
    fn transport_through_the_facade() {
        let mut editor = make_editor();
        editor.play();
        assert!(editor.is_playing());

        // 5 tick intervals at 30 fps.
        editor.advance(Duration::from_millis(5 * 1000 / 30 + 1));
        assert_eq!(editor.frame(), 5);

        editor.pause();
        assert!(!editor.is_playing());
        assert_eq!(editor.frame(), 5);

        editor.rewind();
        assert_eq!(editor.frame(), 0);
    }

    #[test]
    fn playhead_label_formats_seconds() {
        let mut editor = make_editor();
        assert_eq!(editor.playhead_label(), "0.00s");
        editor.scrub_to(45);
        assert_eq!(editor.playhead_label(), "1.50s");
    }

    #[test]
    fn reload_resets_the_json_cache() {
        let mut editor = make_editor();
        let before = editor.json_document().unwrap().unwrap().text().to_string();

        let mut replacement: serde_json::Value = serde_json::from_str(&template_json()).unwrap();
        replacement["durationInFrames"] = json!(60);
        editor
            .load_template_json(&replacement.to_string())
            .unwrap();

        let after = editor.json_document().unwrap().unwrap().text().to_string();
        assert_ne!(before, after);
        assert!(after.contains("\"durationInFrames\": 60"));
        assert_eq!(editor.state().clock.duration_in_frames(), 60);
    }
}
