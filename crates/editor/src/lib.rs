//! `tpl-editor` -- Headless editor facade for Templine.
//!
//! One [`Editor`] value wires the whole core together: the document store,
//! gesture controller, playhead clock, selection coordinator, preview
//! boundary, and JSON view. A host UI owns an `Editor`, feeds it pointer
//! events / timer ticks / collaborator signals, and renders from its
//! projections.
//!
//! ```
//! use tpl_editor::{Editor, GestureKind};
//!
//! let mut editor = Editor::new();
//! editor
//!     .load_template_json(
//!         r#"{
//!             "durationInFrames": 60, "fps": 30, "width": 1280, "height": 720,
//!             "layers": [{
//!                 "id": "bg", "name": "Background", "type": "image",
//!                 "src": "bg.jpg", "start": 0, "end": 60, "track": 0,
//!                 "x": 0, "y": 0, "width": 1280, "height": 720
//!             }]
//!         }"#,
//!     )
//!     .unwrap();
//!
//! // Drag the layer 10 frames right (8 px per frame).
//! editor.begin_gesture(Some("bg"), GestureKind::Move, 0.0, 0.0);
//! editor.pointer_moved(80.0, 0.0);
//! editor.end_gesture();
//! assert_eq!(editor.template().unwrap().layers[0].start, 10);
//! ```

pub mod editor;

pub use editor::Editor;

// The host-facing surface re-exported from the member crates, so a host can
// depend on `tpl-editor` alone.
pub use tpl_app_state::{EditorState, GestureKind, UiRequest};
pub use tpl_common::{EditorConfig, Layer, LayerKind, Template};
pub use tpl_json_view::{JsonDocument, LineSpan};
pub use tpl_preview::{
    PreviewError, PreviewFault, PreviewRenderer, RenderInput, RenderInstruction,
};
pub use tpl_template::{FormatPreset, TemplateError};
