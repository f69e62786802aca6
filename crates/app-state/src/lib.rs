//! `tpl-app-state` -- Editor state management for the Templine core.
//!
//! This crate provides:
//!
//! - **`EditorState`**: Central state container wiring the document, clock, selection, and panel together.
//! - **`DocumentStore`**: The loaded template as immutable snapshots with a revision counter.
//! - **`PlayheadClock`**: Frame-stepping playback transport (play/pause, scrub, rewind).
//! - **`SelectionState`**: Selected layer plus the parked kind-highlight handshake.
//! - **`GestureSession`**: Origin-anchored drag state for timeline and panel gestures.
//! - **`PanelLayout`**: JSON panel visibility and resizable width.
//!
//! # Architecture
//!
//! ```text
//! EditorState (central state)
//! ├── document: DocumentStore        (template snapshots + revision)
//! ├── clock: PlayheadClock           (transport state)
//! ├── selection: SelectionState      (what's selected / parked highlight)
//! ├── panel: PanelLayout             (JSON panel open flag + width)
//! ├── active_gesture                 (at most one drag in flight)
//! └── ui_requests                    (actions the host shell must do)
//! ```
//!
//! All pointer input flows through `EditorState::begin_gesture` /
//! `pointer_moved` / `end_gesture`; each move recomputes from the values
//! captured at pointer-down, so gestures are deterministic under event
//! coalescing.

pub mod document;
pub mod gesture;
pub mod panel;
pub mod playback;
pub mod selection;
pub mod state;

// Re-export primary types at crate root for convenience.
pub use document::DocumentStore;
pub use gesture::{GestureKind, GestureSession, LayerOrigin};
pub use panel::PanelLayout;
pub use playback::{ClockMode, PlayheadClock};
pub use selection::SelectionState;
pub use state::{EditorState, UiRequest};
