//! The renderer isolation boundary.
//!
//! The preview collaborator is host code the core does not trust: media can
//! fail to load, codecs can be unsupported, the widget can throw. Everything
//! it raises is caught here and turned into an inline [`PreviewFault`] the
//! host can display; nothing propagates, and the rest of the editor keeps
//! working against the same state.

use tracing::{debug, warn};

use crate::error::PreviewResult;
use crate::types::RenderInput;

/// The external preview collaborator seam.
///
/// Implementations draw the composition described by a [`RenderInput`];
/// the core reads nothing back from them except raised failures.
pub trait PreviewRenderer {
    /// Present one frame.
    fn render(&mut self, input: &RenderInput) -> PreviewResult<()>;
}

/// A caught renderer failure, held for inline display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewFault {
    pub message: String,
}

/// Wraps every call into a [`PreviewRenderer`] so its failures stop here.
#[derive(Clone, Debug, Default)]
pub struct PreviewBoundary {
    fault: Option<PreviewFault>,
}

impl PreviewBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The failure from the most recent present, if it failed.
    pub fn fault(&self) -> Option<&PreviewFault> {
        self.fault.as_ref()
    }

    /// Present a frame through `renderer`; returns whether it succeeded.
    ///
    /// A failure is stored as the current fault and logged. A later
    /// successful present clears the fault, so recovery needs no explicit
    /// reset from the host.
    pub fn present(&mut self, renderer: &mut dyn PreviewRenderer, input: &RenderInput) -> bool {
        match renderer.render(input) {
            Ok(()) => {
                if self.fault.take().is_some() {
                    debug!("Preview recovered");
                }
                true
            }
            Err(err) => {
                warn!(
                    error = %err,
                    frame = input.current_frame,
                    "Preview renderer failed"
                );
                self.fault = Some(PreviewFault {
                    message: err.to_string(),
                });
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PreviewError;

    /// Plays back a scripted sequence of render outcomes.
    struct ScriptedRenderer {
        outcomes: Vec<PreviewResult<()>>,
        rendered: usize,
    }

    impl ScriptedRenderer {
        fn new(outcomes: Vec<PreviewResult<()>>) -> Self {
            Self {
                outcomes,
                rendered: 0,
            }
        }
    }

    impl PreviewRenderer for ScriptedRenderer {
        fn render(&mut self, _input: &RenderInput) -> PreviewResult<()> {
            self.rendered += 1;
            self.outcomes.remove(0)
        }
    }

    fn make_input() -> RenderInput {
        RenderInput {
            width: 1280,
            height: 720,
            fps: 30,
            duration_in_frames: 120,
            current_frame: 0,
            layers: Vec::new(),
        }
    }

    #[test]
    fn success_leaves_no_fault() {
        let mut boundary = PreviewBoundary::new();
        let mut renderer = ScriptedRenderer::new(vec![Ok(())]);
        assert!(boundary.present(&mut renderer, &make_input()));
        assert!(boundary.fault().is_none());
    }

    #[test]
    fn failure_is_caught_and_stored() {
        let mut boundary = PreviewBoundary::new();
        let mut renderer = ScriptedRenderer::new(vec![Err(PreviewError::LoadFailed {
            reason: "timeout".into(),
        })]);
        assert!(!boundary.present(&mut renderer, &make_input()));
        let fault = boundary.fault().unwrap();
        assert!(fault.message.contains("timeout"));
    }

    #[test]
    fn later_success_clears_the_fault() {
        let mut boundary = PreviewBoundary::new();
        let mut renderer = ScriptedRenderer::new(vec![
            Err(PreviewError::Other("glitch".into())),
            Ok(()),
        ]);
        let input = make_input();
        boundary.present(&mut renderer, &input);
        assert!(boundary.fault().is_some());
        boundary.present(&mut renderer, &input);
        assert!(boundary.fault().is_none());
        assert_eq!(renderer.rendered, 2);
    }
}
