//! Configuration structs for timeline metrics and panel layout.

use serde::{Deserialize, Serialize};

/// Pixel-space geometry of the timeline surface.
///
/// Pointer deltas are converted to frame and track deltas through these
/// factors; they are fixed configuration, not zoom state.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineMetrics {
    /// Horizontal pixels per frame.
    pub pixels_per_frame: f32,
    /// Vertical pixels per track lane.
    pub pixels_per_track: f32,
}

impl Default for TimelineMetrics {
    fn default() -> Self {
        Self {
            pixels_per_frame: 8.0,
            pixels_per_track: 30.0,
        }
    }
}

impl TimelineMetrics {
    /// X position of a frame on the timeline surface.
    pub fn frame_to_x(&self, frame: u32) -> f32 {
        frame as f32 * self.pixels_per_frame
    }

    /// Absolute pointer x to a frame index. May be negative left of the
    /// origin; callers clamp.
    pub fn x_to_frame(&self, x: f32) -> i64 {
        (x / self.pixels_per_frame).round() as i64
    }

    /// Y position of a track lane on the timeline surface.
    pub fn track_to_y(&self, track: u32) -> f32 {
        track as f32 * self.pixels_per_track
    }

    /// Horizontal pointer delta to a signed frame delta.
    pub fn x_to_frame_delta(&self, dx: f32) -> i64 {
        (dx / self.pixels_per_frame).round() as i64
    }

    /// Vertical pointer delta to a signed track delta.
    pub fn y_to_track_delta(&self, dy: f32) -> i64 {
        (dy / self.pixels_per_track).round() as i64
    }
}

/// Layout bounds for the resizable JSON panel.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub default_width: f32,
    /// Dragging the divider never shrinks the panel below this.
    pub min_width: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_width: 400.0,
            min_width: 300.0,
        }
    }
}

/// Top-level editor configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    pub timeline: TimelineMetrics,
    pub panel: PanelConfig,
}

/// Playhead position as seconds text, e.g. `"1.27s"`.
///
/// A zero fps (no template loaded yet) falls back to 30 so the transport
/// readout stays meaningful.
pub fn format_playhead_seconds(frame: u32, fps: u32) -> String {
    let fps = if fps == 0 { 30 } else { fps };
    format!("{:.2}s", frame as f64 / fps as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics() {
        let m = TimelineMetrics::default();
        assert_eq!(m.pixels_per_frame, 8.0);
        assert_eq!(m.pixels_per_track, 30.0);
    }

    #[test]
    fn frame_delta_rounds_to_nearest() {
        let m = TimelineMetrics::default();
        assert_eq!(m.x_to_frame_delta(0.0), 0);
        assert_eq!(m.x_to_frame_delta(3.9), 0);
        assert_eq!(m.x_to_frame_delta(4.1), 1);
        assert_eq!(m.x_to_frame_delta(16.0), 2);
        assert_eq!(m.x_to_frame_delta(-12.0), -2);
    }

    #[test]
    fn track_delta_rounds_to_nearest() {
        let m = TimelineMetrics::default();
        assert_eq!(m.y_to_track_delta(14.0), 0);
        assert_eq!(m.y_to_track_delta(16.0), 1);
        assert_eq!(m.y_to_track_delta(-31.0), -1);
    }

    #[test]
    fn absolute_x_to_frame_can_go_negative() {
        let m = TimelineMetrics::default();
        assert_eq!(m.x_to_frame(80.0), 10);
        assert_eq!(m.x_to_frame(-40.0), -5);
    }

    #[test]
    fn frame_to_x_inverts_exact_positions() {
        let m = TimelineMetrics::default();
        assert_eq!(m.frame_to_x(10), 80.0);
        assert_eq!(m.x_to_frame(m.frame_to_x(37)), 37);
    }

    #[test]
    fn track_to_y_uses_lane_height() {
        let m = TimelineMetrics::default();
        assert_eq!(m.track_to_y(0), 0.0);
        assert_eq!(m.track_to_y(3), 90.0);
    }

    #[test]
    fn panel_defaults() {
        let p = PanelConfig::default();
        assert_eq!(p.default_width, 400.0);
        assert_eq!(p.min_width, 300.0);
    }

    #[test]
    fn playhead_seconds_formatting() {
        assert_eq!(format_playhead_seconds(0, 30), "0.00s");
        assert_eq!(format_playhead_seconds(45, 30), "1.50s");
        assert_eq!(format_playhead_seconds(38, 30), "1.27s");
        // No fps known yet: keep the readout sane.
        assert_eq!(format_playhead_seconds(60, 0), "2.00s");
    }
}
