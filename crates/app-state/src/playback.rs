//! Playhead clock: stopped/running transport with a cooperative periodic tick.
//!
//! `play` arms a tick interval of `1000 / fps` milliseconds; the host event
//! loop pumps the clock, either one `tick()` per elapsed interval or by
//! feeding wall time into `advance()`. Nothing here spawns a timer thread:
//! pausing disarms the interval and clears any partly accumulated time,
//! which is the deterministic cancellation point, and dropping the clock
//! can never leak a runaway timer because none exists outside the host loop.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Current transport mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockMode {
    /// Playhead holds its position.
    #[default]
    Stopped,
    /// Playhead advances one frame per tick.
    Running,
}

/// The playhead position and transport state.
///
/// The frame stays inside `[0, duration_in_frames)` at all times; with no
/// template loaded (zero duration) it is pinned to 0 and `play` is a no-op.
#[derive(Clone, Debug, Default)]
pub struct PlayheadClock {
    mode: ClockMode,
    frame: u32,
    duration_in_frames: u32,
    fps: u32,
    tick_interval: Option<Duration>,
    accumulated: Duration,
}

impl PlayheadClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt the template's duration and frame rate. Re-clamps the frame,
    /// and with a zero duration resets to the empty-document state.
    pub fn set_timing(&mut self, duration_in_frames: u32, fps: u32) {
        self.duration_in_frames = duration_in_frames;
        self.fps = fps;

        if duration_in_frames == 0 || fps == 0 {
            self.frame = 0;
            self.mode = ClockMode::Stopped;
            self.tick_interval = None;
            self.accumulated = Duration::ZERO;
            debug!("Clock timing cleared");
            return;
        }

        self.frame = self.frame.min(duration_in_frames - 1);
        if self.mode == ClockMode::Running {
            self.tick_interval = Some(interval_for(fps));
        }
        debug!(duration_in_frames, fps, frame = self.frame, "Clock timing set");
    }

    /// Start playback. No-op without a template or when already running.
    pub fn play(&mut self) {
        if self.duration_in_frames == 0 || self.fps == 0 {
            debug!("Play ignored: no template loaded");
            return;
        }
        if self.mode == ClockMode::Running {
            return;
        }

        self.mode = ClockMode::Running;
        self.tick_interval = Some(interval_for(self.fps));
        self.accumulated = Duration::ZERO;
        debug!(frame = self.frame, fps = self.fps, "Playback started");
    }

    /// Stop playback, disarming the tick interval. Idempotent.
    pub fn pause(&mut self) {
        if self.mode == ClockMode::Running {
            debug!(frame = self.frame, "Playback paused");
        }
        self.mode = ClockMode::Stopped;
        self.tick_interval = None;
        self.accumulated = Duration::ZERO;
    }

    pub fn toggle_play(&mut self) {
        if self.mode == ClockMode::Running {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump to frame 0 in any mode; playback keeps running if it was.
    pub fn rewind(&mut self) {
        self.frame = 0;
        debug!("Rewound to frame 0");
    }

    /// Move the playhead to an absolute frame, clamped into the valid
    /// range. Scrubbing while running does not stop playback.
    pub fn scrub_to(&mut self, frame: i64) {
        if self.duration_in_frames == 0 {
            self.frame = 0;
            return;
        }
        let last = (self.duration_in_frames - 1) as i64;
        self.frame = frame.clamp(0, last) as u32;
        debug!(frame = self.frame, "Playhead scrubbed");
    }

    /// One periodic tick: advance a frame, or stop at the end of the
    /// composition. The final frame index is `duration - 1`; the frame
    /// equal to the duration is never observable.
    pub fn tick(&mut self) {
        if self.mode != ClockMode::Running {
            return;
        }
        if self.duration_in_frames == 0 {
            self.pause();
            return;
        }

        if self.frame < self.duration_in_frames - 1 {
            self.frame += 1;
        } else {
            self.mode = ClockMode::Stopped;
            self.tick_interval = None;
            self.accumulated = Duration::ZERO;
            debug!(frame = self.frame, "Playback reached the end");
        }
    }

    /// Feed elapsed wall time into the clock, applying as many whole ticks
    /// as fit. Partial intervals accumulate until the next call.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.mode != ClockMode::Running {
            return;
        }
        self.accumulated += elapsed;

        while self.mode == ClockMode::Running {
            let Some(interval) = self.tick_interval else {
                break;
            };
            if self.accumulated < interval {
                break;
            }
            self.accumulated -= interval;
            self.tick();
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == ClockMode::Running
    }

    /// The armed tick cadence; `Some` exactly while running.
    pub fn tick_interval(&self) -> Option<Duration> {
        self.tick_interval
    }

    pub fn duration_in_frames(&self) -> u32 {
        self.duration_in_frames
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// `1000 / fps` milliseconds between ticks.
fn interval_for(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps as f64)
}
