//! The [`TraceCursor`] playback state machine.
//!
//! Owns a sealed trace plus the state a front-end renders from: the
//! current step index, the play/pause flag, and the speed setting.
//! Deliberately timer-free — the embedding schedules its own ticks at
//! [`delay_ms`](TraceCursor::delay_ms) intervals and the cursor only
//! holds state, so the same machine drives any surface and is fully
//! testable without waiting.

use vitrine_core::{Step, Trace};

/// Slowest playback setting (longest delay).
pub const SPEED_MIN: u32 = 100;
/// Fastest playback setting (shortest delay).
pub const SPEED_MAX: u32 = 2000;
/// Granularity of the speed slider.
pub const SPEED_STEP: u32 = 100;
/// Default playback setting (one step per second).
pub const SPEED_DEFAULT: u32 = 1000;

/// Caller-owned playback position over one sealed [`Trace`].
///
/// # Examples
///
/// ```
/// use vitrine_algos::bubble_sort;
/// use vitrine_replay::TraceCursor;
///
/// let mut cursor = TraceCursor::new(bubble_sort(&[2, 1]));
/// cursor.toggle();
/// while cursor.tick() {}
/// assert!(cursor.at_end());
/// assert!(!cursor.is_playing(), "playback pauses on the final step");
/// ```
#[derive(Clone, Debug)]
pub struct TraceCursor {
    trace: Trace,
    position: usize,
    playing: bool,
    speed: u32,
}

impl TraceCursor {
    /// Wrap a trace, positioned at its first step, paused, at default
    /// speed.
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            position: 0,
            playing: false,
            speed: SPEED_DEFAULT,
        }
    }

    /// The wrapped trace.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The step under the cursor, or `None` for an empty trace.
    pub fn current(&self) -> Option<&Step> {
        self.trace.get(self.position)
    }

    /// Current step index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of steps in the wrapped trace.
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Whether the wrapped trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Whether playback is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the cursor sits on the final step.
    pub fn at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    /// Flip between playing and paused.
    ///
    /// A cursor over an empty trace has nothing to play and stays
    /// paused.
    pub fn toggle(&mut self) {
        if self.trace.is_empty() {
            return;
        }
        self.playing = !self.playing;
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Timer-driven advancement: move forward one step if playing.
    ///
    /// Returns whether the cursor moved. Reaching the final step (or
    /// starting on it) clears the playing flag, so a driving loop can
    /// simply run until this returns `false`.
    pub fn tick(&mut self) -> bool {
        if !self.playing || self.at_end() {
            self.playing = self.playing && !self.at_end();
            return false;
        }
        self.position += 1;
        if self.at_end() {
            self.playing = false;
        }
        true
    }

    /// Manual single-step forward. Pauses playback; saturates at the
    /// final step. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        self.playing = false;
        if self.at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Manual single-step backward. Pauses playback; saturates at the
    /// first step. Returns whether the cursor moved.
    pub fn step_back(&mut self) -> bool {
        self.playing = false;
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Scrub directly to `index`, clamped to the trace bounds. Pauses
    /// playback and returns the position actually landed on.
    pub fn jump_to(&mut self, index: usize) -> usize {
        self.playing = false;
        self.position = index.min(self.trace.len().saturating_sub(1));
        self.position
    }

    /// Rewind to the first step and pause.
    pub fn restart(&mut self) {
        self.position = 0;
        self.playing = false;
    }

    /// Current speed setting (raw slider value).
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Set the speed, clamped to `[SPEED_MIN, SPEED_MAX]`.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Milliseconds the embedding should wait between ticks.
    ///
    /// Higher speed settings mean shorter delays: the fastest setting
    /// plays back with no delay at all.
    pub fn delay_ms(&self) -> u64 {
        (SPEED_MAX - self.speed) as u64
    }

    /// Human-readable speed label ("0.1x" through "2.0x").
    pub fn speed_label(&self) -> String {
        format!("{:.1}x", self.speed as f64 / 1000.0)
    }

    /// Completion fraction in `[0, 1]`.
    ///
    /// A trace of one step (or none) reports 0.0 — there is no span to
    /// be partway through.
    pub fn progress(&self) -> f32 {
        if self.trace.len() <= 1 {
            return 0.0;
        }
        self.position as f32 / (self.trace.len() - 1) as f32
    }

    /// Consume the cursor, returning the wrapped trace.
    pub fn into_trace(self) -> Trace {
        self.trace
    }
}
