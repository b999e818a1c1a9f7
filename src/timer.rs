//! Elapsed-time animation tracking.

/// Nominal duration of every animation before its speed factor applies.
pub const MAX_LERP_TIME: f32 = 1.0;

/// Sentinel for a timer that has not started.
const UNSET: f32 = -1.0;

/// A single-slot elapsed-time tracker.
///
/// Only one animation is ever in flight across the whole game, so one
/// tracker is shared by the deal-in, the pairing movement, and the
/// end-screen fade. The first [`AnimationTimer::advance`] after a reset
/// records the start timestamp; completion is `(now - start) * speed`
/// against a nominal duration of 1.0.
#[derive(Debug, Clone, Copy)]
pub struct AnimationTimer {
    started_at: f32,
    completion: f32,
}

impl AnimationTimer {
    /// Creates a timer in the unset state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            started_at: UNSET,
            completion: 0.0,
        }
    }

    /// Advances the timer, starting it if it was unset.
    ///
    /// `now` is cumulative monotonic seconds; `speed` is the phase's speed
    /// factor. Returns the unclamped completion.
    pub fn advance(&mut self, now: f32, speed: f32) -> f32 {
        if self.started_at < 0.0 {
            self.started_at = now;
        }
        self.completion = (now - self.started_at) * speed;
        self.completion
    }

    /// Returns whether the timer has started since its last reset.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started_at >= 0.0
    }

    /// Returns whether the animation has run its full nominal duration.
    ///
    /// Compared unclamped, so completion strictly exceeds 1 within
    /// `1 / speed` seconds of starting.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completion >= MAX_LERP_TIME
    }

    /// Returns the completion clamped to `[0, 1]` for interpolation.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.completion.clamp(0.0, MAX_LERP_TIME)
    }

    /// Returns the timer to the unset state.
    pub const fn reset(&mut self) {
        self.started_at = UNSET;
        self.completion = 0.0;
    }
}

impl Default for AnimationTimer {
    fn default() -> Self {
        Self::new()
    }
}
