//! Pointer input snapshots.

use crate::geom::Vec2;

/// A raw pointer snapshot for one frame.
///
/// The engine keeps the previous frame's snapshot and derives clicks as an
/// edge trigger (pressed this frame, released last frame), so holding the
/// button down never fires twice.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    /// Pointer position in screen space.
    pub position: Vec2,
    /// Whether the primary button is down this frame.
    pub pressed: bool,
}

impl Pointer {
    /// Creates a snapshot at the given position.
    #[must_use]
    pub const fn new(x: f32, y: f32, pressed: bool) -> Self {
        Self {
            position: Vec2::new(x, y),
            pressed,
        }
    }

    /// Returns whether this snapshot is a click edge relative to `last`.
    #[must_use]
    pub const fn clicked_since(&self, last: &Self) -> bool {
        self.pressed && !last.pressed
    }
}
