//! Gameplay phase types.

/// Top-level gameplay phase.
///
/// The phase decides what each frame's update does and what the scene
/// snapshot contains. All transitions run through [`Game::update`].
///
/// [`Game::update`]: crate::Game::update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The title screen, waiting for the play button.
    Menu,
    /// Dealing cards in, one pile at a time.
    Initializing,
    /// Waiting for the player to select and pair cards.
    Selecting,
    /// Sliding the two freshly drawn cards to their piles after a pairing.
    Moving,
    /// The win screen, waiting for the replay button.
    Won,
    /// The loss screen, waiting for the replay button.
    Lost,
}

impl Phase {
    /// Returns whether this is one of the two end screens.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
