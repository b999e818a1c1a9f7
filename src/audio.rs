//! Audio cues for the presentation layer.

/// Number of slide sound variants.
pub const SLIDE_VARIANTS: u8 = 4;

/// A discrete one-shot sound cue emitted by [`Game::update`].
///
/// The engine plays nothing itself; the presentation layer drains the cues
/// returned from each update and triggers the matching samples.
///
/// [`Game::update`]: crate::Game::update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The play/replay button was activated.
    Button,
    /// A new game was dealt.
    Shuffle,
    /// A card slid into place (swap, or a completed pairing movement).
    /// The variant picks one of [`SLIDE_VARIANTS`] samples.
    Slide(u8),
    /// The win screen was entered.
    Won,
    /// The loss screen was entered.
    Lost,
}

/// A looping background track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Played on the menu screen.
    MenuTheme,
    /// Played during the deal-in and gameplay.
    GameTheme,
}
