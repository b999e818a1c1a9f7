//! Game engine and phase management.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::audio::{Cue, SLIDE_VARIANTS, Track};
use crate::deck::Deck;
use crate::grid::PileGrid;
use crate::input::Pointer;
use crate::layout::Layout;
use crate::options::GameOptions;
use crate::timer::AnimationTimer;

mod animate;
mod evaluate;
mod select;
pub mod state;

pub use evaluate::{is_lost, is_won};
pub use state::Phase;

/// The Elevens game engine.
///
/// One instance is one session. Call [`Game::update`] once per frame with
/// the current pointer snapshot and the cumulative monotonic time in
/// seconds; read the result back through [`Game::scene`] and the cues the
/// update returns. Nothing blocks: all waiting is phase-gated polling of
/// elapsed time.
///
/// [`Game::scene`]: Game::scene
pub struct Game {
    /// The draw deck.
    pub deck: Deck,
    /// The 2×6 grid of piles.
    pub grid: PileGrid,
    /// Game options.
    pub options: GameOptions,
    pub(crate) layout: Layout,
    pub(crate) phase: Phase,
    /// The single in-flight animation tracker.
    pub(crate) timer: AnimationTimer,
    /// Row-major index of the pile currently dealing in.
    pub(crate) deal_index: usize,
    /// Destination piles of a pairing; index 0 animates first.
    pub(crate) moving_piles: [(usize, usize); 2],
    /// Whether the first of the two pairing cards has landed.
    pub(crate) first_card_done: bool,
    /// The pile selected as pairing anchor, as grid indices.
    pub(crate) selected: Option<(usize, usize)>,
    /// The pile under the pointer, re-resolved every tick.
    pub(crate) hovered: Option<(usize, usize)>,
    /// Previous frame's pointer, for edge-triggered clicks.
    pub(crate) last_pointer: Pointer,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game on the menu screen with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use elevens::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Menu);
    /// ```
    #[expect(
        clippy::missing_panics_doc,
        reason = "a standard deck always covers the deal"
    )]
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard(&mut rng);
        let grid = PileGrid::deal(&mut deck).expect("a standard deck always covers the deal");

        Self {
            deck,
            grid,
            layout: Layout::new(&options),
            options,
            phase: Phase::Menu,
            timer: AnimationTimer::new(),
            deal_index: 0,
            moving_piles: [(0, 0); 2],
            first_card_done: false,
            selected: None,
            hovered: None,
            last_pointer: Pointer::default(),
            rng,
        }
    }

    /// Runs one frame of game logic.
    ///
    /// `now` is cumulative wall-clock seconds since startup, monotonic.
    /// Returns the one-shot sound cues this frame produced, in order.
    pub fn update(&mut self, pointer: Pointer, now: f32) -> Vec<Cue> {
        let mut cues = Vec::new();

        match self.phase {
            Phase::Menu => self.update_menu(pointer, &mut cues),
            Phase::Initializing => self.update_deal_in(now),
            Phase::Selecting => self.update_selecting(pointer, &mut cues),
            Phase::Moving => self.update_moving(now, &mut cues),
            Phase::Won | Phase::Lost => self.update_end_screen(pointer, now, &mut cues),
        }

        self.last_pointer = pointer;
        cues
    }

    /// Handles the menu screen: a click on the play button starts a game.
    fn update_menu(&mut self, pointer: Pointer, cues: &mut Vec<Cue>) {
        if self.play_button_clicked(pointer) {
            cues.push(Cue::Button);
            self.new_game(cues);
        }
    }

    /// Discards all session state and deals a fresh game.
    ///
    /// Unconditional: any in-flight animation or selection is dropped.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a standard deck always covers the deal"
    )]
    pub fn new_game(&mut self, cues: &mut Vec<Cue>) {
        self.deck = Deck::standard(&mut self.rng);
        self.grid =
            PileGrid::deal(&mut self.deck).expect("a standard deck always covers the deal");

        self.selected = None;
        self.hovered = None;
        self.timer.reset();
        self.deal_index = 0;
        self.moving_piles = [(0, 0); 2];
        self.first_card_done = false;

        self.phase = Phase::Initializing;
        cues.push(Cue::Shuffle);
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the selected pile's grid indices, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    /// Returns the hovered pile's grid indices, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<(usize, usize)> {
        self.hovered
    }

    /// Returns the session's screen layout.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns which background track should be looping right now.
    ///
    /// `None` on the end screens: the music stops the tick a verdict lands
    /// and only the win/loss stinger plays.
    #[must_use]
    pub const fn music(&self) -> Option<Track> {
        match self.phase {
            Phase::Menu => Some(Track::MenuTheme),
            Phase::Initializing | Phase::Selecting | Phase::Moving => Some(Track::GameTheme),
            Phase::Won | Phase::Lost => None,
        }
    }

    /// Returns whether this frame clicked the play/replay button.
    fn play_button_clicked(&self, pointer: Pointer) -> bool {
        self.layout.play_button().contains(pointer.position)
            && pointer.clicked_since(&self.last_pointer)
    }

    /// Picks one of the slide sound variants at random.
    pub(crate) fn slide_cue(&mut self) -> Cue {
        Cue::Slide(self.rng.random_range(0..SLIDE_VARIANTS))
    }
}
