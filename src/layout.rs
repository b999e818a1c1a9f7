//! Fixed screen layout of the table.
//!
//! Everything here is computed once per session from [`GameOptions`]: the
//! 2×6 grid is centered horizontally with a half-card-width offset, the two
//! rows straddle the vertical midline, the deck sits at the left edge, and
//! cards deal in from the bottom-center of the screen.

use crate::geom::{Rect, Vec2};
use crate::grid::{COLS, ROWS};
use crate::options::GameOptions;

/// Offset from the deck anchor to the `Deck: N` label.
const DECK_LABEL_OFFSET: Vec2 = Vec2::new(7.0, -25.0);

/// The play/replay button hit-region, shared by the menu and end screens.
const PLAY_BUTTON: Rect = Rect::new(270.0, 381.0, 255.0, 66.0);

/// Precomputed screen positions for one session.
#[derive(Debug, Clone)]
pub struct Layout {
    destinations: [[Vec2; COLS]; ROWS],
    deck_anchor: Vec2,
    deal_origin: Vec2,
    card_width: f32,
    card_height: f32,
}

impl Layout {
    /// Computes the layout for the given options.
    #[expect(
        clippy::cast_precision_loss,
        reason = "row and column counts are single digits"
    )]
    #[must_use]
    pub fn new(options: &GameOptions) -> Self {
        let GameOptions {
            screen_width,
            screen_height,
            card_width,
            card_height,
            card_margin,
            ..
        } = *options;

        let layout_width =
            COLS as f32 * card_width + (COLS as f32 - 1.0) * card_margin;
        let start_x = card_width / 2.0 + (screen_width - layout_width) / 2.0;
        let mut row_y = screen_height / 2.0 - (card_height + card_margin);

        let mut destinations = [[Vec2::default(); COLS]; ROWS];
        for row_cells in &mut destinations {
            for (col, dest) in row_cells.iter_mut().enumerate() {
                dest.x = start_x + col as f32 * (card_width + card_margin);
                dest.y = row_y;
            }
            row_y += card_height + card_margin;
        }

        Self {
            destinations,
            deck_anchor: Vec2::new(
                card_width / 2.0,
                screen_height / 2.0 - card_height / 2.0,
            ),
            deal_origin: Vec2::new(screen_width / 2.0, screen_height),
            card_width,
            card_height,
        }
    }

    /// Returns the settled screen position of the pile at `(row, col)`.
    #[must_use]
    pub fn pile_destination(&self, row: usize, col: usize) -> Vec2 {
        self.destinations[row][col]
    }

    /// Returns the pointer hit rectangle of the pile at `(row, col)`.
    #[must_use]
    pub fn pile_rect(&self, row: usize, col: usize) -> Rect {
        let dest = self.destinations[row][col];
        Rect::new(dest.x, dest.y, self.card_width, self.card_height)
    }

    /// Returns the deck's fixed screen anchor.
    #[must_use]
    pub const fn deck_anchor(&self) -> Vec2 {
        self.deck_anchor
    }

    /// Returns the position of the `Deck: N` label.
    #[must_use]
    pub fn deck_label_position(&self) -> Vec2 {
        Vec2::new(
            self.deck_anchor.x + DECK_LABEL_OFFSET.x,
            self.deck_anchor.y + DECK_LABEL_OFFSET.y,
        )
    }

    /// Returns where cards start their deal-in slide.
    #[must_use]
    pub const fn deal_origin(&self) -> Vec2 {
        self.deal_origin
    }

    /// Returns the play/replay button hit-region.
    #[must_use]
    pub const fn play_button(&self) -> Rect {
        PLAY_BUTTON
    }
}
