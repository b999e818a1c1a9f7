//! Read-only scene snapshots for the presentation layer.
//!
//! [`Game::scene`] flattens the current phase into plain draw data: which
//! background to show, every settled card with its tint, the one card in
//! flight (dealing in or sliding after a pairing) at its interpolated
//! position, the deck marker, and the end-screen overlay alpha. The
//! presentation layer never reaches back into the engine to mutate.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{Game, Phase};
use crate::geom::Vec2;
use crate::grid::{COLS, PILE_COUNT};

/// Background to draw behind everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// The menu screen art.
    Menu,
    /// The table, shown during play and under the end-screen overlay.
    Table,
}

/// Highlight tint of a settled card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// No highlight.
    Normal,
    /// The pointer is over this pile.
    Hovered,
    /// This pile is the pairing anchor.
    Selected,
}

/// One card to draw at a fixed position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSprite {
    /// Which card face to draw.
    pub card: Card,
    /// Top-left screen position.
    pub position: Vec2,
    /// Highlight tint.
    pub tint: Tint,
}

/// Full-screen overlay on the end screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    /// Whether this is the win or the loss art.
    pub won: bool,
    /// Fade-in alpha in `[0, 1]`.
    pub alpha: f32,
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Background art for this phase.
    pub background: Background,
    /// Settled cards, in row-major pile order.
    pub cards: Vec<CardSprite>,
    /// The one card currently animating, if any.
    pub in_flight: Option<CardSprite>,
    /// Whether to draw the deck back sprite and label.
    pub deck_visible: bool,
    /// Deck anchor position.
    pub deck_anchor: Vec2,
    /// Position of the deck count label.
    pub deck_label_position: Vec2,
    /// Cards remaining in the deck.
    pub deck_count: usize,
    /// End-screen overlay, if any.
    pub overlay: Option<Overlay>,
}

impl Game {
    /// Returns the `Deck: N` label text.
    #[must_use]
    pub fn deck_label(&self) -> String {
        format!("Deck: {}", self.deck.len())
    }

    /// Builds the draw data for the current frame.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let mut scene = Scene {
            background: Background::Table,
            cards: Vec::new(),
            in_flight: None,
            deck_visible: true,
            deck_anchor: self.layout.deck_anchor(),
            deck_label_position: self.layout.deck_label_position(),
            deck_count: self.deck.len(),
            overlay: None,
        };

        match self.phase {
            Phase::Menu => {
                scene.background = Background::Menu;
                scene.deck_visible = false;
            }
            Phase::Initializing => self.scene_deal_in(&mut scene),
            Phase::Selecting => self.scene_selecting(&mut scene),
            Phase::Moving => self.scene_moving(&mut scene),
            Phase::Won | Phase::Lost => {
                self.scene_settled(&mut scene);
                scene.overlay = Some(Overlay {
                    won: self.phase == Phase::Won,
                    alpha: self.timer.progress(),
                });
            }
        }

        scene
    }

    /// Settled piles plus the one card sliding in from the deal origin.
    fn scene_deal_in(&self, scene: &mut Scene) {
        for ((row, col), pile) in self.grid.iter() {
            let index = row * COLS + col;
            if index >= self.deal_index {
                continue;
            }
            if let Some(card) = pile.top() {
                scene.cards.push(CardSprite {
                    card,
                    position: self.layout.pile_destination(row, col),
                    tint: Tint::Normal,
                });
            }
        }

        if self.deal_index < PILE_COUNT {
            let (row, col) = (self.deal_index / COLS, self.deal_index % COLS);
            if let Some(card) = self.grid.top(row, col) {
                scene.in_flight = Some(CardSprite {
                    card,
                    position: self
                        .layout
                        .deal_origin()
                        .lerp(self.layout.pile_destination(row, col), self.timer.progress()),
                    tint: Tint::Normal,
                });
            }
        }
    }

    /// Every pile top at its destination, highlighted by selection state.
    fn scene_selecting(&self, scene: &mut Scene) {
        for ((row, col), pile) in self.grid.iter() {
            let Some(card) = pile.top() else { continue };

            let tint = if self.selected == Some((row, col)) {
                Tint::Selected
            } else if self.hovered == Some((row, col)) {
                Tint::Hovered
            } else {
                Tint::Normal
            };

            scene.cards.push(CardSprite {
                card,
                position: self.layout.pile_destination(row, col),
                tint,
            });
        }
    }

    /// Every pile top, except that a pile still waiting on its new card
    /// shows the buried card beneath while the new top is in flight.
    fn scene_moving(&self, scene: &mut Scene) {
        let pending_first = !self.first_card_done;

        for ((row, col), pile) in self.grid.iter() {
            let waiting = (pending_first && (row, col) == self.moving_piles[0])
                || (row, col) == self.moving_piles[1];
            let shown = if waiting && pile.len() >= 2 {
                pile.under_top()
            } else {
                pile.top()
            };

            if let Some(card) = shown {
                scene.cards.push(CardSprite {
                    card,
                    position: self.layout.pile_destination(row, col),
                    tint: Tint::Normal,
                });
            }
        }

        let (row, col) = self.moving_piles[usize::from(self.first_card_done)];
        if let Some(card) = self.grid.top(row, col) {
            scene.in_flight = Some(CardSprite {
                card,
                position: self
                    .layout
                    .deck_anchor()
                    .lerp(self.layout.pile_destination(row, col), self.timer.progress()),
                tint: Tint::Normal,
            });
        }
    }

    /// Every pile top at its destination with no highlights.
    fn scene_settled(&self, scene: &mut Scene) {
        for ((row, col), pile) in self.grid.iter() {
            if let Some(card) = pile.top() {
                scene.cards.push(CardSprite {
                    card,
                    position: self.layout.pile_destination(row, col),
                    tint: Tint::Normal,
                });
            }
        }
    }
}
