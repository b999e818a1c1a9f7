//! Piles and the fixed 2×6 pile grid.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;

/// Number of pile rows.
pub const ROWS: usize = 2;

/// Number of pile columns.
pub const COLS: usize = 6;

/// Total number of piles.
pub const PILE_COUNT: usize = ROWS * COLS;

/// An ordered stack of cards.
///
/// Piles only ever grow during play: a successful pairing pushes a fresh
/// card onto both participating piles, and the swap replaces a singleton's
/// card one-for-one. A pile never empties once dealt.
#[derive(Debug, Clone, Default)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Returns the top card, or `None` if the pile is empty.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Pushes a card onto the top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the card directly beneath the top card, if any.
    #[must_use]
    pub fn under_top(&self) -> Option<Card> {
        self.cards.len().checked_sub(2).map(|i| self.cards[i])
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the pile holds exactly one card.
    ///
    /// Only singletons are eligible for the face-card swap.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.cards.len() == 1
    }

    /// Returns the cards in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The fixed 2×6 grid of piles.
#[derive(Debug, Clone)]
pub struct PileGrid {
    piles: [[Pile; COLS]; ROWS],
}

impl PileGrid {
    /// Deals a fresh grid, one card per pile in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than [`PILE_COUNT`] cards.
    pub fn deal(deck: &mut Deck) -> Result<Self, DealError> {
        if deck.len() < PILE_COUNT {
            return Err(DealError::NotEnoughCards);
        }

        let mut grid = Self {
            piles: Default::default(),
        };
        for row in 0..ROWS {
            for col in 0..COLS {
                grid.piles[row][col].push(deck.draw());
            }
        }
        Ok(grid)
    }

    /// Returns the top card of the pile at `(row, col)`.
    #[must_use]
    pub fn top(&self, row: usize, col: usize) -> Option<Card> {
        self.piles[row][col].top()
    }

    /// Returns the pile at `(row, col)`.
    #[must_use]
    pub fn pile(&self, row: usize, col: usize) -> &Pile {
        &self.piles[row][col]
    }

    /// Returns the pile at `(row, col)` mutably.
    #[must_use]
    pub fn pile_mut(&mut self, row: usize, col: usize) -> &mut Pile {
        &mut self.piles[row][col]
    }

    /// Iterates over all piles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Pile)> {
        self.piles
            .iter()
            .enumerate()
            .flat_map(|(row, cols)| {
                cols.iter().enumerate().map(move |(col, pile)| ((row, col), pile))
            })
    }

    /// Returns the total number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.iter().map(|(_, pile)| pile.len()).sum()
    }
}
