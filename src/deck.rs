//! The draw deck.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, RANKS_PER_SUIT, SUITS};

/// The shuffled draw stack.
///
/// Cards are drawn from the top; the singleton swap returns a card to the
/// bottom, so the deck can cycle but never grows past [`DECK_SIZE`] within
/// one session.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck shuffled with the given RNG.
    #[must_use]
    pub fn standard(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in 0..RANKS_PER_SUIT {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck that will yield `draws` in order, first card first.
    ///
    /// Intended for tests that need a known layout.
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Self {
        let mut cards: Vec<Card> = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Panics
    ///
    /// Panics if the deck is empty. Under the game's own rules every draw
    /// has a matching supply, so an empty draw means the pairing or dealing
    /// bookkeeping broke an invariant; there is nothing to recover.
    #[must_use]
    pub fn draw(&mut self) -> Card {
        match self.cards.pop() {
            Some(card) => card,
            None => panic!("drew from an empty deck; card conservation was violated"),
        }
    }

    /// Places a card at the bottom of the deck.
    ///
    /// Used only by the face-card swap.
    pub fn insert_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
