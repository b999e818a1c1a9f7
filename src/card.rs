//! Card types and deck constants.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

/// All four suits, in the order the deck is built.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// Zero-based rank (0 = Ace, 9 = Ten, 10 = Jack, 11 = Queen, 12 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 0..=12
    /// are accepted but may yield non-standard results during play.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// The card's face value, `rank + 1`, in the range 1..=13.
    #[must_use]
    pub const fn face_value(&self) -> u8 {
        self.rank + 1
    }

    /// Whether the card satisfies the win condition as a pile top
    /// (face value 10 or higher).
    #[must_use]
    pub const fn is_high(&self) -> bool {
        self.face_value() >= MIN_HIGH_FACE
    }

    /// Whether the card is eligible for the singleton swap (J/Q/K only).
    ///
    /// The threshold is one above [`Card::is_high`]: a face-value-10 card
    /// already satisfies the win condition and never needs the swap.
    #[must_use]
    pub const fn is_swappable(&self) -> bool {
        self.face_value() >= MIN_SWAP_FACE
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Two top cards pair when their face values sum to this.
pub const PAIR_SUM: u8 = 11;

/// Minimum face value of a win-qualifying pile top.
pub const MIN_HIGH_FACE: u8 = 10;

/// Minimum face value of a swappable card.
pub const MIN_SWAP_FACE: u8 = 11;
