//! Error types for game operations.
//!
//! The surface is deliberately narrow. A draw from an empty deck is a
//! broken conservation invariant and panics instead of returning an error,
//! and a rejected pairing attempt is a normal move outcome, not a failure.

use thiserror::Error;

/// Errors that can occur while dealing the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck to seed every pile.
    #[error("not enough cards in the deck to seed every pile")]
    NotEnoughCards,
}
