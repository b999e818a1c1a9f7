//! The rules engine and presentation state machine for the Elevens card
//! game, with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns one session: the shuffled
//! deck, the 2×6 pile grid, the selection/pairing protocol, win and loss
//! evaluation, and the timed transitions that pace the deal-in, the
//! post-pairing card movement, and the end-screen fade. Rendering and
//! audio stay outside; each frame the caller feeds in a pointer snapshot
//! and the elapsed time, then reads back a [`Scene`] and the sound [`Cue`]s
//! the update produced.
//!
//! # Example
//!
//! ```
//! use elevens::{Game, GameOptions, Pointer};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let cues = game.update(Pointer::default(), 0.0);
//! let scene = game.scene();
//! let _ = (cues, scene);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod audio;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod geom;
pub mod grid;
pub mod input;
pub mod layout;
pub mod options;
pub mod timer;
pub mod view;

// Re-export main types
pub use audio::{Cue, SLIDE_VARIANTS, Track};
pub use card::{Card, DECK_SIZE, MIN_HIGH_FACE, MIN_SWAP_FACE, PAIR_SUM, Suit};
pub use deck::Deck;
pub use error::DealError;
pub use game::{Game, Phase, is_lost, is_won};
pub use geom::{Rect, Vec2};
pub use grid::{COLS, PILE_COUNT, Pile, PileGrid, ROWS};
pub use input::Pointer;
pub use layout::Layout;
pub use options::GameOptions;
pub use timer::{AnimationTimer, MAX_LERP_TIME};
pub use view::{Background, CardSprite, Overlay, Scene, Tint};
