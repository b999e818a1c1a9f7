//! Win and loss evaluation.
//!
//! Both checks are pure functions over the current top-card snapshot,
//! invoked once per tick at the start of the selecting phase.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::PAIR_SUM;
use crate::grid::PileGrid;

/// Returns whether every pile's top card is a qualifying high card
/// (face value 10 or higher).
#[must_use]
pub fn is_won(grid: &PileGrid) -> bool {
    grid.iter()
        .all(|(_, pile)| pile.top().is_none_or(|card| card.is_high()))
}

/// Returns whether no legal move remains.
///
/// Lost means: no singleton pile holds a swappable top card (the swap
/// escape hatch), and no two top cards' face values sum to eleven. The
/// pair check is a single pass over the piles keeping a set of face
/// values seen so far and probing for each card's complement, so the
/// whole verdict is O(piles) and order-independent.
#[must_use]
pub fn is_lost(grid: &PileGrid) -> bool {
    let mut seen: HashSet<i32> = HashSet::new();

    for (_, pile) in grid.iter() {
        let Some(card) = pile.top() else { continue };

        if pile.is_single() && card.is_swappable() {
            return false;
        }

        let face = i32::from(card.face_value());
        if seen.contains(&(i32::from(PAIR_SUM) - face)) {
            return false;
        }
        seen.insert(face);
    }

    true
}
