//! The selecting phase: hover resolution, selection, swapping, pairing.

use alloc::vec::Vec;

use crate::audio::Cue;
use crate::card::PAIR_SUM;
use crate::input::Pointer;

use super::{Game, Phase, evaluate};

impl Game {
    /// Runs one selecting-phase tick: verdict checks first, then input.
    pub(super) fn update_selecting(&mut self, pointer: Pointer, cues: &mut Vec<Cue>) {
        if evaluate::is_won(&self.grid) {
            // The phase is about to change; pending timers are stale.
            self.timer.reset();
            self.phase = Phase::Won;
            return;
        }

        if evaluate::is_lost(&self.grid) {
            self.timer.reset();
            self.phase = Phase::Lost;
            return;
        }

        // Hover is recomputed from the live grid every tick; stale indices
        // never survive a frame. Row-major order breaks ties.
        let hit = self
            .grid
            .iter()
            .map(|(coords, _)| coords)
            .find(|&(row, col)| self.layout.pile_rect(row, col).contains(pointer.position));
        self.hovered = hit;

        let Some((row, col)) = hit else { return };
        if !pointer.clicked_since(&self.last_pointer) {
            return;
        }

        match self.selected {
            None => self.select_card(row, col, cues),
            Some(anchor) => self.pair_card(anchor, (row, col)),
        }
    }

    /// Handles a click with nothing selected.
    ///
    /// A top card that can still pair (face value 10 or below) becomes the
    /// pairing anchor. A swappable card on a singleton pile swaps with the
    /// deck immediately. A swappable card on a grown pile does nothing:
    /// J/Q/K can never be half of an eleven.
    fn select_card(&mut self, row: usize, col: usize, cues: &mut Vec<Cue>) {
        let Some(card) = self.grid.top(row, col) else {
            return;
        };

        if !card.is_swappable() {
            self.selected = Some((row, col));
            return;
        }

        if self.grid.pile(row, col).is_single() {
            if let Some(locked) = self.grid.pile_mut(row, col).pop() {
                self.deck.insert_bottom(locked);
                let fresh = self.deck.draw();
                self.grid.pile_mut(row, col).push(fresh);
                cues.push(self.slide_cue());
            }
        }

        self.selected = None;
    }

    /// Handles a click with pile `anchor` already selected.
    fn pair_card(&mut self, anchor: (usize, usize), target: (usize, usize)) {
        // Any second click settles the selection one way or the other: a
        // mismatch deselects rather than staying armed.
        self.selected = None;

        if anchor == target {
            return;
        }

        let (Some(anchor_card), Some(target_card)) = (
            self.grid.top(anchor.0, anchor.1),
            self.grid.top(target.0, target.1),
        ) else {
            return;
        };

        if anchor_card.face_value() + target_card.face_value() != PAIR_SUM {
            return;
        }

        // Both piles draw a fresh top card; the paired cards stay buried,
        // so deck plus piles still hold all 52.
        let for_anchor = self.deck.draw();
        self.grid.pile_mut(anchor.0, anchor.1).push(for_anchor);
        let for_target = self.deck.draw();
        self.grid.pile_mut(target.0, target.1).push(for_target);

        // The clicked pile's card slides in first, then the anchor's.
        self.moving_piles = [target, anchor];
        self.first_card_done = false;
        self.timer.reset();
        self.phase = Phase::Moving;
    }
}
