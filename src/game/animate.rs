//! Timed phase updates: deal-in, card movement, end-screen fade.

use alloc::vec::Vec;

use crate::audio::Cue;
use crate::grid::PILE_COUNT;
use crate::input::Pointer;

use super::{Game, Phase};

impl Game {
    /// Advances the deal-in animation, one pile at a time in row-major
    /// order. When the last pile lands the game moves to selecting.
    pub(super) fn update_deal_in(&mut self, now: f32) {
        self.timer.advance(now, self.options.deal_speed);

        if self.timer.is_complete() {
            self.timer.reset();
            self.deal_index += 1;

            if self.deal_index >= PILE_COUNT {
                self.phase = Phase::Selecting;
            }
        }
    }

    /// Advances the post-pairing movement: the two drawn cards slide in
    /// one after the other, each playing a slide cue as it lands.
    pub(super) fn update_moving(&mut self, now: f32, cues: &mut Vec<Cue>) {
        self.timer.advance(now, self.options.move_speed);

        if !self.timer.is_complete() {
            return;
        }

        cues.push(self.slide_cue());
        self.timer.reset();

        if self.first_card_done {
            self.first_card_done = false;
            self.phase = Phase::Selecting;
        } else {
            self.first_card_done = true;
        }
    }

    /// Runs the win/loss screen: replay button, stinger, overlay fade.
    pub(super) fn update_end_screen(&mut self, pointer: Pointer, now: f32, cues: &mut Vec<Cue>) {
        // Same button, same reset as the menu screen.
        if self.play_button_clicked(pointer) {
            cues.push(Cue::Button);
            self.new_game(cues);
            return;
        }

        // First tick on this screen: play the one-shot stinger.
        if !self.timer.is_started() {
            cues.push(if self.phase == Phase::Won {
                Cue::Won
            } else {
                Cue::Lost
            });
        }

        // The fade runs once and holds at full opacity.
        if !self.timer.is_complete() {
            self.timer.advance(now, self.options.fade_speed);
        }
    }
}
