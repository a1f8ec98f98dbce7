//! Knockback
//!
//! An accepted submission is thrown at the word. When the animation reports
//! the hit, the word is shoved away from the boundary and reshuffled.

use super::engine::RoundEngine;
use crate::dictionary::Dictionary;
use crate::levels::LevelProvider;

impl<L: LevelProvider, D: Dictionary> RoundEngine<L, D> {
    /// Queue a shove for a submission of `length` letters
    pub(crate) fn prepare_knockback(&mut self, length: usize, complete: bool) {
        self.round.output_knockback = self.settings.knockback(length, complete);
        self.clamp_word_position();
    }

    /// Whether a thrown submission has a shove waiting
    pub fn may_knockback(&self) -> bool {
        self.round.output_knockback > 0.0 && !self.round.outputs.is_empty()
    }

    /// Apply the pending shove; called when the thrown letters reach the word
    ///
    /// Letters still being typed stay selected in the reshuffled word.
    pub fn on_output_hits_word(&mut self) -> bool {
        if !self.may_knockback() {
            return false;
        }
        self.round.word_position += self.round.output_knockback;
        self.clamp_word_position();

        self.shuffle_word();
        let pending = self.round.inputs.clone();
        for letter in pending {
            self.round.select_first(letter);
        }
        self.round.output_knockback = 0.0;
        log::debug!("Knockback to {:.1}", self.round.word_position);
        true
    }
}
