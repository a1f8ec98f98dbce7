//! Letter selection bookkeeping
//!
//! Typing a letter moves it from `available` to `inputs` and marks a slot of
//! the displayed word as selected. Returned slot indices tell the renderer
//! which letters to animate.

use super::engine::RoundEngine;

impl<L, D> RoundEngine<L, D> {
    /// Distinct available letters (in order) that `is_just_pressed` reports
    pub fn get_presses(&self, mut is_just_pressed: impl FnMut(char) -> bool) -> Vec<char> {
        let mut seen = Vec::with_capacity(self.round.available.len());
        let mut presses = Vec::new();
        for &letter in &self.round.available {
            if seen.contains(&letter) {
                continue;
            }
            seen.push(letter);
            if is_just_pressed(letter) {
                presses.push(letter);
            }
        }
        presses
    }

    /// Type `letters`; each distinct letter is taken once, unavailable ones are ignored
    ///
    /// Returns the slot indices selected by this call.
    pub fn press(&mut self, letters: &[char]) -> Vec<usize> {
        let round = &mut self.round;
        let mut seen = Vec::with_capacity(letters.len());
        let mut selected = Vec::new();
        for &letter in letters {
            if seen.contains(&letter) {
                continue;
            }
            seen.push(letter);
            let Some(index) = round.available.iter().position(|&c| c == letter) else {
                continue;
            };
            round.available.remove(index);
            round.inputs.push(letter);
            round.input_origins.push(index);
            if let Some(slot) = round.select_first(letter) {
                selected.push(slot);
            }
        }
        selected
    }

    /// Untype the last letter, putting it back where it was taken from
    ///
    /// Returns the slot that was unselected.
    pub fn backspace(&mut self) -> Vec<usize> {
        let round = &mut self.round;
        let Some(letter) = round.inputs.pop() else {
            return Vec::new();
        };
        let origin = round
            .input_origins
            .pop()
            .map_or(round.available.len(), |index| index.min(round.available.len()));
        round.available.insert(origin, letter);
        round.unselect_last(letter).into_iter().collect()
    }
}
