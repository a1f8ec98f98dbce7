//! Submission and scoring
//!
//! Every attempt, accepted or not, ends with all letters available again.
//! Only `repeat`, the score and the round itself carry over.

use super::engine::RoundEngine;
use super::state::{HelpState, SubmitState};
use crate::consts::REPEAT_HELP;
use crate::dictionary::Dictionary;
use crate::levels::LevelProvider;

impl<L: LevelProvider, D: Dictionary> RoundEngine<L, D> {
    /// Check the typed letters against the dictionary
    ///
    /// Returns the animation to play:
    /// - `Wrong`: empty or unknown word
    /// - `Repeat`: already accepted this round
    /// - `Submit`: accepted partial word, the word shoots
    /// - `Complete`: whole word solved, the next round has started
    pub fn submit(&mut self) -> SubmitState {
        let submission = self.round.candidate();
        let mut state = SubmitState::Wrong;
        if !submission.is_empty() {
            // Captured first: completing the word starts a fresh round
            self.round.outputs = self.round.inputs.clone();
            if self.dictionary.contains(&submission) {
                state = self.accept(&submission);
            }
        }
        log::debug!("Submit {:?}: {}", submission, state.as_str());
        self.round.reset_selection();
        state
    }

    fn accept(&mut self, submission: &str) -> SubmitState {
        if self.round.is_repeat(submission) {
            if self.levels.index() <= self.settings.repeat_help_max_level
                && self.round.help.is_empty()
            {
                self.round.help = REPEAT_HELP.to_string();
                self.round.help_state = HelpState::Repeat;
            }
            return SubmitState::Repeat;
        }

        if self.round.help_state == HelpState::Repeat {
            self.round.help_state = HelpState::None;
            self.round.help.clear();
        }
        self.round.repeat.insert(submission.to_string());

        let length = submission.chars().count();
        self.score_up(length);
        let complete = length == self.round.text.chars().count();
        self.prepare_knockback(length, complete);

        if !complete {
            return SubmitState::Submit;
        }
        self.round.completes = self.round.word();
        log::info!(
            "Solved {} for {} points (score {})",
            self.round.text,
            self.round.points,
            self.round.score
        );
        self.start_next_round();
        self.notify_complete();
        SubmitState::Complete
    }

    fn score_up(&mut self, length: usize) {
        self.round.points = length as u32;
        self.round.score += self.round.points;
    }
}
