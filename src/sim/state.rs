//! Round state and core simulation types
//!
//! Everything a renderer needs to draw the current round lives in `Round`.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Advisory tag attached to the help text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HelpState {
    #[default]
    None,
    /// Word reached the boundary
    GameOver,
    /// Player resubmitted an accepted word
    Repeat,
}

impl HelpState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelpState::None => "",
            HelpState::GameOver => "gameOver",
            HelpState::Repeat => "repeat",
        }
    }
}

/// Result of a submission, doubles as the animation to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmitState {
    /// Empty or not in the dictionary
    #[default]
    Wrong,
    /// Valid but already accepted this round
    Repeat,
    /// Accepted partial word; the word shoots
    Submit,
    /// Whole word solved; the next round has started
    Complete,
}

impl SubmitState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitState::Wrong => "wrong",
            SubmitState::Repeat => "repeat",
            SubmitState::Submit => "submit",
            SubmitState::Complete => "complete",
        }
    }

    /// Whether the submission was accepted and scored
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitState::Submit | SubmitState::Complete)
    }
}

/// One displayed letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub letter: char,
    pub selected: bool,
}

impl Slot {
    pub fn new(letter: char) -> Self {
        Self {
            letter,
            selected: false,
        }
    }

    /// Letter as drawn: lower-cased while selected
    pub fn display(&self) -> char {
        if self.selected {
            self.letter.to_lowercase().next().unwrap_or(self.letter)
        } else {
            self.letter
        }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// State of the live round (serializable snapshot)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Round {
    /// Target word
    pub text: String,
    /// Displayed letters in slot order, with selection marks
    pub slots: Vec<Slot>,
    /// Letters not yet typed this attempt
    pub available: Vec<char>,
    /// Letters typed this attempt, in press order
    pub inputs: Vec<char>,
    /// Index in `available` each input was taken from
    #[serde(default)]
    pub input_origins: Vec<usize>,
    /// Submissions already accepted this round
    pub repeat: BTreeSet<String>,
    /// Letters of the last submission (for the throw animation)
    pub outputs: Vec<char>,
    /// Letters of the last solved word
    pub completes: Vec<char>,
    /// Points of the last accepted submission
    pub points: u32,
    /// Cumulative score
    pub score: u32,
    /// Scroll offset in design units (always within `[min, 0]`)
    pub word_position: f32,
    /// Scroll offset in screen units
    pub word_position_scaled: f32,
    /// Scroll velocity in track widths per second (negative)
    pub word_width_per_second: f32,
    /// Pending knockback distance
    pub output_knockback: f32,
    pub help: String,
    pub help_state: HelpState,
}

impl Round {
    /// Letters in slot order
    pub fn word(&self) -> Vec<char> {
        self.slots.iter().map(|slot| slot.letter).collect()
    }

    /// Slot letters with selected ones lower-cased
    pub fn selects(&self) -> Vec<char> {
        self.slots.iter().map(Slot::display).collect()
    }

    /// Letters typed so far as a string
    pub fn candidate(&self) -> String {
        self.inputs.iter().collect()
    }

    pub fn letter_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.help_state == HelpState::GameOver
    }

    pub fn is_repeat(&self, submission: &str) -> bool {
        self.repeat.contains(submission)
    }

    /// Replace the slots with `letters`, all unselected
    pub(crate) fn set_word(&mut self, letters: Vec<char>) {
        self.slots = letters.into_iter().map(Slot::new).collect();
    }

    /// Reset the typing attempt: nothing typed, every letter available
    pub(crate) fn reset_selection(&mut self) {
        self.inputs.clear();
        self.input_origins.clear();
        self.available = self.word();
        for slot in &mut self.slots {
            slot.selected = false;
        }
    }

    /// Select the first unselected slot holding `letter`
    pub(crate) fn select_first(&mut self, letter: char) -> Option<usize> {
        let index = self
            .slots
            .iter()
            .position(|slot| !slot.selected && slot.letter == letter)?;
        self.slots[index].selected = true;
        Some(index)
    }

    /// Unselect the last selected slot holding `letter`
    pub(crate) fn unselect_last(&mut self, letter: char) -> Option<usize> {
        let index = self
            .slots
            .iter()
            .rposition(|slot| slot.selected && slot.letter == letter)?;
        self.slots[index].selected = false;
        Some(index)
    }
}
