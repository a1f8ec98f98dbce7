//! Round engine
//!
//! Owns the live round plus its collaborators (levels, dictionary, RNG).
//! Operations are split across the sibling modules by concern.

use std::fmt;

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use super::state::{HelpState, RngState, Round};
use crate::config::{ConfigError, RoundConfig};
use crate::dictionary::{Dictionary, WordList};
use crate::levels::{LevelProvider, Levels};
use crate::settings::Settings;

type CompleteCallback = Box<dyn FnMut()>;

/// Drives one round at a time: ticks, key presses, submissions
pub struct RoundEngine<L = Levels, D = WordList> {
    pub(crate) settings: Settings,
    pub(crate) levels: L,
    pub(crate) dictionary: D,
    pub(crate) rng_state: RngState,
    pub(crate) rng: Pcg32,
    pub(crate) round: Round,
    /// Screen width / track width
    pub(crate) scale: f32,
    /// Last time passed to `tick_at`
    pub(crate) previous_ms: u64,
    on_complete: Option<CompleteCallback>,
}

impl<L: LevelProvider, D: Dictionary> RoundEngine<L, D> {
    /// Create an engine and start the provider's current level
    pub fn new(
        settings: Settings,
        levels: L,
        dictionary: D,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        let rng_state = RngState::new(seed);
        let mut engine = Self {
            rng: rng_state.to_rng(),
            rng_state,
            settings,
            levels,
            dictionary,
            round: Round::default(),
            scale: 1.0,
            previous_ms: 0,
            on_complete: None,
        };
        let config = engine.levels.current();
        engine.start_round(config)?;
        Ok(engine)
    }

    /// Reset the round to `config`
    ///
    /// A round with help text keeps the word in reading order and its
    /// configured velocity. Otherwise the letters are shuffled and the velocity
    /// follows the speed curve.
    pub fn start_round(&mut self, config: RoundConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let RoundConfig {
            text,
            help,
            word_width_per_second,
            word_position,
        } = config;

        let round = &mut self.round;
        round.word_position = word_position;
        round.word_width_per_second = word_width_per_second;
        round.help = help;
        round.help_state = HelpState::None;

        let mut word: Vec<char> = text.chars().collect();
        if round.help.is_empty() {
            word.shuffle(&mut self.rng);
            round.word_width_per_second = self.settings.shuffled_word_speed(word.len());
        }
        round.text = text;
        round.set_word(word);
        round.reset_selection();
        round.repeat.clear();

        self.clamp_word_position();
        log::debug!(
            "Round started: level {} ({} letters, {:.4} widths/s)",
            self.levels.index(),
            self.round.letter_count(),
            self.round.word_width_per_second
        );
        Ok(())
    }

    /// Jump `add` levels (negative goes back), resetting the score
    pub fn cheat_level_up(&mut self, add: isize) -> Result<(), ConfigError> {
        self.round.score = 0;
        let config = self.levels.up(add);
        self.start_round(config)?;
        self.round.word_position = 0.0;
        self.update_scaled();
        log::info!("Level jump by {} to level {}", add, self.levels.index());
        Ok(())
    }

    /// Start the level after the current one
    pub(crate) fn start_next_round(&mut self) {
        let config = self.levels.up(1);
        if let Err(err) = self.start_round(config) {
            log::error!("Level {} could not start: {}", self.levels.index(), err);
        }
    }

    /// Register the notification fired when a word is solved
    pub fn set_on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn clear_on_complete(&mut self) {
        self.on_complete = None;
    }

    pub(crate) fn notify_complete(&mut self) {
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
    }

    /// Shuffle the displayed letters in place (selection is cleared)
    pub(crate) fn shuffle_word(&mut self) {
        let mut word = self.round.word();
        word.shuffle(&mut self.rng);
        self.round.set_word(word);
    }
}

impl<L, D> RoundEngine<L, D> {
    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn levels(&self) -> &L {
        &self.levels
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl<L, D> fmt::Debug for RoundEngine<L, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundEngine")
            .field("settings", &self.settings)
            .field("rng_state", &self.rng_state)
            .field("round", &self.round)
            .field("scale", &self.scale)
            .field("previous_ms", &self.previous_ms)
            .field("on_complete", &self.on_complete.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::sim::SubmitState;

    fn engine(words: &[&str]) -> RoundEngine {
        let levels = Levels::from_words(words.iter().copied()).unwrap();
        let dictionary: WordList = words.iter().copied().collect();
        RoundEngine::new(Settings::default(), levels, dictionary, 7).unwrap()
    }

    #[test]
    fn test_new_starts_current_level() {
        let engine = engine(&["PLANET", "STAR"]);
        let round = engine.round();
        assert_eq!(round.text, "PLANET");
        let mut letters = round.word();
        letters.sort_unstable();
        assert_eq!(letters, vec!['A', 'E', 'L', 'N', 'P', 'T']);
        assert_eq!(round.available, round.word());
        assert_eq!(round.selects(), round.word());
        assert!(round.inputs.is_empty());
    }

    #[test]
    fn test_shuffled_round_uses_speed_curve() {
        let engine = engine(&["CAT"]);
        let expected = engine.settings().shuffled_word_speed(3);
        assert_eq!(engine.round().word_width_per_second, expected);
    }

    #[test]
    fn test_help_round_keeps_order_and_velocity() {
        let mut engine = engine(&["CAT"]);
        let config = RoundConfig::new("PLANET")
            .with_help("Type the word")
            .with_word_width_per_second(-0.05)
            .with_word_position(-20.0);
        engine.start_round(config).unwrap();
        let round = engine.round();
        assert_eq!(round.word(), "PLANET".chars().collect::<Vec<_>>());
        assert_eq!(round.word_width_per_second, -0.05);
        assert_eq!(round.word_position, -20.0);
        assert_eq!(round.help, "Type the word");
    }

    #[test]
    fn test_start_round_rejects_empty_text() {
        let mut engine = engine(&["CAT"]);
        assert!(matches!(
            engine.start_round(RoundConfig::new("")),
            Err(ConfigError::EmptyText)
        ));
        // The live round is untouched
        assert_eq!(engine.round().text, "CAT");
    }

    #[test]
    fn test_start_round_clears_repeat_and_help_state() {
        let mut engine = engine(&["AB"]);
        engine.round.repeat.insert("A".to_string());
        engine.round.help_state = HelpState::GameOver;
        engine.start_round(RoundConfig::new("AB")).unwrap();
        assert!(engine.round().repeat.is_empty());
        assert_eq!(engine.round().help_state, HelpState::None);
        assert_eq!(engine.round().help, "");
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = Settings {
            track_width: 100.0,
            ..Settings::default()
        };
        let levels = Levels::from_words(["CAT"]).unwrap();
        let result = RoundEngine::new(settings, levels, WordList::new(), 7);
        assert!(matches!(result, Err(ConfigError::InvalidSettings(_))));
    }

    #[test]
    fn test_start_position_clamped() {
        let mut engine = engine(&["CAT"]);
        engine.scale_to_screen(360.0);
        engine
            .start_round(RoundConfig::new("CAT").with_help("h").with_word_position(50.0))
            .unwrap();
        assert_eq!(engine.round().word_position, 0.0);
        assert_eq!(engine.round().word_position_scaled, 0.0);
        assert!(!engine.is_game_over());

        engine
            .start_round(RoundConfig::new("CAT").with_word_position(-1000.0))
            .unwrap();
        assert_eq!(engine.round().word_position, engine.min_word_position());
        assert_eq!(engine.round().word_position_scaled, engine.min_word_position() * 0.5);
        assert!(engine.is_game_over());
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let a = engine(&["ABCDEFGH"]);
        let b = engine(&["ABCDEFGH"]);
        assert_eq!(a.round().word(), b.round().word());
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_cheat_level_up_resets_score() {
        let mut engine = engine(&["AB", "CD", "EF"]);
        engine.round.score = 12;
        engine.round.word_position = -100.0;
        engine.cheat_level_up(2).unwrap();
        assert_eq!(engine.round().text, "EF");
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.round().word_position, 0.0);

        engine.cheat_level_up(-1).unwrap();
        assert_eq!(engine.round().text, "CD");
    }

    #[test]
    fn test_on_complete_fires() {
        let mut engine = engine(&["AB", "CD"]);
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        engine.set_on_complete(move || seen.set(seen.get() + 1));

        let text: Vec<char> = engine.round().text.chars().collect();
        engine.press(&text);
        assert_eq!(engine.submit(), SubmitState::Complete);
        assert_eq!(count.get(), 1);

        engine.clear_on_complete();
        let text: Vec<char> = engine.round().text.chars().collect();
        engine.press(&text);
        assert_eq!(engine.submit(), SubmitState::Complete);
        assert_eq!(count.get(), 1);
    }
}
