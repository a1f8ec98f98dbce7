//! Scroll physics
//!
//! The word drifts toward the boundary at `word_width_per_second` track widths
//! per second. Reaching the boundary only raises the game-over help; the
//! simulation keeps running.

use super::engine::RoundEngine;
use super::state::HelpState;
use crate::consts::GAME_OVER_HELP;

impl<L, D> RoundEngine<L, D> {
    /// Advance the word by `delta_seconds`
    pub fn tick(&mut self, delta_seconds: f32) {
        let round = &mut self.round;
        round.word_position +=
            delta_seconds * self.settings.track_width * round.word_width_per_second;
        self.clamp_word_position();
    }

    /// Advance the word to an absolute clock reading in milliseconds
    pub fn tick_at(&mut self, cumulative_ms: u64) {
        let delta_seconds = cumulative_ms.saturating_sub(self.previous_ms) as f32 / 1000.0;
        self.previous_ms = cumulative_ms;
        self.tick(delta_seconds);
    }

    /// Match the design track to the actual screen width
    pub fn scale_to_screen(&mut self, screen_width: f32) {
        self.scale = screen_width / self.settings.track_width;
        self.update_scaled();
    }

    /// Clamp the word on screen, raising game over at the boundary
    pub(crate) fn clamp_word_position(&mut self) {
        let min = self.settings.min_word_position();
        let round = &mut self.round;
        if round.word_position <= min {
            if round.help_state != HelpState::GameOver {
                log::warn!("Word reached the boundary: game over");
            }
            round.help = GAME_OVER_HELP.to_string();
            round.help_state = HelpState::GameOver;
        }
        round.word_position = round.word_position.min(0.0).max(min);
        self.update_scaled();
    }

    pub(crate) fn update_scaled(&mut self) {
        self.round.word_position_scaled = self.round.word_position * self.scale;
    }

    /// Lowest scroll offset of the current track
    pub fn min_word_position(&self) -> f32 {
        self.settings.min_word_position()
    }

    pub fn is_game_over(&self) -> bool {
        self.round.is_game_over()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::RoundConfig;
    use crate::consts::GAME_OVER_HELP;
    use crate::dictionary::WordList;
    use crate::levels::Levels;
    use crate::settings::Settings;
    use crate::sim::{HelpState, RoundEngine};

    fn engine(config: RoundConfig) -> RoundEngine {
        let levels = Levels::new(vec![config]).unwrap();
        RoundEngine::new(Settings::default(), levels, WordList::new(), 1).unwrap()
    }

    #[test]
    fn test_tick_moves_toward_boundary() {
        let mut engine = engine(RoundConfig::new("CAT").with_help("practice"));
        // -0.01 widths/s * 720 = -7.2 per second
        engine.tick(1.0);
        assert!((engine.round().word_position - (-7.2)).abs() < 1e-4);
        assert!(!engine.is_game_over());
    }

    #[test]
    fn test_tick_at_uses_previous_time() {
        let mut engine = engine(RoundConfig::new("CAT").with_help("practice"));
        engine.tick_at(500);
        assert!((engine.round().word_position - (-3.6)).abs() < 1e-4);
        engine.tick_at(1500);
        assert!((engine.round().word_position - (-10.8)).abs() < 1e-4);
        // Clock going backwards is a zero step
        engine.tick_at(1000);
        assert!((engine.round().word_position - (-10.8)).abs() < 1e-4);
    }

    #[test]
    fn test_position_ceiling_is_zero() {
        let mut engine = engine(
            RoundConfig::new("CAT")
                .with_help("practice")
                .with_word_width_per_second(0.5),
        );
        engine.tick(1.0);
        assert_eq!(engine.round().word_position, 0.0);
    }

    #[test]
    fn test_game_over_at_floor() {
        let mut engine = engine(RoundConfig::new("CAT"));
        let min = engine.min_word_position();
        assert_eq!(min, -560.0);

        let mut ticks = 0;
        while !engine.is_game_over() {
            engine.tick(1.0 / 60.0);
            ticks += 1;
            assert!(ticks < 100_000, "word never reached the boundary");
        }
        assert_eq!(engine.round().word_position, min);
        assert_eq!(engine.round().help_state, HelpState::GameOver);
        assert_eq!(engine.round().help, GAME_OVER_HELP);

        // Further ticks stay clamped with the same help
        for _ in 0..120 {
            engine.tick(1.0 / 60.0);
        }
        assert_eq!(engine.round().word_position, min);
        assert_eq!(engine.round().help, GAME_OVER_HELP);
    }

    #[test]
    fn test_scaled_position() {
        let mut engine = engine(RoundConfig::new("CAT").with_help("practice"));
        engine.scale_to_screen(360.0);
        assert_eq!(engine.scale(), 0.5);
        engine.tick(1.0);
        let round = engine.round();
        assert!((round.word_position_scaled - round.word_position * 0.5).abs() < 1e-6);
    }
}
