//! Game tuning values
//!
//! Every balance knob of the round engine lives here so it can be tweaked from
//! a JSON file without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::*;

/// Tunables for the round engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Track ===
    /// Track width in design units
    pub track_width: f32,
    /// Word block width used for the boundary check
    pub word_width: f32,

    // === Speed curve ===
    /// Word length the speed curve is measured against
    pub letter_max: usize,
    /// Base velocity for shuffled rounds (track widths per second)
    pub base_speed: f32,
    /// Exponent applied to the remaining letter budget
    pub speed_power: f32,

    // === Knockback ===
    /// Knockback per submitted letter (fraction of track width)
    pub knockback_per_length: f32,
    /// Multiplier when the whole word is solved
    pub complete_knockback_multiplier: f32,

    // === Help ===
    /// Last level index that still explains repeated submissions
    pub repeat_help_max_level: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            track_width: TRACK_WIDTH,
            word_width: WORD_WIDTH,

            letter_max: LETTER_MAX,
            base_speed: BASE_WORD_SPEED,
            speed_power: SPEED_POWER,

            knockback_per_length: KNOCKBACK_PER_LENGTH,
            complete_knockback_multiplier: COMPLETE_KNOCKBACK_MULTIPLIER,

            repeat_help_max_level: REPEAT_HELP_MAX_LEVEL,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!("Loaded settings from JSON");
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            self.track_width,
            self.word_width,
            self.base_speed,
            self.speed_power,
            self.knockback_per_length,
            self.complete_knockback_multiplier,
        ];
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::InvalidSettings("values must be finite"));
        }
        if self.track_width <= 0.0 {
            return Err(ConfigError::InvalidSettings("track_width must be positive"));
        }
        if self.word_width < 0.0 || self.word_width > self.track_width {
            return Err(ConfigError::InvalidSettings(
                "word_width must be between 0 and track_width",
            ));
        }
        Ok(())
    }

    /// Lowest scroll offset before the word reaches the boundary
    pub fn min_word_position(&self) -> f32 {
        self.word_width - self.track_width
    }

    /// Velocity for a shuffled word: fewer letters than `letter_max` scroll faster
    pub fn shuffled_word_speed(&self, letter_count: usize) -> f32 {
        let base_rate = self.letter_max.saturating_sub(letter_count).max(1) as f32;
        self.base_speed * base_rate.powf(self.speed_power)
    }

    /// Knockback distance for a submission of `length` letters
    pub fn knockback(&self, length: usize, complete: bool) -> f32 {
        let knockback = self.knockback_per_length * self.track_width * length as f32;
        if complete {
            knockback * self.complete_knockback_multiplier
        } else {
            knockback
        }
    }
}
