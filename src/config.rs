//! Round parameters
//!
//! A `RoundConfig` is everything a level provider hands the engine to start a
//! round. Level lists are stored as JSON arrays of these.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_WORD_WIDTH_PER_SECOND;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("round text cannot be empty")]
    EmptyText,
    #[error("level list is empty")]
    NoLevels,
    #[error("level {index} is invalid: {source}")]
    InvalidLevel {
        index: usize,
        #[source]
        source: Box<ConfigError>,
    },
    #[error("invalid settings: {0}")]
    InvalidSettings(&'static str),
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

fn default_word_width_per_second() -> f32 {
    DEFAULT_WORD_WIDTH_PER_SECOND
}

/// Parameters for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundConfig {
    /// Target word
    pub text: String,
    /// Tutorial text; a round with help is shown unshuffled
    #[serde(default)]
    pub help: String,
    /// Scroll velocity in track widths per second (replaced for shuffled rounds)
    #[serde(default = "default_word_width_per_second")]
    pub word_width_per_second: f32,
    /// Starting scroll offset
    #[serde(default)]
    pub word_position: f32,
}

impl RoundConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            help: String::new(),
            word_width_per_second: DEFAULT_WORD_WIDTH_PER_SECOND,
            word_position: 0.0,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn with_word_width_per_second(mut self, word_width_per_second: f32) -> Self {
        self.word_width_per_second = word_width_per_second;
        self
    }

    pub fn with_word_position(mut self, word_position: f32) -> Self {
        self.word_position = word_position;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text.is_empty() {
            return Err(ConfigError::EmptyText);
        }
        Ok(())
    }

    /// Number of letters in the target word
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }
}
