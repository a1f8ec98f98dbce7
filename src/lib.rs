//! Anagram Drift - simulation core of a scrolling anagram typing game
//!
//! Core modules:
//! - `sim`: Round engine (scroll physics, letter selection, submissions, knockback)
//! - `config`: Round parameters and configuration errors
//! - `levels`: Level provider feeding rounds to the engine
//! - `dictionary`: Valid submission lookup
//! - `settings`: Data-driven game balance

pub mod config;
pub mod dictionary;
pub mod levels;
pub mod settings;
pub mod sim;

pub use config::{ConfigError, RoundConfig};
pub use dictionary::{Dictionary, WordList};
pub use levels::{LevelProvider, Levels};
pub use settings::Settings;
pub use sim::{HelpState, Round, RoundEngine, Slot, SubmitState};

/// Game configuration constants
pub mod consts {
    /// Track width in design units (the screen width the game was laid out for)
    pub const TRACK_WIDTH: f32 = 720.0;
    /// Pixel width of the word block used for the boundary check
    pub const WORD_WIDTH: f32 = 160.0;
    /// Longest word the speed curve is tuned for
    pub const LETTER_MAX: usize = 10;

    /// Scroll velocity (track widths per second) for rounds with help text
    pub const DEFAULT_WORD_WIDTH_PER_SECOND: f32 = -0.01;
    /// Base scroll velocity for shuffled rounds, scaled by the speed curve
    pub const BASE_WORD_SPEED: f32 = -0.002;
    /// Exponent of the speed curve
    pub const SPEED_POWER: f32 = 2.0;

    /// Knockback per submitted letter (fraction of track width)
    pub const KNOCKBACK_PER_LENGTH: f32 = 0.03;
    /// Knockback multiplier for solving the whole word
    pub const COMPLETE_KNOCKBACK_MULTIPLIER: f32 = 3.0;

    /// Repeat hints stop showing after this level index
    pub const REPEAT_HELP_MAX_LEVEL: usize = 50;

    pub const GAME_OVER_HELP: &str = "GAME OVER! TO SKIP ANY WORD, PRESS THE PAGEUP KEY (MAC: FN+UP).  TO GO BACK A WORD, PRESS THE PAGEDOWN KEY (MAC: FN+DOWN).";
    pub const REPEAT_HELP: &str = "YOU CAN ONLY ENTER EACH SHORTER WORD ONCE.";
}
