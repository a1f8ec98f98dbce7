//! Level progression
//!
//! The engine asks a `LevelProvider` for the next round whenever a word is
//! solved, and for arbitrary jumps when the player skips words.

use crate::config::{ConfigError, RoundConfig};

/// Source of round parameters
pub trait LevelProvider {
    /// Index of the current level (0-based)
    fn index(&self) -> usize;

    /// Parameters of the current level
    fn current(&self) -> RoundConfig;

    /// Move `add` levels forward (negative goes back) and return the new level
    fn up(&mut self, add: isize) -> RoundConfig;
}

/// Fixed list of levels; the index wraps around at both ends
#[derive(Debug, Clone)]
pub struct Levels {
    levels: Vec<RoundConfig>,
    index: usize,
}

impl Levels {
    /// Create a level list, rejecting an empty list or any invalid round
    pub fn new(levels: Vec<RoundConfig>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        for (index, level) in levels.iter().enumerate() {
            level
                .validate()
                .map_err(|source| ConfigError::InvalidLevel {
                    index,
                    source: Box::new(source),
                })?;
        }
        Ok(Self { levels, index: 0 })
    }

    /// Build shuffled levels from plain words
    pub fn from_words<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(words.into_iter().map(|word| RoundConfig::new(word)).collect())
    }

    /// Parse a JSON array of round configs
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let levels: Vec<RoundConfig> = serde_json::from_str(json)?;
        let levels = Self::new(levels)?;
        log::info!("Loaded {} levels", levels.len());
        Ok(levels)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl LevelProvider for Levels {
    fn index(&self) -> usize {
        self.index
    }

    fn current(&self) -> RoundConfig {
        self.levels[self.index].clone()
    }

    fn up(&mut self, add: isize) -> RoundConfig {
        let len = self.levels.len();
        let step = add.rem_euclid(len as isize) as usize;
        self.index = (self.index + step) % len;
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(Levels::new(Vec::new()), Err(ConfigError::NoLevels)));
    }

    #[test]
    fn test_invalid_level_reports_index() {
        let result = Levels::from_words(["CAT", "", "DOG"]);
        match result {
            Err(ConfigError::InvalidLevel { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, ConfigError::EmptyText));
            }
            other => panic!("expected InvalidLevel, got {:?}", other),
        }
    }

    #[test]
    fn test_up_wraps() {
        let mut levels = Levels::from_words(["A", "B", "C"]).unwrap();
        assert_eq!(levels.index(), 0);
        assert_eq!(levels.up(1).text, "B");
        assert_eq!(levels.up(2).text, "A");
        assert_eq!(levels.up(-1).text, "C");
        assert_eq!(levels.index(), 2);
    }

    #[test]
    fn test_up_extreme_steps() {
        let mut levels = Levels::from_words(["A", "B", "C"]).unwrap();
        // isize::MAX % 3 == 1
        assert_eq!(levels.up(isize::MAX).text, "B");
        // isize::MIN rem_euclid 3 == 1
        assert_eq!(levels.up(isize::MIN).text, "C");
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"text": "START", "help": "Type START"},
            {"text": "PLANET"}
        ]"#;
        let levels = Levels::from_json(json).unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels.current().help, "Type START");
    }

    #[test]
    fn test_from_json_validates() {
        assert!(matches!(
            Levels::from_json(r#"[{"text": ""}]"#),
            Err(ConfigError::InvalidLevel { index: 0, .. })
        ));
        assert!(matches!(Levels::from_json("[]"), Err(ConfigError::NoLevels)));
    }
}
