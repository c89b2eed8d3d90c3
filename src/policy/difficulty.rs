//! Opponent difficulty tiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// How scripted opponents pick their discard.
///
/// - `Easy`: any tile, uniformly.
/// - `Medium`: a random isolated tile, else any tile.
/// - `Hard`: the first isolated tile in hand order, else any tile.
///
/// Hard is less random than Medium among isolated tiles. That is the
/// documented behavior of the tiers, not an oversight to correct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse an optional tier name, falling back to `default` when the name
    /// is absent or not recognised.
    ///
    /// ```
    /// use mahjong_table::policy::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_name_or(Some("hard"), Difficulty::Medium), Difficulty::Hard);
    /// assert_eq!(Difficulty::from_name_or(Some("expert"), Difficulty::Medium), Difficulty::Medium);
    /// assert_eq!(Difficulty::from_name_or(None, Difficulty::Easy), Difficulty::Easy);
    /// ```
    #[must_use]
    pub fn from_name_or(name: Option<&str>, default: Difficulty) -> Self {
        name.and_then(|n| n.parse().ok()).unwrap_or(default)
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(EngineError::UnknownDifficulty("expert".to_string()))
        );
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(Difficulty::from_name_or(None, Difficulty::default()), Difficulty::Medium);
        assert_eq!(Difficulty::from_name_or(Some(""), Difficulty::default()), Difficulty::Medium);
    }

    #[test]
    fn test_name_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.name().parse::<Difficulty>(), Ok(difficulty));
            assert_eq!(difficulty.to_string(), difficulty.name());
        }
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }
}
