use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

#[derive(EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub fn acronym(&self) -> &str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub static ABILITY_SCORE_MIN: i32 = 0;
pub static ABILITY_SCORE_MAX: i32 = 20;
pub static ABILITY_SCORE_DEFAULT: i32 = 10;

/// Modifier for an ability score: `floor((score - 10) / 2)`.
/// Floor division, not truncation, so odd scores below 10 round down
/// (7 -> -2, 0 -> -5).
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// A signed bonus as shown on the sheet ("+2", "-1").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier(pub i32);

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// The six raw ability scores. Writes are clamped into [0, 20]; the sheet
/// never stores a score outside that range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityScores {
    scores: HashMap<Ability, i32>,
}

impl AbilityScores {
    pub fn new() -> Self {
        Self::with_all(ABILITY_SCORE_DEFAULT)
    }

    pub fn with_all(score: i32) -> Self {
        let mut scores = Self {
            scores: HashMap::new(),
        };
        for ability in Ability::iter() {
            scores.set(ability, score);
        }
        scores
    }

    pub fn get(&self, ability: Ability) -> i32 {
        *self
            .scores
            .get(&ability)
            .unwrap_or(&ABILITY_SCORE_DEFAULT)
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        self.scores
            .insert(ability, score.clamp(ABILITY_SCORE_MIN, ABILITY_SCORE_MAX));
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.get(ability))
    }

    /// Fills in any missing ability and re-clamps every score. Imported
    /// documents may carry partial or out-of-range data.
    pub fn normalize(&mut self) {
        for ability in Ability::iter() {
            let score = self.get(ability);
            self.set(ability, score);
        }
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_at_ten_is_zero() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
    }

    #[test]
    fn modifier_floors_below_ten() {
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(7), -2);
        assert_eq!(ability_modifier(0), -5);
    }

    #[test]
    fn modifier_above_ten() {
        assert_eq!(ability_modifier(15), 2);
        assert_eq!(ability_modifier(20), 5);
    }

    #[test]
    fn scores_clamp_on_write() {
        let mut scores = AbilityScores::new();
        scores.set(Ability::Strength, 25);
        assert_eq!(scores.get(Ability::Strength), 20);
        scores.set(Ability::Strength, -3);
        assert_eq!(scores.get(Ability::Strength), 0);
    }

    #[test]
    fn new_initializes_every_ability() {
        let scores = AbilityScores::new();
        for ability in Ability::iter() {
            assert_eq!(scores.get(ability), 10);
        }
    }

    #[test]
    fn modifier_display_is_signed() {
        assert_eq!(Modifier(2).to_string(), "+2");
        assert_eq!(Modifier(0).to_string(), "+0");
        assert_eq!(Modifier(-1).to_string(), "-1");
    }
}
