use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::components::ability::Ability;

/// Spirit animal choice for the Path of the Totem Warrior.
#[derive(EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotemAnimal {
    Bear,
    Eagle,
    Wolf,
}

impl fmt::Display for TotemAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub static DEFAULT_SUBCLASS_LEVEL: u8 = 3;

/// Level at which a class picks its specialization. Class names are the
/// free text typed on the sheet, so the lookup is case-insensitive and
/// unknown names fall back to level 3.
pub fn subclass_unlock_level(class_name: &str) -> u8 {
    match class_name.trim().to_ascii_lowercase().as_str() {
        "cleric" | "sorcerer" | "warlock" => 1,
        "druid" | "wizard" => 2,
        _ => DEFAULT_SUBCLASS_LEVEL,
    }
}

/// Default spellcasting ability per class. Characters can override this on
/// the sheet; unknown classes cast off Intelligence.
pub fn casting_ability(class_name: &str) -> Ability {
    match class_name.trim().to_ascii_lowercase().as_str() {
        "cleric" | "druid" | "ranger" | "monk" => Ability::Wisdom,
        "bard" | "paladin" | "sorcerer" | "warlock" => Ability::Charisma,
        _ => Ability::Intelligence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_levels_per_class() {
        assert_eq!(subclass_unlock_level("Cleric"), 1);
        assert_eq!(subclass_unlock_level("wizard"), 2);
        assert_eq!(subclass_unlock_level("Barbarian"), 3);
        assert_eq!(subclass_unlock_level("Fighter"), 3);
    }

    #[test]
    fn unknown_class_unlocks_at_three() {
        assert_eq!(subclass_unlock_level("Bloodhunter"), 3);
        assert_eq!(subclass_unlock_level(""), 3);
    }

    #[test]
    fn casting_ability_per_class() {
        assert_eq!(casting_ability("Wizard"), Ability::Intelligence);
        assert_eq!(casting_ability("Artificer"), Ability::Intelligence);
        assert_eq!(casting_ability("Cleric"), Ability::Wisdom);
        assert_eq!(casting_ability("Warlock"), Ability::Charisma);
    }

    #[test]
    fn unknown_class_casts_off_intelligence() {
        assert_eq!(casting_ability("Mystic"), Ability::Intelligence);
    }
}
