use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::components::ability::Ability;

#[derive(EnumIter, Debug, Hash, Eq, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    // --- Strength ---
    Athletics,
    // --- Dexterity ---
    Acrobatics,
    SleightOfHand,
    Stealth,
    // --- Intelligence ---
    Arcana,
    History,
    Investigation,
    Nature,
    Religion,
    // --- Wisdom ---
    AnimalHandling,
    Insight,
    Medicine,
    Perception,
    Survival,
    // --- Charisma ---
    Deception,
    Intimidation,
    Performance,
    Persuasion,
}

macro_rules! skill_ability_map {
    ( $( $skill:ident => $ability:ident ),* $(,)? ) => {
        pub const fn skill_ability(skill: Skill) -> Ability {
            match skill {
                $( Skill::$skill => Ability::$ability ),*
            }
        }
    };
}

skill_ability_map! {
    Athletics      => Strength,
    Acrobatics     => Dexterity,
    SleightOfHand  => Dexterity,
    Stealth        => Dexterity,
    Arcana         => Intelligence,
    History        => Intelligence,
    Investigation  => Intelligence,
    Nature         => Intelligence,
    Religion       => Intelligence,
    AnimalHandling => Wisdom,
    Insight        => Wisdom,
    Medicine       => Wisdom,
    Perception     => Wisdom,
    Survival       => Wisdom,
    Deception      => Charisma,
    Intimidation   => Charisma,
    Performance    => Charisma,
    Persuasion     => Charisma,
}

impl Skill {
    pub fn ability(&self) -> Ability {
        skill_ability(*self)
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn skill_ability_map() {
        assert_eq!(skill_ability(Skill::Athletics), Ability::Strength);
        assert_eq!(skill_ability(Skill::Acrobatics), Ability::Dexterity);
        assert_eq!(skill_ability(Skill::Arcana), Ability::Intelligence);
        assert_eq!(skill_ability(Skill::Perception), Ability::Wisdom);
        assert_eq!(skill_ability(Skill::Persuasion), Ability::Charisma);
    }

    #[test]
    fn eighteen_skills() {
        assert_eq!(Skill::iter().count(), 18);
    }
}
