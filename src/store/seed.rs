use crate::components::{
    ability::{Ability, AbilityScores},
    attack::Weapon,
    character::Character,
    health::hit_points::HitPoints,
    items::item::Item,
    skill::Skill,
};

/// The character every fresh install starts with, and the substitute when
/// the last character is deleted. The store is never empty.
pub fn template_character() -> Character {
    let mut character = Character::new("Kaiden Arvek");
    character.class_name = "Artificer".to_string();
    character.race = "Human".to_string();
    character.background = "Guild Artisan".to_string();
    character.alignment = "Chaotic Neutral".to_string();
    character.hp = HitPoints::new(16);
    character.ac = 15;
    character.speed = "9 m".to_string();

    character.abilities.set(Ability::Strength, 10);
    character.abilities.set(Ability::Dexterity, 12);
    character.abilities.set(Ability::Constitution, 12);
    character.abilities.set(Ability::Intelligence, 15);
    character.abilities.set(Ability::Wisdom, 12);
    character.abilities.set(Ability::Charisma, 10);

    for skill in [
        Skill::Arcana,
        Skill::Investigation,
        Skill::Perception,
        Skill::Persuasion,
    ] {
        character.proficiencies.skills.insert(skill);
    }
    for save in [Ability::Constitution, Ability::Intelligence] {
        character.proficiencies.saves.insert(save);
    }
    character.proficiencies.languages = vec![
        "Common".to_string(),
        "Draconic".to_string(),
        "Dwarvish".to_string(),
    ];
    character.proficiencies.tools = vec![
        "Thieves' tools".to_string(),
        "Tinker's tools".to_string(),
        "Cartographer's tools".to_string(),
        "Smith's tools".to_string(),
    ];

    character.personality =
        "I believe anything worth doing is worth doing right. I can't help it - I'm a \
         perfectionist."
            .to_string();
    character.ideals =
        "People. I'm committed to the people I care about, not to ideals.".to_string();
    character.bonds = "I created a great work for someone, then found them unworthy of it. I'm \
         still looking for someone worthy."
        .to_string();
    character.flaws =
        "I'm never satisfied with what I have - I always want more.".to_string();
    character.backstory =
        "Kaiden Arvek was born to the good noise of a workshop.".to_string();

    character.inventory.add_item(
        Item::new("Scale mail", 45.0, 1)
            .with_description("Medium armor.")
            .equipped(),
    );
    character
        .weapons
        .push(Weapon::new("Quarterstaff", "+2", "1d6"));
    character.spell_slots.set_total(1, 2);

    character
}

/// A blank sheet for the "new character" action: everything zeroed, ready
/// to be filled in.
pub fn new_character() -> Character {
    let mut character = Character::new("New Adventurer");
    character.class_name = "Fighter".to_string();
    character.race = "Human".to_string();
    character.abilities = AbilityScores::with_all(0);
    character.proficiencies.languages = vec!["Common".to_string()];
    character
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_satisfies_the_level_invariant() {
        let character = template_character();
        assert_eq!(character.exp, 0);
        assert_eq!(character.level, 1);
    }

    #[test]
    fn template_is_fully_populated() {
        let character = template_character();
        assert!(!character.name.is_empty());
        assert_eq!(character.proficiencies.skills.len(), 4);
        assert_eq!(character.inventory.len(), 1);
        assert_eq!(character.spell_slots.get(1).unwrap().total, 2);
    }

    #[test]
    fn new_characters_get_fresh_ids() {
        assert_ne!(new_character().id, new_character().id);
    }

    #[test]
    fn blank_character_starts_at_zero() {
        let character = new_character();
        assert_eq!(character.abilities.get(Ability::Strength), 0);
        assert_eq!(character.ability_modifier(Ability::Strength), -5);
        assert!(character.proficiencies.skills.is_empty());
    }
}
