use chronica::components::{
    ability::Ability,
    character::Character,
    patch::CharacterPatch,
    spells::spell::Spell,
};

fn artificer() -> Character {
    let mut character = Character::new("Kaiden");
    character.class_name = "Artificer".to_string();
    character.abilities.set(Ability::Intelligence, 15);
    character
}

#[test]
fn derived_dc_and_attack_bonus() {
    let character = artificer();
    // 8 + 2 (proficiency) + 2 (INT 15)
    assert_eq!(character.spell_save_dc(), 12);
    assert_eq!(character.spell_attack_bonus(), 4);
    assert_eq!(character.spell_attack_bonus_display(), "+4");
}

#[test]
fn dc_rises_with_level() {
    let mut character = artificer();
    character.set_exp(6500); // level 5, proficiency +3
    assert_eq!(character.spell_save_dc(), 13);
}

#[test]
fn class_default_ability_comes_from_the_registry() {
    let mut character = artificer();
    assert_eq!(character.casting_ability(), Ability::Intelligence);

    character.class_name = "Cleric".to_string();
    assert_eq!(character.casting_ability(), Ability::Wisdom);
}

#[test]
fn overrides_take_precedence() {
    let mut character = artificer();
    character.abilities.set(Ability::Wisdom, 18);
    character.apply(CharacterPatch::SpellcastingAbility(Some(Ability::Wisdom)));
    assert_eq!(character.casting_ability(), Ability::Wisdom);
    assert_eq!(character.spell_save_dc(), 14);

    character.apply(CharacterPatch::SpellSaveDcOverride(Some(17)));
    assert_eq!(character.spell_save_dc(), 17);

    character.apply(CharacterPatch::SpellAttackBonusOverride(Some(
        "+9".to_string(),
    )));
    assert_eq!(character.spell_attack_bonus_display(), "+9");
}

#[test]
fn slot_usage_clamps_both_ways() {
    let mut character = artificer();
    character.apply(CharacterPatch::SetSpellSlotTotal { level: 1, total: 2 });

    character.apply(CharacterPatch::ExpendSpellSlot(1));
    character.apply(CharacterPatch::ExpendSpellSlot(1));
    character.apply(CharacterPatch::ExpendSpellSlot(1));
    assert_eq!(character.spell_slots.get(1).unwrap().used, 2);

    character.apply(CharacterPatch::RestoreSpellSlot(1));
    character.apply(CharacterPatch::RestoreSpellSlot(1));
    character.apply(CharacterPatch::RestoreSpellSlot(1));
    assert_eq!(character.spell_slots.get(1).unwrap().used, 0);
}

#[test]
fn cantrips_are_always_available() {
    let mut character = artificer();
    character.apply(CharacterPatch::AddSpell(Spell::new("Fire Bolt", 0)));
    character.apply(CharacterPatch::AddSpell(Spell::new("Cure Wounds", 1)));

    let cantrip = &character.spells[0];
    let leveled = &character.spells[1];
    assert!(cantrip.is_available());
    assert!(!leveled.is_available());
}

#[test]
fn preparing_by_name_only_touches_that_spell() {
    let mut character = artificer();
    character.apply(CharacterPatch::AddSpell(Spell::new("Cure Wounds", 1)));
    character.apply(CharacterPatch::AddSpell(Spell::new("Faerie Fire", 1)));

    character.apply(CharacterPatch::ToggleSpellPrepared("Faerie Fire".to_string()));
    assert!(!character.spells[0].prepared);
    assert!(character.spells[1].prepared);
}

#[test]
fn removing_a_spell_by_name() {
    let mut character = artificer();
    character.apply(CharacterPatch::AddSpell(Spell::new("Cure Wounds", 1)));
    character.apply(CharacterPatch::RemoveSpell("Cure Wounds".to_string()));
    assert!(character.spells.is_empty());
}
