use chronica::{
    components::{character::Character, patch::CharacterPatch},
    registry::{
        classes::{TotemAnimal, casting_ability, subclass_unlock_level},
        features::{ActionKind, class_features, features_at, features_through, subclasses_of},
    },
};

#[test]
fn base_rows_show_for_every_subclass_state() {
    for subclass in [None, Some("Path of the Berserker")] {
        let features = features_at("Barbarian", 1, subclass);
        assert!(features.iter().any(|f| f.name == "Rage"));
    }
}

#[test]
fn subclass_rows_wait_for_the_choice() {
    // Nothing subclass-gated leaks before the choice.
    for level in 1..=20 {
        for feature in features_at("Fighter", level, None) {
            assert!(feature.subclass.is_none());
        }
    }

    let features = features_at("Fighter", 3, Some("Battle Master"));
    assert!(features.iter().any(|f| f.name == "Combat Superiority"));
    assert!(features.iter().all(|f| f.name != "Improved Critical"));
}

#[test]
fn chosen_subclass_unlocks_its_whole_track() {
    let features = features_through("Fighter", 20, Some("Champion"));
    let champion: Vec<_> = features
        .iter()
        .filter(|f| f.subclass == Some("Champion"))
        .collect();
    assert_eq!(champion.len(), 5);
}

#[test]
fn catalogue_covers_both_classes() {
    assert!(!class_features("Barbarian").is_empty());
    assert!(!class_features("Fighter").is_empty());
    assert!(class_features("Sorcerer").is_empty());

    assert_eq!(
        subclasses_of("Fighter"),
        vec!["Champion", "Battle Master", "Eldritch Knight"]
    );
}

#[test]
fn capstones_sit_at_level_twenty() {
    for class in ["Barbarian", "Fighter"] {
        let capstones: Vec<_> = class_features(class)
            .iter()
            .filter(|f| f.kind == ActionKind::Capstone)
            .collect();
        assert!(!capstones.is_empty());
        assert!(capstones.iter().all(|f| f.level == 20));
    }
}

#[test]
fn unlock_levels_fall_back_to_three() {
    assert_eq!(subclass_unlock_level("Barbarian"), 3);
    assert_eq!(subclass_unlock_level("Warlock"), 1);
    assert_eq!(subclass_unlock_level("Homebrew Class"), 3);
}

#[test]
fn the_prompt_appears_exactly_at_the_unlock_level() {
    let mut character = Character::new("Sorrel");
    character.class_name = "Barbarian".to_string();
    assert!(!character.subclass_choice_pending());

    character.apply(CharacterPatch::Experience(900)); // level 3
    assert!(character.subclass_choice_pending());

    character.apply(CharacterPatch::Subclass(Some(
        "Path of the Totem Warrior".to_string(),
    )));
    character.apply(CharacterPatch::TotemAnimal(Some(TotemAnimal::Wolf)));
    assert!(!character.subclass_choice_pending());
    assert_eq!(character.totem_animal, Some(TotemAnimal::Wolf));
}

#[test]
fn totem_choice_rides_on_the_subclass() {
    let features = features_at("Barbarian", 3, Some("Path of the Totem Warrior"));
    assert!(features.iter().any(|f| f.name == "Totem Spirit"));
}

#[test]
fn unknown_casting_classes_default_to_intelligence() {
    assert_eq!(
        casting_ability("Homebrew Class"),
        casting_ability("Artificer")
    );
}
