use crate::registry::features::{ActionKind, Feature};

pub(super) static FEATURES: &[Feature] = &[
    // --- Base class ---
    Feature {
        name: "Fighting Style",
        level: 1,
        subclass: None,
        kind: ActionKind::Structural,
        summary: "Specialize in a style of combat.",
        description: "You adopt a fighting style such as Archery, Defense, Dueling or \
            Great Weapon Fighting, gaining its passive benefit.",
        key: true,
    },
    Feature {
        name: "Second Wind",
        level: 1,
        subclass: None,
        kind: ActionKind::BonusAction,
        summary: "Recover 1d10 + level hit points.",
        description: "On your turn you can use a bonus action to regain hit points equal to \
            1d10 + your fighter level. Once used, you must finish a short or long rest before \
            using it again.",
        key: false,
    },
    Feature {
        name: "Action Surge",
        level: 2,
        subclass: None,
        kind: ActionKind::Active,
        summary: "One additional action on your turn.",
        description: "You can push yourself to take one additional action on your turn. Once \
            used, you must finish a short or long rest before using it again.",
        key: true,
    },
    Feature {
        name: "Martial Archetype",
        level: 3,
        subclass: None,
        kind: ActionKind::Structural,
        summary: "Choose your archetype.",
        description: "You choose an archetype that defines your approach to combat, granting \
            features at levels 3, 7, 10, 15 and 18.",
        key: false,
    },
    Feature {
        name: "Ability Score Improvement",
        level: 4,
        subclass: None,
        kind: ActionKind::Structural,
        summary: "Raise ability scores or take a feat.",
        description: "Increase one ability score by 2, or two ability scores by 1 each, or take a \
            feat if that rule is in use.",
        key: false,
    },
    Feature {
        name: "Extra Attack",
        level: 5,
        subclass: None,
        kind: ActionKind::Passive,
        summary: "Two attacks per Attack action.",
        description: "When you take the Attack action on your turn, you can attack twice instead \
            of once.",
        key: true,
    },
    Feature {
        name: "Ability Score Improvement",
        level: 6,
        subclass: None,
        kind: ActionKind::Structural,
        summary: "Raise ability scores or take a feat.",
        description: "Fighters gain this extra increase beyond the usual levels.",
        key: false,
    },
    Feature {
        name: "Ability Score Improvement",
        level: 8,
        subclass: None,
        kind: ActionKind::Structural,
        summary: "Raise ability scores or take a feat.",
        description: "You gain another ability score increase.",
        key: false,
    },
    Feature {
        name: "Indomitable",
        level: 9,
        subclass: None,
        kind: ActionKind::Passive,
        summary: "Reroll a failed saving throw.",
        description: "You can reroll a saving throw that you fail, and must use the new roll. \
            Once used, you must finish a long rest before using it again.",
        key: false,
    },
    Feature {
        name: "Extra Attack (2)",
        level: 11,
        subclass: None,
        kind: ActionKind::Upgrade,
        summary: "Three attacks per Attack action.",
        description: "You can attack three times whenever you take the Attack action on your \
            turn.",
        key: true,
    },
    Feature {
        name: "Ability Score Improvement",
        level: 12,
        subclass: None,
        kind: ActionKind::Structural,
        summary: "Raise ability scores or take a feat.",
        description: "You gain another ability score increase.",
        key: false,
    },
    Feature {
        name: "Indomitable (2)",
        level: 13,
        subclass: None,
        kind: ActionKind::Upgrade,
        summary: "Two save rerolls between long rests.",
        description: "You can use Indomitable twice between long rests.",
        key: false,
    },
    Feature {
        name: "Ability Score Improvement",
        level: 14,
        subclass: None,
        kind: ActionKind::Structural,
        summary: "Raise ability scores or take a feat.",
        description: "You gain another ability score increase.",
        key: false,
    },
    Feature {
        name: "Ability Score Improvement",
        level: 16,
        subclass: None,
        kind: ActionKind::Structural,
        summary: "Raise ability scores or take a feat.",
        description: "You gain another ability score increase.",
        key: false,
    },
    Feature {
        name: "Action Surge (2)",
        level: 17,
        subclass: None,
        kind: ActionKind::Upgrade,
        summary: "Two surges between rests.",
        description: "You can use Action Surge twice before a rest, but only once on the same \
            turn.",
        key: false,
    },
    Feature {
        name: "Indomitable (3)",
        level: 17,
        subclass: None,
        kind: ActionKind::Upgrade,
        summary: "Three save rerolls between long rests.",
        description: "You can use Indomitable three times between long rests.",
        key: false,
    },
    Feature {
        name: "Ability Score Improvement",
        level: 19,
        subclass: None,
        kind: ActionKind::Structural,
        summary: "Raise ability scores or take a feat.",
        description: "You gain another ability score increase.",
        key: false,
    },
    Feature {
        name: "Extra Attack (3)",
        level: 20,
        subclass: None,
        kind: ActionKind::Capstone,
        summary: "Four attacks per Attack action.",
        description: "You can attack four times whenever you take the Attack action on your \
            turn.",
        key: true,
    },
    // --- Champion ---
    Feature {
        name: "Improved Critical",
        level: 3,
        subclass: Some("Champion"),
        kind: ActionKind::Passive,
        summary: "Critical hits on 19 or 20.",
        description: "Your weapon attacks score a critical hit on a roll of 19 or 20.",
        key: true,
    },
    Feature {
        name: "Remarkable Athlete",
        level: 7,
        subclass: Some("Champion"),
        kind: ActionKind::Passive,
        summary: "Half proficiency on untrained physical checks.",
        description: "Add half your proficiency bonus, rounded up, to Strength, Dexterity and \
            Constitution checks that don't already use it, and lengthen your running long jump \
            by your Strength modifier in feet.",
        key: false,
    },
    Feature {
        name: "Additional Fighting Style",
        level: 10,
        subclass: Some("Champion"),
        kind: ActionKind::Structural,
        summary: "A second style of combat.",
        description: "You can choose a second option from the Fighting Style feature.",
        key: false,
    },
    Feature {
        name: "Superior Critical",
        level: 15,
        subclass: Some("Champion"),
        kind: ActionKind::Upgrade,
        summary: "Critical hits on 18, 19 or 20.",
        description: "Your weapon attacks score a critical hit on a roll of 18-20.",
        key: false,
    },
    Feature {
        name: "Survivor",
        level: 18,
        subclass: Some("Champion"),
        kind: ActionKind::Passive,
        summary: "Regenerate while bloodied.",
        description: "At the start of each of your turns, regain hit points equal to 5 + your \
            Constitution modifier if you have no more than half your hit points left (and more \
            than 0).",
        key: false,
    },
    // --- Battle Master ---
    Feature {
        name: "Combat Superiority",
        level: 3,
        subclass: Some("Battle Master"),
        kind: ActionKind::Active,
        summary: "Maneuvers fueled by superiority dice.",
        description: "You learn three maneuvers and gain four d8 superiority dice to fuel them; \
            expended dice return on a short or long rest. Some maneuvers force a saving throw \
            against your maneuver DC.",
        key: true,
    },
    Feature {
        name: "Student of War",
        level: 3,
        subclass: Some("Battle Master"),
        kind: ActionKind::Passive,
        summary: "Artisan's tool proficiency.",
        description: "You gain proficiency with one type of artisan's tools of your choice.",
        key: false,
    },
    Feature {
        name: "Know Your Enemy",
        level: 7,
        subclass: Some("Battle Master"),
        kind: ActionKind::Active,
        summary: "Size up an opponent's capabilities.",
        description: "After a minute of observation, you learn whether a creature is your equal, \
            superior or inferior in two characteristics of your choice, such as Armor Class or \
            current hit points.",
        key: false,
    },
    Feature {
        name: "Improved Combat Superiority",
        level: 10,
        subclass: Some("Battle Master"),
        kind: ActionKind::Upgrade,
        summary: "Superiority dice become d10s.",
        description: "Your superiority dice turn into d10s.",
        key: false,
    },
    Feature {
        name: "Relentless",
        level: 15,
        subclass: Some("Battle Master"),
        kind: ActionKind::Passive,
        summary: "Never start a fight empty-handed.",
        description: "When you roll initiative and have no superiority dice remaining, you regain \
            one.",
        key: false,
    },
    Feature {
        name: "Improved Combat Superiority (2)",
        level: 18,
        subclass: Some("Battle Master"),
        kind: ActionKind::Upgrade,
        summary: "Superiority dice become d12s.",
        description: "Your superiority dice turn into d12s.",
        key: false,
    },
    // --- Eldritch Knight ---
    Feature {
        name: "Spellcasting",
        level: 3,
        subclass: Some("Eldritch Knight"),
        kind: ActionKind::Structural,
        summary: "Wizard spells off Intelligence.",
        description: "You learn to cast wizard spells, primarily abjuration and evocation, using \
            Intelligence as your spellcasting ability.",
        key: true,
    },
    Feature {
        name: "Weapon Bond",
        level: 3,
        subclass: Some("Eldritch Knight"),
        kind: ActionKind::Active,
        summary: "Summon a bonded weapon to hand.",
        description: "You bond with up to two weapons through a ritual; a bonded weapon can't be \
            disarmed from you unless you are incapacitated, and you can summon it to your hand \
            as a bonus action.",
        key: false,
    },
    Feature {
        name: "War Magic",
        level: 7,
        subclass: Some("Eldritch Knight"),
        kind: ActionKind::BonusAction,
        summary: "Attack after casting a cantrip.",
        description: "When you use your action to cast a cantrip, you can make one weapon attack \
            as a bonus action.",
        key: false,
    },
    Feature {
        name: "Eldritch Strike",
        level: 10,
        subclass: Some("Eldritch Knight"),
        kind: ActionKind::Passive,
        summary: "Weapon hits soften saves against your spells.",
        description: "When you hit a creature with a weapon attack, it has disadvantage on the \
            next saving throw it makes against a spell you cast before the end of your next turn.",
        key: false,
    },
    Feature {
        name: "Arcane Charge",
        level: 15,
        subclass: Some("Eldritch Knight"),
        kind: ActionKind::Passive,
        summary: "Teleport when you surge.",
        description: "When you use Action Surge, you can teleport up to 30 feet to an unoccupied \
            space you can see, before or after the additional action.",
        key: false,
    },
    Feature {
        name: "Improved War Magic",
        level: 18,
        subclass: Some("Eldritch Knight"),
        kind: ActionKind::Upgrade,
        summary: "Attack after casting any spell.",
        description: "When you use your action to cast a spell, you can make one weapon attack as \
            a bonus action.",
        key: false,
    },
];
