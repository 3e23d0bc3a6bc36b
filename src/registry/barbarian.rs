use crate::registry::features::{ActionKind, Feature};

pub(super) static FEATURES: &[Feature] = &[
    // --- Base class ---
    Feature {
        name: "Rage",
        level: 1,
        subclass: None,
        kind: ActionKind::Active,
        summary: "Bonus melee damage and physical resistance.",
        description: "While raging you gain a bonus to Strength-based melee damage rolls and \
            resistance to bludgeoning, piercing and slashing damage. A rage lasts one minute and \
            ends early if you neither attack a hostile creature nor take damage since your last \
            turn.",
        key: true,
    },
    Feature {
        name: "Unarmored Defense",
        level: 1,
        subclass: None,
        kind: ActionKind::Passive,
        summary: "AC from Dexterity and Constitution.",
        description: "While not wearing armor, your Armor Class equals 10 + your Dexterity \
            modifier + your Constitution modifier. You can still use a shield.",
        key: false,
    },
    Feature {
        name: "Reckless Attack",
        level: 2,
        subclass: None,
        kind: ActionKind::Active,
        summary: "Advantage on attacks at the cost of advantage against you.",
        description: "On the first attack of your turn you can choose to attack recklessly, \
            gaining advantage on Strength-based melee attacks. Until your next turn, attack rolls \
            against you also have advantage.",
        key: true,
    },
    Feature {
        name: "Danger Sense",
        level: 2,
        subclass: None,
        kind: ActionKind::Passive,
        summary: "Advantage on Dexterity saving throws.",
        description: "You have advantage on Dexterity saving throws against effects you can see, \
            such as traps and spells, as long as you are not blinded, deafened or incapacitated.",
        key: false,
    },
    Feature {
        name: "Primal Path",
        level: 3,
        subclass: None,
        kind: ActionKind::Structural,
        summary: "Choose your archetype.",
        description: "You choose a path that shapes your rage, granting additional features at \
            levels 3, 6, 10 and 14.",
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
        name: "Fast Movement",
        level: 5,
        subclass: None,
        kind: ActionKind::Passive,
        summary: "+10 ft. speed.",
        description: "Your speed increases by 10 feet while you are not wearing heavy armor.",
        key: false,
    },
    Feature {
        name: "Feral Instinct",
        level: 7,
        subclass: None,
        kind: ActionKind::Passive,
        summary: "Advantage on initiative.",
        description: "You have advantage on initiative rolls. If you are surprised when combat \
            starts, you can still act normally on your first turn by entering a rage.",
        key: true,
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
        name: "Brutal Critical",
        level: 9,
        subclass: None,
        kind: ActionKind::Upgrade,
        summary: "+1 weapon die on critical hits.",
        description: "When you score a critical hit with a melee weapon attack, roll one \
            additional weapon damage die. The extra dice increase at higher levels.",
        key: false,
    },
    Feature {
        name: "Relentless Rage",
        level: 11,
        subclass: None,
        kind: ActionKind::Passive,
        summary: "Shrug off death while raging.",
        description: "If you drop to 0 hit points while raging and don't die outright, you can \
            make a DC 10 Constitution saving throw to stay at 1 hit point instead. The DC rises \
            with each use and resets on a long rest.",
        key: false,
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
        name: "Brutal Critical",
        level: 13,
        subclass: None,
        kind: ActionKind::Upgrade,
        summary: "+2 weapon dice on critical hits.",
        description: "The extra weapon damage dice on a melee critical hit increase to two.",
        key: false,
    },
    Feature {
        name: "Persistent Rage",
        level: 15,
        subclass: None,
        kind: ActionKind::Passive,
        summary: "Rage without feeding it.",
        description: "Your rage only ends early if you fall unconscious or choose to end it.",
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
        name: "Brutal Critical",
        level: 17,
        subclass: None,
        kind: ActionKind::Upgrade,
        summary: "+3 weapon dice on critical hits.",
        description: "The extra weapon damage dice on a melee critical hit increase to three.",
        key: false,
    },
    Feature {
        name: "Indomitable Might",
        level: 18,
        subclass: None,
        kind: ActionKind::Passive,
        summary: "Strength checks never roll low.",
        description: "If your total for a Strength check is less than your Strength score, you \
            can use that score in place of the total.",
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
        name: "Primal Champion",
        level: 20,
        subclass: None,
        kind: ActionKind::Capstone,
        summary: "Strength and Constitution rise by 4.",
        description: "Your Strength and Constitution scores each increase by 4, and their maximum \
            is now 24.",
        key: true,
    },
    // --- Path of the Berserker ---
    Feature {
        name: "Frenzy",
        level: 3,
        subclass: Some("Path of the Berserker"),
        kind: ActionKind::BonusAction,
        summary: "Extra melee attack each turn while frenzied.",
        description: "You can go into a frenzy when you rage, making a single melee weapon attack \
            as a bonus action on each of your turns. When the rage ends you suffer one level of \
            exhaustion.",
        key: true,
    },
    Feature {
        name: "Mindless Rage",
        level: 6,
        subclass: Some("Path of the Berserker"),
        kind: ActionKind::Passive,
        summary: "Immune to charm and fear while raging.",
        description: "You can't be charmed or frightened while raging; such effects are suspended \
            for the duration of the rage.",
        key: false,
    },
    Feature {
        name: "Intimidating Presence",
        level: 10,
        subclass: Some("Path of the Berserker"),
        kind: ActionKind::Action,
        summary: "Frighten a creature by presence alone.",
        description: "As an action, force a creature within 30 feet to make a Wisdom saving throw \
            against your Charisma-based DC or be frightened of you until the end of your next \
            turn.",
        key: false,
    },
    Feature {
        name: "Retaliation",
        level: 14,
        subclass: Some("Path of the Berserker"),
        kind: ActionKind::Reaction,
        summary: "Strike back when damaged in reach.",
        description: "When you take damage from a creature within 5 feet, you can use your \
            reaction to make a melee weapon attack against it.",
        key: false,
    },
    // --- Path of the Totem Warrior ---
    Feature {
        name: "Spirit Seeker",
        level: 3,
        subclass: Some("Path of the Totem Warrior"),
        kind: ActionKind::Passive,
        summary: "Ritual kinship with beasts.",
        description: "You can cast Beast Sense and Speak with Animals as rituals.",
        key: false,
    },
    Feature {
        name: "Totem Spirit",
        level: 3,
        subclass: Some("Path of the Totem Warrior"),
        kind: ActionKind::Structural,
        summary: "Choose a bear, eagle or wolf spirit.",
        description: "You choose a totem animal and gain its boon while raging: the bear grants \
            resistance to all damage but psychic, the eagle lets others' opportunity attacks \
            against you roll with disadvantage while you Dash as a bonus action, and the wolf \
            grants allies advantage on melee attacks against enemies within 5 feet of you.",
        key: true,
    },
    Feature {
        name: "Aspect of the Beast",
        level: 6,
        subclass: Some("Path of the Totem Warrior"),
        kind: ActionKind::Passive,
        summary: "A second totem boon, outside of rage.",
        description: "You gain a magical benefit based on a chosen totem animal, active at all \
            times rather than only while raging.",
        key: false,
    },
    Feature {
        name: "Spirit Walker",
        level: 10,
        subclass: Some("Path of the Totem Warrior"),
        kind: ActionKind::Active,
        summary: "Commune with the spirit world.",
        description: "You can cast Commune with Nature as a ritual; a spirit animal delivers the \
            information you seek.",
        key: false,
    },
    Feature {
        name: "Totemic Attunement",
        level: 14,
        subclass: Some("Path of the Totem Warrior"),
        kind: ActionKind::Passive,
        summary: "The totem's full power while raging.",
        description: "You gain the greater power of a chosen totem animal while raging, such as \
            the bear's pull on nearby enemies' attacks or the wolf's knockdown on melee hits.",
        key: false,
    },
];
