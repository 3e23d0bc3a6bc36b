use serde::{Deserialize, Serialize};
use uom::si::f32::Mass;
use uuid::Uuid;

use crate::{
    components::{
        ability::{Ability, AbilityScores, Modifier},
        attack::{OtherAttack, Weapon},
        health::{
            hit_points::HitPoints,
            life_state::{DeathSaves, LifeState},
        },
        id::CharacterId,
        items::inventory::{EncumbranceTier, Inventory, carry_capacity, encumbrance_tier},
        level::{XpProgress, level_from_xp, proficiency_bonus, xp_progress},
        proficiency::Proficiencies,
        skill::Skill,
        spells::{spell::Spell, spellcasting::SpellSlots},
    },
    registry::classes::{self, TotemAnimal},
};

/// The aggregate root every view reads and writes. Owned by the character
/// store; the derivation methods below never mutate it.
///
/// Invariant: `level` always equals `level_from_xp(exp)`. Every write to
/// `exp` goes through [`Character::set_exp`], which re-asserts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub class_name: String,
    pub race: String,
    pub background: String,
    pub alignment: String,
    pub exp: u32,
    pub level: u8,
    pub inspiration: u32,
    pub portrait: Option<String>,
    pub hp: HitPoints,
    pub ac: i32,
    pub initiative_bonus: i32,
    pub speed: String,
    pub death_saves: DeathSaves,
    pub abilities: AbilityScores,
    pub proficiencies: Proficiencies,
    pub personality: String,
    pub ideals: String,
    pub bonds: String,
    pub flaws: String,
    pub backstory: String,
    pub inventory: Inventory,
    pub weapons: Vec<Weapon>,
    pub other_attacks: Vec<OtherAttack>,
    pub spells: Vec<Spell>,
    pub spell_slots: SpellSlots,
    pub spellcasting_ability: Option<Ability>,
    pub spell_save_dc_override: Option<i32>,
    pub spell_attack_bonus_override: Option<String>,
    pub subclass: Option<String>,
    pub totem_animal: Option<TotemAnimal>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            class_name: String::new(),
            race: String::new(),
            background: String::new(),
            alignment: String::new(),
            exp: 0,
            level: 1,
            inspiration: 0,
            portrait: None,
            hp: HitPoints::new(0),
            ac: 10,
            initiative_bonus: 0,
            speed: String::new(),
            death_saves: DeathSaves::new(),
            abilities: AbilityScores::new(),
            proficiencies: Proficiencies::new(),
            personality: String::new(),
            ideals: String::new(),
            bonds: String::new(),
            flaws: String::new(),
            backstory: String::new(),
            inventory: Inventory::new(),
            weapons: Vec::new(),
            other_attacks: Vec::new(),
            spells: Vec::new(),
            spell_slots: SpellSlots::new(),
            spellcasting_ability: None,
            spell_save_dc_override: None,
            spell_attack_bonus_override: None,
            subclass: None,
            totem_animal: None,
        }
    }

    // --- Progression ---

    /// The only way to write experience: keeps `level` derived from `exp`.
    pub fn set_exp(&mut self, exp: u32) {
        self.exp = exp;
        self.level = level_from_xp(exp);
    }

    pub fn add_exp(&mut self, amount: u32) {
        self.set_exp(self.exp.saturating_add(amount));
    }

    pub fn xp_progress(&self) -> XpProgress {
        xp_progress(self.exp, self.level)
    }

    pub fn proficiency_bonus(&self) -> i32 {
        proficiency_bonus(self.level)
    }

    // --- Checks and saves ---

    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        self.abilities.modifier(ability)
    }

    pub fn skill_modifier(&self, skill: Skill) -> i32 {
        let base = self.ability_modifier(skill.ability());
        if self.proficiencies.has_skill(skill) {
            base + self.proficiency_bonus()
        } else {
            base
        }
    }

    pub fn saving_throw_modifier(&self, ability: Ability) -> i32 {
        let base = self.ability_modifier(ability);
        if self.proficiencies.has_save(ability) {
            base + self.proficiency_bonus()
        } else {
            base
        }
    }

    // --- Spellcasting ---

    /// Per-character override first, then the class default.
    pub fn casting_ability(&self) -> Ability {
        self.spellcasting_ability
            .unwrap_or_else(|| classes::casting_ability(&self.class_name))
    }

    pub fn spell_save_dc(&self) -> i32 {
        self.spell_save_dc_override.unwrap_or_else(|| {
            8 + self.proficiency_bonus() + self.ability_modifier(self.casting_ability())
        })
    }

    pub fn spell_attack_bonus(&self) -> i32 {
        self.proficiency_bonus() + self.ability_modifier(self.casting_ability())
    }

    /// Sheet text for the attack bonus; the free-text override wins.
    pub fn spell_attack_bonus_display(&self) -> String {
        match &self.spell_attack_bonus_override {
            Some(text) => text.clone(),
            None => Modifier(self.spell_attack_bonus()).to_string(),
        }
    }

    // --- Carrying ---

    pub fn carry_capacity(&self) -> Mass {
        carry_capacity(self.abilities.get(Ability::Strength))
    }

    pub fn encumbrance(&self) -> EncumbranceTier {
        encumbrance_tier(
            self.inventory.total_weight(),
            self.abilities.get(Ability::Strength),
        )
    }

    // --- Life and death ---

    pub fn life_state(&self) -> LifeState {
        self.death_saves.state()
    }

    pub fn toggle_death_save_success(&mut self, index: u8) -> bool {
        self.death_saves.toggle_success(index)
    }

    pub fn toggle_death_save_failure(&mut self, index: u8) -> bool {
        self.death_saves.toggle_failure(index)
    }

    /// The only way out of [`LifeState::Dead`]: clears both counters and
    /// returns to life at 1 HP.
    pub fn revive(&mut self) -> LifeState {
        self.death_saves.reset();
        self.hp.current = 1;
        LifeState::Revived
    }

    // --- Subclass ---

    pub fn subclass_unlock_level(&self) -> u8 {
        classes::subclass_unlock_level(&self.class_name)
    }

    /// Whether the "choose subclass" prompt should show: the unlock level is
    /// reached and no choice has been made yet.
    pub fn subclass_choice_pending(&self) -> bool {
        self.subclass.is_none() && self.level >= self.subclass_unlock_level()
    }

    // --- Boundary sanitization ---

    /// Re-asserts every stored invariant. Run on anything that arrives from
    /// outside the store (saved lists, imported documents): bad numeric
    /// input is coerced to a safe value, never an error.
    pub fn normalize(&mut self) {
        self.level = level_from_xp(self.exp);
        self.abilities.normalize();
        self.hp.normalize();
        self.death_saves.normalize();
        self.inventory.normalize();
        self.spell_slots.normalize();
        for spell in &mut self.spells {
            spell.normalize();
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new("")
    }
}
