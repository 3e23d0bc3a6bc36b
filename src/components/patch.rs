use crate::{
    components::{
        ability::Ability,
        attack::{OtherAttack, Weapon},
        character::Character,
        health::hit_points::HitPoints,
        id::ItemId,
        items::item::Item,
        skill::Skill,
        spells::spell::Spell,
    },
    registry::classes::TotemAnimal,
};

/// One typed field update. Views issue these instead of string-keyed
/// partial records, so every mutation path is checked at compile time.
///
/// List-valued fields follow the sheet's editing model: items and spells
/// are added/removed individually, weapons and other attacks are replaced
/// as whole lists.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterPatch {
    Name(String),
    ClassName(String),
    Race(String),
    Background(String),
    Alignment(String),
    /// The one patch with a side effect: the stored level is re-derived.
    Experience(u32),
    Inspiration(u32),
    Portrait(Option<String>),
    HitPoints(HitPoints),
    ArmorClass(i32),
    InitiativeBonus(i32),
    Speed(String),
    AbilityScore(Ability, i32),
    ToggleSkillProficiency(Skill),
    ToggleSaveProficiency(Ability),
    Languages(Vec<String>),
    Tools(Vec<String>),
    Personality(String),
    Ideals(String),
    Bonds(String),
    Flaws(String),
    Backstory(String),
    AddItem(Item),
    RemoveItem(ItemId),
    ToggleEquipped(ItemId),
    Weapons(Vec<Weapon>),
    OtherAttacks(Vec<OtherAttack>),
    AddSpell(Spell),
    RemoveSpell(String),
    ToggleSpellPrepared(String),
    SetSpellSlotTotal { level: u8, total: u8 },
    ExpendSpellSlot(u8),
    RestoreSpellSlot(u8),
    SpellcastingAbility(Option<Ability>),
    SpellSaveDcOverride(Option<i32>),
    SpellAttackBonusOverride(Option<String>),
    Subclass(Option<String>),
    TotemAnimal(Option<TotemAnimal>),
    ToggleDeathSaveSuccess(u8),
    ToggleDeathSaveFailure(u8),
    Revive,
}

impl Character {
    /// Applies a single patch. Infallible: out-of-range numeric input is
    /// coerced by the target component, and death-save toggles no-op while
    /// dead.
    pub fn apply(&mut self, patch: CharacterPatch) {
        match patch {
            CharacterPatch::Name(name) => self.name = name,
            CharacterPatch::ClassName(class_name) => self.class_name = class_name,
            CharacterPatch::Race(race) => self.race = race,
            CharacterPatch::Background(background) => self.background = background,
            CharacterPatch::Alignment(alignment) => self.alignment = alignment,
            CharacterPatch::Experience(exp) => self.set_exp(exp),
            CharacterPatch::Inspiration(inspiration) => self.inspiration = inspiration,
            CharacterPatch::Portrait(portrait) => self.portrait = portrait,
            CharacterPatch::HitPoints(mut hp) => {
                hp.normalize();
                self.hp = hp;
            }
            CharacterPatch::ArmorClass(ac) => self.ac = ac,
            CharacterPatch::InitiativeBonus(bonus) => self.initiative_bonus = bonus,
            CharacterPatch::Speed(speed) => self.speed = speed,
            CharacterPatch::AbilityScore(ability, score) => self.abilities.set(ability, score),
            CharacterPatch::ToggleSkillProficiency(skill) => {
                self.proficiencies.toggle_skill(skill);
            }
            CharacterPatch::ToggleSaveProficiency(ability) => {
                self.proficiencies.toggle_save(ability);
            }
            CharacterPatch::Languages(languages) => self.proficiencies.languages = languages,
            CharacterPatch::Tools(tools) => self.proficiencies.tools = tools,
            CharacterPatch::Personality(personality) => self.personality = personality,
            CharacterPatch::Ideals(ideals) => self.ideals = ideals,
            CharacterPatch::Bonds(bonds) => self.bonds = bonds,
            CharacterPatch::Flaws(flaws) => self.flaws = flaws,
            CharacterPatch::Backstory(backstory) => self.backstory = backstory,
            CharacterPatch::AddItem(mut item) => {
                item.normalize();
                self.inventory.add_item(item);
            }
            CharacterPatch::RemoveItem(id) => {
                self.inventory.remove_item(&id);
            }
            CharacterPatch::ToggleEquipped(id) => {
                self.inventory.toggle_equipped(&id);
            }
            CharacterPatch::Weapons(weapons) => self.weapons = weapons,
            CharacterPatch::OtherAttacks(attacks) => self.other_attacks = attacks,
            CharacterPatch::AddSpell(mut spell) => {
                spell.normalize();
                self.spells.push(spell);
            }
            CharacterPatch::RemoveSpell(name) => {
                self.spells.retain(|spell| spell.name != name);
            }
            CharacterPatch::ToggleSpellPrepared(name) => {
                for spell in &mut self.spells {
                    if spell.name == name {
                        spell.prepared = !spell.prepared;
                    }
                }
            }
            CharacterPatch::SetSpellSlotTotal { level, total } => {
                self.spell_slots.set_total(level, total);
            }
            CharacterPatch::ExpendSpellSlot(level) => self.spell_slots.expend(level),
            CharacterPatch::RestoreSpellSlot(level) => self.spell_slots.restore(level),
            CharacterPatch::SpellcastingAbility(ability) => self.spellcasting_ability = ability,
            CharacterPatch::SpellSaveDcOverride(dc) => self.spell_save_dc_override = dc,
            CharacterPatch::SpellAttackBonusOverride(bonus) => {
                self.spell_attack_bonus_override = bonus;
            }
            CharacterPatch::Subclass(subclass) => self.subclass = subclass,
            CharacterPatch::TotemAnimal(totem) => self.totem_animal = totem,
            CharacterPatch::ToggleDeathSaveSuccess(index) => {
                self.toggle_death_save_success(index);
            }
            CharacterPatch::ToggleDeathSaveFailure(index) => {
                self.toggle_death_save_failure(index);
            }
            CharacterPatch::Revive => {
                self.revive();
            }
        }
    }
}
