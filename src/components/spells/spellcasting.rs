use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::components::spells::spell::MAX_SPELL_LEVEL;

/// One spell-slot row: how many slots the level grants and how many are
/// spent. `used` never exceeds `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpellSlot {
    pub total: u8,
    pub used: u8,
}

impl SpellSlot {
    pub fn new(total: u8) -> Self {
        Self { total, used: 0 }
    }

    pub fn available(&self) -> u8 {
        self.total - self.used
    }

    pub fn expend(&mut self) {
        self.used = (self.used + 1).min(self.total);
    }

    pub fn restore(&mut self) {
        self.used = self.used.saturating_sub(1);
    }
}

/// Spell slots per spell level, keyed 1..=9. Cantrips have no slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellSlots {
    slots: BTreeMap<u8, SpellSlot>,
}

impl SpellSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: u8) -> Option<SpellSlot> {
        self.slots.get(&level).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, SpellSlot)> + '_ {
        self.slots.iter().map(|(level, slot)| (*level, *slot))
    }

    /// Sets the slot count for a level; a shrinking total pulls `used` down
    /// with it. Total 0 removes the row.
    pub fn set_total(&mut self, level: u8, total: u8) {
        if total == 0 {
            self.slots.remove(&level);
            return;
        }
        let slot = self.slots.entry(level).or_default();
        slot.total = total;
        slot.used = slot.used.min(total);
    }

    pub fn expend(&mut self, level: u8) {
        if let Some(slot) = self.slots.get_mut(&level) {
            slot.expend();
        }
    }

    pub fn restore(&mut self, level: u8) {
        if let Some(slot) = self.slots.get_mut(&level) {
            slot.restore();
        }
    }

    pub fn normalize(&mut self) {
        self.slots
            .retain(|level, slot| (1..=MAX_SPELL_LEVEL).contains(level) && slot.total > 0);
        for slot in self.slots.values_mut() {
            slot.used = slot.used.min(slot.total);
        }
    }
}
