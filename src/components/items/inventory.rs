use serde::{Deserialize, Serialize};
use uom::si::{f32::Mass, mass::kilogram};

use crate::components::{id::ItemId, items::item::Item};

/// Ordered list of carried items, in the order the player added them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn find(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Flips the equipped flag. Returns the new state, or `None` for an
    /// unknown id.
    pub fn toggle_equipped(&mut self, id: &ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| &item.id == id)?;
        item.equipped = !item.equipped;
        Some(item.equipped)
    }

    pub fn total_weight(&self) -> Mass {
        self.items
            .iter()
            .fold(Mass::new::<kilogram>(0.0), |total, item| {
                total + item.total_weight()
            })
    }

    pub fn normalize(&mut self) {
        for item in &mut self.items {
            item.normalize();
        }
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

pub static CARRY_CAPACITY_PER_STRENGTH: f32 = 15.0;

/// Maximum weight a character can carry: Strength score times 15, in the
/// sheet's display unit (kilograms).
pub fn carry_capacity(strength_score: i32) -> Mass {
    Mass::new::<kilogram>(strength_score as f32 * CARRY_CAPACITY_PER_STRENGTH)
}

/// Weight-carrying state, from the optional encumbrance rules. The
/// thresholds nest, so only the most severe label is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncumbranceTier {
    Normal,
    Encumbered,
    HeavilyEncumbered,
    OverLimit,
}

pub fn encumbrance_tier(total_weight: Mass, strength_score: i32) -> EncumbranceTier {
    let weight = total_weight.get::<kilogram>();
    let strength = strength_score as f32;
    // Most severe first: over the carry limit implies the lower tiers.
    if weight > strength * CARRY_CAPACITY_PER_STRENGTH {
        EncumbranceTier::OverLimit
    } else if weight > strength * 10.0 {
        EncumbranceTier::HeavilyEncumbered
    } else if weight > strength * 5.0 {
        EncumbranceTier::Encumbered
    } else {
        EncumbranceTier::Normal
    }
}
