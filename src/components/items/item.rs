use serde::{Deserialize, Serialize};
use uom::si::{f32::Mass, mass::kilogram};
use uuid::Uuid;

use crate::components::id::ItemId;

/// A carried item. Created on an explicit "add", destroyed on an explicit
/// "remove"; nothing expires on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub weight: Mass,
    pub quantity: u32,
    pub description: String,
    pub equipped: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, weight_kg: f32, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            weight: Mass::new::<kilogram>(weight_kg.max(0.0)),
            quantity,
            description: String::new(),
            equipped: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn equipped(mut self) -> Self {
        self.equipped = true;
        self
    }

    pub fn total_weight(&self) -> Mass {
        self.weight * self.quantity as f32
    }

    pub fn normalize(&mut self) {
        if self.weight.get::<kilogram>() < 0.0 {
            self.weight = Mass::new::<kilogram>(0.0);
        }
    }
}
