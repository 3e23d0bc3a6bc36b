use serde::{Deserialize, Serialize};

/// A weapon row on the sheet. Bonus and damage are opaque text ("+5",
/// "1d8 + 3") typed by the player; no dice-expression syntax is enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub bonus: String,
    pub damage: String,
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        bonus: impl Into<String>,
        damage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            bonus: bonus.into(),
            damage: damage.into(),
        }
    }
}

/// Non-weapon attacks and spell-like effects: same opaque text, plus an
/// optional kind and range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherAttack {
    pub name: String,
    pub bonus: String,
    pub damage: String,
    pub attack_type: Option<String>,
    pub range: Option<String>,
}
