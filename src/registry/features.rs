use std::fmt;

use serde::{Deserialize, Serialize};

use crate::registry::{barbarian, fighter};

/// How a feature is used at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Actively invoked, but not tied to a specific action slot.
    Active,
    Passive,
    Action,
    BonusAction,
    Reaction,
    /// Changes the shape of the class (subclass choice, ability score
    /// increase) rather than granting a table action.
    Structural,
    /// Improves an earlier feature.
    Upgrade,
    /// Level 20 capstone.
    Capstone,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One row of the class-feature table. The catalog is immutable static
/// data, shared read-only by every character of the class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub name: &'static str,
    pub level: u8,
    /// `None` for base-class features; `Some` gates the row behind the
    /// named subclass.
    pub subclass: Option<&'static str>,
    pub kind: ActionKind,
    pub summary: &'static str,
    pub description: &'static str,
    /// Headline features, highlighted by the browser view.
    pub key: bool,
}

/// Every catalogued feature of a class, base and subclass rows together.
/// Unknown class names have no catalogue and resolve to an empty slice.
pub fn class_features(class_name: &str) -> &'static [Feature] {
    match class_name.trim().to_ascii_lowercase().as_str() {
        "barbarian" => barbarian::FEATURES,
        "fighter" => fighter::FEATURES,
        _ => &[],
    }
}

/// Features revealed at exactly `level`. Rows gated behind a subclass stay
/// hidden until that subclass is the chosen one; the caller renders a
/// sealed placeholder for the pending choice.
pub fn features_at(
    class_name: &str,
    level: u8,
    subclass: Option<&str>,
) -> Vec<&'static Feature> {
    class_features(class_name)
        .iter()
        .filter(|feature| feature.level == level)
        .filter(|feature| match feature.subclass {
            None => true,
            Some(required) => subclass == Some(required),
        })
        .collect()
}

/// All features unlocked by `level`, for the full progression view.
pub fn features_through(
    class_name: &str,
    level: u8,
    subclass: Option<&str>,
) -> Vec<&'static Feature> {
    (1..=level)
        .flat_map(|at| features_at(class_name, at, subclass))
        .collect()
}

/// Names of the catalogued subclasses of a class.
pub fn subclasses_of(class_name: &str) -> Vec<&'static str> {
    let mut names = Vec::new();
    for feature in class_features(class_name) {
        if let Some(subclass) = feature.subclass {
            if !names.contains(&subclass) {
                names.push(subclass);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_features_need_no_subclass() {
        let features = features_at("Barbarian", 1, None);
        let names: Vec<_> = features.iter().map(|f| f.name).collect();
        assert!(names.contains(&"Rage"));
        assert!(names.contains(&"Unarmored Defense"));
    }

    #[test]
    fn subclass_rows_are_sealed_until_chosen() {
        let without = features_at("Barbarian", 3, None);
        assert!(without.iter().all(|f| f.subclass.is_none()));

        let with = features_at("Barbarian", 3, Some("Path of the Totem Warrior"));
        assert!(with.iter().any(|f| f.name == "Totem Spirit"));
    }

    #[test]
    fn other_subclass_rows_stay_hidden() {
        let features = features_at("Barbarian", 3, Some("Path of the Berserker"));
        assert!(features.iter().any(|f| f.name == "Frenzy"));
        assert!(features.iter().all(|f| f.name != "Totem Spirit"));
    }

    #[test]
    fn unknown_class_has_no_features() {
        assert!(class_features("Bloodhunter").is_empty());
        assert!(features_at("Bloodhunter", 1, None).is_empty());
    }

    #[test]
    fn class_name_lookup_is_case_insensitive() {
        assert!(!features_at("fighter", 1, None).is_empty());
        assert!(!features_at(" FIGHTER ", 1, None).is_empty());
    }

    #[test]
    fn features_through_accumulates_levels() {
        let through_five = features_through("Fighter", 5, None);
        assert!(through_five.iter().any(|f| f.name == "Second Wind"));
        assert!(through_five.iter().any(|f| f.name == "Extra Attack"));
        assert!(through_five.iter().all(|f| f.level <= 5));
    }

    #[test]
    fn catalogued_subclasses() {
        let barbarian = subclasses_of("Barbarian");
        assert_eq!(
            barbarian,
            vec!["Path of the Berserker", "Path of the Totem Warrior"]
        );
        assert_eq!(subclasses_of("Fighter").len(), 3);
    }

    #[test]
    fn every_row_is_within_level_bounds() {
        for class in ["Barbarian", "Fighter"] {
            for feature in class_features(class) {
                assert!((1..=20).contains(&feature.level), "{}", feature.name);
            }
        }
    }
}
