//! Equipment category and property enums

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weapon catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponCategory {
    SimpleMelee,
    SimpleRanged,
    MartialMelee,
    MartialRanged,
}

impl WeaponCategory {
    /// Whether attacks from this category are made at range
    pub fn is_ranged(self) -> bool {
        matches!(
            self,
            WeaponCategory::SimpleRanged | WeaponCategory::MartialRanged
        )
    }

    pub fn all() -> &'static [WeaponCategory] {
        &[
            WeaponCategory::SimpleMelee,
            WeaponCategory::SimpleRanged,
            WeaponCategory::MartialMelee,
            WeaponCategory::MartialRanged,
        ]
    }
}

/// Weapon property tags
///
/// Finesse and Ammunition change which ability modifier an attack uses;
/// the rest are carried through from the catalog for display and future
/// rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponProperty {
    Finesse,
    Ammunition,
    Thrown,
    Light,
    Heavy,
    TwoHanded,
    Versatile,
    Loading,
    Reach,
}

/// Armor weight class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorCategory {
    Light,
    Medium,
    Heavy,
}

impl ArmorCategory {
    /// Dexterity bonus granted while wearing armor of this class.
    ///
    /// Light armor passes the modifier through, medium caps it at +2,
    /// heavy ignores it entirely.
    pub fn dex_bonus(self, dex_modifier: i32) -> i32 {
        match self {
            ArmorCategory::Light => dex_modifier,
            ArmorCategory::Medium => dex_modifier.min(2),
            ArmorCategory::Heavy => 0,
        }
    }

    pub fn all() -> &'static [ArmorCategory] {
        &[
            ArmorCategory::Light,
            ArmorCategory::Medium,
            ArmorCategory::Heavy,
        ]
    }
}

impl fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeaponCategory::SimpleMelee => "simple melee",
            WeaponCategory::SimpleRanged => "simple ranged",
            WeaponCategory::MartialMelee => "martial melee",
            WeaponCategory::MartialRanged => "martial ranged",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for ArmorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArmorCategory::Light => "light",
            ArmorCategory::Medium => "medium",
            ArmorCategory::Heavy => "heavy",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dex_bonus_by_category() {
        assert_eq!(ArmorCategory::Light.dex_bonus(3), 3);
        assert_eq!(ArmorCategory::Medium.dex_bonus(3), 2);
        assert_eq!(ArmorCategory::Medium.dex_bonus(1), 1);
        assert_eq!(ArmorCategory::Heavy.dex_bonus(3), 0);
        // Heavy armor also shields a clumsy wearer from a negative modifier
        assert_eq!(ArmorCategory::Heavy.dex_bonus(-2), 0);
        assert_eq!(ArmorCategory::Light.dex_bonus(-2), -2);
    }

    #[test]
    fn test_ranged_categories() {
        assert!(!WeaponCategory::SimpleMelee.is_ranged());
        assert!(WeaponCategory::SimpleRanged.is_ranged());
        assert!(!WeaponCategory::MartialMelee.is_ranged());
        assert!(WeaponCategory::MartialRanged.is_ranged());
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&WeaponCategory::MartialMelee).unwrap();
        assert_eq!(json, "\"martial_melee\"");
        let back: WeaponCategory = serde_json::from_str("\"simple_ranged\"").unwrap();
        assert_eq!(back, WeaponCategory::SimpleRanged);
    }
}
