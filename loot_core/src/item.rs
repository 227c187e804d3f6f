use crate::types::{ArmorCategory, WeaponCategory, WeaponProperty};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A consumable that restores hit points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    /// Fixed amount healed on use (actual healing clamps to max HP)
    pub healing: i32,
    pub usable_in_battle: bool,
}

impl Potion {
    pub fn new(name: impl Into<String>, healing: i32) -> Self {
        Potion {
            name: name.into(),
            healing,
            usable_in_battle: true,
        }
    }
}

/// A weapon with its damage dice and property tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Size of each damage die (d4, d6, d8, ...)
    pub damage_die: u32,
    /// Number of damage dice rolled on a hit
    pub damage_dice_count: u32,
    pub category: WeaponCategory,
    #[serde(default)]
    pub properties: Vec<WeaponProperty>,
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        damage_die: u32,
        damage_dice_count: u32,
        category: WeaponCategory,
    ) -> Self {
        Weapon {
            name: name.into(),
            damage_die,
            damage_dice_count,
            category,
            properties: Vec::new(),
        }
    }

    pub fn with_properties(mut self, properties: impl IntoIterator<Item = WeaponProperty>) -> Self {
        self.properties = properties.into_iter().collect();
        self
    }

    pub fn has_property(&self, property: WeaponProperty) -> bool {
        self.properties.contains(&property)
    }
}

/// A piece of armor with its base AC and weight class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub base_ac: i32,
    pub category: ArmorCategory,
}

impl Armor {
    pub fn new(name: impl Into<String>, base_ac: i32, category: ArmorCategory) -> Self {
        Armor {
            name: name.into(),
            base_ac,
            category,
        }
    }
}

/// Anything that can sit in an inventory, a shop, or a loot drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Potion(Potion),
    Weapon(Weapon),
    Armor(Armor),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Potion(potion) => &potion.name,
            Item::Weapon(weapon) => &weapon.name,
            Item::Armor(armor) => &armor.name,
        }
    }

    /// Whether the item can be consumed during a battle turn
    pub fn is_usable_in_battle(&self) -> bool {
        match self {
            Item::Potion(potion) => potion.usable_in_battle,
            Item::Weapon(_) | Item::Armor(_) => false,
        }
    }

    pub fn as_potion(&self) -> Option<&Potion> {
        match self {
            Item::Potion(potion) => Some(potion),
            _ => None,
        }
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Item::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}d{}, {})",
            self.name, self.damage_dice_count, self.damage_die, self.category
        )
    }
}

impl fmt::Display for Armor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (AC {}, {})", self.name, self.base_ac, self.category)
    }
}

impl fmt::Display for Potion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (heals {} HP)", self.name, self.healing)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Potion(potion) => potion.fmt(f),
            Item::Weapon(weapon) => weapon.fmt(f),
            Item::Armor(armor) => armor.fmt(f),
        }
    }
}
