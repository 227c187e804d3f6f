//! Weapon and armor catalog with TOML-file loading
//!
//! The catalog is the static gear data the rest of the system looks things
//! up in. A compiled-in default set covers the standard tables; campaigns
//! can replace it with a TOML file of `[[weapons]]` and `[[armors]]`
//! entries.

use crate::item::{Armor, Weapon};
use crate::types::{ArmorCategory, WeaponCategory, WeaponProperty};
use crate::{CatalogError, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// TOML configuration for a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFileConfig {
    #[serde(default)]
    weapons: Vec<WeaponConfig>,
    #[serde(default)]
    armors: Vec<ArmorConfig>,
}

#[derive(Debug, Deserialize)]
struct WeaponConfig {
    name: String,
    damage_die: u32,
    #[serde(default = "default_dice_count")]
    damage_dice_count: u32,
    category: WeaponCategory,
    #[serde(default)]
    properties: Vec<WeaponProperty>,
}

#[derive(Debug, Deserialize)]
struct ArmorConfig {
    name: String,
    base_ac: i32,
    category: ArmorCategory,
}

fn default_dice_count() -> u32 {
    1
}

/// All known weapons and armor, keyed by name and filterable by category
#[derive(Debug, Clone)]
pub struct Catalog {
    weapons: Vec<Weapon>,
    armors: Vec<Armor>,
}

impl Catalog {
    /// Load a catalog from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: path.to_path_buf(),
        })?;

        let config: CatalogFileConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                error: e,
                path: path.to_path_buf(),
            })?;

        Self::from_config(config).map_err(|message| ConfigError::Validation {
            message,
            path: path.to_path_buf(),
        })
    }

    fn from_config(config: CatalogFileConfig) -> Result<Self, String> {
        let weapons: Vec<Weapon> = config
            .weapons
            .into_iter()
            .map(|w| {
                if w.damage_die == 0 || w.damage_dice_count == 0 {
                    return Err(format!("weapon '{}' has no damage dice", w.name));
                }
                Ok(Weapon {
                    name: w.name,
                    damage_die: w.damage_die,
                    damage_dice_count: w.damage_dice_count,
                    category: w.category,
                    properties: w.properties,
                })
            })
            .collect::<Result<_, _>>()?;

        let armors: Vec<Armor> = config
            .armors
            .into_iter()
            .map(|a| Armor {
                name: a.name,
                base_ac: a.base_ac,
                category: a.category,
            })
            .collect();

        for names in [
            weapons.iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
            armors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
        ] {
            let mut seen = std::collections::HashSet::new();
            for name in names {
                if !seen.insert(name) {
                    return Err(format!("duplicate catalog entry '{}'", name));
                }
            }
        }

        Ok(Catalog { weapons, armors })
    }

    /// A catalog with no entries
    pub fn empty() -> Self {
        Catalog {
            weapons: Vec::new(),
            armors: Vec::new(),
        }
    }

    /// The compiled-in default gear tables
    pub fn builtin() -> Self {
        use WeaponCategory::*;
        use WeaponProperty::*;

        let weapons = vec![
            // Simple melee
            Weapon::new("Club", 4, 1, SimpleMelee).with_properties([Light]),
            Weapon::new("Dagger", 4, 1, SimpleMelee).with_properties([Finesse, Light, Thrown]),
            Weapon::new("Handaxe", 6, 1, SimpleMelee).with_properties([Light, Thrown]),
            Weapon::new("Mace", 6, 1, SimpleMelee),
            Weapon::new("Quarterstaff", 6, 1, SimpleMelee).with_properties([Versatile]),
            Weapon::new("Spear", 6, 1, SimpleMelee).with_properties([Thrown, Versatile]),
            // Simple ranged
            Weapon::new("Shortbow", 6, 1, SimpleRanged).with_properties([Ammunition, TwoHanded]),
            Weapon::new("Sling", 4, 1, SimpleRanged).with_properties([Ammunition]),
            Weapon::new("Light Crossbow", 8, 1, SimpleRanged)
                .with_properties([Ammunition, Loading, TwoHanded]),
            // Martial melee
            Weapon::new("Longsword", 8, 1, MartialMelee).with_properties([Versatile]),
            Weapon::new("Battleaxe", 8, 1, MartialMelee).with_properties([Versatile]),
            Weapon::new("Warhammer", 8, 1, MartialMelee).with_properties([Versatile]),
            Weapon::new("Rapier", 8, 1, MartialMelee).with_properties([Finesse]),
            Weapon::new("Glaive", 10, 1, MartialMelee).with_properties([Heavy, Reach, TwoHanded]),
            Weapon::new("Greataxe", 12, 1, MartialMelee).with_properties([Heavy, TwoHanded]),
            Weapon::new("Greatsword", 6, 2, MartialMelee).with_properties([Heavy, TwoHanded]),
            // Martial ranged
            Weapon::new("Longbow", 8, 1, MartialRanged)
                .with_properties([Ammunition, Heavy, TwoHanded]),
            Weapon::new("Heavy Crossbow", 10, 1, MartialRanged)
                .with_properties([Ammunition, Heavy, Loading, TwoHanded]),
        ];

        let armors = vec![
            Armor::new("Padded", 11, ArmorCategory::Light),
            Armor::new("Leather", 11, ArmorCategory::Light),
            Armor::new("Studded Leather", 12, ArmorCategory::Light),
            Armor::new("Hide", 12, ArmorCategory::Medium),
            Armor::new("Chain Shirt", 13, ArmorCategory::Medium),
            Armor::new("Breastplate", 14, ArmorCategory::Medium),
            Armor::new("Half Plate", 15, ArmorCategory::Medium),
            Armor::new("Ring Mail", 14, ArmorCategory::Heavy),
            Armor::new("Chain Mail", 16, ArmorCategory::Heavy),
            Armor::new("Splint", 17, ArmorCategory::Heavy),
            Armor::new("Plate", 18, ArmorCategory::Heavy),
        ];

        Catalog { weapons, armors }
    }

    /// Look up a weapon by name, cloning it out of the catalog
    pub fn weapon(&self, name: &str) -> Result<Weapon, CatalogError> {
        self.weapons
            .iter()
            .find(|w| w.name == name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownWeapon(name.to_string()))
    }

    /// Look up an armor piece by name, cloning it out of the catalog
    pub fn armor(&self, name: &str) -> Result<Armor, CatalogError> {
        self.armors
            .iter()
            .find(|a| a.name == name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownArmor(name.to_string()))
    }

    /// All weapons in a category, in catalog order
    pub fn weapons_in(&self, category: WeaponCategory) -> Vec<&Weapon> {
        self.weapons
            .iter()
            .filter(|w| w.category == category)
            .collect()
    }

    /// All armor in a category, in catalog order
    pub fn armors_in(&self, category: ArmorCategory) -> Vec<&Armor> {
        self.armors
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    pub fn weapon_names(&self) -> impl Iterator<Item = &str> {
        self.weapons.iter().map(|w| w.name.as_str())
    }

    pub fn armor_names(&self) -> impl Iterator<Item = &str> {
        self.armors.iter().map(|a| a.name.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}
