//! loot_core - Items, the equipment catalog, and loot generation
//!
//! This library provides:
//! - Potion, Weapon, and Armor value objects and the Item enum over them
//! - Catalog: weapon/armor tables with a compiled-in default set and
//!   TOML-file loading
//! - LootGenerator: tiered, weighted reward rolls keyed by monster level
//!   and player level
//!
//! Items move by value between the catalog, loot drops, and inventories;
//! nothing in this crate holds on to an item it has handed out.

pub mod catalog;
pub mod generator;
pub mod item;
pub mod types;

pub use catalog::Catalog;
pub use generator::{drop_chance, Loot, LootDrop, LootGenerator, Tier};
pub use item::{Armor, Item, Potion, Weapon};
pub use types::{ArmorCategory, WeaponCategory, WeaponProperty};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading catalog configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path}': {error}")]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error looking up catalog entries by name
///
/// These are configuration mistakes (a reference to gear that does not
/// exist) and are not recoverable at the point of use; callers propagate
/// them to whoever assembled the data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),
    #[error("Unknown armor: {0}")]
    UnknownArmor(String),
}
