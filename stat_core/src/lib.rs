//! stat_core - Combatant stat model and progression
//!
//! This library provides:
//! - Ability scores with derived modifiers
//! - The fixed skill table and skill/saving-throw checks
//! - Combatant: the shared stat shape, with Character and Monster kinds
//! - Progression: experience thresholds and hit-point growth policies
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use stat_core::prelude::*;
//! use loot_core::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let mut hero = Combatant::character(
//!     "Lazarus",
//!     AbilityScores::new(14, 12, 13, 10, 11, 10),
//!     12,
//!     10,
//!     0,
//!     10,
//! );
//! hero.add_item(Item::Weapon(catalog.weapon("Longsword")?));
//! hero.equip_weapon_from_inventory(0, WeaponSlot::MainHand)?;
//!
//! let mut dice = dice_core::rng_from_seed(7);
//! let check = hero.skill_check(Skill::Athletics, 12, &mut dice);
//! println!("rolled {} -> total {}", check.roll, check.total);
//! ```

pub mod ability;
pub mod combatant;
pub mod prelude;
pub mod progression;
pub mod skill;

pub use ability::{Ability, AbilityScore, AbilityScores};
pub use combatant::{Combatant, CombatantError, CombatantKind, WeaponSlot};
pub use progression::{HpGrowth, LevelUp};
pub use skill::{CheckResult, Skill};

// Re-export commonly needed loot_core types
pub use loot_core::{Armor, Item, Potion, Weapon};
