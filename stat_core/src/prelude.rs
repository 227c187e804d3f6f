//! Prelude module for convenient imports
//!
//! ```rust
//! use stat_core::prelude::*;
//! ```

// Core types
pub use crate::ability::{Ability, AbilityScore, AbilityScores};
pub use crate::combatant::{Combatant, CombatantKind, WeaponSlot};

// Checks
pub use crate::skill::{CheckResult, Skill};

// Progression
pub use crate::progression::{HpGrowth, LevelUp};

// Re-exports from loot_core
pub use loot_core::{Armor, Item, Potion, Weapon};
