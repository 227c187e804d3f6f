//! Action inputs and result objects

use loot_core::LootDrop;
use serde::{Deserialize, Serialize};
use stat_core::Combatant;
use std::fmt;

/// Which side of the battle a combatant is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Monster,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Monster => write!(f, "monster"),
        }
    }
}

/// What a player may do with their turn.
///
/// `UseItem` indexes into the list returned by the engine's
/// [`usable_items`](crate::Battle::usable_items) at the time of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    Attack,
    Defend,
    UseItem { index: usize },
}

/// What an executed action turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Attack { hit: bool },
    Defend,
    UseItem,
    Special,
}

/// One resolved action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResult {
    /// Name of the combatant that acted
    pub actor: String,
    pub action: ActionKind,
    /// The attack-roll total, or the defend bonus rolled
    pub roll: Option<i32>,
    /// Damage dealt (attacks) or hit points restored (items)
    pub damage: Option<i32>,
    pub message: String,
}

/// Where the battle stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    PlayerWon,
    MonsterWon,
}

/// A display-oriented snapshot of one combatant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantSummary {
    pub name: String,
    pub level: u32,
    pub hit_points: i32,
    pub max_hit_points: i32,
    pub armor_class: i32,
}

impl CombatantSummary {
    pub(crate) fn of(combatant: &Combatant) -> Self {
        CombatantSummary {
            name: combatant.name.clone(),
            level: combatant.level,
            hit_points: combatant.current_hit_points,
            max_hit_points: combatant.max_hit_points,
            armor_class: combatant.armor_class(),
        }
    }
}

/// A snapshot of the whole battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleStatus {
    pub round: u32,
    pub active: bool,
    pub player: CombatantSummary,
    pub monster: CombatantSummary,
}

/// What a won battle paid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRewards {
    pub xp: u32,
    pub gold: u32,
    pub loot: Option<LootDrop>,
    /// The level the character ended on, if the award leveled them up
    pub new_level: Option<u32>,
}
