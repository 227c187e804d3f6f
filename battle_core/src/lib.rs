//! battle_core - Turn-sequential battle resolution
//!
//! This library provides:
//! - Battle: a state machine over two borrowed combatants
//!   (NotStarted -> InProgress -> PlayerWon | MonsterWon)
//! - Player actions (attack, defend, use item) and an engine-internal
//!   monster AI
//! - End-of-battle rewards: experience, gold, and a loot roll
//!
//! The engine never owns the combatants: it mutates the pair it borrows for
//! one encounter and hands control back. Every random draw comes through an
//! injected [`dice_core::DiceRoller`], so whole battles replay exactly
//! under a seeded generator.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use battle_core::{Battle, PlayerAction};
//! use loot_core::{Catalog, LootGenerator};
//!
//! let generator = LootGenerator::new(Catalog::builtin());
//! let mut battle = Battle::new(&mut hero, &mut goblin, generator);
//! let mut dice = rand::thread_rng();
//!
//! battle.start(&mut dice)?;
//! while battle.outcome() == Outcome::InProgress {
//!     if battle.side_to_act() == Some(Side::Player) {
//!         battle.resolve_player_action(PlayerAction::Attack, &mut dice)?;
//!     } else {
//!         battle.resolve_monster_action(&mut dice)?;
//!     }
//! }
//! for line in battle.log() {
//!     println!("{}", line);
//! }
//! ```

pub mod action;
pub mod ai;
pub mod engine;

pub use action::{
    ActionKind, ActionResult, BattleRewards, BattleStatus, CombatantSummary, Outcome, PlayerAction,
    Side,
};
pub use ai::{NoSpecial, SpecialAbility};
pub use engine::Battle;

use thiserror::Error;

/// A rejected engine call.
///
/// Every variant is recoverable at the caller's boundary: the engine does
/// not mutate any state when it returns one of these, so the caller can
/// re-prompt and retry. The turn is not consumed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BattleError {
    #[error("the battle has not been started")]
    NotStarted,
    #[error("the battle has already started")]
    AlreadyStarted,
    #[error("the battle is over")]
    BattleOver,
    #[error("it is not the {0}'s turn")]
    OutOfTurn(Side),
    #[error("no usable items in inventory")]
    NoUsableItems,
    #[error("no usable item at index {0}")]
    InvalidItem(usize),
    #[error("{0} is already defeated")]
    TargetDefeated(String),
}
