//! Monster action selection
//!
//! The engine picks the monster's action from a fixed weight split:
//! 70% attack, 20% defend, 10% special. The special action is an extension
//! seam; the stock engine wires in [`NoSpecial`], which spends the turn
//! doing nothing visible.

use crate::action::{ActionKind, ActionResult};
use dice_core::DiceRoller;
use stat_core::Combatant;

/// What the monster decided to do this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MonsterChoice {
    Attack,
    Defend,
    Special,
}

/// Weighted pick on a d10: 1-7 attack, 8-9 defend, 10 special
pub(crate) fn choose_action(dice: &mut impl DiceRoller) -> MonsterChoice {
    match dice.roll(10) {
        1..=7 => MonsterChoice::Attack,
        8..=9 => MonsterChoice::Defend,
        _ => MonsterChoice::Special,
    }
}

/// Hook for monster special abilities.
///
/// Implementations get both combatants and the battle's dice, resolve
/// whatever the ability does, and describe it in the returned result.
pub trait SpecialAbility {
    fn resolve(
        &mut self,
        monster: &mut Combatant,
        player: &mut Combatant,
        dice: &mut dyn DiceRoller,
    ) -> ActionResult;
}

/// The default special ability: nothing happens
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpecial;

impl SpecialAbility for NoSpecial {
    fn resolve(
        &mut self,
        monster: &mut Combatant,
        _player: &mut Combatant,
        _dice: &mut dyn DiceRoller,
    ) -> ActionResult {
        ActionResult {
            actor: monster.name.clone(),
            action: ActionKind::Special,
            roll: None,
            damage: None,
            message: format!("{} rears up menacingly, but nothing happens.", monster.name),
        }
    }
}
