//! The battle state machine
//!
//! A battle borrows its two combatants, runs NotStarted -> InProgress ->
//! PlayerWon | MonsterWon, and never resumes from a terminal state. Each
//! side acts once per round in initiative order; victory is checked after
//! every individual action, so a mid-round kill ends the battle before the
//! other side's queued action runs.

use crate::action::{
    ActionKind, ActionResult, BattleRewards, BattleStatus, CombatantSummary, Outcome, PlayerAction,
    Side,
};
use crate::ai::{self, MonsterChoice, NoSpecial, SpecialAbility};
use crate::BattleError;
use dice_core::{roll_sum, DiceRoller};
use loot_core::{Item, Loot, LootGenerator};
use stat_core::{Combatant, HpGrowth, WeaponSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NotStarted,
    InProgress,
    PlayerWon,
    MonsterWon,
}

/// One encounter between a player character and a monster.
///
/// The engine mutates the combatants it borrows and retains nothing once
/// dropped; the surrounding session keeps ownership throughout.
pub struct Battle<'a> {
    player: &'a mut Combatant,
    monster: &'a mut Combatant,
    generator: LootGenerator,
    special: Box<dyn SpecialAbility>,
    state: State,
    order: [Side; 2],
    turn: usize,
    round: u32,
    log: Vec<String>,
    rewards: Option<BattleRewards>,
}

impl<'a> Battle<'a> {
    pub fn new(
        player: &'a mut Combatant,
        monster: &'a mut Combatant,
        generator: LootGenerator,
    ) -> Self {
        Battle {
            player,
            monster,
            generator,
            special: Box::new(NoSpecial),
            state: State::NotStarted,
            order: [Side::Player, Side::Monster],
            turn: 0,
            round: 0,
            log: Vec::new(),
            rewards: None,
        }
    }

    /// Replace the monster's special action (the 10% AI branch)
    pub fn with_special_ability(mut self, special: Box<dyn SpecialAbility>) -> Self {
        self.special = special;
        self
    }

    /// Roll initiative and open round 1.
    ///
    /// Each side rolls d20 + dexterity modifier; the higher total acts
    /// first every round. A tie goes to the player, never to a re-roll.
    pub fn start(&mut self, dice: &mut impl DiceRoller) -> Result<(), BattleError> {
        if self.state != State::NotStarted {
            return Err(BattleError::AlreadyStarted);
        }

        let player_initiative = dice.roll(20) as i32 + self.player.abilities.dexterity.modifier();
        let monster_initiative = dice.roll(20) as i32 + self.monster.abilities.dexterity.modifier();
        self.order = if monster_initiative > player_initiative {
            [Side::Monster, Side::Player]
        } else {
            [Side::Player, Side::Monster]
        };

        self.log.push(format!(
            "Battle begins: {} (level {}) vs {} (level {})",
            self.player.name, self.player.level, self.monster.name, self.monster.level
        ));
        self.log.push(format!(
            "Initiative: {} ({}) vs {} ({})",
            self.player.name, player_initiative, self.monster.name, monster_initiative
        ));

        self.state = State::InProgress;
        self.turn = 0;
        self.round = 1;
        self.log.push("--- Round 1 ---".to_string());
        Ok(())
    }

    /// The side whose action the engine expects next
    pub fn side_to_act(&self) -> Option<Side> {
        match self.state {
            State::InProgress => Some(self.order[self.turn]),
            _ => None,
        }
    }

    /// The items the player may use this turn; `PlayerAction::UseItem`
    /// indexes into this list.
    pub fn usable_items(&self) -> Vec<(usize, &Item)> {
        self.player.usable_items()
    }

    /// Resolve one player action.
    ///
    /// A rejected action (wrong turn, nothing usable, bad index) mutates
    /// nothing and does not consume the turn, so the caller can re-prompt.
    pub fn resolve_player_action(
        &mut self,
        action: PlayerAction,
        dice: &mut impl DiceRoller,
    ) -> Result<ActionResult, BattleError> {
        self.ensure_turn(Side::Player)?;
        let result = match action {
            PlayerAction::Attack => self.attack(Side::Player, dice)?,
            PlayerAction::Defend => self.defend(Side::Player, dice),
            PlayerAction::UseItem { index } => self.use_item(index)?,
        };
        self.after_action(dice);
        Ok(result)
    }

    /// Resolve the monster's turn: 70% attack, 20% defend, 10% special
    pub fn resolve_monster_action(
        &mut self,
        dice: &mut impl DiceRoller,
    ) -> Result<ActionResult, BattleError> {
        self.ensure_turn(Side::Monster)?;
        let result = match ai::choose_action(dice) {
            MonsterChoice::Attack => self.attack(Side::Monster, dice)?,
            MonsterChoice::Defend => self.defend(Side::Monster, dice),
            MonsterChoice::Special => {
                let result = self
                    .special
                    .resolve(&mut *self.monster, &mut *self.player, dice);
                self.log.push(result.message.clone());
                result
            }
        };
        self.after_action(dice);
        Ok(result)
    }

    pub fn outcome(&self) -> Outcome {
        match self.state {
            State::NotStarted | State::InProgress => Outcome::InProgress,
            State::PlayerWon => Outcome::PlayerWon,
            State::MonsterWon => Outcome::MonsterWon,
        }
    }

    pub fn status(&self) -> BattleStatus {
        BattleStatus {
            round: self.round,
            active: self.state == State::InProgress,
            player: CombatantSummary::of(self.player),
            monster: CombatantSummary::of(self.monster),
        }
    }

    /// The ordered, append-only battle log. Callers treat the lines as
    /// opaque display strings.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// The payout of a won battle, once the player has won
    pub fn rewards(&self) -> Option<&BattleRewards> {
        self.rewards.as_ref()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    fn ensure_turn(&self, side: Side) -> Result<(), BattleError> {
        match self.state {
            State::NotStarted => Err(BattleError::NotStarted),
            State::PlayerWon | State::MonsterWon => Err(BattleError::BattleOver),
            State::InProgress => {
                if self.order[self.turn] == side {
                    Ok(())
                } else {
                    Err(BattleError::OutOfTurn(side))
                }
            }
        }
    }

    fn attack(
        &mut self,
        side: Side,
        dice: &mut impl DiceRoller,
    ) -> Result<ActionResult, BattleError> {
        let (attacker, defender) = match side {
            Side::Player => (&mut *self.player, &mut *self.monster),
            Side::Monster => (&mut *self.monster, &mut *self.player),
        };
        if !defender.is_alive() {
            return Err(BattleError::TargetDefeated(defender.name.clone()));
        }

        let weapon = attacker.weapon_in(WeaponSlot::MainHand).cloned();
        let ability_modifier = attacker.attack_ability_modifier(weapon.as_ref());
        let attack_roll =
            dice.roll(20) as i32 + ability_modifier + attacker.proficiency_bonus();
        let target_ac = defender.armor_class();

        let roll_line = format!(
            "{} attacks! (roll {} vs AC {})",
            attacker.name, attack_roll, target_ac
        );

        let (hit, damage, message) = if attack_roll >= target_ac {
            let rolled = match &weapon {
                Some(weapon) => roll_sum(dice, weapon.damage_dice_count, weapon.damage_die) as i32,
                // Unarmed: 1d6 plus the strength modifier already selected
                None => dice.roll(6) as i32,
            };
            let dealt = defender.take_damage((rolled + ability_modifier).max(1));
            let message = format!(
                "{} hits {} for {} damage!",
                attacker.name, defender.name, dealt
            );
            (true, Some(dealt), message)
        } else {
            (false, None, format!("{}'s attack missed!", attacker.name))
        };

        let actor = attacker.name.clone();
        self.log.push(roll_line);
        self.log.push(message.clone());
        Ok(ActionResult {
            actor,
            action: ActionKind::Attack { hit },
            roll: Some(attack_roll),
            damage,
            message,
        })
    }

    fn defend(&mut self, side: Side, dice: &mut impl DiceRoller) -> ActionResult {
        let combatant = match side {
            Side::Player => &mut *self.player,
            Side::Monster => &mut *self.monster,
        };
        let bonus = dice.roll(4) as i32;
        combatant.add_armor_class_bonus(bonus);
        let message = format!(
            "{} takes a defensive stance, gaining +{} armor class this round!",
            combatant.name, bonus
        );
        let actor = combatant.name.clone();
        self.log.push(message.clone());
        ActionResult {
            actor,
            action: ActionKind::Defend,
            roll: Some(bonus),
            damage: None,
            message,
        }
    }

    fn use_item(&mut self, index: usize) -> Result<ActionResult, BattleError> {
        let usable = self.player.usable_items();
        if usable.is_empty() {
            return Err(BattleError::NoUsableItems);
        }
        let inventory_index = match usable.get(index) {
            Some(&(inventory_index, _)) => inventory_index,
            None => return Err(BattleError::InvalidItem(index)),
        };

        let item_name = self.player.inventory()[inventory_index].name().to_string();
        let healed = self
            .player
            .use_potion(inventory_index)
            .map_err(|_| BattleError::InvalidItem(index))?;

        let message = format!(
            "{} uses {} and heals {} hit points!",
            self.player.name, item_name, healed
        );
        self.log.push(message.clone());
        Ok(ActionResult {
            actor: self.player.name.clone(),
            action: ActionKind::UseItem,
            roll: None,
            damage: Some(healed),
            message,
        })
    }

    /// Victory check and turn bookkeeping after a resolved action
    fn after_action(&mut self, dice: &mut impl DiceRoller) {
        if !self.monster.is_alive() {
            self.state = State::PlayerWon;
            self.award_victory(dice);
        } else if !self.player.is_alive() {
            self.state = State::MonsterWon;
            self.log.push(format!(
                "{} has been defeated by {}...",
                self.player.name, self.monster.name
            ));
        } else {
            self.advance_turn();
        }
    }

    fn advance_turn(&mut self) {
        self.turn += 1;
        if self.turn >= self.order.len() {
            self.turn = 0;
            self.round += 1;
            // Defend bonuses last until the round boundary
            self.player.clear_armor_class_bonus();
            self.monster.clear_armor_class_bonus();
            self.log.push(format!("--- Round {} ---", self.round));
        }
    }

    /// Compute and apply the end-of-battle rewards for the winning player
    fn award_victory(&mut self, dice: &mut impl DiceRoller) {
        let round_bonus = 10 * (10i64 - self.round as i64).max(0) as u32;
        let xp = 100 * self.monster.level + round_bonus;
        self.log.push(format!(
            "{} has won the battle and gained {} experience points!",
            self.player.name, xp
        ));

        let level_ups = self.player.gain_xp(xp, HpGrowth::Average, dice);
        for level_up in &level_ups {
            self.log.push(format!(
                "{} has leveled up to level {}! (+{} HP)",
                self.player.name, level_up.new_level, level_up.hit_points_gained
            ));
        }

        let gold = 5 * self.monster.level + dice.roll(8);
        self.player.add_gold(gold);
        self.log
            .push(format!("{} collects {} gold.", self.player.name, gold));

        let loot = self
            .generator
            .generate(self.monster.level, self.player.level, dice);
        match &loot {
            Some(drop) => {
                self.log.push(format!("You found: {}!", drop.message));
                match drop.loot.clone() {
                    Loot::Gold(amount) => self.player.add_gold(amount),
                    other => {
                        if let Some(item) = other.into_item() {
                            self.player.add_item(item);
                        }
                    }
                }
            }
            None => self.log.push("You found no loot.".to_string()),
        }

        self.rewards = Some(BattleRewards {
            xp,
            gold,
            loot,
            new_level: level_ups.last().map(|level_up| level_up.new_level),
        });
    }
}
