//! The shared combatant stat shape
//!
//! Characters and monsters use one struct with one set of rules: a single
//! armor-class formula, one attack-modifier selection, one damage/heal
//! clamp. The fields unique to each live in [`CombatantKind`].

use crate::ability::{Ability, AbilityScores};
use crate::skill::{CheckResult, Skill};
use dice_core::{roll_sum, DiceRoller};
use loot_core::{Armor, Item, Weapon, WeaponProperty};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Inventory and equipment operations that can be refused
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CombatantError {
    #[error("monsters do not carry an inventory")]
    NoInventory,
    #[error("no item at inventory index {0}")]
    NoSuchItem(usize),
    #[error("item at inventory index {0} is not a weapon")]
    NotAWeapon(usize),
    #[error("item at inventory index {0} cannot be used in battle")]
    NotUsable(usize),
}

/// Hands that can hold a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponSlot {
    MainHand,
    OffHand,
}

/// The fields unique to each combatant kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CombatantKind {
    Character {
        xp: u32,
        xp_to_next_level: u32,
        gold: u32,
        /// Die size rolled (or averaged) for hit points on level-up
        hit_die: u32,
        /// Ordered inventory; insertion order is preserved
        inventory: Vec<Item>,
    },
    Monster,
}

/// A battle participant: player character or monster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub level: u32,
    pub max_hit_points: i32,
    pub current_hit_points: i32,
    /// Unarmored armor class before the dexterity modifier
    pub base_ac: i32,
    /// Transient bonus (defend stance); not part of the base formula
    #[serde(default)]
    ac_bonus: i32,
    pub damage_reduction: i32,
    pub abilities: AbilityScores,
    #[serde(default)]
    pub skill_proficiencies: HashSet<Skill>,
    #[serde(default)]
    pub saving_throw_proficiencies: HashSet<Ability>,
    main_hand: Option<Weapon>,
    off_hand: Option<Weapon>,
    armor: Option<Armor>,
    pub kind: CombatantKind,
}

impl Combatant {
    /// Create a level-1 player character.
    ///
    /// Hit points, base AC, and the hit die come from whatever race/class
    /// data the caller assembled; this crate does not read catalogs.
    pub fn character(
        name: impl Into<String>,
        abilities: AbilityScores,
        max_hit_points: i32,
        base_ac: i32,
        damage_reduction: i32,
        hit_die: u32,
    ) -> Self {
        Combatant {
            name: name.into(),
            level: 1,
            max_hit_points,
            current_hit_points: max_hit_points,
            base_ac,
            ac_bonus: 0,
            damage_reduction,
            abilities,
            skill_proficiencies: HashSet::new(),
            saving_throw_proficiencies: HashSet::new(),
            main_hand: None,
            off_hand: None,
            armor: None,
            kind: CombatantKind::Character {
                xp: 0,
                xp_to_next_level: 150,
                gold: 0,
                hit_die,
                inventory: Vec::new(),
            },
        }
    }

    /// Create a monster at a target encounter level.
    ///
    /// Hit points are rolled once here: one hit die per level plus the
    /// constitution modifier per level, never below 1. The monster owns
    /// exactly one weapon, carried in its main hand.
    #[allow(clippy::too_many_arguments)]
    pub fn monster(
        name: impl Into<String>,
        level: u32,
        abilities: AbilityScores,
        base_ac: i32,
        damage_reduction: i32,
        hit_die: u32,
        weapon: Weapon,
        dice: &mut impl DiceRoller,
    ) -> Self {
        let level = level.max(1);
        let con_modifier = abilities.constitution.modifier();
        let rolled = roll_sum(dice, level, hit_die) as i32;
        let hit_points = (rolled + level as i32 * con_modifier).max(1);

        Combatant {
            name: name.into(),
            level,
            max_hit_points: hit_points,
            current_hit_points: hit_points,
            base_ac,
            ac_bonus: 0,
            damage_reduction,
            abilities,
            skill_proficiencies: HashSet::new(),
            saving_throw_proficiencies: HashSet::new(),
            main_hand: Some(weapon),
            off_hand: None,
            armor: None,
            kind: CombatantKind::Monster,
        }
    }

    pub fn is_character(&self) -> bool {
        matches!(self.kind, CombatantKind::Character { .. })
    }

    pub fn is_monster(&self) -> bool {
        matches!(self.kind, CombatantKind::Monster)
    }

    /// 2 + floor((level - 1) / 4); a pure function of level
    pub fn proficiency_bonus(&self) -> i32 {
        2 + ((self.level - 1) / 4) as i32
    }

    // === Armor class ===

    /// The one authoritative AC formula.
    ///
    /// Unarmored: base AC + dexterity modifier. Armored: the armor's base
    /// AC plus the dexterity bonus its category allows.
    pub fn total_armor_class(&self) -> i32 {
        let dex = self.abilities.dexterity.modifier();
        match &self.armor {
            None => self.base_ac + dex,
            Some(armor) => armor.base_ac + armor.category.dex_bonus(dex),
        }
    }

    /// Current AC including any transient bonus
    pub fn armor_class(&self) -> i32 {
        self.total_armor_class() + self.ac_bonus
    }

    pub fn add_armor_class_bonus(&mut self, bonus: i32) {
        self.ac_bonus += bonus;
    }

    /// Drop transient bonuses; AC reverts to the base formula value
    pub fn clear_armor_class_bonus(&mut self) {
        self.ac_bonus = 0;
    }

    // === Attacks ===

    /// Which ability modifier an attack with this weapon uses.
    ///
    /// Ammunition weapons aim with dexterity; finesse weapons take the
    /// better of strength and dexterity; otherwise melee uses strength and
    /// ranged uses dexterity. Unarmed attacks use strength.
    pub fn attack_ability_modifier(&self, weapon: Option<&Weapon>) -> i32 {
        let strength = self.abilities.strength.modifier();
        let dexterity = self.abilities.dexterity.modifier();
        match weapon {
            None => strength,
            Some(weapon) => {
                if weapon.has_property(WeaponProperty::Ammunition) {
                    dexterity
                } else if weapon.has_property(WeaponProperty::Finesse) {
                    strength.max(dexterity)
                } else if weapon.category.is_ranged() {
                    dexterity
                } else {
                    strength
                }
            }
        }
    }

    // === Checks ===

    pub fn skill_check(
        &self,
        skill: Skill,
        difficulty: i32,
        dice: &mut impl DiceRoller,
    ) -> CheckResult {
        let mut modifier = self.abilities.modifier(skill.ability());
        if self.skill_proficiencies.contains(&skill) {
            modifier += self.proficiency_bonus();
        }
        Self::check(modifier, difficulty, dice)
    }

    pub fn saving_throw(
        &self,
        ability: Ability,
        difficulty: i32,
        dice: &mut impl DiceRoller,
    ) -> CheckResult {
        let mut modifier = self.abilities.modifier(ability);
        if self.saving_throw_proficiencies.contains(&ability) {
            modifier += self.proficiency_bonus();
        }
        Self::check(modifier, difficulty, dice)
    }

    fn check(modifier: i32, difficulty: i32, dice: &mut impl DiceRoller) -> CheckResult {
        let roll = dice.roll(20) as i32;
        let total = roll + modifier;
        CheckResult {
            roll,
            modifier,
            total,
            difficulty,
            success: total >= difficulty,
        }
    }

    // === Hit points ===

    /// Apply incoming damage after damage reduction; returns what landed.
    /// Hit points never go below 0.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = (amount - self.damage_reduction).max(0);
        self.current_hit_points = (self.current_hit_points - actual).max(0);
        actual
    }

    /// Restore hit points, clamped to the maximum; returns the amount asked
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.current_hit_points = (self.current_hit_points + amount).min(self.max_hit_points);
        amount
    }

    pub fn is_alive(&self) -> bool {
        self.current_hit_points > 0
    }

    // === Equipment ===

    pub fn weapon_in(&self, slot: WeaponSlot) -> Option<&Weapon> {
        match slot {
            WeaponSlot::MainHand => self.main_hand.as_ref(),
            WeaponSlot::OffHand => self.off_hand.as_ref(),
        }
    }

    pub fn equipped_armor(&self) -> Option<&Armor> {
        self.armor.as_ref()
    }

    /// Put a weapon in a slot. A displaced weapon goes back to a
    /// character's inventory; for a monster it is handed back to the
    /// caller.
    pub fn equip_weapon(&mut self, weapon: Weapon, slot: WeaponSlot) -> Option<Weapon> {
        let slot = match slot {
            WeaponSlot::MainHand => &mut self.main_hand,
            WeaponSlot::OffHand => &mut self.off_hand,
        };
        let displaced = slot.replace(weapon);
        match (displaced, &mut self.kind) {
            (Some(old), CombatantKind::Character { inventory, .. }) => {
                inventory.push(Item::Weapon(old));
                None
            }
            (displaced, _) => displaced,
        }
    }

    /// Equip the weapon at an inventory index, removing it from the
    /// inventory first.
    pub fn equip_weapon_from_inventory(
        &mut self,
        index: usize,
        slot: WeaponSlot,
    ) -> Result<(), CombatantError> {
        let inventory = match &mut self.kind {
            CombatantKind::Character { inventory, .. } => inventory,
            CombatantKind::Monster => return Err(CombatantError::NoInventory),
        };
        match inventory.get(index) {
            None => return Err(CombatantError::NoSuchItem(index)),
            Some(Item::Weapon(_)) => {}
            Some(_) => return Err(CombatantError::NotAWeapon(index)),
        }
        let weapon = match inventory.remove(index) {
            Item::Weapon(weapon) => weapon,
            _ => unreachable!("index was checked to hold a weapon"),
        };
        self.equip_weapon(weapon, slot);
        Ok(())
    }

    /// Wear armor; displaced armor goes to a character's inventory, or back
    /// to the caller for a monster.
    pub fn equip_armor(&mut self, armor: Armor) -> Option<Armor> {
        let displaced = self.armor.replace(armor);
        match (displaced, &mut self.kind) {
            (Some(old), CombatantKind::Character { inventory, .. }) => {
                inventory.push(Item::Armor(old));
                None
            }
            (displaced, _) => displaced,
        }
    }

    /// Take off the equipped armor, returning it to a character's inventory
    pub fn unequip_armor(&mut self) -> Option<Armor> {
        let removed = self.armor.take();
        match (removed, &mut self.kind) {
            (Some(old), CombatantKind::Character { inventory, .. }) => {
                inventory.push(Item::Armor(old));
                None
            }
            (removed, _) => removed,
        }
    }

    // === Inventory (character kind) ===

    /// The ordered inventory; empty for monsters
    pub fn inventory(&self) -> &[Item] {
        match &self.kind {
            CombatantKind::Character { inventory, .. } => inventory,
            CombatantKind::Monster => &[],
        }
    }

    /// Add an item to the inventory. A no-op for monsters, which carry
    /// nothing beyond their weapon.
    pub fn add_item(&mut self, item: Item) {
        if let CombatantKind::Character { inventory, .. } = &mut self.kind {
            inventory.push(item);
        }
    }

    pub fn remove_item(&mut self, index: usize) -> Result<Item, CombatantError> {
        match &mut self.kind {
            CombatantKind::Character { inventory, .. } => {
                if index < inventory.len() {
                    Ok(inventory.remove(index))
                } else {
                    Err(CombatantError::NoSuchItem(index))
                }
            }
            CombatantKind::Monster => Err(CombatantError::NoInventory),
        }
    }

    /// Battle-usable items with their inventory indices, in inventory order
    pub fn usable_items(&self) -> Vec<(usize, &Item)> {
        self.inventory()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_usable_in_battle())
            .collect()
    }

    /// Drink the potion at an inventory index: heal by its fixed amount
    /// (clamped to max) and remove exactly that one item. Returns the hit
    /// points actually gained.
    pub fn use_potion(&mut self, index: usize) -> Result<i32, CombatantError> {
        let healing = match self.inventory().get(index) {
            None => {
                return Err(match self.kind {
                    CombatantKind::Monster => CombatantError::NoInventory,
                    _ => CombatantError::NoSuchItem(index),
                })
            }
            Some(Item::Potion(potion)) if potion.usable_in_battle => potion.healing,
            Some(_) => return Err(CombatantError::NotUsable(index)),
        };

        let before = self.current_hit_points;
        self.heal(healing);
        let gained = self.current_hit_points - before;
        self.remove_item(index)?;
        Ok(gained)
    }

    // === Character resources ===

    pub fn gold(&self) -> u32 {
        match self.kind {
            CombatantKind::Character { gold, .. } => gold,
            CombatantKind::Monster => 0,
        }
    }

    /// Add to a character's purse; a no-op for monsters
    pub fn add_gold(&mut self, amount: u32) {
        if let CombatantKind::Character { gold, .. } = &mut self.kind {
            *gold += amount;
        }
    }

    pub fn xp(&self) -> u32 {
        match self.kind {
            CombatantKind::Character { xp, .. } => xp,
            CombatantKind::Monster => 0,
        }
    }

    pub fn xp_to_next_level(&self) -> u32 {
        match self.kind {
            CombatantKind::Character {
                xp_to_next_level, ..
            } => xp_to_next_level,
            CombatantKind::Monster => 0,
        }
    }

    pub fn hit_die(&self) -> Option<u32> {
        match self.kind {
            CombatantKind::Character { hit_die, .. } => Some(hit_die),
            CombatantKind::Monster => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_core::FixedRolls;
    use loot_core::{ArmorCategory, Catalog, Potion};
    use proptest::prelude::*;

    fn fighter() -> Combatant {
        // All 11s: every modifier is +0
        Combatant::character(
            "Test Fighter",
            AbilityScores::new(11, 11, 11, 11, 11, 11),
            12,
            10,
            0,
            10,
        )
    }

    fn goblin(dice: &mut impl DiceRoller) -> Combatant {
        let club = Catalog::builtin().weapon("Club").unwrap();
        Combatant::monster(
            "Goblin",
            1,
            AbilityScores::new(8, 14, 10, 10, 8, 8),
            12,
            0,
            6,
            club,
            dice,
        )
    }

    #[test]
    fn test_unarmored_ac() {
        let mut hero = fighter();
        assert_eq!(hero.total_armor_class(), 10);
        hero.abilities.dexterity.score = 16;
        assert_eq!(hero.total_armor_class(), 13);
    }

    #[test]
    fn test_light_armor_ac_uncapped() {
        let mut hero = fighter();
        hero.abilities.dexterity.score = 16; // +3
        hero.equip_armor(Armor::new("Leather", 11, ArmorCategory::Light));
        assert_eq!(hero.total_armor_class(), 14);
    }

    #[test]
    fn test_medium_armor_caps_dex_at_two() {
        let mut hero = fighter();
        hero.abilities.dexterity.score = 16; // +3, capped to +2
        hero.equip_armor(Armor::new("Chain Shirt", 13, ArmorCategory::Medium));
        assert_eq!(hero.total_armor_class(), 15);
    }

    #[test]
    fn test_heavy_armor_ignores_dex() {
        let mut hero = fighter();
        hero.abilities.dexterity.score = 16;
        hero.equip_armor(Armor::new("Chain Mail", 16, ArmorCategory::Heavy));
        assert_eq!(hero.total_armor_class(), 16);

        // A clumsy wearer is not penalized either
        hero.abilities.dexterity.score = 6;
        assert_eq!(hero.total_armor_class(), 16);
    }

    #[test]
    fn test_monster_uses_same_ac_formula() {
        let mut dice = FixedRolls::new([3]);
        let mut goblin = goblin(&mut dice);
        // base 12 + dex +2
        assert_eq!(goblin.total_armor_class(), 14);
        goblin.equip_armor(Armor::new("Hide", 12, ArmorCategory::Medium));
        assert_eq!(goblin.total_armor_class(), 14);
    }

    #[test]
    fn test_unequip_restores_unarmored_ac() {
        let mut hero = fighter();
        let original = hero.total_armor_class();
        hero.equip_armor(Armor::new("Leather", 11, ArmorCategory::Light));
        assert_ne!(hero.total_armor_class(), original);
        hero.unequip_armor();
        assert_eq!(hero.total_armor_class(), original);
        // The armor came back to the inventory
        assert_eq!(hero.inventory().len(), 1);
    }

    #[test]
    fn test_transient_ac_bonus() {
        let mut hero = fighter();
        hero.add_armor_class_bonus(3);
        assert_eq!(hero.armor_class(), 13);
        assert_eq!(hero.total_armor_class(), 10);
        hero.clear_armor_class_bonus();
        assert_eq!(hero.armor_class(), 10);
    }

    #[test]
    fn test_attack_modifier_selection() {
        let mut hero = fighter();
        hero.abilities.strength.score = 16; // +3
        hero.abilities.dexterity.score = 12; // +1

        let catalog = Catalog::builtin();
        let mace = catalog.weapon("Mace").unwrap();
        let longbow = catalog.weapon("Longbow").unwrap();
        let rapier = catalog.weapon("Rapier").unwrap();

        assert_eq!(hero.attack_ability_modifier(Some(&mace)), 3);
        assert_eq!(hero.attack_ability_modifier(Some(&longbow)), 1);
        // Finesse takes the better of the two
        assert_eq!(hero.attack_ability_modifier(Some(&rapier)), 3);
        hero.abilities.dexterity.score = 20; // +5
        assert_eq!(hero.attack_ability_modifier(Some(&rapier)), 5);
        // Unarmed
        assert_eq!(hero.attack_ability_modifier(None), 3);
    }

    #[test]
    fn test_proficiency_bonus_by_level() {
        let mut hero = fighter();
        for (level, bonus) in [(1, 2), (4, 2), (5, 3), (8, 3), (9, 4), (13, 5), (17, 6)] {
            hero.level = level;
            assert_eq!(hero.proficiency_bonus(), bonus, "level {}", level);
        }
    }

    #[test]
    fn test_skill_check_adds_proficiency_only_when_trained() {
        let mut hero = fighter();
        hero.abilities.strength.score = 14; // +2

        let mut dice = FixedRolls::new([10]);
        let untrained = hero.skill_check(Skill::Athletics, 13, &mut dice);
        assert_eq!(untrained.modifier, 2);
        assert_eq!(untrained.total, 12);
        assert!(!untrained.success);

        hero.skill_proficiencies.insert(Skill::Athletics);
        let mut dice = FixedRolls::new([10]);
        let trained = hero.skill_check(Skill::Athletics, 13, &mut dice);
        assert_eq!(trained.modifier, 4);
        assert_eq!(trained.total, 14);
        assert!(trained.success);
    }

    #[test]
    fn test_saving_throw_proficiency() {
        let mut hero = fighter();
        hero.abilities.constitution.score = 14; // +2
        hero.saving_throw_proficiencies.insert(Ability::Constitution);

        let mut dice = FixedRolls::new([10, 10]);
        let con_save = hero.saving_throw(Ability::Constitution, 14, &mut dice);
        assert_eq!(con_save.total, 14);
        assert!(con_save.success);

        let wis_save = hero.saving_throw(Ability::Wisdom, 14, &mut dice);
        assert_eq!(wis_save.total, 10);
        assert!(!wis_save.success);
    }

    #[test]
    fn test_take_damage_respects_reduction_and_floor() {
        let mut hero = fighter();
        hero.damage_reduction = 2;
        assert_eq!(hero.take_damage(5), 3);
        assert_eq!(hero.current_hit_points, 9);
        // Reduction can absorb a weak hit entirely
        assert_eq!(hero.take_damage(1), 0);
        assert_eq!(hero.current_hit_points, 9);
        // Overkill clamps at zero
        assert_eq!(hero.take_damage(100), 98);
        assert_eq!(hero.current_hit_points, 0);
        assert!(!hero.is_alive());
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut hero = fighter();
        hero.current_hit_points = 5;
        hero.heal(100);
        assert_eq!(hero.current_hit_points, hero.max_hit_points);
    }

    #[test]
    fn test_equip_weapon_returns_old_to_inventory() {
        let mut hero = fighter();
        let catalog = Catalog::builtin();
        hero.equip_weapon(catalog.weapon("Mace").unwrap(), WeaponSlot::MainHand);
        assert!(hero.inventory().is_empty());

        hero.equip_weapon(catalog.weapon("Longsword").unwrap(), WeaponSlot::MainHand);
        assert_eq!(hero.weapon_in(WeaponSlot::MainHand).unwrap().name, "Longsword");
        assert_eq!(hero.inventory().len(), 1);
        assert_eq!(hero.inventory()[0].name(), "Mace");
    }

    #[test]
    fn test_equip_from_inventory_moves_the_item() {
        let mut hero = fighter();
        let catalog = Catalog::builtin();
        hero.add_item(Item::Potion(Potion::new("Small Healing Potion", 10)));
        hero.add_item(Item::Weapon(catalog.weapon("Spear").unwrap()));

        hero.equip_weapon_from_inventory(1, WeaponSlot::MainHand)
            .unwrap();
        assert_eq!(hero.weapon_in(WeaponSlot::MainHand).unwrap().name, "Spear");
        assert_eq!(hero.inventory().len(), 1);

        assert_eq!(
            hero.equip_weapon_from_inventory(0, WeaponSlot::MainHand),
            Err(CombatantError::NotAWeapon(0))
        );
        assert_eq!(
            hero.equip_weapon_from_inventory(5, WeaponSlot::MainHand),
            Err(CombatantError::NoSuchItem(5))
        );
    }

    #[test]
    fn test_monster_equip_hands_weapon_back() {
        let mut dice = FixedRolls::new([3]);
        let mut goblin = goblin(&mut dice);
        let catalog = Catalog::builtin();
        let displaced = goblin.equip_weapon(catalog.weapon("Spear").unwrap(), WeaponSlot::MainHand);
        assert_eq!(displaced.unwrap().name, "Club");
        assert!(goblin.inventory().is_empty());
    }

    #[test]
    fn test_use_potion_heals_and_removes_one_copy() {
        let mut hero = fighter();
        hero.max_hit_points = 20;
        hero.current_hit_points = 5;
        hero.add_item(Item::Potion(Potion::new("Small Healing Potion", 10)));
        hero.add_item(Item::Potion(Potion::new("Healing Potion", 20)));

        let gained = hero.use_potion(0).unwrap();
        assert_eq!(gained, 10);
        assert_eq!(hero.current_hit_points, 15);
        assert_eq!(hero.inventory().len(), 1);
        assert_eq!(hero.inventory()[0].name(), "Healing Potion");
    }

    #[test]
    fn test_use_potion_rejects_non_potions() {
        let mut hero = fighter();
        let catalog = Catalog::builtin();
        hero.add_item(Item::Weapon(catalog.weapon("Club").unwrap()));
        assert_eq!(hero.use_potion(0), Err(CombatantError::NotUsable(0)));
        assert_eq!(hero.use_potion(3), Err(CombatantError::NoSuchItem(3)));
        assert_eq!(hero.inventory().len(), 1);
    }

    #[test]
    fn test_usable_items_keeps_inventory_indices() {
        let mut hero = fighter();
        let catalog = Catalog::builtin();
        hero.add_item(Item::Weapon(catalog.weapon("Club").unwrap()));
        hero.add_item(Item::Potion(Potion::new("Small Healing Potion", 10)));
        hero.add_item(Item::Armor(catalog.armor("Leather").unwrap()));
        hero.add_item(Item::Potion(Potion::new("Healing Potion", 20)));

        let usable = hero.usable_items();
        let indices: Vec<usize> = usable.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_monster_hp_formula() {
        let catalog = Catalog::builtin();
        // Level 3, d8 hit die, +1 con: rolls 4+5+6 = 15, +3 -> 18
        let mut dice = FixedRolls::new([4, 5, 6]);
        let ogre = Combatant::monster(
            "Ogre",
            3,
            AbilityScores::new(16, 8, 13, 5, 7, 7),
            11,
            0,
            8,
            catalog.weapon("Greatsword").unwrap(),
            &mut dice,
        );
        assert_eq!(ogre.max_hit_points, 18);
        assert_eq!(ogre.current_hit_points, 18);
    }

    #[test]
    fn test_monster_hp_never_below_one() {
        let catalog = Catalog::builtin();
        // Terrible constitution: 1 + (1 * -4) would be negative
        let mut dice = FixedRolls::new([1]);
        let wisp = Combatant::monster(
            "Wisp",
            1,
            AbilityScores::new(3, 10, 3, 10, 10, 10),
            10,
            0,
            4,
            catalog.weapon("Club").unwrap(),
            &mut dice,
        );
        assert_eq!(wisp.max_hit_points, 1);
    }

    #[test]
    fn test_monster_ignores_character_resources() {
        let mut dice = FixedRolls::new([3]);
        let mut goblin = goblin(&mut dice);
        goblin.add_gold(50);
        goblin.add_item(Item::Potion(Potion::new("Small Healing Potion", 10)));
        assert_eq!(goblin.gold(), 0);
        assert!(goblin.inventory().is_empty());
        assert!(goblin.usable_items().is_empty());
        assert_eq!(goblin.hit_die(), None);
    }

    #[test]
    fn test_combatant_round_trips_through_json() {
        let mut hero = fighter();
        let catalog = Catalog::builtin();
        hero.abilities = AbilityScores::new(15, 13, 14, 8, 12, 10);
        hero.current_hit_points = 7;
        hero.skill_proficiencies.insert(Skill::Athletics);
        hero.skill_proficiencies.insert(Skill::Perception);
        hero.saving_throw_proficiencies.insert(Ability::Strength);
        hero.add_item(Item::Potion(Potion::new("Small Healing Potion", 10)));
        hero.add_item(Item::Weapon(catalog.weapon("Dagger").unwrap()));
        hero.add_item(Item::Potion(Potion::new("Healing Potion", 20)));
        hero.equip_weapon(catalog.weapon("Longsword").unwrap(), WeaponSlot::MainHand);
        hero.equip_armor(catalog.armor("Chain Shirt").unwrap());
        hero.add_gold(42);

        let json = serde_json::to_string(&hero).unwrap();
        let back: Combatant = serde_json::from_str(&json).unwrap();

        assert_eq!(hero, back);
        // Spell out the fields the round-trip must preserve
        assert_eq!(back.abilities, hero.abilities);
        assert_eq!(back.current_hit_points, 7);
        assert_eq!(back.total_armor_class(), hero.total_armor_class());
        assert_eq!(
            back.weapon_in(WeaponSlot::MainHand).unwrap().name,
            "Longsword"
        );
        let names: Vec<&str> = back.inventory().iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            vec!["Small Healing Potion", "Dagger", "Healing Potion"]
        );
    }

    proptest! {
        #[test]
        fn prop_hit_points_stay_in_bounds(
            ops in prop::collection::vec((any::<bool>(), 0i32..200), 0..100)
        ) {
            let mut hero = fighter();
            hero.max_hit_points = 30;
            hero.current_hit_points = 30;
            for (is_damage, amount) in ops {
                if is_damage {
                    hero.take_damage(amount);
                } else {
                    hero.heal(amount);
                }
                prop_assert!(hero.current_hit_points >= 0);
                prop_assert!(hero.current_hit_points <= hero.max_hit_points);
            }
        }
    }
}
