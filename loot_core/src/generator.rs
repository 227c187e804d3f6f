//! Tiered, weighted loot generation
//!
//! Rewards are rolled at the end of a won battle: first a drop check against
//! a chance derived from the monster/player level gap, then a weighted pick
//! of loot type, then a tier-scaled payload. Weapon and armor drops pick
//! uniformly among the tier's allowed catalog categories.

use crate::catalog::Catalog;
use crate::item::{Armor, Item, Potion, Weapon};
use crate::types::{ArmorCategory, WeaponCategory};
use dice_core::{roll_sum, DiceRoller};
use serde::{Deserialize, Serialize};

/// Loot-table bracket keyed by monster level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Mid,
    High,
    Elite,
}

impl Tier {
    /// Bracket for a monster level: low 1-3, mid 4-7, high 8-11, elite 12+
    pub fn for_monster_level(level: u32) -> Self {
        match level {
            0..=3 => Tier::Low,
            4..=7 => Tier::Mid,
            8..=11 => Tier::High,
            _ => Tier::Elite,
        }
    }

    /// Potion dropped at this tier
    fn potion(self) -> Potion {
        let (name, healing) = match self {
            Tier::Low => ("Small Healing Potion", 10),
            Tier::Mid => ("Healing Potion", 20),
            Tier::High => ("Greater Healing Potion", 35),
            Tier::Elite => ("Superior Healing Potion", 50),
        };
        Potion::new(name, healing)
    }

    /// Weapon categories that may drop at this tier
    fn weapon_categories(self) -> &'static [WeaponCategory] {
        match self {
            Tier::Low => &[WeaponCategory::SimpleMelee],
            Tier::Mid => &[WeaponCategory::SimpleMelee, WeaponCategory::SimpleRanged],
            Tier::High | Tier::Elite => {
                &[WeaponCategory::MartialMelee, WeaponCategory::MartialRanged]
            }
        }
    }

    /// Armor categories that may drop at this tier
    fn armor_categories(self) -> &'static [ArmorCategory] {
        match self {
            Tier::Low => &[ArmorCategory::Light],
            Tier::Mid => &[ArmorCategory::Light, ArmorCategory::Medium],
            Tier::High => &[ArmorCategory::Medium, ArmorCategory::Heavy],
            Tier::Elite => &[ArmorCategory::Heavy],
        }
    }

    /// Gold payload: a flat base plus tier-scaled dice
    fn roll_gold(self, dice: &mut impl DiceRoller) -> u32 {
        match self {
            Tier::Low => 5 + dice.roll(6),
            Tier::Mid => 10 + dice.roll(10),
            Tier::High => 20 + dice.roll(12),
            Tier::Elite => 40 + roll_sum(dice, 2, 12),
        }
    }
}

/// Relative weights for the loot-type pick; they need not sum to 100
const LOOT_WEIGHTS: &[(LootType, u32)] = &[
    (LootType::Potion, 40),
    (LootType::Gold, 25),
    (LootType::Weapon, 20),
    (LootType::Armor, 15),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LootType {
    Potion,
    Gold,
    Weapon,
    Armor,
}

/// Chance that a won battle drops loot at all.
///
/// 20% base, +15% per level the monster is above the player, clamped to
/// [0.20, 1.0]. Non-decreasing in (monster_level - player_level).
pub fn drop_chance(monster_level: u32, player_level: u32) -> f64 {
    let gap = monster_level.saturating_sub(player_level) as f64;
    (0.20 + gap * 0.15).min(1.0)
}

/// A generated reward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Loot {
    Potion(Potion),
    Gold(u32),
    Weapon(Weapon),
    Armor(Armor),
}

impl Loot {
    /// The item form of this loot, if it is one (gold is not an item)
    pub fn into_item(self) -> Option<Item> {
        match self {
            Loot::Potion(potion) => Some(Item::Potion(potion)),
            Loot::Weapon(weapon) => Some(Item::Weapon(weapon)),
            Loot::Armor(armor) => Some(Item::Armor(armor)),
            Loot::Gold(_) => None,
        }
    }
}

/// A loot roll result with its display line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootDrop {
    pub loot: Loot,
    pub message: String,
}

/// Rolls rewards against a catalog
#[derive(Debug, Clone, Default)]
pub struct LootGenerator {
    catalog: Catalog,
}

impl LootGenerator {
    pub fn new(catalog: Catalog) -> Self {
        LootGenerator { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Roll for loot. Returns None when the drop check fails.
    pub fn generate(
        &self,
        monster_level: u32,
        player_level: u32,
        dice: &mut impl DiceRoller,
    ) -> Option<LootDrop> {
        let chance = drop_chance(monster_level, player_level);
        let threshold = (chance * 100.0).round() as u32;
        if dice.roll(100) > threshold {
            return None;
        }

        let tier = Tier::for_monster_level(monster_level);
        let drop = match self.pick_loot_type(dice) {
            LootType::Potion => Self::potion_drop(tier),
            LootType::Gold => Self::gold_drop(tier, dice),
            LootType::Weapon => self.weapon_drop(tier, dice),
            LootType::Armor => self.armor_drop(tier, dice),
        };
        Some(drop)
    }

    /// Weighted pick over the loot types
    fn pick_loot_type(&self, dice: &mut impl DiceRoller) -> LootType {
        let total: u32 = LOOT_WEIGHTS.iter().map(|(_, weight)| weight).sum();
        let mut roll = dice.roll(total);
        for &(loot_type, weight) in LOOT_WEIGHTS {
            if roll <= weight {
                return loot_type;
            }
            roll -= weight;
        }
        LOOT_WEIGHTS.last().map(|&(t, _)| t).unwrap_or(LootType::Gold)
    }

    fn potion_drop(tier: Tier) -> LootDrop {
        let potion = tier.potion();
        let message = potion.to_string();
        LootDrop {
            loot: Loot::Potion(potion),
            message,
        }
    }

    fn gold_drop(tier: Tier, dice: &mut impl DiceRoller) -> LootDrop {
        let amount = tier.roll_gold(dice);
        LootDrop {
            loot: Loot::Gold(amount),
            message: format!("{} bonus gold", amount),
        }
    }

    fn weapon_drop(&self, tier: Tier, dice: &mut impl DiceRoller) -> LootDrop {
        let categories = tier.weapon_categories();
        let category = categories[(dice.roll(categories.len() as u32) - 1) as usize];
        let weapons = self.catalog.weapons_in(category);
        if weapons.is_empty() {
            // A user-loaded catalog may legally leave a category empty
            return Self::gold_drop(tier, dice);
        }
        let weapon = weapons[(dice.roll(weapons.len() as u32) - 1) as usize].clone();
        let message = format!("{} (weapon)", weapon.name);
        LootDrop {
            loot: Loot::Weapon(weapon),
            message,
        }
    }

    fn armor_drop(&self, tier: Tier, dice: &mut impl DiceRoller) -> LootDrop {
        let categories = tier.armor_categories();
        let category = categories[(dice.roll(categories.len() as u32) - 1) as usize];
        let armors = self.catalog.armors_in(category);
        if armors.is_empty() {
            return Self::gold_drop(tier, dice);
        }
        let armor = armors[(dice.roll(armors.len() as u32) - 1) as usize].clone();
        let message = format!("{} (armor)", armor.name);
        LootDrop {
            loot: Loot::Armor(armor),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice_core::{rng_from_seed, FixedRolls};

    #[test]
    fn test_tier_brackets() {
        assert_eq!(Tier::for_monster_level(1), Tier::Low);
        assert_eq!(Tier::for_monster_level(3), Tier::Low);
        assert_eq!(Tier::for_monster_level(4), Tier::Mid);
        assert_eq!(Tier::for_monster_level(7), Tier::Mid);
        assert_eq!(Tier::for_monster_level(8), Tier::High);
        assert_eq!(Tier::for_monster_level(11), Tier::High);
        assert_eq!(Tier::for_monster_level(12), Tier::Elite);
        assert_eq!(Tier::for_monster_level(40), Tier::Elite);
    }

    #[test]
    fn test_drop_chance_bounds_and_monotonicity() {
        for monster_level in 1..=30u32 {
            for player_level in 1..=30u32 {
                let chance = drop_chance(monster_level, player_level);
                assert!((0.20..=1.0).contains(&chance));
            }
        }

        // Non-decreasing as the level gap grows
        let mut previous = 0.0;
        for monster_level in 1..=30u32 {
            let chance = drop_chance(monster_level, 1);
            assert!(chance >= previous);
            previous = chance;
        }

        assert_eq!(drop_chance(1, 10), 0.20);
        assert_eq!(drop_chance(3, 1), 0.50);
        assert_eq!(drop_chance(10, 1), 1.0);
    }

    #[test]
    fn test_forced_no_drop() {
        let generator = LootGenerator::default();
        // Equal levels: 20% chance, a roll of 100 misses it
        let mut dice = FixedRolls::new([100]);
        assert!(generator.generate(5, 5, &mut dice).is_none());
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_forced_potion_drop() {
        let generator = LootGenerator::default();
        // Roll 1 passes the drop check; type roll 1 lands in the potion band
        let mut dice = FixedRolls::new([1, 1]);
        let drop = generator.generate(5, 5, &mut dice).unwrap();
        match drop.loot {
            Loot::Potion(potion) => {
                assert_eq!(potion.name, "Healing Potion");
                assert_eq!(potion.healing, 20);
            }
            other => panic!("Expected a potion, got {:?}", other),
        }
        assert_eq!(drop.message, "Healing Potion (heals 20 HP)");
    }

    #[test]
    fn test_potion_table_per_tier() {
        assert_eq!(Tier::Low.potion().healing, 10);
        assert_eq!(Tier::Mid.potion().healing, 20);
        assert_eq!(Tier::High.potion().healing, 35);
        assert_eq!(Tier::Elite.potion().name, "Superior Healing Potion");
    }

    #[test]
    fn test_gold_ranges_scale_with_tier() {
        let mut rng = rng_from_seed(11);
        for _ in 0..500 {
            assert!((6..=11).contains(&Tier::Low.roll_gold(&mut rng)));
            assert!((11..=20).contains(&Tier::Mid.roll_gold(&mut rng)));
            assert!((21..=32).contains(&Tier::High.roll_gold(&mut rng)));
            assert!((42..=64).contains(&Tier::Elite.roll_gold(&mut rng)));
        }
    }

    #[test]
    fn test_guaranteed_drop_when_heavily_outleveled() {
        let generator = LootGenerator::default();
        let mut rng = rng_from_seed(23);
        // Monster 10 levels above the player: chance is clamped to 1.0
        for _ in 0..200 {
            assert!(generator.generate(12, 2, &mut rng).is_some());
        }
    }

    #[test]
    fn test_weapon_drops_respect_tier_categories() {
        let generator = LootGenerator::default();
        let mut rng = rng_from_seed(37);
        let mut weapon_drops = 0;
        while weapon_drops < 50 {
            if let Some(drop) = generator.generate(2, 1, &mut rng) {
                if let Loot::Weapon(weapon) = drop.loot {
                    assert_eq!(weapon.category, WeaponCategory::SimpleMelee);
                    weapon_drops += 1;
                }
            }
        }
    }

    #[test]
    fn test_armor_drops_respect_tier_categories() {
        let generator = LootGenerator::default();
        let mut rng = rng_from_seed(41);
        let mut armor_drops = 0;
        while armor_drops < 50 {
            if let Some(drop) = generator.generate(13, 1, &mut rng) {
                if let Loot::Armor(armor) = drop.loot {
                    assert_eq!(armor.category, ArmorCategory::Heavy);
                    armor_drops += 1;
                }
            }
        }
    }

    #[test]
    fn test_empty_catalog_category_falls_back_to_gold() {
        let generator = LootGenerator::new(Catalog::empty());
        // Drop check passes (1), type roll 86 lands in the armor band,
        // category pick 1, then the gold fallback rolls 1d6 = 4
        let mut dice = FixedRolls::new([1, 86, 1, 4]);
        let drop = generator.generate(2, 2, &mut dice).unwrap();
        assert_eq!(drop.loot, Loot::Gold(9));
    }

    #[test]
    fn test_loot_type_frequencies_converge() {
        let generator = LootGenerator::default();
        let mut rng = rng_from_seed(4242);
        let mut counts = [0u32; 4];
        let iterations = 20_000;
        for _ in 0..iterations {
            match generator.pick_loot_type(&mut rng) {
                LootType::Potion => counts[0] += 1,
                LootType::Gold => counts[1] += 1,
                LootType::Weapon => counts[2] += 1,
                LootType::Armor => counts[3] += 1,
            }
        }

        let expected = [0.40, 0.25, 0.20, 0.15];
        for (count, expected) in counts.iter().zip(expected) {
            let observed = *count as f64 / iterations as f64;
            assert!(
                (observed - expected).abs() < 0.02,
                "observed {} vs expected {}",
                observed,
                expected
            );
        }
    }
}
