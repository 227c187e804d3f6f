//! Experience, levels, and hit-point growth
//!
//! Characters level whenever experience crosses the current threshold
//! (level x 150); one large award can trigger several level-ups in a row.
//! How many hit points each level grants is a caller-supplied policy, never
//! an interactive prompt; reward-driven paths use [`HpGrowth::Average`].

use crate::combatant::{Combatant, CombatantKind};
use dice_core::DiceRoller;
use serde::{Deserialize, Serialize};

/// Hit-point growth policy applied on each level-up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HpGrowth {
    /// Roll the hit die and add the constitution modifier
    Roll,
    /// Take hit_die / 2 + 1 plus the constitution modifier
    #[default]
    Average,
}

/// One level gained from an experience award
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub new_level: u32,
    pub hit_points_gained: i32,
}

impl Combatant {
    /// Award experience and resolve any level-ups it triggers, in order.
    ///
    /// Monsters do not track experience; the call is a no-op for them.
    pub fn gain_xp(
        &mut self,
        amount: u32,
        policy: HpGrowth,
        dice: &mut impl DiceRoller,
    ) -> Vec<LevelUp> {
        let mut level_ups = Vec::new();
        match &mut self.kind {
            CombatantKind::Monster => return level_ups,
            CombatantKind::Character { xp, .. } => *xp += amount,
        }

        while self.xp() >= self.xp_to_next_level() {
            level_ups.push(self.level_up(policy, dice));
        }
        level_ups
    }

    /// Advance one level: consume the old threshold, recompute the next
    /// one, and grow hit points by the policy amount (at least 1). The
    /// gained points are added to current hit points as well.
    fn level_up(&mut self, policy: HpGrowth, dice: &mut impl DiceRoller) -> LevelUp {
        let con_modifier = self.abilities.constitution.modifier();
        self.level += 1;
        let new_level = self.level;

        let hit_points_gained = match &mut self.kind {
            CombatantKind::Monster => 0,
            CombatantKind::Character {
                xp,
                xp_to_next_level,
                hit_die,
                ..
            } => {
                *xp -= *xp_to_next_level;
                *xp_to_next_level = new_level * 150;

                let increase = match policy {
                    HpGrowth::Roll => dice.roll(*hit_die) as i32 + con_modifier,
                    HpGrowth::Average => (*hit_die / 2) as i32 + 1 + con_modifier,
                };
                increase.max(1)
            }
        };

        self.max_hit_points += hit_points_gained;
        self.current_hit_points += hit_points_gained;

        LevelUp {
            new_level,
            hit_points_gained,
        }
    }
}
