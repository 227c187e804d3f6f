//! Ability scores and their derived modifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub fn all() -> &'static [Ability] {
        &[
            Ability::Strength,
            Ability::Dexterity,
            Ability::Constitution,
            Ability::Intelligence,
            Ability::Wisdom,
            Ability::Charisma,
        ]
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        };
        write!(f, "{}", name)
    }
}

/// A raw ability score.
///
/// The modifier is always derived from the score, never stored or mutated
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityScore {
    pub score: i32,
}

impl AbilityScore {
    pub fn new(score: i32) -> Self {
        AbilityScore { score }
    }

    /// floor((score - 10) / 2)
    pub fn modifier(self) -> i32 {
        (self.score - 10).div_euclid(2)
    }
}

impl Default for AbilityScore {
    fn default() -> Self {
        AbilityScore { score: 10 }
    }
}

/// One score per ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: AbilityScore,
    pub dexterity: AbilityScore,
    pub constitution: AbilityScore,
    pub intelligence: AbilityScore,
    pub wisdom: AbilityScore,
    pub charisma: AbilityScore,
}

impl AbilityScores {
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        AbilityScores {
            strength: AbilityScore::new(strength),
            dexterity: AbilityScore::new(dexterity),
            constitution: AbilityScore::new(constitution),
            intelligence: AbilityScore::new(intelligence),
            wisdom: AbilityScore::new(wisdom),
            charisma: AbilityScore::new(charisma),
        }
    }

    pub fn score(&self, ability: Ability) -> AbilityScore {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        self.score(ability).modifier()
    }
}
