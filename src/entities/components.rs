//! Shared entity components
//!
//! Health pools, growth stats and facing used by the hero and monsters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Health
// ============================================================================

/// Hit points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage, never dropping below zero. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let amount = amount.max(0);
        let taken = amount.min(self.current);
        self.current -= taken;
        taken
    }

    /// Heal up to the maximum. Returns the amount actually healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let amount = amount.max(0);
        let healed = amount.min(self.max - self.current).max(0);
        self.current += healed;
        healed
    }

    /// Raise both current and maximum health
    pub fn raise_max(&mut self, amount: i32) {
        self.max += amount;
        self.current += amount;
    }

    /// Lower both current and maximum health.
    ///
    /// Current health never drops below 1, so shedding gear cannot kill.
    pub fn lower_max(&mut self, amount: i32) {
        self.max = (self.max - amount).max(1);
        self.current = (self.current - amount).clamp(1, self.max);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn percent(&self) -> f32 {
        if self.max <= 0 {
            0.0
        } else {
            self.current as f32 / self.max as f32
        }
    }
}

// ============================================================================
// Growth stats
// ============================================================================

/// One of the three growth stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthStat {
    Force,
    Agility,
    Wisdom,
}

impl GrowthStat {
    pub const ALL: [GrowthStat; 3] = [GrowthStat::Force, GrowthStat::Agility, GrowthStat::Wisdom];

    pub fn name(&self) -> &'static str {
        match self {
            GrowthStat::Force => "force",
            GrowthStat::Agility => "agility",
            GrowthStat::Wisdom => "wisdom",
        }
    }
}

/// Error for stat names that do not match a growth stat
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stat: {0}")]
pub struct UnknownStat(pub String);

impl FromStr for GrowthStat {
    type Err = UnknownStat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "force" => Ok(GrowthStat::Force),
            "agility" => Ok(GrowthStat::Agility),
            "wisdom" => Ok(GrowthStat::Wisdom),
            _ => Err(UnknownStat(s.to_string())),
        }
    }
}

/// Force, agility and wisdom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GrowthStats {
    pub force: i32,
    pub agility: i32,
    pub wisdom: i32,
}

impl GrowthStats {
    pub fn new(force: i32, agility: i32, wisdom: i32) -> Self {
        Self { force, agility, wisdom }
    }

    pub fn get(&self, stat: GrowthStat) -> i32 {
        match stat {
            GrowthStat::Force => self.force,
            GrowthStat::Agility => self.agility,
            GrowthStat::Wisdom => self.wisdom,
        }
    }

    pub fn add(&mut self, stat: GrowthStat, amount: i32) {
        match stat {
            GrowthStat::Force => self.force += amount,
            GrowthStat::Agility => self.agility += amount,
            GrowthStat::Wisdom => self.wisdom += amount,
        }
    }
}

// ============================================================================
// Facing
// ============================================================================

/// Direction the hero sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Front,
    Back,
    Left,
    Right,
}
