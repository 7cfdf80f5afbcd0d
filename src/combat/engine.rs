//! Turn-based combat engine
//!
//! One fight at a time against a single monster. Combat starts when the hero
//! walks into a monster and ends when either side drops to zero health.

use super::damage::{hero_attack_damage, monster_attack_damage};
use crate::entities::{Hero, Monster, MonsterKind};
use crate::progression::{add_experience, LevelUpSummary};
use crate::world::Position;

/// The monster currently being fought
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    pub position: Position,
    pub kind: MonsterKind,
}

/// Combat state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombatState {
    #[default]
    Idle,
    Active(Engagement),
}

/// What happened in one combat step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    /// The hero hit a monster that is still standing
    MonsterHit { damage: i32, remaining: i32 },
    /// The monster fell; the hero gained experience
    MonsterDefeated {
        position: Position,
        xp: u32,
        level_up: Option<LevelUpSummary>,
    },
    /// The monster hit the hero, who is still standing
    HeroHit { damage: i32, remaining: i32 },
    /// The hero fell
    HeroDefeated { damage: i32 },
    /// No fight is in progress
    NoCombat,
}

/// Result of a combat step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatOutcome {
    /// False when the step could not be taken or the hero died
    pub succeeded: bool,
    pub message: String,
    pub event: CombatEvent,
}

impl CombatOutcome {
    fn new(succeeded: bool, message: String, event: CombatEvent) -> Self {
        Self { succeeded, message, event }
    }

    pub fn no_combat() -> Self {
        Self::new(false, "There is nothing to fight.".to_string(), CombatEvent::NoCombat)
    }

    /// Experience awarded by this step, if the monster fell
    pub fn xp_awarded(&self) -> Option<u32> {
        match self.event {
            CombatEvent::MonsterDefeated { xp, .. } => Some(xp),
            _ => None,
        }
    }

    pub fn level_up(&self) -> Option<&LevelUpSummary> {
        match &self.event {
            CombatEvent::MonsterDefeated { level_up, .. } => level_up.as_ref(),
            _ => None,
        }
    }
}

/// Resolves hero and monster turns
#[derive(Debug, Clone, Default)]
pub struct CombatEngine {
    state: CombatState,
    turn: u32,
}

impl CombatEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, CombatState::Active(_))
    }

    /// Position of the monster being fought
    pub fn engaged_position(&self) -> Option<Position> {
        match self.state {
            CombatState::Active(engagement) => Some(engagement.position),
            CombatState::Idle => None,
        }
    }

    /// Hero turns taken in the current fight
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Engage a monster. Fails if a fight is already in progress.
    pub fn start_combat(&mut self, monster: &Monster, position: Position) -> bool {
        if self.is_active() {
            return false;
        }
        log::debug!("Combat started with {} at {}", monster.name(), position);
        self.state = CombatState::Active(Engagement { position, kind: monster.kind });
        self.turn = 0;
        true
    }

    /// Hero strikes the engaged monster.
    ///
    /// A kill awards experience and returns the engine to idle.
    pub fn hero_attack(&mut self, hero: &mut Hero, monster: &mut Monster) -> CombatOutcome {
        let Some(position) = self.engaged_position() else {
            return CombatOutcome::no_combat();
        };

        self.turn += 1;
        let dealt = monster.take_damage(hero_attack_damage(hero));
        log::debug!(
            "Turn {}: hero hits {} for {} ({} left)",
            self.turn,
            monster.name(),
            dealt,
            monster.health.current
        );

        if monster.is_dead() {
            let xp = monster.xp_reward();
            let level_up = add_experience(hero, xp);
            self.end_combat();
            let message = format!("You defeated the {} and gained {} XP.", monster.name(), xp);
            return CombatOutcome::new(
                true,
                message,
                CombatEvent::MonsterDefeated { position, xp, level_up },
            );
        }

        let message = format!(
            "You hit the {} for {} damage ({} left).",
            monster.name(),
            dealt,
            monster.health.current
        );
        CombatOutcome::new(
            true,
            message,
            CombatEvent::MonsterHit { damage: dealt, remaining: monster.health.current },
        )
    }

    /// Engaged monster strikes back. Hero death returns the engine to idle.
    pub fn enemy_turn(&mut self, hero: &mut Hero, monster: &Monster) -> CombatOutcome {
        if !self.is_active() {
            return CombatOutcome::no_combat();
        }

        let damage = hero.health.take_damage(monster_attack_damage(monster, hero.resistance));
        log::debug!(
            "{} hits hero for {} ({} left)",
            monster.name(),
            damage,
            hero.health.current
        );

        if hero.is_dead() {
            self.end_combat();
            let message = format!("The {} struck you down.", monster.name());
            return CombatOutcome::new(false, message, CombatEvent::HeroDefeated { damage });
        }

        let message = format!(
            "The {} hits you for {} damage ({} left).",
            monster.name(),
            damage,
            hero.health.current
        );
        CombatOutcome::new(
            true,
            message,
            CombatEvent::HeroHit { damage, remaining: hero.health.current },
        )
    }

    /// Drop back to idle from any state
    pub fn end_combat(&mut self) {
        self.state = CombatState::Idle;
        self.turn = 0;
    }
}
