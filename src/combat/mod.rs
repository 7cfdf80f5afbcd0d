//! Combat system
//!
//! Damage math and the turn-based combat engine.

pub mod damage;
pub mod engine;

pub use damage::{boss_penetration, effective_resistance, hero_attack_damage, monster_attack_damage};
pub use engine::{CombatEngine, CombatEvent, CombatOutcome, CombatState, Engagement};
