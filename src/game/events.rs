//! Game event hooks
//!
//! Listeners are registered on the [`Game`](super::Game) and called
//! synchronously when the event happens.

use crate::entities::{Chest, Hero, Monster};
use crate::progression::LevelUpSummary;
use crate::world::Position;

/// Receives game events. Every method defaults to doing nothing.
pub trait GameListener {
    /// The hero walked into a monster and a fight began
    fn on_combat_started(&mut self, _monster: &Monster, _position: Position) {}

    /// A chest was opened. `inventory_full` is true if some items did not fit.
    fn on_chest_opened(&mut self, _chest: &Chest, _inventory_full: bool) {}

    /// The hero gained one or more levels
    fn on_level_up(&mut self, _hero: &Hero, _summary: &LevelUpSummary) {}
}

/// Registered listeners, called in registration order
#[derive(Default)]
pub struct Listeners {
    listeners: Vec<Box<dyn GameListener>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: Box<dyn GameListener>) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub(crate) fn combat_started(&mut self, monster: &Monster, position: Position) {
        for listener in &mut self.listeners {
            listener.on_combat_started(monster, position);
        }
    }

    pub(crate) fn chest_opened(&mut self, chest: &Chest, inventory_full: bool) {
        for listener in &mut self.listeners {
            listener.on_chest_opened(chest, inventory_full);
        }
    }

    pub(crate) fn level_up(&mut self, hero: &Hero, summary: &LevelUpSummary) {
        for listener in &mut self.listeners {
            listener.on_level_up(hero, summary);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("count", &self.listeners.len()).finish()
    }
}
