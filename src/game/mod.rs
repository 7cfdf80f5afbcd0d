//! Game module - Orchestration of a campaign and its event hooks

mod events;
mod state;

pub use events::{GameListener, Listeners};
pub use state::{Direction, Game, GameState, MoveOutcome};
