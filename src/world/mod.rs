//! World module
//!
//! Level data, reachability repair and floor generation.

pub mod map;
pub mod reachability;
pub mod generation;

pub use map::{board_cells, Level, Position, BOARD_HEIGHT, BOARD_WIDTH, MAX_FLOORS};
pub use reachability::{carve_path, flood_fill, repair, shortest_path, RepairReport};
pub use generation::{generate, generate_with_config, GenerationError};
