//! Floor generation
//!
//! Floors 0 and 1 come from authored tables, deeper floors from a seeded
//! scatter. Every floor goes through reachability repair, and scattered
//! floors then get a monster in every open 3x3 block.

pub mod curated;
pub mod scatter;

use rand::Rng;

use super::map::{Level, Position, BOARD_HEIGHT, BOARD_WIDTH, MAX_FLOORS};
use super::reachability;
use crate::data::GameConfig;
use crate::entities::{Monster, MonsterKind};
use crate::items::LootFactory;

/// Chance that a density-pass monster is small
const SMALL_MONSTER_CHANCE: f64 = 0.7;

/// Floor generation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid floor number: {0}")]
    InvalidFloor(u32),
    #[error("malformed layout for floor {floor}: {reason}")]
    MalformedLayout { floor: u32, reason: String },
}

/// Generate a floor with the default configuration
pub fn generate(floor: u32, loot: &mut LootFactory) -> Result<Level, GenerationError> {
    generate_with_config(floor, &GameConfig::default(), loot)
}

/// Generate a floor.
///
/// The layout depends only on the floor number. Chest contents and the kinds
/// of density-pass monsters come from the loot factory's random source.
pub fn generate_with_config(
    floor: u32,
    config: &GameConfig,
    loot: &mut LootFactory,
) -> Result<Level, GenerationError> {
    if floor >= MAX_FLOORS {
        return Err(GenerationError::InvalidFloor(floor));
    }

    let level = match curated::layout(floor) {
        Some(rows) => {
            let mut level = curated::parse_layout(floor, rows, loot)?;
            reachability::repair(&mut level);
            level
        }
        None => {
            let mut level = scatter::scatter_floor(floor, config, loot);
            reachability::repair(&mut level);
            let added = populate_open_spaces(&mut level, loot);
            log::debug!("Floor {}: density pass added {} monsters", floor, added);
            level
        }
    };

    log::info!(
        "Generated floor {}: {} walls, {} chests, {} monsters",
        floor,
        level.wall_count(),
        level.chest_count(),
        level.monster_count()
    );
    Ok(level)
}

/// Check that no wall or monster lies in the 3x3 block around `center`.
/// Chests do not block.
fn is_open_block(level: &Level, center: Position) -> bool {
    (-1..=1).all(|dx| {
        (-1..=1).all(|dy| {
            let pos = center.offset(dx, dy);
            !level.is_wall(pos) && !level.is_monster(pos)
        })
    })
}

/// Put a monster at the center of every open 3x3 block.
///
/// Blocks are scanned column by column, so each placed monster closes the
/// blocks around it. A center holding a chest, or the spawn or exit, is left
/// alone. Returns the number of monsters added.
pub fn populate_open_spaces(level: &mut Level, loot: &mut LootFactory) -> usize {
    let floor = level.floor();
    let mut added = 0;

    for x in 2..BOARD_WIDTH - 2 {
        for y in 2..BOARD_HEIGHT - 2 {
            let center = Position::new(x, y);
            if level.is_chest(center)
                || level.is_monster(center)
                || center == level.spawn()
                || center == level.exit()
            {
                continue;
            }
            if !is_open_block(level, center) {
                continue;
            }

            let kind = if loot.rng().gen_bool(SMALL_MONSTER_CHANCE) {
                MonsterKind::Small
            } else {
                MonsterKind::Large
            };
            level.place_monster(center, Monster::new(kind, floor));
            added += 1;
        }
    }

    added
}
