//! Scattered-wall floors
//!
//! Floors 2 and deeper: a walled board sprinkled with random wall cells,
//! chests and monsters, with a boss guarding the exit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::GameConfig;
use crate::entities::{stock_chest, Monster, MonsterKind};
use crate::items::LootFactory;
use crate::world::map::{Level, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// Spawn cell on every scattered floor
pub const SPAWN: Position = Position::new(1, 1);
/// Exit cell on every scattered floor
pub const EXIT: Position = Position::new(27, 27);

/// Seed for a floor's layout
pub fn floor_seed(floor: u32) -> u64 {
    floor as u64 * 100
}

/// Random interior cell (inside the border ring)
fn random_interior(rng: &mut StdRng) -> Position {
    Position::new(rng.gen_range(1..BOARD_WIDTH - 1), rng.gen_range(1..BOARD_HEIGHT - 1))
}

/// Sample up to `attempts` interior cells for one that is free.
///
/// Rejects walls, chests, monsters, spawn and exit. Returns None when the
/// budget runs out.
pub fn find_open_cell(rng: &mut StdRng, level: &Level, attempts: u32) -> Option<Position> {
    (0..attempts)
        .map(|_| random_interior(rng))
        .find(|&pos| !level.is_occupied(pos) && pos != level.spawn() && pos != level.exit())
}

/// Lay out walls, chests, monsters and the boss. Reachability is not fixed yet.
pub fn scatter_floor(floor: u32, config: &GameConfig, loot: &mut LootFactory) -> Level {
    let mut rng = StdRng::seed_from_u64(floor_seed(floor));
    let mut level = Level::new(floor, SPAWN, EXIT);

    level.add_border_walls();
    for _ in 0..config.interior_walls {
        let pos = random_interior(&mut rng);
        level.add_wall(pos);
    }
    level.remove_wall(SPAWN);
    level.remove_wall(EXIT);

    for id in 0..config.chest_count {
        match find_open_cell(&mut rng, &level, config.placement_attempts) {
            Some(pos) => level.place_chest(pos, stock_chest(id as u32, floor, loot)),
            None => log::warn!("Floor {}: no room for chest {}, skipped", floor, id),
        }
    }

    let monster_count = 1 + floor / 3;
    for i in 0..monster_count {
        let kind = if i % 3 == 0 { MonsterKind::Large } else { MonsterKind::Small };
        match find_open_cell(&mut rng, &level, config.placement_attempts) {
            Some(pos) => level.place_monster(pos, Monster::new(kind, floor)),
            None => log::warn!("Floor {}: no room for monster {}, skipped", floor, i),
        }
    }

    match boss_cell(&level) {
        Some(pos) => level.place_monster(pos, Monster::new(MonsterKind::Boss, floor)),
        None => log::warn!("Floor {}: no room for the boss near the exit", floor),
    }

    level
}

/// Where the boss stands: left of the exit, else above it, else the first
/// free cell in the 3x3 block up and left of the exit.
fn boss_cell(level: &Level) -> Option<Position> {
    let exit = level.exit();
    let preferred = [exit.offset(-1, 0), exit.offset(0, -1)];
    if let Some(pos) = preferred
        .into_iter()
        .find(|&pos| !level.is_wall(pos) && !level.is_chest(pos))
    {
        return Some(pos);
    }

    (-2..=0)
        .flat_map(|dx| (-2..=0).map(move |dy| (dx, dy)))
        .filter(|&offset| offset != (0, 0))
        .map(|(dx, dy)| exit.offset(dx, dy))
        .find(|&pos| !level.is_occupied(pos))
}
