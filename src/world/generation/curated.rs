//! Authored floors
//!
//! Floors 0 and 1 are hand-drawn. Each table row is one board row:
//! `#` wall, `.` floor, `@` spawn, `>` exit, `C` chest, `s` small monster,
//! `L` large monster, `B` boss.

use super::GenerationError;
use crate::entities::{stock_chest, Monster, MonsterKind};
use crate::items::LootFactory;
use crate::world::map::{Level, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// The first floor
pub static FLOOR_0: [&str; 30] = [
    "##############################",
    "#@.....#...##########......#.#",
    "#..##..#.#.#..........C..C.#.#",
    "#.#CC#.#.#.#.##.#####......#.#",
    "#......#.#...#...#..########.#",
    "#........#.s.#.s.#.###########",
    "#.########...#...#.#...##...##",
    "#.......#######.##.#.C....C.##",
    "#######.#........#.#........##",
    "#.......#.#############..#####",
    "#.....###.#############..#####",
    "#..s..###.###.#######.#..#####",
    "#.....#.....#.#.....#.#..#...#",
    "#.....#.....###.....###.....##",
    "###.###..s.......L........C..#",
    "#.#.#.#.....###.....###.....##",
    "#.#.#.#.....#.#.....#.#..#...#",
    "#.#.#.#################..#####",
    "#.#.###################..#####",
    "#.#.###################..#####",
    "###.###..#.......#.#........##",
    "#.....#..#.C.....#.#.C....C.##",
    "#.C...####.......#.#...##...##",
    "#..s.........s...#.###########",
    "#.C...####.......####....##..#",
    "#.....#..#.C........#...##..##",
    "##########.......##........B>#",
    "#####################...##..##",
    "#####################....##..#",
    "##############################",
];

/// The second floor
pub static FLOOR_1: [&str; 30] = [
    "##############################",
    "#@.......#...#..##..#.......##",
    "#............#.#..#.#.C.C.C.##",
    "#...######...###..###.......##",
    "#..#.......C........######.###",
    "#.#..#####...######.######.###",
    "##..##...#...#....#.##.......#",
    "#..#...#.#...#...##.##.C.C.C.#",
    "#.##.C.#...###...#...#.L.L.L.#",
    "#..#...#####.....#.C.........#",
    "##..#####....#...#...#.......#",
    "#.#..#..#.s.#.#..#######.#####",
    "#..#..#.#...#..#.....##...#..#",
    "#...#..##...##..#..L.#....#.##",
    "#....#..#.....#..#...#..L..B>#",
    "#.....#.#...#..#..#..#....#.##",
    "#....#..#....#..#.#####...#..#",
    "#...#..###.C.##.##.....#.###.#",
    "#..#..#.#.#..#..#..###..#...##",
    "#.#..#..#..##..#..#...#...#.##",
    "##..#...#.....#..#..#..#.#..##",
    "##.######...##..#..###..#..#.#",
    "#.......#...#..#..#...#...#..#",
    "#####.C.......#..#.....#######",
    "#...#...#...###.#.........#.C#",
    "#.C.###########.###########.##",
    "#...........................C#",
    "#.C.#######################.##",
    "#...#######################.C#",
    "##############################",
];

/// Chest numbering for floor 0. A chest's id is its index here plus one.
pub static FLOOR_0_CHESTS: [Position; 13] = [
    Position::new(22, 2),
    Position::new(25, 2),
    Position::new(21, 7),
    Position::new(26, 7),
    Position::new(26, 14),
    Position::new(11, 21),
    Position::new(21, 21),
    Position::new(26, 21),
    Position::new(2, 22),
    Position::new(2, 24),
    Position::new(11, 25),
    Position::new(3, 3),
    Position::new(4, 3),
];

/// Chest numbering for floor 1
pub static FLOOR_1_CHESTS: [Position; 16] = [
    Position::new(22, 2),
    Position::new(24, 2),
    Position::new(26, 2),
    Position::new(11, 4),
    Position::new(5, 8),
    Position::new(11, 17),
    Position::new(6, 23),
    Position::new(2, 25),
    Position::new(2, 27),
    Position::new(19, 9),
    Position::new(23, 7),
    Position::new(25, 7),
    Position::new(27, 7),
    Position::new(28, 24),
    Position::new(28, 26),
    Position::new(28, 28),
];

/// Chest numbering for an authored floor
pub fn chest_order(floor: u32) -> &'static [Position] {
    match floor {
        0 => &FLOOR_0_CHESTS,
        1 => &FLOOR_1_CHESTS,
        _ => &[],
    }
}

/// Layout table for an authored floor
pub fn layout(floor: u32) -> Option<&'static [&'static str; 30]> {
    match floor {
        0 => Some(&FLOOR_0),
        1 => Some(&FLOOR_1),
        _ => None,
    }
}

/// Build a level from a layout table.
///
/// Chests take their ids from the floor's [`chest_order`]; chests missing from
/// it are numbered after it in reading order. Contents are stocked through the
/// loot factory. The border ring is always walled, whatever the table says.
pub fn parse_layout(
    floor: u32,
    rows: &[&str],
    loot: &mut LootFactory,
) -> Result<Level, GenerationError> {
    let malformed = |reason: String| GenerationError::MalformedLayout { floor, reason };

    if rows.len() != BOARD_HEIGHT as usize {
        return Err(malformed(format!("expected {} rows, found {}", BOARD_HEIGHT, rows.len())));
    }

    let mut spawn = None;
    let mut exit = None;
    let mut walls = Vec::new();
    let mut chests = Vec::new();
    let mut monsters = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        let width = row.chars().count();
        if width != BOARD_WIDTH as usize {
            return Err(malformed(format!("row {} has {} cells", y, width)));
        }
        for (x, glyph) in row.chars().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            match glyph {
                '#' => walls.push(pos),
                '.' => {}
                '@' if spawn.is_none() => spawn = Some(pos),
                '>' if exit.is_none() => exit = Some(pos),
                '@' | '>' => return Err(malformed(format!("duplicate '{}' at {}", glyph, pos))),
                'C' => chests.push(pos),
                's' => monsters.push((pos, MonsterKind::Small)),
                'L' => monsters.push((pos, MonsterKind::Large)),
                'B' => monsters.push((pos, MonsterKind::Boss)),
                other => return Err(malformed(format!("unknown glyph '{}' at {}", other, pos))),
            }
        }
    }

    let spawn = spawn.ok_or_else(|| malformed("no spawn".to_string()))?;
    let exit = exit.ok_or_else(|| malformed("no exit".to_string()))?;
    if !spawn.is_interior() || !exit.is_interior() {
        return Err(malformed("spawn and exit must be inside the border".to_string()));
    }

    let mut level = Level::new(floor, spawn, exit);
    level.add_border_walls();
    for pos in walls {
        level.add_wall(pos);
    }
    let order = chest_order(floor);
    let mut next_id = order.len() as u32 + 1;
    for pos in chests {
        if !pos.is_interior() {
            continue;
        }
        let id = match order.iter().position(|&p| p == pos) {
            Some(index) => index as u32 + 1,
            None => {
                next_id += 1;
                next_id - 1
            }
        };
        level.place_chest(pos, stock_chest(id, floor, loot));
    }
    for (pos, kind) in monsters {
        if pos.is_interior() {
            level.place_monster(pos, Monster::new(kind, floor));
        }
    }

    Ok(level)
}
