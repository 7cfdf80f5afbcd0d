//! Reachability repair
//!
//! Flood fill from spawn, carve corridors toward the exit and chests when they
//! are cut off, then wall in whatever pockets remain unreachable.

use std::collections::{HashMap, HashSet, VecDeque};

use super::map::{board_cells, Level, Position};

/// What a repair pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairReport {
    /// Walls removed while carving paths
    pub walls_carved: usize,
    /// Unreachable cells converted into walls
    pub cells_sealed: usize,
    /// Monsters removed because their cell was sealed
    pub monsters_sealed: usize,
}

impl RepairReport {
    pub fn is_noop(&self) -> bool {
        self.walls_carved == 0 && self.cells_sealed == 0 && self.monsters_sealed == 0
    }
}

/// Every cell reachable from spawn by 4-directional steps over non-wall cells
pub fn flood_fill(level: &Level) -> HashSet<Position> {
    flood_fill_from(level, level.spawn())
}

/// Flood fill from an arbitrary start cell
pub fn flood_fill_from(level: &Level, start: Position) -> HashSet<Position> {
    let mut visited = HashSet::new();
    if !start.in_bounds() || level.is_wall(start) {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in current.neighbors() {
            if next.in_bounds() && !level.is_wall(next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited
}

/// Open a corridor from the reachable area to `target`.
///
/// Starts at the reachable cell closest to the target (Manhattan distance, ties
/// broken by row then column), walks horizontally then vertically and removes
/// every wall on the way. Returns the number of walls removed.
pub fn carve_path(level: &mut Level, reachable: &HashSet<Position>, target: Position) -> usize {
    let Some(start) = reachable
        .iter()
        .copied()
        .min_by_key(|p| (p.distance(&target), p.y, p.x))
    else {
        return 0;
    };

    let mut carved = 0;
    let (mut x, mut y) = (start.x, start.y);

    while x != target.x {
        x += if target.x > x { 1 } else { -1 };
        if level.remove_wall(Position::new(x, y)) {
            carved += 1;
        }
    }
    while y != target.y {
        y += if target.y > y { 1 } else { -1 };
        if level.remove_wall(Position::new(x, y)) {
            carved += 1;
        }
    }

    carved
}

/// Make the exit and every chest reachable from spawn, then seal the rest.
///
/// Running this on an already repaired level changes nothing.
pub fn repair(level: &mut Level) -> RepairReport {
    let mut report = RepairReport::default();
    let mut reachable = flood_fill(level);

    let exit = level.exit();
    if !reachable.contains(&exit) {
        log::warn!("Floor {}: exit {} unreachable, carving path", level.floor(), exit);
        report.walls_carved += carve_path(level, &reachable, exit);
        reachable = flood_fill(level);
    }

    let mut chest_positions: Vec<Position> = level.chests().map(|(pos, _)| *pos).collect();
    chest_positions.sort();
    for pos in chest_positions {
        if !reachable.contains(&pos) {
            log::warn!("Floor {}: chest at {} unreachable, carving path", level.floor(), pos);
            report.walls_carved += carve_path(level, &reachable, pos);
            reachable = flood_fill(level);
        }
    }

    for pos in board_cells().filter(|p| p.is_interior()) {
        if reachable.contains(&pos) || level.is_wall(pos) {
            continue;
        }
        if level.remove_monster(pos).is_some() {
            report.monsters_sealed += 1;
        }
        level.add_wall(pos);
        report.cells_sealed += 1;
    }

    if !report.is_noop() {
        log::debug!(
            "Floor {} repaired: {} carved, {} sealed, {} monsters dropped",
            level.floor(),
            report.walls_carved,
            report.cells_sealed,
            report.monsters_sealed
        );
    }

    report
}

/// Shortest 4-directional path over non-wall cells, excluding `from`, ending at `to`.
///
/// Monsters are ignored; stepping into one starts a fight.
pub fn shortest_path(level: &Level, from: Position, to: Position) -> Option<Vec<Position>> {
    if from == to {
        return Some(Vec::new());
    }

    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut queue = VecDeque::new();
    queue.push_back(from);
    came_from.insert(from, from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = vec![current];
            let mut step = current;
            while let Some(&prev) = came_from.get(&step) {
                if prev == from {
                    break;
                }
                path.push(prev);
                step = prev;
            }
            path.reverse();
            return Some(path);
        }
        for next in current.neighbors() {
            if next.in_bounds() && !level.is_wall(next) && !came_from.contains_key(&next) {
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    None
}
