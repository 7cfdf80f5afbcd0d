//! Level data structure
//!
//! A single 30x30 dungeon floor: walls, chests, monsters, spawn and exit.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::entities::{Chest, Monster, MonsterKind};

/// Board width in cells
pub const BOARD_WIDTH: i32 = 30;
/// Board height in cells
pub const BOARD_HEIGHT: i32 = 30;
/// Number of floors in the campaign
pub const MAX_FLOORS: u32 = 10;

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position
    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Position shifted by an offset
    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbors (up, down, left, right)
    pub fn neighbors(&self) -> [Position; 4] {
        [
            self.offset(0, -1),
            self.offset(0, 1),
            self.offset(-1, 0),
            self.offset(1, 0),
        ]
    }

    /// Check if the position lies on the board
    #[inline]
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < BOARD_WIDTH && self.y >= 0 && self.y < BOARD_HEIGHT
    }

    /// Check if the position lies strictly inside the border ring
    #[inline]
    pub fn is_interior(&self) -> bool {
        self.x > 0 && self.x < BOARD_WIDTH - 1 && self.y > 0 && self.y < BOARD_HEIGHT - 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Iterate every cell of the board in row-major order
pub fn board_cells() -> impl Iterator<Item = Position> {
    (0..BOARD_HEIGHT).flat_map(|y| (0..BOARD_WIDTH).map(move |x| Position::new(x, y)))
}

/// A dungeon floor
#[derive(Debug, Clone)]
pub struct Level {
    floor: u32,
    walls: HashSet<Position>,
    chests: HashMap<Position, Chest>,
    monsters: HashMap<Position, Monster>,
    spawn: Position,
    exit: Position,
}

impl Level {
    /// Create an empty floor with the given spawn and exit
    pub fn new(floor: u32, spawn: Position, exit: Position) -> Self {
        Self {
            floor,
            walls: HashSet::new(),
            chests: HashMap::new(),
            monsters: HashMap::new(),
            spawn,
            exit,
        }
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn spawn(&self) -> Position {
        self.spawn
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    // ========================================================================
    // Cell predicates
    // ========================================================================

    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.contains(&pos)
    }

    pub fn is_chest(&self, pos: Position) -> bool {
        self.chests.contains_key(&pos)
    }

    pub fn is_monster(&self, pos: Position) -> bool {
        self.monsters.contains_key(&pos)
    }

    pub fn is_exit(&self, pos: Position) -> bool {
        self.exit == pos
    }

    /// Check if anything (wall, chest or monster) occupies the cell
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.is_wall(pos) || self.is_chest(pos) || self.is_monster(pos)
    }

    /// Check if the hero could step onto a cell without a fight
    pub fn is_valid_move(&self, pos: Position) -> bool {
        pos.in_bounds() && !self.is_wall(pos) && !self.is_monster(pos)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn monster_at(&self, pos: Position) -> Option<&Monster> {
        self.monsters.get(&pos)
    }

    pub(crate) fn monster_at_mut(&mut self, pos: Position) -> Option<&mut Monster> {
        self.monsters.get_mut(&pos)
    }

    pub fn chest_at(&self, pos: Position) -> Option<&Chest> {
        self.chests.get(&pos)
    }

    pub(crate) fn chest_at_mut(&mut self, pos: Position) -> Option<&mut Chest> {
        self.chests.get_mut(&pos)
    }

    pub fn walls(&self) -> impl Iterator<Item = &Position> {
        self.walls.iter()
    }

    pub fn wall_set(&self) -> &HashSet<Position> {
        &self.walls
    }

    pub fn chests(&self) -> impl Iterator<Item = (&Position, &Chest)> {
        self.chests.iter()
    }

    pub fn monsters(&self) -> impl Iterator<Item = (&Position, &Monster)> {
        self.monsters.iter()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn chest_count(&self) -> usize {
        self.chests.len()
    }

    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }

    /// Position of the living boss, if any
    pub fn boss_position(&self) -> Option<Position> {
        self.monsters
            .iter()
            .filter(|(_, m)| m.kind == MonsterKind::Boss && !m.is_dead())
            .map(|(pos, _)| *pos)
            .min()
    }

    /// The exit stays sealed while a boss lives
    pub fn has_boss_alive(&self) -> bool {
        self.boss_position().is_some()
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Remove a defeated monster from the floor
    pub fn remove_monster(&mut self, pos: Position) -> Option<Monster> {
        self.monsters.remove(&pos)
    }

    pub(crate) fn add_wall(&mut self, pos: Position) -> bool {
        self.walls.insert(pos)
    }

    pub(crate) fn remove_wall(&mut self, pos: Position) -> bool {
        self.walls.remove(&pos)
    }

    pub(crate) fn place_chest(&mut self, pos: Position, chest: Chest) {
        self.chests.insert(pos, chest);
    }

    pub(crate) fn place_monster(&mut self, pos: Position, monster: Monster) {
        self.monsters.insert(pos, monster);
    }

    /// Wall off the outer ring of the board
    pub(crate) fn add_border_walls(&mut self) {
        for x in 0..BOARD_WIDTH {
            self.walls.insert(Position::new(x, 0));
            self.walls.insert(Position::new(x, BOARD_HEIGHT - 1));
        }
        for y in 0..BOARD_HEIGHT {
            self.walls.insert(Position::new(0, y));
            self.walls.insert(Position::new(BOARD_WIDTH - 1, y));
        }
    }

    /// Render the floor as text, one row per line.
    ///
    /// `#` wall, `.` floor, `@` spawn, `>` exit, `C` chest (`c` once opened),
    /// `s`/`L`/`B` small, large and boss monsters.
    pub fn ascii(&self) -> String {
        let mut out = String::with_capacity(((BOARD_WIDTH + 1) * BOARD_HEIGHT) as usize);
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let pos = Position::new(x, y);
                let glyph = if let Some(monster) = self.monster_at(pos) {
                    monster.kind.glyph()
                } else if let Some(chest) = self.chest_at(pos) {
                    if chest.is_opened() { 'c' } else { 'C' }
                } else if pos == self.spawn {
                    '@'
                } else if pos == self.exit {
                    '>'
                } else if self.is_wall(pos) {
                    '#'
                } else {
                    '.'
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}
