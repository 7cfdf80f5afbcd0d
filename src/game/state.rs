//! Game state management
//!
//! The `Game` owns the hero, inventory, current floor, combat engine and
//! loot factory, and turns player intents into state changes.

use super::events::{GameListener, Listeners};
use crate::combat::{CombatEngine, CombatEvent, CombatOutcome};
use crate::data::GameConfig;
use crate::entities::{Facing, Hero, HeroClass};
use crate::items::{EquipSlot, Equipment, Inventory, ItemId, LootFactory, Rarity};
use crate::progression::{spend_stat_points, LevelUpSummary};
use crate::save::{SaveData, SaveError, SAVE_VERSION};
use crate::world::{generate_with_config, GenerationError, Level, Position, MAX_FLOORS};

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Free to move around the floor
    Exploring,
    /// Locked in a fight until one side falls
    Combat,
    /// The hero died
    GameOver,
    /// The boss of the last floor fell and the hero took the exit
    Victory,
}

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Grid step for this direction. Up decreases y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Which way the hero faces after moving this way
    pub fn facing(&self) -> Facing {
        match self {
            Direction::Up => Facing::Back,
            Direction::Down => Facing::Front,
            Direction::Left => Facing::Left,
            Direction::Right => Facing::Right,
        }
    }

    /// Direction of a single orthogonal step, if `to` is adjacent to `from`
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Result of a movement request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The hero stepped onto an empty cell
    Moved(Position),
    /// Out of bounds or a wall
    Blocked,
    /// A monster at this position now fights the hero
    CombatStarted(Position),
    /// The hero opened a chest and stepped onto it
    ChestOpened {
        chest_id: u32,
        taken: usize,
        lost: usize,
    },
    /// The exit stays shut while the boss lives
    ExitLocked,
    /// The hero descended to this floor
    FloorAdvanced(u32),
    /// The hero left the last floor
    Victory,
    /// Movement is not possible in the current state
    Unavailable,
}

/// The running game
pub struct Game {
    state: GameState,
    hero: Hero,
    inventory: Inventory,
    level: Level,
    position: Position,
    combat: CombatEngine,
    loot: LootFactory,
    listeners: Listeners,
    config: GameConfig,
    /// Cells of monsters killed on the current floor
    defeated: Vec<Position>,
}

impl Game {
    /// Start a new campaign with default settings and an entropy-seeded loot source
    pub fn new(class: HeroClass) -> Result<Self, GenerationError> {
        Self::with_config(class, GameConfig::default(), LootFactory::new())
    }

    /// Start a new campaign with a reproducible loot source
    pub fn with_seed(class: HeroClass, seed: u64) -> Result<Self, GenerationError> {
        Self::with_config(class, GameConfig::default(), LootFactory::seeded(seed))
    }

    /// Start a new campaign on floor 0 with a Common class weapon in the pack
    pub fn with_config(
        class: HeroClass,
        config: GameConfig,
        mut loot: LootFactory,
    ) -> Result<Self, GenerationError> {
        let level = generate_with_config(0, &config, &mut loot)?;
        let mut inventory = Inventory::with_capacity(config.inventory_capacity);
        let weapon = loot.create_weapon(class, 1, Rarity::Common);
        log::debug!("Starting weapon: {}", weapon.name);
        inventory.add_item(weapon);

        log::info!("New {} campaign", class.name());
        Ok(Self::from_parts(Hero::new(class), inventory, level, loot, config))
    }

    /// Assemble a game around an existing floor. The hero stands on its spawn.
    pub(crate) fn from_parts(
        hero: Hero,
        inventory: Inventory,
        level: Level,
        loot: LootFactory,
        config: GameConfig,
    ) -> Self {
        let position = level.spawn();
        let state = if hero.is_dead() { GameState::GameOver } else { GameState::Exploring };
        Self {
            state,
            hero,
            inventory,
            level,
            position,
            combat: CombatEngine::new(),
            loot,
            listeners: Listeners::new(),
            config,
            defeated: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn floor(&self) -> u32 {
        self.level.floor()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn combat(&self) -> &CombatEngine {
        &self.combat
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::GameOver | GameState::Victory)
    }

    /// Register a listener for game events
    pub fn add_listener(&mut self, listener: Box<dyn GameListener>) {
        self.listeners.add(listener);
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Try to move the hero one cell.
    ///
    /// Only fails when generating the next floor fails; every gameplay
    /// rejection is reported through the outcome. Opening a chest moves the
    /// hero onto the chest's cell in the same step, while a monster or the
    /// boss leaves the hero where it stood.
    pub fn move_hero(&mut self, direction: Direction) -> Result<MoveOutcome, GenerationError> {
        if self.state != GameState::Exploring {
            return Ok(MoveOutcome::Unavailable);
        }

        self.hero.facing = direction.facing();
        let (dx, dy) = direction.delta();
        let target = self.position.offset(dx, dy);

        if !target.in_bounds() || self.level.is_wall(target) {
            return Ok(MoveOutcome::Blocked);
        }

        if self.level.is_monster(target) {
            return Ok(self.engage(target));
        }

        if let Some(boss) = self.level.boss_position() {
            if boss.distance(&target) <= 1 {
                return Ok(self.engage(boss));
            }
        }

        if self.level.chest_at(target).is_some_and(|c| !c.is_opened()) {
            return Ok(self.open_chest(target));
        }

        if self.level.is_exit(target) {
            if self.level.has_boss_alive() {
                log::debug!("Exit at {} is locked", target);
                return Ok(MoveOutcome::ExitLocked);
            }
            return self.descend();
        }

        self.position = target;
        Ok(MoveOutcome::Moved(target))
    }

    fn engage(&mut self, at: Position) -> MoveOutcome {
        let Some(monster) = self.level.monster_at(at) else {
            return MoveOutcome::Blocked;
        };
        if !self.combat.start_combat(monster, at) {
            return MoveOutcome::Unavailable;
        }
        self.listeners.combat_started(monster, at);
        self.state = GameState::Combat;
        MoveOutcome::CombatStarted(at)
    }

    fn open_chest(&mut self, at: Position) -> MoveOutcome {
        let Some(chest) = self.level.chest_at_mut(at) else {
            return MoveOutcome::Blocked;
        };

        let items = chest.open();
        let total = items.len();
        let taken = items
            .into_iter()
            .map(|item| self.inventory.add_item(item))
            .filter(|added| *added)
            .count();
        let lost = total - taken;
        if lost > 0 {
            log::warn!("Inventory full: {} item(s) from chest {} lost", lost, chest.id);
        }

        self.listeners.chest_opened(chest, lost > 0);
        let chest_id = chest.id;
        self.position = at;
        MoveOutcome::ChestOpened { chest_id, taken, lost }
    }

    fn descend(&mut self) -> Result<MoveOutcome, GenerationError> {
        let next = self.level.floor() + 1;
        if next >= MAX_FLOORS {
            log::info!("The hero escaped the last floor");
            self.position = self.level.exit();
            self.state = GameState::Victory;
            return Ok(MoveOutcome::Victory);
        }

        self.level = generate_with_config(next, &self.config, &mut self.loot)?;
        self.position = self.level.spawn();
        self.defeated.clear();
        log::info!("Descended to floor {}", next);
        Ok(MoveOutcome::FloorAdvanced(next))
    }

    // =========================================================================
    // Combat
    // =========================================================================

    /// Hero strikes the engaged monster
    pub fn attack(&mut self) -> CombatOutcome {
        let Some(at) = self.combat.engaged_position() else {
            return CombatOutcome::no_combat();
        };
        let Some(monster) = self.level.monster_at_mut(at) else {
            self.combat.end_combat();
            self.state = GameState::Exploring;
            return CombatOutcome::no_combat();
        };

        let outcome = self.combat.hero_attack(&mut self.hero, monster);
        if let CombatEvent::MonsterDefeated { position, level_up, .. } = &outcome.event {
            self.level.remove_monster(*position);
            self.defeated.push(*position);
            self.state = GameState::Exploring;
            if let Some(summary) = level_up {
                self.listeners.level_up(&self.hero, summary);
            }
        }
        outcome
    }

    /// Engaged monster strikes back
    pub fn enemy_turn(&mut self) -> CombatOutcome {
        let Some(at) = self.combat.engaged_position() else {
            return CombatOutcome::no_combat();
        };
        let Some(monster) = self.level.monster_at(at) else {
            self.combat.end_combat();
            self.state = GameState::Exploring;
            return CombatOutcome::no_combat();
        };

        let outcome = self.combat.enemy_turn(&mut self.hero, monster);
        if matches!(outcome.event, CombatEvent::HeroDefeated { .. }) {
            log::info!("The hero fell on floor {}", self.level.floor());
            self.state = GameState::GameOver;
        }
        outcome
    }

    // =========================================================================
    // Items and stats
    // =========================================================================

    /// Drink a potion or consume a rune
    pub fn use_item(&mut self, id: ItemId) -> bool {
        match self.inventory.use_item(id, &mut self.hero) {
            Some(used) => {
                log::debug!("Used {}", used.item.name);
                self.notify_level_up(used.level_up);
                true
            }
            None => false,
        }
    }

    pub fn equip_item(&mut self, id: ItemId) -> bool {
        self.inventory.equip_item(id, &mut self.hero)
    }

    pub fn unequip_item(&mut self, id: ItemId) -> bool {
        self.inventory.unequip_item(id, &mut self.hero)
    }

    /// Worn item in a slot
    pub fn equipped(&self, slot: EquipSlot) -> Option<&Equipment> {
        self.inventory.equipped(slot)
    }

    pub fn spend_stat_points(&mut self, stat_name: &str, amount: i32) -> bool {
        spend_stat_points(&mut self.hero, stat_name, amount)
    }

    fn notify_level_up(&mut self, level_up: Option<LevelUpSummary>) {
        if let Some(summary) = level_up {
            self.listeners.level_up(&self.hero, &summary);
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Capture everything needed to rebuild this game
    pub fn to_save_data(&self) -> SaveData {
        let mut opened_chests: Vec<Position> = self
            .level
            .chests()
            .filter(|(_, chest)| chest.is_opened())
            .map(|(pos, _)| *pos)
            .collect();
        opened_chests.sort();

        SaveData {
            version: SAVE_VERSION,
            hero: self.hero.clone(),
            inventory: self.inventory.clone(),
            floor: self.level.floor(),
            position: self.position,
            next_item_id: self.loot.next_id(),
            opened_chests,
            defeated_monsters: self.defeated.clone(),
            won: self.state == GameState::Victory,
        }
    }

    /// Rebuild a game from save data. The floor is regenerated from its
    /// index, then opened chests and defeated monsters are replayed onto it.
    pub fn from_save_data(
        data: SaveData,
        config: GameConfig,
        mut loot: LootFactory,
    ) -> Result<Self, SaveError> {
        data.validate()?;

        // Ids handed out by the regenerated floor must not collide with carried items
        loot.set_next_id(data.next_item_id);
        let mut level = generate_with_config(data.floor, &config, &mut loot)
            .map_err(|e| SaveError::InvalidData(e.to_string()))?;

        for pos in &data.opened_chests {
            if let Some(chest) = level.chest_at_mut(*pos) {
                chest.open();
            }
        }
        for pos in &data.defeated_monsters {
            level.remove_monster(*pos);
        }

        let mut game = Self::from_parts(data.hero, data.inventory, level, loot, config);
        game.defeated = data.defeated_monsters;
        if game.level.is_wall(data.position) || game.level.is_monster(data.position) {
            log::warn!("Saved position {} is blocked, using spawn", data.position);
        } else {
            game.position = data.position;
        }
        if data.won && !game.hero.is_dead() {
            game.state = GameState::Victory;
        }

        log::info!("Restored game on floor {}", game.floor());
        Ok(game)
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("floor", &self.level.floor())
            .field("position", &self.position)
            .field("hero", &self.hero)
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Chest, Monster, MonsterKind};
    use crate::items::{ItemKind, RuneKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every event it sees
    #[derive(Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl GameListener for Recorder {
        fn on_combat_started(&mut self, monster: &Monster, position: Position) {
            self.events.borrow_mut().push(format!("combat {} {}", monster.name(), position));
        }

        fn on_chest_opened(&mut self, chest: &Chest, inventory_full: bool) {
            let items = chest.items().len();
            self.events
                .borrow_mut()
                .push(format!("chest {} {} {}", chest.id, items, inventory_full));
        }

        fn on_level_up(&mut self, _hero: &Hero, summary: &LevelUpSummary) {
            self.events.borrow_mut().push(format!("level {}", summary.to_level));
        }
    }

    /// A walled 30x30 floor with spawn at (1,1) and the exit at (5,1)
    fn small_level(floor: u32) -> Level {
        let mut level = Level::new(floor, Position::new(1, 1), Position::new(5, 1));
        level.add_border_walls();
        level
    }

    fn game_on(level: Level) -> (Game, Rc<RefCell<Vec<String>>>) {
        let mut loot = LootFactory::seeded(3);
        loot.set_next_id(1000);
        let mut game = Game::from_parts(
            Hero::new(HeroClass::Warrior),
            Inventory::new(),
            level,
            loot,
            GameConfig::default(),
        );
        let events = Rc::new(RefCell::new(Vec::new()));
        game.add_listener(Box::new(Recorder { events: events.clone() }));
        (game, events)
    }

    fn fight_to_the_end(game: &mut Game) {
        while game.state() == GameState::Combat {
            game.attack();
            if game.state() == GameState::Combat {
                game.enemy_turn();
            }
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::with_seed(HeroClass::Mage, 7).expect("game starts");
        assert_eq!(game.state(), GameState::Exploring);
        assert_eq!(game.floor(), 0);
        assert_eq!(game.position(), game.level().spawn());
        assert_eq!(game.inventory().len(), 1);

        let weapon = &game.inventory().items()[0];
        assert_eq!(weapon.rarity, Rarity::Common);
        assert!(matches!(weapon.kind, ItemKind::Weapon(_)));
    }

    #[test]
    fn test_walls_block_and_facing_updates() {
        let (mut game, _) = game_on(small_level(0));

        assert_eq!(game.move_hero(Direction::Up).ok(), Some(MoveOutcome::Blocked));
        assert_eq!(game.hero().facing, Facing::Back);
        assert_eq!(game.position(), Position::new(1, 1));

        assert_eq!(game.move_hero(Direction::Left).ok(), Some(MoveOutcome::Blocked));
        assert_eq!(game.hero().facing, Facing::Left);

        assert_eq!(
            game.move_hero(Direction::Down).ok(),
            Some(MoveOutcome::Moved(Position::new(1, 2)))
        );
        assert_eq!(game.hero().facing, Facing::Front);
    }

    #[test]
    fn test_monster_starts_combat_without_moving() {
        let mut level = small_level(0);
        level.place_monster(Position::new(2, 1), Monster::new(MonsterKind::Small, 0));
        let (mut game, events) = game_on(level);

        let outcome = game.move_hero(Direction::Right).ok();
        assert_eq!(outcome, Some(MoveOutcome::CombatStarted(Position::new(2, 1))));
        assert_eq!(game.position(), Position::new(1, 1));
        assert_eq!(game.state(), GameState::Combat);
        assert_eq!(events.borrow().as_slice(), ["combat small monster (2, 1)"]);

        // No walking away mid-fight
        assert_eq!(game.move_hero(Direction::Down).ok(), Some(MoveOutcome::Unavailable));
    }

    #[test]
    fn test_defeated_monster_leaves_level() {
        let mut level = small_level(0);
        level.place_monster(Position::new(2, 1), Monster::new(MonsterKind::Small, 0));
        let (mut game, _) = game_on(level);

        game.move_hero(Direction::Right).ok();
        fight_to_the_end(&mut game);

        assert_eq!(game.state(), GameState::Exploring);
        assert!(!game.level().is_monster(Position::new(2, 1)));
        assert_eq!(game.hero().experience(), 50);
        assert_eq!(game.hero().health.current, 5);
        assert_eq!(
            game.move_hero(Direction::Right).ok(),
            Some(MoveOutcome::Moved(Position::new(2, 1)))
        );
    }

    #[test]
    fn test_kill_fires_level_up() {
        let mut level = small_level(9);
        let mut boss = Monster::new(MonsterKind::Boss, 9);
        boss.health.current = 1;
        level.place_monster(Position::new(2, 1), boss);
        let (mut game, events) = game_on(level);

        game.move_hero(Direction::Right).ok();
        let outcome = game.attack();
        assert_eq!(outcome.xp_awarded(), Some(700));
        assert!(events.borrow().contains(&"level 3".to_string()));
    }

    #[test]
    fn test_hero_death_ends_game() {
        let mut level = small_level(9);
        level.place_monster(Position::new(2, 1), Monster::new(MonsterKind::Boss, 9));
        let (mut game, _) = game_on(level);

        game.move_hero(Direction::Right).ok();
        fight_to_the_end(&mut game);

        assert_eq!(game.state(), GameState::GameOver);
        assert!(game.hero().is_dead());
        assert!(game.is_over());
        assert_eq!(game.move_hero(Direction::Down).ok(), Some(MoveOutcome::Unavailable));
    }

    #[test]
    fn test_boss_adjacent_to_target_starts_combat() {
        let mut level = small_level(0);
        level.place_monster(Position::new(3, 2), Monster::new(MonsterKind::Boss, 0));
        let (mut game, events) = game_on(level);

        // (2,1) is next to (2,2), which is next to the boss
        assert_eq!(
            game.move_hero(Direction::Right).ok(),
            Some(MoveOutcome::Moved(Position::new(2, 1)))
        );
        let outcome = game.move_hero(Direction::Down).ok();
        assert_eq!(outcome, Some(MoveOutcome::CombatStarted(Position::new(3, 2))));
        assert_eq!(game.position(), Position::new(2, 1));
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_chest_is_opened_and_stepped_on() {
        let mut level = small_level(0);
        let mut loot = LootFactory::seeded(1);
        let items = vec![loot.create_potion(), loot.create_rune(RuneKind::Force, 5)];
        level.place_chest(Position::new(1, 2), Chest::new(4, items));
        let (mut game, events) = game_on(level);

        let outcome = game.move_hero(Direction::Down).ok();
        assert_eq!(outcome, Some(MoveOutcome::ChestOpened { chest_id: 4, taken: 2, lost: 0 }));
        assert_eq!(game.position(), Position::new(1, 2));
        assert_eq!(game.inventory().len(), 2);
        assert_eq!(events.borrow().as_slice(), ["chest 4 2 false"]);

        // Opened chests are plain floor afterwards
        game.move_hero(Direction::Up).ok();
        assert_eq!(
            game.move_hero(Direction::Down).ok(),
            Some(MoveOutcome::Moved(Position::new(1, 2)))
        );
        assert_eq!(game.inventory().len(), 2);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_chest_overflow_is_lost() {
        let mut level = small_level(0);
        let mut loot = LootFactory::seeded(1);
        let items = vec![loot.create_potion(), loot.create_potion()];
        level.place_chest(Position::new(1, 2), Chest::new(1, items));

        let (mut game, events) = game_on(level);
        game.inventory = Inventory::with_capacity(1);

        let outcome = game.move_hero(Direction::Down).ok();
        assert_eq!(outcome, Some(MoveOutcome::ChestOpened { chest_id: 1, taken: 1, lost: 1 }));
        assert_eq!(game.inventory().len(), 1);
        assert_eq!(events.borrow().as_slice(), ["chest 1 2 true"]);
    }

    #[test]
    fn test_chest_listener_sees_contents() {
        let mut level = small_level(0);
        let mut loot = LootFactory::seeded(1);
        let items = vec![loot.create_potion(), loot.create_rune(RuneKind::Wisdom, 3)];
        let ids: Vec<ItemId> = items.iter().map(|i| i.id).collect();
        level.place_chest(Position::new(1, 2), Chest::new(9, items));
        let (mut game, events) = game_on(level);

        game.move_hero(Direction::Down).ok();
        assert_eq!(events.borrow().as_slice(), ["chest 9 2 false"]);

        // The chest keeps a record of what it held
        let chest = game.level().chest_at(Position::new(1, 2)).expect("chest stays on the floor");
        assert!(chest.is_opened());
        let kept: Vec<ItemId> = chest.items().iter().map(|i| i.id).collect();
        assert_eq!(kept, ids);
        assert!(ids.iter().all(|id| game.inventory().contains(*id)));
    }

    #[test]
    fn test_exit_locked_while_boss_lives() {
        let mut level = small_level(0);
        level.place_monster(Position::new(20, 20), Monster::new(MonsterKind::Boss, 0));
        let (mut game, _) = game_on(level);
        game.position = Position::new(4, 1);

        assert_eq!(game.move_hero(Direction::Right).ok(), Some(MoveOutcome::ExitLocked));
        assert_eq!(game.position(), Position::new(4, 1));

        game.level.remove_monster(Position::new(20, 20));
        assert_eq!(game.move_hero(Direction::Right).ok(), Some(MoveOutcome::FloorAdvanced(1)));
        assert_eq!(game.floor(), 1);
        assert_eq!(game.position(), game.level().spawn());
    }

    #[test]
    fn test_last_exit_wins() {
        let (mut game, _) = game_on(small_level(MAX_FLOORS - 1));
        game.position = Position::new(4, 1);

        assert_eq!(game.move_hero(Direction::Right).ok(), Some(MoveOutcome::Victory));
        assert_eq!(game.state(), GameState::Victory);
        assert!(game.is_over());
        assert_eq!(game.move_hero(Direction::Left).ok(), Some(MoveOutcome::Unavailable));
    }

    #[test]
    fn test_items_and_stats() {
        let (mut game, events) = game_on(small_level(0));
        let mut loot = LootFactory::seeded(5);
        let weapon = loot.create_weapon(HeroClass::Warrior, 1, Rarity::Common);
        let weapon_id = weapon.id;
        let rune = loot.create_rune(RuneKind::Experience, 500);
        let rune_id = rune.id;
        game.inventory.add_item(weapon);
        game.inventory.add_item(rune);

        assert!(game.equip_item(weapon_id));
        assert!(game.equipped(EquipSlot::Weapon).is_some());
        assert!(game.hero().damage > 0);
        assert!(game.unequip_item(weapon_id));
        assert_eq!(game.hero().damage, 0);

        assert!(game.use_item(rune_id));
        assert_eq!(game.hero().level(), 2);
        assert_eq!(events.borrow().as_slice(), ["level 2"]);

        assert!(game.spend_stat_points("force", 5));
        assert!(!game.spend_stat_points("luck", 1));
        assert!(!game.use_item(rune_id));
    }

    #[test]
    fn test_save_data_round_trip() {
        let mut game = Game::with_seed(HeroClass::Archer, 11).expect("game starts");
        game.move_hero(Direction::Down).ok();
        let data = game.to_save_data();
        assert_eq!(data.version, SAVE_VERSION);
        assert_eq!(data.floor, 0);

        let restored =
            Game::from_save_data(data.clone(), GameConfig::default(), LootFactory::seeded(11))
                .expect("save restores");
        assert_eq!(restored.hero(), game.hero());
        assert_eq!(restored.inventory(), game.inventory());
        assert_eq!(restored.position(), game.position());
        assert_eq!(restored.floor(), 0);
        assert!(restored.to_save_data().next_item_id >= data.next_item_id);
    }

    #[test]
    fn test_restore_replays_floor_progress() {
        let mut game = Game::with_seed(HeroClass::Warrior, 2).expect("game starts");
        let chest = game.level().chests().map(|(p, _)| *p).min().expect("floor 0 has chests");
        let monster = game.level().monsters().map(|(p, _)| *p).min().expect("floor 0 has a boss");
        if let Some(c) = game.level.chest_at_mut(chest) {
            c.open();
        }
        game.level.remove_monster(monster);
        game.defeated.push(monster);

        let data = game.to_save_data();
        let restored = Game::from_save_data(data, GameConfig::default(), LootFactory::seeded(2))
            .expect("save restores");
        assert!(restored.level().chest_at(chest).is_some_and(|c| c.is_opened()));
        assert!(!restored.level().is_monster(monster));
    }
}
