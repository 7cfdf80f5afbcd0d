//! Gloomwell - Entry Point
//!
//! Runs a headless autoplay of the campaign: the hero walks to every chest,
//! fights whatever stands in the way, wears the best gear it finds, then
//! takes on the boss and the exit.
//!
//! Usage: `gloomwell [warrior|archer|mage] [seed]`

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

use gloomwell::combat::CombatEvent;
use gloomwell::data::{GameConfig, DEFAULT_CONFIG_PATH};
use gloomwell::entities::{Chest, Hero, HeroClass, Monster};
use gloomwell::game::{Direction, Game, GameListener, GameState, MoveOutcome};
use gloomwell::items::{Equipment, ItemId, ItemKind, LootFactory};
use gloomwell::progression::LevelUpSummary;
use gloomwell::save::list_saves;
use gloomwell::world::{shortest_path, Position};

/// Upper bound on actions before the run is called off
const MAX_ACTIONS: u32 = 100_000;

/// Drink a potion below this share of max health
const POTION_THRESHOLD: f32 = 0.5;

/// Logs every game event
struct LogListener;

impl GameListener for LogListener {
    fn on_combat_started(&mut self, monster: &Monster, position: Position) {
        log::info!(
            "Fight: {} at {} ({} HP, {} damage)",
            monster.name(),
            position,
            monster.health.current,
            monster.damage
        );
    }

    fn on_chest_opened(&mut self, chest: &Chest, inventory_full: bool) {
        if inventory_full {
            log::info!("Opened chest {}, but the pack was full", chest.id);
        } else {
            log::info!("Opened chest {}", chest.id);
        }
    }

    fn on_level_up(&mut self, hero: &Hero, summary: &LevelUpSummary) {
        log::info!(
            "Level up: {} -> {} ({} HP, {} stat points)",
            summary.from_level,
            summary.to_level,
            hero.health.max,
            hero.stat_points()
        );
    }
}

fn main() -> Result<()> {
    // Initialize logging to file, falling back to stderr
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Ok(log_file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("gloomwell.log")
    {
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    builder.init();

    log::info!("Starting Gloomwell v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let class: HeroClass = match args.next() {
        Some(arg) => arg.parse().map_err(anyhow::Error::msg)?,
        None => HeroClass::Warrior,
    };
    let loot = match args.next() {
        Some(arg) => {
            let seed: u64 = arg.parse().with_context(|| format!("invalid seed: {}", arg))?;
            LootFactory::seeded(seed)
        }
        None => LootFactory::new(),
    };

    let config = GameConfig::load(Path::new(DEFAULT_CONFIG_PATH));
    for (slot, summary) in list_saves(config.save_slots) {
        if let Some(summary) = summary {
            log::info!(
                "Slot {}: level {} {} on floor {}",
                slot,
                summary.level,
                summary.class.name(),
                summary.floor
            );
        }
    }
    let mut game = Game::with_config(class, config, loot).context("failed to generate floor 0")?;
    game.add_listener(Box::new(LogListener));

    let actions = autoplay(&mut game)?;

    let hero = game.hero();
    let result = match game.state() {
        GameState::Victory => "escaped the dungeon",
        GameState::GameOver => "fell in the dark",
        _ => "gave up",
    };
    println!(
        "The {} {} on floor {} after {} actions (level {}, {} XP, {}/{} HP).",
        class.name(),
        result,
        game.floor(),
        actions,
        hero.level(),
        hero.experience(),
        hero.health.current,
        hero.health.max
    );
    log::info!("Gloomwell shut down cleanly");
    Ok(())
}

/// Play until the campaign ends. Returns the number of actions taken.
fn autoplay(game: &mut Game) -> Result<u32> {
    for action in 0..MAX_ACTIONS {
        match game.state() {
            GameState::GameOver | GameState::Victory => return Ok(action),
            GameState::Combat => {
                fight_round(game);
                continue;
            }
            GameState::Exploring => {}
        }

        tend_inventory(game);

        let Some(direction) = next_step(game) else {
            log::warn!("No path forward from {}", game.position());
            return Ok(action);
        };
        match game.move_hero(direction)? {
            MoveOutcome::FloorAdvanced(floor) => log::info!("Reached floor {}", floor),
            MoveOutcome::Victory => log::info!("Victory!"),
            MoveOutcome::ChestOpened { taken, lost, .. } => {
                log::debug!("Took {} item(s), lost {}", taken, lost)
            }
            MoveOutcome::ExitLocked => log::debug!("Exit locked"),
            _ => {}
        }
    }

    log::warn!("Stopped after {} actions", MAX_ACTIONS);
    Ok(MAX_ACTIONS)
}

/// One exchange of blows, drinking a potion first if hurt
fn fight_round(game: &mut Game) {
    drink_if_hurt(game);

    let outcome = game.attack();
    log::debug!("{}", outcome.message);
    if let CombatEvent::MonsterDefeated { xp, .. } = outcome.event {
        log::info!("Victory in combat, +{} XP", xp);
        return;
    }
    if game.state() == GameState::Combat {
        let outcome = game.enemy_turn();
        log::debug!("{}", outcome.message);
    }
}

fn drink_if_hurt(game: &mut Game) {
    let health = game.hero().health;
    if (health.current as f32) >= health.max as f32 * POTION_THRESHOLD {
        return;
    }
    let potion = game.inventory().find(|i| i.is_potion()).map(|i| i.id);
    if let Some(id) = potion {
        game.use_item(id);
    }
}

/// Rough worth of an item for the hero's class
fn score(item: &Equipment, game: &Game) -> i32 {
    let class = game.hero().class;
    item.damage_for(class) * 3
        + item.health
        + item.resistance * 2
        + item.force
        + item.agility
        + item.wisdom
        + item.stat_bonus * 3
}

/// Consume runes, heal up, and wear anything better than what is worn
fn tend_inventory(game: &mut Game) {
    let runes: Vec<ItemId> = game
        .inventory()
        .items()
        .iter()
        .filter(|i| matches!(i.kind, ItemKind::Rune(_)))
        .map(|i| i.id)
        .collect();
    for id in runes {
        game.use_item(id);
    }

    drink_if_hurt(game);

    let upgrades: Vec<ItemId> = game
        .inventory()
        .items()
        .iter()
        .filter_map(|item| {
            let slot = item.equip_slot()?;
            let better = match game.equipped(slot) {
                Some(worn) => score(item, game) > score(worn, game),
                None => true,
            };
            better.then_some(item.id)
        })
        .collect();
    for id in upgrades {
        // An earlier upgrade may already have filled the slot with something better
        let still_better = match game.inventory().get(id) {
            Some(item) => match item.equip_slot().and_then(|slot| game.equipped(slot)) {
                Some(worn) => score(item, game) > score(worn, game),
                None => true,
            },
            None => false,
        };
        if still_better && game.equip_item(id) {
            log::debug!("Equipped item {}", id);
        }
    }

    let class = game.hero().class;
    let points = game.hero().stat_points();
    if points > 0 {
        game.spend_stat_points(class.primary_stat().name(), points);
    }
}

/// First step toward the nearest unopened chest, then the boss, then the exit
fn next_step(game: &Game) -> Option<Direction> {
    let level = game.level();
    let from = game.position();

    let mut targets: Vec<Position> = level
        .chests()
        .filter(|(_, chest)| !chest.is_opened())
        .map(|(pos, _)| *pos)
        .collect();
    targets.sort_by_key(|pos| (pos.distance(&from), pos.y, pos.x));
    targets.extend(level.boss_position());
    targets.push(level.exit());

    // Stepping on the exit leaves the floor, so only the exit itself may route over it
    let exit = level.exit();
    targets
        .into_iter()
        .filter_map(|target| {
            let path = shortest_path(level, from, target)?;
            (target == exit || !path.contains(&exit)).then_some(path)
        })
        .find_map(|path| path.first().and_then(|&step| Direction::between(from, step)))
}
