//! Level construction and boss progression
//!
//! A level starts with a wave of normal enemies. Once the wave is gone the
//! boss appears; once the boss is gone the level is cleared and the session
//! decides what comes next.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pool::Pool;
use super::state::{Collectible, CollectibleKind, Enemy, EnemyKind};
use crate::consts::*;
use crate::settings::Settings;

/// Where a level is in its spawn/progression cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelPhase {
    /// Normal enemies present, boss not yet spawned
    Populating,
    /// Wave cleared, boss not yet spawned
    BossPending,
    /// Boss present
    BossActive,
    /// Boss defeated
    Cleared,
}

/// What a progression check did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Unchanged,
    BossSpawned,
    Cleared,
}

/// One level's enemies and pickups
#[derive(Debug, Clone)]
pub struct Level {
    pub number: u32,
    pub enemies: Pool<Enemy>,
    pub collectibles: Pool<Collectible>,
    pub boss_spawned: bool,
}

/// Normal enemies in the opening wave of `level`
pub fn wave_size(level: u32) -> usize {
    WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_LEVEL * level as usize
}

impl Level {
    /// Build level `number` (1-based) with its wave and pickups
    ///
    /// Panics if `number` is 0.
    pub fn new(number: u32, settings: &Settings, rng: &mut impl Rng) -> Self {
        assert!(number >= 1, "level numbers start at 1, got {number}");

        let ground = settings.ground_line();
        let (min_x, max_x) = settings.enemy_spawn_x();
        let count = wave_size(number);
        let mut enemies = Pool::with_capacity(count + 1);
        for _ in 0..count {
            let x = rng.random_range(min_x..=max_x) as f32;
            enemies.push(Enemy::new(EnemyKind::Normal, Vec2::new(x, ground)));
        }

        let (min_x, max_x) = settings.collectible_spawn_x();
        let (min_y, max_y) = settings.collectible_spawn_y();
        let collectibles: Pool<Collectible> = (0..COLLECTIBLES_PER_LEVEL)
            .map(|_| {
                let kind = if rng.random_bool(0.5) {
                    CollectibleKind::Health
                } else {
                    CollectibleKind::Life
                };
                let x = rng.random_range(min_x..=max_x) as f32;
                let y = rng.random_range(min_y..=max_y) as f32;
                Collectible::new(kind, Vec2::new(x, y))
            })
            .collect();

        log::info!("Level {number}: {count} enemies");

        Self {
            number,
            enemies,
            collectibles,
            boss_spawned: false,
        }
    }

    pub fn phase(&self) -> LevelPhase {
        match (self.boss_spawned, self.enemies.is_empty()) {
            (false, false) => LevelPhase::Populating,
            (false, true) => LevelPhase::BossPending,
            (true, false) => LevelPhase::BossActive,
            (true, true) => LevelPhase::Cleared,
        }
    }

    /// Bottom-center point where the boss appears
    pub fn boss_spawn_point(settings: &Settings) -> Vec2 {
        Vec2::new(
            settings.screen_width - BOSS_SPAWN_INSET,
            settings.ground_line(),
        )
    }

    pub fn spawn_boss(&mut self, settings: &Settings) {
        debug_assert!(!self.boss_spawned, "boss already spawned");
        self.enemies
            .push(Enemy::new(EnemyKind::Boss, Self::boss_spawn_point(settings)));
        self.boss_spawned = true;
        log::info!("Level {}: boss spawned", self.number);
    }

    /// Live boss, if any
    pub fn boss(&self) -> Option<&Enemy> {
        self.enemies.values().find(|e| e.is_boss())
    }

    /// Apply the wave-cleared progression rule
    ///
    /// An empty wave spawns the boss exactly once; an empty level after the
    /// boss has spawned is cleared.
    pub fn advance(&mut self, settings: &Settings) -> Progress {
        match self.phase() {
            LevelPhase::BossPending => {
                self.spawn_boss(settings);
                Progress::BossSpawned
            }
            LevelPhase::Cleared => Progress::Cleared,
            LevelPhase::Populating | LevelPhase::BossActive => Progress::Unchanged,
        }
    }
}
