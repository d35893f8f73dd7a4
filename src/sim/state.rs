//! Game state and core simulation types
//!
//! The session owns every entity. Enemies and collectibles live in the
//! current level; projectiles live on the session.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::level::Level;
use super::pool::Pool;
use super::tick::TickInput;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only restart/quit are accepted
    GameOver { outcome: Outcome },
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Lives exhausted
    Eliminated,
    /// Final level's boss defeated
    Victory,
}

/// Result of damaging the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerDamage {
    /// Health dropped but stayed positive
    Hit,
    /// Health ran out; a life was spent and the player respawned
    LifeLost,
    /// Health ran out on the last life
    Eliminated,
}

/// Result of damaging an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyDamage {
    Hit,
    Died,
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub bounds: Aabb,
    /// Horizontal speed (units per frame)
    pub speed: f32,
    /// Vertical velocity (positive is down)
    pub velocity_y: f32,
    pub jumping: bool,
    pub health: i32,
    pub lives: u32,
    /// Frames until the next shot is allowed
    pub shoot_cooldown: u32,
    /// Frames of remaining contact immunity
    pub contact_cooldown: u32,
    /// Bottom-center respawn point
    spawn: Vec2,
}

impl Player {
    pub fn new(settings: &Settings) -> Self {
        let spawn = Vec2::new(PLAYER_SPAWN_X, settings.ground_line());
        Self {
            bounds: Aabb::from_midbottom(spawn, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)),
            speed: PLAYER_SPEED,
            velocity_y: 0.0,
            jumping: false,
            health: PLAYER_MAX_HEALTH,
            lives: settings.starting_lives,
            shoot_cooldown: 0,
            contact_cooldown: 0,
            spawn,
        }
    }

    /// Advance one frame from held keys. Returns true if a jump started.
    pub fn update(&mut self, input: &TickInput, settings: &Settings) -> bool {
        if input.left {
            self.bounds.pos.x -= self.speed;
        }
        if input.right {
            self.bounds.pos.x += self.speed;
        }
        self.bounds.clamp_horizontal(settings.screen_width);

        self.velocity_y += GRAVITY;
        self.bounds.pos.y += self.velocity_y;
        let ground = settings.ground_line();
        if self.bounds.bottom() > ground {
            self.bounds.set_bottom(ground);
            self.jumping = false;
            self.velocity_y = 0.0;
        }

        // Checked after landing, so a held key re-jumps on touchdown
        let jumped = input.jump && !self.jumping;
        if jumped {
            self.velocity_y = JUMP_VELOCITY;
            self.jumping = true;
        }

        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
        self.contact_cooldown = self.contact_cooldown.saturating_sub(1);
        jumped
    }

    /// Fire from the right-center edge if the cooldown has elapsed
    pub fn shoot(&mut self) -> Option<Projectile> {
        if self.shoot_cooldown > 0 {
            return None;
        }
        self.shoot_cooldown = SHOOT_COOLDOWN_FRAMES;
        Some(Projectile::new(self.bounds.midright()))
    }

    pub fn take_damage(&mut self, amount: i32) -> PlayerDamage {
        self.health -= amount;
        if self.health > 0 {
            return PlayerDamage::Hit;
        }
        self.lives = self.lives.saturating_sub(1);
        self.health = PLAYER_MAX_HEALTH;
        self.respawn();
        if self.lives == 0 {
            PlayerDamage::Eliminated
        } else {
            PlayerDamage::LifeLost
        }
    }

    /// Restore health, capped at the maximum
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(PLAYER_MAX_HEALTH);
    }

    pub fn respawn(&mut self) {
        self.bounds.set_midbottom(self.spawn);
        self.velocity_y = 0.0;
        self.jumping = false;
    }

    pub fn spawn_point(&self) -> Vec2 {
        self.spawn
    }
}

/// A rightward-moving shot
#[derive(Debug, Clone)]
pub struct Projectile {
    pub bounds: Aabb,
    pub speed: f32,
    pub damage: i32,
}

impl Projectile {
    pub fn new(center: Vec2) -> Self {
        Self {
            bounds: Aabb::from_center(center, Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT)),
            speed: PROJECTILE_SPEED,
            damage: PROJECTILE_DAMAGE,
        }
    }

    pub fn update(&mut self) {
        self.bounds.pos.x += self.speed;
    }

    /// True once the shot has fully left the right edge
    pub fn is_offscreen(&self, screen_width: f32) -> bool {
        self.bounds.left() > screen_width
    }
}

/// Enemy variants; behavior is shared, only attributes differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Normal,
    Boss,
}

impl EnemyKind {
    pub fn size(self) -> Vec2 {
        match self {
            EnemyKind::Normal => Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            EnemyKind::Boss => Vec2::new(BOSS_WIDTH, BOSS_HEIGHT),
        }
    }

    pub fn max_health(self) -> i32 {
        match self {
            EnemyKind::Normal => ENEMY_HEALTH,
            EnemyKind::Boss => BOSS_HEALTH,
        }
    }

    pub fn speed(self) -> f32 {
        match self {
            EnemyKind::Normal => ENEMY_SPEED,
            EnemyKind::Boss => BOSS_SPEED,
        }
    }

    /// Score awarded for a kill
    pub fn score(self) -> u64 {
        match self {
            EnemyKind::Normal => SCORE_ENEMY,
            EnemyKind::Boss => SCORE_BOSS,
        }
    }
}

/// A patrolling enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub bounds: Aabb,
    pub health: i32,
    pub speed: f32,
    /// -1.0 (left) or 1.0 (right)
    pub direction: f32,
}

impl Enemy {
    /// Enemy standing with its bottom edge centered on `anchor`
    pub fn new(kind: EnemyKind, anchor: Vec2) -> Self {
        Self {
            kind,
            bounds: Aabb::from_midbottom(anchor, kind.size()),
            health: kind.max_health(),
            speed: kind.speed(),
            direction: -1.0,
        }
    }

    pub fn is_boss(&self) -> bool {
        self.kind == EnemyKind::Boss
    }

    /// Patrol one step, turning around at either screen edge
    pub fn update(&mut self, screen_width: f32) {
        self.bounds.pos.x += self.speed * self.direction;
        if self.bounds.left() < 0.0 || self.bounds.right() > screen_width {
            self.direction = -self.direction;
        }
    }

    /// Caller removes the enemy on `Died` and must not damage it again
    pub fn take_damage(&mut self, amount: i32) -> EnemyDamage {
        debug_assert!(self.health > 0, "damage applied to a dead enemy");
        self.health -= amount;
        if self.health <= 0 {
            EnemyDamage::Died
        } else {
            EnemyDamage::Hit
        }
    }
}

/// Pickup variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    /// Heals 30 (capped)
    Health,
    /// One extra life
    Life,
}

impl CollectibleKind {
    pub fn score(self) -> u64 {
        match self {
            CollectibleKind::Health => SCORE_HEALTH_PICKUP,
            CollectibleKind::Life => SCORE_LIFE_PICKUP,
        }
    }
}

/// A static single-use pickup
#[derive(Debug, Clone)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub bounds: Aabb,
}

impl Collectible {
    pub fn new(kind: CollectibleKind, center: Vec2) -> Self {
        Self {
            kind,
            bounds: Aabb::from_center(center, Vec2::splat(COLLECTIBLE_SIZE)),
        }
    }

    /// Apply this pickup to the player, returning the score it awards
    pub fn apply(&self, player: &mut Player) -> u64 {
        match self.kind {
            CollectibleKind::Health => player.heal(HEAL_AMOUNT),
            CollectibleKind::Life => player.lives += 1,
        }
        self.kind.score()
    }
}

/// Things that happened during one tick (for audio and UI feedback)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    Shot,
    Jumped,
    EnemyHit { kind: EnemyKind, health: i32 },
    EnemyKilled { kind: EnemyKind, points: u64 },
    PlayerHit { damage: i32, health: i32 },
    LifeLost { lives: u32 },
    Pickup { kind: CollectibleKind, points: u64 },
    BossSpawned { level: u32 },
    LevelStarted { level: u32 },
    GameOver { outcome: Outcome, score: u64 },
}

/// One run of the game, from spawn to a terminal outcome
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation frame counter
    pub frame: u64,
    pub score: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub projectiles: Pool<Projectile>,
    pub level: Level,
    /// Events recorded by the most recent tick
    pub events: Vec<GameEvent>,
}

impl Session {
    /// Start a run at level 1
    ///
    /// Panics if `settings` fails validation.
    pub fn new(settings: Settings, seed: u64) -> Self {
        if let Err(e) = settings.validate() {
            panic!("invalid settings: {e}");
        }
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = Level::new(1, &settings, &mut rng);
        let player = Player::new(&settings);
        log::info!("Session started (seed {seed}), level 1");

        Self {
            settings,
            seed,
            rng,
            frame: 0,
            score: 0,
            phase: GamePhase::Playing,
            player,
            projectiles: Pool::new(),
            level,
            events: Vec::new(),
        }
    }

    pub fn current_level(&self) -> u32 {
        self.level.number
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::GameOver { outcome } => Some(outcome),
            GamePhase::Playing => None,
        }
    }

    /// Enter the terminal phase (first outcome wins)
    pub fn end(&mut self, outcome: Outcome) {
        if self.is_game_over() {
            return;
        }
        self.phase = GamePhase::GameOver { outcome };
        self.events.push(GameEvent::GameOver {
            outcome,
            score: self.score,
        });
        log::info!(
            "Game over ({outcome:?}) at level {} with score {}",
            self.level.number,
            self.score
        );
    }

    /// Drop dead entity slots (end of tick)
    pub fn compact(&mut self) {
        self.projectiles.compact();
        self.level.enemies.compact();
        self.level.collectibles.compact();
    }
}
