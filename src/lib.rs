//! Side Shooter - simulation core for a 2D side-scrolling arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, levels, scoring)
//! - `game`: Frame driver (restart/quit handling around a session)
//! - `settings`: Immutable playfield configuration
//! - `audio`: Audio cue mapping for an external sound backend

pub mod audio;
pub mod game;
pub mod settings;
pub mod sim;

pub use game::{Game, LoopControl};
pub use settings::{Settings, SettingsError};

/// Game tuning constants
pub mod consts {
    /// Player box size
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Horizontal speed (units per frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Spawn point (x of the box's bottom center)
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -15.0;
    /// Downward acceleration (units per frame²)
    pub const GRAVITY: f32 = 0.8;
    /// Frames between shots
    pub const SHOOT_COOLDOWN_FRAMES: u32 = 20;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_DAMAGE: i32 = 25;

    /// Normal enemy defaults
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 50.0;
    pub const ENEMY_HEALTH: i32 = 50;
    pub const ENEMY_SPEED: f32 = 3.0;

    /// Boss defaults
    pub const BOSS_WIDTH: f32 = 80.0;
    pub const BOSS_HEIGHT: f32 = 100.0;
    pub const BOSS_HEALTH: i32 = 200;
    pub const BOSS_SPEED: f32 = 2.0;
    /// Boss spawns this far left of the right screen edge
    pub const BOSS_SPAWN_INSET: f32 = 100.0;

    /// Contact damage dealt to the player per overlapping enemy
    pub const CONTACT_DAMAGE: i32 = 10;
    /// Knockback distance on enemy contact
    pub const KNOCKBACK: f32 = 20.0;

    /// Collectible defaults
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const COLLECTIBLES_PER_LEVEL: usize = 3;
    pub const HEAL_AMOUNT: i32 = 30;

    /// Score awards
    pub const SCORE_ENEMY: u64 = 100;
    pub const SCORE_BOSS: u64 = 500;
    pub const SCORE_HEALTH_PICKUP: u64 = 50;
    pub const SCORE_LIFE_PICKUP: u64 = 100;

    /// Spawn ranges (distances measured from the left edge, or from the
    /// right edge / ground line where noted)
    pub const ENEMY_SPAWN_MIN_X: i32 = 400;
    pub const COLLECTIBLE_SPAWN_MIN_X: i32 = 200;
    pub const COLLECTIBLE_SPAWN_MIN_Y: i32 = 100;
    /// Margin kept from the right edge (and above the ground for pickups)
    pub const SPAWN_EDGE_MARGIN: i32 = 50;

    /// Normal enemies per wave: BASE + PER_LEVEL * level
    pub const WAVE_BASE_ENEMIES: usize = 5;
    pub const WAVE_ENEMIES_PER_LEVEL: usize = 2;
}
