//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no sub-stepping
//! - Seeded RNG only
//! - Stable iteration order (pool slot order)
//! - No rendering, audio or input-device dependencies

pub mod aabb;
pub mod collision;
pub mod level;
pub mod pool;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{Bounded, first_overlap, knockback_offset, overlapping};
pub use level::{Level, LevelPhase, Progress, wave_size};
pub use pool::Pool;
pub use snapshot::{CollectibleView, EnemyView, PlayerView, Snapshot, build_snapshot};
pub use state::{
    Collectible, CollectibleKind, Enemy, EnemyDamage, EnemyKind, GameEvent, GamePhase, Outcome,
    Player, PlayerDamage, Projectile, Session,
};
pub use tick::{
    TickInput, evaluate_progression, resolve_collisions, resolve_enemy_contacts, resolve_pickups,
    resolve_projectile_hits, tick,
};
