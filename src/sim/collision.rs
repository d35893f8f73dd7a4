//! Overlap queries between entity boxes
//!
//! Queries never mutate; they return pool indices so the caller can apply
//! damage, removal and scoring in a stable order. An empty result is a no-op.

use super::aabb::Aabb;
use super::pool::Pool;
use super::state::{Collectible, Enemy, Player, Projectile};
use crate::consts::KNOCKBACK;

/// Anything with a collision box
pub trait Bounded {
    fn bounds(&self) -> &Aabb;
}

impl Bounded for Player {
    fn bounds(&self) -> &Aabb {
        &self.bounds
    }
}

impl Bounded for Projectile {
    fn bounds(&self) -> &Aabb {
        &self.bounds
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> &Aabb {
        &self.bounds
    }
}

impl Bounded for Collectible {
    fn bounds(&self) -> &Aabb {
        &self.bounds
    }
}

/// Index of the first live entry (in slot order) overlapping `area`
pub fn first_overlap<T: Bounded>(pool: &Pool<T>, area: &Aabb) -> Option<usize> {
    pool.iter()
        .find(|(_, item)| item.bounds().intersects(area))
        .map(|(i, _)| i)
}

/// Indices of every live entry overlapping `area`
pub fn overlapping<T: Bounded>(pool: &Pool<T>, area: &Aabb) -> Vec<usize> {
    pool.iter()
        .filter(|(_, item)| item.bounds().intersects(area))
        .map(|(i, _)| i)
        .collect()
}

/// Horizontal shift that pushes `target` away from `source`
///
/// Ties (centers aligned) push left.
pub fn knockback_offset(target: &Aabb, source: &Aabb) -> f32 {
    if target.center().x > source.center().x {
        KNOCKBACK
    } else {
        -KNOCKBACK
    }
}
