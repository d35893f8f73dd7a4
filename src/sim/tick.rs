//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one frame: fire, movement,
//! collision passes in fixed order, then level progression.

use super::collision::{first_overlap, knockback_offset, overlapping};
use super::level::{Level, Progress};
use super::state::{EnemyDamage, GameEvent, Outcome, PlayerDamage, Session};
use crate::consts::CONTACT_DAMAGE;

/// Input for a single tick
///
/// `left`, `right` and `jump` are held-key state; `fire`, `restart` and
/// `quit` are edge-triggered events for this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub fire: bool,
    /// Start a fresh session (only acted on after game over)
    pub restart: bool,
    /// Stop the frame loop
    pub quit: bool,
}

/// Advance the session by one frame
pub fn tick(session: &mut Session, input: &TickInput) {
    session.events.clear();

    // Frozen after game over; the driver handles restart/quit
    if session.is_game_over() {
        return;
    }

    session.frame += 1;

    // The fire event lands before movement, so a fresh shot moves this frame
    if input.fire {
        if let Some(projectile) = session.player.shoot() {
            session.projectiles.push(projectile);
            session.events.push(GameEvent::Shot);
            log::debug!("Shot fired at frame {}", session.frame);
        }
    }

    if session.player.update(input, &session.settings) {
        session.events.push(GameEvent::Jumped);
    }

    let width = session.settings.screen_width;
    for (_, projectile) in session.projectiles.iter_mut() {
        projectile.update();
    }
    session.projectiles.retain_live(|p| !p.is_offscreen(width));

    for (_, enemy) in session.level.enemies.iter_mut() {
        enemy.update(width);
    }

    resolve_collisions(session);

    if !session.is_game_over() {
        evaluate_progression(session);
    }

    session.compact();
}

/// Run the three collision passes in order
///
/// Pickups are skipped once the player has been eliminated.
pub fn resolve_collisions(session: &mut Session) {
    resolve_projectile_hits(session);
    resolve_enemy_contacts(session);
    if !session.is_game_over() {
        resolve_pickups(session);
    }
}

/// Each projectile damages the first enemy it overlaps and is consumed
pub fn resolve_projectile_hits(session: &mut Session) {
    let enemies = &mut session.level.enemies;

    for index in 0..session.projectiles.capacity_used() {
        let Some(projectile) = session.projectiles.get(index) else {
            continue;
        };
        let damage = projectile.damage;
        let Some(target) = first_overlap(enemies, &projectile.bounds) else {
            continue;
        };
        session.projectiles.remove(index);

        let Some(enemy) = enemies.get_mut(target) else {
            continue;
        };
        let kind = enemy.kind;
        match enemy.take_damage(damage) {
            EnemyDamage::Hit => {
                session.events.push(GameEvent::EnemyHit {
                    kind,
                    health: enemy.health,
                });
            }
            EnemyDamage::Died => {
                enemies.remove(target);
                let points = kind.score();
                session.score += points;
                session.events.push(GameEvent::EnemyKilled { kind, points });
                log::debug!("{kind:?} enemy destroyed (+{points}, score {})", session.score);
            }
        }
    }
}

/// Every enemy touching the player deals contact damage and knocks it back
///
/// Without a configured contact cooldown this repeats every frame the boxes
/// overlap.
pub fn resolve_enemy_contacts(session: &mut Session) {
    if session.player.contact_cooldown > 0 {
        return;
    }

    let hits = overlapping(&session.level.enemies, &session.player.bounds);
    for target in hits {
        let Some(enemy) = session.level.enemies.get(target) else {
            continue;
        };
        let enemy_bounds = enemy.bounds;

        let player = &mut session.player;
        let result = player.take_damage(CONTACT_DAMAGE);
        session.events.push(GameEvent::PlayerHit {
            damage: CONTACT_DAMAGE,
            health: player.health,
        });

        match result {
            PlayerDamage::Hit => {
                let shift = knockback_offset(&player.bounds, &enemy_bounds);
                player.bounds.pos.x += shift;
                player
                    .bounds
                    .clamp_horizontal(session.settings.screen_width);
            }
            PlayerDamage::LifeLost => {
                let lives = player.lives;
                session.events.push(GameEvent::LifeLost { lives });
                log::info!("Life lost, {lives} remaining");
            }
            PlayerDamage::Eliminated => {
                session.events.push(GameEvent::LifeLost { lives: 0 });
                session.end(Outcome::Eliminated);
                return;
            }
        }

        if session.settings.contact_cooldown_frames > 0 {
            session.player.contact_cooldown = session.settings.contact_cooldown_frames;
            break;
        }
    }
}

/// Consume every collectible the player overlaps
pub fn resolve_pickups(session: &mut Session) {
    let picked = overlapping(&session.level.collectibles, &session.player.bounds);
    for index in picked {
        let Some(item) = session.level.collectibles.get(index) else {
            continue;
        };
        let kind = item.kind;
        let points = item.apply(&mut session.player);
        session.level.collectibles.remove(index);
        session.score += points;
        session.events.push(GameEvent::Pickup { kind, points });
        log::debug!("Picked up {kind:?} (+{points})");
    }
}

/// Spawn the boss, move to the next level, or finish the run
pub fn evaluate_progression(session: &mut Session) {
    match session.level.advance(&session.settings) {
        Progress::Unchanged => {}
        Progress::BossSpawned => {
            session.events.push(GameEvent::BossSpawned {
                level: session.level.number,
            });
        }
        Progress::Cleared => {
            let cleared = session.level.number;
            if cleared >= session.settings.final_level {
                session.end(Outcome::Victory);
            } else {
                let next = cleared + 1;
                session.level = Level::new(next, &session.settings, &mut session.rng);
                session.events.push(GameEvent::LevelStarted { level: next });
                log::info!("Level {cleared} cleared, starting level {next}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::state::{Collectible, CollectibleKind, Enemy, EnemyKind, GamePhase, Projectile};
    use glam::Vec2;

    fn quiet_session() -> Session {
        let mut session = Session::new(Settings::default(), 12345);
        session.level.collectibles.clear();
        session
    }

    #[test]
    fn test_fire_spawns_projectile_and_moves_it() {
        let mut session = quiet_session();
        let muzzle = session.player.bounds.midright();
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut session, &input);
        assert_eq!(session.projectiles.len(), 1);
        assert!(session.events.contains(&GameEvent::Shot));
        let shot = session.projectiles.values().next().unwrap();
        assert_eq!(shot.bounds.center().x, muzzle.x + PROJECTILE_SPEED);

        // Cooldown blocks the next shot
        tick(&mut session, &input);
        assert_eq!(session.projectiles.len(), 1);
        assert_eq!(session.player.shoot_cooldown, SHOOT_COOLDOWN_FRAMES - 2);
    }

    #[test]
    fn test_projectile_consumed_by_first_enemy_only() {
        let mut session = quiet_session();
        session.level.enemies.clear();
        session
            .level
            .enemies
            .push(Enemy::new(EnemyKind::Normal, Vec2::new(500.0, 350.0)));
        session
            .level
            .enemies
            .push(Enemy::new(EnemyKind::Normal, Vec2::new(505.0, 350.0)));
        session
            .projectiles
            .push(Projectile::new(Vec2::new(500.0, 330.0)));

        resolve_projectile_hits(&mut session);
        assert!(session.projectiles.is_empty());
        let healths: Vec<i32> = session.level.enemies.values().map(|e| e.health).collect();
        assert_eq!(healths, vec![25, 50]);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_kill_awards_score() {
        let mut session = quiet_session();
        session.level.enemies.clear();
        session
            .level
            .enemies
            .push(Enemy::new(EnemyKind::Normal, Vec2::new(500.0, 350.0)));
        for _ in 0..2 {
            session
                .projectiles
                .push(Projectile::new(Vec2::new(500.0, 330.0)));
        }

        resolve_projectile_hits(&mut session);
        assert!(session.level.enemies.is_empty());
        assert_eq!(session.score, SCORE_ENEMY);
        assert!(session.events.contains(&GameEvent::EnemyKilled {
            kind: EnemyKind::Normal,
            points: SCORE_ENEMY
        }));
    }

    #[test]
    fn test_contact_damage_every_frame() {
        let mut session = quiet_session();
        session.level.enemies.clear();
        session.player.bounds.pos.x = 300.0;
        let start_x = session.player.bounds.left();
        let anchor = session.player.bounds.midbottom() + Vec2::new(10.0, 0.0);
        session
            .level
            .enemies
            .push(Enemy::new(EnemyKind::Normal, anchor));

        resolve_enemy_contacts(&mut session);
        assert_eq!(session.player.health, 90);
        assert_eq!(session.player.bounds.left(), start_x - KNOCKBACK);

        // Still overlapping after knockback: damaged again
        resolve_enemy_contacts(&mut session);
        assert_eq!(session.player.health, 80);
    }

    #[test]
    fn test_contact_cooldown_limits_damage() {
        let settings = Settings {
            contact_cooldown_frames: 30,
            ..Default::default()
        };
        let mut session = Session::new(settings, 1);
        session.level.collectibles.clear();
        session.level.enemies.clear();
        let anchor = session.player.bounds.midbottom();
        for _ in 0..2 {
            session
                .level
                .enemies
                .push(Enemy::new(EnemyKind::Boss, anchor));
        }

        resolve_enemy_contacts(&mut session);
        assert_eq!(session.player.health, 90);
        assert_eq!(session.player.contact_cooldown, 30);
        resolve_enemy_contacts(&mut session);
        assert_eq!(session.player.health, 90);
    }

    #[test]
    fn test_pickup_heals_and_scores_once() {
        let mut session = quiet_session();
        session.player.health = 90;
        let center = session.player.bounds.center();
        session
            .level
            .collectibles
            .push(Collectible::new(CollectibleKind::Health, center));

        resolve_pickups(&mut session);
        assert_eq!(session.player.health, 100);
        assert_eq!(session.score, 50);
        assert!(session.level.collectibles.is_empty());

        resolve_pickups(&mut session);
        assert_eq!(session.score, 50);
    }

    #[test]
    fn test_progression_spawns_boss_then_next_level() {
        let mut session = quiet_session();
        session.level.enemies.clear();

        evaluate_progression(&mut session);
        assert!(session.level.boss_spawned);
        assert!(session.events.contains(&GameEvent::BossSpawned { level: 1 }));

        session.level.enemies.clear();
        evaluate_progression(&mut session);
        assert_eq!(session.current_level(), 2);
        assert_eq!(session.level.enemies.len(), 9);
        assert!(!session.level.boss_spawned);
        assert_eq!(session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_final_level_cleared_is_victory() {
        let mut session = quiet_session();
        session.level = Level::new(3, &session.settings, &mut session.rng);
        session.level.enemies.clear();
        session.level.boss_spawned = true;

        evaluate_progression(&mut session);
        assert_eq!(session.outcome(), Some(Outcome::Victory));
    }

    #[test]
    fn test_game_over_freezes_tick() {
        let mut session = quiet_session();
        session.end(Outcome::Eliminated);
        let frame = session.frame;
        tick(
            &mut session,
            &TickInput {
                right: true,
                fire: true,
                ..Default::default()
            },
        );
        assert_eq!(session.frame, frame);
        assert!(session.projectiles.is_empty());
        assert!(session.events.is_empty());
    }

    #[test]
    fn test_offscreen_projectile_removed() {
        let mut session = quiet_session();
        session
            .projectiles
            .push(Projectile::new(Vec2::new(795.0, 100.0)));

        tick(&mut session, &TickInput::default());
        assert_eq!(session.projectiles.len(), 1);

        tick(&mut session, &TickInput::default());
        assert!(session.projectiles.is_empty());
        assert_eq!(session.projectiles.capacity_used(), 0);
    }

    #[test]
    fn test_determinism() {
        let mut a = Session::new(Settings::default(), 99999);
        let mut b = Session::new(Settings::default(), 99999);
        let inputs = [
            TickInput {
                right: true,
                fire: true,
                ..Default::default()
            },
            TickInput {
                jump: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for i in 0..300 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input);
            tick(&mut b, input);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.frame, b.frame);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
