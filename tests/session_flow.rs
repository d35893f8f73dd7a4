use glam::Vec2;

use side_shooter::consts::*;
use side_shooter::sim::*;
use side_shooter::{Game, LoopControl, Settings};

const SEED: u64 = 2024;

fn fresh_session(settings: Settings) -> Session {
    let mut session = Session::new(settings, SEED);
    // Pickups are irrelevant to these flows
    session.level.collectibles.clear();
    session
}

/// Put one projectile on every live enemy and run a frame
fn volley(session: &mut Session) {
    let targets: Vec<Vec2> = session
        .level
        .enemies
        .values()
        .map(|e| e.bounds.center())
        .collect();
    for center in targets {
        session.projectiles.push(Projectile::new(center));
    }
    tick(session, &TickInput::default());
}

// ── Wave → boss → next level ─────────────────────────────────────────────────

#[test]
fn clearing_level_one_spawns_boss_then_level_two() {
    let settings = Settings::default();
    let mut session = fresh_session(settings.clone());
    assert_eq!(session.level.enemies.len(), 7);

    let mut boss_spawns = 0;
    for _ in 0..50 {
        if session.level.boss_spawned {
            break;
        }
        volley(&mut session);
        boss_spawns += session
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::BossSpawned { .. }))
            .count();
    }

    assert_eq!(boss_spawns, 1);
    assert_eq!(session.score, 700);
    assert_eq!(session.level.phase(), LevelPhase::BossActive);
    assert_eq!(session.level.enemies.len(), 1);
    let boss = session.level.boss().expect("boss spawned");
    assert_eq!(
        boss.bounds.midbottom(),
        Vec2::new(settings.screen_width - 100.0, settings.ground_line())
    );
    assert_eq!(boss.health, 200);

    for _ in 0..50 {
        if session.current_level() != 1 {
            break;
        }
        volley(&mut session);
    }

    assert_eq!(session.score, 1200);
    assert_eq!(session.current_level(), 2);
    assert_eq!(session.level.enemies.len(), 9);
    assert!(!session.level.boss_spawned);
    assert_eq!(session.phase, GamePhase::Playing);
    assert!(session
        .events
        .contains(&GameEvent::LevelStarted { level: 2 }));
}

#[test]
fn clearing_the_final_level_wins() {
    let settings = Settings {
        final_level: 1,
        ..Default::default()
    };
    let mut session = fresh_session(settings);

    for _ in 0..100 {
        if session.is_game_over() {
            break;
        }
        volley(&mut session);
    }

    assert_eq!(session.outcome(), Some(Outcome::Victory));
    assert_eq!(session.score, 1200);
    let snap = session.snapshot();
    assert!(snap.game_over);
    assert_eq!(snap.outcome, Some(Outcome::Victory));
    assert_eq!(snap.level_phase, LevelPhase::Cleared);
}

// ── Elimination ───────────────────────────────────────────────────────────────

#[test]
fn last_life_contact_ends_the_session() {
    let mut session = fresh_session(Settings::default());
    session.player.lives = 1;
    session.player.health = 10;
    let anchor = session.player.bounds.midbottom();
    session
        .level
        .enemies
        .push(Enemy::new(EnemyKind::Normal, anchor));

    tick(&mut session, &TickInput::default());

    assert_eq!(session.player.lives, 0);
    assert_eq!(session.player.health, 100);
    assert_eq!(session.outcome(), Some(Outcome::Eliminated));
    assert!(session.events.contains(&GameEvent::GameOver {
        outcome: Outcome::Eliminated,
        score: 0
    }));

    let snap = session.snapshot();
    assert!(snap.game_over);
    assert!(snap.player.health >= 0);
}

#[test]
fn health_never_reported_negative() {
    let mut session = fresh_session(Settings::default());
    session.level.enemies.clear();
    let anchor = session.player.bounds.midbottom();
    session
        .level
        .enemies
        .push(Enemy::new(EnemyKind::Boss, anchor));

    for _ in 0..200 {
        // Pin the boss onto the player so every frame is a contact frame
        let anchor = session.player.bounds.midbottom();
        for (_, enemy) in session.level.enemies.iter_mut() {
            enemy.bounds.set_midbottom(anchor);
        }
        tick(&mut session, &TickInput::default());
        let snap = session.snapshot();
        assert!(snap.player.health > 0 && snap.player.health <= PLAYER_MAX_HEALTH);
        if snap.game_over {
            break;
        }
    }
    assert_eq!(session.outcome(), Some(Outcome::Eliminated));
}

// ── Collision idempotence ─────────────────────────────────────────────────────

#[test]
fn resolving_empty_overlaps_is_a_no_op() {
    let mut session = fresh_session(Settings::default());
    session
        .projectiles
        .push(Projectile::new(Vec2::new(200.0, 100.0)));
    let before = session.snapshot();

    resolve_collisions(&mut session);
    assert_eq!(session.snapshot(), before);
    resolve_collisions(&mut session);
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.score, 0);
}

#[test]
fn health_pickup_caps_at_max() {
    let mut session = fresh_session(Settings::default());
    session.player.health = 90;
    let center = session.player.bounds.center();
    session
        .level
        .collectibles
        .push(Collectible::new(CollectibleKind::Health, center));

    tick(&mut session, &TickInput::default());
    assert_eq!(session.player.health, 100);
    assert_eq!(session.score, 50);
    assert!(session.level.collectibles.is_empty());
}

// ── Driver ────────────────────────────────────────────────────────────────────

#[test]
fn game_restarts_after_elimination() {
    let mut game = Game::new(Settings {
        seed: Some(SEED),
        starting_lives: 1,
        ..Default::default()
    })
    .unwrap();
    {
        let session = game.session_mut();
        session.player.health = 5;
        let anchor = session.player.bounds.midbottom();
        session
            .level
            .enemies
            .push(Enemy::new(EnemyKind::Normal, anchor));
    }

    assert_eq!(game.step(&TickInput::default()), LoopControl::Continue);
    assert!(game.snapshot().game_over);

    let restart = TickInput {
        restart: true,
        ..Default::default()
    };
    assert_eq!(game.step(&restart), LoopControl::Continue);
    let snap = game.snapshot();
    assert!(!snap.game_over);
    assert_eq!(snap.player.lives, 1);
    assert_eq!(snap.frame, 0);

    let quit = TickInput {
        quit: true,
        ..Default::default()
    };
    assert_eq!(game.step(&quit), LoopControl::Quit);
}
