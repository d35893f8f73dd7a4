//! Read-only view of a session for the rendering collaborator
//!
//! Building a snapshot never modifies the session.

use serde::Serialize;

use super::aabb::Aabb;
use super::level::LevelPhase;
use super::state::{CollectibleKind, EnemyKind, Outcome, Session};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub bounds: Aabb,
    pub health: i32,
    pub lives: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub bounds: Aabb,
    pub health: i32,
    /// For health bar scaling
    pub max_health: i32,
    pub is_boss: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectibleView {
    pub bounds: Aabb,
    pub kind: CollectibleKind,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub frame: u64,
    pub score: u64,
    pub level: u32,
    pub level_phase: LevelPhase,
    pub player: PlayerView,
    pub projectiles: Vec<Aabb>,
    pub enemies: Vec<EnemyView>,
    pub collectibles: Vec<CollectibleView>,
    pub game_over: bool,
    /// Set once the run has ended
    pub outcome: Option<Outcome>,
}

/// Build a snapshot from the current session state
pub fn build_snapshot(session: &Session) -> Snapshot {
    let player = &session.player;

    Snapshot {
        frame: session.frame,
        score: session.score,
        level: session.level.number,
        level_phase: session.level.phase(),
        player: PlayerView {
            bounds: player.bounds,
            health: player.health,
            lives: player.lives,
        },
        projectiles: session.projectiles.values().map(|p| p.bounds).collect(),
        enemies: session
            .level
            .enemies
            .values()
            .map(|e| EnemyView {
                bounds: e.bounds,
                health: e.health,
                max_health: e.kind.max_health(),
                is_boss: e.kind == EnemyKind::Boss,
            })
            .collect(),
        collectibles: session
            .level
            .collectibles
            .values()
            .map(|c| CollectibleView {
                bounds: c.bounds,
                kind: c.kind,
            })
            .collect(),
        game_over: session.is_game_over(),
        outcome: session.outcome(),
    }
}

impl Session {
    pub fn snapshot(&self) -> Snapshot {
        build_snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_snapshot_of_fresh_session() {
        let session = Session::new(Settings::default(), 7);
        let snap = session.snapshot();
        assert_eq!(snap.level, 1);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.level_phase, LevelPhase::Populating);
        assert_eq!(snap.player.health, 100);
        assert_eq!(snap.player.lives, 3);
        assert_eq!(snap.enemies.len(), 7);
        assert!(snap.enemies.iter().all(|e| !e.is_boss && e.max_health == 50));
        assert_eq!(snap.collectibles.len(), 3);
        assert!(snap.projectiles.is_empty());
        assert!(!snap.game_over);
        assert_eq!(snap.outcome, None);
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = Session::new(Settings::default(), 7);
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["level"], 1);
        assert_eq!(json["player"]["lives"], 3);
        assert_eq!(json["enemies"].as_array().map(Vec::len), Some(7));
    }
}
