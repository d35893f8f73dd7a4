//! Frame driver
//!
//! Owns the current session and applies the outer-loop events: quit at any
//! time, restart only once the run has ended.

use crate::settings::{Settings, SettingsError};
use crate::sim::{GameEvent, Session, Snapshot, TickInput, tick};

/// What the outer loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Game instance holding the active session
#[derive(Debug)]
pub struct Game {
    session: Session,
    /// Base seed; each restart derives the next session's seed from it
    seed: u64,
    restarts: u64,
}

impl Game {
    /// Validate settings and start the first session
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {seed}");
        Ok(Self {
            session: Session::new(settings, seed),
            seed,
            restarts: 0,
        })
    }

    /// Run one frame
    pub fn step(&mut self, input: &TickInput) -> LoopControl {
        if input.quit {
            log::info!("Quit requested at frame {}", self.session.frame);
            return LoopControl::Quit;
        }

        if self.session.is_game_over() {
            self.session.events.clear();
            if input.restart {
                self.restart();
            }
            return LoopControl::Continue;
        }

        tick(&mut self.session, input);
        LoopControl::Continue
    }

    /// Replace the session with a fresh one
    pub fn restart(&mut self) {
        self.restarts += 1;
        let seed = self.seed.wrapping_add(self.restarts);
        let settings = self.session.settings.clone();
        self.session = Session::new(settings, seed);
        log::info!("Game restarted with seed: {seed}");
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Events from the most recent frame
    pub fn events(&self) -> &[GameEvent] {
        &self.session.events
    }

    pub fn restarts(&self) -> u64 {
        self.restarts
    }
}
