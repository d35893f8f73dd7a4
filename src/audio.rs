//! Audio cues
//!
//! The simulation only reports events; a backend implementing `AudioSink`
//! turns them into sound. Nothing here feeds back into gameplay.

use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Looping background track
    BackgroundLoop,
}

impl SoundEffect {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            _ => None,
        }
    }
}

/// Sound backend seam
pub trait AudioSink {
    /// Play a one-shot cue
    fn play(&mut self, effect: SoundEffect);
    /// Start a looping cue (no-op if already playing)
    fn start_loop(&mut self, effect: SoundEffect);
}

/// Play the cues for one frame's events
pub fn dispatch(sink: &mut impl AudioSink, events: &[GameEvent]) {
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        sink.play(effect);
    }
}

/// Backend that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
    looping: Option<SoundEffect>,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn looping(&self) -> Option<SoundEffect> {
        self.looping
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if !self.muted {
            log::trace!("sfx: {effect:?}");
        }
    }

    fn start_loop(&mut self, effect: SoundEffect) {
        if self.looping != Some(effect) {
            log::debug!("loop: {effect:?}");
            self.looping = Some(effect);
        }
    }
}
