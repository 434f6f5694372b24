//! Event-to-audio cue routing
//!
//! The simulation reports what happened through [`GameEvent`]s; this module
//! maps those onto sound cues with per-cue base volumes. Playback itself sits
//! behind the [`CueSink`] trait so a frontend can attach any backend; the
//! built-in [`LogSink`] just logs the cues it is asked to play.

use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Bullet leaves the muzzle
    Shoot,
    /// Bullet connects with an enemy
    EnemyHit,
    /// Enemy goes down
    EnemyExplode,
    /// Player takes contact damage
    PlayerHit,
    /// Correct answer chime
    Correct,
    /// Incorrect answer buzz
    Incorrect,
    /// Level up fanfare
    LevelUp,
    /// Game over jingle
    GameOver,
}

impl AudioCue {
    /// Stable asset key for frontends that load sample files by name
    pub fn name(&self) -> &'static str {
        match self {
            AudioCue::Shoot => "shoot",
            AudioCue::EnemyHit => "enemy_hit",
            AudioCue::EnemyExplode => "enemy_explode",
            AudioCue::PlayerHit => "player_hit",
            AudioCue::Correct => "correct",
            AudioCue::Incorrect => "incorrect",
            AudioCue::LevelUp => "level_up",
            AudioCue::GameOver => "game_over",
        }
    }

    /// Relative loudness before the volume controls apply
    pub fn base_volume(&self) -> f32 {
        match self {
            AudioCue::Shoot => 0.3,
            AudioCue::EnemyHit => 0.5,
            AudioCue::EnemyExplode => 0.7,
            AudioCue::PlayerHit => 0.8,
            AudioCue::Correct => 0.7,
            AudioCue::Incorrect => 0.5,
            AudioCue::LevelUp => 0.8,
            AudioCue::GameOver => 0.9,
        }
    }
}

/// Playback backend seam
pub trait CueSink {
    fn play(&mut self, cue: AudioCue, volume: f32);
}

/// Sink that logs cues instead of playing them
#[derive(Debug, Default)]
pub struct LogSink;

impl CueSink for LogSink {
    fn play(&mut self, cue: AudioCue, volume: f32) {
        log::debug!("audio cue {} at volume {:.2}", cue.name(), volume);
    }
}

/// Routes game events to audio cues
pub struct CueRouter {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for CueRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl CueRouter {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Map an event to its cue and final volume. Events that carry no sound
    /// (high score records) return `None`, as does everything while muted.
    pub fn route(&self, event: &GameEvent) -> Option<(AudioCue, f32)> {
        let cue = match event {
            GameEvent::Fired => AudioCue::Shoot,
            GameEvent::EnemyHit => AudioCue::EnemyHit,
            GameEvent::EnemyDestroyed => AudioCue::EnemyExplode,
            GameEvent::PlayerHit => AudioCue::PlayerHit,
            GameEvent::AnswerCorrect => AudioCue::Correct,
            GameEvent::AnswerIncorrect => AudioCue::Incorrect,
            GameEvent::LevelUp => AudioCue::LevelUp,
            GameEvent::GameOver => AudioCue::GameOver,
            GameEvent::NewHighScore(_) => return None,
        };
        let vol = self.effective_volume() * cue.base_volume();
        if vol <= 0.0 {
            return None;
        }
        Some((cue, vol))
    }

    /// Route a drained event batch into a sink
    pub fn dispatch(&self, events: &[GameEvent], sink: &mut impl CueSink) {
        for event in events {
            if let Some((cue, vol)) = self.route(event) {
                sink.play(cue, vol);
            }
        }
    }
}
