//! Game-specific error types.
//!
//! Fallible paths propagate through these types rather than panicking;
//! persistence and config failures degrade to defaults with a logged warning.

use std::fmt;
use std::path::PathBuf;

/// Top-level error enum for the mathstorm crate.
#[derive(Debug)]
pub enum GameError {
    /// The distractor strategies ran out of attempts before producing enough
    /// unique candidates. Recovered by the widened fallback sampler.
    DistractorsExhausted {
        /// The correct answer the strategies were working around.
        answer: f64,
        /// Attempts consumed before giving up.
        attempts: u32,
    },

    /// The high-score file could not be read or parsed.
    ScoreLoad {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O or parse failure.
        reason: String,
    },

    /// The high-score file could not be written.
    ScoreSave {
        /// Path that was written.
        path: PathBuf,
        /// Underlying I/O or serialization failure.
        reason: String,
    },

    /// A config override file existed but could not be read or parsed.
    ConfigLoad {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O or parse failure.
        reason: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::DistractorsExhausted { answer, attempts } => write!(
                f,
                "distractor strategies exhausted after {} attempts (answer {})",
                attempts, answer
            ),
            GameError::ScoreLoad { path, reason } => {
                write!(f, "failed to load high score from {}: {}", path.display(), reason)
            }
            GameError::ScoreSave { path, reason } => {
                write!(f, "failed to save high score to {}: {}", path.display(), reason)
            }
            GameError::ConfigLoad { path, reason } => {
                write!(f, "failed to load config from {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
