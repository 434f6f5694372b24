//! High score persistence
//!
//! One number in a tiny JSON envelope on disk. Loads are forgiving: a
//! missing or corrupt file logs a warning and starts from zero rather than
//! failing the game.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Default save file name
pub const HIGH_SCORE_FILE: &str = "high_score.json";

/// On-disk envelope
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u64,
}

/// File-backed store for the single best score
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(HIGH_SCORE_FILE)
    }
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict load for callers that care why it failed
    pub fn try_load(&self) -> GameResult<u64> {
        let raw = fs::read_to_string(&self.path).map_err(|e| GameError::ScoreLoad {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        let file: HighScoreFile =
            serde_json::from_str(&raw).map_err(|e| GameError::ScoreLoad {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(file.high_score)
    }

    /// Load the stored best score, or zero when the file is missing or bad
    pub fn load(&self) -> u64 {
        if !self.path.exists() {
            log::info!(
                "no high score file at {}, starting fresh",
                self.path.display()
            );
            return 0;
        }
        match self.try_load() {
            Ok(score) => {
                log::info!("loaded high score {}", score);
                score
            }
            Err(err) => {
                log::warn!("{}", err);
                0
            }
        }
    }

    /// Strict save
    pub fn try_save(&self, score: u64) -> GameResult<()> {
        let file = HighScoreFile { high_score: score };
        let json = serde_json::to_string(&file).map_err(|e| GameError::ScoreSave {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        fs::write(&self.path, json).map_err(|e| GameError::ScoreSave {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Best-effort save; failures are logged and swallowed
    pub fn save(&self, score: u64) {
        match self.try_save(score) {
            Ok(()) => log::info!("high score {} saved", score),
            Err(err) => log::warn!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mathstorm_{}_{}.json", tag, std::process::id()))
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);
        let store = HighScoreStore::new(path);
        assert_eq!(store.load(), 0);
        assert!(store.try_load().is_err());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let path = temp_path("roundtrip");
        let store = HighScoreStore::new(&path);
        store.save(4200);
        assert_eq!(store.load(), 4200);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_loads_zero() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json {{").unwrap();
        let store = HighScoreStore::new(&path);
        assert!(store.try_load().is_err());
        assert_eq!(store.load(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_envelope_shape() {
        let path = temp_path("envelope");
        let store = HighScoreStore::new(&path);
        store.save(123);
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"high_score":123}"#);
        let _ = fs::remove_file(&path);
    }
}
