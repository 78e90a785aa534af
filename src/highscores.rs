//! High score leaderboards
//!
//! One top-10 table per game, persisted to LocalStorage on wasm.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep per game
pub const MAX_HIGH_SCORES: usize = 10;

/// LocalStorage keys, one table per game
pub const PLATFORMER_KEY: &str = "canvas_arcade_platformer_scores";
pub const INVADERS_KEY: &str = "canvas_arcade_invaders_scores";

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Level (platformer) or wave rows (invaders) reached
    pub level: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard for one game
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a new score if it qualifies; returns the 1-indexed rank achieved
    pub fn add_score(&mut self, score: u64, level: u32, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            level,
            timestamp,
        };

        // Insert keeping the table sorted descending by score
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load a game's leaderboard from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(key: &str) -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(key) {
                if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                    log::info!("Loaded {} high scores for {}", scores.entries.len(), key);
                    return scores;
                }
            }
        }

        Self::new()
    }

    /// Save a game's leaderboard to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self, key: &str) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(key, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(_key: &str) -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, _key: &str) {}
}
