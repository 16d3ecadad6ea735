//! Match results storage and reporting

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::match_runner::MatchConfig;

/// Result of a single game, from the first player's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same outcome seen from the other side.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Aggregated result of a match, from the first player's perspective
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score in [0, 1]: wins count 1, draws count half.
    ///
    /// An empty match scores 0.5 so an unplayed pairing reads as even.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (f64::from(self.wins) + f64::from(self.draws) * 0.5) / f64::from(total)
    }
}

/// A saved head-to-head report: who played, under what settings, and how
/// it went.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
}

impl MatchReport {
    pub fn new(engine1: String, engine2: String, config: MatchConfig, result: MatchResult) -> Self {
        Self {
            engine1,
            engine2,
            config,
            result,
        }
    }

    /// Save the report as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {e}"))?;
        fs::write(path, json).map_err(|e| format!("Failed to write: {e}"))
    }

    /// Load a previously saved report.
    pub fn load(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| format!("Failed to read: {e}"))?;
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse: {e}"))
    }

    /// One-line summary from the first player's perspective.
    pub fn summary(&self) -> String {
        format!(
            "{} vs {}: +{} -{} ={} (score {:.2})",
            self.engine1,
            self.engine2,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score()
        )
    }
}
