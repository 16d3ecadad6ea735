//! Match runner for playing games between players

use std::path::Path;

use loa_core::{Board, Engine, Piece};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for players that search
    pub depth: u32,
    /// Moves per side before a game is ruled a tie
    pub move_limit: usize,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Random half-moves played before handing the game to the players
    pub opening_random_plies: u32,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            move_limit: 60,
            alternate_colors: true,
            opening_random_plies: 0,
            verbose: false,
        }
    }
}

impl MatchConfig {
    /// Load a config from a TOML file. Missing fields take their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {e}"))?;
        toml::from_str(&text).map_err(|e| format!("Failed to parse: {e}"))
    }
}

/// Runs matches between two players
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two players.
    ///
    /// Returns the result from `engine1`'s perspective.
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_black {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flipped()
            };

            result.record(game_result);
            if self.config.verbose {
                println!("game {}: {:?}", game_num + 1, game_result);
            }
        }

        result
    }

    /// Play a single game with `black` moving first. The result is from
    /// black's perspective.
    fn play_game(&self, black: &mut dyn Engine, white: &mut dyn Engine) -> GameResult {
        black.new_game();
        white.new_game();

        let mut board = Board::new();
        // a fresh board accepts any positive per-side limit
        board
            .set_move_limit(self.config.move_limit.max(1))
            .expect("no moves made yet");

        self.play_random_opening(&mut board);

        while !board.game_over() {
            let engine: &mut dyn Engine = if board.turn() == Piece::Black {
                &mut *black
            } else {
                &mut *white
            };
            let outcome = engine.search(&board, self.config.depth);
            match outcome.best_move {
                Some(mv) if board.is_legal_move(mv) => board.make_move(mv),
                // refusing to move on a live board forfeits
                _ => break,
            }
        }

        match board.winner() {
            Some(Piece::Black) => GameResult::Win,
            Some(Piece::White) => GameResult::Loss,
            Some(Piece::Empty) => GameResult::Draw,
            None if board.turn() == Piece::Black => GameResult::Loss,
            None => GameResult::Win,
        }
    }

    /// Play the configured number of random opening half-moves so repeated
    /// games between deterministic players do not all repeat one line.
    fn play_random_opening(&self, board: &mut Board) {
        let mut rng = thread_rng();
        for _ in 0..self.config.opening_random_plies {
            if board.game_over() {
                break;
            }
            let moves = board.legal_moves();
            if let Some(&mv) = moves.choose(&mut rng) {
                board.make_move(mv);
            }
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
