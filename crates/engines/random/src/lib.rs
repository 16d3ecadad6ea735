//! Random Move Player
//!
//! Selects uniformly at random from all legal moves. Useful for:
//! - Baseline comparisons (the searching player should crush this)
//! - Stress testing move generation and the make/retract machinery

use loa_core::{Board, Engine, Move, SearchResult};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A player that picks a random legal move.
///
/// No evaluation at all; it refuses to move only when the game is
/// already decided.
#[derive(Debug, Clone, Default)]
pub struct RandomPlayer {
    moves_buf: Vec<Move>,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for RandomPlayer {
    fn search(&mut self, board: &Board, _depth: u32) -> SearchResult {
        let mut work = board.clone();
        let best_move = if work.game_over() {
            None
        } else {
            work.legal_moves_into(&mut self.moves_buf);
            self.moves_buf.choose(&mut thread_rng()).copied()
        };

        SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
