//! Machine Lines of Action Player
//!
//! Fixed-depth minimax with alpha-beta pruning, scored by the board's
//! connectivity analysis. This is the automated opponent; the random
//! engine is the baseline it is measured against.

mod eval;
mod search;

use loa_core::{Board, Engine, Move, SearchResult};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Automated player using minimax with alpha-beta pruning.
///
/// Each search clones the live board once and walks the game tree by
/// mutating and retracting that single clone.
#[derive(Debug, Clone)]
pub struct MachinePlayer {
    depth: u32,
    /// Node counter for statistics
    nodes: u64,
}

impl MachinePlayer {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    pub fn with_depth(depth: u32) -> Self {
        Self { depth, nodes: 0 }
    }

    /// The best move for the side to move at this player's configured
    /// depth, or `None` if the game is already decided.
    pub fn choose_move(&mut self, board: &Board) -> Option<Move> {
        let depth = self.depth;
        self.search(board, depth).best_move
    }
}

impl Default for MachinePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MachinePlayer {
    fn search(&mut self, board: &Board, depth: u32) -> SearchResult {
        self.nodes = 0;
        let outcome = search::pick_best_move(board, depth, &mut self.nodes);

        SearchResult {
            best_move: outcome.map(|(mv, _)| mv),
            score: outcome.map(|(_, score)| score).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Machine v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, WINNING_VALUE};
pub use search::pick_best_move;
