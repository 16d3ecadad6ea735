pub mod board;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all players (machine, random, ...)
// =============================================================================

/// Result of asking an engine for a move.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if the game is already decided)
    pub best_move: Option<Move>,
    /// Position value from White's perspective (positive favors White)
    pub score: i32,
    /// Search depth used
    pub depth: u32,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Trait that all players must implement.
///
/// This lets the game loop and the match runner swap between the searching
/// machine player and baseline players without caring which is which.
pub trait Engine: Send {
    /// Choose a move for the side to move on `board`, searching to `depth`
    /// plies where that applies.
    fn search(&mut self, board: &Board, depth: u32) -> SearchResult;

    /// The engine's display name.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
