use loa_core::{Board, Move, Piece};

use crate::eval::evaluate;

pub(crate) const INFTY: i32 = i32::MAX;

/// One search invocation: walks the game tree on a single exclusively
/// owned board with make/retract pairs, recording the best root move.
struct Searcher {
    nodes: u64,
    found: Option<Move>,
}

impl Searcher {
    fn new() -> Self {
        Self {
            nodes: 0,
            found: None,
        }
    }

    /// Alpha-beta over `board` to `depth` plies. `sense` is +1 when the
    /// node maximizes (White) and -1 when it minimizes (Black). Only the
    /// root call passes `save_move`; cutoff and decided positions return
    /// the static value without recording anything.
    ///
    /// Comparisons are strict, so among equal-valued moves the first in
    /// enumeration order is kept.
    fn find_move(
        &mut self,
        board: &mut Board,
        depth: u32,
        save_move: bool,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 || board.game_over() {
            return evaluate(board);
        }

        let moves = board.legal_moves();
        debug_assert!(!moves.is_empty(), "no legal moves on a live position");

        let mut tracker = None;
        let best = if sense == 1 {
            let mut max_eval = -INFTY;
            for m in moves {
                board.make_move(m);
                let eval = self.find_move(board, depth - 1, false, -1, alpha, beta);
                board.retract();
                if eval > max_eval {
                    max_eval = eval;
                    tracker = Some(m);
                }
                alpha = alpha.max(max_eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = INFTY;
            for m in moves {
                board.make_move(m);
                let eval = self.find_move(board, depth - 1, false, 1, alpha, beta);
                board.retract();
                if eval < min_eval {
                    min_eval = eval;
                    tracker = Some(m);
                }
                beta = beta.min(min_eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        };

        debug_assert!(tracker.is_some());
        if save_move {
            self.found = tracker;
        }
        best
    }
}

/// Search `depth` plies ahead and return the best move with its value, or
/// `None` if the game is already decided. The live board is cloned once;
/// the caller's board is never touched.
pub fn pick_best_move(board: &Board, depth: u32, nodes: &mut u64) -> Option<(Move, i32)> {
    let mut work = board.clone();
    if work.game_over() {
        return None;
    }

    let sense = if work.turn() == Piece::White { 1 } else { -1 };
    let mut searcher = Searcher::new();
    let value = searcher.find_move(&mut work, depth, true, sense, -INFTY, INFTY);
    *nodes += searcher.nodes;
    searcher.found.map(|m| (m, value))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
