use std::fmt;

use thiserror::Error;

use crate::types::*;

pub const BOARD_SIZE: usize = 8;

/// Default number of moves for each side that results in a tie.
pub const DEFAULT_MOVE_LIMIT: usize = 60;

/// The standard initial configuration (bottom row first, so
/// `INITIAL_PIECES[rank][file]` is the piece at that rank and file).
pub const INITIAL_PIECES: [[Piece; 8]; 8] = {
    use Piece::{Black as B, Empty as E, White as W};
    [
        [E, B, B, B, B, B, B, E],
        [W, E, E, E, E, E, E, W],
        [W, E, E, E, E, E, E, W],
        [W, E, E, E, E, E, E, W],
        [W, E, E, E, E, E, E, W],
        [W, E, E, E, E, E, E, W],
        [W, E, E, E, E, E, E, W],
        [E, B, B, B, B, B, B, E],
    ]
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("move limit of {limit} per side is not greater than the {moves_made} half-moves already played")]
    MoveLimitTooSmall { limit: usize, moves_made: usize },
}

/// The state of a game of Lines of Action.
///
/// All mutation funnels through [`Board::set`], which invalidates the two
/// lazily recomputed caches (winner and per-side region sizes). Queries that
/// may recompute a cache take `&mut self`; a search engine is expected to own
/// one exclusive clone and walk it with `make_move`/`retract` pairs.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [Piece; 64],
    turn: Piece,
    /// All unretracted moves, in order.
    moves: Vec<Move>,
    /// Half-move count at which an undecided game becomes a tie.
    move_limit: usize,
    winner_known: bool,
    /// Valid only while `winner_known`. `Some(Piece::Empty)` is a tie.
    winner: Option<Piece>,
    regions_valid: bool,
    black_region_sizes: Vec<u32>,
    white_region_sizes: Vec<u32>,
}

impl Board {
    /// A board in the standard initial position, black to move.
    pub fn new() -> Self {
        Self::from_layout(&INITIAL_PIECES, Piece::Black)
    }

    /// A board whose contents are taken from `contents` (bottom row first)
    /// with `turn` to move: `get(sq(c, r)) == contents[r][c]`.
    pub fn from_layout(contents: &[[Piece; 8]; 8], turn: Piece) -> Self {
        let mut board = Board {
            cells: [Piece::Empty; 64],
            turn,
            moves: Vec::new(),
            move_limit: 2 * DEFAULT_MOVE_LIMIT,
            winner_known: false,
            winner: None,
            regions_valid: false,
            black_region_sizes: Vec::new(),
            white_region_sizes: Vec::new(),
        };
        board.initialize(contents, turn);
        board
    }

    /// Reset to `contents` with `side` to move, dropping the move history
    /// and restoring the default move limit.
    pub fn initialize(&mut self, contents: &[[Piece; 8]; 8], side: Piece) {
        for (r, row) in contents.iter().enumerate() {
            for (c, &piece) in row.iter().enumerate() {
                let sq = sq(c as i8, r as i8).expect("layout square in range");
                self.set(sq, piece, None);
            }
        }
        self.turn = side;
        self.moves.clear();
        self.move_limit = 2 * DEFAULT_MOVE_LIMIT;
        self.winner_known = false;
        self.regions_valid = false;
    }

    /// Reset to the standard initial position.
    pub fn clear(&mut self) {
        self.initialize(&INITIAL_PIECES, Piece::Black);
    }

    /// Contents of the cell at `sq`.
    pub fn get(&self, sq: u8) -> Piece {
        self.cells[sq as usize]
    }

    /// Write a cell and, if `next` is given, the side to move. This is the
    /// single mutation primitive; it invalidates both caches.
    pub fn set(&mut self, sq: u8, piece: Piece, next: Option<Piece>) {
        self.cells[sq as usize] = piece;
        if let Some(next) = next {
            self.turn = next;
        }
        self.regions_valid = false;
        self.winner_known = false;
    }

    /// Set the per-side move limit. The stored limit is a half-move count,
    /// so `limit` must satisfy `2 * limit > moves_made()`.
    pub fn set_move_limit(&mut self, limit: usize) -> Result<(), BoardError> {
        if 2 * limit <= self.moves_made() {
            return Err(BoardError::MoveLimitTooSmall {
                limit,
                moves_made: self.moves_made(),
            });
        }
        self.move_limit = 2 * limit;
        Ok(())
    }

    /// The side that moves next.
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Number of moves made and not retracted since construction.
    pub fn moves_made(&self) -> usize {
        self.moves.len()
    }

    /// The unretracted move history, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Apply `mv` if it is legal for the side to move, else do nothing.
    /// The capture flag of `mv` is ignored; the recorded move is tagged
    /// from the destination's prior occupant.
    pub fn make_move(&mut self, mv: Move) {
        if !self.is_legal_move(mv) {
            return;
        }
        let moved = self.get(mv.from);
        self.set(mv.from, Piece::Empty, None);

        let mut recorded = Move::new(mv.from, mv.to);
        if self.get(mv.to) == self.turn.opposite() {
            recorded = recorded.capture();
        }
        self.set(mv.to, moved, Some(self.turn.opposite()));
        self.moves.push(recorded);
    }

    /// Retract the last move, returning to the state immediately before it.
    /// Does nothing if no moves have been made.
    pub fn retract(&mut self) {
        let last = match self.moves.pop() {
            Some(mv) => mv,
            None => return,
        };
        let moved = self.get(last.to);
        if last.is_capture {
            self.set(last.to, moved.opposite(), None);
        } else {
            self.set(last.to, Piece::Empty, None);
        }
        self.set(last.from, moved, Some(self.turn.opposite()));
    }

    /// True iff the game is decided (a winner or a tie).
    pub fn game_over(&mut self) -> bool {
        self.winner().is_some()
    }

    /// The winning side, if any. `None` while the game is in progress,
    /// `Some(Piece::Empty)` for a tie.
    ///
    /// When both sides are simultaneously contiguous, the side *not* on
    /// move wins: completing a move that leaves both sides connected hands
    /// the game to the opponent who connected first.
    pub fn winner(&mut self) -> Option<Piece> {
        if !self.winner_known {
            let me = self.turn;
            let opp = me.opposite();
            let me_contig = self.pieces_contiguous(me);
            let opp_contig = self.pieces_contiguous(opp);
            if me_contig && opp_contig {
                self.winner = Some(opp);
                self.winner_known = true;
            } else if me_contig {
                self.winner = Some(me);
                self.winner_known = true;
            } else if opp_contig {
                self.winner = Some(opp);
                self.winner_known = true;
            } else if self.move_limit <= self.moves_made() {
                self.winner = Some(Piece::Empty);
                self.winner_known = true;
            } else {
                self.winner = None;
            }
        }
        self.winner
    }

    /// True iff all of `side`'s pieces form one connected region.
    /// A side with no pieces on the board has no regions and is not
    /// considered contiguous.
    pub fn pieces_contiguous(&mut self, side: Piece) -> bool {
        self.get_region_sizes(side).len() == 1
    }

    /// Sizes of `side`'s connected regions, sorted descending.
    pub fn get_region_sizes(&mut self, side: Piece) -> &[u32] {
        self.compute_regions();
        if side == Piece::White {
            &self.white_region_sizes
        } else {
            &self.black_region_sizes
        }
    }

    /// Recompute both region-size lists by flood fill, unless the cached
    /// lists are still valid.
    fn compute_regions(&mut self) {
        if self.regions_valid {
            return;
        }
        self.black_region_sizes.clear();
        self.white_region_sizes.clear();

        let mut visited = [false; 64];
        let mut stack: Vec<u8> = Vec::new();
        for start in 0..64u8 {
            let piece = self.cells[start as usize];
            if piece == Piece::Empty || visited[start as usize] {
                continue;
            }
            let mut size = 0u32;
            visited[start as usize] = true;
            stack.push(start);
            while let Some(s) = stack.pop() {
                size += 1;
                for adj in adjacent(s) {
                    if !visited[adj as usize] && self.cells[adj as usize] == piece {
                        visited[adj as usize] = true;
                        stack.push(adj);
                    }
                }
            }
            match piece {
                Piece::Black => self.black_region_sizes.push(size),
                Piece::White => self.white_region_sizes.push(size),
                Piece::Empty => unreachable!(),
            }
        }

        self.black_region_sizes.sort_unstable_by(|a, b| b.cmp(a));
        self.white_region_sizes.sort_unstable_by(|a, b| b.cmp(a));
        self.regions_valid = true;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Two boards are equal when their cells and side to move agree; history,
/// limits, and cache state do not participate.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells && self.turn == other.turn
    }
}
impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        for r in (0..BOARD_SIZE).rev() {
            write!(f, "    ")?;
            for c in 0..BOARD_SIZE {
                write!(f, "{} ", self.cells[r * BOARD_SIZE + c].abbrev())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Next move: {}", self.turn.full_name())?;
        write!(f, "===")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
