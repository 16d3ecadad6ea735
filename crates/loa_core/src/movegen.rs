//! Move legality and generation.
//!
//! The travel-distance rule of Lines of Action: a piece moves along one of
//! the 8 directions by exactly the total number of pieces (either color)
//! anywhere on the full line through its square in that axis. Opposing
//! pieces strictly between origin and destination block the move; the
//! destination may not hold a friendly piece. Landing on an opposing piece
//! captures it.

use crate::board::Board;
use crate::types::*;

impl Board {
    /// Number of non-empty cells strictly beyond `from` in direction `dir`,
    /// out to the board edge.
    fn pieces_on_ray(&self, from: u8, dir: usize) -> usize {
        let mut count = 0;
        let mut steps = 1;
        while let Some(s) = move_dest(from, dir, steps) {
            if self.get(s) != Piece::Empty {
                count += 1;
            }
            steps += 1;
        }
        count
    }

    /// Exact travel distance required along the axis of `dir`: every piece
    /// on the full line, plus one for the moving piece itself.
    fn required_distance(&self, from: u8, dir: usize) -> usize {
        self.pieces_on_ray(from, dir) + self.pieces_on_ray(from, opposite_dir(dir)) + 1
    }

    /// True if the path from `from` to `to` crosses an opposing piece or
    /// the destination holds a friendly piece, judged for the side to move.
    fn blocked(&self, from: u8, to: u8, dir: usize, length: usize) -> bool {
        for step in 1..length as i8 {
            let s = move_dest(from, dir, step).expect("interior of an on-board line");
            if self.get(s) == self.turn().opposite() {
                return true;
            }
        }
        self.get(to) == self.turn()
    }

    /// True iff `from`-`to` is a legal move for the side currently on move.
    pub fn is_legal(&self, from: u8, to: u8) -> bool {
        if self.get(from) != self.turn() {
            return false;
        }
        let dir = match direction_between(from, to) {
            Some(dir) => dir,
            None => return false,
        };
        let length = Move::new(from, to).length() as usize;
        length == self.required_distance(from, dir) && !self.blocked(from, to, dir, length)
    }

    /// [`Board::is_legal`] on a move value; its capture flag is ignored.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from, mv.to)
    }

    /// All legal moves for the side to move, returning a fresh vector.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.legal_moves_into(&mut out);
        out
    }

    /// All legal moves for the side to move, into a reusable buffer.
    ///
    /// For each piece and each of the 4 line axes the required distance is
    /// computed once and both endpoints at that distance are tested. Moves
    /// landing on an opposing piece come back capture-tagged.
    pub fn legal_moves_into(&self, out: &mut Vec<Move>) {
        out.clear();
        for from in 0..64u8 {
            if self.get(from) != self.turn() {
                continue;
            }
            for axis in 0..4 {
                let distance = self.required_distance(from, axis) as i8;
                for dir in [axis, opposite_dir(axis)] {
                    let to = match move_dest(from, dir, distance) {
                        Some(to) => to,
                        None => continue,
                    };
                    if self.is_legal(from, to) {
                        let mv = Move::new(from, to);
                        if self.get(to) == self.turn().opposite() {
                            out.push(mv.capture());
                        } else {
                            out.push(mv);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
