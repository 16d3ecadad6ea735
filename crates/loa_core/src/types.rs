use std::fmt;

/// Contents of one board cell. `Black` and `White` are the two players;
/// `Empty` marks an unoccupied cell and doubles as the "tie" winner value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece {
    Empty,
    Black,
    White,
}

impl Piece {
    /// The opposing side. Defined for `Black` and `White` only; asking for
    /// the opposite of `Empty` is a bug in the caller.
    pub fn opposite(self) -> Piece {
        match self {
            Piece::Black => Piece::White,
            Piece::White => Piece::Black,
            Piece::Empty => panic!("Piece::Empty has no opposite"),
        }
    }

    pub fn abbrev(self) -> char {
        match self {
            Piece::Empty => '-',
            Piece::Black => 'b',
            Piece::White => 'w',
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Piece::Empty => "-",
            Piece::Black => "black",
            Piece::White => "white",
        }
    }
}

// Square helpers. A square is a linear index 0..64, rank-major.
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Some((r - b'1') * 8 + (f - b'a'))
}

/// The 8 compass directions as (file, rank) deltas. Index `d` and index
/// `d + 4` are opposites; indices 0..4 are the four line axes.
pub const DIRS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub fn opposite_dir(dir: usize) -> usize {
    (dir + 4) % 8
}

/// The square `steps` cells away from `from` in direction `dir`, or `None`
/// if that walks off the board.
pub fn move_dest(from: u8, dir: usize, steps: i8) -> Option<u8> {
    let (df, dr) = DIRS[dir];
    sq(file_of(from) + df * steps, rank_of(from) + dr * steps)
}

/// Direction index from `from` to `to`, or `None` if the two squares are
/// equal or not on a common line.
pub fn direction_between(from: u8, to: u8) -> Option<usize> {
    if from == to {
        return None;
    }
    let df = file_of(to) - file_of(from);
    let dr = rank_of(to) - rank_of(from);
    if df != 0 && dr != 0 && df.abs() != dr.abs() {
        return None;
    }
    let step = (df.signum(), dr.signum());
    DIRS.iter().position(|&d| d == step)
}

/// The up-to-8 squares adjacent to `from` (king-move adjacency).
pub fn adjacent(from: u8) -> impl Iterator<Item = u8> {
    (0..DIRS.len()).filter_map(move |dir| move_dest(from, dir, 1))
}

/// A move of one piece between two squares. Equality includes the capture
/// flag; `length` is the Chebyshev distance between the endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: u8,
    pub to: u8,
    pub is_capture: bool,
}

impl Move {
    pub fn new(from: u8, to: u8) -> Self {
        Self {
            from,
            to,
            is_capture: false,
        }
    }

    /// The same move, tagged as a capture.
    pub fn capture(self) -> Self {
        Self {
            is_capture: true,
            ..self
        }
    }

    pub fn length(self) -> u8 {
        let df = (file_of(self.to) - file_of(self.from)).abs();
        let dr = (rank_of(self.to) - rank_of(self.from)).abs();
        df.max(dr) as u8
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", sq_to_coord(self.from), sq_to_coord(self.to))
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
