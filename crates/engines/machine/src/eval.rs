use loa_core::{Board, Piece};

/// A position-score magnitude indicating a win: positive for White,
/// negative for Black. Larger in magnitude than any positional score, so
/// the search treats decided positions as absolute.
pub const WINNING_VALUE: i32 = i32::MAX - 20;

/// Static board value, positive favoring White.
pub fn evaluate(board: &mut Board) -> i32 {
    match board.winner() {
        Some(Piece::White) => WINNING_VALUE,
        Some(Piece::Black) => -WINNING_VALUE,
        _ => region_score(board),
    }
}

/// Fewer, larger clusters score better. The game is won by forming a single
/// contiguous region, so the region count and the largest region size are
/// the two positional signals.
fn region_score(board: &mut Board) -> i32 {
    let (black_regions, black_max) = side_stats(board, Piece::Black);
    let (white_regions, white_max) = side_stats(board, Piece::White);
    (black_regions - white_regions) + (white_max - black_max)
}

fn side_stats(board: &mut Board, side: Piece) -> (i32, i32) {
    let sizes = board.get_region_sizes(side);
    let count = sizes.len() as i32;
    let max = sizes.first().copied().unwrap_or(0) as i32;
    (count, max)
}
