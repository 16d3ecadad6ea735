use crate::{board::Board, types::Move};

/// Pure perft node count.
/// Counts all positions reachable from the current one down to `depth`;
/// decided positions are counted as leaves.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 || board.game_over() {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        board.legal_moves_into(buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            board.make_move(mv);
            nodes += inner(board, depth - 1, rest);
            board.retract();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, depth, &mut layers[..])
}
