//! "Perft" move-generation test: count the number of leaves at a given depth.
//! Exercises legal-move detection and flipping together from the starting position.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, BoardError, Color};

/// Count the leaves `depth` plies below the starting position, black to move.
/// A pass counts as a ply; a node where both sides have passed is a leaf.
pub fn run_perft(depth: u64) -> Result<u64, BoardError> {
    leaves_below(&Board::new(), Color::default(), depth, false)
}

fn leaves_below(board: &Board, color: Color, depth: u64, passed: bool) -> Result<u64, BoardError> {
    // Leaf node for this depth
    if depth == 0 {
        return Ok(1);
    }

    let all_moves = board.valid_moves(color);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return Ok(1);
        }

        return leaves_below(board, !color, depth - 1, true);
    }

    let mut leaves = 0;
    for mv in all_moves {
        let mut child = board.clone();
        child.place_piece(mv, color)?;
        leaves += leaves_below(&child, !color, depth - 1, false)?;
    }
    Ok(leaves)
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), Ok(4));
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), Ok(12));
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), Ok(56));
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), Ok(244));
}
