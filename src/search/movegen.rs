//! Candidate move generation
//!
//! A cell is a candidate if it is empty and touches at least one occupied
//! cell among its 8 immediate neighbors. The radius is exactly one cell:
//! moves two or more cells away from every stone are never proposed. That
//! bounds the search breadth at the cost of making isolated "jump"
//! openings unreachable, a deliberate trade-off the engine's tuning
//! depends on.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

/// Candidate moves for the current position, in row-major scan order.
///
/// The empty board yields exactly the center cell. The only other board
/// with no qualifying cell is a full one, which yields an empty set; the
/// search layers treat that as their neutral/error case.
#[must_use]
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let sz = BOARD_SIZE as i32;
    let mut moves = Vec::with_capacity(64);

    for row in 0..sz {
        for col in 0..sz {
            let pos = Pos::new(row as u8, col as u8);
            if board.get(pos) != Stone::Empty {
                continue;
            }

            'neighbors: for dr in -1..=1 {
                for dc in -1..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let nr = row + dr;
                    let nc = col + dc;
                    if Pos::is_valid(nr, nc)
                        && board.get(Pos::new(nr as u8, nc as u8)) != Stone::Empty
                    {
                        moves.push(pos);
                        break 'neighbors;
                    }
                }
            }
        }
    }

    moves
}
