//! Static position evaluation
//!
//! `evaluate_position` scores one stone's contribution across the four
//! axes. `evaluate` aggregates it over the whole board into a single
//! signed score from the AI's perspective, memoized by position hash.

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};

use super::cache::EvalCache;
use super::patterns::{score_direction, DIRECTIONS};

/// Opponent lines are weighted double: blocking outranks building.
const DEFENSE_BIAS: i32 = 2;

/// Score one stone's line contributions along all four axes.
///
/// The cell need not actually hold a stone; it is scored as if `stone`
/// stood there. Move ordering exploits this to rank candidate placements.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, stone: Stone) -> i32 {
    let mut score = 0;
    for &dir in &DIRECTIONS {
        score += score_direction(board, pos, dir, stone);
    }
    score
}

/// Static whole-board evaluation, memoized by the board's hash.
///
/// Positive favors the AI. The value is absolute, independent of whose
/// turn it is, which is what makes caching by position hash alone sound.
#[must_use]
pub fn evaluate(board: &Board, cache: &mut EvalCache) -> i32 {
    if let Some(score) = cache.probe(board.hash()) {
        return score;
    }

    let mut ai_score = 0;
    let mut human_score = 0;

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        match board.get(pos) {
            Stone::Ai => ai_score += evaluate_position(board, pos, Stone::Ai),
            Stone::Human => human_score += evaluate_position(board, pos, Stone::Human),
            Stone::Empty => {}
        }
    }

    let score = ai_score - DEFENSE_BIAS * human_score;
    cache.store(board.hash(), score);
    score
}
