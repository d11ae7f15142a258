//! Negamax search with alpha-beta and null-move pruning
//!
//! One mutable `Board` is threaded through the whole recursion; every
//! candidate is applied in place and undone on the way back out. The
//! apply/undo pairing is enforced by the `PlacedStone` guard, so pruning
//! early-exits cannot leave the board or its hash desynchronized.

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::EngineError;
use crate::eval::{evaluate, evaluate_position, CacheStats, EvalCache, PatternScore};

use super::movegen::candidate_moves;

/// Alpha-beta bound standing in for infinity. Safely negatable and above
/// any reachable static score, so the root window is effectively unbounded.
pub const INF: i32 = 1_000_000_000;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: i8 = 7;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Nodes visited by `negamax`
    pub nodes: u64,
    /// Beta cutoffs (fail-high)
    pub beta_cutoffs: u64,
    /// Moves refuted by the reduced-depth null-move probe
    pub null_prunes: u64,
}

/// Result of a root search.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move found
    pub best_move: Pos,
    /// Negamax value of the best move
    pub score: i32,
    /// Nodes searched by this call
    pub nodes: u64,
}

/// A stone applied to the board for the duration of a scope.
///
/// `Drop` performs the mirror removal, restoring grid and hash on every
/// exit path: normal return, null-move refutation, or beta cutoff.
struct PlacedStone<'a> {
    board: &'a mut Board,
    pos: Pos,
    stone: Stone,
}

impl<'a> PlacedStone<'a> {
    fn place(board: &'a mut Board, pos: Pos, stone: Stone) -> Self {
        board.place_stone(pos, stone);
        Self { board, pos, stone }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos, self.stone);
    }
}

/// Recursive negamax driver with its evaluation cache.
pub struct Searcher {
    cache: EvalCache,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher with an evaluation cache of the given size in MB.
    #[must_use]
    pub fn new(cache_mb: usize) -> Self {
        Self {
            cache: EvalCache::new(cache_mb),
            stats: SearchStats::default(),
        }
    }

    /// Find the AI's best move at the given depth.
    ///
    /// Iterates the root candidates in generation order with an unbounded
    /// window; ties keep the first-seen move, and a move whose value equals
    /// `PatternScore::WIN` short-circuits the remaining candidates.
    pub fn find_best_move(
        &mut self,
        board: &mut Board,
        depth: i8,
    ) -> Result<SearchResult, EngineError> {
        let moves = candidate_moves(board);
        if moves.is_empty() {
            return Err(EngineError::BoardFull);
        }

        let nodes_before = self.stats.nodes;
        let mut best_value = -INF;
        let mut best_move = Pos::center();

        for mov in moves {
            let mut placed = PlacedStone::place(board, mov, Stone::Ai);
            let value = -self.negamax(placed.board(), depth, -INF, INF, Stone::Human);
            drop(placed);

            debug!("root candidate ({}, {}) -> {}", mov.row, mov.col, value);

            if value > best_value {
                best_value = value;
                best_move = mov;
            }

            // Immediate win found
            if value == PatternScore::WIN {
                break;
            }
        }

        Ok(SearchResult {
            best_move,
            score: best_value,
            nodes: self.stats.nodes - nodes_before,
        })
    }

    /// Negamax with alpha-beta and null-move pruning.
    ///
    /// `player` is the side to move at this node. Depth 0 returns the
    /// static evaluation as-is: the leaf value is absolute (AI
    /// perspective), not relative to the mover.
    fn negamax(&mut self, board: &mut Board, depth: i8, mut alpha: i32, beta: i32, player: Stone) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return evaluate(board, &mut self.cache);
        }

        let moves = candidate_moves(board);
        if moves.is_empty() {
            return 0;
        }

        // Order candidates by their value as AI placements, best first.
        // The AI bias applies to both movers; it only steers pruning.
        let mut scored: Vec<(Pos, i32)> = moves
            .into_iter()
            .map(|mov| (mov, evaluate_position(board, mov, Stone::Ai)))
            .collect();
        scored.sort_unstable_by(|a, b| b.1.cmp(&a.1));

        let opponent = player.opponent();
        let mut best_value = -INF;

        for (mov, _) in scored {
            let mut placed = PlacedStone::place(board, mov, player);

            // Null-move probe: give the opponent the next ply at reduced
            // depth with a null window around beta. If even that refutes
            // the position, this node cannot beat beta.
            if depth >= 3 {
                let probe = -self.negamax(placed.board(), depth - 3, -beta, -beta + 1, opponent);
                if probe >= beta {
                    self.stats.null_prunes += 1;
                    return beta;
                }
            }

            let value = -self.negamax(placed.board(), depth - 1, -beta, -alpha, opponent);
            drop(placed);

            if value > best_value {
                best_value = value;
                if value > alpha {
                    alpha = value;
                }
                if alpha >= beta {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
            }
        }

        best_value
    }

    /// Cumulative statistics since creation.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Evaluation cache statistics.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop all cached evaluations.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
