//! Engine façade integrating the search components
//!
//! Owns the searcher (and through it the evaluation cache, which persists
//! across searches and across games for the engine's lifetime) and carries
//! the configured search depth.

use log::info;

use crate::board::{Board, Pos};
use crate::error::EngineError;
use crate::eval::CacheStats;
use crate::search::{SearchStats, Searcher, DEFAULT_DEPTH};

/// The AI decision engine.
///
/// # Example
///
/// ```
/// use omok::{Board, Engine, Pos, Stone};
///
/// // Shallow depth keeps the doc test fast
/// let mut engine = Engine::with_config(2, 8);
/// let mut board = Board::new();
/// board.try_place(Pos::new(7, 7), Stone::Human).unwrap();
///
/// let reply = engine.find_best_move(&mut board).unwrap();
/// board.try_place(reply, Stone::Ai).unwrap();
/// ```
pub struct Engine {
    searcher: Searcher,
    depth: i8,
}

impl Engine {
    /// Create an engine with the default depth (7 plies) and a 16 MB
    /// evaluation cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH, 16)
    }

    /// Create an engine with a custom search depth and cache size in MB.
    #[must_use]
    pub fn with_config(depth: i8, cache_mb: usize) -> Self {
        Self {
            searcher: Searcher::new(cache_mb),
            depth,
        }
    }

    /// Choose the AI's next move for the current position.
    ///
    /// The board is mutated during the search and restored before this
    /// returns; committing the chosen move is the caller's decision.
    pub fn find_best_move(&mut self, board: &mut Board) -> Result<Pos, EngineError> {
        let result = self.searcher.find_best_move(board, self.depth)?;
        let cache = self.searcher.cache_stats();
        info!(
            "best move ({}, {}) score {} nodes {} cache {}/{} hits",
            result.best_move.row,
            result.best_move.col,
            result.score,
            result.nodes,
            cache.hits,
            cache.hits + cache.misses,
        );
        Ok(result.best_move)
    }

    /// Current search depth in plies.
    #[must_use]
    pub fn depth(&self) -> i8 {
        self.depth
    }

    /// Set the search depth in plies.
    pub fn set_depth(&mut self, depth: i8) {
        self.depth = depth;
    }

    /// Cumulative search statistics.
    #[must_use]
    pub fn search_stats(&self) -> SearchStats {
        self.searcher.stats()
    }

    /// Evaluation cache statistics.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.searcher.cache_stats()
    }

    /// Drop all cached evaluations. Never called implicitly: the cache
    /// persists across games within a session.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_cache();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    #[test]
    fn test_engine_creation() {
        let engine = Engine::new();
        assert_eq!(engine.depth(), DEFAULT_DEPTH);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = Engine::with_config(3, 8);
        assert_eq!(engine.depth(), 3);
    }

    #[test]
    fn test_set_depth() {
        let mut engine = Engine::new();
        engine.set_depth(5);
        assert_eq!(engine.depth(), 5);
    }

    #[test]
    fn test_engine_move_is_playable() {
        let mut engine = Engine::with_config(2, 8);
        let mut board = Board::new();
        board.try_place(Pos::new(7, 7), Stone::Human).unwrap();

        let mov = engine.find_best_move(&mut board).unwrap();
        assert!(board.is_empty(mov));
        board.try_place(mov, Stone::Ai).unwrap();
    }

    #[test]
    fn test_cache_persists_across_searches() {
        let mut engine = Engine::with_config(2, 8);
        let mut board = Board::new();
        board.try_place(Pos::new(7, 7), Stone::Human).unwrap();

        let _ = engine.find_best_move(&mut board).unwrap();
        let used_after_first = engine.cache_stats().used;
        assert!(used_after_first > 0);

        let _ = engine.find_best_move(&mut board).unwrap();
        assert!(engine.cache_stats().hits > 0);

        engine.clear_cache();
        assert_eq!(engine.cache_stats().used, 0);
    }

    #[test]
    fn test_alternating_game_stays_consistent() {
        use crate::board::TOTAL_CELLS;

        let mut engine = Engine::with_config(2, 8);
        let mut board = Board::new();
        board.try_place(Pos::new(7, 7), Stone::Human).unwrap();

        for _ in 0..3 {
            let reply = engine.find_best_move(&mut board).unwrap();
            board.try_place(reply, Stone::Ai).unwrap();

            // Human answers on the first free cell.
            let next = (0..TOTAL_CELLS)
                .map(Pos::from_index)
                .find(|p| board.is_empty(*p))
                .unwrap();
            board.try_place(next, Stone::Human).unwrap();
        }

        assert_eq!(board.stone_count(), 7);
        assert_eq!(board.hash(), board.recompute_hash());
    }
}
