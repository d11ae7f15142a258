//! Position evaluation: pattern scoring and the cached static evaluator

pub mod cache;
pub mod heuristic;
pub mod patterns;

pub use cache::{CacheStats, EvalCache};
pub use heuristic::{evaluate, evaluate_position};
pub use patterns::{score_direction, PatternScore, DIRECTIONS};
