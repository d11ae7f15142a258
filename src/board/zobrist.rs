//! Zobrist hashing for position identification
//!
//! Zobrist hashing allows O(1) incremental hash updates when placing or
//! removing stones, which is what makes the evaluation cache usable during
//! search. The position hash is the XOR of one precomputed 64-bit key per
//! occupied (cell, player) pair; XOR is its own inverse, so applying and
//! undoing the same move restores the previous hash exactly.

use std::sync::OnceLock;

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::{Pos, Stone, TOTAL_CELLS};

/// Fixed RNG seed. Same seed = same table = reproducible hashes across runs.
const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

static TABLE: OnceLock<ZobristTable> = OnceLock::new();

/// Zobrist key table: one random 64-bit value per (cell, player) pair.
pub struct ZobristTable {
    human: [u64; TOTAL_CELLS],
    ai: [u64; TOTAL_CELLS],
}

impl ZobristTable {
    /// Build a table with deterministic pseudo-random keys.
    #[must_use]
    pub fn new() -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(ZOBRIST_SEED);

        let mut human = [0u64; TOTAL_CELLS];
        let mut ai = [0u64; TOTAL_CELLS];
        for i in 0..TOTAL_CELLS {
            human[i] = rng.next_u64();
            ai[i] = rng.next_u64();
        }

        Self { human, ai }
    }

    /// The process-wide table used by every `Board`.
    pub fn global() -> &'static Self {
        TABLE.get_or_init(Self::new)
    }

    /// Key for a player's stone at a cell. `Stone::Empty` contributes nothing.
    #[inline]
    #[must_use]
    pub fn key(&self, pos: Pos, stone: Stone) -> u64 {
        match stone {
            Stone::Human => self.human[pos.to_index()],
            Stone::Ai => self.ai[pos.to_index()],
            Stone::Empty => 0,
        }
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let t1 = ZobristTable::new();
        let t2 = ZobristTable::new();
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            assert_eq!(t1.key(pos, Stone::Human), t2.key(pos, Stone::Human));
            assert_eq!(t1.key(pos, Stone::Ai), t2.key(pos, Stone::Ai));
        }
    }

    #[test]
    fn test_empty_contributes_nothing() {
        let t = ZobristTable::new();
        assert_eq!(t.key(Pos::new(7, 7), Stone::Empty), 0);
    }

    #[test]
    fn test_keys_distinct_per_player() {
        let t = ZobristTable::new();
        let pos = Pos::new(3, 11);
        assert_ne!(t.key(pos, Stone::Human), t.key(pos, Stone::Ai));
    }

    #[test]
    fn test_keys_distinct_per_cell() {
        let t = ZobristTable::new();
        assert_ne!(
            t.key(Pos::new(0, 0), Stone::Ai),
            t.key(Pos::new(0, 1), Stone::Ai)
        );
    }

    #[test]
    fn test_global_is_shared() {
        let a = ZobristTable::global();
        let b = ZobristTable::global();
        assert!(std::ptr::eq(a, b));
    }
}
