//! Memoization cache for static board evaluations
//!
//! Maps a position hash to the static score computed for that position.
//! The cached value is a pure function of the position (the evaluation
//! consults neither search depth nor side to move), so the hash alone is a
//! sufficient key. The table is direct-mapped and fixed-size: each hash
//! owns exactly one slot and a colliding store replaces the occupant,
//! which bounds memory for arbitrarily long sessions.
//!
//! Entries are never invalidated; the cache lives as long as the engine.

/// A cached static evaluation.
#[derive(Debug, Clone, Copy)]
struct EvalEntry {
    hash: u64,
    score: i32,
}

/// Direct-mapped evaluation cache.
pub struct EvalCache {
    entries: Vec<Option<EvalEntry>>,
    size: usize,
    hits: u64,
    misses: u64,
}

impl EvalCache {
    /// Create a cache with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<EvalEntry>>();
        let size = ((size_mb * 1024 * 1024) / entry_size).max(1024);

        Self {
            entries: vec![None; size],
            size,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up the score stored for a position hash.
    pub fn probe(&mut self, hash: u64) -> Option<i32> {
        let idx = (hash as usize) % self.size;
        match self.entries[idx] {
            Some(entry) if entry.hash == hash => {
                self.hits += 1;
                Some(entry.score)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a score for a position hash, replacing any slot occupant.
    pub fn store(&mut self, hash: u64, score: i32) {
        let idx = (hash as usize) % self.size;
        self.entries[idx] = Some(EvalEntry { hash, score });
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.hits = 0;
        self.misses = 0;
    }

    /// Usage and lookup statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.size,
            used: self.entries.iter().filter(|e| e.is_some()).count(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy)]
pub struct CacheStats {
    /// Total number of slots
    pub size: usize,
    /// Slots currently occupied
    pub used: usize,
    /// Probes answered from the cache
    pub hits: u64,
    /// Probes that required a fresh evaluation
    pub misses: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_probe() {
        let mut cache = EvalCache::new(1);
        cache.store(0x1234_5678_9ABC_DEF0, 42);
        assert_eq!(cache.probe(0x1234_5678_9ABC_DEF0), Some(42));
    }

    #[test]
    fn test_miss_on_absent_hash() {
        let mut cache = EvalCache::new(1);
        assert_eq!(cache.probe(0xDEAD_BEEF), None);
        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 0);
    }

    #[test]
    fn test_hit_counter() {
        let mut cache = EvalCache::new(1);
        cache.store(7, -100);
        assert_eq!(cache.probe(7), Some(-100));
        assert_eq!(cache.probe(7), Some(-100));
        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_colliding_store_replaces() {
        let mut cache = EvalCache::new(1);
        let size = cache.stats().size as u64;
        let a = 3u64;
        let b = 3u64 + size; // same slot, different hash
        cache.store(a, 1);
        cache.store(b, 2);
        assert_eq!(cache.probe(b), Some(2));
        // The evicted hash reads as a miss, never as a wrong score.
        assert_eq!(cache.probe(a), None);
    }

    #[test]
    fn test_clear() {
        let mut cache = EvalCache::new(1);
        cache.store(11, 5);
        cache.clear();
        assert_eq!(cache.probe(11), None);
        assert_eq!(cache.stats().used, 0);
    }

    #[test]
    fn test_minimum_size() {
        let cache = EvalCache::new(0);
        assert!(cache.stats().size >= 1024);
    }
}
