//! Solver tuning knobs.
//!
//! Chunk sizes only affect how many operations the general solver emits,
//! never whether the result is sorted.

use serde::{Deserialize, Serialize};

use crate::push_swap_error::PushSwapError;

/// Largest input the exact small-N solvers handle.
pub const MAX_SMALL_LIMIT: usize = 5;

/// An inclusive upper bound on N and the chunk size used up to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkTier {
    pub max_len: usize,
    pub chunk: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Inputs up to this length go to the exact solvers; must be `<= 5`.
    pub small_limit: usize,
    /// Tiers checked in order; the first with `n <= max_len` wins.
    pub tiers: Vec<ChunkTier>,
    /// Chunk size when no tier matches.
    pub fallback_chunk: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            small_limit: MAX_SMALL_LIMIT,
            tiers: vec![
                ChunkTier { max_len: 100, chunk: 15 },
                ChunkTier { max_len: 500, chunk: 30 },
            ],
            fallback_chunk: 45,
        }
    }
}

impl SolverConfig {
    /// Chunk size for an input of `n` elements.
    pub fn chunk_size(&self, n: usize) -> usize {
        self.tiers
            .iter()
            .find(|t| n <= t.max_len)
            .map_or(self.fallback_chunk, |t| t.chunk)
    }

    pub fn validate(&self) -> Result<(), PushSwapError> {
        if self.small_limit > MAX_SMALL_LIMIT {
            return Err(PushSwapError::InvalidConfig("small_limit must be at most 5"));
        }
        if self.fallback_chunk == 0 || self.tiers.iter().any(|t| t.chunk == 0) {
            return Err(PushSwapError::InvalidConfig("chunk sizes must be non-zero"));
        }
        Ok(())
    }
}
