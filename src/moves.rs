use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_MOVE_SAMPLE: usize = 3;

/// Picks a handful of moves to show from an entry's full move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSampler {
    count: usize,
    seed: Option<u64>,
}

impl Default for MoveSampler {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_SAMPLE)
    }
}

impl MoveSampler {
    /// A sampler drawing from the thread-local generator.
    pub fn new(count: usize) -> Self {
        Self { count, seed: None }
    }

    /// A sampler that makes the same picks for the same input on every call.
    pub fn seeded(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed: Some(seed),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sample(&self, pool: Vec<String>) -> Vec<String> {
        match self.seed {
            Some(seed) => sample_moves(pool, self.count, &mut StdRng::seed_from_u64(seed)),
            None => sample_moves(pool, self.count, &mut rand::rng()),
        }
    }
}

/// Uniform selection without replacement: draw an index from what is left of
/// the pool and take that move out, until `count` are chosen or the pool is empty.
pub fn sample_moves<R: Rng + ?Sized>(mut pool: Vec<String>, count: usize, rng: &mut R) -> Vec<String> {
    let mut chosen = Vec::with_capacity(count.min(pool.len()));
    while chosen.len() < count && !pool.is_empty() {
        let index = rng.random_range(0..pool.len());
        chosen.push(pool.swap_remove(index));
    }
    chosen
}
