//! Seeded request-workload generation.
//!
//! Experiments beyond fixed literal sequences need generated workloads;
//! these are deterministic for a given seed so runs stay reproducible.

use mtflab_core::{Element, ListState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator of request sequences over a list's element universe.
///
/// Expects a non-empty universe.
///
/// # Example
///
/// ```
/// use mtflab_core::ListState;
/// use mtflab_search::Workload;
///
/// let initial = ListState::new([0, 1, 2, 3, 4]).unwrap();
/// let mut workload = Workload::seeded(&initial, 42);
///
/// let a = workload.uniform(100);
/// assert_eq!(a.len(), 100);
///
/// // Same seed, same sequence.
/// let b = Workload::seeded(&initial, 42).uniform(100);
/// assert_eq!(a, b);
/// ```
#[derive(Debug)]
pub struct Workload {
    alphabet: Vec<Element>,
    rng: ChaCha8Rng,
}

impl Workload {
    /// Creates a generator over the universe of `initial`, seeded for
    /// reproducibility.
    pub fn seeded(initial: &ListState, seed: u64) -> Self {
        Workload {
            alphabet: initial.elements().to_vec(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// `len` requests drawn uniformly from the universe.
    pub fn uniform(&mut self, len: usize) -> Vec<Element> {
        (0..len)
            .map(|_| self.alphabet[self.rng.random_range(0..self.alphabet.len())])
            .collect()
    }

    /// `len` requests biased toward the first `hot_len` elements of the
    /// universe: each request comes from the hot prefix with probability
    /// 0.9. This is the locality pattern move-to-front exploits.
    pub fn localized(&mut self, len: usize, hot_len: usize) -> Vec<Element> {
        let hot = hot_len.clamp(1, self.alphabet.len());
        (0..len)
            .map(|_| {
                if self.rng.random_bool(0.9) {
                    self.alphabet[self.rng.random_range(0..hot)]
                } else {
                    self.alphabet[self.rng.random_range(0..self.alphabet.len())]
                }
            })
            .collect()
    }
}
