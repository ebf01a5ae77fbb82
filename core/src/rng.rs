//! Random source for content sampling.
//!
//! Mock-test shuffles and random opponent picks are non-reproducible
//! in production: `ContentRng::from_entropy()` seeds a fresh PCG stream
//! from the OS. Tests construct `ContentRng::seeded(n)` instead, which
//! makes every draw reproducible.

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct ContentRng {
    seed:  u64,
    inner: Pcg64Mcg,
}

impl ContentRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// The seed this stream was built from (logged so a run can be replayed).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Uniform Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Pick one element uniformly, `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_u64_below(items.len() as u64) as usize;
        items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_shuffle() {
        let mut a: Vec<u32> = (0..50).collect();
        let mut b = a.clone();
        ContentRng::seeded(0xC0FFEE).shuffle(&mut a);
        ContentRng::seeded(0xC0FFEE).shuffle(&mut b);
        assert_eq!(a, b, "Same seed should produce the same order");

        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>(), "Shuffle must be a permutation");
    }

    #[test]
    fn pick_on_empty_is_none() {
        let mut rng = ContentRng::seeded(7);
        let empty: [u8; 0] = [];
        assert!(rng.pick(&empty).is_none());
        assert_eq!(rng.pick(&[42]), Some(&42));
    }
}
