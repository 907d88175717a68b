//! Uniform random sampling of a fetched page.
//!
//! The widget shows a handful of movies chosen from the full page. Selection
//! is a partial Fisher-Yates shuffle, so every subset of the requested size
//! is equally likely and the random source can be seeded for repeatable
//! runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of movies kept from each page unless configured otherwise.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Returns up to `count` items drawn uniformly without replacement.
///
/// The result is in draw order. When `items` holds `count` or fewer
/// elements, all of them are returned in a shuffled order. No deduplication
/// or filtering is performed.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use popcorn::sampler::sample;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = sample((1..=20).collect::<Vec<u32>>(), 5, &mut rng);
/// assert_eq!(picked.len(), 5);
/// ```
pub fn sample<T, R>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let len = items.len();
    let take = count.min(len);

    for index in 0..take {
        let pick = rng.gen_range(index..len);
        items.swap(index, pick);
    }

    items.truncate(take);
    items
}

/// Sampler owning its random source and target size.
#[derive(Debug, Clone)]
pub struct MovieSampler {
    rng: StdRng,
    size: usize,
}

impl MovieSampler {
    /// Creates a sampler seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy(size: usize) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            size,
        }
    }

    /// Creates a sampler with a fixed seed, yielding identical draws for
    /// identical input.
    #[must_use]
    pub fn seeded(seed: u64, size: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            size,
        }
    }

    /// Creates a sampler from an optional seed.
    #[must_use]
    pub fn new(seed: Option<u64>, size: usize) -> Self {
        seed.map_or_else(
            || Self::from_entropy(size),
            |value| Self::seeded(value, size),
        )
    }

    /// Number of items each draw keeps.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Draws up to [`Self::size`] items from `items`.
    pub fn draw<T>(&mut self, items: Vec<T>) -> Vec<T> {
        sample(items, self.size, &mut self.rng)
    }
}
