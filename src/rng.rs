//! Random sources for shuffling decks and turn orders.
//!
//! By default every shuffle draws from a single generator shared by the whole
//! process. The generator is seeded once, the first time it is used, so decks
//! created in quick succession still shuffle independently. A seeded source
//! can be used instead to replay a game.

use std::sync::{LazyLock, Mutex, PoisonError};

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

static PROCESS_RNG: LazyLock<Mutex<ChaCha8Rng>> =
    LazyLock::new(|| Mutex::new(ChaCha8Rng::from_rng(&mut rand::rng())));

/// Where shuffles get their randomness from.
#[derive(Debug, Clone, Default)]
pub enum RandomSource {
    /// The process-wide generator.
    #[default]
    Process,
    /// A generator owned by this source, for reproducible shuffles.
    Seeded(Box<ChaCha8Rng>),
}

impl RandomSource {
    /// Creates a source seeded with the given value.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgame::RandomSource;
    ///
    /// let mut a = RandomSource::seeded(7);
    /// let mut b = RandomSource::seeded(7);
    /// let mut xs = [1, 2, 3, 4, 5, 6, 7, 8];
    /// let mut ys = xs;
    /// a.shuffle(&mut xs);
    /// b.shuffle(&mut ys);
    /// assert_eq!(xs, ys);
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Box::new(ChaCha8Rng::seed_from_u64(seed)))
    }

    /// Shuffles a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        match self {
            Self::Process => {
                let mut rng = PROCESS_RNG.lock().unwrap_or_else(PoisonError::into_inner);
                items.shuffle(&mut *rng);
            }
            Self::Seeded(rng) => items.shuffle(rng.as_mut()),
        }
    }

    /// Derives an independent source from this one.
    ///
    /// Forking the process source returns the process source, forking a
    /// seeded source returns a new seeded source that is deterministic given
    /// the parent state.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        match self {
            Self::Process => Self::Process,
            Self::Seeded(rng) => Self::Seeded(Box::new(ChaCha8Rng::from_rng(rng.as_mut()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat() {
        let mut a = RandomSource::seeded(42);
        let mut b = RandomSource::seeded(42);

        let mut xs: Vec<u32> = (0..52).collect();
        let mut ys = xs.clone();
        a.shuffle(&mut xs);
        b.shuffle(&mut ys);
        assert_eq!(xs, ys);
    }

    #[test]
    fn forks_are_deterministic_and_independent() {
        let mut a = RandomSource::seeded(42);
        let mut b = RandomSource::seeded(42);
        let mut fork_a = a.fork();
        let mut fork_b = b.fork();

        let mut xs: Vec<u32> = (0..52).collect();
        let mut ys = xs.clone();
        fork_a.shuffle(&mut xs);
        fork_b.shuffle(&mut ys);
        assert_eq!(xs, ys);

        let mut zs: Vec<u32> = (0..52).collect();
        a.shuffle(&mut zs);
        assert_ne!(xs, zs);
    }

    #[test]
    fn process_source_shuffles() {
        let original: Vec<u32> = (0..52).collect();
        let mut first = original.clone();
        let mut second = original.clone();

        let mut rng = RandomSource::Process;
        rng.shuffle(&mut first);
        rng.shuffle(&mut second);

        assert_ne!(first, original);
        assert_ne!(first, second);
        assert!(matches!(rng.fork(), RandomSource::Process));
    }
}
