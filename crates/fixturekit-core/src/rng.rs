//! Random number generator abstraction for determinism.
//!
//! Every generator takes a `&mut dyn DeterministicRng`. In production this is
//! a `SeededRng`; in tests a seeded or scripted implementation is injected.

use std::cell::RefCell;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{RngConfig, SEED_VAR};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u64` in the range `[0, bound)`.
    ///
    /// Callers never pass a `bound` of zero.
    fn next_u64_below(&mut self, bound: u64) -> u64;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// Production RNG backed by ChaCha8, always constructed from a known seed.
///
/// Remembering the seed lets a failing test run be reproduced by exporting
/// `FIXTUREKIT_SEED`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl SeededRng {
    /// Create an RNG producing the stream for `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG from a fresh seed drawn from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        tracing::info!(seed, "seeded fixture RNG from entropy; set {SEED_VAR} to replay");
        Self::from_seed(seed)
    }

    /// Create an RNG from configuration, falling back to entropy when no seed
    /// is configured.
    #[must_use]
    pub fn from_config(config: &RngConfig) -> Self {
        match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DeterministicRng for SeededRng {
    fn next_u64_below(&mut self, bound: u64) -> u64 {
        self.inner.random_range(0..bound)
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.random()
    }
}

thread_local! {
    static THREAD_RNG: RefCell<SeededRng> = RefCell::new(thread_rng_from_env());
}

fn thread_rng_from_env() -> SeededRng {
    match RngConfig::from_env() {
        Ok(config) => SeededRng::from_config(&config),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed seed configuration");
            SeededRng::from_entropy()
        }
    }
}

/// Runs `f` with the calling thread's shared RNG.
///
/// The RNG is created lazily on first use from `RngConfig::from_env()`.
/// Calls must not nest: `f` receives the RNG by mutable reference and should
/// pass it down rather than calling `with_thread_rng` again.
pub fn with_thread_rng<T>(f: impl FnOnce(&mut dyn DeterministicRng) -> T) -> T {
    THREAD_RNG.with(|cell| f(&mut *cell.borrow_mut()))
}
