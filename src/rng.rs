//! Random number generation for deck operations.
//!
//! Deck operations that take an optional seed use a process-wide
//! [`MersenneRng`] and reseed it, which changes the outcome of every later
//! unseeded operation in the process. The generator and its sampling match
//! CPython's `random` module, so `seed(42)` followed by a shuffle yields the
//! same order there and here. Use the `_with` deck methods and your own
//! generator to stay independent of it.

use core::fmt;

use log::debug;
use rand::{Rng, RngCore};
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use rand_chacha::ChaCha8Rng;
use rand_mt::Mt;

use crate::sync::Mutex;

/// 32-bit Mersenne Twister seeded and sampled like CPython's `random`.
///
/// ```
/// use cardeck::MersenneRng;
///
/// // random.seed(42); random.getrandbits(32)
/// assert_eq!(MersenneRng::seed_from_u64(42).getrandbits(32), 2_746_317_213);
/// ```
#[derive(Clone)]
pub struct MersenneRng {
    mt: Mt,
}

impl MersenneRng {
    /// Seeds the generator the way CPython seeds from a non-negative integer:
    /// the integer is split into 32-bit words, least significant first, and
    /// fed to `init_by_array`.
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        let low = seed as u32;
        let high = (seed >> 32) as u32;
        let mt = if high == 0 {
            Mt::new_with_key([low])
        } else {
            Mt::new_with_key([low, high])
        };
        Self { mt }
    }

    /// Returns the next 32-bit output of the twister.
    pub fn next_u32(&mut self) -> u32 {
        self.mt.next_u32()
    }

    /// Returns an integer with `k` random bits, `1 <= k <= 64`.
    ///
    /// Words are consumed least significant first and the last word keeps
    /// its high bits, as in CPython.
    pub fn getrandbits(&mut self, k: u32) -> u64 {
        debug_assert!((1..=64).contains(&k));
        if k <= 32 {
            u64::from(self.mt.next_u32() >> (32 - k))
        } else {
            let low = u64::from(self.mt.next_u32());
            let high = u64::from(self.mt.next_u32() >> (64 - k));
            (high << 32) | low
        }
    }

    /// Returns a uniform integer in `0..n` by rejection sampling on
    /// `getrandbits(n.bit_length())`. Returns 0 without drawing when `n` is 0.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }

        let n = n as u64;
        let k = u64::BITS - n.leading_zeros();
        loop {
            let r = self.getrandbits(k);
            if r < n {
                return r as usize;
            }
        }
    }

    /// Shuffles `items` in place with CPython's Fisher-Yates walk, from the
    /// last index down to 1.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

impl fmt::Debug for MersenneRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneRng").finish_non_exhaustive()
    }
}

/// Picks positions for random deck operations.
pub trait PickIndex {
    /// Returns a uniform index in `0..bound`. `bound` is never 0.
    fn pick_index(&mut self, bound: usize) -> usize;
}

impl PickIndex for MersenneRng {
    fn pick_index(&mut self, bound: usize) -> usize {
        self.below(bound)
    }
}

/// Adapts any [`RngCore`] to [`PickIndex`] through `Rng::random_range`.
#[derive(Debug, Clone)]
pub struct RngIndex<R>(pub R);

impl<R: RngCore> PickIndex for RngIndex<R> {
    fn pick_index(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

static SHARED: Mutex<Option<MersenneRng>> = Mutex::new(None);

/// Seed of the shared generator when no entropy source is available.
#[cfg(not(feature = "std"))]
const FALLBACK_SEED: u64 = 0x0C4D_DEC4;

#[cfg(feature = "std")]
fn fresh_generator() -> MersenneRng {
    MersenneRng::seed_from_u64(ChaCha8Rng::from_os_rng().next_u64())
}

#[cfg(not(feature = "std"))]
fn fresh_generator() -> MersenneRng {
    MersenneRng::seed_from_u64(FALLBACK_SEED)
}

/// Runs `f` on the shared generator, reseeding it first when `seed` is set.
///
/// The lock is held for the whole call.
pub(crate) fn with_shared_rng<T>(seed: Option<u64>, f: impl FnOnce(&mut MersenneRng) -> T) -> T {
    let mut shared = SHARED.lock();
    if let Some(seed) = seed {
        debug!("Reseeding shared generator with {seed}");
        *shared = Some(MersenneRng::seed_from_u64(seed));
    }
    f(shared.get_or_insert_with(fresh_generator))
}

/// Reseeds the process-wide generator.
pub fn seed_shared_rng(seed: u64) {
    with_shared_rng(Some(seed), |_| ());
}

/// Handle to the process-wide generator.
///
/// Every call locks the shared generator, so draws made through this handle
/// interleave with any other user of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedRng;

impl PickIndex for SharedRng {
    fn pick_index(&mut self, bound: usize) -> usize {
        with_shared_rng(None, |rng| rng.below(bound))
    }
}

impl RngCore for SharedRng {
    fn next_u32(&mut self) -> u32 {
        with_shared_rng(None, MersenneRng::next_u32)
    }

    fn next_u64(&mut self) -> u64 {
        with_shared_rng(None, |rng| rng.getrandbits(64))
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        with_shared_rng(None, |rng| {
            for chunk in dst.chunks_mut(4) {
                let word = rng.next_u32().to_le_bytes();
                chunk.copy_from_slice(&word[..chunk.len()]);
            }
        });
    }
}
