//! Digit sources for CPF generation.
//!
//! Generation draws its base digits from a [`DigitSource`] handed to the
//! service, so tests can pin the output instead of relying on a global RNG.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of uniformly distributed decimal digits.
///
/// Implementations must be `Send + Sync` so a single service can be shared
/// across threads.
pub trait DigitSource: Send + Sync {
    /// Return the next digit, in `0..=9`.
    fn next_digit(&self) -> u8;
}

/// Deterministic source that cycles through a fixed digit sequence.
///
/// ```rust
/// use cpf::{DigitSource, FixedDigitSource};
///
/// let source = FixedDigitSource::new(vec![3, 1]);
/// assert_eq!(source.next_digit(), 3);
/// assert_eq!(source.next_digit(), 1);
/// assert_eq!(source.next_digit(), 3);
/// ```
#[derive(Debug)]
pub struct FixedDigitSource {
    digits: Vec<u8>,
    cursor: AtomicUsize,
}

impl FixedDigitSource {
    /// Create a source that repeats `digits`. Values above 9 are reduced
    /// modulo 10; an empty sequence always yields `0`.
    pub fn new(digits: Vec<u8>) -> Self {
        Self {
            digits: digits.into_iter().map(|d| d % 10).collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Create a source from a string of ASCII digits, skipping anything else.
    pub fn from_digits(digits: &str) -> Self {
        Self::new(
            digits
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect(),
        )
    }
}

impl DigitSource for FixedDigitSource {
    fn next_digit(&self) -> u8 {
        if self.digits.is_empty() {
            return 0;
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.digits[i % self.digits.len()]
    }
}

#[cfg(feature = "rand")]
mod rng {
    use std::sync::Mutex;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::DigitSource;

    /// Digit source backed by the thread-local generator from `rand`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ThreadRngSource;

    impl DigitSource for ThreadRngSource {
        fn next_digit(&self) -> u8 {
            rand::thread_rng().gen_range(0..=9)
        }
    }

    /// Reproducible digit source seeded with a fixed value.
    #[derive(Debug)]
    pub struct SeededDigitSource {
        rng: Mutex<StdRng>,
    }

    impl SeededDigitSource {
        /// Create a source whose digit sequence is fixed by `seed`.
        pub fn new(seed: u64) -> Self {
            Self {
                rng: Mutex::new(StdRng::seed_from_u64(seed)),
            }
        }
    }

    impl DigitSource for SeededDigitSource {
        fn next_digit(&self) -> u8 {
            // The generator state is valid even if another thread panicked
            // while holding the lock.
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.gen_range(0..=9)
        }
    }

    #[cfg(test)]
    mod tests {
        use std::sync::Arc;
        use std::thread;

        use super::*;

        #[test]
        fn seeded_recovers_from_poisoned_lock() {
            let source = Arc::new(SeededDigitSource::new(7));

            let holder = Arc::clone(&source);
            let joined = thread::spawn(move || {
                let _guard = holder.rng.lock().unwrap();
                panic!("panic while holding the generator lock");
            })
            .join();
            assert!(joined.is_err());
            assert!(source.rng.is_poisoned());

            for _ in 0..16 {
                assert!(source.next_digit() <= 9);
            }
        }
    }
}

#[cfg(feature = "rand")]
pub use rng::{SeededDigitSource, ThreadRngSource};
