//! Uniform selection backed by a cryptographically secure generator.
//!
//! `SecureSelector` draws from the operating system generator unless a
//! different source is injected. The `TryCryptoRng` bound keeps
//! non-cryptographic generators out; source failures surface as
//! `WhimsyError::RandomSource` and are never retried.

use crate::error::{Result, WhimsyError};
use rand::rngs::OsRng;
use rand::{TryCryptoRng, TryRngCore};

#[derive(Debug)]
/// Picks uniformly random elements from slices.
pub struct SecureSelector<R = OsRng> {
    rng: R,
}

impl SecureSelector<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for SecureSelector<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> SecureSelector<R>
where
    R: TryRngCore + TryCryptoRng,
{
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Return a uniformly chosen element of `items`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(WhimsyError::EmptyInput);
        }
        let index = self.index_below(items.len())?;
        Ok(&items[index])
    }

    /// Unbiased index in `0..len`.
    ///
    /// Draws below `2^64 mod len` are discarded so every index maps to the
    /// same number of accepted 64-bit values.
    fn index_below(&mut self, len: usize) -> Result<usize> {
        let range = len as u64;
        let threshold = range.wrapping_neg() % range;
        loop {
            let value = self
                .rng
                .try_next_u64()
                .map_err(|err| WhimsyError::RandomSource(err.to_string()))?;
            if value >= threshold {
                return Ok((value % range) as usize);
            }
            tracing::trace!(value, threshold, "discarded biased draw");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Deterministic and failing sources for exercising selection paths.

    use rand::{CryptoRng, RngCore, TryCryptoRng, TryRngCore};
    use std::collections::VecDeque;
    use std::fmt;

    /// Replays a fixed list of 64-bit draws, then panics.
    #[derive(Debug)]
    pub struct Script {
        draws: VecDeque<u64>,
    }

    impl Script {
        pub fn new(draws: impl IntoIterator<Item = u64>) -> Self {
            Self {
                draws: draws.into_iter().collect(),
            }
        }

        /// Builds draws that land on `indices` in a slice of `len` items.
        pub fn indices(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
            Self::new(indices.into_iter().map(|index| draw_for(index, len)))
        }

        pub fn remaining(&self) -> usize {
            self.draws.len()
        }
    }

    /// A 64-bit value well above the rejection zone that maps to `index`.
    pub fn draw_for(index: usize, len: usize) -> u64 {
        let range = len as u64;
        let top = u64::MAX - u64::MAX % range;
        top - range + index as u64
    }

    impl RngCore for Script {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.draws.pop_front().expect("script ran out of draws")
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    impl CryptoRng for Script {}

    /// A source whose every draw fails.
    #[derive(Debug)]
    pub struct Broken;

    #[derive(Debug)]
    pub struct EntropyUnavailable;

    impl fmt::Display for EntropyUnavailable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("entropy source unavailable")
        }
    }

    impl TryRngCore for Broken {
        type Error = EntropyUnavailable;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            Err(EntropyUnavailable)
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            Err(EntropyUnavailable)
        }

        fn try_fill_bytes(&mut self, _dst: &mut [u8]) -> Result<(), Self::Error> {
            Err(EntropyUnavailable)
        }
    }

    impl TryCryptoRng for Broken {}
}
