//! Uniform word index selection.
//!
//! Every draw requests exactly 4 bytes from the random source and
//! interprets them as a little-endian `u32`. Failure to obtain those
//! bytes is returned to the caller; there is no fallback source.

use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// How a 32-bit random value is reduced to an index in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMethod {
    /// Rejection sampling: values in the incomplete final block of
    /// `2^32 / len` are discarded and redrawn. No bias for any length.
    #[default]
    Unbiased,
    /// `value % len`. Biased by up to `len / 2^32` when `len` does not
    /// divide `2^32`; below 2^-19 for a 7776-word list.
    Modulo,
}

/// Draws one 32-bit value from the secure source.
fn next_u32<R>(rng: &mut R) -> Result<u32, rand_core::Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut buf = [0u8; 4];
    rng.try_fill_bytes(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Picks an index in `0..len` using `method`.
///
/// `len` must be in `1..=u32::MAX`; `WordList` guarantees this.
pub(crate) fn pick_index<R>(
    rng: &mut R,
    len: usize,
    method: SelectionMethod,
) -> Result<usize, rand_core::Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    debug_assert!(len > 0 && len as u64 <= u32::MAX as u64);
    let len = len as u64;

    match method {
        SelectionMethod::Modulo => Ok((next_u32(rng)? as u64 % len) as usize),
        SelectionMethod::Unbiased => {
            // Largest multiple of len not exceeding 2^32.
            let zone = (1u64 << 32) - (1u64 << 32) % len;
            loop {
                let value = next_u32(rng)? as u64;
                if value < zone {
                    return Ok((value % len) as usize);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    /// Replays fixed 32-bit values, for exercising the reduction logic.
    struct ScriptedRng {
        values: Vec<u32>,
        requests: usize,
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            unimplemented!()
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.try_fill_bytes(dest).unwrap();
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            assert_eq!(dest.len(), 4);
            let value = self.values[self.requests];
            self.requests += 1;
            dest.copy_from_slice(&value.to_le_bytes());
            Ok(())
        }
    }

    impl CryptoRng for ScriptedRng {}

    fn scripted(values: &[u32]) -> ScriptedRng {
        ScriptedRng {
            values: values.to_vec(),
            requests: 0,
        }
    }

    #[test]
    fn test_modulo_reduction() {
        let mut rng = scripted(&[7776 + 5]);
        assert_eq!(pick_index(&mut rng, 7776, SelectionMethod::Modulo).unwrap(), 5);
        assert_eq!(rng.requests, 1);
    }

    #[test]
    fn test_unbiased_rejects_tail_values() {
        // 2^32 % 3 == 1, so u32::MAX falls in the rejected tail.
        let mut rng = scripted(&[u32::MAX, u32::MAX, 4]);
        assert_eq!(pick_index(&mut rng, 3, SelectionMethod::Unbiased).unwrap(), 1);
        assert_eq!(rng.requests, 3);
    }

    #[test]
    fn test_unbiased_accepts_below_zone() {
        let mut rng = scripted(&[u32::MAX - 1]);
        // (2^32 - 2) % 3 == 2
        assert_eq!(pick_index(&mut rng, 3, SelectionMethod::Unbiased).unwrap(), 2);
        assert_eq!(rng.requests, 1);
    }

    #[test]
    fn test_power_of_two_never_rejects() {
        let mut rng = scripted(&[u32::MAX]);
        assert_eq!(pick_index(&mut rng, 8, SelectionMethod::Unbiased).unwrap(), 7);
    }

    #[test]
    fn test_single_word_list() {
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        for method in [SelectionMethod::Unbiased, SelectionMethod::Modulo] {
            for _ in 0..50 {
                assert_eq!(pick_index(&mut rng, 1, method).unwrap(), 0);
            }
        }
    }

    #[test]
    fn test_indices_in_range() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        for len in [1usize, 2, 3, 10, 7776, 1 << 20] {
            for _ in 0..200 {
                assert!(pick_index(&mut rng, len, SelectionMethod::Unbiased).unwrap() < len);
                assert!(pick_index(&mut rng, len, SelectionMethod::Modulo).unwrap() < len);
            }
        }
    }
}
