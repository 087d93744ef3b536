//! Reproducible generation seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;

use crate::{RandomnessUnavailable, SeedError};

/// Number of bytes in a [`GeneratorSeed`].
pub const SEED_LEN: usize = 32;

/// A 256-bit seed for the generator's PRNG.
///
/// Seeds are written as 64 hex digits. Generating with the same seed always
/// produces the same numbers, which makes failures in downstream test suites
/// reproducible.
///
/// # Examples
///
/// ```
/// use ccgen_generator::GeneratorSeed;
///
/// let text = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
/// let seed: GeneratorSeed = text.parse().unwrap();
/// assert_eq!(seed.to_string(), text);
///
/// assert!("c1d4".parse::<GeneratorSeed>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorSeed([u8; SEED_LEN]);

impl GeneratorSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Draws a fresh seed from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`RandomnessUnavailable`] if the entropy source fails.
    pub fn from_entropy() -> Result<Self, RandomnessUnavailable> {
        let mut bytes = [0; SEED_LEN];
        getrandom::fill(&mut bytes).map_err(|err| RandomnessUnavailable {
            reason: err.to_string(),
        })?;
        Ok(Self(bytes))
    }

    /// Returns a PRNG initialized from this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for GeneratorSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl FromStr for GeneratorSeed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.as_bytes();
        if text.len() != SEED_LEN * 2 {
            return Err(SeedError::InvalidLength { len: text.len() });
        }
        let mut bytes = [0; SEED_LEN];
        for (i, (byte, pair)) in bytes.iter_mut().zip(text.chunks_exact(2)).enumerate() {
            let high = hex_value(pair[0]).ok_or(SeedError::InvalidHexDigit { position: i * 2 })?;
            let low = hex_value(pair[1]).ok_or(SeedError::InvalidHexDigit {
                position: i * 2 + 1,
            })?;
            *byte = (high << 4) | low;
        }
        Ok(Self(bytes))
    }
}
