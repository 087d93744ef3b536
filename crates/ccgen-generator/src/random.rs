//! Sources of randomness.

use rand::Rng;

/// Supplies uniformly distributed integers.
///
/// This is the only nondeterministic input of generation. Implementations must
/// return a value in `min..=max`, every value equally likely; the generator
/// panics on values outside the range.
///
/// Closures of the form `FnMut(u64, u64) -> u64` implement this trait, which
/// makes scripted sources easy to write:
///
/// ```
/// use ccgen_core::Issuer;
/// use ccgen_generator::CardGenerator;
///
/// // Always the lowest value: first range, lowest prefix, all zeros.
/// let mut generator = CardGenerator::new(|min: u64, _max: u64| min);
/// let number = generator.issuer_number(Issuer::Mastercard).unwrap();
/// assert_eq!(number.as_str(), "5100000000000008");
/// ```
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `min..=max`.
    fn rand_int(&mut self, min: u64, max: u64) -> u64;
}

impl<F> RandomSource for F
where
    F: FnMut(u64, u64) -> u64,
{
    fn rand_int(&mut self, min: u64, max: u64) -> u64 {
        self(min, max)
    }
}

/// Adapts a [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R> RngSource<R> {
    /// Wraps `rng`.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> RandomSource for RngSource<R>
where
    R: Rng,
{
    fn rand_int(&mut self, min: u64, max: u64) -> u64 {
        self.rng.random_range(min..=max)
    }
}
