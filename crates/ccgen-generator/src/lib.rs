//! Random generation of Luhn-valid card numbers.
//!
//! This crate draws the random parts of a card number (the prefix inside an
//! issuer's ranges and the digits between prefix and check digit) and closes
//! every number with its Luhn check digit, so generated numbers always pass
//! validation and match the issuer or mask they were generated for.
//!
//! # Overview
//!
//! - [`CardGenerator`] generates numbers for an [`Issuer`], a [`MaskTemplate`] or
//!   a [`MaskList`] from any [`RandomSource`].
//! - [`RandomSource`] is the single source of nondeterminism. It is implemented
//!   for [`RngSource`] (any [`rand::Rng`]) and for closures, so tests can script
//!   exact values.
//! - [`GeneratorSeed`] makes runs reproducible: the same seed always yields the
//!   same numbers.
//! - [`generate_for_issuer`] and [`generate_for_mask`] are string-level entry
//!   points that seed themselves from the operating system.
//!
//! [`Issuer`]: ccgen_core::Issuer
//! [`MaskTemplate`]: ccgen_core::MaskTemplate
//! [`MaskList`]: ccgen_core::MaskList
//!
//! # Examples
//!
//! ```
//! use ccgen_core::Issuer;
//! use ccgen_generator::{CardGenerator, GeneratorSeed};
//!
//! let seed: GeneratorSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
//!     .parse()
//!     .unwrap();
//! let mut generator = CardGenerator::with_seed(seed);
//!
//! let number = generator.issuer_number(Issuer::Visa).unwrap();
//! assert_eq!(number.len(), 16);
//! assert!(number.is_luhn_valid());
//! assert!(Issuer::Visa.matches(&number));
//! ```

pub use self::{error::*, generator::*, random::*, seed::*};

mod error;
mod generator;
mod random;
mod seed;

#[cfg(test)]
mod testing;
