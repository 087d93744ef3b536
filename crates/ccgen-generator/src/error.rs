use ccgen_core::{DigitString, MaskError, UnknownIssuer};

/// The operating system could not provide entropy for a fresh seed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("randomness unavailable: {reason}")]
pub struct RandomnessUnavailable {
    /// Description reported by the entropy source.
    pub reason: String,
}

/// Errors that can occur while generating a card number.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GenerateError {
    /// The issuer identifier is not in the catalog.
    #[display("{_0}")]
    UnknownIssuer(#[from] UnknownIssuer),
    /// The mask text could not be parsed.
    #[display("invalid mask: {_0}")]
    InvalidMask(#[from] MaskError),
    /// An exact mask does not pass the Luhn checksum.
    #[display("card number fails Luhn validation: {digits}")]
    LuhnValidationFailed {
        /// The rejected number.
        digits: DigitString,
    },
    /// The prefix leaves no room for the check digit.
    #[display(
        "invalid configuration: prefix length ({prefix_len}) exceeds card length ({length})"
    )]
    Configuration {
        /// Number of prefix digits.
        prefix_len: usize,
        /// Requested total length.
        length: usize,
    },
    /// No seed could be drawn from the operating system.
    #[display("{_0}")]
    RandomnessUnavailable(#[from] RandomnessUnavailable),
    /// A mask list without a single valid mask.
    #[display("no valid custom masks available")]
    NoValidMasks,
}

/// Errors that can occur when parsing a [`GeneratorSeed`](crate::GeneratorSeed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the given text in bytes.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit at position {position}")]
    InvalidHexDigit {
        /// Byte offset of the offending character.
        position: usize,
    },
}
