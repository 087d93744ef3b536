/// Errors produced when text cannot be normalized into a digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// Nothing but separators (or nothing at all) was given.
    #[display("input contains no digits")]
    Empty,
    /// A character other than a digit, whitespace or `-` was found.
    #[display("invalid character {ch:?} at position {position}: only digits, spaces and '-' are allowed")]
    NonDigit {
        /// The offending character.
        ch: char,
        /// Character index in the original text.
        position: usize,
    },
}

/// An issuer identifier outside the built-in catalog.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unsupported card type: {id:?}")]
pub struct UnknownIssuer {
    /// The identifier that was looked up.
    pub id: String,
}

/// Reasons a custom mask is rejected.
///
/// Each variant renders as a message that can be shown next to the offending
/// mask line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MaskError {
    /// The mask is empty after trimming.
    #[display("mask cannot be empty")]
    Empty,
    /// The mask contains something other than digits and `/`.
    #[display("invalid character {ch:?} at position {position}: masks can only contain digits and '/'")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Character index in the trimmed mask.
        position: usize,
    },
    /// An exact number with fewer than [`MIN_CARD_LENGTH`](crate::mask::MIN_CARD_LENGTH) digits.
    #[display("exact card number is too short ({len} digits), must be at least 10 digits")]
    ExactTooShort {
        /// Number of digits given.
        len: usize,
    },
    /// An exact number with more than [`MAX_CARD_LENGTH`](crate::mask::MAX_CARD_LENGTH) digits.
    #[display("exact card number is too long ({len} digits), must be at most 19 digits")]
    ExactTooLong {
        /// Number of digits given.
        len: usize,
    },
    /// More than one `/` separator.
    #[display("mask can contain at most one '/'")]
    MultipleSeparators,
    /// Nothing before the `/`.
    #[display("prefix cannot be empty")]
    EmptyPrefix,
    /// Nothing after the `/`.
    #[display("length cannot be empty")]
    EmptyLength,
    /// The length field does not fit an integer.
    #[display("length must be a valid number, got {length:?}")]
    InvalidLength {
        /// The raw length field.
        length: String,
    },
    /// The prefix leaves no room for the check digit.
    #[display("prefix length ({prefix_len}) must be less than the total card length ({length})")]
    PrefixTooLong {
        /// Number of prefix digits.
        prefix_len: usize,
        /// Declared total length.
        length: usize,
    },
    /// The declared length is below [`MIN_CARD_LENGTH`](crate::mask::MIN_CARD_LENGTH).
    #[display("card length ({length}) is too short, must be at least 10 digits")]
    LengthTooShort {
        /// Declared total length.
        length: usize,
    },
    /// The declared length is above [`MAX_CARD_LENGTH`](crate::mask::MAX_CARD_LENGTH).
    #[display("card length ({length}) is too long, must be at most 19 digits")]
    LengthTooLong {
        /// Declared total length.
        length: usize,
    },
}
