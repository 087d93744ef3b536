//! User-defined card masks.
//!
//! A mask is either:
//!
//! - `prefix/length`, e.g. `123/15`: a `length`-digit number starting with
//!   `prefix`, the rest filled at random and closed by a check digit, or
//! - an exact number of 10 to 19 digits, used as is (it must pass the Luhn
//!   checksum to be generated).
//!
//! Parsing validates and builds the template in a single pass and stops at the
//! first rule that fails, reporting it as a [`MaskError`].
//!
//! # Examples
//!
//! ```
//! use ccgen_core::{MaskError, MaskTemplate, mask};
//!
//! let pattern = mask::parse(" 123/15 ").unwrap();
//! assert_eq!(pattern.prefix().as_str(), "123");
//! assert_eq!(pattern.total_length(), 15);
//! assert!(!pattern.is_exact());
//!
//! let exact = mask::parse("4111111111111111").unwrap();
//! assert!(exact.is_exact());
//! assert_eq!(exact.total_length(), 16);
//!
//! assert_eq!(mask::parse("123/9"), Err(MaskError::LengthTooShort { length: 9 }));
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{DigitString, MaskError};

/// Shortest card number a mask may describe.
pub const MIN_CARD_LENGTH: usize = 10;

/// Longest card number a mask may describe.
pub const MAX_CARD_LENGTH: usize = 19;

/// Separates the prefix from the length in `prefix/length` masks.
pub const SEPARATOR: char = '/';

/// A parsed mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MaskTemplate {
    /// A complete card number, used verbatim.
    ///
    /// Generation rejects it unless it passes the Luhn checksum.
    Exact {
        /// The card number.
        digits: DigitString,
    },
    /// A fixed prefix and a total length.
    Pattern {
        /// Leading digits of every generated number.
        prefix: DigitString,
        /// Total number of digits, check digit included.
        total_length: usize,
    },
}

impl MaskTemplate {
    /// Creates an exact template after checking the length bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::ExactTooShort`] or [`MaskError::ExactTooLong`] if
    /// `digits` has fewer than [`MIN_CARD_LENGTH`] or more than
    /// [`MAX_CARD_LENGTH`] digits.
    pub fn exact(digits: DigitString) -> Result<Self, MaskError> {
        let len = digits.len();
        if len < MIN_CARD_LENGTH {
            return Err(MaskError::ExactTooShort { len });
        }
        if len > MAX_CARD_LENGTH {
            return Err(MaskError::ExactTooLong { len });
        }
        Ok(Self::Exact { digits })
    }

    /// Creates a pattern template after checking the length bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::PrefixTooLong`] if the prefix leaves no room for
    /// the check digit, and [`MaskError::LengthTooShort`] or
    /// [`MaskError::LengthTooLong`] if `total_length` is outside
    /// [`MIN_CARD_LENGTH`]..=[`MAX_CARD_LENGTH`].
    pub fn pattern(prefix: DigitString, total_length: usize) -> Result<Self, MaskError> {
        if prefix.len() >= total_length {
            return Err(MaskError::PrefixTooLong {
                prefix_len: prefix.len(),
                length: total_length,
            });
        }
        if total_length < MIN_CARD_LENGTH {
            return Err(MaskError::LengthTooShort {
                length: total_length,
            });
        }
        if total_length > MAX_CARD_LENGTH {
            return Err(MaskError::LengthTooLong {
                length: total_length,
            });
        }
        Ok(Self::Pattern {
            prefix,
            total_length,
        })
    }

    /// Returns the fixed leading digits: the prefix of a pattern, or the whole
    /// number of an exact template.
    #[must_use]
    pub fn prefix(&self) -> &DigitString {
        match self {
            Self::Exact { digits } => digits,
            Self::Pattern { prefix, .. } => prefix,
        }
    }

    /// Returns the total number of digits of numbers produced from this template.
    #[must_use]
    pub fn total_length(&self) -> usize {
        match self {
            Self::Exact { digits } => digits.len(),
            Self::Pattern { total_length, .. } => *total_length,
        }
    }

    /// Returns `true` for exact templates.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact { .. })
    }

    /// Returns `true` if the template is only usable when it passes the Luhn
    /// checksum, which holds for exact templates.
    #[must_use]
    pub fn must_pass_luhn(&self) -> bool {
        self.is_exact()
    }
}

impl Display for MaskTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact { digits } => Display::fmt(digits, f),
            Self::Pattern {
                prefix,
                total_length,
            } => write!(f, "{prefix}{SEPARATOR}{total_length}"),
        }
    }
}

impl FromStr for MaskTemplate {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a mask.
///
/// Leading and trailing whitespace is trimmed first. Inside the mask only digits
/// and a single `/` are allowed.
///
/// # Errors
///
/// Returns the [`MaskError`] of the first rule the mask breaks.
pub fn parse(mask: &str) -> Result<MaskTemplate, MaskError> {
    let mask = mask.trim();
    if mask.is_empty() {
        return Err(MaskError::Empty);
    }

    if let Some((position, ch)) = mask
        .chars()
        .enumerate()
        .find(|&(_, ch)| !ch.is_ascii_digit() && ch != SEPARATOR)
    {
        return Err(MaskError::InvalidCharacter { ch, position });
    }

    let Some((prefix, length)) = mask.split_once(SEPARATOR) else {
        return MaskTemplate::exact(DigitString::from_validated(mask.to_owned()));
    };

    if length.contains(SEPARATOR) {
        return Err(MaskError::MultipleSeparators);
    }
    if prefix.is_empty() {
        return Err(MaskError::EmptyPrefix);
    }
    if length.is_empty() {
        return Err(MaskError::EmptyLength);
    }
    let total_length = length
        .parse::<usize>()
        .map_err(|_| MaskError::InvalidLength {
            length: length.to_owned(),
        })?;

    MaskTemplate::pattern(DigitString::from_validated(prefix.to_owned()), total_length)
}
