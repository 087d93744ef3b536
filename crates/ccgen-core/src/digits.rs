//! Normalized decimal digit strings.
//!
//! Card numbers are typed, pasted and displayed with spaces or hyphens between
//! groups. [`DigitString`] strips those separators and guarantees that what is left
//! is a non-empty run of ASCII digits, so the rest of the crate never has to
//! re-check its input.
//!
//! # Examples
//!
//! ```
//! use ccgen_core::DigitString;
//!
//! let number = DigitString::normalize("4111-1111 1111-1111").unwrap();
//! assert_eq!(number.as_str(), "4111111111111111");
//! assert_eq!(number.len(), 16);
//!
//! assert!(DigitString::normalize("4111x").is_err());
//! assert!(DigitString::normalize(" - ").is_err());
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{InputError, luhn};

/// A non-empty sequence of ASCII decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitString(String);

/// Returns `true` for characters that are dropped during normalization.
#[must_use]
pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '-'
}

#[allow(clippy::len_without_is_empty)]
impl DigitString {
    /// Strips whitespace and `-` from `text` and validates the remaining digits.
    ///
    /// Normalizing an already normalized string returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonDigit`] for any other character, and
    /// [`InputError::Empty`] if no digits remain.
    pub fn normalize(text: &str) -> Result<Self, InputError> {
        let mut digits = String::with_capacity(text.len());
        for (position, ch) in text.chars().enumerate() {
            if is_separator(ch) {
                continue;
            }
            if !ch.is_ascii_digit() {
                return Err(InputError::NonDigit { ch, position });
            }
            digits.push(ch);
        }
        if digits.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(Self(digits))
    }

    /// Wraps a string already known to be non-empty ASCII digits.
    pub(crate) fn from_validated(digits: String) -> Self {
        debug_assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
        Self(digits)
    }

    /// Returns the digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of digits. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the digit values from left to right.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Returns `true` if `self` begins with all digits of `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &DigitString) -> bool {
        self.0.starts_with(prefix.as_str())
    }

    /// Returns the numeric value of the first `width` digits.
    ///
    /// Returns `None` if the string is shorter than `width` or the value does not
    /// fit in a `u64`.
    #[must_use]
    pub fn leading_value(&self, width: usize) -> Option<u64> {
        self.0.get(..width)?.parse().ok()
    }

    /// Returns `true` if the number passes the Luhn checksum.
    #[must_use]
    pub fn is_luhn_valid(&self) -> bool {
        luhn::residue(self.digits()) == 0
    }

    /// Computes the digit that makes `self` followed by it pass the Luhn checksum.
    #[must_use]
    pub fn luhn_check_digit(&self) -> u8 {
        luhn::check_digit_of(self.digits())
    }

    /// Appends a single digit.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is greater than 9.
    pub fn push_digit(&mut self, digit: u8) {
        assert!(digit <= 9, "not a decimal digit: {digit}");
        self.0.push(char::from(b'0' + digit));
    }

    /// Appends the Luhn check digit, making the number pass the checksum.
    pub fn push_check_digit(&mut self) {
        let check = self.luhn_check_digit();
        self.push_digit(check);
    }

    /// Returns a copy of `self` with its Luhn check digit appended.
    #[must_use]
    pub fn with_check_digit(&self) -> Self {
        let mut number = self.clone();
        number.push_check_digit();
        number
    }

    /// Consumes `self`, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for DigitString {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}
