//! Luhn (mod 10) checksum.
//!
//! Digits are walked from the right. Every second digit, starting with the one
//! left of the units digit, is doubled, and 9 is subtracted when the doubled value
//! exceeds 9. A number is valid when the sum of all digits is a multiple of 10.
//!
//! # Examples
//!
//! ```
//! use ccgen_core::luhn;
//!
//! assert_eq!(luhn::validate("4532015112830366"), Ok(true));
//! assert_eq!(luhn::validate("4532 0151 1283 0367"), Ok(false));
//! assert_eq!(luhn::check_digit("453201511283036"), Ok(6));
//! assert!(luhn::validate("4532x").is_err());
//! ```

use std::iter;

use crate::{DigitString, InputError};

/// Validates the Luhn checksum of `number`.
///
/// Whitespace and `-` are ignored.
///
/// # Errors
///
/// Returns [`InputError`] if `number` contains other non-digit characters or no
/// digits at all.
pub fn validate(number: &str) -> Result<bool, InputError> {
    Ok(DigitString::normalize(number)?.is_luhn_valid())
}

/// Computes the check digit to append to `partial` so that the result passes
/// [`validate`].
///
/// Whitespace and `-` are ignored.
///
/// # Errors
///
/// Returns [`InputError`] if `partial` contains other non-digit characters or no
/// digits at all.
pub fn check_digit(partial: &str) -> Result<u8, InputError> {
    Ok(DigitString::normalize(partial)?.luhn_check_digit())
}

/// Sum of the Luhn-weighted digits, modulo 10.
pub(crate) fn residue<I>(digits: I) -> u8
where
    I: DoubleEndedIterator<Item = u8>,
{
    digits.rev().enumerate().fold(0, |sum, (i, digit)| {
        let value = if i % 2 == 1 {
            let doubled = digit * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            digit
        };
        (sum + value) % 10
    })
}

/// Check digit for `digits`: a placeholder `0` takes the units position, so the
/// doubling starts at the last given digit.
pub(crate) fn check_digit_of<I>(digits: I) -> u8
where
    I: DoubleEndedIterator<Item = u8>,
{
    (10 - residue(digits.chain(iter::once(0)))) % 10
}
