//! Display formatting of card numbers.

use std::iter;

use crate::{DigitString, Issuer};

/// Digit groups of a 15-digit American Express number: `XXXX XXXXXX XXXXX`.
const AMEX_GROUPS: [usize; 3] = [4, 6, 5];

/// Default group size: `XXXX XXXX XXXX XXXX`.
const GROUP_SIZE: usize = 4;

/// Splits `number` into space-separated groups for display.
///
/// 15-digit American Express numbers use 4-6-5 grouping; everything else is split
/// into groups of four, the last group taking whatever digits remain.
///
/// # Examples
///
/// ```
/// use ccgen_core::{DigitString, Issuer, format_grouped};
///
/// let visa = DigitString::normalize("4532015112830366").unwrap();
/// assert_eq!(format_grouped(&visa, Some(Issuer::Visa)), "4532 0151 1283 0366");
///
/// let amex = DigitString::normalize("378282246310005").unwrap();
/// assert_eq!(format_grouped(&amex, Some(Issuer::AmericanExpress)), "3782 822463 10005");
/// assert_eq!(format_grouped(&amex, None), "3782 8224 6310 005");
/// ```
#[must_use]
pub fn format_grouped(number: &DigitString, issuer: Option<Issuer>) -> String {
    match issuer {
        Some(Issuer::AmericanExpress) if number.len() == 15 => {
            join_groups(number.as_str(), AMEX_GROUPS)
        }
        _ => join_groups(number.as_str(), iter::repeat(GROUP_SIZE)),
    }
}

fn join_groups(digits: &str, sizes: impl IntoIterator<Item = usize>) -> String {
    let mut out = String::with_capacity(digits.len() * 5 / 4);
    let mut rest = digits;
    for size in sizes {
        if rest.is_empty() {
            break;
        }
        let (group, tail) = rest.split_at(size.min(rest.len()));
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(group);
        rest = tail;
    }
    out
}
