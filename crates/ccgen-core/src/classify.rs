//! Card type detection.

use crate::{DigitString, Issuer};

/// Returns the first issuer in [`Issuer::ALL`] order whose rules `number`
/// satisfies.
///
/// Spaces and hyphens are ignored. Text that does not normalize to digits is
/// never classified.
///
/// # Examples
///
/// ```
/// use ccgen_core::{Issuer, classify};
///
/// assert_eq!(classify("4532 0151 1283 0366"), Some(Issuer::Visa));
/// assert_eq!(classify("3782-822463-10005"), Some(Issuer::AmericanExpress));
/// assert_eq!(classify("1234567890123456"), None);
/// ```
#[must_use]
pub fn classify(number: &str) -> Option<Issuer> {
    DigitString::normalize(number)
        .ok()
        .and_then(|number| classify_digits(&number))
}

/// Like [`classify`], for an already normalized number.
#[must_use]
pub fn classify_digits(number: &DigitString) -> Option<Issuer> {
    Issuer::ALL.into_iter().find(|issuer| issuer.matches(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_issuer() {
        assert_eq!(classify("4532015112830366"), Some(Issuer::Visa));
        assert_eq!(classify("5105105105105100"), Some(Issuer::Mastercard));
        assert_eq!(classify("2223000048400011"), Some(Issuer::Mastercard));
        assert_eq!(classify("378282246310005"), Some(Issuer::AmericanExpress));
        assert_eq!(classify("6011111111111117"), Some(Issuer::Discover));
        assert_eq!(classify("6500000000000002"), Some(Issuer::Discover));
    }

    #[test]
    fn test_classify_none() {
        assert_eq!(classify("1234567890123456"), None);
        // Right prefix, wrong length.
        assert_eq!(classify("45320151128303660"), None);
        assert_eq!(classify("3782822463100050"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("4532-abcd"), None);
    }

    #[test]
    fn test_classify_ignores_separators() {
        assert_eq!(classify(" 5105 1051-0510 5100 "), Some(Issuer::Mastercard));
    }

    #[test]
    fn test_classify_does_not_check_luhn() {
        assert_eq!(classify("4532015112830367"), Some(Issuer::Visa));
    }

    #[test]
    fn test_catalog_ranges_are_disjoint() {
        for issuer in Issuer::ALL {
            let definition = issuer.definition();
            for range in definition.prefix_ranges() {
                for value in [range.start(), range.end()] {
                    let prefix = range.render(value);
                    let mut number = prefix.into_string();
                    while number.len() < definition.length() {
                        number.push('0');
                    }
                    assert_eq!(classify(&number), Some(issuer), "{number}");
                }
            }
        }
    }
}
