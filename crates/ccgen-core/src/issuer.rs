//! Built-in card issuer catalog.
//!
//! Each [`Issuer`] is described by an [`IssuerDefinition`]: a display name, the
//! total number of digits, and one or more [`PrefixRange`]s the leading digits
//! must fall into.
//!
//! The width of a prefix range (how many leading digits are compared against it)
//! is the number of decimal digits of its bounds as written: `51..=55` compares
//! two digits, `2221..=2720` compares four. Ranges of one issuer are tested
//! independently, each with its own width.
//!
//! # Examples
//!
//! ```
//! use ccgen_core::{DigitString, Issuer};
//!
//! let mastercard = Issuer::Mastercard.definition();
//! assert_eq!(mastercard.length(), 16);
//! assert_eq!(mastercard.prefix_ranges()[1].width(), 4);
//!
//! let number = DigitString::normalize("2221 0000 0000 0009").unwrap();
//! assert!(Issuer::Mastercard.matches(&number));
//! assert!(!Issuer::Visa.matches(&number));
//!
//! assert_eq!(ccgen_core::matches("4532015112830366", "visa"), Ok(true));
//! assert!(ccgen_core::info("jcb").is_err());
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{DigitString, UnknownIssuer};

/// An inclusive range of leading-digit values.
///
/// Both bounds have the same number of decimal digits, which is the width of
/// the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrefixRange {
    start: u64,
    end: u64,
}

const fn decimal_width(mut value: u64) -> usize {
    let mut width = 1;
    while value >= 10 {
        value /= 10;
        width += 1;
    }
    width
}

impl PrefixRange {
    /// Creates a range covering `start..=end`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or if the bounds differ in digit count.
    #[must_use]
    pub const fn new(start: u64, end: u64) -> Self {
        assert!(start <= end, "prefix range start must not exceed end");
        assert!(
            decimal_width(start) == decimal_width(end),
            "prefix range bounds must have the same digit count"
        );
        Self { start, end }
    }

    /// Returns the lowest prefix value.
    #[must_use]
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Returns the highest prefix value.
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Returns the number of leading digits this range is compared against.
    #[must_use]
    pub const fn width(&self) -> usize {
        decimal_width(self.start)
    }

    /// Returns `true` if `value` lies within the range.
    #[must_use]
    pub const fn contains(&self, value: u64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if the first [`width`](Self::width) digits of `number` lie
    /// within the range.
    #[must_use]
    pub fn matches_prefix_of(&self, number: &DigitString) -> bool {
        number
            .leading_value(self.width())
            .is_some_and(|value| self.contains(value))
    }

    /// Renders `value` as a prefix, zero-padded to the width of the range.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside the range.
    #[must_use]
    pub fn render(&self, value: u64) -> DigitString {
        assert!(
            self.contains(value),
            "prefix {value} outside {}..={}",
            self.start,
            self.end
        );
        DigitString::from_validated(format!("{value:0width$}", width = self.width()))
    }
}

impl Display for PrefixRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Static description of an issuer's numbering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuerDefinition {
    name: &'static str,
    prefix_ranges: &'static [PrefixRange],
    length: usize,
}

impl IssuerDefinition {
    /// Returns the display name, e.g. `"American Express"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the accepted prefix ranges, in catalog order.
    #[must_use]
    pub const fn prefix_ranges(&self) -> &'static [PrefixRange] {
        self.prefix_ranges
    }

    /// Returns the total number of digits, check digit included.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns `true` if `number` has the issuer's length and its leading digits
    /// fall into at least one of the prefix ranges.
    #[must_use]
    pub fn matches(&self, number: &DigitString) -> bool {
        number.len() == self.length
            && self
                .prefix_ranges
                .iter()
                .any(|range| range.matches_prefix_of(number))
    }
}

static VISA: IssuerDefinition = IssuerDefinition {
    name: "Visa",
    prefix_ranges: &[PrefixRange::new(4, 4)],
    length: 16,
};

static MASTERCARD: IssuerDefinition = IssuerDefinition {
    name: "Mastercard",
    prefix_ranges: &[PrefixRange::new(51, 55), PrefixRange::new(2221, 2720)],
    length: 16,
};

static AMERICAN_EXPRESS: IssuerDefinition = IssuerDefinition {
    name: "American Express",
    prefix_ranges: &[PrefixRange::new(34, 34), PrefixRange::new(37, 37)],
    length: 15,
};

static DISCOVER: IssuerDefinition = IssuerDefinition {
    name: "Discover",
    prefix_ranges: &[
        PrefixRange::new(6011, 6011),
        PrefixRange::new(644, 649),
        PrefixRange::new(65, 65),
    ],
    length: 16,
};

/// A card issuer from the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Issuer {
    /// Visa.
    Visa,
    /// Mastercard.
    Mastercard,
    /// American Express.
    AmericanExpress,
    /// Discover.
    Discover,
}

impl Issuer {
    /// All issuers, in the order [`classify`](crate::classify()) tests them.
    pub const ALL: [Self; 4] = [
        Self::Visa,
        Self::Mastercard,
        Self::AmericanExpress,
        Self::Discover,
    ];

    /// Returns the stable identifier used on the command line and by [`info`].
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::AmericanExpress => "amex",
            Self::Discover => "discover",
        }
    }

    /// Returns the numbering rules of the issuer.
    #[must_use]
    pub fn definition(self) -> &'static IssuerDefinition {
        match self {
            Self::Visa => &VISA,
            Self::Mastercard => &MASTERCARD,
            Self::AmericanExpress => &AMERICAN_EXPRESS,
            Self::Discover => &DISCOVER,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.definition().name()
    }

    /// Returns `true` if `number` satisfies the issuer's length and prefix rules.
    #[must_use]
    pub fn matches(self, number: &DigitString) -> bool {
        self.definition().matches(number)
    }
}

impl Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Issuer {
    type Err = UnknownIssuer;

    /// Parses an issuer identifier such as `"amex"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|issuer| issuer.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownIssuer { id: s.to_owned() })
    }
}

/// Looks up the definition of the issuer with the given identifier.
///
/// # Errors
///
/// Returns [`UnknownIssuer`] if `issuer_id` is not in the catalog.
pub fn info(issuer_id: &str) -> Result<&'static IssuerDefinition, UnknownIssuer> {
    Ok(issuer_id.parse::<Issuer>()?.definition())
}

/// Returns `true` if `number` (separators allowed) matches the issuer with the
/// given identifier.
///
/// Text that does not normalize to digits never matches.
///
/// # Errors
///
/// Returns [`UnknownIssuer`] if `issuer_id` is not in the catalog.
pub fn matches(number: &str, issuer_id: &str) -> Result<bool, UnknownIssuer> {
    let issuer = issuer_id.parse::<Issuer>()?;
    Ok(DigitString::normalize(number).is_ok_and(|number| issuer.matches(&number)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(text: &str) -> DigitString {
        DigitString::normalize(text).unwrap()
    }

    #[test]
    fn test_catalog() {
        let visa = info("visa").unwrap();
        assert_eq!(visa.name(), "Visa");
        assert_eq!(visa.length(), 16);
        assert_eq!(visa.prefix_ranges(), &[PrefixRange::new(4, 4)]);

        let mastercard = info("mastercard").unwrap();
        assert_eq!(
            mastercard.prefix_ranges(),
            &[PrefixRange::new(51, 55), PrefixRange::new(2221, 2720)]
        );
        assert_eq!(mastercard.length(), 16);

        let amex = info("amex").unwrap();
        assert_eq!(amex.name(), "American Express");
        assert_eq!(amex.length(), 15);

        let discover = info("discover").unwrap();
        let widths: Vec<_> = discover.prefix_ranges().iter().map(PrefixRange::width).collect();
        assert_eq!(widths, [4, 3, 2]);
    }

    #[test]
    fn test_definitions_are_consistent() {
        for issuer in Issuer::ALL {
            let definition = issuer.definition();
            assert!(!definition.prefix_ranges().is_empty(), "{issuer}");
            for range in definition.prefix_ranges() {
                assert!(range.width() < definition.length(), "{issuer}: {range}");
            }
        }
    }

    #[test]
    fn test_id_round_trip() {
        for issuer in Issuer::ALL {
            assert_eq!(issuer.id().parse::<Issuer>(), Ok(issuer));
        }
        assert_eq!("AMEX".parse::<Issuer>(), Ok(Issuer::AmericanExpress));
        assert_eq!(
            "jcb".parse::<Issuer>(),
            Err(UnknownIssuer { id: "jcb".to_owned() })
        );
        assert!(info("").is_err());
    }

    #[test]
    fn test_prefix_range_width() {
        assert_eq!(PrefixRange::new(4, 4).width(), 1);
        assert_eq!(PrefixRange::new(51, 55).width(), 2);
        assert_eq!(PrefixRange::new(644, 649).width(), 3);
        assert_eq!(PrefixRange::new(2221, 2720).width(), 4);
        assert_eq!(PrefixRange::new(0, 9).width(), 1);
    }

    #[test]
    #[should_panic(expected = "same digit count")]
    fn test_prefix_range_mixed_width_panics() {
        let _ = PrefixRange::new(9, 10);
    }

    #[test]
    fn test_prefix_range_render() {
        let range = PrefixRange::new(2221, 2720);
        assert_eq!(range.render(2500).as_str(), "2500");
        assert_eq!(PrefixRange::new(0, 9).render(0).as_str(), "0");
        assert_eq!(range.to_string(), "2221-2720");
        assert_eq!(PrefixRange::new(34, 34).to_string(), "34");
    }

    #[test]
    fn test_matches_by_prefix_and_length() {
        assert!(Issuer::Visa.matches(&digits("4532015112830366")));
        assert!(!Issuer::Visa.matches(&digits("453201511283036")));

        assert!(Issuer::Mastercard.matches(&digits("5105105105105100")));
        assert!(Issuer::Mastercard.matches(&digits("2720990000000000")));
        assert!(!Issuer::Mastercard.matches(&digits("2721000000000000")));
        assert!(!Issuer::Mastercard.matches(&digits("2220990000000000")));
        assert!(!Issuer::Mastercard.matches(&digits("5600000000000000")));

        assert!(Issuer::AmericanExpress.matches(&digits("378282246310005")));
        assert!(Issuer::AmericanExpress.matches(&digits("341111111111111")));
        assert!(!Issuer::AmericanExpress.matches(&digits("351111111111111")));
        assert!(!Issuer::AmericanExpress.matches(&digits("3782822463100050")));

        assert!(Issuer::Discover.matches(&digits("6011111111111117")));
        assert!(Issuer::Discover.matches(&digits("6445000000000000")));
        assert!(Issuer::Discover.matches(&digits("6500000000000000")));
        assert!(!Issuer::Discover.matches(&digits("6012000000000000")));
        assert!(!Issuer::Discover.matches(&digits("6430000000000000")));
    }

    #[test]
    fn test_matches_by_id() {
        assert_eq!(matches("4111 1111 1111 1111", "visa"), Ok(true));
        assert_eq!(matches("4111-1111-1111-1111", "mastercard"), Ok(false));
        assert_eq!(matches("not a number", "visa"), Ok(false));
        assert_eq!(matches("", "visa"), Ok(false));
        assert!(matches("4111111111111111", "unknown").is_err());
    }
}
