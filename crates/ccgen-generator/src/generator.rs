use ccgen_core::{DigitString, Issuer, IssuerDefinition, MaskList, MaskTemplate};
use rand_pcg::Pcg64;

use crate::{GenerateError, GeneratorSeed, RandomSource, RngSource};

/// A card number together with the seed it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNumber {
    /// The generated number.
    pub number: DigitString,
    /// The seed that reproduces `number`.
    pub seed: GeneratorSeed,
}

/// Generates Luhn-valid card numbers from a [`RandomSource`].
///
/// Every number is built the same way: a prefix (drawn from an issuer's ranges,
/// or fixed by a mask), uniformly random digits up to one short of the target
/// length, then the Luhn check digit.
#[derive(Debug, Clone)]
pub struct CardGenerator<S> {
    source: S,
}

impl CardGenerator<RngSource<Pcg64>> {
    /// Creates a generator whose output is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: GeneratorSeed) -> Self {
        Self::new(RngSource::new(seed.rng()))
    }

    /// Creates a generator seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RandomnessUnavailable`] if no seed could be drawn.
    pub fn from_entropy() -> Result<Self, GenerateError> {
        Ok(Self::with_seed(GeneratorSeed::from_entropy()?))
    }
}

impl<S> CardGenerator<S>
where
    S: RandomSource,
{
    /// Creates a generator drawing from `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the random source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Generates a number for `issuer`.
    ///
    /// One of the issuer's prefix ranges is chosen uniformly, then a prefix
    /// uniformly within it, rendered at the range's digit width.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Configuration`] if the prefix leaves no room for the
    /// check digit, which the built-in catalog never does.
    ///
    /// # Panics
    ///
    /// Panics if the random source returns a value outside the requested range.
    pub fn issuer_number(&mut self, issuer: Issuer) -> Result<DigitString, GenerateError> {
        let definition = issuer.definition();
        let prefix = self.random_prefix(definition);
        log::trace!("{issuer}: prefix {prefix}");
        self.complete(prefix, definition.length())
    }

    /// Generates a number for `template`.
    ///
    /// Exact templates are returned unchanged once they pass the Luhn checksum.
    /// Pattern templates keep their prefix and are filled up to their total
    /// length.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::LuhnValidationFailed`] for an exact template that
    /// fails the checksum, and [`GenerateError::Configuration`] if a pattern's
    /// prefix leaves no room for the check digit.
    ///
    /// # Panics
    ///
    /// Panics if the random source returns a value outside the requested range.
    pub fn template_number(&mut self, template: &MaskTemplate) -> Result<DigitString, GenerateError> {
        match template {
            MaskTemplate::Exact { digits } => {
                if !digits.is_luhn_valid() {
                    return Err(GenerateError::LuhnValidationFailed {
                        digits: digits.clone(),
                    });
                }
                Ok(digits.clone())
            }
            MaskTemplate::Pattern {
                prefix,
                total_length,
            } => self.complete(prefix.clone(), *total_length),
        }
    }

    /// Generates a number from a template of `list`, chosen uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NoValidMasks`] if `list` has no valid template, and
    /// otherwise the errors of [`template_number`](Self::template_number).
    ///
    /// # Panics
    ///
    /// Panics if the random source returns a value outside the requested range.
    pub fn mask_list_number(&mut self, list: &MaskList) -> Result<DigitString, GenerateError> {
        let templates = list.templates();
        if templates.is_empty() {
            return Err(GenerateError::NoValidMasks);
        }
        let template = &templates[self.pick_index(templates.len())];
        log::trace!("picked mask {template}");
        self.template_number(template)
    }

    fn random_prefix(&mut self, definition: &IssuerDefinition) -> DigitString {
        let ranges = definition.prefix_ranges();
        let range = ranges[self.pick_index(ranges.len())];
        let value = self.rand_int(range.start(), range.end());
        range.render(value)
    }

    /// Fills `prefix` with random digits up to `length - 1` digits and appends the
    /// check digit.
    fn complete(&mut self, prefix: DigitString, length: usize) -> Result<DigitString, GenerateError> {
        let Some(random_digits) = length.checked_sub(prefix.len() + 1) else {
            return Err(GenerateError::Configuration {
                prefix_len: prefix.len(),
                length,
            });
        };
        let mut number = prefix;
        for _ in 0..random_digits {
            let digit = self.random_digit();
            number.push_digit(digit);
        }
        number.push_check_digit();
        Ok(number)
    }

    #[expect(clippy::cast_possible_truncation, reason = "the value is at most 9")]
    fn random_digit(&mut self) -> u8 {
        self.rand_int(0, 9) as u8
    }

    #[expect(clippy::cast_possible_truncation, reason = "the value is below `len`")]
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rand_int(0, len as u64 - 1) as usize
    }

    fn rand_int(&mut self, min: u64, max: u64) -> u64 {
        let value = self.source.rand_int(min, max);
        assert!(
            (min..=max).contains(&value),
            "random source returned {value}, expected a value in {min}..={max}"
        );
        value
    }
}

/// Generates a number for the issuer with the given identifier, seeded from the
/// operating system.
///
/// # Errors
///
/// Returns [`GenerateError::UnknownIssuer`] if `issuer_id` is not in the catalog,
/// and [`GenerateError::RandomnessUnavailable`] if no seed could be drawn.
pub fn generate_for_issuer(issuer_id: &str) -> Result<GeneratedNumber, GenerateError> {
    let issuer = issuer_id.parse::<Issuer>()?;
    generate_for_issuer_with_seed(issuer, GeneratorSeed::from_entropy()?)
}

/// Generates a number for `issuer` from `seed`.
///
/// # Errors
///
/// See [`CardGenerator::issuer_number`].
pub fn generate_for_issuer_with_seed(
    issuer: Issuer,
    seed: GeneratorSeed,
) -> Result<GeneratedNumber, GenerateError> {
    let number = CardGenerator::with_seed(seed).issuer_number(issuer)?;
    log::debug!("generated {issuer} number with seed {seed}");
    Ok(GeneratedNumber { number, seed })
}

/// Parses `mask` and generates a number for it, seeded from the operating system.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidMask`] if `mask` does not parse,
/// [`GenerateError::LuhnValidationFailed`] for an exact mask failing the checksum,
/// and [`GenerateError::RandomnessUnavailable`] if no seed could be drawn.
pub fn generate_for_mask(mask: &str) -> Result<GeneratedNumber, GenerateError> {
    let template = ccgen_core::parse_mask(mask)?;
    generate_for_template_with_seed(&template, GeneratorSeed::from_entropy()?)
}

/// Generates a number for `template` from `seed`.
///
/// # Errors
///
/// See [`CardGenerator::template_number`].
pub fn generate_for_template_with_seed(
    template: &MaskTemplate,
    seed: GeneratorSeed,
) -> Result<GeneratedNumber, GenerateError> {
    let number = CardGenerator::with_seed(seed).template_number(template)?;
    log::debug!("generated number for mask {template} with seed {seed}");
    Ok(GeneratedNumber { number, seed })
}

#[cfg(test)]
mod tests {
    use ccgen_core::{MaskError, parse_mask};
    use proptest::prelude::*;

    use super::*;
    use crate::{SEED_LEN, testing::ScriptedSource};

    fn template(mask: &str) -> MaskTemplate {
        parse_mask(mask).unwrap()
    }

    #[test]
    fn test_issuer_number_with_scripted_source() {
        // range #1 (2221..=2720), prefix 2500, then 11 random digits.
        let source = ScriptedSource::new([1, 2500, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1]);
        let mut generator = CardGenerator::new(source);
        let number = generator.issuer_number(Issuer::Mastercard).unwrap();
        assert_eq!(&number.as_str()[..15], "250012345678901");
        assert!(number.is_luhn_valid());
        assert!(Issuer::Mastercard.matches(&number));
        assert!(generator.into_source().is_exhausted());
    }

    #[test]
    fn test_issuer_number_requests_expected_ranges() {
        let mut requests = Vec::new();
        let mut generator = CardGenerator::new(|min: u64, max: u64| {
            requests.push((min, max));
            max
        });
        let number = generator.issuer_number(Issuer::Discover).unwrap();
        assert_eq!(&number.as_str()[..2], "65");
        assert_eq!(number.len(), 16);
        drop(generator);

        assert_eq!(requests[0], (0, 2));
        assert_eq!(requests[1], (65, 65));
        assert_eq!(requests.len(), 2 + 13);
        assert!(requests[2..].iter().all(|&range| range == (0, 9)));
    }

    #[test]
    fn test_visa_all_nines() {
        let mut generator = CardGenerator::new(|_min: u64, max: u64| max);
        let number = generator.issuer_number(Issuer::Visa).unwrap();
        assert_eq!(number.as_str(), "4999999999999996");
        assert!(number.is_luhn_valid());
    }

    #[test]
    fn test_amex_length() {
        let mut generator = CardGenerator::new(|min: u64, _max: u64| min);
        let number = generator.issuer_number(Issuer::AmericanExpress).unwrap();
        assert_eq!(number.len(), 15);
        assert!(number.as_str().starts_with("34"));
        assert!(number.is_luhn_valid());
    }

    #[test]
    fn test_template_number_pattern() {
        let mut generator = CardGenerator::new(ScriptedSource::new([0; 11]));
        let number = generator.template_number(&template("123/15")).unwrap();
        assert_eq!(number.as_str(), "123000000000002");
        assert!(number.is_luhn_valid());
    }

    #[test]
    fn test_template_number_exact() {
        let mut generator = CardGenerator::new(ScriptedSource::new([]));
        let number = generator
            .template_number(&template("4111111111111111"))
            .unwrap();
        assert_eq!(number.as_str(), "4111111111111111");

        let err = generator
            .template_number(&template("4111111111111112"))
            .unwrap_err();
        assert!(err.is_luhn_validation_failed());
        assert_eq!(
            err.to_string(),
            "card number fails Luhn validation: 4111111111111112"
        );
    }

    #[test]
    fn test_template_number_without_room_for_check_digit() {
        // Not reachable through the parser, which rejects such masks.
        let template = MaskTemplate::Pattern {
            prefix: "1234567890".parse().unwrap(),
            total_length: 10,
        };
        let mut generator = CardGenerator::new(ScriptedSource::new([]));
        assert_eq!(
            generator.template_number(&template),
            Err(GenerateError::Configuration {
                prefix_len: 10,
                length: 10
            })
        );

        // A prefix of exactly `length - 1` digits only needs the check digit.
        let template = MaskTemplate::Pattern {
            prefix: "453201511283036".parse().unwrap(),
            total_length: 16,
        };
        assert_eq!(
            generator.template_number(&template).unwrap().as_str(),
            "4532015112830366"
        );
    }

    #[test]
    fn test_mask_list_number() {
        let list = MaskList::parse("123/15\nbad\n4111111111111111\n");
        let mut generator = CardGenerator::new(ScriptedSource::new([1]));
        let number = generator.mask_list_number(&list).unwrap();
        assert_eq!(number.as_str(), "4111111111111111");

        let list = MaskList::parse("bad\n");
        assert_eq!(
            generator.mask_list_number(&list),
            Err(GenerateError::NoValidMasks)
        );
    }

    #[test]
    #[should_panic(expected = "random source returned 10")]
    fn test_out_of_range_source_panics() {
        let mut generator = CardGenerator::new(|_min: u64, _max: u64| 10);
        let _ = generator.issuer_number(Issuer::Visa);
    }

    #[test]
    fn test_same_seed_same_number() {
        let seed = GeneratorSeed::from_bytes([3; SEED_LEN]);
        let a = generate_for_issuer_with_seed(Issuer::Discover, seed).unwrap();
        let b = generate_for_issuer_with_seed(Issuer::Discover, seed).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, seed);

        let mut generator = CardGenerator::with_seed(seed);
        let first = generator.issuer_number(Issuer::Discover).unwrap();
        let second = generator.issuer_number(Issuer::Discover).unwrap();
        assert_eq!(first, a.number);
        assert_ne!(first, second);
    }

    #[test]
    fn test_string_entry_points() {
        let generated = generate_for_issuer("mastercard").unwrap();
        assert!(ccgen_core::matches(generated.number.as_str(), "mastercard").unwrap());

        assert!(generate_for_issuer("jcb").unwrap_err().is_unknown_issuer());

        let generated = generate_for_mask("6011/16").unwrap();
        assert!(generated.number.as_str().starts_with("6011"));
        assert_eq!(ccgen_core::classify(generated.number.as_str()), Some(Issuer::Discover));

        assert_eq!(
            generate_for_mask("123/9"),
            Err(GenerateError::InvalidMask(MaskError::LengthTooShort {
                length: 9
            }))
        );
        assert!(
            generate_for_mask("4532015112830367")
                .unwrap_err()
                .is_luhn_validation_failed()
        );
    }

    fn issuer_strategy() -> impl Strategy<Value = Issuer> {
        prop::sample::select(Issuer::ALL.to_vec())
    }

    fn pattern_strategy() -> impl Strategy<Value = MaskTemplate> {
        (ccgen_core::mask::MIN_CARD_LENGTH..=ccgen_core::mask::MAX_CARD_LENGTH)
            .prop_flat_map(|length| {
                let max_prefix = (length - 1).min(18);
                let prefix =
                    prop::string::string_regex(&format!("[0-9]{{1,{max_prefix}}}")).unwrap();
                (prefix, Just(length))
            })
            .prop_map(|(prefix, length)| {
                MaskTemplate::pattern(prefix.parse().unwrap(), length).unwrap()
            })
    }

    proptest! {
        #[test]
        fn issuer_numbers_are_valid(issuer in issuer_strategy(), seed in any::<[u8; SEED_LEN]>()) {
            let generated =
                generate_for_issuer_with_seed(issuer, GeneratorSeed::from_bytes(seed)).unwrap();
            let number = generated.number;
            prop_assert_eq!(number.len(), issuer.definition().length());
            prop_assert!(number.is_luhn_valid());
            prop_assert!(issuer.matches(&number));
            prop_assert_eq!(ccgen_core::classify(number.as_str()), Some(issuer));
        }

        #[test]
        fn pattern_numbers_keep_prefix_and_length(
            template in pattern_strategy(),
            seed in any::<[u8; SEED_LEN]>(),
        ) {
            let generated =
                generate_for_template_with_seed(&template, GeneratorSeed::from_bytes(seed)).unwrap();
            let number = generated.number;
            prop_assert_eq!(number.len(), template.total_length());
            prop_assert!(number.starts_with(template.prefix()));
            prop_assert!(number.is_luhn_valid());
        }
    }
}
