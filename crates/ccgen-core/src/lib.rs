//! Core algorithms for synthetic card numbers.
//!
//! This crate holds the pure, deterministic half of ccgen: everything that can be
//! decided about a card number without drawing random digits.
//!
//! # Overview
//!
//! - [`digits`]: [`DigitString`], a normalized non-empty run of decimal digits.
//!   Spaces and hyphens are stripped before validation.
//! - [`luhn`]: Luhn checksum validation and check digit computation.
//! - [`issuer`]: the built-in issuer catalog ([`Issuer`], [`IssuerDefinition`],
//!   [`PrefixRange`]) and prefix/length matching.
//! - [`mask`]: parsing of user-defined masks such as `"123/15"` into a
//!   [`MaskTemplate`].
//! - [`mask_list`]: multi-line mask input with per-line diagnostics.
//! - [`classify`]: detection of the issuer of a number.
//! - [`format`]: grouping of digits for display.
//!
//! Random generation lives in the `ccgen-generator` crate.
//!
//! # Examples
//!
//! ```
//! use ccgen_core::{Issuer, MaskTemplate};
//!
//! assert_eq!(ccgen_core::validate_luhn("4532 0151 1283 0366"), Ok(true));
//! assert_eq!(ccgen_core::check_digit("411111111111111"), Ok(1));
//! assert_eq!(ccgen_core::classify("4532015112830366"), Some(Issuer::Visa));
//!
//! let mask = ccgen_core::parse_mask("123/15").unwrap();
//! assert!(matches!(mask, MaskTemplate::Pattern { total_length: 15, .. }));
//! ```

pub mod classify;
pub mod digits;
mod error;
pub mod format;
pub mod issuer;
pub mod luhn;
pub mod mask;
pub mod mask_list;

pub use self::{
    classify::classify,
    digits::DigitString,
    error::*,
    format::format_grouped,
    issuer::{Issuer, IssuerDefinition, PrefixRange, info, matches},
    luhn::{check_digit, validate as validate_luhn},
    mask::{MaskTemplate, parse as parse_mask},
    mask_list::{MaskLineError, MaskList},
};
