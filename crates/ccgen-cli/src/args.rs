//! Command-line arguments.

use std::{num::NonZeroUsize, path::PathBuf};

use ccgen_core::{Issuer, MaskTemplate};
use ccgen_generator::GeneratorSeed;
use clap::{ArgGroup, Parser, Subcommand};

use crate::{config::GenerateOptions, version};

/// Generate and validate Luhn-valid synthetic card numbers for testing.
#[derive(Debug, Parser)]
#[command(author, version = version::build_version(), about)]
pub struct Cli {
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of `ccgen`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate card numbers.
    Generate(GenerateArgs),
    /// Check a number against the Luhn checksum.
    Validate {
        /// Card number; spaces and hyphens are ignored.
        number: String,
    },
    /// Compute the Luhn check digit for a partial number.
    CheckDigit {
        /// Partial card number without its check digit.
        partial: String,
    },
    /// Detect the issuer of a card number.
    Classify {
        /// Card number; spaces and hyphens are ignored.
        number: String,
    },
    /// Validate a list of masks, one per line.
    Masks {
        /// File to read; standard input if omitted.
        path: Option<PathBuf>,
    },
    /// List the built-in issuers.
    Issuers,
}

/// Arguments of `ccgen generate`.
#[derive(Debug, clap::Args)]
#[command(group(ArgGroup::new("source").args(["issuer", "mask", "masks_file"])))]
pub struct GenerateArgs {
    /// Issuer identifier (visa, mastercard, amex, discover). Default: visa.
    #[arg(long, value_name = "ID")]
    pub issuer: Option<Issuer>,

    /// Mask such as `123/15`, or an exact number.
    #[arg(long, value_name = "MASK")]
    pub mask: Option<MaskTemplate>,

    /// File with one mask per line; a valid mask is picked at random for each
    /// number.
    #[arg(long, value_name = "PATH")]
    pub masks_file: Option<PathBuf>,

    /// How many numbers to generate.
    #[arg(short = 'n', long, value_name = "COUNT", default_value = "1")]
    pub count: NonZeroUsize,

    /// Seed as 64 hex digits, for reproducible output.
    #[arg(long, value_name = "HEX")]
    pub seed: Option<GeneratorSeed>,

    /// Print numbers in display groups, e.g. `4111 1111 1111 1111`.
    #[arg(short, long)]
    pub grouped: bool,
}

impl GenerateArgs {
    /// Returns the output options.
    #[must_use]
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            count: self.count,
            grouped: self.grouped,
        }
    }
}
