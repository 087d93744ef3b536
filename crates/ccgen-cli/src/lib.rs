//! The `ccgen` command-line tool.
//!
//! Generates, validates and classifies synthetic card numbers for testing payment
//! forms. See `ccgen --help` for the available commands.
//!
//! Exit codes:
//!
//! - `0`: success.
//! - `1`: a negative answer from `validate`, `classify` or `masks` (an invalid
//!   number, an unknown issuer or an invalid mask line).
//! - `2`: usage errors and any command that could not produce a result. This
//!   includes `generate` with an exact mask that fails the Luhn checksum.

pub use self::{
    args::{Cli, Command, GenerateArgs},
    command::{Outcome, run},
    config::GenerateOptions,
    error::CliError,
};

pub mod args;
pub mod command;
pub mod config;
mod error;
pub mod version;
