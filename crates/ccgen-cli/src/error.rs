use std::io;

use ccgen_core::InputError;
use ccgen_generator::GenerateError;

/// Errors that abort a command.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// The number argument is not a digit string.
    #[display("invalid input: {_0}")]
    Input(#[from] InputError),
    /// Generation failed.
    #[display("{_0}")]
    Generate(#[from] GenerateError),
    /// An input file could not be read.
    #[display("failed to read {path}: {source}")]
    Read {
        /// The path, or `<stdin>`.
        path: String,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Output could not be written.
    #[display("failed to write output: {_0}")]
    Write(#[from] io::Error),
}

impl CliError {
    /// Exit code of every command that fails with an error.
    pub const EXIT_CODE: u8 = 2;
}
