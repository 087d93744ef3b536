//! Command execution.
//!
//! Commands write their results to the given writer and report whether the
//! result was positive through [`Outcome`], so they can be tested without a
//! process.

use std::{
    fs,
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use ccgen_core::{Issuer, MaskList, MaskTemplate, classify::classify_digits, format_grouped};
use ccgen_generator::{CardGenerator, GeneratorSeed};

use crate::{
    CliError,
    args::{Command, GenerateArgs},
    config::GenerateOptions,
};

/// Whether a command produced a positive result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command succeeded.
    Success,
    /// The command ran, but the answer is negative (an invalid number, an
    /// unknown issuer or an invalid mask line).
    Failure,
}

impl Outcome {
    /// Returns the process exit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Where `generate` takes its numbers from.
#[derive(Debug)]
enum NumberSource {
    Issuer(Issuer),
    Template(MaskTemplate),
    MaskList(MaskList),
}

/// Runs `command`, writing its output to `out`.
///
/// # Errors
///
/// Returns [`CliError`] if the command could not produce a result.
pub fn run(command: Command, out: &mut dyn Write) -> Result<Outcome, CliError> {
    match command {
        Command::Generate(args) => generate(&args, out),
        Command::Validate { number } => validate(&number, out),
        Command::CheckDigit { partial } => check_digit(&partial, out),
        Command::Classify { number } => classify(&number, out),
        Command::Masks { path } => {
            let text = read_input(path.as_deref())?;
            check_masks(&text, out)
        }
        Command::Issuers => issuers(out),
    }
}

fn generate(args: &GenerateArgs, out: &mut dyn Write) -> Result<Outcome, CliError> {
    let source = if let Some(template) = &args.mask {
        NumberSource::Template(template.clone())
    } else if let Some(path) = &args.masks_file {
        let list = MaskList::parse(&read_input(Some(path))?);
        for error in list.errors() {
            log::warn!("skipping invalid mask: {error}");
        }
        NumberSource::MaskList(list)
    } else {
        NumberSource::Issuer(args.issuer.unwrap_or(Issuer::Visa))
    };

    let seed = match args.seed {
        Some(seed) => seed,
        None => GeneratorSeed::from_entropy().map_err(ccgen_generator::GenerateError::from)?,
    };
    log::info!("seed: {seed}");

    write_numbers(&source, seed, args.options(), out)?;
    Ok(Outcome::Success)
}

fn write_numbers(
    source: &NumberSource,
    seed: GeneratorSeed,
    options: GenerateOptions,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut generator = CardGenerator::with_seed(seed);
    for _ in 0..options.count.get() {
        let number = match source {
            NumberSource::Issuer(issuer) => generator.issuer_number(*issuer)?,
            NumberSource::Template(template) => generator.template_number(template)?,
            NumberSource::MaskList(list) => generator.mask_list_number(list)?,
        };
        if options.grouped {
            let issuer = match source {
                NumberSource::Issuer(issuer) => Some(*issuer),
                _ => classify_digits(&number),
            };
            writeln!(out, "{}", format_grouped(&number, issuer))?;
        } else {
            writeln!(out, "{number}")?;
        }
    }
    Ok(())
}

fn validate(number: &str, out: &mut dyn Write) -> Result<Outcome, CliError> {
    if ccgen_core::validate_luhn(number)? {
        writeln!(out, "valid")?;
        Ok(Outcome::Success)
    } else {
        writeln!(out, "invalid")?;
        Ok(Outcome::Failure)
    }
}

fn check_digit(partial: &str, out: &mut dyn Write) -> Result<Outcome, CliError> {
    let digit = ccgen_core::check_digit(partial)?;
    writeln!(out, "{digit}")?;
    Ok(Outcome::Success)
}

fn classify(number: &str, out: &mut dyn Write) -> Result<Outcome, CliError> {
    if let Some(issuer) = ccgen_core::classify(number) {
        writeln!(out, "{issuer}")?;
        Ok(Outcome::Success)
    } else {
        writeln!(out, "unknown")?;
        Ok(Outcome::Failure)
    }
}

fn check_masks(text: &str, out: &mut dyn Write) -> Result<Outcome, CliError> {
    let list = MaskList::parse(text);
    for error in list.errors() {
        writeln!(out, "{error}")?;
    }
    writeln!(
        out,
        "{} valid, {} invalid",
        list.templates().len(),
        list.errors().len()
    )?;
    Ok(if list.is_valid() {
        Outcome::Success
    } else {
        Outcome::Failure
    })
}

fn issuers(out: &mut dyn Write) -> Result<Outcome, CliError> {
    for issuer in Issuer::ALL {
        let definition = issuer.definition();
        let ranges = definition
            .prefix_ranges()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "{:<10} {:<16} {:>2}  {ranges}",
            issuer.id(),
            definition.name(),
            definition.length()
        )?;
    }
    Ok(Outcome::Success)
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        }),
        None => io::read_to_string(io::stdin()).map_err(|source| CliError::Read {
            path: "<stdin>".to_owned(),
            source,
        }),
    }
}
