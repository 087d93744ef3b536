//! Multi-line mask input.
//!
//! Users keep their masks as a block of text, one mask per line. [`MaskList`]
//! parses every non-blank line, keeping the valid templates and a diagnostic for
//! each line that failed, so all problems can be reported at once.
//!
//! # Examples
//!
//! ```
//! use ccgen_core::MaskList;
//!
//! let list = MaskList::parse("123/15\n\n12a/16\n4111111111111111\n");
//! assert_eq!(list.templates().len(), 2);
//! assert_eq!(list.errors().len(), 1);
//! assert_eq!(list.errors()[0].line, 3);
//! assert_eq!(
//!     list.errors()[0].to_string(),
//!     "Line 3: \"12a/16\" - invalid character 'a' at position 2: masks can only contain digits and '/'"
//! );
//! ```

use crate::{MaskError, MaskTemplate, mask};

/// A mask line that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Line {line}: {text:?} - {error}")]
pub struct MaskLineError {
    /// 1-based line number in the input text.
    pub line: usize,
    /// The trimmed line.
    pub text: String,
    /// Why the line was rejected.
    pub error: MaskError,
}

/// The result of parsing a block of masks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskList {
    templates: Vec<MaskTemplate>,
    errors: Vec<MaskLineError>,
}

impl MaskList {
    /// Parses `text` as one mask per line.
    ///
    /// Lines are trimmed and blank lines are skipped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut list = Self::default();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match mask::parse(line) {
                Ok(template) => list.templates.push(template),
                Err(error) => list.errors.push(MaskLineError {
                    line: index + 1,
                    text: line.to_owned(),
                    error,
                }),
            }
        }
        log::debug!(
            "parsed mask list: {} valid, {} invalid",
            list.templates.len(),
            list.errors.len()
        );
        list
    }

    /// Returns the valid templates, in input order.
    #[must_use]
    pub fn templates(&self) -> &[MaskTemplate] {
        &self.templates
    }

    /// Returns the diagnostics of invalid lines, in input order.
    #[must_use]
    pub fn errors(&self) -> &[MaskLineError] {
        &self.errors
    }

    /// Returns `true` if no line failed to parse.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` if there is no valid template.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<MaskTemplate> for MaskList {
    fn from_iter<T: IntoIterator<Item = MaskTemplate>>(iter: T) -> Self {
        Self {
            templates: iter.into_iter().collect(),
            errors: Vec::new(),
        }
    }
}
