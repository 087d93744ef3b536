//! Options shared by the generation commands.

use std::num::NonZeroUsize;

/// How many numbers to generate and how to print them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Number of card numbers to print.
    pub count: NonZeroUsize,
    /// Print numbers in the issuer's display groups instead of a plain run of
    /// digits.
    pub grouped: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: NonZeroUsize::MIN,
            grouped: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let options = GenerateOptions::default();
        assert_eq!(options.count.get(), 1);
        assert!(!options.grouped);
    }
}
