//! Test utilities for generation.
//!
//! [`ScriptedSource`] replays a fixed sequence of values, so a test can state
//! exactly which prefix range, prefix and filler digits the generator draws.

use std::collections::VecDeque;

use crate::RandomSource;

/// A [`RandomSource`] returning pre-recorded values in order.
///
/// # Panics
///
/// [`rand_int`](RandomSource::rand_int) panics once the script is exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: VecDeque<u64>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Returns `true` if every scripted value has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.values.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    #[track_caller]
    fn rand_int(&mut self, min: u64, max: u64) -> u64 {
        self.values
            .pop_front()
            .unwrap_or_else(|| panic!("scripted source exhausted, requested {min}..={max}"))
    }
}
