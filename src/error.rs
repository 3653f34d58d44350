//! The errors an [`OrderedSet`][crate::OrderedSet] can report.

use thiserror::Error;

/// Everything that can go wrong when operating on an [`OrderedSet`][crate::OrderedSet].
///
/// None of these leave the set partially modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An argument was out of its allowed domain, e.g. a range whose lower
    /// bound is greater than its upper bound.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The key being inserted is already in the set.
    #[error("key is already present in the set")]
    DuplicateKey,
    /// An iterator was asked for a key after it was exhausted.
    #[error("no keys remain in the sequence")]
    EndOfSequence,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
