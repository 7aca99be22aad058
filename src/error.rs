//! Index construction errors

use thiserror::Error;

/// Errors raised while building a [`CompoundIndex`](crate::CompoundIndex)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A dictionary entry with no glyphs was supplied
    #[error("empty compound sequence in dictionary")]
    EmptyCompound,
}

/// Result type for index construction
pub type Result<T> = std::result::Result<T, IndexError>;
