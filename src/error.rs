//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Two puzzles (or a puzzle and a pattern) were compared or converted but have different
/// dimensions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("dimension mismatch: expected {expected}x{expected}, found {found}x{found}")]
pub struct DimensionMismatch {
    /// The dimension of the pattern or puzzle doing the comparison.
    pub expected: usize,
    /// The dimension of the puzzle being compared against.
    pub found: usize,
}
