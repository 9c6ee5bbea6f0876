use thiserror::Error;

/// Generator errors that callers are expected to handle specifically
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    #[error("non-ASCII character {ch:?} at line {line}, column {column}")]
    NonAscii { ch: char, line: usize, column: usize },
    #[error("value {0} is outside the ASCII range 0..=127")]
    ValueOutOfRange(u8),
}

/// Interpreter errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BfError {
    #[error("Unmatched [ at line {line}, column {column}")]
    UnmatchedOpen { line: usize, column: usize },
    #[error("Unmatched ] at line {line}, column {column}")]
    UnmatchedClose { line: usize, column: usize },
    #[error("Pointer out of bounds at instruction {pc}")]
    PointerOutOfBounds { pc: usize },
}

// For generator operations where we want specific error handling
pub type GenResult<T> = std::result::Result<T, GenError>;

// For interpreter runs
pub type BfResult<T> = std::result::Result<T, BfError>;

// For general operations where we want to propagate errors with anyhow
pub type Result<T> = anyhow::Result<T>;
