//! Runtime error types for the virtual machine
//!
//! This module defines [`RuntimeError`], which represents all errors that
//! can occur during execution.
//!
//! All runtime errors are fatal - they abort the run with no retry and no
//! resynchronization. Output already emitted before the failure stays
//! emitted.

use std::fmt;
use std::io;

/// Runtime errors that can occur during execution
#[derive(Debug)]
pub enum RuntimeError {
    /// Pointer moved left of cell 0, or a cell access past tape capacity
    OutOfBounds { pointer: usize, capacity: usize },

    /// Unmatched loop bracket: `]` with no open loop, or `[` whose matching
    /// close is never found before the stream ends
    UnbalancedBracket { symbol: char, position: usize },

    /// A character outside the eight recognized symbols was dispatched
    InvalidSymbol { symbol: char, position: usize },

    /// The input source signaled end-of-stream during an input instruction
    EndOfInput,

    /// Failure in the terminal input or output collaborator
    Io(io::Error),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::OutOfBounds { pointer, capacity } => {
                if pointer >= capacity {
                    write!(
                        f,
                        "Tape pointer {} out of bounds for capacity {}",
                        pointer, capacity
                    )
                } else {
                    write!(f, "Tape pointer moved left of cell 0")
                }
            }
            RuntimeError::UnbalancedBracket { symbol, position } => {
                if *symbol == '[' {
                    write!(
                        f,
                        "Loop opened at position {} is never closed",
                        position
                    )
                } else {
                    write!(
                        f,
                        "Loop close at position {} has no matching open",
                        position
                    )
                }
            }
            RuntimeError::InvalidSymbol { symbol, position } => {
                write!(
                    f,
                    "Invalid symbol {:?} at position {}",
                    symbol, position
                )
            }
            RuntimeError::EndOfInput => {
                write!(f, "Input source reached end of stream")
            }
            RuntimeError::Io(e) => {
                write!(f, "I/O failure: {}", e)
            }
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<io::Error> for RuntimeError {
    fn from(e: io::Error) -> Self {
        RuntimeError::Io(e)
    }
}
