//! External I/O collaborators for the executor
//!
//! This module defines the two capability interfaces the executor talks to:
//! - [`InputSource`]: yields one character per read request (the `,`
//!   instruction)
//! - [`OutputSink`]: accepts one character per write (the `.` instruction)
//!
//! Both are blocking, unbuffered, synchronous calls; writes reach the sink
//! in program order exactly.
//!
//! # End-of-Input Policy
//!
//! The core never decides what end-of-input means. An input source reports
//! [`InputEvent::EndOfInput`] and the run aborts with
//! [`RuntimeError::EndOfInput`](crate::interpreter::errors::RuntimeError);
//! an embedding that prefers a sentinel byte returns
//! [`InputEvent::Char`] with that sentinel instead.
//!
//! Implementations:
//! - [`terminal`]: interactive stdin/stdout, one keypress per request
//! - [`script`]: queued input and recorded output for tests and
//!   non-interactive embeddings

pub mod script;
pub mod terminal;

use crate::interpreter::errors::RuntimeError;

/// One character of external input, or the end of the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    EndOfInput,
}

/// A character input source, consulted once per input instruction
pub trait InputSource {
    fn next_char(&mut self) -> Result<InputEvent, RuntimeError>;
}

/// A character output sink, fed once per output instruction
pub trait OutputSink {
    fn write_char(&mut self, ch: char) -> Result<(), RuntimeError>;
}
