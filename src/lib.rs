//! # Introduction
//!
//! bftape executes the eight-symbol Brainfuck instruction language against a
//! fixed-capacity tape of unsigned byte cells. The instruction stream is
//! consumed left to right; memory state lives entirely in the tape, and all
//! character input and output goes through collaborator traits so the same
//! executor runs interactively at a terminal or fully scripted in tests.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Executor → Tape
//!             ↕
//!     InputSource / OutputSink
//! ```
//!
//! 1. [`tape`] — the memory model: a bounded array of `u8` cells with a
//!    single movable pointer and wraparound cell arithmetic.
//! 2. [`interpreter`] — the [`interpreter::engine::Executor`] dispatch loop
//!    and the [`interpreter::errors::RuntimeError`] failure kinds.
//! 3. [`io`] — the external collaborators: one character in per read
//!    request, one character out per write, terminal-backed or scripted.
//!
//! ## Instruction set
//!
//! | Symbol | Effect |
//! |--------|--------|
//! | `>`    | move the pointer one cell right |
//! | `<`    | move the pointer one cell left |
//! | `+`    | increment the current cell, wrapping 255 → 0 |
//! | `-`    | decrement the current cell, wrapping 0 → 255 |
//! | `.`    | emit the current cell as a character |
//! | `,`    | read one character into the current cell |
//! | `[`    | enter the loop body if the current cell is nonzero |
//! | `]`    | re-enter the loop body if the current cell is nonzero |
//!
//! Any other character in the stream is a fatal
//! [`interpreter::errors::RuntimeError::InvalidSymbol`].

pub mod interpreter;
pub mod io;
pub mod tape;
