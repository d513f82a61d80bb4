//! Execution engine for the virtual machine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`engine::Executor`] dispatch loop with nested loop
//!   resolution
//! - [`errors`]: the fatal [`errors::RuntimeError`] kinds
//!
//! # Execution Model
//!
//! The executor consumes the instruction stream left to right, one symbol
//! at a time, mutating the tape and calling the I/O collaborators. Loop
//! brackets are matched by depth counting when a loop-open is first
//! executed; the resolved pair is remembered so later iterations jump
//! instead of re-scanning.
//!
//! All failures are fatal: they abort the run immediately and propagate
//! unchanged through every enclosing loop.

pub mod engine;
pub mod errors;
