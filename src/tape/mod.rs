//! Memory model for the virtual machine
//!
//! This module provides [`Tape`], the single owner of all memory state:
//! a bounded array of `u8` cells and one movable pointer.
//!
//! # Bounds Checking
//!
//! The two boundaries are handled asymmetrically, matching the reference
//! execution model:
//! - [`Tape::move_left`] fails immediately when the pointer is at cell 0.
//! - [`Tape::move_right`] never fails; the pointer may walk past the last
//!   cell, and the violation surfaces as [`RuntimeError::OutOfBounds`] at
//!   the next operation that actually touches a cell.
//!
//! # Cell Arithmetic
//!
//! Cell values live in `[0, 255]` and increment/decrement wrap modulo 256:
//! 255 + 1 = 0 and 0 - 1 = 255. Wrapping is never an error.

use crate::interpreter::errors::RuntimeError;

/// Number of cells on a tape built with [`Tape::new`]
pub const DEFAULT_CAPACITY: usize = 10_000;

/// A bounded tape of byte cells addressed by a single pointer
#[derive(Debug, Clone)]
pub struct Tape {
    cells: Vec<u8>,
    pointer: usize,
}

impl Tape {
    /// Create a tape with [`DEFAULT_CAPACITY`] cells, all zero, pointer at cell 0
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a tape with `capacity` cells, all zero, pointer at cell 0
    pub fn with_capacity(capacity: usize) -> Self {
        Tape {
            cells: vec![0; capacity],
            pointer: 0,
        }
    }

    /// Move the pointer one cell to the right.
    ///
    /// No upper-bound check is applied here; an out-of-range pointer is
    /// reported by the next cell access instead.
    pub fn move_right(&mut self) {
        self.pointer += 1;
    }

    /// Move the pointer one cell to the left.
    ///
    /// Fails with [`RuntimeError::OutOfBounds`] when the pointer is already
    /// at cell 0. The pointer is never wrapped or clamped.
    pub fn move_left(&mut self) -> Result<(), RuntimeError> {
        if self.pointer == 0 {
            return Err(RuntimeError::OutOfBounds {
                pointer: 0,
                capacity: self.cells.len(),
            });
        }
        self.pointer -= 1;
        Ok(())
    }

    /// Increment the current cell, wrapping 255 → 0
    pub fn increment(&mut self) -> Result<(), RuntimeError> {
        let cell = self.current_cell_mut()?;
        *cell = cell.wrapping_add(1);
        Ok(())
    }

    /// Decrement the current cell, wrapping 0 → 255
    pub fn decrement(&mut self) -> Result<(), RuntimeError> {
        let cell = self.current_cell_mut()?;
        *cell = cell.wrapping_sub(1);
        Ok(())
    }

    /// Read the current cell without mutating it
    pub fn read(&self) -> Result<u8, RuntimeError> {
        match self.cells.get(self.pointer) {
            Some(&value) => Ok(value),
            None => Err(self.out_of_bounds()),
        }
    }

    /// Overwrite the current cell with `byte`
    pub fn write(&mut self, byte: u8) -> Result<(), RuntimeError> {
        *self.current_cell_mut()? = byte;
        Ok(())
    }

    /// Current pointer position
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Value of the cell at `index`, if it is within capacity
    pub fn cell(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    /// Number of cells on the tape
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn current_cell_mut(&mut self) -> Result<&mut u8, RuntimeError> {
        let capacity = self.cells.len();
        match self.cells.get_mut(self.pointer) {
            Some(cell) => Ok(cell),
            None => Err(RuntimeError::OutOfBounds {
                pointer: self.pointer,
                capacity,
            }),
        }
    }

    fn out_of_bounds(&self) -> RuntimeError {
        RuntimeError::OutOfBounds {
            pointer: self.pointer,
            capacity: self.cells.len(),
        }
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}
