// Execution engine for the byte-tape virtual machine

use rustc_hash::FxHashMap;

use crate::interpreter::errors::RuntimeError;
use crate::io::{InputEvent, InputSource, OutputSink};
use crate::tape::Tape;

/// The executor that runs an instruction stream against a tape.
///
/// The executor is the only component permitted to mutate the tape: every
/// symbol dispatches to a tape primitive, an I/O collaborator call, or a
/// loop evaluation. Execution is strictly sequential; the only calls that
/// may block are the input and output collaborators.
pub struct Executor<I, O> {
    /// Tape memory, rebuilt fresh at the start of every run
    tape: Tape,

    /// Character input collaborator, consulted by `,`
    input: I,

    /// Character output collaborator, fed by `.`
    output: O,

    /// Matched bracket pairs, keyed by position in both directions.
    /// Filled in lazily the first time each loop-open is executed.
    brackets: FxHashMap<usize, usize>,
}

impl<I: InputSource, O: OutputSink> Executor<I, O> {
    /// Create an executor with the default tape capacity
    pub fn new(input: I, output: O) -> Self {
        Executor {
            tape: Tape::new(),
            input,
            output,
            brackets: FxHashMap::default(),
        }
    }

    /// Create an executor whose tape has `capacity` cells
    pub fn with_tape_capacity(capacity: usize, input: I, output: O) -> Self {
        Executor {
            tape: Tape::with_capacity(capacity),
            input,
            output,
            brackets: FxHashMap::default(),
        }
    }

    /// Execute `source` from start to finish.
    ///
    /// The tape is created fresh at the start of the run and left in its
    /// final state afterwards for inspection through [`Executor::tape`].
    /// Any failure aborts the run immediately; output already emitted
    /// through the sink stays emitted.
    pub fn run(&mut self, source: &str) -> Result<(), RuntimeError> {
        self.tape = Tape::with_capacity(self.tape.capacity());
        self.brackets.clear();

        let program: Vec<char> = source.chars().collect();
        let mut pc = 0;

        while pc < program.len() {
            match program[pc] {
                '>' => self.tape.move_right(),
                '<' => self.tape.move_left()?,
                '+' => self.tape.increment()?,
                '-' => self.tape.decrement()?,
                '.' => {
                    let byte = self.tape.read()?;
                    self.output.write_char(char::from(byte))?;
                }
                ',' => match self.input.next_char()? {
                    InputEvent::Char(ch) => self.tape.write((ch as u32 % 256) as u8)?,
                    InputEvent::EndOfInput => return Err(RuntimeError::EndOfInput),
                },
                '[' => {
                    // Resolve the matching close before checking the
                    // condition: an unterminated loop fails here even when
                    // the body would not have run.
                    let close = self.resolve_loop(&program, pc)?;
                    if self.tape.read()? == 0 {
                        pc = close + 1;
                        continue;
                    }
                }
                ']' => match self.brackets.get(&pc) {
                    Some(&open) => {
                        if self.tape.read()? != 0 {
                            pc = open + 1;
                            continue;
                        }
                    }
                    // A close whose open never executed is reachable only
                    // when there is no open: sequential flow passes through
                    // every enclosing `[` first, and jumps never cross a
                    // bracket boundary.
                    None => {
                        return Err(RuntimeError::UnbalancedBracket {
                            symbol: ']',
                            position: pc,
                        })
                    }
                },
                other => {
                    return Err(RuntimeError::InvalidSymbol {
                        symbol: other,
                        position: pc,
                    })
                }
            }
            pc += 1;
        }

        Ok(())
    }

    /// Find the loop-close matching the loop-open at `open`.
    ///
    /// On the first execution of a given loop-open the remaining stream is
    /// scanned with a depth counter starting at 1: each nested `[`
    /// increments it, each `]` decrements it, and the scan stops the
    /// instant depth reaches 0. The resolved pair is remembered in both
    /// directions so later iterations jump instead of re-scanning.
    ///
    /// Characters inside the scanned region are not validated here; an
    /// invalid symbol in a body that never executes raises nothing.
    fn resolve_loop(&mut self, program: &[char], open: usize) -> Result<usize, RuntimeError> {
        if let Some(&close) = self.brackets.get(&open) {
            return Ok(close);
        }

        let mut depth = 1u32;
        let mut pos = open + 1;
        while pos < program.len() {
            match program[pos] {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        self.brackets.insert(open, pos);
                        self.brackets.insert(pos, open);
                        return Ok(pos);
                    }
                }
                _ => {}
            }
            pos += 1;
        }

        Err(RuntimeError::UnbalancedBracket {
            symbol: '[',
            position: open,
        })
    }

    /// Tape state, as left by the most recent run
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// The output collaborator (for inspecting captured output)
    pub fn output(&self) -> &O {
        &self.output
    }
}
