//! Scripted collaborators for tests and non-interactive embeddings
//!
//! [`ScriptedInput`] feeds a predetermined character sequence to the
//! executor and reports end-of-input once the queue is exhausted.
//! [`CapturedOutput`] records every emitted character for later assertions.

use std::collections::VecDeque;

use super::{InputEvent, InputSource, OutputSink};
use crate::interpreter::errors::RuntimeError;

/// Input source backed by a fixed character queue
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    chars: VecDeque<char>,
}

impl ScriptedInput {
    pub fn new(script: &str) -> Self {
        ScriptedInput {
            chars: script.chars().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_char(&mut self) -> Result<InputEvent, RuntimeError> {
        Ok(match self.chars.pop_front() {
            Some(ch) => InputEvent::Char(ch),
            None => InputEvent::EndOfInput,
        })
    }
}

/// Output sink that records every emitted character
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    chars: Vec<char>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        CapturedOutput::default()
    }

    /// Emitted characters, in program order
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Emitted characters collected into a string
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl OutputSink for CapturedOutput {
    fn write_char(&mut self, ch: char) -> Result<(), RuntimeError> {
        self.chars.push(ch);
        Ok(())
    }
}
