//! Interactive terminal collaborators
//!
//! [`TerminalInput`] reads one keypress per request through crossterm key
//! events, toggling raw mode only for the duration of the read so regular
//! output rendering is untouched between reads. The typed character is
//! echoed back, and Ctrl-D signals end-of-input.
//!
//! [`TerminalOutput`] writes one character to stdout per call and flushes
//! immediately, so emission order matches program order with no buffering.

use std::io::Write;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::{InputEvent, InputSource, OutputSink};
use crate::interpreter::errors::RuntimeError;

/// Interactive input: one keypress per read request, echoed
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        TerminalInput
    }

    fn read_key(&self) -> Result<Option<char>, RuntimeError> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    KeyCode::Char(ch) => return Ok(Some(ch)),
                    KeyCode::Enter => return Ok(Some('\n')),
                    KeyCode::Tab => return Ok(Some('\t')),
                    _ => {}
                }
            }
        }
    }
}

impl InputSource for TerminalInput {
    fn next_char(&mut self) -> Result<InputEvent, RuntimeError> {
        enable_raw_mode()?;
        let key = self.read_key();
        // Leave the terminal usable even when the read failed.
        let _ = disable_raw_mode();

        match key? {
            Some(ch) => {
                let mut stdout = std::io::stdout();
                write!(stdout, "{}", ch)?;
                stdout.flush()?;
                Ok(InputEvent::Char(ch))
            }
            None => Ok(InputEvent::EndOfInput),
        }
    }
}

/// Interactive output: one character to stdout per call, flushed
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }
}

impl OutputSink for TerminalOutput {
    fn write_char(&mut self, ch: char) -> Result<(), RuntimeError> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", ch)?;
        stdout.flush()?;
        Ok(())
    }
}
