// Failure-path tests for the byte-tape virtual machine

use bftape::interpreter::engine::Executor;
use bftape::interpreter::errors::RuntimeError;
use bftape::io::script::{CapturedOutput, ScriptedInput};

#[test]
fn test_lone_close_bracket() {
    let mut executor = Executor::new(ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run("]");

    assert!(matches!(
        result,
        Err(RuntimeError::UnbalancedBracket {
            symbol: ']',
            position: 0,
        })
    ));
    // Failure happens before any tape mutation.
    assert_eq!(executor.tape().cell(0), Some(0));
    assert_eq!(executor.tape().pointer(), 0);
}

#[test]
fn test_close_bracket_after_finished_loop() {
    let mut executor = Executor::new(ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run("+[-]]");

    assert!(matches!(
        result,
        Err(RuntimeError::UnbalancedBracket {
            symbol: ']',
            position: 4,
        })
    ));
}

#[test]
fn test_unterminated_loop() {
    let mut executor = Executor::new(ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run("[+");

    assert!(matches!(
        result,
        Err(RuntimeError::UnbalancedBracket {
            symbol: '[',
            position: 0,
        })
    ));
}

#[test]
fn test_unterminated_loop_fails_even_with_zero_condition() {
    // The matching close is resolved before the condition is checked, so a
    // missing close fails even though the body would never have run.
    let mut executor = Executor::new(ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run("[");

    assert!(matches!(
        result,
        Err(RuntimeError::UnbalancedBracket {
            symbol: '[',
            position: 0,
        })
    ));
}

#[test]
fn test_invalid_symbol() {
    let mut executor = Executor::new(ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run("+a");

    assert!(matches!(
        result,
        Err(RuntimeError::InvalidSymbol {
            symbol: 'a',
            position: 1,
        })
    ));
}

#[test]
fn test_whitespace_is_an_invalid_symbol() {
    let mut executor = Executor::new(ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run("+ +");

    assert!(matches!(
        result,
        Err(RuntimeError::InvalidSymbol {
            symbol: ' ',
            position: 1,
        })
    ));
}

#[test]
fn test_invalid_symbol_in_skipped_body_is_never_seen() {
    // A body guarded by a zero cell is jumped over, not validated.
    let mut executor = Executor::new(ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run("[x]");

    assert!(result.is_ok(), "Execution failed: {:?}", result);
}

#[test]
fn test_invalid_symbol_in_executed_body() {
    let mut executor = Executor::new(ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run("+[x]");

    assert!(matches!(
        result,
        Err(RuntimeError::InvalidSymbol {
            symbol: 'x',
            position: 2,
        })
    ));
}

#[test]
fn test_move_left_underflow() {
    let mut executor = Executor::new(ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run("><<");

    assert!(matches!(
        result,
        Err(RuntimeError::OutOfBounds { pointer: 0, .. })
    ));
}

#[test]
fn test_move_past_capacity_is_lazy() {
    // Walking off the end is fine until a cell is actually touched.
    let mut executor =
        Executor::with_tape_capacity(4, ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run(">>>>>>");

    assert!(result.is_ok(), "Execution failed: {:?}", result);
    assert_eq!(executor.tape().pointer(), 6);
}

#[test]
fn test_access_past_capacity() {
    let mut executor =
        Executor::with_tape_capacity(4, ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run(">>>>+");

    assert!(matches!(
        result,
        Err(RuntimeError::OutOfBounds {
            pointer: 4,
            capacity: 4,
        })
    ));
}

#[test]
fn test_input_exhaustion() {
    let mut executor = Executor::new(ScriptedInput::new("A"), CapturedOutput::new());
    let result = executor.run(",,");

    assert!(matches!(result, Err(RuntimeError::EndOfInput)));
    // The first read landed before the failure.
    assert_eq!(executor.tape().cell(0), Some(65));
}

#[test]
fn test_output_emitted_before_failure_is_kept() {
    let mut executor = Executor::new(ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run("++..]");

    assert!(matches!(
        result,
        Err(RuntimeError::UnbalancedBracket {
            symbol: ']',
            position: 4,
        })
    ));
    assert_eq!(
        executor.output().chars(),
        &[char::from(2), char::from(2)]
    );
}

#[test]
fn test_error_propagates_out_of_nested_loops() {
    // The underflow surfaces unchanged through both enclosing loops.
    let mut executor = Executor::new(ScriptedInput::new(""), CapturedOutput::new());
    let result = executor.run("+[+[<]]");

    assert!(matches!(
        result,
        Err(RuntimeError::OutOfBounds { pointer: 0, .. })
    ));
}
