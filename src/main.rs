// bftape: a byte-tape virtual machine for the Brainfuck instruction set

use std::fs;
use std::path::Path;

use bftape::interpreter::engine::Executor;
use bftape::io::terminal::{TerminalInput, TerminalOutput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("bftape");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <program.b>", program_name);
        eprintln!();
        eprintln!("The file is executed as-is. The eight instruction symbols are");
        eprintln!("> < + - . , [ and ]; any other character in the file (including");
        eprintln!("whitespace and newlines) aborts the run as an invalid symbol.");
        std::process::exit(1);
    }

    let program_file = &args[1];

    if !Path::new(program_file).exists() {
        eprintln!("Error: File '{}' not found", program_file);
        eprintln!(
            "Usage: {} <program.b>",
            args.get(0).map(|s| s.as_str()).unwrap_or("bftape")
        );
        std::process::exit(1);
    }

    // Read the complete instruction stream before execution starts
    let source = fs::read_to_string(program_file)?;

    let mut executor = Executor::new(TerminalInput::new(), TerminalOutput::new());

    if let Err(e) = executor.run(&source) {
        eprintln!("Runtime error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
