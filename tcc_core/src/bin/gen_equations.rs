//! Generate EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations
//! ```
//!
//! The generated file is written to `tcc_core/src/equations/EQUATIONS.md`.

use std::path::Path;
use std::process::ExitCode;

use tcc_core::equations::generate_equations_markdown;
use tcc_core::file_io::write_text_atomic;

fn main() -> ExitCode {
    println!("Generating EQUATIONS.md...");

    let markdown = generate_equations_markdown();

    // Relative to the workspace root
    let output_path = Path::new("tcc_core/src/equations/EQUATIONS.md");

    match write_text_atomic(&markdown, output_path) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            ExitCode::FAILURE
        }
    }
}
