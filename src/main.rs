//! TABGRID - Tab-Delimited Grid Formula Evaluator
//!
//! Reads a grid from a file argument (or stdin), evaluates every cell,
//! and prints the evaluated grid as tab-separated lines.

use std::env;
use std::io;

use tabgrid::application::GridPipeline;
use tabgrid::infrastructure::TsvRepository;

/// Entry point for the tabgrid command-line tool.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is structurally
/// malformed (bad size header, wrong field counts, missing rows).
/// Cell-level evaluation failures never abort the run; they appear as
/// `#NAN!` / `#EXPR_ERR!` markers in the output.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let grid = match args.get(1).map(String::as_str) {
        Some("-h") | Some("--help") => {
            eprintln!("usage: tabgrid [FILE]");
            eprintln!("Reads a tab-separated grid from FILE (or stdin) and prints the evaluated grid.");
            return Ok(());
        }
        Some(filename) => GridPipeline::run_path(filename)?,
        None => GridPipeline::run_reader(io::stdin().lock())?,
    };

    print!("{}", TsvRepository::render_to_string(&grid)?);
    Ok(())
}
