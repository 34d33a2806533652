//! privscan - flags C++ sources that carry a `// PRIVATE` marker
//!
//! privscan provides:
//! - Recursive, name-sorted traversal of a root directory
//! - A first-line substring check on `.cpp` and `.h` files
//! - `<path> should not be here` warnings on stderr
//! - Optional jsonl/json reports on stdout

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod scanner;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    if cli::run(cli)? {
        std::process::exit(1);
    }
    Ok(())
}
