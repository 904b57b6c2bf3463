//! # cz
//!
//! Command-line converter from delimited text to a typed binary record stream.
//!
//! ## Usage
//!
//! ```bash
//! # Convert CSV on stdin to a binary stream on stdout
//! cz < input.csv > output.czb
//!
//! # Keep every field as a string
//! cz -s < input.csv > output.czb
//!
//! # JSON lines instead of the binary stream
//! cz --format json input.csv
//!
//! # Render a binary stream as JSON lines
//! cz inspect output.czb
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
