//! termstill CLI: capture the final screen of an ANSI-animated stream.
//!
//! Reads from a file or stdin, replays the stream through the virtual
//! terminal, and prints the flattened rows to stdout. Logging goes to
//! stderr (controlled by `RUST_LOG`) so stdout stays a clean data channel.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use termstill::{capture, strip_codes};

/// Version string with the git commit embedded by the build script.
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "termstill",
    version,
    long_version = LONG_VERSION,
    about = "Flatten animated terminal output into its final on-screen text",
    long_about = "Replays a stream of text and ANSI control sequences (cursor \
                  movement, erasure, styling) and prints the final, flattened \
                  screen content: what you would see in the terminal after the \
                  last redraw."
)]
struct Cli {
    /// Input file; reads stdin when absent or "-"
    file: Option<PathBuf>,

    /// Remove residual style escape codes from the output
    #[arg(long)]
    strip: bool,
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let lines = match cli.file.as_deref().filter(|p| *p != std::path::Path::new("-")) {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file: {}", path.display()))?;
            capture(BufReader::new(file))
                .with_context(|| format!("failed to capture {}", path.display()))?
        }
        None => {
            if atty::is(atty::Stream::Stdin) {
                eprintln!("termstill: reading from terminal; pipe input or pass a file (ctrl-d ends input)");
            }
            capture(io::stdin().lock()).context("failed to capture stdin")?
        }
    };

    let mut stdout = io::stdout().lock();
    for line in &lines {
        if cli.strip {
            writeln!(stdout, "{}", strip_codes(line))?;
        } else {
            writeln!(stdout, "{}", line)?;
        }
    }
    Ok(())
}
