//! Chunk-at-a-time capture driver.
//!
//! Thin collaborator around the [`Terminal`](crate::Terminal): reads
//! newline-delimited chunks from any buffered reader and folds them through
//! the emulator, returning the flattened screen rows.

use std::io::BufRead;

use tracing::debug;

use crate::error::CaptureError;
use crate::terminal::Terminal;

/// Replay `reader` through a fresh terminal and return the final screen.
///
/// Each newline-delimited chunk is one redraw pass; a non-empty final chunk
/// without a trailing newline is still processed. Clean end-of-stream
/// terminates normally; any other read failure aborts the run.
pub fn capture<R: BufRead>(mut reader: R) -> Result<Vec<String>, CaptureError> {
    let mut terminal = Terminal::new();
    let mut buf = String::new();
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        let chunk = buf.strip_suffix('\n').unwrap_or(&buf);
        terminal.handle_chunk(chunk)?;
    }
    let lines = terminal.into_lines();
    debug!(rows = lines.len(), "capture complete");
    Ok(lines)
}

/// Capture from an in-memory string.
pub fn capture_str(input: &str) -> Result<Vec<String>, CaptureError> {
    capture(input.as_bytes())
}
