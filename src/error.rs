//! Capture errors.

/// Errors that can abort a capture run.
///
/// Cursor and erase edge cases (missing counts, out-of-range positions) are
/// total operations and never error; only these two conditions are fatal.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// A digit run captured by the control-sequence grammar failed to parse
    /// as an integer. The grammar only captures ASCII digits, so this is only
    /// reachable when the run overflows the integer type.
    #[error("invalid numeric argument in control sequence: \"{digits}\"")]
    BadCount {
        digits: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Reading the input stream failed with something other than a clean
    /// end-of-stream.
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
}
