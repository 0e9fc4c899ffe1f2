//! termstill — flatten animated terminal output into its final screen.
//!
//! Programs that redraw in place (progress bars, spinners, live status
//! lines) emit text interleaved with ANSI cursor-movement and erase
//! sequences. Replaying that stream through a real terminal shows only the
//! end state; piping it to a file keeps every intermediate frame. This crate
//! replays the stream against a virtual screen and returns the flattened
//! result: one string per screen row, with the styling still in effect
//! embedded in each line.
//!
//! ```
//! let lines = termstill::capture_str("hello\x1b[Bhi\n").unwrap();
//! assert_eq!(lines, ["hello", "     hi"]);
//! ```
//!
//! The emulation core lives in [`terminal`]; [`capture`] and the `termstill`
//! binary are thin I/O wrappers around it.

pub mod capture;
pub mod error;
pub mod terminal;

pub use capture::{capture, capture_str};
pub use error::CaptureError;
pub use terminal::{strip_codes, visible_len, Terminal};
