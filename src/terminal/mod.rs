//! Virtual terminal for flattening redraw-heavy output.
//!
//! Models just enough VT100/ANSI behavior to reconstruct the final screen
//! content from a stream of text and control sequences: cursor movement,
//! line and display erasure, and sticky styling. Not a full emulator — no
//! scrollback, no alternate screen, no size limit; the screen grows to fit
//! whatever the stream addresses.
//!
//! Organized by concern:
//! - [`index`]: visible-column to byte-offset mapping inside styled lines
//! - [`style`]: net-active-style accumulation and reset collapsing
//! - [`screen`]: the growable line buffer with style-preserving overwrites
//! - [`control`]: the cursor/erase sequence tokenizer
//!
//! [`Terminal`] ties these together, one newline-delimited chunk at a time.

pub mod control;
pub mod index;
pub mod screen;
pub mod style;

use tracing::trace;

use crate::error::CaptureError;
use control::{CodeKind, ControlSeq};
use screen::Screen;

pub use index::{strip_codes, visible_len};

/// The emulator state: screen buffer, cursor, and active style.
///
/// Constructed fresh per capture run; cursor and style persist across
/// chunks, while the cursor column resets to 0 at the start of each chunk
/// (each chunk is one full redraw pass).
#[derive(Debug, Default)]
pub struct Terminal {
    screen: Screen,
    x: usize,
    y: usize,
    style: String,
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay one newline-delimited chunk (delimiter already stripped).
    ///
    /// Scans left to right, alternately printing text runs and applying
    /// control sequences; the cursor row advances by one afterwards.
    pub fn handle_chunk(&mut self, chunk: &str) -> Result<(), CaptureError> {
        self.x = 0;
        let mut text = chunk;
        loop {
            match control::next_control(text) {
                Some(seq) => {
                    self.print(&text[..seq.start]);
                    self.apply(&seq)?;
                    if text.len() > seq.end {
                        text = &text[seq.end..];
                    } else {
                        break;
                    }
                }
                None => {
                    self.print(text);
                    break;
                }
            }
        }
        self.y += 1;
        Ok(())
    }

    /// Write `text` at the cursor with the active style prepended, advance
    /// the cursor by the text's visible length, and fold any style runs in
    /// the written content back into the active style.
    fn print(&mut self, text: &str) {
        let styled = format!("{}{}", self.style, text);
        // Nothing to write means no row materialization: pure cursor motion
        // must not leave trailing blank rows behind. Erase operations
        // materialize the rows they touch themselves.
        if !styled.is_empty() {
            self.screen.write(&styled, self.x, self.y);
        }
        self.x += index::visible_len(text);
        self.style = style::reduce(&style::style_runs(&styled));
    }

    fn apply(&mut self, seq: &ControlSeq<'_>) -> Result<(), CaptureError> {
        let count = match seq.count {
            Some(digits) => parse_count(digits)?,
            None => 1,
        };
        trace!(kind = ?seq.kind, count, x = self.x, y = self.y, "control sequence");

        match seq.kind {
            CodeKind::Up => self.y = self.y.saturating_sub(count),
            CodeKind::Down => self.y = self.y.saturating_add(count),
            CodeKind::Forward => self.x = self.x.saturating_add(count),
            CodeKind::Back => self.x = self.x.saturating_sub(count),
            CodeKind::NextLine => {
                self.y = self.y.saturating_add(count);
                self.x = 0;
            }
            CodeKind::PrevLine => {
                self.y = self.y.saturating_sub(count);
                self.x = 0;
            }
            CodeKind::Column => {
                // Quirk: a bare `G` moves to column 1, not 0.
                self.x = match seq.count {
                    None => 1,
                    Some(_) => count.saturating_sub(1),
                };
            }
            CodeKind::EraseDisplay => match seq.count.map(|_| count) {
                None | Some(0) => self.screen.erase_display_to_end(self.x, self.y),
                Some(1) => self.screen.erase_display_to_start(self.x, self.y),
                Some(_) => {
                    self.screen.erase_display_all();
                    self.x = 0;
                    self.y = 0;
                }
            },
            CodeKind::EraseLine => match seq.count.map(|_| count) {
                None | Some(0) => self.screen.erase_line_to_end(self.x, self.y),
                Some(1) => self.screen.erase_line_to_start(self.x, self.y),
                Some(2) => self.screen.erase_line_all(self.y),
                Some(_) => {}
            },
            CodeKind::Position => {
                self.y = count.saturating_sub(1);
                self.x = match seq.col {
                    Some(digits) => parse_count(digits)?.saturating_sub(1),
                    None => 0,
                };
            }
        }
        Ok(())
    }

    /// Cursor position, mostly useful for tests and diagnostics.
    pub fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Finish the capture, yielding the flattened screen rows.
    pub fn into_lines(self) -> Vec<String> {
        self.screen.into_lines()
    }
}

fn parse_count(digits: &str) -> Result<usize, CaptureError> {
    digits.parse().map_err(|source| CaptureError::BadCount {
        digits: digits.to_string(),
        source,
    })
}
