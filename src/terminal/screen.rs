//! The screen buffer: an ordered, growable sequence of styled lines.
//!
//! Rows materialize lazily: addressing a row at or beyond the current height
//! pads the buffer with empty lines first. All operations take visible
//! columns and are total; a column past the end of a line clamps instead of
//! erroring.

use super::index::{byte_offset, visible_len};
use super::style;

/// The screen contents built up during a capture.
#[derive(Debug, Default)]
pub struct Screen {
    lines: Vec<String>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current number of rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// The buffered lines, top to bottom.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the buffer, yielding one string per row.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn ensure_row(&mut self, y: usize) -> &mut String {
        while y >= self.lines.len() {
            self.lines.push(String::new());
        }
        &mut self.lines[y]
    }

    /// Write `text` at visible column `x` of row `y`, overwriting in place.
    ///
    /// The prefix keeps everything before `x` (padding with spaces when `x`
    /// is past the end of the line). When the line extends beyond the
    /// overwritten span, the untouched tail is re-prefixed with the style
    /// that was active just before the span, so an overwrite in the middle
    /// of a styled line cannot orphan the trailing styling.
    pub fn write(&mut self, text: &str, x: usize, y: usize) {
        self.ensure_row(y);
        let line = &self.lines[y];
        let line_len = visible_len(line);

        let prefix = if x < line_len {
            line[..byte_offset(line, x)].to_string()
        } else {
            format!("{}{}", line, " ".repeat(x - line_len))
        };

        let text_len = visible_len(text);
        let suffix = if line_len > x + text_len {
            // Style scan boundary: one column into the overwritten span,
            // clamped inside the line.
            let boundary = byte_offset(line, (x + 1).min(line_len - 1));
            let carried = style::reduce(&style::style_runs(&line[..boundary]));
            format!("{}{}", carried, &line[byte_offset(line, x + text_len)..])
        } else {
            String::new()
        };

        self.lines[y] = format!("{prefix}{text}{suffix}");
    }

    /// Blank row `y` from column `x` to the end of the line.
    pub fn erase_line_to_end(&mut self, x: usize, y: usize) {
        self.ensure_row(y);
        let end = byte_offset(&self.lines[y], x);
        self.lines[y].truncate(end);
    }

    /// Blank row `y` from the start of the line up to column `x`,
    /// substituting literal spaces.
    pub fn erase_line_to_start(&mut self, x: usize, y: usize) {
        self.ensure_row(y);
        let line = &self.lines[y];
        let rest = &line[byte_offset(line, x)..];
        self.lines[y] = format!("{}{}", " ".repeat(x), rest);
    }

    /// Blank row `y` entirely.
    pub fn erase_line_all(&mut self, y: usize) {
        self.ensure_row(y).clear();
    }

    /// Erase from `(x, y)` to the end of the screen: the rest of row `y`,
    /// and every row below it.
    ///
    /// A cursor at or past the end of row `y` leaves the row untouched, so a
    /// trailing style run survives; the line-erase path has no such guard.
    pub fn erase_display_to_end(&mut self, x: usize, y: usize) {
        self.ensure_row(y);
        if visible_len(&self.lines[y]) > x {
            self.erase_line_to_end(x, y);
        }
        self.lines.truncate(y + 1);
    }

    /// Erase from the start of the screen to `(x, y)`: every row above `y`,
    /// and row `y` up to column `x`.
    pub fn erase_display_to_start(&mut self, x: usize, y: usize) {
        self.erase_line_to_start(x, y);
        for line in &mut self.lines[..y] {
            line.clear();
        }
    }

    /// Empty the whole buffer. The caller is responsible for resetting the
    /// cursor to the origin.
    pub fn erase_display_all(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_with(lines: &[&str]) -> Screen {
        Screen {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn write_on_empty_screen() {
        let mut screen = Screen::new();
        screen.write("hello", 0, 0);
        assert_eq!(screen.lines(), ["hello"]);
    }

    #[test]
    fn write_below_materializes_blank_rows() {
        let mut screen = Screen::new();
        screen.write("hello", 0, 2);
        assert_eq!(screen.lines(), ["", "", "hello"]);
    }

    #[test]
    fn write_overwrites_whole_line() {
        let mut screen = screen_with(&["hello"]);
        screen.write("world", 0, 0);
        assert_eq!(screen.lines(), ["world"]);
    }

    #[test]
    fn write_overwrites_partially() {
        let mut screen = screen_with(&["hello"]);
        screen.write("world", 4, 0);
        assert_eq!(screen.lines(), ["hellworld"]);

        screen.write("hi, ", 0, 0);
        assert_eq!(screen.lines(), ["hi, world"]);

        let mut screen = screen_with(&["hello world"]);
        screen.write("owdy ", 1, 0);
        assert_eq!(screen.lines(), ["howdy world"]);
    }

    #[test]
    fn write_past_end_pads_with_spaces() {
        let mut screen = screen_with(&["hello"]);
        screen.write("world", 10, 0);
        assert_eq!(screen.lines(), ["hello     world"]);
    }

    #[test]
    fn write_preserves_trailing_style() {
        // Writing ">" over the first column must re-assert the reset run that
        // styled the untouched remainder of the line.
        let mut screen = screen_with(&[
            "\x1b[m  * \x1b[33m0793964\x1b[m 2021-04-03 \x1b[33m (\x1b[m\x1b[1;36mHEAD -> \x1b[m\x1b[1;32musability2",
        ]);
        screen.write(">", 0, 0);
        assert_eq!(
            screen.lines(),
            [">\x1b[m * \x1b[33m0793964\x1b[m 2021-04-03 \x1b[33m (\x1b[m\x1b[1;36mHEAD -> \x1b[m\x1b[1;32musability2"]
        );
    }

    #[test]
    fn write_over_styled_span_keeps_suffix_style() {
        let mut screen = screen_with(&["a\x1b[31mbcd"]);
        screen.write("X", 0, 0);
        // Column 1 onward was red; the suffix must start with that style.
        // The run sits on the splice boundary, so it survives in the suffix
        // itself rather than being re-asserted.
        assert_eq!(screen.lines(), ["X\x1b[31mbcd"]);
    }

    #[test]
    fn erase_line_to_end_truncates_at_column() {
        let mut screen = screen_with(&["Hello, world!"]);
        screen.erase_line_to_end(5, 0);
        assert_eq!(screen.lines(), ["Hello"]);
    }

    #[test]
    fn erase_line_to_end_past_length_is_noop() {
        let mut screen = screen_with(&["hi"]);
        screen.erase_line_to_end(9, 0);
        assert_eq!(screen.lines(), ["hi"]);
    }

    #[test]
    fn erase_line_to_start_blanks_with_spaces() {
        let mut screen = screen_with(&["Hello,  world!"]);
        screen.erase_line_to_start(7, 0);
        assert_eq!(screen.lines(), ["        world!"]);
    }

    #[test]
    fn erase_line_all_blanks_line() {
        let mut screen = screen_with(&["Hello"]);
        screen.erase_line_all(0);
        assert_eq!(screen.lines(), [""]);
    }

    #[test]
    fn erase_on_missing_row_materializes_it() {
        let mut screen = Screen::new();
        screen.erase_line_to_end(0, 2);
        assert_eq!(screen.height(), 3);
    }

    #[test]
    fn erase_display_to_end_drops_following_rows() {
        let mut screen = screen_with(&["Howdy, earth", "Hello, world "]);
        screen.erase_display_to_end(6, 0);
        assert_eq!(screen.lines(), ["Howdy,"]);
    }

    #[test]
    fn erase_display_to_end_at_line_end_keeps_trailing_run() {
        let mut screen = screen_with(&["RED\x1b[31m", "more"]);
        screen.erase_display_to_end(3, 0);
        assert_eq!(screen.lines(), ["RED\x1b[31m"]);
    }

    #[test]
    fn erase_display_to_start_blanks_rows_above() {
        let mut screen = screen_with(&["Hello,", "world"]);
        screen.erase_display_to_start(5, 1);
        assert_eq!(screen.lines(), ["", "     "]);
    }

    #[test]
    fn erase_display_all_empties_buffer() {
        let mut screen = screen_with(&["Hello,", " world! "]);
        screen.erase_display_all();
        assert_eq!(screen.height(), 0);
    }
}
