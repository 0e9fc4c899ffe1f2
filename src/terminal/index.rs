//! Visible-column indexing for styled lines.
//!
//! A line in the screen buffer is visible text interleaved with embedded
//! escape runs (`ESC [ <digits/semicolons> <letter>`). All buffer writes are
//! addressed in visible columns, where an escape run occupies zero columns
//! and every Unicode code point outside a run occupies exactly one. This
//! module converts between the two coordinate systems.

/// Byte range of the first escape run in `text`, if any.
///
/// Matches the generic run grammar: `ESC '[' [0-9;]* <ASCII letter>`. An
/// `ESC [` introducer that never reaches a letter final is not a run and is
/// scanned past byte by byte, the way an unanchored pattern match would.
pub(crate) fn next_escape(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] != 0x1b || bytes[i + 1] != b'[' {
            i += 1;
            continue;
        }
        let mut j = i + 2;
        while j < bytes.len() && (bytes[j].is_ascii_digit() || bytes[j] == b';') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_alphabetic() {
            return Some((i, j + 1));
        }
        i += 1;
    }
    None
}

/// Number of visible columns in `line`: code points outside escape runs.
pub fn visible_len(line: &str) -> usize {
    let mut columns = 0;
    let mut rest = line;
    loop {
        match next_escape(rest) {
            Some((start, end)) => {
                columns += rest[..start].chars().count();
                rest = &rest[end..];
            }
            None => return columns + rest.chars().count(),
        }
    }
}

/// Byte offset of the start of visible column `col` in `line` (0-based).
///
/// Scans left to right, skipping escape runs. The column check happens before
/// a run is skipped, so an offset landing exactly on a run boundary points
/// before the run: column 0 is always byte 0, and `col == visible_len(line)`
/// stops before any trailing run. A column past the visible length clamps to
/// the end of the content.
pub fn byte_offset(line: &str, col: usize) -> usize {
    let mut offset = 0;
    let mut columns = 0;
    let mut rest = line;
    loop {
        let run = next_escape(rest);
        let passed = match run {
            Some((start, _)) => &rest[..start],
            None => rest,
        };
        for (i, _) in passed.char_indices() {
            if columns >= col {
                return offset + i;
            }
            columns += 1;
        }
        offset += passed.len();
        if columns >= col {
            return offset;
        }
        match run {
            Some((start, end)) => {
                offset += end - start;
                rest = &rest[end..];
            }
            None => return offset,
        }
    }
}

/// `line` with every escape run removed.
pub fn strip_codes(line: &str) -> String {
    let mut stripped = String::with_capacity(line.len());
    let mut rest = line;
    loop {
        match next_escape(rest) {
            Some((start, end)) => {
                stripped.push_str(&rest[..start]);
                rest = &rest[end..];
            }
            None => {
                stripped.push_str(rest);
                return stripped;
            }
        }
    }
}
