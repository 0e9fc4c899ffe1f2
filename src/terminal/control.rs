//! Control-sequence tokenizer.
//!
//! Recognizes the cursor-movement and erase sequences the capture engine
//! interprets: `ESC '[' <digits> <final>` with a final byte in `A`-`G`, `J`,
//! `K`, plus the two-argument position form `ESC '[' <digits> [';' <digits>]
//! 'H'`. Anything else — style runs, unknown finals, incomplete introducers,
//! multi-parameter position forms — is not a control sequence and flows into
//! the screen buffer as printable text.

/// What a control sequence does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Up,
    Down,
    Forward,
    Back,
    NextLine,
    PrevLine,
    Column,
    EraseDisplay,
    EraseLine,
    Position,
}

impl CodeKind {
    fn from_final(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(CodeKind::Up),
            b'B' => Some(CodeKind::Down),
            b'C' => Some(CodeKind::Forward),
            b'D' => Some(CodeKind::Back),
            b'E' => Some(CodeKind::NextLine),
            b'F' => Some(CodeKind::PrevLine),
            b'G' => Some(CodeKind::Column),
            b'J' => Some(CodeKind::EraseDisplay),
            b'K' => Some(CodeKind::EraseLine),
            _ => None,
        }
    }
}

/// One recognized control sequence within a chunk.
///
/// Counts stay as raw digit slices here; the engine parses them so that a
/// malformed (overflowing) run surfaces as a capture error, not a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSeq<'a> {
    pub kind: CodeKind,
    /// Leading digit run, `None` when no digits were present. Several codes
    /// behave differently for an absent count than for an explicit one.
    pub count: Option<&'a str>,
    /// Column digits of the position form, `None` when absent or empty.
    pub col: Option<&'a str>,
    /// Byte range of the whole sequence within the scanned text.
    pub start: usize,
    pub end: usize,
}

/// Leftmost control sequence in `text`, if any.
pub fn next_control(text: &str) -> Option<ControlSeq<'_>> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] != 0x1b || bytes[i + 1] != b'[' {
            i += 1;
            continue;
        }
        let digits_start = i + 2;
        let mut j = digits_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        let count = (j > digits_start).then(|| &text[digits_start..j]);
        if j < bytes.len() {
            if let Some(kind) = CodeKind::from_final(bytes[j]) {
                return Some(ControlSeq {
                    kind,
                    count,
                    col: None,
                    start: i,
                    end: j + 1,
                });
            }
            // Position form: optional ';', a second digit run, final 'H'.
            let mut k = j;
            if bytes[k] == b';' {
                k += 1;
            }
            let col_start = k;
            while k < bytes.len() && bytes[k].is_ascii_digit() {
                k += 1;
            }
            if k < bytes.len() && bytes[k] == b'H' {
                return Some(ControlSeq {
                    kind: CodeKind::Position,
                    count,
                    col: (k > col_start).then(|| &text[col_start..k]),
                    start: i,
                    end: k + 1,
                });
            }
        }
        i += 1;
    }
    None
}
