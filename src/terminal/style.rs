//! Style-run tracking.
//!
//! Style runs (`ESC [ <params> m`) accumulate: each print re-asserts the
//! active style at the cursor, so the engine keeps a running concatenation of
//! every run seen since the last reset. A reset run cancels everything before
//! it but stays active itself, which keeps the style prefix minimal instead
//! of growing without bound across chunks.

use super::index::next_escape;

/// All style runs embedded in `text`, in order.
pub(crate) fn style_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut rest = text;
    while let Some((start, end)) = next_escape(rest) {
        let run = &rest[start..end];
        if run.ends_with('m') {
            runs.push(run);
        }
        rest = &rest[end..];
    }
    runs
}

/// Whether a style run resets all active styling.
///
/// A run resets iff the parameter text after its last `;` is empty or all
/// zeros: the final parameter is then SGR 0, which cancels everything set
/// before it, inside the run or not. So `31;0` is a reset while `0;31` is
/// not (the red set after the zero survives).
pub(crate) fn is_reset(run: &str) -> bool {
    let params = match run.strip_prefix("\x1b[").and_then(|r| r.strip_suffix('m')) {
        Some(params) => params,
        None => return false,
    };
    let last = params.rsplit(';').next().unwrap_or(params);
    last.bytes().all(|b| b == b'0')
}

/// Collapse an ordered run sequence to the net active style.
///
/// Everything before the last reset run is dead; the reset run itself and
/// anything after it remain in application order.
pub fn reduce(runs: &[&str]) -> String {
    let start = runs
        .iter()
        .rposition(|run| is_reset(run))
        .unwrap_or(0);
    runs[start..].concat()
}
