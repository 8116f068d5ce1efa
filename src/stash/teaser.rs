//! # Teaser Preview Logic
//!
//! A teaser is the opening of a stash, shown by the list view so several
//! stashes fit on one screen.

/// Lines shown per stash when nothing else is configured.
pub const DEFAULT_TEASER_LINES: usize = 10;

/// Returns at most the first `max_lines` lines of `content`.
///
/// Content is split on `\n` and the kept lines are joined back with `\n`, so
/// anything shorter than `max_lines` comes back byte-for-byte unchanged.
pub fn teaser(content: &[u8], max_lines: usize) -> Vec<u8> {
    let lines: Vec<&[u8]> = content.split(|b| *b == b'\n').take(max_lines).collect();
    lines.join(&b'\n')
}
