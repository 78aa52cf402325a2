//! Pagination cursors.
//!
//! A cursor is the decimal start offset into the flat node sequence of a
//! snapshot. Sequences are rebuilt on every call, so an offset only points
//! at the same logical node if the tree did not change in between.

use tracing::debug;

/// Parse a cursor. Anything that is not a non-negative decimal integer
/// restarts pagination at offset 0.
pub fn parse_cursor(cursor: Option<&str>) -> usize {
    let Some(raw) = cursor else {
        return 0;
    };
    match raw.trim().parse::<usize>() {
        Ok(offset) => offset,
        Err(_) => {
            debug!(cursor = raw, "Malformed cursor, restarting at offset 0");
            0
        }
    }
}

/// Encode an offset as a cursor.
pub fn encode_cursor(offset: usize) -> String {
    offset.to_string()
}

/// The `[start, end)` slice of a sequence that forms one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn new(start: usize, page_size: usize) -> Self {
        Self {
            start,
            end: start.saturating_add(page_size),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Cursor for the page after this one, given how many items are known
    /// to exist.
    pub fn next_cursor(&self, total: usize) -> Option<String> {
        (self.end < total).then(|| encode_cursor(self.end))
    }
}
