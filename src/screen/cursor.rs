//! Screen cursor state.
//!
//! Tracks the active write position. The saved-cursor slot (DECSC/DECRC)
//! additionally captures the rendition in effect at save time.

use crate::color::AnsiColor;
use crate::index::Column;

/// The screen cursor: the position where the next character lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Line index into visible rows (0-based).
    line: usize,
    /// Column index (0-based).
    col: Column,
}

impl Cursor {
    /// Create a cursor at the home position (0, 0).
    pub fn new() -> Self {
        Self {
            line: 0,
            col: Column(0),
        }
    }

    /// Current line (row index).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Current column.
    pub fn col(&self) -> Column {
        self.col
    }

    /// Set the cursor line directly, without clamping.
    pub fn set_line(&mut self, line: usize) {
        self.line = line;
    }

    /// Set the cursor column directly, without clamping.
    pub fn set_col(&mut self, col: Column) {
        self.col = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// The single DECSC shadow slot: position plus rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SavedCursor {
    pub(crate) line: usize,
    pub(crate) col: Column,
    pub(crate) fg: AnsiColor,
    pub(crate) bg: AnsiColor,
}
