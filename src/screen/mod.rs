//! Screen model: 2D cell grid with cursor, scrolling margins, and dirty
//! tracking.
//!
//! The `Screen` is the authoritative picture of the terminal display.
//! The parser mutates it (through the backend operations), the renderer
//! reads it and clears the dirty flags. Editing, motion, and scroll
//! primitives are added in submodules.

pub mod cursor;
pub mod dirty;
pub mod editing;
pub mod navigation;
pub mod row;
pub mod scroll;

use std::ops::{Index, IndexMut};

use crate::color::AnsiColor;
use crate::error::Error;
use crate::index::{Column, Line};

pub use cursor::Cursor;
use cursor::SavedCursor;
pub use dirty::DirtyTracker;
pub use editing::EraseMode;
pub use row::Row;

/// Minimum screen width in columns; smaller requests are clamped up.
pub const MIN_COLUMNS: usize = 10;
/// Minimum screen height in lines; smaller requests are clamped up.
pub const MIN_LINES: usize = 2;

/// The terminal screen: cell grid, cursor, margins, rendition, dirty bits.
///
/// Invariants maintained by every operation:
/// - `rows` holds exactly `lines` rows of `cols` cells,
/// - the cursor column is in `0..cols` and the cursor line in `0..lines`,
/// - `margin_top < margin_bottom <= lines - 1`.
#[derive(Debug, Clone)]
pub struct Screen {
    /// Visible rows (index 0 = top of screen).
    rows: Vec<Row>,
    /// Number of columns.
    cols: usize,
    /// Number of visible lines.
    lines: usize,
    /// Current cursor position.
    cursor: Cursor,
    /// DECSC/DECRC saved cursor.
    saved_cursor: Option<SavedCursor>,
    /// Top line of the scrolling region (inclusive).
    margin_top: usize,
    /// Bottom line of the scrolling region (inclusive).
    margin_bottom: usize,
    /// Current SGR foreground.
    fg: AnsiColor,
    /// Current SGR background.
    bg: AnsiColor,
    /// DECTCEM cursor visibility (CSI ?25 h/l).
    cursor_visible: bool,
    /// Tracks which rows have changed since the renderer last drained.
    dirty: DirtyTracker,
}

impl Screen {
    /// Create a new screen, clamped to at least `MIN_LINES` × `MIN_COLUMNS`.
    ///
    /// All cells start blank, the cursor at the home position, margins at
    /// the full screen, and every line dirty.
    pub fn new(lines: usize, cols: usize) -> Result<Self, Error> {
        let lines = lines.max(MIN_LINES);
        let cols = cols.max(MIN_COLUMNS);
        let rows = alloc_rows(lines, cols)?;
        let mut dirty = DirtyTracker::new(lines);
        dirty.mark_all();

        Ok(Self {
            rows,
            cols,
            lines,
            cursor: Cursor::new(),
            saved_cursor: None,
            margin_top: 0,
            margin_bottom: lines - 1,
            fg: AnsiColor::White,
            bg: AnsiColor::Black,
            cursor_visible: true,
            dirty,
        })
    }

    /// Number of visible lines.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Immutable reference to the cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Mutable reference to the cursor, for the display path's raw
    /// advance. Positions set here bypass margin clamping; callers keep
    /// the cursor inside the grid.
    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Top line of the scrolling region (inclusive).
    pub fn margin_top(&self) -> usize {
        self.margin_top
    }

    /// Bottom line of the scrolling region (inclusive).
    pub fn margin_bottom(&self) -> usize {
        self.margin_bottom
    }

    /// Current SGR foreground.
    pub fn fg(&self) -> AnsiColor {
        self.fg
    }

    /// Current SGR background.
    pub fn bg(&self) -> AnsiColor {
        self.bg
    }

    /// Whether the cursor should be drawn (CSI ?25 h/l).
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Show or hide the cursor.
    pub fn set_cursor_visible(&mut self, visible: bool) {
        if self.cursor_visible != visible {
            self.cursor_visible = visible;
            self.dirty.touch();
        }
    }

    /// Set the SGR foreground for subsequently written characters.
    pub fn set_fg(&mut self, fg: AnsiColor) {
        self.fg = fg;
    }

    /// Set the SGR background for subsequently written characters.
    pub fn set_bg(&mut self, bg: AnsiColor) {
        self.bg = bg;
    }

    /// SGR 0: revert to the default rendition (white on black).
    pub fn reset_rendition(&mut self) {
        self.fg = AnsiColor::White;
        self.bg = AnsiColor::Black;
    }

    /// SGR 7: swap foreground and background.
    pub fn invert_rendition(&mut self) {
        std::mem::swap(&mut self.fg, &mut self.bg);
    }

    /// Immutable reference to the dirty tracker.
    pub fn dirty(&self) -> &DirtyTracker {
        &self.dirty
    }

    /// Mutable reference to the dirty tracker (for the renderer to drain
    /// dirty lines and clear the refresh flag).
    pub fn dirty_mut(&mut self) -> &mut DirtyTracker {
        &mut self.dirty
    }

    /// RIS: reinitialize everything renderer-visible.
    ///
    /// Full margins, default rendition, cursor home and visible, saved
    /// cursor dropped, display erased.
    pub fn reset(&mut self) {
        self.margin_top = 0;
        self.margin_bottom = self.lines - 1;
        self.reset_rendition();
        self.saved_cursor = None;
        self.cursor = Cursor::new();
        self.cursor_visible = true;
        self.erase_display(EraseMode::All);
    }

    /// Change the screen dimensions, clamped to the minimum geometry.
    ///
    /// Contents in the overlapping top-left subgrid are preserved; new
    /// cells are blank. Margins reset to the full screen, the cursor is
    /// clamped into the new bounds, and every line is marked dirty.
    pub fn resize(&mut self, lines: usize, cols: usize) -> Result<(), Error> {
        let lines = lines.max(MIN_LINES);
        let cols = cols.max(MIN_COLUMNS);

        let mut rows = alloc_rows(lines, cols)?;
        let keep_lines = lines.min(self.lines);
        let keep_cols = cols.min(self.cols);
        for (line, row) in rows.iter_mut().enumerate().take(keep_lines) {
            row.copy_from(&self.rows[line], keep_cols);
        }

        self.rows = rows;
        self.lines = lines;
        self.cols = cols;
        self.margin_top = 0;
        self.margin_bottom = lines - 1;

        let col = self.cursor.col().0.min(cols - 1);
        let line = self.cursor.line().min(lines - 1);
        self.cursor.set_col(Column(col));
        self.cursor.set_line(line);

        self.dirty.resize(lines);
        Ok(())
    }
}

/// Allocate `lines` blank rows of `cols` cells, surfacing allocation
/// failure instead of aborting.
fn alloc_rows(lines: usize, cols: usize) -> Result<Vec<Row>, Error> {
    let mut rows = Vec::new();
    rows.try_reserve_exact(lines)?;
    for _ in 0..lines {
        rows.push(Row::new(cols)?);
    }
    Ok(rows)
}

impl Index<Line> for Screen {
    type Output = Row;

    fn index(&self, line: Line) -> &Row {
        &self.rows[line.0]
    }
}

impl IndexMut<Line> for Screen {
    fn index_mut(&mut self, line: Line) -> &mut Row {
        &mut self.rows[line.0]
    }
}
