//! Cursor motion and control-character navigation.
//!
//! All motion clamps the column into the screen and the line into the
//! scrolling region, matching the VT102's treatment of cursor-positioning
//! commands. Linefeed and reverse index scroll the region when the cursor
//! sits on its edge.

use crate::index::Column;

use super::Screen;
use super::cursor::{Cursor, SavedCursor};

impl Screen {
    /// Move the cursor relative to its current position.
    ///
    /// Positive `dx` moves right, positive `dy` moves down.
    pub fn move_rel(&mut self, dx: i32, dy: i32) {
        let col = self.cursor.col().0 as i32 + dx;
        let line = self.cursor.line() as i32 + dy;
        self.move_abs(col, line);
    }

    /// Move the cursor to an absolute position, then clamp.
    pub fn move_abs(&mut self, col: i32, line: i32) {
        self.cursor.set_col(Column(col.max(0) as usize));
        self.cursor.set_line(line.max(0) as usize);
        self.clamp_cursor();
        self.dirty.touch();
    }

    /// Move the cursor to an absolute column in the current line.
    pub fn move_col(&mut self, col: i32) {
        let line = self.cursor.line() as i32;
        self.move_abs(col, line);
    }

    /// CR: move the cursor to column 0.
    pub fn carriage_return(&mut self) {
        self.move_col(0);
    }

    /// LF: move the cursor down one line. If it sits on the bottom margin,
    /// scroll the region up instead. The column is unchanged.
    pub fn linefeed(&mut self) {
        if self.cursor.line() == self.margin_bottom {
            let (top, bottom) = (self.margin_top, self.margin_bottom);
            self.scroll_up_region(top, bottom, 1);
        }
        let col = self.cursor.col().0 as i32;
        let line = self.cursor.line() as i32;
        self.move_abs(col, line + 1);
    }

    /// RI: move the cursor up one line. If it sits on the top margin,
    /// scroll the region down instead. The column is unchanged.
    pub fn reverse_index(&mut self) {
        if self.cursor.line() == self.margin_top {
            let (top, bottom) = (self.margin_top, self.margin_bottom);
            self.scroll_down_region(top, bottom, 1);
        }
        self.move_rel(0, -1);
    }

    /// DECSC: save cursor position and rendition to the shadow slot.
    pub fn save_cursor(&mut self) {
        self.saved_cursor = Some(SavedCursor {
            line: self.cursor.line(),
            col: self.cursor.col(),
            fg: self.fg,
            bg: self.bg,
        });
    }

    /// DECRC: restore cursor position and rendition from the shadow slot,
    /// or reset to the origin with default rendition if nothing was saved.
    pub fn restore_cursor(&mut self) {
        match self.saved_cursor {
            Some(saved) => {
                self.fg = saved.fg;
                self.bg = saved.bg;
                self.move_abs(saved.col.0 as i32, saved.line as i32);
            }
            None => {
                self.reset_rendition();
                self.cursor = Cursor::new();
                self.clamp_cursor();
                self.dirty.touch();
            }
        }
    }

    /// Clip the cursor column into the screen and the line into the
    /// scrolling region.
    fn clamp_cursor(&mut self) {
        let col = self.cursor.col().0.min(self.cols - 1);
        let line = self.cursor.line().clamp(self.margin_top, self.margin_bottom);
        self.cursor.set_col(Column(col));
        self.cursor.set_line(line);
    }
}
