//! Backend dispatch: the operations the parser drives.
//!
//! `VtBackend` replaces a function-pointer dispatch table with a trait.
//! Every terminal operation is a method with a default implementation
//! carrying the VT102 semantics; a host overrides exactly the methods it
//! wants to intercept and supplies the screen accessors. Operations that
//! invoke other operations (`display_char` linefeeding at the bottom
//! edge, `horiz_tab` writing spaces) call back through `self`, so an
//! override of any single method composes with the defaults.

use std::io::Write;

use crate::color::AnsiColor;
use crate::error::Error;
use crate::index::Column;
use crate::screen::{EraseMode, Screen};

/// The VT102 operation set, dispatched by the parser.
///
/// Implementors supply `screen`/`screen_mut` and optionally `emit` (the
/// transport sink for DA/DSR responses) and `bell`. Overrides of the
/// remaining methods must uphold the screen invariants.
pub trait VtBackend {
    /// The screen this backend drives.
    fn screen(&self) -> &Screen;

    /// Mutable access to the screen.
    fn screen_mut(&mut self) -> &mut Screen;

    /// Write response bytes (DA, DSR) back toward the host. Responses are
    /// never buffered; the default discards them.
    fn emit(&mut self, _bytes: &[u8]) {}

    /// BEL received. Default: ignored.
    fn bell(&mut self) {}

    /// Display a character at the cursor and advance one column.
    ///
    /// Advancing past the last column wraps to the start of the next
    /// line; wrapping off the bottom line performs a linefeed, which
    /// scrolls the region up and leaves the cursor on its last line.
    fn display_char(&mut self, ch: u8) {
        self.screen_mut().put_cell(ch);

        let cols = self.screen().cols();
        let col = self.screen().cursor().col().0 + 1;
        if col < cols {
            self.screen_mut().cursor_mut().set_col(Column(col));
            return;
        }

        // Wrap to the start of the next line.
        let line = self.screen().cursor().line() + 1;
        let lines = self.screen().lines();
        self.screen_mut().cursor_mut().set_col(Column(0));
        if line == lines {
            // Fell off the bottom: scroll via linefeed (re-dispatched so a
            // host-overridden linefeed sees the wrap too).
            self.linefeed();
        } else {
            let screen = self.screen_mut();
            screen.cursor_mut().set_line(line);
            screen.dirty_mut().mark(line);
        }
    }

    /// SGR: apply rendition parameters in order. An empty list means
    /// reset. Unsupported codes are logged and skipped.
    fn select_graphic_rendition(&mut self, params: &[u16]) {
        if params.is_empty() {
            self.screen_mut().reset_rendition();
            return;
        }
        for &param in params {
            match param {
                0 => self.screen_mut().reset_rendition(),
                7 => self.screen_mut().invert_rendition(),
                30..=37 => {
                    let fg = AnsiColor::from_index((param - 30) as u8);
                    self.screen_mut().set_fg(fg);
                }
                39 => self.screen_mut().set_fg(AnsiColor::White),
                40..=47 => {
                    let bg = AnsiColor::from_index((param - 40) as u8);
                    self.screen_mut().set_bg(bg);
                }
                49 => self.screen_mut().set_bg(AnsiColor::Black),
                other => log::debug!("ignoring SGR parameter {other}"),
            }
        }
    }

    /// Move the cursor relative to its position (positive `dx` right,
    /// positive `dy` down), clamped.
    fn move_cursor_relative(&mut self, dx: i32, dy: i32) {
        self.screen_mut().move_rel(dx, dy);
    }

    /// Move the cursor to an absolute position, clamped.
    fn move_cursor_absolute(&mut self, col: i32, line: i32) {
        self.screen_mut().move_abs(col, line);
    }

    /// Move the cursor to an absolute column in the current line.
    fn move_cursor_column_absolute(&mut self, col: i32) {
        self.screen_mut().move_col(col);
    }

    /// RI: move the cursor up one line, scrolling the region down when it
    /// sits on the top margin.
    fn cursor_reverse_index(&mut self) {
        self.screen_mut().reverse_index();
    }

    /// EL 2: erase the entire line at the cursor.
    fn erase_line_at_cursor(&mut self) {
        self.screen_mut().erase_line(EraseMode::All);
    }

    /// EL 1: erase from the start of the line to the cursor, inclusive.
    fn erase_line_from_beginning_to_cursor(&mut self) {
        self.screen_mut().erase_line(EraseMode::Above);
    }

    /// EL 0: erase from the cursor to the end of the line, inclusive.
    fn erase_line_from_cursor_to_end(&mut self) {
        self.screen_mut().erase_line(EraseMode::Below);
    }

    /// ED 2: erase the entire display.
    fn erase_display(&mut self) {
        self.screen_mut().erase_display(EraseMode::All);
    }

    /// ED 1: erase from the top of the display to the cursor, inclusive.
    fn erase_display_from_beginning_to_cursor(&mut self) {
        self.screen_mut().erase_display(EraseMode::Above);
    }

    /// ED 0: erase from the cursor to the end of the display, inclusive.
    fn erase_display_from_cursor_to_end(&mut self) {
        self.screen_mut().erase_display(EraseMode::Below);
    }

    /// IL: insert blank lines at the cursor within the scrolling region.
    fn insert_lines(&mut self, count: usize) {
        self.screen_mut().insert_lines(count);
    }

    /// DL: delete lines at the cursor within the scrolling region.
    fn delete_lines(&mut self, count: usize) {
        self.screen_mut().delete_lines(count);
    }

    /// DCH: delete characters at the cursor, shifting the line left.
    fn delete_chars(&mut self, count: usize) {
        self.screen_mut().delete_chars(count);
    }

    /// BS: move the cursor one column left; never wraps past column 0.
    fn backspace(&mut self) {
        self.screen_mut().move_rel(-1, 0);
    }

    /// HT: fill with spaces to the next multiple-of-8 column.
    ///
    /// The fill goes through `display_char`, so it carries the current
    /// rendition and can wrap at the right edge.
    fn horiz_tab(&mut self) {
        let col = self.screen().cursor().col().0;
        let count = 8 - col % 8;
        for _ in 0..count {
            self.display_char(b' ');
        }
    }

    /// LF (also VT, FF): move down one line, scrolling at the bottom
    /// margin.
    fn linefeed(&mut self) {
        self.screen_mut().linefeed();
    }

    /// CR: move to column 0.
    fn carriage_return(&mut self) {
        self.screen_mut().carriage_return();
    }

    /// DECSTBM: select the scrolling region (0-based, inclusive;
    /// negative selects the default edge).
    fn set_top_and_bottom_margins(&mut self, top: i32, bottom: i32) {
        self.screen_mut().set_margins(top, bottom);
    }

    /// DA: answer with the VT102 identification string.
    fn query_terminal_id(&mut self) {
        self.emit(b"\x1b[?6c");
    }

    /// DSR 6: report the cursor position, 1-based.
    fn device_status_report(&mut self) {
        let cursor = self.screen().cursor();
        let reply = format!("\x1b[{};{}R", cursor.line() + 1, cursor.col().0 + 1);
        self.emit(reply.as_bytes());
    }

    /// DECSC: save cursor position and rendition.
    fn save_cursor(&mut self) {
        self.screen_mut().save_cursor();
    }

    /// DECRC: restore the saved cursor, or home with default rendition.
    fn restore_cursor(&mut self) {
        self.screen_mut().restore_cursor();
    }

    /// RIS: reset the terminal to its initial visible state.
    fn reset(&mut self) {
        self.screen_mut().reset();
    }

    /// DECTCEM (CSI ?25 h/l): show or hide the cursor.
    fn set_cursor_visible(&mut self, visible: bool) {
        self.screen_mut().set_cursor_visible(visible);
    }
}

/// The stock backend: a screen plus an optional response writer.
pub struct TermBackend {
    screen: Screen,
    writer: Option<Box<dyn Write + Send>>,
}

impl TermBackend {
    /// Create a backend with a fresh screen of the given dimensions.
    pub fn new(lines: usize, cols: usize) -> Result<Self, Error> {
        Ok(Self {
            screen: Screen::new(lines, cols)?,
            writer: None,
        })
    }

    /// Create a backend around an existing screen.
    pub fn with_screen(screen: Screen) -> Self {
        Self {
            screen,
            writer: None,
        }
    }

    /// Install the sink that DA/DSR responses are written to.
    pub fn set_writer(&mut self, writer: Box<dyn Write + Send>) {
        self.writer = Some(writer);
    }
}

impl std::fmt::Debug for TermBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermBackend")
            .field("screen", &self.screen)
            .field("writer", &self.writer.as_ref().map(|_| ".."))
            .finish()
    }
}

impl VtBackend for TermBackend {
    fn screen(&self) -> &Screen {
        &self.screen
    }

    fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    fn emit(&mut self, bytes: &[u8]) {
        if let Some(writer) = self.writer.as_mut() {
            let _ = writer.write_all(bytes);
            let _ = writer.flush();
        }
    }
}
