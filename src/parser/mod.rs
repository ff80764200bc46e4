//! Byte-stream escape-sequence parser.
//!
//! A byte-at-a-time state machine over the four states a VT102 stream
//! needs: ground text, escape, CSI parameter collection, and OSC-style
//! string skipping. Each byte is fully processed before `advance`
//! returns; all transitions are total, and malformed input can only ever
//! drop a sequence, never corrupt state or touch the screen.

pub mod params;

use crate::backend::VtBackend;

pub use params::{MAX_PARAMS, Params};

/// Maximum intermediate bytes retained in a control sequence; the VT102
/// repertoire needs none, so these only feed diagnostics.
pub const MAX_INTERMEDIATES: usize = 2;

/// Parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    /// Ordinary text and C0 controls.
    #[default]
    Ground,
    /// Saw ESC, waiting for the sequence selector.
    Escape,
    /// Inside `CSI`, collecting parameters.
    Csi,
    /// Inside `OSC` (or another string sequence); discarding until BEL
    /// or `ESC \`.
    OscString,
}

/// The escape-sequence state machine.
///
/// Owns only bounded scratch state; the screen is reached through the
/// [`VtBackend`] passed to [`advance`](Self::advance).
#[derive(Debug, Default)]
pub struct Parser {
    state: State,
    params: Params,
    /// Leading `<`, `=`, `>`, or `?` of a control sequence.
    private_marker: Option<u8>,
    intermediates: [u8; MAX_INTERMEDIATES],
    intermediate_count: usize,
}

impl Parser {
    /// Create a parser in the ground state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one input byte, dispatching any completed action into the
    /// backend.
    pub fn advance<B: VtBackend>(&mut self, backend: &mut B, byte: u8) {
        match self.state {
            State::Ground => self.ground(backend, byte),
            State::Escape => self.escape(backend, byte),
            State::Csi => self.csi(backend, byte),
            State::OscString => self.osc_string(byte),
        }
    }

    fn ground<B: VtBackend>(&mut self, backend: &mut B, byte: u8) {
        match byte {
            0x07 => backend.bell(),
            0x08 => backend.backspace(),
            0x09 => backend.horiz_tab(),
            // LF, VT, and FF all behave as linefeed.
            0x0a..=0x0c => backend.linefeed(),
            0x0d => backend.carriage_return(),
            0x1b => self.state = State::Escape,
            0x20..=0xff => backend.display_char(byte),
            // NUL and the remaining C0 controls are ignored.
            _ => {}
        }
    }

    fn escape<B: VtBackend>(&mut self, backend: &mut B, byte: u8) {
        self.state = State::Ground;
        match byte {
            b'[' => {
                self.reset_sequence();
                self.state = State::Csi;
            }
            b']' => self.state = State::OscString,
            b'M' => backend.cursor_reverse_index(),
            b'7' => backend.save_cursor(),
            b'8' => backend.restore_cursor(),
            b'c' => backend.reset(),
            other => log::debug!("ignoring escape sequence ESC {:?}", other as char),
        }
    }

    fn csi<B: VtBackend>(&mut self, backend: &mut B, byte: u8) {
        match byte {
            b'0'..=b'9' => self.params.push_digit(byte - b'0'),
            b';' => self.params.push_separator(),
            // Private markers are only recognized before any parameter.
            0x3c..=0x3f => {
                if self.private_marker.is_none() && self.params.is_unstarted() {
                    self.private_marker = Some(byte);
                }
            }
            0x20..=0x2f => {
                if self.intermediate_count < MAX_INTERMEDIATES {
                    self.intermediates[self.intermediate_count] = byte;
                }
                self.intermediate_count += 1;
            }
            0x40..=0x7e => {
                self.csi_dispatch(backend, byte);
                self.reset_sequence();
                self.state = State::Ground;
            }
            other => {
                log::debug!("cancelling control sequence on byte {other:#04x}");
                self.reset_sequence();
                self.state = State::Ground;
            }
        }
    }

    fn osc_string(&mut self, byte: u8) {
        match byte {
            0x07 => self.state = State::Ground,
            // ESC terminates the string too (typically as `ESC \`).
            0x1b => self.state = State::Escape,
            _ => {}
        }
    }

    /// Dispatch a completed control sequence. Unknown sequences never
    /// mutate the screen.
    fn csi_dispatch<B: VtBackend>(&mut self, backend: &mut B, action: u8) {
        if self.intermediate_count > 0 {
            log::debug!(
                "ignoring control sequence with intermediates {:?} and final {:?}",
                &self.intermediates[..self.intermediate_count.min(MAX_INTERMEDIATES)],
                action as char,
            );
            return;
        }

        let params = self.params.finish();
        let private = self.private_marker;
        // Parameter 0, defaulting to 0 when absent.
        let p0 = params.first().copied().unwrap_or(0);
        // Motion count: parameter 0 when present, otherwise 1.
        let count = params.first().copied().unwrap_or(1) as i32;

        if let Some(marker) = private {
            match (action, p0) {
                // DECTCEM: show/hide cursor.
                (b'h' | b'l', 25) if marker == b'?' => {
                    backend.set_cursor_visible(action == b'h');
                }
                _ => log::debug!(
                    "ignoring private control sequence {:?} {params:?} {:?}",
                    marker as char,
                    action as char,
                ),
            }
            return;
        }

        match action {
            // ICH: recognized, deliberately not implemented.
            b'@' => {}
            b'A' => backend.move_cursor_relative(0, -count),
            b'B' => backend.move_cursor_relative(0, count),
            b'C' => backend.move_cursor_relative(count, 0),
            b'D' => backend.move_cursor_relative(-count, 0),
            b'G' => backend.move_cursor_column_absolute(count - 1),
            b'H' | b'f' => {
                let line = params.first().copied().unwrap_or(1).max(1) as i32 - 1;
                let col = params.get(1).copied().unwrap_or(1).max(1) as i32 - 1;
                backend.move_cursor_absolute(col, line);
            }
            b'J' => match p0 {
                0 => backend.erase_display_from_cursor_to_end(),
                1 => backend.erase_display_from_beginning_to_cursor(),
                2 => backend.erase_display(),
                other => log::debug!("ignoring erase-display mode {other}"),
            },
            b'K' => match p0 {
                0 => backend.erase_line_from_cursor_to_end(),
                1 => backend.erase_line_from_beginning_to_cursor(),
                2 => backend.erase_line_at_cursor(),
                other => log::debug!("ignoring erase-line mode {other}"),
            },
            b'L' => backend.insert_lines(count.max(1) as usize),
            b'M' => backend.delete_lines(count.max(1) as usize),
            b'P' => backend.delete_chars(count.max(1) as usize),
            b'c' => {
                if p0 == 0 {
                    backend.query_terminal_id();
                } else {
                    log::debug!("ignoring device-attributes request {p0}");
                }
            }
            b'd' => {
                let col = backend.screen().cursor().col().0 as i32;
                backend.move_cursor_absolute(col, count - 1);
            }
            b'h' | b'l' => {
                log::debug!("ignoring set/reset mode {params:?} {:?}", action as char);
            }
            b'm' => backend.select_graphic_rendition(params),
            b'n' => {
                if p0 == 6 {
                    backend.device_status_report();
                } else {
                    log::debug!("ignoring device-status request {p0}");
                }
            }
            b'r' => {
                let top = p0 as i32 - 1;
                let bottom = params.get(1).copied().unwrap_or(0) as i32 - 1;
                backend.set_top_and_bottom_margins(top, bottom);
            }
            other => {
                log::debug!("ignoring control sequence {params:?} {:?}", other as char);
            }
        }
    }

    /// Clear all per-sequence scratch state.
    fn reset_sequence(&mut self) {
        self.params.clear();
        self.private_marker = None;
        self.intermediate_count = 0;
    }
}
