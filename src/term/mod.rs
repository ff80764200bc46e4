//! The terminal instance: parser plus backend behind one handle.
//!
//! `Term` is the host entry point. Construct it with an initial size,
//! push host output through [`feed`](Term::feed), resize on window
//! changes, and hand the [`Screen`] to a renderer between feeds. Dropping
//! the terminal releases all storage.

use std::io::Write;

use crate::backend::{TermBackend, VtBackend};
use crate::error::Error;
use crate::parser::Parser;
use crate::screen::Screen;

/// A VT102 terminal: escape-sequence parser driving a screen through a
/// backend.
///
/// The default backend is [`TermBackend`]; hosts that want to intercept
/// operations (snoop writes, answer device queries themselves) supply
/// their own [`VtBackend`] via [`Term::with_backend`].
#[derive(Debug)]
pub struct Term<B: VtBackend = TermBackend> {
    backend: B,
    parser: Parser,
}

impl Term<TermBackend> {
    /// Create a terminal with the given initial size, clamped to the
    /// minimum geometry.
    pub fn new(lines: usize, cols: usize) -> Result<Self, Error> {
        Ok(Self::with_backend(TermBackend::new(lines, cols)?))
    }

    /// Install the sink that DA/DSR responses are written to (typically
    /// the PTY writer).
    pub fn set_writer(&mut self, writer: Box<dyn Write + Send>) {
        self.backend.set_writer(writer);
    }
}

impl<B: VtBackend> Term<B> {
    /// Create a terminal around a host-supplied backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            parser: Parser::new(),
        }
    }

    /// Apply a chunk of host output, byte by byte, in order.
    ///
    /// Returns once every byte's state transitions have completed; the
    /// screen then reflects the full effect of the chunk.
    pub fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.parser.advance(&mut self.backend, byte);
        }
    }

    /// Change the screen dimensions, preserving the overlapping content.
    pub fn resize(&mut self, lines: usize, cols: usize) -> Result<(), Error> {
        self.backend.screen_mut().resize(lines, cols)
    }

    /// Renderer read access to the screen.
    pub fn screen(&self) -> &Screen {
        self.backend.screen()
    }

    /// Mutable screen access, for the renderer to drain dirty lines and
    /// clear the refresh flag.
    pub fn screen_mut(&mut self) -> &mut Screen {
        self.backend.screen_mut()
    }

    /// The backend driving the screen.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
