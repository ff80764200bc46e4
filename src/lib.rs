//! DEC VT102 terminal emulation core.
//!
//! This crate provides the screen-side half of a terminal emulator: a
//! byte-stream escape-sequence parser and the screen model it drives.
//! Feeding host output through [`Term::feed`] keeps an authoritative
//! in-memory picture of the terminal (cell grid, cursor, scrolling
//! region, per-line dirty flags) that any renderer can read out. It
//! contains no windowing, PTY, or input-translation code.

#![deny(unsafe_code)]

pub mod backend;
pub mod cell;
pub mod color;
pub mod error;
pub mod index;
pub mod parser;
pub mod screen;
pub mod term;

pub use backend::{TermBackend, VtBackend};
pub use cell::Cell;
pub use color::AnsiColor;
pub use error::Error;
pub use index::{Column, Line};
pub use parser::Parser;
pub use screen::{Cursor, DirtyTracker, EraseMode, Row, Screen};
pub use term::Term;
