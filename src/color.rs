//! The 8-color ANSI palette.
//!
//! The VT102 rendition model here is a 3-bit foreground and 3-bit
//! background index; resolving indices to RGB values is the renderer's
//! business, not this crate's.

use std::fmt;

/// One of the eight ANSI colors, in the standard ECMA-48 ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnsiColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl AnsiColor {
    /// Number of palette entries.
    pub const COUNT: usize = 8;

    /// Map a palette index to a color. Only the low 3 bits are used, so
    /// every input maps to a valid color.
    pub fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Self::Black,
            1 => Self::Red,
            2 => Self::Green,
            3 => Self::Yellow,
            4 => Self::Blue,
            5 => Self::Magenta,
            6 => Self::Cyan,
            _ => Self::White,
        }
    }

    /// The palette index of this color (0–7).
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        };
        f.write_str(name)
    }
}
