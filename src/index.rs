//! Type-safe index newtypes for screen coordinates.
//!
//! `Line` and `Column` prevent mixing up row/column values at compile
//! time. Both are 0-based; line 0 is the top of the screen.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Generate arithmetic and conversion impls for a newtype index wrapper.
macro_rules! index_ops {
    ($ty:ident) => {
        impl From<usize> for $ty {
            fn from(val: usize) -> Self {
                Self(val)
            }
        }

        impl From<$ty> for usize {
            fn from(val: $ty) -> Self {
                val.0
            }
        }

        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

/// Line index (0-based, top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Line(pub usize);

index_ops!(Line);

/// Column index (0-based, left to right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Column(pub usize);

index_ops!(Column);

#[cfg(test)]
mod tests {
    use super::{Column, Line};

    #[test]
    fn line_arithmetic() {
        assert_eq!(Line(5) + Line(3), Line(8));
        assert_eq!(Line(5) - Line(3), Line(2));
    }

    #[test]
    fn line_assign_arithmetic() {
        let mut l = Line(5);
        l += Line(3);
        assert_eq!(l, Line(8));
        l -= Line(2);
        assert_eq!(l, Line(6));
    }

    #[test]
    fn column_conversions() {
        assert_eq!(Column::from(42_usize), Column(42));
        assert_eq!(usize::from(Column(42)), 42);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Line(7)), "7");
        assert_eq!(format!("{}", Column(0)), "0");
    }
}
