//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format 64 characters into rows of the board, one character per cell.
/// `cell_iter` must yield exactly 64 items.
pub fn format_grid<T: Iterator<Item = char>>(mut cell_iter: T, f: &mut Formatter) -> fmt::Result {
    for row in 0..EDGE_LENGTH {
        if row > 0 {
            writeln!(f)?;
        }
        for col in 0..EDGE_LENGTH {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cell_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match cell_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
