//! Errors raised by board operations and by parsing.

use crate::{Color, Location};
use derive_more::{Display, Error};

/// Failure of a [`Board`](crate::Board) query or move.
///
/// A move that is merely illegal is reported as `false` or an empty list by
/// the query methods; only [`Board::place_piece`](crate::Board::place_piece)
/// turns it into [`BoardError::InvalidMove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display(fmt = "location {} is off the board", location)]
    OutOfBounds { location: Location },
    #[display(fmt = "invalid move: {} cannot play at {}", color, location)]
    InvalidMove { location: Location, color: Color },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid color string")]
pub struct ParseColorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "board string has {} cells, expected 64", _0)]
    WrongCellCount(#[error(not(source))] usize),
    #[display(fmt = "unknown board cell {:?}", _0)]
    UnknownCell(#[error(not(source))] char),
}
