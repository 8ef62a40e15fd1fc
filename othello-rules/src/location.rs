//! Code for working with [`Location`]s on the Othello board.

use crate::error::ParseLocationError;
use crate::EDGE_LENGTH;
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

/// A square given as row and column, row 0 at the top.
///
/// A location may lie off the board: callers can ask about any coordinate pair,
/// and the flip search steps past the edge before it stops. Board methods reject
/// off-board locations with [`BoardError::OutOfBounds`](crate::BoardError::OutOfBounds).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, From, Into)]
pub struct Location {
    pub row: i8,
    pub col: i8,
}

/// One of the eight lines leading away from a square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    /// Every direction, clockwise from east.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// The (row, column) step for one move in this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
        }
    }
}

impl Location {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates lie within the board.
    #[inline]
    pub fn is_on_board(self) -> bool {
        let edge = EDGE_LENGTH as i8;
        (0..edge).contains(&self.row) && (0..edge).contains(&self.col)
    }

    /// The location one step away in `dir`. The result may be off the board.
    #[inline]
    pub fn offset(self, dir: Direction) -> Self {
        let (d_row, d_col) = dir.delta();
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Grid indices for an on-board location.
    pub(crate) fn to_indices(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Iterate over every square of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        let edge = EDGE_LENGTH as i8;
        (0..edge).flat_map(move |row| (0..edge).map(move |col| Location::new(row, col)))
    }
}

/// Convert this [`Location`] into string notation ("D3").
/// Off-board locations are shown as raw coordinates.
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }

        let row_str = "12345678".chars().nth(self.row as usize).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(self.col as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// Build a [`Location`] from 1-indexed string notation ("D3").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)? as i8;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as i8;

        if !(1..=8).contains(&row) || chars.next() != None {
            return Err(ParseLocationError);
        }

        Ok(Self::new(row - 1, col))
    }
}

/// An ordered list of locations, such as the legal moves for one color.
#[derive(Clone, Debug, Default, Eq, PartialEq, From, Into)]
pub struct MoveList(Vec<Location>);

impl MoveList {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.contains(&loc)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.0
    }
}

impl IntoIterator for MoveList {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::iter::FromIterator<Location> for MoveList {
    fn from_iter<T: IntoIterator<Item = Location>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_is_on_board() {
        assert!(Location::new(0, 0).is_on_board());
        assert!(Location::new(7, 7).is_on_board());
        assert!(!Location::new(-1, 0).is_on_board());
        assert!(!Location::new(0, 8).is_on_board());
        assert!(!Location::new(8, 8).is_on_board());
    }

    #[test]
    fn location_offset() {
        let center = Location::new(3, 3);
        assert_eq!(center.offset(Direction::East), Location::new(3, 4));
        assert_eq!(center.offset(Direction::South), Location::new(4, 3));
        assert_eq!(center.offset(Direction::NorthWest), Location::new(2, 2));
        assert_eq!(center.offset(Direction::SouthWest), Location::new(4, 2));
        assert_eq!(
            Location::new(0, 7).offset(Direction::NorthEast),
            Location::new(-1, 8)
        );
    }

    #[test]
    fn offsets_do_not_mutate() {
        let start = Location::new(2, 5);
        let _ = start.offset(Direction::North);
        assert_eq!(start, Location::new(2, 5));
    }

    #[test]
    fn directions_are_distinct_unit_steps() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            let (d_row, d_col) = a.delta();
            assert!(d_row.abs() <= 1 && d_col.abs() <= 1);
            assert_ne!((d_row, d_col), (0, 0));
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.delta(), b.delta());
            }
        }
    }

    #[test]
    fn location_all_is_row_major() {
        let all: Vec<Location> = Location::all().collect();
        assert_eq!(all.len(), crate::NUM_SPACES);
        assert_eq!(all[0], Location::new(0, 0));
        assert_eq!(all[1], Location::new(0, 1));
        assert_eq!(all[8], Location::new(1, 0));
        assert_eq!(all[63], Location::new(7, 7));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location::new(0, 0)));
        assert_eq!(Location::from_str("h8"), Ok(Location::new(7, 7)));
        assert_eq!(Location::from_str("D3"), Ok(Location::new(2, 3)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location::new(0, 0).to_string(), "A1");
        assert_eq!(Location::new(7, 7).to_string(), "H8");
        assert_eq!(Location::new(4, 5).to_string(), "F5");
        assert_eq!(Location::new(-1, 3).to_string(), "(-1, 3)");
    }

    #[test]
    fn move_list_display() {
        let moves: MoveList = vec![Location::new(2, 3), Location::new(3, 2)].into();
        assert_eq!(moves.to_string(), "[D3, C4]");
        assert_eq!(MoveList::default().to_string(), "[]");
    }
}
