//! The two sides of the game and the pieces they place.

use crate::error::ParseColorError;
use std::fmt::{self, Display, Formatter, Write};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The one-character tag used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }

    /// Inverse of [`Color::symbol`].
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'B' => Some(Color::Black),
            'W' => Some(Color::White),
            _ => None,
        }
    }
}

impl Default for Color {
    /// Black moves first.
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

/// Parse `"black"` or `"white"`. Anything else is rejected.
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// A piece on the board. It keeps its square for the rest of the game and
/// only ever changes by being flipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
}

impl Piece {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Turn this piece over to the other color.
    #[inline]
    pub fn flip(&mut self) {
        self.color = !self.color;
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char(self.color.symbol())
    }
}
