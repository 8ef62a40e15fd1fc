//! The Othello board: occupancy queries, move validation, and flipping.
//!
//! The grid is a plain 8x8 array of optional pieces, indexed `[row][col]`
//! with row 0 at the top. Every capture search walks outward from a single
//! square, one [`Direction`] at a time.

use crate::color::{Color, Piece};
use crate::error::{BoardError, ParseBoardError};
use crate::location::{Direction, Location, MoveList};
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use log::{debug, trace};
use std::fmt;

/// Character used for an empty cell when rendering or parsing a board.
pub const EMPTY_SYMBOL: char = '.';

type Grid = [[Option<Piece>; EDGE_LENGTH]; EDGE_LENGTH];

/// An 8x8 Othello board. Each cell is empty or holds exactly one [`Piece`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: black on D5 and E4, white on D4 and E5.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.grid[3][4] = Some(Piece::new(Color::Black));
        board.grid[4][3] = Some(Piece::new(Color::Black));
        board.grid[3][3] = Some(Piece::new(Color::White));
        board.grid[4][4] = Some(Piece::new(Color::White));
        board
    }

    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            grid: [[None; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    fn cell(&self, loc: Location) -> Result<&Option<Piece>, BoardError> {
        let (row, col) = loc
            .to_indices()
            .ok_or(BoardError::OutOfBounds { location: loc })?;
        Ok(&self.grid[row][col])
    }

    fn cell_mut(&mut self, loc: Location) -> Result<&mut Option<Piece>, BoardError> {
        let (row, col) = loc
            .to_indices()
            .ok_or(BoardError::OutOfBounds { location: loc })?;
        Ok(&mut self.grid[row][col])
    }

    /// The piece at `loc`, if any.
    pub fn get_piece(&self, loc: Location) -> Result<Option<&Piece>, BoardError> {
        Ok(self.cell(loc)?.as_ref())
    }

    /// Whether `loc` is on the board. Never fails.
    #[inline]
    pub fn is_valid_pos(&self, loc: Location) -> bool {
        loc.is_on_board()
    }

    pub fn is_occupied(&self, loc: Location) -> Result<bool, BoardError> {
        Ok(self.get_piece(loc)?.is_some())
    }

    /// Whether `loc` holds a piece of `color`. An empty cell is simply `false`.
    pub fn is_mine(&self, loc: Location, color: Color) -> Result<bool, BoardError> {
        Ok(self
            .get_piece(loc)?
            .map_or(false, |piece| piece.color() == color))
    }

    /// Put a piece of `color` at `loc`, or clear it with `None`, without
    /// checking any rules and without flipping anything.
    /// Used to build positions other than the starting one.
    pub fn set_piece(&mut self, loc: Location, color: Option<Color>) -> Result<(), BoardError> {
        *self.cell_mut(loc)? = color.map(Piece::new);
        Ok(())
    }

    /// Count the pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        self.pieces()
            .filter(|piece| piece.color() == color)
            .count()
    }

    fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.iter().flatten().filter_map(Option::as_ref)
    }

    fn has_empty_cell(&self) -> bool {
        self.grid.iter().flatten().any(Option::is_none)
    }

    /// Whether `color` has at least one legal move.
    pub fn has_move(&self, color: Color) -> bool {
        self.has_empty_cell() && Location::all().any(|loc| self.is_legal(loc, color))
    }

    /// Whether every cell holds a piece.
    pub fn is_full(&self) -> bool {
        !self.has_empty_cell()
    }

    /// Whether neither color can move.
    pub fn is_over(&self) -> bool {
        !self.has_move(Color::White) && !self.has_move(Color::Black)
    }

    /// Whether `color` may play at `loc`: the cell must be empty and the move
    /// must capture at least one opposing piece.
    pub fn valid_move(&self, loc: Location, color: Color) -> Result<bool, BoardError> {
        Ok(!self.captures(loc, color)?.is_empty())
    }

    /// Every legal move for `color`, in row-major order.
    pub fn valid_moves(&self, color: Color) -> MoveList {
        Location::all()
            .filter(|&loc| self.is_legal(loc, color))
            .collect()
    }

    /// The opposing pieces that playing `color` at `loc` would flip, grouped
    /// by direction. Empty if `loc` is occupied or the move captures nothing.
    pub fn captures(&self, loc: Location, color: Color) -> Result<Vec<Location>, BoardError> {
        if self.cell(loc)?.is_some() {
            return Ok(Vec::new());
        }

        Ok(Direction::ALL
            .iter()
            .flat_map(|&dir| self.captures_in_direction(loc, color, dir))
            .collect())
    }

    /// `loc` must be on the board.
    fn is_legal(&self, loc: Location, color: Color) -> bool {
        matches!(self.valid_move(loc, color), Ok(true))
    }

    /// Walk from `origin` along `dir`, collecting opposing pieces until one of
    /// `color`'s own pieces closes the line. Running off the board or into an
    /// empty cell captures nothing.
    fn captures_in_direction(&self, origin: Location, color: Color, dir: Direction) -> Vec<Location> {
        let mut captured = Vec::new();
        let mut loc = origin;

        for _ in 1..EDGE_LENGTH {
            loc = loc.offset(dir);
            let (row, col) = match loc.to_indices() {
                Some(indices) => indices,
                None => break,
            };

            match &self.grid[row][col] {
                None => break,
                Some(piece) if piece.color() == color => {
                    trace!("{} from {}: {} captured", color, origin, captured.len());
                    return captured;
                }
                Some(_) => captured.push(loc),
            }
        }

        Vec::new()
    }

    /// Play `color` at `loc` and flip every captured piece. Returns the
    /// locations that were flipped.
    ///
    /// Fails with [`BoardError::InvalidMove`] if the move is not legal, in
    /// which case the board is left untouched.
    pub fn place_piece(&mut self, loc: Location, color: Color) -> Result<Vec<Location>, BoardError> {
        let captured = self.captures(loc, color)?;
        if captured.is_empty() {
            debug!("rejected move: {} at {}", color, loc);
            return Err(BoardError::InvalidMove {
                location: loc,
                color,
            });
        }

        *self.cell_mut(loc)? = Some(Piece::new(color));
        for &target in &captured {
            if let Some(piece) = self.cell_mut(target)? {
                piece.flip();
            }
        }

        debug!("{} played {}, flipping {}", color, loc, captured.len());
        Ok(captured)
    }

    /// Print the board to stdout.
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.grid.iter().flatten().map(|cell| match cell {
                None => EMPTY_SYMBOL,
                Some(piece) => piece.color().symbol(),
            }),
            f,
        )
    }
}

/// Parse a board from 64 cells of `B`, `W`, or `.`, in row-major order.
/// Whitespace is ignored, so [`Board`]'s `Display` output parses back.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                EMPTY_SYMBOL => Ok(None),
                _ => Color::from_symbol(c)
                    .map(Some)
                    .ok_or(ParseBoardError::UnknownCell(c)),
            })
            .collect::<Result<Vec<Option<Color>>, ParseBoardError>>()?;

        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongCellCount(cells.len()));
        }

        let mut board = Self::empty();
        for (index, color) in cells.into_iter().enumerate() {
            board.grid[index / EDGE_LENGTH][index % EDGE_LENGTH] = color.map(Piece::new);
        }
        Ok(board)
    }
}
