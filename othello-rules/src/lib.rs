//! `othello-rules` is the rules layer of an Othello (Reversi) game.
//!
//! It owns the board and answers the questions a game loop or UI asks of it:
//!
//!  - [`Board`] holds the 8x8 grid, validates moves, and flips captured pieces
//!    when a move is placed.
//!  - [`Location`] and [`Direction`] describe squares and the eight lines a
//!    capture can run along.
//!  - [`Color`] and [`Piece`] are the two sides and the pieces they own.
//!
//! Turn order, scoring, and move selection are left to the caller.

pub mod test_utils;

mod board;
mod color;
mod error;
mod location;
mod utils;

pub use board::*;
pub use color::*;
pub use error::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
