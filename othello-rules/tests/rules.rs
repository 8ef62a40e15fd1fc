//! Whole-game checks of the rules engine through its public interface.

use othello_rules::{Board, BoardError, Color, Location, EDGE_LENGTH, NUM_SPACES};

/// Play a game where each side takes its first legal move, checking the board
/// after every placement. Returns the final board.
fn play_first_moves() -> Board {
    let mut board = Board::new();
    let mut color = Color::Black;

    while !board.is_over() {
        let moves = board.valid_moves(color);
        assert_eq!(moves.is_empty(), !board.has_move(color));

        let mv = match moves.iter().next() {
            Some(&mv) => mv,
            None => {
                color = !color;
                continue;
            }
        };

        let before = board.clone();
        let pieces_before = board.count(Color::Black) + board.count(Color::White);
        let flipped = board.place_piece(mv, color).unwrap();

        assert!(!flipped.is_empty());
        assert_eq!(board.is_mine(mv, color), Ok(true));
        for &loc in &flipped {
            assert_eq!(before.is_mine(loc, !color), Ok(true));
            assert_eq!(board.is_mine(loc, color), Ok(true));
        }
        assert_eq!(
            board.count(Color::Black) + board.count(Color::White),
            pieces_before + 1
        );
        assert_eq!(
            board.count(color),
            before.count(color) + flipped.len() + 1
        );

        color = !color;
    }

    board
}

#[test]
fn game_runs_to_completion() {
    let board = play_first_moves();
    assert!(board.is_over());
    assert!(!board.has_move(Color::Black));
    assert!(!board.has_move(Color::White));
    assert!(board.count(Color::Black) + board.count(Color::White) <= NUM_SPACES);
    if board.is_full() {
        assert_eq!(
            board.count(Color::Black) + board.count(Color::White),
            NUM_SPACES
        );
    }
}

#[test]
fn every_listed_move_is_valid_and_every_valid_move_is_listed() {
    let mut board = Board::new();
    board.place_piece(Location::new(2, 3), Color::Black).unwrap();
    board.place_piece(Location::new(2, 2), Color::White).unwrap();

    for &color in &[Color::Black, Color::White] {
        let moves = board.valid_moves(color);
        for row in 0..EDGE_LENGTH as i8 {
            for col in 0..EDGE_LENGTH as i8 {
                let loc = Location::new(row, col);
                assert_eq!(board.valid_move(loc, color), Ok(moves.contains(loc)));
            }
        }
    }
}

#[test]
fn parsed_locations_drive_the_board() {
    let mut board = Board::new();
    for (notation, color) in &[("D3", Color::Black), ("C3", Color::White), ("C4", Color::Black)] {
        let loc: Location = notation.parse().unwrap();
        board.place_piece(loc, *color).unwrap();
    }

    let expected: Board = "
        . . . . . . . .
        . . . . . . . .
        . . W B . . . .
        . . B B B . . .
        . . . B W . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
    "
    .parse()
    .unwrap();
    assert_eq!(board, expected);
}

#[test]
fn errors_carry_the_rejected_move() {
    let mut board = Board::new();
    let err = board
        .place_piece("A1".parse().unwrap(), "white".parse().unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        BoardError::InvalidMove {
            location: Location::new(0, 0),
            color: Color::White,
        }
    );
    assert_eq!(err.to_string(), "invalid move: white cannot play at A1");
    assert!("purple".parse::<Color>().is_err());
}
