//! Exhaustive checks of win detection over every 3x3 board.

use tictactoe_timeline::{Board, Player, Square, WIN_LINES, detect_winner};

fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut squares = [Square::Empty; 9];
        for square in &mut squares {
            *square = match code % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            code /= 3;
        }
        Board::from_squares(squares)
    })
}

#[test]
fn test_detection_matches_first_complete_line() {
    for board in all_boards() {
        let squares = board.squares();
        let expected = WIN_LINES.iter().find(|line| {
            let [a, b, c] = line.indices();
            squares[a] != Square::Empty && squares[a] == squares[b] && squares[b] == squares[c]
        });

        match (detect_winner(&board), expected) {
            (None, None) => {}
            (Some(result), Some(line)) => {
                assert_eq!(result.line(), *line);
                assert_eq!(
                    Square::Occupied(result.winner()),
                    squares[line.indices()[0]]
                );
            }
            (got, want) => panic!("{:?}: got {:?}, expected line {:?}", board, got, want),
        }
    }
}

#[test]
fn test_win_lines_order() {
    let indices: Vec<[usize; 3]> = WIN_LINES.iter().map(|line| line.indices()).collect();
    assert_eq!(
        indices,
        [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}
