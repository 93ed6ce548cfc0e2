//! Board tests - collision, placement, line clears and wall kicks

use blockfall::core::{Board, Piece};
use blockfall::types::{Direction, Point, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

fn board_with_active(kind: ShapeKind, anchor: Point) -> Board {
    let mut board = Board::new();
    let mut piece = Piece::new(kind, 7);
    piece.anchor = anchor;
    board.set_active(piece);
    board.take_redraw();
    board
}

fn fill_row(board: &mut Board, y: i32) {
    for x in 0..BOARD_WIDTH as i32 {
        board.set(x, y, true);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert!(board.is_valid(Point::new(x, y)), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(false));
        }
    }
    assert_eq!(board.top_occupied_row(), BOARD_HEIGHT);
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);

    assert!(!board.set(-1, 0, true));
    assert!(!board.set(0, BOARD_HEIGHT as i32, true));
    assert!(!board.is_valid(Point::new(-1, 5)));
}

#[test]
fn test_filled_cell_is_illegal() {
    let mut board = Board::new();
    board.set(5, 10, true);
    assert!(!board.is_valid(Point::new(5, 10)));
    assert!(board.is_valid(Point::new(4, 10)));
}

#[test]
fn test_move_into_filled_cell_is_rejected() {
    let mut board = board_with_active(ShapeKind::O, Point::new(4, 5));
    board.set(6, 6, true);
    let before = board.clone();

    assert!(!board.attempt_move(Direction::Right.movement()));
    assert_eq!(board, before);

    assert!(board.attempt_move(Direction::Left.movement()));
    assert_eq!(board.active().unwrap().anchor, Point::new(3, 5));
}

#[test]
fn test_move_without_active_piece_fails() {
    let mut board = Board::new();
    assert!(!board.attempt_move(Direction::Down.movement()));
    assert!(!board.rotate());
}

#[test]
fn test_fix_fills_exactly_the_piece_cells() {
    let mut board = board_with_active(ShapeKind::T, Point::new(2, 10));
    board.set(0, 0, true);
    let expected: Vec<Point> = board.active().unwrap().occupied_cells().collect();

    board.fix();

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            let p = Point::new(x, y);
            let filled = expected.contains(&p) || p == Point::new(0, 0);
            assert_eq!(board.get(x, y), Some(filled), "cell {:?}", p);
        }
    }
}

#[test]
fn test_filled_line_indices_ascending() {
    let mut board = Board::new();
    fill_row(&mut board, 7);
    fill_row(&mut board, 3);
    board.set(0, 10, true);

    assert_eq!(board.filled_line_indices(), vec![3, 7]);
}

#[test]
fn test_clear_lines_compacts_and_keeps_order() {
    let mut board = Board::new();
    fill_row(&mut board, 3);
    fill_row(&mut board, 7);
    // Markers in rows that survive.
    board.set(1, 2, true);
    board.set(2, 5, true);
    board.set(3, 19, true);

    board.clear_lines(&[3, 7]);

    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.row(0).unwrap().iter().all(|&c| !c));
    assert!(board.row(1).unwrap().iter().all(|&c| !c));
    // Row 2 moved down by two, row 5 by one (only row 7 was below it).
    assert_eq!(board.get(1, 4), Some(true));
    assert_eq!(board.get(2, 6), Some(true));
    assert_eq!(board.get(3, 19), Some(true));
    assert!(board.filled_line_indices().is_empty());
}

#[test]
fn test_clear_all_rows_empties_board() {
    let mut board = Board::new();
    for y in 0..BOARD_HEIGHT as i32 {
        fill_row(&mut board, y);
    }
    let lines = board.filled_line_indices();
    assert_eq!(lines.len(), BOARD_HEIGHT);

    board.clear_lines(&lines);
    assert!(board.cells().iter().all(|&c| !c));
}

#[test]
fn test_clear_no_lines_is_noop() {
    let mut board = Board::new();
    board.set(4, 4, true);
    let before = board.cells().to_vec();
    board.clear_lines(&[]);
    assert_eq!(board.cells(), before.as_slice());
}

#[test]
fn test_vertical_i_drops_to_floor() {
    let mut board = Board::new();
    let mut piece = Piece::new(ShapeKind::I, 1);
    piece.anchor = board.spawn_position(&piece);
    board.set_active(piece);

    while board.attempt_move(Direction::Down.movement()) {}
    let bottom = board
        .active()
        .unwrap()
        .occupied_cells()
        .map(|p| p.y)
        .max()
        .unwrap();
    assert_eq!(bottom, 19);

    board.fix();
    assert_eq!(board.top_occupied_row(), 16);
}

#[test]
fn test_ghost_tracks_landing_spot() {
    let mut board = board_with_active(ShapeKind::O, Point::new(4, 0));
    board.set(4, 12, true);

    let ghost = board.active().unwrap().ghost().unwrap().anchor;
    assert_eq!(ghost, Point::new(4, 10));

    // Moving away from the obstacle drops the ghost to the floor.
    assert!(board.attempt_move(Direction::Right.movement()));
    assert_eq!(board.active().unwrap().ghost().unwrap().anchor, Point::new(5, 18));
}

#[test]
fn test_rotation_against_left_wall_stays_inside() {
    let mut board = board_with_active(ShapeKind::I, Point::new(-1, 5));
    assert!(board.rotate());

    let active = board.active().unwrap();
    assert!(active.occupied_cells().all(|p| p.x >= 0));
    assert_eq!(active.anchor, Point::new(0, 5));
}

#[test]
fn test_rejected_rotation_leaves_board_identical() {
    let mut board = board_with_active(ShapeKind::I, Point::new(3, 0));
    // Block every row the horizontal bar could use near the top.
    for y in 0..4 {
        for x in 0..BOARD_WIDTH as i32 {
            if x != 4 {
                board.set(x, y, true);
            }
        }
    }
    let before = board.clone();

    assert!(!board.rotate());
    assert_eq!(board, before);
}

#[test]
fn test_spawn_position_centers_mask() {
    let board = Board::new();
    assert_eq!(board.spawn_position(&Piece::new(ShapeKind::I, 0)), Point::new(3, 0));
    assert_eq!(board.spawn_position(&Piece::new(ShapeKind::T, 0)), Point::new(3, 0));
    assert_eq!(board.spawn_position(&Piece::new(ShapeKind::O, 0)), Point::new(4, 0));
}
