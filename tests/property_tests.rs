//! Property tests for the board's all-or-nothing rules

use blockfall::core::{Board, Piece, ShapeMask};
use blockfall::types::{Direction, Point, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
use proptest::prelude::*;

fn shape_kind() -> impl Strategy<Value = ShapeKind> {
    prop::sample::select(ShapeKind::ALL.to_vec())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(vec![
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ])
}

fn mask() -> impl Strategy<Value = ShapeMask> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(any::<bool>(), rows * cols).prop_map(move |bits| {
            let mut mask = ShapeMask::new(rows, cols);
            for (i, bit) in bits.into_iter().enumerate() {
                mask.set(i / cols, i % cols, bit);
            }
            mask
        })
    })
}

/// Board with random fixed cells and a piece placed where it fits
fn board_with_piece(
    kind: ShapeKind,
    x: i32,
    y: i32,
    filled: &[(i32, i32)],
) -> Option<Board> {
    let mut board = Board::new();
    for &(fx, fy) in filled {
        board.set(fx, fy, true);
    }
    let mut piece = Piece::new(kind, 1);
    piece.anchor = Point::new(x, y);
    if !board.fits(&piece) {
        return None;
    }
    board.set_active(piece);
    board.take_redraw();
    Some(board)
}

proptest! {
    #[test]
    fn four_rotations_restore_any_mask(mask in mask()) {
        let mut rotated = mask.clone();
        for _ in 0..4 {
            rotated.rotate();
        }
        prop_assert_eq!(rotated, mask);
    }

    #[test]
    fn rejected_move_leaves_board_unchanged(
        kind in shape_kind(),
        x in -2i32..BOARD_WIDTH as i32,
        y in -2i32..BOARD_HEIGHT as i32,
        filled in prop::collection::vec((0i32..BOARD_WIDTH as i32, 0i32..BOARD_HEIGHT as i32), 0..60),
        dir in direction(),
    ) {
        let Some(mut board) = board_with_piece(kind, x, y, &filled) else {
            return Ok(());
        };
        let before = board.clone();
        let delta = dir.movement();
        let legal = board.can_move(board.active().unwrap(), delta);

        let moved = board.attempt_move(delta);
        prop_assert_eq!(moved, legal);
        if moved {
            prop_assert_eq!(board.active().unwrap().anchor, before.active().unwrap().anchor + delta);
        } else {
            prop_assert_eq!(board, before);
        }
    }

    #[test]
    fn rotation_is_all_or_nothing(
        kind in shape_kind(),
        x in -2i32..BOARD_WIDTH as i32,
        y in -2i32..BOARD_HEIGHT as i32,
        filled in prop::collection::vec((0i32..BOARD_WIDTH as i32, 0i32..BOARD_HEIGHT as i32), 0..60),
    ) {
        let Some(mut board) = board_with_piece(kind, x, y, &filled) else {
            return Ok(());
        };
        let before = board.clone();

        if board.rotate() {
            let active = board.active().unwrap();
            prop_assert!(board.fits(active));
            prop_assert_eq!(board.cells(), before.cells());
        } else {
            prop_assert_eq!(board, before);
        }
    }

    #[test]
    fn clear_lines_keeps_height_and_surviving_rows(
        filled in prop::collection::vec((0i32..BOARD_WIDTH as i32, 0i32..BOARD_HEIGHT as i32), 0..120),
        full_rows in prop::collection::btree_set(0usize..BOARD_HEIGHT, 0..5),
    ) {
        let mut board = Board::new();
        for &(x, y) in &filled {
            board.set(x, y, true);
        }
        for &y in &full_rows {
            for x in 0..BOARD_WIDTH as i32 {
                board.set(x, y as i32, true);
            }
        }

        let lines = board.filled_line_indices();
        let survivors: Vec<Vec<bool>> = board
            .rows()
            .enumerate()
            .filter(|(y, _)| !lines.contains(y))
            .map(|(_, row)| row.to_vec())
            .collect();

        board.clear_lines(&lines);

        prop_assert_eq!(board.rows().count(), BOARD_HEIGHT);
        let rows: Vec<Vec<bool>> = board.rows().map(|r| r.to_vec()).collect();
        let (top, bottom) = rows.split_at(lines.len());
        prop_assert!(top.iter().all(|r| r.iter().all(|&c| !c)));
        prop_assert_eq!(bottom, survivors.as_slice());
    }
}
