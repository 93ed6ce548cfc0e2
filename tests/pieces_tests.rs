//! Piece tests - shapes, rotation, cloning and the piece factory

use blockfall::core::{Piece, PieceFactory, ShapeMask, SHAPE_TABLE};
use blockfall::types::{Point, ShapeKind, DEFAULT_PALETTE};

fn cells(piece: &Piece) -> Vec<Point> {
    piece.occupied_cells().collect()
}

// ============== Shape Tests ==============

#[test]
fn test_every_shape_has_four_cells() {
    for kind in ShapeKind::ALL {
        assert_eq!(Piece::new(kind, 0).mask.count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_i_spawns_vertical() {
    let piece = Piece::new(ShapeKind::I, 0);
    assert_eq!(
        cells(&piece),
        vec![
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(1, 3)
        ]
    );
}

#[test]
fn test_i_rotates_to_horizontal() {
    let mut piece = Piece::new(ShapeKind::I, 0);
    piece.rotate();
    assert_eq!(
        cells(&piece),
        vec![
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(3, 1)
        ]
    );
}

#[test]
fn test_l_rotation_clockwise() {
    let mut piece = Piece::new(ShapeKind::L, 0);
    piece.rotate();
    assert_eq!(piece.mask, ShapeMask::from_rows(&["111", "100", "000"]));
}

#[test]
fn test_o_rotation_is_identity() {
    let mut piece = Piece::new(ShapeKind::O, 0);
    let before = piece.mask.clone();
    piece.rotate();
    assert_eq!(piece.mask, before);
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in ShapeKind::ALL {
        let mut piece = Piece::new(kind, 0);
        let before = piece.mask.clone();
        for _ in 0..4 {
            piece.rotate();
        }
        assert_eq!(piece.mask, before, "{:?}", kind);
    }
}

#[test]
fn test_rectangular_mask_swaps_dimensions() {
    let mut mask = ShapeMask::from_rows(&["110", "011"]);
    mask.rotate();
    assert_eq!((mask.width(), mask.height()), (2, 3));
    assert_eq!(mask, ShapeMask::from_rows(&["01", "11", "10"]));
}

// ============== Clone Tests ==============

#[test]
fn test_clone_drops_ghost_and_copies_mask() {
    let mut piece = Piece::new(ShapeKind::T, 3);
    piece.anchor = Point::new(2, 4);
    piece.ghost = Some(Box::new(Piece::new(ShapeKind::T, 3)));

    let mut copy = piece.clone();
    assert!(copy.ghost().is_none());
    assert_eq!(copy.anchor, piece.anchor);
    assert_eq!(copy.color, 3);

    copy.rotate();
    assert_ne!(copy.mask, piece.mask);
}

// ============== Factory Tests ==============

#[test]
fn test_shape_table_weights_i_double() {
    let i_slots = SHAPE_TABLE.iter().filter(|&&k| k == ShapeKind::I).count();
    assert_eq!(i_slots, 2);
    for kind in ShapeKind::ALL.iter().filter(|&&k| k != ShapeKind::I) {
        assert_eq!(SHAPE_TABLE.iter().filter(|&k| k == kind).count(), 1);
    }
}

#[test]
fn test_factory_pieces_start_at_origin_with_palette_color() {
    let mut factory = PieceFactory::new(99, &DEFAULT_PALETTE);
    for _ in 0..50 {
        let piece = factory.next_piece();
        assert_eq!(piece.anchor, Point::default());
        assert!(DEFAULT_PALETTE.contains(&piece.color));
        assert!(piece.ghost().is_none());
    }
}

#[test]
fn test_factory_same_seed_same_sequence() {
    let mut a = PieceFactory::new(5, &DEFAULT_PALETTE);
    let mut b = PieceFactory::new(5, &DEFAULT_PALETTE);
    let seq_a: Vec<_> = (0..100).map(|_| a.next_piece().kind).collect();
    let seq_b: Vec<_> = (0..100).map(|_| b.next_piece().kind).collect();
    assert_eq!(seq_a, seq_b);
}
