//! RNG module - seedable piece generation
//!
//! Pieces are drawn from a weighted table in which `I` appears twice, so it
//! comes up twice as often as any other shape. Colors are drawn independently
//! from an injected palette.
//!
//! Uses a simple LCG so that a given seed always produces the same game.

use crate::piece::Piece;
use crate::types::{ColorId, ShapeKind, DEFAULT_PALETTE};

/// Selection table for random pieces (`I` is listed twice on purpose)
pub const SHAPE_TABLE: [ShapeKind; 8] = [
    ShapeKind::I,
    ShapeKind::I,
    ShapeKind::L,
    ShapeKind::LMirrored,
    ShapeKind::S,
    ShapeKind::SMirrored,
    ShapeKind::O,
    ShapeKind::T,
];

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }
}

/// Produces random pieces with random palette colors
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
    palette: Vec<ColorId>,
}

impl PieceFactory {
    /// Create a factory with the given seed and palette
    ///
    /// An empty palette falls back to [`DEFAULT_PALETTE`].
    pub fn new(seed: u32, palette: &[ColorId]) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            palette.to_vec()
        };
        Self {
            rng: SimpleRng::new(seed),
            palette,
        }
    }

    /// Draw the next shape from [`SHAPE_TABLE`]
    pub fn next_kind(&mut self) -> ShapeKind {
        SHAPE_TABLE[self.rng.next_range(SHAPE_TABLE.len() as u32) as usize]
    }

    /// Draw the next color from the palette
    pub fn next_color(&mut self) -> ColorId {
        self.palette[self.rng.next_range(self.palette.len() as u32) as usize]
    }

    /// Draw a new piece anchored at `(0, 0)`
    pub fn next_piece(&mut self) -> Piece {
        let kind = self.next_kind();
        let color = self.next_color();
        Piece::new(kind, color)
    }

    pub fn palette(&self) -> &[ColorId] {
        &self.palette
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new(1, &DEFAULT_PALETTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(8) < 8);
        }
    }

    #[test]
    fn test_factory_sequence_is_reproducible() {
        let mut a = PieceFactory::new(42, &DEFAULT_PALETTE);
        let mut b = PieceFactory::new(42, &DEFAULT_PALETTE);
        for _ in 0..50 {
            let pa = a.next_piece();
            let pb = b.next_piece();
            assert_eq!(pa.kind, pb.kind);
            assert_eq!(pa.color, pb.color);
        }
    }

    #[test]
    fn test_factory_draws_all_shapes_with_i_weighted_double() {
        let mut factory = PieceFactory::new(2024, &DEFAULT_PALETTE);
        let mut counts = [0u32; 7];
        let draws = 16_000;
        for _ in 0..draws {
            let kind = factory.next_kind();
            let idx = ShapeKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[idx] += 1;
        }

        assert!(counts.iter().all(|&c| c > 0), "every shape should appear");

        // I has two of eight slots; everything else one.
        let i_share = counts[0] as f64 / draws as f64;
        let o_share = counts[5] as f64 / draws as f64;
        assert!((i_share - 0.25).abs() < 0.04, "I share was {}", i_share);
        assert!((o_share - 0.125).abs() < 0.04, "O share was {}", o_share);
    }

    #[test]
    fn test_factory_colors_come_from_palette() {
        let palette = [0xFF00_0001, 0xFF00_0002];
        let mut factory = PieceFactory::new(9, &palette);
        for _ in 0..100 {
            assert!(palette.contains(&factory.next_color()));
        }
    }

    #[test]
    fn test_empty_palette_falls_back_to_default() {
        let factory = PieceFactory::new(1, &[]);
        assert_eq!(factory.palette(), &DEFAULT_PALETTE);
    }
}
