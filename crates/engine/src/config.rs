//! Engine configuration

use blockfall_types::{
    ColorId, BASE_FALL_DELAY_MS, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_PALETTE, FALL_DELAY_STEP_MS,
};

/// Smallest accepted board side; a piece mask is up to 4 cells wide
pub const MIN_BOARD_SIDE: usize = 4;

/// Board dimensions, piece source and fall timing for one [`crate::Game`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    /// Seed for the piece generator
    pub seed: u32,
    /// Colors handed out to new pieces; empty means the default palette
    pub palette: Vec<ColorId>,
    /// Fall delay at level 0
    pub base_fall_delay_ms: u64,
    /// Reduction of the fall delay per level
    pub fall_delay_step_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: 1,
            palette: DEFAULT_PALETTE.to_vec(),
            base_fall_delay_ms: BASE_FALL_DELAY_MS,
            fall_delay_step_ms: FALL_DELAY_STEP_MS,
        }
    }
}

impl EngineConfig {
    /// Read overrides from `BLOCKFALL_SEED`, `BLOCKFALL_WIDTH` and
    /// `BLOCKFALL_HEIGHT`; anything missing or unparsable keeps its default.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let seed = env::var("BLOCKFALL_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let width = env::var("BLOCKFALL_WIDTH")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&w: &usize| w >= MIN_BOARD_SIDE)
            .unwrap_or(defaults.width);

        let height = env::var("BLOCKFALL_HEIGHT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&h: &usize| h >= MIN_BOARD_SIDE)
            .unwrap_or(defaults.height);

        Self {
            width,
            height,
            seed,
            ..defaults
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sides below [`MIN_BOARD_SIDE`] are raised to it
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(MIN_BOARD_SIDE);
        self.height = height.max(MIN_BOARD_SIDE);
        self
    }

    pub fn with_palette(mut self, palette: &[ColorId]) -> Self {
        self.palette = palette.to_vec();
        self
    }
}
