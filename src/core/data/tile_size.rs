use std::num::NonZeroU32;

pub const DEFAULT_TILE_EDGE: u32 = 50;

/// Dimensions of the rectangular work units an image is split into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TileSize {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
}

impl TileSize {
    #[must_use]
    pub const fn new(width: NonZeroU32, height: NonZeroU32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn square(edge: NonZeroU32) -> Self {
        Self {
            width: edge,
            height: edge,
        }
    }
}

impl Default for TileSize {
    fn default() -> Self {
        match NonZeroU32::new(DEFAULT_TILE_EDGE) {
            Some(edge) => Self::square(edge),
            None => unreachable!("default tile edge is non-zero"),
        }
    }
}
