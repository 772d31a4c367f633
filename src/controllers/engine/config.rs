use std::num::NonZeroUsize;

use crate::core::data::tile_size::TileSize;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Construction parameters for a [`FractalRenderEngine`](super::FractalRenderEngine).
///
/// `width` and `height` are fixed for the engine's lifetime. `worker_threads`
/// bounds the render pool; `None` uses the machine's available parallelism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub tile_size: TileSize,
    pub worker_threads: Option<NonZeroUsize>,
    pub mandelbrot: MandelbrotConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_size: TileSize::default(),
            worker_threads: None,
            mandelbrot: MandelbrotConfig::default(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}
