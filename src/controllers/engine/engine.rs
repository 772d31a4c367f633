use std::time::{Duration, Instant};

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::controllers::engine::config::EngineConfig;
use crate::controllers::engine::errors::EngineError;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer_tiled::generate_pixel_buffer_tiled;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::tile_size::TileSize;
use crate::core::data::viewport::{Position, Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::teal_red::MandelbrotTealRed;
use crate::core::util::calculate_tiles_in_pixel_rect::calculate_tile_grid;
use crate::core::util::calculate_worker_threads::calculate_worker_threads;

/// Renders the Mandelbrot set into a fixed-size RGBA buffer on demand.
///
/// Setters only change the viewport; nothing is recomputed until
/// [`render`](Self::render) is called. A render recomputes the whole image
/// from a snapshot of the viewport, tiles it across a bounded worker pool and
/// blocks until every tile is written. Results are swapped in only after the
/// pass completes, so [`buffer`](Self::buffer) and
/// [`last_render_duration`](Self::last_render_duration) always describe the
/// last completed render.
///
/// Precision is that of `f64`: at very deep zoom adjacent pixels collapse onto
/// the same complex value and the image degrades into blocks. This is not
/// reported as an error.
#[derive(Debug)]
pub struct FractalRenderEngine {
    front_buffer: PixelBuffer,
    back_buffer: PixelBuffer,
    window: ComplexRect,
    viewport: Viewport,
    tile_size: TileSize,
    pool: ThreadPool,
    last_render_duration: Duration,
}

impl FractalRenderEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let pixel_rect = PixelRect::from_size(config.width, config.height)?;
        let front_buffer = PixelBuffer::try_new(pixel_rect)?;
        let back_buffer = PixelBuffer::try_new(pixel_rect)?;

        let (columns, rows) = calculate_tile_grid(pixel_rect, config.tile_size);
        let tile_count = (columns as usize).saturating_mul(rows as usize);
        let num_threads = calculate_worker_threads(config.worker_threads, tile_count);

        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|index| format!("fractal-render-{index}"))
            .build()?;

        debug!(
            width = config.width,
            height = config.height,
            tile_width = config.tile_size.width.get(),
            tile_height = config.tile_size.height.get(),
            num_threads,
            "render engine created"
        );

        Ok(Self {
            front_buffer,
            back_buffer,
            window: config.mandelbrot.window,
            viewport: config.mandelbrot.viewport,
            tile_size: config.tile_size,
            pool,
            last_render_duration: Duration::ZERO,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.front_buffer.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.front_buffer.height()
    }

    #[must_use]
    pub fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    #[must_use]
    pub fn worker_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.viewport.position()
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.viewport.resolution()
    }

    pub fn set_position(&mut self, position: Position) -> Result<(), ViewportError> {
        self.viewport.set_position(position)
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), ViewportError> {
        self.viewport.set_zoom(zoom)
    }

    pub fn set_resolution(&mut self, resolution: u32) -> Result<(), ViewportError> {
        self.viewport.set_resolution(resolution)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// The image produced by the last completed render. All zeroes until the
    /// first render.
    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.front_buffer
    }

    /// Wall-clock time of the last completed render, zero before the first.
    #[must_use]
    pub fn last_render_duration(&self) -> Duration {
        self.last_render_duration
    }

    /// Recomputes the whole image for the current viewport.
    ///
    /// On failure the previously rendered image and timing are left in place.
    pub fn render(&mut self) -> Result<Duration, EngineError> {
        let viewport = self.viewport;
        let position = viewport.position();
        let pixel_rect = self.back_buffer.pixel_rect();

        debug!(
            width = pixel_rect.width(),
            height = pixel_rect.height(),
            zoom = viewport.zoom(),
            resolution = viewport.resolution(),
            x = position.x,
            y = position.y,
            "rendering fractal"
        );

        let algorithm = MandelbrotAlgorithm::from_viewport(pixel_rect, self.window, &viewport)?;
        let colour_map = MandelbrotTealRed::new(viewport.resolution());
        let tile_size = self.tile_size;
        let back_buffer = &mut self.back_buffer;

        let start = Instant::now();
        self.pool.install(|| {
            generate_pixel_buffer_tiled(back_buffer, &algorithm, &colour_map, tile_size)
        })?;
        let render_duration = start.elapsed();

        std::mem::swap(&mut self.front_buffer, &mut self.back_buffer);
        self.last_render_duration = render_duration;

        info!(
            elapsed_ms = render_duration.as_secs_f64() * 1000.0,
            "fractal rendered"
        );

        Ok(render_duration)
    }
}
