use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer_tiled::GeneratePixelBufferTiledError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::fractals::mandelbrot::errors::{MandelbrotColourMapError, MandelbrotError};
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use thiserror::Error;

pub type MandelbrotTiledError =
    GeneratePixelBufferTiledError<PixelToComplexCoordsError, MandelbrotColourMapError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid image dimensions: {0}")]
    InvalidDimensions(#[from] PixelRectError),
    #[error("cannot create pixel buffer: {0}")]
    BufferAllocation(#[from] PixelBufferError),
    #[error("cannot start render workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("invalid fractal parameters: {0}")]
    Mandelbrot(#[from] MandelbrotError),
    #[error("render pass failed: {0}")]
    Render(#[from] MandelbrotTiledError),
}
