use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
        .point.x,
        .point.y,
        .pixel_rect.top_left().x,
        .pixel_rect.top_left().y,
        .pixel_rect.bottom_right().x,
        .pixel_rect.bottom_right().y
    )]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Maps image pixels onto the complex plane for one viewport snapshot.
///
/// The image is treated as a window onto a canvas `zoom` times its size that
/// covers `window`. A single scale derived from the window height is used for
/// both axes, so the aspect ratio is always preserved and wide images simply
/// see more of the real axis. The window is centred on `position`, expressed
/// as a fraction of the canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelToComplexMapping {
    pixel_rect: PixelRect,
    left: f64,
    bottom: f64,
    scale: f64,
    canvas_offset_x: f64,
    canvas_offset_y: f64,
}

impl PixelToComplexMapping {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, window: ComplexRect, viewport: &Viewport) -> Self {
        let width = pixel_rect.width();
        let height = pixel_rect.height();
        let zoom = viewport.zoom();
        let position = viewport.position();

        let scale = zoom * f64::from(height) / window.height();
        let canvas_width = (f64::from(width) * zoom).trunc();
        let canvas_height = (f64::from(height) * zoom).trunc();

        Self {
            pixel_rect,
            left: window.left(),
            bottom: window.bottom(),
            scale,
            canvas_offset_x: canvas_width * position.x - f64::from(width / 2),
            canvas_offset_y: canvas_height * position.y - f64::from(height / 2),
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    /// Pixels per unit of the complex plane.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn map(&self, pixel: Point) -> Result<Complex, PixelToComplexCoordsError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelToComplexCoordsError::PointOutsideRect {
                point: pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = f64::from(pixel.x - self.pixel_rect.top_left().x);
        let relative_y = f64::from(pixel.y - self.pixel_rect.top_left().y);
        let canvas_x = self.canvas_offset_x + relative_x;
        let canvas_y = self.canvas_offset_y + relative_y;

        Ok(Complex {
            real: canvas_x / self.scale + self.left,
            imag: canvas_y / self.scale + self.bottom,
        })
    }
}
