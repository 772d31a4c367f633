use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, PixelToComplexMapping,
};

/// |z|² at or beyond which an orbit is considered to have escaped.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z <- z² + c` from zero for at most `max_iterations` steps.
///
/// Returns the zero-based step at which `|z|²` first reached
/// [`ESCAPE_RADIUS_SQUARED`], or `max_iterations` when the orbit stayed bounded
/// for the whole budget. A non-zero budget always runs at least one step.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z.square() + c;

        if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

/// Escape-time Mandelbrot kernel bound to one viewport snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    mapping: PixelToComplexMapping,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = self.mapping.map(pixel)?;

        Ok(escape_time(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        mapping: PixelToComplexMapping,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            mapping,
            max_iterations,
        })
    }

    pub fn from_viewport(
        pixel_rect: PixelRect,
        window: ComplexRect,
        viewport: &Viewport,
    ) -> Result<Self, MandelbrotError> {
        Self::new(
            PixelToComplexMapping::new(pixel_rect, window, viewport),
            viewport.resolution(),
        )
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.mapping.pixel_rect()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
