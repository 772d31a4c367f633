use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::viewport::Viewport;

pub const WINDOW_LEFT: f64 = -2.1;
pub const WINDOW_RIGHT: f64 = 0.6;
pub const WINDOW_BOTTOM: f64 = -1.2;
pub const WINDOW_TOP: f64 = 1.2;

/// The region of the complex plane shown at zoom 1.
pub(crate) fn default_window() -> ComplexRect {
    ComplexRect::new(
        Complex {
            real: WINDOW_LEFT,
            imag: WINDOW_BOTTOM,
        },
        Complex {
            real: WINDOW_RIGHT,
            imag: WINDOW_TOP,
        },
    )
    .expect("default fractal window is valid")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub window: ComplexRect,
    pub viewport: Viewport,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            viewport: Viewport::default(),
        }
    }
}
