use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// A window onto the complex plane in screen orientation: `top_left` holds the
/// smallest real and imaginary parts, which map to the first pixel row/column.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        // Negated comparison so NaN extents are rejected too.
        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.top_left.real
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.bottom_right.real
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top_left.imag
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.bottom_right.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let top_left = Complex {
            real: -2.1,
            imag: -1.2,
        };
        let bottom_right = Complex {
            real: 0.6,
            imag: 1.2,
        };

        let rect = ComplexRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
        assert_eq!(rect.left(), -2.1);
        assert_eq!(rect.right(), 0.6);
        assert_eq!(rect.bottom(), -1.2);
        assert_eq!(rect.top(), 1.2);
    }

    #[test]
    fn test_complex_rect_dimensions() {
        let rect = ComplexRect::new(
            Complex {
                real: -2.5,
                imag: -1.0,
            },
            Complex {
                real: 1.0,
                imag: 1.0,
            },
        )
        .unwrap();

        assert_eq!(rect.width(), 3.5);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        let zero_width = ComplexRect::new(
            Complex {
                real: 0.0,
                imag: 0.0,
            },
            Complex {
                real: 0.0,
                imag: 100.0,
            },
        );

        let inverted = ComplexRect::new(
            Complex {
                real: 2.0,
                imag: 2.0,
            },
            Complex {
                real: -2.0,
                imag: -2.0,
            },
        );

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            inverted,
            Err(ComplexRectError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_nan_extent() {
        let rect = ComplexRect::new(
            Complex {
                real: f64::NAN,
                imag: 0.0,
            },
            Complex {
                real: 1.0,
                imag: 1.0,
            },
        );

        assert!(rect.is_err());
    }
}
