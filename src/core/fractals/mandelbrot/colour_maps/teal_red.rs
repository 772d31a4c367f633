use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::errors::MandelbrotColourMapError;

/// Colour of points that never escaped within the iteration budget.
pub const MEMBER_COLOUR: Colour = Colour::opaque(0, 54, 76);

/// Dark teal for members of the set, and a red whose intensity grows with the
/// escape step for everything else. Intensity uses integer division, so it is
/// piecewise constant across escape steps.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotTealRed {
    max_iterations: u32,
}

impl ColourMap<u32> for MandelbrotTealRed {
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        if iterations > self.max_iterations {
            return Err(MandelbrotColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(MEMBER_COLOUR);
        }

        let intensity = u64::from(iterations) * 255 / u64::from(self.max_iterations);

        Ok(Colour::opaque(intensity as u8, 0, 0))
    }

    fn display_name(&self) -> &str {
        "Teal / Red"
    }
}

impl MandelbrotTealRed {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_teal_at_max_iterations() {
        let mapper = MandelbrotTealRed::new(30);

        assert_eq!(mapper.map(30).unwrap(), Colour::opaque(0, 54, 76));
    }

    #[test]
    fn test_map_immediate_escape_is_black() {
        let mapper = MandelbrotTealRed::new(30);

        assert_eq!(mapper.map(0).unwrap(), Colour::opaque(0, 0, 0));
    }

    #[test]
    fn test_map_uses_integer_division() {
        let mapper = MandelbrotTealRed::new(30);

        // 2 * 255 / 30 = 17, 29 * 255 / 30 = 246
        assert_eq!(mapper.map(2).unwrap(), Colour::opaque(17, 0, 0));
        assert_eq!(mapper.map(29).unwrap(), Colour::opaque(246, 0, 0));
    }

    #[test]
    fn test_map_intensity_is_piecewise_constant() {
        let mapper = MandelbrotTealRed::new(1000);

        assert_eq!(mapper.map(1).unwrap(), mapper.map(3).unwrap());
        assert_ne!(mapper.map(3).unwrap(), mapper.map(4).unwrap());
    }

    #[test]
    fn test_single_iteration_budget_has_two_colours() {
        let mapper = MandelbrotTealRed::new(1);

        assert_eq!(mapper.map(0).unwrap(), Colour::opaque(0, 0, 0));
        assert_eq!(mapper.map(1).unwrap(), MEMBER_COLOUR);
    }

    #[test]
    fn test_map_does_not_overflow_on_huge_budgets() {
        let mapper = MandelbrotTealRed::new(u32::MAX);

        assert_eq!(mapper.map(u32::MAX - 1).unwrap(), Colour::opaque(254, 0, 0));
    }

    #[test]
    fn test_map_rejects_iterations_above_max() {
        let mapper = MandelbrotTealRed::new(10);

        assert_eq!(
            mapper.map(11),
            Err(MandelbrotColourMapError::IterationsExceedMax {
                iterations: 11,
                max_iterations: 10
            })
        );
    }
}
