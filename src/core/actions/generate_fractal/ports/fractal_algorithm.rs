use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation of a fractal. Implementations must be pure: the same
/// pixel always yields the same result, whichever thread asks.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
