use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MandelbrotError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MandelbrotColourMapError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}
