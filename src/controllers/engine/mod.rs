mod config;
mod engine;
mod errors;

pub use config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, EngineConfig};
pub use engine::FractalRenderEngine;
pub use errors::EngineError;
