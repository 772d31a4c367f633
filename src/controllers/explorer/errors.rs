use crate::controllers::engine::EngineError;
use crate::core::data::viewport::ViewportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("navigation produced an invalid viewport: {0}")]
    Viewport(#[from] ViewportError),
    #[error("render failed: {0}")]
    Engine(#[from] EngineError),
}
