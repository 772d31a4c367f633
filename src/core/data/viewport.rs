use thiserror::Error;

pub const DEFAULT_POSITION: Position = Position { x: 0.4, y: 0.5 };
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_RESOLUTION: u32 = 30;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("zoom must be a finite value greater than zero, got {0}")]
    InvalidZoom(f64),
    #[error("resolution must be at least one iteration")]
    ZeroResolution,
    #[error("position components must be finite, got ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },
}

/// Centre of the visible window as a fraction of the zoomed canvas. Values near
/// `[0, 1] x [0, 1]` keep the window over the configured fractal plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Default for Position {
    fn default() -> Self {
        DEFAULT_POSITION
    }
}

/// Which part of the fractal is rendered and at what detail.
///
/// Invariants: `zoom` is finite and positive, `resolution >= 1`, position
/// components are finite. Setters reject values that would break them and
/// leave the viewport unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    position: Position,
    zoom: f64,
    resolution: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            zoom: DEFAULT_ZOOM,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl Viewport {
    pub fn new(position: Position, zoom: f64, resolution: u32) -> Result<Self, ViewportError> {
        let mut viewport = Self::default();

        viewport.set_position(position)?;
        viewport.set_zoom(zoom)?;
        viewport.set_resolution(resolution)?;

        Ok(viewport)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn set_position(&mut self, position: Position) -> Result<(), ViewportError> {
        if !position.x.is_finite() || !position.y.is_finite() {
            return Err(ViewportError::InvalidPosition {
                x: position.x,
                y: position.y,
            });
        }

        self.position = position;
        Ok(())
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), ViewportError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom(zoom));
        }

        self.zoom = zoom;
        Ok(())
    }

    pub fn set_resolution(&mut self, resolution: u32) -> Result<(), ViewportError> {
        if resolution == 0 {
            return Err(ViewportError::ZeroResolution);
        }

        self.resolution = resolution;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
