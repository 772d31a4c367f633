use crate::controllers::explorer::command::{Direction, NavigationCommand};
use crate::controllers::explorer::limits::NavigationLimits;
use crate::core::data::viewport::{Position, Viewport, ViewportError};

/// Computes the viewport that `command` leads to from `viewport`.
///
/// Zoom stays within the positive finite range and resolution never drops
/// below `limits.min_resolution`. Only limits holding non-finite or
/// non-positive factors can produce an error.
pub fn navigate(
    viewport: Viewport,
    command: NavigationCommand,
    limits: &NavigationLimits,
) -> Result<Viewport, ViewportError> {
    let mut next = viewport;

    match command {
        NavigationCommand::ZoomIn => {
            next.set_zoom(clamp_zoom(viewport.zoom() * limits.zoom_factor))?;
        }
        NavigationCommand::ZoomOut => {
            next.set_zoom(clamp_zoom(viewport.zoom() / limits.zoom_factor))?;
        }
        NavigationCommand::IncreaseResolution => {
            next.set_resolution(increase_resolution(viewport.resolution(), limits))?;
        }
        NavigationCommand::DecreaseResolution => {
            next.set_resolution(decrease_resolution(viewport.resolution(), limits))?;
        }
        NavigationCommand::Move(direction) => {
            next.set_position(moved_position(viewport, direction, limits))?;
        }
        NavigationCommand::ResetView => next.reset(),
    }

    Ok(next)
}

fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(f64::MIN_POSITIVE, f64::MAX)
}

fn increase_resolution(resolution: u32, limits: &NavigationLimits) -> u32 {
    let scaled = (f64::from(resolution) * limits.resolution_factor) as u32;

    let next = if scaled == resolution {
        resolution.saturating_add(1)
    } else {
        scaled
    };

    next.max(limits.min_resolution.max(1))
}

fn decrease_resolution(resolution: u32, limits: &NavigationLimits) -> u32 {
    let scaled = (f64::from(resolution) / limits.resolution_factor) as u32;

    let next = if scaled == resolution {
        resolution.saturating_sub(1)
    } else {
        scaled
    };

    next.max(limits.min_resolution.max(1))
}

fn moved_position(viewport: Viewport, direction: Direction, limits: &NavigationLimits) -> Position {
    let Position { mut x, mut y } = viewport.position();
    let offset = limits.pan_step / viewport.zoom();

    match direction {
        Direction::Left => x -= offset,
        Direction::Right => x += offset,
        Direction::Up => y -= offset,
        Direction::Down => y += offset,
    }

    Position { x, y }
}
