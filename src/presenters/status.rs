use std::time::Duration;

use crate::core::data::viewport::Viewport;

pub const CONTROLS_HELP: &str = "\
Steps: zoom-in / zoom-out
       increase-resolution / decrease-resolution
       move-left / move-right / move-up / move-down
       reset-view";

/// "Fractal rendered in N ms", milliseconds truncated.
#[must_use]
pub fn format_render_time(duration: Duration) -> String {
    format!("Fractal rendered in {} ms", duration.as_millis())
}

#[must_use]
pub fn format_rendering_parameters(viewport: &Viewport) -> String {
    let position = viewport.position();

    format!(
        "Rendering parameters\nZoom: x{}\nPrecision level: {}\nPosition: {} ; {}",
        viewport.zoom(),
        viewport.resolution(),
        position.x,
        position.y
    )
}
