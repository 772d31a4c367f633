use std::time::Duration;

use tracing::debug;

use crate::controllers::engine::FractalRenderEngine;
use crate::controllers::explorer::command::NavigationCommand;
use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::limits::NavigationLimits;
use crate::controllers::explorer::navigation::navigate;
use crate::core::data::viewport::Viewport;

/// What a completed render looked at and how long it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderReport {
    pub duration: Duration,
    pub viewport: Viewport,
}

/// Translates navigation commands into engine state changes, rendering after
/// each one.
#[derive(Debug)]
pub struct ExplorerController {
    engine: FractalRenderEngine,
    limits: NavigationLimits,
}

impl ExplorerController {
    pub fn new(engine: FractalRenderEngine, limits: NavigationLimits) -> Self {
        Self { engine, limits }
    }

    #[must_use]
    pub fn engine(&self) -> &FractalRenderEngine {
        &self.engine
    }

    #[must_use]
    pub fn limits(&self) -> &NavigationLimits {
        &self.limits
    }

    #[must_use]
    pub fn into_engine(self) -> FractalRenderEngine {
        self.engine
    }

    pub fn render(&mut self) -> Result<RenderReport, ExplorerError> {
        let duration = self.engine.render()?;

        Ok(RenderReport {
            duration,
            viewport: self.engine.viewport(),
        })
    }

    /// Applies `command` to the current viewport, then renders.
    ///
    /// If navigation fails the viewport is left unchanged and nothing is
    /// rendered.
    pub fn apply(&mut self, command: NavigationCommand) -> Result<RenderReport, ExplorerError> {
        let next = navigate(self.engine.viewport(), command, &self.limits)?;

        debug!(
            %command,
            zoom = next.zoom(),
            resolution = next.resolution(),
            x = next.position().x,
            y = next.position().y,
            "navigation applied"
        );

        self.engine.set_viewport(next);
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::engine::EngineConfig;
    use crate::controllers::explorer::command::Direction;
    use crate::core::data::viewport::Position;

    fn create_controller() -> ExplorerController {
        let engine = FractalRenderEngine::new(EngineConfig::with_size(24, 18)).unwrap();

        ExplorerController::new(engine, NavigationLimits::default())
    }

    #[test]
    fn apply_updates_viewport_and_renders() {
        let mut controller = create_controller();

        let report = controller.apply(NavigationCommand::IncreaseResolution).unwrap();

        assert_eq!(report.viewport.resolution(), 33);
        assert_eq!(controller.engine().resolution(), 33);
        assert_eq!(report.duration, controller.engine().last_render_duration());
        assert!(controller.engine().buffer().colours().all(|c| c.a == 255));
    }

    #[test]
    fn each_command_renders_the_new_view() {
        let mut controller = create_controller();
        controller.render().unwrap();
        let initial = controller.engine().buffer().clone();

        controller.apply(NavigationCommand::ZoomIn).unwrap();

        assert_ne!(controller.engine().buffer(), &initial);
    }

    #[test]
    fn reset_after_navigation_restores_initial_image() {
        let mut controller = create_controller();
        controller.render().unwrap();
        let initial = controller.engine().buffer().clone();

        controller.apply(NavigationCommand::ZoomIn).unwrap();
        controller.apply(NavigationCommand::Move(Direction::Left)).unwrap();
        controller.apply(NavigationCommand::DecreaseResolution).unwrap();
        let report = controller.apply(NavigationCommand::ResetView).unwrap();

        assert_eq!(report.viewport, Viewport::default());
        assert_eq!(controller.engine().buffer(), &initial);
    }

    #[test]
    fn resolution_never_drops_below_one() {
        let mut controller = create_controller();

        for _ in 0..50 {
            controller.apply(NavigationCommand::DecreaseResolution).unwrap();
        }

        assert_eq!(controller.engine().resolution(), 1);
    }

    #[test]
    fn failed_navigation_leaves_viewport_unchanged() {
        let engine = FractalRenderEngine::new(EngineConfig::with_size(8, 8)).unwrap();
        let limits = NavigationLimits {
            pan_step: f64::INFINITY,
            ..NavigationLimits::default()
        };
        let mut controller = ExplorerController::new(engine, limits);

        let result = controller.apply(NavigationCommand::Move(Direction::Right));

        assert!(matches!(result, Err(ExplorerError::Viewport(_))));
        assert_eq!(controller.engine().position(), Position::default());
        assert_eq!(controller.engine().last_render_duration(), Duration::ZERO);
    }
}
