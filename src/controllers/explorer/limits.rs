/// Step sizes applied by each navigation command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationLimits {
    /// Zoom is multiplied by this on zoom in and divided by it on zoom out.
    pub zoom_factor: f64,
    pub resolution_factor: f64,
    /// Pan distance in normalised canvas units at zoom 1.
    pub pan_step: f64,
    pub min_resolution: u32,
}

impl Default for NavigationLimits {
    fn default() -> Self {
        Self {
            zoom_factor: 1.3,
            resolution_factor: 1.1,
            pan_step: 0.1,
            min_resolution: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationLimits;

    #[test]
    fn default_limits_are_finite_and_consistent() {
        let limits = NavigationLimits::default();

        assert!(limits.zoom_factor.is_finite());
        assert!(limits.resolution_factor.is_finite());
        assert!(limits.pan_step.is_finite());
        assert!(limits.zoom_factor > 1.0);
        assert!(limits.resolution_factor > 1.0);
        assert!(limits.pan_step > 0.0);
        assert!(limits.min_resolution >= 1);
    }
}
