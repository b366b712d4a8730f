use crate::config::{Margins, TrackConfig};

/// Size of the element the chart is mounted in, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBox {
    pub width: f64,
    pub height: f64,
}

impl ContainerBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixel geometry of the chart area. Recreated on every resize, never
/// patched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl ChartGeometry {
    /// The title line is taken off the top of the container. Nothing is
    /// clamped: a container smaller than the title or the margins gives
    /// an empty (or inverted) plot region.
    pub fn compute(container: ContainerBox, config: &TrackConfig) -> Self {
        let geometry = Self {
            width: container.width,
            height: container.height - config.title_height,
            margins: config.margins,
        };

        if geometry.is_empty() {
            log::debug!("degenerate chart geometry: {:?}", geometry);
        }

        geometry
    }

    /// Left edge of the plot region.
    pub fn plot_left(&self) -> f64 {
        self.margins.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margins.right
    }

    pub fn plot_top(&self) -> f64 {
        self.margins.top
    }

    /// Baseline of the data, where the x-axis sits.
    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margins.bottom
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    pub fn plot_height(&self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }

    pub fn is_empty(&self) -> bool {
        self.plot_width() <= 0.0 || self.plot_height() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_reserved() {
        let cfg = TrackConfig::default();
        let geom = ChartGeometry::compute(ContainerBox::new(800.0, 300.0), &cfg);

        assert_eq!(geom.width, 800.0);
        assert_eq!(geom.height, 280.0);
        assert_eq!(geom.plot_left(), 40.0);
        assert_eq!(geom.plot_right(), 790.0);
        assert_eq!(geom.plot_top(), 10.0);
        assert_eq!(geom.plot_bottom(), 220.0);
        assert!(!geom.is_empty());
    }

    #[test]
    fn tiny_container_is_degenerate_not_fatal() {
        let cfg = TrackConfig::default();
        let geom = ChartGeometry::compute(ContainerBox::new(0.0, 10.0), &cfg);

        assert_eq!(geom.height, -10.0);
        assert!(geom.plot_width() < 0.0);
        assert!(geom.is_empty());
    }
}
