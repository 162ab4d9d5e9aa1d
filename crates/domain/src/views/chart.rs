//! Price-history chart geometry
//!
//! Samples are min/max-scaled into a padded drawing surface: the oldest
//! sample sits on the left edge, the newest on the right, higher prices
//! nearer the top.

/// Line colour of the price series
pub const LINE_COLOR: &str = "#3498db";
pub const LINE_WIDTH: f64 = 2.0;
/// Fill colour of the per-sample markers
pub const MARKER_COLOR: &str = "#e74c3c";
pub const MARKER_RADIUS: f64 = 3.0;

/// Drawing surface dimensions, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSurface {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ChartSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }
}

impl Default for ChartSurface {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 150.0,
            padding: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// A plotted price history
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChart {
    surface: ChartSurface,
    points: Vec<ChartPoint>,
}

impl PriceChart {
    /// Plot `history` onto `surface`.
    ///
    /// Returns `None` for fewer than two samples. A flat history is drawn
    /// through the vertical centre.
    pub fn plot(history: &[f64], surface: ChartSurface) -> Option<Self> {
        if history.len() < 2 {
            return None;
        }

        let min = history.iter().copied().fold(f64::INFINITY, f64::min);
        let max = history.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        let width = surface.inner_width();
        let height = surface.inner_height();
        let step = width / (history.len() - 1) as f64;

        let points = history
            .iter()
            .enumerate()
            .map(|(index, price)| {
                let ratio = if range > 0.0 {
                    (price - min) / range
                } else {
                    0.5
                };
                ChartPoint {
                    x: surface.padding + step * index as f64,
                    y: surface.padding + height - ratio * height,
                }
            })
            .collect();

        Some(Self { surface, points })
    }

    pub fn surface(&self) -> ChartSurface {
        self.surface
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// Points in SVG `polyline` syntax (`"x1,y1 x2,y2 ..."`)
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn short_histories_are_not_plotted() {
        assert!(PriceChart::plot(&[], ChartSurface::default()).is_none());
        assert!(PriceChart::plot(&[10.0], ChartSurface::default()).is_none());
    }

    #[test]
    fn extremes_touch_the_padded_edges() {
        let surface = ChartSurface::default();
        let chart = PriceChart::plot(&[100.0, 300.0, 200.0], surface).unwrap();
        let points = chart.points();

        assert_eq!(points.len(), 3);
        // min at the bottom, max at the top
        assert!(close(points[0].x, 10.0));
        assert!(close(points[0].y, 140.0));
        assert!(close(points[1].x, 150.0));
        assert!(close(points[1].y, 10.0));
        assert!(close(points[2].x, 290.0));
        assert!(close(points[2].y, 75.0));
    }

    #[test]
    fn flat_history_runs_through_the_middle() {
        let chart = PriceChart::plot(&[50.0, 50.0, 50.0], ChartSurface::new(120.0, 60.0)).unwrap();
        for point in chart.points() {
            assert!(close(point.y, 30.0));
            assert!(point.y.is_finite());
        }
    }

    #[test]
    fn polyline_lists_every_point() {
        let chart = PriceChart::plot(&[1.0, 2.0], ChartSurface::default()).unwrap();
        assert_eq!(chart.polyline(), "10.0,140.0 290.0,10.0");
    }
}
