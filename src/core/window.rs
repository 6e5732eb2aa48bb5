/// x:y data window ratio for exported charts.
pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Chart extent in metres. The y axis starts at the ground; the x axis starts
/// at the origin unless the data reaches behind it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_start: f64,
    pub x_span: f64,
    pub y_span: f64,
}

impl AxisWindow {
    /// Pads the data extent and widens one axis so the window keeps
    /// [`DISTANCE_TO_HEIGHT_RATIO`]. Only a negative `raw_min_x` moves the
    /// window's left edge.
    pub fn fit(raw_min_x: f64, raw_max_x: f64, raw_max_y: f64) -> Self {
        let raw_min_x = raw_min_x.min(0.0);
        let raw_max_x = raw_max_x.max(0.0);
        let raw_extent = raw_max_x - raw_min_x;
        let x_pad = raw_extent.max(1.0) * X_PADDING_RATIO;
        let y_pad = raw_max_y.max(1.0) * Y_PADDING_RATIO;

        let x_start = if raw_min_x < 0.0 {
            raw_min_x - x_pad
        } else {
            0.0
        };
        let mut x_span = (raw_max_x + x_pad - x_start).max(1.0);
        let mut y_span = (raw_max_y + y_pad).max(1.0);

        if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
            x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
        } else {
            y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
        }

        Self {
            x_start,
            x_span,
            y_span,
        }
    }

    pub fn x_range(&self) -> std::ops::Range<f64> {
        self.x_start..self.x_start + self.x_span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_data_sets_the_height() {
        let window = AxisWindow::fit(0.0, 100.0, 10.0);
        assert!((window.x_span - 106.0).abs() < 1e-9);
        assert!((window.y_span - 53.0).abs() < 1e-9);
    }

    #[test]
    fn tall_data_sets_the_width() {
        let window = AxisWindow::fit(0.0, 0.0, 30.0);
        assert!((window.y_span - 33.0).abs() < 1e-9);
        assert!((window.x_span - 66.0).abs() < 1e-9);
    }

    #[test]
    fn empty_data_has_a_unit_floor() {
        let window = AxisWindow::fit(0.0, 0.0, 0.0);
        assert_eq!(window.y_span, 1.0);
        assert_eq!(window.x_span, 2.0);
        assert_eq!(window.x_start, 0.0);
    }

    #[test]
    fn backward_data_moves_the_left_edge() {
        let window = AxisWindow::fit(-50.0, 0.0, 5.0);
        assert!((window.x_start - (-53.0)).abs() < 1e-9);
        assert!((window.x_span - 56.0).abs() < 1e-9);
        assert!(window.x_range().contains(&-50.0));
        assert!(window.x_range().contains(&0.0));
    }
}
