//! Output surface. Positions are in pixels measured from the scene's bottom-left
//! corner, so `bottom` grows upward.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPoint {
    pub left: f64,
    pub bottom: f64,
}

impl PixelPoint {
    pub const ORIGIN: Self = Self {
        left: 0.0,
        bottom: 0.0,
    };

    pub const fn new(left: f64, bottom: f64) -> Self {
        Self { left, bottom }
    }
}

/// Everything the solver and the animation driver write to.
pub trait Stage {
    fn place_particle(&mut self, left_px: f64, bottom_px: f64);
    fn set_particle_left(&mut self, left_px: f64);
    fn set_particle_bottom(&mut self, bottom_px: f64);
    fn drop_marker(&mut self, left_px: f64, bottom_px: f64);
    fn clear_markers(&mut self);
    fn show_results(&mut self, lines: Vec<String>);
    fn clear_results(&mut self);
    fn set_ledge_height(&mut self, height_px: f64);
}

/// In-memory stage, rendered by the window each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub particle: PixelPoint,
    pub markers: Vec<PixelPoint>,
    pub results: Vec<String>,
    pub ledge_height_px: f64,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            particle: PixelPoint::ORIGIN,
            markers: Vec::new(),
            results: Vec::new(),
            ledge_height_px: 0.0,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for Scene {
    fn place_particle(&mut self, left_px: f64, bottom_px: f64) {
        self.particle = PixelPoint::new(left_px, bottom_px);
    }

    fn set_particle_left(&mut self, left_px: f64) {
        self.particle.left = left_px;
    }

    fn set_particle_bottom(&mut self, bottom_px: f64) {
        self.particle.bottom = bottom_px;
    }

    fn drop_marker(&mut self, left_px: f64, bottom_px: f64) {
        self.markers.push(PixelPoint::new(left_px, bottom_px));
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn show_results(&mut self, lines: Vec<String>) {
        self.results = lines;
    }

    fn clear_results(&mut self) {
        self.results.clear();
    }

    fn set_ledge_height(&mut self, height_px: f64) {
        self.ledge_height_px = height_px;
    }
}
