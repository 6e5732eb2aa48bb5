use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const STAGE_LEFT_MARGIN: f32 = 40.0;
pub const GROUND_MARGIN: f32 = 90.0;
pub const TITLE_Y: f32 = 40.0;

/// Particle box edge; its centre sits at the trail offset.
pub const PARTICLE_SIZE_PX: f32 = 48.0;
pub const MARKER_RADIUS_PX: f32 = 4.0;

pub const TOGGLE_BUTTON_SIZE: f32 = 32.0;

pub const STAGE_BG: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GROUND_COLOR: Color = Color::new(0.45, 0.42, 0.40, 1.0);
pub const LEDGE_COLOR: Color = Color::new(0.47, 0.44, 0.42, 1.0);
pub const PARTICLE_COLOR: Color = Color::new(0.94, 0.27, 0.27, 1.0);
pub const MARKER_COLOR: Color = Color::new(0.23, 0.51, 0.96, 0.30);
pub const TOGGLE_BUTTON_COLOR: Color = Color::new(0.14, 0.45, 0.95, 1.0);
