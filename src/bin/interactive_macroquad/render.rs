use macroquad::prelude::*;

use parabolic_viz::core::scene::{PixelPoint, Scene};

use crate::constants::{
    GROUND_COLOR, LEDGE_COLOR, MARKER_COLOR, MARKER_RADIUS_PX, PARTICLE_COLOR, PARTICLE_SIZE_PX,
    STAGE_BG, TOGGLE_BUTTON_COLOR, TOGGLE_BUTTON_SIZE,
};

/// Screen position of the scene's bottom-left corner.
#[derive(Clone, Copy)]
pub(crate) struct StageOrigin {
    pub(crate) x: f32,
    pub(crate) ground_y: f32,
}

impl StageOrigin {
    pub(crate) fn to_screen(self, point: PixelPoint) -> Vec2 {
        vec2(
            self.x + point.left as f32,
            self.ground_y - point.bottom as f32,
        )
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_scene(scene: &Scene, origin: StageOrigin, ledge_width_px: f32, screen_w: f32) {
    clear_background(STAGE_BG);
    draw_line(0.0, origin.ground_y, screen_w, origin.ground_y, 3.0, GROUND_COLOR);

    let ledge_h = scene.ledge_height_px as f32;
    if ledge_h > 0.0 {
        draw_rectangle(
            origin.x,
            origin.ground_y - ledge_h,
            ledge_width_px,
            ledge_h,
            LEDGE_COLOR,
        );
    }

    for marker in &scene.markers {
        let p = origin.to_screen(*marker);
        draw_circle(p.x, p.y, MARKER_RADIUS_PX, MARKER_COLOR);
    }

    // Particle box is anchored at its bottom-left corner.
    let corner = origin.to_screen(scene.particle);
    let radius = PARTICLE_SIZE_PX * 0.5;
    draw_circle(corner.x + radius, corner.y - radius, radius, PARTICLE_COLOR);
    draw_circle_lines(corner.x + radius, corner.y - radius, radius, 2.0, MAROON);
}

/// Chevron button that opens and closes the sidebar. Returns true when clicked.
pub(crate) fn draw_sidebar_toggle(x: f32, y: f32, icon_rotation_deg: f32) -> bool {
    let button_rect = Rect::new(x, y, TOGGLE_BUTTON_SIZE, TOGGLE_BUTTON_SIZE);

    let mouse = mouse_position();
    let hovered = button_rect.contains(vec2(mouse.0, mouse.1));
    let clicked = hovered && is_mouse_button_pressed(MouseButton::Left);

    let fill = if hovered {
        Color::from_rgba(37, 99, 235, 255)
    } else {
        TOGGLE_BUTTON_COLOR
    };
    draw_rectangle(
        button_rect.x,
        button_rect.y,
        button_rect.w,
        button_rect.h,
        fill,
    );

    // Left-pointing chevron at 0 degrees.
    let center = button_rect.center();
    let rotation = icon_rotation_deg.to_radians();
    let arm = TOGGLE_BUTTON_SIZE * 0.25;
    let rotate = |v: Vec2| Vec2::from_angle(rotation).rotate(v);
    let tip = center + rotate(vec2(-arm * 0.5, 0.0));
    let upper = center + rotate(vec2(arm * 0.5, -arm));
    let lower = center + rotate(vec2(arm * 0.5, arm));
    draw_line(upper.x, upper.y, tip.x, tip.y, 3.0, WHITE);
    draw_line(lower.x, lower.y, tip.x, tip.y, 3.0, WHITE);

    clicked
}
