use macroquad::prelude::*;

use parabolic_viz::core::animation::AnimationState;

use crate::constants::TITLE_Y;
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

fn state_text(state: AnimationState) -> &'static str {
    match state {
        AnimationState::Idle => "Idle",
        AnimationState::Running => "Running",
        AnimationState::Stopped => "Stopped",
        AnimationState::Cancelled => "Cancelled",
    }
}

pub(crate) fn draw_hud(state: &AppRuntime, left: f32, screen_h: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        "Projectile Motion",
        left,
        TITLE_Y,
        30,
        header_color,
        font,
    );

    for (i, line) in state.scene.results.iter().enumerate() {
        draw_ui_text(
            line,
            left,
            TITLE_Y + 36.0 + (i as f32 * 26.0),
            24,
            header_color,
            font,
        );
    }

    let session = &state.session;
    let elapsed = session.animation().map_or(0.0, |a| a.elapsed_s());
    let flight = session
        .last_solution()
        .map_or(String::from("-"), |s| format!("{:.2} s", s.flight_time_s));
    draw_ui_text(
        &format!(
            "Mode: {:?} | State: {} | t = {:.2} s | Flight time: {} | {}",
            session.mode(),
            state_text(session.animation_state()),
            elapsed,
            flight,
            state.status_line
        ),
        left,
        screen_h - 20.0,
        20,
        BLUE,
        font,
    );
    draw_ui_text(
        "Ctrl+Enter launch | Ctrl+R reset | Ctrl+M switch mode | Ctrl+B sidebar",
        left,
        screen_h - 46.0,
        18,
        DARKGRAY,
        font,
    );
}
