use macroquad::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use parabolic_viz::core::config::VisualizerConfig;

use crate::constants::{
    GROUND_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES, STAGE_LEFT_MARGIN,
    TOGGLE_BUTTON_SIZE, UI_FONT_PATH,
};
use crate::controls::{FrameActions, draw_control_panel, hotkey_actions};
use crate::gameplay::apply_actions;
use crate::hud::draw_hud;
use crate::render::{StageOrigin, draw_scene, draw_sidebar_toggle};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config() -> VisualizerConfig {
    let explicit = std::env::var_os("PARABOLIC_VIZ_CONFIG").map(std::path::PathBuf::from);
    match VisualizerConfig::discover(explicit.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "falling back to default config");
            VisualizerConfig::default()
        }
    }
}

pub(crate) async fn run() {
    init_tracing();

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(load_config());
    info!("visualizer ready");

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        // Callbacks requested during the previous refresh fire now.
        state.pump_frames();

        let layout = state.session.sidebar().layout();
        let toggle_x = layout.width_px + 8.0;
        let stage_left = toggle_x + TOGGLE_BUTTON_SIZE + STAGE_LEFT_MARGIN;
        let origin = StageOrigin {
            x: stage_left,
            ground_y: screen_h - GROUND_MARGIN,
        };

        draw_scene(
            &state.scene,
            origin,
            state.session.config().ledge_width_px as f32,
            screen_w,
        );
        draw_hud(&state, stage_left, screen_h, ui_font.as_ref());

        let toggle_clicked = draw_sidebar_toggle(toggle_x, 8.0, layout.icon_rotation_deg);
        let actions = hotkey_actions()
            .merge(draw_control_panel(&state, screen_h))
            .merge(FrameActions {
                toggle_sidebar: toggle_clicked,
                ..Default::default()
            });
        apply_actions(&mut state, actions);

        next_frame().await;
    }
}
