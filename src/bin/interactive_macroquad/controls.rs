use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use parabolic_viz::core::session::FieldSlot;

use crate::state::AppRuntime;

pub(crate) enum FieldEdit {
    Slider(FieldSlot, f64),
    Text(FieldSlot, String),
}

#[derive(Default)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) reset: bool,
    pub(crate) toggle_mode: bool,
    pub(crate) toggle_sidebar: bool,
    pub(crate) edits: Vec<FieldEdit>,
}

impl FrameActions {
    pub(crate) fn merge(mut self, other: Self) -> Self {
        self.launch |= other.launch;
        self.reset |= other.reset;
        self.toggle_mode |= other.toggle_mode;
        self.toggle_sidebar |= other.toggle_sidebar;
        self.edits.extend(other.edits);
        self
    }
}

/// Shortcuts are Ctrl chords; bare keys belong to whichever textbox has focus.
pub(crate) fn chord_actions(ctrl_held: bool, pressed: impl Fn(KeyCode) -> bool) -> FrameActions {
    if !ctrl_held {
        return FrameActions::default();
    }
    FrameActions {
        launch: pressed(KeyCode::Enter),
        reset: pressed(KeyCode::R),
        toggle_mode: pressed(KeyCode::M),
        toggle_sidebar: pressed(KeyCode::B),
        edits: Vec::new(),
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    let ctrl_held = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    chord_actions(ctrl_held, is_key_pressed)
}

const FIELDS: [(FieldSlot, &str); 3] = [
    (FieldSlot::First, "first"),
    (FieldSlot::Second, "second"),
    (FieldSlot::Height, "height"),
];

/// Sidebar with the three slider/textbox pairs and the action buttons.
pub(crate) fn draw_control_panel(state: &AppRuntime, screen_h: f32) -> FrameActions {
    let layout = state.session.sidebar().layout();
    let mut actions = FrameActions::default();
    if layout.opacity <= 0.0 {
        return actions;
    }

    let session = &state.session;
    widgets::Window::new(
        hash!(),
        vec2(0.0, 0.0),
        vec2(layout.width_px, screen_h),
    )
    .label("Launch Controls")
    .movable(false)
    .ui(&mut *root_ui(), |ui| {
        for (slot, key) in FIELDS {
            let field = session.field(slot);
            let range = field.range();

            ui.label(None, field.label());
            let mut slider = field.slider() as f32;
            ui.slider(
                hash!(key, "slider"),
                "",
                range.min as f32..range.max as f32,
                &mut slider,
            );
            if slider != field.slider() as f32 {
                actions.edits.push(FieldEdit::Slider(slot, f64::from(slider)));
            }

            let mut text = field.text().to_string();
            ui.input_text(hash!(key, "text"), "", &mut text);
            if text != field.text() {
                actions.edits.push(FieldEdit::Text(slot, text));
            }
            ui.separator();
        }

        if ui.button(None, "Launch (Ctrl+Enter)") {
            actions.launch = true;
        }
        if ui.button(None, "Reset (Ctrl+R)") {
            actions.reset = true;
        }
        let toggle_caption = format!("{} (Ctrl+M)", session.mode().toggle_caption());
        if ui.button(None, toggle_caption.as_str()) {
            actions.toggle_mode = true;
        }
    });

    actions
}
