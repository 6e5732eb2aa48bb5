use tracing::info;

use crate::controls::{FieldEdit, FrameActions};
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    for edit in actions.edits {
        match edit {
            FieldEdit::Slider(slot, value) => {
                state.session.slider_edited(slot, value, &mut state.scene);
            }
            FieldEdit::Text(slot, text) => {
                state.session.text_edited(slot, &text, &mut state.scene);
            }
        }
    }

    if actions.toggle_sidebar {
        state.session.toggle_sidebar();
        info!(open = state.session.sidebar().is_open(), "sidebar toggled");
    }

    if actions.toggle_mode {
        state.session.toggle_mode();
        state.status_line = format!("Mode: {:?}", state.session.mode());
    }

    if actions.reset {
        state.reset();
    }

    if actions.launch {
        state.launch();
    }
}
