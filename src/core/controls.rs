//! Input surface: slider/textbox pairs and the sidebar toggle.

use crate::core::config::FieldRange;

/// Reads a textbox the way a numeric form field is read: surrounding whitespace
/// is ignored and empty text counts as zero. Anything else that is not a finite
/// number yields `None`.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Text a slider writes into its textbox.
pub fn slider_text(value: f64) -> String {
    format!("{value}")
}

/// A slider and a textbox that mirror each other.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkedField {
    label: String,
    slider: f64,
    text: String,
    range: FieldRange,
}

impl LinkedField {
    pub fn new(label: impl Into<String>, value: f64, range: FieldRange) -> Self {
        let slider = range.clamp(value);
        Self {
            label: label.into(),
            slider,
            text: slider_text(slider),
            range,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn slider(&self) -> f64 {
        self.slider
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn range(&self) -> FieldRange {
        self.range
    }

    /// Value the launch reads: the textbox, not the slider.
    pub fn value(&self) -> Option<f64> {
        parse_numeric(&self.text)
    }

    pub fn set_from_slider(&mut self, value: f64) {
        self.slider = self.range.clamp(value);
        self.text = slider_text(self.slider);
    }

    /// Non-numeric text is kept as typed and leaves the slider where it was.
    pub fn set_from_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if let Some(value) = parse_numeric(&self.text) {
            self.slider = self.range.clamp(value);
        }
    }

    /// Writes both halves independently, as a mode switch does.
    pub fn set_both(&mut self, text: impl Into<String>, slider: f64) {
        self.text = text.into();
        self.slider = self.range.clamp(slider);
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_range(&mut self, range: FieldRange) {
        self.range = range;
        self.slider = range.clamp(self.slider);
    }
}

pub const SIDEBAR_WIDTH_PX: f32 = 288.0;
pub const SIDEBAR_PADDING_PX: f32 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarLayout {
    pub width_px: f32,
    pub padding_px: f32,
    pub opacity: f32,
    pub icon_rotation_deg: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    pub fn new() -> Self {
        Self { open: true }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn layout(self) -> SidebarLayout {
        if self.open {
            SidebarLayout {
                width_px: SIDEBAR_WIDTH_PX,
                padding_px: SIDEBAR_PADDING_PX,
                opacity: 1.0,
                icon_rotation_deg: 0.0,
            }
        } else {
            SidebarLayout {
                width_px: 0.0,
                padding_px: 0.0,
                opacity: 0.0,
                icon_rotation_deg: 180.0,
            }
        }
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}
