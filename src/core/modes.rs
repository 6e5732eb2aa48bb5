use tracing::info;

use crate::core::ballistics::{LaunchInput, polar_from_components, velocity_components};
use crate::core::config::{FieldRange, FieldRanges};
use crate::core::controls::LinkedField;
use crate::core::error::{InputField, LaunchError};

/// How the first two input fields are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputMode {
    /// `(speed, angle)`.
    #[default]
    Polar,
    /// `(vx, vy)`.
    Component,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Polar => Self::Component,
            Self::Component => Self::Polar,
        }
    }

    pub fn fields(self) -> (InputField, InputField) {
        match self {
            Self::Polar => (InputField::Speed, InputField::Angle),
            Self::Component => (InputField::Vx, InputField::Vy),
        }
    }

    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            Self::Polar => ("Speed (m/s)", "Angle (°)"),
            Self::Component => ("Vx (m/s)", "Vy (m/s)"),
        }
    }

    /// Caption of the button that leaves this mode.
    pub fn toggle_caption(self) -> &'static str {
        match self {
            Self::Polar => "Switch to components",
            Self::Component => "Switch to polar",
        }
    }

    pub fn ranges(self, ranges: &FieldRanges) -> (FieldRange, FieldRange) {
        match self {
            Self::Polar => (ranges.speed, ranges.angle),
            Self::Component => (ranges.component, ranges.component),
        }
    }

    /// Resolves the two textboxes into a tagged launch input.
    pub fn read_input(
        self,
        first: &LinkedField,
        second: &LinkedField,
    ) -> Result<LaunchInput, LaunchError> {
        let (first_field, second_field) = self.fields();
        let a = read_field(first, first_field)?;
        let b = read_field(second, second_field)?;
        Ok(match self {
            Self::Polar => LaunchInput::Polar {
                speed_mps: a,
                angle_deg: b,
            },
            Self::Component => LaunchInput::Component {
                vx_mps: a,
                vy_mps: b,
            },
        })
    }
}

pub(crate) fn read_field(field: &LinkedField, name: InputField) -> Result<f64, LaunchError> {
    field.value().ok_or_else(|| LaunchError::NonNumeric {
        field: name,
        raw: field.text().to_string(),
    })
}

/// Re-expresses `(first, second)` from `from`'s parameterization in the other one.
pub fn convert_values(from: InputMode, first: f64, second: f64) -> (f64, f64) {
    match from {
        InputMode::Polar => {
            let v = velocity_components(first, second);
            (v.vx, v.vy)
        }
        InputMode::Component => polar_from_components(first, second),
    }
}

/// Switches the two velocity fields to the other mode and returns it.
///
/// Displayed values are converted and shown with two decimals; sliders take the
/// converted value clamped to the new mode's range. If either textbox is not
/// numeric the values are left as they are and only labels and ranges change.
pub fn switch_mode(
    mode: InputMode,
    first: &mut LinkedField,
    second: &mut LinkedField,
    ranges: &FieldRanges,
) -> InputMode {
    let next = mode.toggled();
    let (first_range, second_range) = next.ranges(ranges);
    let (first_label, second_label) = next.labels();

    first.set_range(first_range);
    second.set_range(second_range);
    first.set_label(first_label);
    second.set_label(second_label);

    match (first.value(), second.value()) {
        (Some(a), Some(b)) => {
            let (c, d) = convert_values(mode, a, b);
            first.set_both(format!("{c:.2}"), c);
            second.set_both(format!("{d:.2}"), d);
        }
        _ => info!(
            first = first.text(),
            second = second.text(),
            "mode switched without converting non-numeric values"
        ),
    }

    info!(?next, "input mode switched");
    next
}
