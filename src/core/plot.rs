//! Static SVG chart of a solved launch.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use plotters::prelude::*;
use tracing::info;

use crate::core::ballistics::{Launch, Solution};
use crate::core::error::PlotError;
use crate::core::window::AxisWindow;

pub const TRAJECTORY_SAMPLES: usize = 320;
pub const PLOT_SIZE: (u32, u32) = (1280, 720);

const TRAJECTORY_COLOR: RGBColor = RGBColor(54, 123, 245);
const LEDGE_COLOR: RGBColor = RGBColor(120, 113, 108);
const PEAK_COLOR: RGBColor = RGBColor(220, 38, 38);

/// `trajectory-YYYYmmdd-HHMMSS.svg` in the working directory.
pub fn default_plot_path() -> PathBuf {
    PathBuf::from(format!(
        "trajectory-{}.svg",
        Local::now().format("%Y%m%d-%H%M%S")
    ))
}

/// Highest point of the flight. Downward throws peak at launch.
pub fn peak_point(launch: &Launch) -> (f64, f64) {
    let t_peak = (-launch.velocity.vy / launch.gravity_mps2).max(0.0);
    launch.position_at(t_peak)
}

/// Everything the chart draws, in metres.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotData {
    pub points: Vec<(f64, f64)>,
    pub peak: (f64, f64),
    pub ledge: (f64, f64),
    pub window: AxisWindow,
}

impl PlotData {
    pub fn new(launch: &Launch, solution: &Solution, ledge_width_m: f64) -> Result<Self, PlotError> {
        if solution.flight_time_s <= 0.0 {
            return Err(PlotError::EmptyTrajectory);
        }
        let points = launch.sample_trajectory(solution.flight_time_s, TRAJECTORY_SAMPLES);
        let peak = peak_point(launch);
        let ledge = (ledge_width_m, launch.initial_height_m);
        let window = AxisWindow::fit(
            solution.range_m.min(0.0),
            solution.range_m.max(ledge_width_m),
            solution.max_height_m,
        );
        Ok(Self {
            points,
            peak,
            ledge,
            window,
        })
    }
}

fn render_err(err: impl std::fmt::Display) -> PlotError {
    PlotError::Render(err.to_string())
}

pub fn render_svg(data: &PlotData, caption: &str) -> Result<String, PlotError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, PLOT_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 24))
            .margin(16)
            .x_label_area_size(44)
            .y_label_area_size(56)
            .build_cartesian_2d(data.window.x_range(), 0f64..data.window.y_span)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Distance (m)")
            .y_desc("Height (m)")
            .draw()
            .map_err(render_err)?;

        if data.ledge.1 > 0.0 {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(0.0, 0.0), data.ledge],
                    LEDGE_COLOR.filled(),
                )))
                .map_err(render_err)?;
        }

        chart
            .draw_series(LineSeries::new(
                data.points.iter().copied(),
                TRAJECTORY_COLOR.stroke_width(2),
            ))
            .map_err(render_err)?;

        chart
            .draw_series(std::iter::once(Circle::new(
                data.peak,
                5,
                PEAK_COLOR.filled(),
            )))
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

pub fn write_svg(
    path: &Path,
    launch: &Launch,
    solution: &Solution,
    ledge_width_m: f64,
) -> Result<(), crate::Error> {
    let data = PlotData::new(launch, solution, ledge_width_m)?;
    let caption = format!(
        "Range {:.2} m | Max height {:.2} m | Flight {:.2} s",
        solution.range_m, solution.max_height_m, solution.flight_time_s
    );
    let svg = render_svg(&data, &caption)?;
    fs::write(path, svg)?;
    info!(path = %path.display(), "wrote trajectory plot");
    Ok(())
}
