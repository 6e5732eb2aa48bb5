//! Per-frame driver for one launch.
//!
//! An [`Animation`] starts `Idle`, becomes `Running` on [`Animation::start`], and
//! advances one fixed step per [`Animation::tick`] until the particle drops below
//! the ground threshold, at which point it is `Stopped` for good. A shared
//! [`CancelToken`] is checked before every step; once it fires the driver is
//! `Cancelled` and never touches the stage again.
//!
//! The ground threshold is the launch height while the particle is still over the
//! ledge (`x <= ledge width`) and zero past it. The particle therefore has to clear
//! the ledge's edge before it can fall to the floor.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::core::ballistics::Launch;
use crate::core::config::VisualizerConfig;
use crate::core::scene::Stage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Running,
    Stopped,
    Cancelled,
}

/// Shared cancel flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickParams {
    pub dt_s: f64,
    pub pixels_per_meter: f64,
    pub ledge_width_m: f64,
    pub trail_offset_px: f64,
}

impl From<&VisualizerConfig> for TickParams {
    fn from(config: &VisualizerConfig) -> Self {
        Self {
            dt_s: config.tick_s,
            pixels_per_meter: config.pixels_per_meter,
            ledge_width_m: config.ledge_width_m(),
            trail_offset_px: config.trail_offset_px,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Still airborne; another frame is wanted.
    Continue,
    /// Fell below the threshold; the particle was clamped to it.
    Landed { threshold_m: f64 },
    Cancelled,
    /// Not running, nothing happened.
    Inactive,
}

pub struct Animation {
    launch: Launch,
    params: TickParams,
    elapsed_s: f64,
    ticks: u64,
    state: AnimationState,
    token: CancelToken,
}

impl Animation {
    pub fn new(launch: Launch, params: TickParams, token: CancelToken) -> Self {
        Self {
            launch,
            params,
            elapsed_s: 0.0,
            ticks: 0,
            state: AnimationState::Idle,
            token,
        }
    }

    pub fn start(&mut self) {
        if self.state == AnimationState::Idle {
            self.elapsed_s = 0.0;
            self.state = AnimationState::Running;
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn launch(&self) -> &Launch {
        &self.launch
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    pub fn ground_threshold(&self, x_m: f64) -> f64 {
        if x_m <= self.params.ledge_width_m {
            self.launch.initial_height_m
        } else {
            0.0
        }
    }

    pub fn tick(&mut self, stage: &mut dyn Stage) -> TickOutcome {
        if self.token.is_cancelled() {
            if self.state != AnimationState::Cancelled {
                debug!(ticks = self.ticks, "animation cancelled");
            }
            self.state = AnimationState::Cancelled;
            return TickOutcome::Cancelled;
        }
        if self.state != AnimationState::Running {
            return TickOutcome::Inactive;
        }

        self.elapsed_s += self.params.dt_s;
        self.ticks += 1;

        let (x, y) = self.launch.position_at(self.elapsed_s);
        let threshold_m = self.ground_threshold(x);
        let scale = self.params.pixels_per_meter;

        if y >= threshold_m {
            trace!(t = self.elapsed_s, x, y, "tick");
            stage.place_particle(x * scale, y * scale);
            let offset = self.params.trail_offset_px;
            stage.drop_marker(x * scale + offset, y * scale + offset);
            TickOutcome::Continue
        } else {
            stage.set_particle_bottom(threshold_m * scale);
            self.state = AnimationState::Stopped;
            debug!(
                t = self.elapsed_s,
                x,
                threshold_m,
                ticks = self.ticks,
                "particle landed"
            );
            TickOutcome::Landed { threshold_m }
        }
    }
}
