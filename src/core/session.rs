//! The controller that owns the input mode, the input fields, and the one
//! animation allowed to run at a time.

use tracing::debug;

use crate::core::animation::{Animation, AnimationState, CancelToken, TickOutcome, TickParams};
use crate::core::ballistics::{Launch, LaunchInput, Solution};
use crate::core::config::VisualizerConfig;
use crate::core::controls::{LinkedField, Sidebar};
use crate::core::error::{InputField, LaunchError};
use crate::core::frames::{FrameHandle, FrameQueue, FrameScheduler};
use crate::core::modes::{InputMode, read_field, switch_mode};
use crate::core::scene::Stage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldSlot {
    /// Speed in polar mode, vx in component mode.
    First,
    /// Angle in polar mode, vy in component mode.
    Second,
    Height,
}

struct ActiveFlight {
    animation: Animation,
    frame: Option<FrameHandle>,
}

pub struct Session {
    config: VisualizerConfig,
    mode: InputMode,
    first: LinkedField,
    second: LinkedField,
    height: LinkedField,
    sidebar: Sidebar,
    active: Option<ActiveFlight>,
    last_solution: Option<Solution>,
}

impl Session {
    pub fn new(config: VisualizerConfig) -> Self {
        let mode = InputMode::Polar;
        let (first_label, second_label) = mode.labels();
        let (first_range, second_range) = mode.ranges(&config.ranges);
        let defaults = config.defaults;
        Self {
            first: LinkedField::new(first_label, defaults.speed_mps, first_range),
            second: LinkedField::new(second_label, defaults.angle_deg, second_range),
            height: LinkedField::new("Height (m)", defaults.height_m, config.ranges.height),
            config,
            mode,
            sidebar: Sidebar::new(),
            active: None,
            last_solution: None,
        }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn sidebar(&self) -> Sidebar {
        self.sidebar
    }

    pub fn field(&self, slot: FieldSlot) -> &LinkedField {
        match slot {
            FieldSlot::First => &self.first,
            FieldSlot::Second => &self.second,
            FieldSlot::Height => &self.height,
        }
    }

    fn field_mut(&mut self, slot: FieldSlot) -> &mut LinkedField {
        match slot {
            FieldSlot::First => &mut self.first,
            FieldSlot::Second => &mut self.second,
            FieldSlot::Height => &mut self.height,
        }
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.active.as_ref().map(|flight| &flight.animation)
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animation()
            .map_or(AnimationState::Idle, Animation::state)
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.active.as_ref().and_then(|flight| flight.frame)
    }

    /// Results of the most recent successful launch, until reset.
    pub fn last_solution(&self) -> Option<&Solution> {
        self.last_solution.as_ref()
    }

    pub fn slider_edited(&mut self, slot: FieldSlot, value: f64, stage: &mut dyn Stage) {
        self.field_mut(slot).set_from_slider(value);
        if slot == FieldSlot::Height {
            self.height_changed(stage);
        }
    }

    pub fn text_edited(&mut self, slot: FieldSlot, text: &str, stage: &mut dyn Stage) {
        self.field_mut(slot).set_from_text(text);
        if slot == FieldSlot::Height {
            self.height_changed(stage);
        }
    }

    /// Raises the ledge to the current height and rests the particle on it.
    pub fn height_changed(&mut self, stage: &mut dyn Stage) {
        let Some(height_m) = self.height.value() else {
            return;
        };
        let height_px = height_m * self.config.pixels_per_meter;
        stage.set_ledge_height(height_px);
        stage.place_particle(0.0, height_px);
    }

    /// Starts a new throw from the current inputs, superseding any running one.
    ///
    /// Non-numeric input aborts after the previous animation is cancelled and the
    /// results are cleared; nothing else on the stage changes and no frame is
    /// requested.
    pub fn launch(
        &mut self,
        stage: &mut dyn Stage,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<Solution, LaunchError> {
        self.cancel_active(scheduler);
        stage.clear_results();
        self.last_solution = None;

        let (input, height_m) = match self.read_launch() {
            Ok(read) => read,
            Err(err) => {
                debug!(%err, "launch ignored");
                return Err(err);
            }
        };

        stage.set_particle_left(0.0);

        let launch = Launch::new(input, height_m, self.config.gravity_mps2);
        let solution = launch.solve().inspect_err(|err| debug!(%err, "launch ignored"))?;
        stage.show_results(solution.result_lines());
        self.last_solution = Some(solution);
        debug!(
            vx = solution.vx,
            vy = solution.vy,
            max_height_m = solution.max_height_m,
            flight_time_s = solution.flight_time_s,
            range_m = solution.range_m,
            "launched"
        );

        let mut animation =
            Animation::new(launch, TickParams::from(&self.config), CancelToken::new());
        animation.start();
        let frame = match animation.tick(stage) {
            TickOutcome::Continue => Some(scheduler.request_frame()),
            _ => None,
        };
        self.active = Some(ActiveFlight { animation, frame });
        Ok(solution)
    }

    /// Runs the tick scheduled under `handle`. Handles that do not belong to the
    /// current flight are ignored.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        stage: &mut dyn Stage,
        scheduler: &mut dyn FrameScheduler,
    ) -> TickOutcome {
        let Some(flight) = self.active.as_mut() else {
            return TickOutcome::Inactive;
        };
        if flight.frame != Some(handle) {
            debug!(%handle, "stale frame ignored");
            return TickOutcome::Inactive;
        }

        flight.frame = None;
        let outcome = flight.animation.tick(stage);
        if outcome == TickOutcome::Continue {
            flight.frame = Some(scheduler.request_frame());
        }
        outcome
    }

    /// Dispatches every frame due on this display refresh.
    pub fn pump(&mut self, queue: &mut FrameQueue, stage: &mut dyn Stage) -> usize {
        let due = queue.drain();
        for handle in &due {
            self.on_frame(*handle, stage, queue);
        }
        due.len()
    }

    pub fn reset(&mut self, stage: &mut dyn Stage, scheduler: &mut dyn FrameScheduler) {
        self.cancel_active(scheduler);
        self.last_solution = None;
        stage.clear_results();
        stage.clear_markers();
        self.height_changed(stage);
        debug!("session reset");
    }

    pub fn toggle_mode(&mut self) {
        self.mode = switch_mode(
            self.mode,
            &mut self.first,
            &mut self.second,
            &self.config.ranges,
        );
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    fn read_launch(&self) -> Result<(LaunchInput, f64), LaunchError> {
        let input = self.mode.read_input(&self.first, &self.second)?;
        let height_m = read_field(&self.height, InputField::Height)?;
        Ok((input, height_m))
    }

    fn cancel_active(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(flight) = self.active.take() {
            flight.animation.token().cancel();
            if let Some(frame) = flight.frame {
                scheduler.cancel_frame(frame);
                debug!(%frame, "in-flight animation cancelled");
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(VisualizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{PixelPoint, Scene};

    fn setup() -> (Session, Scene, FrameQueue) {
        let mut session = Session::default();
        let mut scene = Scene::new();
        session.height_changed(&mut scene);
        (session, scene, FrameQueue::new())
    }

    #[test]
    fn launch_shows_results_and_requests_one_frame() {
        let (mut session, mut scene, mut queue) = setup();

        let solution = session
            .launch(&mut scene, &mut queue)
            .expect("default inputs are valid");

        assert!((solution.range_m - 40.816).abs() < 0.001);
        assert_eq!(scene.results, solution.result_lines());
        assert_eq!(scene.markers.len(), 1);
        assert_eq!(queue.pending(), 1);
        assert_eq!(session.animation_state(), AnimationState::Running);
    }

    #[test]
    fn non_numeric_speed_aborts_silently() {
        let (mut session, mut scene, mut queue) = setup();
        session.text_edited(FieldSlot::First, "fast", &mut scene);

        let err = session
            .launch(&mut scene, &mut queue)
            .expect_err("speed is not numeric");

        assert!(matches!(
            err,
            LaunchError::NonNumeric {
                field: InputField::Speed,
                ..
            }
        ));
        assert!(scene.results.is_empty());
        assert!(scene.markers.is_empty());
        assert_eq!(queue.pending(), 0);
        assert!(session.animation().is_none());
    }

    #[test]
    fn relaunch_cancels_the_running_flight() {
        let (mut session, mut scene, mut queue) = setup();
        session.launch(&mut scene, &mut queue).expect("valid");
        let first_frame = session.pending_frame().expect("first flight is running");

        session.launch(&mut scene, &mut queue).expect("valid");

        assert!(!queue.is_pending(first_frame));
        assert_eq!(queue.pending(), 1);
        assert_eq!(
            session.on_frame(first_frame, &mut scene, &mut queue),
            TickOutcome::Inactive
        );
    }

    #[test]
    fn pumping_runs_the_flight_to_the_floor() {
        let (mut session, mut scene, mut queue) = setup();
        session.launch(&mut scene, &mut queue).expect("valid");

        let mut refreshes = 0;
        while session.pump(&mut queue, &mut scene) > 0 {
            refreshes += 1;
            assert!(queue.pending() <= 1);
        }

        assert_eq!(session.animation_state(), AnimationState::Stopped);
        assert_eq!(scene.particle.bottom, 0.0);
        assert_eq!(refreshes, 180);
        assert_eq!(scene.markers.len(), 180);
    }

    #[test]
    fn reset_clears_trail_and_rests_particle_on_ledge() {
        let (mut session, mut scene, mut queue) = setup();
        session.launch(&mut scene, &mut queue).expect("valid");
        session.pump(&mut queue, &mut scene);
        session.slider_edited(FieldSlot::Height, 4.0, &mut scene);

        session.reset(&mut scene, &mut queue);

        assert_eq!(queue.pending(), 0);
        assert!(scene.markers.is_empty());
        assert!(scene.results.is_empty());
        assert_eq!(scene.ledge_height_px, 40.0);
        assert_eq!(scene.particle, PixelPoint::new(0.0, 40.0));
        assert!(session.last_solution().is_none());
    }

    #[test]
    fn trail_accumulates_across_launches_until_reset() {
        let (mut session, mut scene, mut queue) = setup();
        session.launch(&mut scene, &mut queue).expect("valid");
        session.launch(&mut scene, &mut queue).expect("valid");
        assert_eq!(scene.markers.len(), 2);
    }

    #[test]
    fn component_mode_launch_uses_velocity_fields() {
        let (mut session, mut scene, mut queue) = setup();
        session.toggle_mode();
        assert_eq!(session.mode(), InputMode::Component);
        session.text_edited(FieldSlot::First, "10", &mut scene);
        session.text_edited(FieldSlot::Second, "0", &mut scene);
        session.text_edited(FieldSlot::Height, "5", &mut scene);

        let solution = session.launch(&mut scene, &mut queue).expect("valid");

        assert_eq!(solution.vx, 10.0);
        assert_eq!(solution.vy, 0.0);
        assert_eq!(solution.max_height_m, 5.0);
    }

    #[test]
    fn non_numeric_height_keeps_the_ledge() {
        let (mut session, mut scene, _queue) = setup();
        session.text_edited(FieldSlot::Height, "3", &mut scene);
        session.text_edited(FieldSlot::Height, "high", &mut scene);
        assert_eq!(scene.ledge_height_px, 30.0);
    }
}
