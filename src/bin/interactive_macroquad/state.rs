use parabolic_viz::core::config::VisualizerConfig;
use parabolic_viz::core::frames::FrameQueue;
use parabolic_viz::core::scene::Scene;
use parabolic_viz::core::session::Session;

pub(crate) struct AppRuntime {
    pub(crate) session: Session,
    pub(crate) scene: Scene,
    pub(crate) frames: FrameQueue,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new(config: VisualizerConfig) -> Self {
        let mut session = Session::new(config);
        let mut scene = Scene::new();
        session.height_changed(&mut scene);
        Self {
            session,
            scene,
            frames: FrameQueue::new(),
            status_line: "Ready".to_string(),
        }
    }

    /// Runs the animation callbacks due on this refresh.
    pub(crate) fn pump_frames(&mut self) {
        self.session.pump(&mut self.frames, &mut self.scene);
    }

    pub(crate) fn launch(&mut self) {
        self.status_line = match self.session.launch(&mut self.scene, &mut self.frames) {
            Ok(_) => "Launched".to_string(),
            Err(_) => "Ready".to_string(),
        };
    }

    pub(crate) fn reset(&mut self) {
        self.session.reset(&mut self.scene, &mut self.frames);
        self.status_line = "Reset".to_string();
    }
}
