use eframe::egui::{self, Context, Sense};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use radial_flow::animation::AnimationDriver;
use radial_flow::config::VisConfig;
use radial_flow::graph::GraphSpec;

mod fps;
mod painter_surface;

use fps::FpsCounter;
use painter_surface::PainterSurface;

pub struct RadialFlowApp {
    config: VisConfig,
    seed: Option<u64>,
    state: AppState,
    fps: FpsCounter,
}

enum AppState {
    /// Waiting for the first frame, where the panel size and fonts are known.
    Pending { graph: GraphSpec },
    Running(Box<AnimationDriver<StdRng>>),
}

impl RadialFlowApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        graph: GraphSpec,
        config: VisConfig,
        seed: Option<u64>,
    ) -> Self {
        Self {
            config,
            seed,
            state: AppState::Pending { graph },
            fps: FpsCounter::default(),
        }
    }

    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl eframe::App for RadialFlowApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let (time_secs, dt) = ctx.input(|input| (input.time, input.stable_dt));
        self.fps.record(dt);

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
            let painter = ui.painter_at(rect);
            let mut surface = PainterSurface::new(&painter, rect);

            if let AppState::Pending { graph } = &self.state {
                info!(
                    width = rect.width(),
                    height = rect.height(),
                    "laying out diagram"
                );
                let driver = AnimationDriver::new(
                    graph.clone(),
                    rect.size(),
                    self.config.clone(),
                    &surface,
                    self.make_rng(),
                );
                self.state = AppState::Running(Box::new(driver));
            }

            if let AppState::Running(driver) = &mut self.state {
                driver.tick(&mut surface, time_secs * 1000.0);
            }

            if self.config.show_fps {
                self.fps
                    .paint(&painter, rect, self.config.text_color.color());
            }
        });

        ctx.request_repaint();
    }
}
