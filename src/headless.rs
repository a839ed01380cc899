use eframe::egui::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::animation::{AnimationDriver, SteppedClock};
use crate::config::VisConfig;
use crate::graph::GraphSpec;
use crate::surface::{FixedWidthMeasure, RecordingSurface};

const HEADLESS_HZ: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub frames: u64,
    pub spawned: u64,
    pub retired: u64,
    pub live: usize,
    pub last_frame_draw_calls: usize,
}

/// Runs `frames` ticks at 60 Hz without a window.
pub fn run_headless(
    graph: GraphSpec,
    viewport: Vec2,
    config: VisConfig,
    frames: u64,
    seed: Option<u64>,
) -> HeadlessSummary {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut driver =
        AnimationDriver::new(graph, viewport, config, &FixedWidthMeasure::default(), rng);
    let mut surface = RecordingSurface::new(viewport);
    let mut clock = SteppedClock::at_hz(HEADLESS_HZ, frames);
    driver.run(&mut surface, &mut clock);

    let stats = driver.stats();
    let summary = HeadlessSummary {
        frames: stats.frames,
        spawned: stats.spawned,
        retired: stats.retired,
        live: driver.markers().len(),
        last_frame_draw_calls: surface.commands().len(),
    };
    info!(
        frames = summary.frames,
        spawned = summary.spawned,
        retired = summary.retired,
        live = summary.live,
        draw_calls = summary.last_frame_draw_calls,
        "headless run finished"
    );
    summary
}
