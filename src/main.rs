mod app;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use eframe::egui::vec2;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use radial_flow::config::VisConfig;
use radial_flow::graph::GraphSpec;
use radial_flow::headless::run_headless;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file overriding style and timing defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for layout jitter and packet spawning
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 1440.0)]
    width: f32,

    #[arg(long, default_value_t = 920.0)]
    height: f32,

    #[arg(long)]
    edge_duration_ms: Option<f64>,

    #[arg(long)]
    spawn_probability: Option<f64>,

    #[arg(long)]
    show_fps: bool,

    /// Run this many frames without a window and print a summary
    #[arg(long)]
    headless_frames: Option<u64>,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn resolve_config(&self) -> Result<VisConfig> {
        let mut config = match &self.config {
            Some(path) => VisConfig::load(path)?,
            None => VisConfig::default(),
        };

        if let Some(duration) = self.edge_duration_ms {
            config.edge_duration_ms = duration;
        }
        if let Some(probability) = self.spawn_probability {
            config.spawn_probability = probability;
        }
        config.show_fps |= self.show_fps;

        config
            .validate()
            .context("invalid command line overrides")?;
        Ok(config)
    }
}

fn setup_logging(verbosity: u8) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    if let Ok(env_filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::registry()
            .with(fmt_layer.with_filter(env_filter))
            .init();
        return;
    }

    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(level))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = args.resolve_config()?;
    let graph = GraphSpec::builtin()?;
    info!(
        nodes = graph.node_count(),
        leaves = graph.leaf_count(),
        "loaded built-in graph"
    );

    if let Some(frames) = args.headless_frames {
        let summary = run_headless(
            graph,
            vec2(args.width, args.height),
            config,
            frames,
            args.seed,
        );
        println!(
            "frames: {} | spawned: {} | retired: {} | live: {} | draw calls: {}",
            summary.frames,
            summary.spawned,
            summary.retired,
            summary.live,
            summary.last_frame_draw_calls
        );
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([args.width, args.height]),
        ..Default::default()
    };
    let seed = args.seed;

    eframe::run_native(
        "radial-flow",
        options,
        Box::new(move |cc| Ok(Box::new(app::RadialFlowApp::new(cc, graph, config, seed)))),
    )
    .map_err(|error| anyhow!("failed to run the diagram window: {error}"))
}
