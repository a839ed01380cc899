use eframe::egui::{FontId, Pos2, Rect, Vec2};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use super::clock::FrameClock;
use super::marker::{Marker, MarkerStep};
use crate::config::VisConfig;
use crate::graph::{GraphSpec, NodeId, PlacedTree};
use crate::layout::{LayoutOrigin, layout};
use crate::surface::{Surface, TextMeasure};

const VIEWPORT_MARGIN: f32 = 10.0;
const LAYOUT_RADIUS_SCALE: f32 = 0.6;
const NODE_RADIUS: f32 = 20.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub frames: u64,
    pub spawned: u64,
    pub retired: u64,
}

/// Owns the laid-out tree and the live markers, and draws one frame per tick.
pub struct AnimationDriver<R> {
    graph: GraphSpec,
    tree: PlacedTree,
    markers: Vec<Marker>,
    config: VisConfig,
    viewport: Vec2,
    rng: R,
    stats: DriverStats,
}

impl<R: Rng> AnimationDriver<R> {
    /// Lays `graph` out for a surface of `viewport` size.
    pub fn new<M: TextMeasure + ?Sized>(
        graph: GraphSpec,
        viewport: Vec2,
        config: VisConfig,
        measure: &M,
        mut rng: R,
    ) -> Self {
        let tree = layout(
            &graph,
            layout_origin(viewport),
            &config.font(),
            measure,
            &mut rng,
        );
        debug!(
            nodes = tree.len(),
            leaves = tree.leaves().len(),
            width = viewport.x,
            height = viewport.y,
            "animation driver ready"
        );

        Self {
            graph,
            tree,
            markers: Vec::new(),
            config,
            viewport,
            rng,
            stats: DriverStats::default(),
        }
    }

    pub fn tree(&self) -> &PlacedTree {
        &self.tree
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn config(&self) -> &VisConfig {
        &self.config
    }

    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    /// Lays the tree out again with fresh randomness. Live markers keep their
    /// node ids and continue on the new geometry.
    pub fn relayout<M: TextMeasure + ?Sized>(&mut self, measure: &M) {
        self.tree = layout(
            &self.graph,
            layout_origin(self.viewport),
            &self.config.font(),
            measure,
            &mut self.rng,
        );
        debug!(markers = self.markers.len(), "relayout complete");
    }

    pub fn spawn_at(&mut self, leaf: NodeId) {
        trace!(leaf = leaf.index(), "spawning marker");
        self.markers.push(Marker::new(leaf));
        self.stats.spawned += 1;
    }

    /// Spawns a marker at a random leaf with the configured probability.
    pub fn maybe_spawn(&mut self) -> Option<NodeId> {
        if self.rng.gen_range(0.0..1.0) >= self.config.spawn_probability {
            return None;
        }
        let leaf = self.tree.leaves().choose(&mut self.rng).copied()?;
        self.spawn_at(leaf);
        Some(leaf)
    }

    /// Draws one frame at `time` (milliseconds) and updates the marker set.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S, time: f64) {
        surface.begin_frame();
        surface.fill_rect(
            Rect::from_min_size(Pos2::ZERO, surface.size()),
            self.config.background.color(),
        );

        let offset = self.viewport * 0.5;
        let font = self.config.font();
        draw_edges_and_nodes(surface, &self.tree, self.tree.root(), offset, &self.config);
        draw_labels(surface, &self.tree, self.tree.root(), offset, &self.config, &font);

        let tree = &self.tree;
        let duration = self.config.edge_duration_ms;
        let radius = self.config.marker_radius;
        let color = self.config.marker_color.color();
        let mut retired = 0;
        self.markers
            .retain_mut(|marker| match marker.step(tree, time, duration) {
                MarkerStep::Moving(position) => {
                    surface.circle((offset + position).to_pos2(), radius, color);
                    true
                }
                MarkerStep::Retired => {
                    trace!(hops = marker.hops(), "marker reached the root");
                    retired += 1;
                    false
                }
            });
        self.stats.retired += retired;

        self.maybe_spawn();
        self.stats.frames += 1;
    }

    /// Drives ticks until `clock` runs out and returns the number of frames drawn.
    pub fn run<S, C>(&mut self, surface: &mut S, clock: &mut C) -> u64
    where
        S: Surface + ?Sized,
        C: FrameClock + ?Sized,
    {
        let mut frames = 0;
        while let Some(time) = clock.next_frame() {
            self.tick(surface, time);
            frames += 1;
        }
        frames
    }
}

fn layout_origin(viewport: Vec2) -> LayoutOrigin {
    let radius = (viewport.min_elem() / 2.0 - VIEWPORT_MARGIN).max(0.0);
    LayoutOrigin {
        centre: Vec2::ZERO,
        angle: 0.0,
        radius: radius * LAYOUT_RADIUS_SCALE,
    }
}

pub fn node_radius(depth: usize) -> f32 {
    NODE_RADIUS / (depth as f32 + 1.0)
}

fn draw_edges_and_nodes<S: Surface + ?Sized>(
    surface: &mut S,
    tree: &PlacedTree,
    id: NodeId,
    offset: Vec2,
    config: &VisConfig,
) {
    let node = tree.node(id);
    let centre = (offset + node.centre).to_pos2();
    for &child in &node.children {
        surface.line(
            centre,
            (offset + tree.node(child).centre).to_pos2(),
            config.edge_stroke(),
        );
        draw_edges_and_nodes(surface, tree, child, offset, config);
    }
    surface.circle(centre, node_radius(node.depth), config.node_color.color());
}

fn draw_labels<S: Surface + ?Sized>(
    surface: &mut S,
    tree: &PlacedTree,
    id: NodeId,
    offset: Vec2,
    config: &VisConfig,
    font: &FontId,
) {
    let node = tree.node(id);
    surface.text(
        (offset + node.label.anchor).to_pos2(),
        node.label.angle,
        &node.name,
        font,
        config.text_color.color(),
    );
    for &child in &node.children {
        draw_labels(surface, tree, child, offset, config, font);
    }
}
