use std::f32::consts::{PI, TAU};

use eframe::egui::{FontId, Vec2, vec2};
use rand::Rng;
use tracing::debug;

use crate::graph::{GraphSpec, LabelPlacement, NodeId, PlacedTree, TreeNode};
use crate::surface::TextMeasure;
use crate::util::{polar, rand_between};

const LABEL_LIFT: f32 = 20.0;
const LABEL_JITTER: f32 = 0.1;
const ANGLE_JITTER: f32 = 0.2;
const INNER_RADIUS_SCALE: f32 = 0.7;
const ROOT_BRANCH_RADIUS_SCALE: f32 = 0.8;
const MIN_RADIUS_FRACTION: f32 = 0.7;

/// Starting point of a layout pass.
#[derive(Clone, Copy, Debug)]
pub struct LayoutOrigin {
    pub centre: Vec2,
    pub angle: f32,
    pub radius: f32,
}

/// Angular budget split among the children of a node.
///
/// Children with their own children count twice, and every non-root node
/// reserves one extra segment for the edge it was reached from.
pub fn segment_count(graph: &GraphSpec, depth: usize) -> usize {
    let branches = graph.children.iter().filter(|child| !child.is_leaf()).count();
    graph.children.len() + branches + usize::from(depth > 0)
}

/// Width of one slot. A lone child gets a random slot in `[π/2, 3π/2)` so
/// chains never collapse into a straight line.
pub fn slot_width<R: Rng + ?Sized>(child_count: usize, segments: usize, rng: &mut R) -> f32 {
    if child_count > 1 {
        TAU / segments as f32
    } else {
        rand_between(rng, PI / 2.0, PI * 1.5)
    }
}

pub fn radius_limit(radius: f32, depth: usize, child_is_branch: bool) -> f32 {
    let scale = if depth > 0 {
        INNER_RADIUS_SCALE
    } else if child_is_branch {
        ROOT_BRANCH_RADIUS_SCALE
    } else {
        1.0
    };
    radius * scale
}

/// Places every node of `graph` around `origin.centre` and returns the
/// resulting tree together with its leaf registry.
pub fn layout<M, R>(
    graph: &GraphSpec,
    origin: LayoutOrigin,
    font: &FontId,
    measure: &M,
    rng: &mut R,
) -> PlacedTree
where
    M: TextMeasure + ?Sized,
    R: Rng + ?Sized,
{
    let mut placer = Placer {
        nodes: Vec::with_capacity(graph.node_count()),
        leaves: Vec::new(),
        font,
        measure,
        rng,
    };
    placer.place(graph, None, origin.centre, origin.angle, origin.radius, 0);

    debug!(
        nodes = placer.nodes.len(),
        leaves = placer.leaves.len(),
        "layout pass complete"
    );

    PlacedTree {
        nodes: placer.nodes,
        leaves: placer.leaves,
    }
}

struct Placer<'a, M: ?Sized, R: ?Sized> {
    nodes: Vec<TreeNode>,
    leaves: Vec<NodeId>,
    font: &'a FontId,
    measure: &'a M,
    rng: &'a mut R,
}

impl<M, R> Placer<'_, M, R>
where
    M: TextMeasure + ?Sized,
    R: Rng + ?Sized,
{
    fn label_for(&mut self, name: &str, centre: Vec2, depth: usize) -> LabelPlacement {
        let name_width = self.measure.text_width(name, self.font);
        LabelPlacement {
            anchor: vec2(
                centre.x - name_width / 2.0,
                centre.y - LABEL_LIFT / (depth as f32 + 1.0),
            ),
            angle: rand_between(self.rng, -LABEL_JITTER, LABEL_JITTER),
        }
    }

    fn place(
        &mut self,
        graph: &GraphSpec,
        parent: Option<NodeId>,
        centre: Vec2,
        angle: f32,
        radius: f32,
        depth: usize,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let label = self.label_for(&graph.name, centre, depth);
        self.nodes.push(TreeNode {
            name: graph.name.clone(),
            children: Vec::with_capacity(graph.children.len()),
            parent,
            centre,
            depth,
            label,
        });

        if graph.is_leaf() {
            self.leaves.push(id);
            return id;
        }

        let segments = segment_count(graph, depth);
        debug!(node = %graph.name, segments, "placing children");

        let sector = slot_width(graph.children.len(), segments, self.rng);
        let mut cursor = angle + PI;
        for child in &graph.children {
            let branch = !child.is_leaf();
            let span = if branch { 2.0 * sector } else { sector };

            cursor = (cursor + span).rem_euclid(TAU);
            let pull_back = if branch { sector / 2.0 } else { 0.0 };
            let child_angle =
                cursor - pull_back + rand_between(self.rng, -ANGLE_JITTER, ANGLE_JITTER);

            let limit = radius_limit(radius, depth, branch);
            let length = rand_between(self.rng, limit * MIN_RADIUS_FRACTION, limit);

            let child_id = self.place(
                child,
                Some(id),
                polar(centre, child_angle, length),
                child_angle,
                length,
                depth + 1,
            );
            self.nodes[id.0].children.push(child_id);
        }

        id
    }
}
