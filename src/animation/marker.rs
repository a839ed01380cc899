use eframe::egui::Vec2;

use crate::graph::{NodeId, PlacedTree};
use crate::util::interpolate;

/// A packet walking from a leaf towards the root, one edge at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    node: NodeId,
    segment_start: Option<f64>,
    hops: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkerStep {
    Moving(Vec2),
    Retired,
}

impl Marker {
    pub fn new(node: NodeId) -> Self {
        Self {
            node,
            segment_start: None,
            hops: 0,
        }
    }

    /// Node whose edge to its parent is being traversed.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn segment_start(&self) -> Option<f64> {
        self.segment_start
    }

    /// Number of edges completed so far.
    pub fn hops(&self) -> usize {
        self.hops
    }

    /// Fraction of the current edge covered at `time`. Zero before the first step.
    pub fn progress(&self, time: f64, edge_duration_ms: f64) -> f64 {
        match self.segment_start {
            Some(start) => ((time - start) / edge_duration_ms).max(0.0),
            None => 0.0,
        }
    }

    /// Advances the marker to `time` and returns where to draw it.
    ///
    /// At most one edge is completed per call. The marker retires when the
    /// node it would continue from has no parent.
    pub fn step(&mut self, tree: &PlacedTree, time: f64, edge_duration_ms: f64) -> MarkerStep {
        self.segment_start.get_or_insert(time);
        let mut fraction = self.progress(time, edge_duration_ms);

        if fraction > 1.0 {
            let Some(parent) = tree.parent(self.node) else {
                return MarkerStep::Retired;
            };
            self.node = parent;
            self.hops += 1;
            self.segment_start = Some(time);
            fraction = 0.0;
        }

        let Some(parent) = tree.parent(self.node) else {
            return MarkerStep::Retired;
        };

        MarkerStep::Moving(interpolate(
            tree.node(self.node).centre,
            tree.node(parent).centre,
            fraction as f32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::FontId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::graph::GraphSpec;
    use crate::layout::{LayoutOrigin, layout};
    use crate::surface::FixedWidthMeasure;

    const EDGE_MS: f64 = 700.0;

    fn chain(depth: usize) -> GraphSpec {
        (0..depth).rev().fold(GraphSpec::leaf(format!("n{depth}")), |child, level| {
            GraphSpec::branch(format!("n{level}"), vec![child])
        })
    }

    fn placed(graph: &GraphSpec) -> PlacedTree {
        let mut rng = StdRng::seed_from_u64(1);
        layout(
            graph,
            LayoutOrigin {
                centre: Vec2::ZERO,
                angle: 0.0,
                radius: 200.0,
            },
            &FontId::proportional(12.0),
            &FixedWidthMeasure::default(),
            &mut rng,
        )
    }

    #[test]
    fn first_step_starts_the_segment_at_the_leaf() {
        let tree = placed(&chain(2));
        let leaf = tree.leaves()[0];
        let mut marker = Marker::new(leaf);
        assert_eq!(marker.segment_start(), None);
        assert_eq!(marker.progress(123.0, EDGE_MS), 0.0);

        let step = marker.step(&tree, 1_000.0, EDGE_MS);
        assert_eq!(marker.segment_start(), Some(1_000.0));
        assert_eq!(step, MarkerStep::Moving(tree.node(leaf).centre));
    }

    #[test]
    fn progress_is_monotonic_within_a_segment() {
        let tree = placed(&chain(3));
        let mut marker = Marker::new(tree.leaves()[0]);
        marker.step(&tree, 0.0, EDGE_MS);

        let mut last = marker.progress(0.0, EDGE_MS);
        for time in (1..=70).map(|tick| tick as f64 * 10.0) {
            let fraction = marker.progress(time, EDGE_MS);
            assert!(fraction >= last);
            last = fraction;
        }
        assert!((last - 1.0).abs() < 1e-9);
    }

    #[test]
    fn midpoint_is_halfway_along_the_edge() {
        let tree = placed(&chain(1));
        let leaf = tree.leaves()[0];
        let mut marker = Marker::new(leaf);
        marker.step(&tree, 0.0, EDGE_MS);

        let MarkerStep::Moving(position) = marker.step(&tree, EDGE_MS / 2.0, EDGE_MS) else {
            panic!("marker retired early");
        };
        let expected = (tree.node(leaf).centre + tree.node(tree.root()).centre) / 2.0;
        assert!((position - expected).length() < 1e-3);
    }

    #[test]
    fn exactly_one_fraction_does_not_advance() {
        let tree = placed(&chain(2));
        let leaf = tree.leaves()[0];
        let mut marker = Marker::new(leaf);
        marker.step(&tree, 0.0, EDGE_MS);
        marker.step(&tree, EDGE_MS, EDGE_MS);
        assert_eq!(marker.node(), leaf);
        assert_eq!(marker.hops(), 0);
    }

    #[test]
    fn advances_one_edge_per_step_even_after_a_long_gap() {
        let tree = placed(&chain(3));
        let mut marker = Marker::new(tree.leaves()[0]);
        marker.step(&tree, 0.0, EDGE_MS);
        marker.step(&tree, 100_000.0, EDGE_MS);
        assert_eq!(marker.hops(), 1);
        assert_eq!(marker.segment_start(), Some(100_000.0));
    }

    #[test]
    fn marker_on_parentless_root_retires_immediately() {
        let tree = placed(&GraphSpec::leaf("alone"));
        let mut marker = Marker::new(tree.root());
        assert_eq!(marker.step(&tree, 0.0, EDGE_MS), MarkerStep::Retired);
        assert_eq!(marker.hops(), 0);
    }
}
