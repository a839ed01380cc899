use eframe::egui::Vec2;

/// Pre-order index of a node inside a [`PlacedTree`].
///
/// Laying out the same graph twice yields the same ids, so ids survive a re-layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Where a node's name is drawn: top-left anchor and rotation in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub anchor: Vec2,
    pub angle: f32,
}

#[derive(Clone, Debug)]
pub struct TreeNode {
    pub name: String,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub centre: Vec2,
    pub depth: usize,
    pub label: LabelPlacement,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A fully laid-out tree. Only the layout pass builds one, so every node
/// always carries its centre, depth, label and parent link.
#[derive(Clone, Debug)]
pub struct PlacedTree {
    pub(crate) nodes: Vec<TreeNode>,
    pub(crate) leaves: Vec<NodeId>,
}

impl PlacedTree {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Leaf registry of the last layout pass, in pre-order.
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.name == name)
            .map(NodeId)
    }

    /// Ids on the way from `id` up to the root, starting with `id`.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            path.push(current);
            cursor = self.parent(current);
        }
        path
    }
}
