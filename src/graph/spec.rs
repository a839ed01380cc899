use anyhow::{Context, Result};
use serde::Deserialize;

const BUILTIN_GRAPH: &str = include_str!("default_graph.json");

/// Hand-authored hierarchy the diagram is drawn from.
///
/// A missing or empty `children` list makes the node a leaf.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GraphSpec {
    pub name: String,
    #[serde(default)]
    pub children: Vec<GraphSpec>,
}

impl GraphSpec {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn branch(name: impl Into<String>, children: Vec<GraphSpec>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// The demo plant hierarchy compiled into the binary.
    pub fn builtin() -> Result<Self> {
        serde_json::from_str(BUILTIN_GRAPH).context("built-in graph literal is not valid JSON")
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Self::leaf_count).sum()
        }
    }
}
