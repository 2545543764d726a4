//! Node, link and graph records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::{LinkIndex, NodeIndex};
use crate::error::{Endpoint, GraphError, Result};

/// A labeled vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Display identifier, not guaranteed unique
    pub name: String,
    /// Categorical tag used for classification or styling
    pub class: String,
    /// Cluster/partition identifier (e.g. for coloring)
    pub group: u32,
}

impl Node {
    pub fn new(name: impl Into<String>, class: impl Into<String>, group: u32) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            group,
        }
    }
}

/// An edge between two nodes of the owning graph, referenced by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Origin node
    pub source: NodeIndex,
    /// Destination node
    pub target: NodeIndex,
    /// Weight or magnitude (e.g. strength, stroke width)
    pub value: f64,
    /// Categorical tag describing the edge's role
    #[serde(rename = "type")]
    pub kind: String,
}

impl Link {
    pub fn new(source: usize, target: usize, value: f64, kind: impl Into<String>) -> Self {
        Self {
            source: NodeIndex(source),
            target: NodeIndex(target),
            value,
            kind: kind.into(),
        }
    }

    /// Check if the link starts and ends on the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Check both endpoints against a node count.
    ///
    /// `at` is the position the link has (or will have) in its graph, used
    /// only for the error report.
    pub fn check_bounds(&self, at: LinkIndex, node_count: usize) -> Result<()> {
        for (endpoint, node) in [(Endpoint::Source, self.source), (Endpoint::Target, self.target)] {
            if node.0 >= node_count {
                return Err(GraphError::dangling(at, endpoint, node.0, node_count));
            }
        }
        Ok(())
    }
}

/// A node-link graph.
///
/// The graph owns both sequences; every link endpoint is guaranteed to be a
/// valid position in [`Graph::nodes`]. Nodes cannot be removed, since that
/// would shift the positions links refer to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphRepr")]
pub struct Graph {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

/// Alternate name for [`Graph`]; both accept exactly the same data.
pub type GraphData = Graph;

/// Unchecked wire form, converted through [`Graph::new`].
#[derive(Deserialize)]
struct GraphRepr {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

impl TryFrom<GraphRepr> for Graph {
    type Error = GraphError;

    fn try_from(repr: GraphRepr) -> Result<Self> {
        Graph::new(repr.nodes, repr.links)
    }
}

impl Graph {
    /// Build a graph from complete node and link sequences.
    ///
    /// Fails on the first link whose source or target is out of range.
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> Result<Self> {
        for (i, link) in links.iter().enumerate() {
            link.check_bounds(LinkIndex(i), nodes.len())?;
        }
        Ok(Self { nodes, links })
    }

    /// A graph with no nodes and no links.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a node, returning its position.
    pub fn push_node(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        NodeIndex(self.nodes.len() - 1)
    }

    /// Append a link after checking its endpoints.
    pub fn push_link(&mut self, link: Link) -> Result<LinkIndex> {
        let at = LinkIndex(self.links.len());
        link.check_bounds(at, self.nodes.len())?;
        self.links.push(link);
        Ok(at)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.0)
    }

    pub fn link(&self, index: LinkIndex) -> Option<&Link> {
        self.links.get(index.0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// True when the graph has no nodes (and therefore no links).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolve a link's endpoints to node records.
    ///
    /// Returns `None` only for a link that does not belong to this graph and
    /// points past its nodes.
    pub fn endpoints(&self, link: &Link) -> Option<(&Node, &Node)> {
        Some((self.node(link.source)?, self.node(link.target)?))
    }

    /// Links leaving `node`, in link order.
    pub fn links_from(&self, node: NodeIndex) -> impl Iterator<Item = (LinkIndex, &Link)> + '_ {
        self.indexed_links().filter(move |(_, l)| l.source == node)
    }

    /// Links arriving at `node`, in link order.
    pub fn links_to(&self, node: NodeIndex) -> impl Iterator<Item = (LinkIndex, &Link)> + '_ {
        self.indexed_links().filter(move |(_, l)| l.target == node)
    }

    /// Nodes connected to `node` in either direction.
    ///
    /// A self-loop makes a node its own neighbor.
    pub fn neighbors(&self, node: NodeIndex) -> BTreeSet<NodeIndex> {
        let mut out = BTreeSet::new();
        for link in &self.links {
            if link.source == node {
                out.insert(link.target);
            }
            if link.target == node {
                out.insert(link.source);
            }
        }
        out
    }

    /// Position of the first node with the given name.
    pub fn find_node(&self, name: &str) -> Option<NodeIndex> {
        self.nodes.iter().position(|n| n.name == name).map(NodeIndex)
    }

    /// Give up the sequences.
    pub fn into_parts(self) -> (Vec<Node>, Vec<Link>) {
        (self.nodes, self.links)
    }

    fn indexed_links(&self) -> impl Iterator<Item = (LinkIndex, &Link)> + '_ {
        self.links.iter().enumerate().map(|(i, l)| (LinkIndex(i), l))
    }
}
