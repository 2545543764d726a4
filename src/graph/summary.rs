//! Aggregate counts over a graph.

use std::collections::BTreeMap;
use std::fmt;

use super::Graph;

/// Counts describing a graph's composition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphSummary {
    pub node_count: usize,
    pub link_count: usize,
    /// Nodes per group id
    pub groups: BTreeMap<u32, usize>,
    /// Nodes per class tag
    pub classes: BTreeMap<String, usize>,
    /// Links per type tag
    pub link_types: BTreeMap<String, usize>,
    pub self_loops: usize,
    /// Nodes touched by no link
    pub isolated_nodes: usize,
    /// Sum of all link values
    pub total_value: f64,
}

impl GraphSummary {
    pub fn of(graph: &Graph) -> Self {
        let mut summary = GraphSummary {
            node_count: graph.node_count(),
            link_count: graph.link_count(),
            ..Default::default()
        };

        for node in graph.nodes() {
            *summary.groups.entry(node.group).or_default() += 1;
            *summary.classes.entry(node.class.clone()).or_default() += 1;
        }

        let mut touched = vec![false; graph.node_count()];
        for link in graph.links() {
            *summary.link_types.entry(link.kind.clone()).or_default() += 1;
            summary.total_value += link.value;
            if link.is_self_loop() {
                summary.self_loops += 1;
            }
            // Endpoints are in range for any Graph.
            for end in [link.source, link.target] {
                if let Some(flag) = touched.get_mut(end.0) {
                    *flag = true;
                }
            }
        }
        summary.isolated_nodes = touched.iter().filter(|t| !**t).count();

        summary
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes:          {}", self.node_count)?;
        writeln!(f, "links:          {}", self.link_count)?;
        writeln!(f, "self-loops:     {}", self.self_loops)?;
        writeln!(f, "isolated nodes: {}", self.isolated_nodes)?;
        writeln!(f, "total value:    {}", self.total_value)?;

        writeln!(f, "groups:")?;
        for (group, count) in &self.groups {
            writeln!(f, "  {group}: {count}")?;
        }
        writeln!(f, "classes:")?;
        for (class, count) in &self.classes {
            writeln!(f, "  {class}: {count}")?;
        }
        writeln!(f, "link types:")?;
        for (kind, count) in &self.link_types {
            writeln!(f, "  {kind}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::graph::{Link, Node};

    #[test]
    fn test_summary_counts() {
        let nodes = vec![
            Node::new("A", "root", 0),
            Node::new("B", "leaf", 1),
            Node::new("C", "leaf", 1),
            Node::new("D", "leaf", 2),
        ];
        let links = vec![
            Link::new(0, 1, 1.5, "default"),
            Link::new(0, 2, 2.0, "default"),
            Link::new(2, 2, 0.25, "loop"),
        ];
        let graph = Graph::new(nodes, links).unwrap();
        let summary = GraphSummary::of(&graph);

        assert_eq!(summary.node_count, 4);
        assert_eq!(summary.link_count, 3);
        assert_eq!(summary.groups[&1], 2);
        assert_eq!(summary.classes["leaf"], 3);
        assert_eq!(summary.link_types["default"], 2);
        assert_eq!(summary.self_loops, 1);
        assert_eq!(summary.isolated_nodes, 1);
        assert_relative_eq!(summary.total_value, 3.75);
    }

    #[test]
    fn test_empty_summary() {
        let summary = GraphSummary::of(&Graph::empty());
        assert_eq!(summary, GraphSummary::default());
        assert!(summary.to_string().contains("nodes:          0"));
    }
}
