//! Graph validation.
//!
//! A [`Graph`] is always index-valid, so the checks here are policy rules
//! a producer or consumer may want on top of the shape.

use std::collections::HashMap;

use log::debug;
use serde::Deserialize;

use super::{Graph, LinkIndex, NodeIndex};
use crate::error::{GraphError, Result};

/// Which optional rules to enforce.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Accept links whose source equals their target.
    pub allow_self_loops: bool,
    /// Accept several nodes with the same name.
    pub allow_duplicate_names: bool,
    /// Reject NaN and infinite link values.
    pub require_finite_values: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allow_self_loops: true,
            allow_duplicate_names: true,
            require_finite_values: true,
        }
    }
}

impl ValidationConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }

    pub fn with_duplicate_names(mut self, allow: bool) -> Self {
        self.allow_duplicate_names = allow;
        self
    }

    pub fn with_finite_values(mut self, require: bool) -> Self {
        self.require_finite_values = require;
        self
    }
}

/// Validate a graph with the default configuration.
pub fn validate_graph(graph: &Graph) -> Result<()> {
    validate_with(graph, &ValidationConfig::default())
}

/// Validate a graph, stopping at the first problem.
pub fn validate_with(graph: &Graph, config: &ValidationConfig) -> Result<()> {
    match find_issues(graph, config).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Collect every problem in the graph.
///
/// Node problems come first (in node order), then link problems (in link
/// order).
pub fn find_issues(graph: &Graph, config: &ValidationConfig) -> Vec<GraphError> {
    let mut issues = Vec::new();

    if !config.allow_duplicate_names {
        let mut seen: HashMap<&str, NodeIndex> = HashMap::new();
        for (i, node) in graph.nodes().iter().enumerate() {
            match seen.get(node.name.as_str()) {
                Some(&first) => issues.push(GraphError::DuplicateName {
                    name: node.name.clone(),
                    first,
                    duplicate: NodeIndex(i),
                }),
                None => {
                    seen.insert(&node.name, NodeIndex(i));
                }
            }
        }
    }

    for (i, link) in graph.links().iter().enumerate() {
        let at = LinkIndex(i);

        if !config.allow_self_loops && link.is_self_loop() {
            issues.push(GraphError::SelfLoop {
                link: at,
                node: link.source,
            });
        }

        if config.require_finite_values && !link.value.is_finite() {
            issues.push(GraphError::NonFiniteValue {
                link: at,
                value: link.value,
            });
        }
    }

    debug!(
        "validated graph: {} nodes, {} links, {} issues",
        graph.node_count(),
        graph.link_count(),
        issues.len()
    );

    issues
}
