//! JSON encoding and decoding of graphs.
//!
//! The document shape is:
//!
//! ```text
//! {
//!   "nodes": [ { "name": string, "class": string, "group": integer }, ... ],
//!   "links": [ { "source": integer, "target": integer, "value": number, "type": string }, ... ]
//! }
//! ```
//!
//! `source` and `target` are positions in `nodes`. Fields not listed above
//! are ignored on input and never written on output.
//!
//! # Example
//!
//! ```
//! let graph = nodelink::codec::parse(r#"{
//!     "nodes": [
//!         {"name": "A", "class": "root", "group": 0},
//!         {"name": "B", "class": "leaf", "group": 1}
//!     ],
//!     "links": [{"source": 0, "target": 1, "value": 1.0, "type": "default"}]
//! }"#).unwrap();
//! assert_eq!(graph.link_count(), 1);
//! ```

mod decode;

pub use decode::decode;

use log::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, LinkIndex};

/// Parse a JSON string into a graph.
///
/// Accepts exactly what deserializing [`Graph`] with serde accepts. When the
/// input is rejected, the document is walked again to report the offending
/// field by path; anything the walk cannot pin down (such as a repeated key)
/// is reported as [`GraphError::Malformed`].
pub fn parse(input: &str) -> Result<Graph> {
    let graph = match serde_json::from_str::<Graph>(input) {
        Ok(graph) => graph,
        Err(err) if err.is_syntax() || err.is_eof() => {
            return Err(GraphError::from_json_input(err))
        }
        Err(err) => return Err(explain(input, err)),
    };
    debug!(
        "decoded graph with {} nodes and {} links",
        graph.node_count(),
        graph.link_count()
    );
    Ok(graph)
}

fn explain(input: &str, err: serde_json::Error) -> GraphError {
    let detailed = serde_json::from_str::<serde_json::Value>(input)
        .map_err(GraphError::from_json_input)
        .and_then(|value| decode(&value));
    match detailed {
        Err(precise) => precise,
        Ok(_) => GraphError::from_json_input(err),
    }
}

/// Parse a JSON graph file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Graph> {
    let content = std::fs::read_to_string(path).map_err(|e| GraphError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}

/// Encode a graph as compact JSON.
///
/// JSON has no representation for NaN or infinity, so a graph holding such
/// a link value is rejected instead of being written lossily.
pub fn to_json(graph: &Graph) -> Result<String> {
    ensure_encodable(graph)?;
    serde_json::to_string(graph).map_err(GraphError::from_json_output)
}

/// Encode a graph as indented JSON.
pub fn to_json_pretty(graph: &Graph) -> Result<String> {
    ensure_encodable(graph)?;
    serde_json::to_string_pretty(graph).map_err(GraphError::from_json_output)
}

/// Write a graph to a JSON file.
#[cfg(feature = "cli")]
pub fn write_file(graph: &Graph, path: &std::path::Path, pretty: bool) -> Result<()> {
    let mut text = if pretty {
        to_json_pretty(graph)?
    } else {
        to_json(graph)?
    };
    text.push('\n');
    std::fs::write(path, text).map_err(|e| GraphError::FileWrite {
        path: path.display().to_string(),
        source: e,
    })?;
    debug!("wrote graph to {}", path.display());
    Ok(())
}

fn ensure_encodable(graph: &Graph) -> Result<()> {
    match graph.links().iter().position(|l| !l.value.is_finite()) {
        Some(i) => Err(GraphError::NonFiniteValue {
            link: LinkIndex(i),
            value: graph.links()[i].value,
        }),
        None => Ok(()),
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::graph::{Link, Node};

    // ===================
    // Strategies
    // ===================

    fn node_strategy() -> impl Strategy<Value = Node> {
        (any::<String>(), any::<String>(), any::<u32>())
            .prop_map(|(name, class, group)| Node::new(name, class, group))
    }

    fn finite_strategy() -> impl Strategy<Value = f64> {
        any::<f64>().prop_filter("JSON numbers are finite", |v| v.is_finite())
    }

    fn link_strategy(node_count: usize) -> impl Strategy<Value = Link> {
        (0..node_count, 0..node_count, finite_strategy(), any::<String>())
            .prop_map(|(source, target, value, kind)| Link::new(source, target, value, kind))
    }

    fn graph_strategy() -> impl Strategy<Value = Graph> {
        prop::collection::vec(node_strategy(), 0..8)
            .prop_flat_map(|nodes| {
                let n = nodes.len();
                let link_count = if n == 0 { 0..1 } else { 0..12 };
                let links = prop::collection::vec(link_strategy(n.max(1)), link_count);
                (Just(nodes), links)
            })
            .prop_map(|(nodes, links)| {
                Graph::new(nodes, links).expect("strategy only draws in-range endpoints")
            })
    }

    // ===================
    // Properties
    // ===================

    proptest! {
        #[test]
        fn compact_json_roundtrip(graph in graph_strategy()) {
            let back = parse(&to_json(&graph).unwrap()).unwrap();
            prop_assert_eq!(back, graph);
        }

        #[test]
        fn pretty_json_roundtrip(graph in graph_strategy()) {
            let back = parse(&to_json_pretty(&graph).unwrap()).unwrap();
            prop_assert_eq!(back, graph);
        }

        #[test]
        fn parse_matches_serde(graph in graph_strategy()) {
            let text = to_json(&graph).unwrap();
            let derived: Graph = serde_json::from_str(&text).unwrap();
            prop_assert_eq!(parse(&text).unwrap(), derived);
        }
    }
}
