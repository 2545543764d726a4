//! # nodelink
//!
//! A node-link graph data model.
//!
//! This library provides:
//! - [`Node`], [`Link`] and [`Graph`] records (with [`GraphData`] as an
//!   alternate name for the container)
//! - Checked construction: every link endpoint is a valid node position
//! - Policy validation (self-loops, duplicate names, non-finite weights)
//! - A JSON codec whose errors name the offending field
//!
//! ## Architecture
//!
//! - [`graph`] - Graph records, positional indices, validation and summary
//! - [`codec`] - JSON encoding and decoding
//! - [`error`] - Error taxonomy
//! - [`config`] - TOML configuration (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! nodelink validate graph.json --deny-self-loops
//! nodelink summary graph.json
//! nodelink format graph.json -o normalized.json
//! ```
//!
//! ### Library
//!
//! ```
//! use nodelink::{Graph, Link, Node};
//!
//! let mut graph = Graph::empty();
//! let a = graph.push_node(Node::new("A", "root", 0));
//! let b = graph.push_node(Node::new("B", "leaf", 1));
//! graph.push_link(Link::new(a.index(), b.index(), 1.0, "default")).unwrap();
//!
//! // Links must point at existing nodes.
//! assert!(graph.push_link(Link::new(0, 5, 1.0, "default")).is_err());
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmGraph } from 'nodelink';
//!
//! const graph = new WasmGraph(jsonText);
//! graph.validate();
//! ```

pub mod codec;
pub mod error;
pub mod graph;

#[cfg(feature = "cli")]
pub mod config;

// Re-export main types for convenience
pub use error::{GraphError, Result};
pub use graph::{validate_graph, Graph, GraphData, Link, LinkIndex, Node, NodeIndex};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmGraph;
