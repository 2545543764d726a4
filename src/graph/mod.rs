//! Node-link graph representation and validation.
//!
//! A [`Graph`] owns an ordered sequence of [`Node`]s and an ordered sequence
//! of [`Link`]s. Links refer to nodes by their position ([`NodeIndex`]) in
//! the node sequence, so node order is significant and every constructor
//! checks that link endpoints are in range.

mod model;
mod summary;
mod types;
mod validate;

pub use model::{Graph, GraphData, Link, Node};
pub use summary::GraphSummary;
pub use types::*;
pub use validate::{find_issues, validate_graph, validate_with, ValidationConfig};
