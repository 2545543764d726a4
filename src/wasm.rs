//! WASM bindings for nodelink.
//!
//! This module provides JavaScript-friendly bindings so a browser-side
//! visualization can load and check graph data before drawing it.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmGraph } from 'nodelink';
//!
//! await init();
//!
//! const graph = new WasmGraph(JSON.stringify({
//!   nodes: [{ name: "A", class: "root", group: 0 }, { name: "B", class: "leaf", group: 1 }],
//!   links: [{ source: 0, target: 1, value: 1.0, type: "default" }],
//! }));
//!
//! graph.validate(false, true);
//! const around = graph.neighbors(0); // Uint32Array [1]
//! ```

use wasm_bindgen::prelude::*;

use crate::codec;
use crate::error::GraphError;
use crate::graph::{validate_with, Graph, NodeIndex, ValidationConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: GraphError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A decoded, index-checked graph.
#[wasm_bindgen]
pub struct WasmGraph {
    graph: Graph,
}

#[wasm_bindgen]
impl WasmGraph {
    /// Decode a graph from JSON text.
    ///
    /// Throws with a message naming the offending field when the text is
    /// malformed or a link points past the node list.
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<WasmGraph, JsValue> {
        let graph = codec::parse(json).map_err(to_js)?;
        Ok(WasmGraph { graph })
    }

    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[wasm_bindgen(getter)]
    pub fn link_count(&self) -> usize {
        self.graph.link_count()
    }

    /// Check policy rules; throws on the first violation.
    ///
    /// # Arguments
    /// * `allow_self_loops` - Accept links from a node to itself
    /// * `allow_duplicate_names` - Accept nodes sharing a name
    #[wasm_bindgen]
    pub fn validate(&self, allow_self_loops: bool, allow_duplicate_names: bool) -> Result<(), JsValue> {
        let config = ValidationConfig::new()
            .with_self_loops(allow_self_loops)
            .with_duplicate_names(allow_duplicate_names);
        validate_with(&self.graph, &config).map_err(to_js)
    }

    /// Positions of the nodes linked to `node` in either direction.
    ///
    /// Empty for an unknown position.
    #[wasm_bindgen]
    pub fn neighbors(&self, node: usize) -> Vec<u32> {
        self.graph
            .neighbors(NodeIndex(node))
            .into_iter()
            .filter_map(|n| u32::try_from(n.index()).ok())
            .collect()
    }

    /// Canonical JSON encoding.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        codec::to_json(&self.graph).map_err(to_js)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
