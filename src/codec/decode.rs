//! Decoding of JSON values into graphs.
//!
//! Walks a [`serde_json::Value`] field by field so errors can name the
//! offending field, e.g. `links[2].source`. A `Value` cannot hold repeated
//! keys; those are caught by [`super::parse`] before this walk runs.

use serde_json::{Map, Value};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Link, Node, NodeIndex};

/// Path used for the document root in error messages.
const ROOT: &str = "$";

/// Decode a parsed JSON document into a graph.
pub fn decode(value: &Value) -> Result<Graph> {
    let root = Record::new(value, ROOT.to_string())?;

    let nodes = root
        .array("nodes")?
        .iter()
        .enumerate()
        .map(|(i, v)| decode_node(v, format!("nodes[{i}]")))
        .collect::<Result<Vec<_>>>()?;

    let links = root
        .array("links")?
        .iter()
        .enumerate()
        .map(|(i, v)| decode_link(v, format!("links[{i}]")))
        .collect::<Result<Vec<_>>>()?;

    Graph::new(nodes, links)
}

fn decode_node(value: &Value, path: String) -> Result<Node> {
    let record = Record::new(value, path)?;
    Ok(Node {
        name: record.string("name")?,
        class: record.string("class")?,
        group: record.group("group")?,
    })
}

fn decode_link(value: &Value, path: String) -> Result<Link> {
    let record = Record::new(value, path)?;
    Ok(Link {
        source: record.index("source")?,
        target: record.index("target")?,
        value: record.number("value")?,
        kind: record.string("type")?,
    })
}

/// A JSON object with the path it was found at.
struct Record<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    fn new(value: &'a Value, path: String) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { path, map }),
            other => Err(GraphError::type_mismatch(path, "object", kind_of(other))),
        }
    }

    fn field_path(&self, name: &str) -> String {
        if self.path == ROOT {
            name.to_string()
        } else {
            format!("{}.{name}", self.path)
        }
    }

    fn field(&self, name: &str) -> Result<&'a Value> {
        self.map
            .get(name)
            .ok_or_else(|| GraphError::missing_field(&self.path, name))
    }

    fn array(&self, name: &str) -> Result<&'a [Value]> {
        match self.field(name)? {
            Value::Array(items) => Ok(items),
            other => Err(self.mismatch(name, "array", other)),
        }
    }

    fn string(&self, name: &str) -> Result<String> {
        match self.field(name)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(self.mismatch(name, "string", other)),
        }
    }

    fn number(&self, name: &str) -> Result<f64> {
        match self.field(name)? {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| self.mismatch(name, "number", &Value::Number(n.clone()))),
            other => Err(self.mismatch(name, "number", other)),
        }
    }

    fn unsigned(&self, name: &str) -> Result<u64> {
        let value = self.field(name)?;
        value
            .as_u64()
            .ok_or_else(|| self.mismatch(name, "non-negative integer", value))
    }

    fn index(&self, name: &str) -> Result<NodeIndex> {
        let raw = self.unsigned(name)?;
        let index = usize::try_from(raw).map_err(|_| {
            GraphError::type_mismatch(self.field_path(name), "node index", raw.to_string())
        })?;
        Ok(NodeIndex::from(index))
    }

    fn group(&self, name: &str) -> Result<u32> {
        let raw = self.unsigned(name)?;
        u32::try_from(raw).map_err(|_| {
            GraphError::type_mismatch(
                self.field_path(name),
                format!("integer in 0..={}", u32::MAX),
                raw.to_string(),
            )
        })
    }

    fn mismatch(&self, name: &str, expected: &str, found: &Value) -> GraphError {
        GraphError::type_mismatch(self.field_path(name), expected, kind_of(found))
    }
}

/// Short description of a JSON value for error messages.
fn kind_of(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) if n.is_u64() => format!("integer {n}"),
        Value::Number(n) if n.is_i64() => format!("negative integer {n}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(_) => "string".to_string(),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::graph::LinkIndex;

    #[test]
    fn test_decode_example() {
        let value = json!({
            "nodes": [
                {"name": "A", "class": "root", "group": 0},
                {"name": "B", "class": "leaf", "group": 1}
            ],
            "links": [
                {"source": 0, "target": 1, "value": 1.0, "type": "default"}
            ]
        });
        let graph = decode(&value).unwrap();
        assert_eq!(graph.nodes()[1], Node::new("B", "leaf", 1));
        assert_eq!(graph.links()[0], Link::new(0, 1, 1.0, "default"));
    }

    #[test]
    fn test_integer_value_accepted() {
        let value = json!({
            "nodes": [{"name": "A", "class": "c", "group": 0}],
            "links": [{"source": 0, "target": 0, "value": 3, "type": "t"}]
        });
        let graph = decode(&value).unwrap();
        assert_eq!(graph.links()[0].value, 3.0);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let value = json!({
            "nodes": [{"name": "A", "class": "c", "group": 0, "x": 12.5}],
            "links": [],
            "meta": {"title": "demo"}
        });
        assert_eq!(decode(&value).unwrap().node_count(), 1);
    }

    #[test]
    fn test_root_not_object() {
        let err = decode(&json!([1, 2])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch at $: expected object, found array"
        );
    }

    #[test]
    fn test_missing_nodes() {
        let err = decode(&json!({"links": []})).unwrap_err();
        assert!(matches!(
            err,
            GraphError::MissingField { ref path, ref field } if path == "$" && field == "nodes"
        ));
    }

    #[test]
    fn test_missing_link_field_path() {
        let value = json!({
            "nodes": [{"name": "A", "class": "c", "group": 0}],
            "links": [
                {"source": 0, "target": 0, "value": 1.0, "type": "t"},
                {"source": 0, "value": 1.0, "type": "t"}
            ]
        });
        let err = decode(&value).unwrap_err();
        assert_eq!(err.to_string(), "Missing field 'target' in links[1]");
    }

    #[test]
    fn test_type_mismatch_path() {
        let value = json!({
            "nodes": [{"name": "A", "class": 7, "group": 0}],
            "links": []
        });
        let err = decode(&value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch at nodes[0].class: expected string, found integer 7"
        );
    }

    #[test]
    fn test_negative_group_rejected() {
        let value = json!({
            "nodes": [{"name": "A", "class": "c", "group": -1}],
            "links": []
        });
        let err = decode(&value).unwrap_err();
        assert!(matches!(
            err,
            GraphError::TypeMismatch { ref path, ref found, .. }
                if path == "nodes[0].group" && found == "negative integer -1"
        ));
    }

    #[test]
    fn test_group_overflow_rejected() {
        let value = json!({
            "nodes": [{"name": "A", "class": "c", "group": 5_000_000_000u64}],
            "links": []
        });
        assert!(matches!(
            decode(&value).unwrap_err(),
            GraphError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_fractional_index_rejected() {
        let value = json!({
            "nodes": [{"name": "A", "class": "c", "group": 0}],
            "links": [{"source": 0.5, "target": 0, "value": 1.0, "type": "t"}]
        });
        let err = decode(&value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch at links[0].source: expected non-negative integer, found number 0.5"
        );
    }

    #[test]
    fn test_dangling_reference() {
        let value = json!({
            "nodes": [
                {"name": "A", "class": "root", "group": 0},
                {"name": "B", "class": "leaf", "group": 1}
            ],
            "links": [{"source": 0, "target": 5, "value": 1.0, "type": "default"}]
        });
        assert!(matches!(
            decode(&value).unwrap_err(),
            GraphError::DanglingReference {
                link: LinkIndex(0),
                index: 5,
                node_count: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_nodes_with_link() {
        let value = json!({
            "nodes": [],
            "links": [{"source": 0, "target": 0, "value": 1.0, "type": "t"}]
        });
        assert!(decode(&value).is_err());
    }
}
