//! Error types for nodelink.
//!
//! This module provides a unified error type [`GraphError`] that covers
//! all error conditions that can occur while decoding, constructing and
//! validating a graph, plus the I/O around it.

use thiserror::Error;

use crate::graph::{LinkIndex, NodeIndex};

/// Result type alias using [`GraphError`].
pub type Result<T> = std::result::Result<T, GraphError>;

/// Which end of a link an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Target => write!(f, "target"),
        }
    }
}

/// Unified error type for all nodelink operations.
#[derive(Error, Debug)]
pub enum GraphError {
    // ============ Decoding Errors ============
    /// Input is not well-formed JSON
    #[error("Invalid JSON: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Well-formed JSON that does not describe a graph (e.g. a repeated key)
    #[error("Malformed input: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },

    /// A required field is absent
    #[error("Missing field '{field}' in {path}")]
    MissingField { path: String, field: String },

    /// A field holds a value of the wrong type
    #[error("Type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },

    // ============ Structural Errors ============
    /// A link endpoint points outside the node sequence
    #[error("Link {link} has dangling {endpoint} index {index} (graph has {node_count} nodes)")]
    DanglingReference {
        link: LinkIndex,
        endpoint: Endpoint,
        index: usize,
        node_count: usize,
    },

    // ============ Policy Errors ============
    /// Link connects a node to itself while self-loops are disallowed
    #[error("Link {link} is a self-loop on node {node}")]
    SelfLoop { link: LinkIndex, node: NodeIndex },

    /// Two nodes share a name while unique names are required
    #[error("Duplicate node name '{name}' at {duplicate} (first seen at {first})")]
    DuplicateName {
        name: String,
        first: NodeIndex,
        duplicate: NodeIndex,
    },

    /// Link weight is NaN or infinite
    #[error("Link {link} has non-finite value {value}")]
    NonFiniteValue { link: LinkIndex, value: f64 },

    // ============ Encoding Errors ============
    /// Graph could not be written as JSON
    #[error("Failed to encode graph: {message}")]
    Encode { message: String },

    // ============ I/O Errors ============
    /// Error reading a graph file
    #[error("Failed to read graph file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a graph file
    #[error("Failed to write graph file '{path}': {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Unreadable or invalid configuration file
    #[error("Invalid configuration '{path}': {message}")]
    Config { path: String, message: String },
}

impl GraphError {
    /// Create a missing field error
    pub fn missing_field(path: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            path: path.into(),
            field: field.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a dangling reference error
    pub fn dangling(link: LinkIndex, endpoint: Endpoint, index: usize, node_count: usize) -> Self {
        Self::DanglingReference {
            link,
            endpoint,
            index,
            node_count,
        }
    }

    /// True for errors that describe the shape of the input rather than I/O.
    pub fn is_data_error(&self) -> bool {
        !matches!(
            self,
            Self::Encode { .. }
                | Self::FileRead { .. }
                | Self::FileWrite { .. }
                | Self::Config { .. }
        )
    }

    /// Classify an error raised while reading JSON input.
    pub fn from_json_input(err: serde_json::Error) -> Self {
        let (line, column, message) = (err.line(), err.column(), err.to_string());
        if err.is_syntax() || err.is_eof() {
            Self::Syntax {
                line,
                column,
                message,
            }
        } else {
            Self::Malformed {
                line,
                column,
                message,
            }
        }
    }

    /// Wrap an error raised while writing JSON output.
    pub fn from_json_output(err: serde_json::Error) -> Self {
        Self::Encode {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_message() {
        let err = GraphError::dangling(LinkIndex(0), Endpoint::Target, 5, 2);
        assert_eq!(
            err.to_string(),
            "Link L0 has dangling target index 5 (graph has 2 nodes)"
        );
    }

    #[test]
    fn test_is_data_error() {
        assert!(GraphError::missing_field("nodes[0]", "name").is_data_error());
        let io = GraphError::FileRead {
            path: "g.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(!io.is_data_error());
    }

    #[test]
    fn test_json_input_classification() {
        let eof = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            GraphError::from_json_input(eof),
            GraphError::Syntax { .. }
        ));

        let data = serde_json::from_str::<u32>("\"seven\"").unwrap_err();
        assert!(matches!(
            GraphError::from_json_input(data),
            GraphError::Malformed { line: 1, .. }
        ));
    }

    #[test]
    fn test_json_output_is_not_syntax() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "sink closed");
        let err = GraphError::from_json_output(serde_json::Error::io(io));
        assert!(matches!(err, GraphError::Encode { .. }));
        assert!(err.to_string().starts_with("Failed to encode graph"));
        assert!(!err.is_data_error());
    }
}
