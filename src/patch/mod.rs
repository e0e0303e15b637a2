//! JSON-Patch-shaped edit operations against a graph.
//!
//! The synthesizer only ever emits `add` (append to `/nodes/-` or `/edges/-`)
//! and `replace`, but the type deserializes the full standard operation set
//! so patches produced elsewhere still parse.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single structural edit operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    Add {
        path: String,
        value: Value,
    },
    Replace {
        path: String,
        value: Value,
    },
    Remove {
        path: String,
    },
    Move {
        from: String,
        path: String,
    },
    Copy {
        from: String,
        path: String,
    },
    Test {
        path: String,
        value: Value,
    },
}

impl PatchOp {
    /// Appends a value to the graph's node list.
    pub fn add_node(value: Value) -> Self {
        PatchOp::Add {
            path: "/nodes/-".to_string(),
            value,
        }
    }

    /// Appends a value to the graph's edge list.
    pub fn add_edge(value: Value) -> Self {
        PatchOp::Add {
            path: "/edges/-".to_string(),
            value,
        }
    }

    /// True for an `add` op that appends to `/nodes/-`.
    pub fn is_node_append(&self) -> bool {
        matches!(self, PatchOp::Add { path, .. } if path == "/nodes/-")
    }

    /// The `id` field of an appended node value, if this op appends a node.
    pub fn appended_node_id(&self) -> Option<&str> {
        match self {
            PatchOp::Add { path, value } if path == "/nodes/-" => {
                value.get("id").and_then(Value::as_str)
            }
            _ => None,
        }
    }
}

/// An ordered sequence of edit operations plus the reasoning behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedPatch {
    pub patch: Vec<PatchOp>,
    pub rationale: String,
}
