//! The canonical GraphSpec model.
//!
//! Every engine component operates on this shape. Incoming payloads may omit
//! any field; deserialization fills in defaults instead of failing, so a
//! partially formed graph still produces a well-formed value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A 2D display coordinate. Carried for the editor's benefit; none of the
/// validation or simulation logic reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Graph-level metadata: identity, semantic version, compatibility tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphMeta {
    pub id: String,
    pub version: String,
    pub compat: String,
    pub tags: Vec<String>,
}

impl Default for GraphMeta {
    fn default() -> Self {
        Self {
            id: String::new(),
            version: "1.0.0".to_string(),
            compat: String::new(),
            tags: Vec::new(),
        }
    }
}

/// A single processing step in a graph.
///
/// The `kind` tag (serialized as `type`) is a dotted-namespace string such as
/// `llm.structured` or `validation.schema`. The engine matches it against
/// fixed lookup tables and never validates it against a registry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Position,
    pub config: serde_json::Map<String, Value>,
    pub policies: Value,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }
}

/// A directed connection between two nodes.
///
/// `from` may qualify the source with a named output port using a `.` suffix
/// (`nodeA.ok`). The bare source node id is everything before the first `.`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeSpec {
    #[serde(alias = "source")]
    pub from: String,
    #[serde(alias = "target")]
    pub to: String,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The source node id with any port qualifier stripped.
    pub fn source_node_id(&self) -> &str {
        self.from.split('.').next().unwrap_or(&self.from)
    }
}

/// The canonical, versioned representation of a workflow graph.
///
/// `inputs` and `policies` are opaque to the engine and round-trip verbatim.
/// Node order is insertion order and has no meaning beyond display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSpec {
    pub meta: GraphMeta,
    pub inputs: Value,
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
    pub policies: Value,
}

impl GraphSpec {
    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&NodeSpec> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// True if any node carries the given type tag.
    pub fn has_node_kind(&self, kind: &str) -> bool {
        self.nodes.iter().any(|n| n.kind == kind)
    }
}
