//! The editor-facing node/edge shape and its conversion to the canonical
//! [`GraphSpec`](crate::graph::GraphSpec).
//!
//! This mirrors what the visual builder keeps on its canvas: nodes carry a
//! `data` envelope with a label and description for display, edges carry a
//! synthesized id. The conversion in both directions is total; missing
//! fields degrade to defaults rather than failing.

mod convert;

pub use convert::{from_canonical, to_canonical};

use crate::graph::Position;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display payload attached to an editor node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorNodeData {
    pub label: String,
    pub description: String,
    pub config: serde_json::Map<String, Value>,
    pub policies: Value,
}

/// A node as the visual editor holds it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: Position,
    pub data: EditorNodeData,
}

/// An edge as the visual editor holds it. The id is synthesized as
/// `e_<source>_<target>` when converting out of canonical form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}
