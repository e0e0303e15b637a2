//! Auto-wiring: adapter insertion for freshly synthesized patches.
//!
//! When a patch introduces a node into a graph that already contains a node
//! of a shape-sensitive type, a `transform.map` adapter and its feeding edge
//! are appended so the new node receives compatible input.

use crate::graph::NodeSpec;
use crate::patch::PatchOp;
use serde_json::{Value, json};

/// Pre-existing node types whose presence anywhere in the graph triggers
/// adapter insertion for every appended node. The check is deliberately
/// coarse: it does not test adjacency between the watched node and the new
/// one.
pub const WATCHED_TYPES: [&str; 3] = ["llm.structured", "notify.email", "http.request"];

/// Augments a synthesized patch with adapter nodes and edges.
///
/// Only nodes that existed before the patch count as triggers; nodes added by
/// the patch itself (including the adapters this pass appends) do not. For
/// each triggering node append, two operations are pushed: a `transform.map`
/// node `transform_<newNodeId>` placed 100 units left of the new node at the
/// same height, and an edge `transform_<newNodeId>.ok -> <newNodeId>`.
pub fn resolve(mut patch: Vec<PatchOp>, existing: &[NodeSpec]) -> Vec<PatchOp> {
    let watched_present = existing
        .iter()
        .any(|n| WATCHED_TYPES.contains(&n.kind.as_str()));
    if !watched_present {
        return patch;
    }

    let mut adapters = Vec::new();
    for op in &patch {
        let Some(new_id) = op.appended_node_id() else {
            continue;
        };
        let position = match op {
            PatchOp::Add { value, .. } => value.get("position"),
            _ => None,
        };
        let x = read_coord(position, "x");
        let y = read_coord(position, "y");

        let adapter_id = format!("transform_{}", new_id);
        let adapter_port = format!("{}.ok", adapter_id);
        adapters.push(PatchOp::add_node(json!({
            "id": adapter_id,
            "type": "transform.map",
            "position": {"x": x - 100.0, "y": y},
            "data": {
                "label": "Auto Transform",
                "description": "Automatically inserted adapter for I/O compatibility",
            },
        })));
        adapters.push(PatchOp::add_edge(json!({
            "from": adapter_port,
            "to": new_id,
        })));
    }

    patch.extend(adapters);
    patch
}

fn read_coord(position: Option<&Value>, axis: &str) -> f64 {
    position
        .and_then(|p| p.get(axis))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}
