use super::{EditorEdge, EditorNode, EditorNodeData};
use crate::graph::{EdgeSpec, GraphMeta, GraphSpec, NodeSpec, Position};

/// Converts editor nodes and edges into a canonical [`GraphSpec`].
///
/// Metadata is synthesized with defaults; the editor shape does not carry
/// any. Node config and policies move out of the `data` envelope onto the
/// canonical node. Port qualifiers on edge sources pass through untouched.
pub fn to_canonical(nodes: Vec<EditorNode>, edges: Vec<EditorEdge>) -> GraphSpec {
    let nodes = nodes
        .into_iter()
        .map(|node| NodeSpec {
            id: node.id,
            kind: node.kind,
            position: node.position,
            config: node.data.config,
            policies: node.data.policies,
        })
        .collect();

    let edges = edges
        .into_iter()
        .map(|edge| EdgeSpec {
            from: edge.source,
            to: edge.target,
        })
        .collect();

    GraphSpec {
        meta: GraphMeta::default(),
        inputs: serde_json::Value::Null,
        nodes,
        edges,
        policies: serde_json::Value::Null,
    }
}

/// Converts a canonical [`GraphSpec`] back into editor nodes and edges.
///
/// Display positions are regenerated with a fixed layout rule (node `i` at
/// `x = 100 + 200·i`, `y = 100 + 100·i`) rather than preserved; a round trip
/// keeps ids, types, config, policies, and edge endpoints, but not positions.
/// Labels and descriptions are placeholders synthesized from the node itself.
pub fn from_canonical(graph: &GraphSpec) -> (Vec<EditorNode>, Vec<EditorEdge>) {
    let nodes = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| EditorNode {
            id: node.id.clone(),
            kind: node.kind.clone(),
            position: Position::new(100.0 + 200.0 * i as f64, 100.0 + 100.0 * i as f64),
            data: EditorNodeData {
                label: node.kind.clone(),
                description: format!("Node '{}' of type {}", node.id, node.kind),
                config: node.config.clone(),
                policies: node.policies.clone(),
            },
        })
        .collect();

    let edges = graph
        .edges
        .iter()
        .map(|edge| EditorEdge {
            id: format!("e_{}_{}", edge.from, edge.to),
            source: edge.from.clone(),
            target: edge.to.clone(),
        })
        .collect();

    (nodes, edges)
}
