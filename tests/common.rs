//! Common test utilities for building graphs and payloads.
use graphsmith::prelude::*;
use serde_json::Value;

/// Creates a bare node with the given id and type tag.
#[allow(dead_code)]
pub fn node(id: &str, kind: &str) -> NodeSpec {
    NodeSpec::new(id, kind)
}

/// Creates a node carrying a single config entry.
#[allow(dead_code)]
pub fn node_with_config(id: &str, kind: &str, key: &str, value: Value) -> NodeSpec {
    let mut node = NodeSpec::new(id, kind);
    node.config.insert(key.to_string(), value);
    node
}

/// Creates an edge between two node ids (the source may carry a port).
#[allow(dead_code)]
pub fn edge(from: &str, to: &str) -> EdgeSpec {
    EdgeSpec::new(from, to)
}

/// Assembles a graph from nodes and edges with default metadata.
#[allow(dead_code)]
pub fn graph(nodes: Vec<NodeSpec>, edges: Vec<EdgeSpec>) -> GraphSpec {
    GraphSpec {
        nodes,
        edges,
        ..Default::default()
    }
}

/// The three-node input/worker/output graph used by ordering tests.
#[allow(dead_code)]
pub fn linear_pipeline() -> GraphSpec {
    graph(
        vec![
            node("in1", "input"),
            node("p1", "worker"),
            node("out1", "output"),
        ],
        vec![edge("in1", "p1"), edge("p1", "out1")],
    )
}
