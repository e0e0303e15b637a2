//! The transport-independent service boundary.
//!
//! Each operation is a pure, synchronous function of its request payload.
//! Payloads arrive as raw [`serde_json::Value`]s; decoding absorbs missing
//! fields via defaults, and any remaining fault (a field of the wrong type)
//! is caught here and reported in-band on the operation's natural error
//! channel. No operation panics, retries, or holds state across calls.

mod messages;

pub use messages::*;

use crate::catalog::{GRAPHSPEC_SCHEMA, MINIGRAFS, MinigrafDescriptor};
use crate::error::ServiceError;
use crate::graph::GraphSpec;
use crate::patch::PatchOp;
use crate::simulate::DryRunOutcome;
use crate::validate::{Diagnostic, Severity, ValidationReport};
use crate::{autowire, editor, simulate, synth, validate};
use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, ServiceError> {
    Ok(serde_json::from_value(payload)?)
}

/// Maps a natural-language brief to a proposed patch against the graph,
/// running the result through the auto-wiring resolver before returning it.
pub fn describe(payload: Value) -> DescribeResponse {
    let request: DescribeRequest = match decode(payload) {
        Ok(request) => request,
        Err(e) => {
            return DescribeResponse {
                rationale: format!("Error processing request: {}", e),
                patch: Vec::new(),
                risks: vec!["System Error".to_string()],
                diagnostics: vec![Diagnostic::new(Severity::High, e.to_string(), "/")],
            };
        }
    };

    debug!(brief = %request.brief, nodes = request.graph_spec.nodes.len(), "describe");
    let proposed = synth::synthesize(&request.brief, &request.graph_spec);
    let patch = autowire::resolve(proposed.patch, &request.graph_spec.nodes);

    DescribeResponse {
        rationale: proposed.rationale,
        patch,
        risks: vec!["Cost LLM".to_string(), "Complexity".to_string()],
        diagnostics: Vec::new(),
    }
}

/// Runs the full validation rule set over a graph payload.
pub fn validate(payload: Value) -> ValidationReport {
    let graph: GraphSpec = match decode(payload) {
        Ok(graph) => graph,
        Err(e) => return ValidationReport::system_failure(format!("Validation error: {}", e)),
    };

    debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), "validate");
    validate::validate(&graph)
}

/// Simulates graph execution and returns the synthetic timeline.
pub fn dry_run(payload: Value) -> DryRunResponse {
    let request: DryRunRequest = match decode(payload) {
        Ok(request) => request,
        Err(e) => return DryRunOutcome::failure(e.to_string()).into(),
    };

    debug!(nodes = request.graph.nodes.len(), "dry_run");
    simulate::dry_run(&request.graph, &request.fixtures).into()
}

/// Maps validation diagnostics to a repair patch.
pub fn refine(payload: Value) -> PatchResponse {
    let request: RefineRequest = match decode(payload) {
        Ok(request) => request,
        Err(e) => {
            return PatchResponse {
                patch: Vec::new(),
                rationale: format!("Refinement error: {}", e),
            };
        }
    };

    debug!(diagnostics = request.diagnostics.len(), "refine");
    let proposed = synth::refine(&request.diagnostics, &request.graph_spec);
    PatchResponse {
        patch: proposed.patch,
        rationale: proposed.rationale,
    }
}

/// Describes a graph in natural language: node count, edge count, and the
/// distinct node types present. Type enumeration follows first appearance in
/// the node list; callers must not rely on a particular order.
pub fn explain(payload: Value) -> ExplainResponse {
    let request: ExplainRequest = match decode(payload) {
        Ok(request) => request,
        Err(e) => {
            return ExplainResponse {
                explanation: format!("Error explaining graph: {}", e),
            };
        }
    };

    let graph = &request.graph_spec;
    let mut explanation = format!(
        "This graph has {} nodes and {} connections. ",
        graph.nodes.len(),
        graph.edges.len()
    );
    if !graph.nodes.is_empty() {
        let types = graph.nodes.iter().map(|n| n.kind.as_str()).unique();
        explanation.push_str(&format!("Node types: {}. ", types.format(", ")));
    }
    explanation
        .push_str("The workflow processes data through these steps and produces structured output.");

    ExplainResponse { explanation }
}

/// Rewrites the graph's version field to the requested target. No structural
/// migration is performed.
pub fn migrate(payload: Value) -> PatchResponse {
    let request: MigrateRequest = match decode(payload) {
        Ok(request) => request,
        Err(e) => {
            return PatchResponse {
                patch: Vec::new(),
                rationale: format!("Migration error: {}", e),
            };
        }
    };

    PatchResponse {
        patch: vec![PatchOp::Replace {
            path: "/meta/version".to_string(),
            value: Value::String(request.target_version.clone()),
        }],
        rationale: format!("Migrated to version {}", request.target_version),
    }
}

/// Converts editor nodes/edges into a canonical GraphSpec.
pub fn to_graphspec(payload: Value) -> ToGraphSpecResponse {
    let request: ToGraphSpecRequest = match decode(payload) {
        Ok(request) => request,
        Err(e) => {
            return ToGraphSpecResponse {
                graphspec: GraphSpec::default(),
                status: format!("error: {}", e),
            };
        }
    };

    ToGraphSpecResponse {
        graphspec: editor::to_canonical(request.nodes, request.edges),
        status: "ok".to_string(),
    }
}

/// Converts a canonical GraphSpec into editor nodes/edges.
pub fn from_graphspec(payload: Value) -> FromGraphSpecResponse {
    let request: FromGraphSpecRequest = match decode(payload) {
        Ok(request) => request,
        Err(e) => {
            return FromGraphSpecResponse {
                nodes: Vec::new(),
                edges: Vec::new(),
                status: format!("error: {}", e),
            };
        }
    };

    let (nodes, edges) = editor::from_canonical(&request.graphspec);
    FromGraphSpecResponse {
        nodes,
        edges,
        status: "ok".to_string(),
    }
}

/// The static minigraf palette, served verbatim.
pub fn list_minigrafs() -> &'static [MinigrafDescriptor] {
    &MINIGRAFS
}

/// The GraphSpec schema document, served verbatim.
pub fn graphspec_schema() -> &'static Value {
    &GRAPHSPEC_SCHEMA
}

/// Health/identity metadata.
pub fn service_info() -> ServiceInfo {
    ServiceInfo {
        service: "graphsmith".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "ok".to_string(),
    }
}
