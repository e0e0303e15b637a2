use crate::editor::{EditorEdge, EditorNode};
use crate::graph::GraphSpec;
use crate::patch::PatchOp;
use crate::simulate::{DryRunOutcome, RunResult, TimelineEvent};
use crate::validate::Diagnostic;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Request shapes. Every field is defaulted so a sparse payload decodes
// cleanly; only a field of the wrong JSON type fails, and that failure is
// reported in-band by the operation.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DescribeRequest {
    pub brief: String,
    pub graph_spec: GraphSpec,
    pub catalog: Value,
    pub preferences: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DryRunRequest {
    pub graph: GraphSpec,
    pub fixtures: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RefineRequest {
    pub graph_spec: GraphSpec,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExplainRequest {
    pub graph_spec: GraphSpec,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MigrateRequest {
    pub graph_spec: GraphSpec,
    pub target_version: String,
}

impl Default for MigrateRequest {
    fn default() -> Self {
        Self {
            graph_spec: GraphSpec::default(),
            target_version: "1.0.0".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ToGraphSpecRequest {
    pub nodes: Vec<EditorNode>,
    pub edges: Vec<EditorEdge>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FromGraphSpecRequest {
    pub graphspec: GraphSpec,
}

// Response shapes.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescribeResponse {
    pub rationale: String,
    pub patch: Vec<PatchOp>,
    pub risks: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DryRunResponse {
    pub timeline: Vec<TimelineEvent>,
    pub result: RunResult,
    pub success: bool,
}

impl From<DryRunOutcome> for DryRunResponse {
    fn from(outcome: DryRunOutcome) -> Self {
        Self {
            timeline: outcome.timeline,
            result: outcome.result,
            success: outcome.success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatchResponse {
    pub patch: Vec<PatchOp>,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToGraphSpecResponse {
    pub graphspec: GraphSpec,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FromGraphSpecResponse {
    pub nodes: Vec<EditorNode>,
    pub edges: Vec<EditorEdge>,
    pub status: String,
}

/// Health/identity metadata for the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
}
