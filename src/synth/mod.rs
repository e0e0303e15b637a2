//! Instruction-to-patch synthesis.
//!
//! The free-text mode is an explicit ordered rule table evaluated first match
//! wins: each rule pairs a set of trigger keywords with a node blueprint.
//! This keeps the observable priority of the original keyword cascade without
//! hidden fallthrough. There is no language understanding here; a brief that
//! matches nothing falls through to a generic `custom.node`.

use crate::graph::GraphSpec;
use crate::patch::{PatchOp, ProposedPatch};
use crate::validate::{Diagnostic, Severity};
use serde_json::json;

/// A keyword-triggered blueprint for one node append.
struct BriefRule {
    keywords: &'static [&'static str],
    id_prefix: &'static str,
    node_type: &'static str,
    label: &'static str,
    description: &'static str,
    x: f64,
    rationale: &'static str,
}

/// Evaluated in order; the first rule with any keyword contained in the
/// lowered brief wins. Keyword sets are therefore priority-ordered: a brief
/// mentioning both "validate" and "transform" selects validation.
const BRIEF_RULES: [BriefRule; 3] = [
    BriefRule {
        keywords: &["add llm", "llm", "summarize"],
        id_prefix: "llm",
        node_type: "llm.structured",
        label: "LLM Node",
        description: "Large Language Model for text processing",
        x: 300.0,
        rationale: "Added an LLM node for intelligent text processing based on your request",
    },
    BriefRule {
        keywords: &["add validation", "validate"],
        id_prefix: "validator",
        node_type: "validation.schema",
        label: "Schema Validator",
        description: "Validates data against JSON schema",
        x: 400.0,
        rationale: "Added schema validation node to ensure data integrity",
    },
    BriefRule {
        keywords: &["add transform", "transform", "map"],
        id_prefix: "transform",
        node_type: "data.transform",
        label: "Data Transform",
        description: "Transforms data between formats",
        x: 500.0,
        rationale: "Added data transformation node for processing data",
    },
];

/// Maps a free-text brief to a one-operation patch against the graph.
///
/// The generated node id is `<prefix>_<N+1>` where N is the current node
/// count. A collision with an existing id of the same generated form is not
/// checked. The vertical offset `200 + 100·N` only spreads nodes visually.
pub fn synthesize(brief: &str, graph: &GraphSpec) -> ProposedPatch {
    let brief_lower = brief.to_lowercase();
    let node_count = graph.nodes.len();
    let y = 200.0 + 100.0 * node_count as f64;

    let matched = BRIEF_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| brief_lower.contains(kw)));

    let (op, rationale) = match matched {
        Some(rule) => {
            let value = json!({
                "id": format!("{}_{}", rule.id_prefix, node_count + 1),
                "type": rule.node_type,
                "position": {"x": rule.x, "y": y},
                "data": {
                    "label": rule.label,
                    "description": rule.description,
                },
            });
            (PatchOp::add_node(value), rule.rationale.to_string())
        }
        None => {
            let value = json!({
                "id": format!("custom_{}", node_count + 1),
                "type": "custom.node",
                "position": {"x": 300.0, "y": y},
                "data": {
                    "label": "Custom Node",
                    "description": format!("Custom node for: {}", brief),
                },
            });
            (
                PatchOp::add_node(value),
                format!("Added intelligent node based on your request: {}", brief),
            )
        }
    };

    ProposedPatch {
        patch: vec![op],
        rationale,
    }
}

/// Maps validation diagnostics to a repair patch.
///
/// Every `high`-severity diagnostic independently appends one `error.handler`
/// node at a fixed position. Handlers are not deduplicated, and each reuses
/// the `<prefix>_<N+1>` numbering against the pre-existing node count, so two
/// high diagnostics produce two handlers with the same generated id. Lower
/// severities produce no edit.
pub fn refine(diagnostics: &[Diagnostic], graph: &GraphSpec) -> ProposedPatch {
    let node_count = graph.nodes.len();
    let patch = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::High)
        .map(|_| {
            PatchOp::add_node(json!({
                "id": format!("error_handler_{}", node_count + 1),
                "type": "error.handler",
                "position": {"x": 400.0, "y": 300.0},
                "data": {
                    "label": "Error Handler",
                    "description": "Handles validation errors",
                },
            }))
        })
        .collect();

    ProposedPatch {
        patch,
        rationale: "Added error handling based on diagnostics".to_string(),
    }
}
