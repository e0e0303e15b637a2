//! Tests for instruction-to-patch synthesis, refine mode, and auto-wiring.
mod common;

use common::*;
use graphsmith::prelude::*;
use pretty_assertions::assert_eq;

fn added_node<'a>(op: &'a PatchOp) -> &'a serde_json::Value {
    match op {
        PatchOp::Add { path, value } if path == "/nodes/-" => value,
        other => panic!("expected a node append, got {:?}", other),
    }
}

#[test]
fn llm_keywords_select_the_llm_blueprint() {
    let proposed = synthesize("add llm step for summaries", &graph(vec![], vec![]));

    assert_eq!(proposed.patch.len(), 1);
    let value = added_node(&proposed.patch[0]);
    assert_eq!(value["type"], "llm.structured");
    assert_eq!(value["id"], "llm_1");
    assert!(proposed.rationale.contains("LLM node"));
}

#[test]
fn validation_outranks_transform_in_priority_order() {
    let proposed = synthesize(
        "please validate and transform the output",
        &graph(vec![], vec![]),
    );

    let value = added_node(&proposed.patch[0]);
    assert_eq!(value["type"], "validation.schema");
}

#[test]
fn map_keyword_selects_the_transform_blueprint() {
    let proposed = synthesize("map each record to a row", &graph(vec![], vec![]));

    let value = added_node(&proposed.patch[0]);
    assert_eq!(value["type"], "data.transform");
    assert_eq!(value["id"], "transform_1");
}

#[test]
fn keyword_matching_is_case_insensitive() {
    let proposed = synthesize("Add LLM", &graph(vec![], vec![]));

    assert_eq!(added_node(&proposed.patch[0])["type"], "llm.structured");
}

#[test]
fn unmatched_brief_falls_through_to_custom_node() {
    let brief = "frobnicate the widgets";
    let proposed = synthesize(brief, &graph(vec![], vec![]));

    let value = added_node(&proposed.patch[0]);
    assert_eq!(value["type"], "custom.node");
    assert_eq!(value["id"], "custom_1");
    assert_eq!(
        value["data"]["description"],
        format!("Custom node for: {}", brief)
    );
    assert!(proposed.rationale.contains(brief));
}

#[test]
fn generated_ids_and_offsets_follow_the_node_count() {
    let g = graph(vec![node("a", "worker"), node("b", "worker")], vec![]);
    let proposed = synthesize("summarize this", &g);

    let value = added_node(&proposed.patch[0]);
    assert_eq!(value["id"], "llm_3");
    assert_eq!(value["position"]["y"], 400.0); // 200 + 100 * 2
}

#[test]
fn refine_appends_one_handler_per_high_diagnostic() {
    let diagnostics = vec![
        Diagnostic::new(Severity::High, "exposed secret", "/nodes/0/config/key"),
        Diagnostic::new(Severity::Medium, "no input node", "/nodes"),
        Diagnostic::new(Severity::High, "empty graph", "/nodes"),
    ];
    let proposed = refine(&diagnostics, &graph(vec![], vec![]));

    assert_eq!(proposed.patch.len(), 2);
    for op in &proposed.patch {
        let value = added_node(op);
        assert_eq!(value["type"], "error.handler");
        // Numbering reuses the pre-existing node count, so both handlers
        // share an id. Preserved as-is; collisions are a known edge case.
        assert_eq!(value["id"], "error_handler_1");
    }
    assert_eq!(proposed.rationale, "Added error handling based on diagnostics");
}

#[test]
fn refine_ignores_lower_severities() {
    let diagnostics = vec![
        Diagnostic::new(Severity::Medium, "missing output", "/nodes"),
        Diagnostic::new(Severity::Low, "cosmetic", "/nodes"),
    ];
    let proposed = refine(&diagnostics, &graph(vec![], vec![]));

    assert!(proposed.patch.is_empty());
}

#[test]
fn autowire_inserts_adapter_when_a_watched_type_exists() {
    let g = graph(vec![node("a", "http.request")], vec![]);
    let proposed = synthesize("add llm", &g);
    let patch = resolve(proposed.patch, &g.nodes);

    assert_eq!(patch.len(), 3);

    let new_node = added_node(&patch[0]);
    assert_eq!(new_node["id"], "llm_2");

    let adapter = added_node(&patch[1]);
    assert_eq!(adapter["id"], "transform_llm_2");
    assert_eq!(adapter["type"], "transform.map");
    // 100 units left of the new node, same height.
    assert_eq!(adapter["position"]["x"], 200.0);
    assert_eq!(adapter["position"]["y"], new_node["position"]["y"]);

    match &patch[2] {
        PatchOp::Add { path, value } => {
            assert_eq!(path, "/edges/-");
            assert_eq!(value["from"], "transform_llm_2.ok");
            assert_eq!(value["to"], "llm_2");
        }
        other => panic!("expected an edge append, got {:?}", other),
    }
}

#[test]
fn autowire_leaves_patch_alone_without_watched_types() {
    let g = graph(vec![node("a", "data.transform")], vec![]);
    let proposed = synthesize("add llm", &g);
    let patch = resolve(proposed.patch, &g.nodes);

    assert_eq!(patch.len(), 1);
}

#[test]
fn autowire_triggers_on_any_watched_node_regardless_of_adjacency() {
    // Deliberately coarse: the notify.email node is unrelated to the new
    // node, yet still triggers adapter insertion.
    let g = graph(
        vec![node("far", "notify.email"), node("near", "worker")],
        vec![],
    );
    let proposed = synthesize("add validation", &g);
    let patch = resolve(proposed.patch, &g.nodes);

    assert_eq!(patch.len(), 3);
    assert_eq!(added_node(&patch[1])["id"], "transform_validator_3");
}
