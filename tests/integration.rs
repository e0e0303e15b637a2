//! End-to-end tests through the service boundary: payload in, response out,
//! faults reported in-band.
use graphsmith::service;
use graphsmith::validate::Severity;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn describe_runs_synthesis_and_autowiring_end_to_end() {
    let payload = json!({
        "brief": "add llm",
        "graph_spec": {
            "nodes": [{"id": "a", "type": "http.request"}],
            "edges": [],
        },
    });
    let response = service::describe(payload);

    assert_eq!(response.patch.len(), 3);
    assert_eq!(response.risks, vec!["Cost LLM", "Complexity"]);
    assert!(response.diagnostics.is_empty());
    assert!(response.rationale.contains("LLM node"));
}

#[test]
fn describe_reports_payload_faults_in_band() {
    // brief has the wrong JSON type; decoding fails and the fault is
    // converted, never raised.
    let response = service::describe(json!({"brief": 42}));

    assert!(response.patch.is_empty());
    assert_eq!(response.risks, vec!["System Error"]);
    assert_eq!(response.diagnostics.len(), 1);
    assert_eq!(response.diagnostics[0].severity, Severity::High);
    assert!(response.rationale.starts_with("Error processing request:"));
}

#[test]
fn validate_accepts_canonical_and_editor_edge_spellings() {
    let canonical = service::validate(json!({
        "nodes": [
            {"id": "a", "type": "input"},
            {"id": "b", "type": "output"},
        ],
        "edges": [{"from": "a", "to": "b"}],
    }));
    let editor_style = service::validate(json!({
        "nodes": [
            {"id": "a", "type": "input"},
            {"id": "b", "type": "output"},
        ],
        "edges": [{"source": "a", "target": "b"}],
    }));

    assert!(canonical.valid);
    assert_eq!(canonical, editor_style);
    assert!(canonical.warnings.is_empty());
}

#[test]
fn validate_converts_decode_faults_into_a_failed_report() {
    let report = service::validate(json!({"nodes": 5}));

    assert!(!report.valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].message.starts_with("Validation error:"));
}

#[test]
fn dry_run_faults_discard_the_timeline() {
    let response = service::dry_run(json!({"graph": {"nodes": "not-a-list"}}));

    assert!(!response.success);
    assert!(response.timeline.is_empty());
}

#[test]
fn refine_ignores_diagnostics_without_a_severity() {
    let response = service::refine(json!({
        "graph_spec": {"nodes": [], "edges": []},
        "diagnostics": [
            {"message": "no severity supplied"},
            {"severity": "high", "message": "exposed secret"},
        ],
    }));

    assert_eq!(response.patch.len(), 1);
    assert_eq!(response.rationale, "Added error handling based on diagnostics");
}

#[test]
fn explain_states_counts_and_distinct_types() {
    let response = service::explain(json!({
        "graph_spec": {
            "nodes": [
                {"id": "a", "type": "input"},
                {"id": "b", "type": "worker"},
                {"id": "c", "type": "worker"},
            ],
            "edges": [{"from": "a", "to": "b"}],
        },
    }));

    assert!(response.explanation.contains("3 nodes"));
    assert!(response.explanation.contains("1 connections"));
    // Distinct types are listed; their enumeration order is not part of the
    // contract, so only membership is asserted.
    assert!(response.explanation.contains("input"));
    assert!(response.explanation.contains("worker"));
    assert!(!response.explanation.contains("worker, worker"));
}

#[test]
fn explain_omits_the_type_list_for_an_empty_graph() {
    let response = service::explain(json!({"graph_spec": {}}));

    assert!(response.explanation.contains("0 nodes"));
    assert!(!response.explanation.contains("Node types"));
}

#[test]
fn migrate_rewrites_only_the_version_field() {
    let response = service::migrate(json!({
        "graph_spec": {"meta": {"version": "1.0.0"}},
        "target_version": "2.3.1",
    }));

    assert_eq!(response.patch.len(), 1);
    assert_eq!(
        serde_json::to_value(&response.patch[0]).unwrap(),
        json!({"op": "replace", "path": "/meta/version", "value": "2.3.1"})
    );
    assert_eq!(response.rationale, "Migrated to version 2.3.1");
}

#[test]
fn graphspec_conversions_round_trip_through_the_service() {
    let to_response = service::to_graphspec(json!({
        "nodes": [
            {"id": "a", "type": "input", "data": {"label": "A"}},
            {"id": "b", "type": "output"},
        ],
        "edges": [{"id": "e_a_b", "source": "a", "target": "b"}],
    }));
    assert_eq!(to_response.status, "ok");
    assert_eq!(to_response.graphspec.nodes.len(), 2);

    let from_response = service::from_graphspec(json!({
        "graphspec": serde_json::to_value(&to_response.graphspec).unwrap(),
    }));
    assert_eq!(from_response.status, "ok");
    assert_eq!(from_response.nodes[0].id, "a");
    assert_eq!(from_response.edges[0].id, "e_a_b");
}

#[test]
fn minigraf_catalog_is_served_verbatim() {
    let minigrafs = service::list_minigrafs();

    assert_eq!(minigrafs.len(), 5);
    let ids: Vec<&str> = minigrafs.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "finance.budget_builder",
            "data.contract_extractor",
            "validation.schema_validator",
            "llm.structured_output",
            "data.json_patch",
        ]
    );
    assert_eq!(minigrafs[0].version, "1.0.0");
    assert_eq!(minigrafs[1].io.output, json!({"entities": "array"}));
}

#[test]
fn graphspec_schema_is_a_stable_document() {
    let first = service::graphspec_schema();
    let second = service::graphspec_schema();

    assert!(first.is_object());
    assert_eq!(first["title"], "GraphSpec");
    assert!(std::ptr::eq(first, second));
}

#[test]
fn service_info_reports_identity() {
    let info = service::service_info();

    assert_eq!(info.service, "graphsmith");
    assert_eq!(info.status, "ok");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
}
