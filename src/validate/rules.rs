use super::{Diagnostic, ReportBuilder, Severity};
use crate::graph::GraphSpec;
use ahash::AHashSet;
use itertools::Itertools;

/// Config keys containing any of these substrings (case-insensitive) are
/// treated as secret-bearing.
pub const SECRET_KEY_MARKERS: [&str; 4] = ["api", "token", "password", "secret"];

/// String values under secret-bearing keys must start with this prefix to be
/// considered references rather than raw material.
pub const SECRET_REF_PREFIX: &str = "secret://";

/// Ordered `(source_type, target_type)` pairs known to produce incompatible
/// I/O shapes when wired directly.
pub const INCOMPATIBLE_PAIRS: [(&str, &str); 2] = [
    ("http.request", "llm.structured"),
    ("transform.map", "notify.email"),
];

pub(super) type Rule = fn(&GraphSpec, &mut ReportBuilder);

/// The full rule set, applied in order on every validation run.
pub(super) const RULES: [Rule; 6] = [
    rule_nonempty,
    rule_has_input,
    rule_has_output,
    rule_orphans,
    rule_secret_exposure,
    rule_io_compatibility,
];

fn rule_nonempty(graph: &GraphSpec, report: &mut ReportBuilder) {
    if graph.nodes.is_empty() {
        report.error(Diagnostic::new(
            Severity::High,
            "Graph must have at least one node",
            "/nodes",
        ));
    }
}

fn rule_has_input(graph: &GraphSpec, report: &mut ReportBuilder) {
    if !graph.has_node_kind("input") {
        report.warning(Diagnostic::new(
            Severity::Medium,
            "Consider adding an input node",
            "/nodes",
        ));
    }
}

fn rule_has_output(graph: &GraphSpec, report: &mut ReportBuilder) {
    if !graph.has_node_kind("output") {
        report.warning(Diagnostic::new(
            Severity::Medium,
            "Consider adding an output node",
            "/nodes",
        ));
    }
}

/// A node is orphaned when its id appears in no edge endpoint and the graph
/// has more than one node. A singleton graph is never flagged.
fn rule_orphans(graph: &GraphSpec, report: &mut ReportBuilder) {
    if graph.nodes.len() <= 1 {
        return;
    }

    let mut connected: AHashSet<&str> = AHashSet::new();
    for edge in &graph.edges {
        connected.insert(edge.source_node_id());
        connected.insert(edge.to.as_str());
    }

    let orphaned: Vec<&str> = graph
        .nodes
        .iter()
        .filter(|n| !connected.contains(n.id.as_str()))
        .map(|n| n.id.as_str())
        .collect();

    if !orphaned.is_empty() {
        report.warning(Diagnostic::new(
            Severity::Medium,
            format!(
                "Found {} orphaned node(s) that aren't connected: {}",
                orphaned.len(),
                orphaned.iter().join(", ")
            ),
            "/nodes",
        ));
    }
}

/// Any string config value under a secret-bearing key must be a
/// `secret://` reference; raw values block validity.
fn rule_secret_exposure(graph: &GraphSpec, report: &mut ReportBuilder) {
    for (node_index, node) in graph.nodes.iter().enumerate() {
        for (key, value) in &node.config {
            let Some(text) = value.as_str() else { continue };
            let lowered = key.to_lowercase();
            let looks_secret = SECRET_KEY_MARKERS.iter().any(|m| lowered.contains(m));
            if looks_secret && !text.starts_with(SECRET_REF_PREFIX) {
                report.error(
                    Diagnostic::new(
                        Severity::High,
                        format!(
                            "Node '{}' exposes a raw secret-like value under config key '{}'",
                            node.id, key
                        ),
                        format!("/nodes/{}/config/{}", node_index, key),
                    )
                    .with_suggestion(format!(
                        "Replace the raw value with a '{}' reference",
                        SECRET_REF_PREFIX
                    )),
                );
            }
        }
    }
}

/// Flags edges whose endpoint types form a known-incompatible pair.
///
/// Edges with a missing endpoint are skipped without a finding. That leaves
/// dangling edges unreported here; the gap is intentional and covered by a
/// dedicated test.
fn rule_io_compatibility(graph: &GraphSpec, report: &mut ReportBuilder) {
    for (edge_index, edge) in graph.edges.iter().enumerate() {
        let source = graph.node(edge.source_node_id());
        let target = graph.node(&edge.to);
        let (Some(source), Some(target)) = (source, target) else {
            continue;
        };

        let pair = (source.kind.as_str(), target.kind.as_str());
        if INCOMPATIBLE_PAIRS.contains(&pair) {
            report.note(
                Diagnostic::new(
                    Severity::Medium,
                    format!(
                        "Nodes '{}' ({}) and '{}' ({}) have incompatible I/O shapes",
                        source.id, source.kind, target.id, target.kind
                    ),
                    format!("/edges/{}", edge_index),
                )
                .with_suggestion(format!(
                    "Insert a transform.map adapter between '{}' and '{}'",
                    source.id, target.id
                )),
            );
        }
    }
}
