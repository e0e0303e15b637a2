//! Structural and security validation of a [`GraphSpec`].
//!
//! Every rule runs on every call; nothing short-circuits. Rules 1 (empty
//! graph) and 5 (exposed secret) are blocking and land in `errors`; the rest
//! produce warnings or plain diagnostics. `valid` is true exactly when the
//! errors list is empty.

mod rules;

pub use rules::{INCOMPATIBLE_PAIRS, SECRET_KEY_MARKERS, SECRET_REF_PREFIX};

use crate::graph::GraphSpec;
use serde::{Deserialize, Serialize};

/// How serious a finding is. `High` findings block validity when reported
/// through the errors channel and drive refine-mode patch synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    #[default]
    Low,
}

/// A structured validation finding.
///
/// Deserialization tolerates sparse payloads: a diagnostic arriving with no
/// severity decodes as `Low` and is inert in refine mode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// JSON-Pointer-like location of the finding inside the graph.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            path: path.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// The complete result of validating one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// A report carrying a single blocking system-level finding. Used by the
    /// service boundary when a payload cannot be decoded at all.
    pub fn system_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            valid: false,
            errors: vec![Diagnostic::new(Severity::High, message.clone(), "/")],
            warnings: Vec::new(),
            diagnostics: vec![Diagnostic::new(Severity::High, message, "/")],
        }
    }
}

/// Accumulates findings while the rule set runs.
#[derive(Default)]
pub(crate) struct ReportBuilder {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    diagnostics: Vec<Diagnostic>,
}

impl ReportBuilder {
    /// Records a blocking finding: one error plus one diagnostic.
    pub(crate) fn error(&mut self, diagnostic: Diagnostic) {
        self.errors.push(diagnostic.clone());
        self.diagnostics.push(diagnostic);
    }

    /// Records a non-blocking finding: one warning plus one diagnostic.
    pub(crate) fn warning(&mut self, diagnostic: Diagnostic) {
        self.warnings.push(diagnostic.clone());
        self.diagnostics.push(diagnostic);
    }

    /// Records a diagnostic-only finding.
    pub(crate) fn note(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn finish(self) -> ValidationReport {
        ValidationReport {
            valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
            diagnostics: self.diagnostics,
        }
    }
}

/// Runs the full rule set against a graph.
///
/// Validation is a pure function of the graph: the same input always yields
/// an identical report.
pub fn validate(graph: &GraphSpec) -> ValidationReport {
    let mut report = ReportBuilder::default();
    for rule in rules::RULES {
        rule(graph, &mut report);
    }
    report.finish()
}
