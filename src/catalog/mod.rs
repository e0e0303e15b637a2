//! Static catalog data: the minigraf palette and the GraphSpec schema.
//!
//! Both are process-wide immutable constants initialized once and served
//! verbatim. Nothing in the engine mutates them and there is no external
//! mutation path.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input/output shape descriptors of a minigraf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinigrafIo {
    pub input: Value,
    pub output: Value,
}

/// A named, versioned, reusable sub-graph template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinigrafDescriptor {
    pub id: String,
    pub version: String,
    pub io: MinigrafIo,
    pub tags: Vec<String>,
    pub description: String,
}

fn minigraf(
    id: &str,
    version: &str,
    input: Value,
    output: Value,
    tags: &[&str],
    description: &str,
) -> MinigrafDescriptor {
    MinigrafDescriptor {
        id: id.to_string(),
        version: version.to_string(),
        io: MinigrafIo { input, output },
        tags: tags.iter().map(|t| t.to_string()).collect(),
        description: description.to_string(),
    }
}

/// The fixed five-entry minigraf palette.
pub static MINIGRAFS: Lazy<Vec<MinigrafDescriptor>> = Lazy::new(|| {
    use serde_json::json;
    vec![
        minigraf(
            "finance.budget_builder",
            "1.0.0",
            json!({"brief": "object"}),
            json!({"budget": "object"}),
            &["finance", "budget", "planning"],
            "Build comprehensive budgets from business briefs",
        ),
        minigraf(
            "data.contract_extractor",
            "2.1.0",
            json!({"document": "string"}),
            json!({"entities": "array"}),
            &["data", "extraction", "nlp"],
            "Extract structured data from contracts and documents",
        ),
        minigraf(
            "validation.schema_validator",
            "1.5.0",
            json!({"data": "object", "schema": "object"}),
            json!({"valid": "boolean", "errors": "array"}),
            &["validation", "schema", "data"],
            "Validate data against JSON schemas",
        ),
        minigraf(
            "llm.structured_output",
            "1.2.0",
            json!({"prompt": "string", "schema": "object"}),
            json!({"result": "object"}),
            &["llm", "structured", "output"],
            "Generate structured output using LLM with schema validation",
        ),
        minigraf(
            "data.json_patch",
            "1.0.0",
            json!({"document": "object", "patch": "array"}),
            json!({"result": "object"}),
            &["data", "transform", "patch"],
            "Apply JSON Patch operations to documents",
        ),
    ]
});

/// The GraphSpec schema document, embedded at build time and served verbatim.
/// The engine treats it as an opaque artifact.
pub static GRAPHSPEC_SCHEMA: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../assets/graphspec.schema.json"))
        .expect("embedded graphspec schema is valid JSON")
});
