//! # Graphsmith - Workflow Graph Assistance Engine
//!
//! **Graphsmith** is the decision core behind a visual workflow-graph editor:
//! given a graph of typed processing nodes and directed edges, it validates
//! the graph against structural and security rules, turns natural-language
//! briefs into structured edit patches, auto-wires adapter nodes where known
//! I/O shape mismatches exist, and produces deterministic dry-run timelines.
//!
//! ## Core Workflow
//!
//! The engine operates on a canonical `GraphSpec` model and is transport
//! agnostic. The primary workflow is:
//!
//! 1.  **Convert**: Bring the editor's node/edge shape into the canonical
//!     model with the `editor` adapter (or hand the engine a `GraphSpec`
//!     directly).
//! 2.  **Validate**: Run the full rule set with `validate::validate` to get
//!     blocking errors, warnings, and fine-grained diagnostics.
//! 3.  **Synthesize**: Map a brief to a patch with `synth::synthesize`, then
//!     pass the patch through `autowire::resolve` for adapter insertion.
//! 4.  **Simulate**: Walk the graph with `simulate::dry_run` to get a
//!     synthetic execution timeline without running anything.
//!
//! The `service` module wraps all of this behind payload-in/response-out
//! functions that never let a fault escape: malformed input degrades to
//! defaults and unexpected faults are reported in-band.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphsmith::prelude::*;
//!
//! let mut graph = GraphSpec::default();
//! graph.nodes.push(NodeSpec::new("fetch", "http.request"));
//!
//! // Validate the graph.
//! let report = validate(&graph);
//! assert!(report.valid);
//!
//! // Ask for an edit and auto-wire the result.
//! let proposed = synthesize("add llm summarization", &graph);
//! let patch = resolve(proposed.patch, &graph.nodes);
//!
//! // The llm node plus the adapter node and its edge.
//! assert_eq!(patch.len(), 3);
//!
//! // Simulate execution.
//! let outcome = dry_run(&graph, &serde_json::Value::Null);
//! assert!(outcome.success);
//! ```

pub mod autowire;
pub mod catalog;
pub mod editor;
pub mod error;
pub mod graph;
pub mod patch;
pub mod prelude;
pub mod service;
pub mod simulate;
pub mod synth;
pub mod validate;
