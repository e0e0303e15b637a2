//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so downstream code
//! can bring the whole engine surface in with a single `use`.

// Graph model
pub use crate::graph::{EdgeSpec, GraphMeta, GraphSpec, NodeSpec, Position};

// Editor shape and adapter
pub use crate::editor::{EditorEdge, EditorNode, EditorNodeData, from_canonical, to_canonical};

// Validation
pub use crate::validate::{Diagnostic, Severity, ValidationReport, validate};

// Patch synthesis and auto-wiring
pub use crate::autowire::resolve;
pub use crate::patch::{PatchOp, ProposedPatch};
pub use crate::synth::{refine, synthesize};

// Simulation
pub use crate::simulate::{DryRunOutcome, EventKind, RunResult, TimelineEvent, dry_run};

// Catalog
pub use crate::catalog::{MinigrafDescriptor, MinigrafIo};

// Error types
pub use crate::error::ServiceError;
