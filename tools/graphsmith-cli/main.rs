use clap::{Parser, ValueEnum};
use serde_json::{Value, json};
use std::fs;

/// Which engine operation to run against the graph file.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Operation {
    Validate,
    Explain,
    DryRun,
    Describe,
}

/// Workflow graph validation, explanation, and dry-run CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph JSON file (canonical GraphSpec shape)
    graph_path: String,

    /// The operation to run
    #[arg(short, long, value_enum, default_value = "validate")]
    operation: Operation,

    /// Natural-language brief (describe mode only)
    #[arg(short, long)]
    brief: Option<String>,

    /// Optional path to a fixtures JSON file (dry-run mode only)
    #[arg(short, long)]
    fixtures: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let graph_json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            &cli.graph_path, e
        ))
    });
    let graph: Value = serde_json::from_str(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)));

    let output = match cli.operation {
        Operation::Validate => to_pretty(&graphsmith::service::validate(graph)),
        Operation::Explain => to_pretty(&graphsmith::service::explain(
            json!({"graph_spec": graph}),
        )),
        Operation::DryRun => {
            let fixtures = match &cli.fixtures {
                Some(path) => {
                    let raw = fs::read_to_string(path).unwrap_or_else(|e| {
                        exit_with_error(&format!("Failed to read fixtures file '{}': {}", path, e))
                    });
                    serde_json::from_str(&raw).unwrap_or_else(|e| {
                        exit_with_error(&format!("Failed to parse fixtures JSON: {}", e))
                    })
                }
                None => Value::Null,
            };
            to_pretty(&graphsmith::service::dry_run(
                json!({"graph": graph, "fixtures": fixtures}),
            ))
        }
        Operation::Describe => {
            let brief = cli.brief.unwrap_or_else(|| {
                exit_with_error("A --brief is required in describe mode.");
            });
            to_pretty(&graphsmith::service::describe(
                json!({"brief": brief, "graph_spec": graph}),
            ))
        }
    };

    println!("{}", output);
}

fn to_pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize response: {}", e)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
