// Fund Analysts - CLI
// Small inspection tool over the analyst registry:
//   list   - ordered table of personas (default)
//   json   - API listing as JSON
//   nodes  - node plan handed to the pipeline graph builder

use anyhow::{Context, Result};
use std::env;

use fund_analysts::{default_registry, AnalystRegistry};

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("list");

    // Registry build failures are fatal: never work from a partial table.
    let registry = default_registry().context("failed to build analyst registry")?;

    match mode {
        "list" => print_list(&registry),
        "json" => print_json(&registry)?,
        "nodes" => print_nodes(&registry),
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Usage: fund-analysts [list|json|nodes]");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .compact()
        .init();
}

fn print_list(registry: &AnalystRegistry) {
    println!("📇 Analyst Registry - {} personas", registry.len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for info in registry.api_list() {
        println!(
            "{:>4}  {:<24} {:<12} {}",
            info.rank, info.display_name, info.localized_name, info.description
        );
    }
}

fn print_json(registry: &AnalystRegistry) -> Result<()> {
    let json = serde_json::to_string_pretty(&registry.api_list())?;
    println!("{}", json);
    Ok(())
}

fn print_nodes(registry: &AnalystRegistry) {
    println!("🔗 Pipeline node plan - one node per analyst");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let bindings = registry.node_bindings();
    // Present in registry order, not map order
    for (_, key) in registry.ordered() {
        let (node_name, _) = &bindings[&key];
        println!("{:<24} → node {}", key, node_name);
    }
}
