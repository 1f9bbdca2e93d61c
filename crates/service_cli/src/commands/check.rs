//! Check command implementation
//!
//! Validates a serialized graph file against the structural invariant.

use tracing::info;

use product_core::Graph;

use crate::{CliError, Result};

/// Run the check command
pub fn run(path: &str) -> Result<()> {
    if !std::path::Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }

    let raw = std::fs::read_to_string(path)?;
    let graph: Graph = serde_json::from_str(&raw)?;
    graph.validate()?;

    info!("Graph validated");
    println!(
        "ok: {} bricks, {} connections",
        graph.bricks().len(),
        graph.connections().len()
    );
    Ok(())
}
