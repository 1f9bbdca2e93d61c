//! Simulate command implementation
//!
//! Simulates a product graph (from a built-in template or a serialized
//! file) under one preset scenario, or all of them.

use tracing::info;

use product_core::{Graph, ProductTemplate};
use product_engine::{MarketScenario, SimulationEngine, SimulationResult};

use crate::{CliConfig, CliError, Result};

/// Run the simulate command
pub fn run(
    config: &CliConfig,
    template: Option<&str>,
    graph_path: Option<&str>,
    scenario: &str,
    seed: Option<u64>,
    format: Option<&str>,
) -> Result<()> {
    let graph = load_graph(template, graph_path)?;
    let scenarios = resolve_scenarios(scenario)?;
    let format = format.unwrap_or_else(|| config.format());

    let mut builder = SimulationEngine::builder();
    if let Some(seed) = seed.or(config.seed) {
        builder = builder.seed(seed);
    }
    let engine = builder.build();

    info!("Simulating {} scenario(s)...", scenarios.len());
    let results = engine.simulate_batch(&graph, &scenarios);

    for result in results {
        let result = result?;
        match format {
            "json" => println!("{}", serde_json::to_string_pretty(&result)?),
            "table" => print_summary(&result),
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "Unknown format: {}. Supported: table, json",
                    other
                )));
            }
        }
    }

    info!("Simulation complete");
    Ok(())
}

fn load_graph(template: Option<&str>, graph_path: Option<&str>) -> Result<Graph> {
    match (template, graph_path) {
        (Some(id), None) => {
            let template = ProductTemplate::from_id(id).ok_or_else(|| {
                CliError::InvalidArgument(format!("unknown template: {}", id))
            })?;
            Ok(template.build()?)
        }
        (None, Some(path)) => {
            if !std::path::Path::new(path).exists() {
                return Err(CliError::FileNotFound(path.to_string()));
            }
            let raw = std::fs::read_to_string(path)?;
            let graph: Graph = serde_json::from_str(&raw)?;
            graph.validate()?;
            Ok(graph)
        }
        _ => Err(CliError::InvalidArgument(
            "exactly one of --template or --graph is required".to_string(),
        )),
    }
}

fn resolve_scenarios(id: &str) -> Result<Vec<MarketScenario>> {
    if id == "all" {
        return Ok(MarketScenario::presets());
    }
    MarketScenario::preset(id)
        .map(|s| vec![s])
        .ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "unknown scenario: {}. Supported: bull, bear, sideways, volatile, all",
                id
            ))
        })
}

fn print_summary(result: &SimulationResult) {
    println!("\nScenario: {} ({})", result.scenario.name, result.scenario.id);
    println!("  final payoff       {:>14.2}", result.final_payoff);
    println!("  max gain           {:>14.2}", result.max_gain);
    println!("  max drawdown       {:>14.2}", result.max_drawdown);
    println!(
        "  profit probability {:>13.1}%",
        result.probability_of_profit * 100.0
    );
    let triggered: usize = result
        .payoff_data
        .iter()
        .map(|p| p.trigger_events.len())
        .sum();
    println!("  trigger events     {:>14}", triggered);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_single_scenario() {
        let scenarios = resolve_scenarios("sideways").unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].id, "sideways");
    }

    #[test]
    fn test_resolve_all() {
        assert_eq!(resolve_scenarios("all").unwrap().len(), 4);
    }

    #[test]
    fn test_unknown_scenario_is_invalid_argument() {
        assert!(matches!(
            resolve_scenarios("crash"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_load_graph_from_template() {
        let graph = load_graph(Some("twin-win"), None).unwrap();
        assert!(!graph.bricks().is_empty());
    }

    #[test]
    fn test_load_graph_requires_exactly_one_source() {
        assert!(matches!(
            load_graph(None, None),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
