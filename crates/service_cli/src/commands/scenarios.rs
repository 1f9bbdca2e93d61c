//! Scenarios command implementation
//!
//! Lists the preset market scenarios.

use product_engine::MarketScenario;

use crate::Result;

/// Run the scenarios command
pub fn run() -> Result<()> {
    println!(
        "{:<10} {:<18} {:>8} {:>8} {:>6} {:>7} {:>6}",
        "ID", "NAME", "START", "END", "VOL", "DRIFT", "STEPS"
    );
    for scenario in MarketScenario::presets() {
        let params = &scenario.params;
        println!(
            "{:<10} {:<18} {:>8} {:>8} {:>6} {:>7} {:>6}",
            scenario.id,
            scenario.name,
            params.start_price,
            params.end_price.map_or("-".to_string(), |p| p.to_string()),
            params.volatility,
            params.drift,
            params.steps,
        );
    }
    Ok(())
}
