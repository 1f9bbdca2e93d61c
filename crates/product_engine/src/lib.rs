//! # Product Engine (L2: Simulation)
//!
//! Scenario-driven simulation engine for brick-graph products.
//!
//! This crate provides:
//! - Market scenarios (four fixed presets plus fully custom paths)
//! - Stochastic price-path generation (geometric recurrence, Box-Muller
//!   normal draws, optional endpoint targeting)
//! - Per-step payoff evaluation over a product graph
//! - A simulation loop producing a payoff series and summary risk
//!   statistics, with a rayon-backed batch runner for scenario comparison
//!
//! ## Design Principles
//!
//! - **Pure runs**: each simulation is a function of (graph, scenario,
//!   randomness); the graph is never mutated and no state is shared
//!   between runs
//! - **Reproducibility**: all randomness flows through a seedable
//!   [`NormalSource`](rng::NormalSource), so tests can substitute a fixed
//!   draw sequence
//! - **Local errors**: a failing scenario fails its own run and nothing
//!   else
//!
//! ## Usage Example
//!
//! ```rust
//! use product_core::ProductTemplate;
//! use product_engine::{MarketScenario, SimulationEngine};
//!
//! let graph = ProductTemplate::TwinWinNote.build().unwrap();
//! let engine = SimulationEngine::builder().seed(42).build();
//! let result = engine
//!     .simulate(&graph, &MarketScenario::bull_market())
//!     .unwrap();
//! assert_eq!(result.payoff_data.len(), 253);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod path;
pub mod payoff;
pub mod rng;
pub mod scenario;

pub use engine::{
    EngineConfig, PayoffPoint, SimulationEngine, SimulationError, SimulationResult,
};
pub use path::generate_price_path;
pub use payoff::{evaluate_step, StepOutcome};
pub use rng::{EngineRng, FixedNormalSource, NormalSource};
pub use scenario::{MarketScenario, ScenarioError, ScenarioKind, ScenarioParams};
