//! Market scenarios and the fixed preset set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scenario family selecting the drift/noise treatment of the path
/// generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// Drifting upward; full drift term applies.
    Uptrend,
    /// Drifting downward; full drift term applies.
    Downtrend,
    /// No drift; stochastic term only.
    Flat,
    /// Full drift with the stochastic term scaled by 1.5.
    Volatile,
    /// Caller-supplied path; no generation, no endpoint warp.
    Custom,
}

/// Numeric parameters of a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Spot price at the start of the horizon.
    pub start_price: f64,
    /// Target price at the end of the horizon, if any. When set (and the
    /// kind is not [`ScenarioKind::Custom`]) the generated path is warped
    /// to land exactly here.
    pub end_price: Option<f64>,
    /// Annualised volatility of the stochastic term.
    pub volatility: f64,
    /// Annualised drift.
    pub drift: f64,
    /// Horizon in years.
    pub time_horizon: f64,
    /// Number of simulation steps; the path has `steps + 1` points.
    pub steps: usize,
}

/// Errors raised while resolving a scenario into a price path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    /// A custom scenario's supplied path does not have `steps + 1`
    /// points. Fatal to that run only.
    #[error("custom path has {got} points, expected {expected}")]
    CustomPathLengthMismatch {
        /// Required number of points (`steps + 1`).
        expected: usize,
        /// Number of points actually supplied.
        got: usize,
    },

    /// The scenario requests zero steps, leaving the recurrence with a
    /// zero-length horizon division.
    #[error("scenario requires at least one step")]
    InvalidStepCount,
}

/// An immutable market scenario: identity, kind, parameters, and an
/// optional caller-supplied path.
///
/// # Examples
///
/// ```rust
/// use product_engine::{MarketScenario, ScenarioKind};
///
/// let bull = MarketScenario::bull_market();
/// assert_eq!(bull.kind, ScenarioKind::Uptrend);
/// assert_eq!(bull.params.steps, 252);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketScenario {
    /// Stable scenario identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Scenario family.
    pub kind: ScenarioKind,
    /// Numeric parameters.
    pub params: ScenarioParams,
    /// Explicit path for [`ScenarioKind::Custom`] scenarios. Must hold
    /// exactly `steps + 1` points when present. A custom scenario
    /// without a path falls back to generation with the default drift
    /// treatment.
    pub custom_path: Option<Vec<f64>>,
}

impl MarketScenario {
    /// The four fixed presets, in presentation order.
    pub fn presets() -> Vec<MarketScenario> {
        vec![
            Self::bull_market(),
            Self::bear_market(),
            Self::sideways_market(),
            Self::volatile_market(),
        ]
    }

    /// Looks up a preset by its stable id.
    pub fn preset(id: &str) -> Option<MarketScenario> {
        Self::presets().into_iter().find(|s| s.id == id)
    }

    /// Bull market preset: 4000 to 5000 over one year, vol 0.15,
    /// drift 0.20, 252 steps.
    pub fn bull_market() -> MarketScenario {
        MarketScenario {
            id: "bull".to_string(),
            name: "Bull Market".to_string(),
            kind: ScenarioKind::Uptrend,
            params: ScenarioParams {
                start_price: 4000.0,
                end_price: Some(5000.0),
                volatility: 0.15,
                drift: 0.20,
                time_horizon: 1.0,
                steps: 252,
            },
            custom_path: None,
        }
    }

    /// Bear market preset: 4000 to 3200 over one year, vol 0.25,
    /// drift -0.20, 252 steps.
    pub fn bear_market() -> MarketScenario {
        MarketScenario {
            id: "bear".to_string(),
            name: "Bear Market".to_string(),
            kind: ScenarioKind::Downtrend,
            params: ScenarioParams {
                start_price: 4000.0,
                end_price: Some(3200.0),
                volatility: 0.25,
                drift: -0.20,
                time_horizon: 1.0,
                steps: 252,
            },
            custom_path: None,
        }
    }

    /// Sideways market preset: 4000 to 4000 over one year, vol 0.12,
    /// zero drift, 252 steps.
    pub fn sideways_market() -> MarketScenario {
        MarketScenario {
            id: "sideways".to_string(),
            name: "Sideways Market".to_string(),
            kind: ScenarioKind::Flat,
            params: ScenarioParams {
                start_price: 4000.0,
                end_price: Some(4000.0),
                volatility: 0.12,
                drift: 0.0,
                time_horizon: 1.0,
                steps: 252,
            },
            custom_path: None,
        }
    }

    /// Volatile market preset: 4000 to 4200 over one year, vol 0.35,
    /// drift 0.05, 252 steps.
    pub fn volatile_market() -> MarketScenario {
        MarketScenario {
            id: "volatile".to_string(),
            name: "Volatile Market".to_string(),
            kind: ScenarioKind::Volatile,
            params: ScenarioParams {
                start_price: 4000.0,
                end_price: Some(4200.0),
                volatility: 0.35,
                drift: 0.05,
                time_horizon: 1.0,
                steps: 252,
            },
            custom_path: None,
        }
    }

    /// Builds a custom scenario around an explicit path.
    ///
    /// The step count is derived from the path length, so the resulting
    /// scenario always satisfies the `steps + 1` length contract.
    pub fn custom(
        id: impl Into<String>,
        name: impl Into<String>,
        path: Vec<f64>,
        time_horizon: f64,
    ) -> Result<MarketScenario, ScenarioError> {
        if path.len() < 2 {
            return Err(ScenarioError::InvalidStepCount);
        }
        let start_price = path[0];
        Ok(MarketScenario {
            id: id.into(),
            name: name.into(),
            kind: ScenarioKind::Custom,
            params: ScenarioParams {
                start_price,
                end_price: None,
                volatility: 0.0,
                drift: 0.0,
                time_horizon,
                steps: path.len() - 1,
            },
            custom_path: Some(path),
        })
    }
}
