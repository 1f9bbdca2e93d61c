//! Brick category enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse grouping of brick kinds.
///
/// The category is derived from the brick kind and is used for display
/// grouping and default wiring conventions, never for evaluation
/// branching (evaluators match on the kind itself).
///
/// # Examples
///
/// ```
/// use product_core::BrickCategory;
///
/// assert_eq!(BrickCategory::Option.to_string(), "option");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrickCategory {
    /// Market observables and funding legs (underlying assets, bonds).
    Asset,
    /// Optionality bricks contributing payoff.
    Option,
    /// Boolean conditions, triggers, and stateful trackers.
    Logic,
    /// Payment-flow elements (schedules, coupons, final payout).
    Flow,
    /// Arithmetic and selection operators.
    Math,
}

impl fmt::Display for BrickCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BrickCategory::Asset => "asset",
            BrickCategory::Option => "option",
            BrickCategory::Logic => "logic",
            BrickCategory::Flow => "flow",
            BrickCategory::Math => "math",
        };
        write!(f, "{}", name)
    }
}
