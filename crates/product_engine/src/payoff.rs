//! Per-step payoff evaluation over a product graph.
//!
//! The base evaluator is per-step and path-state-free: each step's
//! payoff is a pure function of the spot price and brick properties. It
//! scans every option-category brick and every barrier/autocall trigger
//! in the graph regardless of wiring, so the connection layer stays
//! structural.

use product_core::{
    Brick, BrickCategory, BrickProperties, DigitalBarrier, Graph, OptionStyle, TriggerType,
};

/// Touch-trigger tolerance on |spot - level|.
const TOUCH_EPSILON: f64 = 0.01;

/// Payoff and trigger events produced for a single step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Aggregate option payoff at this step.
    pub payoff: f64,
    /// Descriptive trigger event strings, one per trigger condition
    /// holding at this step. Never deduplicated across steps.
    pub events: Vec<String>,
}

/// Evaluates one simulation step.
///
/// Aggregates the payoff of every option-category brick and collects
/// trigger events from every [`BarrierTrigger`] and [`AutocallTrigger`]
/// brick. Bricks whose payoff is inherently path-dependent (barrier and
/// lookback options) contribute zero here.
///
/// [`BarrierTrigger`]: product_core::BrickKind::BarrierTrigger
/// [`AutocallTrigger`]: product_core::BrickKind::AutocallTrigger
///
/// # Examples
///
/// ```rust
/// use product_core::{BrickKind, Catalog, Graph};
/// use product_engine::evaluate_step;
///
/// let mut graph = Graph::new();
/// graph.add_brick(Catalog::create(BrickKind::VanillaOption));
///
/// // Default call struck at 4000.
/// let outcome = evaluate_step(&graph, 4250.0, 0.5);
/// assert_eq!(outcome.payoff, 250.0);
/// ```
pub fn evaluate_step(graph: &Graph, spot_price: f64, _time: f64) -> StepOutcome {
    let mut payoff = 0.0;
    let mut events = Vec::new();

    for brick in graph.bricks() {
        if brick.category() == BrickCategory::Option {
            payoff += option_payoff(brick, spot_price);
        }
        collect_trigger_events(brick, spot_price, &mut events);
    }

    StepOutcome { payoff, events }
}

fn option_payoff(brick: &Brick, spot: f64) -> f64 {
    match &brick.properties {
        BrickProperties::VanillaOption(props) => {
            let intrinsic = match props.style {
                OptionStyle::Call => (spot - props.strike).max(0.0),
                OptionStyle::Put => (props.strike - spot).max(0.0),
            };
            intrinsic * props.side.sign() * (props.notional / 1000.0)
        }
        BrickProperties::DigitalOption(props) => {
            let pays = match props.barrier {
                DigitalBarrier::Above => spot >= props.strike,
                DigitalBarrier::Below => spot <= props.strike,
            };
            if pays {
                props.payout_amount
            } else {
                0.0
            }
        }
        BrickProperties::RangeOption(props) => {
            // Accrues per step while the spot sits inside the range.
            if spot >= props.lower_bound && spot <= props.upper_bound {
                props.payout_per_day
            } else {
                0.0
            }
        }
        // Barrier and lookback payoffs depend on the whole path, which
        // the per-step contract does not carry.
        _ => 0.0,
    }
}

fn collect_trigger_events(brick: &Brick, spot: f64, events: &mut Vec<String>) {
    match &brick.properties {
        BrickProperties::BarrierTrigger(props) => {
            let level = props.barrier_level;
            let (hit, label) = match props.trigger {
                TriggerType::Above => (spot >= level, "above"),
                TriggerType::Below => (spot <= level, "below"),
                TriggerType::Touch => ((spot - level).abs() < TOUCH_EPSILON, "touch"),
            };
            if hit {
                events.push(format!("Barrier {} {} triggered", label, level));
            }
        }
        BrickProperties::AutocallTrigger(props) => {
            if spot >= props.autocall_level {
                events.push(format!("Autocall at {} triggered", props.autocall_level));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_core::bricks::{
        BarrierTriggerProps, DigitalBarrier, DigitalOptionProps, OptionStyle, PositionSide,
        RangeOptionProps, VanillaOptionProps,
    };
    use product_core::{BrickKind, BrickProperties, BrickUpdate, Catalog, Graph, TriggerType};

    fn graph_with(kind: BrickKind, properties: BrickProperties) -> Graph {
        let mut graph = Graph::new();
        let id = graph.add_brick(Catalog::create(kind));
        graph.update_brick(&id, BrickUpdate::properties(properties));
        graph
    }

    #[test]
    fn test_empty_graph_is_silent() {
        let outcome = evaluate_step(&Graph::new(), 4000.0, 0.0);
        assert_eq!(outcome.payoff, 0.0);
        assert!(outcome.events.is_empty());
    }

    #[test]
    fn test_vanilla_call_intrinsic() {
        let graph = graph_with(
            BrickKind::VanillaOption,
            BrickProperties::VanillaOption(VanillaOptionProps::default()),
        );
        assert_eq!(evaluate_step(&graph, 4300.0, 0.0).payoff, 300.0);
        assert_eq!(evaluate_step(&graph, 3700.0, 0.0).payoff, 0.0);
    }

    #[test]
    fn test_short_put_flips_sign_and_scales_notional() {
        let graph = graph_with(
            BrickKind::VanillaOption,
            BrickProperties::VanillaOption(VanillaOptionProps {
                style: OptionStyle::Put,
                side: PositionSide::Short,
                strike: 3200.0,
                notional: 2000.0,
                ..VanillaOptionProps::default()
            }),
        );
        // Intrinsic 200, shorted, notional 2000/1000.
        assert_eq!(evaluate_step(&graph, 3000.0, 0.0).payoff, -400.0);
        assert_eq!(evaluate_step(&graph, 3500.0, 0.0).payoff, 0.0);
    }

    #[test]
    fn test_digital_threshold_is_inclusive() {
        let graph = graph_with(
            BrickKind::DigitalOption,
            BrickProperties::DigitalOption(DigitalOptionProps {
                strike: 4000.0,
                payout_amount: 100.0,
                barrier: DigitalBarrier::Above,
                ..DigitalOptionProps::default()
            }),
        );
        assert_eq!(evaluate_step(&graph, 4000.0, 0.0).payoff, 100.0);
        assert_eq!(evaluate_step(&graph, 3999.99, 0.0).payoff, 0.0);
    }

    #[test]
    fn test_digital_below() {
        let graph = graph_with(
            BrickKind::DigitalOption,
            BrickProperties::DigitalOption(DigitalOptionProps {
                barrier: DigitalBarrier::Below,
                ..DigitalOptionProps::default()
            }),
        );
        assert_eq!(evaluate_step(&graph, 3500.0, 0.0).payoff, 100.0);
        assert_eq!(evaluate_step(&graph, 4500.0, 0.0).payoff, 0.0);
    }

    #[test]
    fn test_range_accrues_inside_bounds_only() {
        let graph = graph_with(
            BrickKind::RangeOption,
            BrickProperties::RangeOption(RangeOptionProps {
                lower_bound: 3800.0,
                upper_bound: 4200.0,
                payout_per_day: 2.0,
                ..RangeOptionProps::default()
            }),
        );
        assert_eq!(evaluate_step(&graph, 4000.0, 0.0).payoff, 2.0);
        assert_eq!(evaluate_step(&graph, 3800.0, 0.0).payoff, 2.0);
        assert_eq!(evaluate_step(&graph, 4300.0, 0.0).payoff, 0.0);
    }

    #[test]
    fn test_path_dependent_options_contribute_zero() {
        let mut graph = Graph::new();
        graph.add_brick(Catalog::create(BrickKind::BarrierOption));
        graph.add_brick(Catalog::create(BrickKind::LookbackOption));
        assert_eq!(evaluate_step(&graph, 5000.0, 0.0).payoff, 0.0);
    }

    #[test]
    fn test_barrier_trigger_events() {
        let graph = graph_with(
            BrickKind::BarrierTrigger,
            BrickProperties::BarrierTrigger(BarrierTriggerProps {
                barrier_level: 3200.0,
                trigger: TriggerType::Below,
                continuous: true,
            }),
        );
        let outcome = evaluate_step(&graph, 3100.0, 0.0);
        assert_eq!(outcome.events, vec!["Barrier below 3200 triggered"]);
        assert!(evaluate_step(&graph, 3300.0, 0.0).events.is_empty());
    }

    #[test]
    fn test_touch_trigger_uses_epsilon() {
        let graph = graph_with(
            BrickKind::BarrierTrigger,
            BrickProperties::BarrierTrigger(BarrierTriggerProps {
                barrier_level: 4000.0,
                trigger: TriggerType::Touch,
                continuous: true,
            }),
        );
        assert_eq!(evaluate_step(&graph, 4000.005, 0.0).events.len(), 1);
        assert!(evaluate_step(&graph, 4000.02, 0.0).events.is_empty());
    }

    #[test]
    fn test_autocall_event() {
        let mut graph = Graph::new();
        graph.add_brick(Catalog::create(BrickKind::AutocallTrigger));
        let outcome = evaluate_step(&graph, 4100.0, 0.0);
        assert_eq!(outcome.events, vec!["Autocall at 4000 triggered"]);
        assert!(evaluate_step(&graph, 3900.0, 0.0).events.is_empty());
    }

    #[test]
    fn test_multiple_bricks_aggregate() {
        let mut graph = Graph::new();
        let call = graph.add_brick(Catalog::create(BrickKind::VanillaOption));
        let put = graph.add_brick(Catalog::create(BrickKind::VanillaOption));
        graph.update_brick(
            &put,
            BrickUpdate::properties(BrickProperties::VanillaOption(VanillaOptionProps {
                style: OptionStyle::Put,
                ..VanillaOptionProps::default()
            })),
        );
        graph.update_brick(&call, BrickUpdate::default());
        // Straddle: |spot - strike| at every spot.
        assert_eq!(evaluate_step(&graph, 4300.0, 0.0).payoff, 300.0);
        assert_eq!(evaluate_step(&graph, 3600.0, 0.0).payoff, 400.0);
    }
}
