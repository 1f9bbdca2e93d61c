//! Pre-wired product templates.
//!
//! Templates are starting points for common structured-product shapes;
//! each builds a fresh [`Graph`] through the normal mutation API, so
//! every template satisfies the structural invariants by construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bricks::{
    BarrierTriggerProps, BondProps, BrickKind, BrickProperties, Catalog, FinalPayoutProps,
    OptionStyle, PositionSide, RangeOptionProps, TriggerType, VanillaOptionProps,
};
use crate::graph::{ConnectionRequest, Graph, GraphError};
use crate::types::Position;

/// The built-in product templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductTemplate {
    /// Autocallable note with memory coupons and barrier protection.
    SnowballNote,
    /// High-yield note funding a short downside put.
    ReverseConvertible,
    /// Symmetric participation in both market directions.
    TwinWinNote,
    /// Daily range accrual.
    Accumulator,
}

impl ProductTemplate {
    /// All templates, in palette order.
    pub const ALL: [ProductTemplate; 4] = [
        ProductTemplate::SnowballNote,
        ProductTemplate::ReverseConvertible,
        ProductTemplate::TwinWinNote,
        ProductTemplate::Accumulator,
    ];

    /// Stable template identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ProductTemplate::SnowballNote => "snowball-note",
            ProductTemplate::ReverseConvertible => "reverse-convertible",
            ProductTemplate::TwinWinNote => "twin-win",
            ProductTemplate::Accumulator => "accumulator",
        }
    }

    /// Human-readable template name.
    pub fn name(&self) -> &'static str {
        match self {
            ProductTemplate::SnowballNote => "Snowball Note",
            ProductTemplate::ReverseConvertible => "Reverse Convertible",
            ProductTemplate::TwinWinNote => "Twin Win Note",
            ProductTemplate::Accumulator => "Accumulator",
        }
    }

    /// One-line template description.
    pub fn description(&self) -> &'static str {
        match self {
            ProductTemplate::SnowballNote => {
                "Autocallable note with memory coupon feature and barrier protection"
            }
            ProductTemplate::ReverseConvertible => {
                "High yield note with downside equity exposure"
            }
            ProductTemplate::TwinWinNote => {
                "Symmetric payoff structure with upside and downside participation"
            }
            ProductTemplate::Accumulator => {
                "Daily range accrual with leverage and knockout features"
            }
        }
    }

    /// Looks up a template by its stable id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().find(|t| t.id() == id).copied()
    }

    /// Builds the template's graph.
    pub fn build(&self) -> Result<Graph, GraphError> {
        match self {
            ProductTemplate::SnowballNote => build_snowball_note(),
            ProductTemplate::ReverseConvertible => build_reverse_convertible(),
            ProductTemplate::TwinWinNote => build_twin_win_note(),
            ProductTemplate::Accumulator => build_accumulator(),
        }
    }
}

impl fmt::Display for ProductTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn place(graph: &mut Graph, kind: BrickKind, x: f64, y: f64) -> String {
    let mut brick = Catalog::create(kind);
    brick.position = Position::new(x, y);
    graph.add_brick(brick)
}

fn place_with(
    graph: &mut Graph,
    kind: BrickKind,
    x: f64,
    y: f64,
    properties: BrickProperties,
) -> String {
    let mut brick = Catalog::create(kind);
    brick.position = Position::new(x, y);
    brick.properties = properties;
    graph.add_brick(brick)
}

fn build_snowball_note() -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    let underlying = place(&mut graph, BrickKind::UnderlyingAsset, 100.0, 100.0);
    let _schedule = place(&mut graph, BrickKind::CouponSchedule, 300.0, 50.0);
    let barrier = place_with(
        &mut graph,
        BrickKind::BarrierTrigger,
        300.0,
        150.0,
        BrickProperties::BarrierTrigger(BarrierTriggerProps {
            barrier_level: 3200.0,
            trigger: TriggerType::Below,
            continuous: true,
        }),
    );
    let autocall = place(&mut graph, BrickKind::AutocallTrigger, 500.0, 100.0);
    let _memory = place(&mut graph, BrickKind::MemoryBuffer, 500.0, 200.0);
    let knockin = place(&mut graph, BrickKind::KnockInCheck, 300.0, 250.0);
    let payout = place_with(
        &mut graph,
        BrickKind::FinalPayout,
        700.0,
        150.0,
        BrickProperties::FinalPayout(FinalPayoutProps {
            protection_level: 0.8,
            participation_rate: 1.0,
            cap: None,
            floor: None,
        }),
    );

    graph.add_connection(ConnectionRequest::new(&underlying, "price", &barrier, "price"))?;
    graph.add_connection(ConnectionRequest::new(&underlying, "price", &autocall, "price"))?;
    graph.add_connection(ConnectionRequest::new(&barrier, "triggered", &knockin, "trigger"))?;
    graph.add_connection(ConnectionRequest::new(&autocall, "autocall", &payout, "finalPrice"))?;
    graph.add_connection(ConnectionRequest::new(&knockin, "knockedIn", &payout, "knockedIn"))?;
    Ok(graph)
}

fn build_reverse_convertible() -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    let underlying = place(&mut graph, BrickKind::UnderlyingAsset, 100.0, 100.0);
    let option = place_with(
        &mut graph,
        BrickKind::VanillaOption,
        300.0,
        150.0,
        BrickProperties::VanillaOption(VanillaOptionProps {
            style: OptionStyle::Put,
            side: PositionSide::Short,
            strike: 3200.0,
            ..VanillaOptionProps::default()
        }),
    );
    let bond = place_with(
        &mut graph,
        BrickKind::Bond,
        300.0,
        50.0,
        BrickProperties::Bond(BondProps {
            coupon_rate: 0.08,
            ..BondProps::default()
        }),
    );
    let _schedule = place(&mut graph, BrickKind::CouponSchedule, 500.0, 50.0);
    let payout = place(&mut graph, BrickKind::FinalPayout, 700.0, 100.0);

    graph.add_connection(ConnectionRequest::new(&underlying, "price", &option, "underlying"))?;
    graph.add_connection(ConnectionRequest::new(&option, "payoff", &payout, "finalPrice"))?;
    graph.add_connection(ConnectionRequest::new(&bond, "value", &payout, "knockedIn"))?;
    Ok(graph)
}

fn build_twin_win_note() -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    let underlying = place(&mut graph, BrickKind::UnderlyingAsset, 100.0, 100.0);
    let call = place_with(
        &mut graph,
        BrickKind::VanillaOption,
        300.0,
        50.0,
        BrickProperties::VanillaOption(VanillaOptionProps::default()),
    );
    let put = place_with(
        &mut graph,
        BrickKind::VanillaOption,
        300.0,
        150.0,
        BrickProperties::VanillaOption(VanillaOptionProps {
            style: OptionStyle::Put,
            ..VanillaOptionProps::default()
        }),
    );
    let sum = place(&mut graph, BrickKind::Sum, 500.0, 100.0);

    graph.add_connection(ConnectionRequest::new(&underlying, "price", &call, "underlying"))?;
    graph.add_connection(ConnectionRequest::new(&underlying, "price", &put, "underlying"))?;
    graph.add_connection(ConnectionRequest::new(&call, "payoff", &sum, "input1"))?;
    graph.add_connection(ConnectionRequest::new(&put, "payoff", &sum, "input2"))?;
    Ok(graph)
}

fn build_accumulator() -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    let underlying = place(&mut graph, BrickKind::UnderlyingAsset, 100.0, 100.0);
    let range = place_with(
        &mut graph,
        BrickKind::RangeOption,
        300.0,
        100.0,
        BrickProperties::RangeOption(RangeOptionProps {
            payout_per_day: 2.0,
            ..RangeOptionProps::default()
        }),
    );
    let accumulator = place(&mut graph, BrickKind::CouponAccumulator, 500.0, 100.0);
    let _timer = place(&mut graph, BrickKind::Timer, 300.0, 200.0);

    graph.add_connection(ConnectionRequest::new(&underlying, "price", &range, "underlying"))?;
    graph.add_connection(ConnectionRequest::new(&range, "payoff", &accumulator, "condition"))?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_builds_a_valid_graph() {
        for template in ProductTemplate::ALL {
            let graph = template.build().unwrap();
            assert!(graph.validate().is_ok(), "{}", template.id());
            assert!(!graph.bricks().is_empty());
            assert!(!graph.connections().is_empty());
        }
    }

    #[test]
    fn test_from_id_round_trip() {
        for template in ProductTemplate::ALL {
            assert_eq!(ProductTemplate::from_id(template.id()), Some(template));
        }
        assert_eq!(ProductTemplate::from_id("rainbow"), None);
    }

    #[test]
    fn test_snowball_shape() {
        let graph = ProductTemplate::SnowballNote.build().unwrap();
        assert_eq!(graph.bricks().len(), 7);
        assert_eq!(graph.connections().len(), 5);

        let barrier = graph
            .bricks()
            .iter()
            .find(|b| b.kind == BrickKind::BarrierTrigger)
            .unwrap();
        match &barrier.properties {
            BrickProperties::BarrierTrigger(props) => {
                assert_eq!(props.barrier_level, 3200.0);
                assert_eq!(props.trigger, TriggerType::Below);
            }
            other => panic!("unexpected properties: {:?}", other),
        }
    }

    #[test]
    fn test_reverse_convertible_sells_downside_put() {
        let graph = ProductTemplate::ReverseConvertible.build().unwrap();
        let option = graph
            .bricks()
            .iter()
            .find(|b| b.kind == BrickKind::VanillaOption)
            .unwrap();
        match &option.properties {
            BrickProperties::VanillaOption(props) => {
                assert_eq!(props.style, OptionStyle::Put);
                assert_eq!(props.side, PositionSide::Short);
                assert_eq!(props.strike, 3200.0);
            }
            other => panic!("unexpected properties: {:?}", other),
        }
    }

    #[test]
    fn test_twin_win_wires_both_legs_into_sum() {
        let graph = ProductTemplate::TwinWinNote.build().unwrap();
        let sum = graph
            .bricks()
            .iter()
            .find(|b| b.kind == BrickKind::Sum)
            .unwrap();
        assert!(sum.inputs.iter().all(|p| p.connected));
    }
}
