//! Brick creation catalog.

use crate::types::{InputPort, OutputPort, PortType, Position};

use super::kind::BrickKind;
use super::properties::BrickProperties;
use super::Brick;

/// Factory for fresh bricks with their canonical port interface and
/// default properties.
///
/// The catalog is the single source of truth for per-kind port lists;
/// graphs never invent or resize ports.
///
/// # Examples
///
/// ```
/// use product_core::{BrickKind, Catalog, PortType};
///
/// let brick = Catalog::create(BrickKind::VanillaOption);
/// assert_eq!(brick.inputs.len(), 1);
/// assert_eq!(brick.inputs[0].port_type, PortType::Asset);
/// assert_eq!(brick.outputs[0].id, "payoff");
/// ```
pub struct Catalog;

impl Catalog {
    /// Creates a brick of the given kind at the canvas origin.
    ///
    /// The returned brick has an empty id; the owning graph assigns one
    /// on insertion.
    pub fn create(kind: BrickKind) -> Brick {
        let (inputs, outputs) = Self::ports(kind);
        Brick {
            id: String::new(),
            kind,
            position: Position::default(),
            inputs,
            outputs,
            properties: BrickProperties::default_for(kind),
        }
    }

    /// Creates a brick by kind name, returning `None` for unknown names.
    pub fn create_by_name(name: &str) -> Option<Brick> {
        name.parse::<BrickKind>().ok().map(Self::create)
    }

    /// Returns the canonical (inputs, outputs) interface for a kind.
    pub fn ports(kind: BrickKind) -> (Vec<InputPort>, Vec<OutputPort>) {
        use PortType::*;
        match kind {
            BrickKind::UnderlyingAsset => {
                (vec![], vec![OutputPort::new("price", "Price", Number)])
            }
            BrickKind::Bond => (vec![], vec![OutputPort::new("value", "Value", Number)]),
            BrickKind::VanillaOption
            | BrickKind::DigitalOption
            | BrickKind::BarrierOption
            | BrickKind::LookbackOption
            | BrickKind::RangeOption => (
                vec![InputPort::new("underlying", "Underlying", Asset)],
                vec![OutputPort::new("payoff", "Payoff", Number)],
            ),
            BrickKind::IfThenElse => (
                vec![
                    InputPort::new("condition", "Condition", Boolean),
                    InputPort::new("then", "Then", Any),
                    InputPort::new("else", "Else", Any),
                ],
                vec![OutputPort::new("result", "Result", Any)],
            ),
            BrickKind::BarrierTrigger => (
                vec![InputPort::new("price", "Price", Number)],
                vec![OutputPort::new("triggered", "Triggered", Boolean)],
            ),
            BrickKind::AutocallTrigger => (
                vec![InputPort::new("price", "Price", Number)],
                vec![OutputPort::new("autocall", "Autocall", Boolean)],
            ),
            BrickKind::KnockInCheck => (
                vec![InputPort::new("trigger", "Trigger", Boolean)],
                vec![OutputPort::new("knockedIn", "Knocked In", Boolean)],
            ),
            BrickKind::MemoryBuffer => (
                vec![InputPort::new("coupon", "Coupon", Number)],
                vec![OutputPort::new("buffered", "Buffered", Number)],
            ),
            BrickKind::HighWatermarkTracker => (
                vec![InputPort::new("value", "Value", Number)],
                vec![OutputPort::new("watermark", "Watermark", Number)],
            ),
            BrickKind::TargetTracker => (
                vec![InputPort::new("value", "Value", Number)],
                vec![OutputPort::new("targetMet", "Target Met", Boolean)],
            ),
            BrickKind::Observation => (
                vec![InputPort::new("price", "Price", Number)],
                vec![OutputPort::new("result", "Result", Boolean)],
            ),
            BrickKind::CouponSchedule => {
                (vec![], vec![OutputPort::new("schedule", "Schedule", Any)])
            }
            BrickKind::CouponLogic => (
                vec![
                    InputPort::new("condition", "Condition", Boolean),
                    InputPort::new("schedule", "Schedule", Any),
                ],
                vec![OutputPort::new("coupon", "Coupon", Number)],
            ),
            BrickKind::FinalPayout => (
                vec![
                    InputPort::new("finalPrice", "Final Price", Number),
                    InputPort::new("knockedIn", "Knocked In", Boolean),
                ],
                vec![OutputPort::new("payout", "Payout", Number)],
            ),
            BrickKind::AutocallHandler => (
                vec![InputPort::new("autocallTrigger", "Autocall Trigger", Boolean)],
                vec![OutputPort::new("payout", "Payout", Number)],
            ),
            BrickKind::CouponAccumulator => (
                vec![InputPort::new("condition", "Condition", Boolean)],
                vec![OutputPort::new("accumulated", "Accumulated", Number)],
            ),
            BrickKind::Sum => (
                vec![
                    InputPort::new("input1", "Input 1", Number),
                    InputPort::new("input2", "Input 2", Number),
                ],
                vec![OutputPort::new("sum", "Sum", Number)],
            ),
            BrickKind::Multiplier => (
                vec![InputPort::new("input", "Input", Number)],
                vec![OutputPort::new("output", "Output", Number)],
            ),
            BrickKind::Compare => (
                vec![InputPort::new("value", "Value", Number)],
                vec![OutputPort::new("result", "Result", Boolean)],
            ),
            BrickKind::Selector => (
                vec![
                    InputPort::new("asset1", "Asset 1", Number),
                    InputPort::new("asset2", "Asset 2", Number),
                ],
                vec![OutputPort::new("selected", "Selected", Number)],
            ),
            BrickKind::Timer => (
                vec![InputPort::new("startTrigger", "Start", Boolean)],
                vec![OutputPort::new("elapsed", "Elapsed", Number)],
            ),
        }
    }
}
