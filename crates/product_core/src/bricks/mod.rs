//! Brick kinds, property shapes, and the creation catalog.

mod catalog;
mod kind;
mod properties;

pub use catalog::Catalog;
pub use kind::{BrickKind, UnknownBrickKind};
pub use properties::{
    AutocallHandlerProps, AutocallTriggerProps, BarrierOptionProps, BarrierStyle,
    BarrierTriggerProps, BondProps, BrickProperties, CompareOp, CompareProps,
    CouponAccumulatorProps, CouponFrequency, CouponLogicProps, CouponScheduleProps, DigitalBarrier,
    DigitalOptionProps, FinalPayoutProps, HighWatermarkTrackerProps, IfThenElseProps,
    KnockInCheckProps, LookbackOptionProps, LookbackStyle, MemoryBufferProps, MultiplierProps,
    ObservationProps, OptionStyle, PositionSide, RangeOptionProps, ResetFrequency, SelectionMode,
    SelectorProps, SumProps, TargetTrackerProps, TimeUnit, TimerProps, TrackingMode, TriggerType,
    UnderlyingAssetProps, VanillaOptionProps,
};

use serde::{Deserialize, Serialize};

use crate::types::{BrickCategory, InputPort, OutputPort, Position};

/// A node in a product graph.
///
/// A brick couples a fixed port interface (determined by its kind) with
/// a user-editable property set and a canvas position. Brick identity is
/// the `id` string, assigned by the owning [`Graph`](crate::Graph).
///
/// Port lists never change shape after creation; only the `connected`
/// flags on input ports are mutated, and only by graph operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Graph-unique identifier.
    pub id: String,
    /// Brick kind.
    pub kind: BrickKind,
    /// Canvas layout position.
    pub position: Position,
    /// Ordered input ports.
    pub inputs: Vec<InputPort>,
    /// Ordered output ports.
    pub outputs: Vec<OutputPort>,
    /// Kind-specific properties.
    pub properties: BrickProperties,
}

impl Brick {
    /// Returns the display category, derived from the kind.
    #[inline]
    pub fn category(&self) -> BrickCategory {
        self.kind.category()
    }

    /// Looks up an input port by id.
    pub fn input(&self, port_id: &str) -> Option<&InputPort> {
        self.inputs.iter().find(|p| p.id == port_id)
    }

    /// Looks up an output port by id.
    pub fn output(&self, port_id: &str) -> Option<&OutputPort> {
        self.outputs.iter().find(|p| p.id == port_id)
    }
}
