//! Brick kind enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::BrickCategory;

/// The fixed enumeration of brick kinds.
///
/// Kind names are stable identifiers used in serialized graphs and in
/// user-editable template data, so [`FromStr`] accepts exactly the
/// serialized spelling and nothing else.
///
/// # Examples
///
/// ```
/// use product_core::{BrickCategory, BrickKind};
///
/// assert_eq!(BrickKind::VanillaOption.category(), BrickCategory::Option);
/// assert_eq!("BarrierTrigger".parse::<BrickKind>().unwrap(), BrickKind::BarrierTrigger);
/// assert!("Swaption".parse::<BrickKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickKind {
    /// Underlying asset observable (spot price source).
    UnderlyingAsset,
    /// Fixed-income funding leg.
    Bond,
    /// European call/put option.
    VanillaOption,
    /// Cash-or-nothing digital option.
    DigitalOption,
    /// Knock-in/knock-out barrier option.
    BarrierOption,
    /// Fixed- or floating-strike lookback option.
    LookbackOption,
    /// Range accrual option.
    RangeOption,
    /// Conditional branch.
    IfThenElse,
    /// Barrier level condition emitting trigger events.
    BarrierTrigger,
    /// Autocall level condition emitting trigger events.
    AutocallTrigger,
    /// Latched knock-in state check.
    KnockInCheck,
    /// Missed-coupon memory buffer.
    MemoryBuffer,
    /// Running maximum/minimum tracker.
    HighWatermarkTracker,
    /// Accumulation-to-target tracker.
    TargetTracker,
    /// Scheduled observation condition.
    Observation,
    /// Payment/observation date schedule.
    CouponSchedule,
    /// Conditional coupon payment logic.
    CouponLogic,
    /// Redemption payout with protection/participation.
    FinalPayout,
    /// Early-redemption handler.
    AutocallHandler,
    /// Daily coupon accrual accumulator.
    CouponAccumulator,
    /// Addition operator.
    Sum,
    /// Scalar multiplication operator.
    Multiplier,
    /// Threshold comparison operator.
    Compare,
    /// Best-of/worst-of selection operator.
    Selector,
    /// Elapsed-time counter.
    Timer,
}

/// Parse failure for a brick kind string.
///
/// Unrecognised kinds are a normal empty case for callers (template data
/// is user-editable), not a fatal error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown brick kind: {0}")]
pub struct UnknownBrickKind(pub String);

impl BrickKind {
    /// All brick kinds, in catalog order.
    pub const ALL: [BrickKind; 25] = [
        BrickKind::UnderlyingAsset,
        BrickKind::Bond,
        BrickKind::VanillaOption,
        BrickKind::DigitalOption,
        BrickKind::BarrierOption,
        BrickKind::LookbackOption,
        BrickKind::RangeOption,
        BrickKind::IfThenElse,
        BrickKind::BarrierTrigger,
        BrickKind::AutocallTrigger,
        BrickKind::KnockInCheck,
        BrickKind::MemoryBuffer,
        BrickKind::HighWatermarkTracker,
        BrickKind::TargetTracker,
        BrickKind::Observation,
        BrickKind::CouponSchedule,
        BrickKind::CouponLogic,
        BrickKind::FinalPayout,
        BrickKind::AutocallHandler,
        BrickKind::CouponAccumulator,
        BrickKind::Sum,
        BrickKind::Multiplier,
        BrickKind::Compare,
        BrickKind::Selector,
        BrickKind::Timer,
    ];

    /// Returns the display/wiring category derived from the kind.
    pub fn category(&self) -> BrickCategory {
        match self {
            BrickKind::UnderlyingAsset | BrickKind::Bond => BrickCategory::Asset,
            BrickKind::VanillaOption
            | BrickKind::DigitalOption
            | BrickKind::BarrierOption
            | BrickKind::LookbackOption
            | BrickKind::RangeOption => BrickCategory::Option,
            BrickKind::IfThenElse
            | BrickKind::BarrierTrigger
            | BrickKind::AutocallTrigger
            | BrickKind::KnockInCheck
            | BrickKind::MemoryBuffer
            | BrickKind::HighWatermarkTracker
            | BrickKind::TargetTracker
            | BrickKind::Observation => BrickCategory::Logic,
            BrickKind::CouponSchedule
            | BrickKind::CouponLogic
            | BrickKind::FinalPayout
            | BrickKind::AutocallHandler
            | BrickKind::CouponAccumulator => BrickCategory::Flow,
            BrickKind::Sum
            | BrickKind::Multiplier
            | BrickKind::Compare
            | BrickKind::Selector
            | BrickKind::Timer => BrickCategory::Math,
        }
    }

    /// Returns the stable kind name used in serialized graphs.
    pub fn name(&self) -> &'static str {
        match self {
            BrickKind::UnderlyingAsset => "UnderlyingAsset",
            BrickKind::Bond => "Bond",
            BrickKind::VanillaOption => "VanillaOption",
            BrickKind::DigitalOption => "DigitalOption",
            BrickKind::BarrierOption => "BarrierOption",
            BrickKind::LookbackOption => "LookbackOption",
            BrickKind::RangeOption => "RangeOption",
            BrickKind::IfThenElse => "IfThenElse",
            BrickKind::BarrierTrigger => "BarrierTrigger",
            BrickKind::AutocallTrigger => "AutocallTrigger",
            BrickKind::KnockInCheck => "KnockInCheck",
            BrickKind::MemoryBuffer => "MemoryBuffer",
            BrickKind::HighWatermarkTracker => "HighWatermarkTracker",
            BrickKind::TargetTracker => "TargetTracker",
            BrickKind::Observation => "Observation",
            BrickKind::CouponSchedule => "CouponSchedule",
            BrickKind::CouponLogic => "CouponLogic",
            BrickKind::FinalPayout => "FinalPayout",
            BrickKind::AutocallHandler => "AutocallHandler",
            BrickKind::CouponAccumulator => "CouponAccumulator",
            BrickKind::Sum => "Sum",
            BrickKind::Multiplier => "Multiplier",
            BrickKind::Compare => "Compare",
            BrickKind::Selector => "Selector",
            BrickKind::Timer => "Timer",
        }
    }
}

impl fmt::Display for BrickKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BrickKind {
    type Err = UnknownBrickKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BrickKind::ALL
            .iter()
            .find(|kind| kind.name() == s)
            .copied()
            .ok_or_else(|| UnknownBrickKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_kind() {
        assert_eq!(BrickKind::ALL.len(), 25);
    }

    #[test]
    fn test_display_from_str_round_trip() {
        for kind in BrickKind::ALL {
            let parsed: BrickKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "Swaption".parse::<BrickKind>().unwrap_err();
        assert_eq!(err, UnknownBrickKind("Swaption".to_string()));
        assert!(err.to_string().contains("Swaption"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(BrickKind::Bond.category(), BrickCategory::Asset);
        assert_eq!(BrickKind::RangeOption.category(), BrickCategory::Option);
        assert_eq!(BrickKind::Observation.category(), BrickCategory::Logic);
        assert_eq!(BrickKind::CouponLogic.category(), BrickCategory::Flow);
        assert_eq!(BrickKind::Timer.category(), BrickCategory::Math);
    }

    #[test]
    fn test_category_counts() {
        let count = |cat| {
            BrickKind::ALL
                .iter()
                .filter(|k| k.category() == cat)
                .count()
        };
        assert_eq!(count(BrickCategory::Asset), 2);
        assert_eq!(count(BrickCategory::Option), 5);
        assert_eq!(count(BrickCategory::Logic), 8);
        assert_eq!(count(BrickCategory::Flow), 5);
        assert_eq!(count(BrickCategory::Math), 5);
    }
}
