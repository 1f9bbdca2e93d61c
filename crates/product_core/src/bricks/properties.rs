//! Per-kind brick property shapes.
//!
//! Each brick kind carries its own typed property struct; the
//! [`BrickProperties`] union is tagged by kind so that serialized graphs
//! stay self-describing and downstream evaluators get compile-time
//! exhaustiveness when matching on variants.
//!
//! Property *shapes* (field sets and value types) are fixed per kind;
//! property *values* are user-editable. `Default` impls reproduce the
//! documented catalog defaults.

use serde::{Deserialize, Serialize};

use super::kind::BrickKind;

/// Call/put flavour of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionStyle {
    /// Right to buy: pays max(S - K, 0).
    Call,
    /// Right to sell: pays max(K - S, 0).
    Put,
}

/// Long/short position side; short flips the payoff sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Holder of the option.
    Long,
    /// Writer of the option.
    Short,
}

impl PositionSide {
    /// Payoff sign multiplier: +1 for long, -1 for short.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            PositionSide::Long => 1.0,
            PositionSide::Short => -1.0,
        }
    }
}

/// Side of the strike on which a digital option pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitalBarrier {
    /// Pays when spot >= strike.
    Above,
    /// Pays when spot <= strike.
    Below,
}

/// Barrier option knock style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarrierStyle {
    /// Knocked out when the barrier is breached from below.
    UpAndOut,
    /// Knocked in when the barrier is breached from below.
    UpAndIn,
    /// Knocked out when the barrier is breached from above.
    DownAndOut,
    /// Knocked in when the barrier is breached from above.
    DownAndIn,
}

/// Lookback strike convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookbackStyle {
    /// Fixed strike against the path extremum.
    Fixed,
    /// Floating strike set by the path extremum.
    Floating,
}

/// Barrier trigger comparison mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    /// Fires while spot >= level.
    Above,
    /// Fires while spot <= level.
    Below,
    /// Fires while |spot - level| < epsilon.
    Touch,
}

/// Watermark tracking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingMode {
    /// Track the running maximum.
    Maximum,
    /// Track the running minimum.
    Minimum,
}

/// Comparison operator for the Compare brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    /// Strictly greater than.
    GT,
    /// Strictly less than.
    LT,
    /// Equal to.
    EQ,
    /// Greater than or equal to.
    GTE,
    /// Less than or equal to.
    LTE,
    /// Not equal to.
    NEQ,
}

/// Selection mode for multi-asset selector bricks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Best-of selection.
    Best,
    /// Worst-of selection.
    Worst,
    /// Median selection.
    Median,
    /// Uniform random selection.
    Random,
}

/// Coupon payment frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CouponFrequency {
    /// Twelve payments per year.
    Monthly,
    /// Four payments per year.
    Quarterly,
    /// Two payments per year.
    SemiAnnually,
    /// One payment per year.
    Annually,
}

/// Accrual reset frequency for accumulator bricks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetFrequency {
    /// Reset every day.
    Daily,
    /// Reset every month.
    Monthly,
    /// Reset every quarter.
    Quarterly,
}

/// Time unit for the Timer brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar months.
    Months,
    /// Calendar years.
    Years,
}

/// Underlying asset properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderlyingAssetProps {
    /// Ticker symbol.
    pub symbol: String,
    /// Current spot price.
    pub current_price: f64,
    /// Annualised volatility.
    pub volatility: f64,
    /// Continuous dividend yield.
    pub dividend_yield: f64,
}

impl Default for UnderlyingAssetProps {
    fn default() -> Self {
        Self {
            symbol: "SPX".to_string(),
            current_price: 4000.0,
            volatility: 0.2,
            dividend_yield: 0.02,
        }
    }
}

/// Bond properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondProps {
    /// Face value at redemption.
    pub face_value: f64,
    /// Annual coupon rate.
    pub coupon_rate: f64,
    /// Maturity tenor label (e.g. "1Y").
    pub maturity: String,
    /// Yield to maturity.
    pub yield_to_maturity: f64,
}

impl Default for BondProps {
    fn default() -> Self {
        Self {
            face_value: 1000.0,
            coupon_rate: 0.05,
            maturity: "1Y".to_string(),
            yield_to_maturity: 0.04,
        }
    }
}

/// Vanilla option properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VanillaOptionProps {
    /// Call or put.
    pub style: OptionStyle,
    /// Long or short.
    pub side: PositionSide,
    /// Strike price.
    pub strike: f64,
    /// Expiry tenor label.
    pub expiry: String,
    /// Notional amount; payoff is scaled by notional / 1000.
    pub notional: f64,
}

impl Default for VanillaOptionProps {
    fn default() -> Self {
        Self {
            style: OptionStyle::Call,
            side: PositionSide::Long,
            strike: 4000.0,
            expiry: "1Y".to_string(),
            notional: 1000.0,
        }
    }
}

/// Digital (cash-or-nothing) option properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitalOptionProps {
    /// Strike level.
    pub strike: f64,
    /// Fixed amount paid when the condition holds.
    pub payout_amount: f64,
    /// Expiry tenor label.
    pub expiry: String,
    /// Side of the strike on which the option pays.
    pub barrier: DigitalBarrier,
}

impl Default for DigitalOptionProps {
    fn default() -> Self {
        Self {
            strike: 4000.0,
            payout_amount: 100.0,
            expiry: "1Y".to_string(),
            barrier: DigitalBarrier::Above,
        }
    }
}

/// Barrier option properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierOptionProps {
    /// Call or put.
    pub style: OptionStyle,
    /// Knock style.
    pub barrier_style: BarrierStyle,
    /// Strike price.
    pub strike: f64,
    /// Barrier level.
    pub barrier: f64,
    /// Expiry tenor label.
    pub expiry: String,
    /// Notional amount.
    pub notional: f64,
}

impl Default for BarrierOptionProps {
    fn default() -> Self {
        Self {
            style: OptionStyle::Call,
            barrier_style: BarrierStyle::UpAndOut,
            strike: 4000.0,
            barrier: 4800.0,
            expiry: "1Y".to_string(),
            notional: 1000.0,
        }
    }
}

/// Lookback option properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookbackOptionProps {
    /// Strike convention.
    pub lookback: LookbackStyle,
    /// Strike for the fixed convention; unused when floating.
    pub strike: Option<f64>,
    /// Expiry tenor label.
    pub expiry: String,
    /// Notional amount.
    pub notional: f64,
}

impl Default for LookbackOptionProps {
    fn default() -> Self {
        Self {
            lookback: LookbackStyle::Floating,
            strike: None,
            expiry: "1Y".to_string(),
            notional: 1000.0,
        }
    }
}

/// Range accrual option properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeOptionProps {
    /// Lower accrual bound.
    pub lower_bound: f64,
    /// Upper accrual bound.
    pub upper_bound: f64,
    /// Amount accrued per in-range day.
    pub payout_per_day: f64,
    /// Expiry tenor label.
    pub expiry: String,
}

impl Default for RangeOptionProps {
    fn default() -> Self {
        Self {
            lower_bound: 3800.0,
            upper_bound: 4200.0,
            payout_per_day: 1.0,
            expiry: "1Y".to_string(),
        }
    }
}

/// If-then-else branch properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfThenElseProps {
    /// Display label for the branch condition.
    pub condition: String,
}

impl Default for IfThenElseProps {
    fn default() -> Self {
        Self {
            condition: "price > strike".to_string(),
        }
    }
}

/// Barrier trigger properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrierTriggerProps {
    /// Barrier level to monitor.
    pub barrier_level: f64,
    /// Comparison mode.
    pub trigger: TriggerType,
    /// Continuous vs. observation-date-only monitoring.
    pub continuous: bool,
}

impl Default for BarrierTriggerProps {
    fn default() -> Self {
        Self {
            barrier_level: 4000.0,
            trigger: TriggerType::Above,
            continuous: true,
        }
    }
}

/// Autocall trigger properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocallTriggerProps {
    /// Spot level at or above which the note autocalls.
    pub autocall_level: f64,
    /// Observation tenor labels.
    pub observation_dates: Vec<String>,
    /// Whether the issuer may call.
    pub callable: bool,
}

impl Default for AutocallTriggerProps {
    fn default() -> Self {
        Self {
            autocall_level: 4000.0,
            observation_dates: quarterly_tenors(),
            callable: true,
        }
    }
}

/// Knock-in state check properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnockInCheckProps {
    /// Level at which the knock-in latches.
    pub knock_in_level: f64,
    /// Latched state.
    pub activated: bool,
}

impl Default for KnockInCheckProps {
    fn default() -> Self {
        Self {
            knock_in_level: 3200.0,
            activated: false,
        }
    }
}

/// Missed-coupon memory buffer properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryBufferProps {
    /// Coupons banked for later payment.
    pub stored_coupons: Vec<f64>,
    /// Maximum number of banked coupons.
    pub max_buffer: usize,
}

impl Default for MemoryBufferProps {
    fn default() -> Self {
        Self {
            stored_coupons: Vec::new(),
            max_buffer: 10,
        }
    }
}

/// High-watermark tracker properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighWatermarkTrackerProps {
    /// Track maximum or minimum.
    pub tracking: TrackingMode,
    /// Current watermark value.
    pub current_value: f64,
    /// Optional reset condition label.
    pub reset_condition: Option<String>,
}

impl Default for HighWatermarkTrackerProps {
    fn default() -> Self {
        Self {
            tracking: TrackingMode::Maximum,
            current_value: 0.0,
            reset_condition: None,
        }
    }
}

/// Target accumulation tracker properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetTrackerProps {
    /// Accumulation target.
    pub target_amount: f64,
    /// Amount accumulated so far.
    pub current_accumulated: f64,
    /// Reset accumulation when the target is met.
    pub reset_on_target: bool,
}

impl Default for TargetTrackerProps {
    fn default() -> Self {
        Self {
            target_amount: 1000.0,
            current_accumulated: 0.0,
            reset_on_target: true,
        }
    }
}

/// Scheduled observation properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationProps {
    /// Observation tenor labels.
    pub observation_dates: Vec<String>,
    /// Display label for the observed condition.
    pub condition: String,
    /// Last observed result.
    pub result: bool,
}

impl Default for ObservationProps {
    fn default() -> Self {
        Self {
            observation_dates: quarterly_tenors(),
            condition: "price >= initial".to_string(),
            result: false,
        }
    }
}

/// Coupon schedule properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponScheduleProps {
    /// Payment tenor labels.
    pub payment_dates: Vec<String>,
    /// Observation tenor labels.
    pub observation_dates: Vec<String>,
    /// Payment frequency.
    pub frequency: CouponFrequency,
}

impl Default for CouponScheduleProps {
    fn default() -> Self {
        Self {
            payment_dates: quarterly_tenors(),
            observation_dates: quarterly_tenors(),
            frequency: CouponFrequency::Quarterly,
        }
    }
}

/// Conditional coupon logic properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponLogicProps {
    /// Annual coupon rate.
    pub coupon_rate: f64,
    /// Whether payment is conditional.
    pub conditional: bool,
    /// Display label for the payment condition.
    pub condition: String,
    /// Whether missed coupons are remembered.
    pub memory: bool,
}

impl Default for CouponLogicProps {
    fn default() -> Self {
        Self {
            coupon_rate: 0.08,
            conditional: true,
            condition: "price >= barrier".to_string(),
            memory: false,
        }
    }
}

/// Final payout properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalPayoutProps {
    /// Capital protection level as a fraction of notional.
    pub protection_level: f64,
    /// Upside participation rate.
    pub participation_rate: f64,
    /// Optional payout cap as a fraction of notional.
    pub cap: Option<f64>,
    /// Optional payout floor as a fraction of notional.
    pub floor: Option<f64>,
}

impl Default for FinalPayoutProps {
    fn default() -> Self {
        Self {
            protection_level: 0.7,
            participation_rate: 1.0,
            cap: Some(1.2),
            floor: None,
        }
    }
}

/// Autocall redemption handler properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocallHandlerProps {
    /// Redemption amount on autocall.
    pub autocall_amount: f64,
    /// Coupon paid alongside redemption.
    pub coupon_payment: f64,
    /// Display label for the call condition.
    pub call_condition: String,
}

impl Default for AutocallHandlerProps {
    fn default() -> Self {
        Self {
            autocall_amount: 1000.0,
            coupon_payment: 80.0,
            call_condition: "price >= initial".to_string(),
        }
    }
}

/// Daily accrual accumulator properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponAccumulatorProps {
    /// Rate accrued per qualifying day.
    pub daily_rate: f64,
    /// Display label for the accrual condition.
    pub condition: String,
    /// Accrual reset frequency.
    pub reset_frequency: ResetFrequency,
}

impl Default for CouponAccumulatorProps {
    fn default() -> Self {
        Self {
            daily_rate: 0.02,
            condition: "in range".to_string(),
            reset_frequency: ResetFrequency::Quarterly,
        }
    }
}

/// Sum operator properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumProps {
    /// Number of summed inputs.
    pub input_count: usize,
}

impl Default for SumProps {
    fn default() -> Self {
        Self { input_count: 2 }
    }
}

/// Multiplier operator properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierProps {
    /// Scalar factor applied to the input.
    pub factor: f64,
}

impl Default for MultiplierProps {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

/// Compare operator properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareProps {
    /// Comparison operator.
    pub op: CompareOp,
    /// Comparison threshold.
    pub threshold: f64,
}

impl Default for CompareProps {
    fn default() -> Self {
        Self {
            op: CompareOp::GT,
            threshold: 0.0,
        }
    }
}

/// Selector operator properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorProps {
    /// Selection mode.
    pub selection: SelectionMode,
    /// Number of candidate assets.
    pub asset_count: usize,
}

impl Default for SelectorProps {
    fn default() -> Self {
        Self {
            selection: SelectionMode::Best,
            asset_count: 2,
        }
    }
}

/// Timer properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerProps {
    /// Event that starts the timer.
    pub start_event: String,
    /// Optional event that stops the timer.
    pub end_event: Option<String>,
    /// Elapsed time in `units`.
    pub elapsed_time: f64,
    /// Unit of elapsed time.
    pub units: TimeUnit,
}

impl Default for TimerProps {
    fn default() -> Self {
        Self {
            start_event: "barrier hit".to_string(),
            end_event: None,
            elapsed_time: 0.0,
            units: TimeUnit::Days,
        }
    }
}

fn quarterly_tenors() -> Vec<String> {
    vec![
        "3M".to_string(),
        "6M".to_string(),
        "9M".to_string(),
        "1Y".to_string(),
    ]
}

/// Tagged union of per-kind property shapes.
///
/// The serialized representation is internally tagged by kind, so a
/// brick's encoding is self-describing:
///
/// ```json
/// { "kind": "VanillaOption", "style": "call", "side": "long",
///   "strike": 4000.0, "expiry": "1Y", "notional": 1000.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BrickProperties {
    /// Underlying asset properties.
    UnderlyingAsset(UnderlyingAssetProps),
    /// Bond properties.
    Bond(BondProps),
    /// Vanilla option properties.
    VanillaOption(VanillaOptionProps),
    /// Digital option properties.
    DigitalOption(DigitalOptionProps),
    /// Barrier option properties.
    BarrierOption(BarrierOptionProps),
    /// Lookback option properties.
    LookbackOption(LookbackOptionProps),
    /// Range option properties.
    RangeOption(RangeOptionProps),
    /// If-then-else properties.
    IfThenElse(IfThenElseProps),
    /// Barrier trigger properties.
    BarrierTrigger(BarrierTriggerProps),
    /// Autocall trigger properties.
    AutocallTrigger(AutocallTriggerProps),
    /// Knock-in check properties.
    KnockInCheck(KnockInCheckProps),
    /// Memory buffer properties.
    MemoryBuffer(MemoryBufferProps),
    /// High-watermark tracker properties.
    HighWatermarkTracker(HighWatermarkTrackerProps),
    /// Target tracker properties.
    TargetTracker(TargetTrackerProps),
    /// Observation properties.
    Observation(ObservationProps),
    /// Coupon schedule properties.
    CouponSchedule(CouponScheduleProps),
    /// Coupon logic properties.
    CouponLogic(CouponLogicProps),
    /// Final payout properties.
    FinalPayout(FinalPayoutProps),
    /// Autocall handler properties.
    AutocallHandler(AutocallHandlerProps),
    /// Coupon accumulator properties.
    CouponAccumulator(CouponAccumulatorProps),
    /// Sum properties.
    Sum(SumProps),
    /// Multiplier properties.
    Multiplier(MultiplierProps),
    /// Compare properties.
    Compare(CompareProps),
    /// Selector properties.
    Selector(SelectorProps),
    /// Timer properties.
    Timer(TimerProps),
}

impl BrickProperties {
    /// Returns the brick kind this property shape belongs to.
    pub fn kind(&self) -> BrickKind {
        match self {
            BrickProperties::UnderlyingAsset(_) => BrickKind::UnderlyingAsset,
            BrickProperties::Bond(_) => BrickKind::Bond,
            BrickProperties::VanillaOption(_) => BrickKind::VanillaOption,
            BrickProperties::DigitalOption(_) => BrickKind::DigitalOption,
            BrickProperties::BarrierOption(_) => BrickKind::BarrierOption,
            BrickProperties::LookbackOption(_) => BrickKind::LookbackOption,
            BrickProperties::RangeOption(_) => BrickKind::RangeOption,
            BrickProperties::IfThenElse(_) => BrickKind::IfThenElse,
            BrickProperties::BarrierTrigger(_) => BrickKind::BarrierTrigger,
            BrickProperties::AutocallTrigger(_) => BrickKind::AutocallTrigger,
            BrickProperties::KnockInCheck(_) => BrickKind::KnockInCheck,
            BrickProperties::MemoryBuffer(_) => BrickKind::MemoryBuffer,
            BrickProperties::HighWatermarkTracker(_) => BrickKind::HighWatermarkTracker,
            BrickProperties::TargetTracker(_) => BrickKind::TargetTracker,
            BrickProperties::Observation(_) => BrickKind::Observation,
            BrickProperties::CouponSchedule(_) => BrickKind::CouponSchedule,
            BrickProperties::CouponLogic(_) => BrickKind::CouponLogic,
            BrickProperties::FinalPayout(_) => BrickKind::FinalPayout,
            BrickProperties::AutocallHandler(_) => BrickKind::AutocallHandler,
            BrickProperties::CouponAccumulator(_) => BrickKind::CouponAccumulator,
            BrickProperties::Sum(_) => BrickKind::Sum,
            BrickProperties::Multiplier(_) => BrickKind::Multiplier,
            BrickProperties::Compare(_) => BrickKind::Compare,
            BrickProperties::Selector(_) => BrickKind::Selector,
            BrickProperties::Timer(_) => BrickKind::Timer,
        }
    }

    /// Returns the default property set for a kind.
    pub fn default_for(kind: BrickKind) -> Self {
        match kind {
            BrickKind::UnderlyingAsset => {
                BrickProperties::UnderlyingAsset(UnderlyingAssetProps::default())
            }
            BrickKind::Bond => BrickProperties::Bond(BondProps::default()),
            BrickKind::VanillaOption => {
                BrickProperties::VanillaOption(VanillaOptionProps::default())
            }
            BrickKind::DigitalOption => {
                BrickProperties::DigitalOption(DigitalOptionProps::default())
            }
            BrickKind::BarrierOption => {
                BrickProperties::BarrierOption(BarrierOptionProps::default())
            }
            BrickKind::LookbackOption => {
                BrickProperties::LookbackOption(LookbackOptionProps::default())
            }
            BrickKind::RangeOption => BrickProperties::RangeOption(RangeOptionProps::default()),
            BrickKind::IfThenElse => BrickProperties::IfThenElse(IfThenElseProps::default()),
            BrickKind::BarrierTrigger => {
                BrickProperties::BarrierTrigger(BarrierTriggerProps::default())
            }
            BrickKind::AutocallTrigger => {
                BrickProperties::AutocallTrigger(AutocallTriggerProps::default())
            }
            BrickKind::KnockInCheck => BrickProperties::KnockInCheck(KnockInCheckProps::default()),
            BrickKind::MemoryBuffer => BrickProperties::MemoryBuffer(MemoryBufferProps::default()),
            BrickKind::HighWatermarkTracker => {
                BrickProperties::HighWatermarkTracker(HighWatermarkTrackerProps::default())
            }
            BrickKind::TargetTracker => {
                BrickProperties::TargetTracker(TargetTrackerProps::default())
            }
            BrickKind::Observation => BrickProperties::Observation(ObservationProps::default()),
            BrickKind::CouponSchedule => {
                BrickProperties::CouponSchedule(CouponScheduleProps::default())
            }
            BrickKind::CouponLogic => BrickProperties::CouponLogic(CouponLogicProps::default()),
            BrickKind::FinalPayout => BrickProperties::FinalPayout(FinalPayoutProps::default()),
            BrickKind::AutocallHandler => {
                BrickProperties::AutocallHandler(AutocallHandlerProps::default())
            }
            BrickKind::CouponAccumulator => {
                BrickProperties::CouponAccumulator(CouponAccumulatorProps::default())
            }
            BrickKind::Sum => BrickProperties::Sum(SumProps::default()),
            BrickKind::Multiplier => BrickProperties::Multiplier(MultiplierProps::default()),
            BrickKind::Compare => BrickProperties::Compare(CompareProps::default()),
            BrickKind::Selector => BrickProperties::Selector(SelectorProps::default()),
            BrickKind::Timer => BrickProperties::Timer(TimerProps::default()),
        }
    }
}
