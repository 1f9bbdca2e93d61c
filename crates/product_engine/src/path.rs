//! Stochastic price-path generation.

use crate::rng::NormalSource;
use crate::scenario::{MarketScenario, ScenarioError, ScenarioKind};

/// Floor applied to every generated price; prices never go non-positive.
pub const PRICE_FLOOR: f64 = 0.01;

/// Generates a price path of `steps + 1` points with
/// `path[0] == start_price`.
///
/// The walk is the geometric recurrence
/// `price += price * (drift_term * dt + volatility * sqrt(dt) * Z)` with
/// `dt = time_horizon / steps` and `Z` drawn from `source`. The drift
/// term is zero for [`ScenarioKind::Flat`]; for
/// [`ScenarioKind::Volatile`] the stochastic term is scaled by 1.5.
/// Every step floors the price at [`PRICE_FLOOR`].
///
/// When `end_price` is set and the kind is not custom, the path is then
/// warped multiplicatively so the final point lands exactly on the
/// target: point `i` is scaled by `(end_price / path[last])^(i/(len-1))`.
/// The warp preserves the relative shape of the walk, not its literal
/// simulated returns.
///
/// A custom scenario with a supplied path returns that path verbatim
/// after checking its length; without one it falls back to generation
/// with the full drift term.
///
/// # Errors
///
/// - [`ScenarioError::InvalidStepCount`] when `steps == 0`
/// - [`ScenarioError::CustomPathLengthMismatch`] when a supplied custom
///   path does not have `steps + 1` points
///
/// # Examples
///
/// ```rust
/// use product_engine::{generate_price_path, EngineRng, MarketScenario};
///
/// let scenario = MarketScenario::bull_market();
/// let path = generate_price_path(&scenario, &mut EngineRng::from_seed(42)).unwrap();
/// assert_eq!(path.len(), 253);
/// assert_eq!(path[0], 4000.0);
/// ```
pub fn generate_price_path(
    scenario: &MarketScenario,
    source: &mut impl NormalSource,
) -> Result<Vec<f64>, ScenarioError> {
    let params = &scenario.params;
    if params.steps == 0 {
        return Err(ScenarioError::InvalidStepCount);
    }

    if scenario.kind == ScenarioKind::Custom {
        if let Some(path) = &scenario.custom_path {
            let expected = params.steps + 1;
            if path.len() != expected {
                return Err(ScenarioError::CustomPathLengthMismatch {
                    expected,
                    got: path.len(),
                });
            }
            return Ok(path.clone());
        }
    }

    let dt = params.time_horizon / params.steps as f64;
    let sqrt_dt = dt.sqrt();
    let mut path = Vec::with_capacity(params.steps + 1);
    path.push(params.start_price);

    let mut price = params.start_price;
    for _ in 0..params.steps {
        let z = source.next_normal();
        let stochastic = match scenario.kind {
            ScenarioKind::Volatile => params.volatility * sqrt_dt * z * 1.5,
            _ => params.volatility * sqrt_dt * z,
        };
        let drift_term = match scenario.kind {
            ScenarioKind::Flat => 0.0,
            _ => params.drift * dt,
        };
        price = (price + price * (drift_term + stochastic)).max(PRICE_FLOOR);
        path.push(price);
    }

    if scenario.kind != ScenarioKind::Custom {
        if let Some(end_price) = params.end_price {
            warp_to_endpoint(&mut path, end_price);
        }
    }

    Ok(path)
}

/// Rescales `path[1..]` multiplicatively so the last point lands exactly
/// on `end_price`, preserving the relative shape of the walk. The floor
/// still holds after warping.
fn warp_to_endpoint(path: &mut [f64], end_price: f64) {
    let last = path.len() - 1;
    let adjustment = end_price / path[last];
    for i in 1..path.len() {
        let factor = adjustment.powf(i as f64 / last as f64);
        path[i] = (path[i] * factor).max(PRICE_FLOOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{EngineRng, FixedNormalSource};
    use crate::scenario::ScenarioParams;
    use approx::assert_relative_eq;

    fn scenario(kind: ScenarioKind, end_price: Option<f64>) -> MarketScenario {
        MarketScenario {
            id: "test".to_string(),
            name: "Test".to_string(),
            kind,
            params: ScenarioParams {
                start_price: 4000.0,
                end_price,
                volatility: 0.2,
                drift: 0.1,
                time_horizon: 1.0,
                steps: 252,
            },
            custom_path: None,
        }
    }

    #[test]
    fn test_length_and_anchor() {
        let s = scenario(ScenarioKind::Uptrend, None);
        let path = generate_price_path(&s, &mut EngineRng::from_seed(1)).unwrap();
        assert_eq!(path.len(), 253);
        assert_eq!(path[0], 4000.0);
    }

    #[test]
    fn test_floor_holds_under_violent_downdraws() {
        let mut s = scenario(ScenarioKind::Downtrend, None);
        s.params.drift = -5.0;
        s.params.volatility = 3.0;
        let path = generate_price_path(&s, &mut EngineRng::from_seed(9)).unwrap();
        assert!(path.iter().all(|&p| p >= PRICE_FLOOR));
    }

    #[test]
    fn test_endpoint_warp_lands_on_target() {
        let s = scenario(ScenarioKind::Uptrend, Some(5000.0));
        let path = generate_price_path(&s, &mut EngineRng::from_seed(3)).unwrap();
        assert_relative_eq!(*path.last().unwrap(), 5000.0, max_relative = 1e-9);
        // Anchor is untouched by the warp.
        assert_eq!(path[0], 4000.0);
    }

    #[test]
    fn test_flat_kind_ignores_drift() {
        let mut s = scenario(ScenarioKind::Flat, None);
        s.params.drift = 10.0;
        let path = generate_price_path(&s, &mut FixedNormalSource::zeros()).unwrap();
        // Zero noise and suppressed drift leave the path constant.
        assert!(path.iter().all(|&p| p == 4000.0));
    }

    #[test]
    fn test_volatile_scales_noise() {
        let base = scenario(ScenarioKind::Uptrend, None);
        let mut volatile = scenario(ScenarioKind::Volatile, None);
        volatile.params.drift = base.params.drift;

        let mut src = FixedNormalSource::new(vec![1.0]);
        let up = generate_price_path(&base, &mut src).unwrap();
        let mut src = FixedNormalSource::new(vec![1.0]);
        let vol = generate_price_path(&volatile, &mut src).unwrap();

        let dt: f64 = 1.0 / 252.0;
        let base_step = up[1] / up[0] - 1.0;
        let vol_step = vol[1] / vol[0] - 1.0;
        let drift = 0.1 * dt;
        assert_relative_eq!(
            vol_step - drift,
            (base_step - drift) * 1.5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_custom_path_is_used_verbatim() {
        let raw = vec![4000.0, 4100.0, 3900.0];
        let s = MarketScenario::custom("c", "C", raw.clone(), 1.0).unwrap();
        let path = generate_price_path(&s, &mut EngineRng::from_seed(1)).unwrap();
        assert_eq!(path, raw);
    }

    #[test]
    fn test_custom_length_mismatch() {
        let mut s = MarketScenario::custom("c", "C", vec![4000.0, 4100.0, 3900.0], 1.0).unwrap();
        s.params.steps = 5;
        let err = generate_price_path(&s, &mut EngineRng::from_seed(1)).unwrap_err();
        assert_eq!(
            err,
            ScenarioError::CustomPathLengthMismatch {
                expected: 6,
                got: 3
            }
        );
    }

    #[test]
    fn test_custom_without_path_generates() {
        let mut s = scenario(ScenarioKind::Custom, Some(9999.0));
        s.custom_path = None;
        let path = generate_price_path(&s, &mut EngineRng::from_seed(4)).unwrap();
        assert_eq!(path.len(), 253);
        // Custom scenarios are never warped to an endpoint.
        assert!((path.last().unwrap() - 9999.0).abs() > 1.0);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let mut s = scenario(ScenarioKind::Flat, None);
        s.params.steps = 0;
        let err = generate_price_path(&s, &mut EngineRng::from_seed(1)).unwrap_err();
        assert_eq!(err, ScenarioError::InvalidStepCount);
    }
}
