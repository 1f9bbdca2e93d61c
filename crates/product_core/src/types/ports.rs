//! Port typing and compatibility rules.
//!
//! Every brick exposes a fixed, ordered list of typed input and output
//! ports. Connections are only structurally valid between ports of
//! compatible semantic types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type of a brick port.
///
/// # Compatibility
///
/// `Number`, `Boolean`, and `Any` form one mutually compatible class
/// (logic bricks routinely feed numeric inputs and vice versa). An
/// `Asset` port also accepts `Number`, since an asset brick exposes its
/// price as a numeric output. `Option` and `Trigger` ports only connect
/// to a matching type or to `Any` on either side.
///
/// # Examples
///
/// ```
/// use product_core::PortType;
///
/// assert!(PortType::Number.is_compatible(PortType::Boolean));
/// assert!(PortType::Number.is_compatible(PortType::Asset));
/// assert!(!PortType::Asset.is_compatible(PortType::Option));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortType {
    /// Scalar numeric value (price, payoff, coupon amount).
    Number,
    /// Boolean condition or trigger state.
    Boolean,
    /// Reference to an underlying asset brick.
    Asset,
    /// Reference to an option brick.
    Option,
    /// Discrete trigger event channel.
    Trigger,
    /// Wildcard; compatible with every other type.
    Any,
}

impl PortType {
    /// Returns whether a connection between ports of these two types is
    /// structurally valid.
    ///
    /// Compatibility is symmetric.
    #[inline]
    pub fn is_compatible(self, other: PortType) -> bool {
        use PortType::*;
        match (self, other) {
            (Any, _) | (_, Any) => true,
            (a, b) if a == b => true,
            (Number, Boolean) | (Boolean, Number) => true,
            (Number, Asset) | (Asset, Number) => true,
            _ => false,
        }
    }
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PortType::Number => "number",
            PortType::Boolean => "boolean",
            PortType::Asset => "asset",
            PortType::Option => "option",
            PortType::Trigger => "trigger",
            PortType::Any => "any",
        };
        write!(f, "{}", name)
    }
}

/// A typed input port on a brick.
///
/// Port lists are fixed per brick kind at creation and never resized.
/// The `connected` flag is owned by the graph: it is set when a
/// connection targets this port and cleared when that connection (or
/// its source brick) is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPort {
    /// Port identifier, unique within the brick.
    pub id: String,
    /// Human-readable port name.
    pub name: String,
    /// Semantic type of the port.
    pub port_type: PortType,
    /// Whether the port must be wired for the brick to be meaningful.
    pub required: bool,
    /// Whether a connection currently targets this port (fan-in = 1).
    pub connected: bool,
}

impl InputPort {
    /// Creates a required input port with `connected = false`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            port_type,
            required: true,
            connected: false,
        }
    }
}

/// A typed output port on a brick.
///
/// Output ports may fan out to any number of connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPort {
    /// Port identifier, unique within the brick.
    pub id: String,
    /// Human-readable port name.
    pub name: String,
    /// Semantic type of the port.
    pub port_type: PortType,
}

impl OutputPort {
    /// Creates an output port.
    pub fn new(id: impl Into<String>, name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            port_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_is_compatible_with_everything() {
        for t in [
            PortType::Number,
            PortType::Boolean,
            PortType::Asset,
            PortType::Option,
            PortType::Trigger,
            PortType::Any,
        ] {
            assert!(PortType::Any.is_compatible(t));
            assert!(t.is_compatible(PortType::Any));
        }
    }

    #[test]
    fn test_number_boolean_class() {
        assert!(PortType::Number.is_compatible(PortType::Number));
        assert!(PortType::Number.is_compatible(PortType::Boolean));
        assert!(PortType::Boolean.is_compatible(PortType::Number));
        assert!(!PortType::Boolean.is_compatible(PortType::Trigger));
    }

    #[test]
    fn test_asset_accepts_price_feeds() {
        assert!(PortType::Number.is_compatible(PortType::Asset));
        assert!(PortType::Asset.is_compatible(PortType::Number));
        assert!(!PortType::Boolean.is_compatible(PortType::Asset));
    }

    #[test]
    fn test_reference_types_require_exact_match() {
        assert!(PortType::Asset.is_compatible(PortType::Asset));
        assert!(PortType::Option.is_compatible(PortType::Option));
        assert!(PortType::Trigger.is_compatible(PortType::Trigger));
        assert!(!PortType::Asset.is_compatible(PortType::Option));
        assert!(!PortType::Option.is_compatible(PortType::Trigger));
    }

    #[test]
    fn test_compatibility_is_symmetric() {
        let all = [
            PortType::Number,
            PortType::Boolean,
            PortType::Asset,
            PortType::Option,
            PortType::Trigger,
            PortType::Any,
        ];
        for a in all {
            for b in all {
                assert_eq!(a.is_compatible(b), b.is_compatible(a));
            }
        }
    }

    #[test]
    fn test_input_port_starts_disconnected() {
        let port = InputPort::new("underlying", "Underlying", PortType::Asset);
        assert!(!port.connected);
        assert!(port.required);
    }
}
