//! Canvas layout coordinate.

use serde::{Deserialize, Serialize};

/// 2-D layout coordinate for a brick on the composition canvas.
///
/// Owned by the presentation layer and carried through serialization so
/// that round-tripping a graph preserves the user's layout. Never
/// consulted during evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate in canvas units.
    pub x: f64,
    /// Vertical coordinate in canvas units.
    pub y: f64,
}

impl Position {
    /// Creates a position.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
