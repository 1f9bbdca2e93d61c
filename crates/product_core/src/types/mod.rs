//! Shared primitive types for the brick data model.
//!
//! This module provides:
//! - [`BrickCategory`]: coarse display grouping derived from brick kind
//! - [`PortType`]: semantic port typing with compatibility rules
//! - [`InputPort`] / [`OutputPort`]: typed port descriptors
//! - [`Position`]: 2-D layout coordinate owned by the presentation layer

mod category;
mod ports;
mod position;

pub use category::BrickCategory;
pub use ports::{InputPort, OutputPort, PortType};
pub use position::Position;
