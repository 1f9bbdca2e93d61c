//! # Product Core (L1: Data Model)
//!
//! Brick catalog and graph data model for structured product composition.
//!
//! This crate provides:
//! - Typed brick definitions (assets, options, logic gates, flow elements,
//!   math operators) with fixed port lists and per-kind property shapes
//! - A mutable graph of bricks and directed, port-typed connections with
//!   structural validity invariants
//! - A pure catalog producing brick templates with documented defaults
//! - Ready-made product templates (snowball note, reverse convertible,
//!   twin win note, accumulator)
//!
//! ## Design Principles
//!
//! - **Enum-based brick union** keyed by kind for compile-time
//!   exhaustiveness in downstream evaluators
//! - **Caller-owned graphs**: no global store; mutation happens on an
//!   explicit `Graph` value under a single-writer discipline
//! - **Structural validity only**: the graph guarantees well-formedness
//!   (no dangling references, fan-in = 1, port-type compatibility), not
//!   financial coherence

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bricks;
pub mod graph;
pub mod templates;
pub mod types;

pub use bricks::{
    Brick, BrickKind, BrickProperties, Catalog, DigitalBarrier, OptionStyle, PositionSide,
    TriggerType,
};
pub use graph::{BrickUpdate, Connection, ConnectionRequest, Graph, GraphError};
pub use templates::ProductTemplate;
pub use types::{BrickCategory, InputPort, OutputPort, PortType, Position};
