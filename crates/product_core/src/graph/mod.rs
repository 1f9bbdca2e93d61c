//! Mutable product graph with structural validity invariants.
//!
//! A [`Graph`] owns a set of bricks and the directed connections between
//! their ports, under three invariants:
//!
//! - every brick and connection id is unique within the graph,
//! - every connection's endpoints resolve to a live brick and a port of
//!   a compatible semantic type,
//! - an input port is the target of at most one connection; output
//!   ports fan out freely.
//!
//! Mutation is single-writer: the graph is owned by the caller and
//! handed to evaluators by reference.

mod connection;
mod error;

pub use connection::{Connection, ConnectionRequest};
pub use error::GraphError;

use serde::{Deserialize, Serialize};

use crate::bricks::{Brick, BrickProperties};
use crate::types::Position;

/// Patch applied to a brick in place.
///
/// Fields left as `None` are untouched. A property patch whose variant
/// does not match the brick's kind is ignored; the port interface is
/// never patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrickUpdate {
    /// New canvas position.
    pub position: Option<Position>,
    /// Replacement property set, matched by kind.
    pub properties: Option<BrickProperties>,
}

impl BrickUpdate {
    /// Patch that only moves the brick.
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Patch that only replaces the properties.
    pub fn properties(properties: BrickProperties) -> Self {
        Self {
            properties: Some(properties),
            ..Self::default()
        }
    }
}

/// A mutable collection of bricks and connections.
///
/// Ids are assigned from monotonic counters (`brick-1`, `conn-1`, ...)
/// that are serialized with the graph, so a deserialized graph keeps
/// allocating fresh ids and a deleted id is never reused.
///
/// # Examples
///
/// ```
/// use product_core::{BrickKind, Catalog, ConnectionRequest, Graph};
///
/// let mut graph = Graph::new();
/// let asset = graph.add_brick(Catalog::create(BrickKind::UnderlyingAsset));
/// let option = graph.add_brick(Catalog::create(BrickKind::VanillaOption));
/// graph
///     .add_connection(ConnectionRequest::new(&asset, "price", &option, "underlying"))
///     .unwrap();
/// assert!(graph.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    bricks: Vec<Brick>,
    connections: Vec<Connection>,
    selected_brick: Option<String>,
    next_brick_id: u64,
    next_connection_id: u64,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bricks in insertion order.
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Connections in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Currently selected brick id, if any.
    pub fn selected_brick(&self) -> Option<&str> {
        self.selected_brick.as_deref()
    }

    /// Looks up a brick by id.
    pub fn brick(&self, id: &str) -> Option<&Brick> {
        self.bricks.iter().find(|b| b.id == id)
    }

    /// Looks up a connection by id.
    pub fn connection(&self, id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    /// Inserts a brick, assigning it a fresh graph-unique id.
    ///
    /// Any id already present on the brick is overwritten. Returns the
    /// assigned id.
    pub fn add_brick(&mut self, mut brick: Brick) -> String {
        self.next_brick_id += 1;
        brick.id = format!("brick-{}", self.next_brick_id);
        let id = brick.id.clone();
        self.bricks.push(brick);
        id
    }

    /// Applies a patch to a brick in place.
    ///
    /// Returns `false` when the brick does not exist. A property patch
    /// whose variant does not match the brick's kind leaves the
    /// properties unchanged.
    pub fn update_brick(&mut self, id: &str, update: BrickUpdate) -> bool {
        let Some(brick) = self.bricks.iter_mut().find(|b| b.id == id) else {
            return false;
        };
        if let Some(position) = update.position {
            brick.position = position;
        }
        if let Some(properties) = update.properties {
            if properties.kind() == brick.kind {
                brick.properties = properties;
            }
        }
        true
    }

    /// Removes a brick and, atomically, every connection touching it.
    ///
    /// Input ports on other bricks that were fed by the removed brick
    /// are marked disconnected, and a selection pointing at the brick
    /// is cleared. No-op if the id is absent.
    pub fn delete_brick(&mut self, id: &str) {
        if !self.bricks.iter().any(|b| b.id == id) {
            return;
        }
        let removed: Vec<Connection> = self
            .connections
            .iter()
            .filter(|c| c.touches(id))
            .cloned()
            .collect();
        self.connections.retain(|c| !c.touches(id));
        for conn in &removed {
            self.mark_connected(&conn.target_brick, &conn.target_port, false);
        }
        self.bricks.retain(|b| b.id != id);
        if self.selected_brick.as_deref() == Some(id) {
            self.selected_brick = None;
        }
    }

    /// Sets or clears the selected brick.
    ///
    /// A selection naming a missing brick is cleared instead.
    pub fn select_brick(&mut self, id: Option<&str>) {
        self.selected_brick = id
            .filter(|id| self.bricks.iter().any(|b| b.id == *id))
            .map(str::to_string);
    }

    /// Validates and inserts a connection, assigning a fresh id.
    ///
    /// Rejected when either endpoint brick or port is missing, the port
    /// types are incompatible, or the target input is already wired
    /// (fan-in = 1). On success the target input's `connected` flag is
    /// set and the assigned id returned.
    pub fn add_connection(&mut self, request: ConnectionRequest) -> Result<String, GraphError> {
        let source = self
            .brick(&request.source_brick)
            .ok_or_else(|| invalid(format!("source brick {} not found", request.source_brick)))?;
        let output = source.output(&request.source_port).ok_or_else(|| {
            invalid(format!(
                "output port {} not found on {}",
                request.source_port, request.source_brick
            ))
        })?;
        let target = self
            .brick(&request.target_brick)
            .ok_or_else(|| invalid(format!("target brick {} not found", request.target_brick)))?;
        let input = target.input(&request.target_port).ok_or_else(|| {
            invalid(format!(
                "input port {} not found on {}",
                request.target_port, request.target_brick
            ))
        })?;
        if !output.port_type.is_compatible(input.port_type) {
            return Err(invalid(format!(
                "port types {} and {} are incompatible",
                output.port_type, input.port_type
            )));
        }
        if input.connected {
            return Err(invalid(format!(
                "input port {} on {} is already connected",
                request.target_port, request.target_brick
            )));
        }

        self.next_connection_id += 1;
        let id = format!("conn-{}", self.next_connection_id);
        self.connections.push(Connection {
            id: id.clone(),
            source_brick: request.source_brick,
            source_port: request.source_port,
            target_brick: request.target_brick.clone(),
            target_port: request.target_port.clone(),
        });
        self.mark_connected(&request.target_brick, &request.target_port, true);
        Ok(id)
    }

    /// Removes a connection by id, clearing the target input's
    /// `connected` flag. No-op if the id is absent.
    pub fn remove_connection(&mut self, id: &str) {
        let Some(index) = self.connections.iter().position(|c| c.id == id) else {
            return;
        };
        let conn = self.connections.remove(index);
        self.mark_connected(&conn.target_brick, &conn.target_port, false);
    }

    /// Checks the graph-wide structural invariant: every connection's
    /// endpoints resolve to a live brick and a port of a compatible
    /// type.
    ///
    /// Graphs built through the mutation API always pass; this guards
    /// externally constructed or hand-edited graph data.
    pub fn validate(&self) -> Result<(), GraphError> {
        for conn in &self.connections {
            let source = self.brick(&conn.source_brick).ok_or_else(|| {
                GraphError::DanglingReference(format!(
                    "connection {} references missing brick {}",
                    conn.id, conn.source_brick
                ))
            })?;
            let target = self.brick(&conn.target_brick).ok_or_else(|| {
                GraphError::DanglingReference(format!(
                    "connection {} references missing brick {}",
                    conn.id, conn.target_brick
                ))
            })?;
            let output = source.output(&conn.source_port).ok_or_else(|| {
                invalid(format!(
                    "connection {} references missing output port {}",
                    conn.id, conn.source_port
                ))
            })?;
            let input = target.input(&conn.target_port).ok_or_else(|| {
                invalid(format!(
                    "connection {} references missing input port {}",
                    conn.id, conn.target_port
                ))
            })?;
            if !output.port_type.is_compatible(input.port_type) {
                return Err(invalid(format!(
                    "connection {} joins incompatible port types {} and {}",
                    conn.id, output.port_type, input.port_type
                )));
            }
        }
        Ok(())
    }

    /// Removes every brick, connection, and selection.
    ///
    /// Id counters are kept so cleared graphs never reuse ids.
    pub fn clear(&mut self) {
        self.bricks.clear();
        self.connections.clear();
        self.selected_brick = None;
    }

    fn mark_connected(&mut self, brick_id: &str, port_id: &str, connected: bool) {
        if let Some(brick) = self.bricks.iter_mut().find(|b| b.id == brick_id) {
            if let Some(port) = brick.inputs.iter_mut().find(|p| p.id == port_id) {
                port.connected = connected;
            }
        }
    }
}

fn invalid(message: String) -> GraphError {
    GraphError::InvalidConnection(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bricks::{BrickKind, Catalog, VanillaOptionProps};
    use crate::types::Position;

    fn wired_pair() -> (Graph, String, String) {
        let mut graph = Graph::new();
        let asset = graph.add_brick(Catalog::create(BrickKind::UnderlyingAsset));
        let option = graph.add_brick(Catalog::create(BrickKind::VanillaOption));
        graph
            .add_connection(ConnectionRequest::new(&asset, "price", &option, "underlying"))
            .unwrap();
        (graph, asset, option)
    }

    #[test]
    fn test_ids_are_sequential_and_never_reused() {
        let mut graph = Graph::new();
        let a = graph.add_brick(Catalog::create(BrickKind::Bond));
        let b = graph.add_brick(Catalog::create(BrickKind::Bond));
        assert_eq!(a, "brick-1");
        assert_eq!(b, "brick-2");

        graph.delete_brick(&b);
        let c = graph.add_brick(Catalog::create(BrickKind::Bond));
        assert_eq!(c, "brick-3");
    }

    #[test]
    fn test_add_connection_marks_input_connected() {
        let (graph, _, option) = wired_pair();
        let brick = graph.brick(&option).unwrap();
        assert!(brick.input("underlying").unwrap().connected);
    }

    #[test]
    fn test_add_connection_rejects_missing_brick() {
        let mut graph = Graph::new();
        let option = graph.add_brick(Catalog::create(BrickKind::VanillaOption));
        let err = graph
            .add_connection(ConnectionRequest::new("brick-99", "price", &option, "underlying"))
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidConnection(_)));
    }

    #[test]
    fn test_add_connection_rejects_missing_port() {
        let mut graph = Graph::new();
        let asset = graph.add_brick(Catalog::create(BrickKind::UnderlyingAsset));
        let option = graph.add_brick(Catalog::create(BrickKind::VanillaOption));
        let err = graph
            .add_connection(ConnectionRequest::new(&asset, "spot", &option, "underlying"))
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidConnection(_)));
    }

    #[test]
    fn test_add_connection_rejects_incompatible_types() {
        let mut graph = Graph::new();
        // Number output into an asset-typed input.
        let asset = graph.add_brick(Catalog::create(BrickKind::UnderlyingAsset));
        let trigger = graph.add_brick(Catalog::create(BrickKind::BarrierTrigger));
        let option = graph.add_brick(Catalog::create(BrickKind::VanillaOption));
        graph
            .add_connection(ConnectionRequest::new(&asset, "price", &trigger, "price"))
            .unwrap();
        let err = graph
            .add_connection(ConnectionRequest::new(&trigger, "triggered", &option, "underlying"))
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidConnection(_)));
    }

    #[test]
    fn test_fan_in_is_one() {
        let (mut graph, _, option) = wired_pair();
        let second = graph.add_brick(Catalog::create(BrickKind::UnderlyingAsset));
        let err = graph
            .add_connection(ConnectionRequest::new(&second, "price", &option, "underlying"))
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidConnection(_)));
    }

    #[test]
    fn test_output_fan_out_is_unbounded() {
        let mut graph = Graph::new();
        let asset = graph.add_brick(Catalog::create(BrickKind::UnderlyingAsset));
        for _ in 0..3 {
            let trigger = graph.add_brick(Catalog::create(BrickKind::BarrierTrigger));
            graph
                .add_connection(ConnectionRequest::new(&asset, "price", &trigger, "price"))
                .unwrap();
        }
        assert_eq!(graph.connections().len(), 3);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_delete_brick_cascades() {
        let (mut graph, asset, option) = wired_pair();
        let untouched = {
            let other_a = graph.add_brick(Catalog::create(BrickKind::UnderlyingAsset));
            let other_o = graph.add_brick(Catalog::create(BrickKind::DigitalOption));
            graph
                .add_connection(ConnectionRequest::new(&other_a, "price", &other_o, "underlying"))
                .unwrap()
        };
        graph.select_brick(Some(&asset));

        graph.delete_brick(&asset);

        assert!(graph.brick(&asset).is_none());
        assert_eq!(graph.connections().len(), 1);
        assert_eq!(graph.connections()[0].id, untouched);
        assert_eq!(graph.selected_brick(), None);
        // The surviving option's input is free again.
        assert!(!graph.brick(&option).unwrap().input("underlying").unwrap().connected);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_remove_connection_clears_flag_and_ignores_unknown() {
        let (mut graph, _, option) = wired_pair();
        let conn = graph.connections()[0].id.clone();
        graph.remove_connection("conn-99");
        assert_eq!(graph.connections().len(), 1);
        graph.remove_connection(&conn);
        assert!(graph.connections().is_empty());
        assert!(!graph.brick(&option).unwrap().input("underlying").unwrap().connected);
    }

    #[test]
    fn test_update_brick_patches_position_and_properties() {
        let (mut graph, _, option) = wired_pair();
        let props = VanillaOptionProps {
            strike: 4500.0,
            ..VanillaOptionProps::default()
        };
        let ok = graph.update_brick(
            &option,
            BrickUpdate {
                position: Some(Position::new(120.0, 80.0)),
                properties: Some(BrickProperties::VanillaOption(props.clone())),
            },
        );
        assert!(ok);
        let brick = graph.brick(&option).unwrap();
        assert_eq!(brick.position, Position::new(120.0, 80.0));
        assert_eq!(brick.properties, BrickProperties::VanillaOption(props));
    }

    #[test]
    fn test_update_brick_ignores_mismatched_property_kind() {
        let (mut graph, asset, _) = wired_pair();
        let before = graph.brick(&asset).unwrap().properties.clone();
        graph.update_brick(
            &asset,
            BrickUpdate::properties(BrickProperties::default_for(BrickKind::Sum)),
        );
        assert_eq!(graph.brick(&asset).unwrap().properties, before);
        assert!(!graph.update_brick("brick-99", BrickUpdate::default()));
    }

    #[test]
    fn test_select_missing_brick_clears_selection() {
        let (mut graph, asset, _) = wired_pair();
        graph.select_brick(Some(&asset));
        assert_eq!(graph.selected_brick(), Some(asset.as_str()));
        graph.select_brick(Some("brick-99"));
        assert_eq!(graph.selected_brick(), None);
    }

    #[test]
    fn test_validate_flags_hand_edited_graphs() {
        let (graph, asset, _) = wired_pair();
        let mut broken: Graph = serde_json::from_str(&serde_json::to_string(&graph).unwrap()).unwrap();
        broken.bricks.retain(|b| b.id != asset);
        assert!(matches!(
            broken.validate(),
            Err(GraphError::DanglingReference(_))
        ));
    }

    #[test]
    fn test_serde_round_trip_preserves_counters() {
        let (mut graph, _, _) = wired_pair();
        let json = serde_json::to_string(&graph).unwrap();
        let mut back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);

        let a = graph.add_brick(Catalog::create(BrickKind::Bond));
        let b = back.add_brick(Catalog::create(BrickKind::Bond));
        assert_eq!(a, b);
    }

    #[test]
    fn test_clear_keeps_counters() {
        let (mut graph, _, _) = wired_pair();
        graph.clear();
        assert!(graph.bricks().is_empty());
        assert!(graph.connections().is_empty());
        let id = graph.add_brick(Catalog::create(BrickKind::Bond));
        assert_eq!(id, "brick-3");
    }
}
