//! Core data types and structures for the graph sketcher.
//!
//! This module defines the undirected sketch graph, its seeded starting
//! state, the editing mode, and the input events routed from the UI.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A 2D coordinate in world space, assigned to each node for rendering.
pub type Position = (f32, f32);

/// Mapping from node identifier to its world-space coordinate.
pub type PositionMap = HashMap<String, Position>;

/// The editing mode selected via the radio buttons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mode {
    /// Each canvas click creates a new node at the click position
    AddNode,
    /// Two canvas clicks connect the two nearest existing nodes
    ConnectNodes,
}

impl Mode {
    /// The label shown on the radio button for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::AddNode => "Add node",
            Mode::ConnectNodes => "Connect nodes",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::AddNode
    }
}

/// A user input event routed from the UI widgets to the application state.
///
/// All graph mutation goes through a single dispatch point taking one of
/// these events, rather than individual widget callbacks mutating shared
/// state directly.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The canvas was clicked at the given world coordinates
    ClickAt {
        /// World-space x coordinate of the click
        x: f32,
        /// World-space y coordinate of the click
        y: f32,
    },
    /// A different editing mode was selected
    ModeChanged(Mode),
    /// The undo button was pressed (or Ctrl/Cmd+Z)
    UndoPressed,
}

/// An undirected graph of string-labelled nodes.
///
/// Nodes are kept in insertion order, which makes iteration (and therefore
/// nearest-node tie-breaking and export order) deterministic. Both nodes
/// and edges have set semantics: re-adding an existing node or edge is a
/// no-op. Self-loops are allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SketchGraph {
    /// Node identifiers in insertion order
    pub nodes: Vec<String>,
    /// Undirected edges as unordered pairs of node identifiers
    pub edges: Vec<(String, String)>,
}

impl SketchGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph contains a node with the given identifier.
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n == id)
    }

    /// Returns true if an edge between the two nodes exists in either
    /// orientation.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edges
            .iter()
            .any(|(s, t)| (s == a && t == b) || (s == b && t == a))
    }

    /// Adds a node to the graph.
    ///
    /// Adding an identifier that is already present is a no-op, so the node
    /// set never contains duplicates.
    pub fn add_node(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.contains_node(&id) {
            self.nodes.push(id);
        }
    }

    /// Adds an undirected edge between two existing nodes.
    ///
    /// Re-adding an existing edge (in either orientation) is a no-op.
    /// Self-loops are allowed.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the edge was added or already present, or an error
    /// message if either endpoint doesn't exist.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<(), String> {
        if !self.contains_node(a) {
            return Err("Source node does not exist".to_string());
        }
        if !self.contains_node(b) {
            return Err("Target node does not exist".to_string());
        }

        if !self.has_edge(a, b) {
            self.edges.push((a.to_string(), b.to_string()));
        }
        Ok(())
    }
}

/// Builds the seeded starting state: the four-node cycle A-B-C-D-A with
/// fixed symmetric positions.
pub fn seed_sketch() -> (SketchGraph, PositionMap) {
    let mut graph = SketchGraph::new();
    let mut positions = PositionMap::new();

    for (id, pos) in [
        ("A", (-0.5, 0.5)),
        ("B", (0.5, 0.5)),
        ("C", (0.5, -0.5)),
        ("D", (-0.5, -0.5)),
    ] {
        graph.add_node(id);
        positions.insert(id.to_string(), pos);
    }
    for (a, b) in [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")] {
        // Seeded endpoints always exist
        let _ = graph.add_edge(a, b);
    }

    (graph, positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sketch_contents() {
        let (graph, positions) = seed_sketch();

        assert_eq!(graph.nodes, vec!["A", "B", "C", "D"]);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.has_edge("A", "B"));
        assert!(graph.has_edge("B", "C"));
        assert!(graph.has_edge("C", "D"));
        assert!(graph.has_edge("D", "A"));
        assert!(!graph.has_edge("A", "C"));

        assert_eq!(positions.len(), 4);
        assert_eq!(positions["A"], (-0.5, 0.5));
        assert_eq!(positions["B"], (0.5, 0.5));
        assert_eq!(positions["C"], (0.5, -0.5));
        assert_eq!(positions["D"], (-0.5, -0.5));
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = SketchGraph::new();

        graph.add_node("X0");
        graph.add_node("X0");

        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains_node("X0"));
    }

    #[test]
    fn test_add_edge_success() {
        let mut graph = SketchGraph::new();
        graph.add_node("A");
        graph.add_node("B");

        let result = graph.add_edge("A", "B");

        assert!(result.is_ok());
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("A", "B"));
    }

    #[test]
    fn test_add_edge_dedups_either_orientation() {
        let mut graph = SketchGraph::new();
        graph.add_node("A");
        graph.add_node("B");

        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "A").unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("B", "A"));
    }

    #[test]
    fn test_add_edge_invalid_source() {
        let mut graph = SketchGraph::new();
        graph.add_node("B");

        let result = graph.add_edge("A", "B");

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Source node does not exist");
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_invalid_target() {
        let mut graph = SketchGraph::new();
        graph.add_node("A");

        let result = graph.add_edge("A", "B");

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Target node does not exist");
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_self_loop_is_allowed() {
        let mut graph = SketchGraph::new();
        graph.add_node("A");

        graph.add_edge("A", "A").unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("A", "A"));
    }

    #[test]
    fn test_mode_labels_match_radio_buttons() {
        assert_eq!(Mode::AddNode.label(), "Add node");
        assert_eq!(Mode::ConnectNodes.label(), "Connect nodes");
    }

    #[test]
    fn test_graph_serialization_roundtrip() {
        let (graph, _) = seed_sketch();

        let json = serde_json::to_string(&graph).unwrap();
        let restored: SketchGraph = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, graph);
    }
}
