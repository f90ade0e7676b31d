//! Application state management structures.
//!
//! This module contains the state structures that track the application's
//! current UI state, including canvas navigation, the export channel, and
//! the main SketcherApp.

use super::undo::UndoHistory;
use crate::types::*;
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{channel, Receiver, Sender};

/// State related to canvas navigation and display.
///
/// Tracks the current pan offset, zoom level, and display options for the
/// canvas.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasState {
    /// Current canvas pan offset for navigation (in screen space)
    #[serde(skip)]
    pub offset: egui::Vec2,
    /// Current zoom level (1.0 = normal, 2.0 = 2x zoom, 0.5 = 50% zoom)
    pub zoom_factor: f32,
    /// Whether the grid should be displayed on the canvas
    pub show_grid: bool,
    /// Whether the user is currently panning the canvas
    #[serde(skip)]
    pub is_panning: bool,
    /// Last mouse position during panning operation
    #[serde(skip)]
    pub last_pan_pos: Option<egui::Pos2>,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            offset: egui::Vec2::ZERO,
            zoom_factor: 1.0,
            show_grid: true,
            is_panning: false,
            last_pan_pos: None,
        }
    }
}

/// State related to the asynchronous XML export flow.
///
/// The export dialog and file write run off the UI thread; their outcome
/// is reported back over an mpsc channel drained once per frame.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct FileState {
    /// Channel for sending export results from async contexts
    #[serde(skip)]
    pub export_sender: Option<Sender<ExportResult>>,
    /// Channel for receiving export results on the UI thread
    #[serde(skip)]
    pub export_receiver: Option<Receiver<ExportResult>>,
}

impl Default for FileState {
    fn default() -> Self {
        let (sender, receiver) = channel();
        Self {
            export_sender: Some(sender),
            export_receiver: Some(receiver),
        }
    }
}

/// Messages sent from the async export operation back to the main app.
#[derive(Debug)]
pub enum ExportResult {
    /// Export completed successfully to the given path
    Completed(String),
    /// Export failed with an error message
    Failed(String),
}

/// The main application structure containing UI state and the sketch data.
///
/// This struct implements the `eframe::App` trait and handles all user
/// interface rendering. All graph mutation is routed through
/// [`SketcherApp::handle_input_event`].
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct SketcherApp {
    /// The graph being sketched
    pub graph: SketchGraph,
    /// Position mapping from node identifier to world coordinates
    pub positions: PositionMap,
    /// Currently selected editing mode
    pub mode: Mode,
    /// First endpoint recorded while forming an edge across two clicks.
    /// Survives mode switches; only cleared when an edge is formed.
    #[serde(skip)]
    pub pending_connection: Option<String>,
    /// Undo history of full-state snapshots
    pub undo_history: UndoHistory,
    /// Canvas navigation and display state
    pub canvas: CanvasState,
    /// Export channel state
    pub file: FileState,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
}

impl Default for SketcherApp {
    fn default() -> Self {
        let (graph, positions) = seed_sketch();
        Self {
            graph,
            positions,
            mode: Mode::default(),
            pending_connection: None,
            undo_history: UndoHistory::new(),
            canvas: CanvasState::default(),
            file: FileState::default(),
            dark_mode: true,
        }
    }
}

impl SketcherApp {
    /// Serializes the application state to JSON.
    ///
    /// # Returns
    ///
    /// A JSON string representation of the app state, or an error if
    /// serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes application state from JSON.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON string containing the serialized app state
    ///
    /// # Returns
    ///
    /// A `SketcherApp` instance, or an error if deserialization fails.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resets any non-UI related fields in the [SketcherApp], so that when
    /// persisted state is restored only settings related to the UI are
    /// retained and each session starts with the seeded sketch.
    pub fn reset_non_ui_fields(&mut self) {
        *self = Self {
            canvas: CanvasState {
                zoom_factor: self.canvas.zoom_factor,
                show_grid: self.canvas.show_grid,
                ..CanvasState::default()
            },
            dark_mode: self.dark_mode,
            ..Default::default()
        };
    }
}
