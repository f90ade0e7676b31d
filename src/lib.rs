//! # Graph Sketcher
//!
//! An interactive editor for sketching a small undirected graph with the
//! mouse. Clicking the canvas either drops a new node or, in connect mode,
//! joins the two nearest nodes with an edge. Every mutating click pushes a
//! full snapshot onto an undo stack, and the current sketch can be exported
//! to an XML file.
//!
//! ## Features
//! - Click-to-add nodes and two-click edge creation
//! - Mode selection via radio buttons (add node / connect nodes)
//! - Snapshot-based undo (button or Ctrl/Cmd+Z)
//! - XML export through a native save dialog
//! - Canvas panning and zooming

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod types;
mod ui;

// Re-export public types and functions
pub use types::*;
pub use ui::{SketcherApp, Snapshot, UndoHistory};

/// Storage key under which the application state is persisted between runs.
const APP_STATE_KEY: &str = "app_state";

/// Runs the graph sketcher application with default settings.
///
/// This function initializes the egui application window and starts the main
/// event loop, restoring persisted UI preferences (theme, grid, zoom) from
/// the previous session. The sketch itself always starts from the seeded
/// four-node cycle.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use graph_sketcher::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Graph Sketcher",
        options,
        Box::new(|cc| {
            let mut app = cc
                .storage
                .and_then(|storage| storage.get_string(APP_STATE_KEY))
                .and_then(|json| SketcherApp::from_json(&json).ok())
                .unwrap_or_default();
            // Keep UI preferences only; every session starts with a fresh sketch.
            app.reset_non_ui_fields();
            Ok(Box::new(app))
        }),
    )
}
