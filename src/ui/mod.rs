//! User interface components and rendering logic for the graph sketcher.
//!
//! This module contains all the UI-related code including the main
//! application struct, canvas rendering, the control panel, and user
//! interaction handling.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main SketcherApp
//! - `canvas` - Canvas navigation, zooming, panning, and click dispatch
//! - `rendering` - Drawing nodes, edges, and the grid
//! - `undo` - Snapshot stack for reversing mutating clicks
//! - `export` - XML serialization and the async save dialog

mod canvas;
mod export;
mod rendering;
mod state;
mod undo;

pub use state::SketcherApp;
pub use undo::{Snapshot, UndoHistory};

use crate::types::*;
use eframe::egui;

impl eframe::App for SketcherApp {
    /// Persist entire app state between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string(crate::APP_STATE_KEY, json);
            }
            Err(err) => {
                eprintln!("Failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// This method handles the overall UI layout: the control panel on the
    /// left (mode selector, undo, export) and the canvas filling the rest.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `_frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme visuals
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        // Drain completed export operations
        self.handle_export_results();

        // Handle the undo keyboard shortcut
        self.handle_undo_key(ctx);

        // Control panel on the left side
        egui::SidePanel::left("control_panel")
            .resizable(false)
            .default_width(150.0)
            .show(ctx, |ui| {
                self.draw_control_panel(ui, ctx);
            });

        // Central canvas area
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}

impl SketcherApp {
    /// Applies a single input event to the application state.
    ///
    /// This is the only place where the graph, position mapping, undo
    /// stack, and pending-connection cursor are mutated. The UI widgets
    /// translate their interactions into [`InputEvent`] values and route
    /// them here.
    ///
    /// # Arguments
    ///
    /// * `event` - The event to apply
    pub fn handle_input_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::ClickAt { x, y } => self.handle_sketch_click(x, y),
            InputEvent::ModeChanged(mode) => {
                // A pending connection endpoint deliberately survives mode
                // switches; it is only cleared when an edge is formed.
                self.mode = mode;
            }
            InputEvent::UndoPressed => self.perform_undo(),
        }
    }

    /// Handles a click at the given world coordinates according to the
    /// current mode.
    ///
    /// A snapshot is pushed before every click, including the first click
    /// of a connection, which mutates nothing.
    fn handle_sketch_click(&mut self, x: f32, y: f32) {
        let closest_node = self.find_nearest_node(x, y);

        self.undo_history.push_snapshot(Snapshot {
            graph: self.graph.clone(),
            positions: self.positions.clone(),
        });

        match self.mode {
            Mode::AddNode => {
                // Synthesized labels count up from the number of nodes
                // beyond the seeded four. The scheme can re-issue a label
                // after an undo; re-adding an existing label is a set
                // no-op whose position entry is overwritten.
                let node_label = format!("X{}", self.graph.node_count().saturating_sub(4));
                self.graph.add_node(node_label.clone());
                self.positions.insert(node_label, (x, y));
            }
            Mode::ConnectNodes => {
                let Some(closest_node) = closest_node else {
                    return;
                };
                match self.pending_connection.take() {
                    None => {
                        self.pending_connection = Some(closest_node);
                    }
                    Some(first) => {
                        // Both endpoints came from the nearest-node scan,
                        // so they exist; a self-loop is possible when both
                        // clicks resolve to the same node.
                        if let Err(err) = self.graph.add_edge(&first, &closest_node) {
                            eprintln!("Failed to connect nodes: {}", err);
                        }
                    }
                }
            }
        }
    }

    /// Pops the most recent snapshot and restores it, if any.
    ///
    /// The editing mode and pending-connection cursor are not snapshotted
    /// and therefore not restored. Silent no-op on an empty stack.
    pub fn perform_undo(&mut self) {
        if let Some(snapshot) = self.undo_history.pop_snapshot() {
            self.graph = snapshot.graph;
            self.positions = snapshot.positions;
        }
    }

    /// Handles the Ctrl/Cmd+Z undo keyboard shortcut.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context for checking input
    pub fn handle_undo_key(&mut self, ctx: &egui::Context) {
        // Check if any text edit widget wants keyboard focus - if so,
        // don't handle undo
        let is_editing_text = ctx.wants_keyboard_input();

        if !is_editing_text
            && ctx.input(|i| i.key_pressed(egui::Key::Z) && i.modifiers.command)
        {
            self.handle_input_event(InputEvent::UndoPressed);
        }
    }

    /// Renders the control panel with the mode selector, undo button, and
    /// export button.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `ctx` - The egui context, passed through to the export dialog
    fn draw_control_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("Graph Sketcher");
        ui.separator();

        // Mode radio buttons; selection changes route through the event
        // handler like every other mutation
        let mut selected = self.mode;
        ui.radio_value(&mut selected, Mode::AddNode, Mode::AddNode.label());
        ui.radio_value(&mut selected, Mode::ConnectNodes, Mode::ConnectNodes.label());
        if selected != self.mode {
            self.handle_input_event(InputEvent::ModeChanged(selected));
        }

        ui.separator();

        ui.add_enabled_ui(self.undo_history.can_undo(), |ui| {
            if ui.button("⟲ Undo").clicked() {
                self.handle_input_event(InputEvent::UndoPressed);
            }
        });

        if ui.button("Export XML").clicked() {
            self.export_xml_via_dialog(ctx);
        }

        ui.separator();

        ui.checkbox(&mut self.canvas.show_grid, "Show grid");
        ui.checkbox(&mut self.dark_mode, "Dark mode");
    }

    /// Renders the main canvas area and handles user interactions.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        // Initialize canvas to center the origin on first frame
        if self.canvas.offset == egui::Vec2::ZERO {
            let canvas_center = response.rect.center();
            self.canvas.offset = canvas_center.to_vec2();
        }

        // Handle canvas panning with middle mouse button or Ctrl+drag
        self.handle_canvas_panning(ui, &response);

        // Handle scroll wheel zooming
        self.handle_canvas_zoom(ui, &response);

        // Handle left clicks (add node / connect nodes)
        self.handle_canvas_click(&response);

        // Render all sketch elements
        self.render_sketch_elements(&painter, response.rect);
    }
}

#[cfg(test)]
mod tests;
