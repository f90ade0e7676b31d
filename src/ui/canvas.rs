//! Canvas interaction and navigation functionality.
//!
//! This module handles canvas panning, zooming, click dispatch, and
//! coordinate transformations between screen and world space. World
//! coordinates follow the mathematical convention (y points up), so the
//! transform flips the y axis in addition to scaling and panning.

use super::state::SketcherApp;
use crate::constants;
use crate::types::InputEvent;
use eframe::egui;

impl SketcherApp {
    /// Pixels per world unit at the current zoom level.
    pub(super) fn world_scale(&self) -> f32 {
        constants::WORLD_SCALE * self.canvas.zoom_factor
    }

    /// Converts screen coordinates to world coordinates accounting for zoom
    /// and pan.
    ///
    /// # Arguments
    ///
    /// * `screen_pos` - Position in screen space (pixels)
    ///
    /// # Returns
    ///
    /// The corresponding position in world space
    pub fn screen_to_world(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        let s = self.world_scale();
        egui::pos2(
            (screen_pos.x - self.canvas.offset.x) / s,
            -(screen_pos.y - self.canvas.offset.y) / s,
        )
    }

    /// Converts world coordinates to screen coordinates accounting for zoom
    /// and pan.
    ///
    /// # Arguments
    ///
    /// * `world_pos` - Position in world space
    ///
    /// # Returns
    ///
    /// The corresponding position in screen space (pixels)
    pub fn world_to_screen(&self, world_pos: egui::Pos2) -> egui::Pos2 {
        let s = self.world_scale();
        egui::pos2(
            world_pos.x * s + self.canvas.offset.x,
            -world_pos.y * s + self.canvas.offset.y,
        )
    }

    /// Handles middle-click or Cmd/Ctrl+left-click canvas panning.
    ///
    /// Uses Cmd on macOS and Ctrl on other platforms for modifier-based
    /// panning.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `response` - The response from the canvas widget
    pub fn handle_canvas_panning(&mut self, ui: &mut egui::Ui, response: &egui::Response) {
        // modifiers.command automatically uses Cmd on macOS and Ctrl elsewhere
        let should_pan = ui.input(|i| {
            i.pointer.middle_down() || (i.pointer.primary_down() && i.modifiers.command)
        });

        if should_pan {
            if let Some(current_pos) = response.interact_pointer_pos() {
                if !self.canvas.is_panning {
                    self.canvas.is_panning = true;
                    self.canvas.last_pan_pos = Some(current_pos);
                } else if let Some(last_pos) = self.canvas.last_pan_pos {
                    let delta = current_pos - last_pos;
                    self.canvas.offset += delta;
                    self.canvas.last_pan_pos = Some(current_pos);
                }
            }
        } else {
            self.canvas.is_panning = false;
            self.canvas.last_pan_pos = None;
        }
    }

    /// Handles scroll wheel zooming.
    ///
    /// Zooms in/out while keeping the mouse cursor position fixed in world
    /// space. Zoom range is clamped between 0.25x and 5.0x. Only zooms if
    /// the cursor is over the canvas.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `response` - The response from the canvas widget
    pub fn handle_canvas_zoom(&mut self, ui: &mut egui::Ui, response: &egui::Response) {
        let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);

        if scroll_delta != 0.0 {
            let mouse_pos = ui
                .input(|i| i.pointer.hover_pos())
                .or_else(|| response.interact_pointer_pos());

            if let Some(mouse_pos) = mouse_pos {
                if !response.rect.contains(mouse_pos) {
                    return;
                }

                // World position under the cursor before the zoom change
                let world_pos_before_zoom = self.screen_to_world(mouse_pos);

                let zoom_delta = if scroll_delta > 0.0 { 0.025 } else { -0.025 };
                let old_zoom = self.canvas.zoom_factor;
                self.canvas.zoom_factor = (self.canvas.zoom_factor + zoom_delta).clamp(0.25, 5.0);

                if (self.canvas.zoom_factor - old_zoom).abs() > f32::EPSILON {
                    // Adjust the offset so that world position stays under
                    // the cursor after the zoom change
                    let world_pos_after_zoom = self.world_to_screen(world_pos_before_zoom);
                    let offset_adjustment = mouse_pos - world_pos_after_zoom;
                    self.canvas.offset += offset_adjustment;
                }
            }
        }
    }

    /// Handles left-click dispatch on the canvas.
    ///
    /// Clicks are only reported by egui while the pointer is inside the
    /// canvas rect, so clicks outside the plotting area never reach the
    /// event handler. Panning gestures are not clicks.
    ///
    /// # Arguments
    ///
    /// * `response` - The response from the canvas widget
    pub fn handle_canvas_click(&mut self, response: &egui::Response) {
        if response.clicked() && !self.canvas.is_panning {
            if let Some(pos) = response.interact_pointer_pos() {
                let world_pos = self.screen_to_world(pos);
                self.handle_input_event(InputEvent::ClickAt {
                    x: world_pos.x,
                    y: world_pos.y,
                });
            }
        }
    }

    /// Finds the existing node nearest to the given world coordinates.
    ///
    /// Linear scan over all node positions by Euclidean distance. Nodes are
    /// visited in insertion order, and only a strictly smaller distance
    /// replaces the current best, so ties resolve to the first-encountered
    /// node deterministically.
    ///
    /// # Arguments
    ///
    /// * `x` - World-space x coordinate of the query point
    /// * `y` - World-space y coordinate of the query point
    ///
    /// # Returns
    ///
    /// The identifier of the nearest node, or `None` for an empty graph
    pub fn find_nearest_node(&self, x: f32, y: f32) -> Option<String> {
        let mut closest: Option<String> = None;
        let mut min_dist = f32::INFINITY;

        for node in &self.graph.nodes {
            if let Some(&(node_x, node_y)) = self.positions.get(node) {
                let dist = ((x - node_x).powi(2) + (y - node_y).powi(2)).sqrt();
                if dist < min_dist {
                    min_dist = dist;
                    closest = Some(node.clone());
                }
            }
        }
        closest
    }
}
