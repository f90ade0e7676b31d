//! Canvas rendering functionality for nodes, edges, and grid.

use super::state::SketcherApp;
use crate::constants;
use eframe::egui;

impl SketcherApp {
    /// Renders all sketch elements (grid, edges, and nodes) on the canvas.
    ///
    /// Elements are drawn in layers: grid first (background), then edges,
    /// then nodes with their labels (foreground). Rendering is a pure
    /// function of the current state, so repainting with no mutation in
    /// between produces an identical frame.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `canvas_rect` - The screen-space rectangle of the canvas area
    pub fn render_sketch_elements(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        if self.canvas.show_grid {
            self.draw_grid(painter, canvas_rect);
        }

        for (source, target) in &self.graph.edges {
            self.draw_edge(painter, source, target);
        }

        for node in &self.graph.nodes {
            self.draw_node(painter, node);
        }
    }

    /// Draws a zoom-aware grid on the canvas for visual reference.
    ///
    /// Grid lines are drawn every [`constants::GRID_SIZE`] world units and
    /// skipped entirely when the zoom level makes them too dense to read.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `canvas_rect` - The screen-space rectangle defining visible area
    pub fn draw_grid(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let grid_size = constants::GRID_SIZE;
        let grid_color = egui::Color32::from_rgba_unmultiplied(128, 128, 128, 32);
        let stroke = egui::Stroke::new(1.0, grid_color);

        // Visible world bounds; note the y flip between the two corners
        let top_left_world = self.screen_to_world(canvas_rect.min);
        let bottom_right_world = self.screen_to_world(canvas_rect.max);

        let start_x = (top_left_world.x / grid_size).floor() * grid_size;
        let end_x = (bottom_right_world.x / grid_size).ceil() * grid_size;
        let start_y = (bottom_right_world.y / grid_size).floor() * grid_size;
        let end_y = (top_left_world.y / grid_size).ceil() * grid_size;

        let screen_grid_size = grid_size * self.world_scale();
        if screen_grid_size < 2.0 {
            return;
        }

        let mut x = start_x;
        while x <= end_x {
            let screen_x = self.world_to_screen(egui::pos2(x, 0.0)).x;
            if screen_x >= canvas_rect.min.x && screen_x <= canvas_rect.max.x {
                painter.line_segment(
                    [
                        egui::pos2(screen_x, canvas_rect.min.y),
                        egui::pos2(screen_x, canvas_rect.max.y),
                    ],
                    stroke,
                );
            }
            x += grid_size;
        }

        let mut y = start_y;
        while y <= end_y {
            let screen_y = self.world_to_screen(egui::pos2(0.0, y)).y;
            if screen_y >= canvas_rect.min.y && screen_y <= canvas_rect.max.y {
                painter.line_segment(
                    [
                        egui::pos2(canvas_rect.min.x, screen_y),
                        egui::pos2(canvas_rect.max.x, screen_y),
                    ],
                    stroke,
                );
            }
            y += grid_size;
        }
    }

    /// Renders a single undirected edge between two nodes.
    ///
    /// A self-loop is drawn as a small circle above the node instead of a
    /// degenerate zero-length segment.
    fn draw_edge(&self, painter: &egui::Painter, source: &str, target: &str) {
        let (Some(&(sx, sy)), Some(&(tx, ty))) =
            (self.positions.get(source), self.positions.get(target))
        else {
            return;
        };

        let stroke_color = if self.dark_mode {
            egui::Color32::from_gray(200)
        } else {
            egui::Color32::from_gray(60)
        };
        let stroke = egui::Stroke::new(constants::EDGE_STROKE_WIDTH, stroke_color);

        if source == target {
            // Self-loop
            let center = self.world_to_screen(egui::pos2(sx, sy + constants::NODE_RADIUS * 1.5));
            let radius = constants::NODE_RADIUS * self.world_scale();
            painter.circle_stroke(center, radius, stroke);
            return;
        }

        let from = self.world_to_screen(egui::pos2(sx, sy));
        let to = self.world_to_screen(egui::pos2(tx, ty));
        painter.line_segment([from, to], stroke);
    }

    /// Renders a single node as a filled circle with its label centered on
    /// top.
    ///
    /// The first endpoint of a half-made connection gets a highlight ring
    /// so the user can see which node is pending.
    fn draw_node(&self, painter: &egui::Painter, node: &str) {
        let Some(&(x, y)) = self.positions.get(node) else {
            return;
        };

        let screen_pos = self.world_to_screen(egui::pos2(x, y));
        let radius = constants::NODE_RADIUS * self.world_scale();

        painter.circle_filled(screen_pos, radius, egui::Color32::ORANGE);

        let is_pending = self.pending_connection.as_deref() == Some(node);
        let (stroke_color, stroke_width) = if is_pending {
            (egui::Color32::YELLOW, 3.0)
        } else {
            (egui::Color32::BLACK, 1.5)
        };
        painter.circle_stroke(screen_pos, radius, egui::Stroke::new(stroke_width, stroke_color));

        let font_size =
            (constants::LABEL_FONT_SIZE * self.canvas.zoom_factor).clamp(8.0, 48.0);
        painter.text(
            screen_pos,
            egui::Align2::CENTER_CENTER,
            node,
            egui::FontId::proportional(font_size),
            egui::Color32::BLACK,
        );
    }
}
