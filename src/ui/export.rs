//! XML export: serialize the current sketch and save it through a native
//! file dialog.
//!
//! The document is a direct field dump: one `node` element per node with
//! its id and coordinates, one `edge` element per edge with its endpoints.
//! There is no schema versioning and no import path.

use super::state::{ExportResult, SketcherApp};
use eframe::egui;
use std::path::Path;

impl SketcherApp {
    /// Builds the XML document for the current sketch.
    ///
    /// Nodes and edges are emitted in insertion order, so the output is
    /// deterministic for a given editing history. Attribute values are
    /// XML-escaped; coordinates are plain decimal representations.
    pub fn build_xml(&self) -> String {
        let mut out = String::new();
        use std::fmt::Write as _;

        let _ = writeln!(out, "<?xml version='1.0' encoding='utf-8'?>");
        let _ = writeln!(out, "<graph>");

        for node in &self.graph.nodes {
            if let Some(&(x, y)) = self.positions.get(node) {
                let _ = writeln!(
                    out,
                    "<node id=\"{}\" x=\"{}\" y=\"{}\" />",
                    escape_xml(node),
                    x,
                    y
                );
            }
        }

        for (source, target) in &self.graph.edges {
            let _ = writeln!(
                out,
                "<edge source=\"{}\" target=\"{}\" />",
                escape_xml(source),
                escape_xml(target)
            );
        }

        let _ = writeln!(out, "</graph>");
        out
    }

    /// Writes the XML document for the current sketch to the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - Destination file path
    ///
    /// # Returns
    ///
    /// `Ok(())` on success; filesystem errors (unwritable path,
    /// permissions) propagate unchanged.
    pub fn export_to_path(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.build_xml())
    }

    /// Exports the sketch to XML: open a save dialog off the UI thread and
    /// write the file where the user chooses.
    ///
    /// The outcome is reported back over the export channel and handled by
    /// [`SketcherApp::handle_export_results`]. Cancelling the dialog sends
    /// nothing.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context, for requesting a repaint on completion
    pub fn export_xml_via_dialog(&mut self, ctx: &egui::Context) {
        let xml = self.build_xml();
        let sender = self.file.export_sender.clone();
        let ctx = ctx.clone();

        tokio::spawn(async move {
            if let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter("XML", &["xml"])
                .set_file_name("graph.xml")
                .save_file()
                .await
            {
                let path = handle.path();
                let result = match std::fs::write(path, xml.as_bytes()) {
                    Ok(_) => ExportResult::Completed(path.display().to_string()),
                    Err(e) => ExportResult::Failed(format!("Failed to save XML: {}", e)),
                };
                if let Some(tx) = sender {
                    let _ = tx.send(result);
                }
                ctx.request_repaint();
            }
        });
    }

    /// Drains completed export operations from the channel.
    ///
    /// Called once per frame from `update`.
    pub fn handle_export_results(&mut self) {
        if let Some(receiver) = &self.file.export_receiver {
            while let Ok(result) = receiver.try_recv() {
                match result {
                    ExportResult::Completed(path) => {
                        println!("Graph exported to {}", path);
                    }
                    ExportResult::Failed(error) => {
                        eprintln!("Export failed: {}", error);
                    }
                }
            }
        }
    }
}

fn escape_xml(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(ch),
        }
    }
    s
}
