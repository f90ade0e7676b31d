//! Shared application-wide constants.
//! Centralizes tweakable values used across UI rendering and interactions.

// World mapping
/// Pixels per world unit at zoom 1.0. Node positions live in the small
/// symmetric coordinate space of the seeded cycle (roughly -1..1).
pub const WORLD_SCALE: f32 = 250.0;

// Node rendering
/// Node circle radius in world units.
pub const NODE_RADIUS: f32 = 0.06;
/// Base font size for node labels (screen pixels before zoom scaling).
pub const LABEL_FONT_SIZE: f32 = 14.0;

// Edge rendering
/// Stroke width for edges (in screen pixels).
pub const EDGE_STROKE_WIDTH: f32 = 2.0;

// Grid/drawing
/// Grid cell size in world units.
pub const GRID_SIZE: f32 = 0.25;
