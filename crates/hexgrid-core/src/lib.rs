//! Hexgrid - rendering and hit testing for hexagonal tile boards
//!
//! This crate draws a hexagonal grid onto a 2D drawing surface and maps
//! pointer positions back to the cell beneath them:
//! - Layout geometry shared by drawing and hit testing
//! - A renderer that issues one polygon per cell against any drawing surface
//! - A hit tester that resolves page coordinates to a cell address
//! - Board snapshots, recorded games and frame playback
//!
//! # Architecture
//!
//! The engine is platform-agnostic and holds no board state between calls.
//! It can be compiled to:
//! - Native Rust, drawing to SVG (see the `hexgrid` binary)
//! - WebAssembly, drawing to an HTML canvas (`wasm` feature)
//!
//! # Modules
//!
//! - [`layout`]: Hexagon measurements and cell placement
//! - [`render`]: Grid renderer
//! - [`hit_test`]: Pointer to cell resolution
//! - [`board`]: Board snapshots and the per-cell visual lookup
//! - [`playback`]: Recorded games and frame cursor

pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod playback;
pub mod render;
pub mod surface;
pub mod svg;
pub mod visual;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{BoardCell, BoardSnapshot, BoardView, Position, UnitOverlay};
pub use config::RenderConfig;
pub use error::HexGridError;
pub use grid::HexGrid;
pub use hit_test::{
    is_point_in_triangle, resolve_cell, resolve_cell_with_origin, resolve_local, LayoutBox,
    OffsetChain, PointerEvent, SurfacePlacement,
};
pub use layout::{is_offset_line, CellAddress, GridOrigin, HexLayout, Orientation, PixelPoint};
pub use playback::{Frame, GameRecord, Playback};
pub use render::{draw_hex, draw_hex_grid};
pub use surface::{DrawCommand, DrawingSurface, RecordedPolygon, RecordingSurface};
pub use svg::SvgSurface;
pub use visual::{CellState, CellVisual, VisualStyle};
