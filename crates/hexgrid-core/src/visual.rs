//! Per-cell rendering attributes and the cell-state style table.

use serde::{Deserialize, Serialize};

/// Stroke used when a visual does not name one
pub const DEFAULT_STROKE: &str = "#000";

/// Color used for labels and marker glyphs
pub const TEXT_COLOR: &str = "#000";

/// Glyph drawn on a cell that carries a marker
pub const DEFAULT_MARKER_GLYPH: &str = "•";

fn default_stroke() -> String {
    DEFAULT_STROKE.to_string()
}

/// How a single cell is drawn in one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellVisual {
    /// Interior color; the hexagon is only filled when set
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default = "default_stroke")]
    pub stroke: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Overlay glyph, e.g. the pivot of the active unit
    #[serde(default)]
    pub marker: Option<String>,
}

impl Default for CellVisual {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: default_stroke(),
            label: None,
            marker: None,
        }
    }
}

impl CellVisual {
    /// A visual filled with `color` and the default stroke
    pub fn filled(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn with_stroke(mut self, color: impl Into<String>) -> Self {
        self.stroke = color.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_marker(mut self, glyph: impl Into<String>) -> Self {
        self.marker = Some(glyph.into());
        self
    }
}

/// State of a board cell as far as drawing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Filled,
    /// Occupied by the unit currently dropping
    Dropping,
}

/// Maps cell states to visuals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualStyle {
    pub empty: CellVisual,
    pub filled: CellVisual,
    pub dropping: CellVisual,
    pub pivot_marker: String,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            empty: CellVisual::default(),
            filled: CellVisual::filled("#fa0"),
            dropping: CellVisual::filled("#f10"),
            pivot_marker: DEFAULT_MARKER_GLYPH.to_string(),
        }
    }
}

impl VisualStyle {
    pub fn visual(&self, state: CellState) -> &CellVisual {
        match state {
            CellState::Empty => &self.empty,
            CellState::Filled => &self.filled,
            CellState::Dropping => &self.dropping,
        }
    }
}
