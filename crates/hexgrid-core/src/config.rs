//! Render configuration.

use crate::error::HexGridError;
use crate::layout::{GridOrigin, HexLayout, Orientation};
use crate::visual::VisualStyle;
use serde::{Deserialize, Serialize};

/// Default pixel area the board is fitted into
pub const DEFAULT_MAX_WIDTH: f64 = 1200.0;
pub const DEFAULT_MAX_HEIGHT: f64 = 700.0;

/// How a board is sized, placed and styled. Every field has a default, so a
/// config document only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub max_width: f64,
    pub max_height: f64,
    pub orientation: Orientation,
    pub origin_x: f64,
    pub origin_y: f64,
    pub style: VisualStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            orientation: Orientation::default(),
            origin_x: 0.0,
            origin_y: 0.0,
            style: VisualStyle::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, HexGridError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn origin(&self) -> GridOrigin {
        GridOrigin::new(self.origin_x, self.origin_y)
    }

    /// Layout sized so a `columns` x `rows` board fits the configured area
    pub fn layout_for(&self, columns: i32, rows: i32) -> Result<HexLayout, HexGridError> {
        HexLayout::fit(self.max_width, self.max_height, columns, rows, self.orientation)
    }
}
