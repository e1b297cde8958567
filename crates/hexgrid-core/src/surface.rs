//! The 2D drawing capability the renderer draws against.
//!
//! Any host substitutes its native drawing API behind [`DrawingSurface`]:
//! the browser canvas (see the `wasm` feature), the SVG writer in
//! [`crate::svg`], or the [`RecordingSurface`] used by tests.

use crate::layout::PixelPoint;
use serde::{Deserialize, Serialize};

/// Path-based 2D drawing operations, modelled on a canvas context.
pub trait DrawingSurface {
    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// One call made against a [`DrawingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetStrokeStyle { color: String },
    SetFillStyle { color: String },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Stroke,
    Fill,
    FillText { text: String, x: f64, y: f64 },
}

/// A polygon reassembled from a recorded command stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordedPolygon {
    pub points: Vec<PixelPoint>,
    /// Fill style in effect when the path was filled, if it was
    pub fill: Option<String>,
    /// Stroke style in effect when the path was stroked, if it was
    pub stroke: Option<String>,
    /// Text drawn after the path and before the next one
    pub texts: Vec<String>,
}

impl RecordedPolygon {
    /// Top-left corner of the polygon's bounding box
    pub fn bounding_origin(&self) -> PixelPoint {
        self.points.iter().fold(
            PixelPoint::new(f64::INFINITY, f64::INFINITY),
            |acc, p| PixelPoint::new(acc.x.min(p.x), acc.y.min(p.y)),
        )
    }
}

/// Surface that keeps every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Group the recorded commands into one entry per path.
    pub fn polygons(&self) -> Vec<RecordedPolygon> {
        let mut polygons: Vec<RecordedPolygon> = Vec::new();
        let mut stroke_style = String::from("#000");
        let mut fill_style = String::from("#000");

        for command in &self.commands {
            match command {
                DrawCommand::SetStrokeStyle { color } => stroke_style = color.clone(),
                DrawCommand::SetFillStyle { color } => fill_style = color.clone(),
                DrawCommand::BeginPath => polygons.push(RecordedPolygon::default()),
                DrawCommand::MoveTo { x, y } | DrawCommand::LineTo { x, y } => {
                    if let Some(polygon) = polygons.last_mut() {
                        polygon.points.push(PixelPoint::new(*x, *y));
                    }
                }
                DrawCommand::ClosePath => {}
                DrawCommand::Stroke => {
                    if let Some(polygon) = polygons.last_mut() {
                        polygon.stroke = Some(stroke_style.clone());
                    }
                }
                DrawCommand::Fill => {
                    if let Some(polygon) = polygons.last_mut() {
                        polygon.fill = Some(fill_style.clone());
                    }
                }
                DrawCommand::FillText { text, .. } => {
                    if let Some(polygon) = polygons.last_mut() {
                        polygon.texts.push(text.clone());
                    }
                }
            }
        }

        polygons
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetStrokeStyle {
            color: color.to_string(),
        });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetFillStyle {
            color: color.to_string(),
        });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
