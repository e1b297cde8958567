//! SVG output for drawn frames.

use crate::surface::DrawingSurface;
use std::fmt::Write;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Drawing surface that accumulates SVG elements.
///
/// Every `fill` and `stroke` emits one `<path>` for the current path, so the
/// output preserves draw order.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Option<String>,
    stroke_style: String,
    fill_style: String,
    path: String,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            stroke_style: "#000".to_string(),
            fill_style: "#000".to_string(),
            path: String::new(),
            elements: Vec::new(),
        }
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Number of elements emitted so far
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialise the document.
    pub fn finish(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}">"#,
            w = self.width,
            h = self.height,
        );
        if let Some(bg) = &self.background {
            let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="{}"/>"#, escape(bg));
        }
        for element in &self.elements {
            let _ = writeln!(out, "  {}", element);
        }
        out.push_str("</svg>\n");
        out
    }
}

impl DrawingSurface for SvgSurface {
    fn set_stroke_style(&mut self, color: &str) {
        self.stroke_style = color.to_string();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.fill_style = color.to_string();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "M{:.2} {:.2} ", x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "L{:.2} {:.2} ", x, y);
    }

    fn close_path(&mut self) {
        self.path.push('Z');
    }

    fn stroke(&mut self) {
        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}"/>"#,
            self.path.trim_end(),
            escape(&self.stroke_style)
        ));
    }

    fn fill(&mut self) {
        self.elements.push(format!(
            r#"<path d="{}" fill="{}" stroke="none"/>"#,
            self.path.trim_end(),
            escape(&self.fill_style)
        ));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.elements.push(format!(
            r#"<text x="{:.2}" y="{:.2}" fill="{}">{}</text>"#,
            x,
            y,
            escape(&self.fill_style),
            escape(text)
        ));
    }
}
