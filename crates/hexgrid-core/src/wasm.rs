//! WebAssembly bindings for drawing on an HTML canvas.
//!
//! This module exposes the grid to JavaScript through wasm-bindgen. The page
//! owns the canvas and the timers; it calls `drawFrame` whenever the frame
//! changes and `getHexagon` from its pointer handlers.

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::config::RenderConfig;
use crate::error::HexGridError;
use crate::grid::HexGrid;
use crate::hit_test::{PointerEvent, SurfacePlacement};
use crate::layout::{HexLayout, Orientation, PixelPoint};
use crate::playback::{GameRecord, Playback};
use crate::surface::DrawingSurface;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(err: HexGridError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// [`DrawingSurface`] over a canvas 2D context.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }

    pub fn clear(&self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }
}

impl DrawingSurface for CanvasSurface {
    fn set_stroke_style(&mut self, color: &str) {
        self.context.set_stroke_style_str(color);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.context.set_fill_style_str(color);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn stroke(&mut self) {
        self.context.stroke();
    }

    fn fill(&mut self) {
        self.context.fill();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if let Err(err) = self.context.fill_text(text, x, y) {
            warn!(?err, text, "canvas fill_text failed");
        }
    }
}

/// Page position of an element, found by walking its offset parents.
///
/// Each element only reports its offset inside its offset parent, so the
/// offsets (minus scroll) are summed up to the document root.
pub struct ElementPlacement {
    element: HtmlElement,
}

impl ElementPlacement {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl SurfacePlacement for ElementPlacement {
    fn surface_placement(&self) -> PixelPoint {
        let mut x = 0.0;
        let mut y = 0.0;
        let mut current = Some(self.element.clone());

        while let Some(element) = current {
            x += f64::from(element.offset_left() - element.scroll_left());
            y += f64::from(element.offset_top() - element.scroll_top());
            current = element
                .offset_parent()
                .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
        }

        PixelPoint::new(x, y)
    }
}

/// WASM-exposed grid bound to one canvas
#[wasm_bindgen]
pub struct WasmHexGrid {
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    grid: HexGrid,
    config: RenderConfig,
    playback: Option<Playback>,
}

#[wasm_bindgen]
impl WasmHexGrid {
    /// Bind to a canvas. `config_json` may be empty for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, radius: f64, config_json: &str) -> Result<WasmHexGrid, JsValue> {
        let config = if config_json.trim().is_empty() {
            RenderConfig::default()
        } else {
            RenderConfig::from_json(config_json).map_err(to_js)?
        };

        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Canvas context is not 2d"))?;

        let layout = HexLayout::configure(radius, config.orientation).map_err(to_js)?;

        Ok(WasmHexGrid {
            canvas,
            surface: CanvasSurface::new(context),
            grid: HexGrid::new(layout),
            config,
            playback: None,
        })
    }

    /// Load a recorded game from its JSON payload and size the grid to it.
    #[wasm_bindgen(js_name = loadGame)]
    pub fn load_game(&mut self, record_json: &str) -> Result<usize, JsValue> {
        let record = GameRecord::from_json(record_json).map_err(to_js)?;
        let layout = self
            .config
            .layout_for(record.board.width, record.board.height)
            .map_err(to_js)?;
        self.grid.on_resize(layout.radius()).map_err(to_js)?;

        let playback = Playback::new(record);
        let frames = playback.len();
        self.playback = Some(playback);
        Ok(frames)
    }

    /// Clear the canvas and draw a frame of the loaded game.
    #[wasm_bindgen(js_name = drawFrame)]
    pub fn draw_frame(&mut self, frame_index: usize) -> Result<usize, JsValue> {
        let playback = self
            .playback
            .as_mut()
            .ok_or_else(|| JsValue::from_str("No game loaded"))?;
        let index = playback.advance_to(frame_index);

        self.surface
            .clear(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        let view = playback.view(&self.config.style);
        self.grid
            .draw_board(&mut self.surface, self.config.origin(), &view)
            .map_err(to_js)?;
        Ok(index)
    }

    /// Resolve page coordinates to `{"column": c, "row": r}`.
    #[wasm_bindgen(js_name = getHexagon)]
    pub fn get_hexagon(&self, page_x: f64, page_y: f64) -> Result<String, JsValue> {
        let element: &HtmlElement = &self.canvas;
        let placement = ElementPlacement::new(element.clone());
        let address = self
            .grid
            .resolve(&placement, &PointerEvent::at(page_x, page_y))
            .map_err(to_js)?;
        serde_json::to_string(&address).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = onResize)]
    pub fn on_resize(&mut self, radius: f64) -> Result<(), JsValue> {
        self.grid.on_resize(radius).map_err(to_js)
    }

    pub fn invalidate(&mut self) {
        self.grid.invalidate();
    }

    #[wasm_bindgen(js_name = needsRedraw)]
    pub fn needs_redraw(&self) -> bool {
        self.grid.needs_redraw()
    }

    #[wasm_bindgen(js_name = isFlatTop)]
    pub fn is_flat_top(&self) -> bool {
        self.grid.layout().orientation() == Orientation::FlatTop
    }
}
