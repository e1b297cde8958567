//! A layout bound to one drawing surface.
//!
//! `HexGrid` keeps the renderer and the hit tester on the same geometry: it
//! owns the layout, remembers the origin of the last draw, and resolves
//! pointers against that origin. The host drives the lifecycle through
//! [`HexGrid::on_resize`] and [`HexGrid::invalidate`].

use crate::board::BoardView;
use crate::error::HexGridError;
use crate::hit_test::{resolve_cell_with_origin, PointerEvent, SurfacePlacement};
use crate::layout::{CellAddress, GridOrigin, HexLayout};
use crate::render::draw_hex_grid;
use crate::surface::DrawingSurface;
use crate::visual::CellVisual;

#[derive(Debug, Clone)]
pub struct HexGrid {
    layout: HexLayout,
    origin: GridOrigin,
    dirty: bool,
}

impl HexGrid {
    pub fn new(layout: HexLayout) -> Self {
        Self {
            layout,
            origin: GridOrigin::default(),
            dirty: true,
        }
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    /// Origin used by the most recent draw
    pub fn origin(&self) -> GridOrigin {
        self.origin
    }

    /// Replace the layout with one of a new radius. The old layout is kept if
    /// the radius is rejected.
    pub fn on_resize(&mut self, radius: f64) -> Result<(), HexGridError> {
        self.layout = self.layout.with_radius(radius)?;
        self.dirty = true;
        Ok(())
    }

    /// Mark the surface as needing a redraw
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Draw a grid at `origin`; see [`draw_hex_grid`].
    pub fn draw<S, F>(
        &mut self,
        surface: &mut S,
        origin: GridOrigin,
        columns: i32,
        rows: i32,
        cell_lookup: F,
        default_visual: &CellVisual,
    ) -> Result<(), HexGridError>
    where
        S: DrawingSurface + ?Sized,
        F: FnMut(CellAddress) -> Option<CellVisual>,
    {
        draw_hex_grid(&self.layout, surface, origin, columns, rows, cell_lookup, default_visual)?;
        self.origin = origin;
        self.dirty = false;
        Ok(())
    }

    /// Draw a board view at `origin`.
    pub fn draw_board<S>(
        &mut self,
        surface: &mut S,
        origin: GridOrigin,
        view: &BoardView<'_>,
    ) -> Result<(), HexGridError>
    where
        S: DrawingSurface + ?Sized,
    {
        view.draw(&self.layout, surface, origin)?;
        self.origin = origin;
        self.dirty = false;
        Ok(())
    }

    /// Cell under the pointer, relative to the last drawn origin.
    pub fn resolve<P>(&self, placement: &P, event: &PointerEvent) -> Result<CellAddress, HexGridError>
    where
        P: SurfacePlacement + ?Sized,
    {
        resolve_cell_with_origin(&self.layout, self.origin, placement, event)
    }
}
