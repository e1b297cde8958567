//! Grid renderer.
//!
//! Draws one hexagon per cell against a [`DrawingSurface`]. Every call is a
//! complete re-render from the visuals supplied: nothing is remembered between
//! passes, and clearing the rest of the surface is left to the caller.

use crate::error::HexGridError;
use crate::layout::{CellAddress, GridOrigin, HexLayout, PixelPoint};
use crate::surface::DrawingSurface;
use crate::visual::{CellVisual, TEXT_COLOR};
use tracing::debug;

/// Distance between a label's baseline and the bottom of the bounding box
const LABEL_BASELINE_INSET: f64 = 5.0;

/// Draw a `columns` x `rows` grid.
///
/// `cell_lookup` supplies the visual for each cell; cells it returns `None`
/// for are drawn with `default_visual`. Cells are visited column by column,
/// rows innermost. Fails before issuing any draw call if the extent is empty.
pub fn draw_hex_grid<S, F>(
    layout: &HexLayout,
    surface: &mut S,
    origin: GridOrigin,
    columns: i32,
    rows: i32,
    mut cell_lookup: F,
    default_visual: &CellVisual,
) -> Result<(), HexGridError>
where
    S: DrawingSurface + ?Sized,
    F: FnMut(CellAddress) -> Option<CellVisual>,
{
    if columns <= 0 || rows <= 0 {
        return Err(HexGridError::InvalidGrid { columns, rows });
    }

    debug!(columns, rows, origin_x = origin.x, origin_y = origin.y, "drawing hex grid");

    for column in 0..columns {
        for row in 0..rows {
            let address = CellAddress::new(column, row);
            let top_left = layout.cell_origin(address, origin);
            match cell_lookup(address) {
                Some(visual) => draw_hex(layout, surface, top_left, &visual),
                None => draw_hex(layout, surface, top_left, default_visual),
            }
        }
    }

    Ok(())
}

/// Draw a single hexagon whose bounding box starts at `top_left`.
///
/// The outline is always stroked; the interior is filled only when the
/// visual has a fill. Label and marker glyphs are drawn on top.
pub fn draw_hex<S>(layout: &HexLayout, surface: &mut S, top_left: PixelPoint, visual: &CellVisual)
where
    S: DrawingSurface + ?Sized,
{
    let [first, rest @ ..] = layout.corners(top_left);

    surface.set_stroke_style(&visual.stroke);
    surface.begin_path();
    surface.move_to(first.x, first.y);
    for corner in rest {
        surface.line_to(corner.x, corner.y);
    }
    surface.close_path();

    if let Some(fill) = &visual.fill {
        surface.set_fill_style(fill);
        surface.fill();
    }

    surface.stroke();

    if let Some(label) = &visual.label {
        surface.set_fill_style(TEXT_COLOR);
        surface.fill_text(
            label,
            top_left.x + layout.width() / 2.0 - layout.width() / 4.0,
            top_left.y + layout.height() - LABEL_BASELINE_INSET,
        );
    }

    if let Some(glyph) = &visual.marker {
        surface.set_fill_style(TEXT_COLOR);
        surface.fill_text(
            glyph,
            top_left.x + layout.width() / 2.0,
            top_left.y + layout.height() / 2.0,
        );
    }
}
