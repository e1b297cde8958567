//! Hex layout geometry using offset (column, row) coordinates.
//!
//! This module provides the coordinate model shared by rendering and hit testing:
//! - `HexLayout`: pixel measurements derived from a radius and an orientation
//! - `GridOrigin`: where column 0 / row 0 starts on the drawing surface
//! - `CellAddress`: identifies an individual cell of the grid
//!
//! Alternate lines (rows for pointy-top, columns for flat-top) are shifted by
//! half a hexagon to produce the brick-like tiling. Whether a line is shifted is
//! decided by [`is_offset_line`] alone.

use crate::error::HexGridError;
use serde::{Deserialize, Serialize};

/// Which way the hexagons point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Flat edge on top; columns are staggered vertically
    FlatTop,
    /// Vertex on top; rows are staggered horizontally
    #[default]
    PointyTop,
}

/// A position on the drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Swap the two axes. Flat-top geometry is the transpose of pointy-top.
    pub const fn transpose(self) -> Self {
        Self { x: self.y, y: self.x }
    }
}

/// Pixel offset marking where column 0 / row 0 begins on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridOrigin {
    pub x: f64,
    pub y: f64,
}

impl GridOrigin {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Offset coordinate of a grid cell.
///
/// Values may be negative or beyond the board extent when produced by the hit
/// tester; use [`CellAddress::in_bounds`] before indexing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CellAddress {
    pub column: i32,
    pub row: i32,
}

impl CellAddress {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Whether this address lies within a `columns` x `rows` board
    pub fn in_bounds(&self, columns: i32, rows: i32) -> bool {
        self.column >= 0 && self.row >= 0 && self.column < columns && self.row < rows
    }
}

/// Whether a row (pointy-top) or column (flat-top) is shifted by half a hexagon.
pub fn is_offset_line(index: i32) -> bool {
    index.rem_euclid(2) != 0
}

/// Immutable geometry of one grid.
///
/// All measurements are derived once in [`HexLayout::configure`]; to change the
/// radius, build a new layout with [`HexLayout::with_radius`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HexLayout {
    radius: f64,
    orientation: Orientation,
    width: f64,
    height: f64,
    side: f64,
}

impl HexLayout {
    /// Derive the pixel measurements for a hexagon of the given radius.
    pub fn configure(radius: f64, orientation: Orientation) -> Result<Self, HexGridError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(HexGridError::InvalidLayout { radius });
        }

        let (width, height) = match orientation {
            Orientation::PointyTop => (3.0_f64.sqrt() * radius, 2.0 * radius),
            Orientation::FlatTop => (2.0 * radius, 3.0_f64.sqrt() * radius),
        };

        Ok(Self {
            radius,
            orientation,
            width,
            height,
            side: 1.5 * radius,
        })
    }

    /// Largest layout that fits a `columns` x `rows` board inside the given
    /// pixel area: `radius = min(max_width / columns / 2, max_height / rows / sqrt(3))`.
    pub fn fit(
        max_width: f64,
        max_height: f64,
        columns: i32,
        rows: i32,
        orientation: Orientation,
    ) -> Result<Self, HexGridError> {
        if columns <= 0 || rows <= 0 {
            return Err(HexGridError::InvalidGrid { columns, rows });
        }

        let radius = f64::min(
            max_width / columns as f64 / 2.0,
            max_height / rows as f64 / 3.0_f64.sqrt(),
        );
        Self::configure(radius, orientation)
    }

    /// Same orientation, different radius
    pub fn with_radius(&self, radius: f64) -> Result<Self, HexGridError> {
        Self::configure(radius, self.orientation)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Horizontal extent of one hexagon's bounding box
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent of one hexagon's bounding box
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pitch between adjacent staggered lines, always `1.5 * radius`
    pub fn side(&self) -> f64 {
        self.side
    }

    /// The index whose parity decides the half-hexagon shift for this cell
    pub fn offset_index(&self, address: CellAddress) -> i32 {
        match self.orientation {
            Orientation::PointyTop => address.row,
            Orientation::FlatTop => address.column,
        }
    }

    /// Grid origin adjusted for a line that may need the half-hexagon shift.
    pub fn hex_origin(&self, origin: GridOrigin, is_offset: bool) -> PixelPoint {
        match self.orientation {
            Orientation::PointyTop => PixelPoint::new(
                origin.x + if is_offset { self.width * 0.5 } else { 0.0 },
                origin.y,
            ),
            Orientation::FlatTop => PixelPoint::new(
                origin.x,
                origin.y + if is_offset { self.height * 0.5 } else { 0.0 },
            ),
        }
    }

    /// Top-left corner of a cell's bounding box, relative to an origin that
    /// already carries the parity shift (see [`HexLayout::hex_origin`]).
    pub fn hex_pixel_position(&self, column: i32, row: i32, origin: PixelPoint) -> PixelPoint {
        match self.orientation {
            Orientation::PointyTop => PixelPoint::new(
                column as f64 * self.width + origin.x,
                row as f64 * self.side + origin.y,
            ),
            Orientation::FlatTop => PixelPoint::new(
                column as f64 * self.side + origin.x,
                row as f64 * self.height + origin.y,
            ),
        }
    }

    /// Top-left corner of a cell's bounding box, parity shift included.
    ///
    /// Both the renderer and the hit tester place cells through this method.
    pub fn cell_origin(&self, address: CellAddress, origin: GridOrigin) -> PixelPoint {
        let shifted = self.hex_origin(origin, is_offset_line(self.offset_index(address)));
        self.hex_pixel_position(address.column, address.row, shifted)
    }

    /// Center of a cell on the surface
    pub fn cell_center(&self, address: CellAddress, origin: GridOrigin) -> PixelPoint {
        let top_left = self.cell_origin(address, origin);
        PixelPoint::new(top_left.x + self.width / 2.0, top_left.y + self.height / 2.0)
    }

    /// The six corners of a hexagon whose bounding box starts at `top_left`,
    /// clockwise from the top (pointy-top) or top-left (flat-top) corner.
    pub fn corners(&self, top_left: PixelPoint) -> [PixelPoint; 6] {
        let PixelPoint { x: x0, y: y0 } = top_left;
        let (w, h, s) = (self.width, self.height, self.side);

        match self.orientation {
            Orientation::PointyTop => [
                PixelPoint::new(x0 + w / 2.0, y0),
                PixelPoint::new(x0 + w, y0 + h - s),
                PixelPoint::new(x0 + w, y0 + s),
                PixelPoint::new(x0 + w / 2.0, y0 + h),
                PixelPoint::new(x0, y0 + s),
                PixelPoint::new(x0, y0 + h - s),
            ],
            Orientation::FlatTop => [
                PixelPoint::new(x0 + w - s, y0),
                PixelPoint::new(x0 + s, y0),
                PixelPoint::new(x0 + w, y0 + h / 2.0),
                PixelPoint::new(x0 + s, y0 + h),
                PixelPoint::new(x0 + w - s, y0 + h),
                PixelPoint::new(x0, y0 + h / 2.0),
            ],
        }
    }

    /// Pixel size of the area covered by a `columns` x `rows` grid drawn at
    /// the origin, including the half-hexagon overhang of shifted lines.
    pub fn grid_extent(&self, columns: i32, rows: i32) -> (f64, f64) {
        let (columns, rows) = (columns.max(0) as f64, rows.max(0) as f64);
        match self.orientation {
            Orientation::PointyTop => (
                columns * self.width + self.width / 2.0,
                (rows - 1.0).max(0.0) * self.side + self.height,
            ),
            Orientation::FlatTop => (
                (columns - 1.0).max(0.0) * self.side + self.width,
                rows * self.height + self.height / 2.0,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_measurements_are_positive_for_both_orientations() {
        for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
            for radius in [0.5, 1.0, 20.0, 50.0, 1234.5] {
                let layout = HexLayout::configure(radius, orientation).unwrap();
                assert!(layout.width() > 0.0);
                assert!(layout.height() > 0.0);
                assert!(close(layout.side(), 1.5 * radius));
            }
        }
    }

    #[test]
    fn test_flat_top_swaps_width_and_height() {
        let pointy = HexLayout::configure(10.0, Orientation::PointyTop).unwrap();
        let flat = HexLayout::configure(10.0, Orientation::FlatTop).unwrap();
        assert!(close(pointy.width(), flat.height()));
        assert!(close(pointy.height(), flat.width()));
        assert!(close(pointy.height(), 20.0));
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                HexLayout::configure(radius, Orientation::PointyTop),
                Err(HexGridError::InvalidLayout { .. })
            ));
        }
    }

    #[test]
    fn test_offset_line_parity() {
        assert!(!is_offset_line(0));
        assert!(is_offset_line(1));
        assert!(!is_offset_line(2));
        assert!(is_offset_line(-1));
        for index in 0..200 {
            assert_eq!(is_offset_line(index), index % 2 == 1);
        }
    }

    #[test]
    fn test_hex_pixel_position_pointy_top() {
        let layout = HexLayout::configure(50.0, Orientation::PointyTop).unwrap();
        let p = layout.hex_pixel_position(0, 1, PixelPoint::default());
        assert_eq!(p, PixelPoint::new(0.0, 75.0));

        let p = layout.hex_pixel_position(2, 0, PixelPoint::new(10.0, 5.0));
        assert!(close(p.x, 2.0 * layout.width() + 10.0));
        assert!(close(p.y, 5.0));
    }

    #[test]
    fn test_hex_origin_shifts_odd_lines_only() {
        let layout = HexLayout::configure(50.0, Orientation::FlatTop).unwrap();
        let origin = GridOrigin::new(3.0, 4.0);
        assert_eq!(layout.hex_origin(origin, false), PixelPoint::new(3.0, 4.0));
        let shifted = layout.hex_origin(origin, true);
        assert!(close(shifted.y, 4.0 + layout.height() / 2.0));
        assert!(close(shifted.x, 3.0));
    }

    #[test]
    fn test_corners_stay_inside_bounding_box() {
        for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
            let layout = HexLayout::configure(30.0, orientation).unwrap();
            let top_left = PixelPoint::new(7.0, 11.0);
            for corner in layout.corners(top_left) {
                assert!(corner.x >= top_left.x - EPSILON);
                assert!(corner.y >= top_left.y - EPSILON);
                assert!(corner.x <= top_left.x + layout.width() + EPSILON);
                assert!(corner.y <= top_left.y + layout.height() + EPSILON);
            }
        }
    }

    #[test]
    fn test_fit_uses_smaller_radius() {
        let layout = HexLayout::fit(1200.0, 700.0, 10, 15, Orientation::PointyTop).unwrap();
        let expected = f64::min(1200.0 / 10.0 / 2.0, 700.0 / 15.0 / 3.0_f64.sqrt());
        assert!(close(layout.radius(), expected));

        assert!(matches!(
            HexLayout::fit(1200.0, 700.0, 0, 15, Orientation::PointyTop),
            Err(HexGridError::InvalidGrid { columns: 0, rows: 15 })
        ));
    }

    #[test]
    fn test_in_bounds() {
        assert!(CellAddress::new(0, 0).in_bounds(3, 3));
        assert!(!CellAddress::new(-1, 0).in_bounds(3, 3));
        assert!(!CellAddress::new(0, 3).in_bounds(3, 3));
    }
}
