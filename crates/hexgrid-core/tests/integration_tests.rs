//! Integration tests for the hexgrid engine.
//!
//! These tests drive the renderer and the hit tester together through the
//! public API, the way a host page would.

use hexgrid_core::*;
use pretty_assertions::assert_eq;

fn recorded_draw(layout: &HexLayout, view: &BoardView<'_>) -> Vec<RecordedPolygon> {
    let mut surface = RecordingSurface::new();
    view.draw(layout, &mut surface, GridOrigin::default()).unwrap();
    surface.polygons()
}

/// Index of a cell's polygon when cells are drawn column by column
fn draw_index(address: CellAddress, rows: i32) -> usize {
    (address.column * rows + address.row) as usize
}

/// Whether `p` lies in the cell's hexagon, grown slightly to absorb rounding
fn hexagon_contains(layout: &HexLayout, address: CellAddress, p: PixelPoint) -> bool {
    let center = layout.cell_center(address, GridOrigin::default());
    let corners = layout
        .corners(layout.cell_origin(address, GridOrigin::default()))
        .map(|c| PixelPoint::new(center.x + (c.x - center.x) * 1.001, center.y + (c.y - center.y) * 1.001));

    (0..6).any(|i| is_point_in_triangle(p, center, corners[i], corners[(i + 1) % 6]))
}

fn page_placement() -> OffsetChain {
    OffsetChain(vec![
        LayoutBox {
            offset_left: 12.0,
            offset_top: 30.0,
            scroll_left: 0.0,
            scroll_top: 0.0,
        },
        LayoutBox {
            offset_left: 100.0,
            offset_top: 64.0,
            scroll_left: 0.0,
            scroll_top: 14.0,
        },
    ])
}

#[test]
fn test_default_grid_draws_one_polygon_per_cell_in_column_order() {
    let layout = HexLayout::configure(50.0, Orientation::PointyTop).unwrap();
    assert_eq!(layout.side(), 75.0);

    let mut surface = RecordingSurface::new();
    draw_hex_grid(
        &layout,
        &mut surface,
        GridOrigin::default(),
        7,
        5,
        |_| None,
        &CellVisual::default(),
    )
    .unwrap();

    let polygons = surface.polygons();
    assert_eq!(polygons.len(), 35);

    assert_eq!(polygons[0].bounding_origin(), PixelPoint::new(0.0, 0.0));
    // Row 1 sits one side-length down; being an odd row it is also shifted
    // right by half a hexagon.
    assert_eq!(layout.hex_pixel_position(0, 1, PixelPoint::default()), PixelPoint::new(0.0, 75.0));
    assert_eq!(
        polygons[1].bounding_origin(),
        PixelPoint::new(layout.width() / 2.0, 75.0)
    );

    let mut index = 0;
    for column in 0..7 {
        for row in 0..5 {
            let expected = layout.cell_origin(CellAddress::new(column, row), GridOrigin::default());
            assert_eq!(polygons[index].bounding_origin(), expected);
            assert_eq!(polygons[index].points.len(), 6);
            assert_eq!(polygons[index].fill, None);
            assert_eq!(polygons[index].stroke.as_deref(), Some("#000"));
            index += 1;
        }
    }
}

#[test]
fn test_filled_cell_gets_fill_and_default_stroke() {
    let layout = HexLayout::configure(50.0, Orientation::PointyTop).unwrap();
    let board = BoardSnapshot::with_filled(7, 5, &[CellAddress::new(3, 2)]).unwrap();
    let style = VisualStyle::default();
    let polygons = recorded_draw(&layout, &BoardView::new(&board, &style));

    let filled = draw_index(CellAddress::new(3, 2), 5);
    for (index, polygon) in polygons.iter().enumerate() {
        assert_eq!(polygon.stroke.as_deref(), Some("#000"));
        if index == filled {
            assert_eq!(polygon.fill.as_deref(), Some("#fa0"));
        } else {
            assert_eq!(polygon.fill, None);
        }
    }
}

#[test]
fn test_unit_and_pivot_drawn_in_the_same_pass() {
    let layout = HexLayout::configure(50.0, Orientation::PointyTop).unwrap();
    let board = BoardSnapshot::new(7, 5).unwrap();
    let unit = UnitOverlay::new(
        vec![Position::new(2, 2), Position::new(2, 3)],
        Some(Position::new(2, 2)),
    );
    let style = VisualStyle::default();
    let polygons = recorded_draw(&layout, &BoardView::new(&board, &style).with_unit(&unit));

    assert_eq!(polygons.len(), 35);

    let pivot = &polygons[draw_index(CellAddress::new(2, 2), 5)];
    assert_eq!(pivot.fill, style.dropping.fill);
    assert_eq!(pivot.texts, vec![style.pivot_marker.clone()]);

    let member = &polygons[draw_index(CellAddress::new(2, 3), 5)];
    assert_eq!(member.fill, style.dropping.fill);
    assert!(member.texts.is_empty());

    let marked = polygons.iter().filter(|p| !p.texts.is_empty()).count();
    assert_eq!(marked, 1);
}

#[test]
fn test_upper_wedge_resolves_to_previous_column_and_row() {
    let layout = HexLayout::configure(50.0, Orientation::FlatTop).unwrap();
    let placement = page_placement();
    let offset = placement.surface_placement();

    // Column 4's left band is x in (300, 325); the first pass puts this point
    // in (4, 2), inside the upper-left wedge.
    let local = PixelPoint::new(305.0, 178.0);
    let event = PointerEvent::at(local.x + offset.x, local.y + offset.y);

    let address = resolve_cell(&layout, &placement, &event).unwrap();
    assert_eq!(address, CellAddress::new(3, 1));
}

#[test]
fn test_precondition_failures() {
    assert!(matches!(
        HexLayout::configure(0.0, Orientation::PointyTop),
        Err(HexGridError::InvalidLayout { .. })
    ));

    let layout = HexLayout::configure(50.0, Orientation::PointyTop).unwrap();
    let mut surface = RecordingSurface::new();
    let result = draw_hex_grid(
        &layout,
        &mut surface,
        GridOrigin::default(),
        0,
        5,
        |_| None,
        &CellVisual::default(),
    );
    assert_eq!(result, Err(HexGridError::InvalidGrid { columns: 0, rows: 5 }));
    assert!(surface.commands().is_empty());
}

#[test]
fn test_clicking_a_cell_center_resolves_to_that_cell() {
    let placement = page_placement();
    let offset = placement.surface_placement();

    for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
        for radius in [13.0, 50.0] {
            let layout = HexLayout::configure(radius, orientation).unwrap();
            for column in 0..7 {
                for row in 0..5 {
                    let address = CellAddress::new(column, row);
                    let center = layout.cell_center(address, GridOrigin::default());
                    let event = PointerEvent::at(center.x + offset.x, center.y + offset.y);
                    assert_eq!(resolve_cell(&layout, &placement, &event), Ok(address));
                }
            }
        }
    }
}

#[test]
fn test_resolved_cell_contains_the_pointer() {
    for orientation in [Orientation::PointyTop, Orientation::FlatTop] {
        let layout = HexLayout::configure(50.0, orientation).unwrap();
        for i in 0..150 {
            for j in 0..120 {
                let p = PixelPoint::new(-60.0 + 0.31 + 3.7 * i as f64, -60.0 + 0.29 + 3.3 * j as f64);
                let address = resolve_local(&layout, p);
                assert!(
                    hexagon_contains(&layout, address, p),
                    "{:?} resolved to {:?} for {:?}",
                    p,
                    address,
                    orientation
                );
            }
        }
    }
}

#[test]
fn test_points_on_a_shared_edge_resolve_to_one_neighbour() {
    let layout = HexLayout::configure(50.0, Orientation::FlatTop).unwrap();
    let h = layout.height();

    // Upper-left edge of (4, 2): from (300, 2.5h) up to (325, 2h).
    let start = PixelPoint::new(300.0, 2.5 * h);
    let end = PixelPoint::new(325.0, 2.0 * h);

    for step in 1..10 {
        let t = step as f64 / 10.0;
        let p = PixelPoint::new(start.x + (end.x - start.x) * t, start.y + (end.y - start.y) * t);
        let first = resolve_local(&layout, p);
        let second = resolve_local(&layout, p);
        assert_eq!(first, second);
        assert!(
            first == CellAddress::new(4, 2) || first == CellAddress::new(3, 1),
            "{:?} resolved to {:?}",
            p,
            first
        );
    }
}

#[test]
fn test_redraw_is_identical() {
    let layout = HexLayout::configure(20.0, Orientation::FlatTop).unwrap();
    let board = BoardSnapshot::with_filled(5, 4, &[CellAddress::new(1, 1), CellAddress::new(4, 3)]).unwrap();
    let unit = UnitOverlay::new(vec![Position::new(0, 0)], Some(Position::new(0, 0)));
    let style = VisualStyle::default();
    let view = BoardView::new(&board, &style).with_unit(&unit);

    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();
    view.draw(&layout, &mut first, GridOrigin::new(8.0, 8.0)).unwrap();
    view.draw(&layout, &mut second, GridOrigin::new(8.0, 8.0)).unwrap();
    assert_eq!(first.commands(), second.commands());
}

#[test]
fn test_playback_drives_grid_and_hit_test() {
    let json = r#"{
        "Board": {"Width": 3, "Height": 3, "Cells": [
            [{"X":0,"Y":0},{"X":0,"Y":1},{"X":0,"Y":2}],
            [{"X":1,"Y":0},{"X":1,"Y":1},{"X":1,"Y":2}],
            [{"X":2,"Y":0},{"X":2,"Y":1},{"X":2,"Y":2}]
        ]},
        "Frames": [
            {"BoardDelta": [], "Unit": {"Members": [{"X":1,"Y":0}], "Pivot": {"X":1,"Y":0}}},
            {"BoardDelta": [{"X":1,"Y":2,"Filled":true}], "Unit": {"Members": [{"X":0,"Y":0}], "Pivot": {"X":0,"Y":0}}}
        ]
    }"#;
    let record = GameRecord::from_json(json).unwrap();
    let config = RenderConfig::default();
    let layout = config.layout_for(record.board.width, record.board.height).unwrap();
    let mut grid = HexGrid::new(layout);
    let mut playback = Playback::new(record);

    playback.next_frame();
    let mut surface = RecordingSurface::new();
    let origin = GridOrigin::new(20.0, 20.0);
    grid.draw_board(&mut surface, origin, &playback.view(&config.style))
        .unwrap();

    let polygons = surface.polygons();
    assert_eq!(polygons.len(), 9);
    assert_eq!(polygons[draw_index(CellAddress::new(1, 2), 3)].fill, config.style.filled.fill);
    assert_eq!(polygons[draw_index(CellAddress::new(0, 0), 3)].texts.len(), 1);
    assert_eq!(polygons[draw_index(CellAddress::new(1, 0), 3)].fill, None);

    let target = CellAddress::new(1, 2);
    let center = grid.layout().cell_center(target, origin);
    let resolved = grid
        .resolve(&PixelPoint::default(), &PointerEvent::at(center.x, center.y))
        .unwrap();
    assert_eq!(resolved, target);
    assert!(playback.board().is_filled(resolved));
}
