//! Command implementations.

use anyhow::Context;
use hexgrid_core::{
    resolve_cell_with_origin, CellAddress, GameRecord, HexGrid, PixelPoint, Playback, PointerEvent,
    RenderConfig, SvgSurface,
};
use serde::Serialize;
use tracing::info;

/// Margin added around the grid in rendered images
const IMAGE_MARGIN: f64 = 10.0;

/// Result of a `locate` command, printed as JSON.
#[derive(Debug, Serialize)]
struct LocateReport {
    column: i32,
    row: i32,
    on_board: bool,
    filled: bool,
}

pub fn load_config(path: Option<&str>) -> anyhow::Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
    let config = RenderConfig::from_json(&text).with_context(|| format!("parsing config {}", path))?;
    info!("Loaded render config from {}", path);
    Ok(config)
}

fn load_game(path: &str) -> anyhow::Result<GameRecord> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading game {}", path))?;
    let record = GameRecord::from_json(&text).with_context(|| format!("parsing game {}", path))?;
    info!(
        "Loaded {}x{} board with {} frames",
        record.board.width,
        record.board.height,
        record.frames.len()
    );
    Ok(record)
}

fn grid_for(config: &RenderConfig, record: &GameRecord) -> anyhow::Result<HexGrid> {
    let layout = config.layout_for(record.board.width, record.board.height)?;
    Ok(HexGrid::new(layout))
}

/// Draw one frame of a recorded game to an SVG file.
pub fn render(config: &RenderConfig, game: &str, frame: usize, output: &str) -> anyhow::Result<()> {
    let record = load_game(game)?;
    let mut grid = grid_for(config, &record)?;
    let (columns, rows) = (record.board.width, record.board.height);

    let mut playback = Playback::new(record);
    let index = playback.seek(frame);
    if index != frame {
        info!("Frame {} out of range, drawing frame {}", frame, index);
    }

    let (width, height) = grid.layout().grid_extent(columns, rows);
    let origin = config.origin();
    let mut surface = SvgSurface::new(
        width + origin.x + IMAGE_MARGIN,
        height + origin.y + IMAGE_MARGIN,
    )
    .with_background("#fff");

    grid.draw_board(&mut surface, origin, &playback.view(&config.style))?;

    std::fs::write(output, surface.finish()).with_context(|| format!("writing {}", output))?;
    info!("Wrote frame {} to {}", index, output);
    Ok(())
}

/// Resolve page coordinates against a grid sized for the recorded board.
pub fn locate(
    config: &RenderConfig,
    game: &str,
    page_x: f64,
    page_y: f64,
    offset_x: f64,
    offset_y: f64,
) -> anyhow::Result<()> {
    let record = load_game(game)?;
    let grid = grid_for(config, &record)?;
    let playback = Playback::new(record);

    // Same origin a render would use
    let placement = PixelPoint::new(offset_x, offset_y);
    let address: CellAddress = resolve_cell_with_origin(
        grid.layout(),
        config.origin(),
        &placement,
        &PointerEvent::at(page_x, page_y),
    )?;
    let board = playback.board();

    let report = LocateReport {
        column: address.column,
        row: address.row,
        on_board: board.contains(address),
        filled: board.is_filled(address),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
