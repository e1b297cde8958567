//! Recorded games and frame-by-frame playback.
//!
//! A recorded game is the initial board plus one frame per simulation step.
//! Each frame carries only the cells that changed. Pacing (how often to call
//! [`Playback::next_frame`]) is up to the host.

use crate::board::{BoardCell, BoardSnapshot, BoardView, UnitOverlay};
use crate::error::HexGridError;
use crate::visual::VisualStyle;
use serde::{Deserialize, Deserializer, Serialize};

fn nullable_cells<'de, D>(deserializer: D) -> Result<Vec<BoardCell>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<BoardCell>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One simulation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Frame {
    /// Cells that changed since the previous frame
    #[serde(default, deserialize_with = "nullable_cells")]
    pub board_delta: Vec<BoardCell>,
    #[serde(default)]
    pub unit: UnitOverlay,
    /// Name of the player that produced this frame
    #[serde(default, rename = "AI")]
    pub ai: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
}

/// The payload returned when a new game is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameRecord {
    pub board: BoardSnapshot,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl GameRecord {
    pub fn from_json(json: &str) -> Result<Self, HexGridError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Cursor over a recorded game.
#[derive(Debug, Clone)]
pub struct Playback {
    initial: BoardSnapshot,
    frames: Vec<Frame>,
    board: BoardSnapshot,
    index: usize,
}

impl Playback {
    /// Start at the first frame, with its delta applied.
    pub fn new(record: GameRecord) -> Self {
        let GameRecord { board, frames } = record;
        let mut playback = Self {
            initial: board.clone(),
            frames,
            board,
            index: 0,
        };
        playback.seek(0);
        playback
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frames.get(self.index)
    }

    /// Board with every delta up to and including the current frame
    pub fn board(&self) -> &BoardSnapshot {
        &self.board
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.frames.len()
    }

    /// Jump to a frame, clamped to the last one. The board is rebuilt from
    /// the initial snapshot, so seeking to the same index twice is a no-op.
    pub fn seek(&mut self, index: usize) -> usize {
        self.index = index.min(self.frames.len().saturating_sub(1));
        self.board = self.initial.clone();
        for frame in self.frames.iter().take(self.index + 1) {
            self.board.apply_deltas(&frame.board_delta);
        }
        self.index
    }

    /// Move to `index`, advancing incrementally when it is the next frame
    /// and rebuilding through [`Playback::seek`] otherwise.
    pub fn advance_to(&mut self, index: usize) -> usize {
        if index == self.index + 1 {
            self.next_frame()
        } else if index == self.index {
            self.index
        } else {
            self.seek(index)
        }
    }

    /// Advance one frame. Stays on the last frame once reached.
    pub fn next_frame(&mut self) -> usize {
        if self.is_at_end() {
            return self.index;
        }
        self.index += 1;
        if let Some(frame) = self.frames.get(self.index) {
            self.board.apply_deltas(&frame.board_delta);
        }
        self.index
    }

    /// View of the current frame, unit overlay included.
    pub fn view<'a>(&'a self, style: &'a VisualStyle) -> BoardView<'a> {
        let view = BoardView::new(&self.board, style);
        match self.frame() {
            Some(frame) => view.with_unit(&frame.unit),
            None => view,
        }
    }
}
