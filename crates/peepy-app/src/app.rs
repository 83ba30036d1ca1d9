//! Headless application: replays an event script against a board.

use clap::Parser;
use kurbo::Rect;
use peepy_core::{Board, BoardConfig, BoardEvent, ConfigError, Mode, OverlayElement};
use peepy_render::{layout_overlays, InkScene, OverlayNode};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to read script {path}: {source}")]
    ReadScript {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid script: {0}")]
    ParseScript(#[from] serde_json::Error),
    #[error("Failed to write report: {0}")]
    Report(serde_json::Error),
}

/// Replay a recorded event script against an annotation board
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "peepy", author, version, about, long_about = None)]
pub struct AppConfig {
    /// Path to the JSON event script
    pub script: PathBuf,

    /// Path to a board configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the gesture modifier hints before running
    #[arg(long)]
    pub hints: bool,
}

impl AppConfig {
    pub fn board_config(&self) -> Result<BoardConfig, AppError> {
        match &self.config {
            Some(path) => Ok(BoardConfig::load(path)?),
            None => Ok(BoardConfig::default()),
        }
    }
}

/// Read a JSON array of board events.
pub fn load_script(path: &Path) -> Result<Vec<BoardEvent>, AppError> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::ReadScript {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&json)
}

pub fn parse_script(json: &str) -> Result<Vec<BoardEvent>, AppError> {
    Ok(serde_json::from_str(json)?)
}

/// Placed node as reported to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct NodeReport {
    pub id: u64,
    pub rotation_degrees: f64,
    pub bounds: [f64; 4],
}

impl From<&OverlayNode> for NodeReport {
    fn from(node: &OverlayNode) -> Self {
        let Rect { x0, y0, x1, y1 } = node.bounds;
        Self {
            id: node.id.raw(),
            rotation_degrees: node.rotation_degrees,
            bounds: [x0, y0, x1, y1],
        }
    }
}

/// Final state after a script has run.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub mode: Mode,
    pub elements: Vec<OverlayElement>,
    pub nodes: Vec<NodeReport>,
    pub committed_strokes: usize,
    pub scene_strokes: usize,
    pub surface: [f64; 2],
}

/// Run `events` against a fresh board.
pub fn run_script(config: BoardConfig, events: Vec<BoardEvent>) -> SessionReport {
    let mut board = Board::new(config, InkScene::new());
    log::info!("Replaying {} events", events.len());
    for event in events {
        log::debug!("Event: {:?}", event);
        board.handle_event(event);
    }
    report(&board)
}

/// Pretty JSON for the report.
pub fn write_report(report: &SessionReport) -> Result<String, AppError> {
    serde_json::to_string_pretty(report).map_err(AppError::Report)
}

fn report(board: &Board<InkScene>) -> SessionReport {
    let nodes = layout_overlays(board.elements().iter());
    let size = board.surface().surface().size;
    SessionReport {
        mode: board.mode(),
        elements: board.list(),
        nodes: nodes.iter().map(NodeReport::from).collect(),
        committed_strokes: board.strokes().history().len(),
        scene_strokes: board.painter().strokes().len(),
        surface: [size.width, size.height],
    }
}
