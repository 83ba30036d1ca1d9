//! Peepy Application
//!
//! Headless shell around the board: configuration loading, event script
//! replay and the final state report.

mod app;
mod shortcuts;

pub use app::{
    load_script, parse_script, run_script, write_report, AppConfig, AppError, NodeReport, SessionReport,
};
pub use shortcuts::{GestureHint, HintRegistry};
