//! Main application entry point.

use clap::Parser;
use peepy_app::{load_script, run_script, write_report, AppConfig, AppError, HintRegistry};

fn run(config: AppConfig) -> Result<(), AppError> {
    if config.hints {
        HintRegistry::print_all();
    }

    let board_config = config.board_config()?;
    let events = load_script(&config.script)?;
    let report = run_script(board_config, events);

    println!("{}", write_report(&report)?);
    Ok(())
}

fn main() {
    let config = AppConfig::parse();

    env_logger::init();
    log::info!("Starting Peepy");

    if let Err(e) = run(config) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
