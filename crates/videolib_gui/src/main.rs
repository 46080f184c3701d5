//! Desktop front-end for the video rental inventory.
//!
//! # Responsibility
//! - Resolve configuration and start logging.
//! - Open the inventory window; the database is opened by the controller
//!   thread it spawns.

mod app;
mod bridge;
mod config;
mod state;
mod widgets;
mod worker;

use app::VideoLibraryApp;
use config::AppConfig;
use log::{error, info};
use std::process::ExitCode;
use videolib_core::init_logging;

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("videolib: {err}");
            return ExitCode::FAILURE;
        }
    };

    // The inventory stays usable without a log file.
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("videolib: logging disabled: {err}");
    }

    info!(
        "event=app_start module=gui status=ok version={} db_path={}",
        videolib_core::core_version(),
        config.db_path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Video Library")
            .with_inner_size([1010.0, 530.0])
            .with_min_inner_size([800.0, 400.0]),
        ..Default::default()
    };

    let db_path = config.db_path;
    let result = eframe::run_native(
        "Video Library",
        options,
        Box::new(|cc| Ok(Box::new(VideoLibraryApp::new(cc, db_path)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=gui status=error error={err}");
            eprintln!("videolib: {err}");
            ExitCode::FAILURE
        }
    }
}
