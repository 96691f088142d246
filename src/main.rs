#![forbid(unsafe_code)]

use std::process::ExitCode;
use std::time::Duration;

use error_iter::ErrorIter as _;
use log::error;

const GRID_WIDTH: usize = 64;
const GRID_HEIGHT: usize = 32;
const GENERATIONS: u64 = 200;
const FRAME_DELAY: Duration = Duration::from_millis(80);

fn main() -> ExitCode {
    env_logger::init();

    let config = conway_life::Config {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
        generations: GENERATIONS,
        frame_delay: FRAME_DELAY,
        ..Default::default()
    };

    let stdout = std::io::stdout();
    match conway_life::run(&config, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log_error("run", err);
            ExitCode::FAILURE
        }
    }
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
