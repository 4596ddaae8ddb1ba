//! Sketchpad batch driver
//!
//! Replays a RON sketch against a fresh paint session:
//!
//! ```text
//! sketchpad <sketch.ron> [config.ron]
//! ```

use std::process::ExitCode;
use sketchpad::config::{load_config, PaintConfig};
use sketchpad::logging::{init_logging, LoggingConfig};
use sketchpad::paint::{load_sketch, PaintSession};
use sketchpad::VERSION;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(sketch_path) = args.first() else {
        eprintln!("Sketchpad v{}", VERSION);
        eprintln!("usage: sketchpad <sketch.ron> [config.ron]");
        return ExitCode::from(2);
    };

    // Config first so its log filter applies; report config errors after init
    let config = match args.get(1) {
        Some(path) => load_config(path).map_err(|e| (path.clone(), e)),
        None => Ok(PaintConfig::default()),
    };

    init_logging(LoggingConfig {
        env_filter: config.as_ref().ok().and_then(|c| c.log_filter.clone()),
        ..Default::default()
    });

    let config = match config {
        Ok(config) => config,
        Err((path, e)) => {
            log::error!("failed to load config {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let sketch = match load_sketch(sketch_path) {
        Ok(sketch) => sketch,
        Err(e) => {
            log::error!("failed to load sketch {}: {}", sketch_path, e);
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "=== Sketchpad v{} === {}x{} canvas, {} steps",
        VERSION,
        config.width,
        config.height,
        sketch.steps.len()
    );

    let mut session = PaintSession::new(config);
    if let Err(e) = session.replay(&sketch) {
        log::error!("sketch aborted: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
