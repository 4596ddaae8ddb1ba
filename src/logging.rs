//! `env_logger` setup for the sketchpad binary
//!
//! Canvas loads and saves log at `info`, sketch replay at `debug`, and
//! individual tool strokes at `trace`.

use std::sync::Once;

/// Filter used when neither the config nor RUST_LOG names one
pub const DEFAULT_FILTER: &str = "warn,sketchpad=info";

/// Where the log filter comes from and whether output is colored
///
/// `env_filter` is normally `PaintConfig::log_filter`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Install the logger on first call; later calls do nothing
///
/// The config filter wins over RUST_LOG, which wins over [`DEFAULT_FILTER`].
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // A test harness or embedding app may own the logger already
        if builder.try_init().is_ok() {
            log::debug!("sketchpad {} logging with filter \"{}\"", crate::VERSION, filter);
        }
    });
}
