//! Logging system demonstration
//!
//! Shows the output formats and the URL redaction helpers used by the player.
//!
//! Run with:
//! ```bash
//! # Pretty format (default in debug)
//! cargo run --example logging_demo
//!
//! # JSON format
//! cargo run --example logging_demo -- json
//!
//! # Compact format with a custom filter
//! cargo run --example logging_demo -- compact "logging_demo=trace"
//! ```

use bridge_traits::logging::LogLevel;
use core_runtime::logging::{init_logging, redact_url, LogFormat, LoggingConfig};
use std::env;
use tracing::{debug, error, info, span, trace, warn, Level};

fn main() {
    let args: Vec<String> = env::args().collect();

    let format = match args.get(1).map(String::as_str) {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        Some(_) => LogFormat::Pretty,
        None => LogFormat::default(),
    };

    let mut config = LoggingConfig::default()
        .with_format(format)
        .with_level(LogLevel::Trace)
        .with_spans(true)
        .with_target(true);

    if let Some(filter) = args.get(2).cloned() {
        config = config.with_filter(filter);
    } else {
        config = config.with_filter("logging_demo=trace");
    }

    init_logging(config).expect("Failed to initialize logging");

    info!(format = ?format, "Logging initialized");

    demo_log_levels();
    demo_player_session();

    info!("=== Demo Complete ===");
}

fn demo_log_levels() {
    let span = span!(Level::INFO, "log_levels");
    let _enter = span.enter();

    trace!("This is a TRACE level log");
    debug!("This is a DEBUG level log");
    info!("This is an INFO level log");
    warn!("This is a WARN level log");
    error!("This is an ERROR level log");
}

fn demo_player_session() {
    let url = "https://cdn.example.com/videos/intro.mp4?token=s3cr3t&quality=hd#t=5";
    let span = span!(Level::INFO, "player", player_id = "demo");
    let _enter = span.enter();

    info!(url = %redact_url(url), "Player created");
    debug!(from = 10.0, to = 15.0, "Seek by delta");
    warn!(error = "volume 1.2 is outside [0, 1]", "Backend rejected volume");
}
