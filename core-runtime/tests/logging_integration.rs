//! Integration tests for logging system

use bridge_traits::logging::{ConsoleLogger, LogLevel};
use core_runtime::logging::{init_logging, redact_if_sensitive, redact_url, LogFormat, LoggingConfig};
use std::sync::Arc;

#[test]
fn test_logging_initialization_only_once() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug)
        .with_logger_sink(Arc::new(ConsoleLogger::default()));

    assert!(init_logging(config.clone()).is_ok());
    // A global subscriber is already installed for this test binary.
    assert!(init_logging(config).is_err());
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(LogLevel::Warn)
        .with_spans(false)
        .with_target(false)
        .with_thread_info(true);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, LogLevel::Warn);
    assert!(!config.enable_spans);
    assert!(!config.display_target);
    assert!(config.display_thread_info);
    assert!(config.logger_sink.is_none());
}

#[test]
fn test_url_redaction() {
    let signed = "https://cdn.example.com/v/clip.mp4?Expires=1700&Signature=abc&Key-Pair-Id=K1";
    let redacted = redact_url(signed);

    assert!(redacted.starts_with("https://cdn.example.com/v/clip.mp4?"));
    assert!(redacted.contains("Expires=1700"));
    assert!(redacted.contains("Signature=[REDACTED]"));
    assert!(redacted.contains("Key-Pair-Id=[REDACTED]"));
    assert!(!redacted.contains("abc"));
}

#[test]
fn test_redaction_passthrough() {
    assert_eq!(redact_if_sensitive("url", "clip.mp4"), "clip.mp4");
    assert_eq!(redact_url("/assets/clip.mp4#t=30"), "/assets/clip.mp4#t=30");
}
