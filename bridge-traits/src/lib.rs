//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host shell.
//!
//! ## Overview
//!
//! This crate defines the contract between the playback core and the
//! platform-specific media element it drives. Each trait represents a
//! capability that the core requires but that is implemented differently per
//! host (browser shell, native widget, headless test double).
//!
//! ## Traits
//!
//! ### Media
//! - [`MediaBackend`](media::MediaBackend) - Imperative control and live state of one media resource
//! - [`BackendSignal`](media::BackendSignal) - Native lifecycle signals forwarded by the shell
//!
//! ### Utilities
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. The
//! playback core never propagates these to its callers; it logs them and keeps
//! going, since the backend owns any real playback failure.
//!
//! ## Thread Safety
//!
//! On native targets every bridge trait requires `Send + Sync` so a handle can
//! be shared between the shell and the controller through `Arc`. On `wasm32`
//! the bounds are dropped (see [`platform`]).
//!
//! ## Examples
//!
//! ### Implementing MediaBackend
//!
//! ```ignore
//! use bridge_traits::error::Result;
//! use bridge_traits::media::{MediaBackend, SeekUnit};
//!
//! pub struct VideoElementBackend {
//!     element: web_sys::HtmlVideoElement,
//! }
//!
//! impl MediaBackend for VideoElementBackend {
//!     fn can_play(&self, url: &str) -> bool {
//!         url.ends_with(".mp4") || url.ends_with(".webm")
//!     }
//!
//!     fn current_time(&self) -> f64 {
//!         self.element.current_time()
//!     }
//!
//!     // ...
//! }
//! ```

pub mod error;
pub mod logging;
pub mod media;
pub mod platform;

pub use error::BridgeError;

// Re-export commonly used types
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use media::{BackendSignal, MediaBackend, SeekUnit};
