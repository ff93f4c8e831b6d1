//! # Headless Bridge Implementations
//!
//! In-memory implementations of the bridge traits for hosts without a real
//! media engine: tests, CLI demos, and server-side rendering of the player.
//!
//! ## Overview
//!
//! - `MediaBackend` using [`HeadlessMediaElement`], a state-only media element
//!   with HTML media element semantics. Native signals are queued and must be
//!   pumped into the controller by the caller, the way a browser shell would
//!   forward DOM events.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_headless::HeadlessMediaElement;
//! use std::sync::Arc;
//!
//! let element = Arc::new(HeadlessMediaElement::new().with_duration(120.0));
//! // hand `element.clone()` to the controller, then:
//! for signal in element.drain_signals() {
//!     controller.handle_signal(signal);
//! }
//! ```

mod media;

pub use media::HeadlessMediaElement;
