//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the video player core:
//! - Logging and tracing infrastructure
//! - Player event bus
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the playback core depends
//! on. It establishes the logging conventions and the event broadcasting
//! mechanism that lets several observers follow a player besides its own
//! callback slots.

pub mod error;
pub mod events;
pub mod logging;

pub use error::{Error, Result};
