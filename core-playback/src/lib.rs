//! # Playback Control Module
//!
//! Playback-control state machine for a single media resource.
//!
//! ## Overview
//!
//! This module handles:
//! - Player options with defaults, correction of out-of-range values and
//!   strict opt-in validation
//! - Playback intent (playing/paused, muted, volume) kept separate from the
//!   backend's actual state
//! - Imperative commands: play, pause, restart, mute, seek and volume by delta
//! - Lifecycle notifications to the parent view, optionally mirrored onto an
//!   [`EventBus`](core_runtime::events::EventBus)
//! - A serializable view snapshot for the host shell to render
//!
//! Rendering and decoding live behind [`MediaBackend`](bridge_traits::MediaBackend).

pub mod config;
pub mod controller;
pub mod error;
pub mod notifications;
pub mod state;
pub mod view;

pub use config::{PlayerOptions, PlayerOptionsBuilder};
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use notifications::{NotificationKind, Notifications, NotificationsBuilder};
pub use state::{PlaybackIntent, PlaybackState, PlayerId};
pub use view::{FileConfig, PlayerView};
