//! Workspace facade crate.
//!
//! Re-exports the public surface of the workspace crates so host shells can
//! depend on `video-player-workspace` alone. The `headless` feature (default)
//! additionally exposes the in-memory media element used for tests and demos.

pub use bridge_traits::{BackendSignal, BridgeError, MediaBackend, SeekUnit};
pub use core_playback::{
    NotificationKind, Notifications, NotificationsBuilder, PlaybackController, PlaybackError,
    PlaybackIntent, PlaybackState, PlayerId, PlayerOptions, PlayerOptionsBuilder, PlayerView,
};
pub use core_runtime::events::{EventBus, EventStream, PlayerEvent};
pub use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};

#[cfg(feature = "headless")]
pub use bridge_headless::HeadlessMediaElement;
