//! # Notification Dispatcher
//!
//! Holds the parent's callback for each lifecycle event. Slots are fixed at
//! construction; an unset slot is silently skipped.
//!
//! ```rust
//! use core_playback::{NotificationKind, Notifications};
//!
//! let notifications = Notifications::builder()
//!     .on_play(|| println!("playing"))
//!     .on_time_changed(|time| println!("now at {time}s"))
//!     .build();
//!
//! assert!(notifications.has(NotificationKind::Play));
//! assert!(!notifications.has(NotificationKind::Ended));
//! ```

use core_runtime::events::PlayerEvent;
use std::fmt;

use crate::state::PlayerId;

type Callback = Box<dyn Fn() + Send + Sync>;
type ValueCallback = Box<dyn Fn(f64) + Send + Sync>;

/// The fixed set of events a controller reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Play,
    Pause,
    Muted,
    Unmuted,
    Restart,
    Ended,
    TimeChanged,
    VolumeChange,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 8] = [
        NotificationKind::Play,
        NotificationKind::Pause,
        NotificationKind::Muted,
        NotificationKind::Unmuted,
        NotificationKind::Restart,
        NotificationKind::Ended,
        NotificationKind::TimeChanged,
        NotificationKind::VolumeChange,
    ];

    /// Callback name as exposed to web hosts.
    pub fn name(&self) -> &'static str {
        match self {
            NotificationKind::Play => "onPlay",
            NotificationKind::Pause => "onPause",
            NotificationKind::Muted => "onMuted",
            NotificationKind::Unmuted => "onUnmuted",
            NotificationKind::Restart => "onRestart",
            NotificationKind::Ended => "onEnded",
            NotificationKind::TimeChanged => "onTimeChanged",
            NotificationKind::VolumeChange => "onVolumeChange",
        }
    }

    /// Whether the notification carries a numeric payload.
    pub fn has_payload(&self) -> bool {
        matches!(
            self,
            NotificationKind::TimeChanged | NotificationKind::VolumeChange
        )
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A notification ready for dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Notification {
    Play,
    Pause,
    Muted,
    Unmuted,
    Restart,
    Ended,
    TimeChanged(f64),
    VolumeChange(f64),
}

impl Notification {
    pub(crate) fn kind(&self) -> NotificationKind {
        match self {
            Notification::Play => NotificationKind::Play,
            Notification::Pause => NotificationKind::Pause,
            Notification::Muted => NotificationKind::Muted,
            Notification::Unmuted => NotificationKind::Unmuted,
            Notification::Restart => NotificationKind::Restart,
            Notification::Ended => NotificationKind::Ended,
            Notification::TimeChanged(_) => NotificationKind::TimeChanged,
            Notification::VolumeChange(_) => NotificationKind::VolumeChange,
        }
    }

    pub(crate) fn payload(&self) -> Option<f64> {
        match self {
            Notification::TimeChanged(value) | Notification::VolumeChange(value) => Some(*value),
            _ => None,
        }
    }

    pub(crate) fn into_event(self, id: &PlayerId) -> PlayerEvent {
        let player_id = id.to_string();
        match self {
            Notification::Play => PlayerEvent::Play { player_id },
            Notification::Pause => PlayerEvent::Pause { player_id },
            Notification::Muted => PlayerEvent::Muted { player_id },
            Notification::Unmuted => PlayerEvent::Unmuted { player_id },
            Notification::Restart => PlayerEvent::Restart { player_id },
            Notification::Ended => PlayerEvent::Ended { player_id },
            Notification::TimeChanged(time_secs) => PlayerEvent::TimeChanged {
                player_id,
                time_secs,
            },
            Notification::VolumeChange(volume) => PlayerEvent::VolumeChange { player_id, volume },
        }
    }
}

/// Callback slots supplied by the parent view.
#[derive(Default)]
pub struct Notifications {
    on_play: Option<Callback>,
    on_pause: Option<Callback>,
    on_muted: Option<Callback>,
    on_unmuted: Option<Callback>,
    on_restart: Option<Callback>,
    on_ended: Option<Callback>,
    on_time_changed: Option<ValueCallback>,
    on_volume_change: Option<ValueCallback>,
}

impl Notifications {
    /// No callbacks registered.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn builder() -> NotificationsBuilder {
        NotificationsBuilder::default()
    }

    /// Whether a callback is registered for `kind`.
    pub fn has(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Play => self.on_play.is_some(),
            NotificationKind::Pause => self.on_pause.is_some(),
            NotificationKind::Muted => self.on_muted.is_some(),
            NotificationKind::Unmuted => self.on_unmuted.is_some(),
            NotificationKind::Restart => self.on_restart.is_some(),
            NotificationKind::Ended => self.on_ended.is_some(),
            NotificationKind::TimeChanged => self.on_time_changed.is_some(),
            NotificationKind::VolumeChange => self.on_volume_change.is_some(),
        }
    }

    /// Invoke the slot for `notification`. Returns `false` if it was unset.
    pub(crate) fn dispatch(&self, notification: &Notification) -> bool {
        let slot = match notification {
            Notification::Play => self.on_play.as_ref(),
            Notification::Pause => self.on_pause.as_ref(),
            Notification::Muted => self.on_muted.as_ref(),
            Notification::Unmuted => self.on_unmuted.as_ref(),
            Notification::Restart => self.on_restart.as_ref(),
            Notification::Ended => self.on_ended.as_ref(),
            Notification::TimeChanged(value) => {
                return invoke_with(self.on_time_changed.as_ref(), *value)
            }
            Notification::VolumeChange(value) => {
                return invoke_with(self.on_volume_change.as_ref(), *value)
            }
        };

        match slot {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

fn invoke_with(slot: Option<&ValueCallback>, value: f64) -> bool {
    match slot {
        Some(callback) => {
            callback(value);
            true
        }
        None => false,
    }
}

impl fmt::Debug for Notifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<&str> = NotificationKind::ALL
            .iter()
            .filter(|kind| self.has(**kind))
            .map(|kind| kind.name())
            .collect();

        f.debug_struct("Notifications")
            .field("registered", &registered)
            .finish()
    }
}

/// Builder for [`Notifications`].
#[derive(Default)]
pub struct NotificationsBuilder {
    slots: Notifications,
}

impl NotificationsBuilder {
    pub fn on_play(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.slots.on_play = Some(Box::new(callback));
        self
    }

    pub fn on_pause(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.slots.on_pause = Some(Box::new(callback));
        self
    }

    pub fn on_muted(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.slots.on_muted = Some(Box::new(callback));
        self
    }

    pub fn on_unmuted(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.slots.on_unmuted = Some(Box::new(callback));
        self
    }

    pub fn on_restart(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.slots.on_restart = Some(Box::new(callback));
        self
    }

    pub fn on_ended(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.slots.on_ended = Some(Box::new(callback));
        self
    }

    /// Receives the position in seconds reported by the backend after a seek.
    pub fn on_time_changed(mut self, callback: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.slots.on_time_changed = Some(Box::new(callback));
        self
    }

    /// Receives the volume reported by the backend.
    pub fn on_volume_change(mut self, callback: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.slots.on_volume_change = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Notifications {
        self.slots
    }
}

impl fmt::Debug for NotificationsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationsBuilder")
            .field("slots", &self.slots)
            .finish()
    }
}
