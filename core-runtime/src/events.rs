//! # Event Bus System
//!
//! Broadcasts player notifications to any number of observers using
//! `tokio::sync::broadcast`.
//!
//! ## Overview
//!
//! A controller always dispatches notifications to its own callback slots.
//! When an [`EventBus`] is attached, every notification is also mirrored onto
//! the bus as a [`PlayerEvent`], so that observers other than the parent view
//! (analytics, a second view, tests) can follow one or several players.
//!
//! ```text
//! ┌────────────┐    emit     ┌───────────┐   subscribe   ┌────────────┐
//! │ Player A   ├────────────>│           ├──────────────>│ Subscriber │
//! └────────────┘             │ EventBus  │               └────────────┘
//! ┌────────────┐    emit     │ (broadcast│   subscribe   ┌────────────┐
//! │ Player B   ├────────────>│  channel) ├──────────────>│ Subscriber │
//! └────────────┘             └───────────┘               └────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::events::{EventBus, PlayerEvent};
//!
//! let bus = EventBus::new(16);
//! let mut receiver = bus.subscribe();
//!
//! bus.emit(PlayerEvent::Muted { player_id: "a".to_string() }).ok();
//! assert_eq!(receiver.try_recv().unwrap().player_id(), "a");
//! ```
//!
//! ## Error Handling
//!
//! - **`RecvError::Lagged(n)`**: the subscriber missed `n` events; it can keep
//!   receiving.
//! - **`RecvError::Closed`**: every sender has been dropped.
//!
//! Emitting with no subscribers returns an error; publishers that do not care
//! about delivery ignore it.

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

// Re-export commonly used types
pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the event bus channel.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

// ============================================================================
// Player Events
// ============================================================================

/// Notification emitted by a playback controller.
///
/// Variants mirror the controller's callback slots one-to-one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event")]
pub enum PlayerEvent {
    /// The backend confirmed playback started.
    Play { player_id: String },
    /// The backend confirmed playback paused.
    Pause { player_id: String },
    /// Output muted.
    Muted { player_id: String },
    /// Output unmuted.
    Unmuted { player_id: String },
    /// Playback restarted from the beginning.
    Restart { player_id: String },
    /// Playback reached the end of the media.
    Ended { player_id: String },
    /// Position changed by a forward/backward command.
    TimeChanged {
        player_id: String,
        /// Position reported by the backend after the change, in seconds.
        time_secs: f64,
    },
    /// The backend's volume changed.
    VolumeChange {
        player_id: String,
        /// Volume reported by the backend, `0.0..=1.0`.
        volume: f64,
    },
}

impl PlayerEvent {
    /// Identifier of the player that emitted the event.
    pub fn player_id(&self) -> &str {
        match self {
            PlayerEvent::Play { player_id }
            | PlayerEvent::Pause { player_id }
            | PlayerEvent::Muted { player_id }
            | PlayerEvent::Unmuted { player_id }
            | PlayerEvent::Restart { player_id }
            | PlayerEvent::Ended { player_id }
            | PlayerEvent::TimeChanged { player_id, .. }
            | PlayerEvent::VolumeChange { player_id, .. } => player_id,
        }
    }

    /// Returns a human-readable description of the event.
    pub fn description(&self) -> &str {
        match self {
            PlayerEvent::Play { .. } => "Playback started",
            PlayerEvent::Pause { .. } => "Playback paused",
            PlayerEvent::Muted { .. } => "Player muted",
            PlayerEvent::Unmuted { .. } => "Player unmuted",
            PlayerEvent::Restart { .. } => "Playback restarted",
            PlayerEvent::Ended { .. } => "Playback ended",
            PlayerEvent::TimeChanged { .. } => "Current time changed",
            PlayerEvent::VolumeChange { .. } => "Volume changed",
        }
    }

    /// Returns the severity level of the event.
    pub fn severity(&self) -> EventSeverity {
        match self {
            PlayerEvent::Play { .. }
            | PlayerEvent::Pause { .. }
            | PlayerEvent::Restart { .. }
            | PlayerEvent::Ended { .. } => EventSeverity::Info,
            _ => EventSeverity::Debug,
        }
    }
}

/// Event severity levels for filtering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventSeverity {
    /// Debug-level events (verbose)
    Debug,
    /// Informational events
    Info,
}

// ============================================================================
// Event Bus
// ============================================================================

/// Central event bus for publishing and subscribing to player events.
///
/// Cloning the bus yields another publisher on the same channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<PlayerEvent>,
}

impl EventBus {
    /// Creates a new event bus with the specified buffer size.
    ///
    /// Subscribers that fall behind by more than `capacity` events receive
    /// `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    ///
    /// Returns the number of subscribers that received the event, or an error
    /// if there are no active subscribers.
    pub fn emit(&self, event: PlayerEvent) -> Result<usize, SendError<PlayerEvent>> {
        self.sender.send(event)
    }

    /// Creates a new subscriber. Past events are not replayed.
    pub fn subscribe(&self) -> Receiver<PlayerEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

// ============================================================================
// Event Stream Wrapper
// ============================================================================

/// Type alias for event filter functions.
type EventFilter = Box<dyn Fn(&PlayerEvent) -> bool + Send + Sync>;

/// A wrapper around `broadcast::Receiver` with optional filtering.
///
/// # Example
///
/// ```rust
/// use core_runtime::events::{EventBus, EventStream};
///
/// let bus = EventBus::default();
/// let only_player_a = EventStream::new(bus.subscribe())
///     .filter(|event| event.player_id() == "a");
/// ```
pub struct EventStream {
    receiver: Receiver<PlayerEvent>,
    filter: Option<EventFilter>,
}

impl EventStream {
    /// Creates a new event stream from a receiver.
    pub fn new(receiver: Receiver<PlayerEvent>) -> Self {
        Self {
            receiver,
            filter: None,
        }
    }

    /// Only events matching `predicate` will be returned.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&PlayerEvent) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(predicate));
        self
    }

    fn matches(&self, event: &PlayerEvent) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(event))
    }

    /// Receives the next event that passes the filter.
    ///
    /// # Errors
    ///
    /// Returns `RecvError::Lagged(n)` if the subscriber fell behind by `n` events.
    /// Returns `RecvError::Closed` if all senders have been dropped.
    pub async fn recv(&mut self) -> Result<PlayerEvent, RecvError> {
        loop {
            let event = self.receiver.recv().await?;
            if self.matches(&event) {
                return Ok(event);
            }
        }
    }

    /// Attempts to receive an event without waiting.
    ///
    /// Returns `None` if no matching events are currently available.
    pub fn try_recv(&mut self) -> Option<Result<PlayerEvent, RecvError>> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.matches(&event) {
                        return Some(Ok(event));
                    }
                }
                Err(broadcast::error::TryRecvError::Empty) => return None,
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    return Some(Err(RecvError::Lagged(n)))
                }
                Err(broadcast::error::TryRecvError::Closed) => return Some(Err(RecvError::Closed)),
            }
        }
    }
}

impl fmt::Debug for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream")
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn muted(id: &str) -> PlayerEvent {
        PlayerEvent::Muted {
            player_id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_event_bus_creation() {
        let bus = EventBus::new(10);
        assert_eq!(bus.subscriber_count(), 0);

        let _sub1 = bus.subscribe();
        let _sub2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);
    }

    #[tokio::test]
    async fn test_event_emission_no_subscribers() {
        let bus = EventBus::new(10);
        assert!(bus.emit(muted("a")).is_err());
    }

    #[tokio::test]
    async fn test_multiple_subscribers_receive_same_event() {
        let bus = EventBus::new(10);
        let mut sub1 = bus.subscribe();
        let mut sub2 = bus.subscribe();

        let event = PlayerEvent::TimeChanged {
            player_id: "a".to_string(),
            time_secs: 15.0,
        };
        assert_eq!(bus.emit(event.clone()).unwrap(), 2);

        assert_eq!(sub1.recv().await.unwrap(), event);
        assert_eq!(sub2.recv().await.unwrap(), event);
    }

    #[tokio::test]
    async fn test_event_stream_with_filter() {
        let bus = EventBus::new(10);
        let mut stream = EventStream::new(bus.subscribe()).filter(|e| e.player_id() == "b");

        bus.emit(muted("a")).unwrap();
        bus.emit(muted("b")).unwrap();

        let received = stream.recv().await.unwrap();
        assert_eq!(received, muted("b"));
        assert!(stream.try_recv().is_none());
    }

    #[tokio::test]
    async fn test_lagged_subscriber() {
        let bus = EventBus::new(2);
        let mut stream = EventStream::new(bus.subscribe());

        for _ in 0..5 {
            bus.emit(muted("a")).unwrap();
        }

        match stream.try_recv() {
            Some(Err(RecvError::Lagged(n))) => assert_eq!(n, 3),
            other => panic!("expected lag, got {:?}", other),
        }
    }

    #[test]
    fn test_event_severity_and_description() {
        let ended = PlayerEvent::Ended {
            player_id: "a".to_string(),
        };
        assert_eq!(ended.severity(), EventSeverity::Info);
        assert_eq!(ended.description(), "Playback ended");

        let volume = PlayerEvent::VolumeChange {
            player_id: "a".to_string(),
            volume: 0.4,
        };
        assert_eq!(volume.severity(), EventSeverity::Debug);
        assert_eq!(volume.player_id(), "a");
    }

    #[test]
    fn test_event_serialization() {
        let event = PlayerEvent::VolumeChange {
            player_id: "a".to_string(),
            volume: 0.5,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "VolumeChange");
        assert_eq!(json["volume"], 0.5);

        let back: PlayerEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
