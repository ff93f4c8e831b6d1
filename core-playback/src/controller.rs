//! # Playback Controller
//!
//! Owns the playback intent for one media resource and translates commands
//! into calls on a [`MediaBackend`].
//!
//! ## State
//!
//! ```text
//!            play() / restart() / Play signal
//!   ┌────────┐ ─────────────────────────────> ┌─────────┐
//!   │ Paused │                                │ Playing │
//!   └────────┘ <───────────────────────────── └─────────┘
//!                 pause() / Pause signal
//! ```
//!
//! `Ended` is reported but does not change the intent.
//!
//! ## Notifications
//!
//! Some notifications fire as soon as the command runs (`restart`, `mute`,
//! `unmute`, `forward`, `backward`). Others wait for the backend to confirm
//! through [`PlaybackController::handle_signal`] (`play`, `pause`, `ended`,
//! volume changes), so they also fire when the viewer uses native controls.
//!
//! ## Failures
//!
//! Commands never fail. Backend errors are logged at `warn` and the command
//! carries on; configuration problems are logged at `error` during
//! construction.

use bridge_traits::{
    error::Result as BridgeResult,
    media::{BackendSignal, MediaBackend, SeekUnit},
};
use core_runtime::{events::EventBus, logging::redact_url};
use std::{fmt, sync::Arc};
use tracing::{debug, error, info_span, instrument, trace, warn};

use crate::{
    config::PlayerOptions,
    error::PlaybackError,
    notifications::{Notification, Notifications},
    state::{clamp_volume, step_volume, PlaybackIntent, PlaybackState, PlayerId},
    view::PlayerView,
};

/// Imperative control surface for a single player.
///
/// # Example
///
/// ```rust
/// use bridge_headless::HeadlessMediaElement;
/// use core_playback::{Notifications, PlaybackController, PlayerOptions};
/// use std::sync::Arc;
///
/// let element = Arc::new(HeadlessMediaElement::new().with_duration(60.0));
/// let mut player = PlaybackController::new(
///     PlayerOptions::new("intro.mp4"),
///     element.clone(),
///     Notifications::builder().on_time_changed(|t| println!("at {t}")).build(),
/// );
///
/// player.play();
/// player.forward();
/// assert_eq!(player.current_time(), 5.0);
/// ```
pub struct PlaybackController {
    id: PlayerId,
    options: PlayerOptions,
    state: PlaybackState,
    backend: Arc<dyn MediaBackend>,
    notifications: Notifications,
    event_bus: Option<EventBus>,
}

impl PlaybackController {
    /// Create a controller and bind `backend` to the configured url.
    ///
    /// A missing or unplayable url is logged, not rejected; the controller is
    /// still usable and the backend decides what playing it means.
    pub fn new(
        options: PlayerOptions,
        backend: Arc<dyn MediaBackend>,
        notifications: Notifications,
    ) -> Self {
        let id = PlayerId::new();
        let span = info_span!("player", player_id = %id);
        let _enter = span.enter();

        if options.url.trim().is_empty() {
            error!("Url is required");
        }

        if !backend.can_play(&options.url) {
            error!(
                url = %redact_url(&options.url),
                "Unable to play media by the url specified"
            );
        }

        for issue in options.issues() {
            warn!(%issue, "Adjusted player option");
        }

        let state = PlaybackState::new(
            options.url.clone(),
            options.muted,
            options.initial_volume(),
        );

        report("load", backend.load(state.url()));
        report("set_volume", backend.set_volume(state.volume()));
        report("set_muted", backend.set_muted(state.is_muted()));

        let mut controller = Self {
            id,
            options,
            state,
            backend,
            notifications,
            event_bus: None,
        };
        controller.reconcile_volume();

        debug!(
            volume = controller.state.volume(),
            muted = controller.state.is_muted(),
            "Player created"
        );
        controller
    }

    /// Mirror every notification onto `bus` as a [`PlayerEvent`](core_runtime::events::PlayerEvent).
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    #[instrument(level = "debug", skip(self), fields(player_id = %self.id))]
    pub fn play(&mut self) {
        self.state.set_playing(true);
        report("play", self.backend.play());
    }

    #[instrument(level = "debug", skip(self), fields(player_id = %self.id))]
    pub fn pause(&mut self) {
        self.state.set_playing(false);
        report("pause", self.backend.pause());
    }

    /// Seek to the start and play.
    #[instrument(level = "debug", skip(self), fields(player_id = %self.id))]
    pub fn restart(&mut self) {
        report("seek_to", self.backend.seek_to(0.0, SeekUnit::Seconds));
        self.state.set_playing(true);
        report("play", self.backend.play());
        self.emit(Notification::Restart);
    }

    #[instrument(level = "debug", skip(self), fields(player_id = %self.id))]
    pub fn mute(&mut self) {
        self.state.set_muted(true);
        report("set_muted", self.backend.set_muted(true));
        self.emit(Notification::Muted);
    }

    #[instrument(level = "debug", skip(self), fields(player_id = %self.id))]
    pub fn unmute(&mut self) {
        self.state.set_muted(false);
        report("set_muted", self.backend.set_muted(false));
        self.emit(Notification::Unmuted);
    }

    /// Skip ahead by the configured change delta.
    #[instrument(level = "debug", skip(self), fields(player_id = %self.id))]
    pub fn forward(&mut self) {
        self.seek_by(self.options.effective_change_delta());
    }

    /// Skip back by the configured change delta.
    #[instrument(level = "debug", skip(self), fields(player_id = %self.id))]
    pub fn backward(&mut self) {
        self.seek_by(-self.options.effective_change_delta());
    }

    #[instrument(level = "debug", skip(self), fields(player_id = %self.id))]
    pub fn increase_volume(&mut self) {
        self.change_volume(self.options.effective_volume_delta());
    }

    #[instrument(level = "debug", skip(self), fields(player_id = %self.id))]
    pub fn decrease_volume(&mut self) {
        self.change_volume(-self.options.effective_volume_delta());
    }

    /// Deliver a native lifecycle signal raised by the backend.
    #[instrument(level = "debug", skip(self), fields(player_id = %self.id))]
    pub fn handle_signal(&mut self, signal: BackendSignal) {
        match signal {
            BackendSignal::Play => {
                self.state.set_playing(true);
                self.emit(Notification::Play);
            }
            BackendSignal::Pause => {
                self.state.set_playing(false);
                self.emit(Notification::Pause);
            }
            BackendSignal::Ended => self.emit(Notification::Ended),
            BackendSignal::VolumeChange => {
                let volume = self.reconcile_volume();
                self.emit(Notification::VolumeChange(volume));
            }
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn url(&self) -> &str {
        self.state.url()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn is_muted(&self) -> bool {
        self.state.is_muted()
    }

    /// Last volume reconciled from the backend.
    pub fn volume(&self) -> f64 {
        self.state.volume()
    }

    pub fn intent(&self) -> PlaybackIntent {
        self.state.intent()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    /// Actual playback position, read from the backend.
    pub fn current_time(&self) -> f64 {
        self.backend.current_time()
    }

    pub fn view(&self) -> PlayerView {
        PlayerView::new(&self.state, &self.options)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    // The backend clamps the position if it wants to.
    fn seek_by(&mut self, delta: f64) {
        let current = self.backend.current_time();
        report(
            "set_current_time",
            self.backend.set_current_time(current + delta),
        );

        let time = self.backend.current_time();
        trace!(from = current, delta, to = time, "Seeked by delta");
        self.emit(Notification::TimeChanged(time));
    }

    fn change_volume(&mut self, delta: f64) {
        let next = step_volume(self.backend.volume(), delta);
        self.state.set_volume(next);
        report("set_volume", self.backend.set_volume(next));
        self.reconcile_volume();
    }

    /// Store the backend's volume, clamped to `[0, 1]`, and return what was stored.
    fn reconcile_volume(&mut self) -> f64 {
        let reported = self.backend.volume();
        let volume = clamp_volume(reported);
        self.state.set_volume(volume);
        trace!(reported, volume, "Reconciled volume from backend");
        volume
    }

    fn emit(&self, notification: Notification) {
        let delivered = self.notifications.dispatch(&notification);
        debug!(
            player_id = %self.id,
            kind = %notification.kind(),
            payload = ?notification.payload(),
            delivered,
            "Notification dispatched"
        );

        if let Some(bus) = &self.event_bus {
            // No subscribers is not an error for the player.
            bus.emit(notification.into_event(&self.id)).ok();
        }
    }
}

fn report(operation: &'static str, result: BridgeResult<()>) {
    if let Err(err) = result {
        let err = PlaybackError::from(err);
        warn!(operation, error = %err, "Media backend call failed");
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        debug!(player_id = %self.id, "Releasing media backend");
        report("release", self.backend.release());
    }
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("options", &self.options)
            .field("notifications", &self.notifications)
            .field("event_bus", &self.event_bus)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_headless::HeadlessMediaElement;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn headless(duration: f64) -> Arc<HeadlessMediaElement> {
        Arc::new(HeadlessMediaElement::new().with_duration(duration))
    }

    #[test]
    fn construction_pushes_initial_props() {
        let element = headless(60.0);
        let options = PlayerOptions::builder("a.mp4").volume(0.4).muted(true).build();
        let player = PlaybackController::new(options, element.clone(), Notifications::none());

        assert_eq!(element.url().as_deref(), Some("a.mp4"));
        assert_eq!(element.volume(), 0.4);
        assert!(element.is_muted());
        assert_eq!(player.volume(), 0.4);
        assert_eq!(player.intent(), PlaybackIntent::Paused);
    }

    #[test]
    fn out_of_range_initial_volume_is_clamped() {
        let element = headless(60.0);
        let options = PlayerOptions::builder("a.mp4").volume(4.0).build();
        let player = PlaybackController::new(options, element.clone(), Notifications::none());

        assert_eq!(player.volume(), 1.0);
        assert_eq!(element.volume(), 1.0);
    }

    #[test]
    fn play_waits_for_backend_confirmation() {
        let plays = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&plays);
        let element = headless(60.0);
        let mut player = PlaybackController::new(
            PlayerOptions::new("a.mp4"),
            element.clone(),
            Notifications::builder()
                .on_play(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                })
                .build(),
        );

        player.play();
        assert!(player.is_playing());
        assert_eq!(plays.load(Ordering::SeqCst), 0);

        for signal in element.drain_signals() {
            player.handle_signal(signal);
        }
        assert_eq!(plays.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn ended_keeps_intent() {
        let element = headless(10.0);
        let mut player =
            PlaybackController::new(PlayerOptions::new("a.mp4"), element, Notifications::none());

        player.play();
        player.handle_signal(BackendSignal::Ended);
        assert_eq!(player.intent(), PlaybackIntent::Playing);
    }

    #[test]
    fn drop_releases_backend() {
        let element = headless(10.0);
        let player = PlaybackController::new(
            PlayerOptions::new("a.mp4"),
            element.clone(),
            Notifications::none(),
        );
        assert!(!element.is_released());

        drop(player);
        assert!(element.is_released());
    }
}
