//! Headless media element

use bridge_traits::{
    error::{BridgeError, Result},
    media::{BackendSignal, MediaBackend, SeekUnit},
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// File extensions the headless element accepts as playable.
const PLAYABLE_EXTENSIONS: &[&str] = &[
    "mp4", "m4v", "mov", "webm", "ogv", "ogg", "oga", "m4a", "mp3", "wav", "flac", "opus",
];

#[derive(Debug)]
struct ElementState {
    url: Option<String>,
    paused: bool,
    current_time: f64,
    duration: Option<f64>,
    volume: f64,
    muted: bool,
    released: bool,
    pending: VecDeque<BackendSignal>,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            url: None,
            paused: true,
            current_time: 0.0,
            duration: None,
            volume: 1.0,
            muted: false,
            released: false,
            pending: VecDeque::new(),
        }
    }
}

impl ElementState {
    fn ensure_attached(&self) -> Result<()> {
        if self.released {
            return Err(BridgeError::NotAvailable(
                "media element has been released".to_string(),
            ));
        }
        Ok(())
    }

    fn clamp_position(&self, seconds: f64) -> f64 {
        let upper = self.duration.unwrap_or(f64::INFINITY);
        seconds.clamp(0.0, upper)
    }
}

/// In-memory media element.
///
/// Mirrors the observable behaviour of an HTML media element:
/// - positions are clamped to `[0, duration]` by the element itself
/// - volume outside `[0, 1]` is rejected
/// - `play`/`pause` only raise a signal when the paused flag actually flips
/// - volume and muted changes raise [`BackendSignal::VolumeChange`]
/// - [`advance`](Self::advance) past the duration pauses and raises
///   [`BackendSignal::Ended`]
#[derive(Debug, Default)]
pub struct HeadlessMediaElement {
    state: Mutex<ElementState>,
}

impl HeadlessMediaElement {
    /// Create an element with unknown duration, volume 1 and nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media duration in seconds.
    pub fn with_duration(self, seconds: f64) -> Self {
        self.state.lock().duration = Some(seconds.max(0.0));
        self
    }

    /// Currently loaded resource, if any.
    pub fn url(&self) -> Option<String> {
        self.state.lock().url.clone()
    }

    pub fn is_paused(&self) -> bool {
        self.state.lock().paused
    }

    pub fn is_muted(&self) -> bool {
        self.state.lock().muted
    }

    pub fn is_released(&self) -> bool {
        self.state.lock().released
    }

    /// Simulate playback progress by `seconds`.
    ///
    /// Does nothing while paused. Reaching the duration pauses the element and
    /// queues an `Ended` signal.
    pub fn advance(&self, seconds: f64) {
        let mut state = self.state.lock();
        if state.paused || state.released {
            return;
        }

        let target = state.current_time + seconds.max(0.0);
        match state.duration {
            Some(duration) if target >= duration => {
                state.current_time = duration;
                state.paused = true;
                state.pending.push_back(BackendSignal::Ended);
                debug!(duration, "Headless element reached end of media");
            }
            _ => state.current_time = target,
        }
    }

    /// Pop the oldest queued native signal.
    pub fn next_signal(&self) -> Option<BackendSignal> {
        self.state.lock().pending.pop_front()
    }

    /// Take every queued native signal, oldest first.
    pub fn drain_signals(&self) -> Vec<BackendSignal> {
        self.state.lock().pending.drain(..).collect()
    }
}

impl MediaBackend for HeadlessMediaElement {
    fn can_play(&self, url: &str) -> bool {
        let path = url
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let Some((_, extension)) = path.rsplit_once('.') else {
            return false;
        };

        let extension = extension.to_ascii_lowercase();
        PLAYABLE_EXTENSIONS.contains(&extension.as_str())
    }

    fn load(&self, url: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.ensure_attached()?;

        state.url = Some(url.to_string());
        state.current_time = 0.0;
        state.paused = true;
        debug!(url, "Headless element loaded resource");
        Ok(())
    }

    fn play(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.ensure_attached()?;

        if !state.paused {
            return Ok(());
        }

        if matches!(state.duration, Some(duration) if state.current_time >= duration) {
            state.current_time = 0.0;
        }

        state.paused = false;
        state.pending.push_back(BackendSignal::Play);
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.ensure_attached()?;

        if state.paused {
            return Ok(());
        }

        state.paused = true;
        state.pending.push_back(BackendSignal::Pause);
        Ok(())
    }

    fn seek_to(&self, position: f64, unit: SeekUnit) -> Result<()> {
        let seconds = match unit {
            SeekUnit::Seconds => position,
            SeekUnit::Fraction => {
                let duration = self.duration().ok_or_else(|| {
                    BridgeError::Unsupported(
                        "fractional seek requires a known duration".to_string(),
                    )
                })?;
                position.clamp(0.0, 1.0) * duration
            }
        };

        self.set_current_time(seconds)
    }

    fn current_time(&self) -> f64 {
        let time = self.state.lock().current_time;
        trace!(time, "Read current time");
        time
    }

    fn set_current_time(&self, seconds: f64) -> Result<()> {
        if !seconds.is_finite() {
            return Err(BridgeError::OperationFailed(format!(
                "position must be finite, got {}",
                seconds
            )));
        }

        let mut state = self.state.lock();
        state.ensure_attached()?;
        state.current_time = state.clamp_position(seconds);
        Ok(())
    }

    fn volume(&self) -> f64 {
        self.state.lock().volume
    }

    fn set_volume(&self, volume: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(BridgeError::OperationFailed(format!(
                "volume {} is outside [0, 1]",
                volume
            )));
        }

        let mut state = self.state.lock();
        state.ensure_attached()?;

        if state.volume != volume {
            state.volume = volume;
            state.pending.push_back(BackendSignal::VolumeChange);
        }
        Ok(())
    }

    fn set_muted(&self, muted: bool) -> Result<()> {
        let mut state = self.state.lock();
        state.ensure_attached()?;

        if state.muted != muted {
            state.muted = muted;
            state.pending.push_back(BackendSignal::VolumeChange);
        }
        Ok(())
    }

    fn duration(&self) -> Option<f64> {
        self.state.lock().duration
    }

    fn release(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.released = true;
        state.paused = true;
        state.url = None;
        state.pending.clear();
        debug!("Headless element released");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_play_by_extension() {
        let element = HeadlessMediaElement::new();

        assert!(element.can_play("movie.mp4"));
        assert!(element.can_play("https://cdn.example.com/clip.WEBM?token=1#t=10"));
        assert!(element.can_play("/assets/song.mp3"));
        assert!(!element.can_play(""));
        assert!(!element.can_play("https://example.com/watch"));
        assert!(!element.can_play("document.pdf"));
    }

    #[test]
    fn play_and_pause_raise_signals_only_on_change() {
        let element = HeadlessMediaElement::new();
        element.load("movie.mp4").unwrap();

        element.play().unwrap();
        element.play().unwrap();
        element.pause().unwrap();
        element.pause().unwrap();

        assert_eq!(
            element.drain_signals(),
            vec![BackendSignal::Play, BackendSignal::Pause]
        );
    }

    #[test]
    fn positions_clamped_to_media_bounds() {
        let element = HeadlessMediaElement::new().with_duration(30.0);

        element.set_current_time(45.0).unwrap();
        assert_eq!(element.current_time(), 30.0);

        element.set_current_time(-5.0).unwrap();
        assert_eq!(element.current_time(), 0.0);

        assert!(element.set_current_time(f64::NAN).is_err());
    }

    #[test]
    fn fractional_seek_requires_duration() {
        let unknown = HeadlessMediaElement::new();
        assert!(unknown.seek_to(0.5, SeekUnit::Fraction).is_err());

        let known = HeadlessMediaElement::new().with_duration(200.0);
        known.seek_to(0.25, SeekUnit::Fraction).unwrap();
        assert_eq!(known.current_time(), 50.0);

        known.seek_to(12.0, SeekUnit::Seconds).unwrap();
        assert_eq!(known.current_time(), 12.0);
    }

    #[test]
    fn volume_changes_raise_signal() {
        let element = HeadlessMediaElement::new();

        element.set_volume(0.5).unwrap();
        element.set_volume(0.5).unwrap();
        element.set_muted(true).unwrap();

        assert!(element.set_volume(1.5).is_err());
        assert_eq!(element.volume(), 0.5);
        assert!(element.is_muted());
        assert_eq!(
            element.drain_signals(),
            vec![BackendSignal::VolumeChange, BackendSignal::VolumeChange]
        );
    }

    #[test]
    fn advance_to_end_pauses_and_signals_ended() {
        let element = HeadlessMediaElement::new().with_duration(10.0);
        element.load("movie.mp4").unwrap();
        element.play().unwrap();
        assert_eq!(element.next_signal(), Some(BackendSignal::Play));

        element.advance(4.0);
        assert_eq!(element.current_time(), 4.0);

        element.advance(20.0);
        assert_eq!(element.current_time(), 10.0);
        assert!(element.is_paused());
        assert_eq!(element.next_signal(), Some(BackendSignal::Ended));

        // Playing again from the end starts over.
        element.play().unwrap();
        assert_eq!(element.current_time(), 0.0);
    }

    #[test]
    fn released_element_rejects_control() {
        let element = HeadlessMediaElement::new();
        element.load("movie.mp4").unwrap();
        element.release().unwrap();

        assert!(element.is_released());
        assert_eq!(element.url(), None);
        assert!(element.play().is_err());
        assert!(element.set_volume(0.2).is_err());
    }
}
