//! Controller-owned playback intent.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier assigned to every controller, used in log spans and bus events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the caller wants media playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackIntent {
    Paused,
    Playing,
}

/// Intent state held by a [`PlaybackController`](crate::PlaybackController).
///
/// `playing` and `muted` are independent flags. `volume` is always within
/// `[0, 1]`; every write goes through [`clamp_volume`].
///
/// This is what the caller asked for, not what the backend is doing. The
/// backend remains authoritative for the actual position and volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackState {
    url: String,
    playing: bool,
    muted: bool,
    volume: f64,
}

impl PlaybackState {
    pub(crate) fn new(url: impl Into<String>, muted: bool, volume: f64) -> Self {
        Self {
            url: url.into(),
            playing: false,
            muted,
            volume: clamp_volume(volume),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn intent(&self) -> PlaybackIntent {
        if self.playing {
            PlaybackIntent::Playing
        } else {
            PlaybackIntent::Paused
        }
    }

    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub(crate) fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub(crate) fn set_volume(&mut self, volume: f64) {
        self.volume = clamp_volume(volume);
    }
}

/// Clamp to `[0, 1]`. NaN maps to 0.
pub(crate) fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

/// Round to one decimal place using the exact binary value of `value`.
///
/// `0.35` is stored just below the tie and rounds to `0.3`. Exact ties (odd
/// multiples of `0.25`, `0.75`, ...) round away from zero.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        // `value * 10` is exactly `k.5` here, so `round` sees the real tie.
        return (value * 10.0).round() / 10.0;
    }

    // `{:.1}` rounds the exact binary expansion.
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Next volume after stepping `current` by `delta`.
pub(crate) fn step_volume(current: f64, delta: f64) -> f64 {
    clamp_volume(round_to_tenth(current + delta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_paused() {
        let state = PlaybackState::new("a.mp4", true, 0.4);
        assert_eq!(state.url(), "a.mp4");
        assert!(!state.is_playing());
        assert!(state.is_muted());
        assert_eq!(state.volume(), 0.4);
        assert_eq!(state.intent(), PlaybackIntent::Paused);
    }

    #[test]
    fn playing_and_muted_are_independent() {
        let mut state = PlaybackState::new("a.mp4", false, 1.0);
        state.set_playing(true);
        state.set_muted(true);
        assert_eq!(state.intent(), PlaybackIntent::Playing);
        assert!(state.is_muted());

        state.set_muted(false);
        assert_eq!(state.intent(), PlaybackIntent::Playing);
    }

    #[test]
    fn stored_volume_is_clamped() {
        let mut state = PlaybackState::new("a.mp4", false, 3.0);
        assert_eq!(state.volume(), 1.0);

        state.set_volume(-0.5);
        assert_eq!(state.volume(), 0.0);

        state.set_volume(f64::NAN);
        assert_eq!(state.volume(), 0.0);
    }

    #[test]
    fn volume_steps_round_to_one_decimal() {
        assert_eq!(step_volume(0.5, 0.25), 0.8);
        assert_eq!(step_volume(0.8, 0.25), 1.0);
        assert_eq!(step_volume(0.1, -0.1), 0.0);
        assert_eq!(step_volume(0.0, -0.1), 0.0);
        assert_eq!(step_volume(0.7, 0.1), 0.8);
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(-0.25), -0.3);
    }

    #[test]
    fn rounding_follows_stored_binary_value() {
        // Literals just below a .x5 tie round down, just above round up.
        assert_eq!(round_to_tenth(0.35), 0.3);
        assert_eq!(round_to_tenth(0.15), 0.1);
        assert_eq!(round_to_tenth(0.45), 0.5);
        assert_eq!(round_to_tenth(0.05), 0.1);

        // Exact ties go away from zero.
        assert_eq!(round_to_tenth(0.75), 0.8);
        assert_eq!(round_to_tenth(1.25), 1.3);
        assert_eq!(round_to_tenth(-0.75), -0.8);
    }

    #[test]
    fn decreasing_by_quarter_steps() {
        let mut volume = 1.0;
        let mut seen = Vec::new();
        for _ in 0..4 {
            volume = step_volume(volume, -0.25);
            seen.push(volume);
        }
        assert_eq!(seen, vec![0.8, 0.6, 0.3, 0.0]);
    }

    #[test]
    fn player_ids_are_unique() {
        let a = PlayerId::new();
        let b = PlayerId::new();
        assert_ne!(a, b);
        assert_eq!(a.to_string(), a.as_uuid().to_string());
    }
}
