//! Media backend bridge trait and supporting types.
//!
//! A media backend is the host's handle on a single media resource: a browser
//! `<video>` element, a native player widget, or the in-memory element used in
//! tests. The core never decodes or renders anything itself; it issues
//! imperative calls through [`MediaBackend`] and reads the backend's live state
//! back. The backend is the source of truth for actual playback position and
//! volume.
//!
//! Native lifecycle notifications (playback started, paused, ended, volume
//! changed) are reported by the host shell as [`BackendSignal`] values and
//! forwarded into the controller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{error::Result, platform::PlatformSendSync};

/// Unit used to interpret the position passed to [`MediaBackend::seek_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeekUnit {
    /// Absolute position in seconds from the start of the media.
    Seconds,
    /// Fraction of the total duration, `0.0..=1.0`.
    Fraction,
}

impl fmt::Display for SeekUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeekUnit::Seconds => write!(f, "seconds"),
            SeekUnit::Fraction => write!(f, "fraction"),
        }
    }
}

/// Native lifecycle signal raised by a media backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendSignal {
    /// Playback actually started (or resumed).
    Play,
    /// Playback actually paused.
    Pause,
    /// Playback reached the end of the media.
    Ended,
    /// The backend's volume changed, by a command or by native controls.
    VolumeChange,
}

/// Trait for host media backends driving a single media resource.
///
/// Control methods return a [`Result`] so implementations can report failures,
/// but callers in the core treat them as fire-and-forget: failures are logged
/// and playback problems surface only inside the backend.
///
/// Reads (`current_time`, `volume`, `duration`) reflect the backend's actual
/// state at the time of the call.
pub trait MediaBackend: PlatformSendSync {
    /// Report whether the backend is able to render the given resource.
    fn can_play(&self, url: &str) -> bool;

    /// Bind the backend to a resource identifier.
    fn load(&self, url: &str) -> Result<()>;

    /// Begin or resume playback.
    fn play(&self) -> Result<()>;

    /// Pause playback, preserving position.
    fn pause(&self) -> Result<()>;

    /// Seek to a position interpreted according to `unit`.
    fn seek_to(&self, position: f64, unit: SeekUnit) -> Result<()>;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Write the playback position in seconds.
    fn set_current_time(&self, seconds: f64) -> Result<()>;

    /// Current volume in `0.0..=1.0`.
    fn volume(&self) -> f64;

    /// Write the volume.
    fn set_volume(&self, volume: f64) -> Result<()>;

    /// Mute or unmute output without touching the volume level.
    fn set_muted(&self, muted: bool) -> Result<()>;

    /// Total duration in seconds, when known.
    fn duration(&self) -> Option<f64> {
        None
    }

    /// Release any resources held for the current resource.
    fn release(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use mockall::mock;
    use std::sync::Arc;

    #[test]
    fn seek_unit_display() {
        assert_eq!(SeekUnit::Seconds.to_string(), "seconds");
        assert_eq!(SeekUnit::Fraction.to_string(), "fraction");
    }

    #[test]
    fn backend_signal_serialization() {
        let json = serde_json::to_string(&BackendSignal::VolumeChange).unwrap();
        assert_eq!(json, "\"volume_change\"");

        let signal: BackendSignal = serde_json::from_str("\"ended\"").unwrap();
        assert_eq!(signal, BackendSignal::Ended);
    }

    mock! {
        Backend {}

        impl MediaBackend for Backend {
            fn can_play(&self, url: &str) -> bool;
            fn load(&self, url: &str) -> Result<()>;
            fn play(&self) -> Result<()>;
            fn pause(&self) -> Result<()>;
            fn seek_to(&self, position: f64, unit: SeekUnit) -> Result<()>;
            fn current_time(&self) -> f64;
            fn set_current_time(&self, seconds: f64) -> Result<()>;
            fn volume(&self) -> f64;
            fn set_volume(&self, volume: f64) -> Result<()>;
            fn set_muted(&self, muted: bool) -> Result<()>;
        }
    }

    #[test]
    fn default_duration_and_release() {
        let backend = MockBackend::new();

        assert_eq!(backend.duration(), None);
        assert!(backend.release().is_ok());
    }

    #[test]
    fn backend_usable_as_shared_trait_object() {
        let mut backend = MockBackend::new();
        backend
            .expect_seek_to()
            .withf(|position, unit| *position == 0.0 && *unit == SeekUnit::Seconds)
            .times(1)
            .returning(|_, _| Ok(()));
        backend
            .expect_set_volume()
            .returning(|_| Err(BridgeError::OperationFailed("muted by host".to_string())));

        let shared: Arc<dyn MediaBackend> = Arc::new(backend);
        assert!(shared.seek_to(0.0, SeekUnit::Seconds).is_ok());
        assert!(matches!(
            shared.set_volume(0.5),
            Err(BridgeError::OperationFailed(_))
        ));
    }
}
