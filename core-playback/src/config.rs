//! # Player Configuration
//!
//! Options supplied when a player is constructed. They are immutable for the
//! lifetime of the controller.
//!
//! Construction is lenient: out-of-range values are corrected (and reported
//! through [`PlayerOptions::issues`]) instead of rejected. Callers that want a
//! hard failure can run [`PlayerOptions::validate`] themselves.

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};

/// Volume used when none is configured.
pub const DEFAULT_VOLUME: f64 = 1.0;

/// Volume step for increase/decrease commands.
pub const DEFAULT_VOLUME_DELTA: f64 = 0.1;

/// Seek step, in seconds, for forward/backward commands.
pub const DEFAULT_CHANGE_DELTA: f64 = 5.0;

/// Player construction options.
///
/// JSON keys use camelCase (`volumeDelta`, `changeDelta`, `className`) so the
/// same document a web host passes as component props can be parsed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerOptions {
    /// Media resource identifier. Required; an empty value is diagnosed at
    /// construction but does not prevent it.
    #[serde(default)]
    pub url: String,

    /// Initial volume, `0.0..=1.0`.
    ///
    /// Default: 1.0.
    #[serde(default = "default_volume")]
    pub volume: f64,

    /// Volume step for [`increase_volume`](crate::PlaybackController::increase_volume)
    /// and [`decrease_volume`](crate::PlaybackController::decrease_volume).
    /// Zero means "unset".
    ///
    /// Default: 0.1.
    #[serde(default = "default_volume_delta")]
    pub volume_delta: f64,

    /// Seek step in seconds for [`forward`](crate::PlaybackController::forward)
    /// and [`backward`](crate::PlaybackController::backward). Zero means "unset".
    ///
    /// Default: 5.
    #[serde(default = "default_change_delta")]
    pub change_delta: f64,

    /// Whether output starts muted.
    #[serde(default)]
    pub muted: bool,

    /// Whether the shell shows the backend's native controls.
    #[serde(default)]
    pub controls: bool,

    /// Extra class name applied by the shell to the rendered element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl PlayerOptions {
    /// Options for `url` with every other field at its default.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            volume: default_volume(),
            volume_delta: default_volume_delta(),
            change_delta: default_change_delta(),
            muted: false,
            controls: false,
            class_name: None,
        }
    }

    /// Start building options for `url`.
    pub fn builder(url: impl Into<String>) -> PlayerOptionsBuilder {
        PlayerOptionsBuilder {
            options: Self::new(url),
        }
    }

    /// Parse options from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Initial volume with Invariant `0 <= volume <= 1` applied.
    pub fn initial_volume(&self) -> f64 {
        if self.volume.is_finite() {
            self.volume.clamp(0.0, 1.0)
        } else {
            DEFAULT_VOLUME
        }
    }

    /// Volume step actually used by the controller.
    pub fn effective_volume_delta(&self) -> f64 {
        effective_delta(self.volume_delta, DEFAULT_VOLUME_DELTA)
    }

    /// Seek step actually used by the controller.
    pub fn effective_change_delta(&self) -> f64 {
        effective_delta(self.change_delta, DEFAULT_CHANGE_DELTA)
    }

    /// Human-readable list of values that will be corrected at construction.
    ///
    /// The url is not checked here; see [`validate`](Self::validate).
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.volume.is_finite() || !(0.0..=1.0).contains(&self.volume) {
            issues.push(format!(
                "volume {} is outside [0, 1], using {}",
                self.volume,
                self.initial_volume()
            ));
        }

        if self.volume_delta == 0.0 || !self.volume_delta.is_finite() {
            issues.push(format!(
                "volumeDelta {} is unset, using {}",
                self.volume_delta, DEFAULT_VOLUME_DELTA
            ));
        }

        if self.change_delta == 0.0 || !self.change_delta.is_finite() {
            issues.push(format!(
                "changeDelta {} is unset, using {}",
                self.change_delta, DEFAULT_CHANGE_DELTA
            ));
        }

        issues
    }

    /// Strict check: fails if the url is empty or any value would be corrected.
    pub fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();
        if self.url.trim().is_empty() {
            issues.push("url is required".to_string());
        }
        issues.extend(self.issues());

        if issues.is_empty() {
            Ok(())
        } else {
            Err(PlaybackError::InvalidOption(issues.join("; ")))
        }
    }
}

fn effective_delta(value: f64, default: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        default
    } else {
        value
    }
}

/// Builder for [`PlayerOptions`].
#[derive(Debug, Clone)]
pub struct PlayerOptionsBuilder {
    options: PlayerOptions,
}

impl PlayerOptionsBuilder {
    pub fn volume(mut self, volume: f64) -> Self {
        self.options.volume = volume;
        self
    }

    pub fn volume_delta(mut self, delta: f64) -> Self {
        self.options.volume_delta = delta;
        self
    }

    pub fn change_delta(mut self, seconds: f64) -> Self {
        self.options.change_delta = seconds;
        self
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.options.muted = muted;
        self
    }

    pub fn controls(mut self, controls: bool) -> Self {
        self.options.controls = controls;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.options.class_name = Some(class_name.into());
        self
    }

    pub fn build(self) -> PlayerOptions {
        self.options
    }
}

// ============================================================================
// Default Functions (for serde)
// ============================================================================

fn default_volume() -> f64 {
    DEFAULT_VOLUME
}

fn default_volume_delta() -> f64 {
    DEFAULT_VOLUME_DELTA
}

fn default_change_delta() -> f64 {
    DEFAULT_CHANGE_DELTA
}
