//! Presentation snapshot handed to the shell for rendering.

use serde::Serialize;

use crate::{config::PlayerOptions, state::PlaybackState};

const FULL_SIZE: &str = "100%";

/// Attributes forwarded to the underlying media element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    /// Always render a video element, even for audio-only resources.
    pub force_video: bool,
    pub controls_list: String,
    pub disable_picture_in_picture: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            force_video: true,
            controls_list: "nodownload".to_string(),
            disable_picture_in_picture: true,
        }
    }
}

/// Everything a shell needs to render the player for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub url: String,
    pub playing: bool,
    pub muted: bool,
    pub volume: f64,
    pub controls: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub width: String,
    pub height: String,
    pub file: FileConfig,
}

impl PlayerView {
    pub(crate) fn new(state: &PlaybackState, options: &PlayerOptions) -> Self {
        Self {
            url: state.url().to_string(),
            playing: state.is_playing(),
            muted: state.is_muted(),
            volume: state.volume(),
            controls: options.controls,
            class_name: options.class_name.clone(),
            width: FULL_SIZE.to_string(),
            height: FULL_SIZE.to_string(),
            file: FileConfig::default(),
        }
    }
}
