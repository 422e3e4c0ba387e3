//! Presentation settings
//!
//! Colors, score text and the center line can be restyled; gameplay constants
//! live in `consts` and are not configurable. Persisted in LocalStorage as JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Side;

/// Display settings. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Colors ===
    pub player_color: String,
    pub ai_color: String,
    pub ball_color: String,
    pub center_line_color: String,

    // === Center line ===
    /// On/off dash lengths in pixels
    pub center_line_dash: Vec<f32>,

    // === Scores ===
    /// CSS font for the score digits
    pub score_font: String,
    /// Player score position, relative to the top of the center line
    pub player_score_offset: Vec2,
    /// AI score position, relative to the top of the center line
    pub ai_score_offset: Vec2,

    // === Serve RNG ===
    /// Fixed seed for reproducible serves; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_color: "#0f8".to_owned(),
            ai_color: "#f08".to_owned(),
            ball_color: "#fff".to_owned(),
            center_line_color: "#08f".to_owned(),

            center_line_dash: vec![10.0, 15.0],

            score_font: "40px Segoe UI, Arial".to_owned(),
            player_score_offset: Vec2::new(-60.0, 50.0),
            ai_score_offset: Vec2::new(30.0, 50.0),

            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

    /// Paddle and score color for `side`
    pub fn color(&self, side: Side) -> &str {
        match side {
            Side::Player => &self.player_color,
            Side::Ai => &self.ai_color,
        }
    }

    pub fn score_offset(&self, side: Side) -> Vec2 {
        match side {
            Side::Player => self.player_score_offset,
            Side::Ai => self.ai_score_offset,
        }
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse settings from JSON, falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
