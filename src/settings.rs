use std::path::PathBuf;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::shapes::ShapeKind;
use crate::MorphApp;

/// Returns the path to the settings file: `~/.config/morph-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("morph-rs");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Startup
    pub initial_shape: ShapeKind,
    pub show_settings: bool,

    // Animation
    pub duration_ms: u64,
    pub easing: Easing,

    // Display
    pub stroke_width: f32,

    // Color (stored as u8 triples since Color32 isn't serde-friendly)
    pub color_r: u8,
    pub color_g: u8,
    pub color_b: u8,
    pub background_r: u8,
    pub background_g: u8,
    pub background_b: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            initial_shape: ShapeKind::Line,
            show_settings: true,

            duration_ms: 750,
            easing: Easing::Linear,

            stroke_width: 20.0,

            color_r: 0,
            color_g: 0,
            color_b: 255,
            background_r: 255,
            background_g: 255,
            background_b: 255,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &MorphApp) -> Self {
        Self {
            // The shape on screen (or heading onto it) becomes the
            // startup shape of the next run
            initial_shape: app.engine.state().target(),
            show_settings: app.show_settings,

            duration_ms: app.engine.config.duration_ms,
            easing: app.engine.config.easing,

            stroke_width: app.canvas.settings.stroke_width,

            color_r: app.canvas.settings.color.r(),
            color_g: app.canvas.settings.color.g(),
            color_b: app.canvas.settings.color.b(),
            background_r: app.canvas.settings.background.r(),
            background_g: app.canvas.settings.background.g(),
            background_b: app.canvas.settings.background.b(),
        }
    }

    /// Apply loaded settings to the running application.
    pub fn apply(&self, app: &mut MorphApp) {
        app.show_settings = self.show_settings;

        app.engine.config.duration_ms = self.duration_ms;
        app.engine.config.easing = self.easing;

        app.canvas.settings.stroke_width = self.stroke_width;

        app.canvas.settings.color =
            egui::Color32::from_rgb(self.color_r, self.color_g, self.color_b);
        app.canvas.settings.background =
            egui::Color32::from_rgb(self.background_r, self.background_g, self.background_b);
    }
}
