use serde::{Deserialize, Serialize};

use crate::models::Viewport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub map: MapConfig,
    pub debounce: DebounceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Endpoint del documento de estilo. Se descarga una única vez por montaje.
    pub style_url: String,
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub default_pitch: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebounceConfig {
    /// Ventana de debounce para el rect del contenedor (resize).
    pub rect_ms: u32,
    /// Ventana de debounce para notificar cambios de viewport hacia afuera.
    pub viewport_notify_ms: u32,
}

const DEFAULT_STYLE_URL: &str =
    "https://api.maptiler.com/maps/basic/style.json?key=HPv7qYIcyDeysnfb8IFM";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            map: MapConfig::default(),
            debounce: DebounceConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style_url: DEFAULT_STYLE_URL.to_string(),
            default_center_lat: 37.484501601554435,
            default_center_lng: 127.03553922219496,
            default_zoom: 14.0,
            default_pitch: 0.0,
        }
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            rect_ms: 500,
            viewport_notify_ms: 100,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de
    /// compilación (inyectadas por build.rs desde .env).
    pub fn from_env() -> Self {
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            map: MapConfig {
                style_url: option_env!("MAP_STYLE_URL")
                    .unwrap_or(DEFAULT_STYLE_URL)
                    .to_string(),
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(37.484501601554435),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(127.03553922219496),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(14.0),
                default_pitch: option_env!("DEFAULT_MAP_PITCH")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0.0),
            },
            debounce: DebounceConfig {
                rect_ms: option_env!("RECT_DEBOUNCE_MS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(500),
                viewport_notify_ms: option_env!("VIEWPORT_NOTIFY_DEBOUNCE_MS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(100),
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

impl MapConfig {
    /// Viewport inicial cuando el caller no pasa uno propio.
    pub fn initial_viewport(&self) -> Viewport {
        Viewport {
            longitude: self.default_center_lng,
            latitude: self.default_center_lat,
            zoom: self.default_zoom,
            pitch: self.default_pitch,
            ..Viewport::default()
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_debounce_windows() {
        let config = AppConfig::default();
        assert_eq!(config.debounce.rect_ms, 500);
        assert_eq!(config.debounce.viewport_notify_ms, 100);
    }

    #[test]
    fn initial_viewport_has_no_dimensions_yet() {
        let viewport = MapConfig::default().initial_viewport();
        assert_eq!(viewport.width, 0.0);
        assert_eq!(viewport.height, 0.0);
        assert_eq!(viewport.zoom, 14.0);
    }
}
