use serde::{Deserialize, Serialize};

/// Parámetros de cámara del mapa: posición, zoom, inclinación y tamaño en píxeles.
/// El componente `MapView` es el único dueño de este estado; hacia afuera solo
/// se expone vía callbacks o la manija imperativa.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub bearing: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl Viewport {
    /// Fusiona las dimensiones estabilizadas del contenedor en el viewport.
    /// Un rect vacío (contenedor aún sin layout) no modifica nada: se
    /// conservan las dimensiones previas.
    pub fn resized(mut self, rect: &Rect) -> Self {
        if rect.is_empty() {
            return self;
        }
        self.width = rect.width;
        self.height = rect.height;
        self
    }
}

/// Tamaño del contenedor DOM, medido por `getBoundingClientRect` o por el
/// `ResizeObserver`. Ambas fuentes producen el mismo tipo y desembocan en el
/// mismo valor debounced.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport {
            longitude: 127.0,
            latitude: 37.5,
            zoom: 14.0,
            width: 800.0,
            height: 600.0,
            ..Viewport::default()
        }
    }

    #[test]
    fn resized_merges_non_empty_rect() {
        let merged = viewport().resized(&Rect::new(1024.0, 768.0));
        assert_eq!(merged.width, 1024.0);
        assert_eq!(merged.height, 768.0);
        assert_eq!(merged.zoom, 14.0);
    }

    #[test]
    fn resized_keeps_previous_dimensions_on_empty_rect() {
        let merged = viewport().resized(&Rect::new(0.0, 0.0));
        assert_eq!(merged.width, 800.0);
        assert_eq!(merged.height, 600.0);
    }

    #[test]
    fn rect_with_one_zero_side_is_empty() {
        assert!(Rect::new(0.0, 300.0).is_empty());
        assert!(Rect::new(300.0, 0.0).is_empty());
        assert!(!Rect::new(1.0, 1.0).is_empty());
    }
}
