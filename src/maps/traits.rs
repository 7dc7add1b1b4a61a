use std::fmt;

use wasm_bindgen::JsValue;

use crate::models::{StyleLayer, Viewport};

/// Evento de puntero ya restringido a las capas interactivas: punto en
/// pantalla, coordenada geográfica y los features crudos de la superficie.
#[derive(Debug, Clone)]
pub struct PointerHit {
    pub x: f64,
    pub y: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub features: JsValue,
}

/// Callbacks que la superficie invoca hacia el componente dueño. Se instalan
/// una sola vez, al montar la superficie.
pub struct SurfaceHandlers {
    pub on_load: Box<dyn Fn(JsValue)>,
    pub on_error: Box<dyn Fn(JsValue)>,
    pub on_move: Box<dyn Fn(Viewport)>,
    pub on_click: Box<dyn Fn(PointerHit)>,
    pub on_hover: Box<dyn Fn(PointerHit)>,
}

/// Costura sobre la superficie de render de terceros. El componente no habla
/// con la librería GL directamente: todo pasa por este trait.
pub trait RenderSurface {
    /// Lee la cámara actual (centro, zoom, pitch, bearing) más el tamaño del
    /// contenedor.
    fn camera(&self) -> Viewport;

    /// Salta a un viewport sin animación. No dispara el debounce de
    /// notificación: es el camino imperativo.
    fn jump_to(&mut self, viewport: &Viewport) -> Result<(), MapError>;

    /// Pide a la superficie re-medir su contenedor.
    fn resize(&mut self);

    /// Capas del estilo que la superficie tiene cargado en este momento.
    fn style_layers(&self) -> Vec<StyleLayer>;

    /// Instala las capas ancla de fondo (ver utils::constants).
    fn install_anchor_layers(&mut self, count: usize) -> Result<(), MapError>;

    /// Restringe la interacción de puntero a estos ids de capa.
    fn set_interactive_layers(&mut self, ids: Vec<String>);

    /// Desmonta la superficie y libera listeners.
    fn destroy(&mut self);
}

/// Error de la superficie de mapa
#[derive(Debug, Clone)]
pub enum MapError {
    Serialization(String),
    Unknown(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            MapError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
