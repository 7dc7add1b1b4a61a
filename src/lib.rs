// ============================================================================
// CARTO VIEW - Componente de mapa interactivo (Rust + WASM)
// ============================================================================
// - components: MapView (sincronizador de viewport) y shell de demo
// - hooks: debounce, rect del contenedor, manija imperativa
// - maps: costura RenderSurface + implementación MapLibre GL JS por FFI
// - services: descarga del documento de estilo
// - models: Viewport, StyleDocument, máquina de estados de carga
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod maps;
pub mod models;
pub mod services;
pub mod utils;

use wasm_bindgen::prelude::*;

use crate::components::App;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Panic hook para stacktraces legibles en consola
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Carto View - mapa interactivo Rust/WASM");

    yew::Renderer::<App>::new().render();

    Ok(())
}
