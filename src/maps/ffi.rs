// ============================================================================
// MAP FFI - Foreign Function Interface hacia MapLibre GL JS
// ============================================================================
// Solo bindings al objeto Map de la librería de render - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `maplibregl.Map`: la superficie de render de terceros.
    #[wasm_bindgen(js_namespace = maplibregl)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = maplibregl)]
    pub fn new(options: &JsValue) -> Map;

    /// Registra un listener de eventos ("load", "error", "move", "click", ...).
    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, js_name = jumpTo)]
    pub fn jump_to(this: &Map, camera: &JsValue);

    #[wasm_bindgen(method)]
    pub fn resize(this: &Map);

    /// Destruye el mapa y libera sus recursos GL.
    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    #[wasm_bindgen(method, js_name = getStyle)]
    pub fn get_style(this: &Map) -> JsValue;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &Map, layer: &JsValue);

    #[wasm_bindgen(method, js_name = getCenter)]
    pub fn get_center(this: &Map) -> JsValue;

    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &Map) -> f64;

    #[wasm_bindgen(method, js_name = getPitch)]
    pub fn get_pitch(this: &Map) -> f64;

    #[wasm_bindgen(method, js_name = getBearing)]
    pub fn get_bearing(this: &Map) -> f64;

    #[wasm_bindgen(method, js_name = queryRenderedFeatures)]
    pub fn query_rendered_features(this: &Map, geometry: &JsValue, options: &JsValue)
        -> js_sys::Array;
}
