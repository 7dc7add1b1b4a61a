use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use super::ffi;
use super::traits::{MapError, PointerHit, RenderSurface, SurfaceHandlers};
use crate::models::{StyleDocument, StyleLayer, Viewport};
use crate::utils::constants::ANCHOR_LAYER_PREFIX;

/// Superficie de render web sobre MapLibre GL JS.
pub struct GlSurface {
    map: Rc<ffi::Map>,
    container: HtmlElement,
    interactive_layer_ids: Rc<RefCell<Vec<String>>>,
    // Los closures registrados con map.on deben vivir tanto como la superficie
    listeners: Vec<Closure<dyn FnMut(JsValue)>>,
}

impl GlSurface {
    /// Crea el mapa GL dentro del contenedor con el estilo ya descargado y la
    /// cámara inicial, e instala todos los handlers de eventos.
    pub fn mount(
        container: &HtmlElement,
        style: &StyleDocument,
        viewport: &Viewport,
        handlers: SurfaceHandlers,
    ) -> Result<Self, MapError> {
        let options = js_sys::Object::new();
        set_prop(&options, "container", container.clone().into())?;
        let style_value = serde_wasm_bindgen::to_value(style)
            .map_err(|e| MapError::Serialization(e.to_string()))?;
        set_prop(&options, "style", style_value)?;
        let center = js_sys::Array::of2(
            &JsValue::from_f64(viewport.longitude),
            &JsValue::from_f64(viewport.latitude),
        );
        set_prop(&options, "center", center.into())?;
        set_prop(&options, "zoom", JsValue::from_f64(viewport.zoom))?;
        set_prop(&options, "pitch", JsValue::from_f64(viewport.pitch))?;
        set_prop(&options, "bearing", JsValue::from_f64(viewport.bearing))?;
        set_prop(&options, "attributionControl", JsValue::FALSE)?;
        set_prop(&options, "localIdeographFontFamily", JsValue::FALSE)?;

        let map = Rc::new(ffi::Map::new(&options.into()));
        let interactive_layer_ids = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Vec::new();

        let SurfaceHandlers {
            on_load,
            on_error,
            on_move,
            on_click,
            on_hover,
        } = handlers;

        let load_closure =
            Closure::wrap(Box::new(move |event: JsValue| on_load(event)) as Box<dyn FnMut(JsValue)>);
        map.on("load", load_closure.as_ref().unchecked_ref());
        listeners.push(load_closure);

        let error_closure = Closure::wrap(
            Box::new(move |event: JsValue| on_error(event)) as Box<dyn FnMut(JsValue)>
        );
        map.on("error", error_closure.as_ref().unchecked_ref());
        listeners.push(error_closure);

        // Cada frame de interacción (pan/zoom/rotación) reporta la cámara
        let move_closure = {
            let map = map.clone();
            let container = container.clone();
            Closure::wrap(Box::new(move |_event: JsValue| {
                on_move(read_camera(&map, &container));
            }) as Box<dyn FnMut(JsValue)>)
        };
        map.on("move", move_closure.as_ref().unchecked_ref());
        listeners.push(move_closure);

        let click_closure = pointer_closure(map.clone(), interactive_layer_ids.clone(), on_click);
        map.on("click", click_closure.as_ref().unchecked_ref());
        listeners.push(click_closure);

        let hover_closure = pointer_closure(map.clone(), interactive_layer_ids.clone(), on_hover);
        map.on("mousemove", hover_closure.as_ref().unchecked_ref());
        listeners.push(hover_closure);

        log::info!("🗺️ Superficie GL montada");

        Ok(Self {
            map,
            container: container.clone(),
            interactive_layer_ids,
            listeners,
        })
    }
}

impl RenderSurface for GlSurface {
    fn camera(&self) -> Viewport {
        read_camera(&self.map, &self.container)
    }

    fn jump_to(&mut self, viewport: &Viewport) -> Result<(), MapError> {
        let camera = serde_json::json!({
            "center": [viewport.longitude, viewport.latitude],
            "zoom": viewport.zoom,
            "pitch": viewport.pitch,
            "bearing": viewport.bearing,
        });
        let camera = serde_wasm_bindgen::to_value(&camera)
            .map_err(|e| MapError::Serialization(e.to_string()))?;
        self.map.jump_to(&camera);
        Ok(())
    }

    fn resize(&mut self) {
        self.map.resize();
    }

    fn style_layers(&self) -> Vec<StyleLayer> {
        serde_wasm_bindgen::from_value::<StyleDocument>(self.map.get_style())
            .map(|style| style.layers)
            .unwrap_or_default()
    }

    fn install_anchor_layers(&mut self, count: usize) -> Result<(), MapError> {
        for index in 0..count {
            let layer = serde_json::json!({
                "id": format!("{}{}", ANCHOR_LAYER_PREFIX, index),
                "type": "background",
                "paint": { "background-opacity": 0 },
            });
            let layer = serde_wasm_bindgen::to_value(&layer)
                .map_err(|e| MapError::Serialization(e.to_string()))?;
            self.map.add_layer(&layer);
        }
        log::info!("📌 {} capas ancla instaladas", count);
        Ok(())
    }

    fn set_interactive_layers(&mut self, ids: Vec<String>) {
        *self.interactive_layer_ids.borrow_mut() = ids;
    }

    fn destroy(&mut self) {
        self.map.remove();
        self.listeners.clear();
        log::info!("🧹 Superficie GL desmontada");
    }
}

fn set_prop(target: &js_sys::Object, key: &str, value: JsValue) -> Result<(), MapError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), &value)
        .map(|_| ())
        .map_err(|e| MapError::Unknown(format!("{:?}", e)))
}

fn f64_prop(object: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

fn read_camera(map: &ffi::Map, container: &HtmlElement) -> Viewport {
    let center = map.get_center();
    Viewport {
        longitude: f64_prop(&center, "lng").unwrap_or(0.0),
        latitude: f64_prop(&center, "lat").unwrap_or(0.0),
        zoom: map.get_zoom(),
        pitch: map.get_pitch(),
        bearing: map.get_bearing(),
        width: container.client_width() as f64,
        height: container.client_height() as f64,
    }
}

/// Handler de click/hover: consulta los features renderizados restringiendo a
/// las capas interactivas y solo reenvía hits no vacíos.
fn pointer_closure(
    map: Rc<ffi::Map>,
    interactive_layer_ids: Rc<RefCell<Vec<String>>>,
    handler: Box<dyn Fn(PointerHit)>,
) -> Closure<dyn FnMut(JsValue)> {
    Closure::wrap(Box::new(move |event: JsValue| {
        let layer_ids = interactive_layer_ids.borrow().clone();
        if layer_ids.is_empty() {
            return;
        }
        let Ok(point) = js_sys::Reflect::get(&event, &JsValue::from_str("point")) else {
            return;
        };
        let layers = js_sys::Array::new();
        for id in &layer_ids {
            layers.push(&JsValue::from_str(id));
        }
        let options = js_sys::Object::new();
        if js_sys::Reflect::set(&options, &JsValue::from_str("layers"), &layers).is_err() {
            return;
        }
        let features = map.query_rendered_features(&point, &options.into());
        if features.length() == 0 {
            return;
        }
        let lng_lat = js_sys::Reflect::get(&event, &JsValue::from_str("lngLat"))
            .unwrap_or(JsValue::UNDEFINED);
        handler(PointerHit {
            x: f64_prop(&point, "x").unwrap_or(0.0),
            y: f64_prop(&point, "y").unwrap_or(0.0),
            longitude: f64_prop(&lng_lat, "lng").unwrap_or(0.0),
            latitude: f64_prop(&lng_lat, "lat").unwrap_or(0.0),
            features: features.into(),
        });
    }) as Box<dyn FnMut(JsValue)>)
}
