// ============================================================================
// USE CONTAINER RECT - Seguimiento del tamaño del contenedor
// ============================================================================
// Dos fuentes independientes escriben el mismo valor: el listener global de
// resize de window (midiendo el contenedor) y un ResizeObserver sobre el
// propio elemento. El caller pasa como callback el setter debounced, así
// ambas fuentes colapsan en un único rect estabilizado.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ResizeObserver, ResizeObserverEntry};
use yew::prelude::*;

use crate::models::Rect;

#[hook]
pub fn use_container_rect(container: NodeRef, on_rect: Callback<Rect>) {
    use_effect_with(container, move |container| {
        let container = container.clone();

        let measure: Rc<dyn Fn()> = {
            let container = container.clone();
            let on_rect = on_rect.clone();
            Rc::new(move || {
                if let Some(element) = container.cast::<HtmlElement>() {
                    let rect = element.get_bounding_client_rect();
                    on_rect.emit(Rect::new(rect.width(), rect.height()));
                }
            })
        };

        // Medición inicial al montar
        measure();

        // Fuente 1: resize global de window. El listener vive exactamente lo
        // que vive el componente: se remueve en el cleanup, nunca forget().
        let window = web_sys::window();
        let resize_listener = {
            let measure = measure.clone();
            Closure::wrap(
                Box::new(move |_event: web_sys::Event| measure()) as Box<dyn FnMut(web_sys::Event)>
            )
        };
        if let Some(w) = &window {
            let _ = w.add_event_listener_with_callback(
                "resize",
                resize_listener.as_ref().unchecked_ref(),
            );
        }

        // Fuente 2: ResizeObserver sobre el contenedor
        let observer_callback = {
            let on_rect = on_rect.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array| {
                if let Ok(entry) = entries.get(0).dyn_into::<ResizeObserverEntry>() {
                    let content = entry.content_rect();
                    on_rect.emit(Rect::new(content.width(), content.height()));
                }
            }) as Box<dyn FnMut(js_sys::Array)>)
        };
        let observer = ResizeObserver::new(observer_callback.as_ref().unchecked_ref()).ok();
        if let (Some(obs), Some(element)) = (&observer, container.cast::<Element>()) {
            obs.observe(&element);
        } else {
            log::warn!("⚠️ use_container_rect: no se pudo observar el contenedor");
        }

        move || {
            if let Some(w) = window {
                let _ = w.remove_event_listener_with_callback(
                    "resize",
                    resize_listener.as_ref().unchecked_ref(),
                );
            }
            if let Some(obs) = observer {
                obs.disconnect();
            }
            drop(resize_listener);
            drop(observer_callback);
        }
    });
}
