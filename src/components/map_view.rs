// ============================================================================
// MAP VIEW - Componente de mapa interactivo
// ============================================================================
// Sincroniza tres entradas asíncronas e independientes: el documento de
// estilo remoto, el tamaño del contenedor y la cámara que mueve el usuario.
// El merge de dimensiones espera a que estilo, superficie y rect no-vacío
// estén disponibles a la vez.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{AbortController, HtmlElement};
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{
    use_container_rect, use_debounce, use_debounce_callback, MapViewHandle,
};
use crate::maps::{GlSurface, PointerHit, RenderSurface, SurfaceHandlers};
use crate::models::{symbol_layer_ids, LoadEvent, LoadPhase, Rect, StyleDocument, Viewport};
use crate::services::fetch_style;
use crate::utils::constants::ANCHOR_LAYER_COUNT;

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    /// Viewport inicial. Cambios posteriores del prop no se aplican: para
    /// forzar la cámara desde afuera está `handle`.
    #[prop_or_default]
    pub viewport: Option<Viewport>,
    #[prop_or_default]
    pub on_viewport_change: Callback<Viewport>,
    /// Evento `load` crudo de la superficie, reenviado tal cual.
    #[prop_or_default]
    pub on_load: Callback<JsValue>,
    #[prop_or_default]
    pub on_resize: Callback<Rect>,
    #[prop_or_default]
    pub on_click: Callback<PointerHit>,
    /// Errores de la superficie, reenviados sin interpretación local.
    #[prop_or_default]
    pub on_error: Callback<JsValue>,
    #[prop_or_default]
    pub on_hover: Callback<PointerHit>,
    /// URL alternativa del documento de estilo; por defecto la de CONFIG.
    #[prop_or_default]
    pub map_style: Option<String>,
    #[prop_or_default]
    pub popup_node: Option<Html>,
    /// Aceptado por compatibilidad de API; la superficie aún no lo consume.
    #[prop_or_default]
    pub deck_layers: Vec<JsValue>,
    /// Elimina las capas "symbol" del estilo antes de entregarlo a la
    /// superficie.
    #[prop_or_default]
    pub hide_symbol: bool,
    #[prop_or_default]
    pub handle: Option<MapViewHandle>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container_ref = use_node_ref();

    let viewport = use_state(|| {
        props
            .viewport
            .unwrap_or_else(|| CONFIG.map.initial_viewport())
    });
    let style_object = use_state(|| None::<StyleDocument>);
    let surface = use_mut_ref(|| None::<Box<dyn RenderSurface>>);

    // Máquina de estados de carga. La celda es la fuente de verdad (los
    // closures de eventos viven más que un render); el use_state es el espejo
    // que dispara re-render y efectos.
    let phase_cell = use_mut_ref(LoadPhase::default);
    let phase = use_state(LoadPhase::default);
    let advance: Rc<dyn Fn(LoadEvent)> = {
        let phase_cell = phase_cell.clone();
        let phase = phase.clone();
        Rc::new(move |event| {
            let next = phase_cell.borrow().advance(event);
            *phase_cell.borrow_mut() = next;
            phase.set(next);
        })
    };

    let rect = use_debounce(None::<Rect>, CONFIG.debounce.rect_ms);
    let notify_viewport =
        use_debounce_callback(props.on_viewport_change.clone(), CONFIG.debounce.viewport_notify_ms);

    // ---- Style Loader: un único fetch por montaje, cancelable -------------
    {
        let style_object = style_object.clone();
        let advance = advance.clone();
        let style_url = props
            .map_style
            .clone()
            .unwrap_or_else(|| CONFIG.map.style_url.clone());
        let hide_symbol = props.hide_symbol;
        use_effect_with((), move |_| {
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_style(&style_url, hide_symbol, signal.as_ref()).await {
                    Ok(style) => {
                        advance(LoadEvent::StyleFetched);
                        style_object.set(Some(style));
                    }
                    Err(e) if e.to_lowercase().contains("abort") => {
                        log::info!("🛑 Descarga de estilo cancelada (desmontaje)");
                    }
                    Err(e) => {
                        // Sin reintentos ni estilo de respaldo: el mapa queda
                        // sin cargar y el re-montaje es el camino de rescate
                        log::error!("❌ Error cargando estilo de mapa: {}", e);
                    }
                }
            });
            move || {
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    // ---- Dimension Tracker: dos fuentes, un solo valor debounced ----------
    use_container_rect(container_ref.clone(), rect.set.clone().reform(Some));

    // ---- Superficie GL: se crea cuando el estilo está listo ---------------
    {
        let surface = surface.clone();
        let container_ref = container_ref.clone();
        let advance = advance.clone();
        let viewport = viewport.clone();
        let notify_viewport = notify_viewport.clone();
        let on_load = props.on_load.clone();
        let on_error = props.on_error.clone();
        let on_click = props.on_click.clone();
        let on_hover = props.on_hover.clone();
        use_effect_with((*style_object).clone(), move |style| {
            if surface.borrow().is_some() {
                return;
            }
            let Some(style) = style.clone() else {
                return;
            };
            let Some(container) = container_ref.cast::<HtmlElement>() else {
                log::warn!("⚠️ MapView: contenedor todavía no montado");
                return;
            };

            let handlers = SurfaceHandlers {
                on_load: Box::new({
                    let surface = surface.clone();
                    let advance = advance.clone();
                    move |event: JsValue| {
                        advance(LoadEvent::SurfaceLoaded);
                        if let Some(s) = surface.borrow_mut().as_mut() {
                            let ids = symbol_layer_ids(&s.style_layers());
                            log::info!("🎯 Capas interactivas: {:?}", ids);
                            s.set_interactive_layers(ids);
                            if let Err(e) = s.install_anchor_layers(ANCHOR_LAYER_COUNT) {
                                log::error!("❌ Error instalando capas ancla: {}", e);
                            }
                        }
                        on_load.emit(event);
                    }
                }),
                on_error: Box::new(move |event: JsValue| on_error.emit(event)),
                on_move: Box::new({
                    let viewport = viewport.clone();
                    move |camera: Viewport| {
                        // Estado interno síncrono por frame; la notificación
                        // externa sale debounced
                        viewport.set(camera);
                        notify_viewport.emit(camera);
                    }
                }),
                on_click: Box::new(move |hit: PointerHit| on_click.emit(hit)),
                on_hover: Box::new(move |hit: PointerHit| on_hover.emit(hit)),
            };

            match GlSurface::mount(&container, &style, &viewport, handlers) {
                Ok(s) => {
                    *surface.borrow_mut() = Some(Box::new(s));
                }
                Err(e) => log::error!("❌ No se pudo montar la superficie GL: {}", e),
            }
        });
    }

    // ---- Merge de dimensiones: estilo + superficie + rect no-vacío --------
    {
        let viewport = viewport.clone();
        let surface = surface.clone();
        let on_resize = props.on_resize.clone();
        use_effect_with(
            ((*rect.value), *phase, (*style_object).clone()),
            move |(rect, phase, style)| {
                if !phase.is_surface_ready() || style.is_none() {
                    return;
                }
                let Some(rect) = rect else {
                    return;
                };
                if rect.is_empty() {
                    // Contenedor sin layout: se conservan las dimensiones previas
                    return;
                }
                viewport.set((*viewport).resized(rect));
                if let Some(s) = surface.borrow_mut().as_mut() {
                    s.resize();
                }
                on_resize.emit(*rect);
            },
        );
    }

    // ---- Manija imperativa ------------------------------------------------
    {
        let viewport = viewport.clone();
        let surface = surface.clone();
        use_effect_with(props.handle.clone(), move |handle| {
            if let Some(handle) = handle {
                let setter = Callback::from(move |next: Viewport| {
                    viewport.set(next);
                    if let Some(s) = surface.borrow_mut().as_mut() {
                        if let Err(e) = s.jump_to(&next) {
                            log::error!("❌ Error aplicando viewport imperativo: {}", e);
                        }
                    }
                });
                handle.install(setter);
            }
            let handle = handle.clone();
            move || {
                if let Some(handle) = handle {
                    handle.release();
                }
            }
        });
    }

    // ---- Desmontaje de la superficie --------------------------------------
    {
        let surface = surface.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(mut s) = surface.borrow_mut().take() {
                    s.destroy();
                }
            }
        });
    }

    html! {
        <div
            class="map-view"
            style="position: relative; width: 100%; height: 100%; overflow: hidden;"
            ref={container_ref}
        >
            { props.children.clone() }
            { props.popup_node.clone().unwrap_or_default() }
        </div>
    }
}
