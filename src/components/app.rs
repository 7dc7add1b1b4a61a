use yew::prelude::*;

use crate::components::MapView;
use crate::config::CONFIG;
use crate::models::Viewport;

/// Shell de demostración: un MapView a pantalla completa cuyo viewport vive
/// en el padre y se realimenta vía on_viewport_change.
#[function_component(App)]
pub fn app() -> Html {
    let viewport = use_state(|| CONFIG.map.initial_viewport());

    let on_viewport_change = {
        let viewport = viewport.clone();
        Callback::from(move |next: Viewport| viewport.set(next))
    };

    html! {
        <MapView viewport={Some(*viewport)} {on_viewport_change} />
    }
}
