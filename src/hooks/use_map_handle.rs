use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::Viewport;

/// Manija imperativa del `MapView`: permite a un dueño externo forzar un
/// viewport nuevo, reemplazando el estado interno de inmediato y sin pasar
/// por el debounce de notificación.
///
/// El dueño la crea (p. ej. con `use_map_view_handle`) y se la pasa al
/// componente por props; el componente instala su setter al montarse.
#[derive(Clone, Default)]
pub struct MapViewHandle {
    setter: Rc<RefCell<Option<Callback<Viewport>>>>,
}

impl PartialEq for MapViewHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.setter, &other.setter)
    }
}

impl MapViewHandle {
    pub fn set_viewport(&self, viewport: Viewport) {
        match &*self.setter.borrow() {
            Some(setter) => setter.emit(viewport),
            None => log::warn!("⚠️ MapViewHandle: set_viewport antes de montar el MapView"),
        }
    }

    pub(crate) fn install(&self, setter: Callback<Viewport>) {
        *self.setter.borrow_mut() = Some(setter);
    }

    pub(crate) fn release(&self) {
        *self.setter.borrow_mut() = None;
    }
}

#[hook]
pub fn use_map_view_handle() -> MapViewHandle {
    (*use_memo((), |_| MapViewHandle::default())).clone()
}
