// ============================================================================
// DEBOUNCE - Primitiva temporal única del componente
// ============================================================================
// Colapsa ráfagas de valores al último de la ráfaga: el sink solo se invoca
// cuando la entrada estuvo quieta durante la ventana completa.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Debouncer de un solo valor sobre `gloo_timers::Timeout`.
///
/// Cada `push` reemplaza el timeout pendiente (soltarlo lo cancela), de modo
/// que dentro de una ventana gana siempre la última escritura, venga de la
/// fuente que venga.
pub struct Debouncer<T: 'static> {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
    sink: Rc<dyn Fn(T)>,
}

impl<T: 'static> Debouncer<T> {
    pub fn new(delay_ms: u32, sink: impl Fn(T) + 'static) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
            sink: Rc::new(sink),
        }
    }

    /// Programa `value` para emisión tras la ventana de quietud; descarta
    /// cualquier valor previo aún no emitido.
    pub fn push(&self, value: T) {
        let sink = self.sink.clone();
        let timeout = Timeout::new(self.delay_ms, move || sink(value));
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Cancela la emisión pendiente (desmontaje del componente).
    pub fn cancel(&self) {
        *self.pending.borrow_mut() = None;
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

impl<T: 'static> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            delay_ms: self.delay_ms,
            pending: self.pending.clone(),
            sink: self.sink.clone(),
        }
    }
}
