// ============================================================================
// USE DEBOUNCE HOOKS - Estado y callback con ventana de quietud
// ============================================================================
// Hooks nativos de Yew sobre utils::debounce::Debouncer
// ============================================================================

use yew::prelude::*;

use crate::utils::debounce::Debouncer;

/// Handle del hook: el valor estable más el setter debounced.
pub struct UseDebounceHandle<T: 'static> {
    pub value: UseStateHandle<T>,
    pub set: Callback<T>,
}

impl<T: 'static> Clone for UseDebounceHandle<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            set: self.set.clone(),
        }
    }
}

/// Estado debounced: `set` programa el valor y solo el último de una ráfaga
/// llega a `value`, tras `delay_ms` de quietud.
#[hook]
pub fn use_debounce<T: Clone + 'static>(init: T, delay_ms: u32) -> UseDebounceHandle<T> {
    let value = use_state(|| init);

    let debouncer = {
        let value = value.clone();
        use_mut_ref(move || Debouncer::new(delay_ms, move |v: T| value.set(v)))
    };

    let set = {
        let debouncer = debouncer.clone();
        Callback::from(move |v: T| debouncer.borrow().push(v))
    };

    // Un valor todavía en vuelo no debe aterrizar tras el desmontaje
    {
        let debouncer = debouncer.clone();
        use_effect_with((), move |_| move || debouncer.borrow().cancel());
    }

    UseDebounceHandle { value, set }
}

/// Callback debounced: ráfagas de `emit` colapsan en una sola invocación del
/// callback externo con el último valor.
#[hook]
pub fn use_debounce_callback<T: Clone + 'static>(callback: Callback<T>, delay_ms: u32) -> Callback<T> {
    // Siempre emitir hacia el callback del render más reciente
    let latest = use_mut_ref(|| callback.clone());
    *latest.borrow_mut() = callback;

    let debouncer = {
        let latest = latest.clone();
        use_mut_ref(move || Debouncer::new(delay_ms, move |v: T| latest.borrow().emit(v)))
    };

    {
        let debouncer = debouncer.clone();
        use_effect_with((), move |_| move || debouncer.borrow().cancel());
    }

    Callback::from(move |v: T| debouncer.borrow().push(v))
}
