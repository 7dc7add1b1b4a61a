//! Propiedades temporales del debouncer (requieren el event loop del
//! navegador; se ejecutan con wasm-pack test).

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use carto_view::utils::debounce::Debouncer;

wasm_bindgen_test_configure!(run_in_browser);

fn collecting_debouncer(delay_ms: u32) -> (Debouncer<i32>, Rc<RefCell<Vec<i32>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let debouncer = Debouncer::new(delay_ms, {
        let seen = seen.clone();
        move |value: i32| seen.borrow_mut().push(value)
    });
    (debouncer, seen)
}

#[wasm_bindgen_test]
async fn a_burst_collapses_to_the_last_value() {
    let (debouncer, seen) = collecting_debouncer(50);

    debouncer.push(1);
    debouncer.push(2);
    debouncer.push(3);

    TimeoutFuture::new(150).await;
    assert_eq!(*seen.borrow(), vec![3]);
}

#[wasm_bindgen_test]
async fn separate_quiet_windows_emit_separately() {
    let (debouncer, seen) = collecting_debouncer(50);

    debouncer.push(10);
    TimeoutFuture::new(150).await;
    debouncer.push(20);
    TimeoutFuture::new(150).await;

    assert_eq!(*seen.borrow(), vec![10, 20]);
}

#[wasm_bindgen_test]
async fn writes_within_the_window_reset_it() {
    let (debouncer, seen) = collecting_debouncer(100);

    // Tres escrituras separadas 50 ms: ninguna ventana de 100 ms se completa
    // hasta después de la última
    debouncer.push(1);
    TimeoutFuture::new(50).await;
    debouncer.push(2);
    TimeoutFuture::new(50).await;
    debouncer.push(3);

    assert!(seen.borrow().is_empty());
    TimeoutFuture::new(200).await;
    assert_eq!(*seen.borrow(), vec![3]);
}

#[wasm_bindgen_test]
async fn cancel_suppresses_the_pending_value() {
    let (debouncer, seen) = collecting_debouncer(50);

    debouncer.push(99);
    debouncer.cancel();

    TimeoutFuture::new(150).await;
    assert!(seen.borrow().is_empty());
}
